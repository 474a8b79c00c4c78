//! rithmic-config - RITHMIC CONNECTION PARAMS TO BASE64 JSON
//!
//! 폴더 내 Rithmic 접속 파라미터 파일들을 하나의 Base64 인코딩된 JSON 설정 파일로 변환하는 CLI 도구입니다.
//!
//! # 주요 기능
//!
//! - 📂 **재귀 탐색**: `<System>_<Gateway>_connection_params[.<version>].txt` 파일을 하위 폴더까지 검색
//! - 🔍 **파라미터 추출**: `MML_<NAME> = <value>` 라인만 추출, 나머지 라인은 무시
//! - 🔒 **SSL 키 고정**: `MML_SSL_CLNT_AUTH_FILE`은 항상 `rithmic_ssl_cert_auth_params`
//! - 🔀 **병합**: 같은 시스템/게이트웨이의 파일은 키 단위로 병합 (나중 파일 우선)
//! - 📊 **정렬**: `Rithmic*` 시스템 먼저, 나머지는 그 뒤에 (각각 사전순)
//! - 📦 **출력**: 2칸 들여쓰기 JSON → Base64 → `.bin` 파일
//! - 🔁 **로더**: 생성된 `.bin` 파일을 다시 읽어 서버별 접속 환경 변수 조회
//!
//! # 예제
//!
//! ```bash
//! # 기본 사용법 (rithmic.bin 생성)
//! rithmic-config ./connection_params
//!
//! # 출력 경로 지정
//! rithmic-config ./connection_params -o configs/rithmic.bin
//!
//! # 디버그 로그
//! RUST_LOG=rithmic_config=debug rithmic-config ./connection_params
//! ```

pub mod cli;
pub mod encoder;
pub mod error;
pub mod generator;
pub mod loader;
pub mod logging;
pub mod model;
pub mod pattern;
pub mod scanner;
pub mod stats;

// Re-exports for convenient access
pub use cli::Args;
pub use error::{ConfigGenError, Result};
pub use generator::generate;
pub use loader::{decode_config, load_config, ServerCatalog, ServerInfo};
pub use model::{GatewayConfigs, ParameterSet, SystemConfigs};
pub use pattern::{FileTokens, PatternMatcher};
pub use stats::ScanReport;
