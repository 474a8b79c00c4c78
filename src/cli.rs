//! CLI 인자 파싱 모듈
//!
//! clap을 사용한 명령줄 인자 정의 및 파싱을 담당합니다.

use clap::Parser;
use std::path::PathBuf;

/// 기본 출력 파일 이름
pub const DEFAULT_OUTPUT: &str = "rithmic.bin";

/// rithmic-config CLI 인자 구조체
#[derive(Parser, Debug)]
#[command(
    name = "rithmic-config",
    author = "YourName <your@email.com>",
    version,
    about = "Rithmic 접속 파라미터(.txt) 파일들을 파싱하여 Base64 인코딩된 JSON(.bin) 파일로 저장합니다",
    long_about = r#"
RITHMIC CONNECTION PARAMS TO BASE64 JSON
========================================

지정된 폴더(하위 폴더 포함)에서 다음 이름 규칙을 따르는 파일을 찾습니다:

  <System>_<Gateway>_connection_params[.<version>].txt

각 파일의 MML_* 파라미터를 추출하여 { system: { gateway: { ... } } }
형태의 JSON으로 묶고, Base64로 인코딩하여 출력 파일에 저장합니다.
MML_SSL_CLNT_AUTH_FILE 값은 항상 rithmic_ssl_cert_auth_params로 고정됩니다.

예제:
  rithmic-config ./connection_params
  rithmic-config ./connection_params -o configs/rithmic.bin
"#
)]
pub struct Args {
    /// 접속 파라미터 .txt 파일들이 있는 루트 폴더 경로
    pub folder: PathBuf,

    /// Base64 인코딩된 설정을 저장할 파일 경로 (기본값: rithmic.bin)
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,
}
