//! 변환 파이프라인 모듈
//!
//! 입력 확인 → 탐색/파싱 → 시스템 정렬 → JSON/Base64 저장을 한 번에 수행합니다.

use std::path::Path;
use tracing::debug;

use crate::encoder::write_config;
use crate::error::{ConfigGenError, Result};
use crate::model::SystemConfigs;
use crate::scanner::scan_folder;
use crate::stats::ScanReport;

/// 입력 경로 유효성 검사
pub fn validate_input(folder: &Path) -> Result<()> {
    if !folder.exists() {
        return Err(ConfigGenError::InputNotFound {
            path: folder.to_path_buf(),
        });
    }

    if !folder.is_dir() {
        return Err(ConfigGenError::NotADirectory {
            path: folder.to_path_buf(),
        });
    }

    Ok(())
}

/// 폴더를 파싱하여 시스템 순서가 정렬된 설정 반환
pub fn build_configs(folder: &Path, report: &mut ScanReport) -> Result<SystemConfigs> {
    validate_input(folder)?;
    let configs = scan_folder(folder, report)?;
    Ok(configs.reordered())
}

/// 전체 변환 실행
///
/// # Returns
/// 실행 통계 (`systems_written`에 저장된 시스템 수)
pub fn generate(folder: &Path, output: &Path) -> Result<ScanReport> {
    let mut report = ScanReport::new();

    let configs = build_configs(folder, &mut report)?;
    debug!(systems = configs.len(), output = %output.display(), "설정 저장 시작");

    report.bytes_written = write_config(output, &configs)?;
    report.systems_written = configs.len();
    report.log_summary();

    Ok(report)
}
