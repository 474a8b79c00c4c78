//! 접속 파라미터 파일 탐색 및 파싱 모듈
//!
//! 루트 폴더를 재귀적으로 탐색하여 이름 규칙과 일치하는 파일을 찾고,
//! 각 파일의 `MML_*` 파라미터를 읽어 [`SystemConfigs`]로 병합합니다.

use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

use crate::error::{ConfigGenError, Result};
use crate::model::{
    ParameterSet, SystemConfigs, SSL_CLNT_AUTH_FILE_KEY, SSL_CLNT_AUTH_FILE_VALUE,
};
use crate::pattern::{FileTokens, PatternMatcher};
use crate::stats::ScanReport;

/// 이름 규칙과 일치한 접속 파라미터 파일
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionFile {
    /// 파일 경로
    pub path: PathBuf,
    /// 파일 이름에서 추출한 토큰
    pub tokens: FileTokens,
}

/// 루트 폴더 아래의 접속 파라미터 파일 수집
///
/// 디렉토리 항목은 파일 이름순으로 방문하므로 결과 순서가 플랫폼과 무관하게 결정적입니다.
/// 이름 규칙과 맞지 않는 파일은 조용히 건너뜁니다.
pub fn collect_connection_files(
    root: &Path,
    matcher: &PatternMatcher,
    report: &mut ScanReport,
) -> Result<Vec<ConnectionFile>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|e| ConfigGenError::WalkError {
            path: e.path().unwrap_or(root).to_path_buf(),
            reason: e.to_string(),
        })?;

        // 디렉토리(링크 포함)만 제외, 깨진 링크는 열 때 실패하도록 남김
        if entry.file_type().is_dir() || entry.path().is_dir() {
            continue;
        }
        report.files_visited += 1;

        let tokens = match entry.file_name().to_str() {
            Some(name) => matcher.parse_file_name(name),
            None => None,
        };

        if let Some(tokens) = tokens {
            report.files_matched += 1;
            files.push(ConnectionFile {
                path: entry.into_path(),
                tokens,
            });
        }
    }

    Ok(files)
}

/// 파라미터 파일을 UTF-8 텍스트로 읽기
pub fn read_text(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|e| ConfigGenError::FileOpenError {
        file: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    String::from_utf8(bytes).map_err(|e| ConfigGenError::DecodeError {
        file: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// 텍스트에서 파라미터 추출
///
/// `\r\n`, `\r`, `\n` 모두 줄바꿈으로 취급합니다. 같은 키가 여러 번 나오면
/// 마지막 값이 우선하며, `MML_SSL_CLNT_AUTH_FILE`은 항상 고정 값으로 설정됩니다.
pub fn parse_params(text: &str, matcher: &PatternMatcher) -> ParameterSet {
    let mut params = ParameterSet::new();
    for line in text.split(&['\r', '\n'][..]) {
        if let Some((key, value)) = matcher.parse_param_line(line) {
            params.insert(key, value);
        }
    }

    params.insert(
        SSL_CLNT_AUTH_FILE_KEY.to_string(),
        SSL_CLNT_AUTH_FILE_VALUE.to_string(),
    );

    params
}

/// 단일 접속 파라미터 파일 파싱
pub fn parse_connection_file(path: &Path, matcher: &PatternMatcher) -> Result<ParameterSet> {
    Ok(parse_params(&read_text(path)?, matcher))
}

/// 루트 폴더 전체를 파싱하여 병합된 설정 반환
///
/// 같은 시스템/게이트웨이에 해당하는 파일이 여러 개면 키 단위로 병합되며,
/// 나중에 방문한 파일의 값이 우선합니다.
pub fn scan_folder(root: &Path, report: &mut ScanReport) -> Result<SystemConfigs> {
    let matcher = PatternMatcher::new()?;
    let files = collect_connection_files(root, &matcher, report)?;

    let mut configs = SystemConfigs::new();
    for file in files {
        let text = read_text(&file.path)?;
        report.bytes_read += text.len() as u64;
        let params = parse_params(&text, &matcher);
        // 강제 설정 키는 제외
        report.params_read += params.len() - 1;

        debug!(
            path = %file.path.display(),
            system = %file.tokens.system,
            gateway = %file.tokens.gateway,
            params = params.len(),
            "접속 파라미터 파일 파싱"
        );

        configs.merge(&file.tokens.system, &file.tokens.gateway, params);
    }

    Ok(configs)
}
