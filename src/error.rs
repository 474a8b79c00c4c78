//! 에러 타입 정의 모듈
//!
//! rithmic-config에서 발생할 수 있는 모든 에러 타입을 정의합니다.

use std::path::PathBuf;
use thiserror::Error;

/// rithmic-config에서 발생할 수 있는 에러 타입
#[derive(Error, Debug)]
pub enum ConfigGenError {
    /// 입력 폴더가 존재하지 않음
    #[error("입력 폴더를 찾을 수 없습니다: {path}")]
    InputNotFound { path: PathBuf },

    /// 입력이 폴더가 아님
    #[error("입력 경로가 폴더가 아닙니다: {path}")]
    NotADirectory { path: PathBuf },

    /// 폴더 탐색 실패
    #[error("폴더 탐색 실패 ({path}): {reason}")]
    WalkError { path: PathBuf, reason: String },

    /// 파라미터 파일 열기/읽기 실패
    #[error("파일을 열 수 없습니다 ({file}): {reason}")]
    FileOpenError { file: PathBuf, reason: String },

    /// 텍스트(UTF-8) 디코딩 실패
    #[error("텍스트 디코딩 실패 ({file}): {reason}")]
    DecodeError { file: PathBuf, reason: String },

    /// JSON 직렬화 실패
    #[error("JSON 직렬화 실패: {reason}")]
    SerializeError { reason: String },

    /// 파일 쓰기 실패
    #[error("파일 쓰기 실패 ({path}): {reason}")]
    WriteError { path: PathBuf, reason: String },

    /// 유효하지 않은 정규식 패턴
    #[error("유효하지 않은 패턴 ({pattern}): {reason}")]
    InvalidPattern { pattern: String, reason: String },

    /// Base64 디코딩 실패
    #[error("Base64 디코딩 실패: {reason}")]
    Base64Error { reason: String },

    /// 설정 JSON 파싱 실패
    #[error("설정 JSON 파싱 실패: {reason}")]
    ParseError { reason: String },

    /// 카탈로그에 없는 서버
    #[error("서버를 찾을 수 없습니다: {name}")]
    ServerNotFound { name: String },
}

/// rithmic-config 결과 타입 별칭
pub type Result<T> = std::result::Result<T, ConfigGenError>;
