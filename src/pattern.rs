//! 패턴 매칭 모듈
//!
//! 정규식을 사용한 접속 파라미터 파일 이름 해석과
//! `MML_<NAME> = <value>` 파라미터 라인 추출을 담당합니다.

use regex::Regex;

use crate::error::{ConfigGenError, Result};

/// 접속 파라미터 파일 이름 패턴
///
/// `<System>_<Gateway>_connection_params[.<version>].txt`
pub const FILE_NAME_PATTERN: &str =
    r"^(?P<system>[^_]+)_(?P<gateway>.+?)_connection_params(?:\.(?P<version>[^.]+))?\.txt$";

/// 파라미터 라인 패턴 (라인 어디에서든 매칭)
pub const PARAM_LINE_PATTERN: &str = r"(?P<key>MML_[\w_]+)\s*=\s*(?P<val>.+)";

/// 파일 이름에서 추출한 식별 토큰
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTokens {
    /// 첫 번째 밑줄 앞까지의 시스템 이름
    pub system: String,
    /// `_connection_params` 앞까지의 게이트웨이 이름
    pub gateway: String,
    /// 선택적 버전 접미사 (그룹화에는 사용하지 않음)
    pub version: Option<String>,
}

/// 컴파일된 패턴 매처
#[derive(Debug, Clone)]
pub struct PatternMatcher {
    file_name: Regex,
    param_line: Regex,
}

impl PatternMatcher {
    /// 새 패턴 매처 생성
    ///
    /// # Examples
    /// ```
    /// use rithmic_config::pattern::PatternMatcher;
    ///
    /// let matcher = PatternMatcher::new().unwrap();
    /// let tokens = matcher.parse_file_name("Rithmic 01_Chicago Area_connection_params.txt").unwrap();
    /// assert_eq!(tokens.system, "Rithmic 01");
    /// assert_eq!(tokens.gateway, "Chicago Area");
    /// assert!(matcher.parse_file_name("readme.txt").is_none());
    /// ```
    pub fn new() -> Result<Self> {
        Ok(Self {
            file_name: compile(FILE_NAME_PATTERN)?,
            param_line: compile(PARAM_LINE_PATTERN)?,
        })
    }

    /// 파일 이름을 해석하여 시스템/게이트웨이 토큰 반환
    ///
    /// # Returns
    /// 이름 규칙과 일치하지 않으면 `None`
    pub fn parse_file_name(&self, file_name: &str) -> Option<FileTokens> {
        let caps = self.file_name.captures(file_name)?;
        Some(FileTokens {
            system: caps["system"].to_string(),
            gateway: caps["gateway"].to_string(),
            version: caps.name("version").map(|m| m.as_str().to_string()),
        })
    }

    /// 파일 이름이 이름 규칙과 일치하는지 확인
    pub fn matches(&self, file_name: &str) -> bool {
        self.file_name.is_match(file_name)
    }

    /// 한 라인에서 `(키, 값)` 추출
    ///
    /// 값의 앞뒤 공백은 제거됩니다. 패턴과 맞지 않는 라인은 `None`입니다.
    pub fn parse_param_line(&self, line: &str) -> Option<(String, String)> {
        let caps = self.param_line.captures(line)?;
        Some((caps["key"].to_string(), caps["val"].trim().to_string()))
    }
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| ConfigGenError::InvalidPattern {
        pattern: pattern.to_string(),
        reason: e.to_string(),
    })
}
