//! 설정 로더 및 서버 카탈로그 모듈
//!
//! 생성된 `.bin` 파일을 다시 읽어 [`SystemConfigs`]로 복원하고,
//! `<system>_<gateway>` 이름으로 Rithmic 접속 환경 변수 목록을 조회합니다.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use indexmap::IndexMap;
use std::path::Path;

use crate::error::{ConfigGenError, Result};
use crate::model::{ParameterSet, SystemConfigs};

/// Base64 인코딩된 설정 바이트를 디코딩
///
/// 앞뒤 공백(개행 포함)은 무시합니다. 문서의 키 순서는 그대로 유지됩니다.
pub fn decode_config(bytes: &[u8]) -> Result<SystemConfigs> {
    let decoded = STANDARD
        .decode(bytes.trim_ascii())
        .map_err(|e| ConfigGenError::Base64Error {
            reason: e.to_string(),
        })?;

    let json = String::from_utf8(decoded).map_err(|e| ConfigGenError::ParseError {
        reason: e.to_string(),
    })?;

    serde_json::from_str(&json).map_err(|e| ConfigGenError::ParseError {
        reason: e.to_string(),
    })
}

/// `.bin` 설정 파일을 읽어 디코딩
pub fn load_config(path: &Path) -> Result<SystemConfigs> {
    let bytes = std::fs::read(path).map_err(|e| ConfigGenError::FileOpenError {
        file: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    decode_config(&bytes)
}

/// 단일 서버(시스템/게이트웨이)의 Rithmic 접속 파라미터
///
/// 설정에 없는 값은 Rithmic 테스트(UAT) 서버 값으로 채워집니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerInfo {
    pub dmn_srvr_addr: String,
    pub domain_name: String,
    pub lic_srvr_addr: String,
    pub loc_brok_addr: String,
    pub logger_addr: String,
    pub log_type: String,
    pub ssl_clnt_auth_file: String,
}

impl Default for ServerInfo {
    fn default() -> Self {
        Self {
            dmn_srvr_addr: "rituz00100.00.rithmic.com:65000~rituz00100.00.rithmic.net:65000~rituz00100.00.theomne.net:65000~rituz00100.00.theomne.com:65000".to_string(),
            domain_name: "rithmic_uat_dmz_domain".to_string(),
            lic_srvr_addr: "rituz00100.00.rithmic.com:56000~rituz00100.00.rithmic.net:56000~rituz00100.00.theomne.net:56000~rituz00100.00.theomne.com:56000".to_string(),
            loc_brok_addr: "rituz00100.00.rithmic.com:64100".to_string(),
            logger_addr: "rituz00100.00.rithmic.com:45454~rituz00100.00.rithmic.net:45454~rituz00100.00.theomne.com:45454~rituz00100.00.theomne.net:45454".to_string(),
            log_type: "log_net".to_string(),
            ssl_clnt_auth_file: crate::model::SSL_CLNT_AUTH_FILE_VALUE.to_string(),
        }
    }
}

impl ServerInfo {
    /// 파라미터 집합에서 생성 (알 수 없는 키는 무시)
    pub fn from_params(params: &ParameterSet) -> Self {
        let mut info = Self::default();
        for (key, value) in params {
            if let Some(slot) = info.slot_mut(key) {
                *slot = value.clone();
            }
        }
        info
    }

    fn slot_mut(&mut self, key: &str) -> Option<&mut String> {
        let slot = match key {
            "MML_DMN_SRVR_ADDR" => &mut self.dmn_srvr_addr,
            "MML_DOMAIN_NAME" => &mut self.domain_name,
            "MML_LIC_SRVR_ADDR" => &mut self.lic_srvr_addr,
            "MML_LOC_BROK_ADDR" => &mut self.loc_brok_addr,
            "MML_LOGGER_ADDR" => &mut self.logger_addr,
            "MML_LOG_TYPE" => &mut self.log_type,
            "MML_SSL_CLNT_AUTH_FILE" => &mut self.ssl_clnt_auth_file,
            _ => return None,
        };
        Some(slot)
    }

    /// `KEY=value` 형식의 환경 변수 목록 (고정 순서)
    pub fn env_entries(&self) -> Vec<String> {
        [
            ("MML_DMN_SRVR_ADDR", &self.dmn_srvr_addr),
            ("MML_DOMAIN_NAME", &self.domain_name),
            ("MML_LIC_SRVR_ADDR", &self.lic_srvr_addr),
            ("MML_LOC_BROK_ADDR", &self.loc_brok_addr),
            ("MML_LOGGER_ADDR", &self.logger_addr),
            ("MML_LOG_TYPE", &self.log_type),
            ("MML_SSL_CLNT_AUTH_FILE", &self.ssl_clnt_auth_file),
        ]
        .into_iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect()
    }
}

/// `<system>_<gateway>` → [`ServerInfo`] 카탈로그
#[derive(Debug, Clone, Default)]
pub struct ServerCatalog {
    servers: IndexMap<String, ServerInfo>,
    gateways: IndexMap<String, Vec<String>>,
}

impl ServerCatalog {
    /// 디코딩된 설정에서 카탈로그 생성
    pub fn from_configs(configs: &SystemConfigs) -> Self {
        let mut catalog = Self::default();
        for (system, gateways) in configs.iter() {
            for (gateway, params) in gateways {
                catalog
                    .servers
                    .insert(server_name(system, gateway), ServerInfo::from_params(params));
                catalog
                    .gateways
                    .entry(system.clone())
                    .or_default()
                    .push(gateway.clone());
            }
        }
        catalog
    }

    /// 서버 이름으로 조회
    pub fn server(&self, name: &str) -> Result<&ServerInfo> {
        self.servers
            .get(name)
            .ok_or_else(|| ConfigGenError::ServerNotFound {
                name: name.to_string(),
            })
    }

    /// 시스템 이름 목록 (설정 파일 순서)
    pub fn systems(&self) -> impl Iterator<Item = &str> {
        self.gateways.keys().map(String::as_str)
    }

    /// 시스템에 속한 게이트웨이 목록
    pub fn gateways(&self, system: &str) -> &[String] {
        self.gateways.get(system).map(Vec::as_slice).unwrap_or(&[])
    }

    /// 등록된 서버 수
    pub fn len(&self) -> usize {
        self.servers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.servers.is_empty()
    }
}

/// 카탈로그 키 생성: `<system>_<gateway>`
pub fn server_name(system: &str, gateway: &str) -> String {
    format!("{}_{}", system, gateway)
}
