//! 설정 데이터 모델 모듈
//!
//! `{ system: { gateway: { MML_*: value } } }` 형태의 2단계 맵과
//! 시스템 정렬 규칙을 정의합니다.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// 항상 강제로 설정되는 SSL 클라이언트 인증 파일 키
pub const SSL_CLNT_AUTH_FILE_KEY: &str = "MML_SSL_CLNT_AUTH_FILE";

/// `MML_SSL_CLNT_AUTH_FILE`의 고정 값
pub const SSL_CLNT_AUTH_FILE_VALUE: &str = "rithmic_ssl_cert_auth_params";

/// 우선 정렬되는 시스템 이름 접두사
pub const PRIORITY_SYSTEM_PREFIX: &str = "Rithmic";

/// 파라미터 키 -> 값 (삽입 순서 유지)
pub type ParameterSet = IndexMap<String, String>;

/// 게이트웨이 -> 파라미터 집합 (삽입 순서 유지)
pub type GatewayConfigs = IndexMap<String, ParameterSet>;

/// 시스템 -> 게이트웨이 설정 (루트 구조)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SystemConfigs {
    systems: IndexMap<String, GatewayConfigs>,
}

impl SystemConfigs {
    /// 빈 루트 구조 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// `[system][gateway]`에 파라미터 병합
    ///
    /// 경로가 없으면 만들고, 이미 있으면 키 단위로 덮어씁니다
    /// (나중에 병합된 값이 우선).
    pub fn merge(&mut self, system: &str, gateway: &str, params: ParameterSet) {
        let existing = self
            .systems
            .entry(system.to_string())
            .or_default()
            .entry(gateway.to_string())
            .or_default();

        existing.extend(params);
    }

    /// `Rithmic`으로 시작하는 시스템을 먼저(사전순), 나머지를 그 뒤에(사전순) 배치한 새 구조 반환
    ///
    /// 각 시스템 내부의 게이트웨이 순서는 그대로 유지됩니다.
    pub fn reordered(&self) -> Self {
        let mut names: Vec<&String> = self.systems.keys().collect();
        names.sort_by(|a, b| {
            let a_first = a.starts_with(PRIORITY_SYSTEM_PREFIX);
            let b_first = b.starts_with(PRIORITY_SYSTEM_PREFIX);
            b_first.cmp(&a_first).then_with(|| a.cmp(b))
        });

        let systems = names
            .into_iter()
            .map(|name| (name.clone(), self.systems[name].clone()))
            .collect();

        Self { systems }
    }

    /// 시스템 수 반환
    pub fn len(&self) -> usize {
        self.systems.len()
    }

    /// 비어 있는지 확인
    pub fn is_empty(&self) -> bool {
        self.systems.is_empty()
    }

    /// 시스템의 게이트웨이 설정 조회
    pub fn get(&self, system: &str) -> Option<&GatewayConfigs> {
        self.systems.get(system)
    }

    /// 특정 게이트웨이의 파라미터 조회
    pub fn params(&self, system: &str, gateway: &str) -> Option<&ParameterSet> {
        self.systems.get(system)?.get(gateway)
    }

    /// 시스템 이름 순회 (현재 순서)
    pub fn system_names(&self) -> impl Iterator<Item = &str> {
        self.systems.keys().map(String::as_str)
    }

    /// `(시스템, 게이트웨이 설정)` 순회
    pub fn iter(&self) -> impl Iterator<Item = (&String, &GatewayConfigs)> {
        self.systems.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> ParameterSet {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_merge_creates_path() {
        let mut configs = SystemConfigs::new();
        configs.merge("Acme", "NY", params(&[("MML_DOMAIN_NAME", "acme")]));

        assert_eq!(configs.len(), 1);
        assert_eq!(
            configs.params("Acme", "NY").unwrap()["MML_DOMAIN_NAME"],
            "acme"
        );
    }

    #[test]
    fn test_merge_disjoint_keys_is_union() {
        let mut configs = SystemConfigs::new();
        configs.merge("Acme", "NY", params(&[("MML_A", "1")]));
        configs.merge("Acme", "NY", params(&[("MML_B", "2")]));

        let merged = configs.params("Acme", "NY").unwrap();
        assert_eq!(merged.len(), 2);
        assert_eq!(merged["MML_A"], "1");
        assert_eq!(merged["MML_B"], "2");
    }

    #[test]
    fn test_merge_overlapping_key_last_wins() {
        let mut configs = SystemConfigs::new();
        configs.merge("Acme", "NY", params(&[("MML_A", "old"), ("MML_B", "kept")]));
        configs.merge("Acme", "NY", params(&[("MML_A", "new")]));

        let merged = configs.params("Acme", "NY").unwrap();
        assert_eq!(merged["MML_A"], "new");
        assert_eq!(merged["MML_B"], "kept");
    }

    #[test]
    fn test_reordered_priority_prefix_first() {
        let mut configs = SystemConfigs::new();
        for system in ["Zeta", "RithmicB", "Acme", "Rithmic 01", "RithmicA", "rithmic"] {
            configs.merge(system, "GW", params(&[("MML_A", "1")]));
        }

        let ordered = configs.reordered();
        let names: Vec<&str> = ordered.system_names().collect();
        assert_eq!(
            names,
            vec!["Rithmic 01", "RithmicA", "RithmicB", "Acme", "Zeta", "rithmic"]
        );
    }

    #[test]
    fn test_reordered_keeps_gateway_order() {
        let mut configs = SystemConfigs::new();
        configs.merge("Acme", "Zurich", params(&[("MML_A", "1")]));
        configs.merge("Acme", "Amsterdam", params(&[("MML_A", "2")]));

        let ordered = configs.reordered();
        let gateways: Vec<&String> = ordered.get("Acme").unwrap().keys().collect();
        assert_eq!(gateways, vec!["Zurich", "Amsterdam"]);
        assert_eq!(ordered, configs.reordered().reordered());
    }

    #[test]
    fn test_serialize_shape() {
        let mut configs = SystemConfigs::new();
        configs.merge("Acme", "NY", params(&[("MML_A", "1")]));

        let json = serde_json::to_string(&configs).unwrap();
        assert_eq!(json, r#"{"Acme":{"NY":{"MML_A":"1"}}}"#);
    }
}
