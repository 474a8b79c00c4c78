//! 직렬화 및 출력 모듈
//!
//! 정렬된 설정을 2칸 들여쓰기 JSON으로 직렬화하고,
//! Base64로 인코딩하여 출력 파일에 저장합니다.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::Serialize;
use serde_json::ser::{Formatter, PrettyFormatter};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::error::{ConfigGenError, Result};
use crate::model::SystemConfigs;

/// 2칸 들여쓰기 + 비ASCII 문자를 `\uXXXX`로 이스케이프하는 포매터
///
/// BMP 밖의 문자는 UTF-16 서로게이트 쌍으로 씁니다. 출력은 항상 ASCII입니다.
pub struct AsciiPrettyFormatter {
    inner: PrettyFormatter<'static>,
}

impl AsciiPrettyFormatter {
    pub fn new() -> Self {
        Self {
            inner: PrettyFormatter::with_indent(b"  "),
        }
    }
}

impl Default for AsciiPrettyFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter for AsciiPrettyFormatter {
    fn begin_array<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_array(writer)
    }

    fn end_array<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_array(writer)
    }

    fn begin_array_value<W: ?Sized + Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.inner.begin_array_value(writer, first)
    }

    fn end_array_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_array_value(writer)
    }

    fn begin_object<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_object(writer)
    }

    fn end_object<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_object(writer)
    }

    fn begin_object_key<W: ?Sized + Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.inner.begin_object_key(writer, first)
    }

    fn begin_object_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_object_value(writer)
    }

    fn end_object_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_object_value(writer)
    }

    fn write_string_fragment<W: ?Sized + Write>(
        &mut self,
        writer: &mut W,
        fragment: &str,
    ) -> io::Result<()> {
        let bytes = fragment.as_bytes();
        let mut start = 0;

        for (i, ch) in fragment.char_indices() {
            if ch.is_ascii() {
                continue;
            }
            writer.write_all(&bytes[start..i])?;
            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units) {
                write!(writer, "\\u{:04x}", unit)?;
            }
            start = i + ch.len_utf8();
        }

        writer.write_all(&bytes[start..])
    }
}

/// 설정을 2칸 들여쓰기 JSON 문자열로 직렬화
///
/// 비ASCII 문자는 `\u00fc`처럼 이스케이프되어 출력 바이트가 항상 ASCII입니다.
pub fn render_json(configs: &SystemConfigs) -> Result<String> {
    let serialize_error = |reason: String| ConfigGenError::SerializeError { reason };

    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, AsciiPrettyFormatter::new());
    configs
        .serialize(&mut serializer)
        .map_err(|e| serialize_error(e.to_string()))?;

    String::from_utf8(buf).map_err(|e| serialize_error(e.to_string()))
}

/// JSON 텍스트의 UTF-8 바이트를 표준 Base64 알파벳으로 인코딩
///
/// # Examples
/// ```
/// use rithmic_config::encoder::encode_base64;
///
/// assert_eq!(encode_base64("{}"), "e30=");
/// ```
pub fn encode_base64(json: &str) -> String {
    STANDARD.encode(json.as_bytes())
}

/// 설정을 JSON → Base64로 변환하여 출력 파일에 저장
///
/// 기존 파일은 확인 없이 덮어씁니다.
///
/// # Returns
/// 기록한 바이트 수
pub fn write_config(path: &Path, configs: &SystemConfigs) -> Result<u64> {
    let encoded = encode_base64(&render_json(configs)?);

    let write_error = |e: std::io::Error| ConfigGenError::WriteError {
        path: path.to_path_buf(),
        reason: e.to_string(),
    };

    let file = File::create(path).map_err(write_error)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(encoded.as_bytes()).map_err(write_error)?;
    writer.flush().map_err(write_error)?;

    Ok(encoded.len() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ParameterSet;
    use base64::{engine::general_purpose::STANDARD, Engine as _};
    use tempfile::TempDir;

    fn sample_configs() -> SystemConfigs {
        let mut params = ParameterSet::new();
        params.insert("MML_DOMAIN_NAME".to_string(), "acme.domain".to_string());

        let mut configs = SystemConfigs::new();
        configs.merge("Acme", "NY", params);
        configs
    }

    #[test]
    fn test_render_json_two_space_indent() {
        let json = render_json(&sample_configs()).unwrap();
        let expected = "{\n  \"Acme\": {\n    \"NY\": {\n      \"MML_DOMAIN_NAME\": \"acme.domain\"\n    }\n  }\n}";
        assert_eq!(json, expected);
    }

    #[test]
    fn test_render_json_escapes_non_ascii() {
        let mut params = ParameterSet::new();
        params.insert("MML_DOMAIN_NAME".to_string(), "caf\u{e9} \u{1f680}".to_string());
        let mut configs = SystemConfigs::new();
        configs.merge("Acme", "Z\u{fc}rich", params);

        let json = render_json(&configs).unwrap();

        assert!(json.is_ascii());
        assert!(json.contains(r#""Z\u00fcrich": {"#));
        assert!(json.contains(r#""caf\u00e9 \ud83d\ude80""#));
        let parsed: SystemConfigs = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, configs);
    }

    #[test]
    fn test_render_keeps_standard_escapes() {
        let mut params = ParameterSet::new();
        params.insert("MML_A".to_string(), "quote\" back\\slash".to_string());
        let mut configs = SystemConfigs::new();
        configs.merge("Acme", "NY", params);

        let json = render_json(&configs).unwrap();
        assert!(json.contains(r#""quote\" back\\slash""#));
    }

    #[test]
    fn test_render_empty_configs() {
        assert_eq!(render_json(&SystemConfigs::new()).unwrap(), "{}");
    }

    #[test]
    fn test_encode_has_no_line_breaks() {
        let long = "x".repeat(1000);
        let encoded = encode_base64(&long);
        assert!(!encoded.contains('\n'));
        assert_eq!(STANDARD.decode(&encoded).unwrap(), long.as_bytes());
    }

    #[test]
    fn test_write_config_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("rithmic.bin");
        std::fs::write(&path, "stale contents that are longer than the new output").unwrap();

        let written = write_config(&path, &SystemConfigs::new()).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "e30=");
        assert_eq!(written, 4);
    }

    #[test]
    fn test_write_config_to_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing").join("rithmic.bin");

        let result = write_config(&path, &sample_configs());
        assert!(matches!(result, Err(ConfigGenError::WriteError { .. })));
    }
}
