//! YAML parsing with source-annotated errors

pub mod diagnostics;

pub use diagnostics::{YamlError, YamlSyntaxError};

use serde::de::DeserializeOwned;

/// Parse YAML text, attributing errors to `filename`
pub fn parse_yaml_str<T: DeserializeOwned>(content: &str, filename: &str) -> Result<T, YamlError> {
    serde_yml::from_str(content)
        .map_err(|e| YamlSyntaxError::from_serde_error(&e, content, filename).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, serde::Deserialize)]
    struct Sample {
        name: String,
    }

    #[test]
    fn test_parse_yaml_str_ok() {
        let sample: Sample = parse_yaml_str("name: C-001\n", "sample.yaml").unwrap();
        assert_eq!(sample.name, "C-001");
    }

    #[test]
    fn test_parse_yaml_str_reports_message() {
        let err = parse_yaml_str::<Sample>("other: 1\n", "sample.yaml").unwrap_err();
        let YamlError::Syntax(syntax) = err;
        assert!(syntax.message().contains("name"));
    }
}
