//! Rate table loading from data files

use std::path::Path;

use tracing::debug;

use super::types::RateTable;
use crate::utils::error::{EngineError, Result};

impl RateTable {
    /// Parse a rate table from a JSON string
    pub fn from_json_str(content: &str) -> Result<Self> {
        let table: RateTable = serde_json::from_str(content)?;
        table.validate()?;
        debug!("Loaded {} rate entries from JSON", table.len());
        Ok(table)
    }

    /// Parse a rate table from a YAML string
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let table: RateTable = serde_yaml::from_str(content)?;
        table.validate()?;
        debug!("Loaded {} rate entries from YAML", table.len());
        Ok(table)
    }

    /// Load a rate table from a file, dispatching on the extension
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path).await?;

        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json_str(&content),
            Some("yaml") | Some("yml") => Self::from_yaml_str(&content),
            other => Err(EngineError::config(format!(
                "Unsupported rate table format: {:?}",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::super::defaults::builtin;
    use super::*;

    #[test]
    fn test_json_roundtrip() {
        let json = serde_json::to_string(&*builtin()).unwrap();
        let table = RateTable::from_json_str(&json).unwrap();
        assert_eq!(table.len(), builtin().len());
        assert_eq!(table.version, builtin().version);
    }

    #[test]
    fn test_yaml_roundtrip() {
        let yaml = serde_yaml::to_string(&*builtin()).unwrap();
        let table = RateTable::from_yaml_str(&yaml).unwrap();
        let whisper = table.lookup("whisper-1").unwrap();
        assert_eq!(whisper.audio_input_price_per_minute, Some(0.006));
    }

    #[test]
    fn test_invalid_entry_rejected_on_load() {
        let yaml = r#"
version: "test"
updated_at: "2025-06-01T00:00:00Z"
models:
  broken:
    model: broken
"#;
        assert!(RateTable::from_yaml_str(yaml).is_err());
    }

    #[tokio::test]
    async fn test_from_file_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rates.yaml");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(serde_yaml::to_string(&*builtin()).unwrap().as_bytes())
            .unwrap();

        let table = RateTable::from_file(&path).await.unwrap();
        assert!(table.lookup("gpt-4o-realtime-preview").is_ok());
    }

    #[tokio::test]
    async fn test_from_file_unknown_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rates.toml");
        std::fs::write(&path, "version = \"x\"").unwrap();

        let result = RateTable::from_file(&path).await;
        assert!(matches!(result, Err(EngineError::Config(_))));
    }
}
