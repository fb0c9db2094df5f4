//! Core runtime configuration.
//!
//! This module defines configuration that is resolved once at process startup and then passed
//! into the engine. Environment variables are never read during request handling; binaries read
//! them at startup and hand the raw values to the helpers here.

use crate::{EngineError, EngineResult};
use knowledge::KnowledgeBase;
use std::path::PathBuf;

/// Core configuration resolved at startup.
#[derive(Clone, Debug, Default)]
pub struct CoreConfig {
    knowledge_base_path: Option<PathBuf>,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// # Arguments
    ///
    /// * `knowledge_base_path` - Optional knowledge base YAML file. `None` selects the embedded
    ///   default dataset.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::Config` if a path is given but is not an existing file.
    pub fn new(knowledge_base_path: Option<PathBuf>) -> EngineResult<Self> {
        if let Some(path) = &knowledge_base_path {
            if !path.is_file() {
                return Err(EngineError::Config(format!(
                    "knowledge base file does not exist: {}",
                    path.display()
                )));
            }
        }

        Ok(Self {
            knowledge_base_path,
        })
    }

    /// Build the knowledge base this configuration points at.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::Knowledge` if the file cannot be read or fails validation.
    pub fn load_knowledge_base(&self) -> EngineResult<KnowledgeBase> {
        let kb = match &self.knowledge_base_path {
            Some(path) => KnowledgeBase::load(path)?,
            None => {
                tracing::info!("using embedded knowledge base");
                KnowledgeBase::builtin()?
            }
        };
        Ok(kb)
    }
}

/// Parse the knowledge base path from an optional environment value.
///
/// If `value` is `None` or empty/whitespace, returns `None` (embedded dataset).
pub fn knowledge_base_path_from_env_value(value: Option<String>) -> Option<PathBuf> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_env_value_selects_embedded_dataset() {
        assert_eq!(knowledge_base_path_from_env_value(None), None);
        assert_eq!(knowledge_base_path_from_env_value(Some("   ".into())), None);
        assert_eq!(
            knowledge_base_path_from_env_value(Some(" /etc/kb.yaml ".into())),
            Some(PathBuf::from("/etc/kb.yaml"))
        );
    }

    #[test]
    fn default_config_loads_builtin_dataset() {
        let cfg = CoreConfig::new(None).expect("no path is valid");
        let kb = cfg.load_knowledge_base().expect("builtin loads");
        assert!(kb.summary().interactions > 0);
    }

    #[test]
    fn rejects_missing_knowledge_base_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = CoreConfig::new(Some(dir.path().join("nope.yaml"))).expect_err("missing");
        assert!(matches!(err, EngineError::Config(msg) if msg.contains("does not exist")));
    }

    #[test]
    fn loads_knowledge_base_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "dosage_rules:\n  - medicine: Aspirin\n    age_band: pediatric\n    \
             recommendation: Avoid\n"
        )
        .unwrap();

        let cfg = CoreConfig::new(Some(file.path().to_path_buf())).unwrap();
        let kb = cfg.load_knowledge_base().unwrap();
        assert_eq!(kb.summary().dosage_rules, 1);
        assert_eq!(kb.summary().interactions, 0);
    }

    #[test]
    fn surfaces_invalid_knowledge_base_content() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "interactions: 42\n").unwrap();

        let cfg = CoreConfig::new(Some(file.path().to_path_buf())).unwrap();
        let err = cfg.load_knowledge_base().expect_err("schema mismatch");
        assert!(matches!(err, EngineError::Knowledge(_)));
    }
}
