//! Application configuration.
//!
//! The storage root is the only externally meaningful setting: the durable
//! local deployment keeps records under `data/`, the ephemeral container
//! deployment under the system temp dir. Everything else (district list
//! path, validation rules) has defaults matching the study protocol.

use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Required-field lists and thresholds consulted at submission time.
///
/// The required sets are configuration, not code: a site can tighten or
/// relax them without touching the validators.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ValidationRules {
    /// Baseline fields that must be answered before the first save.
    pub required_baseline_fields: Vec<String>,
    /// Cycle fields that must be answered before each cycle save.
    pub required_cycle_fields: Vec<String>,
    /// Minimum length of the raw patient identifier.
    pub min_patient_id_len: usize,
    /// Whether a cycle needs at least one complete medication row.
    pub require_medications: bool,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            required_baseline_fields: [
                "patient_id",
                "age",
                "date_admitted",
                "education_level",
                "marital_status",
                "income_source",
                "district",
                "initial_diagnosis",
                "immunohisto_present",
                "disease_stage",
                "chemo_cycles_prescribed",
                "regimen_prescribed",
                "treatment_started",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            required_cycle_fields: ["regimen_prescribed", "prescription_date"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            min_patient_id_len: 3,
            require_medications: true,
        }
    }
}

/// Top-level configuration for a capture deployment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Directory holding one `patient_{id}` folder per patient.
    pub storage_root: PathBuf,
    /// Plain-text district reference list, one district per line.
    pub districts_path: PathBuf,
    #[serde(default)]
    pub rules: ValidationRules,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_root: PathBuf::from("data"),
            districts_path: PathBuf::from("assets/districts.txt"),
            rules: ValidationRules::default(),
        }
    }
}

impl Config {
    /// Durable local deployment rooted at the given directory.
    pub fn new(storage_root: impl Into<PathBuf>) -> Self {
        Self {
            storage_root: storage_root.into(),
            ..Self::default()
        }
    }

    /// Ephemeral deployment writing under the system temp dir, for hosts
    /// where the working directory is not writable.
    pub fn ephemeral() -> Self {
        Self {
            storage_root: env::temp_dir().join("data"),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rules_cover_form_sections() {
        let rules = ValidationRules::default();
        assert!(rules
            .required_baseline_fields
            .iter()
            .any(|f| f == "patient_id"));
        assert!(rules
            .required_cycle_fields
            .iter()
            .any(|f| f == "regimen_prescribed"));
        assert_eq!(rules.min_patient_id_len, 3);
        assert!(rules.require_medications);
    }

    #[test]
    fn test_ephemeral_root_is_under_temp() {
        let config = Config::ephemeral();
        assert!(config.storage_root.starts_with(std::env::temp_dir()));
    }

    #[test]
    fn test_config_deserializes_with_default_rules() {
        let config: Config = serde_json::from_str(
            r#"{"storage_root": "/srv/capture", "districts_path": "districts.txt"}"#,
        )
        .unwrap();
        assert_eq!(config.storage_root, PathBuf::from("/srv/capture"));
        assert_eq!(config.rules, ValidationRules::default());
    }
}
