//! Form option catalogs and the district reference list.
//!
//! The fixed option sets mirror the paper case report form the study uses;
//! the district list is site configuration and is loaded from a plain-text
//! file (one district per line) at startup.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use thiserror::Error;

/// Study observation window, used to bound all date fields.
pub fn study_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2016, 1, 1).expect("valid constant date")
}

/// See [`study_start`].
pub fn study_end() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 12, 31).expect("valid constant date")
}

pub const EDUCATION_LEVELS: [&str; 5] = ["None", "Primary", "Secondary", "Tertiary", "Not captured"];

pub const MARITAL_STATUSES: [&str; 5] = ["Single", "Married", "Divorced", "Widowed", "Not captured"];

pub const INCOME_SOURCES: [&str; 5] = ["Farmer", "Business", "Professional", "Unemployed", "Other"];

pub const DIAGNOSES: [&str; 9] = [
    "Invasive ductal carcinoma",
    "Moderately differentiated invasive ductal carcinoma",
    "Moderately differentiated ductal carcinoma",
    "Ductal carcinoma in situ",
    "Infiltrating carcinoma",
    "Poorly differentiated adenocarcinoma",
    "Invasive adenocarcinoma",
    "Invasive lobular carcinoma",
    "Other",
];

pub const DISEASE_STAGES: [&str; 5] = ["Stage 0", "Stage I", "Stage II", "Stage III", "Stage IV"];

/// Predefined medication names offered in the cycle medication rows.
pub const MEDICATIONS: [&str; 20] = [
    "Adriamycin",
    "Cyclophosphamide",
    "Doxorubicin",
    "Dexamethasone",
    "5-fluorouracil",
    "Ondansetron",
    "Ranitidine",
    "Metoclopramide",
    "Plasil",
    "Ifosfamide",
    "Mesna",
    "Paclitaxel",
    "Epirubicin",
    "Carboplatin",
    "Capecitabine (Xeloda)",
    "Docetaxel",
    "Promethazine",
    "Tamoxifen",
    "Anastrazole",
    "Mesra",
];

pub const DOSE_UNITS: [&str; 6] = ["mg", "mg/m2", "g", "mL", "tabs", "IU"];

pub const IMMUNOHISTO_RESULTS: [&str; 9] = [
    "ER-positive (ER+)",
    "ER-negative (ER-)",
    "PR-positive (PR+)",
    "PR-negative (PR-)",
    "HR-positive (HR+)",
    "HR-negative (HR-)",
    "HER2-positive (HER2+)",
    "HER2-negative (HER2-)",
    "Other",
];

pub const REGIMENS: [&str; 12] = [
    "AC (Doxorubicin + Cyclophosphamide)",
    "AC-T (Doxorubicin + Cyclophosphamide + Paclitaxel)",
    "CMF (Cyclophosphamide + Methotrexate + 5-Fluorouracil)",
    "FAC (5-Fluorouracil + Doxorubicin + Cyclophosphamide)",
    "FEC (5-Fluorouracil + Epirubicin + Cyclophosphamide)",
    "TC (Docetaxel + Cyclophosphamide)",
    "TCH (Docetaxel + Carboplatin + Trastuzumab)",
    "TAC (Docetaxel + Doxorubicin + Cyclophosphamide)",
    "EC-T (Epirubicin + Cyclophosphamide + Paclitaxel)",
    "Capecitabine (Xeloda) monotherapy",
    "Tamoxifen monotherapy",
    "Other",
];

pub const SIDE_EFFECTS: [&str; 6] = ["Nausea", "Fatigue", "Vomiting", "Neuropathy", "None", "Other"];

pub const PATIENT_CONDITIONS: [&str; 3] = ["Better", "Weaker", "Other"];

pub const COMORBIDITIES: [&str; 5] = ["Diabetes", "Hypertension", "HIV", "None captured", "Other"];

pub const TREATMENT_NOT_STARTED_REASONS: [&str; 8] = [
    "Physical toll (fear of side effects)",
    "Fear of Long-term damage",
    "Financial / cost barriers",
    "Distance and access",
    "Late diagnosis",
    "Social / family factors",
    "Older age, existing illnesses, or weak health",
    "Other",
];

/// Errors loading the district reference list.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("district list not found at {path}")]
    NotFound { path: PathBuf },

    #[error("failed to read district list at {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("district list at {path} contains no entries")]
    Empty { path: PathBuf },
}

/// Load the district reference list from a plain-text file.
///
/// One district per line; surrounding whitespace is trimmed and blank lines
/// are skipped. The result is sorted for stable presentation.
pub fn load_districts<P: AsRef<Path>>(path: P) -> Result<Vec<String>, CatalogError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            CatalogError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            CatalogError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let mut districts: Vec<String> = contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect();

    if districts.is_empty() {
        return Err(CatalogError::Empty {
            path: path.to_path_buf(),
        });
    }

    districts.sort();
    tracing::debug!(count = districts.len(), ?path, "loaded district list");
    Ok(districts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_districts_trims_sorts_and_skips_blanks() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Mbarara\n\n  Kampala  \nGulu\n").unwrap();

        let districts = load_districts(file.path()).unwrap();
        assert_eq!(districts, vec!["Gulu", "Kampala", "Mbarara"]);
    }

    #[test]
    fn test_load_districts_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_districts(dir.path().join("districts.txt")).unwrap_err();
        assert!(matches!(err, CatalogError::NotFound { .. }));
    }

    #[test]
    fn test_load_districts_empty_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "\n   \n").unwrap();
        let err = load_districts(file.path()).unwrap_err();
        assert!(matches!(err, CatalogError::Empty { .. }));
    }

    #[test]
    fn test_bundled_district_list_loads() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../../assets/districts.txt");
        let districts = load_districts(path).unwrap();
        assert!(districts.len() > 100);
        assert!(districts.windows(2).all(|w| w[0] <= w[1]));
    }
}
