//! Baseline intake form (Section 1, collected at first visit only).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use adherence_core::catalog;
use adherence_core::config::ValidationRules;
use adherence_core::models::{BaselineData, Comorbidities, YesNo};

use crate::validate::{is_selected, ValidationErrors};

/// Transient baseline screen state.
///
/// Every answer is optional until submission; [`BaselineForm::validate`]
/// turns a complete draft into a [`BaselineData`] ready for the store.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BaselineForm {
    pub patient_id: String,
    pub age: Option<u32>,
    pub date_admitted: Option<NaiveDate>,
    pub education_level: Option<String>,
    pub marital_status: Option<String>,
    pub income_source: Option<String>,
    pub income_other: String,
    pub district: Option<String>,
    pub initial_diagnosis: Option<String>,
    pub immunohisto_present: Option<YesNo>,
    pub immunohisto_results: Vec<String>,
    pub immunohisto_other: String,
    pub disease_stage: Option<String>,
    pub comorbidities: Comorbidities,
    pub chemo_cycles_prescribed: Option<u32>,
    pub regimen_prescribed: Option<String>,
    pub treatment_started: Option<YesNo>,
    pub treatment_not_started_reason: Option<String>,
    pub treatment_not_started_other: String,
}

impl BaselineForm {
    /// Check the draft against the configured required set plus the
    /// structural and conditional rules, and build the persistable section.
    ///
    /// `districts` is the reference list the district answer must come
    /// from; an empty list disables the membership check.
    pub fn validate(
        &self,
        rules: &ValidationRules,
        districts: &[String],
    ) -> Result<BaselineData, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        for field in &rules.required_baseline_fields {
            match self.field_answered(field) {
                Some(true) => {}
                Some(false) => errors.push(field.clone(), required_message(field)),
                None => {
                    tracing::warn!(field = %field, "unknown baseline field in validation rules")
                }
            }
        }

        let patient_id = self.patient_id.trim();
        if !patient_id.is_empty() && patient_id.chars().count() < rules.min_patient_id_len {
            errors.push(
                "patient_id",
                format!(
                    "patient ID must be at least {} characters long",
                    rules.min_patient_id_len
                ),
            );
        }

        if let Some(district) = &self.district {
            if is_selected(&self.district)
                && !districts.is_empty()
                && !districts.iter().any(|d| d == district)
            {
                errors.push("district", "district is not in the reference list");
            }
        }

        if self.income_source.as_deref() == Some("Other") && self.income_other.trim().is_empty() {
            errors.push("income_other", "please specify the other source of income");
        }

        if self.immunohisto_results.iter().any(|r| r == "Other")
            && self.immunohisto_other.trim().is_empty()
        {
            errors.push(
                "immunohisto_other",
                "please specify the other immunohistochemistry result",
            );
        }

        if self.comorbidities.other
            && self
                .comorbidities
                .other_specify
                .as_deref()
                .unwrap_or("")
                .trim()
                .is_empty()
        {
            errors.push(
                "comorbidities.other_specify",
                "please specify the other comorbidities",
            );
        }

        if self.treatment_started == Some(YesNo::No) {
            if !is_selected(&self.treatment_not_started_reason) {
                errors.push(
                    "treatment_not_started_reason",
                    "please select why treatment was not started",
                );
            } else if self.treatment_not_started_reason.as_deref() == Some("Other")
                && self.treatment_not_started_other.trim().is_empty()
            {
                errors.push(
                    "treatment_not_started_other",
                    "please specify the other reason",
                );
            }
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        let immunohisto_present = self.immunohisto_present.unwrap_or(YesNo::No);
        let immunohisto_results = if immunohisto_present.is_yes() {
            self.immunohisto_results.clone()
        } else {
            Vec::new()
        };
        let treatment_started = self.treatment_started.unwrap_or(YesNo::Yes);

        let mut comorbidities = self.comorbidities.clone();
        if !comorbidities.other {
            comorbidities.other_specify = None;
        }

        Ok(BaselineData {
            patient_id: patient_id.to_string(),
            age: self.age.unwrap_or_default(),
            date_admitted: self.date_admitted.unwrap_or_else(catalog::study_start),
            education_level: self.education_level.clone().unwrap_or_default(),
            marital_status: self.marital_status.clone().unwrap_or_default(),
            income_source: self.income_source.clone().unwrap_or_default(),
            income_other: (self.income_source.as_deref() == Some("Other"))
                .then(|| self.income_other.trim().to_string()),
            district: self.district.clone().unwrap_or_default(),
            initial_diagnosis: self.initial_diagnosis.clone().unwrap_or_default(),
            immunohisto_present,
            immunohisto_other: immunohisto_results
                .iter()
                .any(|r| r == "Other")
                .then(|| self.immunohisto_other.trim().to_string()),
            immunohisto_results,
            disease_stage: self.disease_stage.clone().unwrap_or_default(),
            comorbidities,
            chemo_cycles_prescribed: self.chemo_cycles_prescribed.unwrap_or_default(),
            regimen_prescribed: self.regimen_prescribed.clone().unwrap_or_default(),
            treatment_started,
            treatment_not_started_reason: (treatment_started == YesNo::No)
                .then(|| self.treatment_not_started_reason.clone())
                .flatten(),
            treatment_not_started_other: (treatment_started == YesNo::No
                && self.treatment_not_started_reason.as_deref() == Some("Other"))
            .then(|| self.treatment_not_started_other.trim().to_string()),
        })
    }

    /// Whether a named field has been answered. `None` means the name is
    /// not a baseline field (a typo in the configured required set).
    fn field_answered(&self, field: &str) -> Option<bool> {
        let answered = match field {
            "patient_id" => !self.patient_id.trim().is_empty(),
            "age" => self.age.is_some_and(|age| age > 0),
            "date_admitted" => self.date_admitted.is_some(),
            "education_level" => is_selected(&self.education_level),
            "marital_status" => is_selected(&self.marital_status),
            "income_source" => is_selected(&self.income_source),
            "district" => is_selected(&self.district),
            "initial_diagnosis" => is_selected(&self.initial_diagnosis),
            "immunohisto_present" => self.immunohisto_present.is_some(),
            "disease_stage" => is_selected(&self.disease_stage),
            "chemo_cycles_prescribed" => self.chemo_cycles_prescribed.is_some_and(|n| n > 0),
            "regimen_prescribed" => is_selected(&self.regimen_prescribed),
            "treatment_started" => self.treatment_started.is_some(),
            _ => return None,
        };
        Some(answered)
    }
}

fn required_message(field: &str) -> String {
    let prompt = match field {
        "patient_id" => "enter a patient ID",
        "age" => "enter a valid age",
        "date_admitted" => "enter the admission date",
        "education_level" => "select an education level",
        "marital_status" => "select a marital status",
        "income_source" => "select a source of income",
        "district" => "select a district",
        "initial_diagnosis" => "select an initial diagnosis",
        "immunohisto_present" => "select whether immunohistochemistry results are present",
        "disease_stage" => "select a disease stage",
        "chemo_cycles_prescribed" => "enter the number of chemotherapy cycles prescribed",
        "regimen_prescribed" => "select a prescribed regimen",
        "treatment_started" => "select whether the patient started treatment",
        other => return format!("{other} is required"),
    };
    format!("please {prompt}")
}
