//! Treatment cycle entry form, with the dynamic medication row editor.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use adherence_core::config::ValidationRules;
use adherence_core::models::{CycleDraft, LabResults, MedicationEntry, YesNo};

use crate::validate::{is_selected, ValidationErrors};

/// One editable medication row on the cycle screen.
///
/// Rows are transient UI state; only on a validated save do they become
/// immutable [`MedicationEntry`] values in the persisted cycle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MedicationRow {
    pub name: String,
    pub dose: String,
    pub unit: String,
    pub route: String,
    pub administered: bool,
}

impl Default for MedicationRow {
    fn default() -> Self {
        Self {
            name: String::new(),
            dose: String::new(),
            unit: "mg".into(),
            route: String::new(),
            administered: true,
        }
    }
}

impl MedicationRow {
    /// A row is complete once it names a medication and carries a dose.
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.name.starts_with("-- Select")
            && !self.dose.trim().is_empty()
    }

    fn to_entry(&self) -> MedicationEntry {
        let route = self.route.trim();
        MedicationEntry {
            name: self.name.trim().to_string(),
            dose: self.dose.trim().to_string(),
            unit: self.unit.clone(),
            route: (!route.is_empty()).then(|| route.to_string()),
            administered: self.administered,
        }
    }
}

/// Transient cycle screen state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CycleForm {
    pub regimen_prescribed: Option<String>,
    pub prescription_date: Option<NaiveDate>,
    pub medications: Vec<MedicationRow>,
    pub chemo_received_date: Option<NaiveDate>,
    pub laboratory: LabResults,
    pub chemo_on_prescription_day: Option<YesNo>,
    pub chemo_delay_reason: String,
    pub side_effects_present: Option<YesNo>,
    pub side_effects: Vec<String>,
    pub side_effects_other: String,
    pub patient_condition: Option<String>,
    pub condition_other: String,
    pub hospitalization: Option<YesNo>,
    pub hospitalization_reason: String,
}

impl Default for CycleForm {
    fn default() -> Self {
        Self {
            regimen_prescribed: None,
            prescription_date: None,
            // The screen opens with one blank medication row.
            medications: vec![MedicationRow::default()],
            chemo_received_date: None,
            laboratory: LabResults::default(),
            chemo_on_prescription_day: None,
            chemo_delay_reason: String::new(),
            side_effects_present: None,
            side_effects: Vec::new(),
            side_effects_other: String::new(),
            patient_condition: None,
            condition_other: String::new(),
            hospitalization: None,
            hospitalization_reason: String::new(),
        }
    }
}

impl CycleForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a blank medication row; returns its index.
    pub fn add_medication_row(&mut self) -> usize {
        self.medications.push(MedicationRow::default());
        self.medications.len() - 1
    }

    /// Remove a medication row by index, if it exists.
    pub fn remove_medication_row(&mut self, index: usize) -> Option<MedicationRow> {
        if index < self.medications.len() {
            Some(self.medications.remove(index))
        } else {
            None
        }
    }

    /// Check the draft and build a [`CycleDraft`] for the store.
    ///
    /// Every present medication row must be complete: an added-but-unfilled
    /// row blocks the save rather than being silently dropped.
    pub fn validate(&self, rules: &ValidationRules) -> Result<CycleDraft, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        for field in &rules.required_cycle_fields {
            match self.field_answered(field) {
                Some(true) => {}
                Some(false) => errors.push(field.clone(), required_message(field)),
                None => {
                    tracing::warn!(field = %field, "unknown cycle field in validation rules")
                }
            }
        }

        if rules.require_medications && self.medications.is_empty() {
            errors.push("medications", "please add at least one medication");
        }
        for (i, row) in self.medications.iter().enumerate() {
            if !row.is_complete() {
                errors.push(
                    format!("medications[{i}]"),
                    "please complete this medication row (name and dose) or remove it",
                );
            }
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        let on_prescription_day = self.chemo_on_prescription_day;
        let side_effects_present = self.side_effects_present;
        let side_effects = if side_effects_present == Some(YesNo::Yes) {
            self.side_effects.clone()
        } else {
            Vec::new()
        };

        Ok(CycleDraft {
            regimen_prescribed: self.regimen_prescribed.clone().unwrap_or_default(),
            prescription_date: self
                .prescription_date
                .unwrap_or_else(adherence_core::catalog::study_start),
            medications: self.medications.iter().map(MedicationRow::to_entry).collect(),
            chemo_received_date: self.chemo_received_date,
            laboratory: self.laboratory.clone(),
            chemo_on_prescription_day: on_prescription_day,
            chemo_delay_reason: (on_prescription_day == Some(YesNo::No))
                .then(|| self.chemo_delay_reason.trim().to_string()),
            side_effects_present,
            side_effects_other: side_effects
                .iter()
                .any(|s| s == "Other")
                .then(|| self.side_effects_other.trim().to_string()),
            side_effects,
            patient_condition: self.patient_condition.clone(),
            condition_other: (self.patient_condition.as_deref() == Some("Other"))
                .then(|| self.condition_other.trim().to_string()),
            hospitalization: self.hospitalization,
            hospitalization_reason: (self.hospitalization == Some(YesNo::Yes))
                .then(|| self.hospitalization_reason.trim().to_string()),
        })
    }

    fn field_answered(&self, field: &str) -> Option<bool> {
        let answered = match field {
            "regimen_prescribed" => is_selected(&self.regimen_prescribed),
            "prescription_date" => self.prescription_date.is_some(),
            "chemo_received_date" => self.chemo_received_date.is_some(),
            "chemo_on_prescription_day" => self.chemo_on_prescription_day.is_some(),
            "side_effects_present" => self.side_effects_present.is_some(),
            "patient_condition" => is_selected(&self.patient_condition),
            "hospitalization" => self.hospitalization.is_some(),
            _ => return None,
        };
        Some(answered)
    }
}

fn required_message(field: &str) -> String {
    let prompt = match field {
        "regimen_prescribed" => "select the regimen prescribed for this cycle",
        "prescription_date" => "enter the prescription date",
        "chemo_received_date" => "enter the date chemotherapy was received",
        "chemo_on_prescription_day" => {
            "select whether chemotherapy was received on the prescription day"
        }
        "side_effects_present" => "select whether side effects were documented",
        "patient_condition" => "select the patient's general condition",
        "hospitalization" => "select whether there was a hospitalization",
        other => return format!("{other} is required"),
    };
    format!("please {prompt}")
}

#[cfg(test)]
mod tests {
    use super::*;

    pub(crate) fn filled_form() -> CycleForm {
        let mut form = CycleForm::new();
        form.regimen_prescribed = Some("AC (Doxorubicin + Cyclophosphamide)".into());
        form.prescription_date = NaiveDate::from_ymd_opt(2017, 7, 1);
        form.medications[0].name = "Doxorubicin".into();
        form.medications[0].dose = "60".into();
        form.medications[0].unit = "mg/m2".into();
        form
    }

    #[test]
    fn test_complete_form_validates() {
        let draft = filled_form().validate(&ValidationRules::default()).unwrap();
        assert_eq!(draft.medications.len(), 1);
        assert_eq!(draft.medications[0].name, "Doxorubicin");
        assert_eq!(draft.medications[0].unit, "mg/m2");
    }

    #[test]
    fn test_no_medication_rows_rejected() {
        let mut form = filled_form();
        form.remove_medication_row(0).unwrap();
        let errors = form.validate(&ValidationRules::default()).unwrap_err();
        assert!(errors.for_field("medications").is_some());
    }

    #[test]
    fn test_incomplete_added_row_blocks_save() {
        let mut form = filled_form();
        let i = form.add_medication_row();
        form.medications[i].name = "Ondansetron".into(); // no dose entered

        let errors = form.validate(&ValidationRules::default()).unwrap_err();
        assert!(errors.for_field("medications[1]").is_some());

        form.medications[i].dose = "8".into();
        assert!(form.validate(&ValidationRules::default()).is_ok());
    }

    #[test]
    fn test_blank_initial_row_blocks_save() {
        let mut form = CycleForm::new();
        form.regimen_prescribed = Some("AC (Doxorubicin + Cyclophosphamide)".into());
        form.prescription_date = NaiveDate::from_ymd_opt(2017, 7, 1);

        let errors = form.validate(&ValidationRules::default()).unwrap_err();
        assert!(errors.for_field("medications[0]").is_some());
    }

    #[test]
    fn test_row_editor_add_remove() {
        let mut form = CycleForm::new();
        assert_eq!(form.medications.len(), 1);
        let i = form.add_medication_row();
        assert_eq!(i, 1);
        assert!(form.remove_medication_row(0).is_some());
        assert_eq!(form.medications.len(), 1);
        assert!(form.remove_medication_row(5).is_none());
    }

    #[test]
    fn test_missing_regimen_rejected() {
        let mut form = filled_form();
        form.regimen_prescribed = Some("-- Select Regimen --".into());
        let errors = form.validate(&ValidationRules::default()).unwrap_err();
        assert!(errors.for_field("regimen_prescribed").is_some());
    }

    #[test]
    fn test_conditional_fields_cleared_by_trigger_answer() {
        let mut form = filled_form();
        form.chemo_on_prescription_day = Some(YesNo::Yes);
        form.chemo_delay_reason = "left over from an earlier answer".into();
        form.side_effects_present = Some(YesNo::No);
        form.side_effects = vec!["Nausea".into()];

        let draft = form.validate(&ValidationRules::default()).unwrap();
        assert!(draft.chemo_delay_reason.is_none());
        assert!(draft.side_effects.is_empty());
    }
}
