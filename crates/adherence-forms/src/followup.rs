//! Final follow-up visit form (recurrence-free survival and outcomes).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use adherence_core::catalog;
use adherence_core::models::{FinalFollowup, PatientStatus, YesNo};

use crate::validate::ValidationErrors;

/// Transient final follow-up screen state.
///
/// The required set here is fixed by the case report form rather than
/// configured: the closing visit always records the review date, condition,
/// attendance, and vital status, plus the conditional detail fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FollowupForm {
    pub last_review_date: Option<NaiveDate>,
    pub general_condition: String,
    pub followup_attendance: Option<YesNo>,
    pub no_followup_reason: String,
    pub comorbidities_developed: Vec<String>,
    pub other_comorbidity: String,
    pub recurrence: Option<YesNo>,
    pub recurrence_date: Option<NaiveDate>,
    pub patient_status: Option<PatientStatus>,
    pub death_date: Option<NaiveDate>,
    pub death_cause: String,
}

impl FollowupForm {
    /// Check the draft and build the persistable follow-up section.
    pub fn validate(&self) -> Result<FinalFollowup, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if self.last_review_date.is_none() {
            errors.push("last_review_date", "please enter the last review date");
        }
        if self.general_condition.trim().is_empty() {
            errors.push(
                "general_condition",
                "please describe the patient's general condition",
            );
        }
        if self.followup_attendance.is_none() {
            errors.push(
                "followup_attendance",
                "please select whether the patient came back for follow up",
            );
        }
        if self.patient_status.is_none() {
            errors.push(
                "patient_status",
                "please select the patient's vital status",
            );
        }

        if self.followup_attendance == Some(YesNo::No) && self.no_followup_reason.trim().is_empty()
        {
            errors.push(
                "no_followup_reason",
                "please explain why the patient did not come for follow up",
            );
        }
        if self.recurrence == Some(YesNo::Yes) && self.recurrence_date.is_none() {
            errors.push(
                "recurrence_date",
                "please enter the date the recurrence was confirmed",
            );
        }
        if self.patient_status == Some(PatientStatus::Deceased) {
            if self.death_date.is_none() {
                errors.push("death_date", "please enter the date of death");
            }
            if self.death_cause.trim().is_empty() {
                errors.push("death_cause", "please enter the primary cause of death");
            }
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        let attendance = self.followup_attendance.unwrap_or(YesNo::Yes);
        let status = self.patient_status.unwrap_or(PatientStatus::Alive);

        Ok(FinalFollowup {
            last_review_date: self.last_review_date.unwrap_or_else(catalog::study_end),
            general_condition: self.general_condition.trim().to_string(),
            followup_attendance: attendance,
            no_followup_reason: (attendance == YesNo::No)
                .then(|| self.no_followup_reason.trim().to_string()),
            comorbidities_developed: self.comorbidities_developed.clone(),
            other_comorbidity: self
                .comorbidities_developed
                .iter()
                .any(|c| c == "Other")
                .then(|| self.other_comorbidity.trim().to_string()),
            recurrence: self.recurrence,
            recurrence_date: (self.recurrence == Some(YesNo::Yes))
                .then_some(self.recurrence_date)
                .flatten(),
            patient_status: status,
            death_date: (status == PatientStatus::Deceased)
                .then_some(self.death_date)
                .flatten(),
            death_cause: (status == PatientStatus::Deceased)
                .then(|| self.death_cause.trim().to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    pub(crate) fn filled_form() -> FollowupForm {
        FollowupForm {
            last_review_date: NaiveDate::from_ymd_opt(2018, 6, 4),
            general_condition: "Doing well".into(),
            followup_attendance: Some(YesNo::Yes),
            recurrence: Some(YesNo::No),
            patient_status: Some(PatientStatus::Alive),
            ..FollowupForm::default()
        }
    }

    #[test]
    fn test_complete_form_validates() {
        let followup = filled_form().validate().unwrap();
        assert_eq!(followup.patient_status, PatientStatus::Alive);
        assert!(followup.death_date.is_none());
    }

    #[test]
    fn test_empty_form_reports_required_fields() {
        let errors = FollowupForm::default().validate().unwrap_err();
        assert!(errors.for_field("last_review_date").is_some());
        assert!(errors.for_field("general_condition").is_some());
        assert!(errors.for_field("followup_attendance").is_some());
        assert!(errors.for_field("patient_status").is_some());
    }

    #[test]
    fn test_no_attendance_requires_reason() {
        let mut form = filled_form();
        form.followup_attendance = Some(YesNo::No);
        let errors = form.validate().unwrap_err();
        assert!(errors.for_field("no_followup_reason").is_some());
    }

    #[test]
    fn test_recurrence_requires_date() {
        let mut form = filled_form();
        form.recurrence = Some(YesNo::Yes);
        let errors = form.validate().unwrap_err();
        assert!(errors.for_field("recurrence_date").is_some());

        form.recurrence_date = NaiveDate::from_ymd_opt(2018, 2, 1);
        let followup = form.validate().unwrap();
        assert_eq!(
            followup.recurrence_date,
            NaiveDate::from_ymd_opt(2018, 2, 1)
        );
    }

    #[test]
    fn test_deceased_requires_date_and_cause() {
        let mut form = filled_form();
        form.patient_status = Some(PatientStatus::Deceased);
        let errors = form.validate().unwrap_err();
        assert!(errors.for_field("death_date").is_some());
        assert!(errors.for_field("death_cause").is_some());

        form.death_date = NaiveDate::from_ymd_opt(2018, 5, 30);
        form.death_cause = "Metastatic disease".into();
        assert!(form.validate().is_ok());
    }
}
