//! Final follow-up visit models (recurrence-free survival outcomes).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::YesNo;

/// Vital status at the last follow-up visit.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PatientStatus {
    Alive,
    Deceased,
}

/// The final follow-up section of a patient record, saved once at the end
/// of data collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FinalFollowup {
    /// Last recorded review date.
    pub last_review_date: NaiveDate,
    /// General condition of the patient on the last visit.
    pub general_condition: String,
    /// Did the patient come back for follow up?
    pub followup_attendance: YesNo,
    pub no_followup_reason: Option<String>,
    /// Comorbidities developed since baseline.
    pub comorbidities_developed: Vec<String>,
    pub other_comorbidity: Option<String>,
    /// Breast cancer recurrence detected?
    pub recurrence: Option<YesNo>,
    /// Date recurrence was confirmed, when `recurrence` is `Yes`.
    pub recurrence_date: Option<NaiveDate>,
    pub patient_status: PatientStatus,
    /// Date of death, when `patient_status` is `Deceased`.
    pub death_date: Option<NaiveDate>,
    pub death_cause: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serializes_as_display_strings() {
        assert_eq!(
            serde_json::to_string(&PatientStatus::Alive).unwrap(),
            "\"Alive\""
        );
        assert_eq!(
            serde_json::to_string(&PatientStatus::Deceased).unwrap(),
            "\"Deceased\""
        );
    }

    #[test]
    fn test_round_trip() {
        let followup = FinalFollowup {
            last_review_date: NaiveDate::from_ymd_opt(2018, 3, 20).unwrap(),
            general_condition: "Stable, no complaints".into(),
            followup_attendance: YesNo::Yes,
            no_followup_reason: None,
            comorbidities_developed: vec!["Hypertension".into()],
            other_comorbidity: None,
            recurrence: Some(YesNo::No),
            recurrence_date: None,
            patient_status: PatientStatus::Alive,
            death_date: None,
            death_cause: None,
        };

        let json = serde_json::to_string(&followup).unwrap();
        let back: FinalFollowup = serde_json::from_str(&json).unwrap();
        assert_eq!(back, followup);
    }
}
