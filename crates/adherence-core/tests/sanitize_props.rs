//! Property tests for patient id sanitization.

use proptest::prelude::*;

use adherence_core::store::sanitize_patient_id;

const UNSAFE: [char; 9] = ['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

proptest! {
    #[test]
    fn sanitize_is_deterministic(id in ".*") {
        prop_assert_eq!(sanitize_patient_id(&id), sanitize_patient_id(&id));
    }

    #[test]
    fn sanitize_is_idempotent(id in ".*") {
        let once = sanitize_patient_id(&id);
        prop_assert_eq!(sanitize_patient_id(&once), once);
    }

    #[test]
    fn sanitized_output_has_no_unsafe_chars(id in ".*") {
        let sanitized = sanitize_patient_id(&id);
        prop_assert!(!sanitized.chars().any(|c| UNSAFE.contains(&c)));
    }

    #[test]
    fn sanitize_preserves_char_count(id in ".*") {
        // Replacement is 1:1, so non-empty input can never sanitize to an
        // empty (and therefore unusable) path segment.
        prop_assert_eq!(
            sanitize_patient_id(&id).chars().count(),
            id.chars().count()
        );
    }
}
