//! Storage path addressing for patient records.
//!
//! Patient identifiers come off paper forms and may contain characters that
//! are unsafe in filesystem paths (`1275/17` is a real shape). Addressing
//! uses a sanitized copy of the id; the document itself always stores the
//! original verbatim.

use std::path::{Path, PathBuf};

/// Characters replaced by `_` when deriving a path-safe identifier.
const UNSAFE_CHARS: [char; 9] = ['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Derive the filesystem-safe form of a patient identifier.
///
/// Pure and total: each unsafe character maps to `_`, everything else is
/// kept, so the output is deterministic, idempotent, and non-empty for any
/// non-empty input. The mapping is one-way; distinct raw ids can collapse
/// to the same sanitized form, and callers must keep the raw id in the
/// record itself.
pub fn sanitize_patient_id(raw: &str) -> String {
    raw.chars()
        .map(|c| if UNSAFE_CHARS.contains(&c) { '_' } else { c })
        .collect()
}

/// Directory holding a patient's record file.
pub(crate) fn patient_dir(root: &Path, sanitized_id: &str) -> PathBuf {
    root.join(format!("patient_{sanitized_id}"))
}

/// Full path of a patient's record file:
/// `{root}/patient_{sanitized}/patient_{sanitized}.json`.
pub(crate) fn record_path(root: &Path, sanitized_id: &str) -> PathBuf {
    patient_dir(root, sanitized_id).join(format!("patient_{sanitized_id}.json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_replaces_slash() {
        assert_eq!(sanitize_patient_id("1275/17"), "1275_17");
    }

    #[test]
    fn test_sanitize_replaces_full_unsafe_set() {
        assert_eq!(sanitize_patient_id(r#"a/b\c:d*e?f"g<h>i|j"#), "a_b_c_d_e_f_g_h_i_j");
    }

    #[test]
    fn test_sanitize_keeps_safe_ids_unchanged() {
        assert_eq!(sanitize_patient_id("WMJ11"), "WMJ11");
    }

    #[test]
    fn test_sanitize_is_idempotent() {
        let once = sanitize_patient_id("1275/17");
        assert_eq!(sanitize_patient_id(&once), once);
    }

    #[test]
    fn test_record_path_layout() {
        let path = record_path(Path::new("/srv/data"), "1275_17");
        assert_eq!(
            path,
            Path::new("/srv/data/patient_1275_17/patient_1275_17.json")
        );
    }
}
