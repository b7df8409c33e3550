//! Domain models for the adherence capture system.

mod baseline;
mod cycle;
mod followup;
mod record;

pub use baseline::*;
pub use cycle::*;
pub use followup::*;
pub use record::*;

use serde::{Deserialize, Serialize};

/// A Yes/No answer from a two-option form control.
///
/// Serialized as the literal strings `"Yes"` / `"No"` so the stored JSON
/// matches what the data collectors see on screen.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum YesNo {
    Yes,
    No,
}

impl YesNo {
    /// True if the answer is `Yes`.
    pub fn is_yes(self) -> bool {
        matches!(self, YesNo::Yes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yes_no_serializes_as_display_strings() {
        assert_eq!(serde_json::to_string(&YesNo::Yes).unwrap(), "\"Yes\"");
        assert_eq!(serde_json::to_string(&YesNo::No).unwrap(), "\"No\"");
    }

    #[test]
    fn test_is_yes() {
        assert!(YesNo::Yes.is_yes());
        assert!(!YesNo::No.is_yes());
    }
}
