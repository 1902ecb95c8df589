use serde::Serialize;
use thiserror::Error;

/// Result type alias for FQDN validation.
pub type Result<T> = std::result::Result<T, FqdnError>;

/// Why a string was rejected as an FQDN.
///
/// Validation stops at the first violation, so exactly one kind is reported.
/// The `Display` text is the diagnostic line shown in verbose mode.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FqdnError {
    /// Disallowed character in a label, or an empty label.
    #[error("Invalid characters found in string")]
    InvalidCharacters,

    /// The string or a label starts (or ends) with `-`.
    #[error("Invalid first character found in string label (example 'subdomain.-domain')")]
    InvalidLabelStart,

    /// A label ends with `.`. Unreachable through the label scan.
    #[error("Invalid last character found in string label (example 'subdomain.domain.')")]
    InvalidLabelEnd,

    /// The whole string exceeds 255 characters.
    #[error("String is too long (> 255)")]
    StringTooLong {
        /// Length of the rejected string in bytes
        length: usize,
    },

    /// A single label exceeds 63 characters.
    #[error("Too long label (> 63)")]
    LabelTooLong {
        /// Length of the offending label in bytes
        length: usize,
    },
}

impl FqdnError {
    /// Stable machine-readable name of the error kind.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::InvalidCharacters => "invalid_characters",
            Self::InvalidLabelStart => "invalid_label_start",
            Self::InvalidLabelEnd => "invalid_label_end",
            Self::StringTooLong { .. } => "string_too_long",
            Self::LabelTooLong { .. } => "label_too_long",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_diagnostics() {
        assert_eq!(
            FqdnError::InvalidCharacters.to_string(),
            "Invalid characters found in string"
        );
        assert_eq!(
            FqdnError::StringTooLong { length: 300 }.to_string(),
            "String is too long (> 255)"
        );
        assert_eq!(
            FqdnError::LabelTooLong { length: 64 }.to_string(),
            "Too long label (> 63)"
        );
    }

    #[test]
    fn serializes_with_kind_tag() {
        let json = serde_json::to_string(&FqdnError::LabelTooLong { length: 64 }).unwrap();
        assert_eq!(json, r#"{"kind":"label_too_long","length":64}"#);

        let json = serde_json::to_string(&FqdnError::InvalidLabelStart).unwrap();
        assert_eq!(json, r#"{"kind":"invalid_label_start"}"#);
    }

    #[test]
    fn kind_names() {
        assert_eq!(FqdnError::LabelTooLong { length: 64 }.kind_name(), "label_too_long");
        assert_eq!(FqdnError::InvalidLabelEnd.kind_name(), "invalid_label_end");
    }
}
