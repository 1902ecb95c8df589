//! FQDN syntax rules.
//!
//! A single left-to-right pass over the labels, stopping at the first
//! violation:
//!
//! - the whole name is at most 255 bytes and starts with a letter or digit
//! - every label is 1 to 63 bytes and neither starts nor ends with `-`
//! - inner labels are alphanumeric (hyphens allowed inside)
//! - the final label is letters only
//!
//! There is no allowance for a trailing root dot; `example.com.` ends in an
//! empty label and is rejected.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::error::{FqdnError, Result};
use crate::label::{labels, Label, Labels, MAX_LABEL_LENGTH, MAX_NAME_LENGTH, SEPARATOR};

const HYPHEN: u8 = b'-';

/// Check `input` against the FQDN rules.
pub fn verify_fqdn(input: &str) -> Result<()> {
    if input.len() > MAX_NAME_LENGTH {
        debug!(length = input.len(), "name exceeds maximum length");
        return Err(FqdnError::StringTooLong {
            length: input.len(),
        });
    }

    match input.as_bytes().first() {
        Some(b) if b.is_ascii_alphanumeric() => {}
        _ => {
            debug!("name does not start with a letter or digit");
            return Err(FqdnError::InvalidLabelStart);
        }
    }

    for label in labels(input) {
        if let Err(err) = check_label(&label) {
            debug!(offset = label.start(), label = %label, error = err.kind_name(), "label rejected");
            return Err(err);
        }
    }

    Ok(())
}

fn check_label(label: &Label<'_>) -> Result<()> {
    let (Some(first), Some(last)) = (label.first_byte(), label.last_byte()) else {
        return Err(FqdnError::InvalidCharacters);
    };

    if label.len() > MAX_LABEL_LENGTH {
        return Err(FqdnError::LabelTooLong {
            length: label.len(),
        });
    }

    // A separator can never border a label produced by the scan.
    if first == HYPHEN || last == HYPHEN || first == SEPARATOR {
        return Err(FqdnError::InvalidLabelStart);
    }
    if last == SEPARATOR {
        return Err(FqdnError::InvalidLabelEnd);
    }

    let allowed: fn(&u8) -> bool = if label.is_last() {
        u8::is_ascii_alphabetic
    } else {
        |b: &u8| b.is_ascii_alphanumeric() || *b == HYPHEN
    };

    if label.as_bytes().iter().all(allowed) {
        Ok(())
    } else {
        Err(FqdnError::InvalidCharacters)
    }
}

/// A string that passed [`verify_fqdn`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Fqdn(String);

impl Fqdn {
    /// Validate and wrap a name.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        verify_fqdn(&name)?;
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn labels(&self) -> Labels<'_> {
        labels(&self.0)
    }

    /// The rightmost label.
    pub fn tld(&self) -> &str {
        self.0
            .rsplit_once('.')
            .map_or(self.0.as_str(), |(_, tld)| tld)
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl FromStr for Fqdn {
    type Err = FqdnError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl AsRef<str> for Fqdn {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Fqdn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
