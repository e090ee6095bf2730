//! Household setup record.
//!
//! # Responsibility
//! - Capture the facts that filter the task catalog.
//! - Decide whether partner-side metrics are computed at all.
//!
//! # Invariants
//! - `adults` is 1 or 2.
//! - `Together` mode requires two adults.
//! - The record is replaced wholesale on edit, never patched field by field.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Whether one or both adults fill in the questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentMode {
    #[default]
    Solo,
    Together,
}

impl AssessmentMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Solo => "solo",
            Self::Together => "together",
        }
    }
}

/// Validation errors for household setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HouseholdValidationError {
    /// Adult count outside `1..=2`.
    UnsupportedAdultCount(u8),
    /// Together mode selected for a single-adult household.
    TogetherModeRequiresPartner,
}

impl Display for HouseholdValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedAdultCount(count) => {
                write!(f, "adults must be 1 or 2, got {count}")
            }
            Self::TogetherModeRequiresPartner => {
                write!(f, "together mode requires a two-adult household")
            }
        }
    }
}

impl Error for HouseholdValidationError {}

/// Household facts collected at assessment start.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HouseholdSetup {
    pub adults: u8,
    #[serde(default)]
    pub children: u32,
    #[serde(default)]
    pub has_pets: bool,
    #[serde(default)]
    pub has_garden: bool,
    #[serde(default)]
    pub i_am_employed: bool,
    #[serde(default)]
    pub partner_employed: bool,
    #[serde(default)]
    pub mode: AssessmentMode,
}

impl Default for HouseholdSetup {
    fn default() -> Self {
        Self {
            adults: 2,
            children: 0,
            has_pets: false,
            has_garden: false,
            i_am_employed: false,
            partner_employed: false,
            mode: AssessmentMode::Solo,
        }
    }
}

impl HouseholdSetup {
    /// Single-adult household answering alone.
    pub fn single_adult() -> Self {
        Self {
            adults: 1,
            ..Self::default()
        }
    }

    /// Validates adult count and mode combination.
    ///
    /// # Errors
    /// - `UnsupportedAdultCount` when `adults` is not 1 or 2.
    /// - `TogetherModeRequiresPartner` for `Together` with one adult.
    pub fn validate(&self) -> Result<(), HouseholdValidationError> {
        if !(1..=2).contains(&self.adults) {
            return Err(HouseholdValidationError::UnsupportedAdultCount(self.adults));
        }
        if self.mode == AssessmentMode::Together && self.adults < 2 {
            return Err(HouseholdValidationError::TogetherModeRequiresPartner);
        }
        Ok(())
    }

    /// Returns whether partner-side metrics should be computed.
    pub fn has_partner(&self) -> bool {
        self.adults >= 2
    }
}

#[cfg(test)]
mod tests {
    use super::{AssessmentMode, HouseholdSetup, HouseholdValidationError};

    #[test]
    fn validate_rejects_zero_and_three_adults() {
        for adults in [0, 3] {
            let household = HouseholdSetup {
                adults,
                ..HouseholdSetup::default()
            };
            assert_eq!(
                household.validate(),
                Err(HouseholdValidationError::UnsupportedAdultCount(adults))
            );
        }
    }

    #[test]
    fn together_mode_needs_two_adults() {
        let household = HouseholdSetup {
            mode: AssessmentMode::Together,
            ..HouseholdSetup::single_adult()
        };
        assert_eq!(
            household.validate(),
            Err(HouseholdValidationError::TogetherModeRequiresPartner)
        );
        assert!(!household.has_partner());
    }
}
