//! # Jurisdiction Primitives & Ledger Keys
//!
//! A [`Jurisdiction`] is the (state, district, city) scope an admin is
//! authorized to register land within. A [`LandKey`] extends a jurisdiction
//! with a survey number to form the composite that identifies exactly one
//! parcel in the ledger.
//!
//! The composite is deliberately one value with `Ord` and `Hash`: the
//! ledger's uniqueness invariant ("no two records share a key") reduces to
//! a single map lookup instead of nested per-field probing.
//!
//! ## Validation
//!
//! Jurisdiction fields are validated non-empty at construction time and
//! deserialize through the constructor. [`LandKey`] composes two validated
//! types and needs no validation of its own.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::identity::SurveyNumber;

/// The administrative scope land is registered within.
///
/// Field order matters for the derived `Ord`: keys sort by state, then
/// district, then city, which keeps snapshots and listings grouped by
/// administrative hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Jurisdiction {
    state: String,
    district: String,
    city: String,
}

impl Jurisdiction {
    /// Create a jurisdiction, validating that every field is non-empty.
    ///
    /// Surrounding whitespace is trimmed. No further format restrictions
    /// are imposed because administrative naming varies across deployments.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyJurisdictionField`] naming the first
    /// empty field.
    pub fn new(
        state: impl Into<String>,
        district: impl Into<String>,
        city: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let state = non_empty(state.into(), "state")?;
        let district = non_empty(district.into(), "district")?;
        let city = non_empty(city.into(), "city")?;
        Ok(Self {
            state,
            district,
            city,
        })
    }

    /// The state (top-level administrative division).
    pub fn state(&self) -> &str {
        &self.state
    }

    /// The district within the state.
    pub fn district(&self) -> &str {
        &self.district
    }

    /// The city within the district. Admin authorization compares cities
    /// only, so this is the field that gates registration.
    pub fn city(&self) -> &str {
        &self.city
    }
}

impl std::fmt::Display for Jurisdiction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}/{}", self.state, self.district, self.city)
    }
}

impl<'de> Deserialize<'de> for Jurisdiction {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            state: String,
            district: String,
            city: String,
        }
        let raw = Raw::deserialize(deserializer)?;
        Jurisdiction::new(raw.state, raw.district, raw.city).map_err(serde::de::Error::custom)
    }
}

fn non_empty(value: String, field: &'static str) -> Result<String, ValidationError> {
    let trimmed = value.trim().to_string();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyJurisdictionField { field });
    }
    Ok(trimmed)
}

/// The composite key identifying exactly one parcel in the ledger.
///
/// Globally unique within a registry: no two land records may share a
/// `LandKey`. Ordered and hashable so it serves directly as a map key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LandKey {
    /// The (state, district, city) scope of the parcel.
    pub jurisdiction: Jurisdiction,
    /// The survey number within that scope.
    pub survey_number: SurveyNumber,
}

impl LandKey {
    /// Combine a jurisdiction and survey number into a ledger key.
    pub fn new(jurisdiction: Jurisdiction, survey_number: SurveyNumber) -> Self {
        Self {
            jurisdiction,
            survey_number,
        }
    }
}

impl std::fmt::Display for LandKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.jurisdiction, self.survey_number)
    }
}
