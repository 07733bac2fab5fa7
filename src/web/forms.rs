//! Cheese form payload and field-level validation.
//!
//! The same form backs the create and update views. `validate` either hands
//! back the typed values the core operations take, or the list of field
//! errors the page re-renders with; an invalid submission never reaches the
//! database.

use crate::core::{
    cheese::{Firmness, MAX_NAME_LEN},
    country,
};
use crate::entities::cheese;
use serde::Deserialize;

/// Raw form fields as submitted by the browser.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CheeseForm {
    /// Name field, required
    #[serde(default)]
    pub name: String,
    /// Description field, may be empty
    #[serde(default)]
    pub description: String,
    /// Firmness wire value; empty means unspecified
    #[serde(default)]
    pub firmness: String,
    /// Country code; empty means no country
    #[serde(default)]
    pub country_of_origin: String,
}

/// One rejected field with its message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// The offending form field
    pub field: &'static str,
    /// What to show next to it
    pub message: String,
}

/// The validated, typed values of a clean submission.
#[derive(Debug, Clone)]
pub struct ValidCheese {
    /// Trimmed name
    pub name: String,
    /// Description as submitted
    pub description: String,
    /// Parsed firmness
    pub firmness: Firmness,
    /// Country code, None when the field was left empty
    pub country_of_origin: Option<String>,
}

impl CheeseForm {
    /// Pre-fills the form from a stored record, for the update view.
    #[must_use]
    pub fn from_model(cheese: &cheese::Model) -> Self {
        Self {
            name: cheese.name.clone(),
            description: cheese.description.clone(),
            firmness: cheese.firmness.clone(),
            country_of_origin: cheese.country_of_origin.clone().unwrap_or_default(),
        }
    }

    /// Validates the submission.
    ///
    /// # Errors
    /// Returns every rejected field at once so the page can show all
    /// messages in a single round trip.
    pub fn validate(&self) -> Result<ValidCheese, Vec<FieldError>> {
        let mut errors = Vec::new();

        let name = self.name.trim();
        if name.is_empty() {
            errors.push(FieldError {
                field: "name",
                message: "This field is required.".to_string(),
            });
        } else if name.chars().count() > MAX_NAME_LEN {
            errors.push(FieldError {
                field: "name",
                message: format!("Ensure this value has at most {MAX_NAME_LEN} characters."),
            });
        }

        let firmness = if self.firmness.is_empty() {
            Some(Firmness::default())
        } else {
            Firmness::parse(&self.firmness)
        };
        if firmness.is_none() {
            errors.push(FieldError {
                field: "firmness",
                message: format!("'{}' is not a valid firmness.", self.firmness),
            });
        }

        let country_of_origin = if self.country_of_origin.is_empty() {
            None
        } else if country::is_valid(&self.country_of_origin) {
            Some(self.country_of_origin.clone())
        } else {
            errors.push(FieldError {
                field: "country_of_origin",
                message: format!("'{}' is not a valid country.", self.country_of_origin),
            });
            None
        };

        if let (true, Some(firmness)) = (errors.is_empty(), firmness) {
            Ok(ValidCheese {
                name: name.to_string(),
                description: self.description.clone(),
                firmness,
                country_of_origin,
            })
        } else {
            Err(errors)
        }
    }
}
