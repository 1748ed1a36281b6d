use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Kind, Record};
use crate::error::ValidationError;

/// A client quote. `rating` is kept as text to match the stored shape; it
/// must parse as a whole number from 1 to 5.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Testimonial {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub name_en: String,
    pub name_ar: String,
    pub position_en: String,
    pub position_ar: String,
    pub quote_en: String,
    pub quote_ar: String,
    pub rating: String,
}

impl Testimonial {
    /// Rating as a number, when the stored text is a valid 1-5 value.
    pub fn stars(&self) -> Option<u8> {
        match self.rating.trim().parse::<u8>() {
            Ok(n) if (1..=5).contains(&n) => Some(n),
            _ => None,
        }
    }
}

impl Record for Testimonial {
    const KIND: Kind = Kind::Testimonials;

    fn id(&self) -> Option<Uuid> {
        self.id
    }

    fn set_id(&mut self, id: Uuid) {
        self.id = Some(id);
    }

    fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = ValidationError::new();
        if self.name_en.trim().is_empty() {
            errors.push("nameEn", "is required");
        }
        if self.stars().is_none() {
            errors.push("rating", "must be a whole number between 1 and 5");
        }
        errors.into_result()
    }
}
