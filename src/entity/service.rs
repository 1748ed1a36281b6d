use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Kind, Record};
use crate::error::ValidationError;

/// A studio service card. Display order is insertion order; there is no
/// status or ordering field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Service {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    /// Icon class name, e.g. "fas fa-pencil-ruler".
    pub icon: String,
    pub title_en: String,
    pub title_ar: String,
    pub desc_en: String,
    pub desc_ar: String,
}

impl Record for Service {
    const KIND: Kind = Kind::Services;

    fn id(&self) -> Option<Uuid> {
        self.id
    }

    fn set_id(&mut self, id: Uuid) {
        self.id = Some(id);
    }

    fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = ValidationError::new();
        if self.title_en.trim().is_empty() {
            errors.push("titleEn", "is required");
        }
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_shape() {
        let service = Service {
            icon: "fas fa-pencil-ruler".to_string(),
            title_en: "Architectural Design".to_string(),
            title_ar: "التصميم المعماري".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_string(&service).unwrap();
        assert!(json.contains("\"icon\":\"fas fa-pencil-ruler\""));
        assert!(json.contains("\"titleEn\":\"Architectural Design\""));
        assert!(!json.contains("\"status\""));
    }

    #[test]
    fn test_validate_requires_english_title() {
        assert!(Service::default().validate().is_err());
        let service = Service {
            title_en: "Interior Design".to_string(),
            ..Default::default()
        };
        assert!(service.validate().is_ok());
    }
}
