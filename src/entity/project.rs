use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Kind, PublishStatus, Record};
use crate::error::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProjectCategory {
    #[default]
    Residential,
    Commercial,
    Cultural,
    Interior,
}

impl std::fmt::Display for ProjectCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProjectCategory::Residential => write!(f, "residential"),
            ProjectCategory::Commercial => write!(f, "commercial"),
            ProjectCategory::Cultural => write!(f, "cultural"),
            ProjectCategory::Interior => write!(f, "interior"),
        }
    }
}

impl std::str::FromStr for ProjectCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "residential" => Ok(ProjectCategory::Residential),
            "commercial" => Ok(ProjectCategory::Commercial),
            "cultural" => Ok(ProjectCategory::Cultural),
            "interior" => Ok(ProjectCategory::Interior),
            _ => Err(format!(
                "Invalid category: {} (expected residential, commercial, cultural, or interior)",
                s
            )),
        }
    }
}

/// A portfolio project shown on the public site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub title_en: String,
    pub title_ar: String,
    pub category: ProjectCategory,
    pub location: String,
    pub desc_en: String,
    pub desc_ar: String,
    pub image: String,
    pub status: PublishStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Record for Project {
    const KIND: Kind = Kind::Projects;

    fn id(&self) -> Option<Uuid> {
        self.id
    }

    fn set_id(&mut self, id: Uuid) {
        self.id = Some(id);
    }

    fn stamp_created(&mut self, at: DateTime<Utc>) {
        self.created_at = Some(at);
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
    fn test_serializes_with_camel_case_keys() {
        let project = Project {
            title_en: "Skyline Tower".to_string(),
            title_ar: "برج الأفق".to_string(),
            category: ProjectCategory::Commercial,
            location: "Riyadh".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_string(&project).unwrap();
        assert!(json.contains("\"titleEn\":\"Skyline Tower\""));
        assert!(json.contains("\"titleAr\":\"برج الأفق\""));
        assert!(json.contains("\"category\":\"commercial\""));
        assert!(json.contains("\"status\":\"published\""));
        // Unsaved records carry no id or creation stamp.
        assert!(!json.contains("\"id\""));
        assert!(!json.contains("\"createdAt\""));
    }

    #[test]
    fn test_deserializes_partial_stored_record() {
        let project: Project =
            serde_json::from_str(r#"{"titleEn":"Villa","category":"residential"}"#).unwrap();
        assert_eq!(project.title_en, "Villa");
        assert_eq!(project.category, ProjectCategory::Residential);
        assert_eq!(project.status, PublishStatus::Published);
        assert!(project.id.is_none());
    }

    #[test]
    fn test_validate_requires_english_title() {
        let project = Project::default();
        let err = project.validate().unwrap_err();
        assert_eq!(err.fields.len(), 1);
        assert_eq!(err.fields[0].field, "titleEn");

        let project = Project {
            title_en: "Skyline Tower".to_string(),
            ..Default::default()
        };
        assert!(project.validate().is_ok());
    }

    #[test]
    fn test_category_parse_rejects_unknown() {
        assert_eq!(
            "interior".parse::<ProjectCategory>().unwrap(),
            ProjectCategory::Interior
        );
        assert!("industrial".parse::<ProjectCategory>().is_err());
    }
}
