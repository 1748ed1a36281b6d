use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Kind, PublishStatus, Record};
use crate::error::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ArticleCategory {
    #[default]
    News,
    Insights,
    Awards,
}

impl std::fmt::Display for ArticleCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArticleCategory::News => write!(f, "news"),
            ArticleCategory::Insights => write!(f, "insights"),
            ArticleCategory::Awards => write!(f, "awards"),
        }
    }
}

impl std::str::FromStr for ArticleCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "news" => Ok(ArticleCategory::News),
            "insights" => Ok(ArticleCategory::Insights),
            "awards" => Ok(ArticleCategory::Awards),
            _ => Err(format!(
                "Invalid category: {} (expected news, insights, or awards)",
                s
            )),
        }
    }
}

/// A news/blog entry. `content_en` holds the rich-text widget's HTML output
/// verbatim; only the English body exists in the original data model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Article {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub title_en: String,
    pub title_ar: String,
    pub category: ArticleCategory,
    /// Publication date; filled with the creation date when not provided.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    pub excerpt_en: String,
    pub excerpt_ar: String,
    pub content_en: String,
    pub image: String,
    pub status: PublishStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Record for Article {
    const KIND: Kind = Kind::Articles;

    fn id(&self) -> Option<Uuid> {
        self.id
    }

    fn set_id(&mut self, id: Uuid) {
        self.id = Some(id);
    }

    fn stamp_created(&mut self, at: DateTime<Utc>) {
        self.created_at = Some(at);
        if self.date.is_none() {
            self.date = Some(at.date_naive());
        }
    }

    fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = ValidationError::new();
        if self.title_en.trim().is_empty() {
            errors.push("titleEn", "is required");
        }
        errors.into_result()
    }
}
