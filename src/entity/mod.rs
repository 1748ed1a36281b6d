mod article;
mod project;
mod seo;
mod service;
mod session;
mod settings;
mod testimonial;

pub use article::{Article, ArticleCategory};
pub use project::{Project, ProjectCategory};
pub use seo::SeoSettings;
pub use service::Service;
pub use session::AdminSession;
pub use settings::{ContactInfo, HeroContent, SiteSettings, SiteStats, SocialLinks};
pub use testimonial::Testimonial;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;
use crate::locale::Lang;

/// The four content collections managed by the admin panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Projects,
    Articles,
    Services,
    Testimonials,
}

impl Kind {
    /// Storage key the collection is persisted under.
    pub fn storage_key(self) -> &'static str {
        match self {
            Kind::Projects => "archstudio_projects",
            Kind::Articles => "archstudio_articles",
            Kind::Services => "archstudio_services",
            Kind::Testimonials => "archstudio_testimonials",
        }
    }

    pub fn singular(self) -> &'static str {
        match self {
            Kind::Projects => "project",
            Kind::Articles => "article",
            Kind::Services => "service",
            Kind::Testimonials => "testimonial",
        }
    }

    /// Section heading shown above the list view.
    pub fn title(self, lang: Lang) -> &'static str {
        match self {
            Kind::Projects => lang.pick("Manage Projects", "إدارة المشاريع"),
            Kind::Articles => lang.pick("Manage Articles", "إدارة المقالات"),
            Kind::Services => lang.pick("Manage Services", "إدارة الخدمات"),
            Kind::Testimonials => lang.pick("Manage Testimonials", "إدارة آراء العملاء"),
        }
    }

    /// Short label for the dashboard count cards.
    pub fn label(self, lang: Lang) -> &'static str {
        match self {
            Kind::Projects => lang.pick("Projects", "المشاريع"),
            Kind::Articles => lang.pick("Articles", "المقالات"),
            Kind::Services => lang.pick("Services", "الخدمات"),
            Kind::Testimonials => lang.pick("Testimonials", "آراء العملاء"),
        }
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.singular())
    }
}

impl std::str::FromStr for Kind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "project" | "projects" => Ok(Kind::Projects),
            "article" | "articles" => Ok(Kind::Articles),
            "service" | "services" => Ok(Kind::Services),
            "testimonial" | "testimonials" => Ok(Kind::Testimonials),
            _ => Err(format!(
                "Invalid kind: {} (expected project, article, service, or testimonial)",
                s
            )),
        }
    }
}

/// Storage slots that hold a single record, replaced wholesale on save.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Settings,
    Seo,
}

impl Slot {
    pub fn storage_key(self) -> &'static str {
        match self {
            Slot::Settings => "archstudio_settings",
            Slot::Seo => "archstudio_seo",
        }
    }

    pub fn title(self, lang: Lang) -> &'static str {
        match self {
            Slot::Settings => lang.pick("Site Settings", "إعدادات الموقع"),
            Slot::Seo => lang.pick("SEO Settings", "إعدادات SEO"),
        }
    }
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Slot::Settings => write!(f, "settings"),
            Slot::Seo => write!(f, "seo"),
        }
    }
}

/// Visibility of a project or article on the public site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PublishStatus {
    #[default]
    Published,
    Draft,
}

impl std::fmt::Display for PublishStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PublishStatus::Published => write!(f, "published"),
            PublishStatus::Draft => write!(f, "draft"),
        }
    }
}

impl std::str::FromStr for PublishStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "published" => Ok(PublishStatus::Published),
            "draft" => Ok(PublishStatus::Draft),
            _ => Err(format!("Invalid status: {} (expected published or draft)", s)),
        }
    }
}

/// A unit of content stored in one of the four collections. The store owns
/// identity: ids and creation stamps are assigned on first save, never by
/// callers.
pub trait Record: Clone + Serialize + DeserializeOwned {
    const KIND: Kind;

    fn id(&self) -> Option<Uuid>;

    fn set_id(&mut self, id: Uuid);

    /// Called once when the record is first appended. Kinds without creation
    /// metadata leave this as a no-op.
    fn stamp_created(&mut self, _at: DateTime<Utc>) {}

    /// Field-level checks run before any write.
    fn validate(&self) -> Result<(), ValidationError>;
}

/// A record stored alone under one key and replaced in full on save.
pub trait Singleton: Clone + Serialize + DeserializeOwned {
    const SLOT: Slot;
}
