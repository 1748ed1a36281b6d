use serde::{Deserialize, Serialize};

use super::{Singleton, Slot};

/// Site-wide settings singleton. Every field is optional: a save replaces
/// the whole stored record with exactly what the caller provides, so absent
/// fields and sections stay absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SiteSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hero: Option<HeroContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<SiteStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<ContactInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub social: Option<SocialLinks>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct HeroContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle_en: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle_ar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_en: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_ar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desc_en: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desc_ar: Option<String>,
}

/// Headline numbers shown on the public landing page, kept as text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SiteStats {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projects: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub years: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub awards: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_en: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_ar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hours_en: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hours_ar: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SocialLinks {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
}

impl Singleton for SiteSettings {
    const SLOT: Slot = Slot::Settings;
}
