use serde::{Deserialize, Serialize};

use super::{Singleton, Slot};

/// SEO metadata singleton, replaced in full on save like SiteSettings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct SeoSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub og_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub og_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub og_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_area: Option<String>,
}

impl Singleton for SeoSettings {
    const SLOT: Slot = Slot::Seo;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_graph_fields_use_camel_case() {
        let seo = SeoSettings {
            og_title: Some("Arch Studio".to_string()),
            schema_type: Some("ArchitectureFirm".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_string(&seo).unwrap();
        assert_eq!(json, r#"{"ogTitle":"Arch Studio","schemaType":"ArchitectureFirm"}"#);
    }

    #[test]
    fn test_round_trip() {
        let seo = SeoSettings {
            title: Some("Arch Studio | Architecture & Design".to_string()),
            keywords: Some("architecture, design, riyadh".to_string()),
            service_area: Some("Gulf region".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_string(&seo).unwrap();
        let back: SeoSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(back, seo);
    }
}
