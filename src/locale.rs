use serde::{Deserialize, Serialize};

/// Active display language for the bilingual content fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    En,
    Ar,
}

impl Lang {
    /// Projects an English/Arabic field pair to the single string shown in
    /// the active language. An empty member falls back to the other one, so
    /// a record with only one translation still renders a usable row.
    pub fn pick<'a>(&self, en: &'a str, ar: &'a str) -> &'a str {
        let (active, other) = match self {
            Lang::En => (en, ar),
            Lang::Ar => (ar, en),
        };
        if active.is_empty() {
            other
        } else {
            active
        }
    }
}

impl std::fmt::Display for Lang {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Lang::En => write!(f, "en"),
            Lang::Ar => write!(f, "ar"),
        }
    }
}

impl std::str::FromStr for Lang {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" => Ok(Lang::En),
            "ar" => Ok(Lang::Ar),
            _ => Err(format!("Invalid language: {} (expected 'en' or 'ar')", s)),
        }
    }
}
