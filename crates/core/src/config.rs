//! Site configuration.
//!
//! `SiteConfig::default()` is the published page. A JSON document can
//! override any subset of fields; missing fields fall back to the defaults.

use serde::{Deserialize, Serialize};

use crate::error::SiteError;
use crate::section::{default_sections, Registry, SectionDescriptor};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OwnerConfig {
    pub name: String,
    pub location: String,
    pub email: String,
}

impl Default for OwnerConfig {
    fn default() -> Self {
        Self {
            name: "Jonas Groff".to_string(),
            location: "Pittsburgh, PA".to_string(),
            email: "jonasgroff@gmail.com".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkConfig {
    pub profile_url: String,
    pub profile_label: String,
    pub mail_subject: String,
    pub mail_body: String,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            profile_url: "https://www.linkedin.com/in/jonasgroff".to_string(),
            profile_label: "LinkedIn".to_string(),
            mail_subject: "Website Connection".to_string(),
            mail_body: "Hi Jonas, I'd love to connect about...".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    pub profile_photo: String,
    pub profile_photo_alt: String,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            profile_photo: "/1517759473911.jpg".to_string(),
            profile_photo_alt: "Profile".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub owner: OwnerConfig,
    #[serde(default)]
    pub links: LinkConfig,
    #[serde(default)]
    pub assets: AssetConfig,
    #[serde(default = "default_sections")]
    pub sections: Vec<SectionDescriptor>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            owner: OwnerConfig::default(),
            links: LinkConfig::default(),
            assets: AssetConfig::default(),
            sections: default_sections(),
        }
    }
}

impl SiteConfig {
    /// Parses and validates a JSON config.
    pub fn from_json_str(raw: &str) -> Result<Self, SiteError> {
        let cfg: SiteConfig = serde_json::from_str(raw)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), SiteError> {
        self.registry().map(|_| ())
    }

    pub fn registry(&self) -> Result<Registry, SiteError> {
        Registry::new(self.sections.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let cfg = SiteConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.registry().unwrap(), Registry::default());
    }

    #[test]
    fn empty_object_yields_defaults() {
        let cfg = SiteConfig::from_json_str("{}").unwrap();
        assert_eq!(cfg, SiteConfig::default());
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let raw = r#"{
            "owner": { "email": "me@example.com" },
            "sections": [
                { "id": "header", "title": "Say hi" },
                { "id": "projects", "title": "Projects" }
            ]
        }"#;
        let cfg = SiteConfig::from_json_str(raw).unwrap();
        assert_eq!(cfg.owner.email, "me@example.com");
        assert_eq!(cfg.owner.location, "Pittsburgh, PA");
        assert_eq!(cfg.links, LinkConfig::default());
        assert_eq!(cfg.sections.len(), 2);
        assert_eq!(cfg.sections[1].id, "projects");
    }

    #[test]
    fn invalid_json_and_invalid_registry_are_rejected() {
        assert!(matches!(
            SiteConfig::from_json_str("{ not json"),
            Err(SiteError::Config(_))
        ));
        assert!(matches!(
            SiteConfig::from_json_str(r#"{ "sections": [] }"#),
            Err(SiteError::EmptyRegistry)
        ));
    }

    #[test]
    fn ids_with_whitespace_are_rejected() {
        let raw = r#"{
            "sections": [
                { "id": "my projects", "title": "Projects" },
                { "id": " skills", "title": "Skills" }
            ]
        }"#;
        assert!(matches!(
            SiteConfig::from_json_str(raw),
            Err(SiteError::InvalidSectionId { index: 0, .. })
        ));

        let raw = r#"{ "sections": [ { "id": " skills", "title": "Skills" } ] }"#;
        match SiteConfig::from_json_str(raw) {
            Err(SiteError::InvalidSectionId { index, id }) => {
                assert_eq!(index, 0);
                assert_eq!(id, " skills");
            }
            other => panic!("expected invalid id error, got {other:?}"),
        }
    }
}
