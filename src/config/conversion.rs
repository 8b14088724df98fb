//! Per-scope conversion settings
//!
//! One [`ConversionSettings`] instance exists for each view scope: the
//! reading-view defaults and the edit-view overrides.

use serde::{Deserialize, Serialize};

/// How internal and external links are treated when copying
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LinkConversion {
    /// Keep links as written
    #[default]
    Keep,
    /// Replace every link with its display text
    Remove,
    /// Keep external links, flatten internal ones to text
    External,
}

/// How footnote references are treated when copying
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FootnoteConversion {
    /// Keep footnote references as written
    #[default]
    Keep,
    /// Strip footnote references entirely
    Remove,
    /// Rewrite references into a readable inline form
    Format,
}

/// What happens to callout titles when copying
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CalloutTitle {
    /// Keep the Obsidian `[!note]` syntax
    #[default]
    Obsidian,
    /// Rewrite the title as bold text
    Strong,
    /// Drop the title line
    Remove,
}

/// Conversion behavior for one view scope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionSettings {
    /// Link handling
    #[serde(default)]
    pub links: LinkConversion,

    /// Footnote handling
    #[serde(default)]
    pub footnotes: FootnoteConversion,

    /// Callout title handling
    #[serde(default)]
    pub callout: CalloutTitle,

    /// Convert `==highlight==` syntax to standard Markdown
    #[serde(default)]
    pub highlight: bool,

    /// Preserve forced line breaks
    #[serde(default)]
    pub hard_break: bool,
}

impl Default for ConversionSettings {
    fn default() -> Self {
        Self {
            links: LinkConversion::default(),
            footnotes: FootnoteConversion::default(),
            callout: CalloutTitle::default(),
            highlight: false,
            hard_break: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversion_defaults() {
        let settings = ConversionSettings::default();
        assert_eq!(settings.links, LinkConversion::Keep);
        assert_eq!(settings.footnotes, FootnoteConversion::Keep);
        assert_eq!(settings.callout, CalloutTitle::Obsidian);
        assert!(!settings.highlight);
        assert!(!settings.hard_break);
    }

    #[test]
    fn test_enums_serialize_lowercase() {
        let settings = ConversionSettings {
            links: LinkConversion::External,
            footnotes: FootnoteConversion::Format,
            callout: CalloutTitle::Strong,
            highlight: true,
            hard_break: false,
        };
        let toml = toml::to_string(&settings).unwrap();
        assert!(toml.contains("links = \"external\""));
        assert!(toml.contains("footnotes = \"format\""));
        assert!(toml.contains("callout = \"strong\""));
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: ConversionSettings = toml::from_str("links = \"remove\"").unwrap();
        assert_eq!(settings.links, LinkConversion::Remove);
        assert_eq!(settings.footnotes, FootnoteConversion::Keep);
        assert!(!settings.highlight);
    }
}
