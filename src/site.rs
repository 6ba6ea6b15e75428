//! Declarative site configuration
//!
//! Plain data consumed by a page-composition layer: logo, external
//! links, footer text and page metadata. No behavior beyond loading
//! from TOML with defaults for anything omitted.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::Result;

/// Top-level site configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Site logo
    pub logo: Option<Logo>,
    /// Link to the project repository
    pub project_link: Option<String>,
    /// Link to the community chat
    pub chat_link: Option<String>,
    /// Base URL for "edit this page" links
    pub docs_repository_base: Option<String>,
    /// Footer text
    pub footer_text: Option<String>,
    /// Page metadata tags
    pub meta: PageMeta,
}

/// Logo image reference
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Logo {
    /// Image source URL or path
    pub src: String,
    /// Alternative text
    pub alt: Option<String>,
    /// Display width in pixels
    pub width: Option<u32>,
    /// Display height in pixels
    pub height: Option<u32>,
}

/// Page metadata (title, description, social preview)
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageMeta {
    /// Page title
    pub title: Option<String>,
    /// Page description
    pub description: Option<String>,
    /// Social preview image
    pub image: Option<String>,
}

impl SiteConfig {
    /// Parse a site configuration from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load a site configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}
