//! Core types for ChainKnight

use serde::{Deserialize, Serialize};

/// Short unique token identifying a catalog entry (e.g. `"wayne"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ToolId(String);

impl ToolId {
    /// Create a ToolId from any string-like value
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw token
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ToolId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ToolId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for ToolId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ToolId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Icon shown next to a tool. Rendering is left to the UI layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolIcon {
    Sword,
    Brain,
    Zap,
}

impl ToolIcon {
    /// Lower-case icon name, usable as a CSS modifier
    pub fn name(&self) -> &'static str {
        match self {
            ToolIcon::Sword => "sword",
            ToolIcon::Brain => "brain",
            ToolIcon::Zap => "zap",
        }
    }
}

/// One external destination the dashboard can display.
///
/// Presentation fields (`icon`, `category`, `description`) are plain data;
/// nothing in the state machine depends on them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolDescriptor {
    /// Unique id within the catalog
    pub id: ToolId,
    /// Human-readable label
    pub name: String,
    /// Absolute destination address
    pub url: String,
    /// One-line tagline shown on the catalog card
    pub description: String,
    /// Icon reference
    pub icon: ToolIcon,
    /// Category label used for the card accent
    pub category: String,
}

impl ToolDescriptor {
    pub fn new(
        id: impl Into<ToolId>,
        name: impl Into<String>,
        url: impl Into<String>,
        description: impl Into<String>,
        icon: ToolIcon,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            url: url.into(),
            description: description.into(),
            icon,
            category: category.into(),
        }
    }

    /// Whether `url` is an absolute http(s) address with a host part
    pub fn has_absolute_url(&self) -> bool {
        let rest = self
            .url
            .strip_prefix("https://")
            .or_else(|| self.url.strip_prefix("http://"));
        matches!(rest, Some(host) if !host.is_empty() && !host.starts_with('/'))
    }
}
