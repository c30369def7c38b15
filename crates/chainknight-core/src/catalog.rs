//! The fixed tool catalog.
//!
//! Built once at startup and never mutated. Order is significant: the
//! catalog grid renders entries in this order and the first entry is the
//! default selection of the grid layout.

use std::collections::HashSet;

use crate::error::{ChainError, ChainResult};
use crate::types::{ToolDescriptor, ToolIcon};

/// Number of entries in the built-in catalog
pub const BUILTIN_TOOL_COUNT: usize = 3;

/// Immutable, ordered sequence of tool descriptors with unique ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    tools: Vec<ToolDescriptor>,
}

impl Catalog {
    /// Build a catalog from a custom list.
    ///
    /// Rejects empty lists, duplicate ids and non-absolute URLs.
    pub fn new(tools: Vec<ToolDescriptor>) -> ChainResult<Self> {
        if tools.is_empty() {
            return Err(ChainError::InvalidCatalog("catalog is empty".into()));
        }

        let mut seen = HashSet::new();
        for tool in &tools {
            if tool.id.as_str().is_empty() {
                return Err(ChainError::InvalidCatalog("empty tool id".into()));
            }
            if !seen.insert(tool.id.clone()) {
                return Err(ChainError::DuplicateTool(tool.id.to_string()));
            }
            if !tool.has_absolute_url() {
                return Err(ChainError::InvalidUrl(tool.url.clone()));
            }
        }

        Ok(Self { tools })
    }

    /// The three ChainKnight tools.
    pub fn builtin() -> Self {
        Self {
            tools: vec![
                ToolDescriptor::new(
                    "wayne",
                    "Wayne Protocol",
                    "https://wayneprotocol.vercel.app",
                    "Advanced protocol management",
                    ToolIcon::Sword,
                    "protocol",
                ),
                ToolDescriptor::new(
                    "alpha",
                    "Alpha Mind",
                    "https://thealpahmind.vercel.app",
                    "Intelligent analysis platform",
                    ToolIcon::Brain,
                    "analysis",
                ),
                ToolDescriptor::new(
                    "euler",
                    "Euler Flow",
                    "https://eulerflow.vercel.app",
                    "Mathematical flow optimization",
                    ToolIcon::Zap,
                    "optimization",
                ),
            ],
        }
    }

    /// Look up a tool by id
    pub fn get(&self, id: &str) -> Option<&ToolDescriptor> {
        self.tools.iter().find(|t| t.id.as_str() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// First entry, the default selection of the grid layout
    pub fn first(&self) -> &ToolDescriptor {
        // Non-empty by construction
        &self.tools[0]
    }

    pub fn iter(&self) -> impl Iterator<Item = &ToolDescriptor> {
        self.tools.iter()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tool(id: &str, url: &str) -> ToolDescriptor {
        ToolDescriptor::new(id, id.to_uppercase(), url, "", ToolIcon::Zap, "test")
    }

    #[test]
    fn test_builtin_catalog() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), BUILTIN_TOOL_COUNT);

        let ids: Vec<_> = catalog.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["wayne", "alpha", "euler"]);

        let alpha = catalog.get("alpha").unwrap();
        assert_eq!(alpha.name, "Alpha Mind");
        assert_eq!(alpha.url, "https://thealpahmind.vercel.app");
        assert_eq!(catalog.first().id.as_str(), "wayne");
    }

    #[test]
    fn test_builtin_catalog_is_valid() {
        let builtin = Catalog::builtin();
        let rebuilt = Catalog::new(builtin.iter().cloned().collect()).unwrap();
        assert_eq!(rebuilt, builtin);
    }

    #[test]
    fn test_lookup_unknown() {
        let catalog = Catalog::builtin();
        assert!(catalog.get("gamma").is_none());
        assert!(!catalog.contains(""));
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let result = Catalog::new(vec![
            tool("a", "https://a.example"),
            tool("a", "https://b.example"),
        ]);
        assert!(matches!(result, Err(ChainError::DuplicateTool(id)) if id == "a"));
    }

    #[test]
    fn test_rejects_empty_and_relative() {
        assert!(matches!(
            Catalog::new(vec![]),
            Err(ChainError::InvalidCatalog(_))
        ));
        assert!(matches!(
            Catalog::new(vec![tool("a", "a.example")]),
            Err(ChainError::InvalidUrl(_))
        ));
    }
}
