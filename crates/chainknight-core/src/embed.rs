//! Embedding surface contract.
//!
//! Tools render inside an iframe whose sandbox grants exactly five
//! permissions. The set is part of the contract: adding or dropping a token
//! changes what third-party content may do inside the dashboard.

use crate::error::ChainResult;
use crate::types::ToolDescriptor;

/// A single iframe sandbox token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SandboxPermission {
    AllowSameOrigin,
    AllowScripts,
    AllowForms,
    AllowPopups,
    AllowTopNavigation,
}

impl SandboxPermission {
    pub fn token(&self) -> &'static str {
        match self {
            SandboxPermission::AllowSameOrigin => "allow-same-origin",
            SandboxPermission::AllowScripts => "allow-scripts",
            SandboxPermission::AllowForms => "allow-forms",
            SandboxPermission::AllowPopups => "allow-popups",
            SandboxPermission::AllowTopNavigation => "allow-top-navigation",
        }
    }
}

/// The complete permission set granted to embedded tools
pub const SANDBOX_PERMISSIONS: [SandboxPermission; 5] = [
    SandboxPermission::AllowSameOrigin,
    SandboxPermission::AllowScripts,
    SandboxPermission::AllowForms,
    SandboxPermission::AllowPopups,
    SandboxPermission::AllowTopNavigation,
];

/// Value of the iframe `sandbox` attribute
pub fn sandbox_attribute() -> String {
    SANDBOX_PERMISSIONS
        .iter()
        .map(SandboxPermission::token)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Everything the UI needs to render one embedded tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameSpec {
    pub url: String,
    pub title: String,
    pub sandbox: String,
}

impl FrameSpec {
    pub fn for_tool(tool: &ToolDescriptor) -> Self {
        Self {
            url: tool.url.clone(),
            title: tool.name.clone(),
            sandbox: sandbox_attribute(),
        }
    }
}

/// "Open in New Tab" link: new top-level context with no opener reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalLink {
    pub url: String,
    pub target: &'static str,
    pub rel: &'static str,
}

impl ExternalLink {
    pub fn for_tool(tool: &ToolDescriptor) -> Self {
        Self {
            url: tool.url.clone(),
            target: "_blank",
            rel: "noopener noreferrer",
        }
    }
}

/// Opens a URL in a new top-level browsing context.
pub trait Navigator {
    fn open_external(&self, link: &ExternalLink) -> ChainResult<()>;
}
