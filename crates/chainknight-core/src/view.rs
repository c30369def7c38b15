//! Single-tool view state machine.
//!
//! ```text
//!            open(t)                activate(ticket)
//!   Idle ───────────────▶ Loading(t) ───────────────▶ Active(t)
//!    ▲                     │     ▲                       │
//!    │        fail(ticket) ▼     │ retry()               │
//!    │                  Failed(t)                         │
//!    └────────────── back() from any state ──────────────┘
//! ```
//!
//! Every entry into `Loading` bumps a generation counter and hands out a
//! [`LoadTicket`] carrying it. Timers and frame callbacks present their
//! ticket when they fire; a ticket whose generation is no longer current is
//! stale and is ignored, so a callback issued before `back()` can never
//! resurrect an old `Active` transition.

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::types::ToolId;

/// Which screen the single-tool layouts render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Phase {
    /// Catalog grid
    #[default]
    Idle,
    /// Frame fetching in the background, loading overlay shown
    Loading,
    /// Frame shown full-size
    Active,
    /// Frame never signalled ready before the load timeout
    Failed,
}

impl Phase {
    pub fn label(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Loading => "loading",
            Phase::Active => "active",
            Phase::Failed => "failed",
        }
    }
}

/// Proof that a callback belongs to one particular Loading phase.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LoadTicket {
    pub tool: ToolId,
    pub generation: u64,
}

/// Why an `open` request was ignored
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenRejected {
    /// Id is not in the catalog
    UnknownTool(String),
    /// Another tool is still loading
    LoadInFlight(ToolId),
}

impl std::fmt::Display for OpenRejected {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OpenRejected::UnknownTool(id) => write!(f, "unknown tool {id}"),
            OpenRejected::LoadInFlight(id) => write!(f, "{id} is still loading"),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ViewMachine {
    selected: Option<ToolId>,
    phase: Phase,
    generation: u64,
    content_ready: bool,
}

impl ViewMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Tool currently loading, active or failed
    pub fn selected(&self) -> Option<&ToolId> {
        self.selected.as_ref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether the frame signalled ready during the current Loading phase
    pub fn content_ready(&self) -> bool {
        self.content_ready
    }

    /// Whether `ticket` belongs to the current Loading phase
    pub fn is_current(&self, ticket: &LoadTicket) -> bool {
        self.phase == Phase::Loading
            && ticket.generation == self.generation
            && self.selected.as_ref() == Some(&ticket.tool)
    }

    /// Start loading `id`.
    pub fn open(&mut self, catalog: &Catalog, id: &str) -> Result<LoadTicket, OpenRejected> {
        let Some(tool) = catalog.get(id) else {
            return Err(OpenRejected::UnknownTool(id.to_string()));
        };
        if self.phase == Phase::Loading {
            if let Some(current) = &self.selected {
                return Err(OpenRejected::LoadInFlight(current.clone()));
            }
        }

        Ok(self.begin_loading(tool.id.clone()))
    }

    /// Record the frame's "content ready" signal. At most once per phase.
    pub fn mark_ready(&mut self, ticket: &LoadTicket) -> bool {
        if !self.is_current(ticket) || self.content_ready {
            return false;
        }
        self.content_ready = true;
        true
    }

    /// `Loading(t) → Active(t)`. Returns `false` for stale tickets and for
    /// a phase that has already been activated.
    pub fn activate(&mut self, ticket: &LoadTicket) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.phase = Phase::Active;
        tracing::info!(tool = %ticket.tool, generation = ticket.generation, "Tool active");
        true
    }

    /// `Loading(t) → Failed(t)` after the load timeout.
    pub fn fail(&mut self, ticket: &LoadTicket) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.phase = Phase::Failed;
        tracing::warn!(tool = %ticket.tool, "Tool failed to load");
        true
    }

    /// `Failed(t) → Loading(t)` with a fresh ticket.
    pub fn retry(&mut self) -> Option<LoadTicket> {
        if self.phase != Phase::Failed {
            return None;
        }
        let tool = self.selected.clone()?;
        Some(self.begin_loading(tool))
    }

    /// Return to the catalog from any phase.
    ///
    /// Bumps the generation so every outstanding ticket goes stale.
    pub fn back(&mut self) {
        if self.phase != Phase::Idle {
            tracing::info!(phase = self.phase.label(), "Back to catalog");
        }
        self.generation += 1;
        self.selected = None;
        self.content_ready = false;
        self.phase = Phase::Idle;
    }

    fn begin_loading(&mut self, tool: ToolId) -> LoadTicket {
        self.generation += 1;
        self.content_ready = false;
        self.phase = Phase::Loading;
        self.selected = Some(tool.clone());
        tracing::info!(tool = %tool, generation = self.generation, "Loading tool");
        LoadTicket {
            tool,
            generation: self.generation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_idle() {
        let view = ViewMachine::new();
        assert_eq!(view.phase(), Phase::Idle);
        assert!(view.selected().is_none());
    }

    #[test]
    fn test_open_then_activate() {
        let catalog = Catalog::builtin();
        let mut view = ViewMachine::new();

        let ticket = view.open(&catalog, "alpha").unwrap();
        assert_eq!(view.phase(), Phase::Loading);
        assert_eq!(view.selected().map(|t| t.as_str()), Some("alpha"));

        assert!(view.activate(&ticket));
        assert_eq!(view.phase(), Phase::Active);

        // Exactly once
        assert!(!view.activate(&ticket));
    }

    #[test]
    fn test_open_rejected_while_loading() {
        let catalog = Catalog::builtin();
        let mut view = ViewMachine::new();
        view.open(&catalog, "wayne").unwrap();

        let err = view.open(&catalog, "euler").unwrap_err();
        assert_eq!(err, OpenRejected::LoadInFlight(ToolId::from("wayne")));
        assert_eq!(view.selected().map(|t| t.as_str()), Some("wayne"));
    }

    #[test]
    fn test_unknown_tool_is_rejected_without_state_change() {
        let catalog = Catalog::builtin();
        let mut view = ViewMachine::new();
        let err = view.open(&catalog, "gamma").unwrap_err();
        assert!(matches!(err, OpenRejected::UnknownTool(_)));
        assert_eq!(view.phase(), Phase::Idle);
        assert_eq!(view.generation(), 0);
    }

    #[test]
    fn test_switch_tool_from_active() {
        let catalog = Catalog::builtin();
        let mut view = ViewMachine::new();
        let first = view.open(&catalog, "wayne").unwrap();
        view.activate(&first);

        let second = view.open(&catalog, "euler").unwrap();
        assert_eq!(view.phase(), Phase::Loading);
        assert!(!view.activate(&first));
        assert!(view.activate(&second));
    }

    #[test]
    fn test_mark_ready_once() {
        let catalog = Catalog::builtin();
        let mut view = ViewMachine::new();
        let ticket = view.open(&catalog, "wayne").unwrap();
        assert!(view.mark_ready(&ticket));
        assert!(!view.mark_ready(&ticket));
        assert!(view.content_ready());
    }

    #[test]
    fn test_fail_and_retry() {
        let catalog = Catalog::builtin();
        let mut view = ViewMachine::new();
        let ticket = view.open(&catalog, "euler").unwrap();

        assert!(view.fail(&ticket));
        assert_eq!(view.phase(), Phase::Failed);
        assert!(!view.activate(&ticket));

        let retry = view.retry().unwrap();
        assert_eq!(retry.tool.as_str(), "euler");
        assert!(retry.generation > ticket.generation);
        assert!(view.activate(&retry));
    }

    #[test]
    fn test_retry_only_from_failed() {
        let mut view = ViewMachine::new();
        assert!(view.retry().is_none());
    }
}
