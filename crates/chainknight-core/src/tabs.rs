//! Multi-tab model.
//!
//! Tools are kept in opening order. Exactly one open tab is active, and the
//! set is empty iff nothing is active. Each tab gets its own generation so
//! a frame callback from a tab that has since been closed and reopened is
//! recognised as stale.

use crate::types::ToolId;

/// One open tab
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub tool: ToolId,
    pub generation: u64,
    /// Frame signalled ready
    pub ready: bool,
    /// Frame errored or timed out before signalling ready
    pub failed: bool,
}

/// Identifies one opening of a tab
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TabTicket {
    pub tool: ToolId,
    pub generation: u64,
}

#[derive(Debug, Clone, Default)]
pub struct TabSet {
    tabs: Vec<Tab>,
    active: Option<ToolId>,
    next_generation: u64,
}

impl TabSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open `tool` and make it active.
    ///
    /// Re-opening an already open tool only switches the active tab; the
    /// existing frame is kept and its ticket returned.
    pub fn open(&mut self, tool: ToolId) -> TabTicket {
        if let Some(tab) = self.tabs.iter().find(|t| t.tool == tool) {
            let ticket = TabTicket {
                tool: tab.tool.clone(),
                generation: tab.generation,
            };
            self.active = Some(tool);
            return ticket;
        }

        self.next_generation += 1;
        let tab = Tab {
            tool: tool.clone(),
            generation: self.next_generation,
            ready: false,
            failed: false,
        };
        let ticket = TabTicket {
            tool: tool.clone(),
            generation: tab.generation,
        };
        self.tabs.push(tab);
        self.active = Some(tool);
        ticket
    }

    /// Switch the active tab. Ignored for tools that are not open.
    pub fn activate(&mut self, tool: &ToolId) -> bool {
        if !self.is_open(tool) {
            return false;
        }
        self.active = Some(tool.clone());
        true
    }

    /// Close `tool`.
    ///
    /// Closing the active tab hands activation to the most recently opened
    /// remaining tab, or leaves nothing active when the set becomes empty.
    pub fn close(&mut self, tool: &ToolId) -> bool {
        let Some(index) = self.tabs.iter().position(|t| &t.tool == tool) else {
            return false;
        };
        self.tabs.remove(index);

        if self.active.as_ref() == Some(tool) {
            self.active = self.tabs.last().map(|t| t.tool.clone());
        }
        true
    }

    /// Record a frame's ready signal. Stale tickets are ignored.
    pub fn mark_ready(&mut self, ticket: &TabTicket) -> bool {
        match self.pending_mut(ticket) {
            Some(tab) => {
                tab.ready = true;
                true
            }
            None => false,
        }
    }

    /// Mark a still-loading tab as failed. Stale tickets and tabs that
    /// already signalled ready are ignored.
    pub fn fail(&mut self, ticket: &TabTicket) -> bool {
        match self.pending_mut(ticket) {
            Some(tab) => {
                tab.failed = true;
                tracing::warn!(tool = %ticket.tool, "Tab failed to load");
                true
            }
            None => false,
        }
    }

    /// Reload a failed tab under a fresh generation.
    ///
    /// Returns `None` when `tool` is not open or has not failed.
    pub fn retry(&mut self, tool: &ToolId) -> Option<TabTicket> {
        let tab = self.tabs.iter_mut().find(|t| &t.tool == tool && t.failed)?;
        self.next_generation += 1;
        let generation = self.next_generation;
        tab.generation = generation;
        tab.ready = false;
        tab.failed = false;
        tracing::info!(tool = %tool, generation, "Retrying tab");
        Some(TabTicket {
            tool: tool.clone(),
            generation,
        })
    }

    /// Current tab for `ticket` while it is still waiting on its frame
    fn pending_mut(&mut self, ticket: &TabTicket) -> Option<&mut Tab> {
        self.tabs.iter_mut().find(|t| {
            t.tool == ticket.tool && t.generation == ticket.generation && !t.ready && !t.failed
        })
    }

    pub fn is_open(&self, tool: &ToolId) -> bool {
        self.tabs.iter().any(|t| &t.tool == tool)
    }

    pub fn active(&self) -> Option<&ToolId> {
        self.active.as_ref()
    }

    /// Open tabs in opening order
    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    /// Close every tab
    pub fn clear(&mut self) {
        self.tabs.clear();
        self.active = None;
    }
}
