//! The dashboard aggregate.
//!
//! Owns the catalog, config, view state machine, tab set, progress simulator
//! and access gate, and is the only thing the UI talks to. It never sleeps:
//! commands that need a delay return [`TimerRequest`]s, the host waits them
//! out and hands each one back to [`Dashboard::fire`]. Every request carries
//! the [`FrameTicket`] it was issued under, so requests that outlive their
//! load are dropped there.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::catalog::Catalog;
use crate::config::{DashboardConfig, LayoutMode, LoadPolicy};
use crate::embed::{ExternalLink, FrameSpec, Navigator};
use crate::error::{ChainError, ChainResult};
use crate::gate::AccessGate;
use crate::progress::ProgressSimulator;
use crate::storage::KeyValueStore;
use crate::tabs::{TabSet, TabTicket};
use crate::types::{ToolDescriptor, ToolId};
use crate::view::{LoadTicket, Phase, ViewMachine};

/// Identifies the frame a callback came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameTicket {
    /// Frame of the single-tool layouts
    Single(LoadTicket),
    /// Frame of one tab
    Tab(TabTicket),
}

/// User actions and frame callbacks
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Select a catalog entry
    Open(ToolId),
    /// Frame finished loading
    ContentReady(FrameTicket),
    /// Frame reported an error
    LoadFailed(FrameTicket),
    /// Return to the catalog
    Back,
    /// Reload a tool that failed
    Retry,
    /// Reload a tab that failed
    RetryTab(ToolId),
    ActivateTab(ToolId),
    CloseTab(ToolId),
    SubmitKey(String),
    ToggleGating,
    SignOut,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    /// Fixed-delay policy completion
    LoadDelay,
    /// Fade-in grace after the ready signal
    Grace,
    /// Give up waiting for the ready signal
    Timeout,
    /// Next progress increment
    ProgressTick,
}

/// A delayed callback the host must schedule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerRequest {
    pub kind: TimerKind,
    pub ticket: FrameTicket,
    pub delay: Duration,
}

/// One open tab, ready to render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabSnapshot {
    pub tool: ToolDescriptor,
    pub frame: FrameSpec,
    pub ticket: TabTicket,
    pub ready: bool,
    pub failed: bool,
    pub active: bool,
}

/// Everything the UI renders, as a cloneable value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardSnapshot {
    pub layout: LayoutMode,
    pub tools: Vec<ToolDescriptor>,
    pub phase: Phase,
    pub selected: Option<ToolDescriptor>,
    /// Frame to mount; present from `Loading` on so the load happens behind the overlay
    pub frame: Option<FrameSpec>,
    pub ticket: Option<LoadTicket>,
    pub content_ready: bool,
    pub progress: u8,
    pub tabs: Vec<TabSnapshot>,
    pub active_tab: Option<ToolId>,
    /// Catalog may be shown
    pub unlocked: bool,
    pub gate_required: bool,
    pub gating_enabled: bool,
    /// A key has been accepted and is remembered
    pub key_stored: bool,
}

pub struct Dashboard<S> {
    catalog: Catalog,
    config: DashboardConfig,
    view: ViewMachine,
    tabs: TabSet,
    progress: ProgressSimulator,
    gate: AccessGate<S>,
    rng: StdRng,
}

impl<S: KeyValueStore> Dashboard<S> {
    /// Dashboard over the built-in catalog.
    pub fn new(config: DashboardConfig, store: S) -> ChainResult<Self> {
        Self::with_catalog(config, Catalog::builtin(), store)
    }

    pub fn with_catalog(config: DashboardConfig, catalog: Catalog, store: S) -> ChainResult<Self> {
        config.validate()?;
        if let Some(id) = &config.auto_open {
            if !catalog.contains(id) {
                return Err(ChainError::UnknownTool(id.clone()));
            }
        }

        let gate = AccessGate::load(store)?;
        let progress = ProgressSimulator::new(config.progress_cap, config.progress_max_step);

        Ok(Self {
            catalog,
            config,
            view: ViewMachine::new(),
            tabs: TabSet::new(),
            progress,
            gate,
            rng: StdRng::from_os_rng(),
        })
    }

    /// Replace the progress RNG with a seeded one (deterministic tests)
    pub fn seeded(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn view(&self) -> &ViewMachine {
        &self.view
    }

    pub fn tabs(&self) -> &TabSet {
        &self.tabs
    }

    pub fn progress(&self) -> u8 {
        self.progress.value()
    }

    pub fn gate(&self) -> &AccessGate<S> {
        &self.gate
    }

    /// Whether the catalog may be shown
    pub fn is_unlocked(&self) -> bool {
        !self.config.gate_required || self.gate.is_authenticated()
    }

    /// Open the configured startup tool, if any.
    ///
    /// The grid layout always shows a frame, so it falls back to the first
    /// catalog entry.
    pub fn startup(&mut self) -> Vec<TimerRequest> {
        self.initial_open()
    }

    /// Apply one command. Only gate commands can fail; everything else that
    /// does not apply to the current state is ignored.
    pub fn handle(&mut self, command: Command) -> ChainResult<Vec<TimerRequest>> {
        match command {
            Command::Open(id) => Ok(self.open(&id)),
            Command::ContentReady(ticket) => Ok(self.content_ready(&ticket)),
            Command::LoadFailed(ticket) => {
                self.load_failed(&ticket);
                Ok(Vec::new())
            }
            Command::Back => {
                self.back();
                Ok(Vec::new())
            }
            Command::Retry => Ok(self.retry()),
            Command::RetryTab(id) => match self.tabs.retry(&id) {
                Some(ticket) => Ok(self.tab_timers(&ticket)),
                None => {
                    tracing::debug!(tool = %id, "Ignoring retry of a tab that has not failed");
                    Ok(Vec::new())
                }
            },
            Command::ActivateTab(id) => {
                if !self.tabs.activate(&id) {
                    tracing::debug!(tool = %id, "Ignoring activation of closed tab");
                }
                Ok(Vec::new())
            }
            Command::CloseTab(id) => {
                if self.tabs.close(&id) {
                    tracing::info!(tool = %id, "Tab closed");
                }
                Ok(Vec::new())
            }
            Command::SubmitKey(candidate) => {
                self.gate.submit_key(&candidate)?;
                Ok(self.initial_open())
            }
            Command::ToggleGating => {
                self.gate.toggle_gating()?;
                Ok(self.after_gate_change())
            }
            Command::SignOut => {
                self.gate.sign_out()?;
                Ok(self.after_gate_change())
            }
        }
    }

    /// Deliver an elapsed timer. Stale timers are dropped.
    pub fn fire(&mut self, timer: &TimerRequest) -> Vec<TimerRequest> {
        match &timer.ticket {
            FrameTicket::Single(ticket) => self.fire_single(timer.kind, ticket),
            FrameTicket::Tab(ticket) => {
                // Tabs only ever schedule a timeout
                if timer.kind == TimerKind::Timeout && !self.tabs.fail(ticket) {
                    tracing::debug!(
                        tool = %ticket.tool,
                        generation = ticket.generation,
                        "Dropping stale tab timeout"
                    );
                }
                Vec::new()
            }
        }
    }

    fn fire_single(&mut self, kind: TimerKind, ticket: &LoadTicket) -> Vec<TimerRequest> {
        if !self.view.is_current(ticket) {
            tracing::debug!(
                kind = ?kind,
                tool = %ticket.tool,
                generation = ticket.generation,
                "Dropping stale timer"
            );
            return Vec::new();
        }

        match kind {
            TimerKind::LoadDelay | TimerKind::Grace => {
                if self.view.activate(ticket) {
                    self.progress.complete();
                }
                Vec::new()
            }
            TimerKind::Timeout => {
                // Ready arrived; the grace timer owns the transition now
                if self.view.content_ready() {
                    return Vec::new();
                }
                if self.view.fail(ticket) {
                    self.progress.stop();
                }
                Vec::new()
            }
            TimerKind::ProgressTick => {
                if !self.progress.is_running() {
                    return Vec::new();
                }
                self.progress.tick(&mut self.rng);
                vec![self.timer(TimerKind::ProgressTick, ticket, self.config.progress_tick())]
            }
        }
    }

    pub fn snapshot(&self) -> DashboardSnapshot {
        let selected = self
            .view
            .selected()
            .and_then(|id| self.catalog.get(id.as_str()))
            .cloned();
        let ticket = self.view.selected().map(|tool| LoadTicket {
            tool: tool.clone(),
            generation: self.view.generation(),
        });

        let active_tab = self.tabs.active().cloned();
        let tabs = self
            .tabs
            .tabs()
            .iter()
            .filter_map(|tab| {
                let tool = self.catalog.get(tab.tool.as_str())?;
                Some(TabSnapshot {
                    frame: FrameSpec::for_tool(tool),
                    tool: tool.clone(),
                    ticket: TabTicket {
                        tool: tab.tool.clone(),
                        generation: tab.generation,
                    },
                    ready: tab.ready,
                    failed: tab.failed,
                    active: active_tab.as_ref() == Some(&tab.tool),
                })
            })
            .collect();

        DashboardSnapshot {
            layout: self.config.layout,
            tools: self.catalog.iter().cloned().collect(),
            phase: self.view.phase(),
            frame: selected.as_ref().map(FrameSpec::for_tool),
            selected,
            ticket,
            content_ready: self.view.content_ready(),
            progress: self.progress.value(),
            tabs,
            active_tab,
            unlocked: self.is_unlocked(),
            gate_required: self.config.gate_required,
            gating_enabled: self.gate.gating_enabled(),
            key_stored: self.gate.stored_key().is_some(),
        }
    }

    /// "Open in New Tab" for a catalog entry.
    pub fn open_external(&self, id: &str, navigator: &dyn Navigator) -> ChainResult<()> {
        if !self.is_unlocked() {
            return Err(ChainError::GateClosed);
        }
        let tool = self
            .catalog
            .get(id)
            .ok_or_else(|| ChainError::UnknownTool(id.to_string()))?;
        tracing::info!(tool = %tool.id, url = %tool.url, "Opening in new tab");
        navigator.open_external(&ExternalLink::for_tool(tool))
    }

    fn open(&mut self, id: &ToolId) -> Vec<TimerRequest> {
        if !self.is_unlocked() {
            tracing::warn!(tool = %id, "Ignoring open while the access gate is closed");
            return Vec::new();
        }

        if !self.config.layout.is_single_tool() {
            if !self.catalog.contains(id.as_str()) {
                tracing::warn!(tool = %id, "Ignoring open of unknown tool");
                return Vec::new();
            }
            let reopened = self.tabs.is_open(id);
            let ticket = self.tabs.open(id.clone());
            if reopened {
                return Vec::new();
            }
            return self.tab_timers(&ticket);
        }

        match self.view.open(&self.catalog, id.as_str()) {
            Ok(ticket) => self.begin_loading(&ticket),
            Err(rejected) => {
                tracing::warn!(%rejected, "Ignoring open");
                Vec::new()
            }
        }
    }

    fn content_ready(&mut self, ticket: &FrameTicket) -> Vec<TimerRequest> {
        match ticket {
            FrameTicket::Single(ticket) => {
                if !self.view.mark_ready(ticket) {
                    tracing::debug!(tool = %ticket.tool, "Ignoring stale ready signal");
                    return Vec::new();
                }
                self.progress.complete();
                match self.config.load_policy {
                    LoadPolicy::ReadySignal { grace_ms } => {
                        vec![self.timer(TimerKind::Grace, ticket, Duration::from_millis(grace_ms))]
                    }
                    LoadPolicy::FixedDelay { .. } => Vec::new(),
                }
            }
            FrameTicket::Tab(ticket) => {
                if !self.tabs.mark_ready(ticket) {
                    tracing::debug!(tool = %ticket.tool, "Ignoring stale tab ready signal");
                }
                Vec::new()
            }
        }
    }

    fn load_failed(&mut self, ticket: &FrameTicket) {
        match ticket {
            FrameTicket::Single(ticket) => {
                if self.view.fail(ticket) {
                    self.progress.stop();
                }
            }
            FrameTicket::Tab(ticket) => {
                if !self.tabs.fail(ticket) {
                    tracing::debug!(tool = %ticket.tool, "Ignoring stale tab error");
                }
            }
        }
    }

    fn back(&mut self) {
        if self.config.layout.is_single_tool() {
            self.view.back();
            self.progress.reset();
        } else {
            self.tabs.clear();
        }
    }

    fn retry(&mut self) -> Vec<TimerRequest> {
        match self.view.retry() {
            Some(ticket) => self.begin_loading(&ticket),
            None => Vec::new(),
        }
    }

    fn begin_loading(&mut self, ticket: &LoadTicket) -> Vec<TimerRequest> {
        self.progress.start();

        let mut timers = vec![self.timer(TimerKind::ProgressTick, ticket, self.config.progress_tick())];
        match self.config.load_policy {
            LoadPolicy::FixedDelay { delay_ms } => {
                timers.push(self.timer(TimerKind::LoadDelay, ticket, Duration::from_millis(delay_ms)));
            }
            LoadPolicy::ReadySignal { .. } => {
                timers.push(self.timer(TimerKind::Timeout, ticket, self.config.load_timeout()));
            }
        }
        timers
    }

    fn initial_open(&mut self) -> Vec<TimerRequest> {
        if !self.is_unlocked() || self.view.selected().is_some() || !self.tabs.is_empty() {
            return Vec::new();
        }

        let target = match (&self.config.auto_open, self.config.layout) {
            (Some(id), _) => ToolId::from(id.as_str()),
            (None, LayoutMode::Grid) => self.catalog.first().id.clone(),
            (None, _) => return Vec::new(),
        };
        self.open(&target)
    }

    fn after_gate_change(&mut self) -> Vec<TimerRequest> {
        if self.is_unlocked() {
            return self.initial_open();
        }
        // Locked again: nothing may stay on screen
        self.view.back();
        self.progress.reset();
        self.tabs.clear();
        Vec::new()
    }

    /// A tab has no overlay to animate; it only needs the ready timeout
    fn tab_timers(&self, ticket: &TabTicket) -> Vec<TimerRequest> {
        match self.config.load_policy {
            LoadPolicy::ReadySignal { .. } => vec![TimerRequest {
                kind: TimerKind::Timeout,
                ticket: FrameTicket::Tab(ticket.clone()),
                delay: self.config.load_timeout(),
            }],
            LoadPolicy::FixedDelay { .. } => Vec::new(),
        }
    }

    fn timer(&self, kind: TimerKind, ticket: &LoadTicket, delay: Duration) -> TimerRequest {
        TimerRequest {
            kind,
            ticket: FrameTicket::Single(ticket.clone()),
            delay,
        }
    }
}
