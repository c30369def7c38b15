//! Property-based tests for the view state machine, tab set and progress
//!
//! Uses proptest to drive random command sequences and check the invariants
//! that must hold after every step.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use chainknight_core::{
    Catalog, Command, Dashboard, DashboardConfig, FrameTicket, MemoryStore, Phase,
    ProgressSimulator, TabSet, TimerRequest, ToolId, ViewMachine,
};

// ============================================================================
// Strategy Generators
// ============================================================================

/// Catalog ids plus one that is not in the catalog
fn tool_id_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("wayne".to_string()),
        Just("alpha".to_string()),
        Just("euler".to_string()),
        Just("gamma".to_string()),
    ]
}

/// Steps a user (or the runtime) can take against the dashboard
#[derive(Debug, Clone)]
enum Step {
    Open(String),
    Ready,
    /// Ready signal carrying an old ticket
    StaleReady(usize),
    Back,
    Retry,
    /// Fire the n-th pending timer
    Fire(usize),
}

fn steps_strategy(max_steps: usize) -> impl Strategy<Value = Vec<Step>> {
    prop::collection::vec(
        prop_oneof![
            3 => tool_id_strategy().prop_map(Step::Open),
            2 => Just(Step::Ready),
            1 => (0..8usize).prop_map(Step::StaleReady),
            1 => Just(Step::Back),
            1 => Just(Step::Retry),
            4 => (0..8usize).prop_map(Step::Fire),
        ],
        0..max_steps,
    )
}

#[derive(Debug, Clone)]
enum TabOp {
    Open(String),
    Close(String),
    Activate(String),
}

fn tab_ops_strategy() -> impl Strategy<Value = Vec<TabOp>> {
    prop::collection::vec(
        prop_oneof![
            3 => tool_id_strategy().prop_map(TabOp::Open),
            2 => tool_id_strategy().prop_map(TabOp::Close),
            1 => tool_id_strategy().prop_map(TabOp::Activate),
        ],
        0..40,
    )
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// `phase != Idle` implies a valid selection, and a stale ticket never
    /// changes the phase.
    #[test]
    fn view_invariants_hold(steps in steps_strategy(60), seed in any::<u64>()) {
        let catalog = Catalog::builtin();
        let mut dashboard = Dashboard::new(
            DashboardConfig { gate_required: false, ..Default::default() },
            MemoryStore::new(),
        )
        .unwrap()
        .seeded(seed);

        let mut pending: Vec<TimerRequest> = Vec::new();
        let mut seen_tickets = Vec::new();

        for step in steps {
            match step {
                Step::Open(id) => {
                    pending.extend(dashboard.handle(Command::Open(ToolId::from(id))).unwrap());
                }
                Step::Ready => {
                    if let Some(ticket) = dashboard.snapshot().ticket {
                        seen_tickets.push(ticket.clone());
                        pending.extend(
                            dashboard
                                .handle(Command::ContentReady(FrameTicket::Single(ticket)))
                                .unwrap(),
                        );
                    }
                }
                Step::StaleReady(i) => {
                    if let Some(ticket) = seen_tickets.get(i).cloned() {
                        let is_current = dashboard.view().is_current(&ticket);
                        let before = dashboard.view().phase();
                        dashboard
                            .handle(Command::ContentReady(FrameTicket::Single(ticket)))
                            .unwrap();
                        if !is_current {
                            prop_assert_eq!(dashboard.view().phase(), before);
                        }
                    }
                }
                Step::Back => {
                    dashboard.handle(Command::Back).unwrap();
                    prop_assert_eq!(dashboard.view().phase(), Phase::Idle);
                    prop_assert!(dashboard.view().selected().is_none());
                }
                Step::Retry => {
                    pending.extend(dashboard.handle(Command::Retry).unwrap());
                }
                Step::Fire(i) => {
                    if !pending.is_empty() {
                        let timer = pending.remove(i % pending.len());
                        let was_current = match &timer.ticket {
                            FrameTicket::Single(ticket) => dashboard.view().is_current(ticket),
                            FrameTicket::Tab(_) => false,
                        };
                        let before = dashboard.view().phase();
                        pending.extend(dashboard.fire(&timer));
                        if !was_current {
                            prop_assert_eq!(dashboard.view().phase(), before);
                        }
                    }
                }
            }

            let view = dashboard.view();
            if view.phase() != Phase::Idle {
                let selected = view.selected();
                prop_assert!(selected.is_some());
                prop_assert!(catalog.contains(selected.unwrap().as_str()));
            }
            prop_assert!(dashboard.progress() <= 100);
        }
    }

    /// Progress never decreases within one Loading phase and stays under the cap
    #[test]
    fn progress_is_monotonic(seed in any::<u64>(), cap in 1u8..=99, step in 1u8..=20, ticks in 0usize..200) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut progress = ProgressSimulator::new(cap, step);
        progress.start();

        let mut last = progress.value();
        prop_assert_eq!(last, 0);
        for _ in 0..ticks {
            let value = progress.tick(&mut rng);
            prop_assert!(value >= last);
            prop_assert!(value <= cap);
            last = value;
        }
        progress.complete();
        prop_assert_eq!(progress.value(), 100);
    }

    /// Tabs never duplicate, and `active` is open iff the set is non-empty
    #[test]
    fn tab_set_invariants(ops in tab_ops_strategy()) {
        let mut tabs = TabSet::new();

        for op in ops {
            match op {
                TabOp::Open(id) => {
                    tabs.open(ToolId::from(id.clone()));
                    prop_assert_eq!(tabs.active(), Some(&ToolId::from(id)));
                }
                TabOp::Close(id) => {
                    let was_active = tabs.active() == Some(&ToolId::from(id.clone()));
                    tabs.close(&ToolId::from(id));
                    if was_active {
                        prop_assert_eq!(tabs.active(), tabs.tabs().last().map(|t| &t.tool));
                    }
                }
                TabOp::Activate(id) => {
                    tabs.activate(&ToolId::from(id));
                }
            }

            let mut ids: Vec<_> = tabs.tabs().iter().map(|t| t.tool.clone()).collect();
            let len = ids.len();
            ids.sort();
            ids.dedup();
            prop_assert_eq!(ids.len(), len);

            match tabs.active() {
                Some(active) => prop_assert!(tabs.is_open(active)),
                None => prop_assert!(tabs.is_empty()),
            }
        }
    }

    /// A fresh machine accepts `open` for every catalog id
    #[test]
    fn open_from_idle_always_loads(id in tool_id_strategy()) {
        let catalog = Catalog::builtin();
        let mut view = ViewMachine::new();
        let result = view.open(&catalog, &id);
        prop_assert_eq!(result.is_ok(), catalog.contains(&id));
        if result.is_ok() {
            prop_assert_eq!(view.phase(), Phase::Loading);
        } else {
            prop_assert_eq!(view.phase(), Phase::Idle);
        }
    }
}
