//! Edge case and boundary condition tests
//!
//! Exercise the dashboard through its public command interface: stale
//! callbacks, back from every phase, gate round trips and the tab model.

use std::time::Duration;

use chainknight_core::{
    Command, Dashboard, DashboardConfig, FrameTicket, KeyValueStore, LayoutMode, LoadPolicy,
    MemoryStore, Phase, TimerKind, TimerRequest, ToolId, ACCESS_KEY_ENTRY,
};

// ============================================================================
// Test Utilities
// ============================================================================

fn dashboard_with(config: DashboardConfig) -> Dashboard<MemoryStore> {
    let mut dashboard = Dashboard::new(config, MemoryStore::new()).unwrap().seeded(7);
    dashboard
        .handle(Command::SubmitKey("admin@gudman123".into()))
        .unwrap();
    dashboard
}

fn find(timers: &[TimerRequest], kind: TimerKind) -> TimerRequest {
    timers
        .iter()
        .find(|t| t.kind == kind)
        .cloned()
        .unwrap_or_else(|| panic!("no {kind:?} timer in {timers:?}"))
}

fn current_ticket(dashboard: &Dashboard<MemoryStore>) -> FrameTicket {
    FrameTicket::Single(dashboard.snapshot().ticket.expect("a tool is selected"))
}

// ============================================================================
// View State Machine
// ============================================================================

#[test]
fn test_open_enters_loading_for_every_tool() {
    for id in ["wayne", "alpha", "euler"] {
        let mut dashboard = dashboard_with(DashboardConfig::default());
        dashboard.handle(Command::Open(id.into())).unwrap();

        let snapshot = dashboard.snapshot();
        assert_eq!(snapshot.phase, Phase::Loading);
        assert_eq!(snapshot.selected.unwrap().id.as_str(), id);
    }
}

#[test]
fn test_never_active_before_completion_signal() {
    let mut dashboard = dashboard_with(DashboardConfig::default());
    let timers = dashboard.handle(Command::Open("wayne".into())).unwrap();

    // Progress ticks alone never activate
    let mut tick = find(&timers, TimerKind::ProgressTick);
    for _ in 0..50 {
        let next = dashboard.fire(&tick);
        assert_eq!(dashboard.view().phase(), Phase::Loading);
        assert!(dashboard.progress() <= 90);
        tick = next[0].clone();
    }
}

#[test]
fn test_back_from_loading_discards_pending_timers() {
    let mut dashboard = dashboard_with(DashboardConfig {
        load_policy: LoadPolicy::fixed_delay(),
        ..Default::default()
    });
    let timers = dashboard.handle(Command::Open("alpha".into())).unwrap();

    dashboard.handle(Command::Back).unwrap();
    assert_eq!(dashboard.view().phase(), Phase::Idle);
    assert!(dashboard.view().selected().is_none());

    for timer in &timers {
        assert!(dashboard.fire(timer).is_empty());
    }
    assert_eq!(dashboard.view().phase(), Phase::Idle);
    assert_eq!(dashboard.progress(), 0);
}

#[test]
fn test_back_from_active() {
    let mut dashboard = dashboard_with(DashboardConfig::default());
    dashboard.handle(Command::Open("euler".into())).unwrap();
    let grace = dashboard
        .handle(Command::ContentReady(current_ticket(&dashboard)))
        .unwrap();
    dashboard.fire(&grace[0]);
    assert_eq!(dashboard.view().phase(), Phase::Active);

    dashboard.handle(Command::Back).unwrap();
    let snapshot = dashboard.snapshot();
    assert_eq!(snapshot.phase, Phase::Idle);
    assert!(snapshot.selected.is_none());
    assert!(snapshot.frame.is_none());
}

#[test]
fn test_back_when_idle_is_harmless() {
    let mut dashboard = dashboard_with(DashboardConfig::default());
    dashboard.handle(Command::Back).unwrap();
    assert_eq!(dashboard.view().phase(), Phase::Idle);
}

#[test]
fn test_late_ready_for_previous_tool_is_ignored() {
    let mut dashboard = dashboard_with(DashboardConfig::default());
    dashboard.handle(Command::Open("wayne".into())).unwrap();
    let stale = current_ticket(&dashboard);

    dashboard.handle(Command::Back).unwrap();
    dashboard.handle(Command::Open("alpha".into())).unwrap();

    let timers = dashboard.handle(Command::ContentReady(stale)).unwrap();
    assert!(timers.is_empty());
    assert!(!dashboard.view().content_ready());
    assert_eq!(
        dashboard.view().selected().map(ToolId::as_str),
        Some("alpha")
    );
}

#[test]
fn test_late_ready_for_same_tool_reopened_is_ignored() {
    let mut dashboard = dashboard_with(DashboardConfig::default());
    dashboard.handle(Command::Open("wayne".into())).unwrap();
    let stale = current_ticket(&dashboard);

    dashboard.handle(Command::Back).unwrap();
    dashboard.handle(Command::Open("wayne".into())).unwrap();

    assert!(dashboard
        .handle(Command::ContentReady(stale))
        .unwrap()
        .is_empty());
    assert_eq!(dashboard.view().phase(), Phase::Loading);
}

#[test]
fn test_grace_timer_after_back_does_not_activate() {
    let mut dashboard = dashboard_with(DashboardConfig::default());
    dashboard.handle(Command::Open("wayne".into())).unwrap();
    let grace = dashboard
        .handle(Command::ContentReady(current_ticket(&dashboard)))
        .unwrap();

    dashboard.handle(Command::Back).unwrap();
    dashboard.fire(&grace[0]);
    assert_eq!(dashboard.view().phase(), Phase::Idle);
}

#[test]
fn test_open_while_loading_is_ignored() {
    let mut dashboard = dashboard_with(DashboardConfig::default());
    dashboard.handle(Command::Open("wayne".into())).unwrap();
    let timers = dashboard.handle(Command::Open("euler".into())).unwrap();

    assert!(timers.is_empty());
    assert_eq!(
        dashboard.view().selected().map(ToolId::as_str),
        Some("wayne")
    );
}

#[test]
fn test_unknown_tool_is_a_noop() {
    let mut dashboard = dashboard_with(DashboardConfig::default());
    let timers = dashboard.handle(Command::Open("gamma".into())).unwrap();
    assert!(timers.is_empty());
    assert_eq!(dashboard.view().phase(), Phase::Idle);
}

#[test]
fn test_timeout_then_retry() {
    let mut dashboard = dashboard_with(DashboardConfig::default());
    let timers = dashboard.handle(Command::Open("alpha".into())).unwrap();
    dashboard.fire(&find(&timers, TimerKind::Timeout));
    assert_eq!(dashboard.view().phase(), Phase::Failed);

    let retry = dashboard.handle(Command::Retry).unwrap();
    assert_eq!(dashboard.view().phase(), Phase::Loading);
    assert_eq!(dashboard.progress(), 0);

    // The first attempt's timeout is stale now
    dashboard.fire(&find(&timers, TimerKind::Timeout));
    assert_eq!(dashboard.view().phase(), Phase::Loading);

    let grace = dashboard
        .handle(Command::ContentReady(current_ticket(&dashboard)))
        .unwrap();
    dashboard.fire(&grace[0]);
    assert_eq!(dashboard.view().phase(), Phase::Active);
    assert!(!retry.is_empty());
}

#[test]
fn test_timeout_after_ready_defers_to_grace() {
    let mut dashboard = dashboard_with(DashboardConfig::default());
    let timers = dashboard.handle(Command::Open("alpha".into())).unwrap();
    let grace = dashboard
        .handle(Command::ContentReady(current_ticket(&dashboard)))
        .unwrap();

    dashboard.fire(&find(&timers, TimerKind::Timeout));
    assert_eq!(dashboard.view().phase(), Phase::Loading);
    dashboard.fire(&grace[0]);
    assert_eq!(dashboard.view().phase(), Phase::Active);
}

#[test]
fn test_frame_error_fails_load() {
    let mut dashboard = dashboard_with(DashboardConfig::default());
    dashboard.handle(Command::Open("euler".into())).unwrap();
    dashboard
        .handle(Command::LoadFailed(current_ticket(&dashboard)))
        .unwrap();
    assert_eq!(dashboard.snapshot().phase, Phase::Failed);
}

// ============================================================================
// Progress
// ============================================================================

#[test]
fn test_progress_resets_on_next_loading_phase() {
    let mut dashboard = dashboard_with(DashboardConfig {
        load_policy: LoadPolicy::fixed_delay(),
        ..Default::default()
    });
    let timers = dashboard.handle(Command::Open("wayne".into())).unwrap();
    dashboard.fire(&find(&timers, TimerKind::ProgressTick));
    dashboard.fire(&find(&timers, TimerKind::LoadDelay));
    assert_eq!(dashboard.progress(), 100);

    dashboard.handle(Command::Open("alpha".into())).unwrap();
    assert_eq!(dashboard.progress(), 0);
}

// ============================================================================
// Access Gate
// ============================================================================

#[test]
fn test_both_access_keys_unlock() {
    for key in ["admin@gudman123", "0xGudman123"] {
        let mut dashboard = Dashboard::new(DashboardConfig::default(), MemoryStore::new()).unwrap();
        dashboard.handle(Command::SubmitKey(key.into())).unwrap();
        assert!(dashboard.snapshot().unlocked);
    }
}

#[test]
fn test_wrong_key_keeps_gate_closed() {
    let mut dashboard = Dashboard::new(DashboardConfig::default(), MemoryStore::new()).unwrap();
    let err = dashboard
        .handle(Command::SubmitKey("wrong".into()))
        .unwrap_err();
    assert_eq!(err.to_string(), "Invalid access key");
    assert!(!dashboard.snapshot().unlocked);
}

#[test]
fn test_toggle_round_trip_keeps_valid_key() {
    let store = MemoryStore::new();
    let mut dashboard = Dashboard::new(DashboardConfig::default(), store.clone()).unwrap();
    dashboard
        .handle(Command::SubmitKey("0xGudman123".into()))
        .unwrap();

    dashboard.handle(Command::ToggleGating).unwrap();
    assert!(!dashboard.snapshot().gating_enabled);
    dashboard.handle(Command::ToggleGating).unwrap();

    let snapshot = dashboard.snapshot();
    assert!(snapshot.gating_enabled);
    assert!(snapshot.unlocked);
    assert!(snapshot.key_stored);
    assert_eq!(
        store.get(ACCESS_KEY_ENTRY).unwrap().as_deref(),
        Some("0xGudman123")
    );
}

#[test]
fn test_stored_key_survives_restart() {
    let store = MemoryStore::new();
    {
        let mut dashboard = Dashboard::new(DashboardConfig::default(), store.clone()).unwrap();
        dashboard
            .handle(Command::SubmitKey("admin@gudman123".into()))
            .unwrap();
    }
    let dashboard = Dashboard::new(DashboardConfig::default(), store).unwrap();
    assert!(dashboard.is_unlocked());
}

#[test]
fn test_sign_out_locks_and_clears_view() {
    let mut dashboard = dashboard_with(DashboardConfig::default());
    dashboard.handle(Command::Open("wayne".into())).unwrap();
    dashboard.handle(Command::SignOut).unwrap();

    let snapshot = dashboard.snapshot();
    assert!(!snapshot.unlocked);
    assert_eq!(snapshot.phase, Phase::Idle);
}

// ============================================================================
// Tabs
// ============================================================================

fn tabs_dashboard() -> Dashboard<MemoryStore> {
    dashboard_with(DashboardConfig {
        layout: LayoutMode::Tabs,
        ..Default::default()
    })
}

fn open_tab_ids(dashboard: &Dashboard<MemoryStore>) -> Vec<String> {
    dashboard
        .snapshot()
        .tabs
        .iter()
        .map(|t| t.tool.id.to_string())
        .collect()
}

#[test]
fn test_tab_open_twice_does_not_duplicate() {
    let mut dashboard = tabs_dashboard();
    dashboard.handle(Command::Open("alpha".into())).unwrap();
    dashboard.handle(Command::Open("alpha".into())).unwrap();
    assert_eq!(open_tab_ids(&dashboard), vec!["alpha"]);
}

#[test]
fn test_closing_active_tab_activates_most_recent_remaining() {
    let mut dashboard = tabs_dashboard();
    for id in ["wayne", "alpha", "euler"] {
        dashboard.handle(Command::Open(id.into())).unwrap();
    }
    dashboard
        .handle(Command::ActivateTab("wayne".into()))
        .unwrap();
    dashboard.handle(Command::CloseTab("wayne".into())).unwrap();

    assert_eq!(open_tab_ids(&dashboard), vec!["alpha", "euler"]);
    assert_eq!(dashboard.snapshot().active_tab, Some(ToolId::from("euler")));
}

#[test]
fn test_closing_last_tab_returns_to_empty_view() {
    let mut dashboard = tabs_dashboard();
    dashboard.handle(Command::Open("euler".into())).unwrap();
    dashboard.handle(Command::CloseTab("euler".into())).unwrap();

    let snapshot = dashboard.snapshot();
    assert!(snapshot.tabs.is_empty());
    assert!(snapshot.active_tab.is_none());
}

#[test]
fn test_tab_ready_after_close_is_ignored() {
    let mut dashboard = tabs_dashboard();
    dashboard.handle(Command::Open("wayne".into())).unwrap();
    let ticket = dashboard.snapshot().tabs[0].ticket.clone();
    dashboard.handle(Command::CloseTab("wayne".into())).unwrap();
    dashboard.handle(Command::Open("wayne".into())).unwrap();

    dashboard
        .handle(Command::ContentReady(FrameTicket::Tab(ticket)))
        .unwrap();
    assert!(!dashboard.snapshot().tabs[0].ready);
}

#[test]
fn test_tab_times_out_without_ready_signal() {
    let mut dashboard = tabs_dashboard();
    let timers = dashboard.handle(Command::Open("wayne".into())).unwrap();
    let timeout = find(&timers, TimerKind::Timeout);
    assert_eq!(timeout.delay, Duration::from_millis(20_000));

    dashboard.fire(&timeout);

    let snapshot = dashboard.snapshot();
    let tab = &snapshot.tabs[0];
    assert!(tab.failed);
    assert!(!tab.ready);
}

#[test]
fn test_tab_timeout_after_ready_is_ignored() {
    let mut dashboard = tabs_dashboard();
    let timers = dashboard.handle(Command::Open("alpha".into())).unwrap();
    let ticket = dashboard.snapshot().tabs[0].ticket.clone();
    dashboard
        .handle(Command::ContentReady(FrameTicket::Tab(ticket)))
        .unwrap();

    dashboard.fire(&find(&timers, TimerKind::Timeout));

    let snapshot = dashboard.snapshot();
    let tab = &snapshot.tabs[0];
    assert!(tab.ready);
    assert!(!tab.failed);
}

#[test]
fn test_tab_error_then_retry_reloads_under_new_ticket() {
    let mut dashboard = tabs_dashboard();
    dashboard.handle(Command::Open("euler".into())).unwrap();
    let failed = dashboard.snapshot().tabs[0].ticket.clone();

    dashboard
        .handle(Command::LoadFailed(FrameTicket::Tab(failed.clone())))
        .unwrap();
    assert!(dashboard.snapshot().tabs[0].failed);

    let timers = dashboard.handle(Command::RetryTab("euler".into())).unwrap();
    find(&timers, TimerKind::Timeout);

    let tab = dashboard.snapshot().tabs[0].clone();
    assert!(!tab.failed);
    assert_ne!(tab.ticket, failed);

    // The old frame's callbacks no longer count
    dashboard
        .handle(Command::ContentReady(FrameTicket::Tab(failed)))
        .unwrap();
    assert!(!dashboard.snapshot().tabs[0].ready);

    dashboard
        .handle(Command::ContentReady(FrameTicket::Tab(tab.ticket)))
        .unwrap();
    assert!(dashboard.snapshot().tabs[0].ready);
}

#[test]
fn test_stale_tab_timeout_after_close_and_reopen() {
    let mut dashboard = tabs_dashboard();
    let old = dashboard.handle(Command::Open("wayne".into())).unwrap();
    dashboard.handle(Command::CloseTab("wayne".into())).unwrap();
    dashboard.handle(Command::Open("wayne".into())).unwrap();

    dashboard.fire(&find(&old, TimerKind::Timeout));

    assert!(!dashboard.snapshot().tabs[0].failed);
}

#[test]
fn test_switching_to_open_tab_schedules_nothing() {
    let mut dashboard = tabs_dashboard();
    dashboard.handle(Command::Open("wayne".into())).unwrap();
    dashboard.handle(Command::Open("alpha".into())).unwrap();

    let timers = dashboard.handle(Command::Open("wayne".into())).unwrap();
    assert!(timers.is_empty());
    assert_eq!(dashboard.snapshot().active_tab, Some(ToolId::from("wayne")));
}

#[test]
fn test_fixed_delay_tabs_have_no_timeout() {
    let mut dashboard = dashboard_with(DashboardConfig {
        layout: LayoutMode::Tabs,
        load_policy: LoadPolicy::fixed_delay(),
        ..Default::default()
    });
    let timers = dashboard.handle(Command::Open("wayne".into())).unwrap();
    assert!(timers.is_empty());
}

#[test]
fn test_sign_out_with_gate_disabled_forgets_key_but_stays_open() {
    let store = MemoryStore::new();
    let mut dashboard = Dashboard::new(DashboardConfig::default(), store.clone()).unwrap();
    dashboard
        .handle(Command::SubmitKey("admin@gudman123".into()))
        .unwrap();
    dashboard.handle(Command::ToggleGating).unwrap();

    dashboard.handle(Command::SignOut).unwrap();

    let snapshot = dashboard.snapshot();
    assert!(snapshot.unlocked);
    assert!(!snapshot.key_stored);
    assert_eq!(store.get(ACCESS_KEY_ENTRY).unwrap(), None);
}
