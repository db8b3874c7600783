use super::*;

#[test]
fn launcher_state_default_is_idle() {
    let state = LauncherState::default();
    assert!(!state.pending);
    assert!(state.outcome.is_none());
}

#[test]
fn begin_capture_ignores_blank_draft() {
    for blank in ["", "  ", "\n"] {
        let mut state = LauncherState::default();
        assert!(state.begin_capture(blank).is_none());
        assert_eq!(state, LauncherState::default());
    }
}

#[test]
fn begin_capture_marks_pending_and_returns_raw_draft() {
    let mut state = LauncherState::default();
    assert_eq!(state.begin_capture(" note ").as_deref(), Some(" note "));
    assert!(state.pending);
}

#[test]
fn second_capture_refused_while_pending() {
    let mut state = LauncherState::default();
    state.begin_capture("first").unwrap();

    assert!(state.begin_capture("second").is_none());
    assert!(state.pending);
    assert!(state.outcome.is_none());
}

#[test]
fn finish_capture_records_reply_and_allows_next_capture() {
    let mut state = LauncherState::default();
    state.begin_capture("first").unwrap();
    state.finish_capture(Ok("Stored successfully (ID: abc)".to_owned()));

    assert!(!state.pending);
    assert_eq!(state.outcome.as_deref(), Some("Stored successfully (ID: abc)"));
    assert!(state.begin_capture("second").is_some());
}

#[test]
fn finish_capture_failure_uses_error_line() {
    let mut state = LauncherState::default();
    state.begin_capture("x").unwrap();
    state.finish_capture(Err("VAULT_LOCKED".to_owned()));
    assert_eq!(state.outcome.as_deref(), Some("Error: VAULT_LOCKED"));
}

#[test]
fn clear_drops_outcome_but_keeps_pending() {
    let mut state = LauncherState { pending: true, outcome: Some("old".to_owned()) };
    state.clear();
    assert!(state.pending);
    assert!(state.outcome.is_none());
}
