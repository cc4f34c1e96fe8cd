//! Builder-session scenarios against the in-memory authority double.

use assert_matches::assert_matches;
use diwan_access::{
    AccessError, AuthorityStore, BuilderToolbar, CapabilityGate, GateDecision, GateInteraction,
    GateMode, PermissionBuilderSession, PermissionDescriptor, PermissionEvaluator, ToggleAction,
    ToggleOutcome,
};
use diwan_testkit::{role, InMemoryAuthority};
use std::sync::Arc;

fn descriptor(code: &str) -> PermissionDescriptor {
    PermissionDescriptor::action(code, code, "Clients", "Main")
}

fn session_with(
    roles: Vec<diwan_access::RoleDetail>,
) -> (Arc<InMemoryAuthority>, PermissionBuilderSession) {
    let authority = Arc::new(InMemoryAuthority::with_roles(roles));
    let session = PermissionBuilderSession::new(authority.clone());
    (authority, session)
}

#[tokio::test]
async fn session_lifecycle() {
    let (_, session) = session_with(vec![role("R1", "Sales", &["X"])]);
    assert!(!session.is_active());

    session.enter();
    assert!(session.is_active());
    assert_eq!(session.target_role(), None);

    session.set_target_role("R1".into()).await.unwrap();
    assert_eq!(session.target_role(), Some("R1".into()));
    assert!(session.is_granted(&"X".into()));

    session.exit();
    assert!(!session.is_active());
    assert_eq!(session.target_role(), None);
    assert!(!session.is_granted(&"X".into()));
    assert_eq!(session.granted_count(), 0);
}

#[tokio::test]
async fn toggle_requires_an_active_session() {
    let (authority, session) = session_with(vec![role("R1", "Sales", &[])]);
    let err = session.toggle_permission(&descriptor("X")).await.unwrap_err();
    assert_matches!(err, AccessError::SessionInactive);
    assert_eq!(authority.toggle_calls(), 0);
}

#[tokio::test]
async fn toggle_requires_a_target_role() {
    let (authority, session) = session_with(vec![role("R1", "Sales", &[])]);
    session.enter();
    let err = session.toggle_permission(&descriptor("X")).await.unwrap_err();
    assert_matches!(err, AccessError::NoTargetRole);
    assert_eq!(authority.toggle_calls(), 0);
}

#[tokio::test]
async fn switching_roles_replaces_the_granted_set() {
    let (authority, session) = session_with(vec![
        role("R1", "Sales", &["A", "B"]),
        role("R2", "Accounting", &["C"]),
    ]);
    session.enter();
    session.set_target_role("R1".into()).await.unwrap();
    assert_eq!(session.granted_count(), 2);

    session.set_target_role("R2".into()).await.unwrap();
    assert_eq!(session.granted_count(), 1);
    assert!(session.is_granted(&"C".into()));
    assert!(!session.is_granted(&"A".into()));
    assert!(!session.is_granted(&"B".into()));
    assert_eq!(authority.detail_calls(), 2);
}

#[tokio::test]
async fn refetch_failure_clears_rather_than_retains() {
    let (authority, session) = session_with(vec![role("R1", "Sales", &["A"])]);
    session.enter();
    session.set_target_role("R1".into()).await.unwrap();
    assert!(session.is_granted(&"A".into()));

    authority.fail_next_detail("gateway timeout");
    let err = session.set_target_role("R2".into()).await.unwrap_err();
    assert_matches!(err, AccessError::Remote { endpoint: "role-detail", .. });
    // Target moved on; the previous role's codes must not linger.
    assert_eq!(session.target_role(), Some("R2".into()));
    assert_eq!(session.granted_count(), 0);
}

#[tokio::test]
async fn toggle_applies_the_server_reported_action() {
    let (authority, session) = session_with(vec![role("R1", "Sales", &["X"])]);
    session.enter();
    session.set_target_role("R1".into()).await.unwrap();

    // Code currently granted: the server reports a removal.
    let outcome = session.toggle_permission(&descriptor("X")).await.unwrap();
    assert_eq!(outcome, ToggleOutcome::Applied(ToggleAction::Removed));
    assert!(!session.is_granted(&"X".into()));
    assert!(authority.codes_of(&"R1".into()).is_empty());

    // Toggling again grants it back.
    let outcome = session.toggle_permission(&descriptor("X")).await.unwrap();
    assert_eq!(outcome, ToggleOutcome::Applied(ToggleAction::Added));
    assert!(session.is_granted(&"X".into()));
    assert_eq!(authority.codes_of(&"R1".into()), vec!["X".to_string()]);
}

#[tokio::test]
async fn toggle_failure_leaves_local_state_untouched() {
    let (authority, session) = session_with(vec![role("R1", "Sales", &["X"])]);
    session.enter();
    session.set_target_role("R1".into()).await.unwrap();

    authority.fail_next_toggle("connection reset");
    let err = session.toggle_permission(&descriptor("X")).await.unwrap_err();
    assert_matches!(err, AccessError::Remote { endpoint: "toggle", .. });
    assert!(session.is_granted(&"X".into()));
    assert!(!session.is_pending(&"X".into()));
}

#[tokio::test]
async fn concurrent_toggles_on_one_code_are_deduplicated() {
    let (authority, session) = session_with(vec![role("R1", "Sales", &[])]);
    session.enter();
    session.set_target_role("R1".into()).await.unwrap();

    let gate = authority.hold_toggles();
    let desc = descriptor("X");
    let first = session.toggle_permission(&desc);
    let second = async {
        // Let the first request reach the wire before clicking again.
        tokio::task::yield_now().await;
        let outcome = session.toggle_permission(&desc).await;
        assert!(session.is_pending(&"X".into()));
        gate.release_one();
        outcome
    };
    let (first, second) = tokio::join!(first, second);

    assert_eq!(first.unwrap(), ToggleOutcome::Applied(ToggleAction::Added));
    assert_eq!(second.unwrap(), ToggleOutcome::AlreadyPending);
    assert_eq!(authority.toggle_calls(), 1);
    assert!(!session.is_pending(&"X".into()));
}

#[tokio::test]
async fn target_change_supersedes_an_inflight_toggle() {
    let (authority, session) = session_with(vec![
        role("R1", "Sales", &[]),
        role("R2", "Accounting", &["Y"]),
    ]);
    session.enter();
    session.set_target_role("R1".into()).await.unwrap();

    let gate = authority.hold_toggles();
    let desc = descriptor("X");
    let toggle = session.toggle_permission(&desc);
    let switch = async {
        tokio::task::yield_now().await;
        session.set_target_role("R2".into()).await.unwrap();
        gate.release_one();
    };
    let (outcome, ()) = tokio::join!(toggle, switch);

    assert_eq!(outcome.unwrap(), ToggleOutcome::Superseded);
    // The session reflects R2 only; the stale response changed nothing.
    assert_eq!(session.granted_count(), 1);
    assert!(session.is_granted(&"Y".into()));
    assert!(!session.is_granted(&"X".into()));
}

#[tokio::test]
async fn gate_captures_clicks_in_builder_mode() {
    let (_, session) = session_with(vec![role("R1", "Sales", &[])]);
    session.enter();
    session.set_target_role("R1".into()).await.unwrap();

    let gate = CapabilityGate::new(descriptor("X"));
    let mode = GateMode::Authoring(&session);

    assert_eq!(
        gate.decide(&mode),
        GateDecision::Authoring {
            granted: false,
            pending: false
        }
    );

    let interaction = gate.interact(&mode).await.unwrap();
    assert_eq!(
        interaction,
        GateInteraction::Captured(ToggleOutcome::Applied(ToggleAction::Added))
    );
    assert_eq!(
        gate.decide(&mode),
        GateDecision::Authoring {
            granted: true,
            pending: false
        }
    );
}

#[tokio::test]
async fn gate_blocks_users_without_the_code() {
    let evaluator = PermissionEvaluator::new("SALES", []);
    let gate = CapabilityGate::new(descriptor("X"));
    let mode = GateMode::Normal(&evaluator);

    assert_eq!(gate.decide(&mode), GateDecision::Fallback);
    assert_eq!(gate.interact(&mode).await.unwrap(), GateInteraction::Blocked);
}

#[tokio::test]
async fn toolbar_projects_the_role_selector() {
    let (authority, session) = session_with(vec![
        role("R1", "Sales", &[]),
        role("R2", "Accounting", &["C"]),
    ]);
    session.enter();
    session.set_target_role("R2".into()).await.unwrap();

    let roles = authority.list_roles().await.unwrap();
    let toolbar = BuilderToolbar::project(&session, &roles);

    assert!(toolbar.active);
    assert_eq!(toolbar.target, Some("R2".into()));
    assert_eq!(toolbar.granted_count, 1);
    assert_eq!(toolbar.roles.len(), 2);
    assert!(!toolbar.roles[0].selected);
    assert!(toolbar.roles[1].selected);
}

#[tokio::test]
async fn targeting_an_unknown_role_reports_not_found() {
    let (_, session) = session_with(vec![role("R1", "Sales", &[])]);
    session.enter();
    let err = session.set_target_role("R9".into()).await.unwrap_err();
    assert_matches!(err, AccessError::RoleNotFound(id) if id == "R9".into());
}
