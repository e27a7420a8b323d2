use super::*;

// =============================================================
// is_guarded
// =============================================================

#[test]
fn dashboard_root_and_children_are_guarded() {
    assert!(is_guarded("/dashboard"));
    assert!(is_guarded("/dashboard/"));
    assert!(is_guarded("/dashboard/teams"));
    assert!(is_guarded("/dashboard/a/b/c"));
}

#[test]
fn login_is_guarded() {
    assert!(is_guarded("/login"));
}

#[test]
fn other_paths_are_not_guarded() {
    assert!(!is_guarded("/"));
    assert!(!is_guarded("/dashboards"));
    assert!(!is_guarded("/login/extra"));
    assert!(!is_guarded("/pkg/costlens.wasm"));
}

// =============================================================
// evaluate
// =============================================================

#[test]
fn protected_path_without_cookie_redirects_to_login() {
    assert_eq!(evaluate("/dashboard/anything", None), GuardDecision::Redirect(LOGIN_PATH));
    assert_eq!(evaluate("/dashboard", None), GuardDecision::Redirect(LOGIN_PATH));
}

#[test]
fn empty_cookie_counts_as_absent() {
    assert_eq!(evaluate("/dashboard/x", Some("")), GuardDecision::Redirect(LOGIN_PATH));
    assert_eq!(evaluate("/login", Some("")), GuardDecision::Allow);
}

#[test]
fn login_with_cookie_redirects_to_dashboard() {
    assert_eq!(evaluate("/login", Some(r#"{"id":1}"#)), GuardDecision::Redirect(DASHBOARD_PATH));
}

#[test]
fn protected_path_with_cookie_passes_through() {
    assert_eq!(evaluate("/dashboard/x", Some(r#"{"id":1}"#)), GuardDecision::Allow);
}

#[test]
fn login_without_cookie_passes_through() {
    assert_eq!(evaluate("/login", None), GuardDecision::Allow);
}

#[test]
fn forged_cookie_value_passes() {
    assert_eq!(evaluate("/dashboard/profile", Some("not-a-session")), GuardDecision::Allow);
}

#[test]
fn unguarded_paths_always_pass() {
    assert_eq!(evaluate("/", None), GuardDecision::Allow);
    assert_eq!(evaluate("/healthz", Some("x")), GuardDecision::Allow);
}
