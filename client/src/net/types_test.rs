use super::*;

fn session_json() -> &'static str {
    r#"{
        "id": 7,
        "email": "lead@example.com",
        "role": "team_lead",
        "team_id": 3,
        "access_token": "tok-123",
        "token_type": "bearer",
        "is_active": true,
        "created_at": "2024-02-01T10:00:00",
        "updated_at": null
    }"#
}

#[test]
fn session_decodes_backend_payload() {
    let session: Session = serde_json::from_str(session_json()).unwrap();
    assert_eq!(session.id, 7);
    assert_eq!(session.role, Role::TeamLead);
    assert_eq!(session.team_id, Some(3));
    assert_eq!(session.access_token.as_deref(), Some("tok-123"));
    assert!(session.updated_at.is_none());
}

#[test]
fn session_null_role_defaults_to_viewer() {
    let session: Session =
        serde_json::from_str(r#"{"id":1,"email":"a@b.com","role":null,"is_active":true}"#).unwrap();
    assert_eq!(session.role, Role::Viewer);
    assert!(session.team_id.is_none());
}

#[test]
fn authorization_uses_token_type() {
    let session: Session = serde_json::from_str(session_json()).unwrap();
    assert_eq!(session.authorization().as_deref(), Some("bearer tok-123"));
}

#[test]
fn authorization_defaults_to_bearer_scheme() {
    let mut session: Session = serde_json::from_str(session_json()).unwrap();
    session.token_type = None;
    assert_eq!(session.authorization().as_deref(), Some("Bearer tok-123"));
}

#[test]
fn authorization_missing_token_is_none() {
    let mut session: Session = serde_json::from_str(session_json()).unwrap();
    session.access_token = Some(String::new());
    assert!(session.authorization().is_none());
    session.access_token = None;
    assert!(session.authorization().is_none());
}

#[test]
fn role_permissions() {
    assert!(Role::Admin.can_manage_teams());
    assert!(!Role::TeamLead.can_manage_teams());
    assert!(Role::TeamLead.can_assign_resources());
    assert!(!Role::Viewer.can_assign_resources());
}

#[test]
fn role_wire_names_match_serde() {
    for role in [Role::Admin, Role::TeamLead, Role::Viewer] {
        let encoded = serde_json::to_string(&role).unwrap();
        assert_eq!(encoded, format!("\"{}\"", role.as_str()));
    }
}

#[test]
fn user_member_since_takes_date_portion() {
    let user: User = serde_json::from_str(
        r#"{"id":2,"email":"v@example.com","role":"viewer","team_id":null,"is_active":false,"created_at":"2023-11-05T08:30:00+00:00"}"#,
    )
    .unwrap();
    assert_eq!(user.member_since(), Some("2023-11-05"));
    assert!(!user.is_active);
}

#[test]
fn team_without_description_decodes() {
    let team: Team = serde_json::from_str(r#"{"id":1,"name":"Platform","created_at":"2024-01-01T00:00:00"}"#).unwrap();
    assert_eq!(team.name, "Platform");
    assert!(team.description.is_none());
}

#[test]
fn cost_record_decodes_amount() {
    let record: CostRecord =
        serde_json::from_str(r#"{"id":9,"date":"2024-03-02","team_id":1,"service":"EC2","amount":12.5}"#).unwrap();
    assert!((record.amount - 12.5).abs() < f64::EPSILON);
    assert_eq!(record.service, "EC2");
}
