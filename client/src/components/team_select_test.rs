use super::*;

#[test]
fn parse_team_choice_reads_ids() {
    assert_eq!(parse_team_choice("7"), Some(7));
    assert_eq!(parse_team_choice(" 12 "), Some(12));
}

#[test]
fn parse_team_choice_rejects_placeholder() {
    assert_eq!(parse_team_choice(""), None);
    assert_eq!(parse_team_choice("none"), None);
}
