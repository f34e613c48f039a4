use super::*;

#[test]
fn status_label_covers_each_state() {
    assert_eq!(status_label(Outcome::Live, false), "Paged. Awaiting your first move");
    assert_eq!(status_label(Outcome::Live, true), "Incident in progress");
    assert_eq!(status_label(Outcome::Resolved, false), "Resolved");
    assert_eq!(status_label(Outcome::Failed, false), "Outage extended");
}

#[test]
fn trail_follows_history_titles() {
    let scenario = labs::incident::database_outage().unwrap();
    let mut session = Session::new(&scenario);
    assert_eq!(trail(&scenario, &session), "03:12 - Pager goes off");

    let _ = session.select_option(&scenario, 0);
    let _ = session.select_option(&scenario, 0);
    assert_eq!(
        trail(&scenario, &session),
        "03:12 - Pager goes off → 03:15 - Database dashboard → Incident resolved"
    );
}
