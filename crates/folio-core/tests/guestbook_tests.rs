use folio_core::{format_age, validate_draft, GuestbookEntry, GuestbookError, GuestbookFeed, Identity};

fn identity() -> Identity {
    Identity {
        uid: "uid-1".into(),
        display_name: "Ada".into(),
        photo_url: None,
    }
}

fn entry(id: &str, text: &str, created_at_ms: Option<f64>) -> GuestbookEntry {
    GuestbookEntry {
        id: id.into(),
        author_name: "Ada".into(),
        author_uid: "uid-1".into(),
        photo_url: None,
        text: text.into(),
        created_at_ms,
    }
}

#[test]
fn draft_requires_sign_in() {
    assert_eq!(
        validate_draft("hello", None),
        Err(GuestbookError::NotSignedIn)
    );
}

#[test]
fn draft_rejects_blank_messages() {
    let id = identity();
    assert_eq!(
        validate_draft("", Some(&id)),
        Err(GuestbookError::EmptyMessage)
    );
    assert_eq!(
        validate_draft("   \n\t ", Some(&id)),
        Err(GuestbookError::EmptyMessage)
    );
}

#[test]
fn draft_is_trimmed() {
    let id = identity();
    assert_eq!(validate_draft("  hi there  ", Some(&id)).unwrap(), "hi there");
}

#[test]
fn feed_starts_unloaded_then_tracks_snapshots() {
    let mut feed = GuestbookFeed::new();
    assert!(!feed.is_loaded());
    assert!(feed.is_empty());

    // First snapshot may legitimately be empty: loaded, still no entries
    assert_eq!(feed.apply_snapshot(vec![]), 0);
    assert!(feed.is_loaded());
    assert!(feed.is_empty());

    let fresh = feed.apply_snapshot(vec![entry("a", "first!", Some(1.0))]);
    assert_eq!(fresh, 1);
    assert_eq!(feed.entries().len(), 1);
}

#[test]
fn feed_snapshots_replace_wholesale() {
    let mut feed = GuestbookFeed::new();
    feed.apply_snapshot(vec![entry("a", "one", None), entry("b", "two", None)]);

    // The next snapshot is the whole collection, not a delta
    let fresh = feed.apply_snapshot(vec![
        entry("c", "three", None),
        entry("a", "one", None),
        entry("b", "two", None),
    ]);
    assert_eq!(fresh, 1, "only the unseen id counts as new");
    assert_eq!(feed.entries().len(), 3);
    assert_eq!(feed.entries()[0].id, "c");
}

#[test]
fn feed_reordering_is_not_new_content() {
    let mut feed = GuestbookFeed::new();
    feed.apply_snapshot(vec![entry("a", "one", None), entry("b", "two", None)]);
    let fresh = feed.apply_snapshot(vec![entry("b", "two", None), entry("a", "one", None)]);
    assert_eq!(fresh, 0);
}

#[test]
fn age_formatting_buckets() {
    let now = 1_000_000_000.0;
    assert_eq!(format_age(None, now), "just now");
    assert_eq!(format_age(Some(now - 5_000.0), now), "just now");
    assert_eq!(format_age(Some(now - 120_000.0), now), "2m ago");
    assert_eq!(format_age(Some(now - 2.0 * 3_600_000.0), now), "2h ago");
    assert_eq!(format_age(Some(now - 3.0 * 86_400_000.0), now), "3d ago");
    // Server clock slightly ahead of the client never shows negative ages
    assert_eq!(format_age(Some(now + 60_000.0), now), "just now");
}
