use dashdeck::db::{DbActorHandle, RecordKind};
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

fn temp_db_path(tag: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time before UNIX_EPOCH")
        .as_nanos();

    let mut temp_path = std::env::temp_dir();
    temp_path.push(format!(
        "dashdeck-{tag}-{}-{}.sqlite",
        std::process::id(),
        nanos
    ));
    temp_path
}

async fn spawn_db(tag: &str) -> (DbActorHandle, PathBuf) {
    let temp_path = temp_db_path(tag);
    let database_url = format!("sqlite:{}", temp_path.display());
    let db = dashdeck::db::spawn(&database_url)
        .await
        .expect("db actor should start");
    (db, temp_path)
}

async fn cleanup(path: PathBuf) {
    let _ = tokio::fs::remove_file(&path).await;
    for suffix in ["-wal", "-shm"] {
        let mut side = path.clone().into_os_string();
        side.push(suffix);
        let _ = tokio::fs::remove_file(PathBuf::from(side)).await;
    }
}

#[tokio::test]
async fn rejected_note_leaves_count_unchanged() {
    let (db, path) = spawn_db("records-reject").await;

    let before = db.counts().await.expect("counts").notes;
    let err = db
        .add_note("   ", "body only")
        .await
        .expect_err("blank title must be rejected");
    assert!(err.is_validation());
    assert_eq!(db.counts().await.expect("counts").notes, before);

    let id = db.add_note("  Groceries ", "milk").await.expect("insert");
    let notes = db.list_notes(None).await.expect("list");
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].id, id);
    assert_eq!(notes[0].title, "Groceries");
    // Minute-precision local timestamp.
    assert_eq!(notes[0].created_at.len(), "2026-10-16T09:30".len());

    cleanup(path).await;
}

#[tokio::test]
async fn reminders_order_open_first_then_by_due_date() {
    let (db, path) = spawn_db("records-reminders").await;

    let undated = db.add_reminder("undated", None).await.expect("insert");
    let later = db
        .add_reminder("later", Some("2026-12-01T10:00"))
        .await
        .expect("insert");
    let sooner = db
        .add_reminder("sooner", Some("2026-11-01T10:00"))
        .await
        .expect("insert");
    let blank_due = db.add_reminder("blank due", Some("  ")).await.expect("insert");

    assert!(db.toggle_reminder(sooner).await.expect("toggle"));

    let ids: Vec<i64> = db
        .list_reminders(None)
        .await
        .expect("list")
        .iter()
        .map(|r| r.id)
        .collect();
    // Open dated, open undated (newest first), then done.
    assert_eq!(ids, vec![later, blank_due, undated, sooner]);

    let reminders = db.list_reminders(Some(1)).await.expect("list");
    assert_eq!(reminders.len(), 1);
    assert_eq!(reminders[0].due_at.as_deref(), Some("2026-12-01T10:00"));

    cleanup(path).await;
}

#[tokio::test]
async fn toggle_twice_restores_state_and_counts_track_open_reminders() {
    let (db, path) = spawn_db("records-toggle").await;

    let id = db.add_reminder("call", None).await.expect("insert");
    assert_eq!(db.counts().await.expect("counts").reminders, 1);

    assert!(db.toggle_reminder(id).await.expect("toggle"));
    assert_eq!(db.counts().await.expect("counts").reminders, 0);
    assert!(db.list_reminders(None).await.expect("list")[0].is_done);

    assert!(db.toggle_reminder(id).await.expect("toggle"));
    assert!(!db.list_reminders(None).await.expect("list")[0].is_done);
    assert_eq!(db.counts().await.expect("counts").reminders, 1);

    assert!(!db.toggle_reminder(id + 100).await.expect("toggle missing"));

    cleanup(path).await;
}

#[tokio::test]
async fn timers_are_clamped_and_sorted_by_duration() {
    let (db, path) = spawn_db("records-timers").await;

    let err = db.add_timer("zero", 0).await.expect_err("zero rejected");
    assert!(err.is_validation());
    db.add_timer("huge", 999_999).await.expect("insert");
    db.add_timer("short", 10).await.expect("insert");

    let timers = db.list_timers().await.expect("list");
    let seconds: Vec<i64> = timers.iter().map(|t| t.seconds).collect();
    assert_eq!(seconds, vec![10, 86_400]);
    assert_eq!(timers[0].label, "short");

    cleanup(path).await;
}

#[tokio::test]
async fn delete_reports_whether_a_row_was_removed() {
    let (db, path) = spawn_db("records-delete").await;

    let link = db
        .add_quick_link("Docs", "https://docs.rs")
        .await
        .expect("insert");
    let alarm = db.add_alarm("Wake", "07:00").await.expect("insert");

    assert!(!db.delete(RecordKind::QuickLink, 9_999).await.expect("delete"));
    // Ids are per table.
    assert!(!db.delete(RecordKind::Note, link).await.expect("delete"));
    assert!(db.delete(RecordKind::QuickLink, link).await.expect("delete"));
    assert!(!db.delete(RecordKind::QuickLink, link).await.expect("delete again"));

    let alarms = db.list_alarms().await.expect("list");
    assert_eq!(alarms.len(), 1);
    assert_eq!(alarms[0].id, alarm);
    assert!(alarms[0].enabled);

    let counts = db.counts().await.expect("counts");
    assert_eq!(counts.quick_links, 0);
    assert_eq!(counts.alarms, 1);

    cleanup(path).await;
}

#[tokio::test]
async fn list_limits_cap_newest_first() {
    let (db, path) = spawn_db("records-limits").await;

    for i in 0..10 {
        db.add_quick_link(&format!("link {i}"), "https://example.com")
            .await
            .expect("insert");
    }

    let capped = db.list_quick_links(Some(8)).await.expect("list");
    assert_eq!(capped.len(), 8);
    assert_eq!(capped[0].title, "link 9");

    assert_eq!(db.list_quick_links(None).await.expect("list").len(), 10);
    assert_eq!(db.list_quick_links(Some(0)).await.expect("list").len(), 10);

    cleanup(path).await;
}
