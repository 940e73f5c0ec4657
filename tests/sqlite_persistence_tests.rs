#![cfg(feature = "sqlite")]

use tempfile::NamedTempFile;
use wolf_scheduler::{
    Course, CourseKey, ScheduleSnapshot, ScheduleStore, SqliteScheduleStore, WolfScheduler,
};

fn catalog() -> Vec<Course> {
    vec![
        Course::new("CSC 216", "Concepts", "001", 4, "sesmith5", "MW", 910, 1100).unwrap(),
        Course::new("CSC 226", "Discrete", "001", 3, "tmbarnes", "MWF", 935, 1025).unwrap(),
        Course::arranged("CSC 316", "Data Structures", "601", 3, "jtking").unwrap(),
    ]
}

#[test]
fn empty_store_has_no_snapshot() {
    let store = SqliteScheduleStore::in_memory().unwrap();
    assert_eq!(store.load_snapshot().unwrap(), None);
}

#[test]
fn sqlite_store_round_trip_snapshot() {
    let file = NamedTempFile::new().unwrap();
    let store = SqliteScheduleStore::new(file.path()).unwrap();

    let snapshot = ScheduleSnapshot {
        title: "SQLite Schedule".into(),
        courses: vec![
            CourseKey::new("CSC 316", "601"),
            CourseKey::new("CSC 216", "001"),
        ],
    };
    store.save_snapshot(&snapshot).unwrap();

    let reopened = SqliteScheduleStore::new(file.path()).unwrap();
    assert_eq!(reopened.load_snapshot().unwrap(), Some(snapshot));
}

#[test]
fn saving_replaces_previous_snapshot() {
    let store = SqliteScheduleStore::in_memory().unwrap();
    let mut scheduler = WolfScheduler::from_catalog(catalog());
    scheduler.add_course_to_schedule("CSC 216", "001").unwrap();
    scheduler.add_course_to_schedule("CSC 226", "001").unwrap();
    scheduler.save_to(&store).unwrap();

    scheduler.remove_course_from_schedule("CSC 216", "001");
    scheduler.set_schedule_title("Trimmed");
    scheduler.save_to(&store).unwrap();

    let mut restored = WolfScheduler::from_catalog(catalog());
    assert!(restored.restore_from(&store).unwrap());
    assert_eq!(restored.schedule_title(), "Trimmed");
    assert_eq!(
        restored.scheduled_courses(),
        vec![[
            "CSC 226".to_string(),
            "001".to_string(),
            "Discrete".to_string()
        ]]
    );
}

#[test]
fn failed_save_keeps_previous_snapshot() {
    let file = NamedTempFile::new().unwrap();
    let store = SqliteScheduleStore::new(file.path()).unwrap();
    let saved = ScheduleSnapshot {
        title: "Fall".into(),
        courses: vec![CourseKey::new("CSC 216", "001")],
    };
    store.save_snapshot(&saved).unwrap();

    let conn = rusqlite::Connection::open(file.path()).unwrap();
    conn.execute_batch(
        "CREATE TRIGGER reject_section AFTER INSERT ON scheduled_courses
         WHEN NEW.section = '999'
         BEGIN SELECT RAISE(ABORT, 'rejected section'); END;",
    )
    .unwrap();
    drop(conn);

    let rejected = ScheduleSnapshot {
        title: "Spring".into(),
        courses: vec![
            CourseKey::new("CSC 226", "001"),
            CourseKey::new("CSC 316", "999"),
        ],
    };
    assert!(store.save_snapshot(&rejected).is_err());
    assert_eq!(store.load_snapshot().unwrap(), Some(saved));
}
