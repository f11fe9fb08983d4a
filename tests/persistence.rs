use chrono::{NaiveDate, NaiveDateTime};
use pretty_assertions::assert_eq;
use std::path::{Path, PathBuf};
use todo_list::io::{from_json, load_list, save_list, to_json};
use todo_list::{ActivityLog, StoreError, Task, TaskList};

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn dt(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, 0)
        .unwrap()
}

fn assert_task(expected: (&str, &str, Option<NaiveDateTime>, u8, bool), task: &Task) {
    let (name, description, deadline, priority, completed) = expected;
    assert_eq!(task.name(), name);
    assert_eq!(task.description(), description);
    assert_eq!(task.deadline().copied(), deadline);
    assert_eq!(task.priority(), priority);
    assert_eq!(task.is_completed(), completed);
}

// ============================================================================
// Reading
// ============================================================================

#[test]
fn read_nonexistent_file_is_read_error() {
    let err = load_list(&fixture("noSuchFile.json"), &mut ActivityLog::new()).unwrap_err();
    assert!(matches!(err, StoreError::Read { .. }), "got {err}");
}

#[test]
fn read_empty_list() {
    let list = load_list(&fixture("empty_list.json"), &mut ActivityLog::new()).unwrap();
    assert_eq!(list.name(), "Test");
    assert_eq!(list.len(), 0);
}

#[test]
fn read_general_list() {
    let mut log = ActivityLog::new();
    let list = load_list(&fixture("general_list.json"), &mut log).unwrap();
    assert_eq!(list.name(), "Test");
    assert_eq!(list.len(), 2);
    assert_task(
        ("task 5", "description 5", Some(dt(2023, 12, 12, 22, 1)), 2, true),
        list.task_at(0).unwrap(),
    );
    assert_task(("task 3", "description 3", None, 4, false), list.task_at(1).unwrap());

    let descriptions: Vec<&str> = log.iter().map(|e| e.description.as_str()).collect();
    assert_eq!(descriptions, ["Added task: task 5", "Added task: task 3"]);
}

#[test]
fn read_bad_deadline_is_parse_error() {
    let err = load_list(&fixture("bad_deadline.json"), &mut ActivityLog::new()).unwrap_err();
    assert!(err.is_parse(), "got {err}");
    assert!(err.to_string().contains("12/12/2023 10:01 PM"));
}

#[test]
fn read_missing_field_is_parse_error() {
    let err = load_list(&fixture("missing_field.json"), &mut ActivityLog::new()).unwrap_err();
    assert!(err.is_parse(), "got {err}");
    assert!(err.to_string().contains("taskDescription"));
}

// ============================================================================
// Writing
// ============================================================================

#[test]
fn write_to_invalid_path_is_write_error() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("no\0such").join("illegal.json");
    let err = save_list(&TaskList::new("Test"), &path, &mut ActivityLog::new()).unwrap_err();
    assert!(matches!(err, StoreError::Write { .. }), "got {err}");
}

#[test]
fn write_into_missing_directory_is_write_error() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("missing").join("TestToDoList.json");
    let err = save_list(&TaskList::new("Test"), &path, &mut ActivityLog::new()).unwrap_err();
    assert!(matches!(err, StoreError::Write { .. }), "got {err}");
}

#[test]
fn failed_write_records_no_save_event() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("missing").join("TestToDoList.json");
    let mut log = ActivityLog::new();
    let mut list = TaskList::new("Test");
    list.add_task(Task::new("t1", "d1"), &mut log);
    let logged = log.len();

    assert!(save_list(&list, &path, &mut log).is_err());
    assert_eq!(log.len(), logged);
    assert!(!path.exists());
}

#[test]
fn priority_beyond_i64_is_coerced_to_zero() {
    let json = r#"{"listName": "Test", "tasks": [
        {"taskName": "big", "taskDescription": "", "deadline": "None", "priority": 18446744073709551615, "completed": false},
        {"taskName": "low", "taskDescription": "", "deadline": "None", "priority": -9223372036854775808, "completed": false}
    ]}"#;
    let list = from_json(json, &mut ActivityLog::new()).unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list.get_task("big").unwrap().priority(), 0);
    assert_eq!(list.get_task("low").unwrap().priority(), 0);
}

#[test]
fn write_empty_list_matches_fixture() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("TestToDoList.json");
    let mut log = ActivityLog::new();
    save_list(&TaskList::new("Test"), &path, &mut log).unwrap();

    let written: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    let expected: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(fixture("empty_list.json")).unwrap()).unwrap();
    assert_eq!(written, expected);
    assert_eq!(log.last_description(), Some("To-do list saved"));

    let list = load_list(&path, &mut log).unwrap();
    assert_eq!(list.name(), "Test");
    assert!(list.is_empty());
}

#[test]
fn write_general_list_then_read_back() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("TestToDoList.json");
    let mut log = ActivityLog::new();

    let mut list = TaskList::new("Test");
    list.add_task(Task::new("t1", "d1").with_priority(3), &mut log);
    list.add_task(
        Task::new("t2", "d2")
            .with_deadline(Some(dt(2022, 8, 8, 23, 59)))
            .with_priority(0)
            .with_completed(true),
        &mut log,
    );
    save_list(&list, &path, &mut log).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("\"deadline\": \"None\""));
    assert!(text.contains("\"deadline\": \"2022-08-08 23:59\""));

    let loaded = load_list(&path, &mut log).unwrap();
    assert_eq!(loaded.len(), 2);
    assert_task(("t1", "d1", None, 3, false), loaded.task_at(0).unwrap());
    assert_task(
        ("t2", "d2", Some(dt(2022, 8, 8, 23, 59)), 0, true),
        loaded.task_at(1).unwrap(),
    );
}

#[test]
fn fixture_text_survives_a_round_trip() {
    let source = std::fs::read_to_string(fixture("general_list.json")).unwrap();
    let mut log = ActivityLog::new();
    let list = from_json(&source, &mut log).unwrap();
    assert_eq!(to_json(&list, &mut log).unwrap(), source.trim_end());
}

#[test]
fn round_trip_preserves_every_field() {
    let mut log = ActivityLog::new();
    let mut list = TaskList::new("Everything");
    for p in 0..=5 {
        list.add_task(
            Task::new(format!("task {p}"), format!("line one\nline \"two\" {p}"))
                .with_deadline((p % 2 == 0).then(|| dt(2030, 1, 1 + p as u32, p as u32, 59)))
                .with_priority(p)
                .with_completed(p % 3 == 0),
            &mut log,
        );
    }
    let json = to_json(&list, &mut log).unwrap();
    let back = from_json(&json, &mut log).unwrap();
    assert_eq!(back, list);
}
