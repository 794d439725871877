use chrono::{Duration, NaiveDate, NaiveTime};
use rattendance::config::Config;
use rattendance::core::{AttendancePolicy, Directory, SessionError, SessionSnapshot, SessionStore};
use rattendance::errors::AppError;
use rattendance::models::employee::Employee;
use rattendance::utils::time::parse_work_duration;
use std::env;
use std::fs;
use std::path::PathBuf;

fn temp_file(name: &str, body: &str) -> PathBuf {
    let mut p = env::temp_dir();
    p.push(name);
    fs::write(&p, body).expect("write temp file");
    p
}

#[test]
fn test_session_store_one_session_per_id() {
    let t = NaiveDate::from_ymd_opt(2026, 10, 14)
        .unwrap()
        .and_hms_opt(8, 0, 0)
        .unwrap();
    let mut store = SessionStore::new();

    store.open("E1", t).unwrap();
    assert_eq!(
        store.open("E1", t),
        Err(SessionError::AlreadyOpen("E1".into()))
    );
    assert_eq!(store.close("E1"), Ok(t));
    assert_eq!(
        store.close("E1"),
        Err(SessionError::NoActiveSession("E1".into()))
    );
}

#[test]
fn test_snapshot_json_layout() {
    let t = NaiveDate::from_ymd_opt(2026, 10, 14)
        .unwrap()
        .and_hms_opt(8, 44, 59)
        .unwrap();
    let mut store = SessionStore::new();
    store.open("E1", t).unwrap();

    let json = store.snapshot().to_json().unwrap();
    assert_eq!(json, r#"{"E1":"2026-10-14T08:44:59"}"#);

    let mut restored = SessionStore::new();
    restored.restore(SessionSnapshot::from_json(&json).unwrap());
    assert_eq!(restored, store);
}

#[test]
fn test_corrupt_snapshot_is_a_snapshot_error() {
    let err = SessionSnapshot::from_json("{not json").unwrap_err();
    assert!(matches!(err, AppError::Snapshot(_)));
}

#[test]
fn test_directory_rejects_duplicates_after_normalization() {
    let err = Directory::from_employees(vec![
        Employee::new("E1", "Asha"),
        Employee::new(" e1", "Other"),
    ])
    .unwrap_err();
    assert!(matches!(err, AppError::Directory(_)));
}

#[test]
fn test_directory_loads_yaml_and_json() {
    let yaml = temp_file(
        "core_tests_staff.yml",
        "- id: e1\n  name: Asha\n- id: E2\n  name: Bruno\n",
    );
    let dir = Directory::load(&yaml).unwrap();
    assert_eq!(dir.len(), 2);
    assert_eq!(dir.lookup("E1").unwrap().name, "Asha");

    let json = temp_file(
        "core_tests_staff.json",
        r#"[{"id":"E3","name":"Chen"}]"#,
    );
    let dir = Directory::load(&json).unwrap();
    assert!(dir.contains("e3"));

    let empty = temp_file("core_tests_empty.yml", "# nobody yet\n[]\n");
    assert!(Directory::load(&empty).unwrap().is_empty());
}

#[test]
fn test_missing_directory_file_is_an_error() {
    let mut p = env::temp_dir();
    p.push("core_tests_missing_staff.yml");
    fs::remove_file(&p).ok();

    assert!(matches!(Directory::load(&p), Err(AppError::Directory(_))));
}

#[test]
fn test_parse_work_duration_forms() {
    assert_eq!(parse_work_duration("8h30m").unwrap(), Duration::minutes(510));
    assert_eq!(parse_work_duration("8h 30m").unwrap(), Duration::minutes(510));
    assert_eq!(parse_work_duration("9h").unwrap(), Duration::hours(9));
    assert_eq!(parse_work_duration("45m").unwrap(), Duration::minutes(45));
    assert_eq!(parse_work_duration("08:30").unwrap(), Duration::minutes(510));

    assert!(parse_work_duration("").is_err());
    assert!(parse_work_duration("eight hours").is_err());
}

#[test]
fn test_parse_work_duration_out_of_range() {
    for raw in ["9999999999999999h", "153722867280913m", "99999999999999999999h"] {
        assert!(
            matches!(parse_work_duration(raw), Err(AppError::InvalidDuration(_))),
            "{raw} should be rejected"
        );
    }

    let cfg = Config {
        min_work_duration: "9999999999999999h".into(),
        ..Config::default()
    };
    assert!(AttendancePolicy::from_config(&cfg).is_err());
}

#[test]
fn test_config_defaults_and_partial_file() {
    let cfg = Config::default();
    assert_eq!(cfg.late_threshold, "08:45");
    assert_eq!(cfg.min_work_duration, "8h30m");
    assert!(cfg.persist_sessions);
    assert!(cfg.admin_reset_code.is_none());
    assert_eq!(cfg.scan_delay_ms, 2000);

    let path = temp_file(
        "core_tests_partial.conf",
        "late_threshold: \"09:00\"\nadmin_reset_code: ADMIN\n",
    );
    let cfg = Config::load_from(&path).unwrap();
    assert_eq!(cfg.late_threshold, "09:00");
    assert_eq!(cfg.admin_reset_code.as_deref(), Some("ADMIN"));
    assert_eq!(cfg.min_work_duration, "8h30m");
    assert!(cfg.persist_sessions);
}

#[test]
fn test_config_missing_file_gives_defaults() {
    let mut p = env::temp_dir();
    p.push("core_tests_absent.conf");
    fs::remove_file(&p).ok();

    let cfg = Config::load_from(&p).unwrap();
    assert_eq!(cfg.scan_delay_ms, 2000);
}

#[test]
fn test_policy_from_config() {
    let cfg = Config {
        late_threshold: "09:15".into(),
        min_work_duration: "7h".into(),
        ..Config::default()
    };
    let policy = AttendancePolicy::from_config(&cfg).unwrap();
    assert_eq!(policy.late_threshold, NaiveTime::from_hms_opt(9, 15, 0).unwrap());
    assert_eq!(policy.min_work, Duration::hours(7));

    let bad = Config {
        late_threshold: "late".into(),
        ..Config::default()
    };
    assert!(matches!(
        AttendancePolicy::from_config(&bad),
        Err(AppError::InvalidTime(_))
    ));
}
