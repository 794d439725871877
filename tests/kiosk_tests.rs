use chrono::{Duration, NaiveDate, NaiveDateTime};
use rattendance::cli::commands::kiosk::run_loop;
use rattendance::core::{
    AdminCommand, AttendanceEngine, AttendancePolicy, Directory, Kiosk, KioskInput, Presenter,
    ResetSummary,
};
use rattendance::errors::{AppError, AppResult, AttendanceError};
use rattendance::models::action::Action;
use rattendance::models::employee::Employee;
use rattendance::models::log_entry::LogEntry;
use rattendance::storage::{KeyValueStore, MemoryStore, SNAPSHOT_KEY};
use std::cell::RefCell;
use std::io::Cursor;
use std::rc::Rc;
use std::time::Duration as StdDuration;

#[derive(Default)]
struct RecordingPresenter {
    events: Vec<String>,
    degraded: usize,
}

impl Presenter for RecordingPresenter {
    fn on_check_in_accepted(&mut self, entry: &LogEntry) {
        self.events.push(format!("in:{}:{}", entry.staff_id, entry.is_late));
    }

    fn on_check_out_accepted(&mut self, entry: &LogEntry) {
        self.events
            .push(format!("out:{}:{}", entry.staff_id, entry.worked_display()));
    }

    fn on_rejected(&mut self, error: &AttendanceError) {
        self.events.push(format!("rejected:{}", error.kind()));
    }

    fn on_reset(&mut self, summary: &ResetSummary) {
        self.events.push(format!(
            "reset:{}:{}",
            summary.sessions_cleared, summary.entries_cleared
        ));
    }

    fn on_storage_degraded(&mut self, _error: &AppError) {
        self.degraded += 1;
    }
}

/// Store handle that outlives the kiosk, so tests can inspect what was written.
#[derive(Clone, Default)]
struct SharedStore(Rc<RefCell<MemoryStore>>);

impl SharedStore {
    fn raw(&self) -> Option<String> {
        self.0.borrow().get(SNAPSHOT_KEY).unwrap()
    }
}

impl KeyValueStore for SharedStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        self.0.borrow().get(key)
    }

    fn put(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.0.borrow_mut().put(key, value)
    }
}

struct BrokenStore {
    fail_get: bool,
}

impl KeyValueStore for BrokenStore {
    fn get(&self, _key: &str) -> AppResult<Option<String>> {
        if self.fail_get {
            Err(AppError::Storage("disk gone".into()))
        } else {
            Ok(None)
        }
    }

    fn put(&mut self, _key: &str, _value: &str) -> AppResult<()> {
        Err(AppError::Storage("read-only".into()))
    }
}

fn at(h: u32, m: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 10, 14)
        .unwrap()
        .and_hms_opt(h, m, 0)
        .unwrap()
}

fn kiosk() -> Kiosk {
    let directory = Directory::from_employees(vec![
        Employee::new("E1", "Asha"),
        Employee::new("E2", "Bruno"),
    ])
    .unwrap();
    Kiosk::new(directory, AttendanceEngine::new(AttendancePolicy::default()))
}

#[test]
fn test_accepted_check_in_is_persisted_and_restored() {
    let store = SharedStore::default();
    let mut p = RecordingPresenter::default();

    let mut k = kiosk();
    k.attach_storage(Box::new(store.clone()), &mut p);
    k.submit("e1", Action::In, at(8, 44), &mut p).unwrap();

    assert_eq!(store.raw().as_deref(), Some(r#"{"E1":"2026-10-14T08:44:00"}"#));

    // a new kiosk over the same store sees E1 as working
    let mut restarted = kiosk();
    restarted.attach_storage(Box::new(store.clone()), &mut p);
    assert!(restarted.engine().sessions().has("E1"));

    let done = restarted.submit("E1", Action::Out, at(17, 14), &mut p).unwrap();
    assert_eq!(done.worked_display(), "8h 30m");
    assert_eq!(store.raw().as_deref(), Some("{}"));

    assert_eq!(p.events, vec!["in:E1:false", "out:E1:8h 30m"]);
    assert_eq!(p.degraded, 0);
}

#[test]
fn test_rejections_do_not_write_storage() {
    let store = SharedStore::default();
    let mut p = RecordingPresenter::default();
    let mut k = kiosk();
    k.attach_storage(Box::new(store.clone()), &mut p);

    assert!(k.submit("ZZZ", Action::In, at(8, 0), &mut p).is_err());
    assert!(k.submit("E2", Action::Out, at(8, 0), &mut p).is_err());
    assert!(k.submit("  ", Action::In, at(8, 0), &mut p).is_err());

    assert_eq!(store.raw(), None);
    assert_eq!(
        p.events,
        vec![
            "rejected:unknown_staff_id",
            "rejected:no_active_session",
            "rejected:empty_input",
        ]
    );
}

#[test]
fn test_corrupt_snapshot_starts_empty_and_is_overwritten() {
    let store = SharedStore::default();
    store.clone().put(SNAPSHOT_KEY, "]]garbage").unwrap();

    let mut p = RecordingPresenter::default();
    let mut k = kiosk();
    k.attach_storage(Box::new(store.clone()), &mut p);

    assert_eq!(p.degraded, 1);
    assert!(k.is_durable());
    assert!(k.engine().sessions().is_empty());

    k.submit("E2", Action::In, at(9, 0), &mut p).unwrap();
    assert_eq!(store.raw().as_deref(), Some(r#"{"E2":"2026-10-14T09:00:00"}"#));
}

#[test]
fn test_unreadable_store_falls_back_to_memory() {
    let mut p = RecordingPresenter::default();
    let mut k = kiosk();
    k.attach_storage(Box::new(BrokenStore { fail_get: true }), &mut p);

    assert!(!k.is_durable());
    assert_eq!(p.degraded, 1);

    k.submit("E1", Action::In, at(8, 0), &mut p).unwrap();
    assert!(k.engine().sessions().has("E1"));
}

#[test]
fn test_failing_write_degrades_once_and_keeps_state() {
    let mut p = RecordingPresenter::default();
    let mut k = kiosk();
    k.attach_storage(Box::new(BrokenStore { fail_get: false }), &mut p);
    assert!(k.is_durable());

    k.submit("E1", Action::In, at(8, 0), &mut p).unwrap();
    k.submit("E2", Action::In, at(8, 5), &mut p).unwrap();

    assert!(!k.is_durable());
    assert_eq!(p.degraded, 1);
    assert_eq!(k.engine().sessions().len(), 2);
}

#[test]
fn test_admin_code_is_recognized_only_by_resolve_input() {
    let mut k = kiosk().with_admin_code(Some("admin")).unwrap();
    let mut p = RecordingPresenter::default();

    assert_eq!(
        k.resolve_input(" ADMIN "),
        Ok(KioskInput::Admin(AdminCommand::Reset))
    );
    assert!(matches!(k.resolve_input("e2"), Ok(KioskInput::Staff(_))));

    let err = k.submit("ADMIN", Action::In, at(8, 0), &mut p).unwrap_err();
    assert_eq!(err, AttendanceError::UnknownStaffId("ADMIN".into()));
}

#[test]
fn test_admin_code_colliding_with_staff_id_is_refused() {
    let result = kiosk().with_admin_code(Some("e1"));
    assert!(matches!(result, Err(AppError::Config(_))));
}

#[test]
fn test_reset_clears_sessions_and_snapshot() {
    let store = SharedStore::default();
    let mut p = RecordingPresenter::default();
    let mut k = kiosk();
    k.attach_storage(Box::new(store.clone()), &mut p);

    k.submit("E1", Action::In, at(8, 0), &mut p).unwrap();
    k.submit("E2", Action::In, at(8, 10), &mut p).unwrap();
    let summary = k.reset(&mut p);

    assert_eq!(summary.sessions_cleared, 2);
    assert_eq!(summary.entries_cleared, 2);
    assert_eq!(store.raw().as_deref(), Some("{}"));
    assert_eq!(p.events.last().map(String::as_str), Some("reset:2:2"));
}

#[test]
fn test_run_loop_scans_checks_in_and_out() {
    let mut k = kiosk();
    let mut p = RecordingPresenter::default();
    let input = Cursor::new("e1\ni\nE1\no\nzzz\nquit\nE2\ni\n");

    let mut times = vec![at(8, 50), at(16, 0)].into_iter();
    let mut clock = move || times.next().unwrap_or_else(|| at(23, 0));

    run_loop(&mut k, input, StdDuration::ZERO, &mut clock, &mut p).unwrap();

    assert_eq!(
        p.events,
        vec!["in:E1:true", "out:E1:7h 10m", "rejected:unknown_staff_id"]
    );
    // input after quit is never read
    assert!(k.engine().sessions().is_empty());
    assert_eq!(k.engine().log().len(), 1);
}

#[test]
fn test_run_loop_admin_reset_requires_confirmation() {
    let mut k = kiosk().with_admin_code(Some("RESET-42")).unwrap();
    let mut p = RecordingPresenter::default();
    let input = Cursor::new("E2\nin\nreset-42\nno\nreset-42\nYES\n");

    let mut clock = || at(8, 0);
    run_loop(&mut k, input, StdDuration::ZERO, &mut clock, &mut p).unwrap();

    assert_eq!(p.events, vec!["in:E2:false", "reset:1:1"]);
    assert!(k.engine().log().is_empty());
}

#[test]
fn test_run_loop_cancel_changes_nothing() {
    let mut k = kiosk();
    let mut p = RecordingPresenter::default();
    let input = Cursor::new("E1\nc\n");

    let mut clock = || at(8, 0) + Duration::minutes(1);
    run_loop(&mut k, input, StdDuration::ZERO, &mut clock, &mut p).unwrap();

    assert!(p.events.is_empty());
    assert!(k.engine().sessions().is_empty());
}
