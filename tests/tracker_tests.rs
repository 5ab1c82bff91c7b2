//! End-to-end tests for the tracker over in-memory storage
//!
//! `MemoryStorage` clones share their backing map, so each test keeps a
//! second handle to inspect what the tracker actually persisted.

use unitracker::core::models::{CourseStatus, EffectiveStatus, StudyPlan};
use unitracker::core::mutations;
use unitracker::core::preferences::Preferences;
use unitracker::core::storage::{
    MemoryStorage, Storage, GRADES_KEY, PLAN_KEY, STATUSES_KEY,
};
use unitracker::core::tracker::Tracker;

fn tracker_with_view() -> (Tracker, MemoryStorage) {
    let storage = MemoryStorage::new();
    let view = storage.clone();
    (Tracker::new(Box::new(storage)), view)
}

/// Three courses across two semesters: `b` requires `a`, `c` requires both.
fn small_plan_json() -> &'static str {
    r#"{
        "plan": "Plan de Prueba",
        "subtitle": "Carrera Corta",
        "years": [
            {
                "year": 1,
                "label": "Año 1",
                "semesters": [
                    {
                        "semester": 1,
                        "label": "1° Cuatrimestre",
                        "courses": [
                            {"id": "a", "name": "Álgebra", "dependencies": [], "weeklyHours": 6},
                            {"id": "b", "name": "Análisis", "dependencies": ["a"], "weeklyHours": 8}
                        ]
                    },
                    {
                        "semester": 2,
                        "label": "2° Cuatrimestre",
                        "courses": [
                            {"id": "c", "name": "Física", "dependencies": ["a", "b"], "weeklyHours": 4}
                        ]
                    }
                ]
            }
        ]
    }"#
}

#[test]
fn test_fresh_tracker_loads_default_plan() {
    let (tracker, view) = tracker_with_view();

    assert_eq!(tracker.plan().title, "Plan de Estudios");
    assert_eq!(tracker.plan().subtitle, "Ingeniería Mecánica");
    assert_eq!(tracker.plan().years.len(), 5);
    assert_eq!(tracker.plan().course_count(), 40);

    // Loading alone writes nothing
    assert!(view.get(PLAN_KEY).is_none());
    assert!(view.get(STATUSES_KEY).is_none());
}

#[test]
fn test_availability_derives_from_direct_prerequisites() {
    let (mut tracker, _view) = tracker_with_view();

    // No prerequisites: available from the start
    assert_eq!(tracker.effective_status("1"), EffectiveStatus::Cursar);
    // "12" requires "1" and "3"
    assert_eq!(tracker.effective_status("12"), EffectiveStatus::Pendiente);

    tracker.cycle_status("1").expect("cycle");
    assert_eq!(tracker.effective_status("12"), EffectiveStatus::Pendiente);
    tracker.cycle_status("3").expect("cycle");
    assert_eq!(tracker.effective_status("12"), EffectiveStatus::Cursar);

    // One level only: "22" requires "12", "1", "3", "8". With every other
    // prerequisite regular, "12" being merely available does not count.
    tracker.cycle_status("8").expect("cycle");
    assert_eq!(tracker.effective_status("12"), EffectiveStatus::Cursar);
    assert_eq!(tracker.effective_status("22"), EffectiveStatus::Pendiente);
}

#[test]
fn test_cycle_walks_available_course_through_the_ring() {
    let (mut tracker, view) = tracker_with_view();

    let first = tracker
        .cycle_status("1")
        .expect("cycle")
        .expect("known course");
    assert_eq!(first.from, EffectiveStatus::Cursar);
    assert_eq!(first.to, EffectiveStatus::Regular);

    let doc = view.get(STATUSES_KEY).expect("statuses persisted");
    assert!(doc.contains(r#""1":"regular""#));

    let second = tracker
        .cycle_status("1")
        .expect("cycle")
        .expect("known course");
    assert_eq!(second.to, EffectiveStatus::Aprobada);

    // Third click clears the override; with no prerequisites the course
    // reads as available again
    let third = tracker
        .cycle_status("1")
        .expect("cycle")
        .expect("known course");
    assert_eq!(third.from, EffectiveStatus::Aprobada);
    assert_eq!(third.to, EffectiveStatus::Cursar);
    assert_eq!(tracker.statuses().stored("1"), CourseStatus::Pendiente);
}

#[test]
fn test_cycle_blocked_course_starts_its_stored_cycle() {
    let (mut tracker, _view) = tracker_with_view();

    let change = tracker
        .cycle_status("12")
        .expect("cycle")
        .expect("known course");
    assert_eq!(change.from, EffectiveStatus::Pendiente);
    assert_eq!(change.to, EffectiveStatus::Regular);
}

#[test]
fn test_cycle_unknown_course_is_a_no_op() {
    let (mut tracker, view) = tracker_with_view();

    assert!(tracker.cycle_status("999").expect("no error").is_none());
    assert!(view.get(STATUSES_KEY).is_none());
}

#[test]
fn test_grade_validation_and_persistence() {
    let (mut tracker, view) = tracker_with_view();

    assert!(tracker.set_grade("999", 7).is_err());
    assert!(tracker.set_grade("1", 0).is_err());
    assert!(tracker.set_grade("1", 11).is_err());
    assert!(view.get(GRADES_KEY).is_none());

    tracker.set_grade("1", 8).expect("valid grade");
    assert_eq!(tracker.grades().get("1"), Some(8));
    let doc = view.get(GRADES_KEY).expect("grades persisted");
    assert!(doc.contains(r#""1":8"#));

    tracker.clear_grade("1").expect("clear");
    assert_eq!(tracker.grades().get("1"), None);
    let doc = view.get(GRADES_KEY).expect("grades persisted");
    assert!(doc.contains(r#""1":null"#));
}

#[test]
fn test_stats_reflect_progress() {
    let (mut tracker, _view) = tracker_with_view();
    tracker.import_plan(small_plan_json()).expect("import");

    // a aprobada, b regular, c available through both
    tracker.cycle_status("a").expect("cycle");
    tracker.cycle_status("a").expect("cycle");
    tracker.cycle_status("b").expect("cycle");
    tracker.set_grade("a", 8).expect("grade");
    tracker.set_grade("b", 9).expect("grade");

    let stats = tracker.stats();
    assert_eq!(stats.total, 3);
    assert_eq!(stats.aprobada, 1);
    assert_eq!(stats.regular, 2);
    assert_eq!(stats.cursar, 1);
    assert_eq!(stats.pendiente, 0);
    assert_eq!(stats.total_hours, (6 + 8 + 4) * 16);
    assert_eq!(stats.completed_hours, (6 + 8) * 16);
    assert_eq!(stats.average, "8.50");
    assert_eq!(stats.graded_count, 2);
    assert_eq!(stats.pct_complete, 67);
}

#[test]
fn test_edit_session_cancel_restores_the_snapshot() {
    let (mut tracker, view) = tracker_with_view();
    tracker.import_plan(small_plan_json()).expect("import");
    let before = tracker.plan().clone();

    tracker.begin_edit();
    assert!(tracker.is_editing());
    let edited = mutations::add_course(tracker.plan(), 0, "Nueva Materia", 6);
    tracker.update_plan(edited);
    assert_eq!(tracker.plan().course_count(), 4);

    tracker.cancel_edit();
    assert!(!tracker.is_editing());
    assert_eq!(*tracker.plan(), before);

    let persisted = view.get(PLAN_KEY).expect("plan persisted");
    assert!(!persisted.contains("Nueva Materia"));
}

#[test]
fn test_edit_session_commit_persists() {
    let (mut tracker, view) = tracker_with_view();
    tracker.import_plan(small_plan_json()).expect("import");

    tracker.begin_edit();
    let edited = mutations::add_course(tracker.plan(), 0, "Nueva Materia", 6);
    tracker.update_plan(edited);
    tracker.commit_edit().expect("commit");

    assert!(!tracker.is_editing());
    assert_eq!(tracker.plan().course_count(), 4);
    let persisted = view.get(PLAN_KEY).expect("plan persisted");
    assert!(persisted.contains("Nueva Materia"));
}

#[test]
fn test_import_rejects_invalid_documents() {
    let (mut tracker, view) = tracker_with_view();

    let err = tracker.import_plan("not json").unwrap_err();
    assert!(err.contains("Invalid plan document"));
    assert!(tracker.import_plan("{}").is_err());

    let blank_title = r#"{"plan": "   ", "years": []}"#;
    let err = tracker.import_plan(blank_title).unwrap_err();
    assert!(err.contains("title"));

    // The current plan is untouched by failed imports
    assert_eq!(tracker.plan().title, "Plan de Estudios");
    assert!(view.get(PLAN_KEY).is_none());
}

#[test]
fn test_import_replaces_plan_and_keeps_inert_progress() {
    let (mut tracker, view) = tracker_with_view();
    tracker.cycle_status("1").expect("cycle");

    tracker.import_plan(small_plan_json()).expect("import");
    assert_eq!(tracker.plan().title, "Plan de Prueba");
    assert_eq!(tracker.plan().course_count(), 3);
    assert!(view.get(PLAN_KEY).expect("persisted").contains("Plan de Prueba"));

    // "1" is no longer in the plan: its override survives but stops
    // applying to cycle, and shows verbatim if queried
    assert_eq!(tracker.statuses().stored("1"), CourseStatus::Regular);
    assert!(tracker.cycle_status("1").expect("no error").is_none());
    assert_eq!(tracker.effective_status("1"), EffectiveStatus::Regular);
}

#[test]
fn test_export_round_trips() {
    let (mut tracker, _view) = tracker_with_view();
    tracker.import_plan(small_plan_json()).expect("import");

    let raw = tracker.export_plan(false).expect("export");
    let parsed: StudyPlan = serde_json::from_str(&raw).expect("parse");
    assert_eq!(parsed, *tracker.plan());
}

#[test]
fn test_export_pruned_drops_implied_edges() {
    let (mut tracker, _view) = tracker_with_view();
    tracker.import_plan(small_plan_json()).expect("import");

    // c requires a and b, but a is already implied through b
    let pruned = tracker.export_plan(true).expect("export");
    let parsed: StudyPlan = serde_json::from_str(&pruned).expect("parse");
    assert_eq!(
        parsed.course("c").expect("c").dependencies,
        vec!["b".to_string()]
    );

    // Pruning is export-only; the live plan keeps both edges
    assert_eq!(tracker.plan().course("c").expect("c").dependencies.len(), 2);
}

#[test]
fn test_delete_plan_switches_to_the_blank_plan() {
    let (mut tracker, view) = tracker_with_view();
    tracker.cycle_status("1").expect("cycle");
    tracker.set_grade("1", 9).expect("grade");

    tracker.delete_plan().expect("delete");

    assert_eq!(tracker.plan().title, "Mi Plan de Estudios");
    assert_eq!(tracker.plan().course_count(), 0);
    assert!(tracker.statuses().is_empty());
    assert!(tracker.grades().is_empty());
    assert!(view.get(PLAN_KEY).is_none());
    assert_eq!(view.get(STATUSES_KEY).as_deref(), Some("{}"));
    assert_eq!(view.get(GRADES_KEY).as_deref(), Some("{}"));
}

#[test]
fn test_reset_progress_clears_both_documents() {
    let (mut tracker, view) = tracker_with_view();
    tracker.cycle_status("1").expect("cycle");
    tracker.set_grade("1", 7).expect("grade");

    tracker.reset_progress().expect("reset");

    assert!(tracker.statuses().is_empty());
    assert!(tracker.grades().is_empty());
    assert_eq!(view.get(STATUSES_KEY).as_deref(), Some("{}"));
    assert_eq!(view.get(GRADES_KEY).as_deref(), Some("{}"));
}

#[test]
fn test_library_save_and_load_restores_progress() {
    let (mut tracker, _view) = tracker_with_view();
    tracker.cycle_status("1").expect("cycle");
    tracker.cycle_status("1").expect("cycle");
    tracker.set_grade("1", 9).expect("grade");

    tracker.save_to_library("Respaldo", "con notas").expect("save");
    tracker.reset_progress().expect("reset");
    assert!(tracker.statuses().is_empty());

    let restored = tracker.load_from_library("Respaldo").expect("load");
    assert!(restored);
    assert_eq!(tracker.statuses().stored("1"), CourseStatus::Aprobada);
    assert_eq!(tracker.grades().get("1"), Some(9));
    assert_eq!(tracker.plan().course_count(), 40);
}

#[test]
fn test_template_load_resets_progress() {
    let (mut tracker, _view) = tracker_with_view();
    tracker.cycle_status("1").expect("cycle");

    // No saved entry with this title, so the built-in template is loaded
    // and templates never carry progress
    let restored = tracker
        .load_from_library("Plan de Estudios")
        .expect("load template");
    assert!(!restored);
    assert!(tracker.statuses().is_empty());
    assert_eq!(tracker.plan().course_count(), 40);
}

#[test]
fn test_custom_entry_shadows_builtin_template() {
    let (mut tracker, _view) = tracker_with_view();
    tracker.cycle_status("1").expect("cycle");

    tracker
        .save_to_library("Plan de Estudios", "")
        .expect("save");
    tracker.reset_progress().expect("reset");

    let restored = tracker.load_from_library("Plan de Estudios").expect("load");
    assert!(restored);
    assert_eq!(tracker.statuses().stored("1"), CourseStatus::Regular);
}

#[test]
fn test_library_delete_reports_presence() {
    let (tracker, _view) = tracker_with_view();
    tracker.save_to_library("Respaldo", "").expect("save");

    assert!(tracker.delete_from_library("Respaldo").expect("delete"));
    assert!(!tracker.delete_from_library("Respaldo").expect("delete"));
}

#[test]
fn test_unknown_library_title_is_an_error() {
    let (mut tracker, _view) = tracker_with_view();

    let err = tracker.load_from_library("No Existe").unwrap_err();
    assert!(err.contains("No Existe"));
}

#[test]
fn test_state_survives_reopening() {
    let storage = MemoryStorage::new();
    {
        let mut tracker = Tracker::new(Box::new(storage.clone()));
        tracker.cycle_status("1").expect("cycle");
        tracker.set_grade("1", 10).expect("grade");
        tracker.set_preference("show-hours", "false").expect("pref");
    }

    let tracker = Tracker::new(Box::new(storage));
    assert_eq!(tracker.statuses().stored("1"), CourseStatus::Regular);
    assert_eq!(tracker.grades().get("1"), Some(10));
    assert!(!tracker.preferences().show_hours);
}

#[test]
fn test_fallback_preferences_yield_to_persisted_document() {
    let storage = MemoryStorage::new();
    let fallback = Preferences {
        show_hours: false,
        show_grades: false,
    };
    let mut tracker = Tracker::with_fallback_preferences(Box::new(storage.clone()), fallback);
    assert!(!tracker.preferences().show_hours);
    assert!(!tracker.preferences().show_grades);

    tracker.set_preference("show-grades", "true").expect("pref");

    // Once a document exists it wins over any fallback
    let tracker = Tracker::with_fallback_preferences(Box::new(storage), Preferences::default());
    assert!(!tracker.preferences().show_hours);
    assert!(tracker.preferences().show_grades);
}

#[test]
fn test_corrupt_documents_fall_back_to_defaults() {
    let storage = MemoryStorage::new();
    storage.set(STATUSES_KEY, "not json").expect("seed");
    storage
        .set(GRADES_KEY, r#"{"1": "", "2": 7, "3": 99}"#)
        .expect("seed");

    let tracker = Tracker::new(Box::new(storage));
    assert!(tracker.statuses().is_empty());
    assert_eq!(tracker.grades().get("1"), None);
    assert_eq!(tracker.grades().get("2"), Some(7));
    assert_eq!(tracker.grades().get("3"), None);
}
