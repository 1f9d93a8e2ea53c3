//! Application state tests
//!
//! Every app here runs over a store rooted in a temp directory so tests
//! never touch the real home directory.

use classpoints::app::{App, DialogKind, InputMode};
use classpoints::roster::{MAX_POINTS, MIN_POINTS};
use classpoints::store::{ROSTER_FILE, RosterStore};

fn fresh_app(dir: &tempfile::TempDir) -> App {
    let store = RosterStore::new(dir.path().join(ROSTER_FILE));
    App::with_store(store, false)
}

fn type_into_dialog(app: &mut App, text: &str) {
    for c in text.chars() {
        app.dialog_push(c);
    }
}

#[test]
fn a_fresh_app_loads_the_seed_roster() {
    let dir = tempfile::tempdir().unwrap();
    let app = fresh_app(&dir);
    assert_eq!(app.roster().len(), 20);
    assert_eq!(app.roster()[0].name, "Abigail Allen");
    assert_eq!(app.input_mode(), InputMode::Browse);
}

#[test]
fn mutations_write_through_to_the_store() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = fresh_app(&dir);
    app.add_point_to_all();

    let reloaded = RosterStore::new(dir.path().join(ROSTER_FILE)).load();
    assert!(reloaded.iter().all(|s| s.points == 1));
}

#[test]
fn class_wide_award_triggers_the_celebration_flash() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = fresh_app(&dir);
    assert_eq!(app.celebration_remaining(), 0);

    app.add_point_to_all();
    assert!(app.celebration_remaining() > 0);

    app.tick();
    let after_one_tick = app.celebration_remaining();
    app.tick();
    assert!(app.celebration_remaining() < after_one_tick);
}

#[test]
fn reduced_motion_suppresses_the_celebration() {
    let dir = tempfile::tempdir().unwrap();
    let store = RosterStore::new(dir.path().join(ROSTER_FILE));
    let mut app = App::with_store(store, true);

    app.add_point_to_all();
    assert_eq!(app.celebration_remaining(), 0);
    // The points still moved; only the flash is suppressed.
    assert!(app.roster().iter().all(|s| s.points == 1));
}

#[test]
fn selected_student_scoring_respects_the_range() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = fresh_app(&dir);

    for _ in 0..(MAX_POINTS + 10) {
        app.add_point_selected();
    }
    assert_eq!(app.selected_student().unwrap().points, MAX_POINTS);

    for _ in 0..(MAX_POINTS - MIN_POINTS + 10) {
        app.remove_point_selected();
    }
    assert_eq!(app.selected_student().unwrap().points, MIN_POINTS);
}

#[test]
fn search_narrows_the_visible_students() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = fresh_app(&dir);

    app.enter_search();
    assert_eq!(app.input_mode(), InputMode::Search);
    for c in "emma".chars() {
        app.search_push(c);
    }
    let visible = app.visible_students();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].name, "Emma Watson");

    // Leaving search keeps the filter in effect.
    app.leave_search();
    assert_eq!(app.input_mode(), InputMode::Browse);
    assert_eq!(app.visible_students().len(), 1);

    app.search_clear();
    assert_eq!(app.visible_students().len(), 20);
}

#[test]
fn selection_clamps_when_the_filter_shrinks_the_view() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = fresh_app(&dir);

    app.update_grid(4, 5);
    for _ in 0..19 {
        app.select_right();
    }
    assert_eq!(app.selected_index(), 19);

    app.enter_search();
    for c in "emma".chars() {
        app.search_push(c);
    }
    assert_eq!(app.selected_index(), 0);
    assert_eq!(app.selected_student().unwrap().name, "Emma Watson");
}

#[test]
fn grid_navigation_moves_by_rows_and_columns() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = fresh_app(&dir);
    app.update_grid(4, 5);

    app.select_down();
    assert_eq!(app.selected_index(), 4);
    app.select_right();
    assert_eq!(app.selected_index(), 5);
    app.select_up();
    assert_eq!(app.selected_index(), 1);
    app.select_left();
    assert_eq!(app.selected_index(), 0);

    // Never moves past either end.
    app.select_up();
    app.select_left();
    assert_eq!(app.selected_index(), 0);
    for _ in 0..40 {
        app.select_right();
    }
    assert_eq!(app.selected_index(), 19);
    app.select_down();
    assert_eq!(app.selected_index(), 19);
}

#[test]
fn grid_feedback_scrolls_the_selected_row_into_view() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = fresh_app(&dir);

    // 4 columns, 2 visible rows: 20 students span 5 rows.
    app.update_grid(4, 2);
    assert_eq!(app.first_visible_row(), 0);

    for _ in 0..4 {
        app.select_down();
    }
    app.update_grid(4, 2);
    assert_eq!(app.first_visible_row(), 3, "selection on row 4 scrolls down");

    for _ in 0..4 {
        app.select_up();
    }
    app.update_grid(4, 2);
    assert_eq!(app.first_visible_row(), 0, "selection back on row 0 scrolls up");
}

#[test]
fn add_student_dialog_appends_with_the_next_id() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = fresh_app(&dir);

    app.open_add_dialog();
    assert_eq!(app.input_mode(), InputMode::Dialog);
    assert_eq!(app.dialog().unwrap().kind(), DialogKind::AddStudent);

    type_into_dialog(&mut app, "Alan Turing");
    app.submit_dialog();

    assert_eq!(app.input_mode(), InputMode::Browse);
    assert_eq!(app.roster().len(), 21);
    let added = app.roster().last().unwrap();
    assert_eq!(added.id, 21);
    assert_eq!(added.name, "Alan Turing");
    assert_eq!(added.points, 0);
    assert_eq!(app.status_message(), Some("Added Alan Turing"));
}

#[test]
fn add_student_dialog_with_blank_input_is_a_noop() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = fresh_app(&dir);

    app.open_add_dialog();
    type_into_dialog(&mut app, "   ");
    app.submit_dialog();

    assert_eq!(app.roster().len(), 20);
    assert_eq!(app.status_message(), None);
}

#[test]
fn rename_dialog_is_prefilled_and_trims_on_submit() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = fresh_app(&dir);

    app.open_rename_dialog();
    let dialog = app.dialog().unwrap();
    assert_eq!(dialog.draft().text(), "Abigail Allen");

    app.dialog_clear();
    type_into_dialog(&mut app, "  Abby Allen ");
    app.submit_dialog();
    assert_eq!(app.selected_student().unwrap().name, "Abby Allen");
}

#[test]
fn rename_dialog_submitted_empty_keeps_the_old_name() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = fresh_app(&dir);

    app.open_rename_dialog();
    app.dialog_clear();
    app.submit_dialog();
    assert_eq!(app.selected_student().unwrap().name, "Abigail Allen");
}

#[test]
fn set_score_dialog_is_prefilled_and_clamps() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = fresh_app(&dir);

    app.open_set_score_dialog();
    assert_eq!(app.dialog().unwrap().draft().text(), "0");

    app.dialog_clear();
    type_into_dialog(&mut app, "200");
    app.submit_dialog();
    assert_eq!(app.selected_student().unwrap().points, 100);

    app.open_set_score_dialog();
    app.dialog_clear();
    type_into_dialog(&mut app, "abc");
    app.submit_dialog();
    assert_eq!(app.selected_student().unwrap().points, 0);
}

#[test]
fn cancel_dialog_discards_the_draft() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = fresh_app(&dir);

    app.open_add_dialog();
    type_into_dialog(&mut app, "Nobody");
    app.cancel_dialog();

    assert_eq!(app.input_mode(), InputMode::Browse);
    assert_eq!(app.roster().len(), 20);
}

#[test]
fn dialogs_need_a_selected_student() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = fresh_app(&dir);

    // Filter down to nothing; rename/set-score have no target.
    app.enter_search();
    for c in "zzz".chars() {
        app.search_push(c);
    }
    app.leave_search();
    assert!(app.selected_student().is_none());

    app.open_rename_dialog();
    assert_eq!(app.input_mode(), InputMode::Browse);
    app.open_set_score_dialog();
    assert_eq!(app.input_mode(), InputMode::Browse);
}

#[test]
fn delete_selected_removes_and_reports() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = fresh_app(&dir);

    app.delete_selected();
    assert_eq!(app.roster().len(), 19);
    assert_eq!(app.status_message(), Some("Removed Abigail Allen"));
    assert_eq!(app.selected_student().unwrap().name, "Alexander Hall");
}

#[test]
fn status_messages_expire_after_their_ttl() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = fresh_app(&dir);

    app.reset_all_points();
    assert!(app.status_message().is_some());
    for _ in 0..100 {
        app.tick();
    }
    assert_eq!(app.status_message(), None);
}

#[test]
fn reset_all_points_zeroes_the_whole_roster() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = fresh_app(&dir);

    app.add_point_to_all();
    app.add_point_selected();
    app.reset_all_points();
    assert!(app.roster().iter().all(|s| s.points == 0));
}

#[test]
fn deleting_the_last_visible_student_clamps_the_selection() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = fresh_app(&dir);
    app.update_grid(1, 20);

    for _ in 0..19 {
        app.select_down();
    }
    assert_eq!(app.selected_index(), 19);
    app.delete_selected();
    assert_eq!(app.selected_index(), 18);
}
