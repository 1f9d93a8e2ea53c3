//! Application state: the roster, search draft, grid selection, dialog
//! state, and the intent methods the key dispatcher calls.
//!
//! Data flow is unidirectional: an intent runs a pure transform from
//! [`crate::roster`], the new roster is committed wholesale, the store
//! writes through, and the next draw renders from the result.

use anyhow::Context;

use crate::config::Config;
use crate::roster::{self, Student};
use crate::store::RosterStore;

/// Draw ticks the celebration flash stays visible after a class-wide award.
const CELEBRATION_TICKS: u8 = 30;
/// Draw ticks a transient status message stays visible.
const STATUS_TICKS: u16 = 40;

/// Where key input is routed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Browse,
    Search,
    Dialog,
}

/// Single-line text draft with a char-indexed cursor.
#[derive(Debug, Default)]
pub struct DraftInput {
    text: String,
    cursor: usize,
}

impl DraftInput {
    fn with_text(text: String) -> Self {
        let cursor = text.chars().count();
        Self { text, cursor }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn take_text(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.text)
    }

    fn move_cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    fn move_cursor_right(&mut self) {
        let cursor_moved_right = self.cursor.saturating_add(1);
        self.cursor = self.clamp_cursor(cursor_moved_right);
    }

    fn enter_char(&mut self, new_char: char) {
        let index = self.byte_index();
        self.text.insert(index, new_char);
        self.move_cursor_right();
    }

    fn delete_char(&mut self) {
        if self.cursor == 0 {
            return;
        }

        let current_index = self.cursor;
        let from_left_to_current_index = current_index - 1;

        let before_char_to_delete = self.text.chars().take(from_left_to_current_index);
        let after_char_to_delete = self.text.chars().skip(current_index);

        self.text = before_char_to_delete.chain(after_char_to_delete).collect();
        self.move_cursor_left();
    }

    fn reset_cursor(&mut self) {
        self.cursor = 0;
    }

    fn move_cursor_end(&mut self) {
        self.cursor = self.text.chars().count();
    }

    fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    fn byte_index(&self) -> usize {
        self.text
            .char_indices()
            .map(|(i, _)| i)
            .nth(self.cursor)
            .unwrap_or(self.text.len())
    }

    fn clamp_cursor(&self, new_cursor_pos: usize) -> usize {
        new_cursor_pos.clamp(0, self.text.chars().count())
    }
}

/// What a modal dialog edits when submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    AddStudent,
    Rename { id: u32 },
    SetScore { id: u32 },
}

/// A centered modal with a single text field. Input stays a draft until
/// submit, where it is parsed/validated before any transform runs.
#[derive(Debug)]
pub struct Dialog {
    kind: DialogKind,
    draft: DraftInput,
}

impl Dialog {
    fn new(kind: DialogKind, draft: DraftInput) -> Self {
        Self { kind, draft }
    }

    #[must_use]
    pub fn kind(&self) -> DialogKind {
        self.kind
    }

    #[must_use]
    pub fn draft(&self) -> &DraftInput {
        &self.draft
    }

    #[must_use]
    pub fn title(&self) -> &'static str {
        match self.kind {
            DialogKind::AddStudent => " Add New Student ",
            DialogKind::Rename { .. } => " Rename Student ",
            DialogKind::SetScore { .. } => " Set Student Score ",
        }
    }

    #[must_use]
    pub fn placeholder(&self) -> &'static str {
        match self.kind {
            DialogKind::AddStudent => "Enter student name",
            DialogKind::Rename { .. } => "Enter new name",
            DialogKind::SetScore { .. } => "Enter new score (-10 to 100)",
        }
    }
}

#[derive(Debug, Default)]
enum Focus {
    #[default]
    Browse,
    Search,
    Dialog(Dialog),
}

/// Application state.
pub struct App {
    roster: Vec<Student>,
    store: RosterStore,
    search: DraftInput,
    focus: Focus,
    /// Position within the filtered view, not the full roster.
    selected: usize,
    /// Column count of the last rendered grid, fed back by the renderer.
    grid_columns: usize,
    first_visible_row: usize,
    celebration: u8,
    reduced_motion: bool,
    status_message: Option<String>,
    status_ttl: u16,
    should_quit: bool,
    tick: usize,
}

impl App {
    pub fn new() -> anyhow::Result<Self> {
        let config = Config::load().unwrap_or_default();
        let path = config
            .roster_path()
            .or_else(RosterStore::default_path)
            .context("could not determine a home directory for roster storage")?;
        Ok(Self::with_store(
            RosterStore::new(path),
            config.reduced_motion(),
        ))
    }

    /// Build an app over an explicit store. Also the test entry point, so
    /// tests never touch the real home directory.
    #[must_use]
    pub fn with_store(store: RosterStore, reduced_motion: bool) -> Self {
        let roster = store.load();
        Self {
            roster,
            store,
            search: DraftInput::default(),
            focus: Focus::default(),
            selected: 0,
            grid_columns: 1,
            first_visible_row: 0,
            celebration: 0,
            reduced_motion,
            status_message: None,
            status_ttl: 0,
            should_quit: false,
            tick: 0,
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn input_mode(&self) -> InputMode {
        match self.focus {
            Focus::Browse => InputMode::Browse,
            Focus::Search => InputMode::Search,
            Focus::Dialog(_) => InputMode::Dialog,
        }
    }

    #[must_use]
    pub fn roster(&self) -> &[Student] {
        &self.roster
    }

    /// The roster narrowed by the current search text, in roster order.
    #[must_use]
    pub fn visible_students(&self) -> Vec<&Student> {
        roster::filter_by_name(&self.roster, self.search.text())
    }

    #[must_use]
    pub fn search_text(&self) -> &str {
        self.search.text()
    }

    #[must_use]
    pub fn search_cursor(&self) -> usize {
        self.search.cursor()
    }

    #[must_use]
    pub fn dialog(&self) -> Option<&Dialog> {
        match &self.focus {
            Focus::Dialog(dialog) => Some(dialog),
            _ => None,
        }
    }

    #[must_use]
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    #[must_use]
    pub fn selected_student(&self) -> Option<&Student> {
        self.visible_students().get(self.selected).copied()
    }

    #[must_use]
    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    #[must_use]
    pub fn celebration_remaining(&self) -> u8 {
        self.celebration
    }

    #[must_use]
    pub fn tick_count(&self) -> usize {
        self.tick
    }

    #[must_use]
    pub fn first_visible_row(&self) -> usize {
        self.first_visible_row
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    /// Advance one draw tick: fade the celebration, expire stale status.
    pub fn tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
        self.celebration = self.celebration.saturating_sub(1);
        if self.status_ttl > 0 {
            self.status_ttl -= 1;
            if self.status_ttl == 0 {
                self.status_message = None;
            }
        }
    }

    // === Grid selection ===

    /// Layout feedback from the renderer: the column count actually drawn
    /// and how many card rows fit. Keeps the selected card scrolled into
    /// view.
    pub fn update_grid(&mut self, columns: usize, visible_rows: usize) {
        self.grid_columns = columns.max(1);
        let row = self.selected / self.grid_columns;
        if row < self.first_visible_row {
            self.first_visible_row = row;
        } else if visible_rows > 0 && row >= self.first_visible_row + visible_rows {
            self.first_visible_row = row + 1 - visible_rows;
        }
    }

    pub fn select_left(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_right(&mut self) {
        let len = self.visible_students().len();
        if self.selected + 1 < len {
            self.selected += 1;
        }
    }

    pub fn select_up(&mut self) {
        self.selected = self.selected.saturating_sub(self.grid_columns);
    }

    pub fn select_down(&mut self) {
        let len = self.visible_students().len();
        let candidate = self.selected + self.grid_columns;
        if candidate < len {
            self.selected = candidate;
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.visible_students().len();
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    fn selected_id(&self) -> Option<u32> {
        self.selected_student().map(|s| s.id)
    }

    // === Score intents ===

    pub fn add_point_to_all(&mut self) {
        self.commit(roster::add_point_to_all(&self.roster));
        if !self.reduced_motion {
            self.celebration = CELEBRATION_TICKS;
        }
    }

    pub fn remove_point_from_all(&mut self) {
        self.commit(roster::remove_point_from_all(&self.roster));
    }

    pub fn add_point_selected(&mut self) {
        if let Some(id) = self.selected_id() {
            self.commit(roster::add_point(&self.roster, id));
        }
    }

    pub fn remove_point_selected(&mut self) {
        if let Some(id) = self.selected_id() {
            self.commit(roster::remove_point(&self.roster, id));
        }
    }

    pub fn reset_all_points(&mut self) {
        self.commit(roster::reset_all(&self.roster));
        self.set_status("All points reset to zero");
    }

    pub fn delete_selected(&mut self) {
        if let Some(student) = self.selected_student() {
            let id = student.id;
            let name = student.name.clone();
            self.commit(roster::delete_student(&self.roster, id));
            self.set_status(format!("Removed {name}"));
        }
    }

    // === Search ===

    pub fn enter_search(&mut self) {
        self.focus = Focus::Search;
    }

    pub fn leave_search(&mut self) {
        self.focus = Focus::Browse;
    }

    pub fn search_push(&mut self, c: char) {
        self.search.enter_char(c);
        self.clamp_selection();
    }

    pub fn search_backspace(&mut self) {
        self.search.delete_char();
        self.clamp_selection();
    }

    pub fn search_clear(&mut self) {
        self.search.clear();
        self.clamp_selection();
    }

    pub fn search_left(&mut self) {
        self.search.move_cursor_left();
    }

    pub fn search_right(&mut self) {
        self.search.move_cursor_right();
    }

    pub fn search_home(&mut self) {
        self.search.reset_cursor();
    }

    pub fn search_end(&mut self) {
        self.search.move_cursor_end();
    }

    // === Dialogs ===

    pub fn open_add_dialog(&mut self) {
        self.focus = Focus::Dialog(Dialog::new(DialogKind::AddStudent, DraftInput::default()));
    }

    /// Rename opens prefilled with the current name.
    pub fn open_rename_dialog(&mut self) {
        if let Some(student) = self.selected_student() {
            let dialog = Dialog::new(
                DialogKind::Rename { id: student.id },
                DraftInput::with_text(student.name.clone()),
            );
            self.focus = Focus::Dialog(dialog);
        }
    }

    /// Set-score opens prefilled with the current points.
    pub fn open_set_score_dialog(&mut self) {
        if let Some(student) = self.selected_student() {
            let dialog = Dialog::new(
                DialogKind::SetScore { id: student.id },
                DraftInput::with_text(student.points.to_string()),
            );
            self.focus = Focus::Dialog(dialog);
        }
    }

    pub fn cancel_dialog(&mut self) {
        if matches!(self.focus, Focus::Dialog(_)) {
            self.focus = Focus::Browse;
        }
    }

    /// Parse the draft at the submit boundary, run the transform, and
    /// return to browsing. Invalid input degrades per the transform's
    /// rules; nothing is rejected with an error.
    pub fn submit_dialog(&mut self) {
        let mut dialog = match std::mem::take(&mut self.focus) {
            Focus::Dialog(dialog) => dialog,
            other => {
                self.focus = other;
                return;
            }
        };

        let input = dialog.draft.take_text();
        match dialog.kind {
            DialogKind::AddStudent => {
                let name = input.trim().to_string();
                self.commit(roster::add_student(&self.roster, &input));
                if !name.is_empty() {
                    self.set_status(format!("Added {name}"));
                }
            }
            DialogKind::Rename { id } => {
                self.commit(roster::rename_student(&self.roster, id, &input));
            }
            DialogKind::SetScore { id } => {
                self.commit(roster::set_score(&self.roster, id, &input));
            }
        }
    }

    pub fn dialog_push(&mut self, c: char) {
        if let Focus::Dialog(dialog) = &mut self.focus {
            dialog.draft.enter_char(c);
        }
    }

    pub fn dialog_backspace(&mut self) {
        if let Focus::Dialog(dialog) = &mut self.focus {
            dialog.draft.delete_char();
        }
    }

    pub fn dialog_left(&mut self) {
        if let Focus::Dialog(dialog) = &mut self.focus {
            dialog.draft.move_cursor_left();
        }
    }

    pub fn dialog_right(&mut self) {
        if let Focus::Dialog(dialog) = &mut self.focus {
            dialog.draft.move_cursor_right();
        }
    }

    pub fn dialog_home(&mut self) {
        if let Focus::Dialog(dialog) = &mut self.focus {
            dialog.draft.reset_cursor();
        }
    }

    pub fn dialog_end(&mut self) {
        if let Focus::Dialog(dialog) = &mut self.focus {
            dialog.draft.move_cursor_end();
        }
    }

    pub fn dialog_clear(&mut self) {
        if let Focus::Dialog(dialog) = &mut self.focus {
            dialog.draft.clear();
        }
    }

    // === Internals ===

    /// Replace the roster wholesale and write through. Persistence failures
    /// are logged, never surfaced.
    fn commit(&mut self, next: Vec<Student>) {
        self.roster = next;
        self.clamp_selection();
        if let Err(err) = self.store.save(&self.roster) {
            tracing::warn!("failed to persist roster: {err:#}");
        }
    }

    fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.status_ttl = STATUS_TICKS;
    }
}
