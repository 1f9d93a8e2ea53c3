//! ratatui rendering: header with search box, the student card grid,
//! centered modal dialogs, and the status bar.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, InputMode};
use crate::avatar;
use crate::roster::{MIN_POINTS, Student};
use crate::theme::{celebration_frame, colors, styles};

/// Card footprint in the grid, borders included.
const CARD_WIDTH: u16 = 22;
const CARD_HEIGHT: u16 = 7;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &mut App) {
    // Clear with background color
    let bg_block = Block::default().style(Style::default().bg(colors::BG_DARK));
    frame.render_widget(bg_block, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Header: search box + key hints
            Constraint::Min(1),    // Card grid
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    draw_header(frame, app, chunks[0]);
    draw_grid(frame, app, chunks[1]);
    draw_status_bar(frame, app, chunks[2]);

    if app.input_mode() == InputMode::Dialog {
        draw_dialog(frame, app);
    }
}

fn draw_header(frame: &mut Frame, app: &App, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(34), Constraint::Min(0)])
        .split(area);

    draw_search_box(frame, app, columns[0]);

    let title_line = Line::from(Span::styled(
        "Class Points ",
        Style::default()
            .fg(colors::PRIMARY)
            .add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Right);

    let hints_line = Line::from(vec![
        Span::styled("+/-", styles::key_highlight()),
        Span::styled(" score  ", styles::key_hint()),
        Span::styled("a/x", styles::key_highlight()),
        Span::styled(" all  ", styles::key_hint()),
        Span::styled("n", styles::key_highlight()),
        Span::styled(" new  ", styles::key_hint()),
        Span::styled("r", styles::key_highlight()),
        Span::styled(" rename  ", styles::key_hint()),
        Span::styled("s", styles::key_highlight()),
        Span::styled(" set  ", styles::key_hint()),
        Span::styled("d", styles::key_highlight()),
        Span::styled(" delete  ", styles::key_hint()),
        Span::styled("0", styles::key_highlight()),
        Span::styled(" reset  ", styles::key_hint()),
        Span::styled("q", styles::key_highlight()),
        Span::styled(" quit ", styles::key_hint()),
    ])
    .alignment(Alignment::Right);

    let right = Paragraph::new(vec![title_line, hints_line]);
    frame.render_widget(right, columns[1]);
}

fn draw_search_box(frame: &mut Frame, app: &App, area: Rect) {
    let searching = app.input_mode() == InputMode::Search;
    let border_style = if searching {
        styles::search_active()
    } else {
        styles::search_idle()
    };

    let content = if app.search_text().is_empty() && !searching {
        Line::from(vec![
            Span::styled(" Search students...", Style::default().fg(colors::TEXT_MUTED)),
            Span::styled("  /", styles::key_highlight()),
        ])
    } else {
        Line::from(vec![
            Span::raw(" "),
            Span::styled(
                app.search_text().to_string(),
                Style::default().fg(colors::TEXT_PRIMARY),
            ),
        ])
    };

    let search = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(Line::from(Span::styled(" Search ", border_style))),
    );
    frame.render_widget(search, area);

    if searching {
        let text_before_cursor: String = app
            .search_text()
            .chars()
            .take(app.search_cursor())
            .collect();
        let cursor_x = area.x + 2 + text_before_cursor.width() as u16;
        let cursor_y = area.y + 1;
        frame.set_cursor_position((cursor_x, cursor_y));
    }
}

fn draw_grid(frame: &mut Frame, app: &mut App, area: Rect) {
    let columns = usize::from((area.width / CARD_WIDTH).max(1));
    let visible_rows = usize::from((area.height / CARD_HEIGHT).max(1));
    app.update_grid(columns, visible_rows);

    let first_row = app.first_visible_row();
    let selected = app.selected_index();
    let students: Vec<Student> = app.visible_students().into_iter().cloned().collect();

    if students.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "No students found.",
            Style::default().fg(colors::TEXT_MUTED),
        )))
        .alignment(Alignment::Center);
        let placeholder_area = Rect {
            x: area.x,
            y: area.y + area.height.min(4) / 2,
            width: area.width,
            height: 1,
        };
        frame.render_widget(empty, placeholder_area);
        return;
    }

    for (i, student) in students.iter().enumerate() {
        let row = i / columns;
        if row < first_row {
            continue;
        }
        let visible_row = row - first_row;
        if visible_row >= visible_rows {
            break;
        }

        let col = i % columns;
        let x = area.x + (col as u16) * CARD_WIDTH;
        let y = area.y + (visible_row as u16) * CARD_HEIGHT;
        let card_area = Rect {
            x,
            y,
            width: CARD_WIDTH.min(area.right().saturating_sub(x)),
            height: CARD_HEIGHT.min(area.bottom().saturating_sub(y)),
        };
        draw_card(frame, student, i == selected, card_area);
    }
}

fn draw_card(frame: &mut Frame, student: &Student, selected: bool, area: Rect) {
    let (border_type, border_style) = if selected {
        (BorderType::Thick, styles::card_selected())
    } else {
        (BorderType::Rounded, styles::card_border())
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style)
        .style(Style::default().bg(colors::BG_PANEL));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let avatar_style = Style::default()
        .fg(colors::BG_DARK)
        .bg(avatar::color_from_name(&student.name))
        .add_modifier(Modifier::BOLD);

    let name: String = student
        .name
        .chars()
        .take(usize::from(inner.width))
        .collect();

    let minus_style = if student.points <= MIN_POINTS {
        Style::default().fg(colors::TEXT_MUTED)
    } else {
        Style::default().fg(colors::RED)
    };

    let lines = vec![
        Line::from(Span::styled(
            format!(" {} ", avatar::initials(&student.name)),
            avatar_style,
        ))
        .alignment(Alignment::Center),
        Line::from(Span::styled(
            name,
            Style::default().fg(colors::TEXT_PRIMARY),
        ))
        .alignment(Alignment::Center),
        Line::from(Span::styled(
            student.points.to_string(),
            Style::default()
                .fg(avatar::point_color(student.points))
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        Line::from(""),
        Line::from(vec![
            Span::styled("(-)", minus_style),
            Span::raw("  "),
            Span::styled("(+)", Style::default().fg(colors::GREEN)),
        ])
        .alignment(Alignment::Center),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let matched = app.visible_students().len();
    let total = app.roster().len();

    let (status_text, status_style) = if app.celebration_remaining() > 0 {
        let sparkle = celebration_frame(app.tick_count());
        (
            format!("{sparkle} +1 for everyone! {sparkle}"),
            styles::celebration(),
        )
    } else if let Some(msg) = app.status_message() {
        (msg.to_string(), styles::status_notice())
    } else if app.search_text().is_empty() {
        (format!("● {total} students"), styles::status_info())
    } else {
        (
            format!("● {matched}/{total} students │ filter: \"{}\"", app.search_text()),
            styles::status_info(),
        )
    };

    let status = Paragraph::new(Line::from(vec![
        Span::raw(" "),
        Span::styled(status_text, status_style),
    ]));

    let (mode_text, mode_color) = match app.input_mode() {
        InputMode::Browse => ("BROWSE", colors::TEXT_MUTED),
        InputMode::Search => ("SEARCH", colors::GREEN),
        InputMode::Dialog => ("DIALOG", colors::YELLOW),
    };

    let mode_width = mode_text.len() as u16 + 2;
    let status_area = Rect {
        x: area.x,
        y: area.y,
        width: area.width.saturating_sub(mode_width),
        height: area.height,
    };
    let mode_area = Rect {
        x: area.x + area.width.saturating_sub(mode_width),
        y: area.y,
        width: mode_width,
        height: area.height,
    };

    frame.render_widget(status, status_area);

    let mode = Paragraph::new(Line::from(vec![
        Span::styled(
            mode_text,
            Style::default().fg(mode_color).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
    ]))
    .alignment(Alignment::Right);
    frame.render_widget(mode, mode_area);
}

fn draw_dialog(frame: &mut Frame, app: &App) {
    let Some(dialog) = app.dialog() else {
        return;
    };

    let area = frame.area();
    let popup_width = 46.min(area.width.saturating_sub(4));
    let popup_height = 7;

    let popup_area = Rect {
        x: (area.width.saturating_sub(popup_width)) / 2,
        y: area.height / 3,
        width: popup_width,
        height: popup_height.min(area.height),
    };

    // Clear background
    frame.render_widget(Clear, popup_area);

    let draft = dialog.draft();
    let input_line = if draft.text().is_empty() {
        Line::from(vec![
            Span::styled(" ❯ ", Style::default().fg(colors::PRIMARY)),
            Span::styled(
                dialog.placeholder(),
                Style::default().fg(colors::TEXT_MUTED),
            ),
        ])
    } else {
        Line::from(vec![
            Span::styled(" ❯ ", Style::default().fg(colors::PRIMARY)),
            Span::styled(
                draft.text().to_string(),
                Style::default().fg(colors::TEXT_PRIMARY),
            ),
        ])
    };

    let hints = Line::from(vec![
        Span::styled("Enter", styles::key_highlight()),
        Span::styled(" save  ", styles::key_hint()),
        Span::styled("Esc", styles::key_highlight()),
        Span::styled(" cancel ", styles::key_hint()),
    ])
    .alignment(Alignment::Right);

    let body = Paragraph::new(vec![input_line, Line::from("")]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(colors::PRIMARY))
            .style(Style::default().bg(colors::BG_POPUP))
            .title(Line::from(Span::styled(
                dialog.title(),
                Style::default()
                    .fg(colors::TEXT_PRIMARY)
                    .add_modifier(Modifier::BOLD),
            )))
            .title_bottom(hints)
            .padding(Padding::vertical(1)),
    );
    frame.render_widget(body, popup_area);

    let text_before_cursor: String = draft.text().chars().take(draft.cursor()).collect();
    let cursor_x = popup_area.x + 4 + text_before_cursor.width() as u16;
    let cursor_y = popup_area.y + 2;
    frame.set_cursor_position((cursor_x, cursor_y));
}
