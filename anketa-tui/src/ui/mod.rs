//! UI rendering
//!
//! Pure rendering functions that transform state into terminal frames.
//! The form is drawn as one scrolling column of lines, in the same order as
//! [`FocusItem::ORDER`], with overlays for help, the date picker and the
//! compose sheet.

use libanketa::date_picker::format_date;
use libanketa::form::{Amenity, Consent, TextQuestion};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::{AppState, FocusItem};

/// Render the application UI
pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.size();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(5),    // Form
            Constraint::Length(3), // Status bar
        ])
        .split(area);

    render_header(frame, chunks[0], state);
    render_form(frame, chunks[1], state);
    render_status_bar(frame, chunks[2], state);

    if let Some(ref picker) = state.picker {
        render_date_picker(frame, area, state, picker);
    }

    if state.compose.is_some() {
        render_compose_sheet(frame, area, state);
    }

    if state.help_visible {
        render_help_overlay(frame, area, state);
    }
}

fn render_header(frame: &mut Frame, area: Rect, state: &AppState) {
    let header = Paragraph::new(Line::from(Span::styled(
        state.locale.title(),
        Style::default().add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::BOTTOM));

    frame.render_widget(header, area);
}

fn accent(state: &AppState, color: Color) -> Style {
    if state.config.colors_enabled {
        Style::default().fg(color)
    } else {
        Style::default()
    }
}

fn title_style(state: &AppState, focused: bool) -> Style {
    if focused {
        accent(state, Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    }
}

fn marker(focused: bool) -> &'static str {
    if focused {
        "> "
    } else {
        "  "
    }
}

/// Build the form lines and return them with the index of the focused line
pub fn form_lines(state: &AppState, width: u16) -> (Vec<Line<'static>>, usize) {
    let mut lines = Vec::new();
    let mut focused_line = 0;

    for (index, item) in FocusItem::ORDER.into_iter().enumerate() {
        let focused = index == state.focus;

        if item == FocusItem::Amenity(Amenity::WaterSlides) {
            lines.push(Line::from(Span::styled(
                state.locale.amenities_heading().to_string(),
                Style::default().add_modifier(Modifier::UNDERLINED),
            )));
        }
        if item == FocusItem::Submit {
            lines.push(Line::from(""));
        }
        if focused {
            focused_line = lines.len();
        }

        match item {
            FocusItem::Field(question) => lines.extend(field_lines(state, question, focused)),
            FocusItem::Amenity(amenity) => lines.push(amenity_line(state, amenity, focused)),
            FocusItem::Consent(consent) => {
                lines.extend(consent_lines(state, consent, focused, width))
            }
            FocusItem::Submit => lines.push(submit_line(state, focused)),
        }
    }

    (lines, focused_line)
}

fn field_lines(state: &AppState, question: TextQuestion, focused: bool) -> Vec<Line<'static>> {
    let title = Line::from(vec![
        Span::raw(marker(focused)),
        Span::styled(
            state.locale.field_title(question).to_string(),
            title_style(state, focused),
        ),
    ]);

    let value = state.form.text(question);
    let placeholder = Span::styled(
        state.locale.placeholder(question).to_string(),
        accent(state, Color::DarkGray).add_modifier(Modifier::ITALIC),
    );

    let mut spans = vec![Span::raw("    ")];
    if focused && question.kind().accepts_typing() {
        let chars: Vec<char> = value.chars().collect();
        let cursor = state.cursor.min(chars.len());
        let before: String = chars[..cursor].iter().collect();
        let at: String = chars.get(cursor).map(|c| c.to_string()).unwrap_or_else(|| " ".to_string());
        let after: String = chars.iter().skip(cursor + 1).collect();

        spans.push(Span::raw(before));
        spans.push(Span::styled(at, Style::default().add_modifier(Modifier::REVERSED)));
        spans.push(Span::raw(after));
        if value.is_empty() {
            spans.push(placeholder);
        }
    } else if value.is_empty() {
        spans.push(placeholder);
    } else {
        spans.push(Span::raw(value.to_string()));
    }

    vec![title, Line::from(spans), Line::from("")]
}

fn checkbox(checked: bool) -> &'static str {
    if checked {
        "[x]"
    } else {
        "[ ]"
    }
}

fn amenity_line(state: &AppState, amenity: Amenity, focused: bool) -> Line<'static> {
    let mut spans = vec![
        Span::raw(marker(focused)),
        Span::styled(
            checkbox(state.form.amenity(amenity)),
            accent(state, Color::Blue),
        ),
        Span::raw(" "),
    ];
    if state.config.unicode_enabled {
        spans.push(Span::raw(format!("{} ", amenity.emoji())));
    }
    spans.push(Span::styled(
        state.locale.amenity(amenity).to_string(),
        title_style(state, focused),
    ));
    Line::from(spans)
}

fn consent_lines(
    state: &AppState,
    consent: Consent,
    focused: bool,
    width: u16,
) -> Vec<Line<'static>> {
    // Marker and checkbox take six columns
    let text_width = usize::from(width).saturating_sub(6).max(20);
    let wrapped = wrap_text(state.locale.consent(consent), text_width);

    let mut lines = Vec::with_capacity(wrapped.len() + 1);
    for (i, chunk) in wrapped.into_iter().enumerate() {
        let lead = if i == 0 {
            vec![
                Span::raw(marker(focused)),
                Span::styled(
                    checkbox(state.form.consent(consent)),
                    accent(state, Color::Blue),
                ),
                Span::raw(" "),
            ]
        } else {
            vec![Span::raw("      ")]
        };
        let mut spans = lead;
        spans.push(Span::styled(chunk, title_style(state, focused)));
        lines.push(Line::from(spans));
    }
    lines.push(Line::from(""));
    lines
}

fn submit_line(state: &AppState, focused: bool) -> Line<'static> {
    let label = format!("[ {} ]", state.locale.submit());
    let style = if focused {
        Style::default()
            .fg(Color::White)
            .bg(Color::Blue)
            .add_modifier(Modifier::BOLD)
    } else {
        accent(state, Color::Blue)
    };
    Line::from(vec![Span::raw(marker(focused)), Span::styled(label, style)])
}

/// Wrap `text` to `width` terminal columns
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    textwrap::wrap(text, width)
        .into_iter()
        .map(|line| line.into_owned())
        .collect()
}

/// First line to show so that the focused item stays in view
fn scroll_offset(focused_line: usize, total: usize, height: usize) -> usize {
    if total <= height {
        return 0;
    }
    // Keep a few lines of context below the focused item
    let wanted_bottom = focused_line + 4;
    wanted_bottom.saturating_sub(height).min(total - height)
}

fn render_form(frame: &mut Frame, area: Rect, state: &AppState) {
    let (lines, focused_line) = form_lines(state, area.width);
    let offset = scroll_offset(focused_line, lines.len(), usize::from(area.height));
    let offset = u16::try_from(offset).unwrap_or(u16::MAX);

    let form = Paragraph::new(lines).scroll((offset, 0));
    frame.render_widget(form, area);
}

/// Render status bar with the last status message and key hints
fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState) {
    let hints = if state.compose.is_some() {
        state.locale.compose_hints()
    } else if state.picker.is_some() {
        state.locale.picker_hints()
    } else {
        state.locale.form_hints()
    };

    let mut lines = Vec::new();
    if let Some(ref message) = state.status.message {
        lines.push(Line::from(Span::styled(
            message.clone(),
            accent(state, Color::Green),
        )));
    }
    lines.push(Line::from(Span::styled(hints, accent(state, Color::Gray))));

    let status = Paragraph::new(lines).block(Block::default().borders(Borders::TOP));
    frame.render_widget(status, area);
}

fn render_date_picker(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    picker: &libanketa::DatePicker,
) {
    let popup_area = centered_rect(50, 40, area);

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            picker.formatted(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "{} .. {}",
                format_date(picker.earliest()),
                format_date(picker.latest())
            ),
            accent(state, Color::Gray),
        )),
        Line::from(""),
    ];
    let hints = state
        .locale
        .picker_hints()
        .split(" | ")
        .map(|hint| Line::from(hint.to_string()));
    let text: Vec<Line> = text.into_iter().chain(hints).collect();

    let widget = Paragraph::new(text)
        .block(
            Block::default()
                .title(format!(
                    " {} ",
                    state.locale.field_title(TextQuestion::DateOfBirth)
                ))
                .borders(Borders::ALL)
                .border_style(accent(state, Color::Cyan)),
        )
        .alignment(Alignment::Center);

    frame.render_widget(Clear, popup_area);
    frame.render_widget(widget, popup_area);
}

fn render_compose_sheet(frame: &mut Frame, area: Rect, state: &AppState) {
    let Some(ref message) = state.compose else {
        return;
    };
    let popup_area = centered_rect(80, 80, area);

    let mut text = vec![
        Line::from(vec![
            Span::styled(
                format!("{}: ", state.locale.recipients_label()),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(message.recipients.join(", ")),
        ]),
        Line::from(vec![
            Span::styled(
                format!("{}: ", state.locale.subject_label()),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(message.subject.clone()),
        ]),
        Line::from(""),
    ];
    text.extend(message.body.lines().map(|l| Line::from(l.to_string())));
    text.push(Line::from(""));
    text.push(Line::from(Span::styled(
        state.locale.compose_hints(),
        accent(state, Color::Gray),
    )));

    let sheet = Paragraph::new(text)
        .block(
            Block::default()
                .title(format!(" {} ", state.locale.submit()))
                .borders(Borders::ALL)
                .border_style(accent(state, Color::Blue)),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(Clear, popup_area);
    frame.render_widget(sheet, popup_area);
}

/// Render help overlay
fn render_help_overlay(frame: &mut Frame, area: Rect, state: &AppState) {
    let popup_area = centered_rect(60, 70, area);

    let help_text: Vec<Line> = state
        .locale
        .help_lines()
        .iter()
        .enumerate()
        .map(|(i, line)| {
            if i == 0 {
                Line::from(Span::styled(*line, Style::default().add_modifier(Modifier::BOLD)))
            } else {
                Line::from(*line)
            }
        })
        .collect();

    let help = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(format!(" {} ", state.locale.help_title()))
                .borders(Borders::ALL)
                .border_style(accent(state, Color::Cyan)),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(Clear, popup_area);
    frame.render_widget(help, popup_area);
}

/// Helper to create centered rectangle
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
