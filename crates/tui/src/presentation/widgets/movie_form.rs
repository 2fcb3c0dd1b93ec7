//! Add/edit movie input form (full-screen, centered box).

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::widgets::popup::centered_rect;
use crate::state::{FormField, FormState, FormTarget};

/// Render the field-by-field input form.
///
/// The focused field carries a `> ` marker and a block cursor;
/// validation errors show inline below the fields.
pub fn render(frame: &mut Frame, area: Rect, form: &FormState) {
    let box_area = centered_rect(54, 12, area);

    let title = match form.target {
        FormTarget::Create => " ADD MOVIE ",
        FormTarget::Edit(_) => " EDIT MOVIE ",
    };

    let mut lines = vec![Line::from("")];
    for field in [FormField::Title, FormField::Director, FormField::Year] {
        lines.push(field_line(form, field));
        lines.push(Line::from(""));
    }

    if let Some(error) = &form.error {
        lines.push(Line::from(Span::styled(
            format!("Error: {error}"),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )));
    } else {
        lines.push(Line::from(""));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Enter: next field / submit   Esc: cancel",
        Style::default().fg(Color::Gray),
    )));

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(title)
            .title_alignment(Alignment::Center),
    );

    frame.render_widget(paragraph, box_area);
}

fn field_line(form: &FormState, field: FormField) -> Line<'_> {
    let focused = form.focus == field;
    let marker = if focused { "> " } else { "  " };
    let value = match field {
        FormField::Title => &form.title,
        FormField::Director => &form.director,
        FormField::Year => &form.year,
    };

    let mut spans = vec![
        Span::styled(marker, Style::default().fg(Color::Yellow)),
        Span::styled(
            format!("{:<9}: ", field.label()),
            Style::default().fg(Color::Yellow),
        ),
        Span::styled(
            value.as_str(),
            if focused {
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            },
        ),
    ];
    if focused {
        spans.push(Span::styled("█", Style::default().fg(Color::White)));
    }

    Line::from(spans)
}
