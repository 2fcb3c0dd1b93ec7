//! Modal dialogs rendered over the current view.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::state::PopupState;

/// A fixed-size rectangle centered inside `area`, clamped to fit.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Render an info/warning dialog. Any key dismisses it.
pub fn render_message(frame: &mut Frame, popup: &PopupState) {
    let area = centered_rect(46, 7, frame.area());
    frame.render_widget(Clear, area);

    let border_color = if popup.title.eq_ignore_ascii_case("warning") {
        Color::Red
    } else {
        Color::Cyan
    };

    let body = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            popup.message.clone(),
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to continue",
            Style::default().fg(Color::Gray),
        )),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(format!(" {} ", popup.title))
            .title_alignment(Alignment::Center),
    );

    frame.render_widget(body, area);
}

/// Render the yes/no delete confirmation for the highlighted movie.
pub fn render_confirm_delete(frame: &mut Frame, movie_title: &str) {
    let area = centered_rect(46, 7, frame.area());
    frame.render_widget(Clear, area);

    let body = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("Delete \"{movie_title}\"? (y/n)"),
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Any other key cancels",
            Style::default().fg(Color::Gray),
        )),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red))
            .title(" CONFIRM DELETE ")
            .title_alignment(Alignment::Center),
    );

    frame.render_widget(body, area);
}

/// Render the 1-5 rating prompt, with an inline error on retry.
pub fn render_rate_prompt(frame: &mut Frame, movie_title: &str, error: Option<&str>) {
    let area = centered_rect(50, 8, frame.area());
    frame.render_widget(Clear, area);

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("Enter a rating for \"{movie_title}\" from 1 to 5"),
            Style::default().fg(Color::White),
        )),
        Line::from(""),
    ];
    if let Some(error) = error {
        lines.push(Line::from(Span::styled(
            error.to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            "Esc cancels",
            Style::default().fg(Color::Gray),
        )));
    }

    let body = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" RATE MOVIE ")
                .title_alignment(Alignment::Center),
        );

    frame.render_widget(body, area);
}

/// Render the exact-title search prompt with the query typed so far.
pub fn render_find_prompt(frame: &mut Frame, query: &str) {
    let area = centered_rect(50, 7, frame.area());
    frame.render_widget(Clear, area);

    let body = Paragraph::new(vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("Title: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                query.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("█", Style::default().fg(Color::White)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Enter: search (exact match)   Esc: cancel",
            Style::default().fg(Color::Gray),
        )),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" FIND MOVIE ")
            .title_alignment(Alignment::Center),
    );

    frame.render_widget(body, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_is_centered_and_clamped() {
        let outer = Rect::new(0, 0, 100, 40);
        let inner = centered_rect(46, 7, outer);
        assert_eq!(inner.width, 46);
        assert_eq!(inner.height, 7);
        assert_eq!(inner.x, 27);
        assert_eq!(inner.y, 16);

        let tiny = Rect::new(0, 0, 20, 4);
        let clamped = centered_rect(46, 7, tiny);
        assert!(clamped.width <= tiny.width);
        assert!(clamped.height <= tiny.height);
    }
}
