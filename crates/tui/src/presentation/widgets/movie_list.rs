//! Paginated movie list browser (full-screen).

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use reelshelf_core::{Movie, MovieStore};

use crate::state::ListCursor;

/// Render the movie list: header row, one page of records with the
/// highlighted row inverted, and a key-hint footer.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    store: &MovieStore,
    cursor: &ListCursor,
    page_size: usize,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Column header
            Constraint::Min(0),    // Rows
            Constraint::Length(3), // Footer
        ])
        .split(area);

    render_header(frame, chunks[0], store, cursor);
    render_rows(frame, chunks[1], store, cursor, page_size);
    render_footer(frame, chunks[2]);
}

fn render_header(frame: &mut Frame, area: Rect, store: &MovieStore, cursor: &ListCursor) {
    let position = if store.is_empty() {
        "0 of 0".to_string()
    } else {
        format!("{} of {}", cursor.highlight + 1, store.len())
    };

    let header = Paragraph::new(Line::from(vec![Span::styled(
        format!(
            "  No | {:<25} | {:<20} | Year | Rating   ({position})",
            "Title", "Director"
        ),
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" MOVIE LIST ")
            .title_alignment(Alignment::Center),
    );

    frame.render_widget(header, area);
}

fn render_rows(
    frame: &mut Frame,
    area: Rect,
    store: &MovieStore,
    cursor: &ListCursor,
    page_size: usize,
) {
    if store.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "No movies in the catalog.",
                Style::default().fg(Color::Gray),
            )),
        ])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = store
        .iter()
        .enumerate()
        .skip(cursor.offset)
        .take(page_size)
        .map(|(idx, movie)| {
            let is_highlighted = idx == cursor.highlight;
            let style = if is_highlighted {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Cyan)
            };

            ListItem::new(Line::from(Span::styled(row_text(idx, movie), style)))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    frame.render_widget(list, area);
}

fn row_text(idx: usize, movie: &Movie) -> String {
    let rating = if movie.is_rated() {
        format!("{:.1}/5", movie.rating())
    } else {
        "-".to_string()
    };
    format!(
        "{:>4} | {:<25.25} | {:<20.20} | {:>4} | {}",
        idx + 1,
        movie.title(),
        movie.director(),
        movie.year(),
        rating
    )
}

fn render_footer(frame: &mut Frame, area: Rect) {
    let footer = Paragraph::new(Line::from(Span::styled(
        "↑/↓ navigate | r rate | e edit | d delete | / find | s sort | q menu",
        Style::default().fg(Color::Gray),
    )))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));

    frame.render_widget(footer, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_text_formats_rating_one_decimal() {
        let mut movie = Movie::new("Heat", "Mann", 1995).unwrap();
        movie.rate('4').unwrap();
        assert_eq!(row_text(0, &movie), format!(
            "{:>4} | {:<25.25} | {:<20.20} | {:>4} | 4.0/5",
            1, "Heat", "Mann", 1995
        ));
    }

    #[test]
    fn row_text_shows_dash_when_unrated() {
        let movie = Movie::new("Heat", "Mann", 1995).unwrap();
        assert!(row_text(2, &movie).ends_with("| -"));
        assert!(row_text(2, &movie).starts_with("   3 |"));
    }

    #[test]
    fn row_text_truncates_long_titles() {
        let movie = Movie::new(
            "An Extremely Long Movie Title That Never Ends",
            "Someone",
            2001,
        )
        .unwrap();
        let row = row_text(0, &movie);
        assert!(row.contains("An Extremely Long Movie T"));
        assert!(!row.contains("Never Ends"));
    }
}
