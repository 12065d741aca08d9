use mash_core::rate::{INTERVALS_MS, NUM_INTERVALS};
use mash_core::SessionView;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table};
use ratatui::Frame;

use crate::theme::Theme;

/// Render one frame: the rate table, the press trail, and the session
/// clock.  With no controller bound the data area is replaced by a
/// fallback message; domain state lives entirely in the passed-in view.
pub fn draw(frame: &mut Frame, view: &SessionView, trail: &[u16], trail_width: u16, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(NUM_INTERVALS as u16 + 4), // rate table
            Constraint::Length(3),                        // press trail
            Constraint::Length(1),                        // session clock
        ])
        .split(frame.size());

    if view.controller_bound {
        draw_rates(frame, chunks[0], view, theme);
        draw_trail(frame, chunks[1], trail, trail_width, theme);
    } else {
        draw_fallback(frame, chunks[0], theme);
    }
    draw_clock(frame, chunks[2], view, theme);
}

fn draw_rates(frame: &mut Frame, area: Rect, view: &SessionView, theme: &Theme) {
    let header_cells = ["Interval", "Rate", "Max"]
        .iter()
        .map(|h| Cell::from(*h).style(Style::default().add_modifier(Modifier::BOLD)));
    let header = Row::new(header_cells)
        .style(Style::default().fg(theme.dim))
        .height(1)
        .bottom_margin(1);

    let rows = INTERVALS_MS.iter().enumerate().map(|(i, &interval)| {
        Row::new(vec![
            Cell::from(format!("{}", interval / 1_000)).style(Style::default().fg(theme.dim)),
            Cell::from(format!("{:.3}", view.rates.current[i])),
            Cell::from(format!("{:.3}", view.rates.best[i]))
                .style(Style::default().fg(theme.accent)),
        ])
        .height(1)
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(10),
            Constraint::Length(12),
            Constraint::Length(12),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .title(" Button mashing test ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.dim)),
    );
    frame.render_widget(table, area);
}

fn draw_trail(frame: &mut Frame, area: Rect, trail: &[u16], trail_width: u16, theme: &Theme) {
    let width = trail_width.max(1) as usize;
    let mut cells = vec![' '; width];
    for &position in trail {
        if let Some(cell) = cells.get_mut(position as usize) {
            *cell = '●';
        }
    }

    let line: String = cells.into_iter().collect();
    let paragraph = Paragraph::new(line)
        .style(Style::default().fg(theme.accent))
        .block(
            Block::default()
                .title(" last second ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(theme.dim)),
        );
    frame.render_widget(paragraph, area);
}

fn draw_fallback(frame: &mut Frame, area: Rect, theme: &Theme) {
    let message = Paragraph::new("No controller detected. Plug one in to begin.")
        .style(Style::default().fg(theme.alert))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Button mashing test ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(theme.dim)),
        );
    frame.render_widget(message, area);
}

fn draw_clock(frame: &mut Frame, area: Rect, view: &SessionView, theme: &Theme) {
    let status = Line::from(vec![
        Span::styled(
            format_elapsed(view.elapsed_ms),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled("  'q' to quit", Style::default().fg(theme.dim)),
    ]);
    frame.render_widget(Paragraph::new(status), area);
}

/// Format elapsed session time as `mm:ss.cc` (centisecond precision).
pub fn format_elapsed(ms: u64) -> String {
    let minutes = ms / 60_000;
    let seconds = (ms / 1_000) % 60;
    let centis = (ms % 1_000) / 10;
    format!("{minutes:02}:{seconds:02}.{centis:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_elapsed_zero() {
        assert_eq!(format_elapsed(0), "00:00.00");
    }

    #[test]
    fn format_elapsed_rolls_over_minutes() {
        assert_eq!(format_elapsed(61_234), "01:01.23");
    }

    #[test]
    fn format_elapsed_just_under_an_hour() {
        assert_eq!(format_elapsed(3_599_990), "59:59.99");
    }

    #[test]
    fn format_elapsed_past_an_hour_keeps_counting_minutes() {
        assert_eq!(format_elapsed(3_660_000), "61:00.00");
    }
}
