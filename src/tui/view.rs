use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::shared::DisplayState;

use super::grid;

pub fn render(frame: &mut Frame, area: Rect, state: &DisplayState) {
    let (header, pads) = grid::split_screen(area);
    draw_header(frame, header);
    draw_pads(frame, pads, state);
}

fn draw_header(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(Line::from(vec![
        Span::styled("drumtty", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("  hit a key or click a pad  ·  esc quits"),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, area);
}

fn draw_pads(frame: &mut Frame, area: Rect, state: &DisplayState) {
    let rects = grid::pad_rects(area);

    for (pad, cell) in state.pads.iter().zip(rects.iter()) {
        // glow drives the fill while the pad is active; the accent border is
        // the shorter-lived second transition of the flash
        let style = if pad.glow {
            Style::default().fg(Color::Black).bg(Color::Yellow)
        } else if !pad.loaded {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::Gray)
        };
        let border_style = if pad.accent {
            Style::default().fg(Color::LightYellow)
        } else {
            style
        };

        let mut lines = vec![
            Line::from(Span::styled(
                pad.cap.to_string(),
                style.add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(pad.name.clone(), style)),
        ];
        if !pad.loaded {
            lines.push(Line::from(Span::styled("no clip", style)));
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .style(style);
        let body = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(body, *cell);
    }
}
