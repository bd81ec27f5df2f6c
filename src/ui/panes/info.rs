//! Puzzle info pane: parameters, minimal step count and playback speed

use crate::config::{Labels, PlaybackConfig};
use crate::puzzle::{format_grouped, Peg, MAX_ANIMATED_DISKS};
use crate::ui::theme::DEFAULT_THEME;
use num_bigint::BigUint;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub struct InfoRenderData<'a> {
    pub disks: u32,
    pub start: Peg,
    pub middle: Option<Peg>,
    pub end: Peg,
    pub min_moves: &'a BigUint,
    pub position: usize,
    pub total: usize,
    pub progress: f64,
    pub playback: &'a PlaybackConfig,
    pub labels: &'a Labels,
}

/// Explanation shown when there is nothing to animate, if any
pub fn not_animated_reason(disks: u32, start: Peg, end: Peg) -> Option<String> {
    if start == end {
        Some("Start and end are the same peg; no moves are needed.".to_string())
    } else if disks > MAX_ANIMATED_DISKS {
        Some(format!(
            "Animation is limited to {MAX_ANIMATED_DISKS} disks; only the step count is shown."
        ))
    } else {
        None
    }
}

pub fn render_info_pane(frame: &mut Frame, area: Rect, data: &InfoRenderData<'_>) {
    let block = Block::default()
        .title(" Puzzle ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    let key = Style::default().fg(DEFAULT_THEME.comment);
    let value = Style::default().fg(DEFAULT_THEME.fg);
    let number = Style::default()
        .fg(DEFAULT_THEME.number)
        .add_modifier(Modifier::BOLD);

    let middle = data
        .middle
        .map_or("-", |peg| data.labels.peg_name(peg));

    let mut lines = vec![
        Line::from(vec![
            Span::styled("Disks ", key),
            Span::styled(data.disks.to_string(), number),
            Span::styled("   Start ", key),
            Span::styled(data.labels.peg_name(data.start), value),
            Span::styled("   Via ", key),
            Span::styled(middle, value),
            Span::styled("   End ", key),
            Span::styled(data.labels.peg_name(data.end), value),
        ]),
        Line::from(vec![
            Span::styled("Minimal moves ", key),
            Span::styled(format_grouped(data.min_moves), number),
        ]),
    ];

    if let Some(reason) = not_animated_reason(data.disks, data.start, data.end) {
        lines.push(Line::from(Span::styled(
            reason,
            Style::default().fg(DEFAULT_THEME.secondary),
        )));
    } else {
        lines.push(Line::from(vec![
            Span::styled("Progress ", key),
            Span::styled(format!("{} / {}", data.position, data.total), value),
            Span::styled(format!("  ({:.0}%)", data.progress * 100.0), key),
        ]));
    }

    lines.push(Line::from(vec![
        Span::styled("Speed ", key),
        Span::styled(format!("{:.1}x", data.playback.speed()), value),
        Span::styled(
            format!("  ({} ms/step)", data.playback.step_interval().as_millis()),
            key,
        ),
        Span::styled(
            if data.playback.show_arrow {
                "   arrow on"
            } else {
                "   arrow off"
            },
            key,
        ),
    ]));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
