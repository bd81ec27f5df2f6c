//! Peg visualizer pane
//!
//! Draws the three pegs side by side with their disks stacked bottom-up.
//! Each disk is a colored bar whose width grows linearly with its size and
//! which carries its size as a label.
//!
//! # Layout
//!
//! ```text
//!   ●───────────────────▼          <- pending move arrow (optional)
//!     │        │        │
//!    [1]       │        │
//!   [ 2 ]      │        │
//!  [  3  ]     │        │
//! ▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀
//!   Left    Middle    Right
//! ```

use crate::config::Labels;
use crate::puzzle::{Move, Peg};
use crate::snapshot::Snapshot;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Narrowest disk, in cells
const MIN_DISK_WIDTH: u16 = 3;

/// Everything the peg pane needs for one frame
pub struct PegsRenderData<'a> {
    pub snapshot: Option<&'a Snapshot>,
    pub disks: u32,
    pub pending: Option<Move>,
    pub show_arrow: bool,
    pub start: Peg,
    pub end: Peg,
    pub labels: &'a Labels,
}

/// Width of a disk of `size` in an `n`-disk puzzle, interpolated between
/// `min` and `max`
pub fn disk_width(size: u32, n: u32, min: u16, max: u16) -> u16 {
    if n <= 1 || max <= min {
        return max.max(min);
    }
    let span = (max - min) as u32;
    min + ((size.saturating_sub(1)) * span / (n - 1)) as u16
}

/// Render the peg pane
pub fn render_pegs_pane(frame: &mut Frame, area: Rect, data: &PegsRenderData<'_>, is_focused: bool) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(" Pegs ")
        .borders(Borders::ALL)
        .border_style(border_style);

    let Some(snapshot) = data.snapshot else {
        let paragraph = Paragraph::new(vec![
            Line::from(""),
            Line::from(format!(
                " {} disks are too many to animate.",
                data.disks
            )),
            Line::from(" Only the minimal step count is shown."),
        ])
        .block(block)
        .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    };

    let inner_width = area.width.saturating_sub(2);
    let inner_height = area.height.saturating_sub(2) as usize;
    let columns = column_widths(inner_width);

    let mut lines = Vec::new();
    if data.show_arrow {
        lines.push(arrow_line(&columns, data.pending));
    }

    // Rows reserved for the pole tip, the base plate and the names
    let reserved = lines.len() + 3;
    let levels = data.disks as usize;
    if inner_height < levels + reserved {
        let paragraph = Paragraph::new(vec![
            Line::from(""),
            Line::from(format!(" Terminal too small to draw {levels} disks.")),
            Line::from(format!(
                " The pegs pane needs {} rows, it has {}.",
                levels + reserved + 2,
                area.height
            )),
        ])
        .block(block)
        .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    lines.push(pole_line(&columns));
    for level in (0..levels).rev() {
        lines.push(level_line(&columns, snapshot, level, data));
    }
    lines.push(Line::from(Span::styled(
        "▀".repeat(inner_width as usize),
        Style::default().fg(DEFAULT_THEME.peg),
    )));
    lines.push(names_line(&columns, data));

    // Bottom-align the drawing inside the pane
    let padding = inner_height.saturating_sub(lines.len());
    let mut padded = vec![Line::from(""); padding];
    padded.extend(lines);

    frame.render_widget(Paragraph::new(padded).block(block), area);
}

/// Split the inner width into three columns; the last takes the remainder
fn column_widths(width: u16) -> [u16; 3] {
    let third = width / 3;
    [third, third, width - 2 * third]
}

/// Center `content_width` cells inside `column`, returning left/right padding
fn center(column: u16, content_width: u16) -> (u16, u16) {
    let content_width = content_width.min(column);
    let left = (column - content_width) / 2;
    (left, column - content_width - left)
}

fn pole_line(columns: &[u16; 3]) -> Line<'static> {
    let mut spans = Vec::new();
    for &col in columns {
        let (left, right) = center(col, 1);
        spans.push(Span::raw(" ".repeat(left as usize)));
        spans.push(Span::styled("│", Style::default().fg(DEFAULT_THEME.peg)));
        spans.push(Span::raw(" ".repeat(right as usize)));
    }
    Line::from(spans)
}

fn level_line(
    columns: &[u16; 3],
    snapshot: &Snapshot,
    level: usize,
    data: &PegsRenderData<'_>,
) -> Line<'static> {
    let mut spans = Vec::new();
    for (peg, &col) in Peg::ALL.iter().zip(columns) {
        let stack = snapshot.peg(*peg);
        match stack.get(level) {
            Some(&size) => {
                let max = col.saturating_sub(2).max(MIN_DISK_WIDTH);
                let width = disk_width(size, data.disks, MIN_DISK_WIDTH, max).min(col);
                let (left, right) = center(col, width);

                let is_moving = data.show_arrow
                    && data.pending.is_some_and(|mv| mv.from == *peg)
                    && level + 1 == stack.len();
                let mut style = Style::default()
                    .bg(data.labels.disk_color(size))
                    .fg(DEFAULT_THEME.disk_label)
                    .add_modifier(Modifier::BOLD);
                if is_moving {
                    style = style.add_modifier(Modifier::UNDERLINED);
                }

                let label = size.to_string();
                let text = if label.len() <= width as usize {
                    format!("{:^w$}", label, w = width as usize)
                } else {
                    " ".repeat(width as usize)
                };

                spans.push(Span::raw(" ".repeat(left as usize)));
                spans.push(Span::styled(text, style));
                spans.push(Span::raw(" ".repeat(right as usize)));
            }
            None => {
                let (left, right) = center(col, 1);
                spans.push(Span::raw(" ".repeat(left as usize)));
                spans.push(Span::styled("│", Style::default().fg(DEFAULT_THEME.peg)));
                spans.push(Span::raw(" ".repeat(right as usize)));
            }
        }
    }
    Line::from(spans)
}

/// Horizontal arrow from the source peg to the destination peg
fn arrow_line(columns: &[u16; 3], pending: Option<Move>) -> Line<'static> {
    let Some(mv) = pending else {
        return Line::from("");
    };

    let centers: Vec<usize> = columns
        .iter()
        .scan(0usize, |offset, &col| {
            let (left, _) = center(col, 1);
            let c = *offset + left as usize;
            *offset += col as usize;
            Some(c)
        })
        .collect();

    let from = centers[mv.from.index()];
    let to = centers[mv.to.index()];
    let (lo, hi) = (from.min(to), from.max(to));

    let mut text = String::with_capacity(hi + 1);
    for x in 0..=hi {
        let c = if x == from {
            '●'
        } else if x == to {
            '▼'
        } else if x > lo {
            '─'
        } else {
            ' '
        };
        text.push(c);
    }

    Line::from(Span::styled(
        text,
        Style::default()
            .fg(DEFAULT_THEME.arrow)
            .add_modifier(Modifier::BOLD),
    ))
}

/// Peg names under the base plate, with start/end markers
fn names_line(columns: &[u16; 3], data: &PegsRenderData<'_>) -> Line<'static> {
    let mut spans = Vec::new();
    for (peg, &col) in Peg::ALL.iter().zip(columns) {
        let marker = if *peg == data.start && *peg == data.end {
            " (start/end)"
        } else if *peg == data.start {
            " (start)"
        } else if *peg == data.end {
            " (end)"
        } else {
            ""
        };
        let text = format!("{}{}", data.labels.peg_name(*peg), marker);
        let width = text.chars().count().min(col as usize) as u16;
        let text: String = text.chars().take(width as usize).collect();
        let (left, right) = center(col, width);

        let style = if *peg == data.start || *peg == data.end {
            Style::default()
                .fg(DEFAULT_THEME.primary)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(DEFAULT_THEME.fg)
        };

        spans.push(Span::raw(" ".repeat(left as usize)));
        spans.push(Span::styled(text, style));
        spans.push(Span::raw(" ".repeat(right as usize)));
    }
    Line::from(spans)
}
