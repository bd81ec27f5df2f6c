//! Move list pane
//!
//! One row per move of the optimal solution. Moves already applied are
//! dimmed green, the pending move is highlighted, and when the pane has
//! focus a `>` marks the row selected for jumping.

use crate::config::Labels;
use crate::puzzle::Move;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
    Frame,
};

/// Everything the move list needs for one frame
pub struct MovesRenderData<'a> {
    pub moves: &'a [Move],
    /// Playback cursor; the pending move is `moves[position]`
    pub position: usize,
    /// Row chosen with the arrow keys
    pub selected: usize,
    /// Why there are no moves, when there are none
    pub empty_message: &'a str,
    pub labels: &'a Labels,
}

/// Scroll offset that keeps `row` visible, moving as little as possible
pub fn scroll_to_show(scroll: usize, row: usize, visible: usize, total: usize) -> usize {
    if total <= visible {
        return 0;
    }
    let max_scroll = total - visible;
    let scroll = if row < scroll {
        row
    } else if row >= scroll + visible {
        row + 1 - visible
    } else {
        scroll
    };
    scroll.min(max_scroll)
}

/// Render the move list pane
pub fn render_moves_pane(
    frame: &mut Frame,
    area: Rect,
    data: &MovesRenderData<'_>,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let title = if data.moves.is_empty() {
        " Moves ".to_string()
    } else {
        format!(" Moves ({}) ", data.moves.len())
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);

    if data.moves.is_empty() {
        let paragraph = Paragraph::new(data.empty_message)
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let block = block.padding(Padding::new(1, 0, 0, 0));
    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    let total = data.moves.len();

    // Follow the selection when focused, otherwise the pending move
    let anchor = if is_focused {
        data.selected
    } else {
        data.position.min(total - 1)
    };
    *scroll_offset = scroll_to_show(*scroll_offset, anchor, visible_height, total);

    let number_width = total.to_string().len();
    let items: Vec<ListItem> = data
        .moves
        .iter()
        .enumerate()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|(i, &mv)| {
            let marker = if is_focused && i == data.selected {
                ">"
            } else {
                " "
            };
            let text = format!(
                "{}{:>w$}. {} → {}",
                marker,
                i + 1,
                data.labels.peg_name(mv.from),
                data.labels.peg_name(mv.to),
                w = number_width
            );

            let style = if i < data.position {
                Style::default().fg(DEFAULT_THEME.success)
            } else if i == data.position {
                Style::default()
                    .bg(DEFAULT_THEME.current_line_bg)
                    .fg(DEFAULT_THEME.secondary)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.fg)
            };

            ListItem::new(Line::from(Span::styled(text, style)))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_to_show() {
        // Everything fits
        assert_eq!(scroll_to_show(5, 3, 10, 8), 0);
        // Already visible
        assert_eq!(scroll_to_show(2, 4, 5, 20), 2);
        // Above the window
        assert_eq!(scroll_to_show(10, 4, 5, 20), 4);
        // Below the window
        assert_eq!(scroll_to_show(0, 9, 5, 20), 5);
        // Clamped to the last page
        assert_eq!(scroll_to_show(30, 19, 5, 20), 15);
    }
}
