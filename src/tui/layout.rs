//! Layout definitions for the TUI
//!
//! The whole flow renders inside one centered card: progress indicator and
//! title on top, the step's content in the middle, an error line and key
//! hints at the bottom.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Card dimensions
const CARD_WIDTH: u16 = 62;
const CARD_HEIGHT: u16 = 18;

/// Layout regions for a flow screen
pub struct FlowLayout {
    /// Progress indicator line
    pub progress: Rect,
    /// Step title line
    pub title: Rect,
    /// Step-specific content
    pub body: Rect,
    /// Inline error line
    pub error: Rect,
    /// Key hint footer
    pub hints: Rect,
}

impl FlowLayout {
    /// Calculate the layout inside the centered card
    pub fn new(area: Rect) -> (Rect, Self) {
        let card = centered_rect_fixed(CARD_WIDTH, CARD_HEIGHT, area);

        // Leave room for the card border
        let inner = Rect {
            x: card.x + 2,
            y: card.y + 1,
            width: card.width.saturating_sub(4),
            height: card.height.saturating_sub(2),
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Progress
                Constraint::Length(1), // Spacer
                Constraint::Length(1), // Title
                Constraint::Length(1), // Spacer
                Constraint::Min(4),    // Body
                Constraint::Length(1), // Error
                Constraint::Length(1), // Hints
            ])
            .split(inner);

        (
            card,
            Self {
                progress: chunks[0],
                title: chunks[2],
                body: chunks[4],
                error: chunks[5],
                hints: chunks[6],
            },
        )
    }
}

/// Create a fixed-size centered rect
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_fits_small_terminal() {
        let tiny = Rect::new(0, 0, 20, 5);
        let rect = centered_rect_fixed(62, 18, tiny);
        assert!(rect.width <= tiny.width);
        assert!(rect.height <= tiny.height);
    }

    #[test]
    fn test_centered_rect_is_centered() {
        let area = Rect::new(0, 0, 100, 40);
        let rect = centered_rect_fixed(60, 20, area);
        assert_eq!(rect.x, 20);
        assert_eq!(rect.y, 10);
        assert_eq!(rect.width, 60);
        assert_eq!(rect.height, 20);
    }
}
