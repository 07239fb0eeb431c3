use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Screen regions
pub struct AppLayout {
    pub search_area: Rect,
    pub filters_area: Rect,
    pub results_area: Rect,
    pub status_area: Rect,
}

impl AppLayout {
    /// - Search box: top 3 rows
    /// - Filters sidebar: 30% width (left)
    /// - Results list: 70% width (right)
    /// - Status bar: bottom row
    pub fn new(area: Rect) -> Self {
        let vertical_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Search box
                Constraint::Min(3),    // Main area
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let horizontal_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
            .split(vertical_chunks[1]);

        Self {
            search_area: vertical_chunks[0],
            filters_area: horizontal_chunks[0],
            results_area: horizontal_chunks[1],
            status_area: vertical_chunks[2],
        }
    }
}

/// Centered rectangle for the detail overlay (80% x 80% of `area`)
pub fn detail_popup_area(area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(10),
            Constraint::Percentage(80),
            Constraint::Percentage(10),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(10),
            Constraint::Percentage(80),
            Constraint::Percentage(10),
        ])
        .split(vertical[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_splits_correctly() {
        let area = Rect::new(0, 0, 100, 30);
        let layout = AppLayout::new(area);

        assert_eq!(layout.search_area.height, 3);
        assert_eq!(layout.search_area.y, 0);

        assert_eq!(layout.status_area.height, 1);
        assert_eq!(layout.status_area.y, 29);

        assert_eq!(layout.filters_area.height, 26);
        assert_eq!(layout.results_area.height, 26);
        assert_eq!(layout.filters_area.width, 30);
        assert_eq!(layout.results_area.width, 70);
    }

    #[test]
    fn test_layout_minimum_height() {
        let area = Rect::new(0, 0, 100, 7);
        let layout = AppLayout::new(area);

        assert_eq!(layout.status_area.height, 1);
        assert_eq!(layout.search_area.height, 3);
        assert_eq!(layout.results_area.height, 3);
    }

    #[test]
    fn test_popup_centered_inside_area() {
        let area = Rect::new(0, 0, 100, 50);
        let popup = detail_popup_area(area);

        assert_eq!(popup, Rect::new(10, 5, 80, 40));
    }
}
