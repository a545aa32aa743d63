use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct MainLayout {
    pub tabs_area: Rect,
    pub body_area: Rect,
    pub help_area: Rect,
}

pub struct PopupLayout {
    pub header_area: Rect,
    pub content_area: Rect,
    pub help_area: Rect,
}

pub fn calculate_main_chunks(area: Rect) -> MainLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .split(area);

    MainLayout {
        tabs_area: chunks[0],
        body_area: chunks[1],
        help_area: chunks[2],
    }
}

/// Header, scrollable body and key help inside an already-placed popup.
pub fn calculate_popup_chunks(area: Rect) -> PopupLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(3),
        ])
        .split(area);

    PopupLayout {
        header_area: chunks[0],
        content_area: chunks[1],
        help_area: chunks[2],
    }
}

pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_layout() {
        let area = Rect::new(0, 0, 100, 100);
        let layout = calculate_main_chunks(area);

        // Margin 1 leaves 98 rows: 3 + 92 + 3.
        assert_eq!(layout.tabs_area.height, 3);
        assert_eq!(layout.help_area.height, 3);
        assert_eq!(layout.body_area.height, 92);
    }

    #[test]
    fn test_popup_layout() {
        let area = Rect::new(0, 0, 80, 40);
        let layout = calculate_popup_chunks(area);
        assert_eq!(layout.header_area.height, 3);
        assert_eq!(layout.help_area.height, 3);
        assert_eq!(layout.content_area.height, 34);
    }

    #[test]
    fn test_centered_rect_is_inside() {
        let area = Rect::new(0, 0, 100, 50);
        let popup = centered_rect(80, 80, area);
        assert_eq!(popup.width, 80);
        assert_eq!(popup.height, 40);
        assert_eq!(popup.x, 10);
        assert_eq!(popup.y, 5);
    }
}
