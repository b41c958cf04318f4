use ratatui::layout::{Constraint, Layout, Rect};

/// Minimum useful card width; the grid uses as many columns as fit.
const CARD_MIN_WIDTH: u16 = 38;
const MAX_COLUMNS: u16 = 4;

/// Split the frame into header, body and footer bands.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// A `width` x `height` rect centered in `area`, clamped to fit.
pub fn centered_rect_by_size(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Lay `count` cards out row-major in as many columns as the width allows.
pub fn card_grid(area: Rect, count: usize) -> Vec<Rect> {
    if count == 0 {
        return Vec::new();
    }
    let columns = (area.width / CARD_MIN_WIDTH).clamp(1, MAX_COLUMNS) as usize;
    let rows = count.div_ceil(columns);

    let row_areas = Layout::vertical(vec![Constraint::Fill(1); rows]).split(area);
    row_areas
        .iter()
        .flat_map(|row| {
            Layout::horizontal(vec![Constraint::Fill(1); columns])
                .split(*row)
                .to_vec()
        })
        .take(count)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_cover_the_frame() {
        let (header, body, footer) = layout_regions(Rect::new(0, 0, 80, 24));
        assert_eq!(header.height, 3);
        assert_eq!(footer.height, 3);
        assert_eq!(body.y, 3);
        assert_eq!(body.height, 18);
        assert_eq!(footer.y, 21);
    }

    #[test]
    fn tiny_frame_does_not_underflow() {
        let (header, body, footer) = layout_regions(Rect::new(0, 0, 10, 2));
        assert_eq!(header.height, 2);
        assert_eq!(body.height, 0);
        assert_eq!(footer.height, 0);
    }

    #[test]
    fn centered_rect_is_clamped() {
        let area = Rect::new(0, 0, 20, 10);
        assert_eq!(centered_rect_by_size(area, 10, 4), Rect::new(5, 3, 10, 4));
        assert_eq!(centered_rect_by_size(area, 50, 50), area);
    }

    #[test]
    fn grid_uses_columns_that_fit() {
        let rects = card_grid(Rect::new(0, 0, 120, 40), 13);
        assert_eq!(rects.len(), 13);
        // 120 / 38 = 3 columns: cards 0..3 share the first row.
        assert_eq!(rects[0].y, rects[2].y);
        assert!(rects[3].y > rects[0].y);
    }

    #[test]
    fn narrow_grid_is_single_column() {
        let rects = card_grid(Rect::new(0, 0, 30, 40), 4);
        assert!(rects.iter().all(|rect| rect.x == 0));
    }
}
