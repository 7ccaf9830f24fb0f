use ratatui::layout::Rect;

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

/// Rows for the button strip and the spinner, centered in `body`.
///
/// The spinner sits two rows under the strip; both collapse to zero height
/// when the body is too small.
pub fn counter_rows(body: Rect) -> (Rect, Rect) {
    let mid = body.y + body.height / 2;
    let strip = Rect {
        x: body.x,
        y: mid.min(body.y + body.height.saturating_sub(1)),
        width: body.width,
        height: body.height.min(1),
    };
    let spinner_y = mid.saturating_add(2);
    let spinner = Rect {
        x: body.x,
        y: spinner_y,
        width: body.width,
        height: if spinner_y < body.y.saturating_add(body.height) { 1 } else { 0 },
    };
    (strip, spinner)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_cover_area() {
        let area = Rect::new(0, 0, 40, 20);
        let (header, body, footer) = layout_regions(area);
        assert_eq!(header.height + body.height + footer.height, 20);
        assert_eq!(footer.y, 17);
    }

    #[test]
    fn spinner_is_below_strip() {
        let (strip, spinner) = counter_rows(Rect::new(0, 3, 40, 14));
        assert_eq!(strip.y, 10);
        assert_eq!(spinner.y, 12);
        assert_eq!(spinner.height, 1);
    }

    #[test]
    fn body_at_bottom_edge_does_not_overflow() {
        let (strip, spinner) = counter_rows(Rect::new(0, u16::MAX - 1, 40, 1));
        assert_eq!(strip.y, u16::MAX - 1);
        assert_eq!(spinner.height, 0);
    }

    #[test]
    fn tiny_body_hides_spinner() {
        let (strip, spinner) = counter_rows(Rect::new(0, 3, 40, 1));
        assert_eq!(strip.height, 1);
        assert_eq!(spinner.height, 0);
    }
}
