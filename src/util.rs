use crate::consts;
use ratatui::layout::{Flex, Layout, Rect, Size};

pub(crate) fn get_display_area(buffer_area: Rect) -> Rect {
    let [display] = Layout::horizontal([consts::DISPLAY_SIZE.width])
        .flex(Flex::Center)
        .areas(buffer_area);
    let [display] = Layout::vertical([consts::DISPLAY_SIZE.height])
        .flex(Flex::Center)
        .areas(display);
    display
}

/// Return a rectangle of the given size centered within `area`, shrunk to fit
/// if necessary.  Any odd leftover column or row goes on the right/bottom.
pub(crate) fn center_rect(area: Rect, size: Size) -> Rect {
    let width = size.width.min(area.width);
    let height = size.height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Rect::new(0, 0, 80, 22), Size::new(43, 22), Rect::new(18, 0, 43, 22))]
    #[case(Rect::new(0, 1, 80, 22), Size::new(20, 6), Rect::new(30, 9, 20, 6))]
    #[case(Rect::new(5, 7, 10, 10), Size::new(4, 4), Rect::new(8, 10, 4, 4))]
    #[case(Rect::new(5, 7, 10, 10), Size::new(30, 4), Rect::new(5, 10, 10, 4))]
    #[case(Rect::new(5, 7, 10, 10), Size::new(4, 30), Rect::new(8, 7, 4, 10))]
    #[case(Rect::ZERO, Size::new(4, 4), Rect::ZERO)]
    fn test_center_rect(#[case] area: Rect, #[case] size: Size, #[case] r: Rect) {
        assert_eq!(center_rect(area, size), r);
    }

    #[test]
    fn display_area_in_big_terminal() {
        assert_eq!(
            get_display_area(Rect::new(0, 0, 100, 30)),
            Rect::new(10, 3, 80, 24)
        );
    }
}
