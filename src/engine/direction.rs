use crossterm::event::KeyCode;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// The change in `(x, z)` from moving one cell in this direction
    pub(crate) fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub(crate) fn reverse(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Look up the direction bound to a key.  Letter keys only match in
    /// lowercase.
    pub(crate) fn from_key(key: KeyCode) -> Option<Direction> {
        match key {
            KeyCode::Up | KeyCode::Char('w') => Some(Direction::Up),
            KeyCode::Down | KeyCode::Char('s') => Some(Direction::Down),
            KeyCode::Left | KeyCode::Char('a') => Some(Direction::Left),
            KeyCode::Right | KeyCode::Char('d') => Some(Direction::Right),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(KeyCode::Up, Some(Direction::Up))]
    #[case(KeyCode::Down, Some(Direction::Down))]
    #[case(KeyCode::Left, Some(Direction::Left))]
    #[case(KeyCode::Right, Some(Direction::Right))]
    #[case(KeyCode::Char('w'), Some(Direction::Up))]
    #[case(KeyCode::Char('s'), Some(Direction::Down))]
    #[case(KeyCode::Char('a'), Some(Direction::Left))]
    #[case(KeyCode::Char('d'), Some(Direction::Right))]
    #[case(KeyCode::Char('W'), None)]
    #[case(KeyCode::Char('D'), None)]
    #[case(KeyCode::Char('k'), None)]
    #[case(KeyCode::Enter, None)]
    fn test_from_key(#[case] key: KeyCode, #[case] r: Option<Direction>) {
        assert_eq!(Direction::from_key(key), r);
    }

    #[rstest]
    #[case(Direction::Up)]
    #[case(Direction::Down)]
    #[case(Direction::Left)]
    #[case(Direction::Right)]
    fn reverse_cancels_delta(#[case] d: Direction) {
        let (dx, dz) = d.delta();
        let (rx, rz) = d.reverse().delta();
        assert_eq!((dx + rx, dz + rz), (0, 0));
        assert_eq!(dx.abs() + dz.abs(), 1);
        assert_eq!(d.reverse().reverse(), d);
    }
}
