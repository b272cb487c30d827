use crate::consts;
use crate::engine::{Cell, Direction, Grid, Outcome, Snapshot};
use crate::help::Popup;
use crate::util::{center_rect, get_display_area};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect, Size},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Widget},
};

/// A frame's worth of game state, ready to be drawn
#[derive(Clone, Copy, Debug)]
pub(crate) struct GameView<'a> {
    pub(crate) snapshot: &'a Snapshot,
    pub(crate) grid: Grid,
    pub(crate) show_help: bool,
}

impl GameView<'_> {
    fn board_size(&self) -> Size {
        let side = self.grid.side();
        Size {
            width: side.saturating_mul(consts::CELL_WIDTH).saturating_add(3),
            height: side.saturating_add(2),
        }
    }

    fn status_line(&self) -> Line<'static> {
        let snap = self.snapshot;
        let hints: &[(&'static str, &'static str)] = if snap.game_over {
            &[("Reset", "r"), ("Quit", "q")]
        } else if snap.is_game_active {
            &[("Pause", "Space"), ("Reset", "r"), ("Help", "?"), ("Quit", "q")]
        } else if snap.countdown > 0 {
            &[("Reset", "r"), ("Help", "?"), ("Quit", "q")]
        } else {
            &[("Start", "Enter"), ("Help", "?"), ("Quit", "q")]
        };
        let mut line = Line::raw(" ");
        for (i, &(action, key)) in hints.iter().enumerate() {
            if i > 0 {
                line.push_span(Span::raw(" · "));
            }
            line.push_span(Span::raw(format!("{action} (")));
            line.push_span(Span::styled(key, consts::KEY_STYLE));
            line.push_span(Span::raw(")"));
        }
        line
    }

    fn overlay(&self) -> Option<Popup> {
        let snap = self.snapshot;
        if let Some(outcome) = snap.outcome {
            let mut lines = Vec::new();
            if outcome == Outcome::BoardFilled {
                lines.push(Line::raw("The board is full!"));
            }
            lines.push(Line::raw(format!("Final score: {}", snap.score)));
            return Some(Popup::new(" GAME OVER ", lines));
        }
        if self.show_help {
            Some(Popup::help())
        } else if snap.countdown > 0 {
            Some(Popup::new(
                " GET READY ",
                [Line::styled(
                    format!("Starting in {}", snap.countdown),
                    consts::COUNTDOWN_STYLE,
                )],
            ))
        } else if snap.is_paused {
            Some(Popup::new(" PAUSED ", [Line::raw("Press Space to resume")]))
        } else {
            None
        }
    }
}

impl Widget for GameView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let display = get_display_area(area);
        let [score_area, board_area, status_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(display);
        Line::styled(
            format!(
                " Score: {}  Interval: {} ms",
                self.snapshot.score,
                self.snapshot.tick_interval.as_millis()
            ),
            consts::SCORE_BAR_STYLE,
        )
        .render(score_area, buf);

        let block_area = center_rect(board_area, self.board_size());
        let block = Block::bordered();
        let inner = block.inner(block_area);
        block.render(block_area, buf);
        let mut board = Canvas {
            area: inner,
            grid: self.grid,
            buf,
        };

        let snake = &self.snapshot.snake_body;
        for &p in snake.iter().skip(1) {
            board.draw_cell(
                Cell::from(p),
                consts::SNAKE_BODY_SYMBOL,
                consts::SNAKE_STYLE,
            );
        }
        if let Some(food) = self.snapshot.food_position {
            board.draw_cell(Cell::from(food), consts::FOOD_SYMBOL, consts::FOOD_STYLE);
        }
        // The head goes last so that a collision marker covers whatever the
        // snake ran into
        if let Some(head) = self.snapshot.head() {
            match self.snapshot.outcome {
                Some(Outcome::Collision { at }) => {
                    let at = if self.grid.contains(at) { at } else { head };
                    board.draw_cell(at, consts::COLLISION_SYMBOL, consts::COLLISION_STYLE);
                    if at != head {
                        board.draw_cell(
                            head,
                            head_symbol(self.snapshot.direction),
                            consts::SNAKE_STYLE,
                        );
                    }
                }
                _ => board.draw_cell(
                    head,
                    head_symbol(self.snapshot.direction),
                    consts::SNAKE_STYLE,
                ),
            }
        }

        self.status_line().render(status_area, buf);
        if let Some(popup) = self.overlay() {
            (&popup).render(display, buf);
        }
    }
}

fn head_symbol(direction: Direction) -> char {
    match direction {
        Direction::Up => consts::SNAKE_HEAD_UP_SYMBOL,
        Direction::Down => consts::SNAKE_HEAD_DOWN_SYMBOL,
        Direction::Left => consts::SNAKE_HEAD_LEFT_SYMBOL,
        Direction::Right => consts::SNAKE_HEAD_RIGHT_SYMBOL,
    }
}

/// The inside of the board's border, addressed by grid cell
#[derive(Debug, Eq, PartialEq)]
struct Canvas<'a> {
    area: Rect,
    grid: Grid,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    fn draw_cell(&mut self, cell: Cell, symbol: char, style: Style) {
        let Some((col, row)) = self.grid.offset(cell) else {
            return;
        };
        let Some(x) = col
            .checked_mul(consts::CELL_WIDTH)
            .and_then(|dx| self.area.x.checked_add(dx))
            .and_then(|x| x.checked_add(1))
        else {
            return;
        };
        let Some(y) = self.area.y.checked_add(row) else {
            return;
        };
        if let Some(c) = self.buf.cell_mut((x, y)) {
            c.set_char(symbol);
            c.set_style(Style::reset().patch(style));
        }
    }
}
