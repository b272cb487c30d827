use super::grid::Cell;
use std::collections::VecDeque;

/// The snake: a head plus the cells trailing behind it
#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct Snake {
    /// The position of the snake's head
    head: Cell,

    /// The positions of the rest of the snake, nearest to the head first
    body: VecDeque<Cell>,
}

impl Snake {
    /// Create a snake consisting of just a head at `head`
    pub(super) fn new(head: Cell) -> Snake {
        Snake {
            head,
            body: VecDeque::new(),
        }
    }

    /// Create a snake from a sequence of cells, head first.  Returns `None` if
    /// `cells` is empty.
    #[cfg(test)]
    pub(super) fn from_cells<I: IntoIterator<Item = Cell>>(cells: I) -> Option<Snake> {
        let mut iter = cells.into_iter();
        let head = iter.next()?;
        Some(Snake {
            head,
            body: iter.collect(),
        })
    }

    pub(super) fn head(&self) -> Cell {
        self.head
    }

    /// Iterate over every cell of the snake, head first
    pub(super) fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        std::iter::once(self.head).chain(self.body.iter().copied())
    }

    pub(super) fn len(&self) -> usize {
        self.body.len() + 1
    }

    pub(super) fn contains(&self, cell: Cell) -> bool {
        self.head == cell || self.body.contains(&cell)
    }

    /// Would moving the head into `cell` run the snake into itself?  The tail
    /// doesn't count, as it moves out of the way on the same tick.
    pub(super) fn blocks(&self, cell: Cell) -> bool {
        if self.body.is_empty() {
            return false;
        }
        self.head == cell
            || self
                .body
                .iter()
                .take(self.body.len() - 1)
                .any(|&c| c == cell)
    }

    /// Move the head to `head`.  Unless `grow` is true, the tail is dropped so
    /// that the length stays the same.
    pub(super) fn advance(&mut self, head: Cell, grow: bool) {
        self.body.push_front(self.head);
        self.head = head;
        if !grow {
            let _ = self.body.pop_back();
        }
    }
}
