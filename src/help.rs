use crate::consts;
use crate::util::center_rect;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect, Size},
    style::Style,
    text::{Line, Span},
    widgets::{
        block::{Block, Padding},
        Clear, Widget,
    },
};
use std::borrow::Cow;

/// A bordered box of text drawn centered on top of whatever is beneath it
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Popup {
    title: &'static str,
    lines: Vec<Line<'static>>,
}

impl Popup {
    pub(crate) fn new<I>(title: &'static str, lines: I) -> Popup
    where
        I: IntoIterator<Item = Line<'static>>,
    {
        Popup {
            title,
            lines: lines.into_iter().collect(),
        }
    }

    /// The popup listing the controls
    pub(crate) fn help() -> Popup {
        let opts = textwrap::Options::new(HELP_TEXT_WIDTH);
        let mut lines = textwrap::wrap(HELP_INTRO, opts)
            .into_iter()
            .map(Cow::into_owned)
            .map(Line::from)
            .collect::<Vec<_>>();
        lines.push(Line::default());
        for &(key, action) in HELP_KEYS {
            lines.push(Line::from_iter([
                Span::styled(format!("{key:>11}"), consts::KEY_STYLE),
                Span::raw("  "),
                Span::raw(action),
            ]));
        }
        Popup::new(" HELP ", lines)
    }

    /// The size the popup needs, borders and padding included
    pub(crate) fn size(&self) -> Size {
        let text_width = self
            .lines
            .iter()
            .map(Line::width)
            .chain(std::iter::once(self.title.len()))
            .max()
            .unwrap_or(0);
        let width = u16::try_from(text_width)
            .unwrap_or(u16::MAX)
            .saturating_add(4);
        let height = u16::try_from(self.lines.len())
            .unwrap_or(u16::MAX)
            .saturating_add(2);
        Size { width, height }
    }
}

impl Widget for &Popup {
    // `area` is the area over which the popup is centered, not the area of
    // the popup itself.
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = center_rect(area, self.size());
        Clear.render(area, buf);
        let block = Block::bordered()
            .title(self.title)
            .title_alignment(Alignment::Center)
            .padding(Padding::horizontal(1))
            .style(Style::reset());
        let inner = block.inner(area);
        block.render(area, buf);
        for (line, row) in self.lines.iter().zip(inner.rows()) {
            line.render(row, buf);
        }
    }
}

const HELP_TEXT_WIDTH: usize = 34;

const HELP_INTRO: &str = "Steer the snake onto the food.  Each bite scores a point \
and makes the snake a little faster.  Hitting a wall or the snake's own body \
ends the game.";

const HELP_KEYS: &[(&str, &str)] = &[
    ("Enter", "start"),
    ("arrows/wasd", "steer"),
    ("Space", "pause/resume"),
    ("r", "reset"),
    ("?", "toggle help"),
    ("q", "quit"),
];
