//! Assorted constants & hard-coded configuration
use ratatui::{
    layout::Size,
    style::{Color, Modifier, Style},
};
use std::time::Duration;

/// Default side length of the board
pub(crate) const GRID_SIZE: u16 = 20;

/// Smallest board side length accepted from the configuration file
pub(crate) const MIN_GRID_SIZE: u16 = 4;

/// Largest board side length accepted from the configuration file.  Bigger
/// boards would not fit in [`DISPLAY_SIZE`].
pub(crate) const MAX_GRID_SIZE: u16 = 20;

/// Time between movements of the snake at the start of a game
pub(crate) const INITIAL_TICK_INTERVAL: Duration = Duration::from_millis(200);

/// The snake never moves faster than once per this interval
pub(crate) const MIN_TICK_INTERVAL: Duration = Duration::from_millis(80);

/// How much shorter the tick interval becomes each time food is eaten
pub(crate) const SPEED_STEP: Duration = Duration::from_millis(5);

/// Number of seconds counted down before the snake starts moving
pub(crate) const COUNTDOWN_START: u32 = 3;

/// Longest countdown accepted from the configuration file
pub(crate) const MAX_COUNTDOWN: u32 = 9;

/// Period of the countdown timer
pub(crate) const COUNTDOWN_PERIOD: Duration = Duration::from_secs(1);

/// Height at which the board's cells are embedded in 3D space
pub(crate) const BOARD_ELEVATION: i32 = 0;

/// Number of random cells to try when placing food before falling back to a
/// scan of the whole board
pub(crate) const FOOD_SAMPLING_ATTEMPTS: usize = 64;

/// Draw everything inside a rectangle of this size in the center of the
/// terminal window.
///
/// Cf. [`crate::util::get_display_area()`]
pub(crate) const DISPLAY_SIZE: Size = Size {
    width: 80,
    height: 24,
};

/// Terminal columns used to draw one cell of the board, so that cells come
/// out roughly square
pub(crate) const CELL_WIDTH: u16 = 2;

/// Glyph for the snake's head when it is moving up
pub(crate) const SNAKE_HEAD_UP_SYMBOL: char = '^';

/// Glyph for the snake's head when it is moving down
pub(crate) const SNAKE_HEAD_DOWN_SYMBOL: char = 'v';

/// Glyph for the snake's head when it is moving left
pub(crate) const SNAKE_HEAD_LEFT_SYMBOL: char = '<';

/// Glyph for the snake's head when it is moving right
pub(crate) const SNAKE_HEAD_RIGHT_SYMBOL: char = '>';

/// Glyph for the parts of the snake's body
pub(crate) const SNAKE_BODY_SYMBOL: char = '■';

/// Glyph for the food
pub(crate) const FOOD_SYMBOL: char = '●';

/// Glyph for the cell the snake crashed into
pub(crate) const COLLISION_SYMBOL: char = '×';

/// Style for the snake's head and body
pub(crate) const SNAKE_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);

/// Style for the food
pub(crate) const FOOD_STYLE: Style = Style::new().fg(Color::LightRed);

/// Style for [`COLLISION_SYMBOL`]
pub(crate) const COLLISION_STYLE: Style = Style::new()
    .fg(Color::LightRed)
    .add_modifier(Modifier::REVERSED);

/// Style for key names shown in the interface
pub(crate) const KEY_STYLE: Style = Style::new().fg(Color::Yellow);

/// Style for the score bar at the top of the game screen
pub(crate) const SCORE_BAR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Style for the big number shown during the countdown
pub(crate) const COUNTDOWN_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
