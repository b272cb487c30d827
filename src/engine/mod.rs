mod direction;
mod food;
mod grid;
mod snake;
pub(crate) use self::direction::Direction;
pub(crate) use self::grid::{Cell, Grid, Point3};
use self::snake::Snake;
use crate::config::GameSettings;
use crate::consts;
use crate::scheduler::{Fired, Scheduler, Task, TaskId};
use crossterm::event::KeyCode;
use rand::Rng;
use std::time::{Duration, Instant};
use tracing::{debug, info, trace};

#[derive(Debug)]
pub(crate) struct Engine<S: Scheduler, R = rand::rngs::ThreadRng> {
    scheduler: S,
    rng: R,
    settings: GameSettings,
    snake: Snake,

    /// The direction committed by the most recent tick.  Intents are checked
    /// against this rather than against `next_direction` so that several key
    /// presses within one tick can't add up to a U-turn.
    last_applied: Direction,

    /// The direction the next tick will move in
    next_direction: Direction,

    /// `None` only once the snake has filled the board
    food: Option<Cell>,
    score: u32,
    tick_interval: Duration,
    status: Status,
    countdown_task: Option<TaskId>,
    movement_task: Option<TaskId>,
}

impl<S: Scheduler> Engine<S> {
    pub(crate) fn new(settings: GameSettings, scheduler: S) -> Self {
        Engine::new_with_rng(settings, scheduler, rand::rng())
    }
}

impl<S: Scheduler, R: Rng> Engine<S, R> {
    pub(crate) fn new_with_rng(settings: GameSettings, scheduler: S, mut rng: R) -> Engine<S, R> {
        let snake = Snake::new(Cell::ORIGIN);
        let food = food::place_food(settings.grid, &snake, &mut rng);
        Engine {
            scheduler,
            rng,
            settings,
            snake,
            last_applied: Direction::Right,
            next_direction: Direction::Right,
            food,
            score: 0,
            tick_interval: settings.initial_interval,
            status: Status::Idle,
            countdown_task: None,
            movement_task: None,
        }
    }

    /// Begin the countdown to a new game.  Does nothing unless the engine is
    /// idle.
    pub(crate) fn start_game(&mut self) {
        if self.status != Status::Idle {
            trace!(status = ?self.status, "ignoring start request");
            return;
        }
        self.status = Status::Countdown(self.settings.countdown);
        self.countdown_task = Some(
            self.scheduler
                .start(Task::Countdown, consts::COUNTDOWN_PERIOD),
        );
        info!(countdown = self.settings.countdown, "starting countdown");
    }

    /// Abandon the current game, if any, and return to the idle state with
    /// everything set back to its initial value
    pub(crate) fn reset_game(&mut self) {
        self.cancel_tasks();
        self.snake = Snake::new(Cell::ORIGIN);
        self.last_applied = Direction::Right;
        self.next_direction = Direction::Right;
        self.food = food::place_food(self.settings.grid, &self.snake, &mut self.rng);
        self.score = 0;
        self.tick_interval = self.settings.initial_interval;
        self.status = Status::Idle;
        info!("game reset");
    }

    /// Pause an active game or resume a paused one.  Does nothing in any other
    /// state.
    pub(crate) fn toggle_pause(&mut self) {
        match self.status {
            Status::Active => {
                self.stop_movement();
                self.status = Status::Paused;
                info!(score = self.score, "paused");
            }
            Status::Paused => {
                self.status = Status::Active;
                self.start_movement();
                info!("resumed");
            }
            _ => trace!(status = ?self.status, "ignoring pause request"),
        }
    }

    /// React to a key press: space toggles pausing, `r` resets, and the keys
    /// recognized by [`Direction::from_key()`] steer.  Anything else is
    /// ignored.
    pub(crate) fn handle_key_down(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char(' ') => {
                if matches!(self.status, Status::Active | Status::Paused) {
                    self.toggle_pause();
                }
            }
            KeyCode::Char('r') => self.reset_game(),
            _ => {
                if let Some(direction) = Direction::from_key(key) {
                    self.set_direction_intent(direction);
                }
            }
        }
    }

    /// Request that the snake move in `direction` starting with the next
    /// tick.  The request is dropped if the game isn't running or if it would
    /// turn the snake back on itself.
    pub(crate) fn set_direction_intent(&mut self, direction: Direction) {
        if self.status != Status::Active {
            trace!(?direction, status = ?self.status, "ignoring turn");
            return;
        }
        if direction == self.last_applied.reverse() {
            trace!(?direction, "ignoring reversal");
            return;
        }
        self.next_direction = direction;
    }

    /// Handle a task fired by the scheduler.  Firings from tasks that have
    /// since been cancelled, or whose kind doesn't match the task the engine
    /// holds under that ID, are ignored.
    pub(crate) fn on_timer(&mut self, fired: Fired) {
        match fired.task {
            Task::Movement if self.movement_task == Some(fired.id) => self.tick(),
            Task::Countdown if self.countdown_task == Some(fired.id) => self.count_down(),
            _ => trace!(?fired, "ignoring stale timer"),
        }
    }

    /// Fire every task that is currently due
    pub(crate) fn run_due_timers(&mut self) {
        while let Some(fired) = self.scheduler.pop_due() {
            self.on_timer(fired);
        }
    }

    /// Advance the game by one step: commit the pending direction, move the
    /// head, end the game on a collision, and eat & replace the food if the
    /// head landed on it.
    pub(crate) fn tick(&mut self) {
        if self.status != Status::Active {
            return;
        }
        self.last_applied = self.next_direction;
        let new_head = self.snake.head().step(self.last_applied);
        if self.collides(new_head) {
            self.game_over(Outcome::Collision { at: new_head });
            return;
        }
        let ate = self.food == Some(new_head);
        self.snake.advance(new_head, ate);
        if ate {
            self.score += 1;
            debug!(score = self.score, length = self.snake.len(), "ate food");
            self.food = food::place_food(self.settings.grid, &self.snake, &mut self.rng);
            if self.food.is_none() {
                self.game_over(Outcome::BoardFilled);
                return;
            }
            self.speed_up();
        }
    }

    fn count_down(&mut self) {
        let Status::Countdown(n) = self.status else {
            return;
        };
        if n > 1 {
            self.status = Status::Countdown(n - 1);
            debug!(countdown = n - 1, "counting down");
        } else {
            if let Some(id) = self.countdown_task.take() {
                self.scheduler.cancel(id);
            }
            self.status = Status::Active;
            self.start_movement();
            info!("game started");
        }
    }

    fn speed_up(&mut self) {
        let faster = self
            .tick_interval
            .saturating_sub(self.settings.speed_step)
            .max(self.settings.min_interval);
        if faster != self.tick_interval {
            self.tick_interval = faster;
            debug!(interval = ?faster, "speeding up");
            self.stop_movement();
            self.start_movement();
        }
    }

    fn game_over(&mut self, outcome: Outcome) {
        self.stop_movement();
        self.status = Status::Over(outcome);
        info!(score = self.score, ?outcome, "game over");
    }
}

impl<S: Scheduler, R> Engine<S, R> {
    pub(crate) fn status(&self) -> Status {
        self.status
    }

    pub(crate) fn grid(&self) -> Grid {
        self.settings.grid
    }

    /// Return the earliest time at which the engine's timers need servicing
    pub(crate) fn next_deadline(&self) -> Option<Instant> {
        self.scheduler.next_deadline()
    }

    /// Return a copy of everything a renderer needs to draw the game
    pub(crate) fn snapshot(&self) -> Snapshot {
        Snapshot {
            snake_body: self
                .snake
                .cells()
                .map(|c| c.embed(consts::BOARD_ELEVATION))
                .collect(),
            food_position: self.food.map(|c| c.embed(consts::BOARD_ELEVATION)),
            direction: self.last_applied,
            score: self.score,
            game_over: matches!(self.status, Status::Over(_)),
            is_paused: self.status == Status::Paused,
            is_game_active: matches!(self.status, Status::Active | Status::Paused),
            countdown: match self.status {
                Status::Countdown(n) => n,
                _ => 0,
            },
            tick_interval: self.tick_interval,
            outcome: match self.status {
                Status::Over(outcome) => Some(outcome),
                _ => None,
            },
        }
    }

    /// Would moving the head into `cell` end the game?
    fn collides(&self, cell: Cell) -> bool {
        !self.settings.grid.contains(cell) || self.snake.blocks(cell)
    }

    fn start_movement(&mut self) {
        self.stop_movement();
        self.movement_task = Some(self.scheduler.start(Task::Movement, self.tick_interval));
    }

    fn stop_movement(&mut self) {
        if let Some(id) = self.movement_task.take() {
            self.scheduler.cancel(id);
        }
    }

    fn cancel_tasks(&mut self) {
        self.stop_movement();
        if let Some(id) = self.countdown_task.take() {
            self.scheduler.cancel(id);
        }
    }
}

impl<S: Scheduler, R> Drop for Engine<S, R> {
    fn drop(&mut self) {
        self.cancel_tasks();
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Status {
    /// Waiting for the player to start a game
    Idle,
    /// Counting down to the start of a game; holds the seconds remaining
    Countdown(u32),
    Active,
    Paused,
    Over(Outcome),
}

/// How a game ended
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Outcome {
    /// The snake tried to move into `at`, which is either off the board or
    /// part of the snake
    Collision { at: Cell },

    /// The snake covers the whole board, leaving nowhere to put food
    BoardFilled,
}

/// A read-only view of the game as of the most recent state change
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Snapshot {
    /// The snake's cells, head first
    pub(crate) snake_body: Vec<Point3>,
    pub(crate) food_position: Option<Point3>,
    /// The direction the snake last moved in
    pub(crate) direction: Direction,
    pub(crate) score: u32,
    pub(crate) game_over: bool,
    pub(crate) is_paused: bool,
    /// True while the game is either active or paused
    pub(crate) is_game_active: bool,
    /// Seconds left before the game starts, or 0 when not counting down
    pub(crate) countdown: u32,
    pub(crate) tick_interval: Duration,
    pub(crate) outcome: Option<Outcome>,
}

impl Snapshot {
    pub(crate) fn head(&self) -> Option<Cell> {
        self.snake_body.first().copied().map(Cell::from)
    }
}
