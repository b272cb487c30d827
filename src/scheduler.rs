use std::time::{Duration, Instant};
use tracing::trace;

/// Shortest period a task may have; shorter requests are rounded up
const MIN_PERIOD: Duration = Duration::from_millis(1);

/// A source of the current time
pub(crate) trait Clock {
    fn now(&self) -> Instant;
}

/// The wall clock
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Handle to a running task.  IDs are never reused within a scheduler.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub(crate) struct TaskId(u64);

/// What a periodic task is for
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Task {
    /// Counts down the seconds before a game begins
    Countdown,

    /// Moves the snake
    Movement,
}

/// A task that has come due
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Fired {
    pub(crate) id: TaskId,
    pub(crate) task: Task,
}

pub(crate) trait Scheduler {
    /// Start running `task` every `period`.  The first firing happens one
    /// period from now.
    fn start(&mut self, task: Task, period: Duration) -> TaskId;

    /// Stop the task with the given ID.  Returns `false` if there was no such
    /// task.
    fn cancel(&mut self, id: TaskId) -> bool;

    /// Return the earliest time at which a task is due, if any tasks are
    /// running
    fn next_deadline(&self) -> Option<Instant>;

    /// Return a task that is currently due, if any, and schedule its next
    /// firing.
    ///
    /// Firings that were missed because this wasn't called in time are
    /// dropped rather than delivered late: each task fires at most once per
    /// call, and its next deadline is never in the past.
    fn pop_due(&mut self) -> Option<Fired>;

    /// Return the number of running tasks
    #[cfg(test)]
    fn pending(&self) -> usize;
}

impl<S: Scheduler + ?Sized> Scheduler for &mut S {
    fn start(&mut self, task: Task, period: Duration) -> TaskId {
        (**self).start(task, period)
    }

    fn cancel(&mut self, id: TaskId) -> bool {
        (**self).cancel(id)
    }

    fn next_deadline(&self) -> Option<Instant> {
        (**self).next_deadline()
    }

    fn pop_due(&mut self) -> Option<Fired> {
        (**self).pop_due()
    }

    #[cfg(test)]
    fn pending(&self) -> usize {
        (**self).pending()
    }
}

/// A [`Scheduler`] that keeps its tasks in memory and reads the time from a
/// [`Clock`]
#[derive(Clone, Debug)]
pub(crate) struct Timers<C = SystemClock> {
    clock: C,
    next_id: u64,
    entries: Vec<Entry>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct Entry {
    id: TaskId,
    task: Task,
    period: Duration,
    deadline: Instant,
}

impl<C: Clock> Timers<C> {
    pub(crate) fn new(clock: C) -> Timers<C> {
        Timers {
            clock,
            next_id: 0,
            entries: Vec::new(),
        }
    }
}

impl<C: Clock> Scheduler for Timers<C> {
    fn start(&mut self, task: Task, period: Duration) -> TaskId {
        let period = period.max(MIN_PERIOD);
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry {
            id,
            task,
            period,
            deadline: self.clock.now() + period,
        });
        trace!(?id, ?task, ?period, "started task");
        id
    }

    fn cancel(&mut self, id: TaskId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        let cancelled = self.entries.len() != before;
        if cancelled {
            trace!(?id, "cancelled task");
        }
        cancelled
    }

    fn next_deadline(&self) -> Option<Instant> {
        self.entries.iter().map(|e| e.deadline).min()
    }

    fn pop_due(&mut self) -> Option<Fired> {
        let now = self.clock.now();
        let entry = self
            .entries
            .iter_mut()
            .filter(|e| e.deadline <= now)
            .min_by_key(|e| (e.deadline, e.id))?;
        entry.deadline += entry.period;
        if entry.deadline <= now {
            entry.deadline = now + entry.period;
        }
        Some(Fired {
            id: entry.id,
            task: entry.task,
        })
    }

    #[cfg(test)]
    fn pending(&self) -> usize {
        self.entries.len()
    }
}

/// A clock that only moves when told to.  Clones share the same time.
#[cfg(test)]
#[derive(Clone, Debug)]
pub(crate) struct ManualClock(std::rc::Rc<std::cell::Cell<Instant>>);

#[cfg(test)]
impl ManualClock {
    pub(crate) fn starting_now() -> ManualClock {
        ManualClock(std::rc::Rc::new(std::cell::Cell::new(Instant::now())))
    }

    pub(crate) fn advance(&self, by: Duration) {
        self.0.set(self.0.get() + by);
    }
}

#[cfg(test)]
impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.0.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timers() -> (ManualClock, Timers<ManualClock>) {
        let clock = ManualClock::starting_now();
        (clock.clone(), Timers::new(clock))
    }

    #[test]
    fn fires_after_one_period() {
        let (clock, mut timers) = timers();
        let id = timers.start(Task::Movement, Duration::from_millis(200));
        assert_eq!(timers.pop_due(), None);
        clock.advance(Duration::from_millis(199));
        assert_eq!(timers.pop_due(), None);
        clock.advance(Duration::from_millis(1));
        assert_eq!(
            timers.pop_due(),
            Some(Fired {
                id,
                task: Task::Movement
            })
        );
        assert_eq!(timers.pop_due(), None);
        clock.advance(Duration::from_millis(200));
        assert_eq!(timers.pop_due().map(|f| f.id), Some(id));
    }

    #[test]
    fn missed_firings_are_dropped() {
        let (clock, mut timers) = timers();
        let start = clock.now();
        let id = timers.start(Task::Movement, Duration::from_millis(100));
        clock.advance(Duration::from_millis(350));
        assert_eq!(timers.pop_due().map(|f| f.id), Some(id));
        assert_eq!(timers.pop_due(), None);
        assert_eq!(
            timers.next_deadline(),
            Some(start + Duration::from_millis(450))
        );
    }

    #[test]
    fn on_time_firings_keep_cadence() {
        let (clock, mut timers) = timers();
        let start = clock.now();
        timers.start(Task::Countdown, Duration::from_secs(1));
        clock.advance(Duration::from_millis(1500));
        assert!(timers.pop_due().is_some());
        assert_eq!(timers.next_deadline(), Some(start + Duration::from_secs(2)));
    }

    #[test]
    fn cancel() {
        let (clock, mut timers) = timers();
        let countdown = timers.start(Task::Countdown, Duration::from_secs(1));
        let movement = timers.start(Task::Movement, Duration::from_millis(200));
        assert_eq!(timers.pending(), 2);
        assert!(timers.cancel(countdown));
        assert!(!timers.cancel(countdown));
        assert_eq!(timers.pending(), 1);
        clock.advance(Duration::from_secs(1));
        assert_eq!(timers.pop_due().map(|f| f.id), Some(movement));
        assert_eq!(timers.pop_due(), None);
    }

    #[test]
    fn earliest_due_first() {
        let (clock, mut timers) = timers();
        let slow = timers.start(Task::Countdown, Duration::from_millis(300));
        let fast = timers.start(Task::Movement, Duration::from_millis(100));
        assert_eq!(
            timers.next_deadline(),
            Some(clock.now() + Duration::from_millis(100))
        );
        clock.advance(Duration::from_millis(300));
        assert_eq!(timers.pop_due().map(|f| f.id), Some(fast));
        assert_eq!(timers.pop_due().map(|f| f.id), Some(slow));
        assert_eq!(timers.pop_due(), None);
    }

    #[test]
    fn ids_not_reused() {
        let (_, mut timers) = timers();
        let first = timers.start(Task::Movement, Duration::from_millis(200));
        assert!(timers.cancel(first));
        let second = timers.start(Task::Movement, Duration::from_millis(200));
        assert_ne!(first, second);
    }

    #[test]
    fn zero_period_rounded_up() {
        let (clock, mut timers) = timers();
        timers.start(Task::Movement, Duration::ZERO);
        assert_eq!(timers.next_deadline(), Some(clock.now() + MIN_PERIOD));
    }
}
