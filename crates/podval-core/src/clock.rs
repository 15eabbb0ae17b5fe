//! Cancellable repeating task driving the round countdown.
//!
//! The scheduler only starts the task; whatever it fires into (a yew
//! dispatcher, a test loop) is responsible for calling
//! [`GameSession::tick`](crate::game::GameSession::tick). The session owns the
//! returned [`TickTask`] and cancels it when the round stops counting.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

/// Cadence of the round countdown.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Starts repeating tasks.
pub trait TickScheduler {
    fn schedule(&self, period: Duration) -> TickTask;
}

type CancelFn = Box<dyn FnOnce()>;

/// Handle to a running repeating task.
///
/// Clones share the same task. The task stops when [`TickTask::cancel`] is
/// called on any clone or when the last clone is dropped.
#[derive(Clone)]
pub struct TickTask {
    inner: Rc<TaskInner>,
}

struct TaskInner {
    cancel: RefCell<Option<CancelFn>>,
}

impl Drop for TaskInner {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.get_mut().take() {
            cancel();
        }
    }
}

impl TickTask {
    /// Wraps a running task; `cancel` stops it and runs at most once.
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            inner: Rc::new(TaskInner {
                cancel: RefCell::new(Some(Box::new(cancel))),
            }),
        }
    }

    pub fn cancel(&self) {
        let cancel = self.inner.cancel.borrow_mut().take();
        if let Some(cancel) = cancel {
            cancel();
        }
    }

    pub fn is_active(&self) -> bool {
        self.inner.cancel.borrow().is_some()
    }
}

impl fmt::Debug for TickTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TickTask")
            .field("active", &self.is_active())
            .finish()
    }
}

impl PartialEq for TickTask {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

/// Scheduler that never fires on its own. It counts live tasks so callers
/// can check that none outlive the round; ticks are delivered by hand.
#[derive(Debug, Clone, Default)]
pub struct ManualScheduler {
    live: Rc<RefCell<usize>>,
    started: Rc<RefCell<usize>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tasks scheduled and not yet cancelled.
    pub fn live_tasks(&self) -> usize {
        *self.live.borrow()
    }

    /// Tasks scheduled over the scheduler's lifetime.
    pub fn started_tasks(&self) -> usize {
        *self.started.borrow()
    }
}

impl TickScheduler for ManualScheduler {
    fn schedule(&self, _period: Duration) -> TickTask {
        *self.live.borrow_mut() += 1;
        *self.started.borrow_mut() += 1;
        let live = self.live.clone();
        TickTask::new(move || *live.borrow_mut() -= 1)
    }
}
