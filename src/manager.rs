use std::sync::{Mutex, PoisonError};

/// Coarse completion reporting: prints a percentage line on stdout each
/// time progress has advanced by at least `MIN_STEP` points, and once more
/// when all work is handed out.
#[derive(Debug)]
pub struct Progress {
    total: usize,
    last: f64,
}

impl Progress {
    pub const MIN_STEP: f64 = 5.0;

    pub fn new(total: usize) -> Self {
        Progress { total, last: 0.0 }
    }

    /// Returns the percentage if it was reported.
    pub fn update(&mut self, remaining: usize) -> Option<f64> {
        if self.total == 0 {
            return None;
        }
        let done = self.total.saturating_sub(remaining);
        let progress = done as f64 / self.total as f64 * 100.0;
        let finished = remaining == 0 && self.last < 100.0;
        if progress >= self.last + Self::MIN_STEP || finished {
            println!("{:.2}%", progress);
            self.last = progress;
            Some(progress)
        } else {
            None
        }
    }

    pub fn last(&self) -> f64 {
        self.last
    }
}

struct State<T> {
    todo: Vec<T>,
    progress: Progress,
}

/// Pending work shared by the render threads. Handing out an item is the
/// only operation that takes the lock.
pub struct WorkQueue<T> {
    state: Mutex<State<T>>,
}

impl<T> WorkQueue<T> {
    pub fn new(todo: Vec<T>) -> Self {
        let progress = Progress::new(todo.len());
        WorkQueue {
            state: Mutex::new(State { todo, progress }),
        }
    }

    /// Progress is observed with the pending count from before the pop, so
    /// the first pop on an empty queue is the one that reports 100%.
    pub fn pop(&self) -> Option<T> {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        let remaining = state.todo.len();
        state.progress.update(remaining);
        state.todo.pop()
    }

    pub fn len(&self) -> usize {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .todo
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
