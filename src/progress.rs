//! Completion progress derived from the task list.

use crate::models::Task;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Progress {
    pub total: usize,
    pub completed: usize,
}

impl Progress {
    pub fn of(tasks: &[Task]) -> Self {
        Self {
            total: tasks.len(),
            completed: tasks.iter().filter(|t| t.completed).count(),
        }
    }

    /// Rounded percentage, 0 for an empty list
    pub fn percent(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        (self.completed as f64 / self.total as f64 * 100.0).round() as u32
    }

    /// Items left
    pub fn remaining(&self) -> usize {
        self.total - self.completed
    }

    pub fn label(&self) -> String {
        format!("{}% completed", self.percent())
    }

    /// Every task done. Stricter than `percent() == 100`, which rounds.
    pub fn is_all_done(&self) -> bool {
        self.total > 0 && self.completed == self.total
    }
}
