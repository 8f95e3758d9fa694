//! Task List Utilities
//!
//! In-place list operations behind the store helpers.

use crate::models::{Filter, Task};

/// Returns false if no task has `id`
pub fn set_completed(tasks: &mut [Task], id: u32, completed: bool) -> bool {
    match tasks.iter_mut().find(|t| t.id == id) {
        Some(task) => {
            task.completed = completed;
            true
        }
        None => false,
    }
}

pub fn remove_task(tasks: &mut Vec<Task>, id: u32) -> Option<Task> {
    let index = tasks.iter().position(|t| t.id == id)?;
    Some(tasks.remove(index))
}

/// Remove a task and hand its text back for re-entry in the input
pub fn take_for_edit(tasks: &mut Vec<Task>, id: u32) -> Option<String> {
    remove_task(tasks, id).map(|task| task.text)
}

/// Returns how many tasks were removed
pub fn clear_completed(tasks: &mut Vec<Task>) -> usize {
    let before = tasks.len();
    tasks.retain(|t| !t.completed);
    before - tasks.len()
}

/// Tasks shown under `filter`, in list order
pub fn visible_tasks(tasks: &[Task], filter: Filter) -> Vec<Task> {
    tasks.iter().filter(|t| filter.matches(t)).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_task(id: u32, completed: bool) -> Task {
        Task {
            id,
            text: format!("Task {}", id),
            completed,
        }
    }

    fn ids(tasks: &[Task]) -> Vec<u32> {
        tasks.iter().map(|t| t.id).collect()
    }

    #[test]
    fn test_set_completed() {
        let mut tasks = vec![make_task(1, false), make_task(2, false)];
        assert!(set_completed(&mut tasks, 2, true));
        assert!(tasks[1].completed);
        assert!(set_completed(&mut tasks, 2, false));
        assert!(!tasks[1].completed);
        assert!(!set_completed(&mut tasks, 9, true));
    }

    #[test]
    fn test_remove_keeps_order() {
        let mut tasks = vec![make_task(1, false), make_task(2, true), make_task(3, false)];
        let removed = remove_task(&mut tasks, 2).unwrap();
        assert_eq!(removed.id, 2);
        assert_eq!(ids(&tasks), vec![1, 3]);
        assert!(remove_task(&mut tasks, 2).is_none());
    }

    #[test]
    fn test_take_for_edit() {
        let mut tasks = vec![make_task(1, false), make_task(2, false)];
        assert_eq!(take_for_edit(&mut tasks, 1).as_deref(), Some("Task 1"));
        assert_eq!(ids(&tasks), vec![2]);
        assert!(take_for_edit(&mut tasks, 1).is_none());
    }

    #[test]
    fn test_clear_completed() {
        let mut tasks = vec![
            make_task(1, true),
            make_task(2, false),
            make_task(3, true),
            make_task(4, false),
        ];
        assert_eq!(clear_completed(&mut tasks), 2);
        assert_eq!(ids(&tasks), vec![2, 4]);
        assert_eq!(clear_completed(&mut tasks), 0);
    }

    #[test]
    fn test_visible_tasks_partition() {
        let tasks = vec![
            make_task(1, true),
            make_task(2, false),
            make_task(3, true),
            make_task(4, false),
        ];
        assert_eq!(ids(&visible_tasks(&tasks, Filter::All)), vec![1, 2, 3, 4]);
        assert_eq!(ids(&visible_tasks(&tasks, Filter::Active)), vec![2, 4]);
        assert_eq!(ids(&visible_tasks(&tasks, Filter::Completed)), vec![1, 3]);
    }
}
