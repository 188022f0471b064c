//! The client's local copy of the todo list.
//!
//! # Design
//! `TodoList` is an owned ordered sequence, newest first, that is only ever
//! changed with records the server has confirmed. It is a cache of store truth:
//! every update is keyed by the server-assigned id. The active and completed
//! views are filters computed on demand and never stored.

use crate::types::Todo;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoList {
    todos: Vec<Todo>,
}

/// Sizes of the active and completed views.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counts {
    pub active: usize,
    pub completed: usize,
}

impl TodoList {
    pub fn new(todos: Vec<Todo>) -> Self {
        Self { todos }
    }

    pub fn as_slice(&self) -> &[Todo] {
        &self.todos
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Todo> {
        self.todos.iter()
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    pub fn get(&self, id: i64) -> Option<&Todo> {
        self.todos.iter().find(|t| t.id == id)
    }

    /// Put a newly created todo at the front. A stale entry with the same id
    /// is dropped first so ids stay unique.
    pub fn prepend(&mut self, todo: Todo) {
        self.todos.retain(|t| t.id != todo.id);
        self.todos.insert(0, todo);
    }

    /// Swap in the server's copy of an updated todo, keeping its position.
    /// Returns `false` if no local entry has that id.
    pub fn replace(&mut self, todo: Todo) -> bool {
        match self.todos.iter_mut().find(|t| t.id == todo.id) {
            Some(slot) => {
                *slot = todo;
                true
            }
            None => false,
        }
    }

    /// Returns `false` if no local entry has that id.
    pub fn remove(&mut self, id: i64) -> bool {
        let before = self.todos.len();
        self.todos.retain(|t| t.id != id);
        self.todos.len() != before
    }

    pub fn active(&self) -> Vec<&Todo> {
        self.todos.iter().filter(|t| !t.completed).collect()
    }

    pub fn completed(&self) -> Vec<&Todo> {
        self.todos.iter().filter(|t| t.completed).collect()
    }

    pub fn counts(&self) -> Counts {
        let completed = self.todos.iter().filter(|t| t.completed).count();
        Counts {
            active: self.todos.len() - completed,
            completed,
        }
    }

    pub fn into_vec(self) -> Vec<Todo> {
        self.todos
    }
}

impl From<Vec<Todo>> for TodoList {
    fn from(todos: Vec<Todo>) -> Self {
        Self::new(todos)
    }
}

impl<'a> IntoIterator for &'a TodoList {
    type Item = &'a Todo;
    type IntoIter = std::slice::Iter<'a, Todo>;

    fn into_iter(self) -> Self::IntoIter {
        self.todos.iter()
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use proptest::prelude::*;

    use super::*;

    fn todo(id: i64, completed: bool) -> Todo {
        Todo {
            id,
            title: format!("todo {id}"),
            completed,
            created_at: Utc.timestamp_opt(1_700_000_000 + id, 0).unwrap(),
        }
    }

    fn ids(list: &TodoList) -> Vec<i64> {
        list.iter().map(|t| t.id).collect()
    }

    #[test]
    fn prepend_puts_new_todo_first() {
        let mut list = TodoList::new(vec![todo(2, false), todo(1, true)]);
        list.prepend(todo(3, false));
        assert_eq!(ids(&list), vec![3, 2, 1]);
    }

    #[test]
    fn prepend_does_not_duplicate_ids() {
        let mut list = TodoList::new(vec![todo(2, false), todo(1, false)]);
        list.prepend(todo(1, true));
        assert_eq!(ids(&list), vec![1, 2]);
        assert!(list.get(1).unwrap().completed);
    }

    #[test]
    fn replace_keeps_position_and_leaves_others_alone() {
        let mut list = TodoList::new(vec![todo(3, false), todo(2, false), todo(1, false)]);
        assert!(list.replace(todo(2, true)));
        assert_eq!(ids(&list), vec![3, 2, 1]);
        assert!(list.get(2).unwrap().completed);
        assert!(!list.get(3).unwrap().completed);
        assert!(!list.get(1).unwrap().completed);
    }

    #[test]
    fn replace_and_remove_report_unknown_ids() {
        let mut list = TodoList::new(vec![todo(1, false)]);
        let before = list.clone();
        assert!(!list.replace(todo(9, true)));
        assert!(!list.remove(9));
        assert_eq!(list, before);
    }

    #[test]
    fn remove_drops_matching_id() {
        let mut list = TodoList::new(vec![todo(2, false), todo(1, false)]);
        assert!(list.remove(2));
        assert_eq!(ids(&list), vec![1]);
    }

    #[test]
    fn views_follow_completed_flag() {
        let list = TodoList::new(vec![todo(3, true), todo(2, false), todo(1, true)]);
        let active: Vec<i64> = list.active().iter().map(|t| t.id).collect();
        let completed: Vec<i64> = list.completed().iter().map(|t| t.id).collect();
        assert_eq!(active, vec![2]);
        assert_eq!(completed, vec![3, 1]);
        assert_eq!(list.counts(), Counts { active: 1, completed: 2 });
    }

    proptest! {
        #[test]
        fn views_partition_the_list(flags in prop::collection::vec(any::<bool>(), 0..32)) {
            let list: TodoList = flags
                .iter()
                .enumerate()
                .map(|(i, &done)| todo(i as i64, done))
                .collect::<Vec<_>>()
                .into();
            let counts = list.counts();
            prop_assert_eq!(counts.active + counts.completed, list.len());
            prop_assert_eq!(list.active().len(), counts.active);
            prop_assert!(list.active().iter().all(|t| !t.completed));
            prop_assert!(list.completed().iter().all(|t| t.completed));
        }

        #[test]
        fn replacing_twice_with_flipped_flag_restores_list(
            flags in prop::collection::vec(any::<bool>(), 1..16),
            pick in any::<prop::sample::Index>(),
        ) {
            let original: TodoList = flags
                .iter()
                .enumerate()
                .map(|(i, &done)| todo(i as i64, done))
                .collect::<Vec<_>>()
                .into();
            let target = original.as_slice()[pick.index(original.len())].clone();

            let mut list = original.clone();
            let mut flipped = target.clone();
            flipped.completed = !flipped.completed;
            prop_assert!(list.replace(flipped));
            prop_assert!(list.replace(target));
            prop_assert_eq!(list, original);
        }
    }
}
