//! Derived values for rendering. Nothing here is stored in the session.

use crate::types::{Todo, TodoList};

/// Whether every todo is completed. Vacuously true for no todos.
#[must_use]
pub fn all_completed(todos: &[Todo]) -> bool {
    todos.iter().all(|todo| todo.completed)
}

/// Whether at least one todo is still open. False for no todos.
#[must_use]
pub fn any_uncompleted(todos: &[Todo]) -> bool {
    todos.iter().any(|todo| !todo.completed)
}

/// Number of todos not yet completed.
#[must_use]
pub fn uncompleted_count(todos: &[Todo]) -> usize {
    todos.iter().filter(|todo| !todo.completed).count()
}

/// A list counts as done once it has todos and all of them are completed.
#[must_use]
pub fn list_is_complete(list: &TodoList) -> bool {
    !list.todos.is_empty() && all_completed(&list.todos)
}

/// CSS class for a list entry.
#[must_use]
pub fn list_class(list: &TodoList) -> &'static str {
    if list_is_complete(list) { "complete" } else { "" }
}

/// "remaining/total" summary shown next to a list name.
#[must_use]
pub fn todos_remaining_summary(list: &TodoList) -> String {
    format!("{}/{}", uncompleted_count(&list.todos), list.todos.len())
}

/// Lists in display order, each paired with its stored position.
///
/// Unfinished lists come first; relative order is otherwise kept, so links
/// built from the paired index still address the stored list.
#[must_use]
pub fn sorted_lists(lists: &[TodoList]) -> Vec<(usize, &TodoList)> {
    let mut ordered: Vec<(usize, &TodoList)> = lists.iter().enumerate().collect();
    ordered.sort_by_key(|(_, list)| list_is_complete(list));
    ordered
}

/// Todos in display order, each paired with its stored position.
///
/// Open todos come first; relative order is otherwise kept.
#[must_use]
pub fn sorted_todos(todos: &[Todo]) -> Vec<(usize, &Todo)> {
    let mut ordered: Vec<(usize, &Todo)> = todos.iter().enumerate().collect();
    ordered.sort_by_key(|(_, todo)| todo.completed);
    ordered
}
