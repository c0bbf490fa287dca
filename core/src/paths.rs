//! Page paths used in redirects and links.

/// The list index page.
pub const LISTS: &str = "/lists";

/// The list creation form.
pub const NEW_LIST: &str = "/lists/new";

/// Detail page of the list at `list_index`.
#[must_use]
pub fn list(list_index: usize) -> String {
    format!("/lists/{list_index}")
}

/// Edit form of the list at `list_index`.
#[must_use]
pub fn edit_list(list_index: usize) -> String {
    format!("/lists/{list_index}/edit")
}

/// Delete endpoint of the list at `list_index`.
#[must_use]
pub fn destroy_list(list_index: usize) -> String {
    format!("/lists/{list_index}/destroy")
}

/// Todo collection of the list at `list_index`.
#[must_use]
pub fn todos(list_index: usize) -> String {
    format!("/lists/{list_index}/todos")
}

/// The todo at `todo_index` within the list at `list_index`.
#[must_use]
pub fn todo(list_index: usize, todo_index: usize) -> String {
    format!("/lists/{list_index}/todos/{todo_index}")
}

/// Delete endpoint of a todo.
#[must_use]
pub fn destroy_todo(list_index: usize, todo_index: usize) -> String {
    format!("/lists/{list_index}/todos/{todo_index}/destroy")
}

/// Complete-all endpoint of the list at `list_index`.
#[must_use]
pub fn complete_all(list_index: usize) -> String {
    format!("/lists/{list_index}/complete_all")
}
