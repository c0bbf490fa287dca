//! Domain types for the todo lists application.
//!
//! Lists and todos carry no identifiers of their own; they are addressed by
//! their position in the owning collection.

use serde::{Deserialize, Serialize};

/// A single todo item
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Name of the todo
    pub name: String,
    /// Whether the todo is completed
    pub completed: bool,
}

impl Todo {
    /// Creates a new, uncompleted todo
    #[must_use]
    pub const fn new(name: String) -> Self {
        Self {
            name,
            completed: false,
        }
    }
}

/// A named list of todos
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoList {
    /// Name of the list, unique within the session
    pub name: String,
    /// Todos in insertion order
    pub todos: Vec<Todo>,
}

impl TodoList {
    /// Creates a new list with no todos
    #[must_use]
    pub const fn new(name: String) -> Self {
        Self {
            name,
            todos: Vec::new(),
        }
    }

    /// Adds a todo to the list (builder style, mostly for fixtures)
    #[must_use]
    pub fn with_todo(mut self, name: impl Into<String>, completed: bool) -> Self {
        self.todos.push(Todo {
            name: name.into(),
            completed,
        });
        self
    }
}

/// Messages consumed from the session by a rendered page
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Messages {
    /// Error message, if any
    pub error: Option<String>,
    /// Success message, if any
    pub success: Option<String>,
}

/// Per-browser session state
///
/// Missing fields deserialize to their empty values, so a fresh session and
/// a session written by an older build both load as valid state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    /// All lists in creation order
    #[serde(default)]
    pub lists: Vec<TodoList>,
    /// Read-once error message slot
    #[serde(default)]
    pub error: Option<String>,
    /// Read-once success message slot
    #[serde(default)]
    pub success: Option<String>,
}

impl SessionState {
    /// Creates an empty session state
    #[must_use]
    pub const fn new() -> Self {
        Self {
            lists: Vec::new(),
            error: None,
            success: None,
        }
    }

    /// Creates a session state holding the given lists
    #[must_use]
    pub const fn with_lists(lists: Vec<TodoList>) -> Self {
        Self {
            lists,
            error: None,
            success: None,
        }
    }

    /// Sets the error message slot
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    /// Sets the success message slot
    pub fn set_success(&mut self, message: impl Into<String>) {
        self.success = Some(message.into());
    }

    /// Takes both message slots, leaving them empty
    pub fn take_messages(&mut self) -> Messages {
        Messages {
            error: self.error.take(),
            success: self.success.take(),
        }
    }
}

/// How the client wants a delete answered
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Responder {
    /// A browser form submission: message plus redirect
    #[default]
    Page,
    /// A scripted request: bare status, no message
    Programmatic,
}

/// Actions, one per page operation
///
/// Index and flag fields are the raw request strings; the reducer validates
/// them against the state at reduce time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListAction {
    /// Show every list
    ListLists,

    /// Show the list creation form
    NewList,

    /// Show one list with its todos
    ViewList {
        /// Raw list index
        list_index: String,
    },

    /// Show the rename form for a list
    EditList {
        /// Raw list index
        list_index: String,
    },

    /// Create a list
    CreateList {
        /// Submitted name, untrimmed
        name: String,
    },

    /// Rename a list
    RenameList {
        /// Raw list index
        list_index: String,
        /// Submitted name, untrimmed
        name: String,
    },

    /// Delete a list
    DeleteList {
        /// Raw list index
        list_index: String,
        /// How to answer
        responder: Responder,
    },

    /// Append a todo to a list
    AddTodo {
        /// Raw list index
        list_index: String,
        /// Submitted todo name, untrimmed
        name: String,
    },

    /// Set a todo's completed flag
    ToggleTodo {
        /// Raw list index
        list_index: String,
        /// Raw todo index
        todo_index: String,
        /// Must be `"true"` or `"false"`
        completed: String,
    },

    /// Mark every todo in a list completed
    CompleteAll {
        /// Raw list index
        list_index: String,
    },

    /// Delete a todo
    DeleteTodo {
        /// Raw list index
        list_index: String,
        /// Raw todo index
        todo_index: String,
        /// How to answer
        responder: Responder,
    },
}

impl ListAction {
    /// Operation name for logs and metrics
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::ListLists => "list_lists",
            Self::NewList => "new_list",
            Self::ViewList { .. } => "view_list",
            Self::EditList { .. } => "edit_list",
            Self::CreateList { .. } => "create_list",
            Self::RenameList { .. } => "rename_list",
            Self::DeleteList { .. } => "delete_list",
            Self::AddTodo { .. } => "add_todo",
            Self::ToggleTodo { .. } => "toggle_todo",
            Self::CompleteAll { .. } => "complete_all",
            Self::DeleteTodo { .. } => "delete_todo",
        }
    }
}

/// Pages the shell can render
///
/// Views refer to lists by position; the renderer reads the lists from the
/// state it was handed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum View {
    /// All lists
    Lists,

    /// List creation form
    NewList {
        /// Name to prefill
        name: String,
    },

    /// One list with its todos
    List {
        /// Position of the list
        list_index: usize,
    },

    /// Rename form
    EditList {
        /// Position of the list
        list_index: usize,
        /// Name to prefill
        name: String,
    },
}
