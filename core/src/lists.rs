//! Reducer logic for the session's lists and todos.
//!
//! Every page operation validates its raw input against the current state,
//! mutates the collections in place and decides the response. Validation
//! failures leave the collections untouched and surface their message through
//! the session's error slot.

use crate::effect::Effect;
use crate::error::{ListError, Resource};
use crate::paths;
use crate::reducer::Reducer;
use crate::types::{ListAction, Responder, SessionState, Todo, TodoList, View};
use crate::validation::{parse_completed, validate_index, validate_list_name, validate_todo_name};

/// Whether a list may be renamed to the name it already has.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RenamePolicy {
    /// The list being renamed is left out of the uniqueness check
    #[default]
    ExcludeSelf,
    /// Every list takes part in the uniqueness check, including the one
    /// being renamed, so keeping the current name reports a duplicate
    Strict,
}

impl RenamePolicy {
    /// Parses `exclude-self` or `strict`.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "exclude-self" | "exclude_self" => Some(Self::ExcludeSelf),
            "strict" => Some(Self::Strict),
            _ => None,
        }
    }
}

/// Environment for the lists reducer
#[derive(Clone, Debug, Default)]
pub struct ListsEnvironment {
    /// Uniqueness rule applied when renaming
    pub rename_policy: RenamePolicy,
}

impl ListsEnvironment {
    /// Creates a new `ListsEnvironment`
    #[must_use]
    pub const fn new(rename_policy: RenamePolicy) -> Self {
        Self { rename_policy }
    }
}

/// Reducer for the session's lists
#[derive(Clone, Debug, Default)]
pub struct ListsReducer;

impl ListsReducer {
    /// Creates a new `ListsReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Records a recoverable error and answers with `effect`
    fn reject(state: &mut SessionState, error: &ListError, effect: Effect) -> Effect {
        tracing::debug!(%error, effect = effect.kind(), "Action rejected");
        state.set_error(error.to_string());
        effect
    }

    /// Missing list: back to the index page
    fn list_not_found(state: &mut SessionState, error: &ListError) -> Effect {
        Self::reject(state, error, Effect::redirect(paths::LISTS))
    }

    fn list_position(state: &SessionState, raw: &str) -> Result<usize, ListError> {
        validate_index(raw, state.lists.len(), Resource::List)
    }

    fn todo_position(list: &TodoList, raw: &str) -> Result<usize, ListError> {
        validate_index(raw, list.todos.len(), Resource::Todo)
    }

    fn view_list(state: &mut SessionState, list_index: &str) -> Effect {
        match Self::list_position(state, list_index) {
            Ok(list_index) => Effect::Render(View::List { list_index }),
            Err(error) => Self::list_not_found(state, &error),
        }
    }

    fn edit_list(state: &mut SessionState, list_index: &str) -> Effect {
        match Self::list_position(state, list_index) {
            Ok(list_index) => Effect::Render(View::EditList {
                list_index,
                name: state.lists[list_index].name.clone(),
            }),
            Err(error) => Self::list_not_found(state, &error),
        }
    }

    fn create_list(state: &mut SessionState, raw_name: &str) -> Effect {
        let name = raw_name.trim();

        if let Err(error) = validate_list_name(name, &state.lists) {
            return Self::reject(
                state,
                &error,
                Effect::Render(View::NewList {
                    name: name.to_string(),
                }),
            );
        }

        state.lists.push(TodoList::new(name.to_string()));
        state.set_success("The list has been created.");
        Effect::redirect(paths::LISTS)
    }

    fn rename_list(
        state: &mut SessionState,
        list_index: &str,
        raw_name: &str,
        policy: RenamePolicy,
    ) -> Effect {
        let list_index = match Self::list_position(state, list_index) {
            Ok(position) => position,
            Err(error) => return Self::list_not_found(state, &error),
        };
        let name = raw_name.trim();

        let checked = match policy {
            RenamePolicy::ExcludeSelf => validate_list_name(
                name,
                state
                    .lists
                    .iter()
                    .enumerate()
                    .filter(|(position, _)| *position != list_index)
                    .map(|(_, list)| list),
            ),
            RenamePolicy::Strict => validate_list_name(name, &state.lists),
        };

        if let Err(error) = checked {
            return Self::reject(
                state,
                &error,
                Effect::Render(View::EditList {
                    list_index,
                    name: name.to_string(),
                }),
            );
        }

        state.lists[list_index].name = name.to_string();
        state.set_success("The list has been updated.");
        Effect::redirect(paths::list(list_index))
    }

    fn delete_list(state: &mut SessionState, list_index: &str, responder: Responder) -> Effect {
        let list_index = match (Self::list_position(state, list_index), responder) {
            (Ok(position), _) => position,
            (Err(_), Responder::Programmatic) => return Effect::Status(404),
            (Err(error), Responder::Page) => return Self::list_not_found(state, &error),
        };

        state.lists.remove(list_index);

        match responder {
            Responder::Programmatic => Effect::Status(204),
            Responder::Page => {
                state.set_success("The list has been deleted.");
                Effect::redirect(paths::LISTS)
            }
        }
    }

    fn add_todo(state: &mut SessionState, list_index: &str, raw_name: &str) -> Effect {
        let list_index = match Self::list_position(state, list_index) {
            Ok(position) => position,
            Err(error) => return Self::list_not_found(state, &error),
        };
        let name = raw_name.trim();

        if let Err(error) = validate_todo_name(name) {
            return Self::reject(state, &error, Effect::Render(View::List { list_index }));
        }

        state.lists[list_index]
            .todos
            .push(Todo::new(name.to_string()));
        state.set_success("The todo was added.");
        Effect::redirect(paths::list(list_index))
    }

    fn toggle_todo(
        state: &mut SessionState,
        list_index: &str,
        todo_index: &str,
        completed: &str,
    ) -> Result<Effect, ListError> {
        let list_index = match Self::list_position(state, list_index) {
            Ok(position) => position,
            Err(error) => return Ok(Self::list_not_found(state, &error)),
        };
        let todo_index = match Self::todo_position(&state.lists[list_index], todo_index) {
            Ok(position) => position,
            Err(error) => {
                return Ok(Self::reject(
                    state,
                    &error,
                    Effect::redirect(paths::list(list_index)),
                ));
            }
        };

        let completed = parse_completed(completed)?;

        state.lists[list_index].todos[todo_index].completed = completed;
        state.set_success("The todo has been updated.");
        Ok(Effect::redirect(paths::list(list_index)))
    }

    fn complete_all(state: &mut SessionState, list_index: &str) -> Effect {
        let list_index = match Self::list_position(state, list_index) {
            Ok(position) => position,
            Err(error) => return Self::list_not_found(state, &error),
        };

        for todo in &mut state.lists[list_index].todos {
            todo.completed = true;
        }
        state.set_success("All todos have been completed.");
        Effect::redirect(paths::list(list_index))
    }

    fn delete_todo(
        state: &mut SessionState,
        list_index: &str,
        todo_index: &str,
        responder: Responder,
    ) -> Effect {
        let list_index = match (Self::list_position(state, list_index), responder) {
            (Ok(position), _) => position,
            (Err(_), Responder::Programmatic) => return Effect::Status(404),
            (Err(error), Responder::Page) => return Self::list_not_found(state, &error),
        };
        let todo_index = match (
            Self::todo_position(&state.lists[list_index], todo_index),
            responder,
        ) {
            (Ok(position), _) => position,
            (Err(_), Responder::Programmatic) => return Effect::Status(404),
            (Err(error), Responder::Page) => {
                return Self::reject(state, &error, Effect::redirect(paths::list(list_index)));
            }
        };

        state.lists[list_index].todos.remove(todo_index);

        match responder {
            Responder::Programmatic => Effect::Status(204),
            Responder::Page => {
                state.set_success("The todo has been deleted.");
                Effect::redirect(paths::list(list_index))
            }
        }
    }
}

impl Reducer for ListsReducer {
    type State = SessionState;
    type Action = ListAction;
    type Environment = ListsEnvironment;
    type Error = ListError;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> Result<Effect, Self::Error> {
        let effect = match action {
            ListAction::ListLists => Effect::Render(View::Lists),
            ListAction::NewList => Effect::Render(View::NewList {
                name: String::new(),
            }),
            ListAction::ViewList { list_index } => Self::view_list(state, &list_index),
            ListAction::EditList { list_index } => Self::edit_list(state, &list_index),
            ListAction::CreateList { name } => Self::create_list(state, &name),
            ListAction::RenameList { list_index, name } => {
                Self::rename_list(state, &list_index, &name, env.rename_policy)
            }
            ListAction::DeleteList {
                list_index,
                responder,
            } => Self::delete_list(state, &list_index, responder),
            ListAction::AddTodo { list_index, name } => Self::add_todo(state, &list_index, &name),
            ListAction::ToggleTodo {
                list_index,
                todo_index,
                completed,
            } => Self::toggle_todo(state, &list_index, &todo_index, &completed)?,
            ListAction::CompleteAll { list_index } => Self::complete_all(state, &list_index),
            ListAction::DeleteTodo {
                list_index,
                todo_index,
                responder,
            } => Self::delete_todo(state, &list_index, &todo_index, responder),
        };

        Ok(effect)
    }
}
