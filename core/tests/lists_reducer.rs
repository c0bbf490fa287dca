//! Behavior of the lists reducer, one section per operation.

#![allow(clippy::unwrap_used)]

use proptest::prelude::*;
use todo_lists_core::reducer::Reducer;
use todo_lists_core::{
    Effect, ListAction, ListError, ListsEnvironment, ListsReducer, NameKind, RenamePolicy,
    Resource, Responder, SessionState, View,
};
use todo_lists_testing::{
    ReducerTest, assertions,
    fixtures::{self, three_lists},
    properties,
};

fn env() -> ListsEnvironment {
    ListsEnvironment::default()
}

fn test() -> ReducerTest<ListsReducer> {
    ReducerTest::new(ListsReducer::new()).with_env(env())
}

fn names(state: &SessionState) -> Vec<&str> {
    state.lists.iter().map(|list| list.name.as_str()).collect()
}

// ========== Pages ==========

#[test]
fn list_lists_renders_index() {
    test()
        .given_state(three_lists())
        .when_action(ListAction::ListLists)
        .then_state(|state| {
            assert_eq!(names(state), ["Groceries", "Work", "Chores"]);
            assert!(state.error.is_none());
        })
        .then_effect(|effect| assertions::assert_render(effect, &View::Lists))
        .run();
}

#[test]
fn new_list_renders_empty_form() {
    test()
        .given_state(SessionState::new())
        .when_action(ListAction::NewList)
        .then_effect(|effect| {
            assertions::assert_render(
                effect,
                &View::NewList {
                    name: String::new(),
                },
            );
        })
        .run();
}

#[test]
fn view_list_renders_detail() {
    test()
        .given_state(three_lists())
        .when_action(ListAction::ViewList {
            list_index: "1".to_string(),
        })
        .then_effect(|effect| assertions::assert_render(effect, &View::List { list_index: 1 }))
        .run();
}

#[test]
fn view_missing_list_redirects_with_error() {
    test()
        .given_state(three_lists())
        .when_action(ListAction::ViewList {
            list_index: "3".to_string(),
        })
        .then_state(|state| {
            assert_eq!(
                state.error.as_deref(),
                Some("The specified list was not found.")
            );
        })
        .then_effect(|effect| assertions::assert_redirect(effect, "/lists"))
        .run();
}

#[test]
fn edit_list_prefills_current_name() {
    test()
        .given_state(three_lists())
        .when_action(ListAction::EditList {
            list_index: "2".to_string(),
        })
        .then_effect(|effect| {
            assertions::assert_render(
                effect,
                &View::EditList {
                    list_index: 2,
                    name: "Chores".to_string(),
                },
            );
        })
        .run();
}

// ========== CreateList ==========

#[test]
fn create_list_on_empty_session() {
    test()
        .given_state(SessionState::new())
        .when_action(ListAction::CreateList {
            name: "Groceries".to_string(),
        })
        .then_state(|state| {
            assert_eq!(state.lists, vec![fixtures::list("Groceries", &[])]);
            assert_eq!(state.success.as_deref(), Some("The list has been created."));
        })
        .then_effect(|effect| assertions::assert_redirect(effect, "/lists"))
        .run();
}

#[test]
fn create_list_trims_name() {
    test()
        .given_state(SessionState::new())
        .when_action(ListAction::CreateList {
            name: "  Weekend \t".to_string(),
        })
        .then_state(|state| assert_eq!(names(state), ["Weekend"]))
        .run();
}

#[test]
fn create_list_rejects_duplicate_and_keeps_attempt() {
    test()
        .given_state(three_lists())
        .when_action(ListAction::CreateList {
            name: " Work ".to_string(),
        })
        .then_state(|state| {
            assert_eq!(state.lists, three_lists().lists);
            assert_eq!(state.error.as_deref(), Some("List name must be unique."));
            assert!(state.success.is_none());
        })
        .then_effect(|effect| {
            assertions::assert_render(
                effect,
                &View::NewList {
                    name: "Work".to_string(),
                },
            );
        })
        .run();
}

#[test]
fn create_list_rejects_blank_name() {
    test()
        .given_state(SessionState::new())
        .when_action(ListAction::CreateList {
            name: "   ".to_string(),
        })
        .then_state(|state| {
            assert!(state.lists.is_empty());
            assert_eq!(
                state.error.as_deref(),
                Some("List name must be between 1 and 100 characters.")
            );
        })
        .run();
}

// ========== RenameList ==========

#[test]
fn rename_list_updates_in_place() {
    test()
        .given_state(three_lists())
        .when_action(ListAction::RenameList {
            list_index: "1".to_string(),
            name: "Office".to_string(),
        })
        .then_state(|state| {
            assert_eq!(names(state), ["Groceries", "Office", "Chores"]);
            assert_eq!(state.lists[1].todos.len(), 2);
            assert_eq!(state.success.as_deref(), Some("The list has been updated."));
        })
        .then_effect(|effect| assertions::assert_redirect(effect, "/lists/1"))
        .run();
}

#[test]
fn rename_to_other_lists_name_is_duplicate() {
    test()
        .given_state(three_lists())
        .when_action(ListAction::RenameList {
            list_index: "1".to_string(),
            name: "Chores".to_string(),
        })
        .then_state(|state| {
            assert_eq!(names(state), ["Groceries", "Work", "Chores"]);
            assert_eq!(state.error.as_deref(), Some("List name must be unique."));
        })
        .then_effect(|effect| {
            assertions::assert_render(
                effect,
                &View::EditList {
                    list_index: 1,
                    name: "Chores".to_string(),
                },
            );
        })
        .run();
}

#[test]
fn rename_to_own_name_succeeds_by_default() {
    test()
        .given_state(three_lists())
        .when_action(ListAction::RenameList {
            list_index: "0".to_string(),
            name: "Groceries".to_string(),
        })
        .then_state(|state| {
            assert!(state.error.is_none());
            assert_eq!(names(state)[0], "Groceries");
        })
        .then_effect(|effect| assertions::assert_redirect(effect, "/lists/0"))
        .run();
}

#[test]
fn rename_to_own_name_is_duplicate_under_strict_policy() {
    ReducerTest::new(ListsReducer::new())
        .with_env(ListsEnvironment::new(RenamePolicy::Strict))
        .given_state(three_lists())
        .when_action(ListAction::RenameList {
            list_index: "0".to_string(),
            name: "Groceries".to_string(),
        })
        .then_state(|state| {
            assert_eq!(state.error.as_deref(), Some("List name must be unique."));
        })
        .then_effect(|effect| {
            assertions::assert_render(
                effect,
                &View::EditList {
                    list_index: 0,
                    name: "Groceries".to_string(),
                },
            );
        })
        .run();
}

#[test]
fn rename_missing_list() {
    test()
        .given_state(three_lists())
        .when_action(ListAction::RenameList {
            list_index: "abc".to_string(),
            name: "Whatever".to_string(),
        })
        .then_state(|state| {
            assert_eq!(state.lists, three_lists().lists);
            assert_eq!(
                state.error.as_deref(),
                Some("The specified list was not found.")
            );
        })
        .then_effect(|effect| assertions::assert_redirect(effect, "/lists"))
        .run();
}

// ========== DeleteList ==========

#[test]
fn delete_list_shifts_later_indices() {
    test()
        .given_state(three_lists())
        .when_action(ListAction::DeleteList {
            list_index: "0".to_string(),
            responder: Responder::Page,
        })
        .then_state(|state| {
            assert_eq!(names(state), ["Work", "Chores"]);
            assert_eq!(state.success.as_deref(), Some("The list has been deleted."));
        })
        .then_effect(|effect| assertions::assert_redirect(effect, "/lists"))
        .run();
}

#[test]
fn delete_list_programmatic_answers_with_status_only() {
    test()
        .given_state(three_lists())
        .when_action(ListAction::DeleteList {
            list_index: "2".to_string(),
            responder: Responder::Programmatic,
        })
        .then_state(|state| {
            assert_eq!(names(state), ["Groceries", "Work"]);
            assert!(state.success.is_none());
        })
        .then_effect(|effect| assertions::assert_status(effect, 204))
        .run();
}

#[test]
fn delete_missing_list() {
    test()
        .given_state(three_lists())
        .when_action(ListAction::DeleteList {
            list_index: "-1".to_string(),
            responder: Responder::Programmatic,
        })
        .then_state(|state| {
            assert_eq!(state.lists.len(), 3);
            assert!(state.error.is_none());
        })
        .then_effect(|effect| assertions::assert_status(effect, 404))
        .run();

    test()
        .given_state(three_lists())
        .when_action(ListAction::DeleteList {
            list_index: "3".to_string(),
            responder: Responder::Page,
        })
        .then_state(|state| assert_eq!(state.lists.len(), 3))
        .then_effect(|effect| assertions::assert_redirect(effect, "/lists"))
        .run();
}

// ========== AddTodo ==========

#[test]
fn add_todo_appends_uncompleted() {
    test()
        .given_state(three_lists())
        .when_action(ListAction::AddTodo {
            list_index: "2".to_string(),
            name: " Vacuum ".to_string(),
        })
        .then_state(|state| {
            assert_eq!(state.lists[2], fixtures::list("Chores", &[("Vacuum", false)]));
            assert_eq!(state.success.as_deref(), Some("The todo was added."));
        })
        .then_effect(|effect| assertions::assert_redirect(effect, "/lists/2"))
        .run();
}

#[test]
fn add_todo_rejects_long_name() {
    test()
        .given_state(three_lists())
        .when_action(ListAction::AddTodo {
            list_index: "0".to_string(),
            name: "x".repeat(101),
        })
        .then_state(|state| {
            assert_eq!(state.lists[0].todos.len(), 2);
            assert_eq!(
                state.error.as_deref(),
                Some("Todo must be between 1 and 100 characters.")
            );
        })
        .then_effect(|effect| assertions::assert_render(effect, &View::List { list_index: 0 }))
        .run();
}

#[test]
fn add_todo_to_missing_list() {
    test()
        .given_state(SessionState::new())
        .when_action(ListAction::AddTodo {
            list_index: "0".to_string(),
            name: "Milk".to_string(),
        })
        .then_state(|state| assert!(state.lists.is_empty()))
        .then_effect(|effect| assertions::assert_redirect(effect, "/lists"))
        .run();
}

#[test]
fn add_then_delete_restores_todos() {
    test()
        .given_state(three_lists())
        .when_action(ListAction::AddTodo {
            list_index: "0".to_string(),
            name: "Bread".to_string(),
        })
        .when_action(ListAction::DeleteTodo {
            list_index: "0".to_string(),
            todo_index: "2".to_string(),
            responder: Responder::Page,
        })
        .then_state(|state| assert_eq!(state.lists, three_lists().lists))
        .then_effect(|effect| assertions::assert_redirect(effect, "/lists/0"))
        .run();
}

// ========== ToggleTodo ==========

#[test]
fn toggle_todo_sets_flag() {
    test()
        .given_state(three_lists())
        .when_action(ListAction::ToggleTodo {
            list_index: "0".to_string(),
            todo_index: "0".to_string(),
            completed: "true".to_string(),
        })
        .then_state(|state| {
            assert!(state.lists[0].todos[0].completed);
            assert!(!state.lists[0].todos[1].completed);
            assert_eq!(state.success.as_deref(), Some("The todo has been updated."));
        })
        .then_effect(|effect| assertions::assert_redirect(effect, "/lists/0"))
        .run();

    test()
        .given_state(three_lists())
        .when_action(ListAction::ToggleTodo {
            list_index: "1".to_string(),
            todo_index: "0".to_string(),
            completed: "false".to_string(),
        })
        .then_state(|state| assert!(!state.lists[1].todos[0].completed))
        .run();
}

#[test]
fn toggle_todo_with_malformed_token_fails() {
    test()
        .given_state(three_lists())
        .when_action(ListAction::ToggleTodo {
            list_index: "0".to_string(),
            todo_index: "0".to_string(),
            completed: "maybe".to_string(),
        })
        .then_state(|state| assert_eq!(state, &three_lists()))
        .then_error(|error| {
            assert_eq!(error, &ListError::MalformedInput("maybe".to_string()));
        })
        .run();
}

#[test]
fn toggle_todo_validates_indices() {
    test()
        .given_state(three_lists())
        .when_action(ListAction::ToggleTodo {
            list_index: "9".to_string(),
            todo_index: "0".to_string(),
            completed: "true".to_string(),
        })
        .then_state(|state| {
            assert_eq!(
                state.error.as_deref(),
                Some("The specified list was not found.")
            );
        })
        .then_effect(|effect| assertions::assert_redirect(effect, "/lists"))
        .run();

    test()
        .given_state(three_lists())
        .when_action(ListAction::ToggleTodo {
            list_index: "2".to_string(),
            todo_index: "0".to_string(),
            completed: "true".to_string(),
        })
        .then_state(|state| {
            assert_eq!(
                state.error.as_deref(),
                Some("The specified todo was not found.")
            );
        })
        .then_effect(|effect| assertions::assert_redirect(effect, "/lists/2"))
        .run();
}

// ========== CompleteAll ==========

#[test]
fn complete_all_marks_every_todo() {
    test()
        .given_state(three_lists())
        .when_action(ListAction::CompleteAll {
            list_index: "1".to_string(),
        })
        .then_state(|state| {
            assert!(state.lists[1].todos.iter().all(|todo| todo.completed));
            assert!(todo_lists_core::view::all_completed(&state.lists[1].todos));
            assert!(!state.lists[0].todos[0].completed);
            assert_eq!(
                state.success.as_deref(),
                Some("All todos have been completed.")
            );
        })
        .then_effect(|effect| assertions::assert_redirect(effect, "/lists/1"))
        .run();
}

#[test]
fn complete_all_on_partly_done_list() {
    todo_lists_testing::init_test_tracing();

    test()
        .given_state(fixtures::single_list("Work", &[("Draft", false), ("Send", true)]))
        .when_action(ListAction::CompleteAll {
            list_index: "0".to_string(),
        })
        .then_state(|state| {
            assert_eq!(
                state.lists[0],
                fixtures::list("Work", &[("Draft", true), ("Send", true)])
            );
        })
        .then_effect(|effect| assertions::assert_redirect(effect, "/lists/0"))
        .run();
}

#[test]
fn complete_all_on_missing_list() {
    test()
        .given_state(three_lists())
        .when_action(ListAction::CompleteAll {
            list_index: "1x".to_string(),
        })
        .then_state(|state| assert_eq!(state.lists, three_lists().lists))
        .then_effect(|effect| assertions::assert_redirect(effect, "/lists"))
        .run();
}

// ========== DeleteTodo ==========

#[test]
fn delete_todo_shifts_later_indices() {
    test()
        .given_state(three_lists())
        .when_action(ListAction::DeleteTodo {
            list_index: "0".to_string(),
            todo_index: "0".to_string(),
            responder: Responder::Page,
        })
        .then_state(|state| {
            assert_eq!(state.lists[0], fixtures::list("Groceries", &[("Eggs", false)]));
            assert_eq!(state.success.as_deref(), Some("The todo has been deleted."));
        })
        .then_effect(|effect| assertions::assert_redirect(effect, "/lists/0"))
        .run();
}

#[test]
fn delete_todo_programmatic() {
    test()
        .given_state(three_lists())
        .when_action(ListAction::DeleteTodo {
            list_index: "1".to_string(),
            todo_index: "1".to_string(),
            responder: Responder::Programmatic,
        })
        .then_state(|state| {
            assert_eq!(state.lists[1].todos.len(), 1);
            assert!(state.success.is_none());
        })
        .then_effect(|effect| assertions::assert_status(effect, 204))
        .run();

    test()
        .given_state(three_lists())
        .when_action(ListAction::DeleteTodo {
            list_index: "1".to_string(),
            todo_index: "2".to_string(),
            responder: Responder::Programmatic,
        })
        .then_state(|state| assert_eq!(state.lists[1].todos.len(), 2))
        .then_effect(|effect| assertions::assert_status(effect, 404))
        .run();
}

#[test]
fn delete_missing_todo_on_page() {
    test()
        .given_state(three_lists())
        .when_action(ListAction::DeleteTodo {
            list_index: "0".to_string(),
            todo_index: "5".to_string(),
            responder: Responder::Page,
        })
        .then_state(|state| {
            assert_eq!(state.lists[0].todos.len(), 2);
            assert_eq!(
                state.error.as_deref(),
                Some("The specified todo was not found.")
            );
        })
        .then_effect(|effect| assertions::assert_redirect(effect, "/lists/0"))
        .run();
}

// ========== Properties ==========

fn reduce(state: &mut SessionState, action: ListAction) -> Result<Effect, ListError> {
    ListsReducer::new().reduce(state, action, &env())
}

proptest! {
    #[test]
    fn valid_names_create_one_list(name in properties::valid_name()) {
        let mut state = SessionState::new();
        let effect = reduce(&mut state, ListAction::CreateList { name: name.clone() }).unwrap();
        prop_assert_eq!(effect, Effect::redirect("/lists"));
        prop_assert_eq!(state.lists.len(), 1);
        prop_assert_eq!(&state.lists[0].name, &name);
    }

    #[test]
    fn overlong_or_blank_names_are_rejected(
        name in prop_oneof![properties::overlong_name(), properties::blank_name()]
    ) {
        let mut state = three_lists();
        reduce(&mut state, ListAction::CreateList { name }).unwrap();
        prop_assert_eq!(&state.lists, &three_lists().lists);
        prop_assert_eq!(
            state.error,
            Some(ListError::InvalidLength(NameKind::List).to_string())
        );
    }

    #[test]
    fn malformed_indices_never_mutate(raw in properties::malformed_index()) {
        let mut state = three_lists();
        let effect = reduce(
            &mut state,
            ListAction::CompleteAll { list_index: raw },
        )
        .unwrap();
        prop_assert_eq!(effect, Effect::redirect("/lists"));
        prop_assert_eq!(&state.lists, &three_lists().lists);
        prop_assert_eq!(
            state.error,
            Some(ListError::NotFound(Resource::List).to_string())
        );
    }

    #[test]
    fn list_names_stay_unique(attempts in prop::collection::vec("[AB]{1,2}", 1..20)) {
        let mut state = SessionState::new();
        for name in attempts {
            reduce(&mut state, ListAction::CreateList { name }).unwrap();
        }
        let mut seen = names(&state);
        seen.sort_unstable();
        seen.dedup();
        prop_assert_eq!(seen.len(), state.lists.len());
    }
}
