//! HTML rendering.
//!
//! Pages are plain strings built from the session's lists. Every piece of
//! user-supplied text goes through [`escape`].

use axum::http::StatusCode;
use todo_lists_core::paths;
use todo_lists_core::view::{
    any_uncompleted, list_class, sorted_lists, sorted_todos, todos_remaining_summary,
};
use todo_lists_core::{Messages, TodoList, View};

/// Escapes text for use in element content and quoted attributes.
#[must_use]
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Renders `view` against `lists`, showing `messages` in the flash area.
///
/// A view pointing past the end of `lists` falls back to the index page.
#[must_use]
pub fn render(view: &View, lists: &[TodoList], messages: &Messages) -> String {
    let (title, body) = match view {
        View::Lists => ("Todo Lists".to_string(), lists_page(lists)),
        View::NewList { name } => ("New List".to_string(), new_list_page(name)),
        View::List { list_index } => match lists.get(*list_index) {
            Some(list) => (list.name.clone(), list_page(*list_index, list)),
            None => ("Todo Lists".to_string(), lists_page(lists)),
        },
        View::EditList { list_index, name } => match lists.get(*list_index) {
            Some(list) => (
                format!("Edit {}", list.name),
                edit_list_page(*list_index, list, name),
            ),
            None => ("Todo Lists".to_string(), lists_page(lists)),
        },
    };

    layout(&title, messages, &body)
}

/// Page shown for failed requests.
#[must_use]
pub fn error_page(status: StatusCode, code: &str, message: &str) -> String {
    let body = format!(
        "<section id=\"error\">\n\
         <h2>{status}</h2>\n\
         <p class=\"message\">{message}</p>\n\
         <p class=\"code\">{code}</p>\n\
         <a href=\"{lists}\">All Lists</a>\n\
         </section>\n",
        status = escape(&status.to_string()),
        message = escape(message),
        code = escape(code),
        lists = paths::LISTS,
    );
    layout("Error", &Messages::default(), &body)
}

fn layout(title: &str, messages: &Messages, body: &str) -> String {
    let mut flash = String::new();
    if let Some(error) = &messages.error {
        flash.push_str(&format!(
            "<div class=\"flash error\"><p>{}</p></div>\n",
            escape(error)
        ));
    }
    if let Some(success) = &messages.success {
        flash.push_str(&format!(
            "<div class=\"flash success\"><p>{}</p></div>\n",
            escape(success)
        ));
    }

    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>{title}</title>\n\
         </head>\n\
         <body>\n\
         <header><h1><a href=\"{lists}\">Todo Tracker</a></h1></header>\n\
         <main>\n\
         {flash}{body}\
         </main>\n\
         </body>\n\
         </html>\n",
        title = escape(title),
        lists = paths::LISTS,
    )
}

fn lists_page(lists: &[TodoList]) -> String {
    let mut items = String::new();
    for (index, list) in sorted_lists(lists) {
        items.push_str(&format!(
            "<li class=\"{class}\">\n\
             <a href=\"{href}\">\n\
             <h2>{name}</h2>\n\
             <p>{summary}</p>\n\
             </a>\n\
             </li>\n",
            class = list_class(list),
            href = paths::list(index),
            name = escape(&list.name),
            summary = todos_remaining_summary(list),
        ));
    }

    format!(
        "<ul id=\"lists\">\n{items}</ul>\n\
         <a class=\"add\" href=\"{new}\">New List</a>\n",
        new = paths::NEW_LIST,
    )
}

fn new_list_page(name: &str) -> String {
    format!(
        "<form action=\"{action}\" method=\"post\">\n\
         <dl>\n\
         <dt><label for=\"list_name\">Enter the name for your new list:</label></dt>\n\
         <dd><input name=\"list_name\" id=\"list_name\" placeholder=\"List Name\" type=\"text\" value=\"{name}\"></dd>\n\
         </dl>\n\
         <fieldset class=\"actions\">\n\
         <input type=\"submit\" value=\"Save\">\n\
         <a href=\"{cancel}\">Cancel</a>\n\
         </fieldset>\n\
         </form>\n",
        action = paths::LISTS,
        name = escape(name),
        cancel = paths::LISTS,
    )
}

fn list_page(list_index: usize, list: &TodoList) -> String {
    let complete_all = if any_uncompleted(&list.todos) {
        format!(
            "<li><form action=\"{}\" method=\"post\">\
             <button class=\"check\" type=\"submit\">Complete All</button>\
             </form></li>\n",
            paths::complete_all(list_index),
        )
    } else {
        String::new()
    };

    let mut todos = String::new();
    for (todo_index, todo) in sorted_todos(&list.todos) {
        todos.push_str(&format!(
            "<li class=\"{class}\">\n\
             <form action=\"{toggle}\" method=\"post\" class=\"check\">\n\
             <input type=\"hidden\" name=\"completed\" value=\"{next}\">\n\
             <button type=\"submit\">Complete</button>\n\
             </form>\n\
             <h3>{name}</h3>\n\
             <form action=\"{destroy}\" method=\"post\" class=\"delete\">\n\
             <button type=\"submit\">Delete</button>\n\
             </form>\n\
             </li>\n",
            class = if todo.completed { "complete" } else { "" },
            toggle = paths::todo(list_index, todo_index),
            next = !todo.completed,
            name = escape(&todo.name),
            destroy = paths::destroy_todo(list_index, todo_index),
        ));
    }

    format!(
        "<section id=\"todos\" class=\"{class}\">\n\
         <header>\n\
         <h2>{name}</h2>\n\
         <ul>\n\
         {complete_all}\
         <li><a class=\"edit\" href=\"{edit}\">Edit List</a></li>\n\
         </ul>\n\
         </header>\n\
         <ul>\n{todos}</ul>\n\
         </section>\n\
         <form action=\"{add}\" method=\"post\">\n\
         <dl>\n\
         <dt><label for=\"todo\">Enter a new todo item:</label></dt>\n\
         <dd><input name=\"todo\" id=\"todo\" placeholder=\"Something to do\" type=\"text\"></dd>\n\
         </dl>\n\
         <fieldset class=\"actions\">\n\
         <input type=\"submit\" value=\"Add\">\n\
         </fieldset>\n\
         </form>\n\
         <a class=\"list\" href=\"{lists}\">All Lists</a>\n",
        class = list_class(list),
        name = escape(&list.name),
        edit = paths::edit_list(list_index),
        add = paths::todos(list_index),
        lists = paths::LISTS,
    )
}

fn edit_list_page(list_index: usize, list: &TodoList, name: &str) -> String {
    format!(
        "<section id=\"edit\">\n\
         <h2>Editing '{current}'</h2>\n\
         <form action=\"{destroy}\" method=\"post\" class=\"delete\">\n\
         <button type=\"submit\">Delete List</button>\n\
         </form>\n\
         <form action=\"{action}\" method=\"post\">\n\
         <dl>\n\
         <dt><label for=\"list_name\">Enter the new name for the list:</label></dt>\n\
         <dd><input name=\"list_name\" id=\"list_name\" placeholder=\"List Name\" type=\"text\" value=\"{name}\"></dd>\n\
         </dl>\n\
         <fieldset class=\"actions\">\n\
         <input type=\"submit\" value=\"Save\">\n\
         <a href=\"{cancel}\">Cancel</a>\n\
         </fieldset>\n\
         </form>\n\
         </section>\n",
        current = escape(&list.name),
        destroy = paths::destroy_list(list_index),
        action = paths::list(list_index),
        name = escape(name),
        cancel = paths::list(list_index),
    )
}
