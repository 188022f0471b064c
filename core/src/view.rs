//! Presentation-shell state for one session.
//!
//! # Design
//! `TodoView` follows the same host-does-IO split as [`TodoClient`]: each user
//! action is a `begin_*` call that returns the request to execute and a
//! `complete_*` call that takes the response. Nothing is applied optimistically.
//! A confirmed result is reconciled into the [`TodoList`]; a failure leaves the
//! list as it was, is logged, and is kept as a transient [`Notice`] until the
//! shell dismisses it.

use std::fmt;

use tracing::{debug, warn};

use crate::client::TodoClient;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::list::TodoList;
use crate::types::{CreateTodo, Todo};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Load,
    Create,
    Toggle,
    Delete,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self {
            Action::Load => "load todos",
            Action::Create => "create todo",
            Action::Toggle => "toggle todo",
            Action::Delete => "delete todo",
        };
        f.write_str(verb)
    }
}

/// A failure the shell should show the user briefly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub action: Action,
    pub message: String,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Failed to {}: {}", self.action, self.message)
    }
}

#[derive(Debug, Clone)]
pub struct TodoView {
    client: TodoClient,
    todos: TodoList,
    draft: String,
    adding: bool,
    notice: Option<Notice>,
}

impl TodoView {
    pub fn new(client: TodoClient) -> Self {
        Self::with_todos(client, Vec::new())
    }

    /// Start from a list the host already fetched (the initial page render).
    pub fn with_todos(client: TodoClient, todos: Vec<Todo>) -> Self {
        Self {
            client,
            todos: TodoList::new(todos),
            draft: String::new(),
            adding: false,
            notice: None,
        }
    }

    pub fn todos(&self) -> &TodoList {
        &self.todos
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// True while a create request is in flight.
    pub fn is_adding(&self) -> bool {
        self.adding
    }

    /// Whether the add control should be enabled.
    pub fn can_submit(&self) -> bool {
        !self.adding && !self.draft.trim().is_empty()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    pub fn begin_load(&self) -> HttpRequest {
        self.client.build_list_todos()
    }

    /// Replace the local list wholesale with the server's.
    pub fn complete_load(&mut self, response: HttpResponse) -> Result<(), ApiError> {
        match self.client.parse_list_todos(response) {
            Ok(todos) => {
                self.todos = TodoList::new(todos);
                Ok(())
            }
            Err(err) => Err(self.fail(Action::Load, err)),
        }
    }

    /// Build the create request from the trimmed draft.
    ///
    /// Returns `Ok(None)` without issuing anything when the draft is blank or
    /// another create is still in flight.
    pub fn begin_create(&mut self) -> Result<Option<HttpRequest>, ApiError> {
        if !self.can_submit() {
            return Ok(None);
        }
        let input = CreateTodo {
            title: self.draft.trim().to_string(),
        };
        match self.client.build_create_todo(&input) {
            Ok(req) => {
                self.adding = true;
                Ok(Some(req))
            }
            Err(err) => Err(self.fail(Action::Create, err)),
        }
    }

    /// On success the new todo goes first and the draft is cleared.
    pub fn complete_create(&mut self, response: HttpResponse) -> Result<Todo, ApiError> {
        self.adding = false;
        match self.client.parse_create_todo(response) {
            Ok(todo) => {
                debug!(id = todo.id, "reconciled created todo");
                self.todos.prepend(todo.clone());
                self.draft.clear();
                Ok(todo)
            }
            Err(err) => Err(self.fail(Action::Create, err)),
        }
    }

    pub fn begin_toggle(&self, id: i64) -> HttpRequest {
        self.client.build_toggle_todo(id)
    }

    /// On success the local entry with the returned id is replaced.
    pub fn complete_toggle(&mut self, response: HttpResponse) -> Result<Todo, ApiError> {
        match self.client.parse_toggle_todo(response) {
            Ok(todo) => {
                if !self.todos.replace(todo.clone()) {
                    debug!(id = todo.id, "toggled todo is not in the local list");
                }
                Ok(todo)
            }
            Err(err) => Err(self.fail(Action::Toggle, err)),
        }
    }

    pub fn begin_delete(&self, id: i64) -> HttpRequest {
        self.client.build_delete_todo(id)
    }

    /// On success the local entry with `id` is removed. The delete response has
    /// no body, so the caller passes back the id it asked to delete.
    pub fn complete_delete(&mut self, id: i64, response: HttpResponse) -> Result<(), ApiError> {
        match self.client.parse_delete_todo(response) {
            Ok(()) => {
                self.todos.remove(id);
                Ok(())
            }
            Err(err) => Err(self.fail(Action::Delete, err)),
        }
    }

    fn fail(&mut self, action: Action, err: ApiError) -> ApiError {
        warn!(%action, error = %err, "todo request failed");
        self.notice = Some(Notice {
            action,
            message: err.to_string(),
        });
        err
    }
}
