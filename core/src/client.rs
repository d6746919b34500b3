//! Async client for the todo API.
//!
//! # Design
//! `TodoApiClient` pairs the stateless `TodoRequests` builder/parser with a
//! `Transport` that performs the round trip. Each public method is one
//! request (bulk delete aside) and translates any failure into a
//! `ClientError` carrying a fixed message, logging the cause first.
//! Nothing is cached; every call goes to the server.

use futures::future::join_all;
use tracing::{debug, error};

use crate::config::ClientConfig;
use crate::error::{ApiError, ClientError};
use crate::requests::TodoRequests;
use crate::transport::Transport;
use crate::types::{Id, NewTodo, Todo, TodoPatch, User};

const LOAD_TODOS: &str = "No se pudieron cargar las tareas";
const LOAD_TODO: &str = "No se pudo cargar la tarea";
const CREATE_TODO: &str = "No se pudo crear la tarea";
const UPDATE_TODO: &str = "No se pudo actualizar la tarea";
const DELETE_TODO: &str = "No se pudo eliminar la tarea";
const DELETE_COMPLETED: &str = "No se pudieron eliminar las tareas completadas";
const LOAD_USERS: &str = "No se pudieron cargar los usuarios";
const LOAD_USER: &str = "No se pudo cargar el usuario";

/// Client for the todo and user endpoints.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct TodoApiClient {
    requests: TodoRequests,
    transport: Transport,
}

impl TodoApiClient {
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let transport = Transport::new(config.timeout).map_err(ClientError::Build)?;
        Ok(Self {
            requests: TodoRequests::new(&config.base_url),
            transport,
        })
    }

    pub fn base_url(&self) -> &str {
        self.requests.base_url()
    }

    pub async fn list_todos(&self) -> Result<Vec<Todo>, ClientError> {
        self.fetch_todos().await.map_err(|source| {
            error!(error = %source, "error fetching todos");
            ClientError::Load {
                message: LOAD_TODOS,
                source,
            }
        })
    }

    pub async fn get_todo(&self, id: impl Into<Id>) -> Result<Todo, ClientError> {
        let id = id.into();
        let result = async {
            let response = self.transport.execute(self.requests.build_get_todo(&id)).await?;
            self.requests.parse_get_todo(response)
        }
        .await;
        result.map_err(|source| {
            error!(%id, error = %source, "error fetching todo");
            ClientError::Load {
                message: LOAD_TODO,
                source,
            }
        })
    }

    /// Create a todo; it always starts out not complete.
    pub async fn create_todo(&self, task: impl Into<String>) -> Result<Todo, ClientError> {
        let input = NewTodo::new(task);
        let result = async {
            let request = self.requests.build_create_todo(&input)?;
            let response = self.transport.execute(request).await?;
            self.requests.parse_create_todo(response)
        }
        .await;
        result.map_err(|source| {
            error!(error = %source, "error creating todo");
            ClientError::Create {
                message: CREATE_TODO,
                source,
            }
        })
    }

    pub async fn update_todo(
        &self,
        id: impl Into<Id>,
        patch: &TodoPatch,
    ) -> Result<Todo, ClientError> {
        let id = id.into();
        let result = async {
            let request = self.requests.build_update_todo(&id, patch)?;
            let response = self.transport.execute(request).await?;
            self.requests.parse_update_todo(response)
        }
        .await;
        result.map_err(|source| {
            error!(%id, error = %source, "error updating todo");
            ClientError::Update {
                message: UPDATE_TODO,
                source,
            }
        })
    }

    pub async fn delete_todo(&self, id: impl Into<Id>) -> Result<(), ClientError> {
        let id = id.into();
        self.remove(&id).await.map_err(|source| ClientError::Delete {
            message: DELETE_TODO,
            source,
        })
    }

    /// Same as `update_todo` with only `complete` set.
    pub async fn mark_todo_complete(
        &self,
        id: impl Into<Id>,
        complete: bool,
    ) -> Result<Todo, ClientError> {
        self.update_todo(id, &TodoPatch::complete(complete)).await
    }

    /// Delete every todo currently marked complete and return how many were
    /// deleted.
    ///
    /// Deletes run concurrently and all of them are awaited before the
    /// outcome is decided. If any fails, the whole call fails with the first
    /// failure in list order, and deletes that already went through stay
    /// deleted.
    pub async fn delete_completed_todos(&self) -> Result<usize, ClientError> {
        let result = async {
            let completed: Vec<Id> = self
                .fetch_todos()
                .await?
                .into_iter()
                .filter(|todo| todo.complete)
                .map(|todo| todo.id)
                .collect();

            let results = join_all(completed.iter().map(|id| self.remove(id))).await;
            results.into_iter().collect::<Result<Vec<()>, ApiError>>()?;
            Ok::<_, ApiError>(completed.len())
        }
        .await;
        result.map_err(|source| {
            error!(error = %source, "error deleting completed todos");
            ClientError::BulkDelete {
                message: DELETE_COMPLETED,
                source,
            }
        })
    }

    pub async fn list_users(&self) -> Result<Vec<User>, ClientError> {
        let result = async {
            let response = self.transport.execute(self.requests.build_list_users()).await?;
            self.requests.parse_list_users(response)
        }
        .await;
        result.map_err(|source| {
            error!(error = %source, "error fetching users");
            ClientError::Load {
                message: LOAD_USERS,
                source,
            }
        })
    }

    pub async fn get_user(&self, id: impl Into<Id>) -> Result<User, ClientError> {
        let id = id.into();
        let result = async {
            let response = self.transport.execute(self.requests.build_get_user(&id)).await?;
            self.requests.parse_get_user(response)
        }
        .await;
        result.map_err(|source| {
            error!(%id, error = %source, "error fetching user");
            ClientError::Load {
                message: LOAD_USER,
                source,
            }
        })
    }

    /// `true` if the todo collection answers with a 2xx. Never fails.
    pub async fn check_health(&self) -> bool {
        let result = async {
            let response = self.transport.execute(self.requests.build_list_todos()).await?;
            self.requests.parse_health_check(response)
        }
        .await;
        match result {
            Ok(()) => true,
            Err(e) => {
                debug!(error = %e, "health check failed");
                false
            }
        }
    }

    async fn fetch_todos(&self) -> Result<Vec<Todo>, ApiError> {
        let response = self.transport.execute(self.requests.build_list_todos()).await?;
        self.requests.parse_list_todos(response)
    }

    /// One DELETE, logged on failure. Shared by single and bulk delete so
    /// each failed item shows up in the logs.
    async fn remove(&self, id: &Id) -> Result<(), ApiError> {
        let result = async {
            let response = self.transport.execute(self.requests.build_delete_todo(id)).await?;
            self.requests.parse_delete_todo(response)
        }
        .await;
        result.inspect_err(|e| error!(%id, error = %e, "error deleting todo"))
    }
}
