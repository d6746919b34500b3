use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::info;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: u64,
    pub task: String,
    pub complete: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
}

#[derive(Deserialize)]
pub struct CreateTodo {
    pub task: String,
    #[serde(default)]
    pub complete: bool,
}

#[derive(Deserialize)]
pub struct PatchTodo {
    pub task: Option<String>,
    pub complete: Option<bool>,
}

/// In-memory backend state. Ids are handed out from `next_id` and never
/// reused.
#[derive(Debug, Default)]
pub struct Store {
    todos: BTreeMap<u64, Todo>,
    users: BTreeMap<u64, User>,
    next_id: u64,
}

impl Store {
    pub fn seeded(todos: Vec<Todo>, users: Vec<User>) -> Self {
        let next_id = todos.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        Self {
            todos: todos.into_iter().map(|t| (t.id, t)).collect(),
            users: users.into_iter().map(|u| (u.id, u)).collect(),
            next_id,
        }
    }
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    app_with(Vec::new(), Vec::new())
}

pub fn app_with(todos: Vec<Todo>, users: Vec<User>) -> Router {
    let db: Db = Arc::new(RwLock::new(Store::seeded(todos, users)));
    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/{id}", get(get_todo).patch(patch_todo).delete(delete_todo))
        .route("/users", get(list_users))
        .route("/users/{id}", get(get_user))
        .with_state(db)
}

pub async fn serve(listener: TcpListener, app: Router) -> Result<(), std::io::Error> {
    axum::serve(listener, app).await
}

/// A few users to browse when the server runs standalone.
pub fn sample_users() -> Vec<User> {
    [(1, "Ana Torres", "ana@example.com"), (2, "Luis Pérez", "luis@example.com")]
        .into_iter()
        .map(|(id, name, email)| User {
            id,
            name: name.to_string(),
            email: email.to_string(),
        })
        .collect()
}

async fn list_todos(State(db): State<Db>) -> Json<Vec<Todo>> {
    let store = db.read().await;
    Json(store.todos.values().cloned().collect())
}

async fn create_todo(
    State(db): State<Db>,
    Json(input): Json<CreateTodo>,
) -> (StatusCode, Json<Todo>) {
    let mut store = db.write().await;
    let todo = Todo {
        id: store.next_id,
        task: input.task,
        complete: input.complete,
    };
    store.next_id += 1;
    store.todos.insert(todo.id, todo.clone());
    info!(id = todo.id, "todo created");
    (StatusCode::CREATED, Json(todo))
}

async fn get_todo(
    State(db): State<Db>,
    Path(id): Path<u64>,
) -> Result<Json<Todo>, StatusCode> {
    let store = db.read().await;
    store.todos.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn patch_todo(
    State(db): State<Db>,
    Path(id): Path<u64>,
    Json(input): Json<PatchTodo>,
) -> Result<Json<Todo>, StatusCode> {
    let mut store = db.write().await;
    let todo = store.todos.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    if let Some(task) = input.task {
        todo.task = task;
    }
    if let Some(complete) = input.complete {
        todo.complete = complete;
    }
    Ok(Json(todo.clone()))
}

async fn delete_todo(
    State(db): State<Db>,
    Path(id): Path<u64>,
) -> Result<StatusCode, StatusCode> {
    let mut store = db.write().await;
    let removed = store.todos.remove(&id).ok_or(StatusCode::NOT_FOUND)?;
    info!(id = removed.id, "todo deleted");
    Ok(StatusCode::NO_CONTENT)
}

async fn list_users(State(db): State<Db>) -> Json<Vec<User>> {
    let store = db.read().await;
    Json(store.users.values().cloned().collect())
}

async fn get_user(
    State(db): State<Db>,
    Path(id): Path<u64>,
) -> Result<Json<User>, StatusCode> {
    let store = db.read().await;
    store.users.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}
