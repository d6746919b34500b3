//! Async API client for the todo service.
//!
//! # Overview
//! `TodoApiClient` exposes CRUD on todos, read-only access to users, a bulk
//! "delete completed" operation, and a health probe against a REST backend.
//! Every failure is reported as a `ClientError` whose message is fixed per
//! operation; the underlying cause stays reachable through `source()`.
//!
//! # Design
//! - `TodoRequests` builds `HttpRequest` values and parses `HttpResponse`
//!   values without touching the network (host-does-IO pattern).
//! - `Transport` is the only piece that performs I/O, via `reqwest`.
//! - `ClientConfig` is an immutable value injected at construction, so tests
//!   can point the client at any mock endpoint.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod requests;
pub mod transport;
pub mod types;

pub use client::TodoApiClient;
pub use config::ClientConfig;
pub use error::{ApiError, ClientError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use requests::TodoRequests;
pub use types::{Id, NewTodo, Todo, TodoPatch, User};
