use crate::persistence::in_memory::InMemoryTodoStore;
use axum::Router;
use axum::extract::State;
use std::sync::Arc;

pub mod api;
pub mod app_env;
pub mod domain;
pub mod dto;
pub mod logging;
pub mod persistence;
pub mod routing_utils;

/// Data shared by every request handler. Each app owns its own store, so separately built
/// apps (such as one per test) never see each other's todos.
pub struct SharedData {
    pub todo_store: InMemoryTodoStore,
}

impl SharedData {
    pub fn new() -> Self {
        SharedData {
            todo_store: InMemoryTodoStore::new(),
        }
    }
}

impl Default for SharedData {
    fn default() -> Self {
        Self::new()
    }
}

/// Extractor handlers use to get at [SharedData]
pub type AppState = State<Arc<SharedData>>;

/// Assembles the full application: todo routes, API documentation, a 404 fallback for
/// anything else, and request tracing.
pub fn build_app(shared_data: Arc<SharedData>) -> Router {
    let router = Router::new()
        .merge(api::todo::todo_routes())
        .merge(api::swagger_main::build_documentation())
        .fallback(routing_utils::route_not_found)
        .with_state(shared_data);

    logging::attach_tracing_http(router)
}
