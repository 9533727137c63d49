use crate::routing_utils::BasicErrorResponse;
use utoipa::OpenApi;

pub mod todo;

pub use todo::{InsertedTodo, NewTodo, Todo, UpdateTodo};

/// Collects the schemas of every DTO so they show up in the generated OpenAPI document
#[derive(OpenApi)]
#[openapi(components(
    schemas(Todo, NewTodo, UpdateTodo, InsertedTodo),
    responses(BasicErrorResponse)
))]
pub struct OpenApiSchemas;
