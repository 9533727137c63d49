use crate::domain::todo::driven_ports::{TodoReader, TodoWriter};
use crate::domain::todo::driving_ports::{TodoError, TodoPort};
use crate::routing_utils::{
    BasicErrorResponse, GenericErrorResponse, Json, NotFoundResponse, Path, route_not_found,
};
use crate::{AppState, SharedData, domain, dto};
use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::ErrorResponse;
use axum::routing::{MethodRouter, get};
use std::sync::Arc;
use tracing::{error, info};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(list_todos, get_todo, create_todo, update_todo, delete_todo))]
/// Defines the OpenAPI documentation for the todo API
pub struct TodoApi;
/// Constant used to group todo endpoints in OpenAPI documentation
pub const TODO_API_GROUP: &str = "Todos";

/// Body sent after a todo is updated
pub const UPDATED_BODY: &str = "OK";
/// Body sent after a todo is deleted
pub const DELETED_BODY: &str = "Delete Successful";

/// Adds routes under "/todos" to the application router. Each path is also served with a
/// trailing slash. Unsupported methods on these paths fall through to the same 404 as unknown routes.
pub fn todo_routes() -> Router<Arc<SharedData>> {
    let collection_routes: MethodRouter<Arc<SharedData>> = get(|State(app_state): AppState| async move {
        let todo_service = domain::todo::TodoService {};

        list_todos(&todo_service, &app_state.todo_store).await
    })
    .post(
        |State(app_state): AppState, Json(new_todo): Json<dto::NewTodo>| async move {
            let todo_service = domain::todo::TodoService {};

            create_todo(new_todo, &todo_service, &app_state.todo_store).await
        },
    )
    .fallback(route_not_found);

    let single_todo_routes: MethodRouter<Arc<SharedData>> = get(
        |State(app_state): AppState, Path(todo_id): Path<u64>| async move {
            let todo_service = domain::todo::TodoService {};

            get_todo(todo_id, &todo_service, &app_state.todo_store).await
        },
    )
    .put(
        |State(app_state): AppState,
         Path(todo_id): Path<u64>,
         Json(update): Json<dto::UpdateTodo>| async move {
            let todo_service = domain::todo::TodoService {};

            update_todo(todo_id, update, &todo_service, &app_state.todo_store).await
        },
    )
    .delete(
        |State(app_state): AppState, Path(todo_id): Path<u64>| async move {
            let todo_service = domain::todo::TodoService {};

            delete_todo(todo_id, &todo_service, &app_state.todo_store).await
        },
    )
    .fallback(route_not_found);

    Router::new()
        .route("/todos", collection_routes.clone())
        .route("/todos/", collection_routes)
        .route("/todos/:todo_id", single_todo_routes.clone())
        .route("/todos/:todo_id/", single_todo_routes)
}

/// Converts a failed todo operation into the matching HTTP response. Missing todos are an
/// expected outcome, so only other failures get logged as errors.
fn todo_error_response(action: &str, todo_err: TodoError) -> ErrorResponse {
    match todo_err {
        TodoError::NotFound(todo_id) => {
            info!("Could not {action}: todo {todo_id} does not exist");
            NotFoundResponse.into()
        }
        TodoError::PortError(cause) => {
            error!("Failed to {action}: {cause:#}");
            GenericErrorResponse(cause).into()
        }
    }
}

#[utoipa::path(
    get,
    path = "/todos",
    tag = TODO_API_GROUP,
    responses(
        (status = 200, description = "Every stored todo", body = [dto::Todo]),
        (status = 500, response = BasicErrorResponse),
    ),
)]
/// Retrieves every stored todo
async fn list_todos(
    todo_service: &impl TodoPort,
    todo_read: &impl TodoReader,
) -> Result<Json<Vec<dto::Todo>>, ErrorResponse> {
    info!("Requested todos");
    let todos = todo_service
        .all_todos(todo_read)
        .await
        .map_err(|err| todo_error_response("list todos", err))?;

    Ok(Json(todos.into_iter().map(dto::Todo::from).collect()))
}

#[utoipa::path(
    get,
    path = "/todos/{todo_id}",
    tag = TODO_API_GROUP,
    params(("todo_id" = u64, Path, description = "ID of the todo to fetch")),
    responses(
        (status = 200, description = "The requested todo", body = dto::Todo),
        (status = 400, response = BasicErrorResponse),
        (status = 404, description = "No todo has the given ID", body = String, example = json!("Not found")),
        (status = 500, response = BasicErrorResponse),
    ),
)]
/// Retrieves a single todo by its ID
async fn get_todo(
    todo_id: u64,
    todo_service: &impl TodoPort,
    todo_read: &impl TodoReader,
) -> Result<Json<dto::Todo>, ErrorResponse> {
    info!("Get todo {todo_id}");
    let todo = todo_service
        .todo_by_id(todo_id, todo_read)
        .await
        .map_err(|err| todo_error_response("get todo", err))?;

    Ok(Json(dto::Todo::from(todo)))
}

#[utoipa::path(
    post,
    path = "/todos",
    tag = TODO_API_GROUP,
    request_body = dto::NewTodo,
    responses(
        (status = 201, description = "The todo was created", body = dto::InsertedTodo),
        (status = 400, response = BasicErrorResponse),
        (status = 500, response = BasicErrorResponse),
    ),
)]
/// Creates a new, incomplete todo
async fn create_todo(
    new_todo: dto::NewTodo,
    todo_service: &impl TodoPort,
    todo_write: &impl TodoWriter,
) -> Result<(StatusCode, Json<dto::InsertedTodo>), ErrorResponse> {
    info!("Attempt to create todo: {new_todo}");
    let domain_todo = domain::todo::NewTodo::from(new_todo);

    let todo_id = todo_service
        .create_todo(&domain_todo, todo_write)
        .await
        .map_err(|err| todo_error_response("create todo", err))?;
    info!("Created todo {todo_id}");

    Ok((StatusCode::CREATED, Json(dto::InsertedTodo { id: todo_id })))
}

#[utoipa::path(
    put,
    path = "/todos/{todo_id}",
    tag = TODO_API_GROUP,
    params(("todo_id" = u64, Path, description = "ID of the todo to update")),
    request_body = dto::UpdateTodo,
    responses(
        (status = 200, description = "The todo was updated", body = String, example = json!("OK")),
        (status = 400, response = BasicErrorResponse),
        (status = 404, description = "No todo has the given ID", body = String, example = json!("Not found")),
        (status = 500, response = BasicErrorResponse),
    ),
)]
/// Updates the title and completion state of a todo
async fn update_todo(
    todo_id: u64,
    update: dto::UpdateTodo,
    todo_service: &impl TodoPort,
    todo_write: &impl TodoWriter,
) -> Result<(StatusCode, &'static str), ErrorResponse> {
    info!("Updating todo {todo_id}");
    let domain_update = domain::todo::UpdateTodo::from(update);

    todo_service
        .update_todo(todo_id, &domain_update, todo_write)
        .await
        .map_err(|err| todo_error_response("update todo", err))?;

    Ok((StatusCode::OK, UPDATED_BODY))
}

#[utoipa::path(
    delete,
    path = "/todos/{todo_id}",
    tag = TODO_API_GROUP,
    params(("todo_id" = u64, Path, description = "ID of the todo to delete")),
    responses(
        (status = 200, description = "The todo was deleted", body = String, example = json!("Delete Successful")),
        (status = 400, response = BasicErrorResponse),
        (status = 404, description = "No todo has the given ID", body = String, example = json!("Not found")),
        (status = 500, response = BasicErrorResponse),
    ),
)]
/// Deletes a todo
async fn delete_todo(
    todo_id: u64,
    todo_service: &impl TodoPort,
    todo_write: &impl TodoWriter,
) -> Result<(StatusCode, &'static str), ErrorResponse> {
    info!("Deleting todo {todo_id}");
    todo_service
        .delete_todo(todo_id, todo_write)
        .await
        .map_err(|err| todo_error_response("delete todo", err))?;

    Ok((StatusCode::OK, DELETED_BODY))
}
