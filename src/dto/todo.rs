use crate::domain;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// DTO for a todo returned on the API
#[derive(Serialize, ToSchema)]
#[cfg_attr(test, derive(Deserialize, PartialEq, Eq, Debug))]
pub struct Todo {
    #[schema(example = 10)]
    pub id: u64,
    #[schema(example = "Buy milk")]
    pub title: String,
    #[schema(example = "2%")]
    pub description: String,
    #[schema(example = false)]
    pub completed: bool,
}

impl From<domain::todo::Todo> for Todo {
    fn from(value: domain::todo::Todo) -> Self {
        Todo {
            id: value.id,
            title: value.title,
            description: value.description,
            completed: value.completed,
        }
    }
}

/// DTO for creating a new todo via the API. Any `completed` flag sent by the client is ignored,
/// new todos always start out incomplete.
#[derive(Debug, Deserialize, Display, ToSchema)]
#[display("\"{title}\"")]
#[cfg_attr(test, derive(Serialize))]
pub struct NewTodo {
    #[schema(example = "Buy milk")]
    pub title: String,
    #[schema(example = "2%")]
    pub description: String,
}

impl From<NewTodo> for domain::todo::NewTodo {
    fn from(value: NewTodo) -> Self {
        domain::todo::NewTodo {
            title: value.title,
            description: value.description,
        }
    }
}

/// DTO for updating a todo via the API
#[derive(Debug, Deserialize, ToSchema)]
#[cfg_attr(test, derive(Serialize))]
pub struct UpdateTodo {
    #[schema(example = "Buy milk")]
    pub title: String,
    #[schema(example = true)]
    pub completed: bool,
}

impl From<UpdateTodo> for domain::todo::UpdateTodo {
    fn from(value: UpdateTodo) -> Self {
        domain::todo::UpdateTodo {
            title: value.title,
            completed: value.completed,
        }
    }
}

/// DTO for a newly created todo
#[derive(Serialize, ToSchema)]
#[cfg_attr(test, derive(Deserialize, Debug))]
pub struct InsertedTodo {
    #[schema(example = 5)]
    pub id: u64,
}
