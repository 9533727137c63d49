use crate::domain::DrivenPortError;
use crate::domain::todo::driven_ports::{TodoReader, TodoWriter};
use crate::domain::todo::driving_ports::TodoError;
use anyhow::Context;

/// A single task tracked by the service
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Todo {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub completed: bool,
}

#[derive(Debug)]
#[cfg_attr(test, derive(Clone))]
pub struct NewTodo {
    pub title: String,
    pub description: String,
}

/// The fields of a todo which may change after creation. `description` and `id` are fixed.
#[derive(Debug)]
#[cfg_attr(test, derive(Clone))]
pub struct UpdateTodo {
    pub title: String,
    pub completed: bool,
}

pub mod driven_ports {
    use super::*;

    pub trait TodoReader {
        async fn all_todos(&self) -> Result<Vec<Todo>, anyhow::Error>;
        async fn todo_by_id(&self, todo_id: u64) -> Result<Option<Todo>, anyhow::Error>;
    }

    pub trait TodoWriter {
        /// Stores a new, incomplete todo and returns the ID it was assigned
        async fn create_todo(&self, new_todo: &NewTodo) -> Result<u64, anyhow::Error>;

        async fn update_todo(
            &self,
            todo_id: u64,
            update: &UpdateTodo,
        ) -> Result<(), DrivenPortError>;

        async fn delete_todo(&self, todo_id: u64) -> Result<(), DrivenPortError>;
    }
}

pub mod driving_ports {
    use super::*;
    use thiserror::Error;

    #[derive(Debug, Error)]
    pub enum TodoError {
        #[error("todo {0} does not exist")]
        NotFound(u64),
        #[error(transparent)]
        PortError(#[from] anyhow::Error),
    }

    impl TodoError {
        /// Converts a driven port failure into a TodoError, noting the [action] being taken on [todo_id]
        pub(super) fn from_port_trying_to(
            port_err: DrivenPortError,
            todo_id: u64,
            action: &str,
        ) -> Self {
            match port_err {
                DrivenPortError::DoesNotExist => Self::NotFound(todo_id),
                DrivenPortError::CommsFailure(cause) => {
                    Self::PortError(cause.context(format!("{action} todo {todo_id}")))
                }
            }
        }
    }


    pub trait TodoPort {
        async fn all_todos(&self, todo_read: &impl TodoReader) -> Result<Vec<Todo>, TodoError>;
        async fn todo_by_id(
            &self,
            todo_id: u64,
            todo_read: &impl TodoReader,
        ) -> Result<Todo, TodoError>;
        async fn create_todo(
            &self,
            new_todo: &NewTodo,
            todo_write: &impl TodoWriter,
        ) -> Result<u64, TodoError>;
        async fn update_todo(
            &self,
            todo_id: u64,
            update: &UpdateTodo,
            todo_write: &impl TodoWriter,
        ) -> Result<(), TodoError>;
        async fn delete_todo(
            &self,
            todo_id: u64,
            todo_write: &impl TodoWriter,
        ) -> Result<(), TodoError>;
    }
}

pub struct TodoService {}

impl driving_ports::TodoPort for TodoService {
    async fn all_todos(&self, todo_read: &impl TodoReader) -> Result<Vec<Todo>, TodoError> {
        let todos = todo_read.all_todos().await.context("listing todos")?;

        Ok(todos)
    }

    async fn todo_by_id(
        &self,
        todo_id: u64,
        todo_read: &impl TodoReader,
    ) -> Result<Todo, TodoError> {
        let todo = todo_read
            .todo_by_id(todo_id)
            .await
            .context("fetching a todo")?;

        todo.ok_or(TodoError::NotFound(todo_id))
    }

    async fn create_todo(
        &self,
        new_todo: &NewTodo,
        todo_write: &impl TodoWriter,
    ) -> Result<u64, TodoError> {
        let created_todo_id = todo_write
            .create_todo(new_todo)
            .await
            .context("creating a todo")?;

        Ok(created_todo_id)
    }

    async fn update_todo(
        &self,
        todo_id: u64,
        update: &UpdateTodo,
        todo_write: &impl TodoWriter,
    ) -> Result<(), TodoError> {
        todo_write
            .update_todo(todo_id, update)
            .await
            .map_err(|err| TodoError::from_port_trying_to(err, todo_id, "updating"))
    }

    async fn delete_todo(
        &self,
        todo_id: u64,
        todo_write: &impl TodoWriter,
    ) -> Result<(), TodoError> {
        todo_write
            .delete_todo(todo_id)
            .await
            .map_err(|err| TodoError::from_port_trying_to(err, todo_id, "deleting"))
    }
}
