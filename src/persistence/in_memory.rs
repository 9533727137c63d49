use crate::domain::DrivenPortError;
use crate::domain::todo::{NewTodo, Todo, UpdateTodo, driven_ports};
use anyhow::{Context, anyhow};
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

/// Process-local todo store. Every read and write goes through a single lock which guards
/// both the todos and the ID counter, so IDs are handed out in creation order and never reused.
pub struct InMemoryTodoStore {
    state: Mutex<StoreState>,
}

struct StoreState {
    todos: BTreeMap<u64, Todo>,
    next_id: u64,
}

impl InMemoryTodoStore {
    pub fn new() -> Self {
        InMemoryTodoStore {
            state: Mutex::new(StoreState {
                todos: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    fn lock_state(&self) -> Result<MutexGuard<'_, StoreState>, anyhow::Error> {
        self.state
            .lock()
            .map_err(|_| anyhow!("the todo store lock was poisoned by a panicking request"))
    }
}

impl Default for InMemoryTodoStore {
    fn default() -> Self {
        Self::new()
    }
}

impl driven_ports::TodoReader for InMemoryTodoStore {
    async fn all_todos(&self) -> Result<Vec<Todo>, anyhow::Error> {
        let state = self.lock_state()?;

        Ok(state.todos.values().cloned().collect())
    }

    async fn todo_by_id(&self, todo_id: u64) -> Result<Option<Todo>, anyhow::Error> {
        let state = self.lock_state()?;

        Ok(state.todos.get(&todo_id).cloned())
    }
}

impl driven_ports::TodoWriter for InMemoryTodoStore {
    async fn create_todo(&self, new_todo: &NewTodo) -> Result<u64, anyhow::Error> {
        let mut state = self.lock_state()?;

        let todo_id = state.next_id;
        state.next_id = todo_id
            .checked_add(1)
            .context("the todo ID space is exhausted")?;
        state.todos.insert(
            todo_id,
            Todo {
                id: todo_id,
                title: new_todo.title.clone(),
                description: new_todo.description.clone(),
                completed: false,
            },
        );

        Ok(todo_id)
    }

    async fn update_todo(&self, todo_id: u64, update: &UpdateTodo) -> Result<(), DrivenPortError> {
        let mut state = self.lock_state().map_err(DrivenPortError::CommsFailure)?;

        let todo = state
            .todos
            .get_mut(&todo_id)
            .ok_or(DrivenPortError::DoesNotExist)?;
        todo.title = update.title.clone();
        todo.completed = update.completed;

        Ok(())
    }

    async fn delete_todo(&self, todo_id: u64) -> Result<(), DrivenPortError> {
        let mut state = self.lock_state().map_err(DrivenPortError::CommsFailure)?;

        state
            .todos
            .remove(&todo_id)
            .map(|_| ())
            .ok_or(DrivenPortError::DoesNotExist)
    }
}
