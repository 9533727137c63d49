use thiserror::Error;

pub mod todo;

#[cfg(test)]
mod test_util;

/// Failures reported by driven adapters (anything the domain stores data through)
#[derive(Error, Debug)]
pub enum DrivenPortError {
    #[error("a communication failure occurred: {0}")]
    CommsFailure(anyhow::Error),
    #[error("the requested data does not exist")]
    DoesNotExist,
}
