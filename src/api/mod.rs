pub mod swagger_main;
pub mod todo;

#[cfg(test)]
mod test_util;
