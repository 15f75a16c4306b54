//! V1 API handlers.

mod students;
mod system;

#[cfg(test)]
mod students_test;

pub use students::*;
pub use system::*;
