//! Core use-case services.
//!
//! Services own the rules both transport adapters share: presence
//! validation, the duplicate-email policy, partial-update merging, and
//! timestamp handling. Adapters map `ServiceError` onto their own wire
//! formats and never reach around the service into the repositories.

mod students;


pub use students::{ServiceError, ServiceResult, StudentRequest, StudentService};
