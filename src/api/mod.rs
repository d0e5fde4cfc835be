//! Transport-agnostic request/response boundary.
//!
//! The HTTP router, CORS, and body parsing are external collaborators;
//! this module holds what the core contract actually pins down: payload
//! validation that collects every field error in one pass, and the
//! mapping from service errors to response status and body. Internal
//! failure detail is suppressed outside the logs.

mod payload;
mod response;

#[cfg(test)]
mod tests;

pub use payload::{CreateTaskPayload, FieldError, UpdateTaskPayload};
pub use response::{
    ErrorBody, ErrorResponse, auth_error_response, task_error_response, user_error_response,
    validation_error_response,
};
