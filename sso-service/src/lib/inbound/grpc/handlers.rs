use tonic::Status;

use crate::domain::auth::errors::AuthError;

pub mod is_admin;
pub mod login;
pub mod register;

/// Zero value of a numeric proto field, i.e. the field was not set.
const EMPTY_VALUE: i64 = 0;

/// Map a failure the caller cannot act on.
///
/// The full error chain stays in the server log; the caller only learns that the
/// call failed internally.
fn internal(err: AuthError) -> Status {
    tracing::error!(error = %err, op = err.op, "internal error");
    Status::internal("internal error")
}
