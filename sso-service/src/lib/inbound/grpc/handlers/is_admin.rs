use tonic::Status;

use super::internal;
use super::EMPTY_VALUE;
use crate::domain::auth::errors::AuthErrorKind;
use crate::domain::auth::models::UserId;
use crate::domain::auth::ports::AuthServicePort;
use crate::proto::IsAdminRequest;
use crate::proto::IsAdminResponse;

pub async fn is_admin<S: AuthServicePort>(
    service: &S,
    request: IsAdminRequest,
) -> Result<IsAdminResponse, Status> {
    if request.user_id == EMPTY_VALUE {
        return Err(Status::invalid_argument("user_id is empty"));
    }

    match service.is_admin(UserId(request.user_id)).await {
        Ok(is_admin) => Ok(IsAdminResponse { is_admin }),
        Err(e) => match e.kind() {
            AuthErrorKind::UserNotFound => Err(Status::invalid_argument(e.to_string())),
            _ => Err(internal(e)),
        },
    }
}
