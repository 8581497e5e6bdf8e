use secrecy::SecretString;
use tonic::Status;

use super::internal;
use super::EMPTY_VALUE;
use crate::domain::auth::errors::AuthErrorKind;
use crate::domain::auth::models::AppId;
use crate::domain::auth::ports::AuthServicePort;
use crate::proto::LoginRequest;
use crate::proto::LoginResponse;

pub async fn login<S: AuthServicePort>(
    service: &S,
    request: LoginRequest,
) -> Result<LoginResponse, Status> {
    validate(&request)?;

    let password = SecretString::new(request.password);

    match service
        .login(&request.email, &password, AppId(request.app_id))
        .await
    {
        Ok(token) => Ok(LoginResponse {
            token: token.into_inner(),
        }),
        Err(e) => match e.kind() {
            AuthErrorKind::InvalidCredentials => Err(Status::invalid_argument(e.to_string())),
            _ => Err(internal(e)),
        },
    }
}

fn validate(request: &LoginRequest) -> Result<(), Status> {
    if request.email.is_empty() {
        return Err(Status::invalid_argument("email is empty"));
    }

    if request.password.is_empty() {
        return Err(Status::invalid_argument("password is empty"));
    }

    if i64::from(request.app_id) == EMPTY_VALUE {
        return Err(Status::invalid_argument("app_id is empty"));
    }

    Ok(())
}
