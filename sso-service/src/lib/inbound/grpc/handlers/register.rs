use secrecy::SecretString;
use tonic::Status;

use super::internal;
use crate::domain::auth::errors::AuthErrorKind;
use crate::domain::auth::ports::AuthServicePort;
use crate::proto::RegisterRequest;
use crate::proto::RegisterResponse;

pub async fn register<S: AuthServicePort>(
    service: &S,
    request: RegisterRequest,
) -> Result<RegisterResponse, Status> {
    validate(&request)?;

    let password = SecretString::new(request.password);

    match service.register_new_user(&request.email, &password).await {
        Ok(user_id) => Ok(RegisterResponse { user_id: user_id.0 }),
        Err(e) => match e.kind() {
            AuthErrorKind::UserAlreadyExists => Err(Status::already_exists(e.to_string())),
            _ => Err(internal(e)),
        },
    }
}

fn validate(request: &RegisterRequest) -> Result<(), Status> {
    if request.email.is_empty() {
        return Err(Status::invalid_argument("email is empty"));
    }

    if request.password.is_empty() {
        return Err(Status::invalid_argument("password is empty"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use tonic::Code;

    use super::*;
    use crate::domain::auth::errors::AuthError;
    use crate::domain::auth::errors::StorageError;
    use crate::domain::auth::models::UserId;
    use crate::inbound::grpc::handlers::mocks::MockTestAuthService;

    fn request(email: &str, password: &str) -> RegisterRequest {
        RegisterRequest {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_register_success() {
        let mut service = MockTestAuthService::new();

        service
            .expect_register_new_user()
            .withf(|email, _| email.to_string() == "alice@example.com")
            .times(1)
            .returning(|_, _| Ok(UserId(12)));

        let response = register(&service, request("alice@example.com", "password123"))
            .await
            .expect("Registration failed");

        assert_eq!(response.user_id, 12);
    }

    #[tokio::test]
    async fn test_register_missing_fields() {
        let cases = [
            (request("", "password123"), "email is empty"),
            (request("alice@example.com", ""), "password is empty"),
            (request("", ""), "email is empty"),
        ];

        for (request, expected) in cases {
            let mut service = MockTestAuthService::new();
            service.expect_register_new_user().times(0);

            let status = register(&service, request).await.unwrap_err();

            assert_eq!(status.code(), Code::InvalidArgument);
            assert!(status.message().contains(expected));
        }
    }

    #[tokio::test]
    async fn test_register_duplicate_email() {
        let mut service = MockTestAuthService::new();

        service.expect_register_new_user().times(1).returning(|_, _| {
            Err(AuthError::new(
                "auth.register_new_user",
                AuthErrorKind::UserAlreadyExists,
            ))
        });

        let status = register(&service, request("alice@example.com", "password123"))
            .await
            .unwrap_err();

        assert_eq!(status.code(), Code::AlreadyExists);
        assert!(status.message().contains("user already exists"));
    }

    #[tokio::test]
    async fn test_register_storage_failure() {
        let mut service = MockTestAuthService::new();

        service.expect_register_new_user().times(1).returning(|_, _| {
            Err(AuthError::new(
                "auth.register_new_user",
                StorageError::Database("disk I/O error".to_string()),
            ))
        });

        let status = register(&service, request("alice@example.com", "password123"))
            .await
            .unwrap_err();

        assert_eq!(status.code(), Code::Internal);
        assert!(!status.message().contains("disk I/O error"));
    }
}
