//! Tests for error-to-status mapping.

use crate::api::{
    ErrorBody, FieldError, auth_error_response, task_error_response, user_error_response,
    validation_error_response,
};
use crate::auth::domain::{AuthError, UserId};
use crate::task::domain::{NotificationId, TaskDomainError, TaskId};
use crate::task::ports::TaskRepositoryError;
use crate::task::services::TaskServiceError;
use crate::user::ports::UserRepositoryError;
use crate::user::services::UserServiceError;
use rstest::rstest;

#[rstest]
#[case(AuthError::MissingToken)]
#[case(AuthError::InvalidToken("bad signature".to_owned()))]
#[case(AuthError::ExpiredToken)]
fn every_auth_failure_maps_to_a_uniform_401(#[case] err: AuthError) {
    let response = auth_error_response(&err);

    assert_eq!(response.status, 401);
    // The body must not reveal why the token was rejected.
    assert_eq!(
        response.body,
        ErrorBody::Message {
            message: "unauthenticated".to_owned()
        }
    );
}

#[rstest]
fn policy_denial_maps_to_403() {
    let response = task_error_response(&TaskServiceError::Forbidden);
    assert_eq!(response.status, 403);
}

#[rstest]
fn missing_resources_map_to_404() {
    let task = task_error_response(&TaskServiceError::TaskNotFound(TaskId::new()));
    assert_eq!(task.status, 404);

    let notification = task_error_response(&TaskServiceError::NotificationNotFound(
        NotificationId::new(),
    ));
    assert_eq!(notification.status, 404);

    let assignee = task_error_response(&TaskServiceError::AssigneeNotFound(UserId::new()));
    assert_eq!(assignee.status, 404);
}

#[rstest]
fn domain_validation_escape_maps_to_400() {
    let response = task_error_response(&TaskServiceError::Validation(
        TaskDomainError::TitleTooShort { minimum: 3 },
    ));
    assert_eq!(response.status, 400);
}

#[rstest]
fn persistence_failures_map_to_500_without_leaking_detail() {
    let inner = std::io::Error::other("connection refused to db-host:27017");
    let err = TaskServiceError::Repository(TaskRepositoryError::persistence(inner));

    let response = task_error_response(&err);

    assert_eq!(response.status, 500);
    let ErrorBody::Message { message } = &response.body else {
        panic!("expected a message body");
    };
    assert!(!message.contains("db-host"));
}

#[rstest]
fn user_errors_map_like_task_errors() {
    assert_eq!(user_error_response(&UserServiceError::Forbidden).status, 403);
    assert_eq!(
        user_error_response(&UserServiceError::NotFound(UserId::new())).status,
        404
    );
    let inner = std::io::Error::other("socket reset");
    assert_eq!(
        user_error_response(&UserServiceError::Repository(
            UserRepositoryError::persistence(inner)
        ))
        .status,
        500
    );
}

#[rstest]
fn boundary_validation_wraps_the_structured_error_list() {
    let errors = vec![FieldError {
        field: "title".to_owned(),
        message: "task title must be at least 3 characters".to_owned(),
    }];

    let response = validation_error_response(errors.clone());

    assert_eq!(response.status, 400);
    assert_eq!(response.body, ErrorBody::Fields { errors });

    let json = serde_json::to_value(&response.body).expect("body should serialize");
    assert!(json.get("errors").is_some());
}
