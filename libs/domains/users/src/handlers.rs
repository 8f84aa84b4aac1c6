//! HTTP handlers for user registration and lookups

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    routing::{get, post},
};
use axum_helpers::{
    AppError,
    errors::responses::{BadRequestResponse, InternalServerErrorResponse},
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::UserResult;
use crate::models::{AdminStatus, EmailExists, RegisterResult, RegisterUser, User};
use crate::repository::UserRepository;
use crate::service::UserService;

/// OpenAPI documentation for the user endpoints
#[derive(OpenApi)]
#[openapi(
    paths(list_users, register_user, check_email, check_admin),
    components(
        schemas(User, RegisterUser, RegisterResult, EmailExists, AdminStatus),
        responses(BadRequestResponse, InternalServerErrorResponse)
    ),
    tags(
        (name = "Users", description = "Registration and account lookups")
    )
)]
pub struct ApiDoc;

pub fn router<R: UserRepository + 'static>(service: UserService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/users", get(list_users))
        .route("/userRegister", post(register_user))
        .route("/checkEmail/{email}", get(check_email))
        .route("/checkAdmin/{email}", get(check_admin))
        .with_state(shared_service)
}

/// List every user
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    responses(
        (status = 200, description = "All users", body = Vec<User>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_users<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
) -> UserResult<Json<Vec<User>>> {
    Ok(Json(service.list_users().await?))
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/userRegister",
    tag = "Users",
    request_body = RegisterUser,
    responses(
        (status = 200, description = "User created", body = RegisterResult),
        (status = 400, response = BadRequestResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn register_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    body: Result<Json<RegisterUser>, JsonRejection>,
) -> Result<Json<RegisterResult>, AppError> {
    let Json(input) = body?;
    let result = service.register(input).await?;
    Ok(Json(result))
}

/// Whether a user with this email exists
#[utoipa::path(
    get,
    path = "/checkEmail/{email}",
    tag = "Users",
    params(("email" = String, Path, description = "Exact email address")),
    responses(
        (status = 200, description = "Existence flag", body = EmailExists),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn check_email<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    Path(email): Path<String>,
) -> UserResult<Json<EmailExists>> {
    let exists = service.email_exists(&email).await?;
    Ok(Json(EmailExists { exists }))
}

/// Whether the user with this email has the admin role
#[utoipa::path(
    get,
    path = "/checkAdmin/{email}",
    tag = "Users",
    params(("email" = String, Path, description = "Exact email address")),
    responses(
        (status = 200, description = "Admin flag; false for unknown emails", body = AdminStatus),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn check_admin<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    Path(email): Path<String>,
) -> UserResult<Json<AdminStatus>> {
    let admin = service.is_admin(&email).await?;
    Ok(Json(AdminStatus { admin }))
}
