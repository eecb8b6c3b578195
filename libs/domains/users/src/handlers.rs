use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use axum_helpers::{
    errors::responses::{BadRequestJsonResponse, NotFoundResponse},
    IdPath, LenientJson, MessageResponse,
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::UserResult;
use crate::models::{CreateUser, UpdateUser, User, UserEnvelope, UserList};
use crate::repository::UserRepository;
use crate::service::UserService;

pub const TAG: &str = "Users";

/// Body returned by a successful delete
pub const USER_DELETED: &str = "User deleted";

/// OpenAPI documentation for the Users API
#[derive(OpenApi)]
#[openapi(
    paths(list_users, create_user, get_user, update_user, delete_user),
    components(
        schemas(User, CreateUser, UpdateUser, UserList, UserEnvelope, MessageResponse),
        responses(NotFoundResponse, BadRequestJsonResponse)
    ),
    tags(
        (name = TAG, description = "User directory endpoints")
    )
)]
pub struct ApiDoc;

/// Create the users router with all HTTP endpoints
pub fn router<R: UserRepository + 'static>(service: UserService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/{id}", get(get_user).put(update_user).delete(delete_user))
        .with_state(shared_service)
}

/// Retrieve a list of users
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    responses(
        (status = 200, description = "All users in insertion order", body = UserList)
    )
)]
async fn list_users<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
) -> UserResult<Json<UserList>> {
    let users = service.list_users().await?;
    Ok(Json(UserList { users }))
}

/// Create a new user
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = CreateUser,
    responses(
        (status = 201, description = "User created", body = User),
        (status = 400, response = BadRequestJsonResponse)
    )
)]
async fn create_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    LenientJson(input): LenientJson<CreateUser>,
) -> UserResult<impl IntoResponse> {
    let user = service.create_user(input).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// Get a user by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = u64, Path, description = "The ID of the user to retrieve")
    ),
    responses(
        (status = 200, description = "User found", body = UserEnvelope),
        (status = 404, response = NotFoundResponse)
    )
)]
async fn get_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    IdPath(id): IdPath,
) -> UserResult<Json<UserEnvelope>> {
    let user = service.get_user(id).await?;
    Ok(Json(UserEnvelope { user }))
}

/// Update a user by ID
///
/// Absent or falsy fields (`""`, `0`, `false`, `null`) keep their current value.
#[utoipa::path(
    put,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = u64, Path, description = "The ID of the user to update")
    ),
    request_body = UpdateUser,
    responses(
        (status = 200, description = "User updated", body = User),
        (status = 400, response = BadRequestJsonResponse),
        (status = 404, response = NotFoundResponse)
    )
)]
async fn update_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    IdPath(id): IdPath,
    LenientJson(input): LenientJson<UpdateUser>,
) -> UserResult<Json<User>> {
    let user = service.update_user(id, input).await?;
    Ok(Json(user))
}

/// Delete a user by ID
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = u64, Path, description = "The ID of the user to delete")
    ),
    responses(
        (status = 200, description = "User deleted", body = MessageResponse),
        (status = 404, response = NotFoundResponse)
    )
)]
async fn delete_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    IdPath(id): IdPath,
) -> UserResult<Json<MessageResponse>> {
    service.delete_user(id).await?;
    Ok(Json(MessageResponse::new(USER_DELETED)))
}
