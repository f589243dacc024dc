use actix_web::{web, HttpResponse};
use crate::{
    models::{CreateUserRequest, DeleteAck, NewUser, UpdateAck, UpdateUserRequest, UserChanges, UserResponse},
    services::UserRepository,
    utils::{AppError, ErrorResponse},
};

/// POST /api/users - Cria um novo usuário
#[utoipa::path(
    post,
    path = "/api/users",
    tag = "Users",
    request_body = CreateUserRequest,
    responses(
        (status = 200, description = "User created", body = UserResponse),
        (status = 400, description = "Invalid request body", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse)
    )
)]
pub async fn create_user(
    repo: web::Data<dyn UserRepository>,
    body: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, AppError> {
    let new_user = NewUser::try_from(body.into_inner())?;
    log::info!("📝 POST /users - Creating user");

    match repo.create(new_user).await {
        Ok(user) => {
            let response = UserResponse::from(user);
            log::info!("✅ User created: {}", response.id);
            Ok(HttpResponse::Ok().json(response))
        }
        Err(e) => {
            log::error!("❌ Failed to create user: {}", e);
            Err(e)
        }
    }
}

/// GET /api/users - Lista todos os usuários
#[utoipa::path(
    get,
    path = "/api/users",
    tag = "Users",
    responses(
        (status = 200, description = "All users", body = [UserResponse]),
        (status = 500, description = "Database error", body = ErrorResponse)
    )
)]
pub async fn list_users(repo: web::Data<dyn UserRepository>) -> Result<HttpResponse, AppError> {
    log::info!("📋 GET /users - Listing all users");

    match repo.list().await {
        Ok(users) => {
            log::info!("✅ Users retrieved: {}", users.len());
            let users: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();
            Ok(HttpResponse::Ok().json(users))
        }
        Err(e) => {
            log::error!("❌ Failed to list users: {}", e);
            Err(e)
        }
    }
}

/// GET /api/users/{id} - Busca um usuário; `null` quando não existe
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User id (24 hex characters)")
    ),
    responses(
        (status = 200, description = "The user, or null when no user has this id", body = UserResponse),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse)
    )
)]
pub async fn get_user(
    repo: web::Data<dyn UserRepository>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let user_id = path.into_inner();
    log::info!("🔍 GET /users/{} - Getting user", user_id);

    match repo.find_by_id(&user_id).await {
        Ok(Some(user)) => Ok(HttpResponse::Ok().json(UserResponse::from(user))),
        Ok(None) => {
            log::warn!("⚠️ User {} not found", user_id);
            Ok(HttpResponse::Ok().json(Option::<UserResponse>::None))
        }
        Err(e) => {
            log::error!("❌ Failed to get user {}: {}", user_id, e);
            Err(e)
        }
    }
}

/// PUT /api/users/{id} - Atualiza os campos informados
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User id (24 hex characters)")
    ),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "Update acknowledgement", body = UpdateAck),
        (status = 400, description = "Malformed id or request body", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse)
    )
)]
pub async fn update_user(
    repo: web::Data<dyn UserRepository>,
    path: web::Path<String>,
    body: web::Json<UpdateUserRequest>,
) -> Result<HttpResponse, AppError> {
    let user_id = path.into_inner();
    let changes = UserChanges::try_from(body.into_inner())?;
    log::info!("✏️ PUT /users/{} - Updating user", user_id);

    match repo.update(&user_id, changes).await {
        Ok(ack) => {
            log::info!(
                "✅ User {} updated (matched: {}, modified: {})",
                user_id,
                ack.matched_count,
                ack.modified_count
            );
            Ok(HttpResponse::Ok().json(ack))
        }
        Err(e) => {
            log::error!("❌ Failed to update user {}: {}", user_id, e);
            Err(e)
        }
    }
}

/// DELETE /api/users/{id} - Remove um usuário
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User id (24 hex characters)")
    ),
    responses(
        (status = 200, description = "Deletion acknowledgement", body = DeleteAck),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse)
    )
)]
pub async fn delete_user(
    repo: web::Data<dyn UserRepository>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let user_id = path.into_inner();
    log::info!("🗑️ DELETE /users/{} - Deleting user", user_id);

    match repo.delete(&user_id).await {
        Ok(ack) => {
            log::info!("✅ User {} deleted: {}", user_id, ack.deleted_count);
            Ok(HttpResponse::Ok().json(ack))
        }
        Err(e) => {
            log::error!("❌ Failed to delete user {}: {}", user_id, e);
            Err(e)
        }
    }
}
