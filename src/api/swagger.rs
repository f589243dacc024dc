use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Users API",
        version = "1.0.0",
        description = "CRUD over the `users` collection.\n\nErrors answer with `{\"message\": \"...\"}`: 400 for malformed ids or bodies, 500 for database failures."
    ),
    paths(
        crate::api::users::create_user,
        crate::api::users::list_users,
        crate::api::users::get_user,
        crate::api::users::update_user,
        crate::api::users::delete_user,
    ),
    components(
        schemas(
            crate::models::CreateUserRequest,
            crate::models::UpdateUserRequest,
            crate::models::UserResponse,
            crate::models::UpdateAck,
            crate::models::DeleteAck,
            crate::utils::ErrorResponse,
        )
    ),
    tags(
        (name = "Users", description = "Create, list, fetch, update and delete users."),
    )
)]
pub struct ApiDoc;
