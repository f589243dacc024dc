pub mod root;
pub mod swagger;
pub mod users;

use crate::utils::json_error_handler;
use actix_web::web;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Rotas da aplicação; o repositório de usuários é registrado pelo chamador
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .service(
            SwaggerUi::new("/api-doc/{_:.*}")
                .url("/api-docs/openapi.json", swagger::ApiDoc::openapi())
        )
        .route("/", web::get().to(root::welcome))
        .route("/api-doc", web::get().to(root::docs_redirect))
        .service(
            web::scope("/api")
                .route("/users", web::post().to(users::create_user))
                .route("/users", web::get().to(users::list_users))
                .route("/users/{id}", web::get().to(users::get_user))
                .route("/users/{id}", web::put().to(users::update_user))
                .route("/users/{id}", web::delete().to(users::delete_user))
        );
}
