use actix_web::{http::header, HttpResponse, Responder};

pub async fn welcome() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("Welcome to my API")
}

/// Swagger UI só responde com a barra final
pub async fn docs_redirect() -> impl Responder {
    HttpResponse::Found()
        .insert_header((header::LOCATION, "/api-doc/"))
        .finish()
}
