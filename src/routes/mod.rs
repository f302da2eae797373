use actix_files::Files;
use actix_multipart::form::MultipartFormConfig;
use actix_web::error::InternalError;
use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, web};

use crate::services::ServiceError;
use crate::storage::{LocalImageStore, UPLOADS_URL_PREFIX};

pub mod docs;
pub mod products;

/// Plain-text body returned whenever a product id does not match a record.
pub const PRODUCT_NOT_FOUND: &str = "Produto não encontrado";

/// Registers every route of the catalog service.
///
/// The repository and image store are expected as `web::Data` on the `App`;
/// `store` is only used here to mount its directory under `/uploads`.
pub fn configure(cfg: &mut web::ServiceConfig, store: &LocalImageStore) {
    cfg.app_data(json_config())
        .app_data(multipart_config())
        .service(products::list_products)
        .service(products::create_product)
        .service(products::show_product)
        .service(products::update_product)
        .service(products::delete_product)
        .service(docs::openapi_json)
        .service(docs::redoc("/api-docs"))
        .service(docs::redoc("/api-docs/"))
        .service(Files::new(UPLOADS_URL_PREFIX, store.directory()));
}

/// Translates a service failure into the HTTP response clients see.
pub fn service_error_response(err: ServiceError) -> HttpResponse {
    match err {
        ServiceError::NotFound => plain_text(HttpResponse::NotFound(), PRODUCT_NOT_FOUND),
        ServiceError::Form(message) => plain_text(HttpResponse::BadRequest(), message),
        ServiceError::Internal => HttpResponse::InternalServerError().finish(),
    }
}

fn plain_text(
    mut builder: actix_web::HttpResponseBuilder,
    body: impl Into<String>,
) -> HttpResponse {
    builder.content_type(ContentType::plaintext()).body(body.into())
}

/// Malformed JSON bodies become a plain-text 400 instead of actix's default.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let response = plain_text(HttpResponse::BadRequest(), err.to_string());
        InternalError::from_response(err, response).into()
    })
}

fn multipart_config() -> MultipartFormConfig {
    MultipartFormConfig::default().error_handler(|err, _req| {
        let response = plain_text(HttpResponse::BadRequest(), err.to_string());
        InternalError::from_response(err, response).into()
    })
}
