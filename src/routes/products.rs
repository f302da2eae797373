use actix_multipart::form::MultipartForm;
use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::forms::products::CreateProductForm;
use crate::repository::InMemoryRepository;
use crate::routes::docs::{CreateProductDoc, ProductDoc, UpdateProductDoc};
use crate::routes::service_error_response;
use crate::services::products::{
    create_product as create_product_service, delete_product as delete_product_service,
    show_product as show_product_service, show_products as show_products_service,
    update_product as update_product_service,
};
use crate::storage::LocalImageStore;

#[utoipa::path(
    tag = "produtos",
    summary = "Lista todos os produtos",
    responses((status = 200, description = "Lista de produtos", body = [ProductDoc]))
)]
#[get("/produtos")]
pub async fn list_products(repo: web::Data<InMemoryRepository>) -> impl Responder {
    match show_products_service(repo.get_ref()) {
        Ok(products) => HttpResponse::Ok().json(products),
        Err(err) => service_error_response(err),
    }
}

#[utoipa::path(
    tag = "produtos",
    summary = "Cria um novo produto com upload de imagem",
    request_body(content = CreateProductDoc, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Produto criado com sucesso", body = ProductDoc),
        (status = 400, description = "Dados do produto inválidos", body = String, content_type = "text/plain")
    )
)]
#[post("/produtos")]
pub async fn create_product(
    repo: web::Data<InMemoryRepository>,
    store: web::Data<LocalImageStore>,
    MultipartForm(form): MultipartForm<CreateProductForm>,
) -> impl Responder {
    match create_product_service(&form, repo.get_ref(), store.get_ref()) {
        Ok(product) => HttpResponse::Created().json(product),
        Err(err) => service_error_response(err),
    }
}

#[utoipa::path(
    tag = "produtos",
    summary = "Obtém um produto pelo ID",
    params(("id" = i32, Path, description = "Identificador do produto")),
    responses(
        (status = 200, description = "Produto encontrado", body = ProductDoc),
        (status = 404, description = "Produto não encontrado", body = String, content_type = "text/plain")
    )
)]
#[get("/produtos/{id}")]
pub async fn show_product(
    product_id: web::Path<String>,
    repo: web::Data<InMemoryRepository>,
) -> impl Responder {
    match show_product_service(&product_id, repo.get_ref()) {
        Ok(product) => HttpResponse::Ok().json(product),
        Err(err) => service_error_response(err),
    }
}

#[utoipa::path(
    tag = "produtos",
    summary = "Atualiza um produto pelo ID",
    params(("id" = i32, Path, description = "Identificador do produto")),
    request_body(content = UpdateProductDoc, content_type = "application/json"),
    responses(
        (status = 200, description = "Produto atualizado com sucesso", body = ProductDoc),
        (status = 400, description = "Dados do produto inválidos", body = String, content_type = "text/plain"),
        (status = 404, description = "Produto não encontrado", body = String, content_type = "text/plain")
    )
)]
#[put("/produtos/{id}")]
pub async fn update_product(
    product_id: web::Path<String>,
    repo: web::Data<InMemoryRepository>,
    body: web::Json<serde_json::Value>,
) -> impl Responder {
    match update_product_service(&product_id, body.into_inner(), repo.get_ref()) {
        Ok(product) => HttpResponse::Ok().json(product),
        Err(err) => service_error_response(err),
    }
}

#[utoipa::path(
    tag = "produtos",
    summary = "Exclui um produto pelo ID",
    params(("id" = i32, Path, description = "Identificador do produto")),
    responses(
        (status = 204, description = "Produto excluído com sucesso"),
        (status = 404, description = "Produto não encontrado", body = String, content_type = "text/plain")
    )
)]
#[delete("/produtos/{id}")]
pub async fn delete_product(
    product_id: web::Path<String>,
    repo: web::Data<InMemoryRepository>,
) -> impl Responder {
    match delete_product_service(&product_id, repo.get_ref()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => service_error_response(err),
    }
}
