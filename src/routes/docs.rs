//! OpenAPI document and interactive documentation for the catalog API.
//!
//! The schemas below describe the wire format only; they are declared by hand
//! next to the routes and never inspected at runtime.

use actix_web::{HttpResponse, Responder, get};
use utoipa::{OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};

use crate::routes::products;

/// Product as returned by every endpoint.
#[allow(dead_code)]
#[derive(ToSchema)]
#[schema(as = Produto)]
pub struct ProductDoc {
    #[schema(example = 1)]
    id: i32,
    #[schema(example = "Caneta azul")]
    nome: String,
    #[schema(example = 2.5)]
    preco: f64,
    #[schema(example = 100)]
    quantidade: i32,
    #[schema(example = "/uploads/6f1c0d3a9b8e4f7a8c2d1e0f9a8b7c6d.png")]
    imagem: Option<String>,
}

/// Multipart body of `POST /produtos`.
#[allow(dead_code)]
#[derive(ToSchema)]
#[schema(as = NovoProduto)]
pub struct CreateProductDoc {
    nome: String,
    preco: f64,
    quantidade: i32,
    #[schema(value_type = Option<String>, format = Binary)]
    imagem: Option<Vec<u8>>,
}

/// JSON body of `PUT /produtos/{id}`.
#[allow(dead_code)]
#[derive(ToSchema)]
#[schema(as = AtualizacaoProduto)]
pub struct UpdateProductDoc {
    nome: String,
    preco: f64,
    imagem: Option<String>,
    quantidade: i32,
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "API de Vendas",
        description = "Documentação da API de Vendas",
        version = "1.0.0"
    ),
    paths(
        products::list_products,
        products::create_product,
        products::show_product,
        products::update_product,
        products::delete_product
    ),
    components(schemas(ProductDoc, CreateProductDoc, UpdateProductDoc)),
    tags((name = "produtos", description = "Cadastro de produtos"))
)]
pub struct ApiDoc;

/// Raw OpenAPI document consumed by the documentation page.
#[get("/api-docs/openapi.json")]
pub async fn openapi_json() -> impl Responder {
    HttpResponse::Ok().json(ApiDoc::openapi())
}

/// Interactive documentation page mounted at `path`.
pub fn redoc(path: &'static str) -> Redoc<utoipa::openapi::OpenApi> {
    Redoc::with_url(path, ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_product_route() {
        let doc = ApiDoc::openapi();

        let collection = doc.paths.paths.get("/produtos").unwrap();
        assert!(collection.get.is_some());
        assert!(collection.post.is_some());

        let item = doc.paths.paths.get("/produtos/{id}").unwrap();
        assert!(item.get.is_some());
        assert!(item.put.is_some());
        assert!(item.delete.is_some());
    }

    #[test]
    fn registers_wire_schemas() {
        let doc = ApiDoc::openapi();
        let schemas = doc.components.unwrap().schemas;

        assert!(schemas.contains_key("Produto"));
        assert!(schemas.contains_key("NovoProduto"));
        assert!(schemas.contains_key("AtualizacaoProduto"));
    }
}
