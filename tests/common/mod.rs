//! Helpers for integration tests.
#![allow(dead_code)]

use actix_web::test::TestRequest;
use tempfile::TempDir;
use vendas_api::repository::InMemoryRepository;
use vendas_api::storage::LocalImageStore;

pub const BOUNDARY: &str = "vendas-api-test-boundary";

/// Fresh catalog plus an upload directory removed when the context is dropped.
pub struct TestContext {
    _dir: TempDir,
    pub repo: InMemoryRepository,
    pub store: LocalImageStore,
}

impl TestContext {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let store = LocalImageStore::new(dir.path().join("uploads"));
        store
            .ensure_directory()
            .expect("Failed to create upload directory");
        TestContext {
            _dir: dir,
            repo: InMemoryRepository::new(),
            store,
        }
    }
}

/// Builds the full application around a [`TestContext`] and initialises it.
macro_rules! init_app {
    ($ctx:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new($ctx.repo.clone()))
                .app_data(actix_web::web::Data::new($ctx.store.clone()))
                .configure(|cfg| vendas_api::routes::configure(cfg, &$ctx.store)),
        )
        .await
    };
}

/// Encodes text fields and an optional `imagem` file as `multipart/form-data`.
pub fn multipart_body(fields: &[(&str, &str)], image: Option<(&str, &[u8])>) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }
    if let Some((file_name, bytes)) = image {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"imagem\"; filename=\"{file_name}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

/// `POST /produtos` request carrying the given multipart fields.
pub fn create_request(fields: &[(&str, &str)], image: Option<(&str, &[u8])>) -> TestRequest {
    TestRequest::post()
        .uri("/produtos")
        .insert_header((
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        ))
        .set_payload(multipart_body(fields, image))
}

/// Standard fields of the product used throughout the tests.
pub fn product_fields(name: &str) -> Vec<(&str, &str)> {
    vec![("nome", name), ("preco", "10"), ("quantidade", "5")]
}
