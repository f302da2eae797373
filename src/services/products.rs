use crate::domain::product::{Product, UpdateProduct};
use crate::domain::types::ProductId;
use crate::forms::products::{
    CreateProductForm, CreateProductFormPayload, UpdateProductForm, UpdateProductFormPayload,
};
use crate::repository::{ProductReader, ProductWriter};
use crate::storage::ImageStore;

use super::{ServiceError, ServiceResult};

/// Ids arrive as raw path segments. Anything that is not a positive integer
/// can never match a stored product and is reported as not found.
fn parse_product_id(product_id: &str) -> ServiceResult<ProductId> {
    product_id
        .parse::<ProductId>()
        .map_err(|_| ServiceError::NotFound)
}

/// Returns the whole catalog in insertion order.
pub fn show_products<R>(repo: &R) -> ServiceResult<Vec<Product>>
where
    R: ProductReader,
{
    match repo.list_products() {
        Ok(products) => Ok(products),
        Err(e) => {
            log::error!("Failed to list products: {e}");
            Err(ServiceError::Internal)
        }
    }
}

pub fn show_product<R>(product_id: &str, repo: &R) -> ServiceResult<Product>
where
    R: ProductReader,
{
    let product_id = parse_product_id(product_id)?;

    match repo.get_product_by_id(product_id) {
        Ok(Some(product)) => Ok(product),
        Ok(None) => Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get product: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Core business logic for `POST /produtos`.
///
/// Validates the multipart form, copies the optional image into the image
/// store and appends the product to the catalog. The stored record, with its
/// assigned id, is returned.
pub fn create_product<R, S>(form: &CreateProductForm, repo: &R, store: &S) -> ServiceResult<Product>
where
    R: ProductWriter,
    S: ImageStore,
{
    let payload = CreateProductFormPayload::try_from(form)?;

    let image = match payload.image {
        Some(upload) => match store.save_image(upload.path, upload.file_name) {
            Ok(path) => Some(path),
            Err(e) => {
                log::error!("Failed to store product image: {e}");
                return Err(ServiceError::Internal);
            }
        },
        None => None,
    };

    let new_product = payload.into_new_product(image);
    match repo.create_product(&new_product) {
        Ok(product) => {
            log::info!("Created product {} ({})", product.id, product.name);
            Ok(product)
        }
        Err(e) => {
            log::error!("Failed to create product: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Core business logic for `PUT /produtos/{id}`.
///
/// The record is looked up before the body is parsed, so an unknown id is
/// reported as not found whatever the body contains. Every mutable field is
/// then replaced by the validated form contents; an omitted image clears the
/// stored one.
pub fn update_product<R>(
    product_id: &str,
    body: serde_json::Value,
    repo: &R,
) -> ServiceResult<Product>
where
    R: ProductReader + ProductWriter,
{
    let product_id = parse_product_id(product_id)?;

    match repo.get_product_by_id(product_id) {
        Ok(Some(_)) => {}
        Ok(None) => return Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get product: {e}");
            return Err(ServiceError::Internal);
        }
    }

    let form = UpdateProductForm::try_from(body)?;
    let update: UpdateProduct = UpdateProductFormPayload::try_from(form)?.into();

    match repo.update_product(product_id, &update) {
        Ok(Some(product)) => {
            log::info!("Updated product {}", product.id);
            Ok(product)
        }
        Ok(None) => Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to update product: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Removes a product from the catalog. Its image file stays on disk.
pub fn delete_product<R>(product_id: &str, repo: &R) -> ServiceResult<()>
where
    R: ProductWriter,
{
    let product_id = parse_product_id(product_id)?;

    match repo.delete_product(product_id) {
        Ok(Some(product)) => {
            log::info!("Deleted product {}", product.id);
            Ok(())
        }
        Ok(None) => Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to delete product: {e}");
            Err(ServiceError::Internal)
        }
    }
}
