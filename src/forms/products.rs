use std::path::Path;

use actix_multipart::form::{MultipartForm, tempfile::TempFile, text::Text};
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::product::{NewProduct, UpdateProduct};
use crate::domain::types::{
    ImagePath, ProductName, ProductPrice, ProductQuantity, TypeConstraintError,
};

/// `multipart/form-data` body accepted by `POST /produtos`.
#[derive(MultipartForm)]
pub struct CreateProductForm {
    pub nome: Option<Text<String>>,
    pub preco: Option<Text<String>>,
    pub quantidade: Option<Text<String>>,
    #[multipart(limit = "10MB")]
    pub imagem: Option<TempFile>,
}

/// Image part of a [`CreateProductForm`], borrowed from the multipart temp file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageUpload<'a> {
    pub path: &'a Path,
    pub file_name: Option<&'a str>,
}

/// Validated contents of a [`CreateProductForm`].
#[derive(Debug, Clone, PartialEq)]
pub struct CreateProductFormPayload<'a> {
    pub name: ProductName,
    pub price: ProductPrice,
    pub quantity: ProductQuantity,
    pub image: Option<ImageUpload<'a>>,
}

impl CreateProductFormPayload<'_> {
    pub fn into_new_product(self, image: Option<ImagePath>) -> NewProduct {
        NewProduct {
            name: self.name,
            price: self.price,
            quantity: self.quantity,
            image,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CreateProductFormError {
    #[error("Campo obrigatório ausente: {0}")]
    MissingField(&'static str),
    #[error("Formulário contém dados inválidos: {0}")]
    TypeConstraint(String),
}

impl From<TypeConstraintError> for CreateProductFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

fn required_text<'a>(
    field: &'a Option<Text<String>>,
    name: &'static str,
) -> Result<&'a str, CreateProductFormError> {
    field
        .as_ref()
        .map(|text| text.as_str())
        .ok_or(CreateProductFormError::MissingField(name))
}

impl<'a> TryFrom<&'a CreateProductForm> for CreateProductFormPayload<'a> {
    type Error = CreateProductFormError;

    fn try_from(form: &'a CreateProductForm) -> Result<Self, Self::Error> {
        let name = ProductName::new(required_text(&form.nome, "nome")?)?;
        let price = required_text(&form.preco, "preco")?.parse::<ProductPrice>()?;
        let quantity = required_text(&form.quantidade, "quantidade")?.parse::<ProductQuantity>()?;

        // Browsers send an empty, nameless part when no file was chosen.
        let image = form
            .imagem
            .as_ref()
            .filter(|file| {
                file.size > 0 || file.file_name.as_deref().is_some_and(|n| !n.is_empty())
            })
            .map(|file| ImageUpload {
                path: file.file.path(),
                file_name: file.file_name.as_deref(),
            });

        Ok(Self {
            name,
            price,
            quantity,
            image,
        })
    }
}

/// JSON body accepted by `PUT /produtos/{id}`.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateProductForm {
    #[serde(rename = "nome")]
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(rename = "preco")]
    #[validate(range(min = 0.0))]
    pub price: f64,
    #[serde(rename = "quantidade")]
    #[validate(range(min = 0))]
    pub quantity: i32,
    #[serde(rename = "imagem", default)]
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateProductFormPayload {
    pub name: ProductName,
    pub price: ProductPrice,
    pub quantity: ProductQuantity,
    pub image: Option<ImagePath>,
}

impl From<UpdateProductFormPayload> for UpdateProduct {
    fn from(payload: UpdateProductFormPayload) -> Self {
        Self {
            name: payload.name,
            price: payload.price,
            quantity: payload.quantity,
            image: payload.image,
        }
    }
}

#[derive(Debug, Error)]
pub enum UpdateProductFormError {
    #[error("Falha na validação do produto: {0}")]
    Validation(String),
    #[error("Produto contém dados inválidos: {0}")]
    TypeConstraint(String),
    #[error("Corpo da requisição inválido: {0}")]
    Body(String),
}

impl From<serde_json::Error> for UpdateProductFormError {
    fn from(value: serde_json::Error) -> Self {
        Self::Body(value.to_string())
    }
}

impl From<ValidationErrors> for UpdateProductFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for UpdateProductFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

/// The PUT body is read as loose JSON so that the record lookup can happen
/// before the shape of the body is checked.
impl TryFrom<serde_json::Value> for UpdateProductForm {
    type Error = UpdateProductFormError;

    fn try_from(body: serde_json::Value) -> Result<Self, Self::Error> {
        Ok(serde_json::from_value(body)?)
    }
}

impl TryFrom<UpdateProductForm> for UpdateProductFormPayload {
    type Error = UpdateProductFormError;

    fn try_from(value: UpdateProductForm) -> Result<Self, Self::Error> {
        value.validate()?;

        // A blank image reference clears the image like an omitted one.
        let image = value
            .image
            .filter(|image| !image.trim().is_empty())
            .map(ImagePath::new)
            .transpose()?;

        Ok(Self {
            name: ProductName::new(value.name)?,
            price: ProductPrice::new(value.price)?,
            quantity: ProductQuantity::new(value.quantity)?,
            image,
        })
    }
}
