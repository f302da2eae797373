use serde::{Deserialize, Serialize};

use crate::domain::types::{ImagePath, ProductId, ProductName, ProductPrice, ProductQuantity};

/// A catalog entry as stored and returned by the API.
///
/// Field names on the wire follow the public `produtos` contract.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: ProductId,
    #[serde(rename = "nome")]
    pub name: ProductName,
    #[serde(rename = "preco")]
    pub price: ProductPrice,
    #[serde(rename = "quantidade")]
    pub quantity: ProductQuantity,
    /// `/uploads/<file>` for stored uploads, otherwise whatever the last update set.
    #[serde(rename = "imagem")]
    pub image: Option<ImagePath>,
}

/// Information required to create a new [`Product`]. The id is assigned by the store.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct NewProduct {
    pub name: ProductName,
    pub price: ProductPrice,
    pub quantity: ProductQuantity,
    pub image: Option<ImagePath>,
}

/// Full replacement of the mutable fields of an existing [`Product`].
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct UpdateProduct {
    pub name: ProductName,
    pub price: ProductPrice,
    pub quantity: ProductQuantity,
    pub image: Option<ImagePath>,
}

impl Product {
    /// Builds the stored record for `new` under the freshly assigned `id`.
    pub fn from_new(id: ProductId, new: &NewProduct) -> Self {
        Self {
            id,
            name: new.name.clone(),
            price: new.price,
            quantity: new.quantity,
            image: new.image.clone(),
        }
    }

    /// Overwrites every mutable field, including clearing the image when absent.
    pub fn apply(&mut self, update: &UpdateProduct) {
        self.name = update.name.clone();
        self.price = update.price;
        self.quantity = update.quantity;
        self.image = update.image.clone();
    }
}
