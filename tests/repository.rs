use vendas_api::domain::product::{NewProduct, UpdateProduct};
use vendas_api::domain::types::{ImagePath, ProductId, ProductName, ProductPrice, ProductQuantity};
use vendas_api::repository::{InMemoryRepository, ProductReader, ProductWriter};

fn new_product(name: &str) -> NewProduct {
    NewProduct {
        name: ProductName::new(name).expect("valid product name"),
        price: ProductPrice::new(10.0).expect("valid price"),
        quantity: ProductQuantity::new(5).expect("valid quantity"),
        image: None,
    }
}

#[test]
fn clones_share_the_same_catalog() {
    let repo = InMemoryRepository::new();
    let other = repo.clone();

    let created = repo
        .create_product(&new_product("Caneta"))
        .expect("should create product");

    let fetched = other
        .get_product_by_id(created.id)
        .expect("should read product")
        .expect("product should be visible through the clone");
    assert_eq!(fetched, created);
}

#[test]
fn product_lifecycle_through_repository_traits() {
    let repo = InMemoryRepository::new();

    let created = repo
        .create_product(&NewProduct {
            image: Some(ImagePath::new("/uploads/caneta.png").expect("valid image path")),
            ..new_product("Caneta")
        })
        .expect("should create product");
    assert_eq!(created.id, ProductId::new(1).expect("valid id"));

    let update = UpdateProduct {
        name: ProductName::new("Lápis").expect("valid product name"),
        price: ProductPrice::new(1.25).expect("valid price"),
        quantity: ProductQuantity::new(0).expect("valid quantity"),
        image: None,
    };
    let updated = repo
        .update_product(created.id, &update)
        .expect("should update product")
        .expect("product should exist");
    assert_eq!(updated.name, "Lápis");
    assert!(updated.image.is_none());

    let removed = repo
        .delete_product(created.id)
        .expect("should delete product")
        .expect("product should exist");
    assert_eq!(removed, updated);
    assert!(repo.list_products().expect("should list").is_empty());
}
