use crate::domain::product::{NewProduct, Product, UpdateProduct};
use crate::domain::types::ProductId;
use crate::repository::{
    InMemoryRepository, ProductReader, ProductWriter, RepositoryError, RepositoryResult,
};

impl ProductReader for InMemoryRepository {
    fn list_products(&self) -> RepositoryResult<Vec<Product>> {
        Ok(self.lock()?.products.clone())
    }

    fn get_product_by_id(&self, id: ProductId) -> RepositoryResult<Option<Product>> {
        Ok(self.lock()?.products.iter().find(|p| p.id == id).cloned())
    }
}

impl ProductWriter for InMemoryRepository {
    fn create_product(&self, product: &NewProduct) -> RepositoryResult<Product> {
        let mut state = self.lock()?;

        // Ids come from the counter, never from the list length, so they are
        // not reused after a delete.
        let next = state
            .last_id
            .checked_add(1)
            .ok_or(RepositoryError::IdExhausted)?;
        let id = ProductId::new(next)?;

        let product = Product::from_new(id, product);
        state.products.push(product.clone());
        state.last_id = next;

        Ok(product)
    }

    fn update_product(
        &self,
        id: ProductId,
        update: &UpdateProduct,
    ) -> RepositoryResult<Option<Product>> {
        let mut state = self.lock()?;

        Ok(state
            .products
            .iter_mut()
            .find(|p| p.id == id)
            .map(|product| {
                product.apply(update);
                product.clone()
            }))
    }

    fn delete_product(&self, id: ProductId) -> RepositoryResult<Option<Product>> {
        let mut state = self.lock()?;

        Ok(state
            .products
            .iter()
            .position(|p| p.id == id)
            .map(|index| state.products.remove(index)))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::thread;

    use super::*;
    use crate::domain::types::{ImagePath, ProductName, ProductPrice, ProductQuantity};

    fn new_product(name: &str) -> NewProduct {
        NewProduct {
            name: ProductName::new(name).unwrap(),
            price: ProductPrice::new(10.0).unwrap(),
            quantity: ProductQuantity::new(5).unwrap(),
            image: None,
        }
    }

    #[test]
    fn lists_products_in_insertion_order() {
        let repo = InMemoryRepository::new();
        for name in ["a", "b", "c"] {
            repo.create_product(&new_product(name)).unwrap();
        }

        let names: Vec<String> = repo
            .list_products()
            .unwrap()
            .into_iter()
            .map(|p| p.name.into_inner())
            .collect();

        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn finds_products_by_id() {
        let repo = InMemoryRepository::new();
        let created = repo.create_product(&new_product("a")).unwrap();

        assert_eq!(repo.get_product_by_id(created.id).unwrap(), Some(created));
        assert_eq!(
            repo.get_product_by_id(ProductId::new(99).unwrap()).unwrap(),
            None
        );
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let repo = InMemoryRepository::new();
        let first = repo.create_product(&new_product("a")).unwrap();
        assert_eq!(first.id, 1);

        assert!(repo.delete_product(first.id).unwrap().is_some());
        assert!(repo.list_products().unwrap().is_empty());

        let second = repo.create_product(&new_product("b")).unwrap();
        assert_eq!(second.id, 2);
    }

    #[test]
    fn delete_of_unknown_id_returns_none() {
        let repo = InMemoryRepository::new();
        let created = repo.create_product(&new_product("a")).unwrap();

        assert!(repo.delete_product(created.id).unwrap().is_some());
        assert!(repo.delete_product(created.id).unwrap().is_none());
    }

    #[test]
    fn update_overwrites_in_place() {
        let repo = InMemoryRepository::new();
        let created = repo
            .create_product(&NewProduct {
                image: Some(ImagePath::new("/uploads/old.png").unwrap()),
                ..new_product("a")
            })
            .unwrap();
        repo.create_product(&new_product("b")).unwrap();

        let update = UpdateProduct {
            name: ProductName::new("Y").unwrap(),
            price: ProductPrice::new(20.0).unwrap(),
            quantity: ProductQuantity::new(1).unwrap(),
            image: None,
        };
        let updated = repo.update_product(created.id, &update).unwrap().unwrap();

        assert_eq!(updated.name, "Y");
        assert!(updated.image.is_none());
        let products = repo.list_products().unwrap();
        assert_eq!(products[0], updated);
        assert_eq!(products[1].name, "b");
    }

    #[test]
    fn update_of_unknown_id_returns_none() {
        let repo = InMemoryRepository::new();
        let update = UpdateProduct {
            name: ProductName::new("Y").unwrap(),
            price: ProductPrice::new(20.0).unwrap(),
            quantity: ProductQuantity::new(1).unwrap(),
            image: None,
        };

        assert!(
            repo.update_product(ProductId::new(1).unwrap(), &update)
                .unwrap()
                .is_none()
        );
    }

    #[test]
    fn concurrent_creates_receive_distinct_ids() {
        let repo = InMemoryRepository::new();

        thread::scope(|scope| {
            for worker in 0..8 {
                let repo = repo.clone();
                scope.spawn(move || {
                    for i in 0..25 {
                        repo.create_product(&new_product(&format!("{worker}-{i}")))
                            .unwrap();
                    }
                });
            }
        });

        let products = repo.list_products().unwrap();
        let ids: HashSet<i32> = products.iter().map(|p| p.id.get()).collect();
        assert_eq!(products.len(), 200);
        assert_eq!(ids.len(), 200);
        assert_eq!(ids.iter().max(), Some(&200));
    }
}
