//! Error conversion glue between layers.
//!
//! The domain layer must not depend on service/repository error types, so the
//! `From` impls connecting them live here.

use crate::domain::types::TypeConstraintError;
use crate::repository::RepositoryError;

impl From<TypeConstraintError> for RepositoryError {
    fn from(val: TypeConstraintError) -> Self {
        RepositoryError::ValidationError(val.to_string())
    }
}

#[cfg(feature = "server")]
mod server {
    use crate::forms::products::{CreateProductFormError, UpdateProductFormError};
    use crate::services::ServiceError;

    impl From<CreateProductFormError> for ServiceError {
        fn from(val: CreateProductFormError) -> Self {
            ServiceError::Form(val.to_string())
        }
    }

    impl From<UpdateProductFormError> for ServiceError {
        fn from(val: UpdateProductFormError) -> Self {
            ServiceError::Form(val.to_string())
        }
    }
}
