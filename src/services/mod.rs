mod errors;

pub use errors::{ServiceError, ServiceResult};

pub mod products;
