//! Core library exports for the product catalog service.
//!
//! The `data` feature exposes the domain types and the in-memory repository.
//! The `server` feature adds forms, services, image storage and the actix-web
//! routes used by the `vendas-api` binary.

#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod error_conversions;
#[cfg(feature = "data")]
pub mod repository;

#[cfg(feature = "server")]
pub mod forms;
#[cfg(feature = "server")]
pub mod models;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod services;
#[cfg(feature = "server")]
pub mod storage;
