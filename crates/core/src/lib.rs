//! Core domain types and storage contracts for the products service.
//!
//! This crate has no I/O of its own. It defines the `Product` record, the
//! `ProductStore` trait implemented by the storage backends, and pure helpers
//! such as the HTTP status mapping for storage errors.

pub mod product;
pub mod storage;
