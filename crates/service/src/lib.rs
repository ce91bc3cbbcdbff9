//! Service layer providing business-oriented CRUD operations on top of models.
//! - Every function takes its connection explicitly: a `DatabaseConnection`
//!   runs standalone, a `DatabaseTransaction` joins the caller's transaction.
//! - Entities never cross this boundary; callers get the flat records in [`dto`].

pub mod errors;
pub mod dto;
pub mod section_service;
pub mod product_service;
pub mod store_service;
#[cfg(test)]
pub mod test_support;
