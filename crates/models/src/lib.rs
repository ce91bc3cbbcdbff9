//! SeaORM entities for the store / section / product schema, plus connection setup.
pub mod errors;
pub mod db;
pub mod store;
pub mod section;
pub mod product;

#[cfg(test)]
mod tests;
