use sea_orm::DbErr;
use thiserror::Error;

use models::errors::ModelError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error("database error: {0}")]
    Db(String),
    #[error("model error: {0}")]
    Model(#[from] ModelError),
}

impl ServiceError {
    pub fn no_store(id: i32) -> Self { Self::NotFound(format!("There is no store with the id {id}")) }

    pub fn no_section(id: i32) -> Self { Self::NotFound(format!("There is no section with the id {id}")) }

    pub fn no_product(id: i32) -> Self { Self::NotFound(format!("There is no product with the id {id}")) }

    pub fn db(e: DbErr) -> Self { Self::Db(e.to_string()) }

    /// Caller supplied a bad argument (unknown id, invalid field) as opposed to a server fault.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::NotFound(_) | Self::Model(ModelError::Validation(_)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_messages_name_the_id() {
        assert_eq!(ServiceError::no_store(7).to_string(), "There is no store with the id 7");
        assert_eq!(ServiceError::no_section(3).to_string(), "There is no section with the id 3");
        assert_eq!(ServiceError::no_product(9).to_string(), "There is no product with the id 9");
    }

    #[test]
    fn classifies_client_and_server_errors() {
        assert!(ServiceError::no_section(1).is_client_error());
        assert!(ServiceError::Model(ModelError::Validation("x".into())).is_client_error());
        assert!(!ServiceError::Model(ModelError::Db("x".into())).is_client_error());
        assert!(!ServiceError::db(DbErr::Custom("down".into())).is_client_error());
    }
}
