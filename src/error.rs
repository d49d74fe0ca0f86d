use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("entity type {name:?} is already registered")]
    AlreadyRegistered { name: String },
}

pub type CatalogResult<T> = Result<T, CatalogError>;
