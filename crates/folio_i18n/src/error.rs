use thiserror::Error;

use crate::dictionary::CatalogError;

#[derive(Debug, Error)]
pub enum I18nError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("catalog parity violation: {0}")]
    Parity(String),
}
