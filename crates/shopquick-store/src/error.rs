use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("invalid page {0}: pages start at 1")]
    InvalidPage(u32),

    #[error("page {page} is the last page of the catalog")]
    EndOfCatalog { page: u32 },
}
