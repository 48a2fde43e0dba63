use crate::store::StoreError;

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    #[error("invalid amount: {0}")]
    InvalidAmount(String),
    #[error("no transaction at index {0}")]
    IndexOutOfRange(usize),
    #[error("store error: {0}")]
    Store(#[from] StoreError),
    #[error("corrupt collection {key}: {source}")]
    Codec {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}
