use cosmwasm_std::StdError;
use dualbridge_registry::{RegistryError, Unauthorized};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("unauthorized: {0}")]
    Unauthorized(#[from] Unauthorized),

    #[error("{0}")]
    Registry(#[from] RegistryError),

    /// `asset` is a class id or `class_id/token_id`
    #[error("{asset} already exists")]
    AlreadyExists { asset: String },

    #[error("unknown asset: {asset}")]
    UnknownAsset { asset: String },

    #[error("invalid token id {token_id:?}: {reason}")]
    InvalidTokenId { token_id: String, reason: String },
}

pub(crate) fn nft_key(class_id: &str, token_id: &str) -> String {
    format!("{class_id}/{token_id}")
}
