use cosmwasm_std::StdError;
use thiserror::Error;

use crate::authz::Unauthorized;

#[derive(Error, Debug, PartialEq)]
pub enum RegistryError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("unauthorized: {0}")]
    Unauthorized(#[from] Unauthorized),

    #[error("an enabled token pair is already registered for {key}")]
    DuplicateAsset { key: String },

    #[error("no enabled token pair registered for {asset}")]
    AssetNotRegistered { asset: String },

    #[error("invalid asset id {id:?}: {reason}")]
    InvalidAssetId { id: String, reason: String },

    #[error("invalid contract address {address:?}: expected 0x followed by 40 hex digits")]
    InvalidContractAddress { address: String },
}
