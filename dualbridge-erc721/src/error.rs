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

    #[error("{0}")]
    Nft(#[from] dualbridge_nft::error::ContractError),

    /// Empty token id list
    #[error("no token ids given")]
    InvalidAmount,

    #[error("unsupported operation: {reason}")]
    UnsupportedOperation { reason: String },

    #[error("erc721 conversions are disabled")]
    ConversionDisabled,

    #[error("vm call on {contract} failed: {msg}")]
    Vm { contract: String, msg: String },

    #[error("internal error: {msg}")]
    Internal { msg: String },
}
