use cosmwasm_std::{StdError, Uint128};
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

    #[error("amount must be greater than zero")]
    InvalidAmount,

    #[error("unsupported operation: {reason}")]
    UnsupportedOperation { reason: String },

    #[error("erc20 conversions are disabled")]
    ConversionDisabled,

    #[error("{address} holds {available}{denom}, needs {required}{denom}")]
    InsufficientFunds {
        address: String,
        denom: String,
        available: Uint128,
        required: Uint128,
    },

    #[error("arithmetic overflow")]
    Overflow,

    #[error("vm call on {contract} failed: {msg}")]
    Vm { contract: String, msg: String },

    /// Both sides of a conversion could not be reconciled.
    #[error("internal error: {msg}")]
    Internal { msg: String },
}
