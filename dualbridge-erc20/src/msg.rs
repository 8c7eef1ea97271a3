use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Binary, Coin, Uint128};
use dualbridge_registry::TokenPair;

use crate::state::Params;

#[cw_serde]
pub struct InstantiateMsg {
    pub params: ParamsMsg,
    /// Pairs restored from an exported snapshot
    #[serde(default)]
    pub token_pairs: Vec<TokenPair>,
}

#[cw_serde]
pub struct ParamsMsg {
    pub enable_erc20: bool,
    pub authority: String,
    pub module_address: String,
    pub module_evm_address: String,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Move a native coin into its ERC-20 representation held by `receiver`
    /// (`0x` address)
    ConvertCoin { coin: Coin, receiver: String },
    /// Move ERC-20 tokens held by the sender's VM account back to native
    /// coins owned by `receiver`
    ConvertErc20 {
        contract: String,
        amount: Uint128,
        receiver: String,
    },
    /// Pair a native denom with a bridge-deployed mirror contract (authority only)
    RegisterCoin { denom: String, contract: String },
    /// Pair an externally owned ERC-20 with a bridge-minted denom (authority only)
    RegisterErc20 { contract: String },
    /// Enable or disable a pair by denom or contract (authority only)
    ToggleTokenConversion { token: String },
    /// Re-point a pair at a new contract (authority only)
    UpdateTokenPairErc20 { contract: String, new_contract: String },
    /// Replace the module params (authority only)
    UpdateParams { params: ParamsMsg },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(Params)]
    Params {},
    #[returns(TokenPair)]
    TokenPair { token: String },
    /// Pairs ascending by pair id
    #[returns(TokenPairsResponse)]
    TokenPairs {
        start_after: Option<Binary>,
        limit: Option<u32>,
    },
    #[returns(Coin)]
    Balance { address: String, denom: String },
    #[returns(Coin)]
    Supply { denom: String },
    /// Params and every pair, in a form `InstantiateMsg` accepts
    #[returns(ExportResponse)]
    Export {},
}

#[cw_serde]
pub struct TokenPairsResponse {
    pub token_pairs: Vec<TokenPair>,
}

#[cw_serde]
pub struct ExportResponse {
    pub params: Params,
    pub token_pairs: Vec<TokenPair>,
}
