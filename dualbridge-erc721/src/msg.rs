use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Binary;
use dualbridge_registry::TokenPair;

use crate::state::Params;

#[cw_serde]
pub struct InstantiateMsg {
    pub params: ParamsMsg,
    #[serde(default)]
    pub token_pairs: Vec<TokenPair>,
}

#[cw_serde]
pub struct ParamsMsg {
    pub enable_erc721: bool,
    pub authority: String,
    pub module_address: String,
    pub module_evm_address: String,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Move native NFTs of one class to their ERC-721 form held by
    /// `receiver` (`0x` address)
    ConvertNft {
        class_id: String,
        token_ids: Vec<String>,
        receiver: String,
    },
    /// Move ERC-721 tokens held by the sender's VM account to native NFTs
    /// owned by `receiver`
    ConvertErc721 {
        contract: String,
        token_ids: Vec<String>,
        receiver: String,
    },
    /// Pair an existing class with a bridge-deployed contract (authority only)
    RegisterNft { class_id: String, contract: String },
    /// Pair an externally owned ERC-721 with a new mirror class (authority only)
    RegisterErc721 { contract: String },
    /// Enable or disable a pair by class id or contract (authority only)
    ToggleNftConversion { token: String },
    UpdateParams { params: ParamsMsg },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(Params)]
    Params {},
    #[returns(TokenPair)]
    TokenPair { token: String },
    #[returns(TokenPairsResponse)]
    TokenPairs {
        start_after: Option<Binary>,
        limit: Option<u32>,
    },
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
