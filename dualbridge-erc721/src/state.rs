use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use cw_storage_plus::Item;
use dualbridge_registry::TokenPairRegistry;

/// Prefix of the native class issued for an externally owned ERC-721.
pub const BRIDGE_CLASS_PREFIX: &str = "erc721/";

#[cw_serde]
pub struct Params {
    pub enable_erc721: bool,
    pub authority: Addr,
    /// Native account holding escrowed NFTs and creating mirror classes
    pub module_address: Addr,
    pub module_evm_address: String,
}

pub const PARAMS: Item<Params> = Item::new("erc721_params");

/// class id <-> ERC-721 contract
pub const NFT_PAIRS: TokenPairRegistry =
    TokenPairRegistry::new("erc721_pairs", "erc721_class_map", "erc721_contract_map");

pub fn bridge_class_id(contract: &str) -> String {
    format!("{BRIDGE_CLASS_PREFIX}{contract}")
}
