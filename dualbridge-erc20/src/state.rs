use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};
use dualbridge_registry::TokenPairRegistry;

/// Prefix of the native denom minted for an externally owned ERC-20.
pub const BRIDGE_DENOM_PREFIX: &str = "erc20/";

#[cw_serde]
pub struct Params {
    /// Master switch for both conversion directions
    pub enable_erc20: bool,
    /// May register pairs, toggle them and replace these params
    pub authority: Addr,
    /// Native account holding escrowed coins
    pub module_address: Addr,
    /// VM account that deploys mirror contracts and holds locked tokens
    pub module_evm_address: String,
}

pub const PARAMS: Item<Params> = Item::new("erc20_params");

/// denom <-> ERC-20 contract
pub const TOKEN_PAIRS: TokenPairRegistry =
    TokenPairRegistry::new("erc20_pairs", "erc20_denom_map", "erc20_contract_map");

/// (holder, denom) -> amount; zero balances are not stored
pub const BALANCES: Map<(&Addr, &str), Uint128> = Map::new("bank_balances");

/// denom -> total amount in circulation
pub const SUPPLY: Map<&str, Uint128> = Map::new("bank_supply");

pub fn bridge_denom(contract: &str) -> String {
    format!("{BRIDGE_DENOM_PREFIX}{contract}")
}
