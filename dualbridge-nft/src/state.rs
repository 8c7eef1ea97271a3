use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use cw_storage_plus::Map;

/// A native NFT collection.
#[cw_serde]
pub struct Class {
    pub id: String,
    pub name: String,
    pub symbol: String,
    /// Free-form metadata schema
    pub schema: String,
    pub creator: Addr,
    /// Only the creator may mint
    pub mint_restricted: bool,
    /// Nobody may change token fields
    pub update_restricted: bool,
}

#[cw_serde]
#[derive(Default)]
pub struct NftMetadata {
    pub name: String,
    pub description: String,
}

#[cw_serde]
pub struct Nft {
    pub class_id: String,
    pub id: String,
    pub uri: String,
    pub uri_hash: String,
    pub metadata: NftMetadata,
    pub owner: Addr,
}

pub const CLASSES: Map<&str, Class> = Map::new("nft_classes");

/// (class_id, token_id) -> Nft
pub const NFTS: Map<(&str, &str), Nft> = Map::new("nft_tokens");

/// class_id -> number of live tokens
pub const CLASS_SUPPLY: Map<&str, u64> = Map::new("nft_supply");
