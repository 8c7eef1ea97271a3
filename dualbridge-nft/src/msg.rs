use cosmwasm_schema::{cw_serde, QueryResponses};

use crate::state::{Class, Nft};

#[cw_serde]
pub enum ExecuteMsg {
    /// Create a new class owned by the sender
    IssueClass {
        id: String,
        name: String,
        schema: String,
        symbol: String,
        mint_restricted: bool,
        update_restricted: bool,
    },
    /// Mint a token; `receiver` defaults to the sender
    MintNft {
        class_id: String,
        token_id: String,
        name: String,
        uri: String,
        uri_hash: String,
        description: String,
        receiver: Option<String>,
    },
    /// Edit token fields. `"[do-not-modify]"` leaves a field as it is.
    EditNft {
        class_id: String,
        token_id: String,
        name: String,
        uri: String,
        description: String,
    },
    /// Transfer a token, optionally editing fields on the way
    TransferNft {
        class_id: String,
        token_id: String,
        name: String,
        uri: String,
        description: String,
        recipient: String,
    },
    /// Transfer a token without touching its fields
    SendNft {
        class_id: String,
        token_id: String,
        receiver: String,
    },
    BurnNft {
        class_id: String,
        token_id: String,
    },
    /// Hand class ownership to `recipient` (creator only)
    TransferClass {
        class_id: String,
        recipient: String,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(Class)]
    Class { class_id: String },
    #[returns(Nft)]
    Nft { class_id: String, token_id: String },
    #[returns(OwnerResponse)]
    Owner { class_id: String, token_id: String },
    /// Tokens of one class in ascending id order
    #[returns(NftsResponse)]
    Nfts {
        class_id: String,
        start_after: Option<String>,
        limit: Option<u32>,
    },
    #[returns(SupplyResponse)]
    Supply { class_id: String },
}

#[cw_serde]
pub struct OwnerResponse {
    pub owner: String,
}

#[cw_serde]
pub struct NftsResponse {
    pub nfts: Vec<Nft>,
}

#[cw_serde]
pub struct SupplyResponse {
    pub amount: u64,
}
