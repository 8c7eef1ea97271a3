pub mod contract;
pub mod error;
pub mod helpers;
pub mod keeper;
pub mod msg;
pub mod state;
pub mod store;

use cosmwasm_std::{Binary, Deps, DepsMut, MessageInfo, Response, StdResult};

pub use keeper::{CollectionKeeper, NftFields};
pub use store::{BaseNftStore, NftStore};

pub fn execute(deps: DepsMut, info: MessageInfo, msg: msg::ExecuteMsg) -> Result<Response, error::ContractError> {
    use msg::ExecuteMsg;

    match msg {
        ExecuteMsg::IssueClass {
            id,
            name,
            schema,
            symbol,
            mint_restricted,
            update_restricted,
        } => contract::execute_issue_class(
            deps,
            info,
            id,
            name,
            schema,
            symbol,
            mint_restricted,
            update_restricted,
        ),
        ExecuteMsg::MintNft {
            class_id,
            token_id,
            name,
            uri,
            uri_hash,
            description,
            receiver,
        } => contract::execute_mint_nft(
            deps,
            info,
            class_id,
            token_id,
            name,
            uri,
            uri_hash,
            description,
            receiver,
        ),
        ExecuteMsg::EditNft {
            class_id,
            token_id,
            name,
            uri,
            description,
        } => contract::execute_edit_nft(deps, info, class_id, token_id, name, uri, description),
        ExecuteMsg::TransferNft {
            class_id,
            token_id,
            name,
            uri,
            description,
            recipient,
        } => contract::execute_transfer_nft(
            deps,
            info,
            class_id,
            token_id,
            name,
            uri,
            description,
            recipient,
        ),
        ExecuteMsg::SendNft {
            class_id,
            token_id,
            receiver,
        } => contract::execute_send_nft(deps, info, class_id, token_id, receiver),
        ExecuteMsg::BurnNft { class_id, token_id } => {
            contract::execute_burn_nft(deps, info, class_id, token_id)
        }
        ExecuteMsg::TransferClass {
            class_id,
            recipient,
        } => contract::execute_transfer_class(deps, info, class_id, recipient),
    }
}

pub fn query(deps: Deps, msg: msg::QueryMsg) -> StdResult<Binary> {
    use msg::QueryMsg;

    match msg {
        QueryMsg::Class { class_id } => contract::query_class(deps, class_id),
        QueryMsg::Nft { class_id, token_id } => contract::query_nft(deps, class_id, token_id),
        QueryMsg::Owner { class_id, token_id } => contract::query_owner(deps, class_id, token_id),
        QueryMsg::Nfts {
            class_id,
            start_after,
            limit,
        } => contract::query_nfts(deps, class_id, start_after, limit),
        QueryMsg::Supply { class_id } => contract::query_supply(deps, class_id),
    }
}
