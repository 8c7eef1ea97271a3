use cosmwasm_std::{to_json_binary, Binary, Deps, DepsMut, Event, MessageInfo, Response, StdResult};
use log::debug;

use crate::error::ContractError;
use crate::helpers::NftEdit;
use crate::keeper::{CollectionKeeper, NftFields};
use crate::msg::*;
use crate::store::{BaseNftStore, NftStore};

const DEFAULT_QUERY_LIMIT: u32 = 30;
const MAX_QUERY_LIMIT: u32 = 100;

fn keeper() -> CollectionKeeper<'static> {
    CollectionKeeper::new(&BaseNftStore)
}

// ─── Execute: Classes ───────────────────────────────────────────────────────

#[allow(clippy::too_many_arguments)]
pub fn execute_issue_class(
    deps: DepsMut,
    info: MessageInfo,
    id: String,
    name: String,
    schema: String,
    symbol: String,
    mint_restricted: bool,
    update_restricted: bool,
) -> Result<Response, ContractError> {
    let class = keeper().issue_class(
        deps.storage,
        &id,
        &name,
        &schema,
        &symbol,
        &info.sender,
        mint_restricted,
        update_restricted,
    )?;
    debug!("issued class {} for {}", class.id, class.creator);

    Ok(Response::new()
        .add_attribute("action", "issue_class")
        .add_event(
            Event::new("issue_class")
                .add_attribute("class_id", &class.id)
                .add_attribute("creator", class.creator.as_str())
                .add_attribute("mint_restricted", mint_restricted.to_string())
                .add_attribute("update_restricted", update_restricted.to_string()),
        ))
}

pub fn execute_transfer_class(
    deps: DepsMut,
    info: MessageInfo,
    class_id: String,
    recipient: String,
) -> Result<Response, ContractError> {
    let recipient = deps.api.addr_validate(&recipient)?;
    let class = keeper().transfer_class_owner(deps.storage, &class_id, &info.sender, &recipient)?;
    debug!("class {} handed from {} to {}", class.id, info.sender, recipient);

    Ok(Response::new()
        .add_attribute("action", "transfer_class")
        .add_event(
            Event::new("transfer_class")
                .add_attribute("class_id", &class.id)
                .add_attribute("sender", info.sender.as_str())
                .add_attribute("recipient", recipient.as_str()),
        ))
}

// ─── Execute: Tokens ────────────────────────────────────────────────────────

#[allow(clippy::too_many_arguments)]
pub fn execute_mint_nft(
    deps: DepsMut,
    info: MessageInfo,
    class_id: String,
    token_id: String,
    name: String,
    uri: String,
    uri_hash: String,
    description: String,
    receiver: Option<String>,
) -> Result<Response, ContractError> {
    let receiver = match receiver {
        Some(receiver) => deps.api.addr_validate(&receiver)?,
        None => info.sender.clone(),
    };
    let fields = NftFields {
        name,
        uri,
        uri_hash,
        description,
    };
    let nft = keeper().mint_nft(deps.storage, &class_id, &token_id, fields, &info.sender, &receiver)?;
    debug!("minted {}/{} to {}", nft.class_id, nft.id, nft.owner);

    Ok(Response::new()
        .add_attribute("action", "mint_nft")
        .add_event(
            Event::new("mint_nft")
                .add_attribute("class_id", &nft.class_id)
                .add_attribute("token_id", &nft.id)
                .add_attribute("sender", info.sender.as_str())
                .add_attribute("receiver", nft.owner.as_str()),
        ))
}

pub fn execute_edit_nft(
    deps: DepsMut,
    info: MessageInfo,
    class_id: String,
    token_id: String,
    name: String,
    uri: String,
    description: String,
) -> Result<Response, ContractError> {
    let edit = NftEdit::from_msg(name, uri, description);
    keeper().edit_nft(deps.storage, &class_id, &token_id, &edit, &info.sender)?;
    debug!("edited {class_id}/{token_id}: {:?}", edit.fields());

    let event = edit.fields().into_iter().fold(
        Event::new("edit_nft")
            .add_attribute("class_id", &class_id)
            .add_attribute("token_id", &token_id)
            .add_attribute("owner", info.sender.as_str()),
        |event, field| event.add_attribute("changed", field),
    );
    Ok(Response::new()
        .add_attribute("action", "edit_nft")
        .add_event(event))
}

#[allow(clippy::too_many_arguments)]
pub fn execute_transfer_nft(
    deps: DepsMut,
    info: MessageInfo,
    class_id: String,
    token_id: String,
    name: String,
    uri: String,
    description: String,
    recipient: String,
) -> Result<Response, ContractError> {
    let recipient = deps.api.addr_validate(&recipient)?;
    let edit = NftEdit::from_msg(name, uri, description);
    let nft = keeper().transfer_nft(deps.storage, &class_id, &token_id, &edit, &info.sender, &recipient)?;
    debug!("transferred {}/{} from {} to {}", nft.class_id, nft.id, info.sender, nft.owner);

    let event = edit.fields().into_iter().fold(
        Event::new("transfer_nft")
            .add_attribute("class_id", &nft.class_id)
            .add_attribute("token_id", &nft.id)
            .add_attribute("sender", info.sender.as_str())
            .add_attribute("recipient", nft.owner.as_str()),
        |event, field| event.add_attribute("changed", field),
    );
    Ok(Response::new()
        .add_attribute("action", "transfer_nft")
        .add_event(event))
}

pub fn execute_send_nft(
    deps: DepsMut,
    info: MessageInfo,
    class_id: String,
    token_id: String,
    receiver: String,
) -> Result<Response, ContractError> {
    let receiver = deps.api.addr_validate(&receiver)?;
    let nft = keeper().send_nft(deps.storage, &class_id, &token_id, &info.sender, &receiver)?;
    debug!("sent {}/{} from {} to {}", nft.class_id, nft.id, info.sender, nft.owner);

    Ok(Response::new()
        .add_attribute("action", "send_nft")
        .add_event(
            Event::new("send_nft")
                .add_attribute("class_id", &nft.class_id)
                .add_attribute("token_id", &nft.id)
                .add_attribute("sender", info.sender.as_str())
                .add_attribute("receiver", nft.owner.as_str()),
        ))
}

pub fn execute_burn_nft(
    deps: DepsMut,
    info: MessageInfo,
    class_id: String,
    token_id: String,
) -> Result<Response, ContractError> {
    let nft = keeper().burn_nft(deps.storage, &class_id, &token_id, &info.sender)?;
    debug!("burned {}/{}", nft.class_id, nft.id);

    Ok(Response::new()
        .add_attribute("action", "burn_nft")
        .add_event(
            Event::new("burn_nft")
                .add_attribute("class_id", &nft.class_id)
                .add_attribute("token_id", &nft.id)
                .add_attribute("owner", info.sender.as_str()),
        ))
}

// ─── Queries ────────────────────────────────────────────────────────────────

pub fn query_class(deps: Deps, class_id: String) -> StdResult<Binary> {
    let class = BaseNftStore
        .class(deps.storage, &class_id)?
        .ok_or_else(|| cosmwasm_std::StdError::not_found(format!("class {class_id}")))?;
    to_json_binary(&class)
}

pub fn query_nft(deps: Deps, class_id: String, token_id: String) -> StdResult<Binary> {
    let nft = BaseNftStore
        .nft(deps.storage, &class_id, &token_id)?
        .ok_or_else(|| cosmwasm_std::StdError::not_found(format!("nft {class_id}/{token_id}")))?;
    to_json_binary(&nft)
}

pub fn query_owner(deps: Deps, class_id: String, token_id: String) -> StdResult<Binary> {
    let owner = BaseNftStore
        .owner(deps.storage, &class_id, &token_id)?
        .ok_or_else(|| cosmwasm_std::StdError::not_found(format!("nft {class_id}/{token_id}")))?;
    to_json_binary(&OwnerResponse {
        owner: owner.to_string(),
    })
}

pub fn query_nfts(
    deps: Deps,
    class_id: String,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<Binary> {
    let limit = limit.unwrap_or(DEFAULT_QUERY_LIMIT).min(MAX_QUERY_LIMIT) as usize;
    let nfts = BaseNftStore.nfts(deps.storage, &class_id, start_after.as_deref(), limit)?;
    to_json_binary(&NftsResponse { nfts })
}

pub fn query_supply(deps: Deps, class_id: String) -> StdResult<Binary> {
    let amount = BaseNftStore.supply(deps.storage, &class_id)?;
    to_json_binary(&SupplyResponse { amount })
}
