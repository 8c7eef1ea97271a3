use cosmwasm_std::{to_json_binary, Addr, Api, Binary, Deps, DepsMut, Event, MessageInfo, Response, StdResult};
use dualbridge_nft::error::ContractError as NftError;
use dualbridge_nft::state::Nft;
use dualbridge_nft::{BaseNftStore, CollectionKeeper, NftFields};
use dualbridge_registry::helpers::{evm_address_of, validate_evm_address};
use dualbridge_registry::{authorize, CacheStorage, Mutation, OwnerKind, TokenPair, Unauthorized};
use log::{debug, error, warn};

use crate::error::ContractError;
use crate::evm::{Erc721Vm, VmError};
use crate::msg::*;
use crate::state::*;

const DEFAULT_QUERY_LIMIT: u32 = 30;
const MAX_QUERY_LIMIT: u32 = 100;

fn keeper() -> CollectionKeeper<'static> {
    CollectionKeeper::new(&BaseNftStore)
}

// ─── Instantiate ────────────────────────────────────────────────────────────

pub fn instantiate(deps: DepsMut, _info: MessageInfo, msg: InstantiateMsg) -> Result<Response, ContractError> {
    let params = validate_params(deps.api, msg.params)?;
    PARAMS.save(deps.storage, &params)?;

    let count = msg.token_pairs.len();
    NFT_PAIRS.import_pairs(deps.storage, msg.token_pairs)?;
    debug!("erc721 bridge initialised with {count} token pairs");

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("authority", params.authority.as_str())
        .add_attribute("token_pairs", count.to_string()))
}

fn validate_params(api: &dyn Api, msg: ParamsMsg) -> Result<Params, ContractError> {
    Ok(Params {
        enable_erc721: msg.enable_erc721,
        authority: api.addr_validate(&msg.authority)?,
        module_address: api.addr_validate(&msg.module_address)?,
        module_evm_address: validate_evm_address(&msg.module_evm_address)?,
    })
}

fn load_enabled_params(deps: Deps) -> Result<Params, ContractError> {
    let params = PARAMS.load(deps.storage)?;
    if !params.enable_erc721 {
        return Err(ContractError::ConversionDisabled);
    }
    Ok(params)
}

fn assert_authority(deps: Deps, sender: &Addr) -> Result<Params, ContractError> {
    let params = PARAMS.load(deps.storage)?;
    authorize(
        &Mutation::Govern {
            authority: &params.authority,
        },
        sender,
    )?;
    Ok(params)
}

fn vm_error(contract: &str, err: VmError) -> ContractError {
    ContractError::Vm {
        contract: contract.to_string(),
        msg: err.0,
    }
}

fn token_list(token_ids: &[String]) -> String {
    token_ids.join(",")
}

// ─── Execute: Conversions ───────────────────────────────────────────────────

/// Native NFTs -> ERC-721. Every token is escrowed with the module (mirror
/// contract) or burned (external contract) in a cache first; the VM then
/// mints or releases each one. A VM failure reverses the VM calls already
/// made and drops the cache.
pub fn execute_convert_nft(
    deps: DepsMut,
    info: MessageInfo,
    vm: &mut dyn Erc721Vm,
    class_id: String,
    token_ids: Vec<String>,
    receiver: String,
) -> Result<Response, ContractError> {
    let params = load_enabled_params(deps.as_ref())?;
    if token_ids.is_empty() {
        return Err(ContractError::InvalidAmount);
    }
    let receiver = validate_evm_address(&receiver)?;
    let pair = NFT_PAIRS.enabled_pair(deps.storage, &class_id)?;
    let contract = pair.contract_address.as_str();

    if pair.is_foreign_asset() && class_id != bridge_class_id(contract) {
        return Err(ContractError::UnsupportedOperation {
            reason: format!("{class_id} is not the bridge class of externally owned {contract}"),
        });
    }

    let keeper = keeper();
    let mut cache = CacheStorage::new(deps.storage);
    let mut moved: Vec<Nft> = Vec::with_capacity(token_ids.len());
    for token_id in &token_ids {
        let nft = match pair.owner {
            OwnerKind::Module => {
                keeper.send_nft(&mut cache, &class_id, token_id, &info.sender, &params.module_address)?
            }
            OwnerKind::External => keeper.burn_nft(&mut cache, &class_id, token_id, &info.sender)?,
        };
        moved.push(nft);
    }

    for (done, nft) in moved.iter().enumerate() {
        let result = match pair.owner {
            OwnerKind::Module => vm.mint_nft(contract, &receiver, &nft.id, &nft.uri),
            OwnerKind::External => vm.transfer_nft(contract, &params.module_evm_address, &receiver, &nft.id),
        };
        if let Err(err) = result {
            reverse_nft_release(vm, &pair, &params, &receiver, &moved[..done])?;
            warn!("convert_nft of {class_id} by {} rolled back: {err}", info.sender);
            return Err(vm_error(contract, err));
        }
    }
    cache.commit();
    debug!("converted {class_id} [{}] from {} to {receiver}", token_list(&token_ids), info.sender);

    Ok(Response::new()
        .add_attribute("action", "convert_nft")
        .add_event(
            Event::new("convert_nft")
                .add_attribute("sender", info.sender.as_str())
                .add_attribute("receiver", &receiver)
                .add_attribute("class_id", &class_id)
                .add_attribute("token_ids", token_list(&token_ids))
                .add_attribute("contract", contract),
        ))
}

/// Undo the VM side of `convert_nft` for tokens already released.
fn reverse_nft_release(
    vm: &mut dyn Erc721Vm,
    pair: &TokenPair,
    params: &Params,
    receiver: &str,
    released: &[Nft],
) -> Result<(), ContractError> {
    let contract = pair.contract_address.as_str();
    for nft in released.iter().rev() {
        let undo = match pair.owner {
            OwnerKind::Module => vm.burn_nft(contract, &nft.id),
            OwnerKind::External => vm.transfer_nft(contract, receiver, &params.module_evm_address, &nft.id),
        };
        if let Err(err) = undo {
            error!("could not reverse release of {contract}/{} to {receiver}: {err}", nft.id);
            return Err(ContractError::Internal {
                msg: format!("could not reverse release of {contract}/{}: {err}", nft.id),
            });
        }
    }
    Ok(())
}

/// ERC-721 -> native NFTs. The sender must hold every token in the VM. The
/// VM side moves first (burn for a mirror contract, lock with the module for
/// an external one); the native side then releases escrow or mints vouchers
/// in a cache. Any failure reverses every VM move already made.
pub fn execute_convert_erc721(
    deps: DepsMut,
    info: MessageInfo,
    vm: &mut dyn Erc721Vm,
    contract: String,
    token_ids: Vec<String>,
    receiver: String,
) -> Result<Response, ContractError> {
    let params = load_enabled_params(deps.as_ref())?;
    if token_ids.is_empty() {
        return Err(ContractError::InvalidAmount);
    }
    let receiver = deps.api.addr_validate(&receiver)?;
    let sender = evm_address_of(deps.api, &info.sender)?;
    let pair = NFT_PAIRS.enabled_pair_by_foreign(deps.storage, &contract)?;
    let contract = pair.contract_address.as_str();
    let class_id = pair.native_id.as_str();

    let mut tokens: Vec<(&str, String)> = Vec::with_capacity(token_ids.len());
    for token_id in &token_ids {
        let holder = vm
            .token_owner(contract, token_id)
            .map_err(|err| vm_error(contract, err))?
            .to_lowercase();
        if holder != sender {
            return Err(Unauthorized {
                action: format!("convert erc721 {contract}/{token_id}"),
                actor: sender,
                required: holder,
            }
            .into());
        }
        let uri = vm.token_uri(contract, token_id).map_err(|err| vm_error(contract, err))?;
        tokens.push((token_id.as_str(), uri));
    }

    for (done, (token_id, _)) in tokens.iter().enumerate() {
        let result = match pair.owner {
            OwnerKind::Module => vm.burn_nft(contract, token_id),
            OwnerKind::External => vm.transfer_nft(contract, &sender, &params.module_evm_address, token_id),
        };
        if let Err(err) = result {
            reverse_erc721_lock(vm, &pair, &params, &sender, &tokens[..done])?;
            warn!("convert_erc721 of {contract} by {sender} rolled back: {err}");
            return Err(vm_error(contract, err));
        }
    }

    let mut cache = CacheStorage::new(deps.storage);
    if let Err(err) = credit_native(&mut cache, &pair, &params, &receiver, &tokens) {
        drop(cache);
        reverse_erc721_lock(vm, &pair, &params, &sender, &tokens)?;
        warn!("convert_erc721 of {contract} by {sender} reversed: {err}");
        return Err(err.into());
    }
    cache.commit();
    debug!("converted {contract} [{}] from {sender} to {receiver}", token_list(&token_ids));

    Ok(Response::new()
        .add_attribute("action", "convert_erc721")
        .add_event(
            Event::new("convert_erc721")
                .add_attribute("sender", &sender)
                .add_attribute("receiver", receiver.as_str())
                .add_attribute("class_id", class_id)
                .add_attribute("token_ids", token_list(&token_ids))
                .add_attribute("contract", contract),
        ))
}

fn credit_native(
    storage: &mut CacheStorage,
    pair: &TokenPair,
    params: &Params,
    receiver: &Addr,
    tokens: &[(&str, String)],
) -> Result<(), NftError> {
    let keeper = keeper();
    for (token_id, uri) in tokens {
        match pair.owner {
            OwnerKind::Module => {
                keeper.send_nft(storage, &pair.native_id, token_id, &params.module_address, receiver)?;
            }
            OwnerKind::External => {
                let fields = NftFields {
                    uri: uri.clone(),
                    ..NftFields::default()
                };
                keeper.mint_nft(storage, &pair.native_id, token_id, fields, &params.module_address, receiver)?;
            }
        }
    }
    Ok(())
}

/// Undo the VM side of `convert_erc721`: re-mint burned tokens to the sender
/// or hand locked ones back.
fn reverse_erc721_lock(
    vm: &mut dyn Erc721Vm,
    pair: &TokenPair,
    params: &Params,
    sender: &str,
    locked: &[(&str, String)],
) -> Result<(), ContractError> {
    let contract = pair.contract_address.as_str();
    for (token_id, uri) in locked.iter().rev() {
        let undo = match pair.owner {
            OwnerKind::Module => vm.mint_nft(contract, sender, token_id, uri),
            OwnerKind::External => vm.transfer_nft(contract, &params.module_evm_address, sender, token_id),
        };
        if let Err(err) = undo {
            error!("could not hand {contract}/{token_id} back to {sender}: {err}");
            return Err(ContractError::Internal {
                msg: format!("could not hand {contract}/{token_id} back to {sender}: {err}"),
            });
        }
    }
    Ok(())
}

// ─── Execute: Governance ────────────────────────────────────────────────────

/// Pair an existing native class with a contract the bridge deployed.
pub fn execute_register_nft(
    deps: DepsMut,
    info: MessageInfo,
    vm: &mut dyn Erc721Vm,
    class_id: String,
    contract: String,
) -> Result<Response, ContractError> {
    let params = assert_authority(deps.as_ref(), &info.sender)?;
    keeper().class(deps.storage, &class_id)?;
    if class_id.starts_with(BRIDGE_CLASS_PREFIX) {
        return Err(ContractError::UnsupportedOperation {
            reason: format!("{class_id} is itself a bridge mirror class"),
        });
    }
    let contract = validate_evm_address(&contract)?;
    let owner = vm.owner_of(&contract).map_err(|err| vm_error(&contract, err))?;
    if owner.to_lowercase() != params.module_evm_address {
        return Err(ContractError::UnsupportedOperation {
            reason: format!("{contract} is owned by {owner}, not the bridge"),
        });
    }

    let pair = NFT_PAIRS.register(deps.storage, TokenPair::new(contract, class_id, OwnerKind::Module))?;

    Ok(Response::new()
        .add_attribute("action", "register_nft")
        .add_event(
            Event::new("register_nft")
                .add_attribute("class_id", &pair.native_id)
                .add_attribute("contract", &pair.contract_address),
        ))
}

/// Pair an ERC-721 owned outside the bridge with a new mirror class
/// `erc721/<contract>`. The class is created by the module, mint-restricted
/// to it and closed to edits; class and pair land together.
pub fn execute_register_erc721(
    deps: DepsMut,
    info: MessageInfo,
    vm: &mut dyn Erc721Vm,
    contract: String,
) -> Result<Response, ContractError> {
    let params = assert_authority(deps.as_ref(), &info.sender)?;
    let contract = validate_evm_address(&contract)?;
    let owner = vm.owner_of(&contract).map_err(|err| vm_error(&contract, err))?;
    if owner.to_lowercase() == params.module_evm_address {
        return Err(ContractError::UnsupportedOperation {
            reason: format!("{contract} is owned by the bridge; register its class instead"),
        });
    }

    let class_id = bridge_class_id(&contract);
    let mut cache = CacheStorage::new(deps.storage);
    keeper().issue_class(&mut cache, &class_id, &class_id, "", "", &params.module_address, true, true)?;
    let pair = NFT_PAIRS.register(&mut cache, TokenPair::new(contract, class_id, OwnerKind::External))?;
    cache.commit();

    Ok(Response::new()
        .add_attribute("action", "register_erc721")
        .add_event(
            Event::new("register_erc721")
                .add_attribute("class_id", &pair.native_id)
                .add_attribute("contract", &pair.contract_address),
        ))
}

pub fn execute_toggle_nft_conversion(
    deps: DepsMut,
    info: MessageInfo,
    token: String,
) -> Result<Response, ContractError> {
    assert_authority(deps.as_ref(), &info.sender)?;
    let pair = NFT_PAIRS.toggle(deps.storage, &token)?;

    Ok(Response::new()
        .add_attribute("action", "toggle_token_conversion")
        .add_event(
            Event::new("toggle_token_conversion")
                .add_attribute("class_id", &pair.native_id)
                .add_attribute("contract", &pair.contract_address)
                .add_attribute("enabled", pair.enabled.to_string()),
        ))
}

pub fn execute_update_params(deps: DepsMut, info: MessageInfo, msg: ParamsMsg) -> Result<Response, ContractError> {
    assert_authority(deps.as_ref(), &info.sender)?;
    let params = validate_params(deps.api, msg)?;
    PARAMS.save(deps.storage, &params)?;
    debug!("erc721 params updated, conversions enabled={}", params.enable_erc721);

    Ok(Response::new()
        .add_attribute("action", "update_params")
        .add_attribute("enable_erc721", params.enable_erc721.to_string())
        .add_attribute("authority", params.authority.as_str()))
}

// ─── Queries ────────────────────────────────────────────────────────────────

pub fn query_params(deps: Deps) -> StdResult<Binary> {
    to_json_binary(&PARAMS.load(deps.storage)?)
}

pub fn query_token_pair(deps: Deps, token: String) -> StdResult<Binary> {
    let pair = NFT_PAIRS
        .lookup(deps.storage, &token)?
        .ok_or_else(|| cosmwasm_std::StdError::not_found(format!("token pair for {token}")))?;
    to_json_binary(&pair)
}

pub fn query_token_pairs(deps: Deps, start_after: Option<Binary>, limit: Option<u32>) -> StdResult<Binary> {
    let limit = limit.unwrap_or(DEFAULT_QUERY_LIMIT).min(MAX_QUERY_LIMIT) as usize;
    let token_pairs = NFT_PAIRS.pairs_page(deps.storage, start_after.as_deref(), limit)?;
    to_json_binary(&TokenPairsResponse { token_pairs })
}

pub fn query_export(deps: Deps) -> StdResult<Binary> {
    to_json_binary(&ExportResponse {
        params: PARAMS.load(deps.storage)?,
        token_pairs: NFT_PAIRS.export_pairs(deps.storage)?,
    })
}
