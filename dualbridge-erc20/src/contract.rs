use cosmwasm_std::{
    to_json_binary, Addr, Api, Binary, Coin, Deps, DepsMut, Event, MessageInfo, Response, StdResult,
    Uint128,
};
use dualbridge_registry::helpers::{evm_address_of, validate_evm_address, validate_native_id};
use dualbridge_registry::{authorize, CacheStorage, Mutation, OwnerKind, TokenPair};
use log::{debug, error, warn};

use crate::bank;
use crate::error::ContractError;
use crate::evm::{Erc20Vm, VmError};
use crate::msg::*;
use crate::state::*;

const DEFAULT_QUERY_LIMIT: u32 = 30;
const MAX_QUERY_LIMIT: u32 = 100;

// ─── Instantiate ────────────────────────────────────────────────────────────

pub fn instantiate(deps: DepsMut, _info: MessageInfo, msg: InstantiateMsg) -> Result<Response, ContractError> {
    let params = validate_params(deps.api, msg.params)?;
    PARAMS.save(deps.storage, &params)?;

    let count = msg.token_pairs.len();
    TOKEN_PAIRS.import_pairs(deps.storage, msg.token_pairs)?;
    debug!("erc20 bridge initialised with {count} token pairs");

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("authority", params.authority.as_str())
        .add_attribute("token_pairs", count.to_string()))
}

fn validate_params(api: &dyn Api, msg: ParamsMsg) -> Result<Params, ContractError> {
    Ok(Params {
        enable_erc20: msg.enable_erc20,
        authority: api.addr_validate(&msg.authority)?,
        module_address: api.addr_validate(&msg.module_address)?,
        module_evm_address: validate_evm_address(&msg.module_evm_address)?,
    })
}

fn load_enabled_params(deps: Deps) -> Result<Params, ContractError> {
    let params = PARAMS.load(deps.storage)?;
    if !params.enable_erc20 {
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

// ─── Execute: Conversions ───────────────────────────────────────────────────

/// Native coin -> ERC-20. For a bridge-owned contract the coin is escrowed
/// with the module and the mirror contract mints; for an external contract
/// the voucher coin is burned and locked tokens are released.
///
/// The native side is staged in a cache and only committed after the VM
/// call succeeds.
pub fn execute_convert_coin(
    deps: DepsMut,
    info: MessageInfo,
    vm: &mut dyn Erc20Vm,
    coin: Coin,
    receiver: String,
) -> Result<Response, ContractError> {
    let params = load_enabled_params(deps.as_ref())?;
    if coin.amount.is_zero() {
        return Err(ContractError::InvalidAmount);
    }
    let receiver = validate_evm_address(&receiver)?;
    let pair = TOKEN_PAIRS.enabled_pair(deps.storage, &coin.denom)?;
    let contract = pair.contract_address.as_str();

    if pair.is_foreign_asset() && coin.denom != bridge_denom(contract) {
        return Err(ContractError::UnsupportedOperation {
            reason: format!("{} is not the bridge denom of externally owned {contract}", coin.denom),
        });
    }

    let mut cache = CacheStorage::new(deps.storage);
    let vm_result = match pair.owner {
        OwnerKind::Module => {
            bank::send(&mut cache, &info.sender, &params.module_address, &coin)?;
            vm.mint(contract, &receiver, coin.amount)
        }
        OwnerKind::External => {
            bank::burn(&mut cache, &info.sender, &coin)?;
            vm.transfer(contract, &params.module_evm_address, &receiver, coin.amount)
        }
    };
    if let Err(err) = vm_result {
        warn!("convert_coin of {coin} by {} rolled back: {err}", info.sender);
        return Err(vm_error(contract, err));
    }
    cache.commit();
    debug!("converted {coin} from {} to {receiver} on {contract}", info.sender);

    Ok(Response::new()
        .add_attribute("action", "convert_coin")
        .add_event(
            Event::new("convert_coin")
                .add_attribute("sender", info.sender.as_str())
                .add_attribute("receiver", &receiver)
                .add_attribute("amount", coin.amount.to_string())
                .add_attribute("denom", &coin.denom)
                .add_attribute("contract", contract),
        ))
}

/// ERC-20 -> native coin. The VM side moves first (burn for a mirror
/// contract, lock for an external one); if the native credit then fails the
/// VM move is reversed before the error is returned.
pub fn execute_convert_erc20(
    deps: DepsMut,
    info: MessageInfo,
    vm: &mut dyn Erc20Vm,
    contract: String,
    amount: Uint128,
    receiver: String,
) -> Result<Response, ContractError> {
    let params = load_enabled_params(deps.as_ref())?;
    if amount.is_zero() {
        return Err(ContractError::InvalidAmount);
    }
    let receiver = deps.api.addr_validate(&receiver)?;
    let sender = evm_address_of(deps.api, &info.sender)?;
    let pair = TOKEN_PAIRS.enabled_pair_by_foreign(deps.storage, &contract)?;
    let contract = pair.contract_address.as_str();
    let coin = Coin::new(amount, &pair.native_id);

    let moved = match pair.owner {
        OwnerKind::Module => vm.burn(contract, &sender, amount),
        OwnerKind::External => vm.transfer(contract, &sender, &params.module_evm_address, amount),
    };
    moved.map_err(|err| vm_error(contract, err))?;

    let mut cache = CacheStorage::new(deps.storage);
    let credited = match pair.owner {
        OwnerKind::Module => bank::send(&mut cache, &params.module_address, &receiver, &coin),
        OwnerKind::External => bank::mint(&mut cache, &receiver, &coin),
    };
    match credited {
        Ok(()) => cache.commit(),
        Err(err) => {
            drop(cache);
            let undo = match pair.owner {
                OwnerKind::Module => vm.mint(contract, &sender, amount),
                OwnerKind::External => vm.transfer(contract, &params.module_evm_address, &sender, amount),
            };
            if let Err(undo_err) = undo {
                error!("convert_erc20 of {amount} on {contract}: native credit failed ({err}) and reversal failed ({undo_err})");
                return Err(ContractError::Internal {
                    msg: format!("could not reverse vm side of {amount} on {contract}: {undo_err}"),
                });
            }
            warn!("convert_erc20 of {amount} on {contract} reversed: {err}");
            return Err(err);
        }
    }
    debug!("converted {amount} of {contract} from {sender} to {receiver}");

    Ok(Response::new()
        .add_attribute("action", "convert_erc20")
        .add_event(
            Event::new("convert_erc20")
                .add_attribute("sender", &sender)
                .add_attribute("receiver", receiver.as_str())
                .add_attribute("amount", amount.to_string())
                .add_attribute("denom", &coin.denom)
                .add_attribute("contract", contract),
        ))
}

// ─── Execute: Governance ────────────────────────────────────────────────────

/// Pair a native denom with a mirror contract the bridge deployed. The denom
/// must already have supply.
pub fn execute_register_coin(
    deps: DepsMut,
    info: MessageInfo,
    vm: &mut dyn Erc20Vm,
    denom: String,
    contract: String,
) -> Result<Response, ContractError> {
    let params = assert_authority(deps.as_ref(), &info.sender)?;
    validate_native_id(&denom)?;
    if denom.starts_with(BRIDGE_DENOM_PREFIX) {
        return Err(ContractError::UnsupportedOperation {
            reason: format!("{denom} is itself a bridge voucher"),
        });
    }
    if bank::supply(deps.storage, &denom)?.is_zero() {
        return Err(ContractError::UnsupportedOperation {
            reason: format!("{denom} has no supply"),
        });
    }
    let contract = validate_evm_address(&contract)?;
    let owner = vm.owner_of(&contract).map_err(|err| vm_error(&contract, err))?;
    if owner.to_lowercase() != params.module_evm_address {
        return Err(ContractError::UnsupportedOperation {
            reason: format!("{contract} is owned by {owner}, not the bridge"),
        });
    }

    let pair = TOKEN_PAIRS.register(deps.storage, TokenPair::new(contract, denom, OwnerKind::Module))?;

    Ok(Response::new()
        .add_attribute("action", "register_coin")
        .add_event(
            Event::new("register_coin")
                .add_attribute("denom", &pair.native_id)
                .add_attribute("contract", &pair.contract_address),
        ))
}

/// Pair an ERC-20 owned outside the bridge with the voucher denom
/// `erc20/<contract>`.
pub fn execute_register_erc20(
    deps: DepsMut,
    info: MessageInfo,
    vm: &mut dyn Erc20Vm,
    contract: String,
) -> Result<Response, ContractError> {
    let params = assert_authority(deps.as_ref(), &info.sender)?;
    let contract = validate_evm_address(&contract)?;
    let owner = vm.owner_of(&contract).map_err(|err| vm_error(&contract, err))?;
    if owner.to_lowercase() == params.module_evm_address {
        return Err(ContractError::UnsupportedOperation {
            reason: format!("{contract} is owned by the bridge; register its coin instead"),
        });
    }

    let denom = bridge_denom(&contract);
    let pair = TOKEN_PAIRS.register(deps.storage, TokenPair::new(contract, denom, OwnerKind::External))?;

    Ok(Response::new()
        .add_attribute("action", "register_erc20")
        .add_event(
            Event::new("register_erc20")
                .add_attribute("denom", &pair.native_id)
                .add_attribute("contract", &pair.contract_address),
        ))
}

pub fn execute_toggle_token_conversion(
    deps: DepsMut,
    info: MessageInfo,
    token: String,
) -> Result<Response, ContractError> {
    assert_authority(deps.as_ref(), &info.sender)?;
    let pair = TOKEN_PAIRS.toggle(deps.storage, &token)?;

    Ok(Response::new()
        .add_attribute("action", "toggle_token_conversion")
        .add_event(
            Event::new("toggle_token_conversion")
                .add_attribute("denom", &pair.native_id)
                .add_attribute("contract", &pair.contract_address)
                .add_attribute("enabled", pair.enabled.to_string()),
        ))
}

pub fn execute_update_token_pair_erc20(
    deps: DepsMut,
    info: MessageInfo,
    contract: String,
    new_contract: String,
) -> Result<Response, ContractError> {
    assert_authority(deps.as_ref(), &info.sender)?;
    let pair = TOKEN_PAIRS.update_foreign_address(deps.storage, &contract, &new_contract)?;
    debug!("token pair {} moved from {contract} to {}", pair.native_id, pair.contract_address);

    Ok(Response::new()
        .add_attribute("action", "update_token_pair_erc20")
        .add_event(
            Event::new("update_token_pair_erc20")
                .add_attribute("denom", &pair.native_id)
                .add_attribute("contract", contract)
                .add_attribute("new_contract", &pair.contract_address),
        ))
}

pub fn execute_update_params(deps: DepsMut, info: MessageInfo, msg: ParamsMsg) -> Result<Response, ContractError> {
    assert_authority(deps.as_ref(), &info.sender)?;
    let params = validate_params(deps.api, msg)?;
    PARAMS.save(deps.storage, &params)?;
    debug!("erc20 params updated, conversions enabled={}", params.enable_erc20);

    Ok(Response::new()
        .add_attribute("action", "update_params")
        .add_attribute("enable_erc20", params.enable_erc20.to_string())
        .add_attribute("authority", params.authority.as_str()))
}

// ─── Queries ────────────────────────────────────────────────────────────────

pub fn query_params(deps: Deps) -> StdResult<Binary> {
    to_json_binary(&PARAMS.load(deps.storage)?)
}

pub fn query_token_pair(deps: Deps, token: String) -> StdResult<Binary> {
    let pair = TOKEN_PAIRS
        .lookup(deps.storage, &token)?
        .ok_or_else(|| cosmwasm_std::StdError::not_found(format!("token pair for {token}")))?;
    to_json_binary(&pair)
}

pub fn query_token_pairs(deps: Deps, start_after: Option<Binary>, limit: Option<u32>) -> StdResult<Binary> {
    let limit = limit.unwrap_or(DEFAULT_QUERY_LIMIT).min(MAX_QUERY_LIMIT) as usize;
    let token_pairs = TOKEN_PAIRS.pairs_page(deps.storage, start_after.as_deref(), limit)?;
    to_json_binary(&TokenPairsResponse { token_pairs })
}

pub fn query_balance(deps: Deps, address: String, denom: String) -> StdResult<Binary> {
    let address = deps.api.addr_validate(&address)?;
    let amount = bank::balance(deps.storage, &address, &denom)?;
    to_json_binary(&Coin::new(amount, denom))
}

pub fn query_supply(deps: Deps, denom: String) -> StdResult<Binary> {
    let amount = bank::supply(deps.storage, &denom)?;
    to_json_binary(&Coin::new(amount, denom))
}

pub fn query_export(deps: Deps) -> StdResult<Binary> {
    to_json_binary(&ExportResponse {
        params: PARAMS.load(deps.storage)?,
        token_pairs: TOKEN_PAIRS.export_pairs(deps.storage)?,
    })
}
