pub mod bank;
pub mod contract;
pub mod error;
pub mod evm;
pub mod msg;
pub mod state;

use cosmwasm_std::{Binary, Deps, DepsMut, MessageInfo, Response, StdResult};

pub use evm::{Erc20Vm, VmError};

pub fn instantiate(
    deps: DepsMut,
    info: MessageInfo,
    msg: msg::InstantiateMsg,
) -> Result<Response, error::ContractError> {
    contract::instantiate(deps, info, msg)
}

pub fn execute(
    deps: DepsMut,
    info: MessageInfo,
    vm: &mut dyn Erc20Vm,
    msg: msg::ExecuteMsg,
) -> Result<Response, error::ContractError> {
    use msg::ExecuteMsg;

    match msg {
        ExecuteMsg::ConvertCoin { coin, receiver } => {
            contract::execute_convert_coin(deps, info, vm, coin, receiver)
        }
        ExecuteMsg::ConvertErc20 {
            contract,
            amount,
            receiver,
        } => contract::execute_convert_erc20(deps, info, vm, contract, amount, receiver),
        ExecuteMsg::RegisterCoin { denom, contract } => {
            contract::execute_register_coin(deps, info, vm, denom, contract)
        }
        ExecuteMsg::RegisterErc20 { contract } => contract::execute_register_erc20(deps, info, vm, contract),
        ExecuteMsg::ToggleTokenConversion { token } => {
            contract::execute_toggle_token_conversion(deps, info, token)
        }
        ExecuteMsg::UpdateTokenPairErc20 {
            contract,
            new_contract,
        } => contract::execute_update_token_pair_erc20(deps, info, contract, new_contract),
        ExecuteMsg::UpdateParams { params } => contract::execute_update_params(deps, info, params),
    }
}

pub fn query(deps: Deps, msg: msg::QueryMsg) -> StdResult<Binary> {
    use msg::QueryMsg;

    match msg {
        QueryMsg::Params {} => contract::query_params(deps),
        QueryMsg::TokenPair { token } => contract::query_token_pair(deps, token),
        QueryMsg::TokenPairs { start_after, limit } => contract::query_token_pairs(deps, start_after, limit),
        QueryMsg::Balance { address, denom } => contract::query_balance(deps, address, denom),
        QueryMsg::Supply { denom } => contract::query_supply(deps, denom),
        QueryMsg::Export {} => contract::query_export(deps),
    }
}
