pub mod contract;
pub mod error;
pub mod evm;
pub mod msg;
pub mod state;

use cosmwasm_std::{Binary, Deps, DepsMut, MessageInfo, Response, StdResult};

pub use evm::{Erc721Vm, VmError};

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
    vm: &mut dyn Erc721Vm,
    msg: msg::ExecuteMsg,
) -> Result<Response, error::ContractError> {
    use msg::ExecuteMsg;

    match msg {
        ExecuteMsg::ConvertNft {
            class_id,
            token_ids,
            receiver,
        } => contract::execute_convert_nft(deps, info, vm, class_id, token_ids, receiver),
        ExecuteMsg::ConvertErc721 {
            contract,
            token_ids,
            receiver,
        } => contract::execute_convert_erc721(deps, info, vm, contract, token_ids, receiver),
        ExecuteMsg::RegisterNft { class_id, contract } => {
            contract::execute_register_nft(deps, info, vm, class_id, contract)
        }
        ExecuteMsg::RegisterErc721 { contract } => contract::execute_register_erc721(deps, info, vm, contract),
        ExecuteMsg::ToggleNftConversion { token } => contract::execute_toggle_nft_conversion(deps, info, token),
        ExecuteMsg::UpdateParams { params } => contract::execute_update_params(deps, info, params),
    }
}

pub fn query(deps: Deps, msg: msg::QueryMsg) -> StdResult<Binary> {
    use msg::QueryMsg;

    match msg {
        QueryMsg::Params {} => contract::query_params(deps),
        QueryMsg::TokenPair { token } => contract::query_token_pair(deps, token),
        QueryMsg::TokenPairs { start_after, limit } => contract::query_token_pairs(deps, start_after, limit),
        QueryMsg::Export {} => contract::query_export(deps),
    }
}
