//! Native coin ledger. Balances and supply move together; every write goes
//! through the caller's storage, so a conversion can stage them in a
//! [`dualbridge_registry::CacheStorage`] and drop the lot on failure.

use cosmwasm_std::{Addr, Coin, StdResult, Storage, Uint128};

use crate::error::ContractError;
use crate::state::{BALANCES, SUPPLY};

pub fn balance(storage: &dyn Storage, address: &Addr, denom: &str) -> StdResult<Uint128> {
    Ok(BALANCES.may_load(storage, (address, denom))?.unwrap_or_default())
}

pub fn supply(storage: &dyn Storage, denom: &str) -> StdResult<Uint128> {
    Ok(SUPPLY.may_load(storage, denom)?.unwrap_or_default())
}

pub fn send(storage: &mut dyn Storage, from: &Addr, to: &Addr, coin: &Coin) -> Result<(), ContractError> {
    debit(storage, from, coin)?;
    credit(storage, to, coin)
}

pub fn mint(storage: &mut dyn Storage, to: &Addr, coin: &Coin) -> Result<(), ContractError> {
    let total = supply(storage, &coin.denom)?
        .checked_add(coin.amount)
        .map_err(|_| ContractError::Overflow)?;
    SUPPLY.save(storage, &coin.denom, &total)?;
    credit(storage, to, coin)
}

pub fn burn(storage: &mut dyn Storage, from: &Addr, coin: &Coin) -> Result<(), ContractError> {
    debit(storage, from, coin)?;
    let total = supply(storage, &coin.denom)?
        .checked_sub(coin.amount)
        .map_err(|_| ContractError::Overflow)?;
    if total.is_zero() {
        SUPPLY.remove(storage, &coin.denom);
    } else {
        SUPPLY.save(storage, &coin.denom, &total)?;
    }
    Ok(())
}

fn credit(storage: &mut dyn Storage, to: &Addr, coin: &Coin) -> Result<(), ContractError> {
    let updated = balance(storage, to, &coin.denom)?
        .checked_add(coin.amount)
        .map_err(|_| ContractError::Overflow)?;
    if !updated.is_zero() {
        BALANCES.save(storage, (to, coin.denom.as_str()), &updated)?;
    }
    Ok(())
}

fn debit(storage: &mut dyn Storage, from: &Addr, coin: &Coin) -> Result<(), ContractError> {
    let available = balance(storage, from, &coin.denom)?;
    let remaining = available
        .checked_sub(coin.amount)
        .map_err(|_| ContractError::InsufficientFunds {
            address: from.to_string(),
            denom: coin.denom.clone(),
            available,
            required: coin.amount,
        })?;
    if remaining.is_zero() {
        BALANCES.remove(storage, (from, coin.denom.as_str()));
    } else {
        BALANCES.save(storage, (from, coin.denom.as_str()), &remaining)?;
    }
    Ok(())
}
