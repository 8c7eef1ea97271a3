use cosmwasm_schema::cw_serde;
use sha2::{Digest, Sha256};

use crate::error::RegistryError;
use crate::helpers::{validate_evm_address, validate_native_id};

/// Which side of a pair is canonical.
#[cw_serde]
#[derive(Copy, Eq)]
pub enum OwnerKind {
    /// The bridge owns the foreign contract; the native asset is canonical.
    Module,
    /// The foreign contract is owned elsewhere; the native side is a voucher
    /// minted by the bridge.
    External,
}

/// Binds one native asset (denom or NFT class id) to one foreign contract.
#[cw_serde]
pub struct TokenPair {
    /// Lower-case `0x` contract address
    pub contract_address: String,
    /// Denomination or class id
    pub native_id: String,
    pub enabled: bool,
    pub owner: OwnerKind,
}

impl TokenPair {
    pub fn new(contract_address: impl Into<String>, native_id: impl Into<String>, owner: OwnerKind) -> Self {
        TokenPair {
            contract_address: contract_address.into(),
            native_id: native_id.into(),
            enabled: true,
            owner,
        }
    }

    /// SHA-256 of `"{contract_address}|{native_id}"`.
    pub fn id(&self) -> Vec<u8> {
        pair_id(&self.contract_address, &self.native_id)
    }

    /// Stateless validation; also canonicalises the contract address.
    pub fn validate(&mut self) -> Result<(), RegistryError> {
        validate_native_id(&self.native_id)?;
        self.contract_address = validate_evm_address(&self.contract_address)?;
        Ok(())
    }

    pub fn is_foreign_asset(&self) -> bool {
        self.owner == OwnerKind::External
    }
}

pub fn pair_id(contract_address: &str, native_id: &str) -> Vec<u8> {
    let mut hasher = Sha256::new();
    hasher.update(contract_address.as_bytes());
    hasher.update(b"|");
    hasher.update(native_id.as_bytes());
    hasher.finalize().to_vec()
}
