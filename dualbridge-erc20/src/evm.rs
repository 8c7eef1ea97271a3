use cosmwasm_std::Uint128;
use thiserror::Error;

/// Failure reported by the embedded VM.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct VmError(pub String);

/// ERC-20 calls the bridge makes into the VM. Addresses are lower-case `0x`
/// strings. Any call may fail; the coordinator reverses whatever it already
/// did on the native side when one does.
pub trait Erc20Vm {
    fn mint(&mut self, contract: &str, to: &str, amount: Uint128) -> Result<(), VmError>;

    fn burn(&mut self, contract: &str, from: &str, amount: Uint128) -> Result<(), VmError>;

    fn transfer(&mut self, contract: &str, from: &str, to: &str, amount: Uint128) -> Result<(), VmError>;

    /// Owner of the contract as recorded by the VM.
    fn owner_of(&self, contract: &str) -> Result<String, VmError>;
}
