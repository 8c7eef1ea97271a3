use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct VmError(pub String);

/// ERC-721 calls the bridge makes into the VM. Token ids are carried as
/// decimal strings, addresses as lower-case `0x` strings.
pub trait Erc721Vm {
    fn mint_nft(&mut self, contract: &str, to: &str, token_id: &str, uri: &str) -> Result<(), VmError>;

    fn burn_nft(&mut self, contract: &str, token_id: &str) -> Result<(), VmError>;

    fn transfer_nft(&mut self, contract: &str, from: &str, to: &str, token_id: &str) -> Result<(), VmError>;

    /// Owner of the contract itself.
    fn owner_of(&self, contract: &str) -> Result<String, VmError>;

    /// Current holder of one token.
    fn token_owner(&self, contract: &str, token_id: &str) -> Result<String, VmError>;

    fn token_uri(&self, contract: &str, token_id: &str) -> Result<String, VmError>;
}
