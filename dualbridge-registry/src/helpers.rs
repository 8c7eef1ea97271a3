use cosmwasm_std::{Addr, Api, StdResult};

use crate::error::RegistryError;

const MIN_ID_LEN: usize = 3;
const MAX_ID_LEN: usize = 128;

/// Check a denomination or class id against the native denom rules:
/// 3-128 characters, a leading ASCII letter, then letters, digits or `/:._-`.
pub fn validate_native_id(id: &str) -> Result<(), RegistryError> {
    let invalid = |reason: &str| RegistryError::InvalidAssetId {
        id: id.to_string(),
        reason: reason.to_string(),
    };

    if id.len() < MIN_ID_LEN || id.len() > MAX_ID_LEN {
        return Err(invalid("length must be between 3 and 128"));
    }
    let mut chars = id.chars();
    if !chars.next().is_some_and(|c| c.is_ascii_alphabetic()) {
        return Err(invalid("must start with a letter"));
    }
    if !chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '/' | ':' | '.' | '_' | '-')) {
        return Err(invalid("contains characters outside [a-zA-Z0-9/:._-]"));
    }
    Ok(())
}

/// Parse a foreign contract (or account) address and return its canonical
/// lower-case `0x` form.
pub fn validate_evm_address(address: &str) -> Result<String, RegistryError> {
    let invalid = || RegistryError::InvalidContractAddress {
        address: address.to_string(),
    };

    let digits = address
        .strip_prefix("0x")
        .or_else(|| address.strip_prefix("0X"))
        .ok_or_else(invalid)?;
    let bytes = hex::decode(digits).map_err(|_| invalid())?;
    if bytes.len() != 20 {
        return Err(invalid());
    }
    Ok(format!("0x{}", hex::encode(bytes)))
}

/// The `0x` account an on-chain address controls inside the VM: the last 20
/// bytes of its canonical form, left-padded with zeros when shorter.
pub fn evm_address_of(api: &dyn Api, addr: &Addr) -> StdResult<String> {
    let canonical = api.addr_canonicalize(addr.as_str())?;
    let bytes = canonical.as_slice();
    let tail = &bytes[bytes.len().saturating_sub(20)..];
    let mut account = [0u8; 20];
    account[20 - tail.len()..].copy_from_slice(tail);
    Ok(format!("0x{}", hex::encode(account)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_id_rules() {
        assert!(validate_native_id("uatom").is_ok());
        assert!(validate_native_id("erc20/0xabc").is_ok());
        assert!(validate_native_id("ibc/27394FB092D2ECCD56123C74F36E4C1F926001CEADA9CA97EA622B25F41E5EB2").is_ok());
        assert!(validate_native_id("ab").is_err());
        assert!(validate_native_id("1cats").is_err());
        assert!(validate_native_id("cats dogs").is_err());
        assert!(validate_native_id(&"a".repeat(129)).is_err());
    }

    #[test]
    fn test_evm_address_is_lower_cased() {
        let addr = validate_evm_address("0xD4949664cD82660AaE99bEdc034a0deA8A0bd517").unwrap();
        assert_eq!(addr, "0xd4949664cd82660aae99bedc034a0dea8a0bd517");
    }

    #[test]
    fn test_evm_address_of_is_a_valid_account() {
        let api = cosmwasm_std::testing::MockApi::default();
        let alice = api.addr_make("alice");
        let account = evm_address_of(&api, &alice).unwrap();
        assert_eq!(validate_evm_address(&account).unwrap(), account);
        assert_eq!(account, evm_address_of(&api, &alice).unwrap());
        assert_ne!(account, evm_address_of(&api, &api.addr_make("bob")).unwrap());
    }

    #[test]
    fn test_evm_address_rejects_bad_input() {
        assert!(validate_evm_address("d4949664cd82660aae99bedc034a0dea8a0bd517").is_err());
        assert!(validate_evm_address("0xd4949664cd82660aae99bedc034a0dea8a0bd5").is_err());
        assert!(validate_evm_address("0xzz949664cd82660aae99bedc034a0dea8a0bd517").is_err());
    }
}
