use crate::error::ContractError;
use crate::state::Nft;

/// Message-level marker meaning "leave this field as it is".
pub const DO_NOT_MODIFY: &str = "[do-not-modify]";

const MAX_TOKEN_ID_LEN: usize = 128;

pub fn modified(field: &str) -> bool {
    field != DO_NOT_MODIFY
}

/// Field changes requested for a token. `None` leaves a field untouched;
/// `Some("")` clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NftEdit {
    pub name: Option<String>,
    pub uri: Option<String>,
    pub description: Option<String>,
}

impl NftEdit {
    /// Build from message fields, where [`DO_NOT_MODIFY`] marks an untouched
    /// field.
    pub fn from_msg(name: String, uri: String, description: String) -> Self {
        let keep = |field: String| modified(&field).then_some(field);
        NftEdit {
            name: keep(name),
            uri: keep(uri),
            description: keep(description),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.uri.is_none() && self.description.is_none()
    }

    /// Names of the fields this edit touches, for event attributes.
    pub fn fields(&self) -> Vec<&'static str> {
        [
            (self.name.is_some(), "name"),
            (self.uri.is_some(), "uri"),
            (self.description.is_some(), "description"),
        ]
        .into_iter()
        .filter_map(|(set, field)| set.then_some(field))
        .collect()
    }

    pub fn apply(&self, nft: &mut Nft) {
        if let Some(uri) = &self.uri {
            nft.uri = uri.clone();
        }
        if let Some(name) = &self.name {
            nft.metadata.name = name.clone();
        }
        if let Some(description) = &self.description {
            nft.metadata.description = description.clone();
        }
    }
}

/// Token ids: 1-128 characters of `[a-zA-Z0-9/:._-]`. Unlike class ids they
/// may start with a digit, so that foreign token ids carry over verbatim.
pub fn validate_token_id(token_id: &str) -> Result<(), ContractError> {
    let invalid = |reason: &str| ContractError::InvalidTokenId {
        token_id: token_id.to_string(),
        reason: reason.to_string(),
    };
    if token_id.is_empty() || token_id.len() > MAX_TOKEN_ID_LEN {
        return Err(invalid("length must be between 1 and 128"));
    }
    if !token_id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '/' | ':' | '.' | '_' | '-'))
    {
        return Err(invalid("contains characters outside [a-zA-Z0-9/:._-]"));
    }
    Ok(())
}
