//! Who may mutate what. Every check here is a pure function of the requested
//! mutation and the claimed actor; callers load whatever records they need
//! first and pass the relevant identities in.

use cosmwasm_std::Addr;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
#[error("{actor} is not allowed to {action} (requires {required})")]
pub struct Unauthorized {
    pub action: String,
    pub actor: String,
    pub required: String,
}

#[derive(Debug, Clone, Copy)]
pub enum Mutation<'a> {
    /// Register, toggle or re-point a token pair, or replace bridge params.
    Govern { authority: &'a Addr },
    /// Mint into a class. Only the creator may mint into a restricted class.
    Mint {
        class_id: &'a str,
        creator: &'a Addr,
        restricted: bool,
    },
    /// Change token fields. Nobody may edit under an update-restricted class.
    Edit {
        class_id: &'a str,
        token_id: &'a str,
        owner: &'a Addr,
        update_restricted: bool,
    },
    /// Transfer, send or burn a token.
    Move {
        class_id: &'a str,
        token_id: &'a str,
        owner: &'a Addr,
    },
    /// Hand a class over to a new creator.
    TransferClass { class_id: &'a str, creator: &'a Addr },
}

impl Mutation<'_> {
    fn action(&self) -> String {
        match self {
            Mutation::Govern { .. } => "govern the bridge".to_string(),
            Mutation::Mint { class_id, .. } => format!("mint nft of class {class_id}"),
            Mutation::Edit {
                class_id, token_id, ..
            } => format!("edit nft {class_id}/{token_id}"),
            Mutation::Move {
                class_id, token_id, ..
            } => format!("move nft {class_id}/{token_id}"),
            Mutation::TransferClass { class_id, .. } => format!("transfer class {class_id}"),
        }
    }

    /// The single identity allowed to perform this mutation, if any.
    fn required(&self) -> Option<&Addr> {
        match *self {
            Mutation::Govern { authority } => Some(authority),
            Mutation::Mint {
                creator, restricted, ..
            } => restricted.then_some(creator),
            Mutation::Edit {
                owner,
                update_restricted,
                ..
            } => (!update_restricted).then_some(owner),
            Mutation::Move { owner, .. } => Some(owner),
            Mutation::TransferClass { creator, .. } => Some(creator),
        }
    }

    fn is_open(&self) -> bool {
        matches!(
            self,
            Mutation::Mint {
                restricted: false,
                ..
            }
        )
    }
}

pub fn is_allowed(mutation: &Mutation, actor: &Addr) -> bool {
    mutation.is_open() || mutation.required() == Some(actor)
}

pub fn authorize(mutation: &Mutation, actor: &Addr) -> Result<(), Unauthorized> {
    if is_allowed(mutation, actor) {
        return Ok(());
    }
    let required = match mutation.required() {
        Some(addr) => addr.to_string(),
        None => "nobody: class is update-restricted".to_string(),
    };
    Err(Unauthorized {
        action: mutation.action(),
        actor: actor.to_string(),
        required,
    })
}
