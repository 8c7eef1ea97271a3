use cosmwasm_std::{Addr, Storage};
use dualbridge_registry::helpers::validate_native_id;
use dualbridge_registry::{authorize, Mutation};

use crate::error::{nft_key, ContractError};
use crate::helpers::{validate_token_id, NftEdit};
use crate::state::{Class, Nft, NftMetadata};
use crate::store::{BaseNftStore, NftStore};

/// Token fields supplied at mint time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NftFields {
    pub name: String,
    pub uri: String,
    pub uri_hash: String,
    pub description: String,
}

/// Restriction and ownership policy on top of an [`NftStore`].
///
/// Every mutation loads what it needs, asks [`authorize`], builds the
/// complete new record and writes it through the store exactly once, so a
/// rejected call leaves storage untouched.
pub struct CollectionKeeper<'s, S: NftStore + ?Sized = BaseNftStore> {
    store: &'s S,
}

impl<'s, S: NftStore + ?Sized> CollectionKeeper<'s, S> {
    pub fn new(store: &'s S) -> Self {
        CollectionKeeper { store }
    }

    pub fn class(&self, storage: &dyn Storage, class_id: &str) -> Result<Class, ContractError> {
        self.store
            .class(storage, class_id)?
            .ok_or_else(|| ContractError::UnknownAsset {
                asset: class_id.to_string(),
            })
    }

    pub fn nft(&self, storage: &dyn Storage, class_id: &str, token_id: &str) -> Result<Nft, ContractError> {
        self.store
            .nft(storage, class_id, token_id)?
            .ok_or_else(|| ContractError::UnknownAsset {
                asset: nft_key(class_id, token_id),
            })
    }

    #[allow(clippy::too_many_arguments)]
    pub fn issue_class(
        &self,
        storage: &mut dyn Storage,
        id: &str,
        name: &str,
        schema: &str,
        symbol: &str,
        creator: &Addr,
        mint_restricted: bool,
        update_restricted: bool,
    ) -> Result<Class, ContractError> {
        validate_native_id(id)?;
        let class = Class {
            id: id.to_string(),
            name: name.to_string(),
            symbol: symbol.to_string(),
            schema: schema.to_string(),
            creator: creator.clone(),
            mint_restricted,
            update_restricted,
        };
        self.store.save_class(storage, &class)?;
        Ok(class)
    }

    pub fn mint_nft(
        &self,
        storage: &mut dyn Storage,
        class_id: &str,
        token_id: &str,
        fields: NftFields,
        sender: &Addr,
        receiver: &Addr,
    ) -> Result<Nft, ContractError> {
        validate_token_id(token_id)?;
        let class = self.class(storage, class_id)?;
        authorize(
            &Mutation::Mint {
                class_id,
                creator: &class.creator,
                restricted: class.mint_restricted,
            },
            sender,
        )?;

        let nft = Nft {
            class_id: class_id.to_string(),
            id: token_id.to_string(),
            uri: fields.uri,
            uri_hash: fields.uri_hash,
            metadata: NftMetadata {
                name: fields.name,
                description: fields.description,
            },
            owner: receiver.clone(),
        };
        self.store.mint(storage, &nft)?;
        Ok(nft)
    }

    /// Apply `edit` to a token held by `owner`. An empty edit still passes
    /// every check and then writes nothing.
    pub fn edit_nft(
        &self,
        storage: &mut dyn Storage,
        class_id: &str,
        token_id: &str,
        edit: &NftEdit,
        owner: &Addr,
    ) -> Result<Nft, ContractError> {
        let class = self.class(storage, class_id)?;
        if class.update_restricted {
            // rejected before the token is looked up, missing or not
            authorize(
                &Mutation::Edit {
                    class_id,
                    token_id,
                    owner: &class.creator,
                    update_restricted: true,
                },
                owner,
            )?;
        }
        let mut nft = self.nft(storage, class_id, token_id)?;
        authorize(
            &Mutation::Edit {
                class_id,
                token_id,
                owner: &nft.owner,
                update_restricted: class.update_restricted,
            },
            owner,
        )?;

        if edit.is_empty() {
            return Ok(nft);
        }
        edit.apply(&mut nft);
        self.store.update(storage, &nft)?;
        Ok(nft)
    }

    /// Move a token from `src_owner` to `dst_owner`, applying `edit` on the
    /// way. The update restriction only bites when the edit touches a field;
    /// a bare transfer needs nothing beyond ownership.
    pub fn transfer_nft(
        &self,
        storage: &mut dyn Storage,
        class_id: &str,
        token_id: &str,
        edit: &NftEdit,
        src_owner: &Addr,
        dst_owner: &Addr,
    ) -> Result<Nft, ContractError> {
        let mut nft = self.nft(storage, class_id, token_id)?;
        authorize(
            &Mutation::Move {
                class_id,
                token_id,
                owner: &nft.owner,
            },
            src_owner,
        )?;

        if !edit.is_empty() {
            let class = self.class(storage, class_id)?;
            authorize(
                &Mutation::Edit {
                    class_id,
                    token_id,
                    owner: &nft.owner,
                    update_restricted: class.update_restricted,
                },
                src_owner,
            )?;
            edit.apply(&mut nft);
        }

        nft.owner = dst_owner.clone();
        self.store.update(storage, &nft)?;
        Ok(nft)
    }

    /// Plain owner-checked transfer with no field changes.
    pub fn send_nft(
        &self,
        storage: &mut dyn Storage,
        class_id: &str,
        token_id: &str,
        sender: &Addr,
        receiver: &Addr,
    ) -> Result<Nft, ContractError> {
        let owner = self.nft(storage, class_id, token_id)?.owner;
        authorize(
            &Mutation::Move {
                class_id,
                token_id,
                owner: &owner,
            },
            sender,
        )?;
        self.store.transfer(storage, class_id, token_id, receiver)
    }

    pub fn burn_nft(
        &self,
        storage: &mut dyn Storage,
        class_id: &str,
        token_id: &str,
        owner: &Addr,
    ) -> Result<Nft, ContractError> {
        let current = self.nft(storage, class_id, token_id)?.owner;
        authorize(
            &Mutation::Move {
                class_id,
                token_id,
                owner: &current,
            },
            owner,
        )?;
        self.store.burn(storage, class_id, token_id)
    }

    /// Hand the class to `dst_owner`; every other class attribute is kept.
    pub fn transfer_class_owner(
        &self,
        storage: &mut dyn Storage,
        class_id: &str,
        src_owner: &Addr,
        dst_owner: &Addr,
    ) -> Result<Class, ContractError> {
        let mut class = self.class(storage, class_id)?;
        authorize(
            &Mutation::TransferClass {
                class_id,
                creator: &class.creator,
            },
            src_owner,
        )?;
        class.creator = dst_owner.clone();
        self.store.update_class(storage, &class)?;
        Ok(class)
    }
}
