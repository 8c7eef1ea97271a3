use cosmwasm_std::{Addr, Order, StdResult, Storage};
use cw_storage_plus::Bound;
use dualbridge_registry::CacheStorage;

use crate::error::{nft_key, ContractError};
use crate::state::{Class, Nft, CLASSES, CLASS_SUPPLY, NFTS};

/// Plain class/token bookkeeping with no policy attached: existence checks
/// only. Restrictions and ownership rules live in [`crate::keeper`].
pub trait NftStore {
    fn class(&self, storage: &dyn Storage, class_id: &str) -> StdResult<Option<Class>>;

    /// Fails with `AlreadyExists` if the id is taken.
    fn save_class(&self, storage: &mut dyn Storage, class: &Class) -> Result<(), ContractError>;

    /// Fails with `UnknownAsset` if the class does not exist.
    fn update_class(&self, storage: &mut dyn Storage, class: &Class) -> Result<(), ContractError>;

    fn nft(&self, storage: &dyn Storage, class_id: &str, token_id: &str) -> StdResult<Option<Nft>>;

    /// The class must exist and the token must not.
    fn mint(&self, storage: &mut dyn Storage, nft: &Nft) -> Result<(), ContractError>;

    /// Overwrite an existing token record, owner included.
    fn update(&self, storage: &mut dyn Storage, nft: &Nft) -> Result<(), ContractError>;

    fn transfer(
        &self,
        storage: &mut dyn Storage,
        class_id: &str,
        token_id: &str,
        receiver: &Addr,
    ) -> Result<Nft, ContractError>;

    fn burn(&self, storage: &mut dyn Storage, class_id: &str, token_id: &str) -> Result<Nft, ContractError>;

    fn supply(&self, storage: &dyn Storage, class_id: &str) -> StdResult<u64>;

    fn nfts(
        &self,
        storage: &dyn Storage,
        class_id: &str,
        start_after: Option<&str>,
        limit: usize,
    ) -> StdResult<Vec<Nft>>;

    fn owner(&self, storage: &dyn Storage, class_id: &str, token_id: &str) -> StdResult<Option<Addr>> {
        Ok(self.nft(storage, class_id, token_id)?.map(|nft| nft.owner))
    }
}

/// [`NftStore`] over the `nft_*` maps in [`crate::state`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BaseNftStore;

impl BaseNftStore {
    fn load_nft(&self, storage: &dyn Storage, class_id: &str, token_id: &str) -> Result<Nft, ContractError> {
        self.nft(storage, class_id, token_id)?
            .ok_or_else(|| ContractError::UnknownAsset {
                asset: nft_key(class_id, token_id),
            })
    }
}

impl NftStore for BaseNftStore {
    fn class(&self, storage: &dyn Storage, class_id: &str) -> StdResult<Option<Class>> {
        CLASSES.may_load(storage, class_id)
    }

    fn save_class(&self, storage: &mut dyn Storage, class: &Class) -> Result<(), ContractError> {
        if CLASSES.has(storage, &class.id) {
            return Err(ContractError::AlreadyExists {
                asset: class.id.clone(),
            });
        }
        CLASSES.save(storage, &class.id, class)?;
        Ok(())
    }

    fn update_class(&self, storage: &mut dyn Storage, class: &Class) -> Result<(), ContractError> {
        if !CLASSES.has(storage, &class.id) {
            return Err(ContractError::UnknownAsset {
                asset: class.id.clone(),
            });
        }
        CLASSES.save(storage, &class.id, class)?;
        Ok(())
    }

    fn nft(&self, storage: &dyn Storage, class_id: &str, token_id: &str) -> StdResult<Option<Nft>> {
        NFTS.may_load(storage, (class_id, token_id))
    }

    fn mint(&self, storage: &mut dyn Storage, nft: &Nft) -> Result<(), ContractError> {
        if !CLASSES.has(storage, &nft.class_id) {
            return Err(ContractError::UnknownAsset {
                asset: nft.class_id.clone(),
            });
        }
        let key = (nft.class_id.as_str(), nft.id.as_str());
        if NFTS.has(storage, key) {
            return Err(ContractError::AlreadyExists {
                asset: nft_key(&nft.class_id, &nft.id),
            });
        }
        let supply = self.supply(storage, &nft.class_id)?;

        let mut cache = CacheStorage::new(storage);
        NFTS.save(&mut cache, key, nft)?;
        CLASS_SUPPLY.save(&mut cache, &nft.class_id, &(supply + 1))?;
        cache.commit();
        Ok(())
    }

    fn update(&self, storage: &mut dyn Storage, nft: &Nft) -> Result<(), ContractError> {
        self.load_nft(storage, &nft.class_id, &nft.id)?;
        NFTS.save(storage, (nft.class_id.as_str(), nft.id.as_str()), nft)?;
        Ok(())
    }

    fn transfer(
        &self,
        storage: &mut dyn Storage,
        class_id: &str,
        token_id: &str,
        receiver: &Addr,
    ) -> Result<Nft, ContractError> {
        let mut nft = self.load_nft(storage, class_id, token_id)?;
        nft.owner = receiver.clone();
        NFTS.save(storage, (class_id, token_id), &nft)?;
        Ok(nft)
    }

    fn burn(&self, storage: &mut dyn Storage, class_id: &str, token_id: &str) -> Result<Nft, ContractError> {
        let nft = self.load_nft(storage, class_id, token_id)?;
        let supply = self.supply(storage, class_id)?;

        let mut cache = CacheStorage::new(storage);
        NFTS.remove(&mut cache, (class_id, token_id));
        if supply <= 1 {
            CLASS_SUPPLY.remove(&mut cache, class_id);
        } else {
            CLASS_SUPPLY.save(&mut cache, class_id, &(supply - 1))?;
        }
        cache.commit();
        Ok(nft)
    }

    fn supply(&self, storage: &dyn Storage, class_id: &str) -> StdResult<u64> {
        Ok(CLASS_SUPPLY.may_load(storage, class_id)?.unwrap_or(0))
    }

    fn nfts(
        &self,
        storage: &dyn Storage,
        class_id: &str,
        start_after: Option<&str>,
        limit: usize,
    ) -> StdResult<Vec<Nft>> {
        let start = start_after.map(Bound::exclusive);
        NFTS.prefix(class_id)
            .range(storage, start, None, Order::Ascending)
            .take(limit)
            .map(|item| item.map(|(_, nft)| nft))
            .collect()
    }
}
