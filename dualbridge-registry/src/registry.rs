use cosmwasm_std::{Binary, Order, StdResult, Storage};
use cw_storage_plus::{Bound, Map};

use crate::cache::CacheStorage;
use crate::error::RegistryError;
use crate::helpers::validate_evm_address;
use crate::state::TokenPair;

/// Token pairs plus the two lookup indexes, all under caller-chosen
/// namespaces so that the coin bridge and the NFT bridge keep separate
/// registries in one store.
///
/// `pairs` is keyed by pair id. `native` and `foreign` map the native id and
/// the contract address to the id of the pair most recently bound to them;
/// at most one pair reachable through each index is enabled.
pub struct TokenPairRegistry {
    pairs_ns: &'static str,
    native_ns: &'static str,
    foreign_ns: &'static str,
}

impl TokenPairRegistry {
    pub const fn new(pairs_ns: &'static str, native_ns: &'static str, foreign_ns: &'static str) -> Self {
        TokenPairRegistry {
            pairs_ns,
            native_ns,
            foreign_ns,
        }
    }

    fn pairs<'k>(&self) -> Map<&'k [u8], TokenPair> {
        Map::new(self.pairs_ns)
    }

    fn native_index<'k>(&self) -> Map<&'k str, Binary> {
        Map::new(self.native_ns)
    }

    fn foreign_index<'k>(&self) -> Map<&'k str, Binary> {
        Map::new(self.foreign_ns)
    }

    // ─── Lookups ────────────────────────────────────────────────────────────

    pub fn pair(&self, store: &dyn Storage, id: &[u8]) -> StdResult<Option<TokenPair>> {
        self.pairs().may_load(store, id)
    }

    pub fn lookup_by_native(&self, store: &dyn Storage, native_id: &str) -> StdResult<Option<TokenPair>> {
        match self.native_index().may_load(store, native_id)? {
            Some(id) => self.pair(store, id.as_slice()),
            None => Ok(None),
        }
    }

    pub fn lookup_by_foreign(&self, store: &dyn Storage, contract: &str) -> StdResult<Option<TokenPair>> {
        let contract = contract.to_ascii_lowercase();
        match self.foreign_index().may_load(store, &contract)? {
            Some(id) => self.pair(store, id.as_slice()),
            None => Ok(None),
        }
    }

    /// Resolve a token given either as a contract address or a native id.
    pub fn lookup(&self, store: &dyn Storage, token: &str) -> StdResult<Option<TokenPair>> {
        match validate_evm_address(token) {
            Ok(contract) => self.lookup_by_foreign(store, &contract),
            Err(_) => self.lookup_by_native(store, token),
        }
    }

    /// Like [`Self::lookup`], but only an enabled pair counts as registered.
    pub fn enabled_pair(&self, store: &dyn Storage, token: &str) -> Result<TokenPair, RegistryError> {
        match self.lookup(store, token)? {
            Some(pair) if pair.enabled => Ok(pair),
            _ => Err(RegistryError::AssetNotRegistered {
                asset: token.to_string(),
            }),
        }
    }

    /// Enabled pair bound to a foreign contract address. Native ids are not
    /// accepted here.
    pub fn enabled_pair_by_foreign(&self, store: &dyn Storage, contract: &str) -> Result<TokenPair, RegistryError> {
        let contract = validate_evm_address(contract)?;
        match self.lookup_by_foreign(store, &contract)? {
            Some(pair) if pair.enabled => Ok(pair),
            _ => Err(RegistryError::AssetNotRegistered { asset: contract }),
        }
    }

    // ─── Mutations ──────────────────────────────────────────────────────────

    /// Store a new pair and point both indexes at it. Fails with
    /// `DuplicateAsset` if either key already resolves to an enabled pair,
    /// or if this exact pair identity was registered before.
    pub fn register(&self, store: &mut dyn Storage, mut pair: TokenPair) -> Result<TokenPair, RegistryError> {
        pair.validate()?;
        let id = pair.id();
        if self.pairs().has(store, &id) {
            return Err(RegistryError::DuplicateAsset {
                key: pair.contract_address,
            });
        }
        self.ensure_key_free(store, &pair, &id)?;

        let mut cache = CacheStorage::new(store);
        self.write_pair(&mut cache, &pair, &id)?;
        cache.commit();
        log::debug!(
            "registered token pair {} <-> {} ({:?})",
            pair.native_id,
            pair.contract_address,
            pair.owner
        );
        Ok(pair)
    }

    /// Disable the pair bound to `native_id`. Pairs are never deleted.
    pub fn disable(&self, store: &mut dyn Storage, native_id: &str) -> Result<TokenPair, RegistryError> {
        let mut pair = self
            .lookup_by_native(store, native_id)?
            .ok_or_else(|| RegistryError::AssetNotRegistered {
                asset: native_id.to_string(),
            })?;
        pair.enabled = false;
        self.pairs().save(store, &pair.id(), &pair)?;
        Ok(pair)
    }

    /// Flip `enabled` on the pair found by native id or contract address.
    /// Re-enabling also re-binds both indexes to this pair, and fails if
    /// another enabled pair has taken either key meanwhile.
    pub fn toggle(&self, store: &mut dyn Storage, token: &str) -> Result<TokenPair, RegistryError> {
        let mut pair = self
            .lookup(store, token)?
            .ok_or_else(|| RegistryError::AssetNotRegistered {
                asset: token.to_string(),
            })?;
        let id = pair.id();
        pair.enabled = !pair.enabled;

        if pair.enabled {
            self.ensure_key_free(store, &pair, &id)?;
        }
        let mut cache = CacheStorage::new(store);
        self.write_pair(&mut cache, &pair, &id)?;
        cache.commit();
        log::debug!("token pair {} enabled={}", pair.native_id, pair.enabled);
        Ok(pair)
    }

    /// Re-point a pair at a new foreign contract. Native id, owner kind and
    /// the enabled flag carry over; the identity hash changes with the
    /// address, so the old record is dropped.
    pub fn update_foreign_address(
        &self,
        store: &mut dyn Storage,
        contract: &str,
        new_contract: &str,
    ) -> Result<TokenPair, RegistryError> {
        let old = self
            .lookup_by_foreign(store, &validate_evm_address(contract)?)?
            .ok_or_else(|| RegistryError::AssetNotRegistered {
                asset: contract.to_string(),
            })?;

        let mut pair = TokenPair {
            contract_address: new_contract.to_string(),
            ..old.clone()
        };
        pair.validate()?;
        let id = pair.id();
        if self.pairs().has(store, &id) {
            return Err(RegistryError::DuplicateAsset {
                key: pair.contract_address,
            });
        }
        let old_id = old.id();
        if pair.enabled {
            self.ensure_key_free(store, &pair, &old_id)?;
        } else if let Some(existing) = self.lookup_by_foreign(store, &pair.contract_address)? {
            if existing.enabled {
                return Err(RegistryError::DuplicateAsset {
                    key: pair.contract_address,
                });
            }
        }

        let mut cache = CacheStorage::new(store);
        self.pairs().remove(&mut cache, &old_id);
        self.foreign_index().remove(&mut cache, &old.contract_address);
        if pair.enabled {
            self.write_pair(&mut cache, &pair, &id)?;
        } else {
            self.pairs().save(&mut cache, &id, &pair)?;
            self.foreign_index()
                .save(&mut cache, &pair.contract_address, &Binary::from(id.clone()))?;
            // the denom may have been re-bound to a newer pair since this one was disabled
            let bound_here = self
                .native_index()
                .may_load(&cache, &pair.native_id)?
                .map_or(true, |bound| bound.as_slice() == old_id.as_slice());
            if bound_here {
                self.native_index().save(&mut cache, &pair.native_id, &Binary::from(id))?;
            }
        }
        cache.commit();
        log::debug!(
            "token pair {} moved from {} to {}",
            pair.native_id,
            old.contract_address,
            pair.contract_address
        );
        Ok(pair)
    }

    // ─── Snapshots ──────────────────────────────────────────────────────────

    /// Every pair, ascending by identity hash.
    pub fn export_pairs(&self, store: &dyn Storage) -> StdResult<Vec<TokenPair>> {
        self.pairs()
            .range(store, None, None, Order::Ascending)
            .map(|item| item.map(|(_, pair)| pair))
            .collect()
    }

    pub fn pairs_page(
        &self,
        store: &dyn Storage,
        start_after: Option<&[u8]>,
        limit: usize,
    ) -> StdResult<Vec<TokenPair>> {
        let start = start_after.map(Bound::exclusive);
        self.pairs()
            .range(store, start, None, Order::Ascending)
            .take(limit)
            .map(|item| item.map(|(_, pair)| pair))
            .collect()
    }

    /// Rebuild the registry from a snapshot. Either every pair lands or none.
    pub fn import_pairs(&self, store: &mut dyn Storage, pairs: Vec<TokenPair>) -> Result<(), RegistryError> {
        let mut cache = CacheStorage::new(store);
        for mut pair in pairs {
            pair.validate()?;
            let id = pair.id();
            if self.pairs().has(&cache, &id) {
                return Err(RegistryError::DuplicateAsset {
                    key: pair.contract_address,
                });
            }
            if pair.enabled {
                self.ensure_key_free(&cache, &pair, &id)?;
                self.write_pair(&mut cache, &pair, &id)?;
            } else {
                self.pairs().save(&mut cache, &id, &pair)?;
                // a disabled pair only claims keys nobody else holds
                if !self.native_index().has(&cache, &pair.native_id) {
                    self.native_index().save(&mut cache, &pair.native_id, &Binary::from(id.clone()))?;
                }
                if !self.foreign_index().has(&cache, &pair.contract_address) {
                    self.foreign_index().save(&mut cache, &pair.contract_address, &Binary::from(id))?;
                }
            }
        }
        cache.commit();
        Ok(())
    }

    // ─── Internals ──────────────────────────────────────────────────────────

    fn ensure_key_free(&self, store: &dyn Storage, pair: &TokenPair, id: &[u8]) -> Result<(), RegistryError> {
        let holders = [
            (self.lookup_by_native(store, &pair.native_id)?, &pair.native_id),
            (self.lookup_by_foreign(store, &pair.contract_address)?, &pair.contract_address),
        ];
        for (holder, key) in holders {
            if let Some(holder) = holder {
                if holder.enabled && holder.id() != id {
                    return Err(RegistryError::DuplicateAsset { key: key.clone() });
                }
            }
        }
        Ok(())
    }

    fn write_pair(&self, store: &mut dyn Storage, pair: &TokenPair, id: &[u8]) -> StdResult<()> {
        self.pairs().save(store, id, pair)?;
        self.native_index()
            .save(store, &pair.native_id, &Binary::from(id.to_vec()))?;
        self.foreign_index()
            .save(store, &pair.contract_address, &Binary::from(id.to_vec()))
    }
}
