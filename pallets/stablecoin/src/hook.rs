//! Transfer enforcement: every dispatched deposit and withdrawal of a governed
//! asset passes through here before the ledger moves any balance.
//!
//! Checks run in a fixed order. An asset mismatch is a wiring error and fails
//! first; pause and blocklist are operational controls evaluated per call.

use frame_support::{dispatch::DispatchResult, ensure};
use sp_runtime::DispatchError;

use crate::{
    Blocklists, Config, Error, Event, FungibleAsset, FungibleLedger, Pallet, TransferHook,
    LOG_TARGET,
};

impl<T: Config> Pallet<T> {
    /// Validates a movement into or out of `store` and returns the store owner.
    ///
    /// The blocklist is checked against the owner of the store, not against
    /// whoever initiated the movement.
    fn ensure_transfer_allowed(
        asset: &T::AssetId,
        store: &T::StoreId,
    ) -> Result<T::AccountId, DispatchError> {
        let store_asset = T::Ledger::store_asset(store).ok_or(Error::<T>::StoreNotFound)?;
        ensure!(store_asset == *asset, Error::<T>::MetadataMismatch);
        let owner = T::Ledger::store_owner(store).ok_or(Error::<T>::StoreNotFound)?;
        Self::ensure_not_paused(*asset)?;
        Self::ensure_not_blocklisted(*asset, &owner)?;
        Ok(owner)
    }
}

impl<T: Config> TransferHook<T::AssetId, T::StoreId> for Pallet<T> {
    fn on_deposit(
        asset: &T::AssetId,
        store: &T::StoreId,
        value: FungibleAsset<T::AssetId>,
    ) -> DispatchResult {
        ensure!(value.asset() == asset, Error::<T>::MetadataMismatch);
        let owner = Self::ensure_transfer_allowed(asset, store).inspect_err(|err| {
            log::debug!(target: LOG_TARGET, "deposit into store {store:?} rejected: {err:?}")
        })?;
        let blocklist = Blocklists::<T>::get(asset).ok_or(Error::<T>::UnknownAsset)?;
        ensure!(blocklist.transfer_ref.asset() == asset, Error::<T>::MetadataMismatch);

        let amount = value.amount();
        T::Ledger::deposit_with_ref(&blocklist.transfer_ref, store, value)?;

        Self::deposit_event(Event::Deposit { asset: *asset, owner, store: store.clone(), amount });
        Ok(())
    }

    fn on_withdraw(
        asset: &T::AssetId,
        store: &T::StoreId,
        amount: u64,
    ) -> Result<FungibleAsset<T::AssetId>, DispatchError> {
        let owner = Self::ensure_transfer_allowed(asset, store).inspect_err(|err| {
            log::debug!(target: LOG_TARGET, "withdrawal from store {store:?} rejected: {err:?}")
        })?;
        let blocklist = Blocklists::<T>::get(asset).ok_or(Error::<T>::UnknownAsset)?;
        ensure!(blocklist.transfer_ref.asset() == asset, Error::<T>::MetadataMismatch);

        let withdrawn = T::Ledger::withdraw_with_ref(&blocklist.transfer_ref, store, amount)?;

        Self::deposit_event(Event::Withdraw {
            asset: *asset,
            owner,
            store: store.clone(),
            amount,
        });
        Ok(withdrawn)
    }
}
