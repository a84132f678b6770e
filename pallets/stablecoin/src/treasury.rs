//! Master minter, controllers and minter allowances.
//!
//! A controller manages exactly one minter at a time; a minter exists exactly
//! when it has an entry in `MintAllowances`, even if that entry is zero.

use frame_support::{dispatch::DispatchResult, ensure};
use sp_runtime::DispatchError;

use crate::{
    Config, Controllers, Error, Event, FungibleAsset, FungibleLedger, MintAllowances, Pallet,
    Treasuries,
};

impl<T: Config> Pallet<T> {
    fn ensure_master_minter(asset: T::AssetId, who: &T::AccountId) -> DispatchResult {
        let treasury = Treasuries::<T>::get(asset).ok_or(Error::<T>::UnknownAsset)?;
        ensure!(treasury.master_minter == *who, Error::<T>::NotMasterMinter);
        Ok(())
    }

    /// Resolves the minter managed by `controller`.
    fn ensure_controller(
        asset: T::AssetId,
        controller: &T::AccountId,
    ) -> Result<T::AccountId, DispatchError> {
        Controllers::<T>::get(asset, controller).ok_or_else(|| Error::<T>::NotController.into())
    }

    pub(crate) fn do_configure_controller(
        asset: T::AssetId,
        caller: &T::AccountId,
        controller: T::AccountId,
        minter: T::AccountId,
    ) -> DispatchResult {
        Self::ensure_master_minter(asset, caller)?;
        Controllers::<T>::insert(asset, &controller, &minter);

        Self::deposit_event(Event::ControllerConfigured { asset, controller, minter });
        Ok(())
    }

    pub(crate) fn do_remove_controller(
        asset: T::AssetId,
        caller: &T::AccountId,
        controller: T::AccountId,
    ) -> DispatchResult {
        Self::ensure_master_minter(asset, caller)?;
        ensure!(Controllers::<T>::contains_key(asset, &controller), Error::<T>::ControllerNotFound);
        Controllers::<T>::remove(asset, &controller);

        Self::deposit_event(Event::ControllerRemoved { asset, controller });
        Ok(())
    }

    /// Sets the allowance of the controller's minter, creating the minter if it
    /// does not exist yet. Overwrites any previous allowance.
    pub(crate) fn do_configure_minter(
        asset: T::AssetId,
        controller: &T::AccountId,
        allowance: u64,
    ) -> DispatchResult {
        Self::ensure_not_paused(asset)?;
        let minter = Self::ensure_controller(asset, controller)?;
        MintAllowances::<T>::insert(asset, &minter, allowance);

        Self::deposit_event(Event::MinterConfigured {
            asset,
            controller: controller.clone(),
            minter,
            allowance,
        });
        Ok(())
    }

    /// Adds `delta` to the allowance of an existing minter.
    pub(crate) fn do_increment_minter_allowance(
        asset: T::AssetId,
        controller: &T::AccountId,
        delta: u64,
    ) -> DispatchResult {
        Self::ensure_not_paused(asset)?;
        let minter = Self::ensure_controller(asset, controller)?;
        ensure!(delta > 0, Error::<T>::ZeroAmount);
        let current = MintAllowances::<T>::get(asset, &minter).ok_or(Error::<T>::MinterNotFound)?;
        let new_allowance = current.checked_add(delta).ok_or(Error::<T>::Overflow)?;
        MintAllowances::<T>::insert(asset, &minter, new_allowance);

        Self::deposit_event(Event::MinterAllowanceIncremented {
            asset,
            controller: controller.clone(),
            minter,
            delta,
            new_allowance,
        });
        Ok(())
    }

    pub(crate) fn do_remove_minter(asset: T::AssetId, controller: &T::AccountId) -> DispatchResult {
        let minter = Self::ensure_controller(asset, controller)?;
        ensure!(MintAllowances::<T>::contains_key(asset, &minter), Error::<T>::MinterNotFound);
        MintAllowances::<T>::remove(asset, &minter);

        Self::deposit_event(Event::MinterRemoved {
            asset,
            controller: controller.clone(),
            minter,
        });
        Ok(())
    }

    /// Mints `amount` units against `minter`'s allowance and returns them.
    ///
    /// The caller is responsible for depositing or burning the returned value.
    /// Nothing authorizes the caller beyond `minter`'s allowance, so this is for
    /// trusted runtime code only.
    pub fn do_mint(
        asset: T::AssetId,
        minter: &T::AccountId,
        amount: u64,
    ) -> Result<FungibleAsset<T::AssetId>, DispatchError> {
        Self::ensure_not_paused(asset)?;
        ensure!(amount > 0, Error::<T>::ZeroAmount);
        let allowance = MintAllowances::<T>::get(asset, minter).ok_or(Error::<T>::NotMinter)?;
        Self::ensure_not_blocklisted(asset, minter)?;
        ensure!(amount <= allowance, Error::<T>::InsufficientAllowance);
        let remaining = allowance.checked_sub(amount).ok_or(Error::<T>::Underflow)?;

        let treasury = Treasuries::<T>::get(asset).ok_or(Error::<T>::UnknownAsset)?;
        let minted = T::Ledger::mint(&treasury.mint_ref, amount)?;
        MintAllowances::<T>::insert(asset, minter, remaining);

        Self::deposit_event(Event::Mint { asset, minter: minter.clone(), amount });
        Ok(minted)
    }

    /// Checks everything `do_burn` checks except the identity of the burned
    /// value, so dispatchables can reject before withdrawing.
    pub(crate) fn ensure_can_burn(
        asset: T::AssetId,
        burner: &T::AccountId,
        amount: u64,
    ) -> DispatchResult {
        Self::ensure_not_paused(asset)?;
        ensure!(amount > 0, Error::<T>::ZeroAmount);
        ensure!(Self::is_minter(asset, burner), Error::<T>::NotMinter);
        Self::ensure_not_blocklisted(asset, burner)?;
        Ok(())
    }

    /// Burns `value` on behalf of `burner`. Allowances are not touched.
    ///
    /// `value` must come from the ledger (a withdrawal or a mint). The pallet
    /// checks only that it belongs to `asset`; trusted runtime code only.
    pub fn do_burn(
        asset: T::AssetId,
        burner: &T::AccountId,
        value: FungibleAsset<T::AssetId>,
    ) -> DispatchResult {
        let amount = value.amount();
        Self::ensure_can_burn(asset, burner, amount)?;
        let treasury = Treasuries::<T>::get(asset).ok_or(Error::<T>::UnknownAsset)?;
        ensure!(value.asset() == treasury.burn_ref.asset(), Error::<T>::MetadataMismatch);
        T::Ledger::burn(&treasury.burn_ref, value)?;

        Self::deposit_event(Event::Burn { asset, burner: burner.clone(), amount });
        Ok(())
    }

    /// Replaces the master minter. Controllers and allowances are kept.
    pub(crate) fn do_update_master_minter(
        asset: T::AssetId,
        caller: &T::AccountId,
        new_master_minter: T::AccountId,
    ) -> DispatchResult {
        Self::ensure_owner(asset, caller)?;
        let old_master_minter = Treasuries::<T>::try_mutate(asset, |maybe_treasury| {
            let treasury = maybe_treasury.as_mut().ok_or(Error::<T>::UnknownAsset)?;
            Ok::<_, DispatchError>(core::mem::replace(
                &mut treasury.master_minter,
                new_master_minter.clone(),
            ))
        })?;

        Self::deposit_event(Event::MasterMinterChanged {
            asset,
            old_master_minter,
            new_master_minter,
        });
        Ok(())
    }
}
