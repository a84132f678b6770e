//! Pause switch and blocklist.

use frame_support::{dispatch::DispatchResult, ensure};
use sp_runtime::DispatchError;

use crate::{BlocklistedAccounts, Blocklists, Config, Error, Event, Pallet, PauseStates};

impl<T: Config> Pallet<T> {
    /// Fails with `Paused` while `asset` is paused.
    pub fn ensure_not_paused(asset: T::AssetId) -> DispatchResult {
        let state = PauseStates::<T>::get(asset).ok_or(Error::<T>::UnknownAsset)?;
        ensure!(!state.paused, Error::<T>::Paused);
        Ok(())
    }

    /// Fails with `Blocklisted` if `who` is on the blocklist of `asset`.
    pub fn ensure_not_blocklisted(asset: T::AssetId, who: &T::AccountId) -> DispatchResult {
        ensure!(!Self::is_blocklisted(asset, who), Error::<T>::Blocklisted);
        Ok(())
    }

    /// Sets the pause flag. Re-asserting the current value is not an error and
    /// still emits the event.
    pub(crate) fn do_set_paused(
        asset: T::AssetId,
        caller: &T::AccountId,
        paused: bool,
    ) -> DispatchResult {
        PauseStates::<T>::try_mutate(asset, |maybe_state| -> DispatchResult {
            let state = maybe_state.as_mut().ok_or(Error::<T>::UnknownAsset)?;
            ensure!(state.pauser == *caller, Error::<T>::NotPauser);
            state.paused = paused;
            Ok(())
        })?;

        if paused {
            Self::deposit_event(Event::Pause { asset });
        } else {
            Self::deposit_event(Event::Unpause { asset });
        }
        Ok(())
    }

    pub(crate) fn do_update_pauser(
        asset: T::AssetId,
        caller: &T::AccountId,
        new_pauser: T::AccountId,
    ) -> DispatchResult {
        Self::ensure_owner(asset, caller)?;
        let old_pauser = PauseStates::<T>::try_mutate(asset, |maybe_state| {
            let state = maybe_state.as_mut().ok_or(Error::<T>::UnknownAsset)?;
            Ok::<_, DispatchError>(core::mem::replace(&mut state.pauser, new_pauser.clone()))
        })?;

        Self::deposit_event(Event::PauserChanged { asset, old_pauser, new_pauser });
        Ok(())
    }

    fn ensure_blocklister(asset: T::AssetId, who: &T::AccountId) -> DispatchResult {
        let state = Blocklists::<T>::get(asset).ok_or(Error::<T>::UnknownAsset)?;
        ensure!(state.blocklister == *who, Error::<T>::NotBlocklister);
        Ok(())
    }

    /// Adds `account` to the blocklist. Adding an existing member is a no-op
    /// that still emits the event.
    pub(crate) fn do_blocklist(
        asset: T::AssetId,
        caller: &T::AccountId,
        account: T::AccountId,
    ) -> DispatchResult {
        Self::ensure_blocklister(asset, caller)?;
        BlocklistedAccounts::<T>::insert(asset, &account, ());

        Self::deposit_event(Event::Blocklisted { asset, account });
        Ok(())
    }

    pub(crate) fn do_unblocklist(
        asset: T::AssetId,
        caller: &T::AccountId,
        account: T::AccountId,
    ) -> DispatchResult {
        Self::ensure_blocklister(asset, caller)?;
        BlocklistedAccounts::<T>::remove(asset, &account);

        Self::deposit_event(Event::Unblocklisted { asset, account });
        Ok(())
    }

    pub(crate) fn do_update_blocklister(
        asset: T::AssetId,
        caller: &T::AccountId,
        new_blocklister: T::AccountId,
    ) -> DispatchResult {
        Self::ensure_owner(asset, caller)?;
        let old_blocklister = Blocklists::<T>::try_mutate(asset, |maybe_state| {
            let state = maybe_state.as_mut().ok_or(Error::<T>::UnknownAsset)?;
            Ok::<_, DispatchError>(core::mem::replace(
                &mut state.blocklister,
                new_blocklister.clone(),
            ))
        })?;

        Self::deposit_event(Event::BlocklisterChanged { asset, old_blocklister, new_blocklister });
        Ok(())
    }
}
