//! Two-step transferable roles: ownership and upgrade administration.

use codec::{Decode, Encode, MaxEncodedLen};
use frame_support::{dispatch::DispatchResult, ensure};
use scale_info::TypeInfo;
use sp_runtime::{DispatchError, RuntimeDebug};

use crate::{Admins, Config, Error, Event, Owners, Pallet};

/// A role whose holder can only change when the nominee accepts.
///
/// `Stable(holder, None)` -> `Pending(holder, Some(nominee))` -> `Stable(nominee, None)`.
#[derive(Clone, Encode, Decode, Eq, PartialEq, RuntimeDebug, TypeInfo, MaxEncodedLen)]
pub struct TwoStepRole<AccountId> {
    holder: AccountId,
    pending: Option<AccountId>,
}

/// Why a role transition was rejected.
#[derive(Clone, Copy, Eq, PartialEq, RuntimeDebug)]
pub enum RoleError {
    /// The caller does not hold the role.
    NotHolder,
    /// Nobody has been nominated.
    PendingNotSet,
    /// The caller is not the nominee.
    NotPendingParty,
}

impl<AccountId: Clone + PartialEq> TwoStepRole<AccountId> {
    pub fn new(holder: AccountId) -> Self {
        Self { holder, pending: None }
    }

    pub fn holder(&self) -> &AccountId {
        &self.holder
    }

    pub fn pending(&self) -> Option<&AccountId> {
        self.pending.as_ref()
    }

    pub fn is_holder(&self, who: &AccountId) -> bool {
        self.holder == *who
    }

    /// Nominates `nominee`, replacing any earlier nomination. Nominating the
    /// current holder is allowed.
    pub fn nominate(&self, caller: &AccountId, nominee: AccountId) -> Result<Self, RoleError> {
        if !self.is_holder(caller) {
            return Err(RoleError::NotHolder);
        }
        Ok(Self { holder: self.holder.clone(), pending: Some(nominee) })
    }

    /// Completes a transfer. Only the nominee may accept.
    pub fn accept(&self, caller: &AccountId) -> Result<Self, RoleError> {
        match &self.pending {
            None => Err(RoleError::PendingNotSet),
            Some(nominee) if nominee != caller => Err(RoleError::NotPendingParty),
            Some(nominee) => Ok(Self { holder: nominee.clone(), pending: None }),
        }
    }
}

impl<T: Config> Error<T> {
    fn from_owner_role(err: RoleError) -> Self {
        match err {
            RoleError::NotHolder => Error::<T>::NotOwner,
            RoleError::PendingNotSet => Error::<T>::PendingNotSet,
            RoleError::NotPendingParty => Error::<T>::NotPendingParty,
        }
    }

    fn from_admin_role(err: RoleError) -> Self {
        match err {
            RoleError::NotHolder => Error::<T>::NotAdmin,
            RoleError::PendingNotSet => Error::<T>::PendingNotSet,
            RoleError::NotPendingParty => Error::<T>::NotPendingParty,
        }
    }
}

impl<T: Config> Pallet<T> {
    /// Fails with `NotOwner` unless `who` owns `asset`.
    pub fn ensure_owner(asset: T::AssetId, who: &T::AccountId) -> DispatchResult {
        let role = Owners::<T>::get(asset).ok_or(Error::<T>::UnknownAsset)?;
        ensure!(role.is_holder(who), Error::<T>::NotOwner);
        Ok(())
    }

    pub(crate) fn do_transfer_ownership(
        asset: T::AssetId,
        caller: &T::AccountId,
        new_owner: T::AccountId,
    ) -> DispatchResult {
        let owner = Owners::<T>::try_mutate(asset, |maybe_role| -> Result<_, DispatchError> {
            let role = maybe_role.as_mut().ok_or(Error::<T>::UnknownAsset)?;
            *role = role.nominate(caller, new_owner.clone()).map_err(Error::<T>::from_owner_role)?;
            Ok(role.holder().clone())
        })?;

        Self::deposit_event(Event::OwnershipTransferStarted { asset, old_owner: owner, new_owner });
        Ok(())
    }

    pub(crate) fn do_accept_ownership(asset: T::AssetId, caller: &T::AccountId) -> DispatchResult {
        let old_owner = Owners::<T>::try_mutate(asset, |maybe_role| -> Result<_, DispatchError> {
            let role = maybe_role.as_mut().ok_or(Error::<T>::UnknownAsset)?;
            let previous = role.holder().clone();
            *role = role.accept(caller).map_err(Error::<T>::from_owner_role)?;
            Ok(previous)
        })?;

        Self::deposit_event(Event::OwnershipTransferred {
            asset,
            old_owner,
            new_owner: caller.clone(),
        });
        Ok(())
    }

    pub(crate) fn do_change_admin(
        asset: T::AssetId,
        caller: &T::AccountId,
        new_admin: T::AccountId,
    ) -> DispatchResult {
        let admin = Admins::<T>::try_mutate(asset, |maybe_role| -> Result<_, DispatchError> {
            let role = maybe_role.as_mut().ok_or(Error::<T>::UnknownAsset)?;
            *role = role.nominate(caller, new_admin.clone()).map_err(Error::<T>::from_admin_role)?;
            Ok(role.holder().clone())
        })?;

        Self::deposit_event(Event::AdminChangeStarted { asset, old_admin: admin, new_admin });
        Ok(())
    }

    pub(crate) fn do_accept_admin(asset: T::AssetId, caller: &T::AccountId) -> DispatchResult {
        let old_admin = Admins::<T>::try_mutate(asset, |maybe_role| -> Result<_, DispatchError> {
            let role = maybe_role.as_mut().ok_or(Error::<T>::UnknownAsset)?;
            let previous = role.holder().clone();
            *role = role.accept(caller).map_err(Error::<T>::from_admin_role)?;
            Ok(previous)
        })?;

        Self::deposit_event(Event::AdminChanged { asset, old_admin, new_admin: caller.clone() });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nominate_requires_holder() {
        let role = TwoStepRole::new(1u64);
        assert_eq!(role.nominate(&2, 3), Err(RoleError::NotHolder));
        assert_eq!(role.nominate(&1, 3).map(|r| r.pending().copied()), Ok(Some(3)));
    }

    #[test]
    fn later_nomination_replaces_earlier_one() {
        let role = TwoStepRole::new(1u64).nominate(&1, 2).and_then(|r| r.nominate(&1, 3));
        let role = role.expect("holder may nominate");
        assert_eq!(role.pending(), Some(&3));
        assert_eq!(role.accept(&2), Err(RoleError::NotPendingParty));
    }

    #[test]
    fn accept_moves_holder_and_clears_pending() {
        let role = TwoStepRole::new(1u64).nominate(&1, 2).expect("holder may nominate");
        let accepted = role.accept(&2).expect("nominee may accept");
        assert_eq!(accepted.holder(), &2);
        assert_eq!(accepted.pending(), None);
        assert_eq!(accepted.accept(&2), Err(RoleError::PendingNotSet));
    }

    #[test]
    fn self_nomination_is_a_no_op_on_accept() {
        let role = TwoStepRole::new(1u64).nominate(&1, 1).expect("holder may nominate itself");
        assert_eq!(role.pending(), Some(&1));
        assert_eq!(role.accept(&1), Ok(TwoStepRole::new(1u64)));
    }
}
