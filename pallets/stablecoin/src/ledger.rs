//! Seams to the fungible-asset ledger that owns balances and total supply.

use frame_support::dispatch::DispatchResult;
use sp_runtime::DispatchError;

use crate::types::{BurnRef, FungibleAsset, MintRef, TransferRef};

/// The ledger holding balances of governed assets.
///
/// The pallet never stores balances itself. It authorizes supply changes and
/// transfers, then hands the work to the ledger through the capability it
/// holds for the asset.
pub trait FungibleLedger<AccountId, AssetId, StoreId> {
    /// Whether the ledger knows `asset`. Only known assets can be initialized.
    fn asset_exists(asset: &AssetId) -> bool;

    /// Creates `amount` new units of the capability's asset.
    fn mint(
        mint_ref: &MintRef<AssetId>,
        amount: u64,
    ) -> Result<FungibleAsset<AssetId>, DispatchError>;

    /// Destroys `value`, reducing total supply.
    fn burn(burn_ref: &BurnRef<AssetId>, value: FungibleAsset<AssetId>) -> DispatchResult;

    /// Asset held by `store`, or `None` if the store does not exist.
    fn store_asset(store: &StoreId) -> Option<AssetId>;

    /// Owner of `store`. Ownership may be indirect (a store held by an object
    /// that is itself owned by an account); the ledger resolves it.
    fn store_owner(store: &StoreId) -> Option<AccountId>;

    /// The primary store of `owner` for `asset`, created on first use.
    fn primary_store(owner: &AccountId, asset: &AssetId) -> StoreId;

    /// Deposits `value` into `store` through the asset's registered
    /// [`TransferHook`].
    fn deposit(store: &StoreId, value: FungibleAsset<AssetId>) -> DispatchResult;

    /// Withdraws `amount` from `store` through the asset's registered
    /// [`TransferHook`]. Authorizing the withdrawing party is up to the caller.
    fn withdraw(store: &StoreId, amount: u64) -> Result<FungibleAsset<AssetId>, DispatchError>;

    /// Credits `store` without running any hook.
    fn deposit_with_ref(
        transfer_ref: &TransferRef<AssetId>,
        store: &StoreId,
        value: FungibleAsset<AssetId>,
    ) -> DispatchResult;

    /// Debits `store` without running any hook.
    fn withdraw_with_ref(
        transfer_ref: &TransferRef<AssetId>,
        store: &StoreId,
        amount: u64,
    ) -> Result<FungibleAsset<AssetId>, DispatchError>;
}

/// Checkpoint the ledger must call on every dispatched deposit and withdrawal
/// of a governed asset.
pub trait TransferHook<AssetId, StoreId> {
    fn on_deposit(
        asset: &AssetId,
        store: &StoreId,
        value: FungibleAsset<AssetId>,
    ) -> DispatchResult;

    fn on_withdraw(
        asset: &AssetId,
        store: &StoreId,
        amount: u64,
    ) -> Result<FungibleAsset<AssetId>, DispatchError>;
}
