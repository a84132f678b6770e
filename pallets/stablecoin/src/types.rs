//! State records and capability tokens held per governed asset.

use codec::{Decode, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
use sp_runtime::RuntimeDebug;

/// Halt switch for every balance-changing operation on one asset.
#[derive(Clone, Encode, Decode, Eq, PartialEq, RuntimeDebug, TypeInfo, MaxEncodedLen)]
pub struct PauseState<AccountId> {
    pub paused: bool,
    /// Account allowed to flip `paused`. Only the owner can replace it.
    pub pauser: AccountId,
}

/// Blocklist configuration for one asset.
///
/// Membership itself lives in the `BlocklistedAccounts` double map; this record
/// holds the role and the transfer capability used by the enforcement hook.
#[derive(Encode, Decode, Eq, PartialEq, RuntimeDebug, TypeInfo, MaxEncodedLen)]
pub struct BlocklistState<AccountId, AssetId> {
    pub blocklister: AccountId,
    pub(crate) transfer_ref: TransferRef<AssetId>,
}

/// Treasury configuration for one asset.
///
/// Controller assignments and minter allowances are stored in their own
/// double maps so they can be read and updated independently.
#[derive(Encode, Decode, Eq, PartialEq, RuntimeDebug, TypeInfo, MaxEncodedLen)]
pub struct TreasuryState<AccountId, AssetId> {
    pub master_minter: AccountId,
    pub(crate) mint_ref: MintRef<AssetId>,
    pub(crate) burn_ref: BurnRef<AssetId>,
}

/// Role holders supplied when an asset is brought under management.
#[derive(Clone, Eq, PartialEq, RuntimeDebug)]
pub struct InitialRoles<AccountId> {
    pub owner: AccountId,
    pub admin: AccountId,
    pub pauser: AccountId,
    pub blocklister: AccountId,
    pub master_minter: AccountId,
}

/// Permission to create new units of one asset.
///
/// Capabilities are minted by this pallet when an asset is initialized and are
/// never cloned or handed out; ledgers only ever see a borrow.
///
/// The capability types derive `Decode` because they live in storage, so any
/// runtime code can still decode one out of raw bytes. They guard against
/// mistakes in trusted runtime code, not against it: only the pallet's own
/// storage is an authoritative source, and a ledger must never act on a
/// capability it did not receive from this pallet.
#[derive(Encode, Decode, Eq, PartialEq, RuntimeDebug, TypeInfo, MaxEncodedLen)]
pub struct MintRef<AssetId> {
    asset: AssetId,
}

impl<AssetId> MintRef<AssetId> {
    pub(crate) fn new(asset: AssetId) -> Self {
        Self { asset }
    }

    /// The asset this capability is bound to.
    pub fn asset(&self) -> &AssetId {
        &self.asset
    }
}

/// Permission to destroy units of one asset.
#[derive(Encode, Decode, Eq, PartialEq, RuntimeDebug, TypeInfo, MaxEncodedLen)]
pub struct BurnRef<AssetId> {
    asset: AssetId,
}

impl<AssetId> BurnRef<AssetId> {
    pub(crate) fn new(asset: AssetId) -> Self {
        Self { asset }
    }

    pub fn asset(&self) -> &AssetId {
        &self.asset
    }
}

/// Permission to move units of one asset in and out of stores, bypassing
/// the dispatching deposit/withdraw path.
#[derive(Encode, Decode, Eq, PartialEq, RuntimeDebug, TypeInfo, MaxEncodedLen)]
pub struct TransferRef<AssetId> {
    asset: AssetId,
}

impl<AssetId> TransferRef<AssetId> {
    pub(crate) fn new(asset: AssetId) -> Self {
        Self { asset }
    }

    pub fn asset(&self) -> &AssetId {
        &self.asset
    }
}

/// An amount of one asset that has left a store (or was just minted) and has
/// not yet been deposited or burned.
///
/// `new` is public so ledgers can produce values. Runtime code that builds a
/// value by hand outside a ledger fabricates units; only values returned by
/// `FungibleLedger::mint` or `FungibleLedger::withdraw` are backed.
#[must_use = "a fungible asset must be deposited or burned"]
#[derive(Eq, PartialEq, RuntimeDebug)]
pub struct FungibleAsset<AssetId> {
    asset: AssetId,
    amount: u64,
}

impl<AssetId> FungibleAsset<AssetId> {
    pub fn new(asset: AssetId, amount: u64) -> Self {
        Self { asset, amount }
    }

    pub fn asset(&self) -> &AssetId {
        &self.asset
    }

    pub fn amount(&self) -> u64 {
        self.amount
    }

    /// Consumes the value, returning its asset and amount.
    pub fn into_parts(self) -> (AssetId, u64) {
        (self.asset, self.amount)
    }
}
