#![cfg_attr(not(feature = "std"), no_std)]
// `RuntimeEvent` on `Config` is deprecated upstream.
#![allow(deprecated)]
#![allow(clippy::let_unit_value)]

//! # Stablecoin Pallet
//!
//! Privileged roles and supply bookkeeping for regulated fungible assets. The
//! balances themselves live in an external ledger ([`FungibleLedger`]); this
//! pallet decides who may mint, burn and move them.
//!
//! Every governed asset carries its own set of records, keyed by asset id:
//!
//! - an **owner** and an **admin**, both transferable in two steps
//!   ([`TwoStepRole`]);
//! - a **pause switch** operated by the pauser;
//! - a **blocklist** operated by the blocklister;
//! - a **treasury**: the master minter assigns controllers, each controller
//!   manages one minter's allowance, minters mint up to their allowance.
//!
//! The owner rotates the pauser, blocklister and master minter but cannot use
//! their powers directly.
//!
//! The ledger must route every dispatched deposit and withdrawal of a governed
//! asset through [`TransferHook`], which the pallet implements. Mint, burn and
//! transfer capabilities are created once in [`Pallet::initialize`] (or at
//! genesis) and never leave the pallet.

use frame_support::{dispatch::DispatchResult, ensure, pallet_prelude::*, traits::EnsureOrigin};
use frame_system::{ensure_signed, pallet_prelude::*};
use sp_std::prelude::*;

pub use ledger::{FungibleLedger, TransferHook};
pub use pallet::*;
pub use roles::{RoleError, TwoStepRole};
pub use types::{
    BlocklistState, BurnRef, FungibleAsset, InitialRoles, MintRef, PauseState, TransferRef,
    TreasuryState,
};
pub use weights::WeightInfo;

mod controls;
mod hook;
pub mod ledger;
pub mod migrations;
mod roles;
mod treasury;
pub mod types;
pub mod weights;

#[cfg(test)]
mod mock;


#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

/// Log target for everything emitted by this pallet.
pub const LOG_TARGET: &str = "runtime::stablecoin";

/// The current storage version.
const STORAGE_VERSION: StorageVersion = StorageVersion::new(1);

/// Supplies a ledger-known asset to the benchmarks.
#[cfg(feature = "runtime-benchmarks")]
pub trait BenchmarkHelper<AssetId> {
    fn asset() -> AssetId;
}

#[frame_support::pallet]
pub mod pallet {
    use super::*;

    #[pallet::config]
    pub trait Config: frame_system::Config {
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

        /// Identifier of a governed asset.
        type AssetId: Member + Parameter + Copy + MaxEncodedLen + MaybeSerializeDeserialize;

        /// Identifier of a balance store in the ledger.
        type StoreId: Member + Parameter + MaxEncodedLen;

        /// The ledger holding balances of governed assets.
        type Ledger: FungibleLedger<Self::AccountId, Self::AssetId, Self::StoreId>;

        /// Origin allowed to bring a new asset under management.
        type CreateOrigin: EnsureOrigin<Self::RuntimeOrigin>;

        type WeightInfo: WeightInfo;

        #[cfg(feature = "runtime-benchmarks")]
        type BenchmarkHelper: BenchmarkHelper<Self::AssetId>;
    }

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(_);

    /// Owner of each governed asset.
    #[pallet::storage]
    pub type Owners<T: Config> =
        StorageMap<_, Blake2_128Concat, T::AssetId, TwoStepRole<T::AccountId>, OptionQuery>;

    /// Upgrade administrator of each governed asset.
    #[pallet::storage]
    pub type Admins<T: Config> =
        StorageMap<_, Blake2_128Concat, T::AssetId, TwoStepRole<T::AccountId>, OptionQuery>;

    #[pallet::storage]
    pub type PauseStates<T: Config> =
        StorageMap<_, Blake2_128Concat, T::AssetId, PauseState<T::AccountId>, OptionQuery>;

    #[pallet::storage]
    pub type Blocklists<T: Config> = StorageMap<
        _,
        Blake2_128Concat,
        T::AssetId,
        BlocklistState<T::AccountId, T::AssetId>,
        OptionQuery,
    >;

    /// Accounts barred from holding or moving an asset.
    #[pallet::storage]
    pub type BlocklistedAccounts<T: Config> = StorageDoubleMap<
        _,
        Blake2_128Concat,
        T::AssetId,
        Blake2_128Concat,
        T::AccountId,
        (),
        OptionQuery,
    >;

    #[pallet::storage]
    pub type Treasuries<T: Config> = StorageMap<
        _,
        Blake2_128Concat,
        T::AssetId,
        TreasuryState<T::AccountId, T::AssetId>,
        OptionQuery,
    >;

    /// Controller -> the minter it manages.
    #[pallet::storage]
    pub type Controllers<T: Config> = StorageDoubleMap<
        _,
        Blake2_128Concat,
        T::AssetId,
        Blake2_128Concat,
        T::AccountId,
        T::AccountId,
        OptionQuery,
    >;

    /// Minter -> remaining allowance. A key is present exactly for minters.
    #[pallet::storage]
    pub type MintAllowances<T: Config> = StorageDoubleMap<
        _,
        Blake2_128Concat,
        T::AssetId,
        Blake2_128Concat,
        T::AccountId,
        u64,
        OptionQuery,
    >;

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        /// An asset was brought under management.
        Initialized { asset: T::AssetId, owner: T::AccountId },
        OwnershipTransferStarted {
            asset: T::AssetId,
            old_owner: T::AccountId,
            new_owner: T::AccountId,
        },
        OwnershipTransferred {
            asset: T::AssetId,
            old_owner: T::AccountId,
            new_owner: T::AccountId,
        },
        AdminChangeStarted { asset: T::AssetId, old_admin: T::AccountId, new_admin: T::AccountId },
        AdminChanged { asset: T::AssetId, old_admin: T::AccountId, new_admin: T::AccountId },
        Pause { asset: T::AssetId },
        Unpause { asset: T::AssetId },
        PauserChanged { asset: T::AssetId, old_pauser: T::AccountId, new_pauser: T::AccountId },
        Blocklisted { asset: T::AssetId, account: T::AccountId },
        Unblocklisted { asset: T::AssetId, account: T::AccountId },
        BlocklisterChanged {
            asset: T::AssetId,
            old_blocklister: T::AccountId,
            new_blocklister: T::AccountId,
        },
        ControllerConfigured { asset: T::AssetId, controller: T::AccountId, minter: T::AccountId },
        ControllerRemoved { asset: T::AssetId, controller: T::AccountId },
        MinterConfigured {
            asset: T::AssetId,
            controller: T::AccountId,
            minter: T::AccountId,
            allowance: u64,
        },
        MinterAllowanceIncremented {
            asset: T::AssetId,
            controller: T::AccountId,
            minter: T::AccountId,
            delta: u64,
            new_allowance: u64,
        },
        MinterRemoved { asset: T::AssetId, controller: T::AccountId, minter: T::AccountId },
        Mint { asset: T::AssetId, minter: T::AccountId, amount: u64 },
        Burn { asset: T::AssetId, burner: T::AccountId, amount: u64 },
        MasterMinterChanged {
            asset: T::AssetId,
            old_master_minter: T::AccountId,
            new_master_minter: T::AccountId,
        },
        /// Units entered a store.
        Deposit { asset: T::AssetId, owner: T::AccountId, store: T::StoreId, amount: u64 },
        /// Units left a store.
        Withdraw { asset: T::AssetId, owner: T::AccountId, store: T::StoreId, amount: u64 },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// Caller is not the owner.
        NotOwner,
        /// Caller is not the admin.
        NotAdmin,
        /// Caller is not the pauser.
        NotPauser,
        /// Caller is not the blocklister.
        NotBlocklister,
        /// Caller is not the master minter.
        NotMasterMinter,
        /// Caller is not a configured controller.
        NotController,
        /// Caller is not a minter.
        NotMinter,
        /// No role transfer is pending.
        PendingNotSet,
        /// Caller is not the pending owner or admin.
        NotPendingParty,
        /// The controller has no assigned minter.
        ControllerNotFound,
        /// The controller's minter is not configured.
        MinterNotFound,
        /// The asset is not under management (or unknown to the ledger).
        UnknownAsset,
        /// The ledger does not know the store.
        StoreNotFound,
        /// The asset is already under management.
        AlreadyInitialized,
        ZeroAmount,
        Overflow,
        Underflow,
        /// Mint amount exceeds the remaining allowance.
        InsufficientAllowance,
        /// The asset is paused.
        Paused,
        /// The account is blocklisted.
        Blocklisted,
        /// A value, store or capability belongs to a different asset.
        MetadataMismatch,
    }

    #[pallet::hooks]
    impl<T: Config> Hooks<BlockNumberFor<T>> for Pallet<T> {
        #[cfg(feature = "try-runtime")]
        fn try_state(_n: BlockNumberFor<T>) -> Result<(), sp_runtime::TryRuntimeError> {
            Self::do_try_state()
        }
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        /// Brings `asset` under management and creates its capabilities.
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::initialize())]
        pub fn initialize(
            origin: OriginFor<T>,
            asset: T::AssetId,
            owner: T::AccountId,
            admin: T::AccountId,
            pauser: T::AccountId,
            blocklister: T::AccountId,
            master_minter: T::AccountId,
        ) -> DispatchResult {
            T::CreateOrigin::ensure_origin(origin)?;
            Self::do_initialize(
                asset,
                InitialRoles { owner, admin, pauser, blocklister, master_minter },
            )
        }

        #[pallet::call_index(1)]
        #[pallet::weight(T::WeightInfo::transfer_ownership())]
        pub fn transfer_ownership(
            origin: OriginFor<T>,
            asset: T::AssetId,
            new_owner: T::AccountId,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::do_transfer_ownership(asset, &who, new_owner)
        }

        #[pallet::call_index(2)]
        #[pallet::weight(T::WeightInfo::accept_ownership())]
        pub fn accept_ownership(origin: OriginFor<T>, asset: T::AssetId) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::do_accept_ownership(asset, &who)
        }

        #[pallet::call_index(3)]
        #[pallet::weight(T::WeightInfo::change_admin())]
        pub fn change_admin(
            origin: OriginFor<T>,
            asset: T::AssetId,
            new_admin: T::AccountId,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::do_change_admin(asset, &who, new_admin)
        }

        #[pallet::call_index(4)]
        #[pallet::weight(T::WeightInfo::accept_admin())]
        pub fn accept_admin(origin: OriginFor<T>, asset: T::AssetId) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::do_accept_admin(asset, &who)
        }

        #[pallet::call_index(5)]
        #[pallet::weight(T::WeightInfo::pause())]
        pub fn pause(origin: OriginFor<T>, asset: T::AssetId) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::do_set_paused(asset, &who, true)
        }

        #[pallet::call_index(6)]
        #[pallet::weight(T::WeightInfo::unpause())]
        pub fn unpause(origin: OriginFor<T>, asset: T::AssetId) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::do_set_paused(asset, &who, false)
        }

        #[pallet::call_index(7)]
        #[pallet::weight(T::WeightInfo::update_pauser())]
        pub fn update_pauser(
            origin: OriginFor<T>,
            asset: T::AssetId,
            new_pauser: T::AccountId,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::do_update_pauser(asset, &who, new_pauser)
        }

        #[pallet::call_index(8)]
        #[pallet::weight(T::WeightInfo::blocklist())]
        pub fn blocklist(
            origin: OriginFor<T>,
            asset: T::AssetId,
            account: T::AccountId,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::do_blocklist(asset, &who, account)
        }

        #[pallet::call_index(9)]
        #[pallet::weight(T::WeightInfo::unblocklist())]
        pub fn unblocklist(
            origin: OriginFor<T>,
            asset: T::AssetId,
            account: T::AccountId,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::do_unblocklist(asset, &who, account)
        }

        #[pallet::call_index(10)]
        #[pallet::weight(T::WeightInfo::update_blocklister())]
        pub fn update_blocklister(
            origin: OriginFor<T>,
            asset: T::AssetId,
            new_blocklister: T::AccountId,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::do_update_blocklister(asset, &who, new_blocklister)
        }

        #[pallet::call_index(11)]
        #[pallet::weight(T::WeightInfo::configure_controller())]
        pub fn configure_controller(
            origin: OriginFor<T>,
            asset: T::AssetId,
            controller: T::AccountId,
            minter: T::AccountId,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::do_configure_controller(asset, &who, controller, minter)
        }

        #[pallet::call_index(12)]
        #[pallet::weight(T::WeightInfo::remove_controller())]
        pub fn remove_controller(
            origin: OriginFor<T>,
            asset: T::AssetId,
            controller: T::AccountId,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::do_remove_controller(asset, &who, controller)
        }

        /// Sets the allowance of the caller's minter, overwriting any previous
        /// value.
        #[pallet::call_index(13)]
        #[pallet::weight(T::WeightInfo::configure_minter())]
        pub fn configure_minter(
            origin: OriginFor<T>,
            asset: T::AssetId,
            allowance: u64,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::do_configure_minter(asset, &who, allowance)
        }

        /// Adds `delta` to the allowance of the caller's minter.
        #[pallet::call_index(14)]
        #[pallet::weight(T::WeightInfo::increment_minter_allowance())]
        pub fn increment_minter_allowance(
            origin: OriginFor<T>,
            asset: T::AssetId,
            delta: u64,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::do_increment_minter_allowance(asset, &who, delta)
        }

        #[pallet::call_index(15)]
        #[pallet::weight(T::WeightInfo::remove_minter())]
        pub fn remove_minter(origin: OriginFor<T>, asset: T::AssetId) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::do_remove_minter(asset, &who)
        }

        /// Mints `amount` into the caller's primary store.
        #[pallet::call_index(16)]
        #[pallet::weight(T::WeightInfo::mint())]
        pub fn mint(origin: OriginFor<T>, asset: T::AssetId, amount: u64) -> DispatchResult {
            let who = ensure_signed(origin)?;
            let minted = Self::do_mint(asset, &who, amount)?;
            let store = T::Ledger::primary_store(&who, &asset);
            T::Ledger::deposit(&store, minted)
        }

        /// Burns `amount` from the caller's primary store.
        #[pallet::call_index(17)]
        #[pallet::weight(T::WeightInfo::burn())]
        pub fn burn(origin: OriginFor<T>, asset: T::AssetId, amount: u64) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_can_burn(asset, &who, amount)?;
            let store = T::Ledger::primary_store(&who, &asset);
            let withdrawn = T::Ledger::withdraw(&store, amount)?;
            Self::do_burn(asset, &who, withdrawn)
        }

        #[pallet::call_index(18)]
        #[pallet::weight(T::WeightInfo::update_master_minter())]
        pub fn update_master_minter(
            origin: OriginFor<T>,
            asset: T::AssetId,
            new_master_minter: T::AccountId,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::do_update_master_minter(asset, &who, new_master_minter)
        }
    }

    /// `(asset, owner, admin, pauser, blocklister, master_minter)`
    pub type GenesisEntity<T> = (
        <T as Config>::AssetId,
        <T as frame_system::Config>::AccountId,
        <T as frame_system::Config>::AccountId,
        <T as frame_system::Config>::AccountId,
        <T as frame_system::Config>::AccountId,
        <T as frame_system::Config>::AccountId,
    );

    #[pallet::genesis_config]
    #[derive(frame_support::DefaultNoBound)]
    pub struct GenesisConfig<T: Config> {
        /// Assets managed from genesis.
        pub entities: Vec<GenesisEntity<T>>,
    }

    #[pallet::genesis_build]
    impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
        fn build(&self) {
            for (asset, owner, admin, pauser, blocklister, master_minter) in &self.entities {
                let roles = InitialRoles {
                    owner: owner.clone(),
                    admin: admin.clone(),
                    pauser: pauser.clone(),
                    blocklister: blocklister.clone(),
                    master_minter: master_minter.clone(),
                };
                Pallet::<T>::do_initialize(*asset, roles)
                    .expect("genesis assets must be unique and known to the ledger");
            }
        }
    }
}

impl<T: Config> Pallet<T> {
    /// Creates every record for `asset` in one go.
    pub(crate) fn do_initialize(
        asset: T::AssetId,
        roles: InitialRoles<T::AccountId>,
    ) -> DispatchResult {
        ensure!(!Owners::<T>::contains_key(asset), Error::<T>::AlreadyInitialized);
        ensure!(T::Ledger::asset_exists(&asset), Error::<T>::UnknownAsset);

        let InitialRoles { owner, admin, pauser, blocklister, master_minter } = roles;
        Owners::<T>::insert(asset, TwoStepRole::new(owner.clone()));
        Admins::<T>::insert(asset, TwoStepRole::new(admin));
        PauseStates::<T>::insert(asset, PauseState { paused: false, pauser });
        Blocklists::<T>::insert(
            asset,
            BlocklistState { blocklister, transfer_ref: TransferRef::new(asset) },
        );
        Treasuries::<T>::insert(
            asset,
            TreasuryState {
                master_minter,
                mint_ref: MintRef::new(asset),
                burn_ref: BurnRef::new(asset),
            },
        );

        log::info!(target: LOG_TARGET, "asset {asset:?} initialized, owner {owner:?}");
        Self::deposit_event(Event::Initialized { asset, owner });
        Ok(())
    }

    pub fn is_initialized(asset: T::AssetId) -> bool {
        Owners::<T>::contains_key(asset)
    }

    pub fn owner(asset: T::AssetId) -> Option<T::AccountId> {
        Owners::<T>::get(asset).map(|role| role.holder().clone())
    }

    pub fn pending_owner(asset: T::AssetId) -> Option<T::AccountId> {
        Owners::<T>::get(asset).and_then(|role| role.pending().cloned())
    }

    pub fn admin(asset: T::AssetId) -> Option<T::AccountId> {
        Admins::<T>::get(asset).map(|role| role.holder().clone())
    }

    pub fn pending_admin(asset: T::AssetId) -> Option<T::AccountId> {
        Admins::<T>::get(asset).and_then(|role| role.pending().cloned())
    }

    pub fn is_paused(asset: T::AssetId) -> bool {
        PauseStates::<T>::get(asset).is_some_and(|state| state.paused)
    }

    pub fn pauser(asset: T::AssetId) -> Option<T::AccountId> {
        PauseStates::<T>::get(asset).map(|state| state.pauser)
    }

    pub fn is_blocklisted(asset: T::AssetId, who: &T::AccountId) -> bool {
        BlocklistedAccounts::<T>::contains_key(asset, who)
    }

    pub fn blocklister(asset: T::AssetId) -> Option<T::AccountId> {
        Blocklists::<T>::get(asset).map(|state| state.blocklister)
    }

    pub fn master_minter(asset: T::AssetId) -> Option<T::AccountId> {
        Treasuries::<T>::get(asset).map(|treasury| treasury.master_minter)
    }

    /// The minter managed by `controller`, if any.
    pub fn get_minter(asset: T::AssetId, controller: &T::AccountId) -> Option<T::AccountId> {
        Controllers::<T>::get(asset, controller)
    }

    pub fn is_minter(asset: T::AssetId, who: &T::AccountId) -> bool {
        MintAllowances::<T>::contains_key(asset, who)
    }

    /// Remaining allowance of `who`; zero for accounts that are not minters.
    pub fn mint_allowance(asset: T::AssetId, who: &T::AccountId) -> u64 {
        MintAllowances::<T>::get(asset, who).unwrap_or_default()
    }

    /// Every managed asset has all of its records, and each capability is
    /// bound to the asset it is stored under.
    #[cfg(any(feature = "try-runtime", test))]
    pub fn do_try_state() -> Result<(), sp_runtime::TryRuntimeError> {
        for asset in Owners::<T>::iter_keys() {
            ensure!(Admins::<T>::contains_key(asset), "managed asset without admin record");
            ensure!(PauseStates::<T>::contains_key(asset), "managed asset without pause state");

            let blocklist = Blocklists::<T>::get(asset).ok_or("managed asset without blocklist")?;
            ensure!(
                *blocklist.transfer_ref.asset() == asset,
                "transfer capability bound elsewhere"
            );

            let treasury = Treasuries::<T>::get(asset).ok_or("managed asset without treasury")?;
            ensure!(*treasury.mint_ref.asset() == asset, "mint capability bound elsewhere");
            ensure!(*treasury.burn_ref.asset() == asset, "burn capability bound elsewhere");
        }
        for (asset, _, _) in Controllers::<T>::iter() {
            ensure!(Owners::<T>::contains_key(asset), "controller for unmanaged asset");
        }
        for (asset, _, _) in MintAllowances::<T>::iter() {
            ensure!(Owners::<T>::contains_key(asset), "allowance for unmanaged asset");
        }
        Ok(())
    }
}
