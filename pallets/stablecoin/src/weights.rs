//! Weights for pallet-stablecoin.
//!
//! Hand-estimated from the storage accesses of each dispatchable until the
//! benchmarks in `benchmarking.rs` are run against reference hardware.

#![allow(unused_parens)]
#![allow(unused_imports)]

use core::marker::PhantomData;
use frame_support::{
    traits::Get,
    weights::{constants::RocksDbWeight, Weight},
};

/// Weight functions needed for pallet-stablecoin.
pub trait WeightInfo {
    fn initialize() -> Weight;
    fn transfer_ownership() -> Weight;
    fn accept_ownership() -> Weight;
    fn change_admin() -> Weight;
    fn accept_admin() -> Weight;
    fn pause() -> Weight;
    fn unpause() -> Weight;
    fn update_pauser() -> Weight;
    fn blocklist() -> Weight;
    fn unblocklist() -> Weight;
    fn update_blocklister() -> Weight;
    fn configure_controller() -> Weight;
    fn remove_controller() -> Weight;
    fn configure_minter() -> Weight;
    fn increment_minter_allowance() -> Weight;
    fn remove_minter() -> Weight;
    fn mint() -> Weight;
    fn burn() -> Weight;
    fn update_master_minter() -> Weight;
}

/// Weights for pallet-stablecoin using the runtime's database weights.
pub struct SubstrateWeight<T>(PhantomData<T>);

impl<T: frame_system::Config> WeightInfo for SubstrateWeight<T> {
    /// Storage: `Stablecoin::Owners` (r:1 w:1), `Admins`, `PauseStates`,
    /// `Blocklists`, `Treasuries` (w:1 each)
    fn initialize() -> Weight {
        Weight::from_parts(25_000_000, 1_600)
            .saturating_add(T::DbWeight::get().reads(1))
            .saturating_add(T::DbWeight::get().writes(5))
    }
    fn transfer_ownership() -> Weight {
        Weight::from_parts(12_000_000, 1_500).saturating_add(T::DbWeight::get().reads_writes(1, 1))
    }
    fn accept_ownership() -> Weight {
        Weight::from_parts(12_000_000, 1_500).saturating_add(T::DbWeight::get().reads_writes(1, 1))
    }
    fn change_admin() -> Weight {
        Weight::from_parts(12_000_000, 1_500).saturating_add(T::DbWeight::get().reads_writes(1, 1))
    }
    fn accept_admin() -> Weight {
        Weight::from_parts(12_000_000, 1_500).saturating_add(T::DbWeight::get().reads_writes(1, 1))
    }
    fn pause() -> Weight {
        Weight::from_parts(11_000_000, 1_500).saturating_add(T::DbWeight::get().reads_writes(1, 1))
    }
    fn unpause() -> Weight {
        Weight::from_parts(11_000_000, 1_500).saturating_add(T::DbWeight::get().reads_writes(1, 1))
    }
    /// Storage: `Owners` (r:1), `PauseStates` (r:1 w:1)
    fn update_pauser() -> Weight {
        Weight::from_parts(14_000_000, 3_000).saturating_add(T::DbWeight::get().reads_writes(2, 1))
    }
    fn blocklist() -> Weight {
        Weight::from_parts(13_000_000, 3_000).saturating_add(T::DbWeight::get().reads_writes(1, 1))
    }
    fn unblocklist() -> Weight {
        Weight::from_parts(13_000_000, 3_000).saturating_add(T::DbWeight::get().reads_writes(1, 1))
    }
    fn update_blocklister() -> Weight {
        Weight::from_parts(14_000_000, 3_000).saturating_add(T::DbWeight::get().reads_writes(2, 1))
    }
    fn configure_controller() -> Weight {
        Weight::from_parts(14_000_000, 3_000).saturating_add(T::DbWeight::get().reads_writes(1, 1))
    }
    fn remove_controller() -> Weight {
        Weight::from_parts(15_000_000, 3_000).saturating_add(T::DbWeight::get().reads_writes(2, 1))
    }
    /// Storage: `PauseStates` (r:1), `Controllers` (r:1), `MintAllowances` (w:1)
    fn configure_minter() -> Weight {
        Weight::from_parts(16_000_000, 4_500).saturating_add(T::DbWeight::get().reads_writes(2, 1))
    }
    fn increment_minter_allowance() -> Weight {
        Weight::from_parts(17_000_000, 4_500).saturating_add(T::DbWeight::get().reads_writes(3, 1))
    }
    fn remove_minter() -> Weight {
        Weight::from_parts(16_000_000, 4_500).saturating_add(T::DbWeight::get().reads_writes(2, 1))
    }
    /// Storage: `PauseStates` (r:2), `MintAllowances` (r:1 w:1),
    /// `BlocklistedAccounts` (r:2), `Treasuries` (r:1), `Blocklists` (r:1),
    /// plus the ledger's mint and deposit.
    fn mint() -> Weight {
        Weight::from_parts(40_000_000, 6_000).saturating_add(T::DbWeight::get().reads_writes(7, 1))
    }
    fn burn() -> Weight {
        Weight::from_parts(40_000_000, 6_000).saturating_add(T::DbWeight::get().reads_writes(8, 0))
    }
    fn update_master_minter() -> Weight {
        Weight::from_parts(14_000_000, 3_000).saturating_add(T::DbWeight::get().reads_writes(2, 1))
    }
}

// For backwards compatibility and tests.
impl WeightInfo for () {
    fn initialize() -> Weight {
        Weight::from_parts(25_000_000, 1_600)
            .saturating_add(RocksDbWeight::get().reads(1))
            .saturating_add(RocksDbWeight::get().writes(5))
    }
    fn transfer_ownership() -> Weight {
        Weight::from_parts(12_000_000, 1_500)
            .saturating_add(RocksDbWeight::get().reads_writes(1, 1))
    }
    fn accept_ownership() -> Weight {
        Weight::from_parts(12_000_000, 1_500)
            .saturating_add(RocksDbWeight::get().reads_writes(1, 1))
    }
    fn change_admin() -> Weight {
        Weight::from_parts(12_000_000, 1_500)
            .saturating_add(RocksDbWeight::get().reads_writes(1, 1))
    }
    fn accept_admin() -> Weight {
        Weight::from_parts(12_000_000, 1_500)
            .saturating_add(RocksDbWeight::get().reads_writes(1, 1))
    }
    fn pause() -> Weight {
        Weight::from_parts(11_000_000, 1_500)
            .saturating_add(RocksDbWeight::get().reads_writes(1, 1))
    }
    fn unpause() -> Weight {
        Weight::from_parts(11_000_000, 1_500)
            .saturating_add(RocksDbWeight::get().reads_writes(1, 1))
    }
    fn update_pauser() -> Weight {
        Weight::from_parts(14_000_000, 3_000)
            .saturating_add(RocksDbWeight::get().reads_writes(2, 1))
    }
    fn blocklist() -> Weight {
        Weight::from_parts(13_000_000, 3_000)
            .saturating_add(RocksDbWeight::get().reads_writes(1, 1))
    }
    fn unblocklist() -> Weight {
        Weight::from_parts(13_000_000, 3_000)
            .saturating_add(RocksDbWeight::get().reads_writes(1, 1))
    }
    fn update_blocklister() -> Weight {
        Weight::from_parts(14_000_000, 3_000)
            .saturating_add(RocksDbWeight::get().reads_writes(2, 1))
    }
    fn configure_controller() -> Weight {
        Weight::from_parts(14_000_000, 3_000)
            .saturating_add(RocksDbWeight::get().reads_writes(1, 1))
    }
    fn remove_controller() -> Weight {
        Weight::from_parts(15_000_000, 3_000)
            .saturating_add(RocksDbWeight::get().reads_writes(2, 1))
    }
    fn configure_minter() -> Weight {
        Weight::from_parts(16_000_000, 4_500)
            .saturating_add(RocksDbWeight::get().reads_writes(2, 1))
    }
    fn increment_minter_allowance() -> Weight {
        Weight::from_parts(17_000_000, 4_500)
            .saturating_add(RocksDbWeight::get().reads_writes(3, 1))
    }
    fn remove_minter() -> Weight {
        Weight::from_parts(16_000_000, 4_500)
            .saturating_add(RocksDbWeight::get().reads_writes(2, 1))
    }
    fn mint() -> Weight {
        Weight::from_parts(40_000_000, 6_000)
            .saturating_add(RocksDbWeight::get().reads_writes(7, 1))
    }
    fn burn() -> Weight {
        Weight::from_parts(40_000_000, 6_000)
            .saturating_add(RocksDbWeight::get().reads_writes(8, 0))
    }
    fn update_master_minter() -> Weight {
        Weight::from_parts(14_000_000, 3_000)
            .saturating_add(RocksDbWeight::get().reads_writes(2, 1))
    }
}
