//! Storage migrations for pallet-stablecoin.
//!
//! Each migration checks the on-chain storage version first, so it is safe to
//! leave wired into `Executive` after it has run.
//!
//! ```ignore
//! pub type Executive = frame_executive::Executive<
//!     Runtime,
//!     Block,
//!     frame_system::ChainContext<Runtime>,
//!     Runtime,
//!     AllPalletsWithSystem,
//!     pallet_stablecoin::migrations::v1::MigrateToV1<Runtime>,
//! >;
//! ```

use frame_support::{pallet_prelude::*, traits::OnRuntimeUpgrade};
use sp_std::marker::PhantomData;

use crate::{BlocklistedAccounts, Config, Pallet, LOG_TARGET};

/// Version 0 stored blocklist membership as a `bool` flag, so an unlisted
/// account could still occupy a key. Version 1 stores `()` and a key exists
/// only for listed accounts.
pub mod v1 {
    use super::*;

    #[cfg(any(feature = "try-runtime", test))]
    pub(crate) mod v0 {
        use super::*;
        use frame_support::storage_alias;

        #[storage_alias]
        pub type BlocklistedAccounts<T: Config> = StorageDoubleMap<
            Pallet<T>,
            Blake2_128Concat,
            <T as Config>::AssetId,
            Blake2_128Concat,
            <T as frame_system::Config>::AccountId,
            bool,
            OptionQuery,
        >;
    }

    pub struct MigrateToV1<T>(PhantomData<T>);

    impl<T: Config> OnRuntimeUpgrade for MigrateToV1<T> {
        fn on_runtime_upgrade() -> Weight {
            let on_chain_version = Pallet::<T>::on_chain_storage_version();
            if on_chain_version >= 1 {
                log::info!(
                    target: LOG_TARGET,
                    "storage already at {on_chain_version:?}, skipping v1 migration"
                );
                return T::DbWeight::get().reads(1);
            }

            let mut translated: u64 = 0;
            let mut dropped: u64 = 0;
            BlocklistedAccounts::<T>::translate::<bool, _>(|_asset, _account, listed| {
                translated += 1;
                if listed {
                    Some(())
                } else {
                    dropped += 1;
                    None
                }
            });

            StorageVersion::new(1).put::<Pallet<T>>();
            log::info!(
                target: LOG_TARGET,
                "migrated blocklist to v1: {translated} entries read, {dropped} unlisted removed"
            );

            T::DbWeight::get().reads_writes(translated + 1, translated + 1)
        }

        #[cfg(feature = "try-runtime")]
        fn pre_upgrade() -> Result<sp_std::vec::Vec<u8>, sp_runtime::TryRuntimeError> {
            let listed =
                v0::BlocklistedAccounts::<T>::iter_values().filter(|listed| *listed).count() as u32;
            log::info!(target: LOG_TARGET, "pre-upgrade: {listed} blocklisted accounts");
            Ok(listed.encode())
        }

        #[cfg(feature = "try-runtime")]
        fn post_upgrade(state: sp_std::vec::Vec<u8>) -> Result<(), sp_runtime::TryRuntimeError> {
            let listed_before: u32 = Decode::decode(&mut &state[..])
                .map_err(|_| sp_runtime::TryRuntimeError::Other("failed to decode pre-state"))?;
            let listed_after = BlocklistedAccounts::<T>::iter_keys().count() as u32;

            ensure!(
                Pallet::<T>::on_chain_storage_version() >= 1,
                sp_runtime::TryRuntimeError::Other("migration to v1 did not complete")
            );
            ensure!(
                listed_before == listed_after,
                sp_runtime::TryRuntimeError::Other("blocklist size changed during migration")
            );
            Pallet::<T>::do_try_state()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{new_test_ext, Stablecoin, Test, ALICE, BOB, USDC};
    use frame_support::{assert_ok, traits::StorageVersion};

    fn put_v0_entry(account: u64, listed: bool) {
        v1::v0::BlocklistedAccounts::<Test>::insert(USDC, account, listed);
    }

    #[test]
    fn migration_v1_keeps_listed_and_drops_unlisted() {
        new_test_ext().execute_with(|| {
            StorageVersion::new(0).put::<Pallet<Test>>();
            put_v0_entry(ALICE, true);
            put_v0_entry(BOB, false);

            v1::MigrateToV1::<Test>::on_runtime_upgrade();

            assert_eq!(Pallet::<Test>::on_chain_storage_version(), 1);
            assert!(Stablecoin::is_blocklisted(USDC, &ALICE));
            assert!(!Stablecoin::is_blocklisted(USDC, &BOB));
            assert_eq!(BlocklistedAccounts::<Test>::iter_prefix(USDC).count(), 1);
            assert_eq!(BlocklistedAccounts::<Test>::get(USDC, ALICE), Some(()));
        });
    }

    #[test]
    fn migration_v1_is_skipped_once_applied() {
        new_test_ext().execute_with(|| {
            // Genesis already writes the current version.
            assert_eq!(Pallet::<Test>::on_chain_storage_version(), 1);
            BlocklistedAccounts::<Test>::insert(USDC, ALICE, ());

            v1::MigrateToV1::<Test>::on_runtime_upgrade();

            // A v1 entry would not decode as `bool`; it must be left alone.
            assert!(Stablecoin::is_blocklisted(USDC, &ALICE));
            assert_eq!(Pallet::<Test>::on_chain_storage_version(), 1);
        });
    }

    #[test]
    fn migration_v1_skipped_on_higher_version() {
        new_test_ext().execute_with(|| {
            StorageVersion::new(5).put::<Pallet<Test>>();

            v1::MigrateToV1::<Test>::on_runtime_upgrade();

            assert_eq!(Pallet::<Test>::on_chain_storage_version(), 5);
        });
    }

    #[test]
    fn migration_v1_runs_once() {
        new_test_ext().execute_with(|| {
            StorageVersion::new(0).put::<Pallet<Test>>();
            put_v0_entry(ALICE, true);

            v1::MigrateToV1::<Test>::on_runtime_upgrade();
            v1::MigrateToV1::<Test>::on_runtime_upgrade();

            assert_eq!(Pallet::<Test>::on_chain_storage_version(), 1);
            assert!(Stablecoin::is_blocklisted(USDC, &ALICE));
            assert_ok!(Pallet::<Test>::do_try_state());
        });
    }
}
