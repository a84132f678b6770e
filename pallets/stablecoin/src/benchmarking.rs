//! Benchmarking setup for pallet-stablecoin

use super::*;

#[allow(unused)]
use crate::Pallet as Stablecoin;
use frame_benchmarking::v2::*;
use frame_system::RawOrigin;

const ALLOWANCE: u64 = 1_000_000;

struct Roles<T: Config> {
    owner: T::AccountId,
    admin: T::AccountId,
    pauser: T::AccountId,
    blocklister: T::AccountId,
    master_minter: T::AccountId,
}

/// Brings the helper's asset under management with distinct role holders.
fn managed_asset<T: Config>() -> (T::AssetId, Roles<T>) {
    let asset = T::BenchmarkHelper::asset();
    let roles = Roles::<T> {
        owner: account("owner", 0, 0),
        admin: account("admin", 0, 0),
        pauser: account("pauser", 0, 0),
        blocklister: account("blocklister", 0, 0),
        master_minter: account("master_minter", 0, 0),
    };
    Pallet::<T>::do_initialize(
        asset,
        InitialRoles {
            owner: roles.owner.clone(),
            admin: roles.admin.clone(),
            pauser: roles.pauser.clone(),
            blocklister: roles.blocklister.clone(),
            master_minter: roles.master_minter.clone(),
        },
    )
    .expect("benchmark asset must be known to the ledger");
    (asset, roles)
}

/// Adds a controller managing a minter with `ALLOWANCE`.
fn with_minter<T: Config>(asset: T::AssetId, roles: &Roles<T>) -> (T::AccountId, T::AccountId) {
    let controller: T::AccountId = account("controller", 0, 0);
    let minter: T::AccountId = whitelisted_caller();
    Pallet::<T>::do_configure_controller(
        asset,
        &roles.master_minter,
        controller.clone(),
        minter.clone(),
    )
    .expect("master minter configures controller");
    Pallet::<T>::do_configure_minter(asset, &controller, ALLOWANCE)
        .expect("controller configures minter");
    (controller, minter)
}

#[benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn initialize() {
        let asset = T::BenchmarkHelper::asset();
        let owner: T::AccountId = account("owner", 0, 0);
        let origin = T::CreateOrigin::try_successful_origin().expect("create origin");

        #[extrinsic_call]
        _(
            origin as T::RuntimeOrigin,
            asset,
            owner.clone(),
            account("admin", 0, 0),
            account("pauser", 0, 0),
            account("blocklister", 0, 0),
            account("master_minter", 0, 0),
        );

        assert_eq!(Pallet::<T>::owner(asset), Some(owner));
    }

    #[benchmark]
    fn transfer_ownership() {
        let (asset, roles) = managed_asset::<T>();
        let nominee: T::AccountId = account("nominee", 0, 0);

        #[extrinsic_call]
        _(RawOrigin::Signed(roles.owner), asset, nominee.clone());

        assert_eq!(Pallet::<T>::pending_owner(asset), Some(nominee));
    }

    #[benchmark]
    fn accept_ownership() {
        let (asset, roles) = managed_asset::<T>();
        let nominee: T::AccountId = account("nominee", 0, 0);
        Pallet::<T>::do_transfer_ownership(asset, &roles.owner, nominee.clone())
            .expect("owner nominates");

        #[extrinsic_call]
        _(RawOrigin::Signed(nominee.clone()), asset);

        assert_eq!(Pallet::<T>::owner(asset), Some(nominee));
    }

    #[benchmark]
    fn change_admin() {
        let (asset, roles) = managed_asset::<T>();
        let nominee: T::AccountId = account("nominee", 0, 0);

        #[extrinsic_call]
        _(RawOrigin::Signed(roles.admin), asset, nominee.clone());

        assert_eq!(Pallet::<T>::pending_admin(asset), Some(nominee));
    }

    #[benchmark]
    fn accept_admin() {
        let (asset, roles) = managed_asset::<T>();
        let nominee: T::AccountId = account("nominee", 0, 0);
        Pallet::<T>::do_change_admin(asset, &roles.admin, nominee.clone())
            .expect("admin nominates");

        #[extrinsic_call]
        _(RawOrigin::Signed(nominee.clone()), asset);

        assert_eq!(Pallet::<T>::admin(asset), Some(nominee));
    }

    #[benchmark]
    fn pause() {
        let (asset, roles) = managed_asset::<T>();

        #[extrinsic_call]
        _(RawOrigin::Signed(roles.pauser), asset);

        assert!(Pallet::<T>::is_paused(asset));
    }

    #[benchmark]
    fn unpause() {
        let (asset, roles) = managed_asset::<T>();
        Pallet::<T>::do_set_paused(asset, &roles.pauser, true).expect("pauser pauses");

        #[extrinsic_call]
        _(RawOrigin::Signed(roles.pauser), asset);

        assert!(!Pallet::<T>::is_paused(asset));
    }

    #[benchmark]
    fn update_pauser() {
        let (asset, roles) = managed_asset::<T>();
        let new_pauser: T::AccountId = account("new_pauser", 0, 0);

        #[extrinsic_call]
        _(RawOrigin::Signed(roles.owner), asset, new_pauser.clone());

        assert_eq!(Pallet::<T>::pauser(asset), Some(new_pauser));
    }

    #[benchmark]
    fn blocklist() {
        let (asset, roles) = managed_asset::<T>();
        let target: T::AccountId = account("target", 0, 0);

        #[extrinsic_call]
        _(RawOrigin::Signed(roles.blocklister), asset, target.clone());

        assert!(Pallet::<T>::is_blocklisted(asset, &target));
    }

    #[benchmark]
    fn unblocklist() {
        let (asset, roles) = managed_asset::<T>();
        let target: T::AccountId = account("target", 0, 0);
        Pallet::<T>::do_blocklist(asset, &roles.blocklister, target.clone())
            .expect("blocklister blocklists");

        #[extrinsic_call]
        _(RawOrigin::Signed(roles.blocklister), asset, target.clone());

        assert!(!Pallet::<T>::is_blocklisted(asset, &target));
    }

    #[benchmark]
    fn update_blocklister() {
        let (asset, roles) = managed_asset::<T>();
        let new_blocklister: T::AccountId = account("new_blocklister", 0, 0);

        #[extrinsic_call]
        _(RawOrigin::Signed(roles.owner), asset, new_blocklister.clone());

        assert_eq!(Pallet::<T>::blocklister(asset), Some(new_blocklister));
    }

    #[benchmark]
    fn configure_controller() {
        let (asset, roles) = managed_asset::<T>();
        let controller: T::AccountId = account("controller", 0, 0);
        let minter: T::AccountId = account("minter", 0, 0);

        #[extrinsic_call]
        _(RawOrigin::Signed(roles.master_minter), asset, controller.clone(), minter.clone());

        assert_eq!(Pallet::<T>::get_minter(asset, &controller), Some(minter));
    }

    #[benchmark]
    fn remove_controller() {
        let (asset, roles) = managed_asset::<T>();
        let (controller, _) = with_minter::<T>(asset, &roles);

        #[extrinsic_call]
        _(RawOrigin::Signed(roles.master_minter), asset, controller.clone());

        assert_eq!(Pallet::<T>::get_minter(asset, &controller), None);
    }

    #[benchmark]
    fn configure_minter() {
        let (asset, roles) = managed_asset::<T>();
        let controller: T::AccountId = account("controller", 0, 0);
        let minter: T::AccountId = account("minter", 0, 0);
        Pallet::<T>::do_configure_controller(
            asset,
            &roles.master_minter,
            controller.clone(),
            minter.clone(),
        )
        .expect("master minter configures controller");

        #[extrinsic_call]
        _(RawOrigin::Signed(controller), asset, ALLOWANCE);

        assert_eq!(Pallet::<T>::mint_allowance(asset, &minter), ALLOWANCE);
    }

    #[benchmark]
    fn increment_minter_allowance() {
        let (asset, roles) = managed_asset::<T>();
        let (controller, minter) = with_minter::<T>(asset, &roles);

        #[extrinsic_call]
        _(RawOrigin::Signed(controller), asset, ALLOWANCE);

        assert_eq!(Pallet::<T>::mint_allowance(asset, &minter), 2 * ALLOWANCE);
    }

    #[benchmark]
    fn remove_minter() {
        let (asset, roles) = managed_asset::<T>();
        let (controller, minter) = with_minter::<T>(asset, &roles);

        #[extrinsic_call]
        _(RawOrigin::Signed(controller), asset);

        assert!(!Pallet::<T>::is_minter(asset, &minter));
    }

    #[benchmark]
    fn mint() {
        let (asset, roles) = managed_asset::<T>();
        let (_, minter) = with_minter::<T>(asset, &roles);

        #[extrinsic_call]
        _(RawOrigin::Signed(minter.clone()), asset, ALLOWANCE);

        assert_eq!(Pallet::<T>::mint_allowance(asset, &minter), 0);
    }

    #[benchmark]
    fn burn() {
        let (asset, roles) = managed_asset::<T>();
        let (_, minter) = with_minter::<T>(asset, &roles);
        Pallet::<T>::mint(RawOrigin::Signed(minter.clone()).into(), asset, ALLOWANCE)
            .expect("minter mints");

        #[extrinsic_call]
        _(RawOrigin::Signed(minter.clone()), asset, ALLOWANCE);

        // Burning never restores allowance.
        assert_eq!(Pallet::<T>::mint_allowance(asset, &minter), 0);
    }

    #[benchmark]
    fn update_master_minter() {
        let (asset, roles) = managed_asset::<T>();
        let new_master_minter: T::AccountId = account("new_master_minter", 0, 0);

        #[extrinsic_call]
        _(RawOrigin::Signed(roles.owner), asset, new_master_minter.clone());

        assert_eq!(Pallet::<T>::master_minter(asset), Some(new_master_minter));
    }

    impl_benchmark_test_suite!(Stablecoin, crate::mock::new_test_ext(), crate::mock::Test);
}
