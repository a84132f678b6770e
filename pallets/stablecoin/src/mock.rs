use crate as pallet_stablecoin;
use crate::{BurnRef, FungibleAsset, FungibleLedger, MintRef, TransferHook, TransferRef};
use codec::Encode;
use frame_support::{
    derive_impl,
    dispatch::DispatchResult,
    parameter_types,
    storage::{unhashed, with_storage_layer},
    traits::{ConstU32, ConstU64},
};
use sp_core::{hashing::blake2_64, H256};
use sp_runtime::{
    traits::{BlakeTwo256, IdentityLookup},
    BuildStorage, DispatchError,
};

type Block = frame_system::mocking::MockBlock<Test>;

// Configure a mock runtime to test the pallet.
frame_support::construct_runtime!(
    pub enum Test {
        System: frame_system,
        Stablecoin: pallet_stablecoin,
    }
);

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
    type BaseCallFilter = frame_support::traits::Everything;
    type BlockWeights = ();
    type BlockLength = ();
    type DbWeight = ();
    type RuntimeOrigin = RuntimeOrigin;
    type RuntimeCall = RuntimeCall;
    type Nonce = u64;
    type Hash = H256;
    type Hashing = BlakeTwo256;
    type AccountId = u64;
    type Lookup = IdentityLookup<Self::AccountId>;
    type Block = Block;
    type RuntimeEvent = RuntimeEvent;
    type BlockHashCount = ConstU64<250>;
    type Version = ();
    type PalletInfo = PalletInfo;
    type AccountData = ();
    type OnNewAccount = ();
    type OnKilledAccount = ();
    type SystemWeightInfo = ();
    type SS58Prefix = ();
    type OnSetCode = ();
    type MaxConsumers = ConstU32<16>;
}

/// Asset managed by the pallet from genesis.
pub const USDC: u32 = 1;
/// Asset known to the ledger but not managed at genesis.
pub const EURC: u32 = 2;
/// Asset the ledger has never heard of.
pub const UNKNOWN_ASSET: u32 = 99;

pub const OWNER: u64 = 1;
pub const ADMIN: u64 = 2;
pub const PAUSER: u64 = 3;
pub const BLOCKLISTER: u64 = 4;
pub const MASTER_MINTER: u64 = 5;
pub const CONTROLLER: u64 = 6;
pub const MINTER: u64 = 7;
pub const ALICE: u64 = 8;
pub const BOB: u64 = 9;

parameter_types! {
    pub const CreatorAccount: u64 = 100;
}

pub struct EnsureCreator;
impl frame_support::traits::EnsureOrigin<RuntimeOrigin> for EnsureCreator {
    type Success = u64;

    fn try_origin(o: RuntimeOrigin) -> Result<Self::Success, RuntimeOrigin> {
        match o.clone().into() {
            Ok(frame_system::RawOrigin::Signed(account)) if account == CreatorAccount::get() => {
                Ok(account)
            }
            _ => Err(o),
        }
    }

    #[cfg(feature = "runtime-benchmarks")]
    fn try_successful_origin() -> Result<RuntimeOrigin, ()> {
        Ok(RuntimeOrigin::signed(CreatorAccount::get()))
    }
}

/// In-memory fungible ledger for tests.
///
/// State lives in the externalities' unhashed storage, so it is rolled back
/// together with pallet storage when a dispatchable fails. Primary store ids are
/// hashed from `(owner, asset)`; secondary stores are registered explicitly.
pub struct MockLedger;

const STORE_KEY: &[u8] = b"mock_ledger/store";
const BALANCE_KEY: &[u8] = b"mock_ledger/balance";
const SUPPLY_KEY: &[u8] = b"mock_ledger/supply";
const PRIMARY_STORE_SEED: &[u8] = b"mock_ledger/primary";

impl MockLedger {
    pub fn balance(store: u64) -> u64 {
        unhashed::get_or_default(&(BALANCE_KEY, store).encode())
    }

    pub fn primary_balance(owner: u64, asset: u32) -> u64 {
        Self::balance(Self::primary_store_id(owner, asset))
    }

    pub fn supply(asset: u32) -> u64 {
        unhashed::get_or_default(&(SUPPLY_KEY, asset).encode())
    }

    pub fn primary_store_id(owner: u64, asset: u32) -> u64 {
        u64::from_le_bytes(blake2_64(&(PRIMARY_STORE_SEED, owner, asset).encode()))
    }

    /// Registers a store owned by `owner`, e.g. one held through an object.
    pub fn register_store(store: u64, owner: u64, asset: u32) {
        unhashed::put(&(STORE_KEY, store).encode(), &(owner, asset));
    }

    /// Moves `amount` between primary stores through both hooks, atomically.
    pub fn transfer(from: u64, to: u64, asset: u32, amount: u64) -> DispatchResult {
        with_storage_layer(|| {
            let source = <Self as FungibleLedger<u64, u32, u64>>::primary_store(&from, &asset);
            let target = <Self as FungibleLedger<u64, u32, u64>>::primary_store(&to, &asset);
            let value = <Self as FungibleLedger<u64, u32, u64>>::withdraw(&source, amount)?;
            <Self as FungibleLedger<u64, u32, u64>>::deposit(&target, value)
        })
    }

    fn set_balance(store: u64, balance: u64) {
        unhashed::put(&(BALANCE_KEY, store).encode(), &balance);
    }

    fn set_supply(asset: u32, supply: u64) {
        unhashed::put(&(SUPPLY_KEY, asset).encode(), &supply);
    }

    fn credit(store: &u64, value: FungibleAsset<u32>) -> DispatchResult {
        let asset = Self::store_asset(store).ok_or(DispatchError::Other("unknown store"))?;
        let (value_asset, amount) = value.into_parts();
        frame_support::ensure!(asset == value_asset, DispatchError::Other("store asset mismatch"));
        let balance = Self::balance(*store)
            .checked_add(amount)
            .ok_or(DispatchError::Arithmetic(sp_runtime::ArithmeticError::Overflow))?;
        Self::set_balance(*store, balance);
        Ok(())
    }

    fn debit(store: &u64, amount: u64) -> Result<FungibleAsset<u32>, DispatchError> {
        let asset = Self::store_asset(store).ok_or(DispatchError::Other("unknown store"))?;
        let balance = Self::balance(*store)
            .checked_sub(amount)
            .ok_or(DispatchError::Other("insufficient balance"))?;
        Self::set_balance(*store, balance);
        Ok(FungibleAsset::new(asset, amount))
    }
}

impl FungibleLedger<u64, u32, u64> for MockLedger {
    fn asset_exists(asset: &u32) -> bool {
        matches!(*asset, USDC | EURC)
    }

    fn mint(mint_ref: &MintRef<u32>, amount: u64) -> Result<FungibleAsset<u32>, DispatchError> {
        let asset = *mint_ref.asset();
        let supply = Self::supply(asset)
            .checked_add(amount)
            .ok_or(DispatchError::Arithmetic(sp_runtime::ArithmeticError::Overflow))?;
        Self::set_supply(asset, supply);
        Ok(FungibleAsset::new(asset, amount))
    }

    fn burn(burn_ref: &BurnRef<u32>, value: FungibleAsset<u32>) -> DispatchResult {
        let (asset, amount) = value.into_parts();
        frame_support::ensure!(
            asset == *burn_ref.asset(),
            DispatchError::Other("burn capability mismatch")
        );
        let supply = Self::supply(asset)
            .checked_sub(amount)
            .ok_or(DispatchError::Arithmetic(sp_runtime::ArithmeticError::Underflow))?;
        Self::set_supply(asset, supply);
        Ok(())
    }

    fn store_asset(store: &u64) -> Option<u32> {
        unhashed::get::<(u64, u32)>(&(STORE_KEY, *store).encode()).map(|(_, asset)| asset)
    }

    fn store_owner(store: &u64) -> Option<u64> {
        unhashed::get::<(u64, u32)>(&(STORE_KEY, *store).encode()).map(|(owner, _)| owner)
    }

    fn primary_store(owner: &u64, asset: &u32) -> u64 {
        let store = Self::primary_store_id(*owner, *asset);
        if Self::store_asset(&store).is_none() {
            Self::register_store(store, *owner, *asset);
        }
        store
    }

    fn deposit(store: &u64, value: FungibleAsset<u32>) -> DispatchResult {
        let asset = Self::store_asset(store).ok_or(DispatchError::Other("unknown store"))?;
        if Stablecoin::is_initialized(asset) {
            <Stablecoin as TransferHook<u32, u64>>::on_deposit(&asset, store, value)
        } else {
            Self::credit(store, value)
        }
    }

    fn withdraw(store: &u64, amount: u64) -> Result<FungibleAsset<u32>, DispatchError> {
        let asset = Self::store_asset(store).ok_or(DispatchError::Other("unknown store"))?;
        if Stablecoin::is_initialized(asset) {
            <Stablecoin as TransferHook<u32, u64>>::on_withdraw(&asset, store, amount)
        } else {
            Self::debit(store, amount)
        }
    }

    fn deposit_with_ref(
        transfer_ref: &TransferRef<u32>,
        store: &u64,
        value: FungibleAsset<u32>,
    ) -> DispatchResult {
        frame_support::ensure!(
            value.asset() == transfer_ref.asset(),
            DispatchError::Other("transfer capability mismatch")
        );
        Self::credit(store, value)
    }

    fn withdraw_with_ref(
        transfer_ref: &TransferRef<u32>,
        store: &u64,
        amount: u64,
    ) -> Result<FungibleAsset<u32>, DispatchError> {
        frame_support::ensure!(
            Self::store_asset(store).as_ref() == Some(transfer_ref.asset()),
            DispatchError::Other("transfer capability mismatch")
        );
        Self::debit(store, amount)
    }
}

#[cfg(feature = "runtime-benchmarks")]
pub struct MockBenchmarkHelper;
#[cfg(feature = "runtime-benchmarks")]
impl crate::BenchmarkHelper<u32> for MockBenchmarkHelper {
    fn asset() -> u32 {
        EURC
    }
}

impl pallet_stablecoin::Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type AssetId = u32;
    type StoreId = u64;
    type Ledger = MockLedger;
    type CreateOrigin = EnsureCreator;
    type WeightInfo = ();
    #[cfg(feature = "runtime-benchmarks")]
    type BenchmarkHelper = MockBenchmarkHelper;
}

// Build genesis storage according to the mock runtime.
pub fn new_test_ext() -> sp_io::TestExternalities {
    let mut t = frame_system::GenesisConfig::<Test>::default().build_storage().unwrap();

    pallet_stablecoin::GenesisConfig::<Test> {
        entities: vec![(USDC, OWNER, ADMIN, PAUSER, BLOCKLISTER, MASTER_MINTER)],
    }
    .assimilate_storage(&mut t)
    .unwrap();

    let mut ext = sp_io::TestExternalities::new(t);
    // Events are only recorded from block 1 onwards.
    ext.execute_with(|| System::set_block_number(1));
    ext
}

/// Genesis state plus `CONTROLLER` managing `MINTER` with `allowance`.
pub fn new_test_ext_with_minter(allowance: u64) -> sp_io::TestExternalities {
    let mut ext = new_test_ext();
    ext.execute_with(|| {
        Stablecoin::configure_controller(
            RuntimeOrigin::signed(MASTER_MINTER),
            USDC,
            CONTROLLER,
            MINTER,
        )
        .unwrap();
        Stablecoin::configure_minter(RuntimeOrigin::signed(CONTROLLER), USDC, allowance).unwrap();
    });
    ext
}
