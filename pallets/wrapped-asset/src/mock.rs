use crate as pallet_wrapped_asset;
use frame_support::{
    assert_ok, derive_impl, parameter_types,
    traits::{ConstU32, ConstU64},
    PalletId,
};
use frame_system::EnsureRoot;
use sp_core::{H256, U256};
use sp_runtime::{
    traits::{BlakeTwo256, IdentityLookup},
    BuildStorage,
};

type Block = frame_system::mocking::MockBlock<Test>;

// Configure a mock runtime to test the pallet.
frame_support::construct_runtime!(
    pub enum Test {
        System: frame_system,
        WrappedAsset: pallet_wrapped_asset,
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

parameter_types! {
    pub const WrappedAssetPalletId: PalletId = PalletId(*b"py/wsfx!");
}

/// Small enough that the member limit is reachable in tests.
pub const MAX_ROLE_MEMBERS: u32 = 8;
pub const MAX_CUSTODY_FIELD_LEN: u32 = 128;

impl pallet_wrapped_asset::Config for Test {
    type AdminOrigin = EnsureRoot<u64>;
    type PalletId = WrappedAssetPalletId;
    type MaxRoleMembers = ConstU32<MAX_ROLE_MEMBERS>;
    type MaxCustodyFieldLen = ConstU32<MAX_CUSTODY_FIELD_LEN>;
    type WeightInfo = ();
}

/// Account that calls `initialize`.
pub const DEPLOYER: u64 = 1;
pub const MINTER: u64 = 2;
pub const BURNER: u64 = 3;
pub const OTHER: u64 = 4;
pub const ZERO_ADDRESS: u64 = 0;

/// `n` whole tokens at 18 decimals.
pub fn tokens(n: u64) -> U256 {
    U256::from(n) * U256::exp10(18)
}

/// Ledger account of the mock runtime.
pub fn ledger_account() -> u64 {
    WrappedAsset::account_id()
}

pub fn custody_values() -> [Vec<u8>; 6] {
    [
        b"deposit-key".to_vec(),
        b"deposit-address".to_vec(),
        b"spend-key".to_vec(),
        b"spend-address".to_vec(),
        b"cold-key".to_vec(),
        b"cold-address".to_vec(),
    ]
}

/// Fresh ledger that has not been initialized. Block number is 1 so events
/// are recorded.
pub fn new_uninitialized_ext() -> sp_io::TestExternalities {
    let t = frame_system::GenesisConfig::<Test>::default().build_storage().unwrap();

    let mut ext = sp_io::TestExternalities::new(t);
    ext.execute_with(|| System::set_block_number(1));
    ext
}

/// Ledger initialized by `DEPLOYER`, mirroring a proxy deployment.
pub fn new_test_ext() -> sp_io::TestExternalities {
    let mut ext = new_uninitialized_ext();
    ext.execute_with(|| {
        let [dvk, da, svk, sa, cvk, ca] = custody_values();
        assert_ok!(WrappedAsset::initialize(RuntimeOrigin::signed(DEPLOYER), dvk, da, svk, sa, cvk, ca));
    });
    ext
}

/// Ledger initialized through genesis config with `MINTER` and `BURNER`
/// already holding their roles.
pub fn new_genesis_ext() -> sp_io::TestExternalities {
    let mut t = frame_system::GenesisConfig::<Test>::default().build_storage().unwrap();

    let [deposit_view_key, deposit_address, spend_view_key, spend_address, cold_view_key, cold_address] =
        custody_values();
    pallet_wrapped_asset::GenesisConfig::<Test> {
        admin: Some(DEPLOYER),
        deposit_view_key,
        deposit_address,
        spend_view_key,
        spend_address,
        cold_view_key,
        cold_address,
        minters: vec![MINTER],
        burners: vec![BURNER],
    }
    .assimilate_storage(&mut t)
    .unwrap();

    let mut ext = sp_io::TestExternalities::new(t);
    ext.execute_with(|| System::set_block_number(1));
    ext
}
