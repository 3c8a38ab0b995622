use crate as pallet_investment_token;
use crate::{Balance, PauseScope};
use frame_support::{
    derive_impl, parameter_types,
    traits::{ConstU32, ConstU64},
};
use sp_core::H256;
use sp_runtime::{
    traits::{BlakeTwo256, IdentityLookup},
    BuildStorage,
};

type Block = frame_system::mocking::MockBlock<Test>;

// Configure a mock runtime with the real registry pallet behind the allowlist gate.
frame_support::construct_runtime!(
    pub enum Test {
        System: frame_system,
        AllowlistRegistry: pallet_allowlist_registry,
        InvestmentToken: pallet_investment_token,
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

impl pallet_allowlist_registry::Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type WeightInfo = ();
}

parameter_types! {
    pub static OwnerBypass: bool = true;
    pub static PausePolicy: PauseScope = PauseScope::PeerTransfers;
}

impl pallet_investment_token::Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type Allowlist = AllowlistRegistry;
    type OwnerBypassesAllowlist = OwnerBypass;
    type PausePolicy = PausePolicy;
    type WeightInfo = ();
}

/// Token owner and admin of both genesis registries.
pub const OWNER: u64 = 1;
pub const ADDR1: u64 = 2;
pub const ADDR2: u64 = 3;
pub const ADDR3: u64 = 4;

/// Registry the token starts on. Empty at genesis.
pub const REGISTRY: u32 = 0;
/// A second registry that already lists ADDR1 and ADDR2.
pub const ALT_REGISTRY: u32 = 1;

/// `n` whole tokens in base units.
pub fn units(n: u64) -> Balance {
    Balance::from(n) * Balance::exp10(crate::DECIMALS as usize)
}

pub fn one_million() -> Balance {
    units(1_000_000)
}

pub fn one_thousand() -> Balance {
    units(1_000)
}

// Build genesis storage according to the mock runtime.
pub fn new_test_ext() -> sp_io::TestExternalities {
    let mut t = frame_system::GenesisConfig::<Test>::default().build_storage().unwrap();

    pallet_allowlist_registry::GenesisConfig::<Test> {
        registries: vec![(OWNER, vec![]), (OWNER, vec![ADDR1, ADDR2])],
    }
    .assimilate_storage(&mut t)
    .unwrap();

    pallet_investment_token::GenesisConfig::<Test> {
        owner: Some(OWNER),
        token_name: b"Investment Token".to_vec(),
        token_symbol: b"IT".to_vec(),
        allowlist_registry: Some(REGISTRY),
    }
    .assimilate_storage(&mut t)
    .unwrap();

    OwnerBypass::set(true);
    PausePolicy::set(PauseScope::PeerTransfers);

    let mut ext = sp_io::TestExternalities::new(t);
    ext.execute_with(|| System::set_block_number(1));
    ext
}
