//! Weights for pallet-investment-token.
//!
//! Placeholder values sized from the storage accesses of each call. Regenerate
//! with `frame-benchmarking-cli` against a production runtime.

#![allow(unused_parens)]
#![allow(unused_imports)]

use frame_support::{
    traits::Get,
    weights::{constants::RocksDbWeight, Weight},
};
use sp_std::marker::PhantomData;

/// Weight functions needed for pallet-investment-token.
pub trait WeightInfo {
    fn transfer() -> Weight;
    fn approve() -> Weight;
    fn increase_allowance() -> Weight;
    fn decrease_allowance() -> Weight;
    fn transfer_from() -> Weight;
    fn burn() -> Weight;
    fn burn_from() -> Weight;
    fn mint() -> Weight;
    fn admin_transfer() -> Weight;
    fn admin_burn() -> Weight;
    fn set_allowlist_registry() -> Weight;
    fn pause() -> Weight;
    fn unpause() -> Weight;
}

/// Weights for pallet-investment-token using the runtime's database weights.
pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: frame_system::Config> WeightInfo for SubstrateWeight<T> {
    /// Storage: `InvestmentToken::Paused` (r:1 w:0)
    /// Storage: `InvestmentToken::Owner` (r:1 w:0)
    /// Storage: `InvestmentToken::ActiveRegistry` (r:1 w:0)
    /// Storage: `AllowlistRegistry::Members` (r:2 w:0)
    /// Storage: `InvestmentToken::Balances` (r:2 w:2)
    fn transfer() -> Weight {
        Weight::from_parts(38_000_000, 6_196)
            .saturating_add(T::DbWeight::get().reads(7_u64))
            .saturating_add(T::DbWeight::get().writes(2_u64))
    }
    /// Storage: `InvestmentToken::Owner` (r:1 w:0)
    /// Storage: `InvestmentToken::ActiveRegistry` (r:1 w:0)
    /// Storage: `AllowlistRegistry::Members` (r:2 w:0)
    /// Storage: `InvestmentToken::Allowances` (r:0 w:1)
    fn approve() -> Weight {
        Weight::from_parts(27_000_000, 6_196)
            .saturating_add(T::DbWeight::get().reads(4_u64))
            .saturating_add(T::DbWeight::get().writes(1_u64))
    }
    /// Storage: `InvestmentToken::Owner` (r:1 w:0)
    /// Storage: `InvestmentToken::ActiveRegistry` (r:1 w:0)
    /// Storage: `AllowlistRegistry::Members` (r:2 w:0)
    /// Storage: `InvestmentToken::Allowances` (r:1 w:1)
    fn increase_allowance() -> Weight {
        Weight::from_parts(29_000_000, 6_196)
            .saturating_add(T::DbWeight::get().reads(5_u64))
            .saturating_add(T::DbWeight::get().writes(1_u64))
    }
    /// Storage: `InvestmentToken::Owner` (r:1 w:0)
    /// Storage: `InvestmentToken::ActiveRegistry` (r:1 w:0)
    /// Storage: `AllowlistRegistry::Members` (r:2 w:0)
    /// Storage: `InvestmentToken::Allowances` (r:1 w:1)
    fn decrease_allowance() -> Weight {
        Weight::from_parts(29_000_000, 6_196)
            .saturating_add(T::DbWeight::get().reads(5_u64))
            .saturating_add(T::DbWeight::get().writes(1_u64))
    }
    /// Storage: `InvestmentToken::Paused` (r:1 w:0)
    /// Storage: `InvestmentToken::Owner` (r:1 w:0)
    /// Storage: `InvestmentToken::ActiveRegistry` (r:1 w:0)
    /// Storage: `AllowlistRegistry::Members` (r:2 w:0)
    /// Storage: `InvestmentToken::Allowances` (r:1 w:1)
    /// Storage: `InvestmentToken::Balances` (r:2 w:2)
    fn transfer_from() -> Weight {
        Weight::from_parts(45_000_000, 6_196)
            .saturating_add(T::DbWeight::get().reads(8_u64))
            .saturating_add(T::DbWeight::get().writes(3_u64))
    }
    /// Storage: `InvestmentToken::Paused` (r:1 w:0)
    /// Storage: `InvestmentToken::Owner` (r:1 w:0)
    /// Storage: `InvestmentToken::ActiveRegistry` (r:1 w:0)
    /// Storage: `AllowlistRegistry::Members` (r:1 w:0)
    /// Storage: `InvestmentToken::Balances` (r:1 w:1)
    /// Storage: `InvestmentToken::TotalSupply` (r:1 w:1)
    fn burn() -> Weight {
        Weight::from_parts(33_000_000, 3_593)
            .saturating_add(T::DbWeight::get().reads(6_u64))
            .saturating_add(T::DbWeight::get().writes(2_u64))
    }
    /// Storage: `InvestmentToken::Paused` (r:1 w:0)
    /// Storage: `InvestmentToken::Owner` (r:1 w:0)
    /// Storage: `InvestmentToken::ActiveRegistry` (r:1 w:0)
    /// Storage: `AllowlistRegistry::Members` (r:1 w:0)
    /// Storage: `InvestmentToken::Allowances` (r:1 w:1)
    /// Storage: `InvestmentToken::Balances` (r:1 w:1)
    /// Storage: `InvestmentToken::TotalSupply` (r:1 w:1)
    fn burn_from() -> Weight {
        Weight::from_parts(41_000_000, 3_593)
            .saturating_add(T::DbWeight::get().reads(7_u64))
            .saturating_add(T::DbWeight::get().writes(3_u64))
    }
    /// Storage: `InvestmentToken::Owner` (r:1 w:0)
    /// Storage: `InvestmentToken::Paused` (r:1 w:0)
    /// Storage: `InvestmentToken::TotalSupply` (r:1 w:1)
    /// Storage: `InvestmentToken::Balances` (r:1 w:1)
    fn mint() -> Weight {
        Weight::from_parts(24_000_000, 3_593)
            .saturating_add(T::DbWeight::get().reads(4_u64))
            .saturating_add(T::DbWeight::get().writes(2_u64))
    }
    /// Storage: `InvestmentToken::Owner` (r:1 w:0)
    /// Storage: `InvestmentToken::Paused` (r:1 w:0)
    /// Storage: `InvestmentToken::Balances` (r:2 w:2)
    fn admin_transfer() -> Weight {
        Weight::from_parts(30_000_000, 6_196)
            .saturating_add(T::DbWeight::get().reads(4_u64))
            .saturating_add(T::DbWeight::get().writes(2_u64))
    }
    /// Storage: `InvestmentToken::Owner` (r:1 w:0)
    /// Storage: `InvestmentToken::Paused` (r:1 w:0)
    /// Storage: `InvestmentToken::Balances` (r:1 w:1)
    /// Storage: `InvestmentToken::TotalSupply` (r:1 w:1)
    fn admin_burn() -> Weight {
        Weight::from_parts(26_000_000, 3_593)
            .saturating_add(T::DbWeight::get().reads(4_u64))
            .saturating_add(T::DbWeight::get().writes(2_u64))
    }
    /// Storage: `InvestmentToken::Owner` (r:1 w:0)
    /// Storage: `AllowlistRegistry::Registries` (r:1 w:0)
    /// Storage: `InvestmentToken::ActiveRegistry` (r:1 w:1)
    fn set_allowlist_registry() -> Weight {
        Weight::from_parts(17_000_000, 3_529)
            .saturating_add(T::DbWeight::get().reads(3_u64))
            .saturating_add(T::DbWeight::get().writes(1_u64))
    }
    /// Storage: `InvestmentToken::Owner` (r:1 w:0)
    /// Storage: `InvestmentToken::Paused` (r:1 w:1)
    fn pause() -> Weight {
        Weight::from_parts(12_000_000, 1_517)
            .saturating_add(T::DbWeight::get().reads(2_u64))
            .saturating_add(T::DbWeight::get().writes(1_u64))
    }
    /// Storage: `InvestmentToken::Owner` (r:1 w:0)
    /// Storage: `InvestmentToken::Paused` (r:1 w:1)
    fn unpause() -> Weight {
        Weight::from_parts(12_000_000, 1_517)
            .saturating_add(T::DbWeight::get().reads(2_u64))
            .saturating_add(T::DbWeight::get().writes(1_u64))
    }
}

// For backwards compatibility and tests.
impl WeightInfo for () {
    fn transfer() -> Weight {
        Weight::from_parts(38_000_000, 6_196)
            .saturating_add(RocksDbWeight::get().reads(7_u64))
            .saturating_add(RocksDbWeight::get().writes(2_u64))
    }
    fn approve() -> Weight {
        Weight::from_parts(27_000_000, 6_196)
            .saturating_add(RocksDbWeight::get().reads(4_u64))
            .saturating_add(RocksDbWeight::get().writes(1_u64))
    }
    fn increase_allowance() -> Weight {
        Weight::from_parts(29_000_000, 6_196)
            .saturating_add(RocksDbWeight::get().reads(5_u64))
            .saturating_add(RocksDbWeight::get().writes(1_u64))
    }
    fn decrease_allowance() -> Weight {
        Weight::from_parts(29_000_000, 6_196)
            .saturating_add(RocksDbWeight::get().reads(5_u64))
            .saturating_add(RocksDbWeight::get().writes(1_u64))
    }
    fn transfer_from() -> Weight {
        Weight::from_parts(45_000_000, 6_196)
            .saturating_add(RocksDbWeight::get().reads(8_u64))
            .saturating_add(RocksDbWeight::get().writes(3_u64))
    }
    fn burn() -> Weight {
        Weight::from_parts(33_000_000, 3_593)
            .saturating_add(RocksDbWeight::get().reads(6_u64))
            .saturating_add(RocksDbWeight::get().writes(2_u64))
    }
    fn burn_from() -> Weight {
        Weight::from_parts(41_000_000, 3_593)
            .saturating_add(RocksDbWeight::get().reads(7_u64))
            .saturating_add(RocksDbWeight::get().writes(3_u64))
    }
    fn mint() -> Weight {
        Weight::from_parts(24_000_000, 3_593)
            .saturating_add(RocksDbWeight::get().reads(4_u64))
            .saturating_add(RocksDbWeight::get().writes(2_u64))
    }
    fn admin_transfer() -> Weight {
        Weight::from_parts(30_000_000, 6_196)
            .saturating_add(RocksDbWeight::get().reads(4_u64))
            .saturating_add(RocksDbWeight::get().writes(2_u64))
    }
    fn admin_burn() -> Weight {
        Weight::from_parts(26_000_000, 3_593)
            .saturating_add(RocksDbWeight::get().reads(4_u64))
            .saturating_add(RocksDbWeight::get().writes(2_u64))
    }
    fn set_allowlist_registry() -> Weight {
        Weight::from_parts(17_000_000, 3_529)
            .saturating_add(RocksDbWeight::get().reads(3_u64))
            .saturating_add(RocksDbWeight::get().writes(1_u64))
    }
    fn pause() -> Weight {
        Weight::from_parts(12_000_000, 1_517)
            .saturating_add(RocksDbWeight::get().reads(2_u64))
            .saturating_add(RocksDbWeight::get().writes(1_u64))
    }
    fn unpause() -> Weight {
        Weight::from_parts(12_000_000, 1_517)
            .saturating_add(RocksDbWeight::get().reads(2_u64))
            .saturating_add(RocksDbWeight::get().writes(1_u64))
    }
}
