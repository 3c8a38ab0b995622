//! Weights for pallet-allowlist-registry.
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

/// Weight functions needed for pallet-allowlist-registry.
pub trait WeightInfo {
    fn create_registry() -> Weight;
    fn add_allowlist() -> Weight;
    fn remove_allowlist() -> Weight;
}

/// Weights for pallet-allowlist-registry using the runtime's database weights.
pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: frame_system::Config> WeightInfo for SubstrateWeight<T> {
    /// Storage: `AllowlistRegistry::NextRegistryId` (r:1 w:1)
    /// Storage: `AllowlistRegistry::Registries` (r:0 w:1)
    fn create_registry() -> Weight {
        Weight::from_parts(12_000_000, 1_489)
            .saturating_add(T::DbWeight::get().reads(1_u64))
            .saturating_add(T::DbWeight::get().writes(2_u64))
    }
    /// Storage: `AllowlistRegistry::Registries` (r:1 w:0)
    /// Storage: `AllowlistRegistry::Members` (r:0 w:1)
    fn add_allowlist() -> Weight {
        Weight::from_parts(14_000_000, 3_529)
            .saturating_add(T::DbWeight::get().reads(1_u64))
            .saturating_add(T::DbWeight::get().writes(1_u64))
    }
    /// Storage: `AllowlistRegistry::Registries` (r:1 w:0)
    /// Storage: `AllowlistRegistry::Members` (r:0 w:1)
    fn remove_allowlist() -> Weight {
        Weight::from_parts(14_000_000, 3_529)
            .saturating_add(T::DbWeight::get().reads(1_u64))
            .saturating_add(T::DbWeight::get().writes(1_u64))
    }
}

// For backwards compatibility and tests.
impl WeightInfo for () {
    fn create_registry() -> Weight {
        Weight::from_parts(12_000_000, 1_489)
            .saturating_add(RocksDbWeight::get().reads(1_u64))
            .saturating_add(RocksDbWeight::get().writes(2_u64))
    }
    fn add_allowlist() -> Weight {
        Weight::from_parts(14_000_000, 3_529)
            .saturating_add(RocksDbWeight::get().reads(1_u64))
            .saturating_add(RocksDbWeight::get().writes(1_u64))
    }
    fn remove_allowlist() -> Weight {
        Weight::from_parts(14_000_000, 3_529)
            .saturating_add(RocksDbWeight::get().reads(1_u64))
            .saturating_add(RocksDbWeight::get().writes(1_u64))
    }
}
