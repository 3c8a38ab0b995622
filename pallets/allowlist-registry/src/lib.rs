#![cfg_attr(not(feature = "std"), no_std)]
// Allow deprecated getter macros until the storage accessors are migrated
#![allow(deprecated)]
#![allow(clippy::let_unit_value)]

//! Independent allowlists, each edited only by the account that created it.

use codec::{Decode, Encode, MaxEncodedLen};
use frame_support::{dispatch::DispatchResult, ensure, pallet_prelude::*};
use frame_system::{ensure_signed, pallet_prelude::*};
use scale_info::TypeInfo;
use sp_runtime::RuntimeDebug;
use sp_std::prelude::*;

pub use pallet::*;
pub use traits::AllowlistInspect;
pub use weights::WeightInfo;

pub mod traits;
pub mod weights;

#[cfg(test)]
mod mock;


#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

/// The current storage version.
const STORAGE_VERSION: StorageVersion = StorageVersion::new(1);

pub const LOG_TARGET: &str = "runtime::allowlist-registry";

/// Identifier of a registry in the table.
pub type RegistryId = u32;

/// Per-registry metadata.
#[derive(Clone, Encode, Decode, PartialEq, Eq, RuntimeDebug, TypeInfo, MaxEncodedLen)]
pub struct RegistryInfo<AccountId> {
    /// The only account allowed to edit membership.
    pub admin: AccountId,
}

#[frame_support::pallet]
pub mod pallet {
    use super::*;

    #[pallet::config]
    pub trait Config: frame_system::Config {
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;
        type WeightInfo: WeightInfo;
    }

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(_);

    /// Id handed to the next registry created
    #[pallet::storage]
    #[pallet::getter(fn next_registry_id)]
    pub type NextRegistryId<T> = StorageValue<_, RegistryId, ValueQuery>;

    /// Registry metadata by id
    #[pallet::storage]
    #[pallet::getter(fn registry)]
    pub type Registries<T: Config> =
        StorageMap<_, Blake2_128Concat, RegistryId, RegistryInfo<T::AccountId>, OptionQuery>;

    /// Allowlisted accounts per registry
    #[pallet::storage]
    pub type Members<T: Config> = StorageDoubleMap<
        _,
        Blake2_128Concat,
        RegistryId,
        Blake2_128Concat,
        T::AccountId,
        bool,
        ValueQuery,
    >;

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        /// A new registry was created
        RegistryCreated { registry: RegistryId, admin: T::AccountId },
        /// Account added to a registry
        AllowlistAdded { registry: RegistryId, account: T::AccountId },
        /// Account removed from a registry
        AllowlistRemoved { registry: RegistryId, account: T::AccountId },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// Caller is not the registry admin
        AccessDenied,
        /// No registry with this id
        UnknownRegistry,
        /// Registry ids are exhausted
        RegistryIdOverflow,
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
        /// Create an empty registry administered by the caller.
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::create_registry())]
        pub fn create_registry(origin: OriginFor<T>) -> DispatchResult {
            let admin = ensure_signed(origin)?;
            Self::do_create_registry(admin)?;
            Ok(())
        }

        /// Add `account` to `registry`. Adding a member again is a no-op.
        #[pallet::call_index(1)]
        #[pallet::weight(T::WeightInfo::add_allowlist())]
        pub fn add_allowlist(
            origin: OriginFor<T>,
            registry: RegistryId,
            account: T::AccountId,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_admin(registry, &who)?;

            Members::<T>::insert(registry, &account, true);
            Self::deposit_event(Event::AllowlistAdded { registry, account });
            Ok(())
        }

        /// Remove `account` from `registry`. Removing a non-member is a no-op.
        #[pallet::call_index(2)]
        #[pallet::weight(T::WeightInfo::remove_allowlist())]
        pub fn remove_allowlist(
            origin: OriginFor<T>,
            registry: RegistryId,
            account: T::AccountId,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_admin(registry, &who)?;

            Members::<T>::remove(registry, &account);
            Self::deposit_event(Event::AllowlistRemoved { registry, account });
            Ok(())
        }
    }

    #[pallet::genesis_config]
    #[derive(frame_support::DefaultNoBound)]
    pub struct GenesisConfig<T: Config> {
        /// Registries to create, as (admin, initial members). Ids are assigned in order from 0.
        pub registries: Vec<(T::AccountId, Vec<T::AccountId>)>,
    }

    #[pallet::genesis_build]
    impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
        fn build(&self) {
            for (admin, members) in &self.registries {
                let registry = Pallet::<T>::do_create_registry(admin.clone())
                    .expect("Registry id space exhausted at genesis");
                for account in members {
                    Members::<T>::insert(registry, account, true);
                }
            }
        }
    }
}

impl<T: Config> Pallet<T> {
    /// Whether `who` is listed in `registry`.
    pub fn is_allowlisted(registry: RegistryId, who: &T::AccountId) -> bool {
        Members::<T>::get(registry, who)
    }

    pub fn registry_exists(registry: RegistryId) -> bool {
        Registries::<T>::contains_key(registry)
    }

    pub fn registry_admin(registry: RegistryId) -> Option<T::AccountId> {
        Registries::<T>::get(registry).map(|info| info.admin)
    }

    /// Allocate the next id and record `admin` as its owner.
    pub fn do_create_registry(admin: T::AccountId) -> Result<RegistryId, DispatchError> {
        let registry = NextRegistryId::<T>::get();
        let next = registry.checked_add(1).ok_or(Error::<T>::RegistryIdOverflow)?;

        Registries::<T>::insert(registry, RegistryInfo { admin: admin.clone() });
        NextRegistryId::<T>::put(next);

        log::debug!(target: LOG_TARGET, "created registry {registry}");
        Self::deposit_event(Event::RegistryCreated { registry, admin });
        Ok(registry)
    }

    fn ensure_admin(registry: RegistryId, who: &T::AccountId) -> DispatchResult {
        let info = Registries::<T>::get(registry).ok_or(Error::<T>::UnknownRegistry)?;
        ensure!(info.admin == *who, Error::<T>::AccessDenied);
        Ok(())
    }

    /// Storage consistency checks: ids are allocated below `NextRegistryId` and
    /// every membership entry belongs to an existing registry.
    #[cfg(any(feature = "try-runtime", test))]
    pub fn do_try_state() -> Result<(), sp_runtime::TryRuntimeError> {
        let next = NextRegistryId::<T>::get();
        for registry in Registries::<T>::iter_keys() {
            ensure!(registry < next, "registry id at or above NextRegistryId");
        }
        for (registry, _account, listed) in Members::<T>::iter() {
            if !Registries::<T>::contains_key(registry) {
                log::error!(target: LOG_TARGET, "members stored for unknown registry {registry}");
                return Err("membership entry for unknown registry".into());
            }
            ensure!(listed, "stored membership entry is false");
        }
        Ok(())
    }
}

impl<T: Config> AllowlistInspect<T::AccountId> for Pallet<T> {
    fn registry_exists(registry: RegistryId) -> bool {
        Self::registry_exists(registry)
    }

    fn is_allowlisted(registry: RegistryId, who: &T::AccountId) -> bool {
        Self::is_allowlisted(registry, who)
    }

    #[cfg(feature = "runtime-benchmarks")]
    fn create_registry(admin: T::AccountId) -> RegistryId {
        Self::do_create_registry(admin).expect("benchmark registry ids available")
    }

    #[cfg(feature = "runtime-benchmarks")]
    fn allowlist(registry: RegistryId, who: T::AccountId) {
        Members::<T>::insert(registry, who, true);
    }
}
