//! Benchmarking setup for pallet-allowlist-registry

use super::*;

#[allow(unused)]
use crate::Pallet as AllowlistRegistry;
use frame_benchmarking::v2::*;
use frame_system::RawOrigin;

#[benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn create_registry() {
        let caller: T::AccountId = whitelisted_caller();
        let registry = NextRegistryId::<T>::get();

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()));

        assert_eq!(Pallet::<T>::registry_admin(registry), Some(caller));
    }

    #[benchmark]
    fn add_allowlist() {
        let admin: T::AccountId = whitelisted_caller();
        let account: T::AccountId = account("member", 0, 0);
        let registry = Pallet::<T>::do_create_registry(admin.clone()).expect("registry created");

        #[extrinsic_call]
        _(RawOrigin::Signed(admin), registry, account.clone());

        assert!(Pallet::<T>::is_allowlisted(registry, &account));
    }

    #[benchmark]
    fn remove_allowlist() {
        let admin: T::AccountId = whitelisted_caller();
        let account: T::AccountId = account("member", 0, 0);
        let registry = Pallet::<T>::do_create_registry(admin.clone()).expect("registry created");
        Members::<T>::insert(registry, &account, true);

        #[extrinsic_call]
        _(RawOrigin::Signed(admin), registry, account.clone());

        assert!(!Pallet::<T>::is_allowlisted(registry, &account));
    }

    impl_benchmark_test_suite!(AllowlistRegistry, crate::mock::new_test_ext(), crate::mock::Test);
}
