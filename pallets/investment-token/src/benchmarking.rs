//! Benchmarking setup for pallet-investment-token

use super::*;

#[allow(unused)]
use crate::Pallet as InvestmentToken;
use frame_benchmarking::v2::*;
use frame_system::RawOrigin;
use pallet_allowlist_registry::AllowlistInspect;

const FUNDS: u64 = 10_000_000;
const AMOUNT: u64 = 1_000_000;

/// Install a fresh owner and an active registry listing `members`.
fn setup<T: Config>(members: &[&T::AccountId]) -> T::AccountId {
    let owner: T::AccountId = account("owner", 0, 0);
    Owner::<T>::put(&owner);

    let registry = T::Allowlist::create_registry(owner.clone());
    for who in members {
        T::Allowlist::allowlist(registry, (*who).clone());
    }
    ActiveRegistry::<T>::put(registry);
    Paused::<T>::put(false);
    owner
}

fn fund<T: Config>(who: &T::AccountId, amount: u64) {
    let amount = Balance::from(amount);
    Balances::<T>::mutate(who, |balance| *balance = balance.saturating_add(amount));
    TotalSupply::<T>::mutate(|supply| *supply = supply.saturating_add(amount));
}

#[benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn transfer() {
        let caller: T::AccountId = whitelisted_caller();
        let recipient: T::AccountId = account("recipient", 0, 0);
        setup::<T>(&[&caller, &recipient]);
        fund::<T>(&caller, FUNDS);
        fund::<T>(&recipient, FUNDS);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), recipient.clone(), Balance::from(AMOUNT));

        assert_eq!(Balances::<T>::get(&recipient), Balance::from(FUNDS + AMOUNT));
    }

    #[benchmark]
    fn approve() {
        let caller: T::AccountId = whitelisted_caller();
        let spender: T::AccountId = account("spender", 0, 0);
        setup::<T>(&[&caller, &spender]);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), spender.clone(), Balance::from(AMOUNT));

        assert_eq!(Allowances::<T>::get(&caller, &spender), Balance::from(AMOUNT));
    }

    #[benchmark]
    fn increase_allowance() {
        let caller: T::AccountId = whitelisted_caller();
        let spender: T::AccountId = account("spender", 0, 0);
        setup::<T>(&[&caller, &spender]);
        Allowances::<T>::insert(&caller, &spender, Balance::from(AMOUNT));

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), spender.clone(), Balance::from(AMOUNT));

        assert_eq!(Allowances::<T>::get(&caller, &spender), Balance::from(2 * AMOUNT));
    }

    #[benchmark]
    fn decrease_allowance() {
        let caller: T::AccountId = whitelisted_caller();
        let spender: T::AccountId = account("spender", 0, 0);
        setup::<T>(&[&caller, &spender]);
        Allowances::<T>::insert(&caller, &spender, Balance::from(2 * AMOUNT));

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), spender.clone(), Balance::from(AMOUNT));

        assert_eq!(Allowances::<T>::get(&caller, &spender), Balance::from(AMOUNT));
    }

    #[benchmark]
    fn transfer_from() {
        let spender: T::AccountId = whitelisted_caller();
        let from: T::AccountId = account("from", 0, 0);
        let to: T::AccountId = account("to", 0, 0);
        setup::<T>(&[&from, &to]);
        fund::<T>(&from, FUNDS);
        Allowances::<T>::insert(&from, &spender, Balance::from(FUNDS));

        #[extrinsic_call]
        _(RawOrigin::Signed(spender.clone()), from.clone(), to.clone(), Balance::from(AMOUNT));

        assert_eq!(Balances::<T>::get(&to), Balance::from(AMOUNT));
        assert_eq!(Allowances::<T>::get(&from, &spender), Balance::from(FUNDS - AMOUNT));
    }

    #[benchmark]
    fn burn() {
        let caller: T::AccountId = whitelisted_caller();
        setup::<T>(&[&caller]);
        fund::<T>(&caller, FUNDS);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), Balance::from(AMOUNT));

        assert_eq!(Balances::<T>::get(&caller), Balance::from(FUNDS - AMOUNT));
    }

    #[benchmark]
    fn burn_from() {
        let spender: T::AccountId = whitelisted_caller();
        let holder: T::AccountId = account("holder", 0, 0);
        setup::<T>(&[&holder]);
        fund::<T>(&holder, FUNDS);
        Allowances::<T>::insert(&holder, &spender, Balance::from(FUNDS));

        #[extrinsic_call]
        _(RawOrigin::Signed(spender.clone()), holder.clone(), Balance::from(AMOUNT));

        assert_eq!(Balances::<T>::get(&holder), Balance::from(FUNDS - AMOUNT));
    }

    #[benchmark]
    fn mint() {
        let owner = setup::<T>(&[]);
        let supply = TotalSupply::<T>::get();

        #[extrinsic_call]
        _(RawOrigin::Signed(owner.clone()), Balance::from(AMOUNT));

        assert_eq!(TotalSupply::<T>::get(), supply + Balance::from(AMOUNT));
    }

    #[benchmark]
    fn admin_transfer() {
        let owner = setup::<T>(&[]);
        let from: T::AccountId = account("from", 0, 0);
        let to: T::AccountId = account("to", 0, 0);
        fund::<T>(&from, FUNDS);

        #[extrinsic_call]
        _(RawOrigin::Signed(owner), from.clone(), to.clone(), Balance::from(AMOUNT));

        assert_eq!(Balances::<T>::get(&to), Balance::from(AMOUNT));
    }

    #[benchmark]
    fn admin_burn() {
        let owner = setup::<T>(&[]);
        let holder: T::AccountId = account("holder", 0, 0);
        fund::<T>(&holder, FUNDS);

        #[extrinsic_call]
        _(RawOrigin::Signed(owner), holder.clone(), Balance::from(AMOUNT));

        assert_eq!(Balances::<T>::get(&holder), Balance::from(FUNDS - AMOUNT));
    }

    #[benchmark]
    fn set_allowlist_registry() {
        let owner = setup::<T>(&[]);
        let registry = T::Allowlist::create_registry(owner.clone());

        #[extrinsic_call]
        _(RawOrigin::Signed(owner), registry);

        assert_eq!(ActiveRegistry::<T>::get(), Some(registry));
    }

    #[benchmark]
    fn pause() {
        let owner = setup::<T>(&[]);

        #[extrinsic_call]
        _(RawOrigin::Signed(owner));

        assert!(Paused::<T>::get());
    }

    #[benchmark]
    fn unpause() {
        let owner = setup::<T>(&[]);
        Paused::<T>::put(true);

        #[extrinsic_call]
        _(RawOrigin::Signed(owner));

        assert!(!Paused::<T>::get());
    }

    impl_benchmark_test_suite!(InvestmentToken, crate::mock::new_test_ext(), crate::mock::Test);
}
