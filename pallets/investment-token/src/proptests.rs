//! Randomised call sequences checking supply conservation and all-or-nothing dispatch.

use crate::{mock::*, Balance};
use frame_support::dispatch::DispatchResult;
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Op {
    Transfer { from: u64, to: u64, amount: u64 },
    Approve { owner: u64, spender: u64, amount: u64 },
    IncreaseAllowance { owner: u64, spender: u64, amount: u64 },
    DecreaseAllowance { owner: u64, spender: u64, amount: u64 },
    TransferFrom { spender: u64, from: u64, to: u64, amount: u64 },
    Burn { from: u64, amount: u64 },
    BurnFrom { spender: u64, from: u64, amount: u64 },
    Mint { caller: u64, amount: u64 },
    AdminTransfer { caller: u64, from: u64, to: u64, amount: u64 },
    AdminBurn { caller: u64, from: u64, amount: u64 },
    List { account: u64 },
    Unlist { account: u64 },
    TogglePause { caller: u64 },
}

fn account() -> impl Strategy<Value = u64> {
    prop_oneof![Just(OWNER), Just(ADDR1), Just(ADDR2), Just(ADDR3)]
}

fn amount() -> impl Strategy<Value = u64> {
    0u64..2_000
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (account(), account(), amount()).prop_map(|(from, to, amount)| Op::Transfer { from, to, amount }),
        (account(), account(), amount())
            .prop_map(|(owner, spender, amount)| Op::Approve { owner, spender, amount }),
        (account(), account(), amount())
            .prop_map(|(owner, spender, amount)| Op::IncreaseAllowance { owner, spender, amount }),
        (account(), account(), amount())
            .prop_map(|(owner, spender, amount)| Op::DecreaseAllowance { owner, spender, amount }),
        (account(), account(), account(), amount())
            .prop_map(|(spender, from, to, amount)| Op::TransferFrom { spender, from, to, amount }),
        (account(), amount()).prop_map(|(from, amount)| Op::Burn { from, amount }),
        (account(), account(), amount())
            .prop_map(|(spender, from, amount)| Op::BurnFrom { spender, from, amount }),
        (account(), amount()).prop_map(|(caller, amount)| Op::Mint { caller, amount }),
        (account(), account(), account(), amount())
            .prop_map(|(caller, from, to, amount)| Op::AdminTransfer { caller, from, to, amount }),
        (account(), account(), amount())
            .prop_map(|(caller, from, amount)| Op::AdminBurn { caller, from, amount }),
        account().prop_map(|account| Op::List { account }),
        account().prop_map(|account| Op::Unlist { account }),
        account().prop_map(|caller| Op::TogglePause { caller }),
    ]
}

fn apply(op: &Op) -> DispatchResult {
    let signed = RuntimeOrigin::signed;
    let value = |amount: &u64| Balance::from(*amount);
    match op {
        Op::Transfer { from, to, amount } => InvestmentToken::transfer(signed(*from), *to, value(amount)),
        Op::Approve { owner, spender, amount } =>
            InvestmentToken::approve(signed(*owner), *spender, value(amount)),
        Op::IncreaseAllowance { owner, spender, amount } =>
            InvestmentToken::increase_allowance(signed(*owner), *spender, value(amount)),
        Op::DecreaseAllowance { owner, spender, amount } =>
            InvestmentToken::decrease_allowance(signed(*owner), *spender, value(amount)),
        Op::TransferFrom { spender, from, to, amount } =>
            InvestmentToken::transfer_from(signed(*spender), *from, *to, value(amount)),
        Op::Burn { from, amount } => InvestmentToken::burn(signed(*from), value(amount)),
        Op::BurnFrom { spender, from, amount } =>
            InvestmentToken::burn_from(signed(*spender), *from, value(amount)),
        Op::Mint { caller, amount } => InvestmentToken::mint(signed(*caller), value(amount)),
        Op::AdminTransfer { caller, from, to, amount } =>
            InvestmentToken::admin_transfer(signed(*caller), *from, *to, value(amount)),
        Op::AdminBurn { caller, from, amount } =>
            InvestmentToken::admin_burn(signed(*caller), *from, value(amount)),
        Op::List { account } => AllowlistRegistry::add_allowlist(signed(OWNER), REGISTRY, *account),
        Op::Unlist { account } =>
            AllowlistRegistry::remove_allowlist(signed(OWNER), REGISTRY, *account),
        Op::TogglePause { caller } =>
            if InvestmentToken::is_paused() {
                InvestmentToken::unpause(signed(*caller))
            } else {
                InvestmentToken::pause(signed(*caller))
            },
    }
}

/// Principals of a delegated call whose allowlist status must hold for it to succeed.
fn delegated_principals(op: &Op) -> Vec<u64> {
    match op {
        Op::TransferFrom { from, to, .. } => vec![*from, *to],
        Op::BurnFrom { from, .. } => vec![*from],
        _ => Vec::new(),
    }
}

fn state_root() -> Vec<u8> {
    sp_io::storage::root(sp_runtime::StateVersion::V1)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn supply_is_conserved_and_failures_change_nothing(
        ops in prop::collection::vec(op(), 1..40),
        owner_bypass in any::<bool>(),
    ) {
        new_test_ext().execute_with(|| {
            OwnerBypass::set(owner_bypass);
            for op in &ops {
                let before = state_root();
                let gate_open = delegated_principals(op)
                    .iter()
                    .all(|who| (owner_bypass && *who == OWNER) || InvestmentToken::is_allowlisted(who));
                match apply(op) {
                    Ok(()) => prop_assert!(gate_open, "{:?} moved value for an unlisted account", op),
                    Err(_) => prop_assert_eq!(before, state_root(), "failed {:?} wrote to storage", op),
                }
                prop_assert!(InvestmentToken::do_try_state().is_ok(), "invariants broken after {:?}", op);
            }
            Ok(())
        })?;
    }

    /// Membership depends only on the last edit, however many repeat it.
    #[test]
    fn repeated_membership_edits_are_idempotent(edits in prop::collection::vec((account(), any::<bool>(), 1usize..4), 1..20)) {
        new_test_ext().execute_with(|| {
            for (account, add, repeats) in &edits {
                for _ in 0..*repeats {
                    let result = if *add {
                        AllowlistRegistry::add_allowlist(RuntimeOrigin::signed(OWNER), REGISTRY, *account)
                    } else {
                        AllowlistRegistry::remove_allowlist(RuntimeOrigin::signed(OWNER), REGISTRY, *account)
                    };
                    prop_assert!(result.is_ok());
                }
                prop_assert_eq!(InvestmentToken::is_allowlisted(account), *add);
            }
            Ok(())
        })?;
    }
}
