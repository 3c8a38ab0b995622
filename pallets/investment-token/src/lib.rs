#![cfg_attr(not(feature = "std"), no_std)]
// Allow deprecated getter macros until the storage accessors are migrated
#![allow(deprecated)]
#![allow(clippy::let_unit_value)]

//! Allowlist-gated fungible token with owner-only mint, forced transfer and pause.

use codec::{Decode, Encode, MaxEncodedLen};
use frame_support::{dispatch::DispatchResult, ensure, pallet_prelude::*};
use frame_system::{ensure_signed, pallet_prelude::*};
use pallet_allowlist_registry::{AllowlistInspect, RegistryId};
use scale_info::TypeInfo;
use sp_runtime::RuntimeDebug;
use sp_std::prelude::*;

pub use pallet::*;
pub use weights::WeightInfo;

pub mod weights;

#[cfg(test)]
mod mock;


#[cfg(test)]
mod proptests;

#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

/// The current storage version.
const STORAGE_VERSION: StorageVersion = StorageVersion::new(1);

pub const LOG_TARGET: &str = "runtime::investment-token";

/// Fixed number of decimals for display purposes.
pub const DECIMALS: u8 = 18;

/// Token amounts. 256 bits wide so realistic supplies never approach the limit.
pub type Balance = sp_core::U256;

/// Which value-moving calls are rejected while the token is paused.
#[derive(
    Clone, Copy, Default, Encode, Decode, PartialEq, Eq, RuntimeDebug, TypeInfo, MaxEncodedLen,
)]
pub enum PauseScope {
    /// The pause flag is informational only.
    #[default]
    Flag,
    /// Transfers and burns by ordinary accounts are blocked. Owner operations still work.
    PeerTransfers,
    /// Every balance change is blocked, including mint and the admin operations.
    AllValueMovement,
}

/// Origin class of a balance change, used to evaluate the pause gate.
#[derive(Clone, Copy, PartialEq, Eq, RuntimeDebug)]
pub(crate) enum Movement {
    /// Ordinary holder or spender call.
    Peer,
    /// Owner-only call.
    Privileged,
}

impl PauseScope {
    pub(crate) fn blocks(self, movement: Movement) -> bool {
        match self {
            PauseScope::Flag => false,
            PauseScope::PeerTransfers => movement == Movement::Peer,
            PauseScope::AllValueMovement => true,
        }
    }
}

#[frame_support::pallet]
pub mod pallet {
    use super::*;

    #[pallet::config]
    pub trait Config: frame_system::Config {
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

        /// Source of allowlist membership.
        type Allowlist: AllowlistInspect<Self::AccountId>;

        /// Whether calls signed by the owner skip the allowlist on ordinary operations.
        #[pallet::constant]
        type OwnerBypassesAllowlist: Get<bool>;

        /// Calls blocked while paused.
        #[pallet::constant]
        type PausePolicy: Get<PauseScope>;

        type WeightInfo: WeightInfo;
    }

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(_);

    /// Token name (e.g., "Investment Token")
    #[pallet::storage]
    #[pallet::getter(fn token_name)]
    pub type TokenName<T> = StorageValue<_, BoundedVec<u8, ConstU32<64>>, ValueQuery>;

    /// Token symbol (e.g., "IT")
    #[pallet::storage]
    #[pallet::getter(fn token_symbol)]
    pub type TokenSymbol<T> = StorageValue<_, BoundedVec<u8, ConstU32<16>>, ValueQuery>;

    /// Total token supply
    #[pallet::storage]
    #[pallet::getter(fn total_supply)]
    pub type TotalSupply<T> = StorageValue<_, Balance, ValueQuery>;

    /// Account balances. Zero balances are not stored.
    #[pallet::storage]
    #[pallet::getter(fn balance_of)]
    pub type Balances<T: Config> =
        StorageMap<_, Blake2_128Concat, T::AccountId, Balance, ValueQuery>;

    /// Remaining spend authorization, keyed by (owner, spender)
    #[pallet::storage]
    #[pallet::getter(fn allowance)]
    pub type Allowances<T: Config> = StorageDoubleMap<
        _,
        Blake2_128Concat,
        T::AccountId,
        Blake2_128Concat,
        T::AccountId,
        Balance,
        ValueQuery,
    >;

    /// Holder of the privileged operations
    #[pallet::storage]
    #[pallet::getter(fn owner)]
    pub type Owner<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

    #[pallet::storage]
    #[pallet::getter(fn is_paused)]
    pub type Paused<T> = StorageValue<_, bool, ValueQuery>;

    /// Registry consulted by the allowlist gate
    #[pallet::storage]
    #[pallet::getter(fn allowlist_registry)]
    pub type ActiveRegistry<T> = StorageValue<_, RegistryId, OptionQuery>;

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        /// Tokens moved between two allowlisted accounts
        Transferred { from: T::AccountId, to: T::AccountId, amount: Balance },
        /// Allowance set to `amount`
        Approval { owner: T::AccountId, spender: T::AccountId, amount: Balance },
        /// New tokens minted to the owner
        Minted { to: T::AccountId, amount: Balance },
        /// Tokens destroyed by their holder or an approved spender
        Burned { from: T::AccountId, amount: Balance },
        /// Owner moved tokens regardless of the allowlist
        AdminTransferred { from: T::AccountId, to: T::AccountId, amount: Balance },
        /// Owner destroyed tokens regardless of the allowlist
        AdminBurned { from: T::AccountId, amount: Balance },
        /// Allowlist gate now reads from `new`
        AllowlistRegistrySet { old: Option<RegistryId>, new: RegistryId },
        Paused { by: T::AccountId },
        Unpaused { by: T::AccountId },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// Caller is not the owner
        AccessDenied,
        /// Token is already paused
        AlreadyPaused,
        /// Token is not paused
        NotPaused,
        /// Operation is blocked while the token is paused
        Paused,
        /// Accounts are not allowlisted
        NotAllowlisted,
        /// Amount exceeds balance
        InsufficientBalance,
        /// Amount exceeds the remaining allowance
        InsufficientAllowance,
        /// Decrease would take the allowance below zero
        AllowanceUnderflow,
        Overflow,
        /// No registry with this id
        UnknownRegistry,
        /// Owner or registry was never configured
        NotInitialized,
        /// Total supply fell below an account balance. Indicates corrupted state.
        SupplyInvariantBroken,
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
        /// Move `amount` from the caller to `to`. Both must be allowlisted.
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::transfer())]
        pub fn transfer(origin: OriginFor<T>, to: T::AccountId, amount: Balance) -> DispatchResult {
            let sender = ensure_signed(origin)?;
            Self::ensure_unpaused(Movement::Peer)?;
            Self::ensure_allowlisted(&sender, &[&sender, &to])?;

            Self::do_move(&sender, &to, amount)?;
            Self::deposit_event(Event::Transferred { from: sender, to, amount });
            Ok(())
        }

        /// Set the caller's allowance for `spender` to exactly `amount`.
        #[pallet::call_index(1)]
        #[pallet::weight(T::WeightInfo::approve())]
        pub fn approve(
            origin: OriginFor<T>,
            spender: T::AccountId,
            amount: Balance,
        ) -> DispatchResult {
            let owner = ensure_signed(origin)?;
            Self::ensure_allowlisted(&owner, &[&owner, &spender])?;

            Self::write_allowance(&owner, &spender, amount);
            Self::deposit_event(Event::Approval { owner, spender, amount });
            Ok(())
        }

        #[pallet::call_index(2)]
        #[pallet::weight(T::WeightInfo::increase_allowance())]
        pub fn increase_allowance(
            origin: OriginFor<T>,
            spender: T::AccountId,
            delta: Balance,
        ) -> DispatchResult {
            let owner = ensure_signed(origin)?;
            Self::ensure_allowlisted(&owner, &[&owner, &spender])?;

            let amount = Allowances::<T>::get(&owner, &spender)
                .checked_add(delta)
                .ok_or(Error::<T>::Overflow)?;
            Self::write_allowance(&owner, &spender, amount);
            Self::deposit_event(Event::Approval { owner, spender, amount });
            Ok(())
        }

        #[pallet::call_index(3)]
        #[pallet::weight(T::WeightInfo::decrease_allowance())]
        pub fn decrease_allowance(
            origin: OriginFor<T>,
            spender: T::AccountId,
            delta: Balance,
        ) -> DispatchResult {
            let owner = ensure_signed(origin)?;
            Self::ensure_allowlisted(&owner, &[&owner, &spender])?;

            let amount = Allowances::<T>::get(&owner, &spender)
                .checked_sub(delta)
                .ok_or(Error::<T>::AllowanceUnderflow)?;
            Self::write_allowance(&owner, &spender, amount);
            Self::deposit_event(Event::Approval { owner, spender, amount });
            Ok(())
        }

        /// Spend the caller's allowance on `from` to move `amount` to `to`.
        ///
        /// Only `from` and `to` must be allowlisted; the spender's own status is
        /// not consulted.
        #[pallet::call_index(4)]
        #[pallet::weight(T::WeightInfo::transfer_from())]
        pub fn transfer_from(
            origin: OriginFor<T>,
            from: T::AccountId,
            to: T::AccountId,
            amount: Balance,
        ) -> DispatchResult {
            let spender = ensure_signed(origin)?;
            Self::ensure_unpaused(Movement::Peer)?;
            Self::ensure_principals_allowlisted(&[&from, &to])?;

            let remaining = Self::remaining_allowance(&from, &spender, amount)?;
            Self::do_move(&from, &to, amount)?;
            Self::write_allowance(&from, &spender, remaining);

            Self::deposit_event(Event::Transferred { from, to, amount });
            Ok(())
        }

        /// Destroy `amount` of the caller's own tokens.
        #[pallet::call_index(5)]
        #[pallet::weight(T::WeightInfo::burn())]
        pub fn burn(origin: OriginFor<T>, amount: Balance) -> DispatchResult {
            let holder = ensure_signed(origin)?;
            Self::ensure_unpaused(Movement::Peer)?;
            Self::ensure_allowlisted(&holder, &[&holder])?;

            Self::do_burn(&holder, amount)?;
            Self::deposit_event(Event::Burned { from: holder, amount });
            Ok(())
        }

        /// Destroy `amount` of `account`'s tokens, spending the caller's allowance.
        #[pallet::call_index(6)]
        #[pallet::weight(T::WeightInfo::burn_from())]
        pub fn burn_from(
            origin: OriginFor<T>,
            account: T::AccountId,
            amount: Balance,
        ) -> DispatchResult {
            let spender = ensure_signed(origin)?;
            Self::ensure_unpaused(Movement::Peer)?;
            Self::ensure_principals_allowlisted(&[&account])?;

            let remaining = Self::remaining_allowance(&account, &spender, amount)?;
            Self::do_burn(&account, amount)?;
            Self::write_allowance(&account, &spender, remaining);

            Self::deposit_event(Event::Burned { from: account, amount });
            Ok(())
        }

        /// Create `amount` new tokens in the owner's account.
        #[pallet::call_index(7)]
        #[pallet::weight(T::WeightInfo::mint())]
        pub fn mint(origin: OriginFor<T>, amount: Balance) -> DispatchResult {
            let owner = Self::ensure_owner(origin)?;
            Self::ensure_unpaused(Movement::Privileged)?;

            let supply = TotalSupply::<T>::get().checked_add(amount).ok_or(Error::<T>::Overflow)?;
            let balance =
                Balances::<T>::get(&owner).checked_add(amount).ok_or(Error::<T>::Overflow)?;

            TotalSupply::<T>::put(supply);
            Self::write_balance(&owner, balance);
            Self::deposit_event(Event::Minted { to: owner, amount });
            Ok(())
        }

        /// Move tokens between any two accounts, ignoring the allowlist.
        #[pallet::call_index(8)]
        #[pallet::weight(T::WeightInfo::admin_transfer())]
        pub fn admin_transfer(
            origin: OriginFor<T>,
            from: T::AccountId,
            to: T::AccountId,
            amount: Balance,
        ) -> DispatchResult {
            Self::ensure_owner(origin)?;
            Self::ensure_unpaused(Movement::Privileged)?;

            Self::do_move(&from, &to, amount)?;
            log::debug!(target: LOG_TARGET, "admin transfer of {amount:?} from {from:?} to {to:?}");
            Self::deposit_event(Event::AdminTransferred { from, to, amount });
            Ok(())
        }

        /// Destroy tokens held by any account, ignoring the allowlist.
        #[pallet::call_index(9)]
        #[pallet::weight(T::WeightInfo::admin_burn())]
        pub fn admin_burn(
            origin: OriginFor<T>,
            account: T::AccountId,
            amount: Balance,
        ) -> DispatchResult {
            Self::ensure_owner(origin)?;
            Self::ensure_unpaused(Movement::Privileged)?;

            Self::do_burn(&account, amount)?;
            log::debug!(target: LOG_TARGET, "admin burn of {amount:?} from {account:?}");
            Self::deposit_event(Event::AdminBurned { from: account, amount });
            Ok(())
        }

        /// Point the allowlist gate at another registry. Applies from the next call.
        #[pallet::call_index(10)]
        #[pallet::weight(T::WeightInfo::set_allowlist_registry())]
        pub fn set_allowlist_registry(origin: OriginFor<T>, registry: RegistryId) -> DispatchResult {
            Self::ensure_owner(origin)?;
            ensure!(T::Allowlist::registry_exists(registry), Error::<T>::UnknownRegistry);

            let old = ActiveRegistry::<T>::get();
            ActiveRegistry::<T>::put(registry);
            log::debug!(target: LOG_TARGET, "allowlist registry changed from {old:?} to {registry}");
            Self::deposit_event(Event::AllowlistRegistrySet { old, new: registry });
            Ok(())
        }

        #[pallet::call_index(11)]
        #[pallet::weight(T::WeightInfo::pause())]
        pub fn pause(origin: OriginFor<T>) -> DispatchResult {
            let owner = Self::ensure_owner(origin)?;
            ensure!(!Paused::<T>::get(), Error::<T>::AlreadyPaused);

            Paused::<T>::put(true);
            log::debug!(target: LOG_TARGET, "token paused");
            Self::deposit_event(Event::Paused { by: owner });
            Ok(())
        }

        #[pallet::call_index(12)]
        #[pallet::weight(T::WeightInfo::unpause())]
        pub fn unpause(origin: OriginFor<T>) -> DispatchResult {
            let owner = Self::ensure_owner(origin)?;
            ensure!(Paused::<T>::get(), Error::<T>::NotPaused);

            Paused::<T>::put(false);
            log::debug!(target: LOG_TARGET, "token unpaused");
            Self::deposit_event(Event::Unpaused { by: owner });
            Ok(())
        }
    }

    #[pallet::genesis_config]
    #[derive(frame_support::DefaultNoBound)]
    pub struct GenesisConfig<T: Config> {
        /// Account holding the privileged operations
        pub owner: Option<T::AccountId>,
        /// Token name
        pub token_name: Vec<u8>,
        /// Token symbol
        pub token_symbol: Vec<u8>,
        /// Registry consulted by the allowlist gate
        pub allowlist_registry: Option<RegistryId>,
    }

    #[pallet::genesis_build]
    impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
        fn build(&self) {
            let name: BoundedVec<u8, ConstU32<64>> =
                self.token_name.clone().try_into().expect("Token name too long (max 64 bytes)");
            TokenName::<T>::put(name);

            let symbol: BoundedVec<u8, ConstU32<16>> =
                self.token_symbol.clone().try_into().expect("Token symbol too long (max 16 bytes)");
            TokenSymbol::<T>::put(symbol);

            if let Some(ref owner) = self.owner {
                Owner::<T>::put(owner);
            }
            if let Some(registry) = self.allowlist_registry {
                ActiveRegistry::<T>::put(registry);
            }
        }
    }
}

impl<T: Config> Pallet<T> {
    pub fn decimals() -> u8 {
        DECIMALS
    }

    /// Whether `who` is listed in the registry the token currently points at.
    pub fn is_allowlisted(who: &T::AccountId) -> bool {
        ActiveRegistry::<T>::get()
            .map(|registry| T::Allowlist::is_allowlisted(registry, who))
            .unwrap_or(false)
    }

    fn is_owner(who: &T::AccountId) -> bool {
        Owner::<T>::get().as_ref() == Some(who)
    }

    /// Signed origin that is also the owner.
    fn ensure_owner(origin: OriginFor<T>) -> Result<T::AccountId, DispatchError> {
        let who = ensure_signed(origin)?;
        let owner = Owner::<T>::get().ok_or(Error::<T>::NotInitialized)?;
        ensure!(who == owner, Error::<T>::AccessDenied);
        Ok(who)
    }

    fn ensure_unpaused(movement: Movement) -> DispatchResult {
        if T::PausePolicy::get().blocks(movement) {
            ensure!(!Paused::<T>::get(), Error::<T>::Paused);
        }
        Ok(())
    }

    /// Every account in `principals` must be listed, unless the owner is calling
    /// and the runtime exempts it. Only for calls where the caller is itself a principal.
    fn ensure_allowlisted(caller: &T::AccountId, principals: &[&T::AccountId]) -> DispatchResult {
        if T::OwnerBypassesAllowlist::get() && Self::is_owner(caller) {
            return Ok(());
        }
        Self::ensure_listed(principals, false)
    }

    /// Gate for delegated calls. The spender is never consulted, owner or not. An
    /// exempt owner is skipped only where it is one of the principals.
    fn ensure_principals_allowlisted(principals: &[&T::AccountId]) -> DispatchResult {
        Self::ensure_listed(principals, T::OwnerBypassesAllowlist::get())
    }

    fn ensure_listed(principals: &[&T::AccountId], skip_owner: bool) -> DispatchResult {
        let registry = ActiveRegistry::<T>::get().ok_or(Error::<T>::NotInitialized)?;
        ensure!(
            principals
                .iter()
                .filter(|who| !(skip_owner && Self::is_owner(who)))
                .all(|who| T::Allowlist::is_allowlisted(registry, who)),
            Error::<T>::NotAllowlisted
        );
        Ok(())
    }

    fn remaining_allowance(
        owner: &T::AccountId,
        spender: &T::AccountId,
        amount: Balance,
    ) -> Result<Balance, DispatchError> {
        Allowances::<T>::get(owner, spender)
            .checked_sub(amount)
            .ok_or_else(|| Error::<T>::InsufficientAllowance.into())
    }

    /// Move `amount` between balances. All checks run before either balance is written.
    fn do_move(from: &T::AccountId, to: &T::AccountId, amount: Balance) -> DispatchResult {
        let from_balance =
            Balances::<T>::get(from).checked_sub(amount).ok_or(Error::<T>::InsufficientBalance)?;
        if from == to {
            return Ok(());
        }
        let to_balance = Balances::<T>::get(to).checked_add(amount).ok_or(Error::<T>::Overflow)?;

        Self::write_balance(from, from_balance);
        Self::write_balance(to, to_balance);
        Ok(())
    }

    /// Remove `amount` from `account` and from the total supply.
    fn do_burn(account: &T::AccountId, amount: Balance) -> DispatchResult {
        let balance =
            Balances::<T>::get(account).checked_sub(amount).ok_or(Error::<T>::InsufficientBalance)?;
        let Some(supply) = TotalSupply::<T>::get().checked_sub(amount) else {
            frame_support::defensive!("total supply is below an account balance");
            return Err(Error::<T>::SupplyInvariantBroken.into());
        };

        TotalSupply::<T>::put(supply);
        Self::write_balance(account, balance);
        Ok(())
    }

    fn write_balance(who: &T::AccountId, balance: Balance) {
        if balance.is_zero() {
            Balances::<T>::remove(who);
        } else {
            Balances::<T>::insert(who, balance);
        }
    }

    fn write_allowance(owner: &T::AccountId, spender: &T::AccountId, amount: Balance) {
        if amount.is_zero() {
            Allowances::<T>::remove(owner, spender);
        } else {
            Allowances::<T>::insert(owner, spender, amount);
        }
    }

    /// Engine invariants. A failure here is a defect, never a rejected call.
    ///
    /// * total supply equals the sum of all balances
    /// * no zero balance or allowance is stored
    /// * the active registry exists
    #[cfg(any(feature = "try-runtime", test))]
    pub fn do_try_state() -> Result<(), sp_runtime::TryRuntimeError> {
        let mut sum = Balance::zero();
        for (_who, balance) in Balances::<T>::iter() {
            ensure!(!balance.is_zero(), "zero balance stored");
            sum = sum.checked_add(balance).ok_or("sum of balances overflows")?;
        }
        if sum != TotalSupply::<T>::get() {
            log::error!(
                target: LOG_TARGET,
                "total supply {:?} does not match balances {sum:?}",
                TotalSupply::<T>::get()
            );
            return Err("total supply does not match sum of balances".into());
        }

        for (_owner, _spender, amount) in Allowances::<T>::iter() {
            ensure!(!amount.is_zero(), "zero allowance stored");
        }

        if let Some(registry) = ActiveRegistry::<T>::get() {
            ensure!(T::Allowlist::registry_exists(registry), "active registry does not exist");
        }
        Ok(())
    }
}
