//! Read-side interface other pallets use to consult a registry.

use crate::RegistryId;

/// Membership queries against the registry table.
///
/// A token pallet holds a [`RegistryId`] and asks this trait whether an account
/// is currently listed. Registries never learn who is asking.
pub trait AllowlistInspect<AccountId> {
    /// Whether `registry` has been created.
    fn registry_exists(registry: RegistryId) -> bool;

    /// Whether `who` is a member of `registry`. Unknown registries have no members.
    fn is_allowlisted(registry: RegistryId, who: &AccountId) -> bool;

    /// Create a registry administered by `admin` (benchmark setup only).
    #[cfg(feature = "runtime-benchmarks")]
    fn create_registry(admin: AccountId) -> RegistryId;

    /// Add `who` to `registry` without an admin check (benchmark setup only).
    #[cfg(feature = "runtime-benchmarks")]
    fn allowlist(registry: RegistryId, who: AccountId);
}
