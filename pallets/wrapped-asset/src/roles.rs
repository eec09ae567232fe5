//! Enumerable role membership.
//!
//! Members of a role live in a bounded vector (`RoleMembers`) with a reverse
//! lookup of each member's position (`RoleMemberIndex`). Grants append,
//! revocations swap the last member into the freed slot, so member indices
//! are only stable until the next revocation.

use super::*;

impl<T: Config> Pallet<T> {
    pub fn has_role(role: RoleId, who: &T::AccountId) -> bool {
        RoleMemberIndex::<T>::contains_key(role, who)
    }

    /// Member at `index` in the role's enumeration order.
    pub fn role_member(role: RoleId, index: u32) -> Option<T::AccountId> {
        RoleMembers::<T>::get(role).get(index as usize).cloned()
    }

    pub fn role_member_count(role: RoleId) -> u32 {
        RoleMembers::<T>::decode_len(role).unwrap_or(0) as u32
    }

    pub fn role_members(role: RoleId) -> Vec<T::AccountId> {
        RoleMembers::<T>::get(role).into_inner()
    }

    /// Role whose members may grant and revoke `role`.
    pub fn role_admin(role: RoleId) -> RoleId {
        RoleAdmins::<T>::get(role)
    }

    pub(crate) fn ensure_role_admin(role: RoleId, who: &T::AccountId) -> DispatchResult {
        ensure!(Self::has_role(Self::role_admin(role), who), Error::<T>::MissingRoleAdmin);
        Ok(())
    }

    /// Add `who` to `role`. Returns `false` when `who` already held it, in
    /// which case nothing is written and no event is emitted.
    pub(crate) fn do_grant_role(
        role: RoleId,
        who: &T::AccountId,
        sender: &T::AccountId,
    ) -> Result<bool, DispatchError> {
        Self::ensure_not_zero(who)?;
        if Self::has_role(role, who) {
            return Ok(false);
        }

        RoleMembers::<T>::try_mutate(role, |members| -> DispatchResult {
            let index = members.len() as u32;
            members.try_push(who.clone()).map_err(|_| Error::<T>::TooManyRoleMembers)?;
            RoleMemberIndex::<T>::insert(role, who, index);
            Ok(())
        })?;

        Self::deposit_event(Event::RoleGranted {
            role,
            account: who.clone(),
            sender: sender.clone(),
        });
        log::info!(target: LOG_TARGET, "Role {role:?} granted to {who:?} by {sender:?}");
        Ok(true)
    }

    /// Remove `who` from `role`. Returns `false` when `who` was not a member.
    pub(crate) fn do_revoke_role(role: RoleId, who: &T::AccountId, sender: &T::AccountId) -> bool {
        let Some(index) = RoleMemberIndex::<T>::take(role, who) else {
            return false;
        };

        RoleMembers::<T>::mutate_exists(role, |maybe_members| {
            let Some(members) = maybe_members else { return };
            let index = index as usize;
            if index < members.len() {
                members.swap_remove(index);
                if let Some(moved) = members.get(index) {
                    RoleMemberIndex::<T>::insert(role, moved, index as u32);
                }
            }
            if members.is_empty() {
                *maybe_members = None;
            }
        });

        Self::deposit_event(Event::RoleRevoked {
            role,
            account: who.clone(),
            sender: sender.clone(),
        });
        log::info!(target: LOG_TARGET, "Role {role:?} revoked from {who:?} by {sender:?}");
        true
    }

    pub(crate) fn do_set_role_admin(role: RoleId, admin_role: RoleId) {
        let previous_admin_role = RoleAdmins::<T>::get(role);
        RoleAdmins::<T>::insert(role, admin_role);
        Self::deposit_event(Event::RoleAdminChanged {
            role,
            previous_admin_role,
            new_admin_role: admin_role,
        });
    }
}
