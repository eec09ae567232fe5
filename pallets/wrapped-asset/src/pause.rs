//! Global pause switch over balance movements.

use super::*;

impl<T: Config> Pallet<T> {
    pub fn is_paused() -> bool {
        IsPaused::<T>::get()
    }

    pub(crate) fn do_pause(who: &T::AccountId) -> DispatchResult {
        ensure!(Self::has_role(PAUSER_ROLE, who), Error::<T>::NotPauser);
        ensure!(!IsPaused::<T>::get(), Error::<T>::AlreadyPaused);

        IsPaused::<T>::put(true);
        Self::deposit_event(Event::Paused { account: who.clone() });
        log::info!(target: LOG_TARGET, "Ledger paused by {who:?}");
        Ok(())
    }

    pub(crate) fn do_unpause(who: &T::AccountId) -> DispatchResult {
        ensure!(Self::has_role(PAUSER_ROLE, who), Error::<T>::NotUnpauser);
        ensure!(IsPaused::<T>::get(), Error::<T>::NotPaused);

        IsPaused::<T>::put(false);
        Self::deposit_event(Event::Unpaused { account: who.clone() });
        log::info!(target: LOG_TARGET, "Ledger unpaused by {who:?}");
        Ok(())
    }
}
