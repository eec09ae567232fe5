//! Balance, allowance and supply accounting.

use super::*;
use sp_runtime::traits::AccountIdConversion;

impl<T: Config> Pallet<T> {
    /// The ledger's own account. Tokens sent here could never be recovered.
    pub fn account_id() -> T::AccountId {
        T::PalletId::get().into_account_truncating()
    }

    pub fn name() -> Vec<u8> {
        TokenName::<T>::get().into_inner()
    }

    pub fn symbol() -> Vec<u8> {
        TokenSymbol::<T>::get().into_inner()
    }

    pub fn decimals() -> u8 {
        Decimals::<T>::get()
    }

    pub fn total_supply() -> U256 {
        TotalSupply::<T>::get()
    }

    pub fn balance_of(who: &T::AccountId) -> U256 {
        Balances::<T>::get(who)
    }

    pub fn allowance(owner: &T::AccountId, spender: &T::AccountId) -> U256 {
        Allowances::<T>::get(owner, spender)
    }

    /// Validation shared by mint, burn, transfer and transfer_from. `from` is
    /// `None` for mints and `to` is `None` for burns.
    pub(crate) fn before_token_transfer(
        _from: Option<&T::AccountId>,
        to: Option<&T::AccountId>,
        _amount: U256,
    ) -> DispatchResult {
        ensure!(!IsPaused::<T>::get(), Error::<T>::TransferWhilePaused);
        if let Some(to) = to {
            ensure!(*to != Self::account_id(), Error::<T>::TransferToSelf);
        }
        Ok(())
    }

    pub(crate) fn do_mint(to: &T::AccountId, amount: U256) -> DispatchResult {
        ensure!(!amount.is_zero(), Error::<T>::ZeroAmount);
        Self::ensure_not_zero(to)?;
        Self::before_token_transfer(None, Some(to), amount)?;

        let supply = TotalSupply::<T>::get().checked_add(amount).ok_or(Error::<T>::Overflow)?;
        let balance = Balances::<T>::get(to).checked_add(amount).ok_or(Error::<T>::Overflow)?;
        TotalSupply::<T>::put(supply);
        Balances::<T>::insert(to, balance);

        Self::deposit_event(Event::Transfer { from: None, to: Some(to.clone()), amount });
        Self::deposit_event(Event::Minted { to: to.clone(), amount });
        log::debug!(target: LOG_TARGET, "Minted {amount} to {to:?}");
        Ok(())
    }

    pub(crate) fn do_burn(from: &T::AccountId, amount: U256) -> DispatchResult {
        ensure!(!amount.is_zero(), Error::<T>::ZeroAmount);
        Self::before_token_transfer(Some(from), None, amount)?;

        let balance =
            Balances::<T>::get(from).checked_sub(amount).ok_or(Error::<T>::InsufficientBalance)?;
        let supply = TotalSupply::<T>::get().checked_sub(amount).ok_or(Error::<T>::Overflow)?;
        Balances::<T>::insert(from, balance);
        TotalSupply::<T>::put(supply);

        Self::deposit_event(Event::Transfer { from: Some(from.clone()), to: None, amount });
        Self::deposit_event(Event::Burned { from: from.clone(), amount });
        log::debug!(target: LOG_TARGET, "Burned {amount} from {from:?}");
        Ok(())
    }

    /// Validate a move of `amount` and return the resulting balances of
    /// `from` and `to`. The receiving side is `None` on a self-transfer, where
    /// the balance does not change.
    fn prepare_transfer(
        from: &T::AccountId,
        to: &T::AccountId,
        amount: U256,
    ) -> Result<(U256, Option<U256>), DispatchError> {
        Self::ensure_not_zero(from)?;
        Self::ensure_not_zero(to)?;
        Self::before_token_transfer(Some(from), Some(to), amount)?;

        let from_balance =
            Balances::<T>::get(from).checked_sub(amount).ok_or(Error::<T>::InsufficientBalance)?;
        if from == to {
            return Ok((from_balance, None));
        }
        let to_balance = Balances::<T>::get(to).checked_add(amount).ok_or(Error::<T>::Overflow)?;
        Ok((from_balance, Some(to_balance)))
    }

    fn apply_transfer(
        from: &T::AccountId,
        to: &T::AccountId,
        amount: U256,
        (from_balance, to_balance): (U256, Option<U256>),
    ) {
        if let Some(to_balance) = to_balance {
            Balances::<T>::insert(from, from_balance);
            Balances::<T>::insert(to, to_balance);
        }
        Self::deposit_event(Event::Transfer {
            from: Some(from.clone()),
            to: Some(to.clone()),
            amount,
        });
        log::debug!(target: LOG_TARGET, "Transferred {amount} from {from:?} to {to:?}");
    }

    pub(crate) fn do_transfer(from: &T::AccountId, to: &T::AccountId, amount: U256) -> DispatchResult {
        let balances = Self::prepare_transfer(from, to, amount)?;
        Self::apply_transfer(from, to, amount, balances);
        Ok(())
    }

    /// Transfer checks run before the allowance check.
    pub(crate) fn do_transfer_from(
        spender: &T::AccountId,
        owner: &T::AccountId,
        to: &T::AccountId,
        amount: U256,
    ) -> DispatchResult {
        let balances = Self::prepare_transfer(owner, to, amount)?;
        let remaining = Allowances::<T>::get(owner, spender)
            .checked_sub(amount)
            .ok_or(Error::<T>::InsufficientAllowance)?;

        Self::apply_transfer(owner, to, amount, balances);
        Self::set_allowance(owner, spender, remaining);
        Ok(())
    }

    pub(crate) fn do_approve(
        owner: &T::AccountId,
        spender: &T::AccountId,
        amount: U256,
    ) -> DispatchResult {
        Self::ensure_not_zero(spender)?;
        Self::set_allowance(owner, spender, amount);
        Ok(())
    }

    fn set_allowance(owner: &T::AccountId, spender: &T::AccountId, amount: U256) {
        if amount.is_zero() {
            Allowances::<T>::remove(owner, spender);
        } else {
            Allowances::<T>::insert(owner, spender, amount);
        }
        Self::deposit_event(Event::Approval {
            owner: owner.clone(),
            spender: spender.clone(),
            amount,
        });
    }
}
