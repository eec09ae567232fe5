//! Custody metadata of the off-chain reserve. Purely descriptive; never read
//! by balance accounting.

use super::*;

impl<T: Config> Pallet<T> {
    pub fn custody_field(field: CustodyField) -> Vec<u8> {
        Custody::<T>::get(field).into_inner()
    }

    pub fn deposit_view_key() -> Vec<u8> {
        Self::custody_field(CustodyField::DepositViewKey)
    }

    pub fn deposit_public_address() -> Vec<u8> {
        Self::custody_field(CustodyField::DepositAddress)
    }

    pub fn spend_view_key() -> Vec<u8> {
        Self::custody_field(CustodyField::SpendViewKey)
    }

    pub fn spend_public_address() -> Vec<u8> {
        Self::custody_field(CustodyField::SpendAddress)
    }

    pub fn cold_view_key() -> Vec<u8> {
        Self::custody_field(CustodyField::ColdViewKey)
    }

    pub fn cold_public_address() -> Vec<u8> {
        Self::custody_field(CustodyField::ColdAddress)
    }

    pub(crate) fn bounded_custody_value(
        value: Vec<u8>,
    ) -> Result<BoundedVec<u8, T::MaxCustodyFieldLen>, Error<T>> {
        value.try_into().map_err(|_| Error::<T>::CustodyFieldTooLong)
    }

    pub(crate) fn do_set_custody_field(field: CustodyField, value: Vec<u8>) -> DispatchResult {
        let value = Self::bounded_custody_value(value)?;
        log::debug!(target: LOG_TARGET, "Custody field {} updated", field.as_str());
        Custody::<T>::insert(field, value);
        Ok(())
    }
}
