//! # Wrapped Asset Pallet
//!
//! A ledger of custody-backed units of an external reference asset (Wrapped
//! Safex Cash, `WSFX`). Balances are fungible and transferable with ERC-20
//! style allowances. Issuance is controlled by enumerable roles, a global pause
//! switch blocks every balance movement, and six custody strings point at the
//! off-chain reserve that backs the supply.
//!
//! Every balance-moving call runs the same validation before touching storage:
//! caller role, then the pause switch, then the destination check in
//! [`Pallet::before_token_transfer`].

#![cfg_attr(not(feature = "std"), no_std)]

use frame_support::{dispatch::DispatchResult, ensure, pallet_prelude::*, traits::EnsureOrigin};
use frame_system::{ensure_signed, pallet_prelude::*};
use sp_core::U256;
use sp_std::prelude::*;

pub use pallet::*;
pub use types::*;
pub use weights::WeightInfo;

mod custody;
mod ledger;
mod pause;
mod roles;
pub mod types;
pub mod weights;

#[cfg(test)]
mod mock;


#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

/// The current storage version.
const STORAGE_VERSION: StorageVersion = StorageVersion::new(1);

pub(crate) const LOG_TARGET: &str = "runtime::wrapped-asset";

#[frame_support::pallet]
pub mod pallet {
    use super::*;
    use frame_support::PalletId;

    #[pallet::config]
    pub trait Config: frame_system::Config<RuntimeEvent: From<Event<Self>>> {
        /// Origin allowed to change which role administers another role.
        type AdminOrigin: EnsureOrigin<Self::RuntimeOrigin>;

        /// Identifier the ledger's own account is derived from.
        #[pallet::constant]
        type PalletId: Get<PalletId>;

        /// Maximum number of members a single role can hold.
        #[pallet::constant]
        type MaxRoleMembers: Get<u32>;

        /// Maximum byte length of a custody metadata value.
        #[pallet::constant]
        type MaxCustodyFieldLen: Get<u32>;

        /// Weight information for extrinsics in this pallet.
        type WeightInfo: WeightInfo;
    }

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(_);

    /// Set once by `initialize` (or genesis); never cleared.
    #[pallet::storage]
    pub type IsInitialized<T> = StorageValue<_, bool, ValueQuery>;

    /// Token name ("Wrapped Safex Cash")
    #[pallet::storage]
    pub type TokenName<T> = StorageValue<_, BoundedVec<u8, ConstU32<64>>, ValueQuery>;

    /// Token symbol ("WSFX")
    #[pallet::storage]
    pub type TokenSymbol<T> = StorageValue<_, BoundedVec<u8, ConstU32<16>>, ValueQuery>;

    #[pallet::storage]
    pub type Decimals<T> = StorageValue<_, u8, ValueQuery>;

    /// Total token supply. Always equals the sum of `Balances`.
    #[pallet::storage]
    pub type TotalSupply<T> = StorageValue<_, U256, ValueQuery>;

    /// Account balances
    #[pallet::storage]
    pub type Balances<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, U256, ValueQuery>;

    /// Allowances, keyed by (owner, spender).
    #[pallet::storage]
    pub type Allowances<T: Config> = StorageDoubleMap<
        _,
        Blake2_128Concat,
        T::AccountId,
        Blake2_128Concat,
        T::AccountId,
        U256,
        ValueQuery,
    >;

    /// Global pause switch for balance movements.
    #[pallet::storage]
    pub type IsPaused<T> = StorageValue<_, bool, ValueQuery>;

    /// Role members in enumeration order.
    #[pallet::storage]
    pub type RoleMembers<T: Config> = StorageMap<
        _,
        Blake2_128Concat,
        RoleId,
        BoundedVec<T::AccountId, T::MaxRoleMembers>,
        ValueQuery,
    >;

    /// Position of each member inside `RoleMembers`.
    #[pallet::storage]
    pub type RoleMemberIndex<T: Config> =
        StorageDoubleMap<_, Blake2_128Concat, RoleId, Blake2_128Concat, T::AccountId, u32>;

    /// Role that administers a role. Unset entries resolve to `DEFAULT_ADMIN_ROLE`.
    #[pallet::storage]
    pub type RoleAdmins<T> = StorageMap<_, Blake2_128Concat, RoleId, RoleId, ValueQuery>;

    /// Custody metadata of the backing reserve.
    #[pallet::storage]
    pub type Custody<T: Config> =
        StorageMap<_, Twox64Concat, CustodyField, BoundedVec<u8, T::MaxCustodyFieldLen>, ValueQuery>;

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        /// Tokens moved. `from` is `None` for mints and `to` is `None` for burns.
        Transfer { from: Option<T::AccountId>, to: Option<T::AccountId>, amount: U256 },
        /// New tokens minted
        Minted { to: T::AccountId, amount: U256 },
        /// Tokens burned from the holder's own balance
        Burned { from: T::AccountId, amount: U256 },
        /// Allowance of `spender` over `owner`'s tokens is now `amount`
        Approval { owner: T::AccountId, spender: T::AccountId, amount: U256 },
        /// `account` was granted `role` by `sender`
        RoleGranted { role: RoleId, account: T::AccountId, sender: T::AccountId },
        /// `account` lost `role`; `sender` is the account itself on renounce
        RoleRevoked { role: RoleId, account: T::AccountId, sender: T::AccountId },
        RoleAdminChanged { role: RoleId, previous_admin_role: RoleId, new_admin_role: RoleId },
        /// Balance movements paused by `account`
        Paused { account: T::AccountId },
        /// Balance movements resumed by `account`
        Unpaused { account: T::AccountId },
        /// Ledger initialized; `admin` holds the default admin, pauser, minter and burner roles
        Initialized { admin: T::AccountId },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// Ledger has not been initialized yet.
        NotInitialized,
        /// Ledger was already initialized.
        AlreadyInitialized,
        /// Caller is not a minter.
        NotMinter,
        /// Caller is not a burner.
        NotBurner,
        /// Must have pauser role to pause.
        NotPauser,
        /// Must have pauser role to unpause.
        NotUnpauser,
        /// Caller is not the proxy (lacks the default admin role).
        NotAdmin,
        /// Caller does not hold the admin role of the target role.
        MissingRoleAdmin,
        /// Account is the zero address.
        InvalidAddress,
        /// Amount is zero.
        ZeroAmount,
        InsufficientBalance,
        InsufficientAllowance,
        /// Allowance would drop below zero.
        AllowanceBelowZero,
        /// Token transfer while paused.
        TransferWhilePaused,
        /// Transfer to the token contract.
        TransferToSelf,
        AlreadyPaused,
        NotPaused,
        Overflow,
        /// Role already holds `MaxRoleMembers` members.
        TooManyRoleMembers,
        /// Custody value exceeds `MaxCustodyFieldLen`.
        CustodyFieldTooLong,
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
        /// One-shot setup. The caller becomes default admin, pauser, minter and burner.
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::initialize())]
        pub fn initialize(
            origin: OriginFor<T>,
            deposit_view_key: Vec<u8>,
            deposit_address: Vec<u8>,
            spend_view_key: Vec<u8>,
            spend_address: Vec<u8>,
            cold_view_key: Vec<u8>,
            cold_address: Vec<u8>,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::do_initialize(
                &who,
                [
                    deposit_view_key,
                    deposit_address,
                    spend_view_key,
                    spend_address,
                    cold_view_key,
                    cold_address,
                ],
            )
        }

        #[pallet::call_index(1)]
        #[pallet::weight(T::WeightInfo::mint())]
        pub fn mint(origin: OriginFor<T>, to: T::AccountId, amount: U256) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_initialized()?;
            ensure!(Self::has_role(MINTER_ROLE, &who), Error::<T>::NotMinter);
            Self::do_mint(&to, amount)
        }

        /// Burn `amount` from the caller's own balance.
        #[pallet::call_index(2)]
        #[pallet::weight(T::WeightInfo::burn())]
        pub fn burn(origin: OriginFor<T>, amount: U256) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_initialized()?;
            ensure!(Self::has_role(BURNER_ROLE, &who), Error::<T>::NotBurner);
            Self::do_burn(&who, amount)
        }

        #[pallet::call_index(3)]
        #[pallet::weight(T::WeightInfo::transfer())]
        pub fn transfer(origin: OriginFor<T>, to: T::AccountId, amount: U256) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_initialized()?;
            Self::do_transfer(&who, &to, amount)
        }

        /// Move `amount` from `owner` to `to`, spending the caller's allowance.
        #[pallet::call_index(4)]
        #[pallet::weight(T::WeightInfo::transfer_from())]
        pub fn transfer_from(
            origin: OriginFor<T>,
            owner: T::AccountId,
            to: T::AccountId,
            amount: U256,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_initialized()?;
            Self::do_transfer_from(&who, &owner, &to, amount)
        }

        #[pallet::call_index(5)]
        #[pallet::weight(T::WeightInfo::approve())]
        pub fn approve(origin: OriginFor<T>, spender: T::AccountId, amount: U256) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_initialized()?;
            Self::do_approve(&who, &spender, amount)
        }

        #[pallet::call_index(6)]
        #[pallet::weight(T::WeightInfo::approve())]
        pub fn increase_allowance(
            origin: OriginFor<T>,
            spender: T::AccountId,
            added_value: U256,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_initialized()?;
            let allowance = Allowances::<T>::get(&who, &spender)
                .checked_add(added_value)
                .ok_or(Error::<T>::Overflow)?;
            Self::do_approve(&who, &spender, allowance)
        }

        #[pallet::call_index(7)]
        #[pallet::weight(T::WeightInfo::approve())]
        pub fn decrease_allowance(
            origin: OriginFor<T>,
            spender: T::AccountId,
            subtracted_value: U256,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_initialized()?;
            let allowance = Allowances::<T>::get(&who, &spender)
                .checked_sub(subtracted_value)
                .ok_or(Error::<T>::AllowanceBelowZero)?;
            Self::do_approve(&who, &spender, allowance)
        }

        #[pallet::call_index(8)]
        #[pallet::weight(T::WeightInfo::grant_role())]
        pub fn add_minter(origin: OriginFor<T>, account: T::AccountId) -> DispatchResult {
            let who = Self::ensure_admin(origin)?;
            Self::do_grant_role(MINTER_ROLE, &account, &who).map(|_| ())
        }

        #[pallet::call_index(9)]
        #[pallet::weight(T::WeightInfo::revoke_role())]
        pub fn remove_minter(origin: OriginFor<T>, account: T::AccountId) -> DispatchResult {
            let who = Self::ensure_admin(origin)?;
            Self::ensure_not_zero(&account)?;
            Self::do_revoke_role(MINTER_ROLE, &account, &who);
            Ok(())
        }

        #[pallet::call_index(10)]
        #[pallet::weight(T::WeightInfo::grant_role())]
        pub fn add_burner(origin: OriginFor<T>, account: T::AccountId) -> DispatchResult {
            let who = Self::ensure_admin(origin)?;
            Self::do_grant_role(BURNER_ROLE, &account, &who).map(|_| ())
        }

        #[pallet::call_index(11)]
        #[pallet::weight(T::WeightInfo::revoke_role())]
        pub fn remove_burner(origin: OriginFor<T>, account: T::AccountId) -> DispatchResult {
            let who = Self::ensure_admin(origin)?;
            Self::ensure_not_zero(&account)?;
            Self::do_revoke_role(BURNER_ROLE, &account, &who);
            Ok(())
        }

        /// Grant `role` to `account`. Caller must hold the role's admin role.
        #[pallet::call_index(12)]
        #[pallet::weight(T::WeightInfo::grant_role())]
        pub fn grant_role(
            origin: OriginFor<T>,
            role: RoleId,
            account: T::AccountId,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_initialized()?;
            Self::ensure_role_admin(role, &who)?;
            Self::do_grant_role(role, &account, &who).map(|_| ())
        }

        /// Revoke `role` from `account`. Revoking from a non-member is a no-op.
        #[pallet::call_index(13)]
        #[pallet::weight(T::WeightInfo::revoke_role())]
        pub fn revoke_role(
            origin: OriginFor<T>,
            role: RoleId,
            account: T::AccountId,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_initialized()?;
            Self::ensure_role_admin(role, &who)?;
            Self::do_revoke_role(role, &account, &who);
            Ok(())
        }

        /// Drop the caller's own membership of `role`.
        #[pallet::call_index(14)]
        #[pallet::weight(T::WeightInfo::revoke_role())]
        pub fn renounce_role(origin: OriginFor<T>, role: RoleId) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_initialized()?;
            Self::do_revoke_role(role, &who, &who);
            Ok(())
        }

        #[pallet::call_index(15)]
        #[pallet::weight(T::WeightInfo::set_role_admin())]
        pub fn set_role_admin(
            origin: OriginFor<T>,
            role: RoleId,
            admin_role: RoleId,
        ) -> DispatchResult {
            T::AdminOrigin::ensure_origin(origin)?;
            Self::ensure_initialized()?;
            Self::do_set_role_admin(role, admin_role);
            Ok(())
        }

        #[pallet::call_index(16)]
        #[pallet::weight(T::WeightInfo::pause())]
        pub fn pause(origin: OriginFor<T>) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_initialized()?;
            Self::do_pause(&who)
        }

        #[pallet::call_index(17)]
        #[pallet::weight(T::WeightInfo::unpause())]
        pub fn unpause(origin: OriginFor<T>) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_initialized()?;
            Self::do_unpause(&who)
        }

        #[pallet::call_index(18)]
        #[pallet::weight(T::WeightInfo::set_custody_field())]
        pub fn set_deposit_view_key(origin: OriginFor<T>, value: Vec<u8>) -> DispatchResult {
            Self::ensure_admin(origin)?;
            Self::do_set_custody_field(CustodyField::DepositViewKey, value)
        }

        #[pallet::call_index(19)]
        #[pallet::weight(T::WeightInfo::set_custody_field())]
        pub fn set_deposit_public_address(origin: OriginFor<T>, value: Vec<u8>) -> DispatchResult {
            Self::ensure_admin(origin)?;
            Self::do_set_custody_field(CustodyField::DepositAddress, value)
        }

        #[pallet::call_index(20)]
        #[pallet::weight(T::WeightInfo::set_custody_field())]
        pub fn set_spend_view_key(origin: OriginFor<T>, value: Vec<u8>) -> DispatchResult {
            Self::ensure_admin(origin)?;
            Self::do_set_custody_field(CustodyField::SpendViewKey, value)
        }

        #[pallet::call_index(21)]
        #[pallet::weight(T::WeightInfo::set_custody_field())]
        pub fn set_spend_public_address(origin: OriginFor<T>, value: Vec<u8>) -> DispatchResult {
            Self::ensure_admin(origin)?;
            Self::do_set_custody_field(CustodyField::SpendAddress, value)
        }

        #[pallet::call_index(22)]
        #[pallet::weight(T::WeightInfo::set_custody_field())]
        pub fn set_cold_view_key(origin: OriginFor<T>, value: Vec<u8>) -> DispatchResult {
            Self::ensure_admin(origin)?;
            Self::do_set_custody_field(CustodyField::ColdViewKey, value)
        }

        #[pallet::call_index(23)]
        #[pallet::weight(T::WeightInfo::set_custody_field())]
        pub fn set_cold_public_address(origin: OriginFor<T>, value: Vec<u8>) -> DispatchResult {
            Self::ensure_admin(origin)?;
            Self::do_set_custody_field(CustodyField::ColdAddress, value)
        }
    }

    #[pallet::genesis_config]
    #[derive(frame_support::DefaultNoBound)]
    pub struct GenesisConfig<T: Config> {
        /// Initialize the ledger at genesis with this admin. Left `None`, the
        /// ledger waits for an `initialize` call instead.
        pub admin: Option<T::AccountId>,
        pub deposit_view_key: Vec<u8>,
        pub deposit_address: Vec<u8>,
        pub spend_view_key: Vec<u8>,
        pub spend_address: Vec<u8>,
        pub cold_view_key: Vec<u8>,
        pub cold_address: Vec<u8>,
        /// Accounts granted the minter role at genesis
        pub minters: Vec<T::AccountId>,
        /// Accounts granted the burner role at genesis
        pub burners: Vec<T::AccountId>,
    }

    #[pallet::genesis_build]
    impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
        fn build(&self) {
            let Some(ref admin) = self.admin else {
                assert!(
                    self.minters.is_empty() && self.burners.is_empty(),
                    "Genesis roles require an admin"
                );
                return;
            };

            Pallet::<T>::do_initialize(
                admin,
                [
                    self.deposit_view_key.clone(),
                    self.deposit_address.clone(),
                    self.spend_view_key.clone(),
                    self.spend_address.clone(),
                    self.cold_view_key.clone(),
                    self.cold_address.clone(),
                ],
            )
            .expect("Genesis initialization failed");

            for minter in &self.minters {
                Pallet::<T>::do_grant_role(MINTER_ROLE, minter, admin)
                    .expect("Invalid genesis minter");
            }
            for burner in &self.burners {
                Pallet::<T>::do_grant_role(BURNER_ROLE, burner, admin)
                    .expect("Invalid genesis burner");
            }
        }
    }
}

impl<T: Config> Error<T> {
    /// Human-readable revert reason for the error.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::NotInitialized => "WSFX: not initialized",
            Self::AlreadyInitialized => "Initializable: contract is already initialized",
            Self::NotMinter => "Caller is not a minter",
            Self::NotBurner => "Caller is not a burner",
            Self::NotPauser => "Must have pauser role to pause",
            Self::NotUnpauser => "Must have pauser role to unpause",
            Self::NotAdmin => "Caller is not the proxy",
            Self::MissingRoleAdmin => "AccessControl: sender must be an admin",
            Self::InvalidAddress => "Account is the zero address",
            Self::ZeroAmount => "WSFX: amount is zero",
            Self::InsufficientBalance => "ERC20: amount exceeds balance",
            Self::InsufficientAllowance => "ERC20: transfer amount exceeds allowance",
            Self::AllowanceBelowZero => "ERC20: decreased allowance below zero",
            Self::TransferWhilePaused => "Token transfer while paused",
            Self::TransferToSelf => "Transfer to the token contract",
            Self::AlreadyPaused => "Pausable: paused",
            Self::NotPaused => "Pausable: not paused",
            Self::Overflow => "WSFX: arithmetic overflow",
            Self::TooManyRoleMembers => "AccessControl: role member limit reached",
            Self::CustodyFieldTooLong => "WSFX: custody field too long",
            _ => "",
        }
    }
}

impl<T: Config> Pallet<T> {
    /// Run the one-shot setup for `admin` with custody values in
    /// [`CustodyField::ALL`] order.
    pub(crate) fn do_initialize(admin: &T::AccountId, custody: [Vec<u8>; 6]) -> DispatchResult {
        ensure!(!IsInitialized::<T>::get(), Error::<T>::AlreadyInitialized);
        Self::ensure_not_zero(admin)?;

        let mut bounded = Vec::with_capacity(custody.len());
        for (field, value) in CustodyField::ALL.into_iter().zip(custody) {
            bounded.push((field, Self::bounded_custody_value(value)?));
        }
        for (field, value) in bounded {
            Custody::<T>::insert(field, value);
        }

        TokenName::<T>::put(BoundedVec::truncate_from(TOKEN_NAME.to_vec()));
        TokenSymbol::<T>::put(BoundedVec::truncate_from(TOKEN_SYMBOL.to_vec()));
        Decimals::<T>::put(TOKEN_DECIMALS);
        IsPaused::<T>::put(false);

        Self::do_grant_role(DEFAULT_ADMIN_ROLE, admin, admin)?;
        Self::do_grant_role(PAUSER_ROLE, admin, admin)?;
        Self::do_grant_role(MINTER_ROLE, admin, admin)?;
        Self::do_grant_role(BURNER_ROLE, admin, admin)?;

        IsInitialized::<T>::put(true);
        Self::deposit_event(Event::Initialized { admin: admin.clone() });
        log::info!(target: LOG_TARGET, "Ledger initialized, admin {admin:?}");
        Ok(())
    }

    pub fn is_initialized() -> bool {
        IsInitialized::<T>::get()
    }

    pub(crate) fn ensure_initialized() -> DispatchResult {
        ensure!(IsInitialized::<T>::get(), Error::<T>::NotInitialized);
        Ok(())
    }

    /// Signed caller holding the default admin role.
    pub(crate) fn ensure_admin(origin: OriginFor<T>) -> Result<T::AccountId, DispatchError> {
        let who = ensure_signed(origin)?;
        Self::ensure_initialized()?;
        ensure!(Self::has_role(DEFAULT_ADMIN_ROLE, &who), Error::<T>::NotAdmin);
        Ok(who)
    }

    /// Whether `who` encodes to all zero bytes.
    pub fn is_zero_account(who: &T::AccountId) -> bool {
        who.using_encoded(|bytes| bytes.iter().all(|b| *b == 0))
    }

    pub(crate) fn ensure_not_zero(who: &T::AccountId) -> DispatchResult {
        ensure!(!Self::is_zero_account(who), Error::<T>::InvalidAddress);
        Ok(())
    }

    /// Check the supply and role bookkeeping invariants.
    #[cfg(any(feature = "try-runtime", test))]
    pub fn do_try_state() -> Result<(), DispatchError> {
        let sum = Balances::<T>::iter_values().try_fold(U256::zero(), |acc, balance| {
            acc.checked_add(balance).ok_or("balance sum overflows")
        })?;
        ensure!(sum == TotalSupply::<T>::get(), "total supply differs from sum of balances");

        for (role, members) in RoleMembers::<T>::iter() {
            for (index, member) in members.iter().enumerate() {
                ensure!(
                    RoleMemberIndex::<T>::get(role, member) == Some(index as u32),
                    "role member index out of sync"
                );
            }
        }
        for (role, member, index) in RoleMemberIndex::<T>::iter() {
            ensure!(
                RoleMembers::<T>::get(role).get(index as usize) == Some(&member),
                "dangling role member index"
            );
        }
        Ok(())
    }
}
