//! Benchmarking setup for pallet-wrapped-asset

use super::*;

#[allow(unused)]
use crate::Pallet as WrappedAsset;
use frame_benchmarking::v2::*;
use frame_system::RawOrigin;

/// Custody values at the maximum allowed length.
fn custody_values<T: Config>() -> [Vec<u8>; 6] {
    let value = || {
        sp_std::iter::repeat(7u8)
            .take(T::MaxCustodyFieldLen::get() as usize)
            .collect::<Vec<u8>>()
    };
    [value(), value(), value(), value(), value(), value()]
}

/// Initialize the ledger with the whitelisted caller as admin.
fn setup_admin<T: Config>() -> T::AccountId {
    let admin: T::AccountId = whitelisted_caller();
    IsInitialized::<T>::kill();
    Pallet::<T>::do_initialize(&admin, custody_values::<T>()).expect("Initialize ledger");
    admin
}

fn amount() -> U256 {
    U256::from(1_000_000u64)
}

#[benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn initialize() {
        IsInitialized::<T>::kill();
        let caller: T::AccountId = whitelisted_caller();
        let [dvk, da, svk, sa, cvk, ca] = custody_values::<T>();

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), dvk, da, svk, sa, cvk, ca);

        assert!(Pallet::<T>::has_role(DEFAULT_ADMIN_ROLE, &caller));
        assert!(Pallet::<T>::has_role(BURNER_ROLE, &caller));
        assert!(Pallet::<T>::is_initialized());
    }

    #[benchmark]
    fn mint() {
        let admin = setup_admin::<T>();
        let recipient: T::AccountId = account("recipient", 0, 0);

        #[extrinsic_call]
        _(RawOrigin::Signed(admin), recipient.clone(), amount());

        assert_eq!(Balances::<T>::get(&recipient), amount());
    }

    #[benchmark]
    fn burn() {
        let admin = setup_admin::<T>();
        Pallet::<T>::do_mint(&admin, amount() * 2u64).expect("Fund burner");

        #[extrinsic_call]
        _(RawOrigin::Signed(admin.clone()), amount());

        assert_eq!(Balances::<T>::get(&admin), amount());
    }

    #[benchmark]
    fn transfer() {
        let caller = setup_admin::<T>();
        let recipient: T::AccountId = account("recipient", 0, 0);
        Pallet::<T>::do_mint(&caller, amount() * 10u64).expect("Fund caller");

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), recipient.clone(), amount());

        assert_eq!(Balances::<T>::get(&recipient), amount());
    }

    #[benchmark]
    fn transfer_from() {
        let spender = setup_admin::<T>();
        let owner: T::AccountId = account("owner", 0, 0);
        let recipient: T::AccountId = account("recipient", 0, 0);
        Pallet::<T>::do_mint(&owner, amount() * 10u64).expect("Fund owner");
        Pallet::<T>::do_approve(&owner, &spender, amount() * 2u64).expect("Approve spender");

        #[extrinsic_call]
        _(RawOrigin::Signed(spender.clone()), owner.clone(), recipient.clone(), amount());

        assert_eq!(Balances::<T>::get(&recipient), amount());
        assert_eq!(Allowances::<T>::get(&owner, &spender), amount());
    }

    #[benchmark]
    fn approve() {
        let owner = setup_admin::<T>();
        let spender: T::AccountId = account("spender", 0, 0);

        #[extrinsic_call]
        _(RawOrigin::Signed(owner.clone()), spender.clone(), amount());

        assert_eq!(Allowances::<T>::get(&owner, &spender), amount());
    }

    #[benchmark]
    fn grant_role() {
        let admin = setup_admin::<T>();
        let account: T::AccountId = account("member", 0, 0);

        #[extrinsic_call]
        _(RawOrigin::Signed(admin), MINTER_ROLE, account.clone());

        assert!(Pallet::<T>::has_role(MINTER_ROLE, &account));
    }

    #[benchmark]
    fn revoke_role() {
        let admin = setup_admin::<T>();
        let first: T::AccountId = account("member", 0, 0);
        let second: T::AccountId = account("member", 1, 0);
        Pallet::<T>::do_grant_role(MINTER_ROLE, &first, &admin).expect("Grant first");
        Pallet::<T>::do_grant_role(MINTER_ROLE, &second, &admin).expect("Grant second");

        // Revoking the first member moves the second into its slot
        #[extrinsic_call]
        _(RawOrigin::Signed(admin), MINTER_ROLE, first.clone());

        assert!(!Pallet::<T>::has_role(MINTER_ROLE, &first));
        assert_eq!(Pallet::<T>::role_member(MINTER_ROLE, 1), Some(second));
    }

    #[benchmark]
    fn set_role_admin() {
        setup_admin::<T>();
        let origin = T::AdminOrigin::try_successful_origin().expect("Admin origin");

        #[extrinsic_call]
        _(origin as T::RuntimeOrigin, MINTER_ROLE, PAUSER_ROLE);

        assert_eq!(Pallet::<T>::role_admin(MINTER_ROLE), PAUSER_ROLE);
    }

    #[benchmark]
    fn pause() {
        let admin = setup_admin::<T>();

        #[extrinsic_call]
        _(RawOrigin::Signed(admin));

        assert!(IsPaused::<T>::get());
    }

    #[benchmark]
    fn unpause() {
        let admin = setup_admin::<T>();
        IsPaused::<T>::put(true);

        #[extrinsic_call]
        _(RawOrigin::Signed(admin));

        assert!(!IsPaused::<T>::get());
    }

    #[benchmark]
    fn set_custody_field() {
        let admin = setup_admin::<T>();
        let [value, ..] = custody_values::<T>();

        #[extrinsic_call]
        set_deposit_view_key(RawOrigin::Signed(admin), value.clone());

        assert_eq!(Pallet::<T>::deposit_view_key(), value);
    }

    impl_benchmark_test_suite!(WrappedAsset, crate::mock::new_uninitialized_ext(), crate::mock::Test);
}
