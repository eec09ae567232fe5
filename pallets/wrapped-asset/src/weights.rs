//! Weights for pallet-wrapped-asset.
//!
//! Hand-estimated from the storage accesses of each call; regenerate with the
//! `runtime-benchmarks` feature before production use.

#![allow(unused_parens)]
#![allow(unused_imports)]

use core::marker::PhantomData;
use frame_support::{
    traits::Get,
    weights::{constants::RocksDbWeight, Weight},
};

/// Weight functions needed for pallet-wrapped-asset.
pub trait WeightInfo {
    fn initialize() -> Weight;
    fn mint() -> Weight;
    fn burn() -> Weight;
    fn transfer() -> Weight;
    fn transfer_from() -> Weight;
    fn approve() -> Weight;
    fn grant_role() -> Weight;
    fn revoke_role() -> Weight;
    fn set_role_admin() -> Weight;
    fn pause() -> Weight;
    fn unpause() -> Weight;
    fn set_custody_field() -> Weight;
}

/// Weights for pallet-wrapped-asset using the runtime's configured database weights.
pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: frame_system::Config> WeightInfo for SubstrateWeight<T> {
    // Reads: IsInitialized, RoleMemberIndex x4, RoleMembers x4
    // Writes: Custody x6, TokenName, TokenSymbol, Decimals, IsPaused,
    //         RoleMembers x4, RoleMemberIndex x4, IsInitialized
    fn initialize() -> Weight {
        Weight::from_parts(75_000_000, 4_000)
            .saturating_add(T::DbWeight::get().reads(9_u64))
            .saturating_add(T::DbWeight::get().writes(19_u64))
    }
    // Reads: IsInitialized, RoleMemberIndex, IsPaused, TotalSupply, Balances
    // Writes: TotalSupply, Balances
    fn mint() -> Weight {
        Weight::from_parts(25_000_000, 3_593)
            .saturating_add(T::DbWeight::get().reads(5_u64))
            .saturating_add(T::DbWeight::get().writes(2_u64))
    }
    // Reads: IsInitialized, RoleMemberIndex, IsPaused, Balances, TotalSupply
    // Writes: Balances, TotalSupply
    fn burn() -> Weight {
        Weight::from_parts(25_000_000, 3_593)
            .saturating_add(T::DbWeight::get().reads(5_u64))
            .saturating_add(T::DbWeight::get().writes(2_u64))
    }
    // Reads: IsInitialized, IsPaused, Balances x2
    // Writes: Balances x2
    fn transfer() -> Weight {
        Weight::from_parts(28_000_000, 6_196)
            .saturating_add(T::DbWeight::get().reads(4_u64))
            .saturating_add(T::DbWeight::get().writes(2_u64))
    }
    // Reads: IsInitialized, IsPaused, Balances x2, Allowances
    // Writes: Balances x2, Allowances
    fn transfer_from() -> Weight {
        Weight::from_parts(35_000_000, 6_196)
            .saturating_add(T::DbWeight::get().reads(5_u64))
            .saturating_add(T::DbWeight::get().writes(3_u64))
    }
    // Reads: IsInitialized, Allowances
    // Writes: Allowances
    fn approve() -> Weight {
        Weight::from_parts(18_000_000, 3_593)
            .saturating_add(T::DbWeight::get().reads(2_u64))
            .saturating_add(T::DbWeight::get().writes(1_u64))
    }
    // Reads: IsInitialized, RoleAdmins, RoleMemberIndex x2, RoleMembers
    // Writes: RoleMembers, RoleMemberIndex
    fn grant_role() -> Weight {
        Weight::from_parts(22_000_000, 4_000)
            .saturating_add(T::DbWeight::get().reads(5_u64))
            .saturating_add(T::DbWeight::get().writes(2_u64))
    }
    // Reads: IsInitialized, RoleAdmins, RoleMemberIndex x2, RoleMembers
    // Writes: RoleMembers, RoleMemberIndex x2
    fn revoke_role() -> Weight {
        Weight::from_parts(24_000_000, 4_000)
            .saturating_add(T::DbWeight::get().reads(5_u64))
            .saturating_add(T::DbWeight::get().writes(3_u64))
    }
    // Reads: IsInitialized, RoleAdmins
    // Writes: RoleAdmins
    fn set_role_admin() -> Weight {
        Weight::from_parts(12_000_000, 1_500)
            .saturating_add(T::DbWeight::get().reads(2_u64))
            .saturating_add(T::DbWeight::get().writes(1_u64))
    }
    // Reads: IsInitialized, RoleMemberIndex, IsPaused
    // Writes: IsPaused
    fn pause() -> Weight {
        Weight::from_parts(14_000_000, 1_500)
            .saturating_add(T::DbWeight::get().reads(3_u64))
            .saturating_add(T::DbWeight::get().writes(1_u64))
    }
    // Reads: IsInitialized, RoleMemberIndex, IsPaused
    // Writes: IsPaused
    fn unpause() -> Weight {
        Weight::from_parts(14_000_000, 1_500)
            .saturating_add(T::DbWeight::get().reads(3_u64))
            .saturating_add(T::DbWeight::get().writes(1_u64))
    }
    // Reads: IsInitialized, RoleMemberIndex
    // Writes: Custody
    fn set_custody_field() -> Weight {
        Weight::from_parts(15_000_000, 1_500)
            .saturating_add(T::DbWeight::get().reads(2_u64))
            .saturating_add(T::DbWeight::get().writes(1_u64))
    }
}

// For backwards compatibility and tests
impl WeightInfo for () {
    fn initialize() -> Weight {
        Weight::from_parts(75_000_000, 4_000)
            .saturating_add(RocksDbWeight::get().reads(9_u64))
            .saturating_add(RocksDbWeight::get().writes(19_u64))
    }
    fn mint() -> Weight {
        Weight::from_parts(25_000_000, 3_593)
            .saturating_add(RocksDbWeight::get().reads(5_u64))
            .saturating_add(RocksDbWeight::get().writes(2_u64))
    }
    fn burn() -> Weight {
        Weight::from_parts(25_000_000, 3_593)
            .saturating_add(RocksDbWeight::get().reads(5_u64))
            .saturating_add(RocksDbWeight::get().writes(2_u64))
    }
    fn transfer() -> Weight {
        Weight::from_parts(28_000_000, 6_196)
            .saturating_add(RocksDbWeight::get().reads(4_u64))
            .saturating_add(RocksDbWeight::get().writes(2_u64))
    }
    fn transfer_from() -> Weight {
        Weight::from_parts(35_000_000, 6_196)
            .saturating_add(RocksDbWeight::get().reads(5_u64))
            .saturating_add(RocksDbWeight::get().writes(3_u64))
    }
    fn approve() -> Weight {
        Weight::from_parts(18_000_000, 3_593)
            .saturating_add(RocksDbWeight::get().reads(2_u64))
            .saturating_add(RocksDbWeight::get().writes(1_u64))
    }
    fn grant_role() -> Weight {
        Weight::from_parts(22_000_000, 4_000)
            .saturating_add(RocksDbWeight::get().reads(5_u64))
            .saturating_add(RocksDbWeight::get().writes(2_u64))
    }
    fn revoke_role() -> Weight {
        Weight::from_parts(24_000_000, 4_000)
            .saturating_add(RocksDbWeight::get().reads(5_u64))
            .saturating_add(RocksDbWeight::get().writes(3_u64))
    }
    fn set_role_admin() -> Weight {
        Weight::from_parts(12_000_000, 1_500)
            .saturating_add(RocksDbWeight::get().reads(2_u64))
            .saturating_add(RocksDbWeight::get().writes(1_u64))
    }
    fn pause() -> Weight {
        Weight::from_parts(14_000_000, 1_500)
            .saturating_add(RocksDbWeight::get().reads(3_u64))
            .saturating_add(RocksDbWeight::get().writes(1_u64))
    }
    fn unpause() -> Weight {
        Weight::from_parts(14_000_000, 1_500)
            .saturating_add(RocksDbWeight::get().reads(3_u64))
            .saturating_add(RocksDbWeight::get().writes(1_u64))
    }
    fn set_custody_field() -> Weight {
        Weight::from_parts(15_000_000, 1_500)
            .saturating_add(RocksDbWeight::get().reads(2_u64))
            .saturating_add(RocksDbWeight::get().writes(1_u64))
    }
}
