//! Identifiers and fixed metadata shared by the ledger.

use codec::{Decode, Encode, MaxEncodedLen};
use scale_info::TypeInfo;

/// Token name written at initialization.
pub const TOKEN_NAME: &[u8] = b"Wrapped Safex Cash";

/// Token symbol written at initialization.
pub const TOKEN_SYMBOL: &[u8] = b"WSFX";

/// Decimal places of one whole token.
pub const TOKEN_DECIMALS: u8 = 18;

/// Opaque 32-byte role identifier.
pub type RoleId = [u8; 32];

/// Builds a role identifier from its ASCII name, right-padded with zeros.
///
/// Names longer than 32 bytes are truncated.
pub const fn role_id(name: &[u8]) -> RoleId {
    let mut id = [0u8; 32];
    let mut i = 0;
    while i < name.len() && i < 32 {
        id[i] = name[i];
        i += 1;
    }
    id
}

/// Root role. Administers every role that has no other admin configured,
/// including itself.
pub const DEFAULT_ADMIN_ROLE: RoleId = [0u8; 32];

/// Holders may mint new tokens to any account.
pub const MINTER_ROLE: RoleId = role_id(b"MINTER_ROLE");

/// Holders may burn tokens from their own balance.
pub const BURNER_ROLE: RoleId = role_id(b"BURNER_ROLE");

/// Holders may pause and unpause balance movements.
pub const PAUSER_ROLE: RoleId = role_id(b"PAUSER_ROLE");

/// The six custody pointers describing the off-chain reserve that backs
/// issued balances.
#[derive(Clone, Copy, Encode, Decode, MaxEncodedLen, TypeInfo, PartialEq, Eq, Debug)]
pub enum CustodyField {
    /// View key of the reserve deposit wallet.
    DepositViewKey,
    /// Public address users deposit the reference asset to.
    DepositAddress,
    /// View key of the spend (hot) wallet.
    SpendViewKey,
    /// Public address of the spend (hot) wallet.
    SpendAddress,
    /// View key of the cold storage wallet.
    ColdViewKey,
    /// Public address of the cold storage wallet.
    ColdAddress,
}

impl CustodyField {
    /// Every field, in initialization order.
    pub const ALL: [CustodyField; 6] = [
        CustodyField::DepositViewKey,
        CustodyField::DepositAddress,
        CustodyField::SpendViewKey,
        CustodyField::SpendAddress,
        CustodyField::ColdViewKey,
        CustodyField::ColdAddress,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CustodyField::DepositViewKey => "deposit_view_key",
            CustodyField::DepositAddress => "deposit_address",
            CustodyField::SpendViewKey => "spend_view_key",
            CustodyField::SpendAddress => "spend_address",
            CustodyField::ColdViewKey => "cold_view_key",
            CustodyField::ColdAddress => "cold_address",
        }
    }
}
