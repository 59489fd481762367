/// Bytes of payload carried by the vault account; it only ever holds lamports.
pub const VAULT_DATA_LEN: usize = 0;

/// Anchor account discriminator length prefixed to every program-owned account.
pub const DISCRIMINATOR_LEN: usize = 8;
