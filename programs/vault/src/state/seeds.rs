pub const VAULT_SEED: &[u8] = b"vault";
pub const VAULT_STATE_SEED: &[u8] = b"state";
