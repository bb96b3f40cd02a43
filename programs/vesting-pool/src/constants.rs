//! Program-wide constants.

/// Seconds per day (UTC). Round periods are configured in whole days.
pub const SECONDS_PER_DAY: u64 = 86_400;

/// Seed of the singleton controller PDA.
pub const CONTROLLER_SEED: &[u8] = b"controller";

/// Seed of the vault token account PDA, combined with the controller key.
pub const VAULT_SEED: &[u8] = b"vault";

/// Seed of per-wallet participant records, combined with controller and wallet keys.
pub const PARTICIPANT_SEED: &[u8] = b"participant";
