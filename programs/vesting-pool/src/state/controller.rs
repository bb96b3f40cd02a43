use anchor_lang::prelude::*;

use crate::error::VestingError;
use crate::state::Participant;
use crate::utils::vesting;

/// Singleton controller PDA: fixed configuration plus the current round.
#[account]
#[derive(Default, Debug)]
pub struct VestingController {
    /// Owner allowed to start, stop and sweep. Set once at initialization.
    pub admin: Pubkey,
    /// Token mint held by the vault.
    pub mint: Pubkey,
    pub bump: u8,
    pub vault_bump: u8,
    /// Whether a round is open.
    pub active: bool,
    /// Bumped on every start; participant records from older rounds are stale.
    pub round_id: u64,
    /// Tokens pulled into the vault when the round started.
    pub total_deposited: u64,
    pub period_seconds: u64,
    pub per_user_allotment: u64,
    /// floor(total_deposited / per_user_allotment).
    pub max_participants: u64,
    pub enrolled_count: u64,
    /// Round start (Unix seconds, UTC). Vesting origin for every participant.
    pub start_ts: i64,
    /// Sum of `claimed` across the round's participants.
    pub released_supply: u64,
}

/// A participant's position at a given instant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClaimQuote {
    /// Cumulative amount unlocked so far.
    pub vested: u64,
    /// Cumulative amount already transferred.
    pub claimed: u64,
    /// `vested - claimed`.
    pub claimable: u64,
}

impl VestingController {
    pub const SIZE: usize =
        32 + // admin
        32 + // mint
        1 +  // bump
        1 +  // vault_bump
        1 +  // active
        8 +  // round_id
        8 +  // total_deposited
        8 +  // period_seconds
        8 +  // per_user_allotment
        8 +  // max_participants
        8 +  // enrolled_count
        8 +  // start_ts
        8;   // released_supply

    /// Validate the mint handed to `initialize` against the mint account supplied with it.
    pub fn check_token_mint(
        token_mint: &Pubkey,
        mint_account: &Pubkey,
    ) -> std::result::Result<(), VestingError> {
        if *token_mint == Pubkey::default() {
            return Err(VestingError::ZeroTokenAddress);
        }
        if token_mint != mint_account {
            return Err(VestingError::InvalidTokenMint);
        }
        Ok(())
    }

    pub fn configure(
        &mut self,
        admin: Pubkey,
        mint: Pubkey,
        bump: u8,
        vault_bump: u8,
    ) -> std::result::Result<(), VestingError> {
        if mint == Pubkey::default() {
            return Err(VestingError::ZeroTokenAddress);
        }
        *self = VestingController {
            admin,
            mint,
            bump,
            vault_bump,
            ..Default::default()
        };
        Ok(())
    }

    pub fn require_admin(&self, caller: &Pubkey) -> std::result::Result<(), VestingError> {
        if *caller != self.admin {
            return Err(VestingError::NotOwner);
        }
        Ok(())
    }

    /// Open a fresh round. Restarting an active round discards its enrollment.
    pub fn start_round(
        &mut self,
        caller: &Pubkey,
        total_deposited: u64,
        period_days: u64,
        per_user_allotment: u64,
        now_ts: i64,
    ) -> std::result::Result<(), VestingError> {
        self.require_admin(caller)?;
        if now_ts < 0 {
            return Err(VestingError::InvalidTimestamp);
        }
        let period_seconds = vesting::period_seconds(period_days)?;
        let max_participants = vesting::max_participants(total_deposited, per_user_allotment)?;
        let round_id = self
            .round_id
            .checked_add(1)
            .ok_or(VestingError::MathOverflow)?;

        self.active = true;
        self.round_id = round_id;
        self.total_deposited = total_deposited;
        self.period_seconds = period_seconds;
        self.per_user_allotment = per_user_allotment;
        self.max_participants = max_participants;
        self.enrolled_count = 0;
        self.start_ts = now_ts;
        self.released_supply = 0;
        Ok(())
    }

    /// Close the round and clear its enrollment. Custodied tokens stay in the vault.
    pub fn stop_round(&mut self, caller: &Pubkey) -> std::result::Result<(), VestingError> {
        self.require_admin(caller)?;
        self.active = false;
        self.total_deposited = 0;
        self.period_seconds = 0;
        self.per_user_allotment = 0;
        self.max_participants = 0;
        self.enrolled_count = 0;
        self.start_ts = 0;
        self.released_supply = 0;
        Ok(())
    }

    /// Custodied tokens may only leave through a sweep while no round is open.
    pub fn require_sweepable(&self, caller: &Pubkey) -> std::result::Result<(), VestingError> {
        self.require_admin(caller)?;
        if self.active {
            return Err(VestingError::VestingStillActive);
        }
        Ok(())
    }

    pub fn initialized(&self) -> bool {
        self.active
    }

    pub fn max_users(&self) -> u64 {
        self.max_participants
    }

    pub fn users(&self) -> u64 {
        self.enrolled_count
    }

    pub fn join(
        &mut self,
        wallet: &Pubkey,
        record: &mut Participant,
        bump: u8,
    ) -> std::result::Result<(), VestingError> {
        if !self.active {
            return Err(VestingError::VestingNotStarted);
        }
        if record.is_enrolled(wallet, self.round_id) {
            return Err(VestingError::AlreadyJoined);
        }
        if self.enrolled_count >= self.max_participants {
            return Err(VestingError::CapacityExhausted);
        }
        self.enrolled_count = self
            .enrolled_count
            .checked_add(1)
            .ok_or(VestingError::MathOverflow)?;
        record.enroll(*wallet, self.round_id, bump);
        Ok(())
    }

    /// Cumulative per-user entitlement at `now_ts`, measured from the round start.
    pub fn vested_at(&self, now_ts: i64) -> std::result::Result<u64, VestingError> {
        let elapsed = vesting::elapsed_seconds(now_ts, self.start_ts, self.period_seconds);
        vesting::vested_amount(self.per_user_allotment, elapsed, self.period_seconds)
    }

    /// Read-only position of `wallet`. Fails once the allotment is fully paid out.
    pub fn quote(
        &self,
        wallet: &Pubkey,
        record: Option<&Participant>,
        now_ts: i64,
    ) -> std::result::Result<ClaimQuote, VestingError> {
        if !self.active {
            return Err(VestingError::VestingNotStarted);
        }
        let record = record
            .filter(|r| r.is_enrolled(wallet, self.round_id))
            .ok_or(VestingError::NotJoined)?;
        if record.claimed >= self.per_user_allotment {
            return Err(VestingError::AllTokensReceived);
        }

        let vested = self.vested_at(now_ts)?;
        let claimable = vested
            .checked_sub(record.claimed)
            .ok_or(VestingError::MathOverflow)?;
        Ok(ClaimQuote {
            vested,
            claimed: record.claimed,
            claimable,
        })
    }

    /// Book a claim: the record's `claimed` catches up with the vested total.
    /// The caller must transfer `claimable` out of the vault afterwards; zero is a valid no-op.
    pub fn claim(
        &mut self,
        wallet: &Pubkey,
        record: Option<&mut Participant>,
        now_ts: i64,
    ) -> std::result::Result<ClaimQuote, VestingError> {
        let quote = self.quote(wallet, record.as_deref(), now_ts)?;
        let record = record.ok_or(VestingError::NotJoined)?;

        self.released_supply = self
            .released_supply
            .checked_add(quote.claimable)
            .ok_or(VestingError::MathOverflow)?;
        record.claimed = quote.vested;
        Ok(quote)
    }
}
