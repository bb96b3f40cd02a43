use anchor_lang::prelude::*;

use crate::constants::{CONTROLLER_SEED, PARTICIPANT_SEED};
use crate::state::{Participant, VestingController};

/// Claimable increment for the signer, returned through return data and emitted.
pub fn show_reward_to_claim(ctx: Context<ShowRewardToClaim>) -> Result<u64> {
    let wallet = ctx.accounts.participant.key();
    let now = Clock::get()?.unix_timestamp;

    let record = Participant::load(&ctx.accounts.participant_record.to_account_info())?;
    let st = &ctx.accounts.controller;
    let quote = st.quote(&wallet, record.as_ref(), now)?;

    emit!(RewardQuote {
        wallet,
        round_id: st.round_id,
        vested_amount: quote.vested,
        claimed_amount: quote.claimed,
        claimable: quote.claimable,
    });

    Ok(quote.claimable)
}

#[derive(Accounts)]
pub struct ShowRewardToClaim<'info> {
    #[account(seeds = [CONTROLLER_SEED], bump = controller.bump)]
    pub controller: Account<'info, VestingController>,

    /// CHECK: may be uninitialized; decoded by `Participant::load`.
    #[account(
        seeds = [PARTICIPANT_SEED, controller.key().as_ref(), participant.key().as_ref()],
        bump
    )]
    pub participant_record: UncheckedAccount<'info>,

    pub participant: Signer<'info>,
}

#[event]
pub struct RewardQuote {
    pub wallet: Pubkey,
    pub round_id: u64,
    pub vested_amount: u64,
    pub claimed_amount: u64,
    pub claimable: u64,
}
