use anchor_lang::prelude::*;

use crate::constants::CONTROLLER_SEED;
use crate::state::VestingController;

/// Whether a round is currently open.
pub fn initialized(ctx: Context<RoundView>) -> Result<bool> {
    Ok(ctx.accounts.controller.initialized())
}

/// Participant capacity of the current round.
pub fn max_users(ctx: Context<RoundView>) -> Result<u64> {
    Ok(ctx.accounts.controller.max_users())
}

/// Participants enrolled in the current round.
pub fn users(ctx: Context<RoundView>) -> Result<u64> {
    Ok(ctx.accounts.controller.users())
}

#[derive(Accounts)]
pub struct RoundView<'info> {
    #[account(seeds = [CONTROLLER_SEED], bump = controller.bump)]
    pub controller: Account<'info, VestingController>,
}
