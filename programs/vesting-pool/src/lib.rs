use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;

use instructions::*;

declare_id!("72ZoPUidB8sLHA8qAMtxG4iSEjNExYFiTt2okjcm3beM");

#[program]
pub mod vesting_pool {
    use super::*;

    /// Create the controller and its vault. The signer becomes the permanent admin.
    pub fn initialize(ctx: Context<Initialize>, token_mint: Pubkey) -> Result<()> {
        instructions::initialize::initialize(ctx, token_mint)
    }

    /// Pull `total_deposited` from the admin and open a round of `period_days`.
    pub fn start_vesting(
        ctx: Context<StartVesting>,
        total_deposited: u64,
        period_days: u64,
        per_user_allotment: u64,
    ) -> Result<()> {
        instructions::start_vesting::start_vesting(
            ctx,
            total_deposited,
            period_days,
            per_user_allotment,
        )
    }

    pub fn stop_vesting(ctx: Context<StopVesting>) -> Result<()> {
        instructions::stop_vesting::stop_vesting(ctx)
    }

    pub fn join(ctx: Context<Join>) -> Result<()> {
        instructions::join::join(ctx)
    }

    pub fn claim_reward(ctx: Context<ClaimReward>) -> Result<()> {
        instructions::claim_reward::claim_reward(ctx)
    }

    pub fn show_reward_to_claim(ctx: Context<ShowRewardToClaim>) -> Result<u64> {
        instructions::show_reward_to_claim::show_reward_to_claim(ctx)
    }

    pub fn initialized(ctx: Context<RoundView>) -> Result<bool> {
        instructions::round_views::initialized(ctx)
    }

    pub fn max_users(ctx: Context<RoundView>) -> Result<u64> {
        instructions::round_views::max_users(ctx)
    }

    pub fn users(ctx: Context<RoundView>) -> Result<u64> {
        instructions::round_views::users(ctx)
    }

    /// Return custodied tokens to the admin while no round is open.
    pub fn sweep_inactive_balance(ctx: Context<SweepInactiveBalance>) -> Result<()> {
        instructions::sweep_inactive_balance::sweep_inactive_balance(ctx)
    }
}
