use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::{CONTROLLER_SEED, VAULT_SEED};
use crate::error::VestingError;
use crate::state::VestingController;

pub fn start_vesting(
    ctx: Context<StartVesting>,
    total_deposited: u64,
    period_days: u64,
    per_user_allotment: u64,
) -> Result<()> {
    let admin = ctx.accounts.admin.key();
    let st = &mut ctx.accounts.controller;
    st.require_admin(&admin)?;

    require_keys_eq!(
        ctx.accounts.admin_token_account.mint,
        st.mint,
        VestingError::InvalidTokenMint
    );
    require_keys_eq!(
        ctx.accounts.admin_token_account.owner,
        admin,
        VestingError::InvalidTokenAccount
    );
    require!(
        ctx.accounts.admin_token_account.amount >= total_deposited,
        VestingError::InsufficientBalance
    );

    let now = Clock::get()?.unix_timestamp;
    st.start_round(&admin, total_deposited, period_days, per_user_allotment, now)?;

    let event = VestingStarted {
        round_id: st.round_id,
        total_deposited,
        period_seconds: st.period_seconds,
        per_user_allotment,
        max_participants: st.max_participants,
        start_ts: st.start_ts,
    };

    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.admin_token_account.to_account_info(),
                to: ctx.accounts.vault.to_account_info(),
                authority: ctx.accounts.admin.to_account_info(),
            },
        ),
        total_deposited,
    )?;

    msg!(
        "Vesting round {} started: {} tokens for up to {} participants",
        event.round_id,
        total_deposited,
        event.max_participants
    );
    emit!(event);

    Ok(())
}

#[derive(Accounts)]
pub struct StartVesting<'info> {
    #[account(mut, seeds = [CONTROLLER_SEED], bump = controller.bump)]
    pub controller: Account<'info, VestingController>,

    #[account(
        mut,
        seeds = [VAULT_SEED, controller.key().as_ref()],
        bump = controller.vault_bump,
        constraint = vault.mint == controller.mint @ VestingError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub admin_token_account: Account<'info, TokenAccount>,

    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct VestingStarted {
    pub round_id: u64,
    pub total_deposited: u64,
    pub period_seconds: u64,
    pub per_user_allotment: u64,
    pub max_participants: u64,
    pub start_ts: i64,
}
