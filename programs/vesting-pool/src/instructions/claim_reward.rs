use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::{CONTROLLER_SEED, PARTICIPANT_SEED, VAULT_SEED};
use crate::error::VestingError;
use crate::state::{Participant, VestingController};

pub fn claim_reward(ctx: Context<ClaimReward>) -> Result<()> {
    // Capture AccountInfos before taking the mutable controller borrow.
    let controller_ai = ctx.accounts.controller.to_account_info();
    let record_ai = ctx.accounts.participant_record.to_account_info();
    let wallet = ctx.accounts.participant.key();
    let now = Clock::get()?.unix_timestamp;

    let mut record = Participant::load(&record_ai)?;
    let st = &mut ctx.accounts.controller;
    let quote = st.claim(&wallet, record.as_mut(), now)?;

    require_keys_eq!(
        ctx.accounts.participant_token_account.mint,
        st.mint,
        VestingError::InvalidTokenMint
    );
    require_keys_eq!(
        ctx.accounts.participant_token_account.owner,
        wallet,
        VestingError::InvalidTokenAccount
    );
    require!(
        ctx.accounts.vault.amount >= quote.claimable,
        VestingError::InsufficientBalance
    );

    // Local state is committed before the transfer; a failed CPI reverts both.
    if let Some(record) = &record {
        record.store(&record_ai)?;
    }

    emit!(RewardClaimed {
        wallet,
        round_id: st.round_id,
        amount: quote.claimable,
        claimed_total: quote.vested,
        allotment: st.per_user_allotment,
    });

    if quote.claimable == 0 {
        return Ok(());
    }

    let signer_seeds: &[&[&[u8]]] = &[&[CONTROLLER_SEED, &[st.bump]]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.vault.to_account_info(),
                to: ctx.accounts.participant_token_account.to_account_info(),
                authority: controller_ai,
            },
            signer_seeds,
        ),
        quote.claimable,
    )?;

    Ok(())
}

#[derive(Accounts)]
pub struct ClaimReward<'info> {
    #[account(mut, seeds = [CONTROLLER_SEED], bump = controller.bump)]
    pub controller: Account<'info, VestingController>,

    #[account(
        mut,
        seeds = [VAULT_SEED, controller.key().as_ref()],
        bump = controller.vault_bump,
        constraint = vault.mint == controller.mint @ VestingError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    /// CHECK: may be uninitialized; decoded by `Participant::load` so a missing
    /// record reports `NotJoined`.
    #[account(
        mut,
        seeds = [PARTICIPANT_SEED, controller.key().as_ref(), participant.key().as_ref()],
        bump
    )]
    pub participant_record: UncheckedAccount<'info>,

    #[account(mut)]
    pub participant_token_account: Account<'info, TokenAccount>,

    pub participant: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct RewardClaimed {
    pub wallet: Pubkey,
    pub round_id: u64,
    pub amount: u64,
    pub claimed_total: u64,
    pub allotment: u64,
}
