use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::{CONTROLLER_SEED, VAULT_SEED};
use crate::error::VestingError;
use crate::state::VestingController;

pub fn sweep_inactive_balance(ctx: Context<SweepInactiveBalance>) -> Result<()> {
    let st = &ctx.accounts.controller;
    st.require_sweepable(&ctx.accounts.admin.key())?;

    require_keys_eq!(
        ctx.accounts.admin_destination.mint,
        st.mint,
        VestingError::InvalidTokenMint
    );
    require_keys_eq!(
        ctx.accounts.admin_destination.owner,
        ctx.accounts.admin.key(),
        VestingError::InvalidTokenAccount
    );

    let amount = ctx.accounts.vault.amount;
    if amount == 0 {
        emit!(InactiveBalanceSwept {
            admin: st.admin,
            amount: 0,
        });
        return Ok(());
    }

    let signer_seeds: &[&[&[u8]]] = &[&[CONTROLLER_SEED, &[st.bump]]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.vault.to_account_info(),
                to: ctx.accounts.admin_destination.to_account_info(),
                authority: ctx.accounts.controller.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
    )?;

    msg!("Swept {} tokens from inactive vault", amount);
    emit!(InactiveBalanceSwept {
        admin: st.admin,
        amount,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct SweepInactiveBalance<'info> {
    #[account(seeds = [CONTROLLER_SEED], bump = controller.bump)]
    pub controller: Account<'info, VestingController>,

    #[account(
        mut,
        seeds = [VAULT_SEED, controller.key().as_ref()],
        bump = controller.vault_bump,
        constraint = vault.mint == controller.mint @ VestingError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub admin_destination: Account<'info, TokenAccount>,

    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct InactiveBalanceSwept {
    pub admin: Pubkey,
    pub amount: u64,
}
