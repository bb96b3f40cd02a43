use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::{CONTROLLER_SEED, VAULT_SEED};
use crate::state::VestingController;

pub fn initialize(ctx: Context<Initialize>, token_mint: Pubkey) -> Result<()> {
    VestingController::check_token_mint(&token_mint, &ctx.accounts.mint.key())?;

    let admin = ctx.accounts.admin.key();
    let st = &mut ctx.accounts.controller;
    st.configure(admin, token_mint, ctx.bumps.controller, ctx.bumps.vault)?;

    msg!("Vesting controller initialized for mint {}", token_mint);
    emit!(ControllerInitialized {
        admin,
        mint: token_mint,
        vault: ctx.accounts.vault.key(),
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = admin,
        space = 8 + VestingController::SIZE,
        seeds = [CONTROLLER_SEED],
        bump
    )]
    pub controller: Account<'info, VestingController>,

    #[account(
        init,
        payer = admin,
        token::mint = mint,
        token::authority = controller,
        seeds = [VAULT_SEED, controller.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[event]
pub struct ControllerInitialized {
    pub admin: Pubkey,
    pub mint: Pubkey,
    pub vault: Pubkey,
}
