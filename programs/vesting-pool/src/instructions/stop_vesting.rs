use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;

use crate::constants::{CONTROLLER_SEED, VAULT_SEED};
use crate::state::VestingController;

pub fn stop_vesting(ctx: Context<StopVesting>) -> Result<()> {
    let admin = ctx.accounts.admin.key();
    let st = &mut ctx.accounts.controller;
    let round_id = st.round_id;
    let released_supply = st.released_supply;
    st.stop_round(&admin)?;

    // Unclaimed tokens stay in the vault until an explicit sweep.
    let vault_balance = ctx.accounts.vault.amount;
    msg!("Vesting round {} stopped, {} tokens remain in vault", round_id, vault_balance);
    emit!(VestingStopped {
        round_id,
        released_supply,
        vault_balance,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct StopVesting<'info> {
    #[account(mut, seeds = [CONTROLLER_SEED], bump = controller.bump)]
    pub controller: Account<'info, VestingController>,

    #[account(
        seeds = [VAULT_SEED, controller.key().as_ref()],
        bump = controller.vault_bump,
    )]
    pub vault: Account<'info, TokenAccount>,

    pub admin: Signer<'info>,
}

#[event]
pub struct VestingStopped {
    pub round_id: u64,
    pub released_supply: u64,
    pub vault_balance: u64,
}
