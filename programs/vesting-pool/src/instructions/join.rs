use anchor_lang::prelude::*;

use crate::constants::{CONTROLLER_SEED, PARTICIPANT_SEED};
use crate::state::{Participant, VestingController};

pub fn join(ctx: Context<Join>) -> Result<()> {
    let wallet = ctx.accounts.participant.key();
    let bump = ctx.bumps.participant_record;

    let st = &mut ctx.accounts.controller;
    st.join(&wallet, &mut ctx.accounts.participant_record, bump)?;

    emit!(ParticipantJoined {
        wallet,
        round_id: st.round_id,
        enrolled_count: st.enrolled_count,
        max_participants: st.max_participants,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Join<'info> {
    #[account(mut, seeds = [CONTROLLER_SEED], bump = controller.bump)]
    pub controller: Account<'info, VestingController>,

    // Reused across rounds; a record from an earlier round is re-enrolled in place.
    #[account(
        init_if_needed,
        payer = participant,
        space = 8 + Participant::SIZE,
        seeds = [PARTICIPANT_SEED, controller.key().as_ref(), participant.key().as_ref()],
        bump
    )]
    pub participant_record: Account<'info, Participant>,

    #[account(mut)]
    pub participant: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct ParticipantJoined {
    pub wallet: Pubkey,
    pub round_id: u64,
    pub enrolled_count: u64,
    pub max_participants: u64,
}
