use anchor_lang::prelude::*;
use anchor_lang::system_program::{
    allocate, assign, create_account, transfer, Allocate, Assign, CreateAccount, Transfer,
};

use crate::{
    constants::VOTER_SEED,
    state::{VoteCast, VoterSlot},
    Cast,
};

/// Casts the signer's vote for `answer_id` on a started question.
///
/// Any identity may vote, the question's creator included. The first cast
/// creates the voter's ballot account and is final: casting again is accepted
/// but leaves the recorded choice and the tally untouched.
///
/// A new voter also gets the next entry of the question's voter roll, paid
/// for by the voter.
///
/// # Arguments
/// * `id` - The question id (used for account derivation via Anchor's #[instruction] attribute)
/// * `answer_id` - Index of the chosen answer
pub fn cast(ctx: Context<Cast>, id: u64, answer_id: u16) -> Result<()> {
    let voter = ctx.accounts.voter.key();

    let slot = {
        let ballot = &mut ctx.accounts.ballot;
        ctx.accounts.question.cast(voter, answer_id, ballot)?
    };

    let Some(slot) = slot else {
        msg!("Voter {} already voted on question {}", voter, id);
        return Ok(());
    };

    ctx.accounts.ballot.bump = ctx.bumps.ballot;
    create_voter_slot(
        &ctx,
        &VoterSlot {
            bump: ctx.bumps.voter_slot,
            ..slot
        },
    )?;

    emit!(VoteCast {
        id,
        voter,
        answer_id,
    });

    Ok(())
}

/// Creates the roll entry PDA at `slot.rank` and writes `slot` into it.
///
/// An address that already holds lamports cannot go through `create_account`,
/// so it is topped up to rent exemption, allocated and assigned instead.
/// Otherwise a pre-funded address would block every later first cast.
fn create_voter_slot(ctx: &Context<Cast>, slot: &VoterSlot) -> Result<()> {
    let question = ctx.accounts.question.key();
    let rank = slot.rank.to_le_bytes();
    let bump = [slot.bump];
    let signer_seeds: &[&[&[u8]]] = &[&[VOTER_SEED, question.as_ref(), &rank, &bump]];

    let system_program = ctx.accounts.system_program.to_account_info();
    let voter = ctx.accounts.voter.to_account_info();
    let info = ctx.accounts.voter_slot.to_account_info();

    let space = 8 + VoterSlot::INIT_SPACE;
    let rent = Rent::get()?.minimum_balance(space);
    let balance = info.lamports();

    if balance == 0 {
        create_account(
            CpiContext::new_with_signer(
                system_program,
                CreateAccount {
                    from: voter,
                    to: info.clone(),
                },
                signer_seeds,
            ),
            rent,
            space as u64,
            &crate::ID,
        )?;
    } else {
        let top_up = rent.saturating_sub(balance);
        if top_up > 0 {
            transfer(
                CpiContext::new(
                    system_program.clone(),
                    Transfer {
                        from: voter,
                        to: info.clone(),
                    },
                ),
                top_up,
            )?;
        }
        allocate(
            CpiContext::new_with_signer(
                system_program.clone(),
                Allocate {
                    account_to_allocate: info.clone(),
                },
                signer_seeds,
            ),
            space as u64,
        )?;
        assign(
            CpiContext::new_with_signer(
                system_program,
                Assign {
                    account_to_assign: info.clone(),
                },
                signer_seeds,
            ),
            &crate::ID,
        )?;
    }

    let mut data = info.try_borrow_mut_data()?;
    slot.try_serialize(&mut &mut data[..])?;
    Ok(())
}
