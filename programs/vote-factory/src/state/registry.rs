use anchor_lang::prelude::*;

use crate::error::ErrorCode;

/// Global registry: the owner role and the next sequential question id.
#[account]
#[derive(InitSpace)]
pub struct Registry {
    /// PDA bump seed
    pub bump: u8,
    /// Identity allowed to transfer registry ownership
    pub owner: Pubkey,
    /// Number of questions created so far, which is also the next id
    pub question_count: u64,
}

impl Registry {
    pub fn new(owner: Pubkey, bump: u8) -> Self {
        Self {
            bump,
            owner,
            question_count: 0,
        }
    }

    /// Reserves the next question id. Ids start at 0 and are never reused.
    pub fn next_question_id(&mut self) -> Result<u64> {
        let id = self.question_count;
        self.question_count = id.checked_add(1).ok_or(ErrorCode::Overflow)?;
        Ok(id)
    }

    pub fn transfer_ownership(&mut self, caller: Pubkey, new_owner: Pubkey) -> Result<()> {
        require_keys_eq!(caller, self.owner, ErrorCode::Unauthorized);
        self.owner = new_owner;
        Ok(())
    }
}
