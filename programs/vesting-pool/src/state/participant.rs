use anchor_lang::prelude::*;

/// Per-wallet enrollment record PDA.
#[account]
#[derive(Default, Debug)]
pub struct Participant {
    /// Enrolled wallet.
    pub wallet: Pubkey,
    /// Round the record belongs to; stale once the controller moves on.
    pub round_id: u64,
    pub joined: bool,
    /// Cumulative amount transferred during `round_id`.
    pub claimed: u64,
    pub bump: u8,
}

impl Participant {
    pub const SIZE: usize =
        32 + // wallet
        8 +  // round_id
        1 +  // joined
        8 +  // claimed
        1;   // bump

    /// True when this record is a live enrollment of `wallet` in round `round_id`.
    pub fn is_enrolled(&self, wallet: &Pubkey, round_id: u64) -> bool {
        self.joined && self.round_id == round_id && self.wallet == *wallet
    }

    /// Recycle the record for a fresh enrollment.
    pub fn enroll(&mut self, wallet: Pubkey, round_id: u64, bump: u8) {
        self.wallet = wallet;
        self.round_id = round_id;
        self.joined = true;
        self.claimed = 0;
        self.bump = bump;
    }

    /// Read a record that may not exist yet. Missing or foreign accounts yield `None`.
    pub fn load(info: &AccountInfo) -> Result<Option<Participant>> {
        if info.owner != &crate::ID || info.data_is_empty() {
            return Ok(None);
        }
        let data = info.try_borrow_data()?;
        let mut src: &[u8] = &data;
        Ok(Some(Participant::try_deserialize(&mut src)?))
    }

    /// Write the record back into an account previously read with [`Participant::load`].
    pub fn store(&self, info: &AccountInfo) -> Result<()> {
        let mut data = info.try_borrow_mut_data()?;
        let mut dst: &mut [u8] = &mut data;
        self.try_serialize(&mut dst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(n: u8) -> Pubkey {
        Pubkey::new_from_array([n; 32])
    }

    #[test]
    fn stale_round_is_not_enrolled() {
        let wallet = key(1);
        let mut p = Participant::default();
        assert!(!p.is_enrolled(&wallet, 0));

        p.enroll(wallet, 3, 254);
        assert!(p.is_enrolled(&wallet, 3));
        assert!(!p.is_enrolled(&wallet, 4));
        assert!(!p.is_enrolled(&key(2), 3));
    }

    #[test]
    fn enroll_resets_claimed() {
        let wallet = key(1);
        let mut p = Participant::default();
        p.enroll(wallet, 1, 255);
        p.claimed = 700;
        p.enroll(wallet, 2, 255);
        assert_eq!(p.claimed, 0);
        assert_eq!(p.round_id, 2);
    }

    #[test]
    fn size_matches_serialized_layout() {
        let p = Participant::default();
        let mut buf = Vec::new();
        p.try_serialize(&mut buf).unwrap();
        assert_eq!(buf.len(), 8 + Participant::SIZE);
    }
}
