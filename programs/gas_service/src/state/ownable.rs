use anchor_lang::prelude::*;

use crate::errors::GasServiceError;
use crate::events::OwnershipTransferred;

/// Single-owner admin capability gating every value outflow and upgrade
pub trait Ownable {
    fn owner(&self) -> &Pubkey;

    fn set_owner(&mut self, new_owner: Pubkey);

    /// Fails with `NotOwner` unless `caller` is the current owner
    fn ensure_owner(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(*caller, *self.owner(), GasServiceError::NotOwner);
        Ok(())
    }

    fn transfer_ownership(
        &mut self,
        caller: &Pubkey,
        new_owner: Pubkey,
    ) -> Result<OwnershipTransferred> {
        self.ensure_owner(caller)?;
        require_keys_neq!(new_owner, Pubkey::default(), GasServiceError::InvalidOwner);
        self.set_owner(new_owner);

        Ok(OwnershipTransferred { new_owner })
    }
}
