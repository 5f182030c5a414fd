use anchor_lang::prelude::*;
use anchor_lang::system_program;
use anchor_spl::associated_token::get_associated_token_address;
use anchor_spl::token::{self, Mint, TokenAccount, TransferChecked};

use crate::constants::GAS_VAULT_SEED;
use crate::errors::GasServiceError;

/// What a balance is held in. `Pubkey::default()` stands for native lamports,
/// any other key is an SPL token mint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Asset {
    Native,
    Token(Pubkey),
}

impl Asset {
    pub fn address(&self) -> Pubkey {
        match self {
            Asset::Native => Pubkey::default(),
            Asset::Token(mint) => *mint,
        }
    }
}

impl From<Pubkey> for Asset {
    fn from(token: Pubkey) -> Self {
        if token == Pubkey::default() {
            Asset::Native
        } else {
            Asset::Token(token)
        }
    }
}

/// Moves value in and out of the gas vault.
///
/// Native value arrives with the call itself, tokens are pulled from the
/// payer, and only the vault can send either back out.
pub trait ValueTransfer {
    /// Moves `amount` lamports from the payer into the vault
    fn receive_native(&mut self, payer: &Pubkey, amount: u64) -> Result<()>;

    /// Moves `amount` of `token` from the payer's token account into the vault's
    fn pull_token(&mut self, token: &Pubkey, payer: &Pubkey, amount: u64) -> Result<()>;

    /// Sends `amount` of `asset` from the vault to `recipient`
    fn send(&mut self, asset: Asset, recipient: &Pubkey, amount: u64) -> Result<()>;

    /// Spendable vault balance of `asset`
    fn balance_of(&self, asset: Asset) -> Result<u64>;
}

/// `ValueTransfer` backed by System and SPL Token CPIs.
///
/// Accounts are looked up by key among the ones handed over by the
/// instruction; token accounts are the associated token accounts of
/// `(owner, mint)`.
pub struct VaultCpi<'info> {
    vault: AccountInfo<'info>,
    vault_bump: u8,
    system_program: AccountInfo<'info>,
    token_program: Option<AccountInfo<'info>>,
    accounts: Vec<AccountInfo<'info>>,
}

impl<'info> VaultCpi<'info> {
    pub fn new(
        vault: AccountInfo<'info>,
        vault_bump: u8,
        system_program: AccountInfo<'info>,
    ) -> Self {
        Self {
            vault,
            vault_bump,
            system_program,
            token_program: None,
            accounts: Vec::new(),
        }
    }

    pub fn with_token_program(mut self, token_program: AccountInfo<'info>) -> Self {
        self.token_program = Some(token_program);
        self
    }

    pub fn with_accounts<I>(mut self, accounts: I) -> Self
    where
        I: IntoIterator<Item = AccountInfo<'info>>,
    {
        self.accounts.extend(accounts);
        self
    }

    fn account(&self, key: &Pubkey) -> Result<AccountInfo<'info>> {
        std::iter::once(&self.vault)
            .chain(self.accounts.iter())
            .find(|info| info.key == key)
            .cloned()
            .ok_or_else(|| error!(GasServiceError::MissingAccount))
    }

    fn token_account(&self, owner: &Pubkey, mint: &Pubkey) -> Result<AccountInfo<'info>> {
        self.account(&get_associated_token_address(owner, mint))
    }

    fn token_program(&self) -> Result<AccountInfo<'info>> {
        self.token_program
            .clone()
            .ok_or_else(|| error!(GasServiceError::MissingTokenProgram))
    }

    fn decimals(&self, mint: &AccountInfo<'info>) -> Result<u8> {
        let data = mint.try_borrow_data()?;
        Ok(Mint::try_deserialize(&mut &data[..])?.decimals)
    }
}

impl<'info> ValueTransfer for VaultCpi<'info> {
    fn receive_native(&mut self, payer: &Pubkey, amount: u64) -> Result<()> {
        system_program::transfer(
            CpiContext::new(
                self.system_program.clone(),
                system_program::Transfer {
                    from: self.account(payer)?,
                    to: self.vault.clone(),
                },
            ),
            amount,
        )
    }

    fn pull_token(&mut self, token: &Pubkey, payer: &Pubkey, amount: u64) -> Result<()> {
        let token_program = self.token_program()?;
        let accounts = TransferChecked {
            from: self.token_account(payer, token)?,
            mint: self.account(token)?,
            to: self.token_account(self.vault.key, token)?,
            authority: self.account(payer)?,
        };
        let decimals = self.decimals(&accounts.mint)?;

        token::transfer_checked(CpiContext::new(token_program, accounts), amount, decimals)
    }

    fn send(&mut self, asset: Asset, recipient: &Pubkey, amount: u64) -> Result<()> {
        let bump = [self.vault_bump];
        let signer_seeds: &[&[&[u8]]] = &[&[GAS_VAULT_SEED, &bump]];

        match asset {
            Asset::Native => system_program::transfer(
                CpiContext::new_with_signer(
                    self.system_program.clone(),
                    system_program::Transfer {
                        from: self.vault.clone(),
                        to: self.account(recipient)?,
                    },
                    signer_seeds,
                ),
                amount,
            ),
            Asset::Token(token) => {
                let token_program = self.token_program()?;
                let accounts = TransferChecked {
                    from: self.token_account(self.vault.key, &token)?,
                    mint: self.account(&token)?,
                    to: self.token_account(recipient, &token)?,
                    authority: self.vault.clone(),
                };
                let decimals = self.decimals(&accounts.mint)?;

                token::transfer_checked(
                    CpiContext::new_with_signer(token_program, accounts, signer_seeds),
                    amount,
                    decimals,
                )
            }
        }
    }

    fn balance_of(&self, asset: Asset) -> Result<u64> {
        match asset {
            Asset::Native => {
                // The vault never drops below its rent-exempt reserve.
                let reserve = Rent::get()?.minimum_balance(0);
                Ok(self.vault.lamports().saturating_sub(reserve))
            }
            Asset::Token(token) => {
                let info = self.token_account(self.vault.key, &token)?;
                let data = info.try_borrow_data()?;
                Ok(TokenAccount::try_deserialize(&mut &data[..])?.amount)
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test_utils::assert_gas_service_error;
    use anchor_lang::solana_program::entrypoint::SUCCESS;
    use anchor_lang::solana_program::program_option::COption;
    use anchor_lang::solana_program::program_pack::Pack;
    use anchor_lang::solana_program::program_stubs;
    use anchor_spl::token::spl_token;

    struct RentSysvar;

    impl program_stubs::SyscallStubs for RentSysvar {
        fn sol_get_rent_sysvar(&self, var_addr: *mut u8) -> u64 {
            unsafe { *(var_addr as *mut Rent) = Rent::default() };
            SUCCESS
        }
    }

    /// Backing storage for an `AccountInfo` handed to `VaultCpi`
    struct TestAccount {
        key: Pubkey,
        owner: Pubkey,
        lamports: u64,
        data: Vec<u8>,
    }

    impl TestAccount {
        fn new(key: Pubkey, owner: Pubkey, lamports: u64, data: Vec<u8>) -> Self {
            Self {
                key,
                owner,
                lamports,
                data,
            }
        }

        fn system(key: Pubkey, lamports: u64) -> Self {
            Self::new(key, System::id(), lamports, Vec::new())
        }

        fn token_account(mint: Pubkey, owner: Pubkey, amount: u64) -> Self {
            let state = spl_token::state::Account {
                mint,
                owner,
                amount,
                delegate: COption::None,
                state: spl_token::state::AccountState::Initialized,
                is_native: COption::None,
                delegated_amount: 0,
                close_authority: COption::None,
            };
            let mut data = vec![0; spl_token::state::Account::LEN];
            spl_token::state::Account::pack(state, &mut data).unwrap();

            Self::new(
                get_associated_token_address(&owner, &mint),
                spl_token::ID,
                0,
                data,
            )
        }

        fn info(&mut self) -> AccountInfo<'_> {
            AccountInfo::new(
                &self.key,
                false,
                true,
                &mut self.lamports,
                &mut self.data,
                &self.owner,
                false,
                0,
            )
        }
    }

    fn vault_key() -> (Pubkey, u8) {
        Pubkey::find_program_address(&[GAS_VAULT_SEED], &crate::ID)
    }

    #[test]
    fn native_balance_excludes_rent_reserve() {
        program_stubs::set_syscall_stubs(Box::new(RentSysvar));
        let reserve = Rent::default().minimum_balance(0);
        let (vault_key, vault_bump) = vault_key();

        let mut vault = TestAccount::system(vault_key, reserve + 500);
        let mut system = TestAccount::new(System::id(), Pubkey::default(), 1, Vec::new());
        let cpi = VaultCpi::new(vault.info(), vault_bump, system.info());
        assert_eq!(cpi.balance_of(Asset::Native).unwrap(), 500);

        let mut vault = TestAccount::system(vault_key, reserve - 1);
        let mut system = TestAccount::new(System::id(), Pubkey::default(), 1, Vec::new());
        let cpi = VaultCpi::new(vault.info(), vault_bump, system.info());
        assert_eq!(cpi.balance_of(Asset::Native).unwrap(), 0);
    }

    #[test]
    fn token_balance_reads_vault_associated_account() {
        let (vault_key, vault_bump) = vault_key();
        let mint = Pubkey::new_unique();

        let mut vault = TestAccount::system(vault_key, 0);
        let mut system = TestAccount::new(System::id(), Pubkey::default(), 1, Vec::new());
        let mut vault_tokens = TestAccount::token_account(mint, vault_key, 700);
        let mut other_tokens = TestAccount::token_account(mint, Pubkey::new_unique(), 9);
        let cpi = VaultCpi::new(vault.info(), vault_bump, system.info())
            .with_accounts([other_tokens.info(), vault_tokens.info()]);

        assert_eq!(cpi.balance_of(Asset::Token(mint)).unwrap(), 700);
        assert_gas_service_error(
            cpi.balance_of(Asset::Token(Pubkey::new_unique())),
            GasServiceError::MissingAccount,
        );
    }

    #[test]
    fn native_send_to_absent_receiver_fails() {
        let (vault_key, vault_bump) = vault_key();

        let mut vault = TestAccount::system(vault_key, 1_000_000_000);
        let mut system = TestAccount::new(System::id(), Pubkey::default(), 1, Vec::new());
        let mut cpi = VaultCpi::new(vault.info(), vault_bump, system.info());

        assert_gas_service_error(
            cpi.send(Asset::Native, &Pubkey::new_unique(), 1),
            GasServiceError::MissingAccount,
        );
    }

    #[test]
    fn native_receive_from_absent_payer_fails() {
        let (vault_key, vault_bump) = vault_key();

        let mut vault = TestAccount::system(vault_key, 0);
        let mut system = TestAccount::new(System::id(), Pubkey::default(), 1, Vec::new());
        let mut cpi = VaultCpi::new(vault.info(), vault_bump, system.info());

        assert_gas_service_error(
            cpi.receive_native(&Pubkey::new_unique(), 1),
            GasServiceError::MissingAccount,
        );
    }

    #[test]
    fn token_moves_require_token_program() {
        let (vault_key, vault_bump) = vault_key();
        let mint = Pubkey::new_unique();
        let payer = Pubkey::new_unique();

        let mut vault = TestAccount::system(vault_key, 0);
        let mut system = TestAccount::new(System::id(), Pubkey::default(), 1, Vec::new());
        let mut vault_tokens = TestAccount::token_account(mint, vault_key, 700);
        let mut cpi = VaultCpi::new(vault.info(), vault_bump, system.info())
            .with_accounts([vault_tokens.info()]);

        assert_gas_service_error(
            cpi.send(Asset::Token(mint), &payer, 1),
            GasServiceError::MissingTokenProgram,
        );
        assert_gas_service_error(
            cpi.pull_token(&mint, &payer, 1),
            GasServiceError::MissingTokenProgram,
        );
    }

    #[test]
    fn token_moves_require_associated_accounts() {
        let (vault_key, vault_bump) = vault_key();
        let mint = Pubkey::new_unique();
        let receiver = Pubkey::new_unique();

        let mut vault = TestAccount::system(vault_key, 0);
        let mut system = TestAccount::new(System::id(), Pubkey::default(), 1, Vec::new());
        let mut token_program = TestAccount::new(spl_token::ID, Pubkey::default(), 1, Vec::new());
        let mut receiver_account = TestAccount::system(receiver, 0);
        let mut mint_account = TestAccount::new(mint, spl_token::ID, 0, Vec::new());
        let mut vault_tokens = TestAccount::token_account(mint, vault_key, 700);
        let mut cpi = VaultCpi::new(vault.info(), vault_bump, system.info())
            .with_token_program(token_program.info())
            .with_accounts([
                receiver_account.info(),
                mint_account.info(),
                vault_tokens.info(),
            ]);

        // The receiver's associated token account was not handed over.
        assert_gas_service_error(
            cpi.send(Asset::Token(mint), &receiver, 1),
            GasServiceError::MissingAccount,
        );
        // Neither was the payer's.
        assert_gas_service_error(
            cpi.pull_token(&mint, &receiver, 1),
            GasServiceError::MissingAccount,
        );
    }

    #[test]
    fn default_key_is_native() {
        assert_eq!(Asset::from(Pubkey::default()), Asset::Native);
        assert_eq!(Asset::Native.address(), Pubkey::default());
    }

    #[test]
    fn other_keys_are_tokens() {
        let mint = Pubkey::new_unique();

        assert_eq!(Asset::from(mint), Asset::Token(mint));
        assert_eq!(Asset::Token(mint).address(), mint);
    }
}
