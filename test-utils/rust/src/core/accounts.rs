//! Account reads and writes against the VM

use crate::{
    errors::{Result, VmError},
    internal::conversions::{from_lite_account, to_lite_account, to_lite_pubkey},
};
use solana_sdk::{account::Account, pubkey::Pubkey, signature::Keypair, signer::Signer};

use super::vm::Vm;

pub trait AccountManager {
    fn airdrop(&mut self, pubkey: &Pubkey, lamports: u64) -> Result<()>;

    fn set_account(&mut self, pubkey: &Pubkey, account: Account) -> Result<()>;

    /// Live account at `pubkey`; zero-lamport leftovers count as absent
    fn get_account(&self, pubkey: &Pubkey) -> Option<Account>;

    /// Fresh keypair funded with `lamports` and registered with the VM
    fn make_account(&mut self, lamports: u64) -> Keypair;

    fn balance(&self, pubkey: &Pubkey) -> u64;

    fn account_exists(&self, pubkey: &Pubkey) -> bool;
}

impl AccountManager for Vm {
    fn airdrop(&mut self, pubkey: &Pubkey, lamports: u64) -> Result<()> {
        self.svm
            .airdrop(&to_lite_pubkey(pubkey), lamports)
            .map(|_| ())
            .map_err(|e| VmError::AirdropFailed(format!("{:?}", e)))
    }

    fn set_account(&mut self, pubkey: &Pubkey, account: Account) -> Result<()> {
        self.svm
            .set_account(to_lite_pubkey(pubkey), to_lite_account(account))
            .map_err(|e| VmError::SetAccountFailed(format!("{:?}", e)))
    }

    fn get_account(&self, pubkey: &Pubkey) -> Option<Account> {
        self.svm
            .get_account(&to_lite_pubkey(pubkey))
            .map(from_lite_account)
            .filter(|account| account.lamports > 0)
    }

    fn make_account(&mut self, lamports: u64) -> Keypair {
        let keypair = Keypair::new();
        if let Err(e) = self.airdrop(&keypair.pubkey(), lamports) {
            tracing::warn!("Failed to fund {}: {}", keypair.pubkey(), e);
        }
        self.register_keypair(&keypair);
        keypair
    }

    fn balance(&self, pubkey: &Pubkey) -> u64 {
        self.get_account(pubkey).map_or(0, |account| account.lamports)
    }

    fn account_exists(&self, pubkey: &Pubkey) -> bool {
        self.get_account(pubkey).is_some()
    }
}

impl Vm {
    /// Deserialize an Anchor account, checking its discriminator
    pub fn read_anchor_account<T: anchor_lang::AccountDeserialize>(
        &self,
        pubkey: &Pubkey,
    ) -> Result<T> {
        let account = self
            .get_account(pubkey)
            .ok_or_else(|| VmError::AccountNotFound(pubkey.to_string()))?;

        T::try_deserialize(&mut account.data.as_slice())
            .map_err(|e| VmError::DeserializeFailed(e.to_string()))
    }

    /// Put a plain system-owned account holding `lamports` at `pubkey`,
    /// e.g. to pre-fund an address before the program claims it.
    pub fn fund_system_account(&mut self, pubkey: &Pubkey, lamports: u64) -> Result<()> {
        self.set_account(
            pubkey,
            Account {
                lamports,
                data: vec![],
                owner: solana_sdk::system_program::id(),
                executable: false,
                rent_epoch: 0,
            },
        )
    }
}
