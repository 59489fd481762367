use crate::{
    core::{accounts::AccountManager, vm::Vm},
    errors::VmError,
};
use solana_sdk::{account::Account, pubkey::Pubkey};

/// Error text and logs of a call that reverted as expected
#[derive(Debug, Clone)]
pub struct RevertInfo {
    pub error: String,
    pub logs: Vec<String>,
}

/// Match a failed call against any of `expected_messages`, panicking when none is found
fn check_revert<T, E>(
    vm: &Vm,
    result: std::result::Result<T, E>,
    expected_messages: &[&str],
) -> RevertInfo
where
    E: Into<VmError>,
{
    let err: VmError = match result {
        Ok(_) => panic!(
            "Expected revert containing {:?}, but the call succeeded",
            expected_messages
        ),
        Err(err) => err.into(),
    };

    let logs = vm.last_error_logs();
    if !expected_messages
        .iter()
        .any(|expected| vm.revert_matches(expected, &err))
    {
        panic!(
            "Expected revert containing {:?}, but got error: {}\nLogs:\n{}",
            expected_messages,
            err,
            logs.join("\n")
        );
    }

    RevertInfo {
        error: err.to_string(),
        logs,
    }
}

pub trait Assertions {
    fn assert_balance_eq(&self, pubkey: &Pubkey, expected: u64);

    fn assert_account_not_exists(&self, pubkey: &Pubkey);
}

impl Assertions for Vm {
    fn assert_balance_eq(&self, pubkey: &Pubkey, expected: u64) {
        let actual = self.balance(pubkey);
        assert_eq!(
            actual, expected,
            "Balance mismatch for {}.\nExpected: {} lamports\nActual:   {} lamports",
            pubkey, expected, actual
        );
    }

    fn assert_account_not_exists(&self, pubkey: &Pubkey) {
        assert!(
            !self.account_exists(pubkey),
            "Account {} should not exist but does",
            pubkey
        );
    }
}

/// Gives fixtures that wrap a [`Vm`] the revert helpers
pub trait VmAccess {
    fn vm_mut(&mut self) -> &mut Vm;
}

impl VmAccess for Vm {
    fn vm_mut(&mut self) -> &mut Vm {
        self
    }
}

pub trait ExpectRevertExt: VmAccess {
    /// Run `action` and assert it reverts with any of `expected_messages`.
    ///
    /// ```ignore
    /// fixture.expect_revert_any(&["VaultInvalidAmount", "6001"], |f| f.deposit(&alice, 0));
    /// ```
    fn expect_revert_any<F, T, E>(&mut self, expected_messages: &[&str], action: F) -> RevertInfo
    where
        F: FnOnce(&mut Self) -> std::result::Result<T, E>,
        E: Into<VmError>,
    {
        self.vm_mut().clear_last_error_logs();
        let result = action(self);
        check_revert(self.vm_mut(), result, expected_messages)
    }
}

impl<T> ExpectRevertExt for T where T: VmAccess {}

pub trait ExpectRevertResultExt {
    /// ```ignore
    /// fixture.withdraw(&alice, 1)
    ///     .expect_revert_containing(&fixture.vm, "VaultInsufficientVaultBalance");
    /// ```
    fn expect_revert_containing(self, vm: &Vm, expected_message: &str) -> RevertInfo;
}

impl<T, E> ExpectRevertResultExt for std::result::Result<T, E>
where
    E: Into<VmError>,
{
    fn expect_revert_containing(self, vm: &Vm, expected_message: &str) -> RevertInfo {
        check_revert(vm, self, &[expected_message])
    }
}

impl Vm {
    pub fn assert_anchor_account_eq<T>(&self, pubkey: &Pubkey, expected: &T)
    where
        T: anchor_lang::AccountDeserialize + PartialEq + std::fmt::Debug,
    {
        let actual: T = self
            .read_anchor_account(pubkey)
            .expect("Failed to read account data");
        assert_eq!(actual, *expected, "Account data mismatch for {}", pubkey);
    }

    pub fn assert_account_owner(&self, pubkey: &Pubkey, expected_owner: &Pubkey) {
        let account = self
            .get_account(pubkey)
            .unwrap_or_else(|| panic!("Account {} not found", pubkey));
        assert_eq!(
            account.owner, *expected_owner,
            "Owner mismatch for {}",
            pubkey
        );
    }

    /// Assert `pubkey` holds `before + delta` lamports
    pub fn assert_balance_changed(&self, pubkey: &Pubkey, before: u64, delta: i64) {
        let after = self.balance(pubkey);
        let expected = before.checked_add_signed(delta).unwrap_or_else(|| {
            panic!("Balance change {} out of range from {}", delta, before)
        });

        assert_eq!(
            after,
            expected,
            "Balance change mismatch for {}.\nExpected change: {}\nActual change:   {}",
            pubkey,
            delta,
            after as i128 - before as i128
        );
    }

    pub fn assert_logs_contain(&self, expected: &str) {
        let logs = self.last_tx_logs().expect("No transaction logs found");
        assert!(
            logs.iter().any(|log| log.contains(expected)),
            "Expected logs to contain '{}'.\nLogs: {:?}",
            expected,
            logs
        );
    }
}

/// Full copies of a set of accounts, used to prove a failed call left no trace.
#[derive(Debug, Clone)]
pub struct AccountsSnapshot {
    entries: Vec<(Pubkey, Option<Account>)>,
}

impl AccountsSnapshot {
    pub fn capture(vm: &Vm, pubkeys: &[Pubkey]) -> Self {
        Self {
            entries: pubkeys.iter().map(|pk| (*pk, vm.get_account(pk))).collect(),
        }
    }

    /// Assert lamports, owner and data of every captured account are untouched.
    pub fn assert_unchanged(&self, vm: &Vm) {
        for (pubkey, before) in &self.entries {
            let after = vm.get_account(pubkey);
            match (before, &after) {
                (None, None) => {}
                (Some(before), Some(after)) => {
                    assert_eq!(
                        before.lamports, after.lamports,
                        "Lamports changed for {}",
                        pubkey
                    );
                    assert_eq!(before.owner, after.owner, "Owner changed for {}", pubkey);
                    assert_eq!(before.data, after.data, "Data changed for {}", pubkey);
                }
                _ => panic!(
                    "Existence changed for {}.\nBefore: {:?}\nAfter:  {:?}",
                    pubkey, before, after
                ),
            }
        }
    }
}
