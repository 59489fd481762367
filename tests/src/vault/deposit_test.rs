//! Vault deposit tests.

#[cfg(test)]
mod tests {
    use crate::vault::fixture::{setup_fixture, setup_initialized_fixture};
    use vault::events::LogDeposit;
    use vault_test_framework::prelude::*;

    const DEFAULT_AMOUNT: u64 = LAMPORTS_PER_SOL;

    #[test]
    fn test_deposit() {
        let mut fixture = setup_initialized_fixture();
        let alice = fixture.alice.insecure_clone();
        let owner = alice.pubkey();
        let vault = fixture.get_vault(&owner);

        let owner_before = fixture.vm.balance(&owner);
        let vault_before = fixture.vm.balance(&vault);

        fixture
            .deposit(&alice, DEFAULT_AMOUNT)
            .expect("Failed to deposit");

        fixture
            .vm
            .assert_balance_changed(&owner, owner_before, -(DEFAULT_AMOUNT as i64));
        fixture
            .vm
            .assert_balance_changed(&vault, vault_before, DEFAULT_AMOUNT as i64);
        assert_eq!(fixture.vault_balance(&owner), DEFAULT_AMOUNT);

        fixture.vm.assert_logs_contain("Instruction: Deposit");
    }

    #[test]
    fn test_deposit_emits_event() {
        let mut fixture = setup_initialized_fixture();
        let alice = fixture.alice.insecure_clone();
        let owner = alice.pubkey();

        fixture.deposit(&alice, DEFAULT_AMOUNT).unwrap();
        fixture.deposit(&alice, 2 * DEFAULT_AMOUNT).unwrap();

        let event: LogDeposit = fixture.last_event().expect("LogDeposit not emitted");
        assert_eq!(event.owner, owner);
        assert_eq!(event.amount, 2 * DEFAULT_AMOUNT);
        assert_eq!(event.vault_balance, 3 * DEFAULT_AMOUNT);
        assert_eq!(event.vault_balance, fixture.vault_balance(&owner));
    }

    #[test]
    fn test_deposit_accumulates() {
        let mut fixture = setup_initialized_fixture();
        let alice = fixture.alice.insecure_clone();
        let owner = alice.pubkey();

        let amounts = [1, 999, DEFAULT_AMOUNT, 7 * DEFAULT_AMOUNT / 3];
        let mut expected = 0;

        for amount in amounts {
            let before = fixture.vault_balance(&owner);
            fixture.deposit(&alice, amount).expect("Failed to deposit");
            expected += amount;

            assert_eq!(fixture.vault_balance(&owner), before + amount);
        }

        assert_eq!(fixture.vault_balance(&owner), expected);
    }

    #[test]
    fn test_deposit_zero_reverts() {
        let mut fixture = setup_initialized_fixture();
        let alice = fixture.alice.insecure_clone();
        let owner = alice.pubkey();

        fixture.deposit(&alice, DEFAULT_AMOUNT).unwrap();
        let snapshot = AccountsSnapshot::capture(&fixture.vm, &fixture.touched_accounts(&owner));

        fixture.expect_revert_any(&["VaultInvalidAmount", "6001"], |f| f.deposit(&alice, 0));

        snapshot.assert_unchanged(&fixture.vm);
        assert_eq!(fixture.vault_balance(&owner), DEFAULT_AMOUNT);
    }

    #[test]
    fn test_deposit_whole_spendable_balance() {
        let mut fixture = setup_initialized_fixture();
        let alice = fixture.alice.insecure_clone();
        let owner = alice.pubkey();

        // the owner keeps exactly its own rent-exempt minimum
        let owner_reserve = fixture.vm.minimum_balance(0);
        let spendable = fixture.vm.balance(&owner) - owner_reserve;

        fixture
            .deposit(&alice, spendable)
            .expect("Failed to deposit");

        fixture.vm.assert_balance_eq(&owner, owner_reserve);
        assert_eq!(fixture.vault_balance(&owner), spendable);
    }

    #[test]
    fn test_deposit_insufficient_funds_reverts() {
        let mut fixture = setup_initialized_fixture();
        let alice = fixture.alice.insecure_clone();
        let owner = alice.pubkey();

        let owner_reserve = fixture.vm.minimum_balance(0);
        let spendable = fixture.vm.balance(&owner) - owner_reserve;
        let snapshot = AccountsSnapshot::capture(&fixture.vm, &fixture.touched_accounts(&owner));

        fixture.expect_revert_any(&["VaultInsufficientFunds", "6007"], |f| {
            f.deposit(&alice, spendable + 1)
        });
        let whole = fixture.vm.balance(&owner);
        fixture
            .deposit(&alice, whole)
            .expect_revert_containing(&fixture.vm, "VaultInsufficientFunds");

        snapshot.assert_unchanged(&fixture.vm);
    }

    #[test]
    fn test_deposit_overflow_reverts() {
        let mut fixture = setup_initialized_fixture();
        let alice = fixture.alice.insecure_clone();
        let owner = alice.pubkey();

        let snapshot = AccountsSnapshot::capture(&fixture.vm, &fixture.touched_accounts(&owner));

        fixture
            .deposit(&alice, u64::MAX)
            .expect_revert_containing(&fixture.vm, "VaultOverflow");

        snapshot.assert_unchanged(&fixture.vm);
    }

    #[test]
    fn test_deposit_by_non_owner_reverts() {
        let mut fixture = setup_initialized_fixture();
        let alice = fixture.alice.pubkey();
        let bob = fixture.bob.insecure_clone();

        let snapshot = AccountsSnapshot::capture(&fixture.vm, &fixture.touched_accounts(&alice));

        fixture.expect_revert_any(&["VaultUnauthorized", "6002"], |f| {
            f.deposit_as(&bob, &alice, DEFAULT_AMOUNT)
        });

        snapshot.assert_unchanged(&fixture.vm);
        assert_eq!(fixture.vault_balance(&alice), 0);
    }

    #[test]
    fn test_deposit_before_initialize_reverts() {
        let mut fixture = setup_fixture();
        let alice = fixture.alice.insecure_clone();
        let owner = alice.pubkey();

        let snapshot = AccountsSnapshot::capture(&fixture.vm, &fixture.touched_accounts(&owner));

        fixture
            .deposit(&alice, DEFAULT_AMOUNT)
            .expect_revert_containing(&fixture.vm, "VaultAccountNotFound");

        snapshot.assert_unchanged(&fixture.vm);
        fixture.vm.assert_account_not_exists(&fixture.get_vault(&owner));
    }
}
