//! Address derivation and cross-owner isolation tests.

#[cfg(test)]
mod tests {
    use crate::vault::fixture::{setup_fixture, setup_initialized_fixture, VAULT_PROGRAM_ID};
    use library::pda::derive_address;
    use std::collections::HashSet;
    use vault::state::{VAULT_SEED, VAULT_STATE_SEED};
    use vault_test_framework::prelude::*;

    #[test]
    fn test_derivation_matches_fixture_addresses() {
        let fixture = setup_fixture();
        let alice = fixture.alice.pubkey();

        let (vault, _) = derive_address(VAULT_SEED, &alice, &VAULT_PROGRAM_ID).unwrap();
        let (vault_state, _) =
            derive_address(VAULT_STATE_SEED, &alice, &VAULT_PROGRAM_ID).unwrap();

        assert_eq!(vault, fixture.get_vault(&alice));
        assert_eq!(vault_state, fixture.get_vault_state(&alice));
        assert_ne!(vault, vault_state);
    }

    #[test]
    fn test_derivation_is_collision_free_across_owners() {
        let mut seen = HashSet::new();

        for _ in 0..64 {
            let owner = Pubkey::new_unique();
            let (vault, _) = derive_address(VAULT_SEED, &owner, &VAULT_PROGRAM_ID).unwrap();
            let (vault_state, _) =
                derive_address(VAULT_STATE_SEED, &owner, &VAULT_PROGRAM_ID).unwrap();

            assert!(seen.insert(vault), "vault address collided");
            assert!(seen.insert(vault_state), "vault state address collided");
        }
    }

    #[test]
    fn test_stored_bumps_are_canonical() {
        let fixture = setup_initialized_fixture();
        let alice = fixture.alice.pubkey();

        let state = fixture.read_vault_state(&alice).unwrap();
        let (_, vault_bump) =
            Pubkey::find_program_address(&[VAULT_SEED, alice.as_ref()], &VAULT_PROGRAM_ID);
        let (_, state_bump) =
            Pubkey::find_program_address(&[VAULT_STATE_SEED, alice.as_ref()], &VAULT_PROGRAM_ID);

        assert_eq!(state.vault_bump, vault_bump);
        assert_eq!(state.state_bump, state_bump);
    }

    #[test]
    fn test_owners_are_isolated() {
        let mut fixture = setup_fixture();
        let alice = fixture.alice.insecure_clone();
        let bob = fixture.bob.insecure_clone();

        fixture.initialize(&alice).unwrap();
        fixture.initialize(&bob).unwrap();

        fixture.deposit(&alice, 3 * LAMPORTS_PER_SOL).unwrap();
        fixture.deposit(&bob, LAMPORTS_PER_SOL).unwrap();
        fixture.withdraw(&bob, LAMPORTS_PER_SOL / 2).unwrap();

        assert_eq!(fixture.vault_balance(&alice.pubkey()), 3 * LAMPORTS_PER_SOL);
        assert_eq!(fixture.vault_balance(&bob.pubkey()), LAMPORTS_PER_SOL / 2);
        assert_ne!(
            fixture.get_vault(&alice.pubkey()),
            fixture.get_vault(&bob.pubkey())
        );
    }

    #[test]
    fn test_foreign_pair_fails_with_address_mismatch() {
        let mut fixture = setup_fixture();
        let alice = fixture.alice.insecure_clone();
        let bob = fixture.bob.insecure_clone();

        fixture.initialize(&alice).unwrap();
        fixture.initialize(&bob).unwrap();
        fixture.deposit(&bob, LAMPORTS_PER_SOL).unwrap();

        // signer and owner are alice, the pair is bob's
        let mut accounts = fixture.vault_accounts(&alice.pubkey(), &alice.pubkey());
        accounts.vault_state = fixture.get_vault_state(&bob.pubkey());
        accounts.vault = fixture.get_vault(&bob.pubkey());

        let snapshot =
            AccountsSnapshot::capture(&fixture.vm, &fixture.touched_accounts(&bob.pubkey()));

        let ix = fixture.withdraw_ix(accounts, LAMPORTS_PER_SOL);
        fixture
            .execute(ix, &alice)
            .expect_revert_containing(&fixture.vm, "VaultAddressMismatch");

        snapshot.assert_unchanged(&fixture.vm);
        assert_eq!(fixture.vault_balance(&bob.pubkey()), LAMPORTS_PER_SOL);
    }

    #[test]
    fn test_swapped_pair_fails_with_address_mismatch() {
        let mut fixture = setup_initialized_fixture();
        let alice = fixture.alice.insecure_clone();

        let mut accounts = fixture.vault_accounts(&alice.pubkey(), &alice.pubkey());
        std::mem::swap(&mut accounts.vault, &mut accounts.vault_state);

        let ix = fixture.deposit_ix(accounts, LAMPORTS_PER_SOL);
        fixture
            .execute(ix, &alice)
            .expect_revert_containing(&fixture.vm, "VaultAddressMismatch");
    }
}
