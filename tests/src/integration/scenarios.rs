//! # Ledger Scenarios
//!
//! End-to-end command sequences through `LedgerService`, checking balances,
//! rejections and the audit trail the sink receives.

#[cfg(test)]
mod tests {
    use crate::fixtures::{account, ledger, owner};
    use ledger_core::{
        Account, Amount, LedgerApi, LedgerError, LedgerEvent, LedgerService, NoOpSink, Role,
    };
    use std::sync::Arc;

    const S: Amount = 1_000_000;
    const MAX: Amount = 5_000_000;

    fn sum_of(service: &LedgerService, accounts: &[Account]) -> Amount {
        accounts.iter().map(|a| service.balance_of(a)).sum()
    }

    // =========================================================================
    // TRANSFERS
    // =========================================================================

    #[test]
    fn test_transfer_chain_moves_exact_amounts() {
        let (service, _) = ledger(S, MAX);
        let (a, b) = (account(2), account(3));

        service.transfer(owner(), a, 50).unwrap();
        service.transfer(a, b, 50).unwrap();

        assert_eq!(service.balance_of(&a), 0);
        assert_eq!(service.balance_of(&b), 50);
        assert_eq!(service.balance_of(&owner()), S - 50);
        assert_eq!(service.total_supply(), sum_of(&service, &[owner(), a, b]));
    }

    #[test]
    fn test_overdraft_leaves_both_balances_unchanged() {
        let (service, sink) = ledger(S, MAX);
        let a = account(2);
        service.transfer(owner(), a, 10).unwrap();
        let events_before = sink.len();

        let err = service.transfer(a, owner(), 11).unwrap_err();

        assert_eq!(
            err,
            LedgerError::InsufficientBalance {
                available: 10,
                required: 11
            }
        );
        assert_eq!(service.balance_of(&a), 10);
        assert_eq!(service.balance_of(&owner()), S - 10);
        assert_eq!(sink.len(), events_before);
    }

    #[test]
    fn test_transfer_to_null_account_rejected() {
        let (service, _) = ledger(S, MAX);
        assert_eq!(
            service.transfer(owner(), Account::ZERO, 1),
            Err(LedgerError::InvalidAccount)
        );
    }

    #[test]
    fn test_self_transfer_is_balance_neutral() {
        let (service, sink) = ledger(S, MAX);
        service.transfer(owner(), owner(), 400).unwrap();
        assert_eq!(service.balance_of(&owner()), S);
        assert!(matches!(
            sink.last().unwrap().event,
            LedgerEvent::Transferred { amount: 400, .. }
        ));
    }

    // =========================================================================
    // MINT / BURN
    // =========================================================================

    #[test]
    fn test_mint_without_minter_role_is_unauthorized() {
        let (service, _) = ledger(S, MAX);
        let a = account(2);

        let err = service.mint(a, a, 100).unwrap_err();

        assert_eq!(
            err,
            LedgerError::Unauthorized {
                account: a,
                role: Role::Minter
            }
        );
        assert_eq!(service.balance_of(&a), 0);
        assert_eq!(service.total_supply(), S);
    }

    #[test]
    fn test_mint_of_full_cap_over_existing_supply_fails() {
        let (service, _) = ledger(S, MAX);
        let a = account(2);

        let err = service.mint(owner(), a, MAX).unwrap_err();

        assert_eq!(
            err,
            LedgerError::SupplyCapExceeded {
                max: MAX,
                current: S,
                requested: MAX
            }
        );
        assert_eq!(service.total_supply(), S);
        assert_eq!(service.balance_of(&a), 0);
    }

    #[test]
    fn test_mint_exactly_to_cap_succeeds() {
        let (service, _) = ledger(0, MAX);

        service.mint(owner(), account(2), MAX).unwrap();

        assert_eq!(service.total_supply(), MAX);
        assert_eq!(service.mintable_supply(), 0);
        assert!(matches!(
            service.mint(owner(), account(2), 1),
            Err(LedgerError::SupplyCapExceeded { .. })
        ));
        service.mint(owner(), account(2), 0).unwrap();
    }

    #[test]
    fn test_granted_minter_can_mint_and_holder_can_burn() {
        let (service, sink) = ledger(S, MAX);
        let (minter, holder) = (account(2), account(3));

        service.grant_role(owner(), minter, Role::Minter).unwrap();
        service.mint(minter, holder, 700).unwrap();
        service.burn(holder, 200).unwrap();

        assert_eq!(service.balance_of(&holder), 500);
        assert_eq!(service.total_supply(), S + 500);

        let record = sink.last().unwrap();
        assert_eq!(
            record.event,
            LedgerEvent::Burned {
                from: holder,
                amount: 200
            }
        );
        assert_eq!(record.total_supply, S + 500);
    }

    #[test]
    fn test_burn_more_than_balance_fails() {
        let (service, _) = ledger(S, MAX);
        assert!(matches!(
            service.burn(account(9), 1),
            Err(LedgerError::InsufficientBalance {
                available: 0,
                required: 1
            })
        ));
    }

    // =========================================================================
    // PAUSE GATE
    // =========================================================================

    #[test]
    fn test_pause_round_trip_restores_behavior() {
        let (service, _) = ledger(S, MAX);
        let a = account(2);

        service.pause(owner()).unwrap();
        assert_eq!(
            service.transfer(owner(), a, 1),
            Err(LedgerError::LedgerPaused)
        );
        assert_eq!(service.balance_of(&a), 0);

        service.unpause(owner()).unwrap();
        service.transfer(owner(), a, 1).unwrap();
        assert_eq!(service.balance_of(&a), 1);
    }

    #[test]
    fn test_pause_blocks_every_balance_mutation() {
        let (service, _) = ledger(S, MAX);
        service.approve(owner(), account(3), 10).unwrap();
        service.pause(owner()).unwrap();

        assert_eq!(
            service.mint(owner(), owner(), 1),
            Err(LedgerError::LedgerPaused)
        );
        assert_eq!(service.burn(owner(), 1), Err(LedgerError::LedgerPaused));
        assert_eq!(
            service.transfer_from(account(3), owner(), account(4), 1),
            Err(LedgerError::LedgerPaused)
        );
        assert_eq!(service.total_supply(), S);
    }

    #[test]
    fn test_role_management_stays_available_while_paused() {
        let (service, _) = ledger(S, MAX);
        let a = account(2);
        service.pause(owner()).unwrap();

        service.grant_role(owner(), a, Role::Pauser).unwrap();
        service.approve(owner(), a, 5).unwrap();
        service.unpause(a).unwrap();

        assert!(!service.is_paused());
    }

    #[test]
    fn test_pause_misuse_errors() {
        let (service, _) = ledger(S, MAX);
        assert_eq!(service.unpause(owner()), Err(LedgerError::NotPaused));
        service.pause(owner()).unwrap();
        assert_eq!(service.pause(owner()), Err(LedgerError::AlreadyPaused));
        assert!(matches!(
            service.unpause(account(2)),
            Err(LedgerError::Unauthorized {
                role: Role::Pauser,
                ..
            })
        ));
    }

    #[test]
    fn test_authorization_is_checked_before_pause() {
        let (service, _) = ledger(S, MAX);
        service.pause(owner()).unwrap();
        assert!(matches!(
            service.mint(account(2), account(2), 1),
            Err(LedgerError::Unauthorized { .. })
        ));
    }

    // =========================================================================
    // ACCESS CONTROL
    // =========================================================================

    #[test]
    fn test_grant_and_revoke_are_idempotent() {
        let (service, sink) = ledger(S, MAX);
        let a = account(2);
        let before = sink.len();

        service.grant_role(owner(), a, Role::Pauser).unwrap();
        service.grant_role(owner(), a, Role::Pauser).unwrap();
        assert!(service.has_role(&a, Role::Pauser));

        service.revoke_role(owner(), a, Role::Pauser).unwrap();
        service.revoke_role(owner(), a, Role::Pauser).unwrap();
        assert!(!service.has_role(&a, Role::Pauser));

        assert_eq!(sink.len(), before + 2);
    }

    #[test]
    fn test_non_admin_cannot_grant() {
        let (service, _) = ledger(S, MAX);
        let a = account(2);
        assert_eq!(
            service.grant_role(a, a, Role::Admin),
            Err(LedgerError::Unauthorized {
                account: a,
                role: Role::Admin
            })
        );
        assert!(service.roles_of(&a).is_empty());
    }

    #[test]
    fn test_last_admin_can_revoke_itself() {
        let (service, _) = ledger(S, MAX);

        service.revoke_role(owner(), owner(), Role::Admin).unwrap();

        assert!(!service.has_role(&owner(), Role::Admin));
        assert!(matches!(
            service.grant_role(owner(), owner(), Role::Admin),
            Err(LedgerError::Unauthorized { .. })
        ));
        // Other roles are unaffected.
        service.mint(owner(), account(2), 1).unwrap();
    }

    #[test]
    fn test_renounce_drops_only_own_role() {
        let (service, sink) = ledger(S, MAX);

        service.renounce_role(owner(), Role::Minter).unwrap();

        assert_eq!(service.roles_of(&owner()), vec![Role::Admin, Role::Pauser]);
        assert_eq!(
            sink.last().unwrap().event,
            LedgerEvent::RoleRevoked {
                account: owner(),
                role: Role::Minter,
                sender: owner()
            }
        );
    }

    // =========================================================================
    // ALLOWANCES
    // =========================================================================

    #[test]
    fn test_transfer_from_spends_allowance() {
        let (service, _) = ledger(S, MAX);
        let (spender, to) = (account(5), account(6));

        service.approve(owner(), spender, 100).unwrap();
        service.transfer_from(spender, owner(), to, 60).unwrap();

        assert_eq!(service.allowance(&owner(), &spender), 40);
        assert_eq!(service.balance_of(&to), 60);
        assert!(matches!(
            service.transfer_from(spender, owner(), to, 41),
            Err(LedgerError::InsufficientAllowance {
                available: 40,
                required: 41
            })
        ));
        assert_eq!(service.balance_of(&to), 60);
    }

    #[test]
    fn test_failed_transfer_from_keeps_allowance() {
        let (service, _) = ledger(S, MAX);
        let (holder, spender) = (account(2), account(5));
        service.transfer(owner(), holder, 10).unwrap();
        service.approve(holder, spender, 100).unwrap();

        assert!(matches!(
            service.transfer_from(spender, holder, account(6), 50),
            Err(LedgerError::InsufficientBalance { .. })
        ));
        assert_eq!(service.allowance(&holder, &spender), 100);
    }

    #[test]
    fn test_unlimited_allowance_is_not_consumed() {
        let (service, _) = ledger(S, MAX);
        let spender = account(5);

        service.approve(owner(), spender, Amount::MAX).unwrap();
        service.transfer_from(spender, owner(), account(6), 1_000).unwrap();

        assert_eq!(service.allowance(&owner(), &spender), Amount::MAX);
    }

    // =========================================================================
    // AUDIT TRAIL & SNAPSHOTS
    // =========================================================================

    #[test]
    fn test_genesis_audit_trail() {
        let (_, sink) = ledger(S, MAX);
        let events = sink.events();

        assert_eq!(events.len(), 4);
        for (event, role) in events.iter().zip(Role::ALL) {
            assert_eq!(
                *event,
                LedgerEvent::RoleGranted {
                    account: owner(),
                    role,
                    sender: owner()
                }
            );
        }
        assert_eq!(
            events[3],
            LedgerEvent::Minted {
                to: owner(),
                amount: S
            }
        );
    }

    #[test]
    fn test_snapshot_survives_json_and_restores() {
        let (service, _) = ledger(S, MAX);
        service.transfer(owner(), account(2), 123).unwrap();
        service.grant_role(owner(), account(2), Role::Minter).unwrap();
        service.approve(account(2), account(3), 9).unwrap();
        service.pause(owner()).unwrap();

        let json = serde_json::to_string_pretty(&service.snapshot()).unwrap();
        let restored = LedgerService::from_snapshot(
            serde_json::from_str(&json).unwrap(),
            Arc::new(NoOpSink),
        )
        .unwrap();

        assert_eq!(restored.snapshot(), service.snapshot());
        assert!(restored.is_paused());
        assert_eq!(restored.balance_of(&account(2)), 123);
        assert_eq!(restored.allowance(&account(2), &account(3)), 9);
        assert_eq!(restored.max_supply(), MAX);
    }
}
