//! LiteSVM wrapper: program deployment, fee payer routing and log capture

use std::collections::HashMap;

use litesvm::LiteSVM;
use solana_clock::Clock;
use solana_compute_budget::compute_budget::ComputeBudget;
use solana_sdk::{pubkey::Pubkey, rent::Rent, signature::Keypair, signer::Signer};

use crate::{
    errors::{Result, VmError},
    internal::conversions::to_lite_pubkey,
};

const MAX_COMPUTE_UNIT_LIMIT: u64 = 1_400_000;

pub struct Vm {
    pub svm: LiteSVM,

    /// address -> keypair bytes, so signers can be re-materialized
    keypairs: HashMap<Pubkey, [u8; 64]>,

    fee_payer: Option<Pubkey>,

    /// Logs of the most recent successful transaction
    last_tx_logs: Option<Vec<String>>,

    /// Logs of the most recent failed transaction
    last_error_logs: Option<Vec<String>>,
}

impl std::fmt::Debug for Vm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Vm")
            .field("fee_payer", &self.fee_payer)
            .finish_non_exhaustive()
    }
}

impl Vm {
    pub fn new() -> Self {
        let mut compute_budget = ComputeBudget::new_with_defaults(false);
        compute_budget.compute_unit_limit = MAX_COMPUTE_UNIT_LIMIT;

        let mut svm = LiteSVM::new()
            .with_compute_budget(compute_budget)
            .with_transaction_history(50);

        let now = chrono::Utc::now().timestamp();
        svm.set_sysvar::<Clock>(&Clock {
            slot: 1000,
            epoch_start_timestamp: now,
            epoch: 100,
            leader_schedule_epoch: 101,
            unix_timestamp: now,
        });

        Self {
            svm,
            keypairs: HashMap::new(),
            fee_payer: None,
            last_tx_logs: None,
            last_error_logs: None,
        }
    }

    pub(crate) fn register_keypair(&mut self, keypair: &Keypair) {
        self.keypairs.insert(keypair.pubkey(), keypair.to_bytes());
    }

    fn keypair(&self, address: &Pubkey) -> Option<Keypair> {
        self.keypairs
            .get(address)
            .and_then(|bytes| Keypair::try_from(bytes.as_slice()).ok())
    }

    /// Pay every transaction fee from `payer`, so the signing owner's lamports
    /// move only by what the program moves.
    pub fn set_fee_payer(&mut self, payer: &Keypair) {
        self.register_keypair(payer);
        self.fee_payer = Some(payer.pubkey());
    }

    pub(crate) fn fee_payer_keypair(&self) -> Option<Keypair> {
        self.fee_payer.and_then(|addr| self.keypair(&addr))
    }

    /// Deploy a compiled program from a `.so` file
    pub fn add_program_from_file(&mut self, program_id: &Pubkey, file_path: &str) -> Result<()> {
        let bytecode = std::fs::read(file_path)?;
        self.svm
            .add_program(to_lite_pubkey(program_id), &bytecode)
            .map_err(|e| VmError::DeploymentFailed(format!("{:?}", e)))
    }

    /// Rent-exempt minimum for an account holding `data_len` bytes
    pub fn minimum_balance(&self, data_len: usize) -> u64 {
        Rent::default().minimum_balance(data_len)
    }

    pub fn last_tx_logs(&self) -> Option<&Vec<String>> {
        self.last_tx_logs.as_ref()
    }

    pub(crate) fn record_success(&mut self, logs: Vec<String>) {
        self.last_error_logs = None;
        self.last_tx_logs = Some(logs);
    }

    pub(crate) fn record_failure(&mut self, logs: Vec<String>) {
        self.last_error_logs = (!logs.is_empty()).then_some(logs);
    }

    pub(crate) fn clear_last_error_logs(&mut self) {
        self.last_error_logs = None;
    }

    pub(crate) fn last_error_logs(&self) -> Vec<String> {
        self.last_error_logs.clone().unwrap_or_default()
    }

    /// Whether `err` or the logs of the last failed transaction mention `expected`
    pub(crate) fn revert_matches(&self, expected: &str, err: &VmError) -> bool {
        err.to_string().contains(expected)
            || self
                .last_error_logs
                .iter()
                .flatten()
                .any(|log| log.contains(expected))
    }
}
