//! Transaction assembly and execution

use crate::{
    core::vm::Vm,
    errors::{Result, VmError},
    internal::conversions::{to_lite_instruction, to_lite_pubkey},
};
use litesvm::types::{FailedTransactionMetadata, TransactionMetadata};
use solana_keypair::Keypair as LiteKeypair;
use solana_message::{Message, VersionedMessage};
use solana_sdk::{
    instruction::Instruction,
    signature::{Keypair, Signer},
};
use solana_transaction::versioned::VersionedTransaction;

pub struct TransactionBuilder<'vm> {
    vm: &'vm mut Vm,
    instructions: Vec<Instruction>,
    signers: Vec<Keypair>,
}

fn clone_keypair(keypair: &Keypair) -> Result<Keypair> {
    Keypair::try_from(&keypair.to_bytes()[..])
        .map_err(|e| VmError::Custom(format!("Invalid keypair bytes: {}", e)))
}

fn to_lite_keypair(keypair: &Keypair) -> Result<LiteKeypair> {
    LiteKeypair::try_from(&keypair.to_bytes()[..])
        .map_err(|e| VmError::TransactionFailed(format!("Invalid signer: {}", e)))
}

impl<'vm> TransactionBuilder<'vm> {
    pub fn new(vm: &'vm mut Vm) -> Self {
        Self {
            vm,
            instructions: vec![],
            signers: vec![],
        }
    }

    pub fn instruction(mut self, ix: Instruction) -> Self {
        self.instructions.push(ix);
        self
    }

    pub fn signer(mut self, keypair: &Keypair) -> Self {
        if let Ok(kp) = clone_keypair(keypair) {
            self.signers.push(kp);
        }
        self
    }

    /// Send the transaction, keeping its logs for later assertions
    pub fn execute(self) -> Result<TransactionMetadata> {
        let (tx, vm) = self.build_transaction()?;

        match vm.svm.send_transaction(tx) {
            Ok(metadata) => {
                vm.record_success(metadata.logs.clone());
                Ok(metadata)
            }
            Err(e) => {
                vm.record_failure(e.meta.logs.clone());
                Err(VmError::TransactionFailed(describe_failure(&e)))
            }
        }
    }

    /// Legacy transaction paid by the VM fee payer, or by the first signer when none is set.
    /// Every transaction gets a fresh blockhash so repeated identical calls are not deduplicated.
    fn build_transaction(self) -> Result<(VersionedTransaction, &'vm mut Vm)> {
        let mut signers = self.signers;

        let payer = match self.vm.fee_payer_keypair() {
            Some(payer) => payer,
            None => clone_keypair(signers.first().ok_or(VmError::NoSigners)?)?,
        };
        if signers.iter().all(|s| s.pubkey() != payer.pubkey()) {
            signers.insert(0, clone_keypair(&payer)?);
        }

        self.vm.svm.expire_blockhash();
        let recent_blockhash = self.vm.svm.latest_blockhash();

        let instructions: Vec<_> = self
            .instructions
            .into_iter()
            .map(to_lite_instruction)
            .collect();
        let message = Message::new_with_blockhash(
            &instructions,
            Some(&to_lite_pubkey(&payer.pubkey())),
            &recent_blockhash,
        );

        let lite_signers = signers
            .iter()
            .map(to_lite_keypair)
            .collect::<Result<Vec<_>>>()?;
        let signer_refs: Vec<&LiteKeypair> = lite_signers.iter().collect();

        let tx = VersionedTransaction::try_new(VersionedMessage::Legacy(message), &signer_refs)
            .map_err(|e| VmError::TransactionFailed(format!("Failed to create tx: {}", e)))?;

        Ok((tx, self.vm))
    }
}

fn describe_failure(err: &FailedTransactionMetadata) -> String {
    if err.meta.logs.is_empty() {
        format!("{:?}", err.err)
    } else {
        format!("{:?}\nProgram logs:\n{}", err.err, err.meta.logs.join("\n"))
    }
}

impl Vm {
    pub fn execute_instruction(
        &mut self,
        ix: Instruction,
        signer: &Keypair,
    ) -> Result<TransactionMetadata> {
        TransactionBuilder::new(self)
            .instruction(ix)
            .signer(signer)
            .execute()
    }
}
