use std::path::PathBuf;

use crate::{core::vm::Vm, errors::Result};
use solana_sdk::pubkey::Pubkey;

/// Assembles a [`Vm`] with its programs deployed
#[derive(Debug, Clone, Default)]
pub struct VmBuilder {
    programs: Vec<ProgramArtifact>,
}

impl VmBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_program(mut self, artifact: ProgramArtifact) -> Self {
        self.programs.push(artifact);
        self
    }

    pub fn build(self) -> Result<Vm> {
        let mut vm = Vm::new();

        for artifact in &self.programs {
            let path = artifact.so_path.to_string_lossy();
            vm.add_program_from_file(&artifact.program_id, &path)?;
            tracing::debug!("deployed {} ({}) from {}", artifact.name, artifact.program_id, path);
        }

        Ok(vm)
    }
}

/// A compiled BPF program and the id it is deployed under
#[derive(Debug, Clone)]
pub struct ProgramArtifact {
    program_id: Pubkey,
    name: String,
    so_path: PathBuf,
}

impl ProgramArtifact {
    pub fn new(program_id: Pubkey, name: impl Into<String>, so_path: impl Into<PathBuf>) -> Self {
        Self {
            program_id,
            name: name.into(),
            so_path: so_path.into(),
        }
    }
}
