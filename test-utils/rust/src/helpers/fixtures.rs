use crate::{
    builder::ProgramArtifact,
    errors::{Result, VmError},
};
use solana_sdk::pubkey::Pubkey;

/// Shared lookups for program fixtures.
pub struct BaseFixture;

impl BaseFixture {
    /// Find `program_name` under `target/deploy`, from the workspace root or a member crate
    pub fn find_program_path(program_name: &str) -> Option<String> {
        ["", "../", "../../"]
            .iter()
            .map(|prefix| format!("{}target/deploy/{}", prefix, program_name))
            .find(|path| std::path::Path::new(path).exists())
    }

    /// Resolve a compiled program, failing with [`VmError::ProgramNotFound`]
    /// when it has not been built yet.
    pub fn locate_artifact(
        program_id: Pubkey,
        name: &str,
        program_name: &str,
    ) -> Result<ProgramArtifact> {
        let path = Self::find_program_path(program_name)
            .ok_or_else(|| VmError::ProgramNotFound(program_name.to_string()))?;
        Ok(ProgramArtifact::new(program_id, name, path))
    }
}
