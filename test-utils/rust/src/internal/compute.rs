//! Compute unit parsing and tracking

use litesvm::types::TransactionMetadata;

/// Total compute units consumed by a transaction
pub fn get_compute_units(metadata: &TransactionMetadata) -> u64 {
    metadata.compute_units_consumed
}

/// Compute units reported for the top-level invocation of `program_id`.
/// Format: "Program <id> consumed <units> of <limit> compute units"
pub fn program_compute_units(logs: &[String], program_id: &str) -> Option<u64> {
    logs.iter()
        .filter(|log| log.starts_with(&format!("Program {} consumed", program_id)))
        .filter_map(|log| parse_compute_units(log))
        .last()
}

fn parse_compute_units(log: &str) -> Option<u64> {
    let parts: Vec<&str> = log.split_whitespace().collect();
    let idx = parts.iter().position(|part| *part == "consumed")?;
    parts.get(idx + 1)?.parse().ok()
}
