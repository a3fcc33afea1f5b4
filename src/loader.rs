use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use tracing::{debug, info};

use crate::error::LoadError;
use crate::models::Contract;

/// Loads contracts from a `.json` array or a `.csv` file with a header row.
pub fn load_path(path: &Path) -> Result<Vec<Contract>, LoadError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    let contracts = match extension.as_deref() {
        Some("json") => from_json_reader(std::fs::File::open(path)?)?,
        Some("csv") => from_csv_reader(std::fs::File::open(path)?)?,
        _ => return Err(LoadError::UnsupportedFormat(path.to_path_buf())),
    };

    info!(path = %path.display(), count = contracts.len(), "loaded contracts");
    Ok(contracts)
}

pub fn from_json_reader<R: Read>(reader: R) -> Result<Vec<Contract>, LoadError> {
    let contracts: Vec<Contract> = serde_json::from_reader(reader)?;
    ensure_unique_ids(&contracts)?;
    Ok(contracts)
}

pub fn from_csv_reader<R: Read>(reader: R) -> Result<Vec<Contract>, LoadError> {
    let mut reader = csv::Reader::from_reader(reader);
    let mut contracts = Vec::new();

    for result in reader.deserialize::<Contract>() {
        let contract = result?;
        debug!(id = contract.id, university = %contract.university, "read contract row");
        contracts.push(contract);
    }

    ensure_unique_ids(&contracts)?;
    Ok(contracts)
}

fn ensure_unique_ids(contracts: &[Contract]) -> Result<(), LoadError> {
    let mut seen = HashSet::new();
    for contract in contracts {
        if !seen.insert(contract.id) {
            return Err(LoadError::DuplicateId(contract.id));
        }
    }
    Ok(())
}
