//! Instruction reference table loaded from the bundled data resource.
//!
//! The table maps uppercase Z80 mnemonics to their documentation records.
//! It is loaded exactly once at startup and is immutable afterwards, so it
//! can be shared freely across handlers behind an `Arc`.

use std::collections::HashMap;

use serde::Deserialize;
use thiserror::Error;

static BUNDLED_INSTRUCTIONS: &[u8] = include_bytes!("../data/instructions.json");

/// Failure to parse the instruction data resource.
///
/// Only produced at load time; after a successful load every lookup is
/// infallible.
#[derive(Debug, Error)]
pub enum DataFormatError {
    #[error("instruction data is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("instruction `{mnemonic}` has a variant row without leading display text")]
    MissingVariantText { mnemonic: String },
}

/// One concrete form of an instruction, e.g. `LD A,B` vs `LD A,C`.
#[derive(Debug, Clone, PartialEq)]
pub struct InstructionVariant {
    /// The textual form shown verbatim in the panel.
    pub text: String,
    /// Timing, opcode, and size columns from the source row. Carried as
    /// opaque data; not rendered anywhere yet.
    pub detail: Vec<serde_json::Value>,
}

/// Documentation record for a single mnemonic.
#[derive(Debug, Clone, PartialEq)]
pub struct InstructionRecord {
    /// Uppercase mnemonic, identical to the table key.
    pub mnemonic: String,
    /// Short human-readable summary.
    pub usage: String,
    /// Additional notes, absent for most instructions.
    pub usage_extended: Option<String>,
    /// Variants in source order; order is significant for display.
    pub variants: Vec<InstructionVariant>,
}

/// On-disk shape of a record: `usage`, optional `usage_extended`, and an
/// `instructions` array of rows whose first column is the display text.
#[derive(Debug, Deserialize)]
struct RawRecord {
    usage: String,
    #[serde(default)]
    usage_extended: Option<String>,
    #[serde(default)]
    instructions: Vec<Vec<serde_json::Value>>,
}

/// Immutable mnemonic-to-record mapping.
#[derive(Debug, Default, Clone)]
pub struct InstructionTable {
    records: HashMap<String, InstructionRecord>,
}

impl InstructionTable {
    /// Parse an instruction table from raw JSON bytes.
    ///
    /// Keys are normalized to uppercase so that lookups and keys share the
    /// same normalization.
    pub fn load(source: &[u8]) -> Result<Self, DataFormatError> {
        let raw: HashMap<String, RawRecord> = serde_json::from_slice(source)?;

        let mut records = HashMap::with_capacity(raw.len());
        for (key, value) in raw {
            let mnemonic = key.to_uppercase();
            let mut variants = Vec::with_capacity(value.instructions.len());
            for row in value.instructions {
                let mut columns = row.into_iter();
                let text = match columns.next() {
                    Some(serde_json::Value::String(text)) => text,
                    _ => return Err(DataFormatError::MissingVariantText { mnemonic }),
                };
                variants.push(InstructionVariant {
                    text,
                    detail: columns.collect(),
                });
            }
            records.insert(
                mnemonic.clone(),
                InstructionRecord {
                    mnemonic,
                    usage: value.usage,
                    usage_extended: value.usage_extended,
                    variants,
                },
            );
        }

        Ok(Self { records })
    }

    /// Load the table compiled into the binary from `data/instructions.json`.
    pub fn bundled() -> Result<Self, DataFormatError> {
        Self::load(BUNDLED_INSTRUCTIONS)
    }

    /// Look up a record by its uppercase mnemonic.
    pub fn get(&self, mnemonic: &str) -> Option<&InstructionRecord> {
        self.records.get(mnemonic)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over all records in unspecified order.
    pub fn records(&self) -> impl Iterator<Item = &InstructionRecord> {
        self.records.values()
    }
}
