//! Transaction structure and consensus serialization
//!
//! Just enough of the transaction model to build and identify the genesis
//! coinbase. Serialization follows the reference client byte for byte.

use serde::{Deserialize, Serialize};

use super::Script;
use crate::constants::Amount;
use crate::crypto::{sha256d, Hash};

/// Output index marking an input that spends nothing
pub const NULL_OUTPUT_INDEX: u32 = 0xFFFF_FFFF;

/// Sequence number of a final input
pub const SEQUENCE_FINAL: u32 = 0xFFFF_FFFF;

/// Reference to a previous transaction output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutPoint {
    /// Hash of the transaction containing the output
    pub txid: Hash,
    /// Index of the output in that transaction
    pub index: u32,
}

impl OutPoint {
    /// The outpoint used by coinbase inputs
    pub const fn null() -> Self {
        Self {
            txid: Hash::zero(),
            index: NULL_OUTPUT_INDEX,
        }
    }

    pub fn is_null(&self) -> bool {
        self.txid.is_zero() && self.index == NULL_OUTPUT_INDEX
    }
}

/// A transaction input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxIn {
    pub previous_output: OutPoint,
    pub script_sig: Script,
    pub sequence: u32,
}

/// A transaction output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxOut {
    /// Amount in base units
    pub value: Amount,
    pub script_pubkey: Script,
}

/// A complete transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub version: i32,
    pub inputs: Vec<TxIn>,
    pub outputs: Vec<TxOut>,
    /// Lock time (block height or timestamp)
    pub lock_time: u32,
}

impl Transaction {
    /// Create a coinbase transaction paying `value` to `script_pubkey`
    pub fn coinbase(script_sig: Script, value: Amount, script_pubkey: Script) -> Self {
        Self {
            version: 1,
            inputs: vec![TxIn {
                previous_output: OutPoint::null(),
                script_sig,
                sequence: SEQUENCE_FINAL,
            }],
            outputs: vec![TxOut {
                value,
                script_pubkey,
            }],
            lock_time: 0,
        }
    }

    /// Check if this is a coinbase transaction
    pub fn is_coinbase(&self) -> bool {
        self.inputs.len() == 1 && self.inputs[0].previous_output.is_null()
    }

    /// Transaction id: SHA-256d of the serialized transaction
    pub fn txid(&self) -> Hash {
        sha256d(&self.to_bytes())
    }

    /// Serialize in consensus format
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();

        bytes.extend_from_slice(&self.version.to_le_bytes());

        write_compact_size(&mut bytes, self.inputs.len() as u64);
        for input in &self.inputs {
            bytes.extend_from_slice(&input.previous_output.txid.0);
            bytes.extend_from_slice(&input.previous_output.index.to_le_bytes());
            write_script(&mut bytes, &input.script_sig);
            bytes.extend_from_slice(&input.sequence.to_le_bytes());
        }

        write_compact_size(&mut bytes, self.outputs.len() as u64);
        for output in &self.outputs {
            bytes.extend_from_slice(&output.value.to_le_bytes());
            write_script(&mut bytes, &output.script_pubkey);
        }

        bytes.extend_from_slice(&self.lock_time.to_le_bytes());

        bytes
    }

    /// Calculate total output value
    pub fn total_output_value(&self) -> Amount {
        self.outputs.iter().map(|o| o.value).sum()
    }
}

/// Append a CompactSize length prefix
pub fn write_compact_size(bytes: &mut Vec<u8>, n: u64) {
    match n {
        0..=0xfc => bytes.push(n as u8),
        0xfd..=0xffff => {
            bytes.push(0xfd);
            bytes.extend_from_slice(&(n as u16).to_le_bytes());
        }
        0x1_0000..=0xffff_ffff => {
            bytes.push(0xfe);
            bytes.extend_from_slice(&(n as u32).to_le_bytes());
        }
        _ => {
            bytes.push(0xff);
            bytes.extend_from_slice(&n.to_le_bytes());
        }
    }
}

fn write_script(bytes: &mut Vec<u8>, script: &Script) {
    write_compact_size(bytes, script.len() as u64);
    bytes.extend_from_slice(script.as_bytes());
}
