//! Script construction
//!
//! Only what the chain parameters need: pushing numbers and data, and
//! appending single opcodes. Scripts are never executed here.

use serde::{Deserialize, Serialize};

/// Opcodes used when building parameter scripts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Opcode {
    Op0 = 0x00,
    PushData1 = 0x4c,
    PushData2 = 0x4d,
    PushData4 = 0x4e,
    Op1Negate = 0x4f,
    Op1 = 0x51,
    CheckSig = 0xac,
}

/// Raw script bytes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Script(pub Vec<u8>);

impl Script {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Push an integer, using the small-integer opcodes where they exist
    pub fn push_int(mut self, n: i64) -> Self {
        match n {
            0 => self.0.push(Opcode::Op0 as u8),
            -1 => self.0.push(Opcode::Op1Negate as u8),
            1..=16 => self.0.push(Opcode::Op1 as u8 + (n as u8 - 1)),
            _ => return self.push_slice(&script_num_bytes(n)),
        }
        self
    }

    /// Push the minimal script-number encoding of `n` as data, never as a
    /// small-integer opcode
    pub fn push_script_num(self, n: i64) -> Self {
        self.push_slice(&script_num_bytes(n))
    }

    /// Push data with the shortest push prefix for its length
    pub fn push_slice(mut self, data: &[u8]) -> Self {
        let len = data.len();
        if len < Opcode::PushData1 as usize {
            self.0.push(len as u8);
        } else if len <= 0xff {
            self.0.push(Opcode::PushData1 as u8);
            self.0.push(len as u8);
        } else if len <= 0xffff {
            self.0.push(Opcode::PushData2 as u8);
            self.0.extend_from_slice(&(len as u16).to_le_bytes());
        } else {
            self.0.push(Opcode::PushData4 as u8);
            self.0.extend_from_slice(&(len as u32).to_le_bytes());
        }
        self.0.extend_from_slice(data);
        self
    }

    pub fn push_opcode(mut self, opcode: Opcode) -> Self {
        self.0.push(opcode as u8);
        self
    }
}

impl From<Vec<u8>> for Script {
    fn from(bytes: Vec<u8>) -> Self {
        Script(bytes)
    }
}

/// Minimal little-endian sign-magnitude encoding of a script number
pub fn script_num_bytes(n: i64) -> Vec<u8> {
    let mut out = Vec::new();
    let negative = n < 0;
    let mut abs = n.unsigned_abs();

    while abs > 0 {
        out.push((abs & 0xff) as u8);
        abs >>= 8;
    }

    // The top bit carries the sign, so add a byte when it is already taken
    if let Some(last) = out.last_mut() {
        if *last & 0x80 != 0 {
            out.push(if negative { 0x80 } else { 0x00 });
        } else if negative {
            *last |= 0x80;
        }
    }

    out
}
