// Copyright (c) 2026, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions,
// more details in file LICENSE and CONTRIBUTING.

use rpncalc_types::opcode::Opcode;
use rpncalc_types::{CalculatorError, CalculatorResult};

/// default capacity of a freshly constructed buffer, matching the reference.
pub const DEFAULT_CAPACITY: usize = 1024;

/// an append-only byte sink of fixed capacity, producing little-endian
/// encodings of the VM's opcodes and their immediates.
///
/// `reset` rewinds the write cursor and repaints the whole region with
/// `OP_NOP` so that stale bytes past the cursor from a previous program are
/// never mistaken for live instructions (the translator stops at the cursor
/// regardless, but a disassembly of the raw buffer would otherwise show
/// garbage tails).
pub struct ByteCodeBuffer {
    bytes: Vec<u8>,
    cursor: usize,
}

impl ByteCodeBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            bytes: vec![Opcode::nop as u8; capacity],
            cursor: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.bytes.len()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bytes[..self.cursor]
    }

    pub fn reset(&mut self) {
        self.bytes.fill(Opcode::nop as u8);
        self.cursor = 0;
    }

    pub fn write_byte(&mut self, byte: u8) -> CalculatorResult<()> {
        if self.cursor >= self.bytes.len() {
            return Err(CalculatorError::BytecodeFull);
        }
        self.bytes[self.cursor] = byte;
        self.cursor += 1;
        Ok(())
    }

    pub fn emit_word(&mut self, value: u16) -> CalculatorResult<()> {
        for byte in value.to_le_bytes() {
            self.write_byte(byte)?;
        }
        Ok(())
    }

    pub fn emit_long(&mut self, value: u32) -> CalculatorResult<()> {
        for byte in value.to_le_bytes() {
            self.write_byte(byte)?;
        }
        Ok(())
    }

    pub fn emit_quad(&mut self, value: u64) -> CalculatorResult<()> {
        for byte in value.to_le_bytes() {
            self.write_byte(byte)?;
        }
        Ok(())
    }

    /// emits the 1-byte tag of any opcode that carries no immediate.
    pub fn emit_opcode(&mut self, opcode: Opcode) -> CalculatorResult<()> {
        debug_assert_eq!(opcode.immediate_len(), 0);
        self.write_byte(opcode as u8)
    }

    /// emits `OP_I64`, the only opcode with an immediate: 1 tag byte followed
    /// by 8 little-endian bytes.
    pub fn emit_i64(&mut self, operand: i64) -> CalculatorResult<()> {
        self.write_byte(Opcode::i64 as u8)?;
        self.emit_quad(operand as u64)
    }

    /// iterates the instructions written so far (up to the cursor, never
    /// into the padding beyond it).
    pub fn instructions(&self) -> Instructions<'_> {
        Instructions {
            bytes: self.as_slice(),
            offset: 0,
        }
    }
}

impl Default for ByteCodeBuffer {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

/// one decoded instruction: its opcode and, for `OP_I64`, its immediate.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Instruction {
    pub opcode: Opcode,
    pub immediate: Option<i64>,
}

pub struct Instructions<'a> {
    bytes: &'a [u8],
    offset: usize,
}

impl Iterator for Instructions<'_> {
    type Item = CalculatorResult<Instruction>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.offset >= self.bytes.len() {
            return None;
        }

        let tag = self.bytes[self.offset];
        let opcode = match Opcode::from_u8(tag) {
            Some(opcode) => opcode,
            None => {
                self.offset += 1;
                return Some(Err(CalculatorError::InvalidBytecode { tag }));
            }
        };

        self.offset += 1;

        let immediate = if opcode.immediate_len() > 0 {
            let end = self.offset + opcode.immediate_len();
            if end > self.bytes.len() {
                return Some(Err(CalculatorError::InvalidBytecode { tag }));
            }
            let mut raw = [0u8; 8];
            raw.copy_from_slice(&self.bytes[self.offset..end]);
            self.offset = end;
            Some(i64::from_le_bytes(raw))
        } else {
            None
        };

        Some(Ok(Instruction { opcode, immediate }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_reset_fills_capacity_with_nop() {
        let mut buffer = ByteCodeBuffer::new(16);
        buffer.emit_opcode(Opcode::add).unwrap();
        buffer.reset();
        assert_eq!(buffer.cursor(), 0);
        assert!(buffer.bytes.iter().all(|&b| b == Opcode::nop as u8));
    }

    #[test]
    fn test_write_byte_fails_when_full() {
        let mut buffer = ByteCodeBuffer::new(1);
        buffer.write_byte(0x01).unwrap();
        assert_eq!(buffer.write_byte(0x02), Err(CalculatorError::BytecodeFull));
    }

    #[test]
    fn test_emit_i64_round_trips_through_instructions() {
        let mut buffer = ByteCodeBuffer::new(DEFAULT_CAPACITY);
        buffer.emit_i64(-7).unwrap();
        buffer.emit_opcode(Opcode::add).unwrap();

        let decoded: Vec<_> = buffer.instructions().map(|i| i.unwrap()).collect();
        assert_eq!(
            decoded,
            vec![
                Instruction {
                    opcode: Opcode::i64,
                    immediate: Some(-7)
                },
                Instruction {
                    opcode: Opcode::add,
                    immediate: None
                },
            ]
        );
    }

    #[test]
    fn test_instructions_stop_at_cursor_not_capacity() {
        let mut buffer = ByteCodeBuffer::new(DEFAULT_CAPACITY);
        buffer.emit_opcode(Opcode::nop).unwrap();
        assert_eq!(buffer.instructions().count(), 1);
    }

    #[test]
    fn test_instructions_reject_unknown_tag() {
        let mut buffer = ByteCodeBuffer::new(DEFAULT_CAPACITY);
        buffer.write_byte(0xff).unwrap();
        let mut iter = buffer.instructions();
        assert_eq!(iter.next(), Some(Err(CalculatorError::InvalidBytecode { tag: 0xff })));
    }
}
