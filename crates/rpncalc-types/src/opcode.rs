// Copyright (c) 2026, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions,
// more details in file LICENSE and CONTRIBUTING.

// RPN calculator bytecode instructions are fixed-width except for one case:
//
// - every opcode is 1 byte wide
// - `i64` is the only opcode carrying an immediate: 1 opcode byte + 8 little-endian
//   immediate bytes
//
// there is no alignment requirement: unlike word/register machines the stream is
// read and written one byte at a time.

#[repr(u8)]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[allow(non_camel_case_types)]
pub enum Opcode {
    nop = 0x00, // no operation, also used as buffer padding
    i64 = 0x01, // (param: operand:int64) push a 64-bit literal
    top = 0x02,
    pop = 0x03,
    clr = 0x04,
    dup = 0x05,
    xch = 0x06,
    sto = 0x07,
    rcl = 0x08,
    abs = 0x09,
    neg = 0x0a,
    add = 0x0b,
    sub = 0x0c,
    mul = 0x0d,
    div = 0x0e,
    r#mod = 0x0f,
    cpl = 0x10,
    and = 0x11,
    ior = 0x12,
    xor = 0x13,
    shl = 0x14,
    shr = 0x15,
    inc = 0x16,
    dec = 0x17,
}

impl Opcode {
    /// number of immediate bytes following the 1-byte tag.
    pub fn immediate_len(self) -> usize {
        match self {
            Opcode::i64 => 8,
            _ => 0,
        }
    }

    /// the mnemonic used by the disassembler and by error messages.
    pub fn mnemonic(self) -> &'static str {
        match self {
            Opcode::nop => "nop",
            Opcode::i64 => "i64",
            Opcode::top => "top",
            Opcode::pop => "pop",
            Opcode::clr => "clr",
            Opcode::dup => "dup",
            Opcode::xch => "xch",
            Opcode::sto => "sto",
            Opcode::rcl => "rcl",
            Opcode::abs => "abs",
            Opcode::neg => "neg",
            Opcode::add => "add",
            Opcode::sub => "sub",
            Opcode::mul => "mul",
            Opcode::div => "div",
            Opcode::r#mod => "mod",
            Opcode::cpl => "cpl",
            Opcode::and => "and",
            Opcode::ior => "ior",
            Opcode::xor => "xor",
            Opcode::shl => "shl",
            Opcode::shr => "shr",
            Opcode::inc => "inc",
            Opcode::dec => "dec",
        }
    }

    /// reverse-lookup from a raw byte, used by the bytecode reader and the translator.
    pub fn from_u8(tag: u8) -> Option<Opcode> {
        match tag {
            0x00 => Some(Opcode::nop),
            0x01 => Some(Opcode::i64),
            0x02 => Some(Opcode::top),
            0x03 => Some(Opcode::pop),
            0x04 => Some(Opcode::clr),
            0x05 => Some(Opcode::dup),
            0x06 => Some(Opcode::xch),
            0x07 => Some(Opcode::sto),
            0x08 => Some(Opcode::rcl),
            0x09 => Some(Opcode::abs),
            0x0a => Some(Opcode::neg),
            0x0b => Some(Opcode::add),
            0x0c => Some(Opcode::sub),
            0x0d => Some(Opcode::mul),
            0x0e => Some(Opcode::div),
            0x0f => Some(Opcode::r#mod),
            0x10 => Some(Opcode::cpl),
            0x11 => Some(Opcode::and),
            0x12 => Some(Opcode::ior),
            0x13 => Some(Opcode::xor),
            0x14 => Some(Opcode::shl),
            0x15 => Some(Opcode::shr),
            0x16 => Some(Opcode::inc),
            0x17 => Some(Opcode::dec),
            _ => None,
        }
    }
}
