// Copyright (c) 2026, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions,
// more details in file LICENSE and CONTRIBUTING.

// the bytecode-emitting listener installed by `Calculator::compile`. every
// base opcode becomes a one- or nine-byte emission; the expansion
// convenience ops (`st0`..`fib`) are never overridden here and fall through
// to the Listener trait's default bodies, which re-enter `op_i64`/`op_sto`/
// etc. on this same listener — so they compile to the same instruction
// sequence a hand-written program using the base ops would.

use rpncalc_bytecode::ByteCodeBuffer;
use rpncalc_parser::Listener;
use rpncalc_types::opcode::Opcode;
use rpncalc_types::{CalculatorError, CalculatorResult};

pub struct BytecodeListener<'a> {
    bytecode: &'a mut ByteCodeBuffer,
}

impl<'a> BytecodeListener<'a> {
    pub fn new(bytecode: &'a mut ByteCodeBuffer) -> Self {
        Self { bytecode }
    }
}

impl Listener for BytecodeListener<'_> {
    fn op_nop(&mut self) -> CalculatorResult<()> {
        self.bytecode.emit_opcode(Opcode::nop)
    }

    fn op_i64(&mut self, operand: i64) -> CalculatorResult<()> {
        self.bytecode.emit_i64(operand)
    }

    fn op_top(&mut self) -> CalculatorResult<()> {
        self.bytecode.emit_opcode(Opcode::top)
    }

    fn op_pop(&mut self) -> CalculatorResult<()> {
        self.bytecode.emit_opcode(Opcode::pop)
    }

    fn op_clr(&mut self) -> CalculatorResult<()> {
        self.bytecode.emit_opcode(Opcode::clr)
    }

    fn op_dup(&mut self) -> CalculatorResult<()> {
        self.bytecode.emit_opcode(Opcode::dup)
    }

    fn op_xch(&mut self) -> CalculatorResult<()> {
        self.bytecode.emit_opcode(Opcode::xch)
    }

    fn op_sto(&mut self) -> CalculatorResult<()> {
        self.bytecode.emit_opcode(Opcode::sto)
    }

    fn op_rcl(&mut self) -> CalculatorResult<()> {
        self.bytecode.emit_opcode(Opcode::rcl)
    }

    fn op_abs(&mut self) -> CalculatorResult<()> {
        self.bytecode.emit_opcode(Opcode::abs)
    }

    fn op_neg(&mut self) -> CalculatorResult<()> {
        self.bytecode.emit_opcode(Opcode::neg)
    }

    fn op_add(&mut self) -> CalculatorResult<()> {
        self.bytecode.emit_opcode(Opcode::add)
    }

    fn op_sub(&mut self) -> CalculatorResult<()> {
        self.bytecode.emit_opcode(Opcode::sub)
    }

    fn op_mul(&mut self) -> CalculatorResult<()> {
        self.bytecode.emit_opcode(Opcode::mul)
    }

    fn op_div(&mut self) -> CalculatorResult<()> {
        self.bytecode.emit_opcode(Opcode::div)
    }

    fn op_mod(&mut self) -> CalculatorResult<()> {
        self.bytecode.emit_opcode(Opcode::r#mod)
    }

    fn op_cpl(&mut self) -> CalculatorResult<()> {
        self.bytecode.emit_opcode(Opcode::cpl)
    }

    fn op_and(&mut self) -> CalculatorResult<()> {
        self.bytecode.emit_opcode(Opcode::and)
    }

    fn op_ior(&mut self) -> CalculatorResult<()> {
        self.bytecode.emit_opcode(Opcode::ior)
    }

    fn op_xor(&mut self) -> CalculatorResult<()> {
        self.bytecode.emit_opcode(Opcode::xor)
    }

    fn op_shl(&mut self) -> CalculatorResult<()> {
        self.bytecode.emit_opcode(Opcode::shl)
    }

    fn op_shr(&mut self) -> CalculatorResult<()> {
        self.bytecode.emit_opcode(Opcode::shr)
    }

    fn op_inc(&mut self) -> CalculatorResult<()> {
        self.bytecode.emit_opcode(Opcode::inc)
    }

    fn op_dec(&mut self) -> CalculatorResult<()> {
        self.bytecode.emit_opcode(Opcode::dec)
    }

    /// `hlt` has no bytecode tag: the reference `Compiler` never declares an
    /// override for it either, so it cannot be compiled.
    fn op_hlt(&mut self) -> CalculatorResult<()> {
        Err(CalculatorError::CompileForbidden { token: "hlt" })
    }

    fn op_run(&mut self) -> CalculatorResult<()> {
        Err(CalculatorError::CompileForbidden { token: "run" })
    }
}
