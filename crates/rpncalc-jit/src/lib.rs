// Copyright (c) 2026, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions,
// more details in file LICENSE and CONTRIBUTING.

//! translates a decoded bytecode stream into a sequence of native call
//! trampolines in a [`HostCodeBuffer`], while eagerly performing the same
//! effect against a live [`OperandState`].
//!
//! the eager execution is not an optimization: the reference translator
//! interleaves "perform this operator now" with "also bake a trampoline for
//! next time" in the same pass, so the very first `run()` of a program both
//! produces its result and warms the JIT cache. every subsequent `run()` on
//! the same compiled program skips this module entirely and just invokes the
//! cached [`BasicBlock`](rpncalc_hostcode::BasicBlock).

use rpncalc_bytecode::ByteCodeBuffer;
use rpncalc_hostcode::HostCodeBuffer;
use rpncalc_state::operand::OperandState;
use rpncalc_state::{ffi, operators};
use rpncalc_types::opcode::Opcode;
use rpncalc_types::CalculatorResult;

type Eager = fn(&mut OperandState) -> CalculatorResult<i64>;

/// resolves an opcode to the pure operator function that implements it
/// eagerly and the `extern "C"` thunk whose address gets baked into the
/// emitted `mov rax, imm64`. `Opcode::i64` carries an immediate and is
/// handled separately by the caller.
fn dispatch(opcode: Opcode) -> (Eager, ffi::OperatorThunk) {
    match opcode {
        Opcode::nop => (operators::op_nop, ffi::op_nop),
        Opcode::i64 => unreachable!("OP_I64 is dispatched through emit_i64, not dispatch()"),
        Opcode::top => (operators::op_top, ffi::op_top),
        Opcode::pop => (operators::op_pop, ffi::op_pop),
        Opcode::clr => (operators::op_clr, ffi::op_clr),
        Opcode::dup => (operators::op_dup, ffi::op_dup),
        Opcode::xch => (operators::op_xch, ffi::op_xch),
        Opcode::sto => (operators::op_sto, ffi::op_sto),
        Opcode::rcl => (operators::op_rcl, ffi::op_rcl),
        Opcode::abs => (operators::op_abs, ffi::op_abs),
        Opcode::neg => (operators::op_neg, ffi::op_neg),
        Opcode::add => (operators::op_add, ffi::op_add),
        Opcode::sub => (operators::op_sub, ffi::op_sub),
        Opcode::mul => (operators::op_mul, ffi::op_mul),
        Opcode::div => (operators::op_div, ffi::op_div),
        Opcode::r#mod => (operators::op_mod, ffi::op_mod),
        Opcode::cpl => (operators::op_cpl, ffi::op_cpl),
        Opcode::and => (operators::op_and, ffi::op_and),
        Opcode::ior => (operators::op_ior, ffi::op_ior),
        Opcode::xor => (operators::op_xor, ffi::op_xor),
        Opcode::shl => (operators::op_shl, ffi::op_shl),
        Opcode::shr => (operators::op_shr, ffi::op_shr),
        Opcode::inc => (operators::op_inc, ffi::op_inc),
        Opcode::dec => (operators::op_dec, ffi::op_dec),
    }
}

fn emit_trampoline(hostcode: &mut HostCodeBuffer, operands_addr: u64, thunk: ffi::OperatorThunk) -> CalculatorResult<()> {
    hostcode.mov_rdi_imm64(operands_addr)?;
    hostcode.mov_rax_imm64(thunk as usize as u64)?;
    hostcode.call_rax()
}

fn emit_i64_trampoline(hostcode: &mut HostCodeBuffer, operands_addr: u64, immediate: i64) -> CalculatorResult<()> {
    hostcode.mov_rsi_imm64(immediate as u64)?;
    hostcode.mov_rdi_imm64(operands_addr)?;
    hostcode.mov_rax_imm64(ffi::op_i64 as usize as u64)?;
    hostcode.call_rax()
}

/// translates every instruction in `bytecode` (up to its write cursor) into
/// the host-code buffer, bracketed by a System-V prologue and epilogue, while
/// performing each operator's effect on `operands` as it is translated.
///
/// on the first error — an invalid tag, a host-code overflow, or the eagerly
/// executed operator itself failing (e.g. *arithmetic-zero*) — translation
/// stops immediately without emitting an epilogue; the caller is responsible
/// for leaving the host-code buffer in a state that cannot later be mistaken
/// for a finished translation.
///
/// `operands` must be the same boxed, pinned allocation the calculator will
/// keep using for the lifetime of the compiled program: its address is baked
/// into every emitted `mov rdi, imm64` as a literal constant.
pub fn translate(bytecode: &ByteCodeBuffer, hostcode: &mut HostCodeBuffer, operands: &mut OperandState) -> CalculatorResult<()> {
    let operands_addr = operands as *mut OperandState as u64;

    hostcode.push_rbp()?;
    hostcode.mov_rbp_rsp()?;

    for instruction in bytecode.instructions() {
        let instruction = instruction?;
        match instruction.opcode {
            Opcode::i64 => {
                let immediate = instruction.immediate.expect("OP_I64 always decodes an immediate");
                operators::op_i64(operands, immediate)?;
                emit_i64_trampoline(hostcode, operands_addr, immediate)?;
            }
            opcode => {
                let (eager, thunk) = dispatch(opcode);
                eager(operands)?;
                emit_trampoline(hostcode, operands_addr, thunk)?;
            }
        }
    }

    hostcode.mov_rsp_rbp()?;
    hostcode.pop_rbp()?;
    hostcode.ret()
}
