// Copyright (c) 2026, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions,
// more details in file LICENSE and CONTRIBUTING.

// extern "C" trampoline targets. the translator bakes the address of each of
// these (`op_add as usize`, etc.) into the native code it emits as the
// immediate operand of a `mov rax, imm64` — see rpncalc-jit. native code has
// no unwind machinery, so a failing operator cannot propagate a `Result`
// across the `call rax`; instead it is recorded on `OperandState::sticky_error`
// and every trampoline called afterwards within the same basic block becomes
// a no-op until the calculator drains it once the call returns.

use rpncalc_types::CalculatorResult;

use crate::operand::OperandState;
use crate::operators;

pub type OperatorThunk = extern "C" fn(*mut OperandState);
pub type OperatorThunkI64 = extern "C" fn(*mut OperandState, i64);

unsafe fn guarded(state: *mut OperandState, op: impl FnOnce(&mut OperandState) -> CalculatorResult<i64>) {
    let state = &mut *state;
    if state.sticky_error.is_some() {
        return;
    }
    if let Err(error) = op(state) {
        state.sticky_error = Some(error);
    }
}

macro_rules! thunk {
    ($name:ident, $target:path) => {
        pub extern "C" fn $name(state: *mut OperandState) {
            unsafe { guarded(state, $target) }
        }
    };
}

thunk!(op_nop, operators::op_nop);
thunk!(op_top, operators::op_top);
thunk!(op_pop, operators::op_pop);
thunk!(op_clr, operators::op_clr);
thunk!(op_dup, operators::op_dup);
thunk!(op_xch, operators::op_xch);
thunk!(op_sto, operators::op_sto);
thunk!(op_rcl, operators::op_rcl);
thunk!(op_abs, operators::op_abs);
thunk!(op_neg, operators::op_neg);
thunk!(op_add, operators::op_add);
thunk!(op_sub, operators::op_sub);
thunk!(op_mul, operators::op_mul);
thunk!(op_div, operators::op_div);
thunk!(op_mod, operators::op_mod);
thunk!(op_cpl, operators::op_cpl);
thunk!(op_and, operators::op_and);
thunk!(op_ior, operators::op_ior);
thunk!(op_xor, operators::op_xor);
thunk!(op_shl, operators::op_shl);
thunk!(op_shr, operators::op_shr);
thunk!(op_inc, operators::op_inc);
thunk!(op_dec, operators::op_dec);

pub extern "C" fn op_i64(state: *mut OperandState, operand: i64) {
    unsafe { guarded(state, |s| operators::op_i64(s, operand)) }
}
