// Copyright (c) 2026, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions,
// more details in file LICENSE and CONTRIBUTING.

use rpncalc_types::{register::REGISTER_COUNT, CalculatorError};

/// the pair (operand stack, register file) every operator reads and writes.
///
/// this struct is boxed by the calculator so that its address never moves once
/// the first `compile` has baked a pointer to it into generated native code.
pub struct OperandState {
    pub stack: Vec<i64>,
    pub registers: [i64; REGISTER_COUNT],

    /// set by an `ffi::op_*` trampoline target when the operator it wraps
    /// fails. native code has no prologue/epilogue per instruction and cannot
    /// unwind, so a failing operator poisons the state instead of returning
    /// control early: every later trampoline in the same basic block becomes
    /// a no-op until this is drained by the calculator after the call.
    pub sticky_error: Option<CalculatorError>,
}

impl OperandState {
    pub fn new() -> Self {
        Self {
            stack: Vec::new(),
            registers: [0; REGISTER_COUNT],
            sticky_error: None,
        }
    }
}

impl Default for OperandState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_empty_and_zeroed() {
        let state = OperandState::new();
        assert!(state.stack.is_empty());
        assert!(state.registers.iter().all(|&cell| cell == 0));
    }
}
