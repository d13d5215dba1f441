// Copyright (c) 2026, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions,
// more details in file LICENSE and CONTRIBUTING.

// the pure operator functions that drive the stack machine. every operator
// here is the single source of truth for VM semantics: the direct executor,
// the bytecode-eager-execution path and the JIT trampolines (via `ffi`) all
// bottom out in these functions, so whichever tier ran a program the
// observable stack/register effects are identical.
//
// each operator returns the value it leaves on top of the stack (matching
// the reference `Operators::op_*` return convention), even though most
// callers only care whether it succeeded.

use rpncalc_types::register::{REGISTER_COUNT, REGISTER_NOW, REGISTER_RND};
use rpncalc_types::{CalculatorError, CalculatorResult};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::operand::OperandState;

fn pop(state: &mut OperandState) -> CalculatorResult<i64> {
    state.stack.pop().ok_or(CalculatorError::StackUnderflow)
}

fn push(state: &mut OperandState, value: i64) -> i64 {
    state.stack.push(value);
    value
}

fn register_index(index: i64) -> CalculatorResult<usize> {
    if (0..REGISTER_COUNT as i64).contains(&index) {
        Ok(index as usize)
    } else {
        Err(CalculatorError::RegisterRange { index })
    }
}

fn read_register(state: &mut OperandState, index: i64) -> CalculatorResult<i64> {
    let slot = register_index(index)?;
    let value = match index {
        i if i == REGISTER_RND => {
            let previous = state.registers[slot];
            let next = previous
                .wrapping_mul(1_103_515_245)
                .wrapping_add(12_345);
            state.registers[slot] = next;
            next
        }
        i if i == REGISTER_NOW => {
            let now = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default()
                .as_millis() as i64;
            state.registers[slot] = now;
            now
        }
        _ => state.registers[slot],
    };
    Ok(value)
}

fn write_register(state: &mut OperandState, index: i64, value: i64) -> CalculatorResult<()> {
    let slot = register_index(index)?;
    state.registers[slot] = value;
    Ok(())
}

pub fn op_nop(_state: &mut OperandState) -> CalculatorResult<i64> {
    Ok(0)
}

pub fn op_i64(state: &mut OperandState, operand: i64) -> CalculatorResult<i64> {
    Ok(push(state, operand))
}

pub fn op_top(state: &mut OperandState) -> CalculatorResult<i64> {
    state.stack.last().copied().ok_or(CalculatorError::StackUnderflow)
}

pub fn op_pop(state: &mut OperandState) -> CalculatorResult<i64> {
    pop(state)
}

pub fn op_clr(state: &mut OperandState) -> CalculatorResult<i64> {
    let mut operand = 0;
    while let Some(value) = state.stack.pop() {
        operand = value;
    }
    Ok(operand)
}

pub fn op_dup(state: &mut OperandState) -> CalculatorResult<i64> {
    let value = pop(state)?;
    push(state, value);
    Ok(push(state, value))
}

pub fn op_xch(state: &mut OperandState) -> CalculatorResult<i64> {
    let op2 = pop(state)?;
    let op1 = pop(state)?;
    push(state, op2);
    Ok(push(state, op1))
}

pub fn op_sto(state: &mut OperandState) -> CalculatorResult<i64> {
    let index = pop(state)?;
    let value = pop(state)?;
    write_register(state, index, value)?;
    Ok(value)
}

pub fn op_rcl(state: &mut OperandState) -> CalculatorResult<i64> {
    let index = pop(state)?;
    let value = read_register(state, index)?;
    Ok(push(state, value))
}

pub fn op_abs(state: &mut OperandState) -> CalculatorResult<i64> {
    let value = pop(state)?;
    Ok(push(state, value.wrapping_abs()))
}

pub fn op_neg(state: &mut OperandState) -> CalculatorResult<i64> {
    let value = pop(state)?;
    Ok(push(state, value.wrapping_neg()))
}

pub fn op_add(state: &mut OperandState) -> CalculatorResult<i64> {
    let op2 = pop(state)?;
    let op1 = pop(state)?;
    Ok(push(state, op1.wrapping_add(op2)))
}

pub fn op_sub(state: &mut OperandState) -> CalculatorResult<i64> {
    let op2 = pop(state)?;
    let op1 = pop(state)?;
    Ok(push(state, op1.wrapping_sub(op2)))
}

pub fn op_mul(state: &mut OperandState) -> CalculatorResult<i64> {
    let op2 = pop(state)?;
    let op1 = pop(state)?;
    Ok(push(state, op1.wrapping_mul(op2)))
}

pub fn op_div(state: &mut OperandState) -> CalculatorResult<i64> {
    let op2 = pop(state)?;
    let op1 = pop(state)?;
    if op2 == 0 {
        return Err(CalculatorError::ArithmeticZero);
    }
    Ok(push(state, op1.wrapping_div(op2)))
}

pub fn op_mod(state: &mut OperandState) -> CalculatorResult<i64> {
    let op2 = pop(state)?;
    let op1 = pop(state)?;
    if op2 == 0 {
        return Err(CalculatorError::ArithmeticZero);
    }
    Ok(push(state, op1.wrapping_rem(op2)))
}

pub fn op_cpl(state: &mut OperandState) -> CalculatorResult<i64> {
    let value = pop(state)?;
    Ok(push(state, !value))
}

pub fn op_and(state: &mut OperandState) -> CalculatorResult<i64> {
    let op2 = pop(state)?;
    let op1 = pop(state)?;
    Ok(push(state, op1 & op2))
}

pub fn op_ior(state: &mut OperandState) -> CalculatorResult<i64> {
    let op2 = pop(state)?;
    let op1 = pop(state)?;
    Ok(push(state, op1 | op2))
}

pub fn op_xor(state: &mut OperandState) -> CalculatorResult<i64> {
    let op2 = pop(state)?;
    let op1 = pop(state)?;
    Ok(push(state, op1 ^ op2))
}

pub fn op_shl(state: &mut OperandState) -> CalculatorResult<i64> {
    let op2 = pop(state)?;
    let op1 = pop(state)?;
    Ok(push(state, op1.wrapping_shl(op2 as u32)))
}

pub fn op_shr(state: &mut OperandState) -> CalculatorResult<i64> {
    let op2 = pop(state)?;
    let op1 = pop(state)?;
    Ok(push(state, op1.wrapping_shr(op2 as u32)))
}

pub fn op_inc(state: &mut OperandState) -> CalculatorResult<i64> {
    let value = pop(state)?;
    Ok(push(state, value.wrapping_add(1)))
}

pub fn op_dec(state: &mut OperandState) -> CalculatorResult<i64> {
    let value = pop(state)?;
    Ok(push(state, value.wrapping_sub(1)))
}

pub fn op_hlt(state: &mut OperandState) -> CalculatorResult<i64> {
    let value = pop(state)?;
    if value > 0 {
        std::thread::sleep(std::time::Duration::from_millis(value as u64));
    }
    Ok(value)
}
