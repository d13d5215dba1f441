// Copyright (c) 2026, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions,
// more details in file LICENSE and CONTRIBUTING.

// the façade that owns every piece of VM state and is itself the
// direct-execution Listener, exactly as the reference `Calculator` both owns
// `Operands`/`ByteCode`/`HostCode` and implements `Listener` directly rather
// than delegating to a sibling object. `compile` installs a separate
// `BytecodeListener` instead.

use rpncalc_bytecode::ByteCodeBuffer;
use rpncalc_console::{Console, Logger};
use rpncalc_hostcode::{BasicBlock, HostCodeBuffer};
use rpncalc_parser::{Listener, Parser};
use rpncalc_state::operand::OperandState;
use rpncalc_state::operators;
use rpncalc_types::CalculatorResult;

use crate::bytecode_listener::BytecodeListener;

/// owns the stack/register file, the bytecode buffer, and the mapped
/// host-code page. must not move once a `compile` has baked its operand
/// state's address into generated code — construct once, keep behind a
/// stable `&mut` for the rest of the process.
pub struct Calculator {
    operands: Box<OperandState>,
    bytecode: ByteCodeBuffer,
    hostcode: HostCodeBuffer,
    console: Console,
}

impl Calculator {
    pub fn new() -> CalculatorResult<Self> {
        Ok(Self {
            operands: Box::new(OperandState::new()),
            bytecode: ByteCodeBuffer::default(),
            hostcode: HostCodeBuffer::new()?,
            console: Console::new(),
        })
    }

    /// the console is owned here but exposed so a front-end can flip log
    /// levels (`--verbose`, `--quiet`, ...) before issuing a command.
    pub fn console_mut(&mut self) -> &mut Console {
        &mut self.console
    }

    /// direct-executes `expression` against the live operand state. the
    /// bytecode and host-code buffers are untouched.
    pub fn execute(&mut self, expression: &str) -> CalculatorResult<()> {
        self.console.log_print(&format!("executing expression <{expression}>"));
        let result = Parser::parse(self, expression);
        if result.is_err() {
            self.console.log_error("error while executing!");
        }
        self.log_result();
        result
    }

    /// resets both buffers and emits bytecode for `expression`. `run` cannot
    /// appear in `expression` (*compile-forbidden*), nor can `hlt`.
    pub fn compile(&mut self, expression: &str) -> CalculatorResult<()> {
        self.console.log_print(&format!("compiling expression <{expression}>"));
        self.bytecode.reset();
        self.hostcode.reset();
        let result = {
            let mut listener = BytecodeListener::new(&mut self.bytecode);
            Parser::parse(&mut listener, expression)
        };
        if result.is_err() {
            self.console.log_error("error while compiling!");
        }
        self.log_result();
        result
    }

    /// invokes the cached native translation if one exists; otherwise
    /// translates the compiled bytecode, performing every operator's effect
    /// on the operand state as it warms the cache.
    pub fn run(&mut self) -> CalculatorResult<()> {
        self.console.log_print("running the compiled expression...");
        let result = self.run_or_translate();
        if result.is_err() {
            self.console.log_error("error while running!");
        }
        self.log_result();
        result
    }

    fn run_or_translate(&mut self) -> CalculatorResult<()> {
        let block = BasicBlock::new(self.hostcode.begin(), self.hostcode.cursor_ptr());
        if block.valid() {
            self.console.log_trace("the bytecode has already been translated, executing the generated machine code...");
            block.invoke()?;
            if let Some(error) = self.operands.sticky_error.take() {
                return Err(error);
            }
            return Ok(());
        }
        self.console.log_trace("the bytecode has never been translated, executing bytecode and translating to machine code...");
        let translated = rpncalc_jit::translate(&self.bytecode, &mut self.hostcode, &mut self.operands);
        if translated.is_err() {
            // an incomplete translation (no epilogue) must never be mistaken
            // for a cached basic block on a later `run`.
            self.hostcode.reset();
        }
        translated
    }

    pub fn clear(&mut self) -> CalculatorResult<()> {
        self.console.log_print("clearing the stack ...");
        let result = self.op_clr();
        if result.is_err() {
            self.console.log_error("error while clearing!");
        }
        self.log_result();
        result
    }

    pub fn result(&mut self) -> CalculatorResult<i64> {
        operators::op_top(&mut self.operands)
    }

    fn log_result(&mut self) {
        match self.result() {
            Ok(value) => self.console.log_print(&format!("result is {value}")),
            Err(_) => self.console.log_print("no result <empty stack>"),
        }
    }
}

impl Listener for Calculator {
    fn op_nop(&mut self) -> CalculatorResult<()> {
        operators::op_nop(&mut self.operands).map(drop)
    }

    fn op_i64(&mut self, operand: i64) -> CalculatorResult<()> {
        operators::op_i64(&mut self.operands, operand).map(drop)
    }

    fn op_top(&mut self) -> CalculatorResult<()> {
        operators::op_top(&mut self.operands).map(drop)
    }

    fn op_pop(&mut self) -> CalculatorResult<()> {
        operators::op_pop(&mut self.operands).map(drop)
    }

    fn op_clr(&mut self) -> CalculatorResult<()> {
        operators::op_clr(&mut self.operands).map(drop)
    }

    fn op_dup(&mut self) -> CalculatorResult<()> {
        operators::op_dup(&mut self.operands).map(drop)
    }

    fn op_xch(&mut self) -> CalculatorResult<()> {
        operators::op_xch(&mut self.operands).map(drop)
    }

    fn op_sto(&mut self) -> CalculatorResult<()> {
        operators::op_sto(&mut self.operands).map(drop)
    }

    fn op_rcl(&mut self) -> CalculatorResult<()> {
        operators::op_rcl(&mut self.operands).map(drop)
    }

    fn op_abs(&mut self) -> CalculatorResult<()> {
        operators::op_abs(&mut self.operands).map(drop)
    }

    fn op_neg(&mut self) -> CalculatorResult<()> {
        operators::op_neg(&mut self.operands).map(drop)
    }

    fn op_add(&mut self) -> CalculatorResult<()> {
        operators::op_add(&mut self.operands).map(drop)
    }

    fn op_sub(&mut self) -> CalculatorResult<()> {
        operators::op_sub(&mut self.operands).map(drop)
    }

    fn op_mul(&mut self) -> CalculatorResult<()> {
        operators::op_mul(&mut self.operands).map(drop)
    }

    fn op_div(&mut self) -> CalculatorResult<()> {
        operators::op_div(&mut self.operands).map(drop)
    }

    fn op_mod(&mut self) -> CalculatorResult<()> {
        operators::op_mod(&mut self.operands).map(drop)
    }

    fn op_cpl(&mut self) -> CalculatorResult<()> {
        operators::op_cpl(&mut self.operands).map(drop)
    }

    fn op_and(&mut self) -> CalculatorResult<()> {
        operators::op_and(&mut self.operands).map(drop)
    }

    fn op_ior(&mut self) -> CalculatorResult<()> {
        operators::op_ior(&mut self.operands).map(drop)
    }

    fn op_xor(&mut self) -> CalculatorResult<()> {
        operators::op_xor(&mut self.operands).map(drop)
    }

    fn op_shl(&mut self) -> CalculatorResult<()> {
        operators::op_shl(&mut self.operands).map(drop)
    }

    fn op_shr(&mut self) -> CalculatorResult<()> {
        operators::op_shr(&mut self.operands).map(drop)
    }

    fn op_inc(&mut self) -> CalculatorResult<()> {
        operators::op_inc(&mut self.operands).map(drop)
    }

    fn op_dec(&mut self) -> CalculatorResult<()> {
        operators::op_dec(&mut self.operands).map(drop)
    }

    fn op_hlt(&mut self) -> CalculatorResult<()> {
        operators::op_hlt(&mut self.operands).map(drop)
    }

    fn op_run(&mut self) -> CalculatorResult<()> {
        self.run()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rpncalc_types::CalculatorError;

    #[test]
    fn test_execute_leaves_result_on_stack() {
        let mut calculator = Calculator::new().unwrap();
        calculator.execute("7 5 add").unwrap();
        assert_eq!(calculator.result(), Ok(12));
    }

    #[test]
    fn test_clear_empties_the_stack() {
        let mut calculator = Calculator::new().unwrap();
        calculator.execute("1 2 3").unwrap();
        calculator.clear().unwrap();
        assert_eq!(calculator.result(), Err(CalculatorError::StackUnderflow));
    }

    #[test]
    fn test_execute_run_invokes_whatever_is_currently_compiled() {
        // `run` is not tied to the expression passed to `execute`; with
        // nothing compiled yet it translates an empty program and is a no-op.
        let mut calculator = Calculator::new().unwrap();
        calculator.execute("1 run").unwrap();
        assert_eq!(calculator.result(), Ok(1));
    }

    #[test]
    fn test_compile_then_run_computes_the_same_result_as_execute() {
        let mut direct = Calculator::new().unwrap();
        direct.execute("6 7 mul").unwrap();

        let mut compiled = Calculator::new().unwrap();
        compiled.compile("6 7 mul").unwrap();
        compiled.run().unwrap();

        assert_eq!(direct.result(), compiled.result());
        assert_eq!(compiled.result(), Ok(42));
    }

    #[test]
    fn test_second_run_reuses_the_cached_translation() {
        let mut calculator = Calculator::new().unwrap();
        calculator.compile("1 1 add").unwrap();
        calculator.run().unwrap();
        assert_eq!(calculator.result(), Ok(2));
        calculator.clear().unwrap();
        calculator.run().unwrap();
        assert_eq!(calculator.result(), Ok(2));
    }

    #[test]
    fn test_compile_rejects_run_token() {
        let mut calculator = Calculator::new().unwrap();
        let error = calculator.compile("1 run").unwrap_err();
        assert_eq!(error, CalculatorError::CompileForbidden { token: "run" });
    }

    #[test]
    fn test_run_without_prior_compile_sees_an_empty_program() {
        let mut calculator = Calculator::new().unwrap();
        calculator.run().unwrap();
        assert_eq!(calculator.result(), Err(CalculatorError::StackUnderflow));
    }

    #[test]
    fn test_run_propagates_arithmetic_zero_and_resets_hostcode() {
        let mut calculator = Calculator::new().unwrap();
        calculator.compile("1 0 div").unwrap();
        let error = calculator.run().unwrap_err();
        assert_eq!(error, CalculatorError::ArithmeticZero);
    }

    #[test]
    fn test_cached_run_propagates_a_failure_the_first_run_never_hit() {
        // the first `run` translates against a divisor that is non-zero, so
        // it warms the cache successfully; a later `run` replays the same
        // native trampolines against a stack state that now divides by
        // zero, and that failure must surface through the cached fast path
        // too, not just through the translate-and-eagerly-execute path.
        let mut calculator = Calculator::new().unwrap();
        calculator.execute("10 2").unwrap();
        calculator.compile("div").unwrap();
        calculator.run().unwrap();
        assert_eq!(calculator.result(), Ok(5));

        calculator.execute("8 0").unwrap();
        let error = calculator.run().unwrap_err();
        assert_eq!(error, CalculatorError::ArithmeticZero);
    }

    #[test]
    fn test_fib_expansion_advances_the_recurrence_through_register_20() {
        let mut calculator = Calculator::new().unwrap();
        calculator.execute("1 1 fib").unwrap();
        assert_eq!(calculator.result(), Ok(2));
        calculator.execute("fib").unwrap();
        assert_eq!(calculator.result(), Ok(3));
    }
}
