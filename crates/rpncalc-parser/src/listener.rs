// Copyright (c) 2026, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions,
// more details in file LICENSE and CONTRIBUTING.

// the sole polymorphism point of the parser: direct execution and bytecode
// compilation are both listeners, and the parser never knows which one it
// drives. `op_run` has no default body since its meaning is not shared
// between the two: the direct listener hands off to the JIT, the compiling
// listener has nothing sensible to emit and must fail.

use rpncalc_types::register::{REGISTER_FIB, REGISTER_NOW, REGISTER_RND};
use rpncalc_types::CalculatorResult;

pub trait Listener {
    fn op_nop(&mut self) -> CalculatorResult<()>;
    fn op_i64(&mut self, operand: i64) -> CalculatorResult<()>;
    fn op_top(&mut self) -> CalculatorResult<()>;
    fn op_pop(&mut self) -> CalculatorResult<()>;
    fn op_clr(&mut self) -> CalculatorResult<()>;
    fn op_dup(&mut self) -> CalculatorResult<()>;
    fn op_xch(&mut self) -> CalculatorResult<()>;
    fn op_sto(&mut self) -> CalculatorResult<()>;
    fn op_rcl(&mut self) -> CalculatorResult<()>;
    fn op_abs(&mut self) -> CalculatorResult<()>;
    fn op_neg(&mut self) -> CalculatorResult<()>;
    fn op_add(&mut self) -> CalculatorResult<()>;
    fn op_sub(&mut self) -> CalculatorResult<()>;
    fn op_mul(&mut self) -> CalculatorResult<()>;
    fn op_div(&mut self) -> CalculatorResult<()>;
    fn op_mod(&mut self) -> CalculatorResult<()>;
    fn op_cpl(&mut self) -> CalculatorResult<()>;
    fn op_and(&mut self) -> CalculatorResult<()>;
    fn op_ior(&mut self) -> CalculatorResult<()>;
    fn op_xor(&mut self) -> CalculatorResult<()>;
    fn op_shl(&mut self) -> CalculatorResult<()>;
    fn op_shr(&mut self) -> CalculatorResult<()>;
    fn op_inc(&mut self) -> CalculatorResult<()>;
    fn op_dec(&mut self) -> CalculatorResult<()>;
    fn op_hlt(&mut self) -> CalculatorResult<()>;

    /// direct execution jumps into (or first translates, then warms) the
    /// JIT; bytecode compilation has nothing to emit for it and fails.
    fn op_run(&mut self) -> CalculatorResult<()>;

    fn op_st0(&mut self) -> CalculatorResult<()> {
        self.op_i64(0)?;
        self.op_sto()
    }

    fn op_st1(&mut self) -> CalculatorResult<()> {
        self.op_i64(1)?;
        self.op_sto()
    }

    fn op_st2(&mut self) -> CalculatorResult<()> {
        self.op_i64(2)?;
        self.op_sto()
    }

    fn op_st3(&mut self) -> CalculatorResult<()> {
        self.op_i64(3)?;
        self.op_sto()
    }

    fn op_st4(&mut self) -> CalculatorResult<()> {
        self.op_i64(4)?;
        self.op_sto()
    }

    fn op_st5(&mut self) -> CalculatorResult<()> {
        self.op_i64(5)?;
        self.op_sto()
    }

    fn op_st6(&mut self) -> CalculatorResult<()> {
        self.op_i64(6)?;
        self.op_sto()
    }

    fn op_st7(&mut self) -> CalculatorResult<()> {
        self.op_i64(7)?;
        self.op_sto()
    }

    fn op_st8(&mut self) -> CalculatorResult<()> {
        self.op_i64(8)?;
        self.op_sto()
    }

    fn op_st9(&mut self) -> CalculatorResult<()> {
        self.op_i64(9)?;
        self.op_sto()
    }

    fn op_rc0(&mut self) -> CalculatorResult<()> {
        self.op_i64(0)?;
        self.op_rcl()
    }

    fn op_rc1(&mut self) -> CalculatorResult<()> {
        self.op_i64(1)?;
        self.op_rcl()
    }

    fn op_rc2(&mut self) -> CalculatorResult<()> {
        self.op_i64(2)?;
        self.op_rcl()
    }

    fn op_rc3(&mut self) -> CalculatorResult<()> {
        self.op_i64(3)?;
        self.op_rcl()
    }

    fn op_rc4(&mut self) -> CalculatorResult<()> {
        self.op_i64(4)?;
        self.op_rcl()
    }

    fn op_rc5(&mut self) -> CalculatorResult<()> {
        self.op_i64(5)?;
        self.op_rcl()
    }

    fn op_rc6(&mut self) -> CalculatorResult<()> {
        self.op_i64(6)?;
        self.op_rcl()
    }

    fn op_rc7(&mut self) -> CalculatorResult<()> {
        self.op_i64(7)?;
        self.op_rcl()
    }

    fn op_rc8(&mut self) -> CalculatorResult<()> {
        self.op_i64(8)?;
        self.op_rcl()
    }

    fn op_rc9(&mut self) -> CalculatorResult<()> {
        self.op_i64(9)?;
        self.op_rcl()
    }

    fn op_rnd(&mut self) -> CalculatorResult<()> {
        self.op_i64(REGISTER_RND as i64)?;
        self.op_rcl()
    }

    fn op_now(&mut self) -> CalculatorResult<()> {
        self.op_i64(REGISTER_NOW as i64)?;
        self.op_rcl()
    }

    /// one step of a Fibonacci recurrence, using register 20 as the running
    /// previous term: `dup; i64 20; sto; add; i64 20; rcl; xch`.
    fn op_fib(&mut self) -> CalculatorResult<()> {
        self.op_dup()?;
        self.op_i64(REGISTER_FIB as i64)?;
        self.op_sto()?;
        self.op_add()?;
        self.op_i64(REGISTER_FIB as i64)?;
        self.op_rcl()?;
        self.op_xch()
    }
}
