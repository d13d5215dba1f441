// Copyright (c) 2026, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions,
// more details in file LICENSE and CONTRIBUTING.

/// number of cells in the register file.
pub const REGISTER_COUNT: usize = 32;

/// register 30 is a pseudo-random cell: every `rcl` mutates it with a
/// linear-congruential step before returning the new value.
pub const REGISTER_RND: i64 = 30;

/// register 31 is a clock cell: every `rcl` overwrites it with the current
/// milliseconds-since-epoch before returning it.
pub const REGISTER_NOW: i64 = 31;

/// register used by the `fib` convenience opcode to hold the recurrence state.
pub const REGISTER_FIB: i64 = 20;
