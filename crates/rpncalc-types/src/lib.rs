// Copyright (c) 2026, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions,
// more details in file LICENSE and CONTRIBUTING.

pub mod error;
pub mod opcode;
pub mod register;

pub use error::{CalculatorError, CalculatorResult};
pub use opcode::Opcode;
