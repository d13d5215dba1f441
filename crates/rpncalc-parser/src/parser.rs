// Copyright (c) 2026, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions,
// more details in file LICENSE and CONTRIBUTING.

use rpncalc_types::{CalculatorError, CalculatorResult};

use crate::listener::Listener;
use crate::token::{lookup_keyword, Token};

/// reads whitespace-separated tokens and dispatches one listener callback per
/// token. holds no state of its own: every token is looked up against the
/// keyword table, falling back to base-10 integer parsing, and an input that
/// matches neither fails with *unknown-token*.
pub struct Parser;

impl Parser {
    pub fn parse(listener: &mut impl Listener, input: &str) -> CalculatorResult<()> {
        for token in input.split_whitespace() {
            Self::dispatch(listener, token)?;
        }
        Ok(())
    }

    fn dispatch(listener: &mut impl Listener, token: &str) -> CalculatorResult<()> {
        if let Some(keyword) = lookup_keyword(token) {
            return match keyword {
                Token::Nop => listener.op_nop(),
                Token::Top => listener.op_top(),
                Token::Pop => listener.op_pop(),
                Token::Clr => listener.op_clr(),
                Token::Dup => listener.op_dup(),
                Token::Xch => listener.op_xch(),
                Token::Sto => listener.op_sto(),
                Token::St0 => listener.op_st0(),
                Token::St1 => listener.op_st1(),
                Token::St2 => listener.op_st2(),
                Token::St3 => listener.op_st3(),
                Token::St4 => listener.op_st4(),
                Token::St5 => listener.op_st5(),
                Token::St6 => listener.op_st6(),
                Token::St7 => listener.op_st7(),
                Token::St8 => listener.op_st8(),
                Token::St9 => listener.op_st9(),
                Token::Rcl => listener.op_rcl(),
                Token::Rc0 => listener.op_rc0(),
                Token::Rc1 => listener.op_rc1(),
                Token::Rc2 => listener.op_rc2(),
                Token::Rc3 => listener.op_rc3(),
                Token::Rc4 => listener.op_rc4(),
                Token::Rc5 => listener.op_rc5(),
                Token::Rc6 => listener.op_rc6(),
                Token::Rc7 => listener.op_rc7(),
                Token::Rc8 => listener.op_rc8(),
                Token::Rc9 => listener.op_rc9(),
                Token::Abs => listener.op_abs(),
                Token::Neg => listener.op_neg(),
                Token::Add => listener.op_add(),
                Token::Sub => listener.op_sub(),
                Token::Mul => listener.op_mul(),
                Token::Div => listener.op_div(),
                Token::Mod => listener.op_mod(),
                Token::Cpl => listener.op_cpl(),
                Token::And => listener.op_and(),
                Token::Ior => listener.op_ior(),
                Token::Xor => listener.op_xor(),
                Token::Shl => listener.op_shl(),
                Token::Shr => listener.op_shr(),
                Token::Inc => listener.op_inc(),
                Token::Dec => listener.op_dec(),
                Token::Hlt => listener.op_hlt(),
                Token::Rnd => listener.op_rnd(),
                Token::Now => listener.op_now(),
                Token::Fib => listener.op_fib(),
                Token::Run => listener.op_run(),
            };
        }

        if let Ok(value) = token.parse::<i64>() {
            return listener.op_i64(value);
        }

        Err(CalculatorError::UnknownToken { token: token.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[derive(Default)]
    struct RecordingListener {
        calls: Vec<String>,
    }

    impl Listener for RecordingListener {
        fn op_nop(&mut self) -> CalculatorResult<()> {
            self.calls.push("nop".into());
            Ok(())
        }
        fn op_i64(&mut self, operand: i64) -> CalculatorResult<()> {
            self.calls.push(format!("i64 {operand}"));
            Ok(())
        }
        fn op_top(&mut self) -> CalculatorResult<()> {
            self.calls.push("top".into());
            Ok(())
        }
        fn op_pop(&mut self) -> CalculatorResult<()> {
            self.calls.push("pop".into());
            Ok(())
        }
        fn op_clr(&mut self) -> CalculatorResult<()> {
            self.calls.push("clr".into());
            Ok(())
        }
        fn op_dup(&mut self) -> CalculatorResult<()> {
            self.calls.push("dup".into());
            Ok(())
        }
        fn op_xch(&mut self) -> CalculatorResult<()> {
            self.calls.push("xch".into());
            Ok(())
        }
        fn op_sto(&mut self) -> CalculatorResult<()> {
            self.calls.push("sto".into());
            Ok(())
        }
        fn op_rcl(&mut self) -> CalculatorResult<()> {
            self.calls.push("rcl".into());
            Ok(())
        }
        fn op_abs(&mut self) -> CalculatorResult<()> {
            self.calls.push("abs".into());
            Ok(())
        }
        fn op_neg(&mut self) -> CalculatorResult<()> {
            self.calls.push("neg".into());
            Ok(())
        }
        fn op_add(&mut self) -> CalculatorResult<()> {
            self.calls.push("add".into());
            Ok(())
        }
        fn op_sub(&mut self) -> CalculatorResult<()> {
            self.calls.push("sub".into());
            Ok(())
        }
        fn op_mul(&mut self) -> CalculatorResult<()> {
            self.calls.push("mul".into());
            Ok(())
        }
        fn op_div(&mut self) -> CalculatorResult<()> {
            self.calls.push("div".into());
            Ok(())
        }
        fn op_mod(&mut self) -> CalculatorResult<()> {
            self.calls.push("mod".into());
            Ok(())
        }
        fn op_cpl(&mut self) -> CalculatorResult<()> {
            self.calls.push("cpl".into());
            Ok(())
        }
        fn op_and(&mut self) -> CalculatorResult<()> {
            self.calls.push("and".into());
            Ok(())
        }
        fn op_ior(&mut self) -> CalculatorResult<()> {
            self.calls.push("ior".into());
            Ok(())
        }
        fn op_xor(&mut self) -> CalculatorResult<()> {
            self.calls.push("xor".into());
            Ok(())
        }
        fn op_shl(&mut self) -> CalculatorResult<()> {
            self.calls.push("shl".into());
            Ok(())
        }
        fn op_shr(&mut self) -> CalculatorResult<()> {
            self.calls.push("shr".into());
            Ok(())
        }
        fn op_inc(&mut self) -> CalculatorResult<()> {
            self.calls.push("inc".into());
            Ok(())
        }
        fn op_dec(&mut self) -> CalculatorResult<()> {
            self.calls.push("dec".into());
            Ok(())
        }
        fn op_hlt(&mut self) -> CalculatorResult<()> {
            self.calls.push("hlt".into());
            Ok(())
        }
        fn op_run(&mut self) -> CalculatorResult<()> {
            self.calls.push("run".into());
            Ok(())
        }
    }

    #[test]
    fn test_parse_dispatches_literals_and_keywords() {
        let mut listener = RecordingListener::default();
        Parser::parse(&mut listener, "7 5 add").unwrap();
        assert_eq!(listener.calls, vec!["i64 7", "i64 5", "add"]);
    }

    #[test]
    fn test_parse_expands_convenience_ops_through_default_bodies() {
        let mut listener = RecordingListener::default();
        Parser::parse(&mut listener, "rnd").unwrap();
        assert_eq!(listener.calls, vec!["i64 30", "rcl"]);
    }

    #[test]
    fn test_parse_accepts_symbolic_aliases() {
        let mut listener = RecordingListener::default();
        Parser::parse(&mut listener, "1 2 + --").unwrap();
        assert_eq!(listener.calls, vec!["i64 1", "i64 2", "add", "dec"]);
    }

    #[test]
    fn test_parse_rejects_unknown_token() {
        let mut listener = RecordingListener::default();
        let error = Parser::parse(&mut listener, "nonsense").unwrap_err();
        assert_eq!(error, CalculatorError::UnknownToken { token: "nonsense".to_string() });
    }

    #[test]
    fn test_parse_rejects_i64_as_a_bare_keyword() {
        let mut listener = RecordingListener::default();
        let error = Parser::parse(&mut listener, "i64").unwrap_err();
        assert_eq!(error, CalculatorError::UnknownToken { token: "i64".to_string() });
    }

    #[test]
    fn test_parse_ignores_repeated_whitespace() {
        let mut listener = RecordingListener::default();
        Parser::parse(&mut listener, "  1   2  add  ").unwrap();
        assert_eq!(listener.calls, vec!["i64 1", "i64 2", "add"]);
    }
}
