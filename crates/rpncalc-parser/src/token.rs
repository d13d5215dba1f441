// Copyright (c) 2026, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions,
// more details in file LICENSE and CONTRIBUTING.

// the parser's keyword table. `i64` is deliberately absent: an integer
// literal is recognized by falling through to base-10 parsing, never by
// keyword lookup.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(non_camel_case_types)]
pub enum Token {
    Nop,
    Top,
    Pop,
    Clr,
    Dup,
    Xch,
    Sto,
    St0,
    St1,
    St2,
    St3,
    St4,
    St5,
    St6,
    St7,
    St8,
    St9,
    Rcl,
    Rc0,
    Rc1,
    Rc2,
    Rc3,
    Rc4,
    Rc5,
    Rc6,
    Rc7,
    Rc8,
    Rc9,
    Abs,
    Neg,
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Cpl,
    And,
    Ior,
    Xor,
    Shl,
    Shr,
    Inc,
    Dec,
    Hlt,
    Rnd,
    Now,
    Fib,
    Run,
}

/// looks a token up in the fixed keyword table, including the symbolic
/// aliases (`+ - * / % ~ & | ^ << >> ++ --`). returns `None` for anything
/// that isn't a keyword, leaving numeric parsing to the caller.
pub fn lookup_keyword(token: &str) -> Option<Token> {
    use Token::*;
    Some(match token {
        "nop" => Nop,
        "top" => Top,
        "pop" => Pop,
        "clr" => Clr,
        "dup" => Dup,
        "xch" => Xch,
        "sto" => Sto,
        "st0" => St0,
        "st1" => St1,
        "st2" => St2,
        "st3" => St3,
        "st4" => St4,
        "st5" => St5,
        "st6" => St6,
        "st7" => St7,
        "st8" => St8,
        "st9" => St9,
        "rcl" => Rcl,
        "rc0" => Rc0,
        "rc1" => Rc1,
        "rc2" => Rc2,
        "rc3" => Rc3,
        "rc4" => Rc4,
        "rc5" => Rc5,
        "rc6" => Rc6,
        "rc7" => Rc7,
        "rc8" => Rc8,
        "rc9" => Rc9,
        "abs" => Abs,
        "neg" => Neg,
        "add" | "+" => Add,
        "sub" | "-" => Sub,
        "mul" | "*" => Mul,
        "div" | "/" => Div,
        "mod" | "%" => Mod,
        "cpl" | "~" => Cpl,
        "and" | "&" => And,
        "ior" | "|" => Ior,
        "xor" | "^" => Xor,
        "shl" | "<<" => Shl,
        "shr" | ">>" => Shr,
        "inc" | "++" => Inc,
        "dec" | "--" => Dec,
        "hlt" => Hlt,
        "rnd" => Rnd,
        "now" => Now,
        "fib" => Fib,
        "run" => Run,
        _ => return None,
    })
}
