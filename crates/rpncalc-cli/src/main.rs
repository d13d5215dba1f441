// Copyright (c) 2026, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions,
// more details in file LICENSE and CONTRIBUTING.

// the only layer that is allowed to print, exit the process, or install a
// global logging subscriber; every library crate beneath it only ever
// returns a `Result` and never touches stdout/stderr directly.

mod cli;

use clap::Parser;

use cli::{Action, Cli};
use rpncalc_calculator::Calculator;
use rpncalc_console::Logger;

fn main() {
    let args = Cli::parse();

    // the subscriber's own filter is left wide open; `Console` already drops
    // messages for a disabled level before they reach `tracing`, so the
    // five explicit toggles stay the single source of truth for verbosity.
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .without_time()
        .with_target(false)
        .init();

    let mut calculator = match Calculator::new() {
        Ok(calculator) => calculator,
        Err(error) => {
            eprintln!("failed to initialize the calculator: {error}");
            std::process::exit(1);
        }
    };

    args.apply_log_levels(calculator.console_mut());

    let mut expression = String::new();
    for token in &args.tokens {
        match Action::classify(token) {
            Some(action) => {
                let outcome = match action {
                    Action::Execute => calculator.execute(&expression),
                    Action::Compile => calculator.compile(&expression),
                    Action::Run => calculator.run(),
                    Action::Clear => calculator.clear(),
                };
                if let Err(error) = outcome {
                    calculator.console_mut().log_error(&error.to_string());
                    std::process::exit(1);
                }
            }
            None => expression = token.clone(),
        }
    }
}
