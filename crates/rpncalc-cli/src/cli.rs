// Copyright (c) 2026, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions,
// more details in file LICENSE and CONTRIBUTING.

// argument shape for the thin CLI front-end: a handful of logging toggles
// plus a flat run of positional tokens mixing action words with the RPN
// expression they act on. the parser/core crates never see this struct;
// `main` resolves it into a sequence of `Calculator` calls.

use clap::Parser;
use rpncalc_console::Logger;

#[derive(Parser, Debug)]
#[command(
    name = "rpncalc",
    about = "A tiered RPN integer calculator: interpret, compile, or JIT-run expressions."
)]
pub struct Cli {
    /// enable every log level (debug, trace, print, alert, error)
    #[arg(long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// disable every log level
    #[arg(long, conflicts_with = "verbose")]
    pub quiet: bool,

    #[arg(long, action = clap::ArgAction::SetTrue, overrides_with = "no_debug")]
    pub debug: bool,
    #[arg(long = "no-debug", action = clap::ArgAction::SetTrue, overrides_with = "debug")]
    pub no_debug: bool,

    #[arg(long, action = clap::ArgAction::SetTrue, overrides_with = "no_trace")]
    pub trace: bool,
    #[arg(long = "no-trace", action = clap::ArgAction::SetTrue, overrides_with = "trace")]
    pub no_trace: bool,

    #[arg(long, action = clap::ArgAction::SetTrue, overrides_with = "no_print")]
    pub print: bool,
    #[arg(long = "no-print", action = clap::ArgAction::SetTrue, overrides_with = "print")]
    pub no_print: bool,

    #[arg(long, action = clap::ArgAction::SetTrue, overrides_with = "no_alert")]
    pub alert: bool,
    #[arg(long = "no-alert", action = clap::ArgAction::SetTrue, overrides_with = "alert")]
    pub no_alert: bool,

    #[arg(long, action = clap::ArgAction::SetTrue, overrides_with = "no_error")]
    pub error: bool,
    #[arg(long = "no-error", action = clap::ArgAction::SetTrue, overrides_with = "error")]
    pub no_error: bool,

    /// action words (`execute`, `compile`, `run`, `clear`) and the RPN
    /// expression, interleaved in the order given on the command line; the
    /// most recently seen non-action token is "the" expression in effect for
    /// every action that follows it.
    pub tokens: Vec<String>,
}

impl Cli {
    /// applies `--verbose`/`--quiet` first as a blanket baseline, then the
    /// five per-level toggles on top, so `--quiet --print` means "quiet
    /// except for print-level lines" rather than being rejected outright.
    pub fn apply_log_levels(&self, console: &mut dyn Logger) {
        if self.verbose {
            console.set_debug(true);
            console.set_trace(true);
            console.set_print(true);
            console.set_alert(true);
            console.set_error(true);
        }
        if self.quiet {
            console.set_debug(false);
            console.set_trace(false);
            console.set_print(false);
            console.set_alert(false);
            console.set_error(false);
        }

        if self.debug {
            console.set_debug(true);
        }
        if self.no_debug {
            console.set_debug(false);
        }
        if self.trace {
            console.set_trace(true);
        }
        if self.no_trace {
            console.set_trace(false);
        }
        if self.print {
            console.set_print(true);
        }
        if self.no_print {
            console.set_print(false);
        }
        if self.alert {
            console.set_alert(true);
        }
        if self.no_alert {
            console.set_alert(false);
        }
        if self.error {
            console.set_error(true);
        }
        if self.no_error {
            console.set_error(false);
        }
    }
}

/// the four words the core understands as actions rather than expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Execute,
    Compile,
    Run,
    Clear,
}

impl Action {
    /// classifies one positional token, returning `None` when it should
    /// instead become the current RPN expression.
    pub fn classify(token: &str) -> Option<Action> {
        match token {
            "execute" => Some(Action::Execute),
            "compile" => Some(Action::Compile),
            "run" => Some(Action::Run),
            "clear" => Some(Action::Clear),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rpncalc_console::Console;

    #[test]
    fn test_classify_recognizes_the_four_action_words() {
        assert_eq!(Action::classify("execute"), Some(Action::Execute));
        assert_eq!(Action::classify("compile"), Some(Action::Compile));
        assert_eq!(Action::classify("run"), Some(Action::Run));
        assert_eq!(Action::classify("clear"), Some(Action::Clear));
    }

    #[test]
    fn test_classify_treats_anything_else_as_an_expression_token() {
        assert_eq!(Action::classify("2 3 add"), None);
        assert_eq!(Action::classify("dup"), None);
    }

    fn parse(args: &[&str]) -> Cli {
        let mut full = vec!["rpncalc"];
        full.extend_from_slice(args);
        Cli::parse_from(full)
    }

    #[test]
    fn test_verbose_enables_every_level() {
        struct Probe {
            debug: bool,
            trace: bool,
            print: bool,
            alert: bool,
            error: bool,
        }
        impl Logger for Probe {
            fn log_debug(&self, _message: &str) {}
            fn log_trace(&self, _message: &str) {}
            fn log_print(&self, _message: &str) {}
            fn log_alert(&self, _message: &str) {}
            fn log_error(&self, _message: &str) {}
            fn set_debug(&mut self, enabled: bool) {
                self.debug = enabled;
            }
            fn set_trace(&mut self, enabled: bool) {
                self.trace = enabled;
            }
            fn set_print(&mut self, enabled: bool) {
                self.print = enabled;
            }
            fn set_alert(&mut self, enabled: bool) {
                self.alert = enabled;
            }
            fn set_error(&mut self, enabled: bool) {
                self.error = enabled;
            }
        }

        let cli = parse(&["--verbose", "run"]);
        let mut probe = Probe {
            debug: false,
            trace: false,
            print: false,
            alert: false,
            error: false,
        };
        cli.apply_log_levels(&mut probe);
        assert!(probe.debug && probe.trace && probe.print && probe.alert && probe.error);
    }

    #[test]
    fn test_no_print_overrides_verbose() {
        struct Probe {
            print: bool,
        }
        impl Logger for Probe {
            fn log_debug(&self, _message: &str) {}
            fn log_trace(&self, _message: &str) {}
            fn log_print(&self, _message: &str) {}
            fn log_alert(&self, _message: &str) {}
            fn log_error(&self, _message: &str) {}
            fn set_debug(&mut self, _enabled: bool) {}
            fn set_trace(&mut self, _enabled: bool) {}
            fn set_print(&mut self, enabled: bool) {
                self.print = enabled;
            }
            fn set_alert(&mut self, _enabled: bool) {}
            fn set_error(&mut self, _enabled: bool) {}
        }

        let cli = parse(&["--verbose", "--no-print", "clear"]);
        let mut probe = Probe { print: true };
        cli.apply_log_levels(&mut probe);
        assert!(!probe.print);
    }

    #[test]
    fn test_later_flag_wins_between_a_toggle_and_its_negation() {
        let cli = parse(&["--debug", "--no-debug", "clear"]);
        assert!(!cli.debug);
        assert!(cli.no_debug);
    }

    #[test]
    fn test_tokens_collect_actions_and_expression_in_order() {
        let cli = parse(&["compile", "6 7 mul", "run", "run"]);
        assert_eq!(cli.tokens, vec!["compile", "6 7 mul", "run", "run"]);
    }
}
