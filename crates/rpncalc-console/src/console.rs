// Copyright (c) 2026, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions,
// more details in file LICENSE and CONTRIBUTING.

// forwards enabled levels onto the `tracing` façade so a `tracing-subscriber`
// installed by the binary controls the actual rendering; a level disabled
// here is dropped before it ever reaches `tracing`, so the five toggles stay
// meaningful independently of whatever global filter the subscriber applies.

use crate::logger::Logger;

/// default policy at construction: debug and trace start disabled, print,
/// alert and error start enabled. a deliberate departure from the original
/// console, which starts all five levels on; see `--verbose`/`--quiet` on
/// the CLI front-end for the escape hatch.
pub struct Console {
    debug: bool,
    trace: bool,
    print: bool,
    alert: bool,
    error: bool,
}

impl Console {
    pub fn new() -> Self {
        Self {
            debug: false,
            trace: false,
            print: true,
            alert: true,
            error: true,
        }
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger for Console {
    fn log_debug(&self, message: &str) {
        if self.debug {
            tracing::debug!("{}", message);
        }
    }

    fn log_trace(&self, message: &str) {
        if self.trace {
            tracing::trace!("{}", message);
        }
    }

    fn log_print(&self, message: &str) {
        if self.print {
            tracing::info!("{}", message);
        }
    }

    fn log_alert(&self, message: &str) {
        if self.alert {
            tracing::warn!("{}", message);
        }
    }

    fn log_error(&self, message: &str) {
        if self.error {
            tracing::error!("{}", message);
        }
    }

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

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_policy_is_quiet_debug_and_trace() {
        let console = Console::new();
        assert_eq!(console.debug, false);
        assert_eq!(console.trace, false);
        assert_eq!(console.print, true);
        assert_eq!(console.alert, true);
        assert_eq!(console.error, true);
    }

    #[test]
    fn test_toggles_are_independent() {
        let mut console = Console::new();
        console.set_print(false);
        assert_eq!(console.print, false);
        assert_eq!(console.alert, true);
        assert_eq!(console.error, true);
    }

    #[test]
    fn test_verbose_escape_hatch_enables_every_level() {
        let mut console = Console::new();
        for set in [
            Console::set_debug as fn(&mut Console, bool),
            Console::set_trace,
            Console::set_print,
            Console::set_alert,
            Console::set_error,
        ] {
            set(&mut console, true);
        }
        assert!(console.debug && console.trace && console.print && console.alert && console.error);
    }
}
