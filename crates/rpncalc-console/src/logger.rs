// Copyright (c) 2026, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions,
// more details in file LICENSE and CONTRIBUTING.

/// five independently toggleable log levels, mirroring the original
/// console. the Calculator and the CLI front-end both address logging
/// through this trait instead of writing to a stream directly.
pub trait Logger {
    fn log_debug(&self, message: &str);
    fn log_trace(&self, message: &str);
    fn log_print(&self, message: &str);
    fn log_alert(&self, message: &str);
    fn log_error(&self, message: &str);

    fn set_debug(&mut self, enabled: bool);
    fn set_trace(&mut self, enabled: bool);
    fn set_print(&mut self, enabled: bool);
    fn set_alert(&mut self, enabled: bool);
    fn set_error(&mut self, enabled: bool);
}
