// DebugTargets - Debugger Test Targets
// Copyright (C) 2026 Andrii Shylenko
//
// This software is released under the MIT License.
// See the LICENSE file in the project root for full license information.

//! Abort signals polled at the top of every driver iteration.

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal;
use std::io::{self, IsTerminal};
use std::time::Duration;
use tracing::{debug, warn};

pub trait AbortSignal {
    fn abort_requested(&mut self) -> io::Result<bool>;
}

/// Aborts on any key press. Holds the terminal in raw mode while alive.
#[derive(Debug)]
pub struct KeypressAbort {
    _private: (),
}

impl KeypressAbort {
    pub fn new() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        debug!("Terminal switched to raw mode");
        Ok(Self { _private: () })
    }
}

impl Drop for KeypressAbort {
    fn drop(&mut self) {
        if let Err(e) = terminal::disable_raw_mode() {
            warn!("Failed to restore terminal mode: {}", e);
        }
    }
}

impl AbortSignal for KeypressAbort {
    fn abort_requested(&mut self) -> io::Result<bool> {
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    return Ok(true);
                }
            }
        }
        Ok(false)
    }
}

/// Aborts once `limit` polls have returned `false`.
#[derive(Debug, Clone)]
pub struct IterationLimit {
    remaining: u64,
}

impl IterationLimit {
    pub fn new(limit: u64) -> Self {
        Self { remaining: limit }
    }
}

impl AbortSignal for IterationLimit {
    fn abort_requested(&mut self) -> io::Result<bool> {
        if self.remaining == 0 {
            return Ok(true);
        }
        self.remaining -= 1;
        Ok(false)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Never;

impl AbortSignal for Never {
    fn abort_requested(&mut self) -> io::Result<bool> {
        Ok(false)
    }
}

/// Aborts as soon as any inner signal does.
#[derive(Default)]
pub struct AnyOf(pub Vec<Box<dyn AbortSignal>>);

impl AbortSignal for AnyOf {
    fn abort_requested(&mut self) -> io::Result<bool> {
        for signal in &mut self.0 {
            if signal.abort_requested()? {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

/// Keypress abort when stdin is a terminal, plus an optional iteration limit.
pub fn from_terminal(iterations: Option<u64>) -> Box<dyn AbortSignal> {
    combine(io::stdin().is_terminal(), iterations)
}

fn combine(interactive: bool, iterations: Option<u64>) -> Box<dyn AbortSignal> {
    let mut signals: Vec<Box<dyn AbortSignal>> = Vec::new();

    if interactive {
        match KeypressAbort::new() {
            Ok(keypress) => signals.push(Box::new(keypress)),
            Err(e) => warn!("Keypress abort unavailable: {}", e),
        }
    } else {
        debug!("stdin is not a terminal; keypress abort disabled");
    }

    if let Some(limit) = iterations {
        signals.push(Box::new(IterationLimit::new(limit)));
    }

    match signals.len() {
        0 => Box::new(Never),
        1 => signals.remove(0),
        _ => Box::new(AnyOf(signals)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iteration_limit() {
        let mut limit = IterationLimit::new(2);
        assert!(!limit.abort_requested().unwrap());
        assert!(!limit.abort_requested().unwrap());
        assert!(limit.abort_requested().unwrap());
        assert!(limit.abort_requested().unwrap());
    }

    #[test]
    fn test_zero_limit_aborts_immediately() {
        assert!(IterationLimit::new(0).abort_requested().unwrap());
    }

    #[test]
    fn test_any_of() {
        let mut never = AnyOf(vec![Box::new(Never), Box::new(Never)]);
        assert!(!never.abort_requested().unwrap());

        let mut limited = AnyOf(vec![Box::new(Never), Box::new(IterationLimit::new(1))]);
        assert!(!limited.abort_requested().unwrap());
        assert!(limited.abort_requested().unwrap());
    }

    #[test]
    fn test_non_interactive_without_limit_never_aborts() {
        let mut signal = combine(false, None);
        for _ in 0..5 {
            assert!(!signal.abort_requested().unwrap());
        }
    }

    #[test]
    fn test_non_interactive_with_limit_is_iteration_limit() {
        let mut signal = combine(false, Some(2));
        assert!(!signal.abort_requested().unwrap());
        assert!(!signal.abort_requested().unwrap());
        assert!(signal.abort_requested().unwrap());

        assert!(combine(false, Some(0)).abort_requested().unwrap());
    }
}
