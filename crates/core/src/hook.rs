// DebugTargets - Debugger Test Targets
// Copyright (C) 2026 Andrii Shylenko
//
// This software is released under the MIT License.
// See the LICENSE file in the project root for full license information.

use crate::access::{InvalidCast, NullDereference};
use crate::state::FirstChance;
use std::any::Any;
use std::panic::{self, Location};
use std::sync::Once;

static INSTALL: Once = Once::new();

/// Installs the process-wide panic hook once.
///
/// Deliberate payloads ([`NullDereference`], [`FirstChance`]) are logged at
/// trace level instead of printing the default "thread panicked" report.
/// [`InvalidCast`] is logged once at error level. Everything else goes to the
/// previous hook.
pub fn install() {
    INSTALL.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            if !report(info.payload(), info.location()) {
                previous(info);
            }
        }));
    });
}

/// Logs payloads raised by this crate. Returns `false` when the payload is
/// not one of ours.
fn report(payload: &(dyn Any + Send), location: Option<&Location<'_>>) -> bool {
    if let Some(err) = payload.downcast_ref::<NullDereference>() {
        tracing::trace!(pattern = ?err.pattern, ?location, "{}", err);
    } else if payload.is::<FirstChance>() {
        tracing::trace!(?location, "First chance panic raised");
    } else if let Some(cast) = payload.downcast_ref::<InvalidCast>() {
        tracing::error!(?location, "{}", cast);
    } else {
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_install_is_idempotent() {
        install();
        install();
        let payload = panic::catch_unwind(|| {
            panic::panic_any(FirstChance);
        })
        .unwrap_err();
        assert!(payload.is::<FirstChance>());
    }

    #[test]
    fn test_own_payloads_are_reported_once() {
        use crate::access::AccessPattern;

        let null = NullDereference::new(AccessPattern::FieldLoad);
        let cast = InvalidCast { expected: "i32" };
        assert!(report(&null, None));
        assert!(report(&FirstChance, None));
        assert!(report(&cast, None));
    }

    #[test]
    fn test_foreign_payloads_go_to_previous_hook() {
        assert!(!report(&"plain panic", None));
        assert!(!report(&String::from("formatted panic"), None));
    }
}
