// DebugTargets - Debugger Test Targets
// Copyright (C) 2026 Andrii Shylenko
//
// This software is released under the MIT License.
// See the LICENSE file in the project root for full license information.

use crate::access::NullDereference;
use crate::faults::{Fault, FaultCase};
use std::io::Write;
use std::panic::{self, RefUnwindSafe};
use tracing::debug;

/// A recovered null dereference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaultReport {
    pub name: &'static str,
    pub error: NullDereference,
}

#[derive(Debug, thiserror::Error)]
pub enum FaultError {
    #[error("Fault case '{name}' returned without raising a null dereference")]
    NoFault { name: &'static str },
    #[error("Failed to write fault log line: {0}")]
    Io(#[from] std::io::Error),
}

/// Runs `fault` and writes one line naming it and the recovered message.
///
/// Panics other than [`NullDereference`] are not handled and keep
/// unwinding.
pub fn log_null_dereference<F, W>(fault: &F, out: &mut W) -> Result<FaultReport, FaultError>
where
    F: Fault + RefUnwindSafe + ?Sized,
    W: Write + ?Sized,
{
    crate::hook::install();

    let name = fault.name();
    let payload = match panic::catch_unwind(|| fault.trigger()) {
        Ok(()) => return Err(FaultError::NoFault { name }),
        Err(payload) => payload,
    };

    let error = match payload.downcast::<NullDereference>() {
        Ok(error) => *error,
        Err(other) => panic::resume_unwind(other),
    };

    writeln!(out, "NullDereference executing {} : {}", name, error)?;
    debug!(case = name, pattern = ?error.pattern, "Recovered null dereference");

    Ok(FaultReport { name, error })
}

/// Runs the whole catalogue in order, stopping at the first contract violation.
pub fn sweep<W: Write + ?Sized>(out: &mut W) -> Result<Vec<FaultReport>, FaultError> {
    let reports = FaultCase::ALL
        .iter()
        .map(|case| log_null_dereference(case, out))
        .collect::<Result<Vec<_>, _>>()?;
    out.flush()?;
    Ok(reports)
}
