// DebugTargets - Debugger Test Targets
// Copyright (C) 2026 Andrii Shylenko
//
// This software is released under the MIT License.
// See the LICENSE file in the project root for full license information.

pub mod abort;
pub mod access;
pub mod console;
pub mod faults;
pub mod hook;
pub mod memory;
pub mod state;
pub mod sweep;

pub use abort::AbortSignal;
pub use access::{AccessPattern, NullDereference};
pub use faults::{Fault, FaultCase};
pub use state::ExposedState;
pub use sweep::{log_null_dereference, sweep, FaultError, FaultReport};
