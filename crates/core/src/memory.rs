// DebugTargets - Debugger Test Targets
// Copyright (C) 2026 Andrii Shylenko
//
// This software is released under the MIT License.
// See the LICENSE file in the project root for full license information.

use sysinfo::System;

/// Total physically installed memory in KiB, or `None` if the OS reports none.
pub fn installed_memory_kib() -> Option<u64> {
    let mut system = System::new();
    system.refresh_memory();
    match system.total_memory() {
        0 => None,
        bytes => Some(bytes / 1024),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(any(target_os = "linux", target_os = "macos", target_os = "windows"))]
    fn test_installed_memory_is_reported() {
        assert!(installed_memory_kib().is_some_and(|kib| kib > 0));
    }
}
