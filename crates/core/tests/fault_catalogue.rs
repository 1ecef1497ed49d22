// DebugTargets - Debugger Test Targets
// Copyright (C) 2026 Andrii Shylenko
//
// This software is released under the MIT License.
// See the LICENSE file in the project root for full license information.

use debugtargets_core::{sweep, AccessPattern, FaultCase};

#[test]
fn test_single_sweep_logs_catalogue_in_order() {
    let mut out = Vec::new();
    let reports = sweep(&mut out).expect("sweep should not violate the fault contract");
    assert_eq!(reports.len(), 14);

    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 14);

    for ((line, case), report) in lines.iter().zip(FaultCase::ALL).zip(&reports) {
        let prefix = format!("NullDereference executing {} : ", case.name());
        assert!(line.starts_with(&prefix), "unexpected line {:?}", line);

        let message = &line[prefix.len()..];
        assert!(!message.is_empty(), "empty message for {}", case.name());
        assert_eq!(message, report.error.message);
        assert_eq!(report.error.pattern, case.pattern());
    }
}

#[test]
fn test_repeated_sweeps_keep_the_same_order() {
    let mut first = Vec::new();
    let mut second = Vec::new();
    sweep(&mut first).unwrap();
    sweep(&mut second).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_catalogue_order_matches_access_patterns() {
    let patterns: Vec<AccessPattern> = FaultCase::ALL.iter().map(|c| c.pattern()).collect();
    assert_eq!(
        patterns,
        vec![
            AccessPattern::ExplicitRaise,
            AccessPattern::InterfaceCall,
            AccessPattern::ClassCall,
            AccessPattern::DerivedClassCall,
            AccessPattern::ElementLoad,
            AccessPattern::ElementAddress,
            AccessPattern::ElementStore,
            AccessPattern::Length,
            AccessPattern::FieldLoad,
            AccessPattern::FieldAddress,
            AccessPattern::FieldStore,
            AccessPattern::Unbox,
            AccessPattern::IndirectLoad,
            AccessPattern::IndirectStore,
        ]
    );
}
