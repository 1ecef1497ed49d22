// DebugTargets - Debugger Test Targets
// Copyright (C) 2026 Andrii Shylenko
//
// This software is released under the MIT License.
// See the LICENSE file in the project root for full license information.

use crate::access::{raise, AccessPattern, ArrayRef, Boxed, NullDereference, ObjRef, RawAddress};
use std::hint::black_box;

pub trait TestInterface {
    fn test_call(&self);
}

#[derive(Debug, Default)]
pub struct TestClass {
    pub test_field: i32,
}

impl TestClass {
    #[inline(never)]
    pub fn test_call(&self) {}
}

impl TestInterface for TestClass {
    fn test_call(&self) {
        TestClass::test_call(self)
    }
}

/// Derives from [`TestClass`] by embedding it.
#[derive(Debug, Default)]
pub struct DerivedTestClass {
    base: TestClass,
}

impl AsRef<TestClass> for DerivedTestClass {
    fn as_ref(&self) -> &TestClass {
        &self.base
    }
}

/// Something that must fail with a [`NullDereference`] when triggered.
pub trait Fault {
    fn name(&self) -> &'static str;
    fn trigger(&self);
}

/// The fixed null-dereference catalogue, one case per access pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaultCase {
    Throw,
    CallVirtInterface,
    CallVirtClass,
    CallVirtDerivedClass,
    LoadElement,
    LoadElementAddress,
    StoreElement,
    LoadLength,
    LoadField,
    LoadFieldAddress,
    StoreField,
    Unbox,
    LoadIndirect,
    StoreIndirect,
}

impl FaultCase {
    /// Sweep order.
    pub const ALL: [FaultCase; 14] = [
        FaultCase::Throw,
        FaultCase::CallVirtInterface,
        FaultCase::CallVirtClass,
        FaultCase::CallVirtDerivedClass,
        FaultCase::LoadElement,
        FaultCase::LoadElementAddress,
        FaultCase::StoreElement,
        FaultCase::LoadLength,
        FaultCase::LoadField,
        FaultCase::LoadFieldAddress,
        FaultCase::StoreField,
        FaultCase::Unbox,
        FaultCase::LoadIndirect,
        FaultCase::StoreIndirect,
    ];

    pub fn name(self) -> &'static str {
        match self {
            FaultCase::Throw => "throw",
            FaultCase::CallVirtInterface => "call_virt_interface",
            FaultCase::CallVirtClass => "call_virt_class",
            FaultCase::CallVirtDerivedClass => "call_virt_derived_class",
            FaultCase::LoadElement => "load_element",
            FaultCase::LoadElementAddress => "load_element_address",
            FaultCase::StoreElement => "store_element",
            FaultCase::LoadLength => "load_length",
            FaultCase::LoadField => "load_field",
            FaultCase::LoadFieldAddress => "load_field_address",
            FaultCase::StoreField => "store_field",
            FaultCase::Unbox => "unbox",
            FaultCase::LoadIndirect => "load_indirect",
            FaultCase::StoreIndirect => "store_indirect",
        }
    }

    pub fn pattern(self) -> AccessPattern {
        match self {
            FaultCase::Throw => AccessPattern::ExplicitRaise,
            FaultCase::CallVirtInterface => AccessPattern::InterfaceCall,
            FaultCase::CallVirtClass => AccessPattern::ClassCall,
            FaultCase::CallVirtDerivedClass => AccessPattern::DerivedClassCall,
            FaultCase::LoadElement => AccessPattern::ElementLoad,
            FaultCase::LoadElementAddress => AccessPattern::ElementAddress,
            FaultCase::StoreElement => AccessPattern::ElementStore,
            FaultCase::LoadLength => AccessPattern::Length,
            FaultCase::LoadField => AccessPattern::FieldLoad,
            FaultCase::LoadFieldAddress => AccessPattern::FieldAddress,
            FaultCase::StoreField => AccessPattern::FieldStore,
            FaultCase::Unbox => AccessPattern::Unbox,
            FaultCase::LoadIndirect => AccessPattern::IndirectLoad,
            FaultCase::StoreIndirect => AccessPattern::IndirectStore,
        }
    }

    /// Runs the case. Never returns normally.
    #[inline(never)]
    pub fn trigger(self) {
        match self {
            FaultCase::Throw => raise(NullDereference::new(AccessPattern::ExplicitRaise)),
            FaultCase::CallVirtInterface => {
                let target: ObjRef<dyn TestInterface> = ObjRef::null();
                target.call_interface(|t| t.test_call());
            }
            FaultCase::CallVirtClass => {
                let target: ObjRef<TestClass> = ObjRef::null();
                target.call(|t| t.test_call());
            }
            FaultCase::CallVirtDerivedClass => {
                let target: ObjRef<DerivedTestClass> = ObjRef::null();
                target.call_inherited(|base: &TestClass| base.test_call());
            }
            FaultCase::LoadElement => {
                let array: ArrayRef<i32> = ArrayRef::null();
                black_box(array.load(0));
            }
            FaultCase::LoadElementAddress => {
                let array: ArrayRef<i32> = ArrayRef::null();
                black_box(array.element_addr(0));
            }
            FaultCase::StoreElement => {
                let mut array: ArrayRef<i32> = ArrayRef::null();
                array.store(0, 3);
            }
            FaultCase::LoadLength => {
                let array: ArrayRef<i32> = ArrayRef::null();
                black_box(array.len());
            }
            FaultCase::LoadField => {
                let target: ObjRef<TestClass> = ObjRef::null();
                black_box(target.load_field(|t| &t.test_field));
            }
            FaultCase::LoadFieldAddress => {
                let target: ObjRef<TestClass> = ObjRef::null();
                black_box(target.field_addr(|t| &t.test_field));
            }
            FaultCase::StoreField => {
                let mut target: ObjRef<TestClass> = ObjRef::null();
                target.store_field(|t| &mut t.test_field, 3);
            }
            FaultCase::Unbox => {
                let boxed = Boxed::null();
                black_box(boxed.unbox::<i32>());
            }
            FaultCase::LoadIndirect => {
                let addr: RawAddress<'_, i32> = RawAddress::null();
                black_box(addr.read());
            }
            FaultCase::StoreIndirect => {
                let mut addr: RawAddress<'_, i32> = RawAddress::null();
                addr.write(3);
            }
        }
    }
}

impl Fault for FaultCase {
    fn name(&self) -> &'static str {
        FaultCase::name(*self)
    }

    fn trigger(&self) {
        FaultCase::trigger(*self)
    }
}
