// DebugTargets - Debugger Test Targets
// Copyright (C) 2026 Andrii Shylenko
//
// This software is released under the MIT License.
// See the LICENSE file in the project root for full license information.

//! Nullable references, sequences, boxed values and raw addresses.
//!
//! Every accessor checks for null before touching memory. A null access
//! raises a [`NullDereference`] panic payload tagged with the
//! [`AccessPattern`] that failed; callers recover it with
//! `std::panic::catch_unwind` and a downcast.

use std::any::Any;
use std::marker::PhantomData;
use std::ptr::NonNull;

/// The low-level access that was attempted through a null value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessPattern {
    ExplicitRaise,
    InterfaceCall,
    ClassCall,
    DerivedClassCall,
    ElementLoad,
    ElementAddress,
    ElementStore,
    Length,
    FieldLoad,
    FieldAddress,
    FieldStore,
    Unbox,
    IndirectLoad,
    IndirectStore,
}

impl AccessPattern {
    pub fn describe(self) -> &'static str {
        match self {
            AccessPattern::ExplicitRaise => "explicit null raise",
            AccessPattern::InterfaceCall => "interface call through a null reference",
            AccessPattern::ClassCall => "method call through a null class reference",
            AccessPattern::DerivedClassCall => {
                "inherited method call through a null derived-class reference"
            }
            AccessPattern::ElementLoad => "indexed read on a null sequence",
            AccessPattern::ElementAddress => "address-of-element on a null sequence",
            AccessPattern::ElementStore => "indexed write on a null sequence",
            AccessPattern::Length => "length query on a null sequence",
            AccessPattern::FieldLoad => "field read through a null reference",
            AccessPattern::FieldAddress => "address-of-field through a null reference",
            AccessPattern::FieldStore => "field write through a null reference",
            AccessPattern::Unbox => "unboxing a null value",
            AccessPattern::IndirectLoad => "read through a null address",
            AccessPattern::IndirectStore => "write through a null address",
        }
    }
}

/// Panic payload raised by every null access in this module.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct NullDereference {
    pub pattern: AccessPattern,
    pub message: String,
}

impl NullDereference {
    pub fn new(pattern: AccessPattern) -> Self {
        Self {
            pattern,
            message: format!("Null dereference: {}", pattern.describe()),
        }
    }
}

/// Panic payload raised when a non-null boxed value holds a different type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid cast: boxed value is not a {expected}")]
pub struct InvalidCast {
    pub expected: &'static str,
}

/// Raises `err` as a panic payload.
pub fn raise(err: NullDereference) -> ! {
    std::panic::panic_any(err)
}

/// A nullable owning object reference.
#[derive(Debug)]
pub struct ObjRef<T: ?Sized> {
    target: Option<Box<T>>,
}

impl<T: ?Sized> ObjRef<T> {
    pub const fn null() -> Self {
        Self { target: None }
    }

    pub fn from_box(target: Box<T>) -> Self {
        Self {
            target: Some(target),
        }
    }

    pub fn is_null(&self) -> bool {
        self.target.is_none()
    }

    fn resolve(&self, pattern: AccessPattern) -> &T {
        match self.target.as_deref() {
            Some(target) => target,
            None => raise(NullDereference::new(pattern)),
        }
    }

    fn resolve_mut(&mut self, pattern: AccessPattern) -> &mut T {
        match self.target.as_deref_mut() {
            Some(target) => target,
            None => raise(NullDereference::new(pattern)),
        }
    }

    /// Calls a method declared by the referenced type itself.
    pub fn call<R>(&self, method: impl FnOnce(&T) -> R) -> R {
        method(self.resolve(AccessPattern::ClassCall))
    }

    /// Calls through a trait-object reference (`ObjRef<dyn Trait>`).
    pub fn call_interface<R>(&self, method: impl FnOnce(&T) -> R) -> R {
        method(self.resolve(AccessPattern::InterfaceCall))
    }

    /// Calls a method of the embedded base `B` through a derived reference.
    pub fn call_inherited<B: ?Sized, R>(&self, method: impl FnOnce(&B) -> R) -> R
    where
        T: AsRef<B>,
    {
        method(self.resolve(AccessPattern::DerivedClassCall).as_ref())
    }

    pub fn load_field<F: Copy>(&self, field: impl FnOnce(&T) -> &F) -> F {
        *field(self.resolve(AccessPattern::FieldLoad))
    }

    pub fn field_addr<F>(&self, field: impl FnOnce(&T) -> &F) -> NonNull<F> {
        NonNull::from(field(self.resolve(AccessPattern::FieldAddress)))
    }

    pub fn store_field<F>(&mut self, field: impl FnOnce(&mut T) -> &mut F, value: F) {
        *field(self.resolve_mut(AccessPattern::FieldStore)) = value;
    }
}

impl<T> ObjRef<T> {
    pub fn new(target: T) -> Self {
        Self::from_box(Box::new(target))
    }
}

/// A nullable fixed-length sequence.
#[derive(Debug)]
pub struct ArrayRef<T> {
    elements: Option<Box<[T]>>,
}

impl<T> ArrayRef<T> {
    pub const fn null() -> Self {
        Self { elements: None }
    }

    pub fn from_vec(elements: Vec<T>) -> Self {
        Self {
            elements: Some(elements.into_boxed_slice()),
        }
    }

    fn resolve(&self, pattern: AccessPattern) -> &[T] {
        match self.elements.as_deref() {
            Some(elements) => elements,
            None => raise(NullDereference::new(pattern)),
        }
    }

    fn resolve_mut(&mut self, pattern: AccessPattern) -> &mut [T] {
        match self.elements.as_deref_mut() {
            Some(elements) => elements,
            None => raise(NullDereference::new(pattern)),
        }
    }

    /// Out-of-range indexes on a non-null sequence panic with the usual
    /// bounds-check message, not a null dereference.
    pub fn load(&self, index: usize) -> T
    where
        T: Copy,
    {
        self.resolve(AccessPattern::ElementLoad)[index]
    }

    pub fn element_addr(&self, index: usize) -> NonNull<T> {
        NonNull::from(&self.resolve(AccessPattern::ElementAddress)[index])
    }

    pub fn store(&mut self, index: usize, value: T) {
        self.resolve_mut(AccessPattern::ElementStore)[index] = value;
    }

    pub fn len(&self) -> usize {
        self.resolve(AccessPattern::Length).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A nullable boxed value of erased type.
#[derive(Debug)]
pub struct Boxed {
    value: Option<Box<dyn Any>>,
}

impl Boxed {
    pub const fn null() -> Self {
        Self { value: None }
    }

    pub fn new<T: Any>(value: T) -> Self {
        Self {
            value: Some(Box::new(value)),
        }
    }

    /// Narrows the boxed value to `T` without checking for null first.
    pub fn unbox<T: Any + Copy>(&self) -> T {
        let value = match self.value.as_deref() {
            Some(value) => value,
            None => raise(NullDereference::new(AccessPattern::Unbox)),
        };
        match value.downcast_ref::<T>() {
            Some(value) => *value,
            None => std::panic::panic_any(InvalidCast {
                expected: std::any::type_name::<T>(),
            }),
        }
    }
}

/// A raw address that is either null or borrowed from a live `&'a mut T`.
#[derive(Debug)]
pub struct RawAddress<'a, T> {
    ptr: *mut T,
    _borrow: PhantomData<&'a mut T>,
}

impl<'a, T> RawAddress<'a, T> {
    pub const fn null() -> Self {
        Self {
            ptr: std::ptr::null_mut(),
            _borrow: PhantomData,
        }
    }

    pub fn from_mut(target: &'a mut T) -> Self {
        Self {
            ptr: target,
            _borrow: PhantomData,
        }
    }

    pub fn read(&self) -> T
    where
        T: Copy,
    {
        match NonNull::new(self.ptr) {
            // SAFETY: non-null pointers only come from `from_mut`, which
            // holds the exclusive borrow for `'a`.
            Some(ptr) => unsafe { *ptr.as_ptr() },
            None => raise(NullDereference::new(AccessPattern::IndirectLoad)),
        }
    }

    pub fn write(&mut self, value: T) {
        match NonNull::new(self.ptr) {
            // SAFETY: see `read`.
            Some(ptr) => unsafe { *ptr.as_ptr() = value },
            None => raise(NullDereference::new(AccessPattern::IndirectStore)),
        }
    }
}
