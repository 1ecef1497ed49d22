// DebugTargets - Debugger Test Targets
// Copyright (C) 2026 Andrii Shylenko
//
// This software is released under the MIT License.
// See the LICENSE file in the project root for full license information.

//! The long-lived record a debugger inspects while `state-exposer` runs.

use std::any::Any;
use std::cell::Cell;
use std::fmt;
use std::hint::black_box;
use std::io::{self, Write};
use std::marker::PhantomData;
use std::panic;
use std::rc::{Rc, Weak};
use std::time::Duration;

pub const CONSTANT_INT: i32 = 3344;
pub const CONSTANT_BYTE: u8 = 0x50;
pub const CONSTANT_STRING: &str = "Constant";
pub const CONSTANT_EMPTY_STRING: &str = "";
pub const CONSTANT_NULL_STRING: Option<&str> = None;

pub static TEST_STRING_STATIC: &str = "static String";

/// Signature of [`ExposedState::tick`], stored in the record as a function pointer.
pub type TickFn = fn(&ExposedState, &mut dyn Write, Duration) -> io::Result<u64>;

/// Panic payload raised and recovered inside every tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FirstChance;

/// 16-byte value-type identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ValueId([u8; 16]);

impl ValueId {
    pub const fn nil() -> Self {
        Self([0; 16])
    }

    pub fn is_nil(&self) -> bool {
        self.0.iter().all(|b| *b == 0)
    }
}

impl fmt::Display for ValueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, byte) in self.0.iter().enumerate() {
            if matches!(i, 4 | 6 | 8 | 10) {
                f.write_str("-")?;
            }
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Nested {
    pub marker: u32,
}

#[derive(Debug)]
pub struct Generic<T, U, V> {
    _marker: PhantomData<fn() -> (T, U, V)>,
}

impl<T, U, V> Generic<T, U, V> {
    pub(crate) fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

#[derive(Debug)]
pub struct NestedGeneric<T> {
    pub instantiations: Cell<u64>,
    _marker: PhantomData<T>,
}

impl<T> NestedGeneric<T> {
    pub(crate) fn new() -> Self {
        Self {
            instantiations: Cell::new(0),
            _marker: PhantomData,
        }
    }

    #[inline(never)]
    pub fn nested_generic_method<U>(&self) {
        self.instantiations.set(self.instantiations.get() + 1);
        black_box(PhantomData::<U>);
    }
}

pub struct ExposedState {
    pub test_ubyte: u8,
    pub test_ushort: u16,
    pub test_uint: u32,
    pub test_ulong: u64,

    pub test_byte: i8,
    pub test_short: i16,
    pub test_int: i32,
    pub test_long: i64,

    pub test_isize: isize,
    pub test_usize: usize,

    pub test_char: char,
    pub test_string_instance: String,

    pub test_bool: bool,

    pub test_float: f32,
    pub test_double: f64,

    /// Always points back at the owning record.
    pub test_ptr: Weak<ExposedState>,
    pub test_value_type: ValueId,

    pub test_nested: Box<Nested>,

    pub test_sz_array: [i32; 3],
    pub test_jagged: Vec<Vec<i32>>,

    pub test_func_ptr: TickFn,

    pub test_object: Rc<dyn Any>,

    pub test_generic: Box<NestedGeneric<Rc<dyn Any>>>,

    tick_count: Cell<u64>,
}

impl fmt::Debug for ExposedState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExposedState")
            .field("test_int", &self.test_int)
            .field("test_string_instance", &self.test_string_instance)
            .field("test_value_type", &self.test_value_type)
            .field("test_sz_array", &self.test_sz_array)
            .field("test_jagged", &self.test_jagged)
            .field("test_func_ptr", &(self.test_func_ptr as *const ()))
            .field("tick_count", &self.tick_count.get())
            .finish_non_exhaustive()
    }
}

impl ExposedState {
    pub fn new() -> Rc<Self> {
        Rc::new_cyclic(|this| Self {
            test_ubyte: 1,
            test_ushort: 2,
            test_uint: 4,
            test_ulong: 8,
            test_byte: -1,
            test_short: -2,
            test_int: -4,
            test_long: -8,
            test_isize: 23,
            test_usize: 23,
            test_char: 'a',
            test_string_instance: "instance String".to_string(),
            test_bool: true,
            test_float: -300.123,
            test_double: -300.123,
            test_ptr: this.clone(),
            test_value_type: ValueId::nil(),
            test_nested: Box::new(Nested::default()),
            test_sz_array: [1, 2, 3],
            test_jagged: vec![vec![1, 2, 3], vec![4, 5, 6, 7]],
            test_func_ptr: ExposedState::tick,
            test_object: Rc::new(()),
            test_generic: Box::new(NestedGeneric::new()),
            tick_count: Cell::new(0),
        })
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count.get()
    }

    /// One unit of observable work: counts, raises and recovers a
    /// [`FirstChance`] panic, sleeps for `pause`, prints a `.`, allocates a
    /// few throwaway objects and instantiates two generic methods.
    ///
    /// Returns the new tick count.
    #[inline(never)]
    pub fn tick(&self, out: &mut dyn Write, pause: Duration) -> io::Result<u64> {
        let count = self.tick_count.get() + 1;
        self.tick_count.set(count);

        crate::hook::install();
        let recovered = panic::catch_unwind(|| {
            panic::panic_any(FirstChance);
        });
        debug_assert!(recovered.is_err());

        std::thread::sleep(pause);
        write!(out, ".")?;
        out.flush()?;

        let transient: Rc<dyn Any> = Rc::new(());
        let mut transient_array: Vec<Option<Box<dyn Any>>> = (0..3).map(|_| None).collect();
        transient_array[0] = Some(Box::new(1_i32));
        black_box((&transient, &transient_array));

        self.generic_method::<Nested, i32>();
        self.test_generic.nested_generic_method::<i32>();

        Ok(count)
    }

    #[inline(never)]
    pub fn generic_method<T: Default + 'static, U: Copy + Default>(&self) {
        black_box(Generic::<T, U, Nested>::new());
    }
}
