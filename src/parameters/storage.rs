//! Parameter store
//!
//! # Example
//!
//! ```ignore
//! let mut store = ParameterStore::new();
//! store.register("CIRC_WRAP_THR", ParamValue::Int(18000), ParamFlags::empty())?;
//! store.set("CIRC_WRAP_THR", ParamValue::Int(12000))?;
//! assert_eq!(store.get("CIRC_WRAP_THR"), Some(&ParamValue::Int(12000)));
//! ```

use bitflags::bitflags;
use heapless::{FnvIndexMap, String};

use super::error::{ParameterError, Result};

/// Maximum parameter name length (MAVLink param_id)
const PARAM_NAME_LEN: usize = 16;

/// Maximum number of parameters
const MAX_PARAMS: usize = 32;

bitflags! {
    /// Parameter flags
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ParamFlags: u8 {
        /// Cannot be modified after registration
        const READ_ONLY = 0b00000010;
    }
}

/// Parameter value types
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParamValue {
    /// Boolean parameter
    Bool(bool),
    /// 32-bit signed integer
    Int(i32),
    /// 32-bit floating point
    Float(f32),
}

impl ParamValue {
    fn same_type(&self, other: &ParamValue) -> bool {
        core::mem::discriminant(self) == core::mem::discriminant(other)
    }

    /// Integer view of the value (`Float` is truncated toward zero).
    pub fn as_i32(&self) -> i32 {
        match self {
            ParamValue::Bool(b) => *b as i32,
            ParamValue::Int(i) => *i,
            ParamValue::Float(f) => *f as i32,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Entry {
    value: ParamValue,
    flags: ParamFlags,
}

type ParamName = String<PARAM_NAME_LEN>;

/// Name-keyed parameter registry
pub struct ParameterStore {
    entries: FnvIndexMap<ParamName, Entry, MAX_PARAMS>,
}

impl ParameterStore {
    /// Create a new empty parameter store
    pub fn new() -> Self {
        Self {
            entries: FnvIndexMap::new(),
        }
    }

    fn key(name: &str) -> Result<ParamName> {
        let mut key = ParamName::new();
        key.push_str(name)
            .map_err(|_| ParameterError::NameTooLong)?;
        Ok(key)
    }

    /// Register a parameter with its default value and flags
    ///
    /// Registering an existing name keeps the current value.
    pub fn register(&mut self, name: &str, default_value: ParamValue, flags: ParamFlags) -> Result<()> {
        let key = Self::key(name)?;

        if self.entries.contains_key(&key) {
            return Ok(());
        }

        self.entries
            .insert(
                key,
                Entry {
                    value: default_value,
                    flags,
                },
            )
            .map_err(|_| ParameterError::StoreFull)?;
        Ok(())
    }

    /// Get parameter value
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        let key = Self::key(name).ok()?;
        self.entries.get(&key).map(|entry| &entry.value)
    }

    /// Set parameter value
    ///
    /// The parameter must be registered, writable, and of the same type.
    pub fn set(&mut self, name: &str, value: ParamValue) -> Result<()> {
        let key = Self::key(name)?;
        let entry = self.entries.get_mut(&key).ok_or(ParameterError::NotFound)?;

        if entry.flags.contains(ParamFlags::READ_ONLY) {
            return Err(ParameterError::ReadOnly);
        }
        if !entry.value.same_type(&value) {
            return Err(ParameterError::TypeMismatch);
        }

        entry.value = value;
        Ok(())
    }
}

impl Default for ParameterStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_get() {
        let mut store = ParameterStore::new();
        store
            .register("CIRC_WRAP_THR", ParamValue::Int(18000), ParamFlags::empty())
            .unwrap();

        assert_eq!(store.get("CIRC_WRAP_THR"), Some(&ParamValue::Int(18000)));
        assert_eq!(store.get("MISSING"), None);
    }

    #[test]
    fn test_register_is_idempotent() {
        let mut store = ParameterStore::new();
        store
            .register("TRIM_ARSPD", ParamValue::Float(15.0), ParamFlags::empty())
            .unwrap();
        store.set("TRIM_ARSPD", ParamValue::Float(18.0)).unwrap();
        store
            .register("TRIM_ARSPD", ParamValue::Float(15.0), ParamFlags::empty())
            .unwrap();

        assert_eq!(store.get("TRIM_ARSPD"), Some(&ParamValue::Float(18.0)));
    }

    #[test]
    fn test_set_errors() {
        let mut store = ParameterStore::new();
        store
            .register("SYSID", ParamValue::Int(1), ParamFlags::READ_ONLY)
            .unwrap();
        store
            .register("TRIM_ARSPD", ParamValue::Float(15.0), ParamFlags::empty())
            .unwrap();

        assert_eq!(
            store.set("UNKNOWN", ParamValue::Int(0)),
            Err(ParameterError::NotFound)
        );
        assert_eq!(
            store.set("SYSID", ParamValue::Int(2)),
            Err(ParameterError::ReadOnly)
        );
        assert_eq!(
            store.set("TRIM_ARSPD", ParamValue::Int(30)),
            Err(ParameterError::TypeMismatch)
        );
        assert_eq!(
            store.set("A_VERY_LONG_PARAMETER", ParamValue::Int(0)),
            Err(ParameterError::NameTooLong)
        );
    }

    #[test]
    fn test_store_full() {
        let mut store = ParameterStore::new();
        for i in 0..MAX_PARAMS {
            let name = format!("P{}", i);
            store
                .register(&name, ParamValue::Int(0), ParamFlags::empty())
                .unwrap();
        }
        assert_eq!(
            store.register("ONE_MORE", ParamValue::Int(0), ParamFlags::empty()),
            Err(ParameterError::StoreFull)
        );
    }

    #[test]
    fn test_value_views() {
        assert_eq!(ParamValue::Bool(true).as_i32(), 1);
        assert_eq!(ParamValue::Int(-17000).as_i32(), -17000);
        assert_eq!(ParamValue::Float(800.9).as_i32(), 800);
    }
}
