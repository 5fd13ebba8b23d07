//! Per-field spec lookup

use crate::error::FieldError;
use crate::spec::FieldSpec;
use std::collections::HashMap;

/// Validation specs keyed by field name
#[derive(Debug, Clone, Default)]
pub struct FieldRegistry {
    specs: HashMap<String, FieldSpec>,
}

impl FieldRegistry {
    /// Create empty registry
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a spec (builder)
    #[must_use]
    pub fn with(mut self, field: impl Into<String>, spec: FieldSpec) -> Self {
        self.insert(field, spec);
        self
    }

    /// Register or replace a spec
    pub fn insert(&mut self, field: impl Into<String>, spec: FieldSpec) -> Option<FieldSpec> {
        self.specs.insert(field.into(), spec)
    }

    /// Look up a spec
    #[inline]
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&FieldSpec> {
        self.specs.get(field)
    }

    /// Look up a spec that must exist
    ///
    /// # Errors
    /// [`FieldError::UnknownField`] if nothing is registered under `field`
    pub fn require(&self, field: &str) -> Result<&FieldSpec, FieldError> {
        self.get(field)
            .ok_or_else(|| FieldError::UnknownField(field.to_string()))
    }

    /// Registered field names
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.specs.keys().map(String::as_str)
    }

    /// Number of registered fields
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    /// Check if registry is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}
