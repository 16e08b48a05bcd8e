//! Repair configuration
//!
//! This module provides configuration options for the legacy-format repair pipeline,
//! one toggle per rewrite pass plus the failure policy for identifiers that still
//! look legacy after a pass gave up on them.

/// Configuration for the legacy-format repair pipeline
///
/// Every pass is idempotent on identifiers that are already in the current format, so
/// running the full pipeline over current identifiers is safe and the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct RepairConfig {
    /// Rewrite `System.Int32, mscorlib, 4.0.0.0` style predefined types to `p:int`
    pub fix_predefined_types: bool,

    /// Tag untagged ``System.Nullable`1`` occurrences as struct types
    pub fix_nullable: bool,

    /// Hoist a single trailing type-argument list onto the tick-marked nesting segments,
    /// including the manual catalog of historical identifiers
    pub fix_type_parameter_lists: bool,

    /// Expand delegates stored as bare type names into full delegate signatures
    pub fix_delegates: bool,

    /// Insert the missing `` `N `` arity marker in front of a type-argument list
    pub fix_missing_arity: bool,

    /// Collapse jagged array markers `[][,]` into a single rank marker `[,,]`
    pub fix_jagged_arrays: bool,

    /// Append `()` to properties serialized without parameter list
    pub fix_property_parens: bool,

    /// Apply the fixes selected by a serialization prefix (`0M`, `0P`, ...)
    pub fix_prefixed: bool,

    /// Report unrepairable legacy identifiers as [`crate::Error::LegacyFormat`] instead of
    /// logging them and passing them through unchanged
    pub strict: bool,

    /// Upper bound for the rewrites of the recursive passes on a single identifier (default: 64)
    pub max_rewrites: usize,
}

impl Default for RepairConfig {
    fn default() -> Self {
        Self {
            fix_predefined_types: true,
            fix_nullable: true,
            fix_type_parameter_lists: true,
            fix_delegates: true,
            fix_missing_arity: true,
            fix_jagged_arrays: true,
            fix_property_parens: true,
            fix_prefixed: true,
            strict: false,
            max_rewrites: 64,
        }
    }
}

impl RepairConfig {
    /// Creates a configuration that leaves every identifier untouched
    ///
    /// Use when the input is known to be written in the current format.
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            fix_predefined_types: false,
            fix_nullable: false,
            fix_type_parameter_lists: false,
            fix_delegates: false,
            fix_missing_arity: false,
            fix_jagged_arrays: false,
            fix_property_parens: false,
            fix_prefixed: false,
            strict: false,
            max_rewrites: 0,
        }
    }

    /// Creates a configuration with all passes enabled that fails on unrepairable identifiers
    #[must_use]
    pub fn strict() -> Self {
        Self {
            strict: true,
            ..Self::default()
        }
    }

    /// Returns `true` if no pass would run
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        !(self.fix_predefined_types
            || self.fix_nullable
            || self.fix_type_parameter_lists
            || self.fix_delegates
            || self.fix_missing_arity
            || self.fix_jagged_arrays
            || self.fix_property_parens
            || self.fix_prefixed)
    }
}
