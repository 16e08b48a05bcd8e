//! Legacy-format repair of entity identifiers.
//!
//! The identifier grammar changed several times while data was already being recorded.
//! Persisted identifiers therefore come in historical shapes: predefined types spelled as
//! regular `mscorlib` types, delegates without signature, generic types without arity marker,
//! jagged arrays, properties without parameter list and nested generic types whose
//! type-argument lists were collected at the very end. This module rewrites every such shape
//! into the current grammar before an identifier is parsed.
//!
//! # Architecture
//!
//! Repair is a fixed pipeline of string rewrites ([`passes::PIPELINE`]), each a pure
//! function from identifier to identifier. The pipeline is applied once; every pass finds and
//! rewrites all occurrences of its shape, including nested ones. Serialized identifiers that
//! carry a kind prefix (`0M`, `0P`, ...) get additional prefix-specific fixes first
//! ([`fixes::fix_prefixed`]).
//!
//! Identifiers that already follow the current grammar pass through unchanged, so repairing
//! unconditionally is safe.
//!
//! # Failure Policy
//!
//! Repair never rejects input in the default lenient mode: a pass that recognizes a legacy
//! shape it cannot rewrite logs a warning and leaves the identifier as it is. With
//! [`RepairConfig::strict`] the same situation is reported as [`crate::Error::LegacyFormat`].
//!
//! # Examples
//!
//! ```rust
//! use dotnames::repair::{repair, repair_with, RepairConfig};
//!
//! assert_eq!(repair("System.Int32, mscorlib, 4.0.0.0"), "p:int");
//! assert_eq!(repair("n.T1`1+T2`1[[G1],[G2]], P"), "n.T1`1[[G1]]+T2`1[[G2]], P");
//!
//! // unrepairable input is an error in strict mode only
//! assert_eq!(repair("T`1,P"), "T`1,P");
//! assert!(repair_with("T`1,P", &RepairConfig::strict()).is_err());
//! ```

mod config;
pub mod fixes;
pub mod passes;

pub use config::RepairConfig;

use crate::Result;

/// Repairs an identifier with the default configuration.
///
/// Never fails: unrepairable identifiers are returned as they are.
#[must_use]
pub fn repair(id: &str) -> String {
    repair_with_prefix(id, None)
}

/// Repairs a serialized identifier, applying the fixes selected by its kind prefix.
///
/// # Examples
///
/// ```rust
/// use dotnames::repair::repair_with_prefix;
///
/// assert_eq!(repair_with_prefix("[?] [?].P", Some("0P")), "set get [?] [?].P()");
/// assert_eq!(repair_with_prefix("[p:void] ..ctor()", Some("0M")), "[?] [?].???()");
/// ```
#[must_use]
pub fn repair_with_prefix(id: &str, prefix: Option<&str>) -> String {
    let config = RepairConfig::default();
    // lenient passes only fail in strict mode
    try_repair(id, prefix, &config).unwrap_or_else(|_| id.to_string())
}

/// Repairs an identifier with a custom configuration.
///
/// # Errors
/// Returns [`crate::Error::LegacyFormat`] if `config` is strict and a pass cannot repair the
/// identifier.
pub fn repair_with(id: &str, config: &RepairConfig) -> Result<String> {
    try_repair(id, None, config)
}

/// Runs the prefix fixes and the general pipeline as selected by `config`.
///
/// # Errors
/// Returns [`crate::Error::LegacyFormat`] if `config` is strict and a pass cannot repair the
/// identifier.
pub fn try_repair(id: &str, prefix: Option<&str>, config: &RepairConfig) -> Result<String> {
    let mut fixed = match prefix {
        Some(prefix) if config.fix_prefixed && !prefix.is_empty() => {
            fixes::fix_prefixed(id, prefix)
        }
        _ => id.to_string(),
    };

    for pass in &passes::PIPELINE {
        if (pass.enabled)(config) {
            fixed = (pass.apply)(&fixed, config)?;
        }
    }

    Ok(fixed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_repair_current_identifiers_unchanged() {
        for id in [
            "p:int",
            "?",
            "T",
            "N.C`10[[T]],P",
            "getdatetime.Program, getdatetime",
            "[?] [?].???",
            "[?] [?].???()",
            "d:[TR] [C`10[[T1]], P].()",
            "get set [?] [?].P([p:int] i)",
        ] {
            assert_eq!(repair(id), id);
        }
    }

    #[test]
    fn test_repair_is_idempotent_on_legacy_input() {
        for id in [
            "System.Nullable`1[[System.Int32, mscorlib, 4.0.0.0]], mscorlib, 4.0.0.0",
            "n.T1`1+T2[[G1]], P",
            "[d:n.D,P] [d:n.D2,P].M([?] p)",
            "A[,][][,][,], B",
        ] {
            let once = repair(id);
            assert_eq!(repair(&once), once);
        }
    }

    #[test]
    fn test_repair_combines_passes() {
        assert_eq!(
            repair("System.Nullable`1[[System.Int32, mscorlib, 4.0.0.0]], mscorlib, 4.0.0.0"),
            "s:System.Nullable`1[[p:int]], mscorlib, 4.0.0.0"
        );
        assert_eq!(
            repair("get [System.Boolean, mscorlib, 4.0.0.0] [System.IO.Stream, mscorlib, 4.0.0.0].CanRead"),
            "get [p:bool] [System.IO.Stream, mscorlib, 4.0.0.0].CanRead()"
        );
    }

    #[test]
    fn test_repair_with_prefix_properties() {
        assert_eq!(
            repair_with_prefix("static [?] [?].P", Some("CSharp.PropertyName")),
            "set get static [?] [?].P()"
        );
        assert_eq!(repair_with_prefix("[?] [?].???", Some("0P")), "[?] [?].???");
    }

    #[test]
    fn test_repair_with_prefix_keeps_valid_ids() {
        let delegate = "d:[TR] [C`10[[T1]], P].()";
        let ctor = format!("[{0}] [{0}]..ctor()", delegate);
        assert_eq!(repair_with_prefix(&ctor, Some("0M")), ctor);
        assert_eq!(repair_with_prefix("N.C`10[[T]],P", Some("0T")), "N.C`10[[T]],P");
        assert_eq!(repair_with_prefix("[?] [?].???", Some("0F")), "[?] [?].???");
        assert_eq!(repair_with_prefix("[?] [?].???()", Some("0M")), "[?] [?].???()");
    }

    #[test]
    fn test_repair_disabled() {
        let id = "System.Int32, mscorlib, 4.0.0.0";
        assert_eq!(repair_with(id, &RepairConfig::disabled()).unwrap(), id);

        let only_arrays = RepairConfig {
            fix_jagged_arrays: true,
            ..RepairConfig::disabled()
        };
        assert_eq!(
            repair_with("System.Int32[][], mscorlib, 4.0.0.0", &only_arrays).unwrap(),
            "System.Int32[,], mscorlib, 4.0.0.0"
        );
    }

    #[test]
    fn test_repair_strict() {
        let err = repair_with("N.C`1+N, P", &RepairConfig::strict()).unwrap_err();
        assert!(matches!(err, Error::LegacyFormat { .. }));
        assert_eq!(repair("N.C`1+N, P"), "N.C`1+N, P");
    }
}
