//! Structured names of code elements and IDE components.
//!
//! Every name wraps a single identifier string that is its entire persisted form. Parsing
//! extracts the structure once; the accessors expose it without re-scanning the string.
//! Two names are equal if and only if their identifiers are equal.
//!
//! # Factories
//!
//! The `parse_*` functions are the entry points for identifiers coming from storage. They
//! run the identifier through [`crate::repair`] first and never fail: anything that does not
//! match the grammar becomes the unknown value of the requested kind. The `try_parse_*`
//! variants repair and parse the same way but return the error instead.
//!
//! | Kind | Example identifier |
//! |------|--------------------|
//! | type | ``i:n.IList`1[[T -> p:int]], P, 1.0.0.0`` |
//! | method | ``static [p:void] [n.C, P].M`1[[T]]([T] t)`` |
//! | field, event | `[p:int] [n.C, P]._f` |
//! | property | `get set [p:int] [n.C, P].P()` |
//! | parameter | `out [p:int] count` |
//! | local variable | `[p:int] i` |
//! | lambda | `[p:bool] ([p:int] i)` |
//! | namespace | `System.Collections` |
//! | assembly | `mscorlib, 4.0.0.0` |
//!
//! # Examples
//!
//! ```rust
//! use dotnames::naming::{parse_type, Name};
//!
//! // historical identifier, repaired before parsing
//! let t = parse_type("System.Int32, mscorlib, 4.0.0.0");
//! assert_eq!(t.identifier(), "p:int");
//! assert!(t.is_simple_type());
//!
//! // malformed identifiers never fail, they are unknown
//! assert!(parse_type("no assembly").is_unknown());
//! ```

pub mod ide;
pub mod members;
pub mod organization;
pub(crate) mod parser;
pub mod types;

pub use organization::{AssemblyName, AssemblyVersion, NamespaceName};
pub use parser::MAX_RECURSION_DEPTH;

use log::debug;

use crate::{
    naming::{
        members::{
            EventName, FieldName, LambdaName, LocalVariableName, MethodName, ParameterName,
            PropertyName,
        },
        parser::NameParser,
        types::TypeName,
    },
    repair::{
        self,
        fixes::{PREFIX_METHOD, PREFIX_PROPERTY},
        RepairConfig,
    },
    Result,
};

/// The capability shared by every name value.
pub trait Name {
    /// The identifier, the complete serialized form of the name
    fn identifier(&self) -> &str;

    /// `true` for the unknown value of the kind
    fn is_unknown(&self) -> bool;

    /// `true` if the identifier contains a hashed part.
    ///
    /// Hashes end in `==`, which the grammar does not use otherwise.
    fn is_hashed(&self) -> bool {
        self.identifier().contains("==")
    }
}

/// Repairs `id` with `config`, applying the fixes of `prefix`, and hands it to `parse`.
fn repaired<T>(
    id: &str,
    prefix: Option<&str>,
    config: &RepairConfig,
    parse: impl FnOnce(&mut NameParser, &str) -> Result<T>,
) -> Result<T> {
    let fixed = repair::try_repair(id, prefix, config)?;
    parse(&mut NameParser::new(), &fixed)
}

/// Generates the factory triple of a kind: `try_parse_*`, `parse_*_with` and `parse_*`.
macro_rules! factories {
    ($kind:literal, $ty:ty, $prefix:expr, $try_fn:ident, $with_fn:ident, $fn:ident, $parse:ident, $unknown:expr) => {
        #[doc = concat!("Repairs and parses a ", $kind, " identifier.")]
        ///
        /// # Errors
        /// Returns the parse error for identifiers that do not match the grammar after repair.
        pub fn $try_fn(id: &str) -> Result<$ty> {
            $with_fn(id, &RepairConfig::default())
        }

        #[doc = concat!("Repairs a ", $kind, " identifier with `config` and parses it.")]
        ///
        /// # Errors
        /// Returns the parse error, or the repair error of a strict `config`.
        pub fn $with_fn(id: &str, config: &RepairConfig) -> Result<$ty> {
            repaired(id, $prefix, config, |parser, fixed| parser.$parse(fixed))
        }

        #[doc = concat!("Repairs and parses a ", $kind, " identifier, falling back to the unknown ", $kind, ".")]
        #[must_use]
        pub fn $fn(id: &str) -> $ty {
            $try_fn(id).unwrap_or_else(|error| {
                debug!("unknown {} for '{}': {}", $kind, id, error);
                $unknown
            })
        }
    };
}

factories!(
    "type",
    TypeName,
    None,
    try_parse_type,
    parse_type_with,
    parse_type,
    parse_type,
    TypeName::Unknown
);
factories!(
    "method",
    MethodName,
    Some(PREFIX_METHOD),
    try_parse_method,
    parse_method_with,
    parse_method,
    parse_method,
    MethodName::unknown()
);
factories!(
    "field",
    FieldName,
    None,
    try_parse_field,
    parse_field_with,
    parse_field,
    parse_field,
    FieldName::unknown()
);
factories!(
    "event",
    EventName,
    None,
    try_parse_event,
    parse_event_with,
    parse_event,
    parse_event,
    EventName::unknown()
);
factories!(
    "property",
    PropertyName,
    Some(PREFIX_PROPERTY),
    try_parse_property,
    parse_property_with,
    parse_property,
    parse_property,
    PropertyName::unknown()
);
factories!(
    "parameter",
    ParameterName,
    None,
    try_parse_parameter,
    parse_parameter_with,
    parse_parameter,
    parse_parameter,
    ParameterName::unknown()
);
factories!(
    "local variable",
    LocalVariableName,
    None,
    try_parse_local_variable,
    parse_local_variable_with,
    parse_local_variable,
    parse_local_variable,
    LocalVariableName::unknown()
);
factories!(
    "lambda",
    LambdaName,
    None,
    try_parse_lambda,
    parse_lambda_with,
    parse_lambda,
    parse_lambda,
    LambdaName::unknown()
);

/// Parses a namespace identifier. Namespaces have no grammar of their own to repair.
#[must_use]
pub fn parse_namespace(id: &str) -> NamespaceName {
    let id = id.trim();
    if id.is_empty() {
        return NamespaceName::unknown();
    }
    NamespaceName::new(id)
}

/// Parses an assembly identifier, falling back to the unknown assembly.
#[must_use]
pub fn parse_assembly(id: &str) -> AssemblyName {
    AssemblyName::parse(id).unwrap_or_else(|error| {
        debug!("unknown assembly for '{}': {}", id, error);
        AssemblyName::unknown()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_factories_repair_first() {
        assert_eq!(parse_type("System.Int32, mscorlib, 4.0.0.0").identifier(), "p:int");
        assert_eq!(
            parse_method("[System.Void, mscorlib, 4.0.0.0] [C, P].M()").identifier(),
            "[p:void] [C, P].M()"
        );
    }

    #[test]
    fn test_factories_fall_back_to_unknown() {
        assert!(parse_type("n.C").is_unknown());
        assert!(parse_method("M()").is_unknown());
        assert!(parse_field("[p:int] f").is_unknown());
        assert!(parse_event("x").is_unknown());
        assert!(parse_property("get x").is_unknown());
        assert!(parse_parameter("p").is_unknown());
        assert!(parse_local_variable("i").is_unknown());
        assert!(parse_lambda("()").is_unknown());
    }

    #[test]
    fn test_try_factories_report_errors() {
        assert!(matches!(try_parse_type("n.C"), Err(Error::Malformed { .. })));
        assert!(try_parse_method("[p:void] [C, P].M()").is_ok());
    }

    #[test]
    fn test_disabled_repair_keeps_legacy_shape() {
        assert!(parse_type_with("System.Int32, mscorlib, 4.0.0.0", &RepairConfig::disabled())
            .unwrap()
            .as_regular()
            .is_some());
    }

    #[test]
    fn test_is_hashed() {
        assert!(parse_type("QUThlfRt54o2I9pzZNBPEQ==, P").is_hashed());
        assert!(!parse_type("a, P").is_hashed());
    }

    #[test]
    fn test_namespace_and_assembly() {
        assert!(parse_namespace("").is_unknown());
        assert_eq!(parse_namespace("a.b").identifier(), "a.b");
        assert!(parse_assembly("").is_unknown());
        assert!(parse_assembly("A, x.y").is_unknown());
        assert!(parse_assembly("A").is_local_project());
    }
}
