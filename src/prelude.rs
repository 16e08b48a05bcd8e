//! # dotnames Prelude
//!
//! The most commonly used names, traits and factories. Import with
//! `use dotnames::prelude::*;`.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all dotnames operations
pub use crate::Error;

/// The result type used throughout dotnames
pub use crate::Result;

// ================================================================================================
// Traits
// ================================================================================================

/// Identifier, unknown and hashed checks shared by every name
pub use crate::naming::Name;

/// Accessors shared by methods, fields, events and properties
pub use crate::naming::members::MemberName;

/// Structure-preserving anonymization
pub use crate::anonymize::Anonymize;

// ================================================================================================
// Factories
// ================================================================================================

/// Repairing factories that fall back to the unknown value
pub use crate::naming::{
    parse_assembly, parse_event, parse_field, parse_lambda, parse_local_variable, parse_method,
    parse_namespace, parse_parameter, parse_property, parse_type,
};

/// Repairing factories that report errors
pub use crate::naming::{
    try_parse_event, try_parse_field, try_parse_lambda, try_parse_local_variable,
    try_parse_method, try_parse_parameter, try_parse_property, try_parse_type,
};

// ================================================================================================
// Names
// ================================================================================================

/// Type names
pub use crate::naming::types::{
    ArrayTypeName, DelegateTypeName, PredefinedKind, PredefinedTypeName, RegularTypeName,
    TypeKind, TypeName, TypeParameterName,
};

/// Member names
pub use crate::naming::members::{
    EventName, FieldName, LambdaName, LocalVariableName, MethodName, ParameterModifiers,
    ParameterName, PropertyName,
};

/// Namespaces and assemblies
pub use crate::naming::{AssemblyName, AssemblyVersion, NamespaceName};

/// IDE component names
pub use crate::naming::ide::{
    AliasName, DocumentName, GeneralName, ProjectItemName, ProjectName, SolutionName, WindowName,
};

/// Names of any kind
pub use crate::anonymize::{AnyName, NameKind};

// ================================================================================================
// Repair and Hashing
// ================================================================================================

/// Repair entry points and configuration
pub use crate::repair::{repair, repair_with_prefix, RepairConfig};

/// String hashing
pub use crate::anonymize::to_hash;
