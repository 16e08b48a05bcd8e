//! Type names.
//!
//! A type identifier is one of six shapes, each represented by a variant of [`TypeName`]:
//!
//! | Shape | Example | Variant |
//! |-------|---------|---------|
//! | unknown | `?` | [`TypeName::Unknown`] |
//! | predefined | `p:int` | [`TypeName::Predefined`] |
//! | type parameter | `T`, `T -> p:int` | [`TypeName::TypeParameter`] |
//! | array | `p:int[]`, `T[,], P` | [`TypeName::Array`] |
//! | delegate | `d:[p:void] [n.D, P].()` | [`TypeName::Delegate`] |
//! | regular | ``i:n.C`1[[T]]+I, P, 1.2.3.4`` | [`TypeName::Regular`] |
//!
//! Every variant answers the same set of derived-property queries (full name, namespace,
//! assembly, nesting, classification). Type parameters answer through their bound, arrays
//! through their element where that is meaningful.
//!
//! # Examples
//!
//! ```rust
//! use dotnames::naming::{parse_type, Name};
//!
//! let list = parse_type("System.Collections.Generic.List`1[[T -> p:int]], mscorlib, 4.0.0.0");
//! assert_eq!(list.name(), "List");
//! assert_eq!(list.namespace().identifier(), "System.Collections.Generic");
//! assert!(list.is_class_type());
//! assert!(list.is_reference_type());
//! assert!(list.has_type_parameters());
//!
//! let array = list.derive_array(1)?;
//! assert_eq!(
//!     array.identifier(),
//!     "System.Collections.Generic.List`1[][[T -> p:int]], mscorlib, 4.0.0.0"
//! );
//! # Ok::<(), dotnames::Error>(())
//! ```

mod array;
mod delegate;
mod parameter;
mod predefined;
mod regular;

pub use array::ArrayTypeName;
pub use delegate::DelegateTypeName;
pub use parameter::{TypeParameterName, BINDING_SEPARATOR};
pub use predefined::{
    PredefinedKind, PredefinedTypeName, PREDEFINED_ASSEMBLY, PREDEFINED_ASSEMBLY_VERSION,
};
pub use regular::{RegularTypeName, TypeKind, TypeSegment};

pub(crate) use parameter::is_valid_short_name;

use std::{fmt, hash};

use crate::{
    naming::{
        organization::{AssemblyName, NamespaceName},
        parser::NameParser,
        Name,
    },
    Result,
};

/// Identifier of the unknown type
pub const UNKNOWN_TYPE_IDENTIFIER: &str = "?";

/// The name of a type.
#[derive(Debug, Clone, Default)]
pub enum TypeName {
    /// The unknown type `?`
    #[default]
    Unknown,
    /// A C# keyword type, `p:int`
    Predefined(PredefinedTypeName),
    /// A type parameter, possibly bound
    TypeParameter(TypeParameterName),
    /// An array
    Array(ArrayTypeName),
    /// A delegate type with its signature
    Delegate(DelegateTypeName),
    /// A class, struct, enum or interface
    Regular(RegularTypeName),
}

impl TypeName {
    /// Full name: namespace, nesting and type arguments, without assembly and kind prefix
    #[must_use]
    pub fn full_name(&self) -> String {
        match self {
            TypeName::Unknown => UNKNOWN_TYPE_IDENTIFIER.to_string(),
            TypeName::Predefined(p) => p.full_name().to_string(),
            TypeName::TypeParameter(tp) => tp.bound().map_or_else(
                || UNKNOWN_TYPE_IDENTIFIER.to_string(),
                TypeName::full_name,
            ),
            TypeName::Array(a) => a.full_name(),
            TypeName::Delegate(d) => d.full_name(),
            TypeName::Regular(r) => r.full_name().to_string(),
        }
    }

    /// Simple name of the (innermost) type
    #[must_use]
    pub fn name(&self) -> String {
        match self {
            TypeName::Unknown => UNKNOWN_TYPE_IDENTIFIER.to_string(),
            TypeName::Predefined(p) => p.name().to_string(),
            TypeName::TypeParameter(tp) => tp
                .bound()
                .map_or_else(|| UNKNOWN_TYPE_IDENTIFIER.to_string(), TypeName::name),
            TypeName::Array(a) => a.name(),
            TypeName::Delegate(d) => d.name(),
            TypeName::Regular(r) => r.name().to_string(),
        }
    }

    /// Namespace the type is declared in
    #[must_use]
    pub fn namespace(&self) -> NamespaceName {
        match self {
            TypeName::Unknown => NamespaceName::unknown(),
            TypeName::Predefined(p) => p.namespace(),
            TypeName::TypeParameter(tp) => {
                tp.bound().map_or_else(NamespaceName::unknown, TypeName::namespace)
            }
            TypeName::Array(a) => a.namespace(),
            TypeName::Delegate(d) => d.namespace(),
            TypeName::Regular(r) => r.namespace().clone(),
        }
    }

    /// Assembly the type is defined in
    #[must_use]
    pub fn assembly(&self) -> AssemblyName {
        match self {
            TypeName::Unknown => AssemblyName::unknown(),
            TypeName::Predefined(p) => p.assembly(),
            TypeName::TypeParameter(tp) => {
                tp.bound().map_or_else(AssemblyName::unknown, TypeName::assembly)
            }
            TypeName::Array(a) => a.assembly(),
            TypeName::Delegate(d) => d.assembly(),
            TypeName::Regular(r) => r.assembly().clone(),
        }
    }

    /// The enclosing type of a nested type
    #[must_use]
    pub fn declaring_type(&self) -> Option<TypeName> {
        match self {
            TypeName::TypeParameter(tp) => tp.bound().and_then(TypeName::declaring_type),
            TypeName::Delegate(d) => d.declaring_type(),
            TypeName::Regular(r) => r.declaring_type(),
            _ => None,
        }
    }

    /// `true` for types declared inside another type
    #[must_use]
    pub fn is_nested_type(&self) -> bool {
        match self {
            TypeName::TypeParameter(tp) => tp.bound().is_some_and(TypeName::is_nested_type),
            TypeName::Delegate(d) => d.delegate_type().is_nested_type(),
            TypeName::Regular(r) => r.is_nested_type(),
            _ => false,
        }
    }

    /// The type arguments in scope
    #[must_use]
    pub fn type_parameters(&self) -> Vec<&TypeName> {
        match self {
            TypeName::TypeParameter(tp) => tp
                .bound()
                .map_or_else(Vec::new, TypeName::type_parameters),
            TypeName::Array(a) => a.element().type_parameters(),
            TypeName::Delegate(d) => d.delegate_type().type_parameters(),
            TypeName::Regular(r) => r.type_parameters(),
            _ => Vec::new(),
        }
    }

    /// `true` if [`TypeName::type_parameters`] is not empty
    #[must_use]
    pub fn has_type_parameters(&self) -> bool {
        !self.type_parameters().is_empty()
    }

    /// `true` if the type carries an arity marker
    #[must_use]
    pub fn is_generic_entity(&self) -> bool {
        match self {
            TypeName::TypeParameter(tp) => tp.bound().is_some_and(TypeName::is_generic_entity),
            TypeName::Array(a) => a.element().is_generic_entity(),
            TypeName::Delegate(d) => d.delegate_type().is_generic_entity(),
            TypeName::Regular(r) => r.is_generic_entity(),
            _ => false,
        }
    }

    /// `true` for [`TypeName::Array`]
    #[must_use]
    pub fn is_array(&self) -> bool {
        matches!(self, TypeName::Array(_))
    }

    /// `true` for [`TypeName::TypeParameter`]
    #[must_use]
    pub fn is_type_parameter(&self) -> bool {
        matches!(self, TypeName::TypeParameter(_))
    }

    /// `true` for [`TypeName::Delegate`]
    #[must_use]
    pub fn is_delegate_type(&self) -> bool {
        matches!(self, TypeName::Delegate(_))
    }

    /// `true` for [`TypeName::Predefined`]
    #[must_use]
    pub fn is_predefined(&self) -> bool {
        matches!(self, TypeName::Predefined(_))
    }

    fn predefined_kind(&self) -> Option<PredefinedKind> {
        match self {
            TypeName::Predefined(p) => Some(p.kind()),
            TypeName::Regular(r) => r.predefined_kind(),
            _ => None,
        }
    }

    fn through_bound(&self, query: fn(&TypeName) -> bool) -> Option<bool> {
        match self {
            TypeName::TypeParameter(tp) => Some(tp.bound().is_some_and(query)),
            _ => None,
        }
    }

    /// `p:void` or `System.Void`
    #[must_use]
    pub fn is_void_type(&self) -> bool {
        self.through_bound(TypeName::is_void_type)
            .unwrap_or_else(|| self.predefined_kind() == Some(PredefinedKind::Void))
    }

    /// Numeric types, `bool` and `char`
    #[must_use]
    pub fn is_simple_type(&self) -> bool {
        self.through_bound(TypeName::is_simple_type)
            .unwrap_or_else(|| self.predefined_kind().is_some_and(PredefinedKind::is_simple))
    }

    /// ``System.Nullable`1``
    #[must_use]
    pub fn is_nullable_type(&self) -> bool {
        self.through_bound(TypeName::is_nullable_type)
            .unwrap_or_else(|| matches!(self, TypeName::Regular(r) if r.is_nullable()))
    }

    /// Structs, including simple types, nullables and `void`
    #[must_use]
    pub fn is_struct_type(&self) -> bool {
        self.through_bound(TypeName::is_struct_type).unwrap_or_else(|| {
            matches!(self, TypeName::Regular(r) if r.kind() == TypeKind::Struct)
                || self.is_simple_type()
                || self.is_nullable_type()
                || self.is_void_type()
        })
    }

    /// `e:` types
    #[must_use]
    pub fn is_enum_type(&self) -> bool {
        self.through_bound(TypeName::is_enum_type)
            .unwrap_or_else(|| matches!(self, TypeName::Regular(r) if r.kind() == TypeKind::Enum))
    }

    /// Structs and enums
    #[must_use]
    pub fn is_value_type(&self) -> bool {
        self.is_struct_type() || self.is_enum_type()
    }

    /// `i:` types
    #[must_use]
    pub fn is_interface_type(&self) -> bool {
        self.through_bound(TypeName::is_interface_type).unwrap_or_else(|| {
            matches!(self, TypeName::Regular(r) if r.kind() == TypeKind::Interface)
        })
    }

    /// Classes (including `object` and `string`) that are not any other kind of type
    #[must_use]
    pub fn is_class_type(&self) -> bool {
        self.through_bound(TypeName::is_class_type)
            .unwrap_or_else(|| match self {
                TypeName::Predefined(p) => p.kind().is_reference(),
                TypeName::Regular(r) => r.kind() == TypeKind::Class && !self.is_struct_type(),
                _ => false,
            })
    }

    /// Classes, interfaces, arrays and delegates
    #[must_use]
    pub fn is_reference_type(&self) -> bool {
        self.through_bound(TypeName::is_reference_type)
            .unwrap_or_else(|| {
                self.is_class_type()
                    || self.is_interface_type()
                    || self.is_array()
                    || self.is_delegate_type()
            })
    }

    /// The regular type, if this is one
    #[must_use]
    pub fn as_regular(&self) -> Option<&RegularTypeName> {
        match self {
            TypeName::Regular(r) => Some(r),
            _ => None,
        }
    }

    /// The array type, if this is one
    #[must_use]
    pub fn as_array(&self) -> Option<&ArrayTypeName> {
        match self {
            TypeName::Array(a) => Some(a),
            _ => None,
        }
    }

    /// The delegate type, if this is one
    #[must_use]
    pub fn as_delegate(&self) -> Option<&DelegateTypeName> {
        match self {
            TypeName::Delegate(d) => Some(d),
            _ => None,
        }
    }

    /// The type parameter, if this is one
    #[must_use]
    pub fn as_type_parameter(&self) -> Option<&TypeParameterName> {
        match self {
            TypeName::TypeParameter(tp) => Some(tp),
            _ => None,
        }
    }

    /// The predefined type, if this is one
    #[must_use]
    pub fn as_predefined(&self) -> Option<&PredefinedTypeName> {
        match self {
            TypeName::Predefined(p) => Some(p),
            _ => None,
        }
    }

    /// Derives the array of `rank` over this type, see [`ArrayTypeName::from`].
    ///
    /// # Errors
    /// Returns an error for rank 0 and for the unknown type.
    pub fn derive_array(&self, rank: u32) -> Result<TypeName> {
        ArrayTypeName::from(self, rank).map(TypeName::Array)
    }

    /// Replaces every bound type argument `S -> B` by the unbound parameter `S`.
    ///
    /// ```rust
    /// use dotnames::naming::{parse_type, Name};
    ///
    /// let t = parse_type("n.C`2[[T -> p:int],[U -> p:string]], P");
    /// assert_eq!(t.remove_generics().identifier(), "n.C`2[[T],[U]], P");
    /// ```
    #[must_use]
    pub fn remove_generics(&self) -> TypeName {
        match self {
            TypeName::TypeParameter(tp) => TypeName::TypeParameter(tp.unbound()),
            TypeName::Array(a) => a
                .element()
                .remove_generics()
                .derive_array(a.rank())
                .unwrap_or_else(|_| self.clone()),
            TypeName::Regular(r) if r.has_type_parameters() => {
                let id = r.render_with(
                    r.namespace().identifier(),
                    &|name| name.to_string(),
                    &mut |arg| arg.remove_generics().identifier().to_string(),
                    r.assembly().identifier(),
                );
                NameParser::new()
                    .parse_type(&id)
                    .unwrap_or_else(|_| self.clone())
            }
            _ => self.clone(),
        }
    }
}

impl Name for TypeName {
    fn identifier(&self) -> &str {
        match self {
            TypeName::Unknown => UNKNOWN_TYPE_IDENTIFIER,
            TypeName::Predefined(p) => p.identifier(),
            TypeName::TypeParameter(tp) => tp.identifier(),
            TypeName::Array(a) => a.identifier(),
            TypeName::Delegate(d) => d.identifier(),
            TypeName::Regular(r) => r.identifier(),
        }
    }

    fn is_unknown(&self) -> bool {
        matches!(self, TypeName::Unknown)
    }
}

impl PartialEq for TypeName {
    fn eq(&self, other: &Self) -> bool {
        self.identifier() == other.identifier()
    }
}

impl Eq for TypeName {}

impl hash::Hash for TypeName {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.identifier().hash(state);
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

name_serde!(TypeName, crate::naming::parse_type);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naming::parse_type;

    #[test]
    fn test_unknown() {
        let t = TypeName::Unknown;
        assert!(t.is_unknown());
        assert_eq!(t.identifier(), "?");
        assert_eq!(t.full_name(), "?");
        assert!(t.namespace().is_unknown());
        assert!(t.assembly().is_unknown());
        assert!(!t.is_class_type());
        assert!(!t.is_reference_type());
        assert!(!t.is_value_type());
        assert_eq!(TypeName::default(), t);
    }

    #[test]
    fn test_classification_predefined() {
        let int = parse_type("p:int");
        assert!(int.is_simple_type());
        assert!(int.is_struct_type());
        assert!(int.is_value_type());
        assert!(!int.is_reference_type());
        assert!(!int.is_class_type());

        let string = parse_type("p:string");
        assert!(string.is_class_type());
        assert!(string.is_reference_type());
        assert!(!string.is_value_type());

        let void = parse_type("p:void");
        assert!(void.is_void_type());
        assert!(void.is_struct_type());
        assert!(!void.is_simple_type());
    }

    #[test]
    fn test_classification_regular() {
        let class = parse_type("n.C, P");
        assert!(class.is_class_type());
        assert!(class.is_reference_type());

        let interface = parse_type("i:n.I, P");
        assert!(interface.is_interface_type());
        assert!(interface.is_reference_type());
        assert!(!interface.is_class_type());

        let structure = parse_type("s:n.S, P");
        assert!(structure.is_struct_type());
        assert!(structure.is_value_type());
        assert!(!structure.is_class_type());

        let enumeration = parse_type("e:n.E, P");
        assert!(enumeration.is_enum_type());
        assert!(enumeration.is_value_type());
        assert!(!enumeration.is_struct_type());
        assert!(!enumeration.is_reference_type());

        let nullable = parse_type("s:System.Nullable`1[[T -> p:int]], mscorlib, 4.0.0.0");
        assert!(nullable.is_nullable_type());
        assert!(nullable.is_struct_type());
    }

    #[test]
    fn test_classification_arrays_and_delegates() {
        let array = parse_type("p:int[]");
        assert!(array.is_array());
        assert!(array.is_reference_type());
        assert!(!array.is_class_type());
        assert!(!array.is_value_type());

        let delegate = parse_type("d:[p:void] [n.D, P].()");
        assert!(delegate.is_delegate_type());
        assert!(delegate.is_reference_type());
        assert!(!delegate.is_class_type());
    }

    #[test]
    fn test_classification_through_bound() {
        let bound = parse_type("T -> s:n.S, P");
        assert!(bound.is_type_parameter());
        assert!(bound.is_struct_type());
        assert_eq!(bound.full_name(), "n.S");
        assert_eq!(bound.assembly().identifier(), "P");

        let unbound = parse_type("T");
        assert!(unbound.is_type_parameter());
        assert!(!unbound.is_class_type());
        assert!(!unbound.is_reference_type());
        assert!(!unbound.is_value_type());
        assert!(unbound.assembly().is_unknown());
    }

    #[test]
    fn test_remove_generics() {
        assert_eq!(
            parse_type("n.O`1[[T -> p:int]]+I`1[[U -> n.X, P]], P")
                .remove_generics()
                .identifier(),
            "n.O`1[[T]]+I`1[[U]], P"
        );
        assert_eq!(
            parse_type("n.C`1[][[T -> p:int]], P")
                .remove_generics()
                .identifier(),
            "n.C`1[][[T]], P"
        );
        assert_eq!(parse_type("T -> p:int").remove_generics().identifier(), "T");
        assert_eq!(parse_type("n.C, P").remove_generics().identifier(), "n.C, P");
    }

    #[test]
    fn test_accessors() {
        let t = parse_type("p:int[,]");
        assert_eq!(t.as_array().map(ArrayTypeName::rank), Some(2));
        assert!(t.as_regular().is_none());
        assert!(parse_type("p:int").as_predefined().is_some());
        assert!(parse_type("T").as_type_parameter().is_some());
        assert!(parse_type("d:[?] [?].()").as_delegate().is_some());
    }
}
