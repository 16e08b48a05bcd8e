use strum::{EnumCount, EnumIter, IntoEnumIterator};

use crate::naming::organization::{AssemblyName, AssemblyVersion, NamespaceName};

/// Assembly every predefined type is defined in
pub const PREDEFINED_ASSEMBLY: &str = "mscorlib";

/// Version of [`PREDEFINED_ASSEMBLY`] used for all predefined types
pub const PREDEFINED_ASSEMBLY_VERSION: AssemblyVersion = AssemblyVersion::new(4, 0, 0, 0);

/// The built-in types that have a C# keyword alias.
///
/// Predefined types are written `p:<alias>` (`p:int`, `p:string`) instead of
/// `System.Int32, mscorlib, 4.0.0.0`.
///
/// ## Categories
///
/// - **Numeric**: `sbyte`, `byte`, `short`, `ushort`, `int`, `uint`, `long`, `ulong`,
///   `float`, `double`, `decimal`
/// - **Other simple types**: `bool`, `char`
/// - **`void`**
/// - **Reference types**: `object`, `string`
#[derive(Clone, Copy, PartialEq, Debug, EnumIter, EnumCount, Eq, Hash)]
pub enum PredefinedKind {
    /// `sbyte`, `System.SByte`
    SByte,
    /// `byte`, `System.Byte`
    Byte,
    /// `short`, `System.Int16`
    Int16,
    /// `ushort`, `System.UInt16`
    UInt16,
    /// `int`, `System.Int32`
    Int32,
    /// `uint`, `System.UInt32`
    UInt32,
    /// `long`, `System.Int64`
    Int64,
    /// `ulong`, `System.UInt64`
    UInt64,
    /// `char`, `System.Char`
    Char,
    /// `float`, `System.Single`
    Single,
    /// `double`, `System.Double`
    Double,
    /// `bool`, `System.Boolean`
    Boolean,
    /// `decimal`, `System.Decimal`
    Decimal,
    /// `void`, `System.Void`
    Void,
    /// `object`, `System.Object`
    Object,
    /// `string`, `System.String`
    String,
}

impl PredefinedKind {
    /// The C# keyword of this type
    #[must_use]
    pub fn alias(self) -> &'static str {
        match self {
            PredefinedKind::SByte => "sbyte",
            PredefinedKind::Byte => "byte",
            PredefinedKind::Int16 => "short",
            PredefinedKind::UInt16 => "ushort",
            PredefinedKind::Int32 => "int",
            PredefinedKind::UInt32 => "uint",
            PredefinedKind::Int64 => "long",
            PredefinedKind::UInt64 => "ulong",
            PredefinedKind::Char => "char",
            PredefinedKind::Single => "float",
            PredefinedKind::Double => "double",
            PredefinedKind::Boolean => "bool",
            PredefinedKind::Decimal => "decimal",
            PredefinedKind::Void => "void",
            PredefinedKind::Object => "object",
            PredefinedKind::String => "string",
        }
    }

    /// The fully qualified name of this type
    #[must_use]
    pub fn full_name(self) -> &'static str {
        match self {
            PredefinedKind::SByte => "System.SByte",
            PredefinedKind::Byte => "System.Byte",
            PredefinedKind::Int16 => "System.Int16",
            PredefinedKind::UInt16 => "System.UInt16",
            PredefinedKind::Int32 => "System.Int32",
            PredefinedKind::UInt32 => "System.UInt32",
            PredefinedKind::Int64 => "System.Int64",
            PredefinedKind::UInt64 => "System.UInt64",
            PredefinedKind::Char => "System.Char",
            PredefinedKind::Single => "System.Single",
            PredefinedKind::Double => "System.Double",
            PredefinedKind::Boolean => "System.Boolean",
            PredefinedKind::Decimal => "System.Decimal",
            PredefinedKind::Void => "System.Void",
            PredefinedKind::Object => "System.Object",
            PredefinedKind::String => "System.String",
        }
    }

    /// Looks up a kind by its keyword (`int`)
    #[must_use]
    pub fn from_alias(alias: &str) -> Option<Self> {
        Self::iter().find(|kind| kind.alias() == alias)
    }

    /// Looks up a kind by its fully qualified name (`System.Int32`)
    #[must_use]
    pub fn from_full_name(full_name: &str) -> Option<Self> {
        Self::iter().find(|kind| kind.full_name() == full_name)
    }

    /// Maps a keyword to the fully qualified name, other input is returned unchanged.
    ///
    /// ```rust
    /// use dotnames::naming::types::PredefinedKind;
    ///
    /// assert_eq!(PredefinedKind::to_full("int"), "System.Int32");
    /// assert_eq!(PredefinedKind::to_full("MyType"), "MyType");
    /// ```
    #[must_use]
    pub fn to_full(alias: &str) -> &str {
        Self::from_alias(alias).map_or(alias, |kind| kind.full_name())
    }

    /// Maps a fully qualified name to the keyword, other input is returned unchanged.
    #[must_use]
    pub fn to_alias(full_name: &str) -> &str {
        Self::from_full_name(full_name).map_or(full_name, |kind| kind.alias())
    }

    /// `true` for the integral and floating point types and `decimal`
    #[must_use]
    pub fn is_numeric(self) -> bool {
        !matches!(
            self,
            PredefinedKind::Boolean
                | PredefinedKind::Char
                | PredefinedKind::Void
                | PredefinedKind::Object
                | PredefinedKind::String
        )
    }

    /// `true` for numeric types, `bool` and `char`
    #[must_use]
    pub fn is_simple(self) -> bool {
        self.is_numeric() || matches!(self, PredefinedKind::Boolean | PredefinedKind::Char)
    }

    /// `true` for `object` and `string`
    #[must_use]
    pub fn is_reference(self) -> bool {
        matches!(self, PredefinedKind::Object | PredefinedKind::String)
    }
}

/// A predefined type, `p:<alias>`.
///
/// Arrays of predefined types are [`super::ArrayTypeName`]s with a predefined element.
#[derive(Debug, Clone)]
pub struct PredefinedTypeName {
    pub(crate) id: String,
    pub(crate) kind: PredefinedKind,
}

impl PredefinedTypeName {
    /// Creates the predefined type of `kind`.
    #[must_use]
    pub fn new(kind: PredefinedKind) -> Self {
        PredefinedTypeName {
            id: format!("p:{}", kind.alias()),
            kind,
        }
    }

    /// Which predefined type this is
    #[must_use]
    pub fn kind(&self) -> PredefinedKind {
        self.kind
    }

    /// The keyword, `int` for `p:int`
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.kind.alias()
    }

    /// The fully qualified name, `System.Int32` for `p:int`
    #[must_use]
    pub fn full_name(&self) -> &'static str {
        self.kind.full_name()
    }

    /// Always `System`
    #[must_use]
    pub fn namespace(&self) -> NamespaceName {
        NamespaceName::new("System")
    }

    /// Always `mscorlib, 4.0.0.0`
    #[must_use]
    pub fn assembly(&self) -> AssemblyName {
        AssemblyName {
            id: format!("{}, {}", PREDEFINED_ASSEMBLY, PREDEFINED_ASSEMBLY_VERSION),
            name: PREDEFINED_ASSEMBLY.to_string(),
            version: Some(PREDEFINED_ASSEMBLY_VERSION),
        }
    }
}

name_identity!(PredefinedTypeName, |_n| false);
