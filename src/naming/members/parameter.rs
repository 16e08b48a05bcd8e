use bitflags::bitflags;

use crate::naming::{types::TypeName, Name};

/// Identifier of the unknown parameter
pub const UNKNOWN_PARAMETER_IDENTIFIER: &str = "[?] ???";

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    /// Modifiers written in front of a parameter
    pub struct ParameterModifiers: u8 {
        /// `params `, a variadic parameter
        const PARAMS = 0x01;
        /// `out `, an output parameter
        const OUT = 0x02;
        /// `this `, the receiver of an extension method
        const THIS = 0x04;
        /// `opt `, a parameter with default value
        const OPT = 0x08;
        /// `ref `, passed by reference
        const REF = 0x10;
    }
}

impl ParameterModifiers {
    /// Prefixes in the order they are written
    pub const PREFIXES: [(&'static str, ParameterModifiers); 5] = [
        ("params ", ParameterModifiers::PARAMS),
        ("out ", ParameterModifiers::OUT),
        ("this ", ParameterModifiers::THIS),
        ("opt ", ParameterModifiers::OPT),
        ("ref ", ParameterModifiers::REF),
    ];

    /// Strips all leading modifier prefixes from `id`, in any order.
    pub(crate) fn split_prefixes(id: &str) -> (ParameterModifiers, &str) {
        let mut modifiers = ParameterModifiers::empty();
        let mut rest = id;
        'outer: loop {
            for (prefix, flag) in Self::PREFIXES {
                if let Some(stripped) = rest.strip_prefix(prefix) {
                    modifiers |= flag;
                    rest = stripped;
                    continue 'outer;
                }
            }
            return (modifiers, rest);
        }
    }

    /// Renders the set modifiers in canonical order.
    #[must_use]
    pub fn prefix(self) -> String {
        Self::PREFIXES
            .iter()
            .filter(|(_, flag)| self.contains(*flag))
            .map(|(prefix, _)| *prefix)
            .collect()
    }
}

/// A method, property or lambda parameter, `<modifiers>[<type>] <name>`.
#[derive(Debug, Clone)]
pub struct ParameterName {
    pub(crate) id: String,
    pub(crate) modifiers: ParameterModifiers,
    pub(crate) value_type: TypeName,
    pub(crate) name: String,
}

impl ParameterName {
    /// The unknown parameter
    #[must_use]
    pub fn unknown() -> Self {
        ParameterName {
            id: UNKNOWN_PARAMETER_IDENTIFIER.to_string(),
            modifiers: ParameterModifiers::empty(),
            value_type: TypeName::Unknown,
            name: "???".to_string(),
        }
    }

    /// Builds a parameter from its parts.
    ///
    /// ```rust
    /// use dotnames::naming::{members::{ParameterModifiers, ParameterName}, parse_type, Name};
    ///
    /// let p = ParameterName::new(ParameterModifiers::OUT, &parse_type("p:int"), "count");
    /// assert_eq!(p.identifier(), "out [p:int] count");
    /// ```
    #[must_use]
    pub fn new(modifiers: ParameterModifiers, value_type: &TypeName, name: &str) -> Self {
        ParameterName {
            id: format!("{}[{}] {}", modifiers.prefix(), value_type.identifier(), name),
            modifiers,
            value_type: value_type.clone(),
            name: name.to_string(),
        }
    }

    /// All modifiers of the parameter
    #[must_use]
    pub fn modifiers(&self) -> ParameterModifiers {
        self.modifiers
    }

    /// The declared type
    #[must_use]
    pub fn value_type(&self) -> &TypeName {
        &self.value_type
    }

    /// The parameter name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// `params`
    #[must_use]
    pub fn is_parameter_array(&self) -> bool {
        self.modifiers.contains(ParameterModifiers::PARAMS)
    }

    /// `out`
    #[must_use]
    pub fn is_output(&self) -> bool {
        self.modifiers.contains(ParameterModifiers::OUT)
    }

    /// `this`
    #[must_use]
    pub fn is_extension_method_parameter(&self) -> bool {
        self.modifiers.contains(ParameterModifiers::THIS)
    }

    /// `opt`
    #[must_use]
    pub fn is_optional(&self) -> bool {
        self.modifiers.contains(ParameterModifiers::OPT)
    }

    /// `true` for `ref` parameters and for values of reference type
    #[must_use]
    pub fn is_passed_by_reference(&self) -> bool {
        self.modifiers.contains(ParameterModifiers::REF) || self.value_type.is_reference_type()
    }

    /// The same parameter with all type arguments unbound.
    #[must_use]
    pub fn remove_generics(&self) -> ParameterName {
        ParameterName::new(self.modifiers, &self.value_type.remove_generics(), &self.name)
    }
}

name_identity!(ParameterName, |n| n.id == UNKNOWN_PARAMETER_IDENTIFIER);
name_serde!(ParameterName, crate::naming::parse_parameter);
