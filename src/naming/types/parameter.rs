use crate::naming::{types::TypeName, Name};

/// Separator between a type parameter and the type bound to it
pub const BINDING_SEPARATOR: &str = " -> ";

/// A type parameter `T`, optionally bound to a concrete type: `T -> System.X, mscorlib, 4.0.0.0`.
///
/// The bound may itself be a type parameter, which forms a chain of bindings
/// (`TT -> TU -> AType, P`). Type parameters answer all derived-property queries through
/// their bound.
#[derive(Debug, Clone)]
pub struct TypeParameterName {
    pub(crate) id: String,
    pub(crate) short_name: String,
    pub(crate) bound: Option<Box<TypeName>>,
}

impl TypeParameterName {
    /// Creates a type parameter named `short_name`, bound to `bound` if given.
    ///
    /// ```rust
    /// use dotnames::naming::{parse_type, types::TypeParameterName, Name};
    ///
    /// let bound = parse_type("p:int");
    /// assert_eq!(TypeParameterName::new("T", Some(&bound)).identifier(), "T -> p:int");
    /// assert_eq!(TypeParameterName::new("T", None).identifier(), "T");
    /// ```
    #[must_use]
    pub fn new(short_name: &str, bound: Option<&TypeName>) -> Self {
        let id = match bound {
            Some(bound) => format!("{}{}{}", short_name, BINDING_SEPARATOR, bound.identifier()),
            None => short_name.to_string(),
        };
        TypeParameterName {
            id,
            short_name: short_name.to_string(),
            bound: bound.map(|b| Box::new(b.clone())),
        }
    }

    /// The name of the parameter, `T` for `T -> p:int`
    #[must_use]
    pub fn short_name(&self) -> &str {
        &self.short_name
    }

    /// The type bound to the parameter
    #[must_use]
    pub fn bound(&self) -> Option<&TypeName> {
        self.bound.as_deref()
    }

    /// `true` if a type is bound (the bound may still be the unknown type `?`)
    #[must_use]
    pub fn is_bound(&self) -> bool {
        self.bound.is_some()
    }

    /// The same parameter without its binding
    #[must_use]
    pub fn unbound(&self) -> TypeParameterName {
        TypeParameterName::new(&self.short_name, None)
    }
}

name_identity!(TypeParameterName, |_n| false);

/// `true` if `short_name` can name a type parameter: an identifier or a hash digest, optionally
/// followed by an array marker.
pub(crate) fn is_valid_short_name(short_name: &str) -> bool {
    let (name, marker) = match short_name.find('[') {
        Some(open) => short_name.split_at(open),
        None => (short_name, ""),
    };
    let mut chars = name.chars();
    let starts_valid = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
    let is_identifier = starts_valid && chars.all(|c| c.is_ascii_alphanumeric() || c == '_');
    (is_identifier || is_hash_digest(name))
        && (marker.is_empty() || crate::utils::scanner::is_array_marker(marker))
}

/// A 16 byte digest in padded URL-safe base64, as produced by anonymization
fn is_hash_digest(name: &str) -> bool {
    name.len() == 24
        && name.ends_with("==")
        && name[..22]
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_short_names() {
        for name in [
            "T",
            "TResult",
            "T1",
            "_t",
            "T[]",
            "T[,,]",
            "TM6pgLI0nE5n0EEgAKIIFw==",
            "xBzbwjgZ_3fD0cNcmbedKA==[]",
        ] {
            assert!(is_valid_short_name(name), "{}", name);
        }
    }

    #[test]
    fn test_invalid_short_names() {
        for name in [
            "", "?", "1T", "T-1", "T U", "T,", "T(", "T[x]", "T<U>", "{T}", "T[", "T==",
        ] {
            assert!(!is_valid_short_name(name), "{}", name);
        }
    }

    #[test]
    fn test_new_unbound() {
        let tp = TypeParameterName::new("T", None);
        assert_eq!(tp.identifier(), "T");
        assert_eq!(tp.short_name(), "T");
        assert!(!tp.is_bound());
        assert!(tp.bound().is_none());
    }

    #[test]
    fn test_new_bound() {
        let tp = TypeParameterName::new("T", Some(&TypeName::Unknown));
        assert_eq!(tp.identifier(), "T -> ?");
        assert!(tp.is_bound());
        assert_eq!(tp.unbound().identifier(), "T");
    }
}
