#![allow(unused_macros)]

/// Implements the identity surface shared by every name value.
///
/// Names are compared, hashed and printed by their identifier alone. The parsed fields of a
/// name are a function of the identifier, so they never take part in equality.
///
/// ```rust, ignore
/// name_identity!(FieldName, |n| n.is_unknown_value());
/// ```
macro_rules! name_identity {
    ($ty:ty, |$this:ident| $unknown:expr) => {
        impl crate::naming::Name for $ty {
            fn identifier(&self) -> &str {
                &self.id
            }

            fn is_unknown(&self) -> bool {
                let $this = self;
                $unknown
            }
        }

        impl PartialEq for $ty {
            fn eq(&self, other: &Self) -> bool {
                self.id == other.id
            }
        }

        impl Eq for $ty {}

        impl std::hash::Hash for $ty {
            fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                self.id.hash(state);
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.id)
            }
        }
    };
}

/// Implements `serde` support for a name value as its plain identifier string.
///
/// Deserialization goes through the repairing factory of the kind, so historical
/// identifiers are normalized on load.
///
/// ```rust, ignore
/// name_serde!(FieldName, crate::naming::parse_field);
/// ```
macro_rules! name_serde {
    ($ty:ty, $factory:path) => {
        #[cfg(feature = "serde")]
        impl serde::Serialize for $ty {
            fn serialize<S: serde::Serializer>(
                &self,
                serializer: S,
            ) -> std::result::Result<S::Ok, S::Error> {
                serializer.serialize_str(crate::naming::Name::identifier(self))
            }
        }

        #[cfg(feature = "serde")]
        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D: serde::Deserializer<'de>>(
                deserializer: D,
            ) -> std::result::Result<Self, D::Error> {
                let id = <String as serde::Deserialize>::deserialize(deserializer)?;
                Ok($factory(&id))
            }
        }
    };
}
