use crate::naming::{
    members::{render_head, MemberName, UNKNOWN_MEMBER_IDENTIFIER},
    types::TypeName,
    Name,
};

/// Defines a member that consists of the member head alone.
macro_rules! head_member {
    ($(#[$meta:meta])* $ty:ident, $factory:path) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $ty {
            pub(crate) id: String,
            pub(crate) is_static: bool,
            pub(crate) value_type: TypeName,
            pub(crate) declaring_type: TypeName,
            pub(crate) name: String,
        }

        impl $ty {
            /// The unknown value of this kind
            #[must_use]
            pub fn unknown() -> Self {
                $ty {
                    id: UNKNOWN_MEMBER_IDENTIFIER.to_string(),
                    is_static: false,
                    value_type: TypeName::Unknown,
                    declaring_type: TypeName::Unknown,
                    name: "???".to_string(),
                }
            }

            /// The same member with all type arguments unbound
            #[must_use]
            pub fn remove_generics(&self) -> $ty {
                let value_type = self.value_type.remove_generics();
                let declaring_type = self.declaring_type.remove_generics();
                $ty {
                    id: render_head(
                        self.is_static,
                        value_type.identifier(),
                        declaring_type.identifier(),
                        &self.name,
                    ),
                    is_static: self.is_static,
                    value_type,
                    declaring_type,
                    name: self.name.clone(),
                }
            }
        }

        impl MemberName for $ty {
            fn is_static(&self) -> bool {
                self.is_static
            }

            fn value_type(&self) -> &TypeName {
                &self.value_type
            }

            fn declaring_type(&self) -> &TypeName {
                &self.declaring_type
            }

            fn name(&self) -> &str {
                &self.name
            }
        }

        name_identity!($ty, |n| n.id == UNKNOWN_MEMBER_IDENTIFIER);
        name_serde!($ty, $factory);
    };
}

head_member!(
    /// A field, `static? [<type>] [<decl>].<name>`.
    FieldName,
    crate::naming::parse_field
);

head_member!(
    /// An event, `static? [<handler type>] [<decl>].<name>`.
    EventName,
    crate::naming::parse_event
);

impl EventName {
    /// The delegate type of the event handlers
    #[must_use]
    pub fn handler_type(&self) -> &TypeName {
        &self.value_type
    }
}
