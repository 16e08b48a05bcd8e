//! Names of type members and the values flowing through them.
//!
//! All members share the head `static? [<value type>] [<declaring type>].<name>`. Methods
//! follow it with an optional type parameter list and a parameter list, properties with
//! accessor prefixes in front and an optional parameter list for indexers.
//!
//! # Key Types
//! - [`MethodName`], [`FieldName`], [`EventName`], [`PropertyName`]: members of a type
//! - [`ParameterName`] with [`ParameterModifiers`]: method and property parameters
//! - [`LocalVariableName`], [`LambdaName`]: names inside method bodies
//! - [`MemberName`]: accessors shared by all members
//!
//! # Examples
//!
//! ```rust
//! use dotnames::naming::{members::MemberName, parse_method, Name};
//!
//! let m = parse_method("static [p:void] [n.C, P].Run`1[[T]]([T] arg)");
//! assert!(m.is_static());
//! assert_eq!(m.name(), "Run");
//! assert_eq!(m.declaring_type().identifier(), "n.C, P");
//! assert_eq!(m.full_name(), "n.C.Run`1[[T]]");
//! ```

mod field;
mod local;
mod method;
mod parameter;
mod property;

pub use field::{EventName, FieldName};
pub use local::{
    LambdaName, LocalVariableName, UNKNOWN_LAMBDA_IDENTIFIER, UNKNOWN_LOCAL_IDENTIFIER,
};
pub use method::{
    MethodName, CONSTRUCTOR_NAME, INITIALIZER_NAME, STATIC_CONSTRUCTOR_NAME,
    STATIC_INITIALIZER_NAME, UNKNOWN_METHOD_IDENTIFIER,
};
pub use parameter::{ParameterModifiers, ParameterName, UNKNOWN_PARAMETER_IDENTIFIER};
pub use property::{PropertyName, GETTER_PREFIX, SETTER_PREFIX};

use crate::naming::{types::TypeName, Name};

/// Identifier of the unknown field, event and property
pub const UNKNOWN_MEMBER_IDENTIFIER: &str = "[?] [?].???";

/// Prefix of static members
pub const STATIC_PREFIX: &str = "static ";

/// Accessors shared by methods, fields, events and properties.
pub trait MemberName: Name {
    /// `true` for members declared `static`
    fn is_static(&self) -> bool;

    /// The type of the value the member holds or returns
    fn value_type(&self) -> &TypeName;

    /// The type that declares the member
    fn declaring_type(&self) -> &TypeName;

    /// The simple name of the member
    fn name(&self) -> &str;

    /// The member name qualified by the full name of its declaring type
    fn full_name(&self) -> String {
        format!("{}.{}", self.declaring_type().full_name(), self.name())
    }
}

/// Renders the member head `static? [<value>] [<declaring>].<name>`.
pub(crate) fn render_head(
    is_static: bool,
    value_type: &str,
    declaring_type: &str,
    name: &str,
) -> String {
    format!(
        "{}[{}] [{}].{}",
        if is_static { STATIC_PREFIX } else { "" },
        value_type,
        declaring_type,
        name
    )
}

/// Renders a generic suffix such as ``` `2[[T],[U]] ```.
///
/// The arity is the number of listed type parameters, or `arity` if none are listed.
pub(crate) fn render_generics(arity: Option<usize>, type_parameters: &[String]) -> String {
    if type_parameters.is_empty() {
        return arity.map_or_else(String::new, |n| format!("`{}", n));
    }
    let list: Vec<String> = type_parameters.iter().map(|t| format!("[{}]", t)).collect();
    format!("`{}[{}]", type_parameters.len(), list.join(","))
}

/// Renders a parameter list including its parentheses.
pub(crate) fn render_parameters(parameters: &[String]) -> String {
    format!("({})", parameters.join(", "))
}
