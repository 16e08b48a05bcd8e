use crate::naming::{
    members::{
        render_generics, render_head, render_parameters, MemberName, ParameterName,
    },
    types::TypeName,
    Name,
};

/// Identifier of the unknown method
pub const UNKNOWN_METHOD_IDENTIFIER: &str = "[?] [?].???()";

/// Name of instance constructors
pub const CONSTRUCTOR_NAME: &str = ".ctor";

/// Name of static constructors
pub const STATIC_CONSTRUCTOR_NAME: &str = ".cctor";

/// Name of instance initializers
pub const INITIALIZER_NAME: &str = ".init";

/// Name of static initializers
pub const STATIC_INITIALIZER_NAME: &str = ".cinit";

/// A method, `static? [<ret>] [<decl>].<name>(`N[[<tps>]])?(<params>)`.
///
/// Delegate signatures are methods with an empty name.
#[derive(Debug, Clone)]
pub struct MethodName {
    pub(crate) id: String,
    pub(crate) is_static: bool,
    pub(crate) return_type: TypeName,
    pub(crate) declaring_type: TypeName,
    pub(crate) name: String,
    pub(crate) arity: Option<usize>,
    pub(crate) type_parameters: Vec<TypeName>,
    pub(crate) parameters: Vec<ParameterName>,
}

impl MethodName {
    /// The unknown method
    #[must_use]
    pub fn unknown() -> Self {
        MethodName {
            id: UNKNOWN_METHOD_IDENTIFIER.to_string(),
            is_static: false,
            return_type: TypeName::Unknown,
            declaring_type: TypeName::Unknown,
            name: "???".to_string(),
            arity: None,
            type_parameters: Vec::new(),
            parameters: Vec::new(),
        }
    }

    /// The return type, an alias for the value type
    #[must_use]
    pub fn return_type(&self) -> &TypeName {
        &self.return_type
    }

    /// Parameters in declaration order
    #[must_use]
    pub fn parameters(&self) -> &[ParameterName] {
        &self.parameters
    }

    /// `true` if the method takes parameters
    #[must_use]
    pub fn has_parameters(&self) -> bool {
        !self.parameters.is_empty()
    }

    /// Type parameters listed on the method itself
    #[must_use]
    pub fn type_parameters(&self) -> &[TypeName] {
        &self.type_parameters
    }

    /// `true` if the method lists type parameters
    #[must_use]
    pub fn has_type_parameters(&self) -> bool {
        !self.type_parameters.is_empty()
    }

    /// `true` if the method is generic, with or without listed type parameters
    #[must_use]
    pub fn is_generic_entity(&self) -> bool {
        self.arity.is_some() || self.has_type_parameters()
    }

    /// `.ctor` or `.cctor`
    #[must_use]
    pub fn is_constructor(&self) -> bool {
        self.name == CONSTRUCTOR_NAME || self.name == STATIC_CONSTRUCTOR_NAME
    }

    /// `.init` or `.cinit`
    #[must_use]
    pub fn is_init(&self) -> bool {
        self.name == INITIALIZER_NAME || self.name == STATIC_INITIALIZER_NAME
    }

    /// `true` if the first parameter is the receiver of an extension method
    #[must_use]
    pub fn is_extension_method(&self) -> bool {
        self.parameters
            .first()
            .is_some_and(ParameterName::is_extension_method_parameter)
    }

    /// Name with generic suffix and parameter types, without return and declaring type.
    ///
    /// ```rust
    /// use dotnames::naming::parse_method;
    ///
    /// let m = parse_method("[p:void] [C, P].M`1[[T]]([T] a, out [p:int] b)");
    /// assert_eq!(m.signature(), "M`1[[T]]([T] a, out [p:int] b)");
    /// ```
    #[must_use]
    pub fn signature(&self) -> String {
        let type_parameters: Vec<String> = self
            .type_parameters
            .iter()
            .map(|t| t.identifier().to_string())
            .collect();
        let parameters: Vec<String> = self
            .parameters
            .iter()
            .map(|p| p.identifier().to_string())
            .collect();
        format!(
            "{}{}{}",
            self.name,
            render_generics(self.arity, &type_parameters),
            render_parameters(&parameters)
        )
    }

    /// The same method with all type arguments unbound, in the method's own type
    /// parameters, its types and its parameters.
    #[must_use]
    pub fn remove_generics(&self) -> MethodName {
        let type_parameters: Vec<TypeName> = self
            .type_parameters
            .iter()
            .map(TypeName::remove_generics)
            .collect();
        let parameters: Vec<ParameterName> = self
            .parameters
            .iter()
            .map(ParameterName::remove_generics)
            .collect();
        let mut method = MethodName {
            id: String::new(),
            is_static: self.is_static,
            return_type: self.return_type.remove_generics(),
            declaring_type: self.declaring_type.remove_generics(),
            name: self.name.clone(),
            arity: self.arity,
            type_parameters,
            parameters,
        };
        method.id = format!(
            "{}{}",
            render_head(
                method.is_static,
                method.return_type.identifier(),
                method.declaring_type.identifier(),
                ""
            ),
            method.signature()
        );
        method
    }
}

impl MemberName for MethodName {
    fn is_static(&self) -> bool {
        self.is_static
    }

    fn value_type(&self) -> &TypeName {
        &self.return_type
    }

    fn declaring_type(&self) -> &TypeName {
        &self.declaring_type
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn full_name(&self) -> String {
        let type_parameters: Vec<String> = self
            .type_parameters
            .iter()
            .map(|t| t.identifier().to_string())
            .collect();
        format!(
            "{}.{}{}",
            self.declaring_type.full_name(),
            self.name,
            render_generics(self.arity, &type_parameters)
        )
    }
}

name_identity!(MethodName, |n| n.id == UNKNOWN_METHOD_IDENTIFIER);
name_serde!(MethodName, crate::naming::parse_method);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naming::{parse_method, try_parse_method};

    #[test]
    fn test_simple_method() {
        let m = parse_method("[p:void] [n.C, P].M()");
        assert!(!m.is_static());
        assert!(m.return_type().is_void_type());
        assert_eq!(m.declaring_type().identifier(), "n.C, P");
        assert_eq!(m.name(), "M");
        assert_eq!(m.full_name(), "n.C.M");
        assert!(!m.has_parameters());
        assert!(!m.is_generic_entity());
        assert!(!m.is_unknown());
    }

    #[test]
    fn test_static_with_parameters() {
        let m = parse_method("static [p:int] [n.C, P].Add([p:int] a, ref [p:int] b)");
        assert!(m.is_static());
        assert_eq!(m.parameters().len(), 2);
        assert_eq!(m.parameters()[0].name(), "a");
        assert!(m.parameters()[1].is_passed_by_reference());
    }

    #[test]
    fn test_generic_method() {
        let m = parse_method("[T] [C, P].Get`2[[T -> p:int],[U]]([U] u)");
        assert!(m.is_generic_entity());
        assert!(m.has_type_parameters());
        let tps: Vec<&str> = m.type_parameters().iter().map(|t| t.identifier()).collect();
        assert_eq!(tps, vec!["T -> p:int", "U"]);
        assert_eq!(m.name(), "Get");
        assert_eq!(m.full_name(), "C.Get`2[[T -> p:int],[U]]");
    }

    #[test]
    fn test_generic_parameter_types() {
        let m = parse_method(
            "[p:void] [n.C, P].M([d:[p:void] [n.D, P].([p:int] i)] callback, [n.L`1[[T -> p:int]], P] list)",
        );
        assert_eq!(m.parameters().len(), 2);
        assert!(m.parameters()[0].value_type().is_delegate_type());
        assert_eq!(m.parameters()[1].name(), "list");
    }

    #[test]
    fn test_constructors() {
        assert!(parse_method("[p:void] [C, P]..ctor()").is_constructor());
        assert!(parse_method("static [p:void] [C, P]..cctor()").is_constructor());
        assert!(!parse_method("[p:void] [C, P].ctor()").is_constructor());
        assert!(parse_method("[p:void] [C, P]..init()").is_init());
        assert!(parse_method("static [p:void] [C, P]..cinit()").is_init());
    }

    #[test]
    fn test_extension_method() {
        let m = parse_method("static [p:bool] [n.E, P].IsEmpty(this [p:string] s)");
        assert!(m.is_extension_method());
    }

    #[test]
    fn test_unknown() {
        assert!(MethodName::unknown().is_unknown());
        assert!(parse_method("").is_unknown());
        assert!(parse_method(UNKNOWN_METHOD_IDENTIFIER).is_unknown());
        assert!(parse_method("[p:void] [C, P].M").is_unknown());
        assert!(try_parse_method("[p:void] [C, P].()").is_err());
    }

    #[test]
    fn test_remove_generics() {
        let m = parse_method("[T -> p:int] [n.C`1[[T -> p:int]], P].M`1[[U -> p:string]]([U -> p:string] u)");
        assert_eq!(
            m.remove_generics().identifier(),
            "[T] [n.C`1[[T]], P].M`1[[U]]([U] u)"
        );
    }
}
