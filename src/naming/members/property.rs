use crate::naming::{
    members::{render_head, render_parameters, MemberName, ParameterName, UNKNOWN_MEMBER_IDENTIFIER},
    types::TypeName,
    Name,
};

/// Prefix of properties with a setter
pub const SETTER_PREFIX: &str = "set ";

/// Prefix of properties with a getter
pub const GETTER_PREFIX: &str = "get ";

/// A property, `(set )?(get )?static? [<type>] [<decl>].<name>(<params>)?`.
///
/// Indexers carry their index parameters in the parameter list.
#[derive(Debug, Clone)]
pub struct PropertyName {
    pub(crate) id: String,
    pub(crate) is_static: bool,
    pub(crate) has_getter: bool,
    pub(crate) has_setter: bool,
    pub(crate) value_type: TypeName,
    pub(crate) declaring_type: TypeName,
    pub(crate) name: String,
    pub(crate) parameters: Vec<ParameterName>,
}

impl PropertyName {
    /// The unknown property
    #[must_use]
    pub fn unknown() -> Self {
        PropertyName {
            id: UNKNOWN_MEMBER_IDENTIFIER.to_string(),
            is_static: false,
            has_getter: false,
            has_setter: false,
            value_type: TypeName::Unknown,
            declaring_type: TypeName::Unknown,
            name: "???".to_string(),
            parameters: Vec::new(),
        }
    }

    /// `true` if the property can be read
    #[must_use]
    pub fn has_getter(&self) -> bool {
        self.has_getter
    }

    /// `true` if the property can be written
    #[must_use]
    pub fn has_setter(&self) -> bool {
        self.has_setter
    }

    /// Index parameters
    #[must_use]
    pub fn parameters(&self) -> &[ParameterName] {
        &self.parameters
    }

    /// `true` if the property takes index parameters
    #[must_use]
    pub fn has_parameters(&self) -> bool {
        !self.parameters.is_empty()
    }

    /// `true` for indexers
    #[must_use]
    pub fn is_indexer(&self) -> bool {
        self.has_parameters()
    }

    /// The same property with all type arguments unbound
    #[must_use]
    pub fn remove_generics(&self) -> PropertyName {
        let value_type = self.value_type.remove_generics();
        let declaring_type = self.declaring_type.remove_generics();
        let parameters: Vec<ParameterName> = self
            .parameters
            .iter()
            .map(ParameterName::remove_generics)
            .collect();
        let rendered: Vec<String> = parameters.iter().map(|p| p.id.clone()).collect();
        let id = format!(
            "{}{}{}{}",
            if self.has_setter { SETTER_PREFIX } else { "" },
            if self.has_getter { GETTER_PREFIX } else { "" },
            render_head(
                self.is_static,
                value_type.identifier(),
                declaring_type.identifier(),
                &self.name
            ),
            render_parameters(&rendered)
        );
        PropertyName {
            id,
            is_static: self.is_static,
            has_getter: self.has_getter,
            has_setter: self.has_setter,
            value_type,
            declaring_type,
            name: self.name.clone(),
            parameters,
        }
    }
}

impl MemberName for PropertyName {
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

name_identity!(PropertyName, |n| n.id == UNKNOWN_MEMBER_IDENTIFIER);
name_serde!(PropertyName, crate::naming::parse_property);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naming::parse_property;

    #[test]
    fn test_accessors() {
        let p = parse_property("set get [p:int] [n.C, P].Count()");
        assert!(p.has_getter());
        assert!(p.has_setter());
        assert_eq!(p.name(), "Count");
        assert_eq!(p.value_type().identifier(), "p:int");
        assert!(!p.is_indexer());

        let p = parse_property("get static [p:int] [n.C, P].Count()");
        assert!(p.has_getter());
        assert!(!p.has_setter());
        assert!(p.is_static());
    }

    #[test]
    fn test_indexer() {
        let p = parse_property("get [p:char] [p:string].this([p:int] index)");
        assert!(p.is_indexer());
        assert_eq!(p.parameters()[0].name(), "index");
        assert_eq!(p.full_name(), "System.String.this");
    }

    #[test]
    fn test_without_parentheses() {
        let p = parse_property("get [p:int] [n.C, P].Count");
        assert!(!p.is_unknown());
        assert_eq!(p.name(), "Count");
    }

    #[test]
    fn test_without_accessors() {
        let p = parse_property("[p:int] [n.C, P].P");
        assert_eq!(p.identifier(), "set get [p:int] [n.C, P].P()");
        assert!(p.has_getter());
        assert!(p.has_setter());
    }

    #[test]
    fn test_unknown() {
        assert!(PropertyName::unknown().is_unknown());
        assert!(parse_property("").is_unknown());
        assert!(parse_property(UNKNOWN_MEMBER_IDENTIFIER).is_unknown());
    }

    #[test]
    fn test_remove_generics() {
        let p = parse_property("get [T -> p:int] [n.C`1[[T -> p:int]], P].P()");
        assert_eq!(p.remove_generics().identifier(), "get [T] [n.C`1[[T]], P].P()");
    }
}
