use crate::naming::{
    members::{MemberName, MethodName, ParameterName},
    organization::{AssemblyName, NamespaceName},
    types::TypeName,
};

/// A delegate type, `d:[<ret>] [<decl>].(<params>)`.
///
/// The signature has the shape of a method without name. The declaring type of the
/// signature is the delegate type itself, so name, namespace, assembly and nesting are
/// taken from it.
#[derive(Debug, Clone)]
pub struct DelegateTypeName {
    pub(crate) id: String,
    pub(crate) signature: Box<MethodName>,
}

impl DelegateTypeName {
    /// The signature, a [`MethodName`] with empty name
    #[must_use]
    pub fn signature(&self) -> &MethodName {
        &self.signature
    }

    /// The type that represents the delegate (the signature's declaring type)
    #[must_use]
    pub fn delegate_type(&self) -> &TypeName {
        self.signature.declaring_type()
    }

    /// Return type of the signature
    #[must_use]
    pub fn return_type(&self) -> &TypeName {
        self.signature.return_type()
    }

    /// Parameters of the signature
    #[must_use]
    pub fn parameters(&self) -> &[ParameterName] {
        self.signature.parameters()
    }

    /// `true` if the signature takes parameters
    #[must_use]
    pub fn has_parameters(&self) -> bool {
        self.signature.has_parameters()
    }

    /// Full name of the delegate type
    #[must_use]
    pub fn full_name(&self) -> String {
        self.delegate_type().full_name()
    }

    /// Name of the delegate type
    #[must_use]
    pub fn name(&self) -> String {
        self.delegate_type().name()
    }

    /// Namespace of the delegate type
    #[must_use]
    pub fn namespace(&self) -> NamespaceName {
        self.delegate_type().namespace()
    }

    /// Assembly of the delegate type
    #[must_use]
    pub fn assembly(&self) -> AssemblyName {
        self.delegate_type().assembly()
    }

    /// The type the delegate is declared in, for nested delegate types
    #[must_use]
    pub fn declaring_type(&self) -> Option<TypeName> {
        self.delegate_type().declaring_type()
    }
}

name_identity!(DelegateTypeName, |_n| false);

#[cfg(test)]
mod tests {
    use crate::naming::{members::MemberName, parse_type, types::TypeName, Name};

    fn delegate(id: &str) -> super::DelegateTypeName {
        match parse_type(id) {
            TypeName::Delegate(d) => d,
            other => panic!("not a delegate: {}", other),
        }
    }

    #[test]
    fn test_signature() {
        let d = delegate("d:[p:void] [n.C+D, P].([p:int] i, [p:string] s)");
        assert_eq!(d.return_type().identifier(), "p:void");
        assert_eq!(d.delegate_type().identifier(), "n.C+D, P");
        assert_eq!(d.parameters().len(), 2);
        assert!(d.has_parameters());
        assert_eq!(d.signature().name(), "");
    }

    #[test]
    fn test_names_come_from_delegate_type() {
        let d = delegate("d:[p:void] [n.C+D, P].()");
        assert_eq!(d.full_name(), "n.C+D");
        assert_eq!(d.name(), "D");
        assert_eq!(d.namespace().identifier(), "n");
        assert_eq!(d.assembly().identifier(), "P");
        assert_eq!(
            d.declaring_type().map(|t| t.identifier().to_string()),
            Some("n.C, P".to_string())
        );
        assert!(!d.has_parameters());
    }
}
