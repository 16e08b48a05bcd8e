use crate::naming::{
    members::{render_parameters, ParameterName},
    types::TypeName,
    Name,
};

/// Identifier of the unknown local variable
pub const UNKNOWN_LOCAL_IDENTIFIER: &str = "[?] ???";

/// Identifier of the unknown lambda
pub const UNKNOWN_LAMBDA_IDENTIFIER: &str = "[?] ???";

/// A local variable, `[<type>] <name>`.
#[derive(Debug, Clone)]
pub struct LocalVariableName {
    pub(crate) id: String,
    pub(crate) value_type: TypeName,
    pub(crate) name: String,
}

impl LocalVariableName {
    /// The unknown local variable
    #[must_use]
    pub fn unknown() -> Self {
        LocalVariableName {
            id: UNKNOWN_LOCAL_IDENTIFIER.to_string(),
            value_type: TypeName::Unknown,
            name: "???".to_string(),
        }
    }

    /// The declared type
    #[must_use]
    pub fn value_type(&self) -> &TypeName {
        &self.value_type
    }

    /// The variable name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

name_identity!(LocalVariableName, |n| n.id == UNKNOWN_LOCAL_IDENTIFIER);
name_serde!(LocalVariableName, crate::naming::parse_local_variable);

/// A lambda, `[<ret>] (<params>)`.
#[derive(Debug, Clone)]
pub struct LambdaName {
    pub(crate) id: String,
    pub(crate) return_type: TypeName,
    pub(crate) parameters: Vec<ParameterName>,
}

impl LambdaName {
    /// The unknown lambda
    #[must_use]
    pub fn unknown() -> Self {
        LambdaName {
            id: UNKNOWN_LAMBDA_IDENTIFIER.to_string(),
            return_type: TypeName::Unknown,
            parameters: Vec::new(),
        }
    }

    /// The return type
    #[must_use]
    pub fn return_type(&self) -> &TypeName {
        &self.return_type
    }

    /// Parameters in declaration order
    #[must_use]
    pub fn parameters(&self) -> &[ParameterName] {
        &self.parameters
    }

    /// `true` if the lambda takes parameters
    #[must_use]
    pub fn has_parameters(&self) -> bool {
        !self.parameters.is_empty()
    }

    /// `(<params>)` without the return type
    #[must_use]
    pub fn signature(&self) -> String {
        let parameters: Vec<String> = self
            .parameters
            .iter()
            .map(|p| p.identifier().to_string())
            .collect();
        render_parameters(&parameters)
    }
}

name_identity!(LambdaName, |n| n.id == UNKNOWN_LAMBDA_IDENTIFIER);
name_serde!(LambdaName, crate::naming::parse_lambda);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naming::{parse_lambda, parse_local_variable};

    #[test]
    fn test_local_variable() {
        let l = parse_local_variable("[n.C, P] instance");
        assert_eq!(l.value_type().identifier(), "n.C, P");
        assert_eq!(l.name(), "instance");
        assert!(!l.is_unknown());
        assert!(parse_local_variable("").is_unknown());
        assert!(parse_local_variable("[p:int]").is_unknown());
    }

    #[test]
    fn test_lambda() {
        let l = parse_lambda("[p:bool] ([p:int] a, [p:int] b)");
        assert!(l.return_type().is_predefined());
        assert_eq!(l.parameters().len(), 2);
        assert_eq!(l.signature(), "([p:int] a, [p:int] b)");

        let l = parse_lambda("[p:void] ()");
        assert!(!l.has_parameters());
        assert!(!l.is_unknown());
    }

    #[test]
    fn test_unknown_lambda() {
        assert!(LambdaName::unknown().is_unknown());
        assert!(parse_lambda("").is_unknown());
        assert!(parse_lambda("[p:void] x").is_unknown());
    }
}
