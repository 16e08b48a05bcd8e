use crate::{
    naming::{
        organization::{AssemblyName, NamespaceName},
        parser::NameParser,
        types::{PredefinedKind, TypeName},
        Name,
    },
    utils::scanner::find_top_level,
};

/// Classification carried by the kind prefix of a regular type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    /// No prefix
    Class,
    /// `i:`
    Interface,
    /// `s:`
    Struct,
    /// `e:`
    Enum,
}

impl TypeKind {
    /// The identifier prefix of this kind, empty for classes
    #[must_use]
    pub fn prefix(self) -> &'static str {
        match self {
            TypeKind::Class => "",
            TypeKind::Interface => "i:",
            TypeKind::Struct => "s:",
            TypeKind::Enum => "e:",
        }
    }

    /// Splits the kind prefix off a regular type identifier.
    pub(crate) fn split_prefix(id: &str) -> (TypeKind, &str) {
        for kind in [TypeKind::Interface, TypeKind::Struct, TypeKind::Enum] {
            if let Some(rest) = id.strip_prefix(kind.prefix()) {
                return (kind, rest);
            }
        }
        (TypeKind::Class, id)
    }
}

/// One `+` separated nesting level of a regular type: `` Name`N[[args]] ``.
#[derive(Debug, Clone)]
pub struct TypeSegment {
    pub(crate) name: String,
    pub(crate) arity: Option<usize>,
    pub(crate) type_arguments: Vec<TypeName>,
}

impl TypeSegment {
    /// Name of the segment without namespace, arity or arguments
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The arity marker, if present
    #[must_use]
    pub fn arity(&self) -> Option<usize> {
        self.arity
    }

    /// The type arguments listed on this segment
    #[must_use]
    pub fn type_arguments(&self) -> &[TypeName] {
        &self.type_arguments
    }
}

/// A class, interface, struct or enum type, `<prefix>?<segments>, <assembly>`.
#[derive(Debug, Clone)]
pub struct RegularTypeName {
    pub(crate) id: String,
    pub(crate) kind: TypeKind,
    pub(crate) full_name: String,
    pub(crate) namespace: NamespaceName,
    pub(crate) segments: Vec<TypeSegment>,
    pub(crate) assembly: AssemblyName,
    /// Offset in `id` where an array marker is inserted to derive an array type
    pub(crate) marker_position: usize,
}

impl RegularTypeName {
    /// The kind prefix
    #[must_use]
    pub fn kind(&self) -> TypeKind {
        self.kind
    }

    /// Namespace, nesting, arity and type arguments, without kind prefix and assembly
    #[must_use]
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// Name of the innermost segment
    #[must_use]
    pub fn name(&self) -> &str {
        self.segments.last().map_or("", |s| s.name.as_str())
    }

    /// The namespace, the global namespace if the name has no `.`
    #[must_use]
    pub fn namespace(&self) -> &NamespaceName {
        &self.namespace
    }

    /// The assembly the type is defined in
    #[must_use]
    pub fn assembly(&self) -> &AssemblyName {
        &self.assembly
    }

    /// Nesting levels, outermost first
    #[must_use]
    pub fn segments(&self) -> &[TypeSegment] {
        &self.segments
    }

    /// All type arguments in scope, outermost segment first
    #[must_use]
    pub fn type_parameters(&self) -> Vec<&TypeName> {
        self.segments
            .iter()
            .flat_map(|s| s.type_arguments.iter())
            .collect()
    }

    /// `true` if any segment lists type arguments
    #[must_use]
    pub fn has_type_parameters(&self) -> bool {
        self.segments.iter().any(|s| !s.type_arguments.is_empty())
    }

    /// `true` if any segment carries an arity marker
    #[must_use]
    pub fn is_generic_entity(&self) -> bool {
        self.segments.iter().any(|s| s.arity.is_some())
    }

    /// `true` for types declared inside another type
    #[must_use]
    pub fn is_nested_type(&self) -> bool {
        self.segments.len() > 1
    }

    /// The enclosing type of a nested type.
    ///
    /// The declaring type is a class (no kind prefix) in the same assembly that keeps the type
    /// arguments of its own segments.
    #[must_use]
    pub fn declaring_type(&self) -> Option<TypeName> {
        let mut last_plus = None;
        let mut from = 0;
        while let Some(idx) = find_top_level(&self.full_name, from, b'+') {
            last_plus = Some(idx);
            from = idx + 1;
        }
        let id = format!("{}, {}", &self.full_name[..last_plus?], self.assembly.identifier());
        NameParser::new().parse_type(&id).ok()
    }

    /// ``System.Nullable`1``
    #[must_use]
    pub fn is_nullable(&self) -> bool {
        self.namespace.identifier() == "System"
            && self.segments.len() == 1
            && self.segments[0].name == "Nullable"
            && self.segments[0].arity == Some(1)
    }

    /// A predefined type spelled as regular type, such as `System.Int32, mscorlib, 4.0.0.0`
    #[must_use]
    pub fn predefined_kind(&self) -> Option<PredefinedKind> {
        if self.assembly.name() != super::predefined::PREDEFINED_ASSEMBLY {
            return None;
        }
        PredefinedKind::from_full_name(&self.full_name)
    }

    /// Renders the type with replaced parts, keeping its structure.
    ///
    /// `segment_name` maps each segment name, `argument` renders each type argument.
    pub(crate) fn render_with(
        &self,
        namespace: &str,
        segment_name: &dyn Fn(&str) -> String,
        argument: &mut dyn FnMut(&TypeName) -> String,
        assembly: &str,
    ) -> String {
        let mut out = String::from(self.kind.prefix());
        if !namespace.is_empty() {
            out.push_str(namespace);
            out.push('.');
        }
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                out.push('+');
            }
            out.push_str(&segment_name(&segment.name));
            if let Some(arity) = segment.arity {
                out.push('`');
                out.push_str(&arity.to_string());
            }
            if !segment.type_arguments.is_empty() {
                let args: Vec<String> = segment
                    .type_arguments
                    .iter()
                    .map(|a| format!("[{}]", argument(a)))
                    .collect();
                out.push('[');
                out.push_str(&args.join(","));
                out.push(']');
            }
        }
        out.push_str(", ");
        out.push_str(assembly);
        out
    }
}

name_identity!(RegularTypeName, |_n| false);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naming::parse_type;

    fn regular(id: &str) -> RegularTypeName {
        match parse_type(id) {
            TypeName::Regular(r) => r,
            other => panic!("not a regular type: {}", other),
        }
    }

    #[test]
    fn test_kind_prefix() {
        assert_eq!(TypeKind::split_prefix("i:I, P"), (TypeKind::Interface, "I, P"));
        assert_eq!(TypeKind::split_prefix("s:S, P"), (TypeKind::Struct, "S, P"));
        assert_eq!(TypeKind::split_prefix("e:E, P"), (TypeKind::Enum, "E, P"));
        assert_eq!(TypeKind::split_prefix("C, P"), (TypeKind::Class, "C, P"));
    }

    #[test]
    fn test_segments() {
        let t = regular("n.m.O`1[[T]]+I`2[[U],[V -> p:int]], P");
        assert_eq!(t.full_name(), "n.m.O`1[[T]]+I`2[[U],[V -> p:int]]");
        assert_eq!(t.name(), "I");
        assert_eq!(t.namespace().identifier(), "n.m");
        assert_eq!(t.segments().len(), 2);
        assert_eq!(t.segments()[0].name(), "O");
        assert_eq!(t.segments()[1].arity(), Some(2));
        let args: Vec<&str> = t.type_parameters().iter().map(|a| a.identifier()).collect();
        assert_eq!(args, vec!["T", "U", "V -> p:int"]);
        assert!(t.has_type_parameters());
        assert!(t.is_generic_entity());
        assert!(t.is_nested_type());
    }

    #[test]
    fn test_declaring_type() {
        let t = regular("s:n.O`1[[T]]+M+I, P, 1.2.3.4");
        let declaring = t.declaring_type().unwrap();
        assert_eq!(declaring.identifier(), "n.O`1[[T]]+M, P, 1.2.3.4");
        let outer = declaring.declaring_type().unwrap();
        assert_eq!(outer.identifier(), "n.O`1[[T]], P, 1.2.3.4");
        assert!(outer.declaring_type().is_none());
    }

    #[test]
    fn test_global_namespace() {
        let t = regular("C, P");
        assert!(t.namespace().is_global_namespace());
        assert_eq!(t.name(), "C");
        assert!(!t.is_nested_type());
        assert!(t.declaring_type().is_none());
    }

    #[test]
    fn test_nullable() {
        assert!(regular("s:System.Nullable`1[[T -> p:int]], mscorlib, 4.0.0.0").is_nullable());
        assert!(!regular("s:My.Nullable`1[[T]], P").is_nullable());
    }

    #[test]
    fn test_render_with_keeps_structure() {
        let t = regular("e:n.O`1[[T]]+I,P");
        let rendered = t.render_with(
            "x",
            &|name| name.to_lowercase(),
            &mut |arg| arg.identifier().to_string(),
            "Q",
        );
        assert_eq!(rendered, "e:x.o`1[[T]]+i, Q");
    }
}
