//! Structure-preserving anonymization of names.
//!
//! Anonymization replaces the parts of a name that identify code under analysis with hash
//! digests (see [`to_hash`]) and keeps everything else: kind prefixes, arity and array
//! markers, predefined types, and every type that comes from a versioned (external)
//! assembly. The result is a valid identifier of the same kind that parses to the same
//! shape.
//!
//! Anonymization is not idempotent. Hashing a digest again yields a different digest, so
//! callers check [`Name::is_hashed`] before anonymizing a name a second time.
//!
//! # Examples
//!
//! ```rust
//! use dotnames::{anonymize::{to_hash, Anonymize}, naming::{parse_type, Name}};
//!
//! let local = parse_type("MyType, MyProject");
//! assert_eq!(
//!     local.anonymize().identifier(),
//!     format!("{}, {}", to_hash("MyType"), to_hash("MyProject"))
//! );
//!
//! let external = parse_type("System.IO.File, mscorlib, 4.0.0.0");
//! assert_eq!(external.anonymize(), external);
//! ```

mod hash;

pub use hash::{hash, hash_if_file, to_hash};

use log::debug;
use strum::{EnumCount, EnumIter};

use crate::naming::{
    ide::{
        AliasName, DocumentName, GeneralName, ProjectItemName, ProjectName, SolutionName,
        WindowName,
    },
    members::{
        render_generics, render_head, render_parameters, EventName, FieldName, LambdaName,
        LocalVariableName, MemberName, MethodName, ParameterName, PropertyName, CONSTRUCTOR_NAME,
        GETTER_PREFIX, SETTER_PREFIX, STATIC_CONSTRUCTOR_NAME,
    },
    organization::{AssemblyName, NamespaceName},
    parser::NameParser,
    types::{RegularTypeName, TypeName, TypeParameterName, BINDING_SEPARATOR},
    Name,
};

/// Names that can be turned into their anonymous counterpart.
pub trait Anonymize: Name + Sized {
    /// Returns the anonymous name of the same kind
    #[must_use]
    fn anonymize(&self) -> Self;
}

/// Anonymizes any name, see [`Anonymize`].
#[must_use]
pub fn anonymize<N: Anonymize>(name: &N) -> N {
    name.anonymize()
}

/// Parses an identifier built by anonymization, which never needs repair.
fn reparse<T>(
    kind: &str,
    id: &str,
    parse: impl FnOnce(&mut NameParser, &str) -> crate::Result<T>,
    unknown: impl FnOnce() -> T,
) -> T {
    parse(&mut NameParser::new(), id).unwrap_or_else(|error| {
        debug!("anonymous {} '{}' does not parse: {}", kind, id, error);
        unknown()
    })
}

impl Anonymize for TypeName {
    fn anonymize(&self) -> Self {
        match self {
            TypeName::Unknown | TypeName::Predefined(_) => self.clone(),
            TypeName::TypeParameter(tp) => {
                let id = anonymous_type_parameter(tp);
                reparse("type", &id, NameParser::parse_type, || TypeName::Unknown)
            }
            TypeName::Array(array) => array
                .element()
                .anonymize()
                .derive_array(array.rank())
                .unwrap_or_else(|error| {
                    debug!("anonymous array of '{}' failed: {}", array.identifier(), error);
                    TypeName::Unknown
                }),
            TypeName::Delegate(delegate) => {
                let id = format!("d:{}", delegate.signature().anonymize().identifier());
                reparse("type", &id, NameParser::parse_type, || TypeName::Unknown)
            }
            TypeName::Regular(regular) => anonymous_regular(regular),
        }
    }
}

fn anonymous_regular(regular: &RegularTypeName) -> TypeName {
    let id = if regular.assembly().is_local_project() {
        let namespace = if regular.namespace().is_global_namespace() {
            String::new()
        } else {
            to_hash(regular.namespace().identifier())
        };
        regular.render_with(
            &namespace,
            &|name| to_hash(name),
            &mut |arg| arg.anonymize().identifier().to_string(),
            &to_hash(regular.assembly().identifier()),
        )
    } else {
        let unchanged = regular
            .type_parameters()
            .iter()
            .all(|arg| arg.anonymize().identifier() == arg.identifier());
        if unchanged {
            return TypeName::Regular(regular.clone());
        }
        regular.render_with(
            regular.namespace().identifier(),
            &|name| name.to_string(),
            &mut |arg| arg.anonymize().identifier().to_string(),
            regular.assembly().identifier(),
        )
    };
    reparse("type", &id, NameParser::parse_type, || TypeName::Unknown)
}

/// `S -> B` with the short name `S` kept and the bound anonymized.
fn anonymous_type_parameter(tp: &TypeParameterName) -> String {
    match tp.bound() {
        Some(bound) => format!(
            "{}{}{}",
            tp.short_name(),
            BINDING_SEPARATOR,
            bound.anonymize().identifier()
        ),
        None => tp.short_name().to_string(),
    }
}

/// `true` if names inside a member of `declaring_type` identify code under analysis.
fn is_sensitive(declaring_type: &TypeName) -> bool {
    declaring_type.is_unknown() || declaring_type.assembly().is_local_project()
}

/// The member head with anonymized types and, unless external or a constructor, a hashed name.
fn anonymous_head<M: MemberName>(member: &M) -> String {
    let name = member.name();
    let keep_name = !is_sensitive(member.declaring_type())
        || name == CONSTRUCTOR_NAME
        || name == STATIC_CONSTRUCTOR_NAME;
    render_head(
        member.is_static(),
        member.value_type().anonymize().identifier(),
        member.declaring_type().anonymize().identifier(),
        &if keep_name { name.to_string() } else { to_hash(name) },
    )
}

fn anonymous_parameters(parameters: &[ParameterName]) -> String {
    let rendered: Vec<String> = parameters.iter().map(anonymous_parameter).collect();
    render_parameters(&rendered)
}

fn anonymous_parameter(parameter: &ParameterName) -> String {
    format!(
        "{}[{}] {}",
        parameter.modifiers().prefix(),
        parameter.value_type().anonymize().identifier(),
        to_hash(parameter.name())
    )
}

impl Anonymize for MethodName {
    fn anonymize(&self) -> Self {
        if self.is_unknown() {
            return self.clone();
        }
        let type_parameters: Vec<String> = self
            .type_parameters()
            .iter()
            .map(|tp| tp.anonymize().identifier().to_string())
            .collect();
        let arity = (!type_parameters.is_empty()).then_some(type_parameters.len());
        let id = format!(
            "{}{}{}",
            anonymous_head(self),
            render_generics(arity, &type_parameters),
            anonymous_parameters(self.parameters())
        );
        if self.name().is_empty() {
            // delegate signature, the nameless form only parses inside `d:`
            let delegate = format!("d:{}", id);
            return match reparse("method", &delegate, NameParser::parse_type, || TypeName::Unknown)
            {
                TypeName::Delegate(d) => d.signature().clone(),
                _ => MethodName::unknown(),
            };
        }
        reparse("method", &id, NameParser::parse_method, MethodName::unknown)
    }
}

impl Anonymize for PropertyName {
    fn anonymize(&self) -> Self {
        if self.is_unknown() {
            return self.clone();
        }
        let id = format!(
            "{}{}{}{}",
            if self.has_setter() { SETTER_PREFIX } else { "" },
            if self.has_getter() { GETTER_PREFIX } else { "" },
            anonymous_head(self),
            anonymous_parameters(self.parameters())
        );
        reparse("property", &id, NameParser::parse_property, PropertyName::unknown)
    }
}

impl Anonymize for FieldName {
    fn anonymize(&self) -> Self {
        if self.is_unknown() {
            return self.clone();
        }
        reparse(
            "field",
            &anonymous_head(self),
            NameParser::parse_field,
            FieldName::unknown,
        )
    }
}

impl Anonymize for EventName {
    fn anonymize(&self) -> Self {
        if self.is_unknown() {
            return self.clone();
        }
        reparse(
            "event",
            &anonymous_head(self),
            NameParser::parse_event,
            EventName::unknown,
        )
    }
}

impl Anonymize for ParameterName {
    fn anonymize(&self) -> Self {
        if self.is_unknown() {
            return self.clone();
        }
        let id = anonymous_parameter(self);
        reparse("parameter", &id, NameParser::parse_parameter, ParameterName::unknown)
    }
}

impl Anonymize for LocalVariableName {
    fn anonymize(&self) -> Self {
        if self.is_unknown() {
            return self.clone();
        }
        let id = format!(
            "[{}] {}",
            self.value_type().anonymize().identifier(),
            to_hash(self.name())
        );
        reparse(
            "local variable",
            &id,
            NameParser::parse_local_variable,
            LocalVariableName::unknown,
        )
    }
}

impl Anonymize for LambdaName {
    fn anonymize(&self) -> Self {
        if self.is_unknown() {
            return self.clone();
        }
        let id = format!(
            "[{}] {}",
            self.return_type().anonymize().identifier(),
            anonymous_parameters(self.parameters())
        );
        reparse("lambda", &id, NameParser::parse_lambda, LambdaName::unknown)
    }
}

impl Anonymize for NamespaceName {
    fn anonymize(&self) -> Self {
        if self.is_unknown() || self.is_global_namespace() {
            return self.clone();
        }
        NamespaceName::new(&to_hash(self.identifier()))
    }
}

impl Anonymize for AssemblyName {
    fn anonymize(&self) -> Self {
        if !self.is_local_project() {
            return self.clone();
        }
        AssemblyName::parse(&to_hash(self.identifier())).unwrap_or_else(|_| AssemblyName::unknown())
    }
}

/// Anonymizes IDE names made of a kind word and a possibly sensitive path or caption.
macro_rules! anonymize_two_part {
    ($ty:ty, $first:ident, $second:ident) => {
        impl Anonymize for $ty {
            fn anonymize(&self) -> Self {
                if self.is_unknown() {
                    return self.clone();
                }
                <$ty>::from_parts(self.$first(), &hash_if_file(self.$second()))
            }
        }
    };
}

anonymize_two_part!(DocumentName, language, file_name);
anonymize_two_part!(WindowName, window_type, caption);
anonymize_two_part!(ProjectName, project_type, name);
anonymize_two_part!(ProjectItemName, item_type, name);

/// Anonymizes IDE names that are hashed as a whole.
macro_rules! anonymize_whole {
    ($ty:ty) => {
        impl Anonymize for $ty {
            fn anonymize(&self) -> Self {
                if self.is_unknown() {
                    return self.clone();
                }
                <$ty>::parse(&to_hash(self.identifier()))
            }
        }
    };
}

anonymize_whole!(SolutionName);
anonymize_whole!(AliasName);
anonymize_whole!(GeneralName);

/// The kinds of names, in the order they are usually listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumCount)]
#[allow(missing_docs)]
pub enum NameKind {
    Type,
    Method,
    Field,
    Event,
    Property,
    Parameter,
    LocalVariable,
    Lambda,
    Namespace,
    Assembly,
    Document,
    Window,
    Solution,
    Project,
    ProjectItem,
    Alias,
    General,
}

impl NameKind {
    /// The prefix identifying the kind in serialized event streams, where one exists.
    ///
    /// Identifiers stored with the method and property prefixes can carry historical
    /// shapes that only [`crate::repair::repair_with_prefix`] fixes. The method and property
    /// factories pass their prefix to the repair.
    #[must_use]
    pub fn serialization_prefix(self) -> Option<&'static str> {
        match self {
            NameKind::Type => Some("0T"),
            NameKind::Method => Some(crate::repair::fixes::PREFIX_METHOD),
            NameKind::Field => Some("0F"),
            NameKind::Event => Some("0E"),
            NameKind::Property => Some(crate::repair::fixes::PREFIX_PROPERTY),
            _ => None,
        }
    }
}

/// A name of any kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum AnyName {
    Type(TypeName),
    Method(MethodName),
    Field(FieldName),
    Event(EventName),
    Property(PropertyName),
    Parameter(ParameterName),
    LocalVariable(LocalVariableName),
    Lambda(LambdaName),
    Namespace(NamespaceName),
    Assembly(AssemblyName),
    Document(DocumentName),
    Window(WindowName),
    Solution(SolutionName),
    Project(ProjectName),
    ProjectItem(ProjectItemName),
    Alias(AliasName),
    General(GeneralName),
}

/// Dispatches `$body` over every variant of [`AnyName`], binding the inner name to `$n`.
macro_rules! any_name_dispatch {
    ($value:expr, |$n:ident| $body:expr) => {
        match $value {
            AnyName::Type($n) => $body,
            AnyName::Method($n) => $body,
            AnyName::Field($n) => $body,
            AnyName::Event($n) => $body,
            AnyName::Property($n) => $body,
            AnyName::Parameter($n) => $body,
            AnyName::LocalVariable($n) => $body,
            AnyName::Lambda($n) => $body,
            AnyName::Namespace($n) => $body,
            AnyName::Assembly($n) => $body,
            AnyName::Document($n) => $body,
            AnyName::Window($n) => $body,
            AnyName::Solution($n) => $body,
            AnyName::Project($n) => $body,
            AnyName::ProjectItem($n) => $body,
            AnyName::Alias($n) => $body,
            AnyName::General($n) => $body,
        }
    };
}

/// Same as [`any_name_dispatch`], re-wrapping the result in the variant it came from.
macro_rules! any_name_map {
    ($value:expr, |$n:ident| $body:expr) => {
        match $value {
            AnyName::Type($n) => AnyName::Type($body),
            AnyName::Method($n) => AnyName::Method($body),
            AnyName::Field($n) => AnyName::Field($body),
            AnyName::Event($n) => AnyName::Event($body),
            AnyName::Property($n) => AnyName::Property($body),
            AnyName::Parameter($n) => AnyName::Parameter($body),
            AnyName::LocalVariable($n) => AnyName::LocalVariable($body),
            AnyName::Lambda($n) => AnyName::Lambda($body),
            AnyName::Namespace($n) => AnyName::Namespace($body),
            AnyName::Assembly($n) => AnyName::Assembly($body),
            AnyName::Document($n) => AnyName::Document($body),
            AnyName::Window($n) => AnyName::Window($body),
            AnyName::Solution($n) => AnyName::Solution($body),
            AnyName::Project($n) => AnyName::Project($body),
            AnyName::ProjectItem($n) => AnyName::ProjectItem($body),
            AnyName::Alias($n) => AnyName::Alias($body),
            AnyName::General($n) => AnyName::General($body),
        }
    };
}

impl AnyName {
    /// Repairs and parses `id` as a name of `kind`, falling back to the unknown value.
    ///
    /// Code element kinds are repaired by their factories, including the fixes selected by
    /// the serialization prefix of the kind. IDE names are parsed as written.
    ///
    /// ```rust
    /// use dotnames::{anonymize::{AnyName, NameKind}, naming::Name};
    ///
    /// let p = AnyName::parse(NameKind::Property, "[p:int] [n.C, P].P");
    /// assert_eq!(p.identifier(), "set get [p:int] [n.C, P].P()");
    /// assert_eq!(p.kind(), NameKind::Property);
    /// ```
    #[must_use]
    pub fn parse(kind: NameKind, id: &str) -> AnyName {
        use crate::naming;

        match kind {
            NameKind::Type => AnyName::Type(naming::parse_type(id)),
            NameKind::Method => AnyName::Method(naming::parse_method(id)),
            NameKind::Field => AnyName::Field(naming::parse_field(id)),
            NameKind::Event => AnyName::Event(naming::parse_event(id)),
            NameKind::Property => AnyName::Property(naming::parse_property(id)),
            NameKind::Parameter => AnyName::Parameter(naming::parse_parameter(id)),
            NameKind::LocalVariable => {
                AnyName::LocalVariable(naming::parse_local_variable(id))
            }
            NameKind::Lambda => AnyName::Lambda(naming::parse_lambda(id)),
            NameKind::Namespace => AnyName::Namespace(naming::parse_namespace(id)),
            NameKind::Assembly => AnyName::Assembly(naming::parse_assembly(id)),
            NameKind::Document => AnyName::Document(DocumentName::parse(id)),
            NameKind::Window => AnyName::Window(WindowName::parse(id)),
            NameKind::Solution => AnyName::Solution(SolutionName::parse(id)),
            NameKind::Project => AnyName::Project(ProjectName::parse(id)),
            NameKind::ProjectItem => AnyName::ProjectItem(ProjectItemName::parse(id)),
            NameKind::Alias => AnyName::Alias(AliasName::parse(id)),
            NameKind::General => AnyName::General(GeneralName::parse(id)),
        }
    }

    /// The kind of the wrapped name
    #[must_use]
    pub fn kind(&self) -> NameKind {
        match self {
            AnyName::Type(_) => NameKind::Type,
            AnyName::Method(_) => NameKind::Method,
            AnyName::Field(_) => NameKind::Field,
            AnyName::Event(_) => NameKind::Event,
            AnyName::Property(_) => NameKind::Property,
            AnyName::Parameter(_) => NameKind::Parameter,
            AnyName::LocalVariable(_) => NameKind::LocalVariable,
            AnyName::Lambda(_) => NameKind::Lambda,
            AnyName::Namespace(_) => NameKind::Namespace,
            AnyName::Assembly(_) => NameKind::Assembly,
            AnyName::Document(_) => NameKind::Document,
            AnyName::Window(_) => NameKind::Window,
            AnyName::Solution(_) => NameKind::Solution,
            AnyName::Project(_) => NameKind::Project,
            AnyName::ProjectItem(_) => NameKind::ProjectItem,
            AnyName::Alias(_) => NameKind::Alias,
            AnyName::General(_) => NameKind::General,
        }
    }
}

impl Name for AnyName {
    fn identifier(&self) -> &str {
        any_name_dispatch!(self, |n| n.identifier())
    }

    fn is_unknown(&self) -> bool {
        any_name_dispatch!(self, |n| n.is_unknown())
    }
}

impl Anonymize for AnyName {
    fn anonymize(&self) -> Self {
        any_name_map!(self, |n| n.anonymize())
    }
}

impl std::fmt::Display for AnyName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.identifier())
    }
}
