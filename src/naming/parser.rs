//! Recursive-descent parser for code element identifiers.
//!
//! The parser works on identifiers that already went through [`crate::repair`]. It returns
//! an error for anything it does not understand; the public factories in
//! [`crate::naming`] turn such errors into the unknown value of the requested kind.
//!
//! Nesting is bounded by [`MAX_RECURSION_DEPTH`], so a hostile identifier cannot exhaust
//! the stack.

use crate::{
    naming::{
        members::{
            EventName, FieldName, LambdaName, LocalVariableName, MethodName, ParameterModifiers,
            ParameterName, PropertyName, GETTER_PREFIX, SETTER_PREFIX, STATIC_PREFIX,
        },
        organization::{AssemblyName, NamespaceName},
        types::{
            is_valid_short_name, ArrayTypeName, DelegateTypeName, PredefinedKind,
            PredefinedTypeName, RegularTypeName, TypeKind, TypeName, TypeParameterName,
            TypeSegment, BINDING_SEPARATOR,
        },
    },
    utils::scanner::{bracket_groups, find_next, find_top_level, is_array_marker, matching_close, split_top_level},
    Error, Result,
};

/// Maximum nesting of types inside types before parsing gives up
pub const MAX_RECURSION_DEPTH: usize = 50;

/// The member head `static? [<value>] [<declaring>].` with the remainder after the dot.
struct MemberHead<'a> {
    is_static: bool,
    value_type: TypeName,
    declaring_type: TypeName,
    rest: &'a str,
}

/// A parsed segment of a regular type, with offsets relative to the segment text.
struct ParsedSegment {
    segment: TypeSegment,
    /// End of name and arity, where an array marker would go
    head_len: usize,
    /// Byte range of an array marker
    marker: Option<(usize, usize)>,
}

/// Parser state, tracking the current nesting depth.
pub struct NameParser {
    depth: usize,
}

impl Default for NameParser {
    fn default() -> Self {
        Self::new()
    }
}

impl NameParser {
    /// Creates a parser at depth 0.
    #[must_use]
    pub fn new() -> Self {
        NameParser { depth: 0 }
    }

    fn descend<T>(&mut self, parse: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        if self.depth >= MAX_RECURSION_DEPTH {
            return Err(Error::RecursionLimit(MAX_RECURSION_DEPTH));
        }
        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }

    /// Parses a type identifier.
    ///
    /// # Errors
    /// Returns [`Error::Malformed`] if `id` is not a type, or [`Error::RecursionLimit`] if it
    /// nests too deep.
    pub fn parse_type(&mut self, id: &str) -> Result<TypeName> {
        self.descend(|p| p.type_name(id.trim()))
    }

    fn type_name(&mut self, id: &str) -> Result<TypeName> {
        if id.is_empty() || id == "?" {
            return Ok(TypeName::Unknown);
        }
        if let Some(parameter) = self.type_parameter(id)? {
            return Ok(parameter);
        }
        if id.starts_with("d:") {
            return self.delegate(id);
        }
        if let Some(alias) = id.strip_prefix("p:") {
            return Self::predefined(id, alias);
        }
        self.regular(id)
    }

    /// `T`, `T -> <bound>` or `T[] -> <bound>`. Returns `None` if `id` has another shape.
    fn type_parameter(&mut self, id: &str) -> Result<Option<TypeName>> {
        let short_end = id.find(' ').unwrap_or(id.len());
        let short = &id[..short_end];
        if !is_valid_short_name(short) {
            return Ok(None);
        }

        let rest = &id[short_end..];
        let bound = if rest.is_empty() {
            None
        } else if let Some(bound) = rest.strip_prefix(BINDING_SEPARATOR) {
            if bound.trim().is_empty() {
                return Ok(None);
            }
            Some(Box::new(self.parse_type(bound)?))
        } else {
            return Ok(None);
        };

        let Some(open) = short.find('[') else {
            return Ok(Some(TypeName::TypeParameter(TypeParameterName {
                id: id.to_string(),
                short_name: short.to_string(),
                bound,
            })));
        };

        let element_id = format!("{}{}", &short[..open], rest);
        let element = TypeParameterName {
            id: element_id,
            short_name: short[..open].to_string(),
            bound,
        };
        Ok(Some(TypeName::Array(ArrayTypeName {
            id: id.to_string(),
            element: Box::new(TypeName::TypeParameter(element)),
            rank: marker_rank(&short[open..]),
        })))
    }

    fn predefined(id: &str, alias_and_marker: &str) -> Result<TypeName> {
        let (alias, marker) = match alias_and_marker.find('[') {
            Some(open) => alias_and_marker.split_at(open),
            None => (alias_and_marker, ""),
        };
        let kind = PredefinedKind::from_alias(alias)
            .ok_or_else(|| malformed_error!("Unknown predefined type alias '{}'", alias))?;

        if marker.is_empty() {
            return Ok(TypeName::Predefined(PredefinedTypeName {
                id: id.to_string(),
                kind,
            }));
        }
        if !is_array_marker(marker) {
            return Err(malformed_error!("Invalid array marker in '{}'", id));
        }
        Ok(TypeName::Array(ArrayTypeName {
            id: id.to_string(),
            element: Box::new(TypeName::Predefined(PredefinedTypeName::new(kind))),
            rank: marker_rank(marker),
        }))
    }

    /// `d:[<ret>] [<decl>].(<params>)`, optionally followed by an array marker.
    fn delegate(&mut self, id: &str) -> Result<TypeName> {
        let signature = &id[2..];
        if !signature.starts_with('[') {
            return Err(malformed_error!("Delegate without signature: '{}'", id));
        }
        let return_close = close_of(signature, 0, id)?;
        let declaring_open = find_next(signature, return_close, b"[")
            .ok_or_else(|| malformed_error!("Delegate without declaring type: '{}'", id))?;
        let declaring_close = close_of(signature, declaring_open, id)?;
        if !signature[declaring_close + 1..].starts_with(".(") {
            return Err(malformed_error!("Delegate without parameter list: '{}'", id));
        }
        let parameters_close = close_of(signature, declaring_close + 2, id)?;

        let method = self.descend(|p| p.method_with(&signature[..=parameters_close], true))?;
        let tail = &signature[parameters_close + 1..];
        if tail.is_empty() {
            return Ok(TypeName::Delegate(DelegateTypeName {
                id: id.to_string(),
                signature: Box::new(method),
            }));
        }
        if !is_array_marker(tail) {
            return Err(malformed_error!("Unexpected '{}' after delegate signature", tail));
        }
        let element = DelegateTypeName {
            id: format!("d:{}", &signature[..=parameters_close]),
            signature: Box::new(method),
        };
        Ok(TypeName::Array(ArrayTypeName {
            id: id.to_string(),
            element: Box::new(TypeName::Delegate(element)),
            rank: marker_rank(tail),
        }))
    }

    /// `<kind prefix>?<namespace>.<segment>(+<segment>)*, <assembly>`
    fn regular(&mut self, id: &str) -> Result<TypeName> {
        let (kind, body) = TypeKind::split_prefix(id);
        let prefix_len = id.len() - body.len();
        let comma = find_top_level(body, 0, b',')
            .ok_or_else(|| malformed_error!("Type without assembly: '{}'", id))?;
        let full_name = body[..comma].trim_end();
        if full_name.is_empty() {
            return Err(malformed_error!("Type without name: '{}'", id));
        }
        let assembly = AssemblyName::parse(&body[comma + 1..])?;

        let pieces = split_top_level(full_name, b'+');
        let mut segments = Vec::with_capacity(pieces.len());
        let mut namespace = NamespaceName::global();
        let mut offset = 0;
        let mut marker_position = 0;
        let mut marker = None;

        for (index, piece) in pieces.iter().enumerate() {
            let is_last = index + 1 == pieces.len();
            let mut parsed = self.segment(piece, is_last)?;

            if index == 0 {
                if let Some(dot) = parsed.segment.name.rfind('.') {
                    namespace = NamespaceName::new(&parsed.segment.name[..dot]);
                    parsed.segment.name = parsed.segment.name[dot + 1..].to_string();
                    if parsed.segment.name.is_empty() {
                        return Err(malformed_error!("Type name ends with '.': '{}'", id));
                    }
                }
            }
            if is_last {
                marker_position = prefix_len + offset + parsed.head_len;
                marker = parsed
                    .marker
                    .map(|(start, end)| (prefix_len + offset + start, prefix_len + offset + end));
            }

            segments.push(parsed.segment);
            offset += piece.len() + 1;
        }

        if let Some((start, end)) = marker {
            let element_id = format!("{}{}", &id[..start], &id[end..]);
            let element = self.descend(|p| p.regular(&element_id))?;
            return Ok(TypeName::Array(ArrayTypeName {
                id: id.to_string(),
                element: Box::new(element),
                rank: marker_rank(&id[start..end]),
            }));
        }

        Ok(TypeName::Regular(RegularTypeName {
            id: id.to_string(),
            kind,
            full_name: full_name.to_string(),
            namespace,
            segments,
            assembly,
            marker_position,
        }))
    }

    /// ``<name>(`N)?(<array marker>)?([[<arg>],...])?``
    fn segment(&mut self, piece: &str, is_last: bool) -> Result<ParsedSegment> {
        let bytes = piece.as_bytes();
        let name_end = find_next(piece, 0, b"`[").unwrap_or(piece.len());
        let name = &piece[..name_end];
        if name.is_empty()
            || name
                .chars()
                .any(|c| c.is_whitespace() || matches!(c, ',' | '(' | ')' | ':'))
        {
            return Err(malformed_error!("Invalid type name '{}'", name));
        }

        let mut cursor = name_end;
        let mut arity = None;
        if bytes.get(cursor) == Some(&b'`') {
            let digits_end = piece[cursor + 1..]
                .find(|c: char| !c.is_ascii_digit())
                .map_or(piece.len(), |pos| pos + cursor + 1);
            arity = Some(
                piece[cursor + 1..digits_end]
                    .parse::<usize>()
                    .map_err(|_| malformed_error!("Invalid arity in '{}'", piece))?,
            );
            cursor = digits_end;
        }
        let head_len = cursor;

        let mut marker = None;
        if bytes.get(cursor) == Some(&b'[') {
            let close = close_of(piece, cursor, piece)?;
            if is_array_marker(&piece[cursor..=close]) {
                if !is_last {
                    return Err(malformed_error!("Array marker on outer type '{}'", piece));
                }
                marker = Some((cursor, close + 1));
                cursor = close + 1;
            }
        }

        let mut type_arguments = Vec::new();
        if bytes.get(cursor) == Some(&b'[') {
            let close = close_of(piece, cursor, piece)?;
            if close + 1 != piece.len() {
                return Err(malformed_error!("Unexpected text after type arguments in '{}'", piece));
            }
            let groups = bracket_groups(piece, cursor, close)
                .ok_or_else(|| malformed_error!("Unbalanced type arguments in '{}'", piece))?;
            for group in groups {
                type_arguments.push(self.parse_type(group)?);
            }
            cursor = piece.len();
        }

        if cursor != piece.len() {
            return Err(malformed_error!("Unexpected '{}' in type name", &piece[cursor..]));
        }

        Ok(ParsedSegment {
            segment: TypeSegment {
                name: name.to_string(),
                arity,
                type_arguments,
            },
            head_len,
            marker,
        })
    }

    /// Parses a method identifier.
    ///
    /// # Errors
    /// Returns [`Error::Malformed`] if `id` is not a method.
    pub fn parse_method(&mut self, id: &str) -> Result<MethodName> {
        let id = id.trim();
        if id.is_empty() {
            return Ok(MethodName::unknown());
        }
        self.method_with(id, false)
    }

    /// Parses a method, or the nameless signature of a delegate if `is_signature` is set.
    fn method_with(&mut self, id: &str, is_signature: bool) -> Result<MethodName> {
        let head = self.member_head(id)?;
        let rest = head.rest;
        let name_end = find_next(rest, 0, b"`(")
            .ok_or_else(|| malformed_error!("Method without parameter list: '{}'", id))?;
        let name = &rest[..name_end];
        if is_signature != name.is_empty() {
            return Err(malformed_error!("Invalid method name in '{}'", id));
        }

        let bytes = rest.as_bytes();
        let mut cursor = name_end;
        let mut arity = None;
        let mut type_parameters = Vec::new();
        if bytes.get(cursor) == Some(&b'`') {
            let digits_end = rest[cursor + 1..]
                .find(|c: char| !c.is_ascii_digit())
                .map_or(rest.len(), |pos| pos + cursor + 1);
            arity = Some(
                rest[cursor + 1..digits_end]
                    .parse::<usize>()
                    .map_err(|_| malformed_error!("Invalid arity in '{}'", id))?,
            );
            cursor = digits_end;
            if bytes.get(cursor) == Some(&b'[') {
                let close = close_of(rest, cursor, id)?;
                let groups = bracket_groups(rest, cursor, close)
                    .ok_or_else(|| malformed_error!("Unbalanced type parameters in '{}'", id))?;
                for group in groups {
                    type_parameters.push(self.parse_type(group)?);
                }
                cursor = close + 1;
            }
        }

        if bytes.get(cursor) != Some(&b'(') {
            return Err(malformed_error!("Method without parameter list: '{}'", id));
        }
        let close = close_of(rest, cursor, id)?;
        if close + 1 != rest.len() {
            return Err(malformed_error!("Unexpected text after parameters in '{}'", id));
        }
        let parameters = self.parameter_list(&rest[cursor + 1..close])?;

        Ok(MethodName {
            id: id.to_string(),
            is_static: head.is_static,
            return_type: head.value_type,
            declaring_type: head.declaring_type,
            name: name.to_string(),
            arity,
            type_parameters,
            parameters,
        })
    }

    fn member_head<'a>(&mut self, id: &'a str) -> Result<MemberHead<'a>> {
        let (is_static, rest) = match id.strip_prefix(STATIC_PREFIX) {
            Some(rest) => (true, rest.trim_start()),
            None => (false, id),
        };
        if !rest.starts_with('[') {
            return Err(malformed_error!("Member without value type: '{}'", id));
        }
        let value_close = close_of(rest, 0, id)?;
        let value_type = self.parse_type(&rest[1..value_close])?;

        let rest = rest[value_close + 1..].trim_start();
        if !rest.starts_with('[') {
            return Err(malformed_error!("Member without declaring type: '{}'", id));
        }
        let declaring_close = close_of(rest, 0, id)?;
        let declaring_type = self.parse_type(&rest[1..declaring_close])?;

        let rest = rest[declaring_close + 1..]
            .strip_prefix('.')
            .ok_or_else(|| malformed_error!("Member without name: '{}'", id))?;

        Ok(MemberHead {
            is_static,
            value_type,
            declaring_type,
            rest,
        })
    }

    fn parameter_list(&mut self, list: &str) -> Result<Vec<ParameterName>> {
        if list.trim().is_empty() {
            return Ok(Vec::new());
        }
        split_top_level(list, b',')
            .into_iter()
            .map(|parameter| self.parse_parameter_strict(parameter))
            .collect()
    }

    /// Parses a parameter identifier.
    ///
    /// # Errors
    /// Returns [`Error::Malformed`] if `id` is not a parameter.
    pub fn parse_parameter(&mut self, id: &str) -> Result<ParameterName> {
        if id.trim().is_empty() {
            return Ok(ParameterName::unknown());
        }
        self.parse_parameter_strict(id)
    }

    fn parse_parameter_strict(&mut self, id: &str) -> Result<ParameterName> {
        let id = id.trim();
        let (modifiers, rest) = ParameterModifiers::split_prefixes(id);
        let (value_type, name) = self.typed_name(rest, id)?;
        Ok(ParameterName {
            id: id.to_string(),
            modifiers,
            value_type,
            name,
        })
    }

    /// `[<type>] <name>`
    fn typed_name(&mut self, text: &str, id: &str) -> Result<(TypeName, String)> {
        if !text.starts_with('[') {
            return Err(malformed_error!("Missing type in '{}'", id));
        }
        let close = close_of(text, 0, id)?;
        let value_type = self.parse_type(&text[1..close])?;
        let name = text[close + 1..]
            .strip_prefix(' ')
            .map(str::trim)
            .filter(|name| is_simple_name(name))
            .ok_or_else(|| malformed_error!("Missing name in '{}'", id))?;
        Ok((value_type, name.to_string()))
    }

    /// Parses a property identifier.
    ///
    /// # Errors
    /// Returns [`Error::Malformed`] if `id` is not a property.
    pub fn parse_property(&mut self, id: &str) -> Result<PropertyName> {
        let id = id.trim();
        if id.is_empty() {
            return Ok(PropertyName::unknown());
        }

        let mut rest = id;
        let mut has_getter = false;
        let mut has_setter = false;
        loop {
            if let Some(stripped) = rest.strip_prefix(SETTER_PREFIX) {
                has_setter = true;
                rest = stripped;
            } else if let Some(stripped) = rest.strip_prefix(GETTER_PREFIX) {
                has_getter = true;
                rest = stripped;
            } else {
                break;
            }
        }

        let head = self.member_head(rest)?;
        let (name, parameters) = match head.rest.find('(') {
            Some(open) => {
                let close = close_of(head.rest, open, id)?;
                if close + 1 != head.rest.len() {
                    return Err(malformed_error!("Unexpected text after parameters in '{}'", id));
                }
                let parameters = self.parameter_list(&head.rest[open + 1..close])?;
                (&head.rest[..open], parameters)
            }
            None => (head.rest, Vec::new()),
        };
        if !is_simple_name(name) {
            return Err(malformed_error!("Invalid property name in '{}'", id));
        }

        Ok(PropertyName {
            id: id.to_string(),
            is_static: head.is_static,
            has_getter,
            has_setter,
            value_type: head.value_type,
            declaring_type: head.declaring_type,
            name: name.to_string(),
            parameters,
        })
    }

    /// Parses a field identifier.
    ///
    /// # Errors
    /// Returns [`Error::Malformed`] if `id` is not a field.
    pub fn parse_field(&mut self, id: &str) -> Result<FieldName> {
        let id = id.trim();
        if id.is_empty() {
            return Ok(FieldName::unknown());
        }
        let head = self.head_only(id)?;
        Ok(FieldName {
            id: id.to_string(),
            is_static: head.is_static,
            value_type: head.value_type,
            declaring_type: head.declaring_type,
            name: head.rest.to_string(),
        })
    }

    /// Parses an event identifier.
    ///
    /// # Errors
    /// Returns [`Error::Malformed`] if `id` is not an event.
    pub fn parse_event(&mut self, id: &str) -> Result<EventName> {
        let id = id.trim();
        if id.is_empty() {
            return Ok(EventName::unknown());
        }
        let head = self.head_only(id)?;
        Ok(EventName {
            id: id.to_string(),
            is_static: head.is_static,
            value_type: head.value_type,
            declaring_type: head.declaring_type,
            name: head.rest.to_string(),
        })
    }

    fn head_only<'a>(&mut self, id: &'a str) -> Result<MemberHead<'a>> {
        let head = self.member_head(id)?;
        if !is_simple_name(head.rest) {
            return Err(malformed_error!("Invalid member name in '{}'", id));
        }
        Ok(head)
    }

    /// Parses a local variable identifier.
    ///
    /// # Errors
    /// Returns [`Error::Malformed`] if `id` is not a local variable.
    pub fn parse_local_variable(&mut self, id: &str) -> Result<LocalVariableName> {
        let id = id.trim();
        if id.is_empty() {
            return Ok(LocalVariableName::unknown());
        }
        let (value_type, name) = self.typed_name(id, id)?;
        Ok(LocalVariableName {
            id: id.to_string(),
            value_type,
            name,
        })
    }

    /// Parses a lambda identifier.
    ///
    /// # Errors
    /// Returns [`Error::Malformed`] if `id` is not a lambda.
    pub fn parse_lambda(&mut self, id: &str) -> Result<LambdaName> {
        let id = id.trim();
        if id.is_empty() {
            return Ok(LambdaName::unknown());
        }
        if !id.starts_with('[') {
            return Err(malformed_error!("Lambda without return type: '{}'", id));
        }
        let return_close = close_of(id, 0, id)?;
        let return_type = self.parse_type(&id[1..return_close])?;

        let rest = &id[return_close + 1..];
        let open = rest
            .strip_prefix(' ')
            .filter(|r| r.starts_with('('))
            .map(|_| 1)
            .ok_or_else(|| malformed_error!("Lambda without parameter list: '{}'", id))?;
        let close = close_of(rest, open, id)?;
        if close + 1 != rest.len() {
            return Err(malformed_error!("Unexpected text after parameters in '{}'", id));
        }
        let parameters = self.parameter_list(&rest[open + 1..close])?;

        Ok(LambdaName {
            id: id.to_string(),
            return_type,
            parameters,
        })
    }
}

/// Rank of a validated array marker
fn marker_rank(marker: &str) -> u32 {
    marker.bytes().filter(|b| *b == b',').count() as u32 + 1
}

/// The closing bracket for the bracket at `open`, or a malformed error naming `id`.
fn close_of(s: &str, open: usize, id: &str) -> Result<usize> {
    matching_close(s, open).ok_or_else(|| malformed_error!("Unbalanced brackets in '{}'", id))
}

/// Member, parameter and variable names: non-empty, without blanks or brackets.
fn is_simple_name(name: &str) -> bool {
    !name.is_empty()
        && !name
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '(' | ')' | '[' | ']' | ','))
}
