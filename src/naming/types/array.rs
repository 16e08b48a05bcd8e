use crate::{
    naming::{
        organization::{AssemblyName, NamespaceName},
        types::{parameter::BINDING_SEPARATOR, TypeName},
        Name,
    },
    utils::scanner::array_marker,
    Error, Result,
};

/// An array of any other type, of rank 1 or higher.
///
/// Where the array marker goes depends on the element: after the last segment name and
/// arity of a regular type (``C`1[][[T]], P``), after the alias of a predefined type
/// (`p:int[,]`), on the short name of a type parameter (`T[] -> p:int`), and after the
/// signature of a delegate (`d:[?] [?].()[]`).
#[derive(Debug, Clone)]
pub struct ArrayTypeName {
    pub(crate) id: String,
    pub(crate) element: Box<TypeName>,
    pub(crate) rank: u32,
}

impl ArrayTypeName {
    /// Derives the array of `rank` over `base`.
    ///
    /// An array over an array is a single array of the summed rank.
    ///
    /// # Errors
    /// Returns [`Error::InvalidRank`] for rank 0 and [`Error::NotSupported`] for the unknown
    /// type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dotnames::naming::{parse_type, types::ArrayTypeName, Name};
    ///
    /// let base = parse_type("T, P");
    /// assert_eq!(ArrayTypeName::from(&base, 2)?.identifier(), "T[,], P");
    ///
    /// let nested = ArrayTypeName::from(&parse_type("p:int[]"), 1)?;
    /// assert_eq!(nested.identifier(), "p:int[,]");
    /// assert_eq!(nested.rank(), 2);
    /// # Ok::<(), dotnames::Error>(())
    /// ```
    pub fn from(base: &TypeName, rank: u32) -> Result<ArrayTypeName> {
        if rank == 0 {
            return Err(Error::InvalidRank(rank));
        }

        let marker = array_marker(rank);
        let id = match base {
            TypeName::Unknown => {
                return Err(Error::NotSupported(
                    "array of the unknown type".to_string(),
                ))
            }
            TypeName::Array(array) => return ArrayTypeName::from(&array.element, array.rank + rank),
            TypeName::Predefined(predefined) => format!("{}{}", predefined.id, marker),
            TypeName::Delegate(delegate) => format!("{}{}", delegate.id, marker),
            TypeName::TypeParameter(parameter) => match &parameter.bound {
                Some(bound) => format!(
                    "{}{}{}{}",
                    parameter.short_name,
                    marker,
                    BINDING_SEPARATOR,
                    bound.identifier()
                ),
                None => format!("{}{}", parameter.short_name, marker),
            },
            TypeName::Regular(regular) => {
                let (head, tail) = regular.id.split_at(regular.marker_position);
                format!("{}{}{}", head, marker, tail)
            }
        };

        Ok(ArrayTypeName {
            id,
            element: Box::new(base.clone()),
            rank,
        })
    }

    /// The element type, never an array itself
    #[must_use]
    pub fn element(&self) -> &TypeName {
        &self.element
    }

    /// Number of dimensions, 1 for `[]`
    #[must_use]
    pub fn rank(&self) -> u32 {
        self.rank
    }

    /// Full name of the element with the array marker appended
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{}{}", self.element.full_name(), array_marker(self.rank))
    }

    /// Name of the element with the array marker appended
    #[must_use]
    pub fn name(&self) -> String {
        format!("{}{}", self.element.name(), array_marker(self.rank))
    }

    /// Namespace of the element
    #[must_use]
    pub fn namespace(&self) -> NamespaceName {
        self.element.namespace()
    }

    /// Assembly of the element
    #[must_use]
    pub fn assembly(&self) -> AssemblyName {
        self.element.assembly()
    }
}

name_identity!(ArrayTypeName, |_n| false);
