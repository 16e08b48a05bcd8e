//! Names of IDE components: documents, windows, solutions, projects and their items.
//!
//! These names are not part of the code grammar. Most consist of a kind word and a value
//! separated by the first space, such as `CSharp C:\Project\File.cs` for a document.
//! They are never repaired.

use log::debug;

/// Identifier of every unknown IDE component name
pub const UNKNOWN_IDE_IDENTIFIER: &str = "???";

/// Defines an IDE name that splits into a kind word and a value at the first space.
macro_rules! two_part_name {
    (
        $(#[$meta:meta])*
        $ty:ident, $first:ident, $first_doc:literal, $second:ident, $second_doc:literal
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $ty {
            pub(crate) id: String,
            split: usize,
        }

        impl $ty {
            /// The unknown value of this kind
            #[must_use]
            pub fn unknown() -> Self {
                $ty {
                    id: UNKNOWN_IDE_IDENTIFIER.to_string(),
                    split: UNKNOWN_IDE_IDENTIFIER.len(),
                }
            }

            /// Wraps an identifier. Identifiers without a space are unknown.
            #[must_use]
            pub fn parse(id: &str) -> Self {
                match id.find(' ') {
                    Some(split) => $ty {
                        id: id.to_string(),
                        split,
                    },
                    None => {
                        if !id.is_empty() && id != UNKNOWN_IDE_IDENTIFIER {
                            debug!("{}: no space in '{}', using unknown", stringify!($ty), id);
                        }
                        Self::unknown()
                    }
                }
            }

            /// Builds the identifier from both parts
            #[must_use]
            pub fn from_parts($first: &str, $second: &str) -> Self {
                Self::parse(&format!("{} {}", $first, $second))
            }

            #[doc = $first_doc]
            #[must_use]
            pub fn $first(&self) -> &str {
                &self.id[..self.split]
            }

            #[doc = $second_doc]
            #[must_use]
            pub fn $second(&self) -> &str {
                self.id.get(self.split + 1..).unwrap_or("")
            }
        }

        name_identity!($ty, |n| n.id == UNKNOWN_IDE_IDENTIFIER);
        name_serde!($ty, $ty::parse);
    };
}

/// Defines an IDE name that is a single opaque value.
macro_rules! whole_name {
    ($(#[$meta:meta])* $ty:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $ty {
            pub(crate) id: String,
        }

        impl $ty {
            /// The unknown value of this kind
            #[must_use]
            pub fn unknown() -> Self {
                $ty {
                    id: UNKNOWN_IDE_IDENTIFIER.to_string(),
                }
            }

            /// Wraps an identifier. The empty identifier is unknown.
            #[must_use]
            pub fn parse(id: &str) -> Self {
                if id.is_empty() {
                    return Self::unknown();
                }
                $ty { id: id.to_string() }
            }
        }

        name_identity!($ty, |n| n.id == UNKNOWN_IDE_IDENTIFIER);
        name_serde!($ty, $ty::parse);
    };
}

two_part_name!(
    /// A document, `<language> <file name>`.
    DocumentName,
    language,
    "Language of the document, such as `CSharp`",
    file_name,
    "Path of the document file"
);

two_part_name!(
    /// A tool or document window, `<window type> <caption>`.
    WindowName,
    window_type,
    "Type of the window, such as `vsWindowTypeDocument`",
    caption,
    "Caption shown in the title bar"
);

two_part_name!(
    /// A project, `<project type> <path>`.
    ProjectName,
    project_type,
    "Type of the project, such as `CSharp`",
    name,
    "Path of the project file"
);

two_part_name!(
    /// An item of a project, `<item type> <name>`.
    ProjectItemName,
    item_type,
    "Type of the item, such as `CSharp` or `Folder`",
    name,
    "Name or path of the item"
);

whole_name!(
    /// A solution, identified by the path of its file.
    SolutionName
);

whole_name!(
    /// An alias assigned to a command or window.
    AliasName
);

whole_name!(
    /// Any other named IDE entity.
    GeneralName
);
