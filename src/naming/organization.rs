//! Assembly and namespace names.
//!
//! Types carry the assembly they are defined in as the trailing part of their identifier.
//! An assembly is either an external library, identified by name and four-part version
//! (`mscorlib, 4.0.0.0`), or the *enclosing project*: the code under analysis, identified by
//! name alone (`MyProject`). The distinction drives anonymization, which only scrubs names that
//! originate in the enclosing project.
//!
//! # Key Components
//!
//! - [`AssemblyVersion`] - Four-part version numbering (major.minor.build.revision)
//! - [`AssemblyName`] - Assembly name with optional version
//! - [`NamespaceName`] - Dotted namespace, `""` being the global namespace
//!
//! # Examples
//!
//! ```rust
//! use dotnames::naming::{parse_assembly, Name};
//!
//! let external = parse_assembly("mscorlib, 4.0.0.0");
//! assert!(!external.is_local_project());
//! assert_eq!(external.version().map(|v| v.major), Some(4));
//!
//! let local = parse_assembly("MyProject");
//! assert!(local.is_local_project());
//! assert_eq!(local.identifier(), "MyProject");
//! ```

use std::{fmt, str::FromStr};

use crate::{Error, Result};

/// Four-part assembly version.
///
/// Versions are compared component-wise in order: major, minor, build, revision.
///
/// # Examples
///
/// ```rust
/// use dotnames::naming::AssemblyVersion;
///
/// let version = AssemblyVersion::new(1, 2, 3, 4);
/// assert_eq!(version.to_string(), "1.2.3.4");
///
/// let parsed = AssemblyVersion::parse("2.0.0.0")?;
/// assert!(parsed > version);
/// # Ok::<(), dotnames::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AssemblyVersion {
    /// Major version component.
    pub major: u16,
    /// Minor version component.
    pub minor: u16,
    /// Build version component.
    pub build: u16,
    /// Revision version component.
    pub revision: u16,
}

impl AssemblyVersion {
    /// Create a new assembly version with the specified components.
    #[must_use]
    pub const fn new(major: u16, minor: u16, build: u16, revision: u16) -> Self {
        Self {
            major,
            minor,
            build,
            revision,
        }
    }

    /// Parse assembly version from string representation.
    ///
    /// Supports one to four dot separated components, missing components default to 0.
    /// Surrounding whitespace is ignored.
    ///
    /// # Errors
    /// Returns an error if the version string has an invalid format.
    pub fn parse(version_str: &str) -> Result<Self> {
        let version_str = version_str.trim();
        let parts: Vec<&str> = version_str.split('.').collect();

        if parts.is_empty() || parts.len() > 4 {
            return Err(malformed_error!("Invalid version format: {}", version_str));
        }

        let mut components = [0u16; 4];

        for (i, part) in parts.iter().enumerate() {
            components[i] = part
                .parse::<u16>()
                .map_err(|_| malformed_error!("Invalid version component: {}", part))?;
        }

        Ok(Self::new(
            components[0],
            components[1],
            components[2],
            components[3],
        ))
    }
}

impl fmt::Display for AssemblyVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}.{}",
            self.major, self.minor, self.build, self.revision
        )
    }
}

impl FromStr for AssemblyVersion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Identifier of the unknown assembly
pub const UNKNOWN_ASSEMBLY_IDENTIFIER: &str = "???";

/// Name of an assembly, `<name>` or `<name>, <version>`.
#[derive(Debug, Clone)]
pub struct AssemblyName {
    pub(crate) id: String,
    pub(crate) name: String,
    pub(crate) version: Option<AssemblyVersion>,
}

impl AssemblyName {
    /// The unknown assembly.
    #[must_use]
    pub fn unknown() -> Self {
        AssemblyName {
            id: UNKNOWN_ASSEMBLY_IDENTIFIER.to_string(),
            name: UNKNOWN_ASSEMBLY_IDENTIFIER.to_string(),
            version: None,
        }
    }

    /// Parses an assembly identifier.
    ///
    /// The empty string, `?` and `???` denote the unknown assembly.
    ///
    /// # Errors
    /// Returns an error if a version part is present but not a valid [`AssemblyVersion`], or if
    /// the name part is empty.
    pub fn parse(identifier: &str) -> Result<Self> {
        let id = identifier.trim();
        if id.is_empty() || id == "?" || id == UNKNOWN_ASSEMBLY_IDENTIFIER {
            return Ok(Self::unknown());
        }

        let (name, version) = match id.split_once(',') {
            Some((name, version)) => (name.trim(), Some(AssemblyVersion::parse(version)?)),
            None => (id, None),
        };
        if name.is_empty() {
            return Err(malformed_error!("Assembly without name: '{}'", id));
        }

        Ok(AssemblyName {
            id: id.to_string(),
            name: name.to_string(),
            version,
        })
    }

    /// The simple name of the assembly, without version.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The version, `None` for the enclosing project.
    #[must_use]
    pub fn version(&self) -> Option<AssemblyVersion> {
        self.version
    }

    /// `true` if this assembly is the code under analysis (known, but without version).
    #[must_use]
    pub fn is_local_project(&self) -> bool {
        !self.is_unknown_value() && self.version.is_none()
    }

    fn is_unknown_value(&self) -> bool {
        self.id == UNKNOWN_ASSEMBLY_IDENTIFIER
    }
}

impl Default for AssemblyName {
    fn default() -> Self {
        Self::unknown()
    }
}

name_identity!(AssemblyName, |n| n.is_unknown_value());
name_serde!(AssemblyName, crate::naming::parse_assembly);

/// Identifier of the unknown namespace
pub const UNKNOWN_NAMESPACE_IDENTIFIER: &str = "???";

/// Name of a namespace, segments separated by `.`.
#[derive(Debug, Clone)]
pub struct NamespaceName {
    pub(crate) id: String,
}

impl NamespaceName {
    /// The unknown namespace.
    #[must_use]
    pub fn unknown() -> Self {
        NamespaceName {
            id: UNKNOWN_NAMESPACE_IDENTIFIER.to_string(),
        }
    }

    /// The global namespace, whose identifier is the empty string.
    #[must_use]
    pub fn global() -> Self {
        NamespaceName { id: String::new() }
    }

    /// Creates a namespace name. Every string is a valid namespace identifier.
    #[must_use]
    pub fn new(identifier: &str) -> Self {
        NamespaceName {
            id: identifier.to_string(),
        }
    }

    /// `true` for the global namespace
    #[must_use]
    pub fn is_global_namespace(&self) -> bool {
        self.id.is_empty()
    }

    /// The last segment (`Generic` for `System.Collections.Generic`).
    #[must_use]
    pub fn name(&self) -> &str {
        match self.id.rfind('.') {
            Some(dot) => &self.id[dot + 1..],
            None => &self.id,
        }
    }

    /// The enclosing namespace, `None` for the global and the unknown namespace.
    #[must_use]
    pub fn parent_namespace(&self) -> Option<NamespaceName> {
        if self.is_global_namespace() || self.id == UNKNOWN_NAMESPACE_IDENTIFIER {
            return None;
        }
        Some(match self.id.rfind('.') {
            Some(dot) => NamespaceName::new(&self.id[..dot]),
            None => NamespaceName::global(),
        })
    }
}

impl Default for NamespaceName {
    fn default() -> Self {
        Self::unknown()
    }
}

name_identity!(NamespaceName, |n| n.id == UNKNOWN_NAMESPACE_IDENTIFIER);
name_serde!(NamespaceName, crate::naming::parse_namespace);
