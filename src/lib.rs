// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # dotnames
//!
//! [![Crates.io](https://img.shields.io/crates/v/dotnames.svg)](https://crates.io/crates/dotnames)
//! [![Documentation](https://docs.rs/dotnames/badge.svg)](https://docs.rs/dotnames)
//! [![License](https://img.shields.io/badge/license-Apache--2.0-blue.svg)](https://github.com/BinFlip/dotnames/blob/main/LICENSE-APACHE)
//!
//! Parse, repair and anonymize the self-describing identifiers that IDE telemetry uses to
//! name .NET code elements.
//!
//! An identifier such as ``static [p:void] [n.C`1[[T -> p:int]], P].M([T] t)`` carries the
//! full structure of the element it names: kind prefixes, namespaces, nesting, generic
//! arity and arguments, array ranks, parameter modifiers and the defining assembly. This
//! crate turns such strings into typed names and back, without losing a byte.
//!
//! ## Features
//!
//! - **Lossless parsing** - every name keeps its identifier; the parsed structure is exposed
//!   through accessors such as [`naming::types::TypeName::declaring_type`]
//! - **Legacy repair** - identifiers written by earlier grammar versions are rewritten into
//!   the current grammar before parsing ([`repair`])
//! - **Anonymization** - names defined in the code under analysis are replaced by
//!   deterministic hashes while the grammar stays intact ([`anonymize`])
//! - **Never fails on data** - malformed identifiers become the unknown value of their kind
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! dotnames = "0.1"
//! ```
//!
//! ### Using the Prelude
//!
//! ```rust
//! use dotnames::prelude::*;
//!
//! let method = parse_method("[p:void] [MyApp.Worker, MyApp].Run([p:int] retries)");
//! assert_eq!(method.name(), "Run");
//! assert!(method.declaring_type().assembly().is_local_project());
//!
//! let anonymous = method.anonymize();
//! assert!(anonymous.is_hashed());
//! assert_eq!(anonymous.parameters().len(), 1);
//! ```
//!
//! ### Repairing historical identifiers
//!
//! ```rust
//! use dotnames::{naming::parse_type, prelude::*};
//!
//! // captured before predefined aliases existed
//! let t = parse_type("System.Collections.Generic.List`1[[T -> System.String, mscorlib, 4.0.0.0]], mscorlib, 4.0.0.0");
//! assert_eq!(
//!     t.identifier(),
//!     "System.Collections.Generic.List`1[[T -> p:string]], mscorlib, 4.0.0.0"
//! );
//! ```
//!
//! ## Logging
//!
//! The crate logs through the [`log`] facade: rewrites of the repair pipeline at `trace`,
//! fallbacks to unknown names at `debug`, and legacy identifiers that could not be repaired
//! at `warn`. Install any `log` implementation to see them.
//!
//! ## Development and Testing
//!
//! ```bash
//! cargo test --all-features
//! cargo bench
//! cargo +nightly fuzz run names --release
//! ```

#[macro_use]
pub(crate) mod macros;

#[macro_use]
pub(crate) mod error;

/// Convenient re-exports of the most commonly used types and traits.
///
/// # Example
///
/// ```rust
/// use dotnames::prelude::*;
///
/// let t = parse_type("i:n.IRunner, P");
/// assert!(t.is_interface_type());
/// ```
pub mod prelude;

/// Bracket-aware string scanning shared by the repair passes and the parser
pub mod utils;

/// Rewrites identifiers of earlier grammar versions into the current grammar.
///
/// # Key Types
///
/// - [`repair::RepairConfig`] - selects the passes and strict or lenient behavior
/// - [`repair::passes::PIPELINE`] - the ordered passes
///
/// # Main Functions
///
/// - [`repair::repair`] - lenient repair with all passes
/// - [`repair::repair_with_prefix`] - additionally applies the fixes of a serialization prefix
/// - [`repair::try_repair`] - repair with a custom configuration
pub mod repair;

/// Typed names of code elements, their parser and their factories.
///
/// See [`naming::parse_type`], [`naming::parse_method`] and the other `parse_*` factories.
pub mod naming;

/// Hashing of plain strings and structure-preserving anonymization of names
pub mod anonymize;

/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
///
/// # Examples
///
/// ```rust
/// use dotnames::{naming::{try_parse_type, types::TypeName}, Result};
///
/// fn element_of(id: &str) -> Result<TypeName> {
///     let t = try_parse_type(id)?;
///     Ok(t.as_array().map_or(t.clone(), |a| a.element().clone()))
/// }
/// # assert_eq!(element_of("p:int[]").unwrap(), try_parse_type("p:int").unwrap());
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// `dotnames` Error type
///
/// # Examples
///
/// ```rust
/// use dotnames::{naming::try_parse_type, Error};
///
/// match try_parse_type("Missing.Assembly") {
///     Ok(t) => println!("parsed {}", t),
///     Err(Error::Malformed { message, .. }) => println!("malformed: {}", message),
///     Err(e) => println!("error: {}", e),
/// }
/// ```
pub use error::Error;
