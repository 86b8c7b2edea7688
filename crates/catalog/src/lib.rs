//! Fixed catalog of named locations and nearest-city resolution.
//!
//! The catalog is read-only for the lifetime of the process: the built-in
//! table is materialized once on first use, and externally supplied catalogs
//! are validated on load and only borrowed afterwards.

pub mod builtin;
pub mod error;
pub mod location;
pub mod lookup;

pub use builtin::*;
pub use error::*;
pub use location::*;
pub use lookup::*;
