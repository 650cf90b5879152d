//! View-model logic behind the dashboard.
//!
//! Everything here is a pure function over fetched data so it can be
//! tested without a DOM or a network:
//!
//! - [`modules`] - Module list assembly, status derivation and sorting
//! - [`countdown`] - Timelock countdown rendering
//! - [`protocol`] - Protocol and pool stat derivation from raw reads
//! - [`markets`] - TermMax market joins and maturity math

pub mod countdown;
pub mod markets;
pub mod modules;
pub mod protocol;

pub use countdown::*;
pub use markets::*;
pub use modules::*;
pub use protocol::*;
