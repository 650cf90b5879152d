//! Dashboard pages rendered inside the sidebar layout.

mod analytics;
mod maturity;
mod overview;
mod vaults;

pub use analytics::*;
pub use maturity::*;
pub use overview::*;
pub use vaults::*;
