//! Routed pages.
//!
//! Marketing pages render inside [`crate::components::HomeLayout`], the
//! dashboard pages inside [`crate::components::DashboardLayout`].

pub mod dashboard;
mod home;
mod maturities;
mod modules;
mod transparency;

pub use home::*;
pub use maturities::*;
pub use modules::*;
pub use transparency::*;
