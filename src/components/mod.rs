//! UI Components for the USDU Finance application.
//!
//! This module contains all Leptos components organized by function:
//!
//! # Layout Components
//! - [`HomeLayout`] - Marketing site shell with header navigation
//! - [`DashboardLayout`] - Dashboard shell with sidebar navigation
//! - [`Footer`] - Site footer with protocol and community links
//!
//! # Section Components
//! - [`Hero`] - Landing page title and call to action
//! - [`ProtocolOverview`] - Feature grid with a live key-stats strip
//! - [`About`] - Platform feature cards
//! - [`Contact`] - Community links
//! - [`ModulesSection`] - Module governance list with history and countdowns
//!
//! # UI Primitives
//! - [`Accordion`] - Collapsible section
//! - [`StatsCard`] - Grid of labeled stat values
//! - [`Tabs`] - Scrollable tab strip

mod about;
mod accordion;
mod contact;
mod footer;
mod hero;
mod layout;
mod modules;
mod protocol_overview;
mod stats_card;
mod tabs;

pub use about::*;
pub use accordion::*;
pub use contact::*;
pub use footer::*;
pub use hero::*;
pub use layout::*;
pub use modules::*;
pub use protocol_overview::*;
pub use stats_card::*;
pub use tabs::*;
