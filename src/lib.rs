//! USDU Finance - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for the USDU stablecoin protocol: a public
//! marketing site plus a read-only dashboard over on-chain and indexed
//! protocol data.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App (Router)                          │
//! ├──────────────────────────────┬──────────────────────────────┤
//! │  HomeLayout                  │  DashboardLayout             │
//! │  ├── HomePage                │  ├── OverviewPage            │
//! │  ├── MaturitiesPage          │  ├── VaultsPage              │
//! │  ├── TransparencyPage        │  ├── AnalyticsPage           │
//! │  └── ModulesPage             │  └── MaturityPage            │
//! ├──────────────────────────────┴──────────────────────────────┤
//! │  Footer (home shell)         │  Sidebar (dashboard shell)   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`] - Contract addresses and service endpoints
//! - [`types`] - Indexer records and shared error types
//! - [`utils`] - Address, value and time formatting
//! - [`services`] - JSON-RPC, indexer and market API clients
//! - [`state`] - Pure derivation of view models from raw reads
//! - [`hooks`] - Polling data hooks over the services
//! - [`components`] - UI components (layouts, sections, primitives)
//! - [`pages`] - Routed pages

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod components;
pub mod config;
pub mod hooks;
pub mod pages;
pub mod services;
pub mod state;
pub mod types;
pub mod utils;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Modules
    StablecoinModule, ModuleKind, ModuleHistoryItem, ModuleStatus,
    // Errors
    AppError, AppResult,
};

// Components
pub use components::*;

// Hooks
pub use hooks::*;

use pages::dashboard::{AnalyticsPage, MaturityPage, OverviewPage, VaultsPage};
use pages::{HomePage, MaturitiesPage, ModulesPage, TransparencyPage};

// =============================================================================
// Application Root
// =============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Router>
            <Routes>
                <Route path="/" view=HomeLayout>
                    <Route path="" view=HomePage/>
                    <Route path="maturities" view=MaturitiesPage/>
                    <Route path="transparency" view=TransparencyPage/>
                    <Route path="modules" view=ModulesPage/>
                </Route>
                <Route path="/dashboard" view=DashboardLayout>
                    <Route path="" view=OverviewPage/>
                    <Route path="vaults" view=VaultsPage/>
                    <Route path="analytics" view=AnalyticsPage/>
                    <Route path="maturity" view=MaturityPage/>
                </Route>
            </Routes>
        </Router>
    }
}
