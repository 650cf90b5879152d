//! Page chrome: marketing header, dashboard sidebar, navigation tables

use leptos::*;
use leptos_router::{Outlet, A};

use crate::components::Footer;
use crate::config;

/// One entry of a navigation table.
pub struct NavItem {
    pub name: &'static str,
    pub href: &'static str,
    pub external: bool,
}

const fn internal(name: &'static str, href: &'static str) -> NavItem {
    NavItem {
        name,
        href,
        external: false,
    }
}

/// Links shown in the marketing header.
pub const HOME_NAVIGATION: &[NavItem] = &[
    internal("Maturities", "/maturities"),
    internal("Transparency", "/transparency"),
    internal("Modules", "/modules"),
    NavItem {
        name: "Governance",
        href: config::GOVERNANCE_URL,
        external: true,
    },
];

/// Links shown in the dashboard sidebar.
pub const DASHBOARD_NAVIGATION: &[NavItem] = &[
    internal("Overview", "/dashboard"),
    internal("Vaults", "/dashboard/vaults"),
    internal("Analytics", "/dashboard/analytics"),
    internal("Maturity", "/dashboard/maturity"),
];

fn nav_link(item: &'static NavItem) -> impl IntoView {
    if item.external {
        view! {
            <a
                href=item.href
                target="_blank"
                rel="noopener noreferrer"
                class="nav-link"
            >
                {item.name}
                <span class="external-mark">"↗"</span>
            </a>
        }
        .into_view()
    } else {
        view! {
            <A href=item.href class="nav-link" active_class="active" exact=true>{item.name}</A>
        }
        .into_view()
    }
}

/// Marketing shell: fixed header, routed page content, footer.
#[component]
pub fn HomeLayout() -> impl IntoView {
    let (is_menu_open, set_is_menu_open) = create_signal(false);

    view! {
        <div class="home-shell">
            <header class="home-header">
                <div class="container header-row">
                    <A href="/" class="brand">{config::APP_NAME}</A>

                    <nav class="home-nav">
                        {HOME_NAVIGATION.iter().map(nav_link).collect_view()}
                    </nav>

                    <div class="header-actions">
                        <A href="/dashboard" class="btn btn-primary">"Launch App ↗"</A>
                        <button
                            class="menu-toggle"
                            on:click=move |_| set_is_menu_open.update(|open| *open = !*open)
                        >
                            {move || if is_menu_open.get() { "✕" } else { "☰" }}
                        </button>
                    </div>
                </div>

                <Show
                    when=move || is_menu_open.get()
                    fallback=|| view! { }
                >
                    // Clicks bubble up from the links, so any selection closes the menu.
                    <nav class="mobile-nav" on:click=move |_| set_is_menu_open.set(false)>
                        {HOME_NAVIGATION.iter().map(nav_link).collect_view()}
                        <A href="/dashboard" class="btn btn-primary">"Launch App ↗"</A>
                    </nav>
                </Show>
            </header>

            <main class="home-main">
                <Outlet/>
            </main>

            <Footer/>
        </div>
    }
}

/// Dashboard shell: fixed header, sidebar navigation, routed page content.
#[component]
pub fn DashboardLayout() -> impl IntoView {
    let (is_menu_open, set_is_menu_open) = create_signal(false);

    view! {
        <div class="dashboard-shell">
            <header class="dashboard-header">
                <div class="header-row">
                    <A href="/" class="brand">{config::APP_NAME}</A>

                    <button
                        class="menu-toggle"
                        on:click=move |_| set_is_menu_open.update(|open| *open = !*open)
                    >
                        {move || if is_menu_open.get() { "✕" } else { "☰" }}
                    </button>
                </div>

                <Show
                    when=move || is_menu_open.get()
                    fallback=|| view! { }
                >
                    <nav class="mobile-nav" on:click=move |_| set_is_menu_open.set(false)>
                        {DASHBOARD_NAVIGATION.iter().map(nav_link).collect_view()}
                    </nav>
                </Show>
            </header>

            <div class="dashboard-body">
                <aside class="sidebar">
                    <nav class="sidebar-nav">
                        {DASHBOARD_NAVIGATION.iter().map(nav_link).collect_view()}
                    </nav>
                </aside>

                <main class="dashboard-main">
                    <Outlet/>
                </main>
            </div>
        </div>
    }
}
