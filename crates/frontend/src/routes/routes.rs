use crate::domain::a001_catalog::ui::browser::CatalogBrowser;
use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;
use web_sys::window;

/// `/` -> `/products`, keeping the query string (address_id, branch_id, order_type)
#[component]
fn RootRedirect() -> impl IntoView {
    let search = window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();

    view! { <Redirect path=format!("/products{}", search) /> }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <p class="storefront__empty">"404"</p> }>
                <Route path=path!("/") view=RootRedirect />
                // One route for both forms so picking a category keeps the screen mounted
                <Route path=path!("/products/:id?") view=CatalogBrowser />
            </Routes>
        </Router>
    }
}
