use crate::layout::global_context::StorefrontContext;
use crate::routes::routes::AppRoutes;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the StorefrontContext store to the whole app via context.
    provide_context(StorefrontContext::new());

    view! {
        <AppRoutes />
    }
}
