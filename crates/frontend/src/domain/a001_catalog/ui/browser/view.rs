use contracts::domain::a001_catalog::{
    CategoriesResponse, Category, CategoryId, Product, ProductsResponse,
};
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map, use_query_map};
use leptos_router::NavigateOptions;
use thaw::*;

use super::panel::{product_panel_state, ProductPanel};
use super::view_model::CatalogBrowserViewModel;
use crate::domain::a001_catalog::api;
use crate::domain::a001_catalog::context_resolver::{
    parse_optional_id, resolve_context, OrderContext,
};
use crate::domain::a001_catalog::filter::filter_products;
use crate::domain::a001_catalog::selection::{
    category_path, history_sync, initial_selection, InitialSelection,
};
use crate::domain::a001_catalog::ui::product_card::ProductCard;
use crate::layout::global_context::{use_storefront_context, StorefrontContext};
use crate::shared::api_utils::{api_base, FILTER_DEBOUNCE_MS};
use crate::shared::debounce::use_debounced;
use crate::shared::fetch::{use_fetch, FetchHandle};
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;
use crate::shared::storage;

fn scroll_to_top() {
    if let Some(w) = web_sys::window() {
        w.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

#[component]
fn BrowserHeader() -> impl IntoView {
    let ctx = use_storefront_context();

    view! {
        <header class="storefront__header">
            <h1 class="storefront__title">
                {icon("products")}
                <span>{move || ctx.tr("storefront.title")}</span>
            </h1>
            <Button
                appearance=ButtonAppearance::Secondary
                on_click=move |_| ctx.language.update(|lang| *lang = lang.next())
            >
                {icon("globe")}
                {move || format!(" {}", ctx.language.get().next().display_name())}
            </Button>
        </header>
    }
}

#[component]
fn LocationBanner() -> impl IntoView {
    let ctx = use_storefront_context();

    view! {
        <div class="storefront__banner" role="alert">
            {icon("map-pin")}
            <span>{move || ctx.tr("location.warning")}</span>
        </div>
    }
}

#[component]
fn CategoriesLoading(categories: FetchHandle<CategoriesResponse>) -> impl IntoView {
    let ctx = use_storefront_context();

    view! {
        <div class="storefront__loading">
            {move || match categories.error.get() {
                Some(e) if e.is_retryable() => view! {
                    <span>{ctx.tr("categories.failed")}</span>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| categories.refetch()
                    >
                        {icon("refresh")}
                        {format!(" {}", ctx.tr("categories.retry"))}
                    </Button>
                }.into_any(),
                // Same request would fail the same way
                Some(_) => view! {
                    <span>{ctx.tr("categories.failed")}</span>
                }.into_any(),
                None => view! {
                    <Spinner />
                    <span>{ctx.tr("categories.loading")}</span>
                }.into_any(),
            }}
        </div>
    }
}

fn chip_class(active: bool) -> &'static str {
    if active {
        "storefront__chip storefront__chip--active"
    } else {
        "storefront__chip"
    }
}

#[component]
fn CategoryBar(
    #[prop(into)] categories: Signal<Vec<Category>>,
    #[prop(into)] selected: Signal<Option<CategoryId>>,
    on_select: Callback<CategoryId>,
) -> impl IntoView {
    view! {
        <nav class="storefront__categories">
            <For
                each=move || categories.get()
                key=|category| category.id
                children=move |category: Category| {
                    let id = category.id;
                    view! {
                        <button
                            class=move || chip_class(selected.get() == Some(id))
                            on:click=move |_| on_select.run(id)
                        >
                            {category.name}
                        </button>
                    }
                }
            />
        </nav>
    }
}

#[component]
fn SubCategoryBar(
    #[prop(into)] sub_categories: Signal<Vec<Category>>,
    selected: RwSignal<Option<CategoryId>>,
    on_select: Callback<Option<CategoryId>>,
) -> impl IntoView {
    let ctx = use_storefront_context();

    view! {
        <Show when=move || sub_categories.with(|subs| !subs.is_empty())>
            <div class="storefront__subcategories">
                <button
                    class=move || chip_class(selected.get().is_none())
                    on:click=move |_| on_select.run(None)
                >
                    {move || ctx.tr("subcategories.all")}
                </button>
                <For
                    each=move || sub_categories.get()
                    key=|sub| sub.id
                    children=move |sub: Category| {
                        let id = sub.id;
                        view! {
                            <button
                                class=move || chip_class(selected.get() == Some(id))
                                on:click=move |_| on_select.run(Some(id))
                            >
                                {sub.name}
                            </button>
                        }
                    }
                />
            </div>
        </Show>
    }
}

#[component]
fn ProductGrid(
    vm: CatalogBrowserViewModel,
    products: FetchHandle<ProductsResponse>,
) -> impl IntoView {
    let ctx = use_storefront_context();

    move || {
        let state = product_panel_state(
            products.loading.get(),
            vm.selected_category.get(),
            &vm.search.get(),
            vm.filtered.with(Vec::len),
        );
        match state {
            ProductPanel::Loading => view! {
                <div class="storefront__loading">
                    <Spinner />
                </div>
            }
            .into_any(),
            ProductPanel::Empty(reason) => view! {
                <div class="storefront__empty">
                    {icon("search")}
                    <span>{ctx.tr(reason.message_key())}</span>
                </div>
            }
            .into_any(),
            ProductPanel::Shown => view! {
                <div class="storefront__grid">
                    <For
                        each=move || vm.filtered.get()
                        key=|product| product.id
                        children=|product: Product| view! { <ProductCard product=product /> }
                    />
                </div>
            }
            .into_any(),
        }
    }
}

/// Push the resolved order context into the global store and localStorage
fn reconcile_order_context(ctx: StorefrontContext, url_context: Memo<OrderContext>) -> Memo<OrderContext> {
    let resolution = Memo::new(move |_| {
        let url = url_context.get();
        let global = ctx.order_context();
        resolve_context(&url, &storage::load_order_context(), &global)
    });

    Effect::new(move |_| {
        let resolution = resolution.get();
        storage::save_order_context(&resolution.effective);
        if !resolution.updates.is_empty() {
            ctx.apply_updates(&resolution.updates);
        }
    });

    Memo::new(move |_| resolution.get().effective)
}

/// Category/subcategory browser with client-side search over the catalog API.
///
/// Route: `/products/:id?address_id=..&branch_id=..&order_type=..`
#[component]
pub fn CatalogBrowser() -> impl IntoView {
    let ctx = use_storefront_context();
    let vm = CatalogBrowserViewModel::new();
    let params = use_params_map();
    let query = use_query_map();
    let navigate = StoredValue::new_local(use_navigate());

    let route_category_id =
        Memo::new(move |_| params.with(|p| parse_optional_id(p.get("id").as_deref())));
    let url_context = Memo::new(move |_| {
        query.with(|q| {
            OrderContext::parse(
                q.get("address_id").as_deref(),
                q.get("branch_id").as_deref(),
                q.get("order_type").as_deref(),
            )
        })
    });

    let effective = reconcile_order_context(ctx, url_context);

    // Categories: keyed by language and the effective context
    let categories_url = Memo::new(move |_| {
        Some(api::categories_url(
            &api_base(),
            ctx.language.get().code(),
            &effective.get(),
        ))
    });
    let categories = use_fetch::<CategoriesResponse>(Signal::derive(move || categories_url.get()));

    // Products: keyed by the selected category only
    let products_url = Memo::new(move |_| {
        let category_id = vm.selected_category.get();
        api::products_url(
            &api_base(),
            category_id,
            ctx.language.get_untracked().code(),
            ctx.user_id_untracked(),
            &effective.get_untracked(),
        )
    });
    let products = use_fetch::<ProductsResponse>(Signal::derive(move || products_url.get()));

    Effect::new(move |_| {
        let Some(resp) = categories.data.get() else {
            return;
        };
        log::debug!("categories loaded: {}", resp.categories.len());
        vm.categories.set(resp.categories);

        let decision = vm.categories.with_untracked(|list| {
            initial_selection(
                route_category_id.get_untracked(),
                vm.selected_category.get_untracked(),
                list,
            )
        });
        match decision {
            InitialSelection::Keep => {}
            InitialSelection::AdoptRoute(id) => {
                log::debug!("adopting route category {}", id);
                vm.selected_category.set(Some(id));
            }
            InitialSelection::AutoSelect(id) => {
                let path = category_path(id, &api::navigation_query(&effective.get_untracked()));
                log::debug!("auto-selecting category {}, replacing url with {}", id, path);
                vm.selected_category.set(Some(id));
                navigate.with_value(|nav| {
                    nav(
                        &path,
                        NavigateOptions {
                            replace: true,
                            ..Default::default()
                        },
                    )
                });
            }
        }
    });

    Effect::new(move |_| {
        let route_id = route_category_id.get();
        if let Some(id) = history_sync(route_id, vm.selected_category.get_untracked()) {
            log::debug!("route changed to category {}", id);
            vm.select_category(id);
        }
    });

    // Stale results never render while a products request is in flight
    Effect::new(move |_| {
        if products.loading.get() {
            vm.clear_products();
            return;
        }
        if let Some(resp) = products.data.get() {
            vm.replace_products(resp.products);
            ctx.tax_type.set(resp.tax);
        }
    });

    let debounced_filter = use_debounced(
        FILTER_DEBOUNCE_MS,
        move |(products, sub_category_id, query): (Vec<Product>, Option<CategoryId>, String)| {
            vm.filtered.set(filter_products(&products, sub_category_id, &query));
        },
    );
    Effect::new(move |_| {
        let products = vm.products.get();
        let sub_category_id = vm.selected_sub_category.get();
        let query = vm.search.get();
        debounced_filter.call((products, sub_category_id, query));
    });

    let on_category_click = Callback::new(move |id: CategoryId| {
        vm.select_category(id);
        let path = category_path(id, &api::navigation_query(&effective.get_untracked()));
        navigate.with_value(|nav| nav(&path, NavigateOptions::default()));
        scroll_to_top();
    });
    let on_sub_category_click = Callback::new(move |id: Option<CategoryId>| vm.select_sub_category(id));

    view! {
        <div class="storefront" dir=move || ctx.language.get().dir()>
            <BrowserHeader />
            <Show when=move || !effective.get().has_location()>
                <LocationBanner />
            </Show>
            <Show
                when=move || vm.categories.with(|list| !list.is_empty())
                fallback=move || view! { <CategoriesLoading categories=categories /> }
            >
                <CategoryBar
                    categories=vm.categories
                    selected=vm.selected_category
                    on_select=on_category_click
                />
                <SubCategoryBar
                    sub_categories=Signal::derive(move || vm.sub_categories())
                    selected=vm.selected_sub_category
                    on_select=on_sub_category_click
                />
                <SearchInput
                    value=vm.search
                    placeholder=Signal::derive(move || ctx.tr("search.placeholder").to_string())
                    clear_title=Signal::derive(move || ctx.tr("search.clear").to_string())
                />
                <ProductGrid vm=vm products=products />
            </Show>
        </div>
    }
}
