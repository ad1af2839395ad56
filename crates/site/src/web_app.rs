use grid_core::AssetCatalog;
use grid_runtime::{load_widget_config, GridProvider, GridShell};
use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use platform_host_web::{build_host_services, host_strategy_name};
use widget_app_music_player::MusicPlayerApp;

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Icon Grid" />
        <Meta name="description" content="Drag icons onto a configurable grid, with a small playlist player." />

        <Router>
            <main class="site-root">
                <Routes>
                    <Route path="" view=WidgetEntry />
                </Routes>
            </main>
        </Router>
    }
}

/// Grid widget and music player, with `?rows=R&cols=C` overriding the configured grid shape.
#[component]
pub fn WidgetEntry() -> impl IntoView {
    let config = load_widget_config();
    let query = use_query_map();
    let initial_dimensions = query.with_untracked(|params| {
        config.resolve_dimensions(
            params.get("rows").map(String::as_str),
            params.get("cols").map(String::as_str),
        )
    });
    let catalog = AssetCatalog::from_config(&config.catalog);
    let services = build_host_services();
    logging::log!(
        "widget boot: {}x{} grid, {} icons, host strategy {}",
        initial_dimensions.rows(),
        initial_dimensions.cols(),
        catalog.len(),
        host_strategy_name()
    );

    view! {
        <GridProvider catalog initial_dimensions>
            <GridShell />
        </GridProvider>
        <MusicPlayerApp config=config.playlist services />
    }
}
