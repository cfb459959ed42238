use dioxus::prelude::*;
use shared_types::FeatureFlags;

mod components;
mod routes;
mod session;
use routes::Route;
use session::SessionContext;

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Request bodies above this size are rejected before reaching a handler.
#[cfg(feature = "server")]
const MAX_BODY_BYTES: usize = 64 * 1024;

fn main() {
    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        server::config::load_feature_flags();
        let flags = server::config::feature_flags();

        if flags.telemetry {
            server::telemetry::init_telemetry();
        }
        server::health::record_start_time();

        let mut router =
            dioxus::server::router(App).merge(server::rest::api_router(flags.clone()));

        if flags.telemetry {
            router = router.layer(server::telemetry::OtelTraceLayer);
        }

        let router = router
            .layer(axum::extract::DefaultBodyLimit::max(MAX_BODY_BYTES))
            .layer(tower_http::request_id::PropagateRequestIdLayer::x_request_id())
            .layer(tower_http::request_id::SetRequestIdLayer::x_request_id(
                tower_http::request_id::MakeRequestUuid,
            ));
        Ok(router)
    });

    #[cfg(not(feature = "server"))]
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Fetch feature flags once and provide via context (defaults all-off on error)
    let flags_resource =
        use_server_future(move || async move { server::api::get_feature_flags().await })?;

    let flags = flags_resource
        .read()
        .as_ref()
        .cloned()
        .unwrap_or(Ok(FeatureFlags::default()))
        .unwrap_or_default();

    use_context_provider(|| flags);

    let session = use_context_provider(SessionContext::new);

    // Local storage only exists in the browser, so restore after mount.
    use_effect(move || {
        spawn(async move {
            session.restore().await;
        });
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        shared_ui::ToastProvider {
            SuspenseBoundary {
                fallback: |_| rsx! {
                    div { class: "page-loading",
                        p { "Loading..." }
                    }
                },
                Router::<Route> {}
            }
        }
    }
}
