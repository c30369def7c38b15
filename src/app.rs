use dioxus::prelude::*;

use crate::context::{build_driver, SharedDriver};
use crate::pages::{Home, Settings};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Access gate, or the dashboard in the configured layout
/// - `/settings` - Gate switch and stored key
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/settings")]
    Settings {},
}

/// Root application component.
///
/// Provides global styles, the dashboard driver and routing.
#[component]
pub fn App() -> Element {
    let startup = use_hook(|| build_driver().map_err(|e| e.to_string()));

    match startup {
        Ok(driver) => rsx! {
            style { {GLOBAL_STYLES} }
            DashboardRoot { driver }
        },
        Err(message) => {
            tracing::error!("Failed to start dashboard: {}", message);
            rsx! {
                style { {GLOBAL_STYLES} }
                main { class: "startup-error",
                    h1 { class: "brand-title", "ChainKnight" }
                    p { "The dashboard could not start." }
                    pre { "{message}" }
                }
            }
        }
    }
}

/// Shares the driver, mirrors its snapshots into a signal and mounts the router.
#[component]
fn DashboardRoot(driver: SharedDriver) -> Element {
    let mut snapshot = use_signal(|| driver.snapshot());

    use_context_provider(|| driver.clone());
    use_context_provider(|| snapshot);

    // Follow the driver for the lifetime of the window
    use_effect(move || {
        let driver = driver.clone();
        spawn(async move {
            let mut updates = driver.subscribe();
            driver.start();
            loop {
                let latest = updates.borrow_and_update().clone();
                snapshot.set(latest);
                if updates.changed().await.is_err() {
                    break;
                }
            }
        });
    });

    rsx! {
        Router::<Route> {}
    }
}
