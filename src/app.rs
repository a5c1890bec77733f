use leptos::prelude::*;

use crate::config::StarfieldConfig;
use crate::galaxy::Galaxy;

/// Reads an optional `?seed=` from the page URL for reproducible fields.
fn seed_from_url() -> Option<u64> {
    let search = web_sys::window()?.location().search().ok()?;
    let params = web_sys::UrlSearchParams::new_with_str(&search).ok()?;
    params.get("seed")?.parse().ok()
}

#[component]
pub fn App() -> impl IntoView {
    let config = StarfieldConfig {
        seed: seed_from_url(),
        ..Default::default()
    };

    view! { <Galaxy config=config /> }
}
