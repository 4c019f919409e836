//! Consent-gated Google Analytics and LeadInfo loader.
//!
//! DESIGN
//! ======
//! Tracking ids are baked in at build time (`RITTER_GA_ID`,
//! `RITTER_LEADINFO_ID`); without a GA id every call here is a no-op.
//! Scripts are injected at most once per page load, and only after the
//! visitor allowed analytics cookies. Page views and events additionally
//! require the stored consent level to be `all`.
//!
//! The gtag stub is installed through an inline script so `dataLayer`
//! exists before the remote loader arrives.

#[cfg(test)]
#[path = "analytics_test.rs"]
mod analytics_test;

use site::consent::{AnalyticsEvent, ConsentLevel, ConsentSettings, analytics_allowed, beacons_allowed};

pub const GA_MEASUREMENT_ID: Option<&str> = option_env!("RITTER_GA_ID");
pub const LEADINFO_ID: Option<&str> = option_env!("RITTER_LEADINFO_ID");

const GTAG_LOADER: &str = "https://www.googletagmanager.com/gtag/js?id=";
const LEADINFO_LOADER: &str = "https://cdn.leadinfo.net/ping.js";

/// Inline script that defines `dataLayer`/`gtag` and configures `id`.
/// Automatic page views are off; the router reports them.
#[must_use]
pub fn gtag_bootstrap_script(id: &str) -> String {
    let id = js_string(id);
    format!(
        "window.dataLayer=window.dataLayer||[];\
         function gtag(){{dataLayer.push(arguments);}}\
         window.gtag=gtag;\
         gtag('js',new Date());\
         gtag('config',{id},{{anonymize_ip:true,cookie_flags:'SameSite=None;Secure',send_page_view:false}});"
    )
}

/// `Leadinfo.trackPage(id)` once the ping script has loaded.
#[must_use]
pub fn leadinfo_track_script(id: &str) -> String {
    format!("window.Leadinfo&&window.Leadinfo.trackPage({});", js_string(id))
}

/// `src` of the remote gtag loader.
#[must_use]
pub fn gtag_loader_url(id: &str) -> String {
    format!("{GTAG_LOADER}{}", crate::net::url::encode_component(id))
}

/// JSON string literal, which is also a valid JS string literal.
fn js_string(raw: &str) -> String {
    serde_json::Value::from(raw).to_string()
}

/// Whether the scripts should be injected for `settings`.
#[must_use]
pub fn should_load(settings: &ConsentSettings, ga_id: Option<&str>) -> bool {
    ga_id.is_some_and(|id| !id.is_empty()) && analytics_allowed(settings)
}

// =============================================================================
// BROWSER SIDE
// =============================================================================

/// Inject the tracking scripts if consent allows and they are not loaded
/// yet.
pub fn load(settings: &ConsentSettings) {
    if !should_load(settings, GA_MEASUREMENT_ID) {
        return;
    }
    #[cfg(feature = "hydrate")]
    {
        if let Some(id) = GA_MEASUREMENT_ID {
            browser::load(id, LEADINFO_ID);
        }
    }
}

/// Report a page view for `path`.
pub fn pageview(level: Option<ConsentLevel>, path: &str) {
    if !beacons_allowed(level) {
        return;
    }
    #[cfg(feature = "hydrate")]
    {
        if let Some(id) = GA_MEASUREMENT_ID {
            browser::gtag("config", id, &serde_json::json!({ "page_path": path }));
        }
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = path;
}

/// Report an interaction event.
pub fn event(level: Option<ConsentLevel>, event: &AnalyticsEvent) {
    if !beacons_allowed(level) {
        return;
    }
    #[cfg(feature = "hydrate")]
    {
        if GA_MEASUREMENT_ID.is_some() {
            browser::gtag("event", event.action, &event.gtag_params());
        }
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = event;
}

#[cfg(feature = "hydrate")]
mod browser {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::JsValue;
    use wasm_bindgen::closure::Closure;
    use web_sys::HtmlScriptElement;

    const GTAG_SCRIPT_ID: &str = "ritter-gtag";

    fn script(document: &web_sys::Document) -> Option<HtmlScriptElement> {
        document.create_element("script").ok()?.dyn_into::<HtmlScriptElement>().ok()
    }

    fn append(document: &web_sys::Document, el: &HtmlScriptElement) {
        if let Some(head) = document.head() {
            if head.append_child(el).is_err() {
                log::warn!("could not append analytics script");
            }
        }
    }

    pub(super) fn load(ga_id: &str, leadinfo_id: Option<&str>) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        if document.get_element_by_id(GTAG_SCRIPT_ID).is_some() {
            return;
        }

        let Some(loader) = script(&document) else { return };
        loader.set_id(GTAG_SCRIPT_ID);
        loader.set_async(true);
        loader.set_src(&super::gtag_loader_url(ga_id));
        append(&document, &loader);

        let Some(bootstrap) = script(&document) else { return };
        bootstrap.set_text(&super::gtag_bootstrap_script(ga_id)).ok();
        append(&document, &bootstrap);

        if let Some(leadinfo_id) = leadinfo_id.filter(|id| !id.is_empty()) {
            let Some(ping) = script(&document) else { return };
            ping.set_async(true);
            ping.set_src(super::LEADINFO_LOADER);
            let track = super::leadinfo_track_script(leadinfo_id);
            let onload = Closure::once_into_js(move || {
                if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
                    if let Some(inline) = script(&doc) {
                        inline.set_text(&track).ok();
                        append(&doc, &inline);
                    }
                }
            });
            ping.set_onload(Some(onload.unchecked_ref()));
            append(&document, &ping);
        }
        log::info!("analytics scripts injected");
    }

    pub(super) fn gtag(command: &str, target: &str, params: &serde_json::Value) {
        let Some(window) = web_sys::window() else { return };
        let Ok(gtag) = js_sys::Reflect::get(&window, &JsValue::from_str("gtag")) else {
            return;
        };
        let Ok(gtag) = gtag.dyn_into::<js_sys::Function>() else {
            return;
        };
        let Ok(params) = js_sys::JSON::parse(&params.to_string()) else {
            return;
        };
        if gtag
            .call3(&JsValue::NULL, &JsValue::from_str(command), &JsValue::from_str(target), &params)
            .is_err()
        {
            log::warn!("gtag {command} call failed");
        }
    }
}
