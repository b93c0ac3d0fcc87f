//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! Chart.js and Leaflet helpers live in `assets/js/*.js` and are loaded at
//! runtime once their library globals (`Chart`, `L`) exist. They are
//! evaluated as globals (no ES modules) and exposed via `window.*`.
//! This module provides safe Rust wrappers that serialize data and call those globals.

use anyhow::{anyhow, bail};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

// Embed the chart and map JS files at compile time
static HEALTH_CHART_JS: &str = include_str!("../assets/js/health-chart.js");
static LEAFLET_MAP_JS: &str = include_str!("../assets/js/leaflet-map.js");

/// Window property holding `containerId -> pin click callback`.
const SELECT_REGISTRY: &str = "__hcSelect";

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('HC JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Install the map call queue and start waiting for Chart.js and Leaflet.
///
/// Map calls issued before Leaflet is ready are queued and replayed in
/// order once `leaflet-map.js` has been evaluated. Safe to call more than once.
pub fn init_scripts() {
    let store_js = format!(
        "window.__hcChartScript = {}; window.__hcMapScript = {};",
        serde_json::to_string(HEALTH_CHART_JS).unwrap_or_default(),
        serde_json::to_string(LEAFLET_MAP_JS).unwrap_or_default(),
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            if (window.__hcScriptsInit) { return; }
            window.__hcScriptsInit = true;

            window.__hcMapQueue = window.__hcMapQueue || [];
            window.hcMapCall = function(op, args) {
                if (window.__hcLeafletReady) {
                    try {
                        window.hcLeaflet[op].apply(null, args);
                    } catch(e) { console.warn('[HC] map ' + op + ' failed:', e); }
                } else {
                    window.__hcMapQueue.push([op, args]);
                }
            };

            var waitForChart = setInterval(function() {
                if (typeof Chart !== 'undefined') {
                    clearInterval(waitForChart);
                    // Eval at global scope via indirect eval
                    (0, eval)(window.__hcChartScript);
                    delete window.__hcChartScript;
                    if (typeof renderHealthChart !== 'undefined') window.renderHealthChart = renderHealthChart;
                    if (typeof destroyHealthChart !== 'undefined') window.destroyHealthChart = destroyHealthChart;
                    window.__hcChartsReady = true;
                    console.log('HC charts initialized');
                }
            }, 100);

            var waitForLeaflet = setInterval(function() {
                if (typeof L !== 'undefined') {
                    clearInterval(waitForLeaflet);
                    (0, eval)(window.__hcMapScript);
                    delete window.__hcMapScript;
                    if (typeof hcLeaflet !== 'undefined') window.hcLeaflet = hcLeaflet;
                    window.__hcLeafletReady = true;
                    var queued = window.__hcMapQueue;
                    window.__hcMapQueue = [];
                    queued.forEach(function(call) { window.hcMapCall(call[0], call[1]); });
                    console.log('HC map initialized, replayed ' + queued.length + ' calls');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Give up waiting for a chart container after this many 100ms polls.
const CHART_POLL_LIMIT: u32 = 300;

/// Render one chart of the grid from a Chart.js configuration.
///
/// Uses a polling loop to wait for Chart.js, the chart script and the
/// container DOM element before rendering. The poll is registered per
/// container: a newer render or [`destroy_chart`] cancels it, and it stops
/// on its own after `CHART_POLL_LIMIT` tries. Any previous chart in the
/// same container is destroyed first.
pub fn render_chart(container_id: &str, config_json: &str) {
    call_js(&render_chart_js(container_id, config_json));
}

fn render_chart_js(container_id: &str, config_json: &str) -> String {
    let config = config_json.replace('\n', "");
    format!(
        r#"
        (function() {{
            var polls = window.__hcChartPolls = window.__hcChartPolls || {{}};
            if (polls['{container_id}']) clearInterval(polls['{container_id}']);
            var tries = 0;
            var poll = setInterval(function() {{
                tries += 1;
                if (window.__hcChartsReady &&
                    typeof window.renderHealthChart !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    delete polls['{container_id}'];
                    try {{
                        window.renderHealthChart('{container_id}', {config});
                    }} catch(e) {{ console.error('[HC] renderHealthChart error:', e); }}
                }} else if (tries >= {CHART_POLL_LIMIT}) {{
                    clearInterval(poll);
                    delete polls['{container_id}'];
                    console.warn('[HC] gave up waiting for chart container {container_id}');
                }}
            }}, 100);
            polls['{container_id}'] = poll;
        }})();
        "#,
    )
}

/// Cancel any pending render and destroy the chart in the given container.
pub fn destroy_chart(container_id: &str) {
    call_js(&destroy_chart_js(container_id));
}

fn destroy_chart_js(container_id: &str) -> String {
    format!(
        "(function() {{ var polls = window.__hcChartPolls; \
         if (polls && polls['{0}']) {{ clearInterval(polls['{0}']); delete polls['{0}']; }} \
         if (window.destroyHealthChart) {{ window.destroyHealthChart('{0}'); }} \
         else {{ var el = document.getElementById('{0}'); if (el) el.innerHTML = ''; }} }})();",
        container_id
    )
}

/// Queue a call to `hcLeaflet[op](...args)`.
pub fn map_call(op: &str, args: serde_json::Value) {
    call_js(&format!("window.hcMapCall('{}', {});", op, args));
}

/// Expose `callback` to the map script as the pin click handler of `container_id`.
pub fn register_select_callback(container_id: &str, callback: &Closure<dyn Fn(String)>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let registry = match js_sys::Reflect::get(&window, &JsValue::from_str(SELECT_REGISTRY)) {
        Ok(existing) if existing.is_object() => existing,
        _ => {
            let fresh: JsValue = js_sys::Object::new().into();
            let _ = js_sys::Reflect::set(&window, &JsValue::from_str(SELECT_REGISTRY), &fresh);
            fresh
        }
    };
    let _ = js_sys::Reflect::set(&registry, &JsValue::from_str(container_id), callback.as_ref());
}

pub fn unregister_select_callback(container_id: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Ok(registry) = js_sys::Reflect::get(&window, &JsValue::from_str(SELECT_REGISTRY)) {
        if registry.is_object() {
            let _ = js_sys::Reflect::delete_property::<JsValue>(
                registry.unchecked_ref(),
                &JsValue::from_str(container_id),
            );
        }
    }
}

fn js_error(err: JsValue) -> anyhow::Error {
    anyhow!("{}", err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}

/// GET `url` and return the body as text. Non-2xx responses are errors.
pub async fn fetch_text(url: &str) -> anyhow::Result<String> {
    let window = web_sys::window().ok_or_else(|| anyhow!("no window"))?;
    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(js_error)?;
    let response: web_sys::Response = response.dyn_into().map_err(js_error)?;
    if !response.ok() {
        bail!("HTTP {} {}", response.status(), response.status_text());
    }
    let body = JsFuture::from(response.text().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    body.as_string()
        .ok_or_else(|| anyhow!("response body from {} is not text", url))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chart_poll_is_bounded_and_replaces_earlier_polls() {
        let js = render_chart_js("chart2018-3", "{\"type\":\"bar\"}");
        assert!(js.contains("if (polls['chart2018-3']) clearInterval(polls['chart2018-3']);"));
        assert!(js.contains(&format!("tries >= {}", CHART_POLL_LIMIT)));
        assert!(js.contains("window.renderHealthChart('chart2018-3', {\"type\":\"bar\"});"));
        assert_eq!(js.matches("clearInterval(poll);").count(), 2);
    }

    #[test]
    fn destroy_cancels_pending_render() {
        let js = destroy_chart_js("chart2013-0");
        assert!(js.contains("clearInterval(polls['chart2013-0'])"));
        assert!(js.contains("window.destroyHealthChart('chart2013-0')"));
    }
}
