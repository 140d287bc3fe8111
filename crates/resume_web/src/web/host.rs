//! `Host` implementation backed by the browser window.

use resume_page::{Host, HostError};
use wasm_bindgen::JsValue;

pub(super) struct BrowserHost;

fn window() -> Result<web_sys::Window, HostError> {
    web_sys::window().ok_or(HostError::NoWindow)
}

fn js_error(v: JsValue) -> HostError {
    HostError::Js {
        message: v.as_string().unwrap_or_else(|| format!("{v:?}")),
    }
}

impl Host for BrowserHost {
    fn navigate(&mut self, href: &str) -> Result<(), HostError> {
        window()?.location().set_href(href).map_err(js_error)
    }

    fn open_window(&mut self, url: &str, target: &str) -> Result<(), HostError> {
        // A blocked popup yields Ok(None); nothing to report.
        window()?
            .open_with_url_and_target(url, target)
            .map(|_| ())
            .map_err(js_error)
    }

    fn scroll_into_view(&mut self, anchor: &str, smooth: bool) -> Result<(), HostError> {
        let document = window()?.document().ok_or(HostError::NoDocument)?;
        let el = document
            .get_element_by_id(anchor)
            .ok_or_else(|| HostError::MissingAnchor {
                id: anchor.to_string(),
            })?;

        let opts = web_sys::ScrollIntoViewOptions::new();
        opts.set_behavior(if smooth {
            web_sys::ScrollBehavior::Smooth
        } else {
            web_sys::ScrollBehavior::Instant
        });
        el.scroll_into_view_with_scroll_into_view_options(&opts);
        Ok(())
    }
}
