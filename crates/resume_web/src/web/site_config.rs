//! Optional config override embedded in the host page.

use resume_page::SiteConfig;

/// `<script id="site-config" type="application/json">` in `index.html`.
pub(super) const CONFIG_ELEMENT_ID: &str = "site-config";

fn embedded_config_text() -> Option<String> {
    web_sys::window()?
        .document()?
        .get_element_by_id(CONFIG_ELEMENT_ID)?
        .text_content()
        .filter(|raw| !raw.trim().is_empty())
}

pub(super) fn load() -> SiteConfig {
    let Some(raw) = embedded_config_text() else {
        return SiteConfig::default();
    };

    match SiteConfig::from_json_str(&raw) {
        Ok(cfg) => {
            tracing::debug!(sections = cfg.sections.len(), "loaded embedded site config");
            cfg
        }
        Err(e) => {
            tracing::warn!(error = %e, "ignoring embedded site config");
            SiteConfig::default()
        }
    }
}
