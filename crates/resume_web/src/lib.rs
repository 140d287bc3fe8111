//! Browser-hosted resume page.
//!
//! This crate is a stub by default so the workspace builds on native targets
//! without requiring wasm toolchains. Only [`build_page`] is available there.
//!
//! Enable the real app with: `--features web` (and a wasm32 target).

use resume_page::{PageModel, Registry, SiteConfig};

/// Builds the page for `config`, falling back to the default site when the
/// config does not describe a valid registry. The page always renders.
pub fn build_page(config: &SiteConfig) -> PageModel {
    match PageModel::build(config) {
        Ok(page) => page,
        Err(e) => {
            tracing::warn!(error = %e, "invalid site config; rendering defaults");
            PageModel::from_registry(&Registry::default(), &SiteConfig::default())
        }
    }
}

#[cfg(all(feature = "web", target_arch = "wasm32"))]
mod web;

#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub use web::start;

#[cfg(test)]
mod tests {
    use super::*;
    use resume_page::SectionDescriptor;
    use std::sync::{Mutex, Once};

    /// Collects `log` records the way the console logger receives them.
    struct Capture;

    static RECORDS: Mutex<Vec<(log::Level, String, String)>> = Mutex::new(Vec::new());
    static INSTALL: Once = Once::new();

    impl log::Log for Capture {
        fn enabled(&self, _: &log::Metadata<'_>) -> bool {
            true
        }

        fn log(&self, record: &log::Record<'_>) {
            RECORDS.lock().unwrap().push((
                record.level(),
                record.target().to_string(),
                record.args().to_string(),
            ));
        }

        fn flush(&self) {}
    }

    fn capture_logs() {
        INSTALL.call_once(|| {
            log::set_logger(&Capture).unwrap();
            log::set_max_level(log::LevelFilter::Trace);
        });
    }

    #[test]
    fn invalid_config_falls_back_to_default_page() {
        let cfg = SiteConfig {
            sections: vec![
                SectionDescriptor::new("skills", "Skills"),
                SectionDescriptor::new("skills", "Skills"),
            ],
            ..SiteConfig::default()
        };
        let page = build_page(&cfg);
        assert_eq!(page.cards.len(), Registry::default().len());
        assert_eq!(page.nav[0].href, "#header");
    }

    #[test]
    fn valid_config_is_rendered_as_given() {
        let cfg = SiteConfig {
            sections: vec![SectionDescriptor::new("education", "Schooling")],
            ..SiteConfig::default()
        };
        let page = build_page(&cfg);
        assert_eq!(page.nav.len(), 1);
        assert_eq!(page.nav[0].label, "Schooling");
    }

    #[test]
    fn config_fallback_is_logged_at_warn_level() {
        capture_logs();
        let cfg = SiteConfig {
            sections: vec![SectionDescriptor::new("my projects", "Projects")],
            ..SiteConfig::default()
        };
        build_page(&cfg);

        let records = RECORDS.lock().unwrap();
        let fallback = records
            .iter()
            .find(|(_, target, msg)| {
                target.starts_with("resume_web")
                    && msg.contains("rendering defaults")
                    && msg.contains("whitespace")
            })
            .expect("fallback should be logged with its cause");
        assert_eq!(fallback.0, log::Level::Warn);
    }
}
