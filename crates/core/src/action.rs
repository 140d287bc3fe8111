//! Side effects the page asks its host to perform.
//!
//! Components never touch the browser directly; they hand a [`PageAction`] to
//! [`dispatch`], which drives a [`Host`]. The browser adapter lives in
//! `resume_web`; tests use a recording host.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::error::HostError;

/// RFC 3986 unreserved characters pass through; everything else is encoded.
const MAILTO_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailTo {
    pub to: String,
    pub subject: String,
    pub body: String,
}

impl MailTo {
    pub fn href(&self) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            self.to,
            utf8_percent_encode(&self.subject, MAILTO_COMPONENT),
            utf8_percent_encode(&self.body, MAILTO_COMPONENT),
        )
    }
}

/// Window target for external links; always a new browsing context.
pub const NEW_CONTEXT: &str = "_blank";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollBehavior {
    #[default]
    Smooth,
    Instant,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageAction {
    /// Hand a pre-filled message to the platform mail handler.
    OpenMail(MailTo),
    /// Open a URL in a new browsing context.
    OpenExternal { url: String },
    /// Scroll the element with this id into view.
    ScrollTo {
        anchor: String,
        behavior: ScrollBehavior,
    },
}

/// The platform boundary. Each call is fire-and-forget from the page's
/// point of view; nothing is awaited or retried.
pub trait Host {
    fn navigate(&mut self, href: &str) -> Result<(), HostError>;

    fn open_window(&mut self, url: &str, target: &str) -> Result<(), HostError>;

    fn scroll_into_view(&mut self, anchor: &str, smooth: bool) -> Result<(), HostError>;
}

pub fn dispatch<H: Host + ?Sized>(host: &mut H, action: &PageAction) -> Result<(), HostError> {
    tracing::debug!(?action, "dispatching page action");
    match action {
        PageAction::OpenMail(mail) => host.navigate(&mail.href()),
        PageAction::OpenExternal { url } => host.open_window(url, NEW_CONTEXT),
        PageAction::ScrollTo { anchor, behavior } => {
            host.scroll_into_view(anchor, *behavior == ScrollBehavior::Smooth)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        calls: Vec<String>,
        fail: bool,
    }

    impl Host for Recorder {
        fn navigate(&mut self, href: &str) -> Result<(), HostError> {
            self.calls.push(format!("navigate {href}"));
            if self.fail {
                return Err(HostError::NoWindow);
            }
            Ok(())
        }

        fn open_window(&mut self, url: &str, target: &str) -> Result<(), HostError> {
            self.calls.push(format!("open {url} {target}"));
            Ok(())
        }

        fn scroll_into_view(&mut self, anchor: &str, smooth: bool) -> Result<(), HostError> {
            self.calls.push(format!("scroll {anchor} {smooth}"));
            Ok(())
        }
    }

    fn sample_mail() -> MailTo {
        MailTo {
            to: "someone@example.com".to_string(),
            subject: "Website Connection".to_string(),
            body: "Hi Jonas, I'd love to connect about...".to_string(),
        }
    }

    #[test]
    fn mailto_encodes_subject_and_body() {
        assert_eq!(
            sample_mail().href(),
            "mailto:someone@example.com?subject=Website%20Connection&body=Hi%20Jonas%2C%20I%27d%20love%20to%20connect%20about..."
        );
    }

    #[test]
    fn dispatch_routes_each_action() {
        let mut host = Recorder::default();
        dispatch(&mut host, &PageAction::OpenMail(sample_mail())).unwrap();
        dispatch(
            &mut host,
            &PageAction::OpenExternal {
                url: "https://example.com/in/someone".to_string(),
            },
        )
        .unwrap();
        dispatch(
            &mut host,
            &PageAction::ScrollTo {
                anchor: "header".to_string(),
                behavior: ScrollBehavior::Smooth,
            },
        )
        .unwrap();

        assert_eq!(host.calls.len(), 3);
        assert!(host.calls[0].starts_with("navigate mailto:someone@example.com?"));
        assert_eq!(host.calls[1], "open https://example.com/in/someone _blank");
        assert_eq!(host.calls[2], "scroll header true");
    }

    #[test]
    fn host_failures_are_returned_once() {
        let mut host = Recorder {
            fail: true,
            ..Default::default()
        };
        let err = dispatch(&mut host, &PageAction::OpenMail(sample_mail())).unwrap_err();
        assert_eq!(err, HostError::NoWindow);
        assert_eq!(host.calls.len(), 1);
    }
}
