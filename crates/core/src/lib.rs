//! # resume_page
//!
//! Framework-free model of a single-page resume: a section registry, the
//! cards and navigation derived from it, and the side effects the page can
//! request from its host.
//!
//! Everything here runs on native targets, so the page can be tested without
//! a browser. The Leptos front-end (`resume_web`) only turns a [`PageModel`]
//! into DOM and interprets [`PageAction`]s through a [`Host`].
//!
//! ## Quick Start
//!
//! ```
//! use resume_page::prelude::*;
//!
//! let config = SiteConfig::default();
//! let page = PageModel::build(&config).unwrap();
//!
//! assert_eq!(page.nav.len(), page.cards.len());
//! assert_eq!(page.nav[0].href, "#header");
//! ```
//!
//! ## Modules
//!
//! - [`section`]: section descriptors, registry and kind dispatch
//! - [`page`]: derived page model (nav, cards, footer)
//! - [`style`]: inline style composition for the primitive wrappers
//! - [`action`]: host side effects as commands
//! - [`photo`]: profile photo fallback state
//! - [`content`]: literal resume content
//! - [`config`]: site configuration

pub mod action;
pub mod config;
pub mod content;
pub mod error;
pub mod page;
pub mod photo;
pub mod section;
pub mod style;

pub use action::{dispatch, Host, MailTo, PageAction, ScrollBehavior};
pub use config::SiteConfig;
pub use error::{HostError, SiteError};
pub use page::{CardBody, CardModel, Entrance, NavLink, PageModel};
pub use photo::{PhotoState, PhotoView, ProfilePhoto};
pub use section::{Registry, SectionDescriptor, SectionKind};
pub use style::{merge, Primitive, Style};

/// Commonly used types.
pub mod prelude {
    pub use crate::action::{dispatch, Host, PageAction};
    pub use crate::config::SiteConfig;
    pub use crate::page::{CardBody, PageModel};
    pub use crate::photo::{PhotoView, ProfilePhoto};
    pub use crate::section::{Registry, SectionDescriptor, SectionKind};
    pub use crate::style::{Primitive, Style};
}
