use leptos::prelude::*;
use resume_page::page::{ActionButton, BackToTop, FooterModel, NavLink};
use resume_page::{dispatch, style, PageAction, Style};

use super::host::BrowserHost;
use super::primitives::Button;

/// Hands an action to the browser. Failures are logged, never retried.
pub(super) fn run_action(action: &PageAction) {
    if let Err(e) = dispatch(&mut BrowserHost, action) {
        tracing::warn!(error = %e, ?action, "page action failed");
    }
}

#[component]
pub(super) fn TopNav(links: Vec<NavLink>) -> impl IntoView {
    view! {
        <header style=style::sticky_header().to_css()>
            <nav style=style::nav_inner().to_css()>
                <div style=style::nav_links().to_css()>
                    {links
                        .into_iter()
                        .map(|link| {
                            view! {
                                <a href=link.href style=style::chip().to_css()>
                                    {link.label}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </nav>
        </header>
    }
}

#[component]
pub(super) fn ActionButtons(actions: Vec<ActionButton>) -> impl IntoView {
    view! {
        <div style=style::action_row().to_css()>
            {actions
                .into_iter()
                .map(|b| {
                    let ActionButton { label, aria_label, action } = b;
                    let on_press = Callback::new(move |_: ()| run_action(&action));
                    view! {
                        <Button on_press=on_press aria_label=aria_label>
                            {label}
                        </Button>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub(super) fn BackToTopButton(model: BackToTop) -> impl IntoView {
    let BackToTop {
        label,
        aria_label,
        action,
    } = model;
    let on_press = Callback::new(move |_: ()| run_action(&action));

    view! {
        <div style=style::back_to_top_row().to_css()>
            <Button on_press=on_press aria_label=aria_label>
                <ArrowUpIcon />
                <span>{label}</span>
            </Button>
        </div>
    }
}

#[component]
fn ArrowUpIcon() -> impl IntoView {
    let css = Style::new().set("margin-right", "6px").to_css();
    view! {
        <svg
            width="16"
            height="16"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            style=css
            aria-hidden="true"
        >
            <path d="m5 12 7-7 7 7"></path>
            <path d="M12 19V5"></path>
        </svg>
    }
}

#[component]
pub(super) fn PageFooter(model: FooterModel) -> impl IntoView {
    let FooterModel {
        name,
        lines,
        actions,
    } = model;

    view! {
        <footer style=style::footer().to_css()>
            <p style=style::footer_name().to_css()>{name}</p>
            <ul style=style::footer_lines().to_css()>
                {lines.into_iter().map(|line| view! { <li>{line}</li> }).collect_view()}
            </ul>
            <ActionButtons actions=actions />
        </footer>
    }
}
