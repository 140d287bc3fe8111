//! Stateless wrappers every card is built from.
//!
//! Each renders one element whose inline style is the primitive's base style
//! merged with the caller's `style` (caller wins). Ids and aria attributes
//! belong on the enclosing `<section>`, not on the primitives.

use leptos::prelude::*;
use resume_page::{Primitive, Style};

fn css(p: Primitive, style: Option<Style>) -> String {
    p.style_with(style.as_ref()).to_css()
}

#[component]
pub(super) fn Card(#[prop(optional)] style: Option<Style>, children: Children) -> impl IntoView {
    view! { <div style=css(Primitive::Card, style)>{children()}</div> }
}

#[component]
pub(super) fn CardHeader(
    #[prop(optional)] style: Option<Style>,
    children: Children,
) -> impl IntoView {
    view! { <div style=css(Primitive::CardHeader, style)>{children()}</div> }
}

#[component]
pub(super) fn CardTitle(
    #[prop(optional)] style: Option<Style>,
    children: Children,
) -> impl IntoView {
    view! { <h3 style=css(Primitive::CardTitle, style)>{children()}</h3> }
}

#[component]
pub(super) fn CardContent(
    #[prop(optional)] style: Option<Style>,
    children: Children,
) -> impl IntoView {
    view! { <div style=css(Primitive::CardContent, style)>{children()}</div> }
}

#[component]
pub(super) fn Button(
    on_press: Callback<()>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] style: Option<Style>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            aria-label=aria_label
            style=css(Primitive::Button, style)
            on:click=move |_| on_press.run(())
        >
            {children()}
        </button>
    }
}
