use leptos::prelude::*;
use resume_page::page::CardModel;
use resume_page::{style, PageModel};

mod host;
mod logging;
mod primitives;
mod sections;
mod shell;
mod site_config;

use primitives::{Card, CardContent, CardHeader, CardTitle};
use sections::CardBodyView;
use shell::{BackToTopButton, PageFooter, TopNav};

pub fn start() {
    console_error_panic_hook::set_once();
    logging::init();

    let config = site_config::load();
    let page = crate::build_page(&config);
    tracing::info!(sections = page.cards.len(), "mounting resume page");

    mount_to_body(move || view! { <App page=page /> });
}

#[component]
fn App(page: PageModel) -> impl IntoView {
    let PageModel {
        nav,
        cards,
        back_to_top,
        footer,
    } = page;

    view! {
        <div style=style::container().to_css()>
            <TopNav links=nav />

            <main style=style::main_stream().to_css()>
                {cards.into_iter().map(|card| view! { <SectionCard card=card /> }).collect_view()}
                <BackToTopButton model=back_to_top />
            </main>

            <PageFooter model=footer />
        </div>
    }
}

#[component]
fn SectionCard(card: CardModel) -> impl IntoView {
    let CardModel {
        anchor,
        title,
        aria_label,
        entrance,
        body,
        ..
    } = card;

    view! {
        <section id=anchor aria-label=aria_label style=entrance.style().to_css()>
            <Card>
                <CardHeader>
                    <CardTitle>{title}</CardTitle>
                </CardHeader>
                <CardContent>
                    <CardBodyView body=body />
                </CardContent>
            </Card>
        </section>
    }
}
