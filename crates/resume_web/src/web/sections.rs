use leptos::prelude::*;
use resume_page::content::{AccomplishmentGroup, Degree, Employer};
use resume_page::page::{ContactBlock, SkeletonBar, SkillsGrid};
use resume_page::photo::PhotoState;
use resume_page::{style, CardBody, PhotoView, ProfilePhoto, Style};

use super::shell::ActionButtons;

#[component]
pub(super) fn CardBodyView(body: CardBody) -> impl IntoView {
    match body {
        CardBody::Contact(contact) => view! { <ContactBody contact=contact /> }.into_any(),
        CardBody::ExecutiveProfile(text) => {
            view! { <p style=style::summary_paragraph().to_css()>{text}</p> }.into_any()
        }
        CardBody::Skills(grid) => view! { <SkillsBody grid=grid /> }.into_any(),
        CardBody::Accomplishments(groups) => {
            view! { <AccomplishmentsBody groups=groups /> }.into_any()
        }
        CardBody::Experience(employers) => {
            view! { <ExperienceBody employers=employers /> }.into_any()
        }
        CardBody::Education(degrees) => view! { <EducationBody degrees=degrees /> }.into_any(),
        CardBody::Skeleton(bars) => view! { <SkeletonBody bars=bars /> }.into_any(),
    }
}

fn row_css(idx: usize, len: usize) -> String {
    style::list_row(idx + 1 == len).to_css()
}

#[component]
fn ContactBody(contact: ContactBlock) -> impl IntoView {
    let ContactBlock {
        photo,
        location,
        email,
        actions,
    } = contact;

    view! {
        <div style=style::contact_column().to_css()>
            <ProfilePhotoView photo=photo />
            <div style=style::contact_location().to_css()>{location}</div>
            <div style=style::contact_email().to_css()>{email}</div>
            <ActionButtons actions=actions />
        </div>
    }
}

#[component]
fn ProfilePhotoView(photo: ProfilePhoto) -> impl IntoView {
    let photo = RwSignal::new(photo);
    // Pending and Loaded render the same image; only the swap to the
    // placeholder re-renders.
    let shown = Memo::new(move |_| photo.with(|p| p.view()));

    let on_load = move |_| {
        if photo.with_untracked(|p| p.state()) == PhotoState::Pending {
            photo.update(|p| p.mark_loaded());
        }
    };
    let on_error = move |_| {
        if photo.with_untracked(|p| p.state()) != PhotoState::Failed {
            photo.update(|p| {
                p.mark_failed();
            });
        }
    };

    move || match shown.get() {
        PhotoView::Image { src, alt, style } => view! {
            <img src=src alt=alt style=style.to_css() on:load=on_load on:error=on_error />
        }
        .into_any(),
        PhotoView::Placeholder { style } => {
            view! { <div style=style.to_css() aria-hidden="true"></div> }.into_any()
        }
    }
}

#[component]
fn SkillsBody(grid: SkillsGrid) -> impl IntoView {
    let len = grid.entries.len();
    view! {
        <div style=style::skills_grid(grid.columns).to_css()>
            {grid
                .entries
                .iter()
                .enumerate()
                .map(|(i, skill)| {
                    view! {
                        <div style=row_css(i, len)>
                            <strong>{skill.category}</strong>
                            " "
                            {skill.items}
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn AccomplishmentsBody(groups: &'static [AccomplishmentGroup]) -> impl IntoView {
    let len = groups.len();
    view! {
        <div style=style::stacked_list().to_css()>
            {groups
                .iter()
                .enumerate()
                .map(|(i, group)| {
                    view! {
                        <div style=row_css(i, len)>
                            <strong>{group.role}</strong>
                            <ul style=style::bullet_list().to_css()>
                                {group.items.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}
                            </ul>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn ExperienceBody(employers: &'static [Employer]) -> impl IntoView {
    let len = employers.len();
    view! {
        <div style=style::stacked_list().to_css()>
            {employers
                .iter()
                .enumerate()
                .map(|(i, employer)| {
                    view! {
                        <div style=row_css(i, len)>
                            <strong>{employer.headline}</strong>
                            <div style=style::nested_roles().to_css()>
                                {employer.roles.iter().map(|role| view! { <div>{*role}</div> }).collect_view()}
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn EducationBody(degrees: &'static [Degree]) -> impl IntoView {
    let len = degrees.len();
    view! {
        <div style=style::stacked_list().to_css()>
            {degrees
                .iter()
                .enumerate()
                .map(|(i, degree)| {
                    let is_last = i + 1 == len;
                    let mut row = Style::new().set("display", "flex").set("align-items", "center");
                    row = row.merge(&style::list_row(is_last));
                    if !is_last {
                        row = row.set("margin-bottom", "12px");
                    }
                    view! {
                        <div style=row.to_css()>
                            <img
                                src=degree.logo_src
                                alt=degree.logo_alt
                                style=style::institution_logo().to_css()
                            />
                            <div>
                                <strong>{degree.degree}</strong>
                                <br />
                                {degree.institution}
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn SkeletonBody(bars: [SkeletonBar; 3]) -> impl IntoView {
    let len = bars.len();
    view! {
        <div style=style::stacked_list().to_css() aria-busy="true">
            {bars
                .iter()
                .enumerate()
                .map(|(i, bar)| {
                    view! {
                        <div style=row_css(i, len)>
                            <div style=style::skeleton_bar(bar.width_pct).to_css()></div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
