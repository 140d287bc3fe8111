//! The page model derived from a registry.
//!
//! [`PageModel::build`] is a pure function of the config: one nav link and
//! one card per section, in registry order. Card content is chosen by
//! [`SectionKind`]; ids without authored content get a three-bar skeleton.

use crate::action::{MailTo, PageAction, ScrollBehavior};
use crate::config::SiteConfig;
use crate::content::{
    AccomplishmentGroup, Degree, Employer, Skill, ACCOMPLISHMENTS, EDUCATION, EXECUTIVE_PROFILE,
    EXPERIENCE, SKELETON_WIDTHS, SKILLS, SKILL_COLUMNS,
};
use crate::error::SiteError;
use crate::photo::ProfilePhoto;
use crate::section::{Registry, SectionKind};
use crate::style::Style;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub anchor: String,
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionButton {
    pub label: String,
    pub aria_label: String,
    pub action: PageAction,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactBlock {
    pub photo: ProfilePhoto,
    pub location: String,
    pub email: String,
    pub actions: Vec<ActionButton>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillsGrid {
    pub columns: u8,
    pub entries: &'static [Skill],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkeletonBar {
    pub width_pct: u8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardBody {
    Contact(ContactBlock),
    ExecutiveProfile(&'static str),
    Skills(SkillsGrid),
    Accomplishments(&'static [AccomplishmentGroup]),
    Experience(&'static [Employer]),
    Education(&'static [Degree]),
    Skeleton([SkeletonBar; 3]),
}

impl CardBody {
    pub fn for_kind(kind: SectionKind, config: &SiteConfig) -> Self {
        match kind {
            SectionKind::Contact => CardBody::Contact(ContactBlock {
                photo: ProfilePhoto::new(
                    config.assets.profile_photo.clone(),
                    config.assets.profile_photo_alt.clone(),
                ),
                location: config.owner.location.clone(),
                email: config.owner.email.clone(),
                actions: contact_actions(config),
            }),
            SectionKind::ExecutiveProfile => CardBody::ExecutiveProfile(EXECUTIVE_PROFILE),
            SectionKind::Skills => CardBody::Skills(SkillsGrid {
                columns: SKILL_COLUMNS,
                entries: SKILLS,
            }),
            SectionKind::Accomplishments => CardBody::Accomplishments(ACCOMPLISHMENTS),
            SectionKind::Experience => CardBody::Experience(EXPERIENCE),
            SectionKind::Education => CardBody::Education(EDUCATION),
            SectionKind::Placeholder => {
                CardBody::Skeleton(SKELETON_WIDTHS.map(|width_pct| SkeletonBar { width_pct }))
            }
        }
    }

    pub fn is_skeleton(&self) -> bool {
        matches!(self, CardBody::Skeleton(_))
    }
}

/// Staggered fade-and-rise applied to each card on first paint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entrance {
    pub duration_ms: u32,
    pub delay_ms: u32,
    pub offset_y_px: u32,
}

impl Entrance {
    pub const DURATION_MS: u32 = 300;
    pub const STAGGER_MS: u32 = 50;
    pub const OFFSET_Y_PX: u32 = 12;

    pub fn for_position(idx: usize) -> Self {
        let idx = u32::try_from(idx).unwrap_or(u32::MAX);
        Self {
            duration_ms: Self::DURATION_MS,
            delay_ms: idx.saturating_mul(Self::STAGGER_MS),
            offset_y_px: Self::OFFSET_Y_PX,
        }
    }

    /// Uses the `card-enter` keyframes from the host page.
    pub fn style(&self) -> Style {
        Style::new()
            .set(
                "animation",
                format!(
                    "card-enter {}ms ease-out {}ms both",
                    self.duration_ms, self.delay_ms
                ),
            )
            .set("--enter-offset", format!("{}px", self.offset_y_px))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardModel {
    pub anchor: String,
    pub title: String,
    pub aria_label: String,
    pub kind: SectionKind,
    pub entrance: Entrance,
    pub body: CardBody,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackToTop {
    pub label: String,
    pub aria_label: String,
    pub action: PageAction,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterModel {
    pub name: String,
    pub lines: Vec<String>,
    pub actions: Vec<ActionButton>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageModel {
    pub nav: Vec<NavLink>,
    pub cards: Vec<CardModel>,
    pub back_to_top: BackToTop,
    pub footer: FooterModel,
}

impl PageModel {
    pub fn build(config: &SiteConfig) -> Result<Self, SiteError> {
        let registry = config.registry()?;
        Ok(Self::from_registry(&registry, config))
    }

    pub fn from_registry(registry: &Registry, config: &SiteConfig) -> Self {
        let nav = registry
            .iter()
            .map(|s| NavLink {
                anchor: s.id.clone(),
                label: s.title.clone(),
                href: s.href(),
            })
            .collect();

        let cards: Vec<CardModel> = registry
            .iter()
            .enumerate()
            .map(|(idx, s)| {
                let kind = s.kind();
                CardModel {
                    anchor: s.id.clone(),
                    title: s.title.clone(),
                    aria_label: s.title.clone(),
                    kind,
                    entrance: Entrance::for_position(idx),
                    body: CardBody::for_kind(kind, config),
                }
            })
            .collect();

        let back_to_top = BackToTop {
            label: "Top".to_string(),
            aria_label: "Back to top".to_string(),
            action: PageAction::ScrollTo {
                anchor: registry.first().id.clone(),
                behavior: ScrollBehavior::Smooth,
            },
        };

        let footer = FooterModel {
            name: config.owner.name.clone(),
            lines: vec![format!("Email: {}", config.owner.email)],
            actions: contact_actions(config),
        };

        tracing::debug!(
            sections = cards.len(),
            skeletons = cards.iter().filter(|c| c.body.is_skeleton()).count(),
            "built page model"
        );

        Self {
            nav,
            cards,
            back_to_top,
            footer,
        }
    }
}

/// "Email Me" and the external profile link, shared by the contact card and
/// the footer.
pub fn contact_actions(config: &SiteConfig) -> Vec<ActionButton> {
    vec![
        ActionButton {
            label: "Email Me".to_string(),
            aria_label: "Email Me".to_string(),
            action: PageAction::OpenMail(MailTo {
                to: config.owner.email.clone(),
                subject: config.links.mail_subject.clone(),
                body: config.links.mail_body.clone(),
            }),
        },
        ActionButton {
            label: config.links.profile_label.clone(),
            aria_label: format!("Open {}", config.links.profile_label),
            action: PageAction::OpenExternal {
                url: config.links.profile_url.clone(),
            },
        },
    ]
}
