//! Card and list building blocks shared by the pages.
//!
//! Cards fade up one after another: each takes its position in the list as
//! `--stagger`, which the stylesheet turns into an animation delay.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::models::{Achievement, Highlight, Platform, Project, ProjectLinkKind};

stylance::import_crate_style!(css, "src/components/cards.module.css");

fn stagger(index: usize) -> String {
    format!("--stagger: {};", index)
}

/// Page heading with a leading icon.
#[component]
pub fn SectionHeading(
    icon: icondata::Icon,
    title: String,
    #[prop(optional)] subtitle: Option<String>,
) -> impl IntoView {
    view! {
        <div class=css::heading>
            <h1 class=css::headingTitle>
                <span class=css::headingIcon><Icon icon=icon /></span>
                {title}
            </h1>
            {subtitle.map(|text| view! { <p class=css::headingSubtitle>{text}</p> })}
        </div>
    }
}

/// Pill-shaped tags.
#[component]
pub fn TagList(tags: &'static [String]) -> impl IntoView {
    view! {
        <div class=css::tags>
            {tags.iter().map(|tag| view! { <span class=css::tag>{tag.clone()}</span> }).collect_view()}
        </div>
    }
}

#[component]
pub fn ProjectCard(project: &'static Project, index: usize) -> impl IntoView {
    view! {
        <article class=css::card style=stagger(index)>
            <h3 class=css::cardTitle>{project.title.clone()}</h3>
            <p class=css::cardBody>{project.desc.clone()}</p>
            <TagList tags=project.tags.as_slice() />
            <div class=css::cardLinks>
                {project
                    .links
                    .iter()
                    .map(|link| view! {
                        <a
                            href=link.href.clone()
                            class=css::cardLink
                            target="_blank"
                            rel="noopener noreferrer"
                        >
                            {match link.kind {
                                ProjectLinkKind::Code => view! { <Icon icon=ic::CODE /> },
                                ProjectLinkKind::Demo => view! { <Icon icon=ic::EXTERNAL_LINK /> },
                            }}
                            {link.kind.label()}
                        </a>
                    })
                    .collect_view()}
            </div>
        </article>
    }
}

/// Education record or award with a logo.
#[component]
pub fn AchievementCard(achievement: &'static Achievement, index: usize) -> impl IntoView {
    view! {
        <article class=css::achievement style=stagger(index)>
            <div class=css::logo>
                <img
                    src=achievement.logo.clone()
                    alt=achievement.alt.clone()
                    loading="lazy"
                    decoding="async"
                    width="64"
                    height="64"
                />
            </div>
            <div class=css::achievementBody>
                <h3 class=css::cardTitle>{achievement.institute.clone()}</h3>
                <a
                    href=achievement.link.clone()
                    class=css::cardLink
                    target="_blank"
                    rel="noopener noreferrer"
                >
                    {achievement.title.clone()}
                </a>
                <div class=css::stats>
                    <p><span class=css::statLabel>"Year:"</span>" "{achievement.year.clone()}</p>
                    {achievement
                        .scores
                        .iter()
                        .map(|stat| view! {
                            <p>
                                <span class=css::statLabel>{format!("{}:", stat.label)}</span>
                                " "{stat.value.clone()}
                            </p>
                        })
                        .collect_view()}
                </div>
            </div>
        </article>
    }
}

/// Profile on an external platform.
#[component]
pub fn PlatformCard(platform: &'static Platform, index: usize) -> impl IntoView {
    view! {
        <article class=css::platform style=stagger(index)>
            <div class=css::logo>
                <img
                    src=platform.logo.clone()
                    alt=format!("{} Logo", platform.name)
                    loading="lazy"
                />
            </div>
            <div class=css::cardTitle>{platform.name.clone()}</div>
            <div class=css::stats>
                <span class=css::statLabel>"Handle:"</span>" "
                <a
                    href=platform.profile_url.clone()
                    class=css::cardLink
                    target="_blank"
                    rel="noopener noreferrer"
                >
                    {platform.handle.clone()}
                </a>
            </div>
            <div class=css::stats>
                {platform
                    .stats
                    .iter()
                    .map(|stat| view! {
                        <div>
                            {format!("{}: ", stat.label)}
                            <span class=css::statValue>{stat.value.clone()}</span>
                        </div>
                    })
                    .collect_view()}
            </div>
            <a
                href=platform.profile_url.clone()
                class=css::cardLink
                target="_blank"
                rel="noopener noreferrer"
            >
                <Icon icon=ic::EXTERNAL_LINK />
                "View Profile"
            </a>
        </article>
    }
}

/// Bulleted highlights inside a titled panel.
#[component]
pub fn HighlightList(
    title: &'static str,
    items: &'static [Highlight],
    #[prop(optional)] lead: Option<String>,
) -> impl IntoView {
    view! {
        <section class=css::panel>
            <h3 class=css::cardTitle>{title}</h3>
            {lead.map(|text| view! { <p class=css::lead>{text}</p> })}
            <ul class=css::highlights>
                {items
                    .iter()
                    .enumerate()
                    .map(|(index, item)| view! {
                        <li style=stagger(index)>
                            <span class=css::highlightText>{item.text.clone()}</span>
                            {item.link_text.clone().map(|text| view! {
                                <a
                                    href=item.href.clone()
                                    class=css::cardLink
                                    target="_blank"
                                    rel="noopener noreferrer"
                                >
                                    {text}
                                </a>
                            })}
                            {item.rest.clone()}
                        </li>
                    })
                    .collect_view()}
            </ul>
        </section>
    }
}
