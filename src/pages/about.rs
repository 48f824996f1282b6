use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::cards::TagList;
use crate::components::icons as ic;
use crate::components::social::SocialLinks;
use crate::models::content;

stylance::import_crate_style!(css, "src/pages/profile.module.css");

/// Bio with photo, interests and outbound links.
#[component]
pub fn About() -> impl IntoView {
    let profile = &content().profile;

    // "a and b" / "a, b and c"
    let interests = match profile.interests.as_slice() {
        [] => Vec::new(),
        [only] => vec![only.clone()],
        [init @ .., last] => vec![init.join(", "), last.clone()],
    };

    view! {
        <div class=css::container>
            <div class=css::wrapper>
                <div
                    class=css::photo
                    tabindex="0"
                    aria-label=format!("Profile photo of {}", profile.name)
                >
                    <img src=profile.photo.clone() alt=profile.photo_alt.clone() loading="lazy" decoding="async" />
                </div>

                <div class=css::body>
                    <div class=css::badge>
                        <div class=css::badgeDot></div>
                        <span class=css::badgeText>{profile.badge.clone()}</span>
                    </div>

                    <h1 class=css::title>
                        "Hi, I'm "<span class=css::titleGradient>{profile.name.clone()}</span>
                    </h1>

                    <div class=css::subtitle>
                        <Icon icon=ic::EDUCATION />
                        <span>{profile.school.clone()}</span>
                    </div>

                    <p class=css::description>
                        "I'm a student with a strong passion in "
                        {interests
                            .iter()
                            .enumerate()
                            .map(|(i, part)| view! {
                                {(i > 0).then_some(" and ")}
                                <span class=css::highlight>{part.clone()}</span>
                            })
                            .collect_view()}
                        "."
                    </p>
                    <p class=css::description>{profile.statement.clone()}</p>

                    <TagList tags=profile.tags.as_slice() />

                    <div class=css::links>
                        <SocialLinks links=content().social.as_slice() link_class=css::socialLink />
                        <a
                            href=profile.resume_url.clone()
                            target="_blank"
                            rel="noopener noreferrer"
                            class=css::primaryLink
                        >
                            <Icon icon=ic::FILE_TEXT />
                            "Resume"
                        </a>
                    </div>
                </div>
            </div>
        </div>
    }
}
