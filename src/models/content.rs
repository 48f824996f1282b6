//! Typed site content, deserialized from `assets/content.toml`.

use std::sync::OnceLock;

use serde::Deserialize;

use crate::config::CONTENT_TOML;

/// All static content of the site.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Content {
    pub profile: Profile,
    pub social: Vec<SocialLink>,
    pub projects: Projects,
    pub academics: Academics,
    pub skills: Skills,
    pub volunteering: Volunteering,
    pub contact: Contact,
}

impl Content {
    pub fn parse(source: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(source)
    }
}

/// Content embedded in the binary.
///
/// Parsed on first use. A malformed file logs a warning and yields empty
/// content so the shell still renders.
pub fn content() -> &'static Content {
    static CONTENT: OnceLock<Content> = OnceLock::new();
    CONTENT.get_or_init(|| match Content::parse(CONTENT_TOML) {
        Ok(content) => content,
        Err(err) => {
            web_sys::console::warn_1(&format!("content.toml: {}", err).into());
            Content::default()
        }
    })
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    pub school: String,
    pub photo: String,
    pub photo_alt: String,
    pub badge: String,
    /// Highlighted areas of interest, joined with "and" in the bio.
    pub interests: Vec<String>,
    pub statement: String,
    pub tags: Vec<String>,
    pub resume_url: Option<String>,
}

/// Icon shown next to a link.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkIcon {
    Github,
    Linkedin,
    Mail,
    Phone,
    #[default]
    External,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct SocialLink {
    pub title: String,
    pub icon: LinkIcon,
    /// Missing for contacts that are not published yet.
    pub href: Option<String>,
    /// Visible text next to the icon (title only when absent).
    pub label: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Projects {
    pub intro: String,
    pub items: Vec<Project>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectLinkKind {
    #[default]
    Code,
    Demo,
}

impl ProjectLinkKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Code => "Code",
            Self::Demo => "Demo",
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct ProjectLink {
    #[serde(default)]
    pub kind: ProjectLinkKind,
    pub href: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Project {
    pub title: String,
    pub desc: String,
    pub tags: Vec<String>,
    pub links: Vec<ProjectLink>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Academics {
    pub education_heading: String,
    pub achievements_heading: String,
    pub education: Vec<Achievement>,
    pub achievements: Vec<Achievement>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Stat {
    pub label: String,
    pub value: String,
}

/// An education record or award.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Achievement {
    pub logo: String,
    pub alt: String,
    pub title: String,
    pub link: String,
    pub institute: String,
    pub year: String,
    pub scores: Vec<Stat>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Skills {
    pub intro: String,
    pub groups: Vec<SkillGroup>,
    pub highlights: Vec<Highlight>,
    pub platforms: Vec<Platform>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct SkillGroup {
    pub name: String,
    pub items: Vec<String>,
}

/// A bullet with an optional inline link: `text` `link_text` `rest`.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Highlight {
    pub text: String,
    pub link_text: Option<String>,
    pub href: Option<String>,
    pub rest: String,
}

/// A profile on an external platform.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Platform {
    pub name: String,
    pub logo: String,
    pub handle: String,
    pub profile_url: String,
    pub stats: Vec<Stat>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Volunteering {
    pub badge: String,
    pub title: String,
    pub organization: String,
    pub photo: Option<String>,
    pub summary: String,
    pub record: String,
    pub highlights: Vec<Highlight>,
    pub contacts: Vec<SocialLink>,
    pub reference_label: String,
    pub reference_url: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Contact {
    pub intro: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_content_parses() {
        let content = Content::parse(CONTENT_TOML).expect("content.toml must parse");

        assert_eq!(content.profile.name, "Ruel Sinha");
        assert_eq!(content.social.len(), 3);
        assert!(content.social[2].href.is_none());
        assert!(!content.projects.items.is_empty());
        assert_eq!(content.academics.education.len(), 1);
        assert_eq!(content.volunteering.highlights.len(), 3);
    }

    #[test]
    fn test_project_links_default_to_code() {
        let content = Content::parse(
            r#"
            [[projects.items]]
            title = "x"
            links = [{ href = "https://example.com" }, { kind = "demo", href = "https://d" }]
            "#,
        )
        .unwrap();
        let links = &content.projects.items[0].links;
        assert_eq!(links[0].kind, ProjectLinkKind::Code);
        assert_eq!(links[1].kind.label(), "Demo");
    }

    #[test]
    fn test_missing_sections_default() {
        let content = Content::parse("").unwrap();
        assert!(content.social.is_empty());
        assert!(content.projects.items.is_empty());
        assert_eq!(content.profile.resume_url, None);
    }

    #[test]
    fn test_unknown_icon_is_an_error() {
        let err = Content::parse(
            r#"
            [[social]]
            title = "Fax"
            icon = "fax"
            "#,
        );
        assert!(err.is_err());
    }
}
