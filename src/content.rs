use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

use crate::reveal::Direction;

pub const CONTENT_FILE: &str = "site.json";

static SITE_CONTENT: LazyLock<Result<SiteContent, ContentError>> = LazyLock::new(load);

#[derive(Embed)]
#[folder = "content"]
pub struct Assets;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("Site content not found: {0}")]
    NotFound(&'static str),
    #[error("Couldn't parse site content: {0}")]
    Parse(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Shield,
    Code,
    Terminal,
    Server,
    Lock,
    Cpu,
    Github,
    Linkedin,
    Mail,
    ExternalLink,
    ChevronLeft,
    ChevronRight,
    Network,
    Database,
    Bot,
    Blocks,
    Cloud,
    Bug,
    Send,
}

/// How an [`Icon`] is drawn: inline text, or an icon-font class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    Text(&'static str),
    Class(&'static str),
}

impl Icon {
    pub const ALL: [Icon; 19] = [
        Icon::Shield,
        Icon::Code,
        Icon::Terminal,
        Icon::Server,
        Icon::Lock,
        Icon::Cpu,
        Icon::Github,
        Icon::Linkedin,
        Icon::Mail,
        Icon::ExternalLink,
        Icon::ChevronLeft,
        Icon::ChevronRight,
        Icon::Network,
        Icon::Database,
        Icon::Bot,
        Icon::Blocks,
        Icon::Cloud,
        Icon::Bug,
        Icon::Send,
    ];

    pub fn glyph(self) -> Glyph {
        match self {
            Icon::Shield => Glyph::Text("🛡️"),
            Icon::Code => Glyph::Text("💻"),
            Icon::Terminal => Glyph::Text("⌨️"),
            Icon::Server => Glyph::Text("🖥️"),
            Icon::Lock => Glyph::Text("🔒"),
            Icon::Cpu => Glyph::Text("🧠"),
            Icon::Github => Glyph::Class("devicon-github-plain"),
            Icon::Linkedin => Glyph::Class("devicon-linkedin-plain"),
            Icon::Mail => Glyph::Text("📧"),
            Icon::ExternalLink => Glyph::Text("↗"),
            Icon::ChevronLeft => Glyph::Text("‹"),
            Icon::ChevronRight => Glyph::Text("›"),
            Icon::Network => Glyph::Text("🌐"),
            Icon::Database => Glyph::Text("🗄️"),
            Icon::Bot => Glyph::Text("🤖"),
            Icon::Blocks => Glyph::Text("📦"),
            Icon::Cloud => Glyph::Text("☁️"),
            Icon::Bug => Glyph::Text("🐛"),
            Icon::Send => Glyph::Text("➤"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub tagline: String,
    pub icon: Icon,
    pub summary: String,
    /// Recipient of contact form messages.
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlight {
    pub icon: Icon,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub icon: Icon,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackGroup {
    pub title: String,
    pub icon: Icon,
    pub direction: Direction,
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub icon: Icon,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub icon: Icon,
    pub href: String,
}

impl SocialLink {
    pub fn is_external(&self) -> bool {
        self.href.starts_with("http://") || self.href.starts_with("https://")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteContent {
    pub profile: Profile,
    pub highlights: Vec<Highlight>,
    pub stack: Vec<StackGroup>,
    pub projects: Vec<Project>,
    pub socials: Vec<SocialLink>,
}

pub fn parse(raw: &str) -> Result<SiteContent, ContentError> {
    serde_json::from_str(raw).map_err(|e| ContentError::Parse(e.to_string()))
}

fn load() -> Result<SiteContent, ContentError> {
    let file = Assets::get(CONTENT_FILE).ok_or(ContentError::NotFound(CONTENT_FILE))?;
    let raw = std::str::from_utf8(&file.data).map_err(|e| ContentError::Parse(e.to_string()))?;
    parse(raw)
}

/// The embedded site content, parsed on first access.
pub fn site_content() -> Result<&'static SiteContent, ContentError> {
    SITE_CONTENT.as_ref().map_err(Clone::clone)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_embedded_content_parses() {
        let content = site_content().expect("embedded content should parse");
        assert!(!content.profile.name.is_empty());
        assert!(content.profile.email.contains('@'));
        assert_eq!(content.highlights.len(), 3);
        assert_eq!(content.projects.len(), 6);
        assert!(content.projects.iter().all(|p| !p.title.is_empty()));
    }

    #[test]
    fn test_stack_directions_alternate() {
        let content = site_content().expect("embedded content should parse");
        let directions = content
            .stack
            .iter()
            .map(|g| g.direction)
            .collect::<Vec<_>>();
        assert_eq!(
            directions,
            vec![Direction::Left, Direction::Right, Direction::Left]
        );
    }

    #[test]
    fn test_socials() {
        let content = site_content().expect("embedded content should parse");
        let external = content
            .socials
            .iter()
            .filter(|s| s.is_external())
            .count();
        assert_eq!(external, 2);
        assert!(content
            .socials
            .iter()
            .any(|s| s.href == format!("mailto:{}", content.profile.email)));
    }

    #[test]
    fn test_every_icon_has_a_distinct_glyph() {
        let glyphs = Icon::ALL.map(Icon::glyph);
        assert_eq!(glyphs.iter().collect::<HashSet<_>>().len(), Icon::ALL.len());
    }

    #[test]
    fn test_icon_names_are_kebab_case() {
        let icon: Icon = serde_json::from_str(r#""chevron-left""#).expect("icon should parse");
        assert_eq!(icon, Icon::ChevronLeft);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(parse("{}"), Err(ContentError::Parse(_))));
        let bad_icon = r#"{"icon": "rocket", "title": "t", "description": "d"}"#;
        assert!(serde_json::from_str::<Highlight>(bad_icon).is_err());
    }
}
