use chrono::{DateTime, Datelike, Utc};
use rust_embed::Embed;
use serde::Deserialize;
use std::sync::LazyLock;
use thiserror::Error;

const PORTFOLIO_FILE: &str = "portfolio.json";

static PORTFOLIO: LazyLock<Portfolio> =
    LazyLock::new(|| Portfolio::load().expect("embedded portfolio content should be valid"));

#[derive(Embed)]
#[folder = "content"]
pub struct ContentAssets;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("content file {0} is missing")]
    Missing(&'static str),
    #[error("couldn't parse portfolio content: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("skill {name} has level {level}, expected at most 100")]
    SkillLevel { name: String, level: u8 },
    #[error("portfolio needs a name")]
    EmptyName,
    #[error("navigation needs at least one section")]
    NoSections,
    #[error("section link #{0} has no matching section")]
    UnknownSection(String),
}

/// Section ids rendered on the home page, in page order.
pub const SECTION_IDS: [&str; 5] = ["about", "skills", "experience", "projects", "contact"];

#[derive(Debug, Clone, Deserialize)]
pub struct Portfolio {
    pub site: Site,
    pub sections: Vec<SectionLink>,
    pub hero: Hero,
    pub about: About,
    pub skills: Skills,
    pub experience: ExperienceSection,
    pub projects: Projects,
    pub contact: Contact,
    pub socials: Vec<SocialLink>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Site {
    pub name: String,
    pub initials: String,
    pub title: String,
    pub description: String,
    pub resume: Resume,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Resume {
    pub href: String,
    pub file_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SectionLink {
    pub id: String,
    pub label: String,
}

impl SectionLink {
    pub fn href(&self) -> String {
        format!("#{}", self.id)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SectionHeader {
    pub badge: String,
    pub heading: String,
    pub highlight: String,
    #[serde(default)]
    pub summary: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Hero {
    pub greeting: String,
    pub tagline: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct About {
    #[serde(flatten)]
    pub header: SectionHeader,
    pub story: String,
    pub features: Vec<Feature>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Feature {
    pub icon: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Skills {
    #[serde(flatten)]
    pub header: SectionHeader,
    pub items: Vec<Skill>,
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: u8,
    pub gradient: String,
}

impl Skill {
    pub fn fraction(&self) -> f64 {
        f64::from(self.level.min(100)) / 100.0
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExperienceSection {
    #[serde(flatten)]
    pub header: SectionHeader,
    pub roles: Vec<Role>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Role {
    pub role: String,
    pub company: String,
    pub location: String,
    pub period: String,
    pub description: String,
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Projects {
    #[serde(flatten)]
    pub header: SectionHeader,
    pub items: Vec<Project>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Project {
    pub title: String,
    pub category: String,
    pub description: String,
    pub long_description: String,
    pub technologies: Vec<String>,
    pub image: String,
    pub gradient: String,
}

impl Project {
    /// Technologies shown on the card; the rest collapse into a "+n" chip.
    pub fn card_technologies(&self, shown: usize) -> (&[String], usize) {
        let shown = shown.min(self.technologies.len());
        (
            &self.technologies[..shown],
            self.technologies.len() - shown,
        )
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Contact {
    #[serde(flatten)]
    pub header: SectionHeader,
    pub blurb: String,
    pub details: Vec<ContactDetail>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContactDetail {
    pub icon: String,
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub href: String,
    pub icon: String,
}

impl Portfolio {
    pub fn load() -> Result<Self, ContentError> {
        let file =
            ContentAssets::get(PORTFOLIO_FILE).ok_or(ContentError::Missing(PORTFOLIO_FILE))?;
        Self::parse(&file.data)
    }

    pub fn parse(data: &[u8]) -> Result<Self, ContentError> {
        let portfolio: Portfolio = serde_json::from_slice(data)?;
        portfolio.validate()?;
        Ok(portfolio)
    }

    fn validate(&self) -> Result<(), ContentError> {
        if self.site.name.trim().is_empty() {
            return Err(ContentError::EmptyName);
        }
        if self.sections.is_empty() {
            return Err(ContentError::NoSections);
        }
        if let Some(skill) = self.skills.items.iter().find(|s| s.level > 100) {
            return Err(ContentError::SkillLevel {
                name: skill.name.clone(),
                level: skill.level,
            });
        }
        if let Some(link) = self
            .sections
            .iter()
            .find(|l| !SECTION_IDS.contains(&l.id.as_str()))
        {
            return Err(ContentError::UnknownSection(link.id.clone()));
        }
        Ok(())
    }
}

/// Portfolio content embedded in the binary, parsed on first use.
pub fn portfolio() -> &'static Portfolio {
    &PORTFOLIO
}

/// Year shown in the footer, taken from the build timestamp.
pub fn copyright_year() -> i32 {
    year_of(env!("BUILD_TIME"))
}

fn year_of(timestamp: &str) -> i32 {
    match DateTime::parse_from_rfc3339(timestamp) {
        Ok(dt) => dt.year(),
        Err(e) => {
            log::warn!("bad build timestamp {timestamp}: {e}");
            Utc::now().year()
        }
    }
}
