//! Page content loaded from `content/portfolio.toml`
//!
//! All text, links, skill groups and projects shown on the page are data.
//! The builtin file is embedded at compile time; [`PortfolioContent::parse`]
//! accepts any other TOML document with the same shape.

use serde::Deserialize;

use crate::prelude::*;

const BUILTIN_CONTENT: &str = include_str!("../content/portfolio.toml");

/// Everything the page renders
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PortfolioContent {
    pub profile: Profile,
    pub links: SocialLinks,
    pub about: About,
    pub skills: Skills,
    #[serde(default)]
    pub showcases: Vec<ProjectShowcase>,
    pub contact: Contact,
    pub footer: Footer,
}

/// Hero block
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Profile {
    pub name: String,
    pub role: String,
    pub tagline: String,
    /// Profile photo path, resolved by the static asset server
    #[serde(default)]
    pub photo: Option<String>,
}

/// Outbound profile links, rendered verbatim
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SocialLinks {
    pub github: String,
    pub linkedin: String,
    /// Short form shown on the contact card
    pub linkedin_display: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct About {
    pub heading: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Skills {
    pub heading: String,
    #[serde(default)]
    pub groups: Vec<SkillGroup>,
}

/// Titled list of skill names, shown in input order
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SkillGroup {
    pub title: String,
    #[serde(default)]
    pub items: Vec<String>,
}

/// A headed row of project cards inside the projects section
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProjectShowcase {
    pub heading: String,
    #[serde(default)]
    pub projects: Vec<Project>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Project {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    /// Screenshot path
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Contact {
    pub heading: String,
    pub email: String,
}

impl Contact {
    /// `mailto:` link for the displayed address.
    ///
    /// Every mail link on the page goes through here so the visible address
    /// and the link target can't drift apart.
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Footer {
    pub owner: String,
}

impl Footer {
    /// Copyright line for `year`, which the page takes from the visitor's clock
    pub fn copyright(&self, year: u32) -> String {
        format!("\u{00A9} {} {}. All rights reserved.", year, self.owner)
    }
}

impl PortfolioContent {
    /// Parse and validate a content document
    pub fn parse(source: &str) -> Result<Self> {
        let content: PortfolioContent = toml::from_str(source)?;
        content.validate()?;
        Ok(content)
    }

    /// Content bundled with the site
    pub fn builtin() -> Result<Self> {
        Self::parse(BUILTIN_CONTENT).context("Loading builtin portfolio content")
    }

    /// Reject documents that would render empty headings or dead links.
    ///
    /// Tag lists are not checked: duplicates and ordering are shown as written.
    pub fn validate(&self) -> Result<()> {
        require("profile.name", &self.profile.name)?;
        require("about.heading", &self.about.heading)?;
        require("skills.heading", &self.skills.heading)?;
        require("contact.heading", &self.contact.heading)?;
        require("contact.email", &self.contact.email)?;
        require("links.github", &self.links.github)?;
        require("links.linkedin", &self.links.linkedin)?;

        for (i, group) in self.skills.groups.iter().enumerate() {
            require(&format!("skills.groups[{i}].title"), &group.title)?;
        }

        for (i, showcase) in self.showcases.iter().enumerate() {
            require(&format!("showcases[{i}].heading"), &showcase.heading)?;
            for (j, project) in showcase.projects.iter().enumerate() {
                require(
                    &format!("showcases[{i}].projects[{j}].title"),
                    &project.title,
                )?;
            }
        }

        debug!(
            "Content ok: {} skill groups, {} projects",
            self.skills.groups.len(),
            self.project_count()
        );
        Ok(())
    }

    pub fn project_count(&self) -> usize {
        self.showcases.iter().map(|s| s.projects.len()).sum()
    }
}

fn require(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::content_invalid(format!("{field} is empty")));
    }
    Ok(())
}
