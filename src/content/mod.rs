//! Portfolio content.
//!
//! Everything the page shows comes from a [`Portfolio`]. The built-in value
//! is the site's own content; a JSON file can replace any part of it, with
//! missing fields falling back to the built-in values.

mod builtin;

use std::fmt;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::typewriter::{TypewriterConfig, TypewriterError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Portfolio {
    pub profile: Profile,
    pub about: About,
    pub certifications: Vec<Certification>,
    pub tech_stack: Vec<TechItem>,
    pub services: Vec<Service>,
    pub projects: Vec<Project>,
    pub blog: Blog,
    pub announcements: Vec<Announcement>,
    pub contact: ContactInfo,
    pub socials: Vec<Social>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    pub greeting: String,
    /// Fixed text shown before the rotating word.
    pub headline_prefix: String,
    pub tagline: String,
    pub words: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct About {
    pub journey: String,
    pub skills: Vec<Skill>,
    /// Where the downloadable CV lives; hidden when empty.
    pub resume_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Proficiency, 0-100.
    pub percent: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certification {
    pub title: String,
    pub issuer: String,
    pub date: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TechCategory {
    Frontend,
    Backend,
    #[serde(rename = "Design Tools")]
    DesignTools,
    #[serde(rename = "Other Tools")]
    OtherTools,
}

impl TechCategory {
    /// Display order of the tech-stack panels.
    pub const ALL: [Self; 4] = [
        Self::Frontend,
        Self::Backend,
        Self::DesignTools,
        Self::OtherTools,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Frontend => "Frontend",
            Self::Backend => "Backend",
            Self::DesignTools => "Design Tools",
            Self::OtherTools => "Other Tools",
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Self::Frontend => 0,
            Self::Backend => 1,
            Self::DesignTools => 2,
            Self::OtherTools => 3,
        }
    }
}

impl fmt::Display for TechCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechItem {
    pub id: u32,
    pub name: String,
    pub category: TechCategory,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub github_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Blog {
    pub posts: Vec<BlogPost>,
    pub all_posts_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    pub title: String,
    pub excerpt: String,
    pub date: String,
    pub read_time: String,
    pub category: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Announcement {
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Social {
    pub label: String,
    pub url: String,
}

impl Default for Portfolio {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Portfolio {
    /// The site's own content.
    pub fn builtin() -> Self {
        Self {
            profile: Profile::default(),
            about: About::default(),
            certifications: builtin::certifications(),
            tech_stack: builtin::tech_stack(),
            services: builtin::services(),
            projects: builtin::projects(),
            blog: Blog::default(),
            announcements: builtin::announcements(),
            contact: ContactInfo::default(),
            socials: builtin::socials(),
        }
    }

    /// Content with every field empty.
    pub const fn empty() -> Self {
        Self {
            profile: Profile {
                name: String::new(),
                greeting: String::new(),
                headline_prefix: String::new(),
                tagline: String::new(),
                words: Vec::new(),
            },
            about: About {
                journey: String::new(),
                skills: Vec::new(),
                resume_url: String::new(),
            },
            certifications: Vec::new(),
            tech_stack: Vec::new(),
            services: Vec::new(),
            projects: Vec::new(),
            blog: Blog {
                posts: Vec::new(),
                all_posts_url: String::new(),
            },
            announcements: Vec::new(),
            contact: ContactInfo {
                email: String::new(),
                phone: String::new(),
                location: String::new(),
            },
            socials: Vec::new(),
        }
    }

    /// Load content from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid content JSON.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read content {}", path.display()))?;
        Self::from_json(&raw).with_context(|| format!("Invalid content {}", path.display()))
    }

    /// Parse content from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns the deserialisation error for malformed input.
    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }

    /// Items of the tech stack in `category`, in declaration order.
    pub fn tech_in(&self, category: TechCategory) -> impl Iterator<Item = &TechItem> {
        self.tech_stack
            .iter()
            .filter(move |item| item.category == category)
    }

    /// Typewriter settings for the hero headline.
    ///
    /// # Errors
    ///
    /// Fails when the profile has no words or a duration is zero.
    pub fn typewriter_config(
        &self,
        typing_speed: Duration,
        deleting_speed: Duration,
        delay_between_words: Duration,
    ) -> Result<TypewriterConfig, TypewriterError> {
        TypewriterConfig::new(
            self.profile.words.iter().cloned(),
            typing_speed,
            deleting_speed,
            delay_between_words,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_builtin_content_has_every_section() {
        let portfolio = Portfolio::builtin();
        assert_eq!(portfolio.profile.words, [" Developer", " Designer"]);
        assert_eq!(portfolio.certifications.len(), 6);
        assert_eq!(portfolio.services.len(), 6);
        assert_eq!(portfolio.projects.len(), 2);
        assert_eq!(portfolio.blog.posts.len(), 3);
        assert_eq!(portfolio.announcements.len(), 4);
        assert_eq!(portfolio.about.skills.len(), 8);
    }

    #[test]
    fn test_tech_in_filters_by_category_in_order() {
        let portfolio = Portfolio::builtin();
        let design: Vec<&str> = portfolio
            .tech_in(TechCategory::DesignTools)
            .map(|t| t.name.as_str())
            .collect();
        assert_eq!(design, ["Lunacy", "Figma"]);
        let total: usize = TechCategory::ALL
            .iter()
            .map(|c| portfolio.tech_in(*c).count())
            .sum();
        assert_eq!(total, portfolio.tech_stack.len());
    }

    #[test]
    fn test_partial_json_falls_back_to_builtin() {
        let portfolio =
            Portfolio::from_json(r#"{"profile": {"name": "Ada", "words": ["Engineer"]}}"#)
                .unwrap();
        assert_eq!(portfolio.profile.name, "Ada");
        assert_eq!(portfolio.profile.words, ["Engineer"]);
        assert_eq!(portfolio.profile.headline_prefix, "I am Web");
        assert_eq!(portfolio.services, Portfolio::builtin().services);
    }

    #[test]
    fn test_resume_url_survives_partial_about() {
        let portfolio = Portfolio::from_json(r#"{"about": {"journey": "Short"}}"#).unwrap();
        assert_eq!(portfolio.about.journey, "Short");
        assert_eq!(
            portfolio.about.resume_url,
            "/assets/resume/AlyssaJecomo_CV.pdf"
        );
        let custom =
            Portfolio::from_json(r#"{"about": {"resume_url": "https://example.com/cv.pdf"}}"#)
                .unwrap();
        assert_eq!(custom.about.resume_url, "https://example.com/cv.pdf");
    }

    #[test]
    fn test_tech_category_uses_display_names_in_json() {
        let item: TechItem =
            serde_json::from_str(r#"{"id": 1, "name": "Figma", "category": "Design Tools"}"#)
                .unwrap();
        assert_eq!(item.category, TechCategory::DesignTools);
        assert_eq!(TechCategory::OtherTools.to_string(), "Other Tools");
    }

    #[test]
    fn test_load_reports_path_on_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("content.json");
        std::fs::write(&path, "{ not json").unwrap();
        let err = Portfolio::load(&path).unwrap_err();
        assert!(format!("{err:#}").contains("content.json"));
    }

    #[test]
    fn test_load_missing_file_fails() {
        let dir = tempdir().unwrap();
        assert!(Portfolio::load(&dir.path().join("missing.json")).is_err());
    }

    #[test]
    fn test_empty_words_fail_typewriter_config() {
        let mut portfolio = Portfolio::builtin();
        portfolio.profile.words.clear();
        let ms = Duration::from_millis;
        assert!(
            portfolio
                .typewriter_config(ms(100), ms(50), ms(2000))
                .is_err()
        );
    }
}
