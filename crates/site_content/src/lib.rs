//! Static portfolio content model, section identifiers, and the theme registry.
//!
//! This crate is the content collaborator consumed by the console engine: it supplies
//! biography, work history, skills, projects, contact, and resume records, plus the fixed
//! closed sets of section and theme identifiers. Presentation of the data as renderable
//! lines lives in [`render`]; applying theme colors belongs to hosts.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod render;
pub mod themes;

mod data;

use serde::{Deserialize, Serialize};

pub use data::default_site;

/// Complete static site configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Personal identity and biography.
    pub personal: PersonalInfo,
    /// Work history, most recent first.
    pub experience: Vec<Experience>,
    /// Skill categories in display order.
    pub skills: Vec<SkillCategory>,
    /// Personal projects.
    pub projects: Vec<Project>,
    /// Professional certifications.
    pub certifications: Vec<Certification>,
    /// Resume file record.
    pub resume: ResumeInfo,
    /// Contact and social links.
    pub social: SocialLinks,
    /// Product name and version reported by `uname`.
    pub product: ProductInfo,
}

impl SiteConfig {
    /// Derived virtual host name, such as `jordan-reyes-portfolio`.
    pub fn hostname(&self) -> String {
        let kebab = self
            .personal
            .name
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("-");
        format!("{kebab}-portfolio")
    }
}

/// Personal identity and biography.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalInfo {
    /// Full display name.
    pub name: String,
    /// Professional title.
    pub title: String,
    /// One-line tagline.
    pub tagline: String,
    /// Location string.
    pub location: String,
    /// Biography paragraphs.
    pub bio: Vec<String>,
    /// Interest bullet points.
    pub interests: Vec<String>,
}

/// One work-history entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    /// Employer name.
    pub company: String,
    /// Role title.
    pub role: String,
    /// Human-readable period, such as `2021 - Present`.
    pub display_period: String,
    /// Work location.
    pub location: String,
    /// Description bullet points.
    pub description: Vec<String>,
    /// Technologies used.
    pub technologies: Vec<String>,
}

/// Proficiency level for a skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SkillLevel {
    /// Deep production expertise.
    Expert,
    /// Solid working proficiency.
    Proficient,
    /// Familiarity without production depth.
    Familiar,
}

/// One named skill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    /// Skill name.
    pub name: String,
    /// Proficiency level.
    pub level: SkillLevel,
}

/// A titled group of skills.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCategory {
    /// Category title.
    pub title: String,
    /// Skills in display order.
    pub items: Vec<Skill>,
}

/// One portfolio project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Project name.
    pub name: String,
    /// Short tagline.
    pub tagline: String,
    /// Technology list.
    pub tech: Vec<String>,
    /// Year label.
    pub year: String,
}

/// One professional certification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certification {
    /// Certification name.
    pub name: String,
    /// Issuing organization.
    pub issuer: String,
    /// Year obtained.
    pub year: String,
}

/// Resume file record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeInfo {
    /// Download filename.
    pub filename: String,
    /// Last-updated label, `YYYY-MM`.
    pub last_updated: String,
}

/// Contact and social links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinks {
    /// Contact email.
    pub email: String,
    /// GitHub profile URL.
    pub github: String,
    /// LinkedIn profile URL.
    pub linkedin: String,
}

/// Product name and version reported by `uname`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductInfo {
    /// Product name.
    pub name: String,
    /// Semantic version string.
    pub version: String,
}

/// Fixed closed set of content section identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionId {
    /// Biography and interests.
    About,
    /// Work history.
    Experience,
    /// Skill categories.
    Skills,
    /// Portfolio projects.
    Projects,
    /// Contact and social links.
    Contact,
    /// Resume download pointer.
    Resume,
    /// Certifications; hidden from the default listing.
    Certifications,
}

impl SectionId {
    /// Every section, listing-visible first.
    pub const ALL: [SectionId; 7] = [
        SectionId::About,
        SectionId::Experience,
        SectionId::Skills,
        SectionId::Projects,
        SectionId::Contact,
        SectionId::Resume,
        SectionId::Certifications,
    ];

    /// Sections shown by a default `ls`.
    pub const VISIBLE: [SectionId; 6] = [
        SectionId::About,
        SectionId::Experience,
        SectionId::Skills,
        SectionId::Projects,
        SectionId::Contact,
        SectionId::Resume,
    ];

    /// Canonical identifier string.
    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::About => "about",
            SectionId::Experience => "experience",
            SectionId::Skills => "skills",
            SectionId::Projects => "projects",
            SectionId::Contact => "contact",
            SectionId::Resume => "resume",
            SectionId::Certifications => "certifications",
        }
    }

    /// One-line description used by long listings.
    pub fn description(self) -> &'static str {
        match self {
            SectionId::About => "Biography and interests",
            SectionId::Experience => "Work history",
            SectionId::Skills => "Technical skills by category",
            SectionId::Projects => "Personal projects",
            SectionId::Contact => "Contact and social links",
            SectionId::Resume => "Resume download",
            SectionId::Certifications => "Professional certifications",
        }
    }

    /// Resolves a lowercase identifier to a section.
    pub fn parse(raw: &str) -> Option<SectionId> {
        SectionId::ALL
            .into_iter()
            .find(|section| section.as_str() == raw)
    }
}

/// Listing-visible section identifier strings, in display order.
pub fn section_names() -> Vec<&'static str> {
    SectionId::VISIBLE.iter().map(|s| s.as_str()).collect()
}

/// Every section identifier string, including hidden ones.
pub fn all_section_names() -> Vec<&'static str> {
    SectionId::ALL.iter().map(|s| s.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hostname_is_kebab_cased() {
        let config = default_site();
        let hostname = config.hostname();
        assert!(hostname.ends_with("-portfolio"));
        assert!(!hostname.contains(' '));
        assert_eq!(hostname, hostname.to_lowercase());
    }

    #[test]
    fn section_ids_round_trip() {
        for section in SectionId::ALL {
            assert_eq!(SectionId::parse(section.as_str()), Some(section));
        }
        assert_eq!(SectionId::parse("downloads"), None);
    }

    #[test]
    fn certifications_are_hidden_from_default_listing() {
        assert!(!section_names().contains(&"certifications"));
        assert!(all_section_names().contains(&"certifications"));
    }
}
