//! Static site data. Edit this file to change what the console serves.

use crate::{
    Certification, Experience, PersonalInfo, ProductInfo, Project, ResumeInfo, SiteConfig, Skill,
    SkillCategory, SkillLevel, SocialLinks,
};

fn skill(name: &str, level: SkillLevel) -> Skill {
    Skill {
        name: name.to_string(),
        level,
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

/// Builds the default site configuration served by the console.
pub fn default_site() -> SiteConfig {
    SiteConfig {
        personal: PersonalInfo {
            name: "Jordan Reyes".to_string(),
            title: "Staff Software Engineer".to_string(),
            tagline: "Building reliable systems and the tools that keep them honest".to_string(),
            location: "Remote (Pacific Northwest)".to_string(),
            bio: strings(&[
                "Staff software engineer focused on backend platforms, developer tooling, \
                 and the unglamorous plumbing that keeps products fast and dependable.",
                "A generalist with production experience across observability, payments, \
                 and infrastructure automation.",
                "Happiest when deleting code, writing design docs that people actually \
                 read, and pairing with engineers who want to level up.",
            ]),
            interests: strings(&[
                "Distributed systems",
                "Developer experience",
                "Mentoring",
                "Trail running",
                "Mechanical keyboards",
            ]),
        },
        experience: vec![
            Experience {
                company: "Lumenware".to_string(),
                role: "Staff Software Engineer".to_string(),
                display_period: "Mar 2022 - Present".to_string(),
                location: "Remote".to_string(),
                description: strings(&[
                    "Own the ingestion pipeline for the observability platform, sustaining \
                     two million events per second",
                    "Led the migration from a monolithic collector to a sharded service mesh",
                    "Mentor a team of six engineers and run the architecture review forum",
                ]),
                technologies: strings(&["Rust", "Kafka", "PostgreSQL", "Kubernetes", "GCP"]),
            },
            Experience {
                company: "Brightline Pay".to_string(),
                role: "Senior Software Engineer".to_string(),
                display_period: "Jun 2018 - Mar 2022".to_string(),
                location: "Seattle, WA".to_string(),
                description: strings(&[
                    "Built the ledger reconciliation service handling settlement across \
                     four card networks",
                    "Cut batch close times from hours to minutes by reworking the job \
                     scheduler",
                    "Introduced contract testing between the payments core and partner \
                     integrations",
                ]),
                technologies: strings(&["Go", "PostgreSQL", "Redis", "AWS", "Terraform"]),
            },
            Experience {
                company: "Fernwood Robotics".to_string(),
                role: "Software Engineer".to_string(),
                display_period: "Jul 2015 - Jun 2018".to_string(),
                location: "Portland, OR".to_string(),
                description: strings(&[
                    "Wrote telemetry firmware bridges and the fleet dashboard for warehouse \
                     robots",
                    "Shipped the over-the-air update channel used by every deployed unit",
                ]),
                technologies: strings(&["C++", "Python", "MQTT", "InfluxDB"]),
            },
        ],
        skills: vec![
            SkillCategory {
                title: "Languages".to_string(),
                items: vec![
                    skill("Rust", SkillLevel::Expert),
                    skill("Go", SkillLevel::Expert),
                    skill("Python", SkillLevel::Proficient),
                    skill("SQL", SkillLevel::Expert),
                    skill("TypeScript", SkillLevel::Proficient),
                ],
            },
            SkillCategory {
                title: "Infrastructure".to_string(),
                items: vec![
                    skill("Kubernetes", SkillLevel::Expert),
                    skill("Kafka", SkillLevel::Expert),
                    skill("Terraform", SkillLevel::Proficient),
                    skill("GCP", SkillLevel::Expert),
                    skill("AWS", SkillLevel::Proficient),
                ],
            },
            SkillCategory {
                title: "Databases".to_string(),
                items: vec![
                    skill("PostgreSQL", SkillLevel::Expert),
                    skill("Redis", SkillLevel::Proficient),
                    skill("ClickHouse", SkillLevel::Familiar),
                ],
            },
            SkillCategory {
                title: "Practices".to_string(),
                items: vec![
                    skill("Incident response", SkillLevel::Expert),
                    skill("Design reviews", SkillLevel::Expert),
                    skill("Observability", SkillLevel::Expert),
                    skill("Technical mentoring", SkillLevel::Proficient),
                ],
            },
        ],
        projects: vec![
            Project {
                name: "chartwell".to_string(),
                tagline: "Streaming aggregation engine with SQL-ish windowing".to_string(),
                tech: strings(&["Rust", "Arrow", "Kafka"]),
                year: "2024".to_string(),
            },
            Project {
                name: "ledgerline".to_string(),
                tagline: "Double-entry bookkeeping library with strict invariants".to_string(),
                tech: strings(&["Rust", "PostgreSQL"]),
                year: "2023".to_string(),
            },
            Project {
                name: "trailmix".to_string(),
                tagline: "GPX route planner for long trail runs".to_string(),
                tech: strings(&["TypeScript", "MapLibre"]),
                year: "2021".to_string(),
            },
        ],
        certifications: vec![
            Certification {
                name: "CKA: Certified Kubernetes Administrator".to_string(),
                issuer: "Cloud Native Computing Foundation".to_string(),
                year: "2022".to_string(),
            },
            Certification {
                name: "Google Cloud Professional Cloud Architect".to_string(),
                issuer: "Google Cloud".to_string(),
                year: "2021".to_string(),
            },
        ],
        resume: ResumeInfo {
            filename: "Jordan_Reyes_Resume.pdf".to_string(),
            last_updated: "2026-05".to_string(),
        },
        social: SocialLinks {
            email: "jordan@jordanreyes.dev".to_string(),
            github: "https://github.com/jordanreyes".to_string(),
            linkedin: "https://www.linkedin.com/in/jordanreyes".to_string(),
        },
        product: ProductInfo {
            name: "console-portfolio".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
    }
}
