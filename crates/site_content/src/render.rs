//! Formats site sections as renderable styled lines for the console.

use console_shell_contract::{TextLine, TextSpan, TextStyle};

use crate::{SectionId, SiteConfig, SkillLevel};

/// Renders one section of `config` as styled lines.
pub fn section_lines(config: &SiteConfig, section: SectionId) -> Vec<TextLine> {
    match section {
        SectionId::About => about_lines(config),
        SectionId::Experience => experience_lines(config),
        SectionId::Skills => skills_lines(config),
        SectionId::Projects => projects_lines(config),
        SectionId::Contact => contact_lines(config),
        SectionId::Resume => resume_lines(config),
        SectionId::Certifications => certification_lines(config),
    }
}

fn heading(text: &str) -> TextLine {
    TextLine::styled(TextStyle::Prompt, text)
}

fn labeled(label: &str, value: &str) -> TextLine {
    TextLine::new(vec![
        TextSpan::styled(TextStyle::Prompt, format!("{label:<10}")),
        TextSpan::plain(value),
    ])
}

fn bullet(text: &str) -> TextLine {
    TextLine::new(vec![
        TextSpan::styled(TextStyle::Muted, "  - "),
        TextSpan::plain(text),
    ])
}

fn about_lines(config: &SiteConfig) -> Vec<TextLine> {
    let mut lines = vec![heading("About")];
    for paragraph in &config.personal.bio {
        lines.push(TextLine::plain(paragraph.clone()));
    }
    lines.push(TextLine::blank());
    lines.push(heading("Interests"));
    for interest in &config.personal.interests {
        lines.push(bullet(interest));
    }
    lines
}

fn experience_lines(config: &SiteConfig) -> Vec<TextLine> {
    let mut lines = Vec::new();
    for (index, entry) in config.experience.iter().enumerate() {
        if index > 0 {
            lines.push(TextLine::blank());
        }
        lines.push(TextLine::new(vec![
            TextSpan::styled(TextStyle::Prompt, entry.role.clone()),
            TextSpan::styled(TextStyle::Muted, " @ "),
            TextSpan::styled(TextStyle::Link, entry.company.clone()),
        ]));
        lines.push(TextLine::styled(
            TextStyle::Muted,
            format!("{} | {}", entry.display_period, entry.location),
        ));
        for item in &entry.description {
            lines.push(bullet(item));
        }
        lines.push(TextLine::new(vec![
            TextSpan::styled(TextStyle::Muted, "  tech: "),
            TextSpan::styled(TextStyle::Accent, entry.technologies.join(", ")),
        ]));
    }
    lines
}

fn skills_lines(config: &SiteConfig) -> Vec<TextLine> {
    let mut lines = Vec::new();
    for (index, category) in config.skills.iter().enumerate() {
        if index > 0 {
            lines.push(TextLine::blank());
        }
        lines.push(heading(&category.title));
        for item in &category.items {
            let level = match item.level {
                SkillLevel::Expert => "expert",
                SkillLevel::Proficient => "proficient",
                SkillLevel::Familiar => "familiar",
            };
            lines.push(TextLine::new(vec![
                TextSpan::plain(format!("  {:<28}", item.name)),
                TextSpan::styled(TextStyle::Muted, level),
            ]));
        }
    }
    lines
}

fn projects_lines(config: &SiteConfig) -> Vec<TextLine> {
    if config.projects.is_empty() {
        return vec![TextLine::styled(
            TextStyle::Muted,
            "Projects section coming soon...",
        )];
    }
    let mut lines = Vec::new();
    for (index, project) in config.projects.iter().enumerate() {
        if index > 0 {
            lines.push(TextLine::blank());
        }
        lines.push(TextLine::new(vec![
            TextSpan::styled(TextStyle::Prompt, project.name.clone()),
            TextSpan::styled(TextStyle::Muted, format!("  ({})", project.year)),
        ]));
        lines.push(TextLine::plain(format!("  {}", project.tagline)));
        lines.push(TextLine::new(vec![
            TextSpan::styled(TextStyle::Muted, "  tech: "),
            TextSpan::styled(TextStyle::Accent, project.tech.join(", ")),
        ]));
    }
    lines
}

fn contact_lines(config: &SiteConfig) -> Vec<TextLine> {
    vec![
        labeled("Email:", &config.social.email),
        labeled("GitHub:", trim_scheme(&config.social.github)),
        labeled("LinkedIn:", trim_scheme(&config.social.linkedin)),
    ]
}

fn resume_lines(config: &SiteConfig) -> Vec<TextLine> {
    vec![
        TextLine::plain("Download my resume:"),
        TextLine::styled(TextStyle::Link, format!("  {}", config.resume.filename)),
        TextLine::styled(
            TextStyle::Muted,
            format!("Last updated: {}", config.resume.last_updated),
        ),
        TextLine::new(vec![
            TextSpan::styled(TextStyle::Muted, "Or use the "),
            TextSpan::styled(TextStyle::Success, "export"),
            TextSpan::styled(TextStyle::Muted, " command to download directly."),
        ]),
    ]
}

fn certification_lines(config: &SiteConfig) -> Vec<TextLine> {
    let mut lines = Vec::new();
    for cert in &config.certifications {
        lines.push(TextLine::new(vec![
            TextSpan::styled(TextStyle::Prompt, cert.name.clone()),
            TextSpan::styled(TextStyle::Muted, format!("  {} ({})", cert.issuer, cert.year)),
        ]));
    }
    lines
}

fn trim_scheme(url: &str) -> &str {
    url.strip_prefix("https://").unwrap_or(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::default_site;

    #[test]
    fn about_section_contains_bio_text() {
        let config = default_site();
        let text = section_lines(&config, SectionId::About)
            .iter()
            .map(TextLine::text)
            .collect::<Vec<_>>()
            .join("\n");
        assert!(text.contains(&config.personal.bio[0]));
        assert!(text.contains("Interests"));
    }

    #[test]
    fn contact_section_strips_url_schemes() {
        let config = default_site();
        let text = section_lines(&config, SectionId::Contact)
            .iter()
            .map(TextLine::text)
            .collect::<Vec<_>>()
            .join("\n");
        assert!(!text.contains("https://"));
        assert!(text.contains(&config.social.email));
    }

    #[test]
    fn every_section_renders_nonempty() {
        let config = default_site();
        for section in SectionId::ALL {
            assert!(
                !section_lines(&config, section).is_empty(),
                "section {} rendered empty",
                section.as_str()
            );
        }
    }
}
