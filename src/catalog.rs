//! Authored page content.
//!
//! Everything here is `'static` and ordered the way it is rendered. The
//! frontend reads [`CATALOG`] at render time and the native host validates it
//! once at startup.

use thiserror::Error;

/// In-page section anchors, in page order.
pub const SECTION_ANCHORS: [&str; 5] = ["home", "about", "service", "portfolio", "contact"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ServiceIcon {
    Palette,
    Code,
    Terminal,
    Masonry,
}

impl ServiceIcon {
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Palette => "ri-palette-line",
            Self::Code => "ri-code-s-slash-line",
            Self::Terminal => "ri-terminal-box-line",
            Self::Masonry => "ri-layout-masonry-line",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SocialKind {
    GitHub,
    LinkedIn,
    WhatsApp,
    Telegram,
    Phone,
}

impl SocialKind {
    pub fn class_name(self) -> &'static str {
        match self {
            Self::GitHub => "ri-github-fill",
            Self::LinkedIn => "ri-linkedin-fill",
            Self::WhatsApp => "ri-whatsapp-fill",
            Self::Telegram => "ri-telegram-line",
            Self::Phone => "ri-phone-line",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::GitHub => "GitHub",
            Self::LinkedIn => "LinkedIn",
            Self::WhatsApp => "WhatsApp",
            Self::Telegram => "Telegram",
            Self::Phone => "Phone",
        }
    }

    /// Profile links leave the page in a new tab; chat and telephone deep
    /// links are handed to the host environment in place.
    pub fn opens_in_new_tab(self) -> bool {
        matches!(self, Self::GitHub | Self::LinkedIn | Self::WhatsApp)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ServiceEntry {
    pub icon: ServiceIcon,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExperienceEntry {
    pub year: &'static str,
    pub role: &'static str,
    pub company: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimelineSide {
    Left,
    Right,
}

impl TimelineSide {
    /// Even positions sit on the left, starting at index 0.
    pub fn for_index(index: usize) -> Self {
        if index % 2 == 0 {
            Self::Left
        } else {
            Self::Right
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PortfolioEntry {
    pub image_source: &'static str,
    pub title: &'static str,
    pub tags: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub kind: SocialKind,
    pub target_url: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkillEntry {
    pub skill: &'static str,
    pub percentage: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub anchor: &'static str,
}

impl NavLink {
    pub fn href(self) -> String {
        format!("#{}", self.anchor)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub brand: &'static str,
    pub greeting: &'static str,
    pub badge: &'static str,
    pub roles: &'static [&'static str],
    pub description: &'static str,
    pub cv_path: &'static str,
    pub hero_image: &'static str,
    pub about_image: &'static str,
    pub footer: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Catalog {
    pub profile: Profile,
    pub nav_links: &'static [NavLink],
    pub skills: &'static [SkillEntry],
    pub services: &'static [ServiceEntry],
    pub experience: &'static [ExperienceEntry],
    pub portfolio: &'static [PortfolioEntry],
    pub social_links: &'static [SocialLink],
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("catalog collection `{0}` is empty")]
    EmptyCollection(&'static str),
    #[error("profile has no typewriter roles")]
    NoRoles,
    #[error("portfolio entry `{title}` has no tags")]
    UntaggedPortfolioEntry { title: &'static str },
    #[error("skill `{skill}` claims {percentage}%, above 100")]
    SkillOutOfRange { skill: &'static str, percentage: u8 },
    #[error("nav link `{label}` targets unknown section `{anchor}`")]
    UnknownAnchor {
        label: &'static str,
        anchor: &'static str,
    },
}

impl Catalog {
    pub fn validate(&self) -> Result<(), CatalogError> {
        ensure_non_empty("nav_links", self.nav_links)?;
        ensure_non_empty("skills", self.skills)?;
        ensure_non_empty("services", self.services)?;
        ensure_non_empty("experience", self.experience)?;
        ensure_non_empty("portfolio", self.portfolio)?;
        ensure_non_empty("social_links", self.social_links)?;

        if self.profile.roles.is_empty() {
            return Err(CatalogError::NoRoles);
        }

        if let Some(entry) = self.portfolio.iter().find(|entry| entry.tags.is_empty()) {
            return Err(CatalogError::UntaggedPortfolioEntry { title: entry.title });
        }

        if let Some(entry) = self.skills.iter().find(|entry| entry.percentage > 100) {
            return Err(CatalogError::SkillOutOfRange {
                skill: entry.skill,
                percentage: entry.percentage,
            });
        }

        if let Some(link) = self
            .nav_links
            .iter()
            .find(|link| !SECTION_ANCHORS.contains(&link.anchor))
        {
            return Err(CatalogError::UnknownAnchor {
                label: link.label,
                anchor: link.anchor,
            });
        }

        Ok(())
    }
}

fn ensure_non_empty<T>(name: &'static str, items: &[T]) -> Result<(), CatalogError> {
    if items.is_empty() {
        Err(CatalogError::EmptyCollection(name))
    } else {
        Ok(())
    }
}

pub static CATALOG: Catalog = Catalog {
    profile: Profile {
        name: "Pragadeesh",
        brand: "pragadeesh",
        greeting: "HELLO, I'M",
        badge: "Available for Work",
        roles: &["Frontend Developer", "Freelancer"],
        description: "I am a professional Freelancer and Developer. I build beautiful digital experiences and automate business workflows with Google App Script.",
        cv_path: "/assets/Pragadeesh_CV.png",
        hero_image: "/assets/pragadeesh_new.png",
        about_image: "/assets/pragadeesh2.png",
        footer: "Copyright © 2026. Designed & Built by Pragadeesh.",
    },
    nav_links: &[
        NavLink { label: "Home", anchor: "home" },
        NavLink { label: "About", anchor: "about" },
        NavLink { label: "Services", anchor: "service" },
        NavLink { label: "Portfolio", anchor: "portfolio" },
        NavLink { label: "Contact", anchor: "contact" },
    ],
    skills: &[
        SkillEntry { skill: "Frontend Development (HTML/CSS/JS)", percentage: 95 },
        SkillEntry { skill: "Google App Script & Automation", percentage: 92 },
        SkillEntry { skill: "React.js & Redux", percentage: 90 },
        SkillEntry { skill: "Freelancing & Client Management", percentage: 88 },
    ],
    services: &[
        ServiceEntry {
            icon: ServiceIcon::Palette,
            title: "UI/UX Design",
            description: "Crafting intuitive and aesthetic user interfaces that drive engagement and satisfaction.",
        },
        ServiceEntry {
            icon: ServiceIcon::Code,
            title: "Frontend Developer",
            description: "Building responsive web apps with React, standard semantic HTML5, and modern CSS.",
        },
        ServiceEntry {
            icon: ServiceIcon::Terminal,
            title: "Google App Script",
            description: "Automating Google Workspace (Sheet, Docs, Forms) to save time and streamline workflows.",
        },
        ServiceEntry {
            icon: ServiceIcon::Masonry,
            title: "Freelance Services",
            description: "Delivering high-quality web solutions on time and within budget for global clients.",
        },
    ],
    experience: &[
        ExperienceEntry {
            year: "2023 - Present",
            role: "Frontend Developer",
            company: "Freelance",
            description: "Building modern web applications for diverse clients using React and Tailwind.",
        },
        ExperienceEntry {
            year: "2022 - 2023",
            role: "Junior Web Designer",
            company: "Creative Studio",
            description: "Assisted in designing layouts and implementing responsive UI components.",
        },
        ExperienceEntry {
            year: "2021 - 2022",
            role: "Intern",
            company: "Tech Solutions",
            description: "Learned the fundamentals of web development and contributed to internal tools.",
        },
    ],
    portfolio: &[
        PortfolioEntry {
            image_source: "/assets/b1.png",
            title: "E-Commerce Dashboard",
            tags: &["React", "Chart.js"],
        },
        PortfolioEntry {
            image_source: "/assets/i3.png",
            title: "SaaS Platform",
            tags: &["Next.js", "Tailwind"],
        },
        PortfolioEntry {
            image_source: "/assets/i4.png",
            title: "Portfolio V1",
            tags: &["Legacy", "CSS"],
        },
        PortfolioEntry {
            image_source: "/assets/i5.png",
            title: "Future AI System",
            tags: &["OpenAI", "React"],
        },
    ],
    social_links: &[
        SocialLink {
            kind: SocialKind::GitHub,
            target_url: "https://github.com/pragadeesh1024",
        },
        SocialLink {
            kind: SocialKind::LinkedIn,
            target_url: "https://www.linkedin.com/in/pragadeesh-waran-t-b732212a3",
        },
        SocialLink {
            kind: SocialKind::WhatsApp,
            target_url: "https://wa.me/917094985957",
        },
        SocialLink {
            kind: SocialKind::Telegram,
            target_url: "https://t.me/Potter_1024",
        },
        SocialLink {
            kind: SocialKind::Phone,
            target_url: "tel:+917094985957",
        },
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shipped_catalog_validates() {
        assert_eq!(CATALOG.validate(), Ok(()));
    }

    #[test]
    fn timeline_sides_alternate_starting_left() {
        let sides: Vec<_> = (0..4).map(TimelineSide::for_index).collect();
        assert_eq!(
            sides,
            vec![
                TimelineSide::Left,
                TimelineSide::Right,
                TimelineSide::Left,
                TimelineSide::Right
            ]
        );
    }

    #[test]
    fn portfolio_tags_keep_authored_order() {
        let first = CATALOG.portfolio[0];
        assert_eq!(first.tags, &["React", "Chart.js"]);
    }

    #[test]
    fn nav_links_cover_every_section_in_page_order() {
        let anchors: Vec<_> = CATALOG.nav_links.iter().map(|link| link.anchor).collect();
        assert_eq!(anchors, SECTION_ANCHORS.to_vec());
        assert_eq!(CATALOG.nav_links[2].href(), "#service");
    }

    #[test]
    fn every_referenced_asset_ships_with_the_page() {
        let profile = CATALOG.profile;
        let paths = [profile.cv_path, profile.hero_image, profile.about_image]
            .into_iter()
            .chain(CATALOG.portfolio.iter().map(|entry| entry.image_source));

        let root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));
        for path in paths {
            let file = root.join(path.trim_start_matches('/'));
            assert!(file.is_file(), "missing asset {}", file.display());
        }
    }

    #[test]
    fn only_profile_links_open_in_new_tab() {
        let new_tab: Vec<_> = CATALOG
            .social_links
            .iter()
            .map(|link| (link.kind, link.kind.opens_in_new_tab()))
            .collect();
        assert_eq!(
            new_tab,
            vec![
                (SocialKind::GitHub, true),
                (SocialKind::LinkedIn, true),
                (SocialKind::WhatsApp, true),
                (SocialKind::Telegram, false),
                (SocialKind::Phone, false),
            ]
        );
    }

    #[test]
    fn empty_services_are_rejected() {
        let catalog = Catalog {
            services: &[],
            ..CATALOG
        };
        assert_eq!(
            catalog.validate(),
            Err(CatalogError::EmptyCollection("services"))
        );
    }

    #[test]
    fn untagged_portfolio_entry_is_rejected() {
        let catalog = Catalog {
            portfolio: &[PortfolioEntry {
                image_source: "/assets/x.png",
                title: "Bare",
                tags: &[],
            }],
            ..CATALOG
        };
        assert_eq!(
            catalog.validate(),
            Err(CatalogError::UntaggedPortfolioEntry { title: "Bare" })
        );
    }

    #[test]
    fn skill_above_one_hundred_is_rejected() {
        let catalog = Catalog {
            skills: &[SkillEntry {
                skill: "Overconfidence",
                percentage: 120,
            }],
            ..CATALOG
        };
        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::SkillOutOfRange { percentage: 120, .. })
        ));
    }

    #[test]
    fn nav_link_to_missing_section_is_rejected() {
        let catalog = Catalog {
            nav_links: &[NavLink {
                label: "Services",
                anchor: "services",
            }],
            ..CATALOG
        };
        assert_eq!(
            catalog.validate(),
            Err(CatalogError::UnknownAnchor {
                label: "Services",
                anchor: "services",
            })
        );
    }

    #[test]
    fn profile_without_roles_is_rejected() {
        let catalog = Catalog {
            profile: Profile {
                roles: &[],
                ..CATALOG.profile
            },
            ..CATALOG
        };
        assert_eq!(catalog.validate(), Err(CatalogError::NoRoles));
    }
}
