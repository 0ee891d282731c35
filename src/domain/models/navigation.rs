/// Entry of the main navigation bar
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavItem {
    pub label: &'static str,
    pub path: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FooterLink {
    pub label: &'static str,
    pub path: &'static str,
}

/// Titled column of footer links
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FooterGroup {
    pub category: &'static str,
    pub links: &'static [FooterLink],
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SocialLink {
    pub glyph: &'static str,
    pub href: &'static str,
    pub label: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { label: "Home", path: "/" },
    NavItem { label: "Services", path: "/services" },
    NavItem { label: "Training", path: "/training" },
    NavItem { label: "Expertise", path: "/expertise" },
    NavItem { label: "Contact", path: "/contact" },
];

pub const FOOTER_GROUPS: &[FooterGroup] = &[
    FooterGroup {
        category: "Company",
        links: &[
            FooterLink { label: "About Us", path: "/about" },
            FooterLink { label: "Our Team", path: "/team" },
            FooterLink { label: "Careers", path: "/careers" },
            FooterLink { label: "News", path: "/news" },
        ],
    },
    FooterGroup {
        category: "Services",
        links: &[
            FooterLink { label: "Web Development", path: "/services" },
            FooterLink { label: "AI Solutions", path: "/services" },
            FooterLink { label: "Cloud Services", path: "/services" },
            FooterLink { label: "Consulting", path: "/services" },
        ],
    },
    FooterGroup {
        category: "Support",
        links: &[
            FooterLink { label: "Help Center", path: "/help" },
            FooterLink { label: "Documentation", path: "/docs" },
            FooterLink { label: "Contact Us", path: "/contact" },
            FooterLink { label: "Privacy Policy", path: "/privacy" },
        ],
    },
];

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { glyph: "facebook", href: "#", label: "Facebook" },
    SocialLink { glyph: "twitter", href: "#", label: "Twitter" },
    SocialLink { glyph: "linkedin", href: "#", label: "LinkedIn" },
    SocialLink { glyph: "instagram", href: "#", label: "Instagram" },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::Glyph;

    #[test]
    fn test_nav_paths_are_absolute() {
        assert_eq!(NAV_ITEMS.len(), 5);
        assert!(NAV_ITEMS.iter().all(|item| item.path.starts_with('/')));
    }

    #[test]
    fn test_footer_groups() {
        let categories: Vec<_> = FOOTER_GROUPS.iter().map(|g| g.category).collect();
        assert_eq!(categories, vec!["Company", "Services", "Support"]);
        assert!(FOOTER_GROUPS.iter().all(|g| g.links.len() == 4));
    }

    #[test]
    fn test_social_glyphs_resolve() {
        for link in SOCIAL_LINKS {
            assert!(Glyph::from_name(link.glyph).is_some(), "{}", link.glyph);
        }
    }
}
