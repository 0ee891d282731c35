//! Display records for the home, services and expertise pages

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Testimonial {
    pub name: &'static str,
    pub position: &'static str,
    pub content: &'static str,
    pub avatar: &'static str,
    pub rating: u8,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stat {
    pub glyph: &'static str,
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ServiceOffering {
    pub glyph: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JourneyMilestone {
    pub year: u16,
    pub title: &'static str,
    pub description: &'static str,
    pub achievement: &'static str,
}

/// Competency shown as a progress ring; `tone` picks the CSS colour modifier
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Skill {
    pub name: &'static str,
    pub percentage: u8,
    pub tone: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Achievement {
    pub glyph: &'static str,
    pub value: &'static str,
    pub label: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Sarah Johnson",
        position: "CEO, TechCorp",
        content: "FutureTech transformed our business with cutting-edge AI solutions. Incredible results!",
        avatar: "https://images.unsplash.com/photo-1494790108755-2616b612b786?w=150&h=150&fit=crop&crop=face",
        rating: 5,
    },
    Testimonial {
        name: "Michael Chen",
        position: "CTO, InnovateLabs",
        content: "The team's expertise in cloud architecture saved us months of development time.",
        avatar: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=150&h=150&fit=crop&crop=face",
        rating: 5,
    },
    Testimonial {
        name: "Emma Williams",
        position: "Director, FinanceFlow",
        content: "Outstanding training programs that elevated our entire development team's skills.",
        avatar: "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=150&h=150&fit=crop&crop=face",
        rating: 5,
    },
];

pub const HOME_STATS: &[Stat] = &[
    Stat { glyph: "users", value: "500+", label: "Happy Clients" },
    Stat { glyph: "award", value: "98%", label: "Success Rate" },
    Stat { glyph: "trending-up", value: "50M+", label: "Revenue Generated" },
    Stat { glyph: "star", value: "4.9/5", label: "Client Rating" },
];

pub const SERVICES: &[ServiceOffering] = &[
    ServiceOffering {
        glyph: "brain",
        title: "AI & Machine Learning",
        description: "Harness the power of artificial intelligence to automate processes, gain insights, and drive innovation across your organization.",
        features: &["Custom AI Models", "Natural Language Processing", "Computer Vision", "Predictive Analytics"],
    },
    ServiceOffering {
        glyph: "cloud",
        title: "Cloud Architecture",
        description: "Scalable, secure, and cost-effective cloud solutions that grow with your business and ensure maximum uptime.",
        features: &["AWS/Azure/GCP", "Microservices", "Serverless Computing", "DevOps Integration"],
    },
    ServiceOffering {
        glyph: "code",
        title: "Custom Development",
        description: "Tailored software solutions built with cutting-edge technologies to meet your unique business requirements.",
        features: &["Web Applications", "API Development", "Database Design", "System Integration"],
    },
    ServiceOffering {
        glyph: "shield",
        title: "Cybersecurity",
        description: "Comprehensive security solutions to protect your digital assets and ensure compliance with industry standards.",
        features: &["Security Audits", "Penetration Testing", "Compliance Management", "Incident Response"],
    },
    ServiceOffering {
        glyph: "smartphone",
        title: "Mobile Solutions",
        description: "Native and cross-platform mobile applications that deliver exceptional user experiences across all devices.",
        features: &["iOS Development", "Android Development", "React Native", "Flutter"],
    },
    ServiceOffering {
        glyph: "bar-chart",
        title: "Data Analytics",
        description: "Transform raw data into actionable insights with advanced analytics and business intelligence solutions.",
        features: &["Data Warehousing", "Business Intelligence", "Real-time Analytics", "Data Visualization"],
    },
];

pub const MILESTONES: &[JourneyMilestone] = &[
    JourneyMilestone {
        year: 2018,
        title: "Company Founded",
        description: "Started with a vision to revolutionize technology solutions for businesses worldwide.",
        achievement: "First AI project completed",
    },
    JourneyMilestone {
        year: 2020,
        title: "Global Expansion",
        description: "Extended our services internationally, establishing partnerships in 15+ countries.",
        achievement: "100+ successful projects",
    },
    JourneyMilestone {
        year: 2022,
        title: "Innovation Leadership",
        description: "Launched cutting-edge blockchain and AI solutions, setting industry standards.",
        achievement: "Industry recognition awards",
    },
    JourneyMilestone {
        year: 2024,
        title: "Future Forward",
        description: "Leading the next wave of digital transformation with quantum computing and advanced AI.",
        achievement: "500+ happy clients",
    },
];

pub const SKILLS: &[Skill] = &[
    Skill { name: "Artificial Intelligence", percentage: 95, tone: "blue" },
    Skill { name: "Cloud Architecture", percentage: 90, tone: "purple" },
    Skill { name: "Blockchain Technology", percentage: 98, tone: "green" },
    Skill { name: "Data Analytics", percentage: 92, tone: "orange" },
];

pub const ACHIEVEMENTS: &[Achievement] = &[
    Achievement { glyph: "trending-up", value: "500+", label: "Projects Completed" },
    Achievement { glyph: "users", value: "150+", label: "Expert Team Members" },
    Achievement { glyph: "award", value: "25+", label: "Industry Awards" },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::Glyph;

    #[test]
    fn test_every_glyph_name_is_known() {
        let names = HOME_STATS
            .iter()
            .map(|s| s.glyph)
            .chain(SERVICES.iter().map(|s| s.glyph))
            .chain(ACHIEVEMENTS.iter().map(|a| a.glyph));
        for name in names {
            assert!(Glyph::from_name(name).is_some(), "missing glyph {}", name);
        }
    }

    #[test]
    fn test_ratings_and_percentages_in_range() {
        assert!(TESTIMONIALS.iter().all(|t| (1..=5).contains(&t.rating)));
        assert!(SKILLS.iter().all(|s| s.percentage <= 100));
    }

    #[test]
    fn test_milestones_are_chronological() {
        assert!(MILESTONES.windows(2).all(|w| w[0].year < w[1].year));
    }
}
