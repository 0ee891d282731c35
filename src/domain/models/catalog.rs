//! Training & products catalog

/// Pseudo-category that disables category filtering
pub const CATEGORY_ALL: &str = "All";

/// Categories in display order (the filter bar prepends [`CATEGORY_ALL`])
pub const PRODUCT_CATEGORIES: &[&str] = &[
    "Defense Systems",
    "Technology Services",
    "Digital Transformation",
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Product {
    pub id: u32,
    pub title: &'static str,
    pub category: &'static str,
    pub glyph: &'static str,
    pub summary: &'static str,
    pub details: &'static [&'static str],
}

pub const PRODUCTS: &[Product] = &[
    Product {
        id: 1,
        title: "LOMAH Smart Target System",
        category: "Defense Systems",
        glyph: "target",
        summary: "LOMAH consists of a Pop-up Target (PT) with acoustical sensors mounted on a frame at the Target End, \
                  Firing Point Equipment (FPE) for individual lanes at the Firer's End for instant display of location of bullet hit \
                  and a central Master Control Station (MCS) to monitor and record the results of all firing lanes.",
        details: &[
            "FPE displays and records the shot location on the target and miss location within the detection zone, \
             number of shots fired, type of exercise in progress, the size of the group of bullets, the score, rating and \
             the lane operation status.",
            "The equipment is rugged, light-weight, easy to assemble and operate. \
             It is available in wired and wireless configurations.",
        ],
    },
    Product {
        id: 2,
        title: "Multi-Functional Target Systems",
        category: "Defense Systems",
        glyph: "settings",
        summary: "Xentric MFTS® is an electro-mechanical system of versatile targets which are programmable from the firers end \
                  to perform various movements for firing practices. The system is designed for use both at outdoor and indoor \
                  shooting ranges.",
        details: &[
            "It is portable and easy to operate. It is a rugged, all-weather system and meets IP 65 standards.",
            "The system is available both in wired and wireless configurations and operates either with 230V AC 50 Hz or \
             with DC battery power.",
        ],
    },
    Product {
        id: 3,
        title: "Tank Targets",
        category: "Defense Systems",
        glyph: "shield",
        summary: "Xentric Technologies offers the static as well as the moving Tank target systems - the Pop-up Static Tank Target \
                  Mechanism or STTM and Rail Moving Tank Target Mechanism or MTTM. These targets are ideal for tactical firing practices.",
        details: &[
            "The Stationary target communicates through wireless. It is battery powered and its exposure and conceal time is \
             between 5 to 10 seconds.",
            "It is weather-proof and senses hit for range firing.",
        ],
    },
    Product {
        id: 4,
        title: "Master Control Station (Zen MCS)",
        category: "Defense Systems",
        glyph: "cpu",
        summary: "Xentric Control Station (Zen MCS) is a Live Firing Range Control System that enables display and control \
                  for all targets in the range. The MCS facilitates the programmed behaviour of all the targets, so that \
                  pre-decided firing exercises may be conducted.",
        details: &[
            "At MCS specific exercise may be selected for each target, enabling snap shooting exercises at various distances.",
            "MCS also facilitates 'Immediate' control of targets as required at the moment by the Instructor.",
        ],
    },
    Product {
        id: 5,
        title: "Custom Software Development",
        category: "Technology Services",
        glyph: "code",
        summary: "We offer bespoke software solutions tailored to your business needs. Our team of experienced developers \
                  can create software that will streamline your processes and increase efficiency.",
        details: &[],
    },
    Product {
        id: 6,
        title: "Cloud Services",
        category: "Technology Services",
        glyph: "cloud",
        summary: "Our cloud services can help you reduce costs and increase flexibility. We offer cloud migration, \
                  cloud infrastructure management, and cloud security services.",
        details: &[],
    },
    Product {
        id: 7,
        title: "IT Consulting",
        category: "Technology Services",
        glyph: "settings",
        summary: "Our IT consulting services can help you optimize your IT infrastructure, improve security, and reduce costs. \
                  Our team of experts can provide recommendations tailored to your business needs.",
        details: &[],
    },
    Product {
        id: 8,
        title: "Cybersecurity",
        category: "Technology Services",
        glyph: "shield",
        summary: "We offer a range of cybersecurity services to protect your business from cyber threats. \
                  Our services include vulnerability assessments, penetration testing, and threat intelligence.",
        details: &[],
    },
    Product {
        id: 9,
        title: "Mobile App Development",
        category: "Technology Services",
        glyph: "smartphone",
        summary: "We specialize in mobile app development for iOS and Android. Our team of developers can create apps \
                  that will enhance your business and engage your customers.",
        details: &[],
    },
    Product {
        id: 10,
        title: "Web Development",
        category: "Technology Services",
        glyph: "globe",
        summary: "We offer web development services for businesses of all sizes. Our team of developers can create \
                  custom websites that will showcase your brand and improve user experience.",
        details: &[],
    },
    Product {
        id: 11,
        title: "Digital Transformation",
        category: "Digital Transformation",
        glyph: "zap",
        summary: "We help businesses transform their operations and customer experiences through digital technologies. \
                  From strategy to implementation, we provide end-to-end solutions that unlock new opportunities and drive growth.",
        details: &[],
    },
    Product {
        id: 12,
        title: "Cloud Migration and Management",
        category: "Digital Transformation",
        glyph: "cloud",
        summary: "Migrating to the cloud can be a daunting task, but it doesn't have to be. We help businesses move their \
                  applications and data to the cloud, and manage their cloud infrastructure for optimal performance and cost savings.",
        details: &[],
    },
    Product {
        id: 13,
        title: "Data Analytics and Machine Learning",
        category: "Digital Transformation",
        glyph: "brain",
        summary: "Data is the lifeblood of modern business, and we help businesses make the most of it. Our data analytics \
                  and machine learning solutions provide insights and predictions that drive decisions and create value.",
        details: &[],
    },
    Product {
        id: 14,
        title: "IT Staff Augmentation & Technology Consulting",
        category: "Digital Transformation",
        glyph: "users",
        summary: "Sometimes you need a little extra help to manage your IT operations. Our staff augmentation services \
                  provide skilled IT professionals who can work alongside your team. We also provide expert technology \
                  consulting to help businesses make informed decisions about their technology investments.",
        details: &[],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::Glyph;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_has_fourteen_unique_products() {
        assert_eq!(PRODUCTS.len(), 14);
        let ids: HashSet<_> = PRODUCTS.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), 14);
    }

    #[test]
    fn test_every_product_category_is_listed() {
        for product in PRODUCTS {
            assert!(PRODUCT_CATEGORIES.contains(&product.category), "{}", product.title);
            assert!(Glyph::from_name(product.glyph).is_some(), "{}", product.glyph);
        }
        assert!(!PRODUCT_CATEGORIES.contains(&CATEGORY_ALL));
    }
}
