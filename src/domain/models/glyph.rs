use std::collections::HashMap;
use std::str::FromStr;

use once_cell::sync::Lazy;

/// Icons available to the site, keyed by a stable kebab-case name.
/// Content arrays refer to glyphs by name; the view resolves them here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    ArrowRight,
    Award,
    BarChart,
    Bot,
    Building,
    Calendar,
    Check,
    Clock,
    Close,
    Cloud,
    Code,
    Cpu,
    Facebook,
    Globe,
    Instagram,
    Link,
    Linkedin,
    Mail,
    MapPin,
    Menu,
    MessageCircle,
    MessageSquare,
    Phone,
    Search,
    Send,
    Settings,
    Shield,
    Smartphone,
    Star,
    Target,
    TrendingUp,
    Twitter,
    User,
    Users,
    Zap,
    Brain,
}

impl Glyph {
    pub const ALL: [Glyph; 36] = [
        Glyph::ArrowRight,
        Glyph::Award,
        Glyph::BarChart,
        Glyph::Bot,
        Glyph::Building,
        Glyph::Calendar,
        Glyph::Check,
        Glyph::Clock,
        Glyph::Close,
        Glyph::Cloud,
        Glyph::Code,
        Glyph::Cpu,
        Glyph::Facebook,
        Glyph::Globe,
        Glyph::Instagram,
        Glyph::Link,
        Glyph::Linkedin,
        Glyph::Mail,
        Glyph::MapPin,
        Glyph::Menu,
        Glyph::MessageCircle,
        Glyph::MessageSquare,
        Glyph::Phone,
        Glyph::Search,
        Glyph::Send,
        Glyph::Settings,
        Glyph::Shield,
        Glyph::Smartphone,
        Glyph::Star,
        Glyph::Target,
        Glyph::TrendingUp,
        Glyph::Twitter,
        Glyph::User,
        Glyph::Users,
        Glyph::Zap,
        Glyph::Brain,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Glyph::ArrowRight => "arrow-right",
            Glyph::Award => "award",
            Glyph::BarChart => "bar-chart",
            Glyph::Bot => "bot",
            Glyph::Building => "building",
            Glyph::Calendar => "calendar",
            Glyph::Check => "check",
            Glyph::Clock => "clock",
            Glyph::Close => "close",
            Glyph::Cloud => "cloud",
            Glyph::Code => "code",
            Glyph::Cpu => "cpu",
            Glyph::Facebook => "facebook",
            Glyph::Globe => "globe",
            Glyph::Instagram => "instagram",
            Glyph::Link => "link",
            Glyph::Linkedin => "linkedin",
            Glyph::Mail => "mail",
            Glyph::MapPin => "map-pin",
            Glyph::Menu => "menu",
            Glyph::MessageCircle => "message-circle",
            Glyph::MessageSquare => "message-square",
            Glyph::Phone => "phone",
            Glyph::Search => "search",
            Glyph::Send => "send",
            Glyph::Settings => "settings",
            Glyph::Shield => "shield",
            Glyph::Smartphone => "smartphone",
            Glyph::Star => "star",
            Glyph::Target => "target",
            Glyph::TrendingUp => "trending-up",
            Glyph::Twitter => "twitter",
            Glyph::User => "user",
            Glyph::Users => "users",
            Glyph::Zap => "zap",
            Glyph::Brain => "brain",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Glyph::ArrowRight => "→",
            Glyph::Award => "🏆",
            Glyph::BarChart => "📊",
            Glyph::Bot => "🤖",
            Glyph::Building => "🏢",
            Glyph::Calendar => "📅",
            Glyph::Check => "✓",
            Glyph::Clock => "🕒",
            Glyph::Close => "✕",
            Glyph::Cloud => "☁️",
            Glyph::Code => "💻",
            Glyph::Cpu => "🖥️",
            Glyph::Facebook => "f",
            Glyph::Globe => "🌐",
            Glyph::Instagram => "◎",
            Glyph::Link => "🔗",
            Glyph::Linkedin => "in",
            Glyph::Mail => "✉️",
            Glyph::MapPin => "📍",
            Glyph::Menu => "☰",
            Glyph::MessageCircle => "💬",
            Glyph::MessageSquare => "🗨️",
            Glyph::Phone => "📞",
            Glyph::Search => "🔍",
            Glyph::Send => "➤",
            Glyph::Settings => "⚙️",
            Glyph::Shield => "🛡️",
            Glyph::Smartphone => "📱",
            Glyph::Star => "★",
            Glyph::Target => "🎯",
            Glyph::TrendingUp => "📈",
            Glyph::Twitter => "𝕏",
            Glyph::User => "👤",
            Glyph::Users => "👥",
            Glyph::Zap => "⚡",
            Glyph::Brain => "🧠",
        }
    }

    pub fn from_name(name: &str) -> Option<Glyph> {
        GLYPHS_BY_NAME.get(name).copied()
    }
}

static GLYPHS_BY_NAME: Lazy<HashMap<&'static str, Glyph>> =
    Lazy::new(|| Glyph::ALL.iter().map(|g| (g.name(), *g)).collect());

impl FromStr for Glyph {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Glyph::from_name(s).ok_or_else(|| format!("unknown glyph: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_glyph_resolves_by_name() {
        for glyph in Glyph::ALL {
            assert_eq!(Glyph::from_name(glyph.name()), Some(glyph));
        }
    }

    #[test]
    fn test_names_are_unique() {
        let names: HashSet<_> = Glyph::ALL.iter().map(|g| g.name()).collect();
        assert_eq!(names.len(), Glyph::ALL.len());
    }

    #[test]
    fn test_unknown_name() {
        assert_eq!(Glyph::from_name("rocket"), None);
        assert!("rocket".parse::<Glyph>().is_err());
        assert_eq!("map-pin".parse::<Glyph>(), Ok(Glyph::MapPin));
    }
}
