//! Static copy and media for the landing page.
//!
//! Section components render from these tables so the markup stays
//! uniform and the copy can be checked in one place.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use crate::components::icon::Icon;

/// Default headline rotation.
pub const HERO_WORDS: [&str; 4] = ["Call Operations", "Customer Service", "Business Growth", "Voice AI"];

pub const LOGO_SRC: &str = "/logo_boboyii.png";

/// Sections reachable from the navigation bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Problem,
    Solution,
    HowItWorks,
    Waitlist,
}

impl Section {
    pub const NAV: [Self; 4] = [Self::Problem, Self::Solution, Self::HowItWorks, Self::Waitlist];

    /// Element id of the section on the page.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Problem => "problem",
            Self::Solution => "solution",
            Self::HowItWorks => "how-it-works",
            Self::Waitlist => "waitlist",
        }
    }

    #[must_use]
    pub fn nav_label(self) -> &'static str {
        match self {
            Self::Problem => "Problem",
            Self::Solution => "Solution",
            Self::HowItWorks => "How It Works",
            Self::Waitlist => "Join Waitlist",
        }
    }
}

// ── Problem ─────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Challenge {
    pub title: &'static str,
    pub body: &'static str,
}

pub const CHALLENGES: [Challenge; 4] = [
    Challenge {
        title: "High Operational Costs",
        body: "Traditional call centers require expensive infrastructure, training, and 24/7 staffing that drain business resources.",
    },
    Challenge {
        title: "Language & Cultural Barriers",
        body: "Customers can't communicate effectively in their native languages, leading to frustration and lost business opportunities.",
    },
    Challenge {
        title: "Limited Availability",
        body: "Business hours restrictions and agent availability issues result in missed calls and poor customer experience.",
    },
    Challenge {
        title: "Inconsistent Service Quality",
        body: "Human agents have varying skill levels and emotional states, leading to unpredictable customer experiences.",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const HEADLINE_STAT: Stat = Stat {
    value: "85%",
    label: "of African businesses struggle with call operations",
};

pub const SUPPORTING_STATS: [Stat; 2] = [
    Stat {
        value: "$50K+",
        label: "Annual call center costs",
    },
    Stat {
        value: "40%",
        label: "Missed calls daily",
    },
];

// ── Solution ────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    pub icon: Icon,
    pub title: &'static str,
    pub body: &'static str,
    pub bullets: [&'static str; 3],
}

pub const FEATURES: [Feature; 3] = [
    Feature {
        icon: Icon::Globe,
        title: "Multilingual Call Handling",
        body: "Handle customer calls in 20+ African languages with perfect pronunciation and cultural understanding.",
        bullets: ["Native language support", "Cultural context awareness", "Accent recognition"],
    },
    Feature {
        icon: Icon::Clock,
        title: "24/7 Availability",
        body: "Never miss a call again. Your AI agents work around the clock, handling unlimited concurrent calls.",
        bullets: ["Unlimited concurrent calls", "No holidays or sick days", "Instant response time"],
    },
    Feature {
        icon: Icon::TrendingUp,
        title: "90% Cost Reduction",
        body: "Dramatically reduce operational costs while improving service quality and customer satisfaction.",
        bullets: ["No hiring or training costs", "Minimal infrastructure needed", "Pay-per-use pricing"],
    },
];

// ── How it works ────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    pub number: &'static str,
    pub title: &'static str,
    pub icon: Icon,
    pub body: &'static str,
}

pub const STEPS: [Step; 4] = [
    Step {
        number: "01",
        title: "Build",
        icon: Icon::Code,
        body: "Configure your AI call agent with custom scripts, knowledge base, and call flows using our intuitive dashboard.",
    },
    Step {
        number: "02",
        title: "Test",
        icon: Icon::TestTube,
        body: "Test your call agent with simulated conversations in multiple African languages to ensure perfect responses.",
    },
    Step {
        number: "03",
        title: "Deploy",
        icon: Icon::Rocket,
        body: "Connect your phone numbers and go live instantly. Your AI agents start handling calls immediately.",
    },
    Step {
        number: "04",
        title: "Monitor",
        icon: Icon::BarChart,
        body: "Track call metrics, customer satisfaction, and agent performance through comprehensive analytics dashboard.",
    },
];

/// Stagger between successive step cards, in seconds.
pub const STEP_STAGGER_S: f64 = 0.1;

// ── Waitlist ────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Benefit {
    pub icon: Icon,
    pub title: &'static str,
    pub body: &'static str,
}

pub const WAITLIST_BENEFITS: [Benefit; 3] = [
    Benefit {
        icon: Icon::Star,
        title: "Early Access Pricing",
        body: "Get 50% off for the first 6 months",
    },
    Benefit {
        icon: Icon::Users,
        title: "Priority Support",
        body: "Direct access to our founding team",
    },
    Benefit {
        icon: Icon::Zap,
        title: "Beta Features",
        body: "First to try new AI capabilities",
    },
];

/// Small icon-and-label pair used in proof and trust rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Badge {
    pub icon: Icon,
    pub label: &'static str,
}

pub const SOCIAL_PROOF: [Badge; 3] = [
    Badge {
        icon: Icon::Shield,
        label: "100% Secure & Private",
    },
    Badge {
        icon: Icon::Users,
        label: "500+ Businesses Waiting",
    },
    Badge {
        icon: Icon::Star,
        label: "No Spam, Ever",
    },
];

// ── Mission / CTA ───────────────────────────────────────────────

pub const MISSION_IMAGES: [&str; 15] = [
    "pexels-ameer-umar-325092707-15079520.jpg",
    "pexels-artsysolomon-1108822.jpg",
    "pexels-bestbe-models-975242-2170387.jpg",
    "pexels-cottonbro-6878716.jpg",
    "pexels-diimejii-2379886.jpg",
    "pexels-ilabappa-19589314.jpg",
    "pexels-jairo-david-arboleda-621072-1432238.jpg",
    "pexels-jopwell-2422278.jpg",
    "pexels-rowlandzy-231473-15542283.jpg",
    "pexels-safari-consoler-3290243-29004157.jpg",
    "pexels-serdi-16767210.jpg",
    "pexels-serdi-17297809.jpg",
    "pexels-thatguycraig000-1670045.jpg",
    "pexels-thomas-chauke-437438-3207532.jpg",
    "pexels-topeasokere-5789327.jpg",
];

pub const MISSION_IMAGE_ALT: &str = "African people and culture";

/// Public path of a mission image.
#[must_use]
pub fn mission_image_src(file: &str) -> String {
    format!("/{file}")
}

pub const TRUST_INDICATORS: [Badge; 3] = [
    Badge {
        icon: Icon::Shield,
        label: "Enterprise Security",
    },
    Badge {
        icon: Icon::Clock,
        label: "5-Minute Setup",
    },
    Badge {
        icon: Icon::Star,
        label: "No Long-term Contracts",
    },
];

// ── Footer ──────────────────────────────────────────────────────

pub const COPYRIGHT: &str = "© 2025 Boboyii. All rights reserved.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub icon: Icon,
    pub label: &'static str,
    pub href: &'static str,
}

// Each network icon links to that network's profile. Email has no address
// published yet.
pub const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink {
        icon: Icon::Linkedin,
        label: "LinkedIn",
        href: "https://www.linkedin.com/company/boboyiiapp/",
    },
    SocialLink {
        icon: Icon::Twitter,
        label: "X",
        href: "https://x.com/boboyiiApp",
    },
    SocialLink {
        icon: Icon::Mail,
        label: "Email",
        href: "#",
    },
];
