//! Static page copy: navigation, features, testimonials, footer.
//!
//! Everything here is immutable and defined once; components only read it.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

pub const BRAND: &str = "IELTS Pro";

/// Section ids targeted by in-page links.
pub mod anchors {
    pub const HOME: &str = "home";
    pub const COURSES: &str = "courses";
    pub const ABOUT: &str = "about";
    pub const CONTACT: &str = "contact";
    pub const REGISTER: &str = "register";
    pub const GET_STARTED: &str = "get-started";
    pub const LEARN_MORE: &str = "learn-more";

    pub const ALL: [&str; 7] = [HOME, COURSES, ABOUT, CONTACT, REGISTER, GET_STARTED, LEARN_MORE];
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Link {
    pub label: &'static str,
    pub href: &'static str,
}

/// Two-stop gradient, rendered at 135 degrees.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Gradient {
    pub from: &'static str,
    pub to: &'static str,
}

impl Gradient {
    #[must_use]
    pub fn css(&self) -> String {
        format!("linear-gradient(135deg, {}, {})", self.from, self.to)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    /// Icon tile and hover underline.
    pub gradient: Gradient,
    /// Card wash shown on hover.
    pub bg_gradient: Gradient,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Testimonial {
    pub name: &'static str,
    /// IELTS band, kept as displayed.
    pub score: &'static str,
    pub text: &'static str,
    pub image: &'static str,
    pub role: &'static str,
    pub country: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub name: &'static str,
    pub icon: &'static str,
    pub href: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactDetails {
    pub address: [&'static str; 2],
    pub phone: &'static str,
    pub email: &'static str,
}

// =============================================================================
// NAVBAR
// =============================================================================

pub const NAV_LINKS: [Link; 4] = [
    Link { label: "Home", href: "#home" },
    Link { label: "Courses", href: "#courses" },
    Link { label: "About", href: "#about" },
    Link { label: "Contact", href: "#contact" },
];

pub const REGISTER_CTA: Link = Link { label: "Register Now", href: "#register" };

// =============================================================================
// HERO
// =============================================================================

pub const HERO_HEADLINE: (&str, &str) = ("Achieve Your", "IELTS Goals");

pub const HERO_SUBTITLE: &str = "Expert guidance, personalized feedback, and comprehensive practice \
     materials to help you succeed in your IELTS journey.";

pub const HERO_PRIMARY_CTA: Link = Link { label: "Get Started", href: "#get-started" };
pub const HERO_SECONDARY_CTA: Link = Link { label: "Learn More", href: "#learn-more" };

pub const HERO_STATS: [Stat; 3] = [
    Stat { value: "95%", label: "Success Rate" },
    Stat { value: "5000+", label: "Students" },
    Stat { value: "8.5", label: "Avg Band Score" },
];

pub const HERO_IMAGE: &str =
    "https://images.unsplash.com/photo-1522202176988-66273c2fd55f?ixlib=rb-4.0.3&auto=format&fit=crop&w=1351&q=80";

// =============================================================================
// FEATURES
// =============================================================================

pub const FEATURES_HEADING: (&str, &str) = ("Everything you need to", "succeed");

pub const FEATURES_BLURB: &str = "Our comprehensive IELTS preparation program is designed to help you \
     achieve your target score with cutting-edge technology and expert guidance.";

pub const FEATURES: [Feature; 4] = [
    Feature {
        title: "Speaking Practice",
        description: "One-on-one speaking sessions with expert trainers to improve your fluency and confidence.",
        icon: "🎯",
        gradient: Gradient { from: "#3b82f6", to: "#06b6d4" },
        bg_gradient: Gradient { from: "#eff6ff", to: "#ecfeff" },
    },
    Feature {
        title: "Mock Tests",
        description: "Regular practice tests in exam conditions to prepare you for the real IELTS experience.",
        icon: "📝",
        gradient: Gradient { from: "#a855f7", to: "#ec4899" },
        bg_gradient: Gradient { from: "#faf5ff", to: "#fdf2f8" },
    },
    Feature {
        title: "AI Band Score",
        description: "Get instant feedback on your writing and speaking using our advanced AI scoring system.",
        icon: "🤖",
        gradient: Gradient { from: "#22c55e", to: "#10b981" },
        bg_gradient: Gradient { from: "#f0fdf4", to: "#ecfdf5" },
    },
    Feature {
        title: "Study Materials",
        description: "Access to comprehensive study materials, practice questions, and resources.",
        icon: "📚",
        gradient: Gradient { from: "#f97316", to: "#ef4444" },
        bg_gradient: Gradient { from: "#fff7ed", to: "#fef2f2" },
    },
];

pub const FEATURES_CTA: &str = "Explore All Features";

// =============================================================================
// TESTIMONIALS
// =============================================================================

pub const TESTIMONIALS_HEADING: (&str, &str) = ("Success Stories from", "Our Students");

pub const TESTIMONIALS_BLURB: &str =
    "Hear from our students who achieved their target IELTS scores and transformed their lives";

pub const TESTIMONIALS: [Testimonial; 5] = [
    Testimonial {
        name: "Sarah Johnson",
        score: "8.5",
        text: "The personalized attention and structured approach helped me achieve my target band score. \
               Highly recommended!",
        image: "https://images.unsplash.com/photo-1494790108377-be9c29b29330?ixlib=rb-4.0.3&auto=format&fit=facearea&facepad=2&w=256&h=256&q=80",
        role: "Software Engineer",
        country: "Canada",
    },
    Testimonial {
        name: "Michael Chen",
        score: "8.0",
        text: "Outstanding teaching methods and practice materials. The mock tests were particularly helpful \
               in preparing for the actual exam.",
        image: "https://images.unsplash.com/photo-1519244703995-f4e0f30006d5?ixlib=rb-4.0.3&auto=format&fit=facearea&facepad=2&w=256&h=256&q=80",
        role: "Business Analyst",
        country: "Australia",
    },
    Testimonial {
        name: "Emma Rodriguez",
        score: "7.5",
        text: "The AI-powered feedback system gave me instant insights into my weaknesses. It was like \
               having a personal tutor available 24/7.",
        image: "https://images.unsplash.com/photo-1517841905240-472988babdf9?ixlib=rb-4.0.3&auto=format&fit=facearea&facepad=2&w=256&h=256&q=80",
        role: "Marketing Manager",
        country: "UK",
    },
    Testimonial {
        name: "David Kim",
        score: "9.0",
        text: "Exceptional quality of instruction and materials. The speaking practice sessions were \
               incredibly valuable for building confidence.",
        image: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?ixlib=rb-4.0.3&auto=format&fit=facearea&facepad=2&w=256&h=256&q=80",
        role: "Doctor",
        country: "South Korea",
    },
    Testimonial {
        name: "Lisa Thompson",
        score: "8.5",
        text: "The comprehensive study plan and regular progress tracking helped me stay motivated \
               throughout my preparation journey.",
        image: "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?ixlib=rb-4.0.3&auto=format&fit=facearea&facepad=2&w=256&h=256&q=80",
        role: "Teacher",
        country: "New Zealand",
    },
];

/// Cards shown in the small-screen grid instead of the carousel.
pub const TESTIMONIAL_GRID_LEN: usize = 4;

pub const TESTIMONIALS_CTA: &str = "Join Our Success Stories";

// =============================================================================
// FOOTER
// =============================================================================

pub const FOOTER_BLURB: &str = "Helping students achieve their dreams through expert IELTS guidance and \
     comprehensive preparation programs.";

pub const QUICK_LINKS: [Link; 4] = [
    Link { label: "Courses", href: "#courses" },
    Link { label: "Practice Tests", href: "#practice" },
    Link { label: "Resources", href: "#resources" },
    Link { label: "Blog", href: "#blog" },
];

pub const SUPPORT_LINKS: [Link; 4] = [
    Link { label: "FAQ", href: "#faq" },
    Link { label: "Contact Us", href: "#contact" },
    Link { label: "Privacy Policy", href: "#privacy" },
    Link { label: "Terms of Service", href: "#terms" },
];

pub const SOCIAL_LINKS: [SocialLink; 4] = [
    SocialLink { name: "Facebook", icon: "📘", href: "#" },
    SocialLink { name: "Twitter", icon: "🐦", href: "#" },
    SocialLink { name: "Instagram", icon: "📷", href: "#" },
    SocialLink { name: "LinkedIn", icon: "💼", href: "#" },
];

pub const CONTACT: ContactDetails = ContactDetails {
    address: ["123 Education Street", "New York, NY 10001"],
    phone: "(555) 123-4567",
    email: "info@ieltspro.com",
};

pub const LEGAL_LINKS: [Link; 2] = [
    Link { label: "Privacy Policy", href: "#privacy" },
    Link { label: "Terms of Service", href: "#terms" },
];

/// Footer copyright line for `year`.
#[must_use]
pub fn copyright(year: i32) -> String {
    format!("© {year} {BRAND}. All rights reserved.")
}
