use std::collections::HashSet;

use super::*;

#[test]
fn page_has_four_features_and_five_testimonials() {
    assert_eq!(FEATURES.len(), 4);
    assert_eq!(TESTIMONIALS.len(), 5);
    assert!(TESTIMONIAL_GRID_LEN <= TESTIMONIALS.len());
}

#[test]
fn nav_links_are_unique_in_page_anchors() {
    let hrefs = NAV_LINKS.iter().map(|l| l.href).collect::<HashSet<_>>();
    assert_eq!(hrefs.len(), NAV_LINKS.len());
    for link in NAV_LINKS.iter().chain([&REGISTER_CTA, &HERO_PRIMARY_CTA, &HERO_SECONDARY_CTA]) {
        let id = link.href.strip_prefix('#').unwrap();
        assert!(anchors::ALL.contains(&id), "{} has no section", link.href);
    }
}

#[test]
fn anchor_ids_are_unique() {
    assert_eq!(anchors::ALL.iter().collect::<HashSet<_>>().len(), anchors::ALL.len());
}

#[test]
fn testimonial_scores_are_ielts_bands() {
    for t in TESTIMONIALS {
        let band: f64 = t.score.parse().unwrap();
        assert!((0.0..=9.0).contains(&band), "{}", t.name);
        assert_eq!(band * 2.0, (band * 2.0).round(), "{} not a half band", t.name);
        assert!(t.image.starts_with("https://"));
    }
}

#[test]
fn features_have_distinct_titles_and_icons() {
    assert_eq!(FEATURES.iter().map(|f| f.title).collect::<HashSet<_>>().len(), 4);
    assert_eq!(FEATURES.iter().map(|f| f.icon).collect::<HashSet<_>>().len(), 4);
}

#[test]
fn gradient_css() {
    assert_eq!(FEATURES[0].gradient.css(), "linear-gradient(135deg, #3b82f6, #06b6d4)");
}

#[test]
fn footer_links_are_anchors() {
    for link in QUICK_LINKS.iter().chain(SUPPORT_LINKS.iter()).chain(LEGAL_LINKS.iter()) {
        assert!(link.href.starts_with('#'), "{}", link.label);
    }
}

#[test]
fn copyright_line() {
    assert_eq!(copyright(2026), "© 2026 IELTS Pro. All rights reserved.");
}
