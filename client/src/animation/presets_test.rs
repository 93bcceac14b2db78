use super::*;

#[test]
fn nav_links_stagger_by_100ms() {
    let delays = (0..4).map(|i| nav_link(i)[0].delay_ms).collect::<Vec<_>>();
    assert_eq!(delays, vec![0.0, 100.0, 200.0, 300.0]);
}

#[test]
fn nav_slides_down_over_600ms() {
    let anim = nav_slide_in()[0];
    assert_eq!(anim.sample(0.0), -100.0);
    assert_eq!(anim.sample(600.0), 0.0);
    assert!(anim.sample(300.0) > -50.0, "ease-out runs ahead of linear");
}

#[test]
fn card_entry_uses_shared_spring() {
    for anim in card_enter(0.8) {
        assert_eq!(anim.trigger, Trigger::InView);
        assert_eq!(anim.transition, crate::animation::Transition::Spring(CARD_SPRING));
    }
    assert_eq!(card_enter(0.9)[2].from, 0.9);
}

#[test]
fn staggers_match_groups() {
    assert_eq!(FEATURES_STAGGER.delay_for(1), 300.0);
    assert_eq!(GRID_STAGGER.delay_for(1), 300.0);
    assert_eq!(GRID_STAGGER.delay_for(3), 500.0);
}

#[test]
fn orbs_return_home_each_period() {
    for orb in HERO_ORBS.iter().chain(FEATURE_ORBS.iter()) {
        for anim in orb.animations() {
            assert_eq!(anim.cycle_ms(), orb.period_ms);
            assert!((anim.sample(orb.period_ms) - anim.from).abs() < 1e-9);
            assert!((anim.sample(orb.period_ms / 2.0) - anim.to).abs() < 1e-9);
        }
    }
}

#[test]
fn hero_floaters_keep_their_timing() {
    let delays = HERO_FLOATERS.iter().map(|f| f.delay_ms).collect::<Vec<_>>();
    assert_eq!(delays, vec![0.0, 500.0, 1000.0, 1500.0]);
    let anims = HERO_FLOATERS[1].animations();
    assert_eq!(anims[0].to, -30.0);
    assert_eq!(anims[1].to, 40.0);
    assert!(anims.iter().all(|a| a.delay_ms == 500.0 && a.cycle_ms() == 4000.0));
}

#[test]
fn footer_particles_slow_down_and_start_later() {
    let first = footer_particle(0);
    let last = footer_particle(FOOTER_PARTICLES - 1);
    assert_eq!(first[0].cycle_ms(), 3000.0);
    assert_eq!(last[0].cycle_ms(), 5500.0);
    assert_eq!(last[0].delay_ms, 2500.0);
    assert_eq!(first[1].from, 0.2);
    assert_eq!(first[1].to, 0.8);
}

#[test]
fn slide_enters_from_travel_side() {
    assert_eq!(slide_in(Step::Forward)[0].from, 1000.0);
    assert_eq!(slide_in(Step::Backward)[0].from, -1000.0);
    assert_eq!(slide_in(Step::Forward)[0].to, 0.0);
}

#[test]
fn theme_knob_travels_24px() {
    let knob = theme_knob()[0];
    assert_eq!(knob.trigger, Trigger::State);
    assert_eq!(knob.sample(knob.duration_ms() + 1.0), 24.0);
}

#[test]
fn shimmer_sweeps_over_three_seconds() {
    let anim = shimmer()[0];
    assert_eq!(anim.property, Property::BackgroundPositionX);
    assert_eq!(anim.cycle_ms(), 3000.0);
    assert!((anim.sample(750.0) - 50.0).abs() < 1e-9);
}
