use super::*;

const N: usize = 5;

fn at(index: usize) -> CarouselController {
    let mut ctl = CarouselController::new(N);
    ctl.jump_to(index).unwrap();
    ctl
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn starts_at_zero_auto_playing() {
    let ctl = CarouselController::new(N);
    assert_eq!(ctl.state(), CarouselState { current_index: 0, auto_playing: true });
    assert_eq!(ctl.mode(), PlayMode::AutoPlaying);
    assert_eq!(ctl.interval_ms(), 4000);
    assert_eq!(ctl.len(), N);
}

#[test]
fn step_deltas() {
    assert_eq!(Step::Forward.delta(), 1);
    assert_eq!(Step::Backward.delta(), -1);
}

// =============================================================
// Advance
// =============================================================

#[test]
fn advance_stays_in_range_for_every_index() {
    for start in 0..N {
        for step in [Step::Forward, Step::Backward] {
            let mut ctl = at(start);
            ctl.advance(step);
            let expected = (start as isize + step.delta()).rem_euclid(N as isize) as usize;
            assert_eq!(ctl.current_index(), expected, "start={start} step={step:?}");
        }
    }
}

#[test]
fn advance_backward_from_zero_wraps_to_last() {
    let mut ctl = at(0);
    ctl.advance(Step::Backward);
    assert_eq!(ctl.current_index(), 4);
}

#[test]
fn advance_forward_from_last_wraps_to_zero() {
    let mut ctl = at(4);
    ctl.advance(Step::Forward);
    assert_eq!(ctl.current_index(), 0);
}

#[test]
fn advance_alone_keeps_auto_play() {
    let mut ctl = CarouselController::new(N);
    ctl.advance(Step::Forward);
    assert!(ctl.is_auto_playing());
}

#[test]
fn empty_carousel_ignores_navigation() {
    let mut ctl = CarouselController::new(0);
    assert!(ctl.is_empty());
    ctl.advance(Step::Forward);
    assert_eq!(ctl.current_index(), 0);
    assert_eq!(ctl.jump_to(0), Err(CarouselError::OutOfRange { index: 0, len: 0 }));
}

// =============================================================
// Jump
// =============================================================

#[test]
fn jump_to_out_of_range_is_rejected_without_change() {
    let mut ctl = at(2);
    let err = ctl.jump_to(5).unwrap_err();
    assert_eq!(err, CarouselError::OutOfRange { index: 5, len: N });
    assert_eq!(err.to_string(), "carousel index 5 out of range (len 5)");
    assert_eq!(ctl.current_index(), 2);
    assert!(ctl.is_auto_playing());
}

#[test]
fn jump_to_records_direction() {
    let mut ctl = at(3);
    ctl.jump_to(1).unwrap();
    assert_eq!(ctl.direction(), Step::Backward);
    ctl.jump_to(4).unwrap();
    assert_eq!(ctl.direction(), Step::Forward);
}

// =============================================================
// Manual navigation pauses auto-play
// =============================================================

#[test]
fn next_pauses_auto_play() {
    let mut ctl = CarouselController::new(N);
    ctl.next();
    assert_eq!(ctl.state(), CarouselState { current_index: 1, auto_playing: false });
    assert_eq!(ctl.mode(), PlayMode::Paused);
}

#[test]
fn prev_pauses_auto_play_and_wraps() {
    let mut ctl = CarouselController::new(N);
    ctl.prev();
    assert_eq!(ctl.state(), CarouselState { current_index: 4, auto_playing: false });
}

#[test]
fn select_pauses_auto_play() {
    let mut ctl = CarouselController::new(N);
    ctl.select(3).unwrap();
    assert_eq!(ctl.state(), CarouselState { current_index: 3, auto_playing: false });
}

#[test]
fn failed_select_keeps_auto_play() {
    let mut ctl = CarouselController::new(N);
    assert!(ctl.select(9).is_err());
    assert!(ctl.is_auto_playing());
}

#[test]
fn paused_stays_paused_until_re_enabled() {
    let mut ctl = CarouselController::new(N);
    ctl.next();
    for _ in 0..10 {
        assert!(!ctl.tick());
    }
    assert_eq!(ctl.current_index(), 1);

    ctl.set_auto_play(true);
    assert!(ctl.tick());
    assert_eq!(ctl.current_index(), 2);
}

// =============================================================
// Timer
// =============================================================

#[test]
fn tick_advances_while_auto_playing() {
    let mut ctl = CarouselController::new(N);
    for _ in 0..N {
        assert!(ctl.tick());
    }
    assert_eq!(ctl.current_index(), 0);
}

#[test]
fn elapse_fires_one_tick_per_interval() {
    let mut ctl = CarouselController::new(N);
    assert_eq!(ctl.elapse(3999), 0);
    assert_eq!(ctl.elapse(1), 1);
    assert_eq!(ctl.current_index(), 1);
    assert_eq!(ctl.elapse(8000), 2);
    assert_eq!(ctl.current_index(), 3);
}

#[test]
fn elapse_matches_repeated_ticks() {
    let mut stepped = CarouselController::with_interval(N, 100);
    let mut batched = CarouselController::with_interval(N, 100);
    stepped.jump_to(2).unwrap();
    batched.jump_to(2).unwrap();
    for _ in 0..13 {
        stepped.tick();
    }
    assert_eq!(batched.elapse(1350), 13);
    assert_eq!(batched.current_index(), stepped.current_index());
    assert_eq!(batched.direction(), Step::Forward);
    assert_eq!(batched.elapse(50), 1);
}

#[test]
fn elapse_handles_huge_spans_in_one_step() {
    let mut ctl = CarouselController::with_interval(N, 1);
    assert_eq!(ctl.elapse(u32::MAX), u32::MAX);
    let expected = usize::try_from(u32::MAX).unwrap() % N;
    assert_eq!(ctl.current_index(), expected);
    assert!(ctl.is_auto_playing());
}

#[test]
fn elapse_is_inert_while_paused() {
    let mut ctl = CarouselController::new(N);
    ctl.set_auto_play(false);
    assert_eq!(ctl.elapse(40_000), 0);
    assert_eq!(ctl.current_index(), 0);
}

#[test]
fn scripted_session_ticks_then_manual_jump() {
    let mut ctl = CarouselController::new(N);
    for _ in 0..3 {
        ctl.elapse(4000);
    }
    assert_eq!(ctl.state(), CarouselState { current_index: 3, auto_playing: true });

    ctl.select(1).unwrap();
    assert_eq!(ctl.state(), CarouselState { current_index: 1, auto_playing: false });

    ctl.elapse(20_000);
    ctl.tick();
    assert_eq!(ctl.state(), CarouselState { current_index: 1, auto_playing: false });
}
