use invitation_rust::{Carousel, SwipeDirection, SwipeTracker};

#[test]
fn index_stays_in_range_for_all_sizes_and_sequences() {
    for total in 1..=6 {
        let mut carousel = Carousel::new(total);
        // A fixed mixed walk, long enough to wrap both directions repeatedly.
        for step in 0..500 {
            match step % 5 {
                0 | 3 => carousel.next(),
                1 => carousel.previous(),
                2 => {
                    carousel.previous();
                    carousel.previous();
                }
                _ => carousel.next(),
            }
            assert!(carousel.current() < total, "total={}", total);
        }
    }
}

#[test]
fn full_forward_cycle_returns_to_start() {
    let mut carousel = Carousel::new(4);
    for _ in 0..4 {
        carousel.next();
    }
    assert_eq!(carousel.current(), 0);
}

#[test]
fn full_backward_cycle_returns_to_start() {
    let mut carousel = Carousel::new(4);
    for _ in 0..4 {
        carousel.previous();
    }
    assert_eq!(carousel.current(), 0);
}

#[test]
fn go_to_marks_exactly_that_indicator_active() {
    let mut carousel = Carousel::new(5);
    for index in 0..5 {
        carousel.go_to(index);
        let frame = carousel.frame().unwrap();
        assert_eq!(frame.active, index);
        assert_eq!(frame.offsets, vec![-(index as i32) * 100; 5]);
    }
}

#[test]
fn short_swipe_never_changes_the_slide() {
    let carousel = Carousel::new(3);
    let mut tracker = SwipeTracker::new();

    for delta in [0.0, 10.0, 49.5, 50.0, -25.0, -50.0] {
        tracker.begin(200.0);
        assert_eq!(tracker.release(200.0 - delta), None);
    }
    assert_eq!(carousel.current(), 0);
}

#[test]
fn long_swipe_equals_one_step_in_its_direction() {
    let mut swiped = Carousel::new(3);
    let mut stepped = Carousel::new(3);
    let mut tracker = SwipeTracker::new();

    tracker.begin(300.0);
    match tracker.release(200.0) {
        Some(SwipeDirection::Left) => swiped.next(),
        Some(SwipeDirection::Right) => swiped.previous(),
        None => {}
    }
    stepped.next();
    assert_eq!(swiped.current(), stepped.current());

    tracker.begin(100.0);
    match tracker.release(220.0) {
        Some(SwipeDirection::Left) => swiped.next(),
        Some(SwipeDirection::Right) => swiped.previous(),
        None => {}
    }
    stepped.previous();
    assert_eq!(swiped.current(), stepped.current());
}
