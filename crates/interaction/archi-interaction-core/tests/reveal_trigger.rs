use archi_interaction_core::{
    Effect, ElementId, IntersectionReport, RevealConfig, RevealStyle, Target, VisibilityTrigger,
    WatchState,
};

fn trigger_with(ids: &[(u32, RevealStyle)]) -> VisibilityTrigger {
    let mut t = VisibilityTrigger::new(&RevealConfig::default());
    for (id, style) in ids {
        assert!(t.watch(ElementId(*id), *style));
    }
    t
}

fn hit(id: u32, ratio: f64) -> IntersectionReport {
    IntersectionReport::new(ElementId(id), true, ratio)
}

#[test]
fn reveals_once_and_unobserves() {
    let mut t = trigger_with(&[(0, RevealStyle::FadeUp)]);
    assert_eq!(t.state(ElementId(0)), WatchState::Watching);

    let fx = t.on_intersections(&[hit(0, 0.25)]);
    assert_eq!(
        fx,
        vec![
            Effect::AddClass {
                target: Target::Element(ElementId(0)),
                class: "visible",
            },
            Effect::Unobserve(ElementId(0)),
        ]
    );
    assert!(t.is_revealed(ElementId(0)));

    // Further reports, including scrolling away, change nothing.
    assert!(t.on_intersections(&[hit(0, 0.9)]).is_empty());
    assert!(t
        .on_intersections(&[IntersectionReport::new(ElementId(0), false, 0.0)])
        .is_empty());
    assert!(t.is_revealed(ElementId(0)));
}

#[test]
fn below_threshold_or_not_intersecting_keeps_watching() {
    let mut t = trigger_with(&[(1, RevealStyle::FadeFromLeft)]);
    assert!(t.on_intersections(&[hit(1, 0.02)]).is_empty());
    assert!(t
        .on_intersections(&[IntersectionReport::new(ElementId(1), false, 0.5)])
        .is_empty());
    assert_eq!(t.state(ElementId(1)), WatchState::Watching);

    // Observers may round the crossing ratio slightly below the threshold.
    assert_eq!(t.on_intersections(&[hit(1, 0.0999)]).len(), 2);
}

#[test]
fn revealed_flag_is_monotonic_across_mixed_batches() {
    let mut t = trigger_with(&[
        (0, RevealStyle::FadeUp),
        (1, RevealStyle::FadeFromLeft),
        (2, RevealStyle::FadeFromRight),
    ]);
    let batches: Vec<Vec<IntersectionReport>> = vec![
        vec![hit(0, 0.5), hit(1, 0.01)],
        vec![IntersectionReport::new(ElementId(0), false, 0.0), hit(2, 1.0)],
        vec![hit(1, 0.3), hit(0, 0.3), hit(2, 0.3)],
    ];
    let mut seen = [false; 3];
    let mut reveal_counts = [0usize; 3];
    for batch in &batches {
        for fx in t.on_intersections(batch) {
            if let Effect::AddClass {
                target: Target::Element(ElementId(i)),
                ..
            } = fx
            {
                reveal_counts[i as usize] += 1;
            }
        }
        for (i, was) in seen.iter_mut().enumerate() {
            let now = t.is_revealed(ElementId(i as u32));
            assert!(!(*was && !now), "element {i} was hidden again");
            *was = now;
        }
    }
    assert_eq!(reveal_counts, [1, 1, 1]);
    assert_eq!(t.revealed_count(), 3);
    assert_eq!(t.watching_count(), 0);
}

#[test]
fn unknown_elements_and_empty_batches_are_noops() {
    let mut t = trigger_with(&[]);
    assert!(t.on_intersections(&[]).is_empty());
    assert!(t.on_intersections(&[hit(42, 1.0)]).is_empty());
    assert_eq!(t.state(ElementId(42)), WatchState::Unobserved);
}

#[test]
fn rewatching_a_revealed_element_is_ignored() {
    let mut t = trigger_with(&[(3, RevealStyle::FadeUp)]);
    t.on_intersections(&[hit(3, 1.0)]);
    assert!(!t.watch(ElementId(3), RevealStyle::FadeFromRight));
    assert!(t.is_revealed(ElementId(3)));
    assert_eq!(t.style(ElementId(3)), Some(RevealStyle::FadeUp));
}
