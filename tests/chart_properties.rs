//! End-to-end behavior of the chart: path geometry, blending, selection
//! and highlight invariants over the bundled dataset.

use std::sync::Arc;
use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use rainbow_chart::prelude::*;

fn graph(ms: u64) -> PriceGraph {
    PriceGraph::builder()
        .timing(Timing::new(Duration::from_millis(ms), Easing::InOutQuad))
        .build()
        .expect("bundled graph should build")
}

fn random_series(rng: &mut StdRng, n: usize) -> Vec<PricePoint> {
    let mut t = rng.gen_range(1.0e9..1.7e9);
    (0..n)
        .map(|_| {
            t += rng.gen_range(1.0..3600.0);
            PricePoint::new(rng.gen_range(0.01..100_000.0), t)
        })
        .collect()
}

#[test]
fn built_paths_stay_inside_viewport() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..200 {
        let n = rng.gen_range(2..=60);
        let series = random_series(&mut rng, n);
        let built = build_graph(&series, SIZE).unwrap();
        for p in built.path.points() {
            assert!(
                (0.0..=SIZE).contains(&p.x) && (0.0..=SIZE).contains(&p.y),
                "point {p:?} escaped the viewport for {n} samples"
            );
        }
    }
}

#[test]
fn building_twice_is_byte_identical() {
    let history = PriceHistory::bundled().unwrap();
    for series in history.iter() {
        let head = series.head(POINTS);
        let a = build_graph(head, SIZE).unwrap();
        let b = build_graph(head, SIZE).unwrap();
        assert_eq!(a.data, b.data, "{} path differs between builds", series.range);
        assert_eq!(a.path.to_svg(), b.path.to_svg());
    }
}

#[test]
fn blend_boundaries_match_endpoints() {
    let graph = graph(100);
    let catalog = graph.catalog();
    let a = &catalog.by_range(Range::Hour).path;
    let b = &catalog.by_range(Range::Year).path;
    assert_eq!(mix(0.0, a, b), **a);
    assert_eq!(mix(1.0, a, b), **b);

    let t0 = Instant::now();
    let presenter = graph.presenter();
    presenter.press("1Y", t0).unwrap();
    assert_eq!(*presenter.frame(t0).path, **a);
    assert_eq!(*presenter.frame(t0 + Duration::from_millis(100)).path, **b);
}

#[test]
fn selecting_same_range_twice_ends_on_same_path() {
    let once = graph(100);
    let twice = graph(100);
    let t0 = Instant::now();

    once.presenter().press("1D", t0).unwrap();
    twice.presenter().press("1D", t0).unwrap();
    twice
        .presenter()
        .press("1D", t0 + Duration::from_millis(150))
        .unwrap();

    let settle = t0 + Duration::from_secs(1);
    let a = once.presenter().frame(settle);
    let b = twice.presenter().frame(settle);
    assert!(a.settled && b.settled);
    assert_eq!(a.d, b.d);
    assert_eq!(a.selected, b.selected);
}

#[test]
fn reselect_restarts_a_no_op_blend() {
    let graph = graph(100);
    let t0 = Instant::now();
    let presenter = graph.presenter();
    presenter.press("1M", t0).unwrap();
    presenter.frame(t0 + Duration::from_millis(200));

    presenter.press("1M", t0 + Duration::from_millis(300)).unwrap();
    let frame = presenter.frame(t0 + Duration::from_millis(340));
    assert!(!frame.settled);
    assert!(frame.progress < 1.0);
    assert_eq!(*frame.path, *graph.catalog().by_range(Range::Month).path);
}

#[test]
fn exactly_one_label_highlighted_when_settled() {
    let graph = graph(100);
    let presenter = graph.presenter();
    let t0 = Instant::now();
    let labels = ["1H", "1D", "1M", "1Y", "all", "1M", "1H"];
    for (i, label) in labels.iter().enumerate() {
        let at = t0 + Duration::from_millis(250 * i as u64);
        presenter.press(label, at).unwrap();
        let frame = presenter.frame(at + Duration::from_millis(200));
        assert!(frame.settled);
        let lit: Vec<_> = frame.highlighted().collect();
        assert_eq!(lit.len(), 1);
        assert_eq!(lit[0].label, *label);
        assert_eq!(lit[0].rank, frame.selected);
    }
}

#[test]
fn preemption_blends_from_what_was_on_screen() {
    let graph = graph(100);
    let presenter = graph.presenter();
    let controller = graph.controller();
    let t0 = Instant::now();

    presenter.press("1D", t0).unwrap();
    let mid = t0 + Duration::from_millis(40);
    let shown = presenter.frame(mid);
    assert!(!shown.settled);

    presenter.press("all", mid).unwrap();
    let after = controller.snapshot();
    assert_eq!(after.progress, 0.0);
    assert_eq!(*after.previous, *shown.path);
    assert_ne!(*after.previous, *graph.catalog().by_range(Range::Hour).path);
    assert_eq!(after.current, graph.catalog().by_range(Range::All).path);

    // The restarted blend begins exactly where the old one was cut off.
    assert_eq!(presenter.frame(mid).d, shown.d);
    let end = presenter.frame(mid + Duration::from_millis(100));
    assert!(end.settled);
    assert_eq!(*end.path, *graph.catalog().by_range(Range::All).path);
}

#[test]
fn short_range_blends_with_full_range() {
    let graph = graph(100);
    let catalog = graph.catalog();
    let full = &catalog.by_range(Range::Hour).path;
    let short = &catalog.by_range(Range::All).path;
    assert!(short.len() < full.len());

    let halfway = mix(0.5, full, short);
    assert_eq!(halfway.len(), full.len());
    let (lo, hi) = halfway.bounds();
    assert!(lo.x >= 0.0 && lo.y >= 0.0 && hi.x <= SIZE && hi.y <= SIZE);
}

#[test]
fn interaction_and_render_threads_share_state() {
    let graph = graph(50);
    let ui = graph.clone();
    let t0 = Instant::now();

    std::thread::spawn(move || ui.presenter().press("1Y", t0).unwrap())
        .join()
        .unwrap();

    let frame = graph.presenter().frame(t0 + Duration::from_millis(60));
    assert_eq!(frame.selected, 3);
    assert!(frame.settled);
    assert!(Arc::ptr_eq(
        &graph.controller().current_path(),
        &graph.catalog().by_range(Range::Year).path
    ));
}

#[test]
fn rendered_svg_carries_path_and_cursor() {
    let graph = graph(100);
    let frame = graph.presenter().frame(Instant::now());
    let svg = render_svg(&frame, graph.config());
    assert!(svg.contains(&format!(r#"d="{}""#, frame.d)));
    assert!(svg.contains(r#"fill="transparent" stroke="black" stroke-width="3""#));
    assert!(svg.contains("<circle"));
}
