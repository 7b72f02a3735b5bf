use plotview_core::{FitState, HorizontalExtent, Margins, PlotterSettings, PlotterView, VerticalExtent};

fn view_with_width(width: i64) -> PlotterView {
    PlotterView::new(&PlotterSettings {
        window_width: width,
        ..PlotterSettings::default()
    })
}

fn assert_visible_points_framed(view: &PlotterView) {
    let horizontal = view.horizontal_extent();
    let vertical = view.vertical_extent();
    assert!(vertical.min <= vertical.max);
    for (line, series) in view.lines() {
        assert!(series.last_x() <= view.current_x());
        for point in series.visible(horizontal.min, horizontal.max) {
            assert!(horizontal.contains(point.x));
            assert!(
                vertical.contains(point.y),
                "line {line} point {point:?} outside {vertical:?}"
            );
        }
    }
}

/// The extent must be exactly the padded range of what is visible, no wider.
fn assert_fit_is_tight(view: &PlotterView) {
    let (lo, hi) = view
        .store()
        .visible_range()
        .expect("active view has visible points");
    assert_eq!(view.vertical_extent(), view.margins().pad(lo, hi));
}

/// Small deterministic generator so the property runs are reproducible.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0 >> 33
    }

    fn value(&mut self) -> f64 {
        (self.next() % 2000) as f64 / 10.0 - 100.0
    }
}

#[test]
fn fresh_view_is_empty_with_placeholder_extents() {
    let view = view_with_width(10);
    assert_eq!(view.state(), FitState::Empty);
    assert_eq!(view.current_x(), 0);
    assert_eq!(view.vertical_extent(), VerticalExtent::default());
    assert_eq!(view.horizontal_extent(), HorizontalExtent { min: -10, max: 0 });
    assert_eq!(view.lines().count(), 0);
}

#[test]
fn current_x_advances_once_per_advancing_call() {
    let mut view = view_with_width(5);
    let mut rng = Lcg(7);
    let mut expected = 0;
    for step in 0..200 {
        let advance = rng.next() % 3 != 0;
        let before = view.current_x();
        view.plot_point(rng.value(), (step % 4) as usize, advance);
        if advance {
            expected += 1;
        }
        assert!(view.current_x() >= before);
        assert_eq!(view.current_x(), expected);
    }
}

#[test]
fn visible_points_stay_framed_under_random_input() {
    let mut view = view_with_width(8);
    let mut rng = Lcg(42);
    for step in 0..500 {
        match rng.next() % 20 {
            0 => view.set_window_width((rng.next() % 30) as i64 - 5),
            1 if step % 7 == 0 => view.clear(),
            _ => {
                let line = (rng.next() % 3) as usize;
                view.plot_point(rng.value(), line, rng.next() % 2 == 0);
            }
        }
        if view.state() == FitState::Active {
            assert_visible_points_framed(&view);
            assert_fit_is_tight(&view);
        }
    }
}

#[test]
fn incremental_fit_matches_rescan_with_retention() {
    let mut view = PlotterView::new(&PlotterSettings {
        window_width: 6,
        retain_ticks: Some(4),
        ..PlotterSettings::default()
    });
    let mut rng = Lcg(1234);
    for step in 0..2000 {
        match rng.next() % 25 {
            0 => view.set_window_width((rng.next() % 20) as i64),
            1 if step % 5 == 0 => view.clear(),
            _ => {
                let line = (rng.next() % 4) as usize;
                view.plot_point(rng.value(), line, rng.next() % 3 != 0);
            }
        }
        if view.state() == FitState::Active {
            assert_visible_points_framed(&view);
            assert_fit_is_tight(&view);
        }
    }
}

#[test]
fn invalid_margins_keep_extent_ordered() {
    let mut view = PlotterView::new(&PlotterSettings {
        margin_fraction: -1.0,
        floor_margin: 0.0,
        ..PlotterSettings::default()
    });
    assert_eq!(view.margins(), Margins::default());

    view.plot_point(5.0, 0, true);
    let single = view.vertical_extent();
    assert!(single.min < 5.0 && 5.0 < single.max);

    view.plot_point(0.0, 0, true);
    view.plot_point(10.0, 0, true);
    assert_eq!(view.vertical_extent(), Margins::default().pad(0.0, 10.0));

    view.apply_settings(&PlotterSettings {
        margin_fraction: f64::INFINITY,
        floor_margin: -3.0,
        ..PlotterSettings::default()
    });
    assert_eq!(view.margins(), Margins::default());
    assert_fit_is_tight(&view);
}

#[test]
fn old_extremes_stop_pinning_after_scrolling_out() {
    let mut view = view_with_width(3);
    for value in [10.0, 5.0, 8.0, 20.0, 3.0] {
        view.plot_point(value, 0, true);
    }
    assert_eq!(view.current_x(), 5);
    assert_eq!(view.horizontal_extent(), HorizontalExtent { min: 2, max: 5 });
    assert_eq!(view.vertical_extent(), Margins::default().pad(3.0, 20.0));
    assert_eq!(view.line(0).unwrap().len(), 5);
    assert_visible_points_framed(&view);
}

#[test]
fn range_shrinks_when_both_bounds_scroll_out() {
    let mut view = view_with_width(2);
    for value in [100.0, 1.0, 2.0, 3.0, 4.0] {
        view.plot_point(value, 0, true);
    }
    assert_eq!(view.vertical_extent(), Margins::default().pad(2.0, 4.0));
}

#[test]
fn clear_matches_fresh_instance() {
    let mut used = view_with_width(4);
    for (idx, value) in [3.0, -7.0, 12.5, 0.0, 9.0, 4.0].into_iter().enumerate() {
        used.plot_point(value, idx % 3, idx % 2 == 0);
    }
    used.clear();
    assert_eq!(used.state(), FitState::Empty);
    used.plot_point(5.0, 0, true);

    let mut fresh = view_with_width(4);
    fresh.plot_point(5.0, 0, true);

    assert_eq!(used, fresh);
    assert_eq!(used.current_x(), 1);
    assert_eq!(used.vertical_extent(), Margins::default().pad(5.0, 5.0));
    assert_eq!(used.line(0).unwrap().len(), 1);
    assert!(used.line(1).is_none());
}

#[test]
fn same_tick_points_share_x_across_lines() {
    let mut view = view_with_width(10);
    view.plot_point(1.5, 0, true);
    view.plot_point(-2.5, 1, false);

    let line0: Vec<_> = view.line(0).unwrap().points().iter().copied().collect();
    let line1: Vec<_> = view.line(1).unwrap().points().iter().copied().collect();
    assert_eq!(line0.len(), 1);
    assert_eq!(line1.len(), 1);
    assert_eq!(line0[0].x, line1[0].x);
    assert_eq!(line0[0].y, 1.5);
    assert_eq!(line1[0].y, -2.5);
}

#[test]
fn plot_frame_advances_once_per_frame() {
    let mut view = view_with_width(10);
    view.plot_frame(&[1.0, 2.0, 3.0]);
    view.plot_frame(&[4.0, 5.0, 6.0]);
    assert_eq!(view.current_x(), 2);
    for (line, series) in view.lines() {
        let xs: Vec<i64> = series.points().iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![1, 2], "line {line}");
    }
    assert_eq!(view.vertical_extent(), Margins::default().pad(1.0, 6.0));
}

#[test]
fn repeated_window_width_is_idempotent() {
    let mut once = view_with_width(10);
    for value in [4.0, 8.0, -1.0, 6.0, 2.0, 7.0] {
        once.plot_point(value, 0, true);
    }
    let mut twice = once.clone();
    once.set_window_width(3);
    twice.set_window_width(3);
    twice.set_window_width(3);
    assert_eq!(once, twice);
    assert_eq!(once.vertical_extent(), Margins::default().pad(-1.0, 7.0));
}

#[test]
fn single_point_gets_non_zero_range() {
    let mut view = view_with_width(10);
    view.plot_point(42.0, 0, true);
    let extent = view.vertical_extent();
    assert!(extent.max > extent.min);
    assert!(extent.contains(42.0));
    assert_eq!(view.state(), FitState::Active);
}

#[test]
fn window_width_is_clamped_to_one() {
    let mut view = view_with_width(10);
    view.set_window_width(0);
    assert_eq!(view.window_width(), 1);
    view.set_window_width(-12);
    assert_eq!(view.window_width(), 1);
    assert_eq!(view_with_width(-3).window_width(), 1);
}

#[test]
fn widening_window_brings_old_points_back_into_fit() {
    let mut view = view_with_width(3);
    for value in 1..=10 {
        view.plot_point(value as f64, 0, true);
    }
    assert_eq!(view.vertical_extent(), Margins::default().pad(7.0, 10.0));
    view.set_window_width(100);
    assert_eq!(view.vertical_extent(), Margins::default().pad(1.0, 10.0));
    assert_eq!(view.horizontal_extent(), HorizontalExtent { min: -90, max: 10 });
}

#[test]
fn history_is_retained_by_default() {
    let mut view = view_with_width(2);
    for value in 0..50 {
        view.plot_point(value as f64, 0, true);
    }
    assert_eq!(view.line(0).unwrap().len(), 50);
}

#[test]
fn retention_policy_never_trims_visible_window() {
    let settings = PlotterSettings {
        window_width: 3,
        retain_ticks: Some(2),
        ..PlotterSettings::default()
    };
    let mut bounded = PlotterView::new(&settings);
    let mut unbounded = view_with_width(3);
    for value in [9.0, 1.0, 4.0, 6.0, 2.0, 8.0, 5.0, 3.0, 7.0, 0.5] {
        bounded.plot_point(value, 0, true);
        unbounded.plot_point(value, 0, true);
        assert_eq!(bounded.vertical_extent(), unbounded.vertical_extent());
    }
    let series = bounded.line(0).unwrap();
    let xs: Vec<i64> = series.points().iter().map(|p| p.x).collect();
    assert_eq!(xs, vec![7, 8, 9, 10]);
    assert_eq!(series.start_x(), 1);
}

#[test]
fn summaries_report_visible_range_and_names() {
    let mut view = PlotterView::new(&PlotterSettings {
        window_width: 2,
        line_names: vec!["temp".to_string()],
        ..PlotterSettings::default()
    });
    for (a, b) in [(1.0, 10.0), (2.0, 20.0), (3.0, 30.0), (4.0, 40.0)] {
        view.plot_frame(&[a, b]);
    }
    let summaries = view.line_summaries();
    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[0].name, "temp");
    assert_eq!(summaries[1].name, "line 1");
    assert_eq!(summaries[0].points, 4);
    assert_eq!(summaries[0].start_x, 1);
    assert_eq!(summaries[0].last_x, 4);
    assert_eq!(summaries[0].last_value, Some(4.0));
    assert_eq!(summaries[0].visible, Some((2.0, 4.0)));
    assert_eq!(summaries[1].visible, Some((20.0, 40.0)));
}

#[test]
fn apply_settings_refits_existing_samples() {
    let mut view = view_with_width(10);
    for value in [0.0, 10.0] {
        view.plot_point(value, 0, true);
    }
    view.apply_settings(&PlotterSettings {
        window_width: 10,
        margin_fraction: 0.5,
        ..PlotterSettings::default()
    });
    assert_eq!(view.vertical_extent(), VerticalExtent { min: -5.0, max: 15.0 });
}
