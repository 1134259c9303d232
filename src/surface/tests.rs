use super::*;
use crate::draw::{BLUE, CYAN, PaintMode, PathSegment, Point, RED, RasterBuffer};

fn create_test_surface() -> StrokeSurface {
    StrokeSurface::new(64, 48, SurfaceSettings::default()).expect("surface allocates")
}

fn draw_line(surface: &mut StrokeSurface, from: (f64, f64), to: (f64, f64)) {
    surface.on_pointer_down(from.0, from.1);
    surface.on_pointer_move((from.0 + to.0) / 2.0, (from.1 + to.1) / 2.0);
    surface.on_pointer_up(to.0, to.1);
}

fn frame_pixel(frame: &cairo::ImageSurface, x: usize, y: usize) -> u32 {
    let stride = frame.stride() as usize;
    let mut value = 0;
    frame
        .with_data(|data| {
            let offset = y * stride + x * 4;
            value = u32::from_ne_bytes([
                data[offset],
                data[offset + 1],
                data[offset + 2],
                data[offset + 3],
            ]);
        })
        .unwrap();
    value
}

fn render_to_image(surface: &StrokeSurface) -> cairo::ImageSurface {
    let frame = cairo::ImageSurface::create(
        cairo::Format::ARgb32,
        surface.width() as i32,
        surface.height() as i32,
    )
    .unwrap();
    {
        let ctx = cairo::Context::new(&frame).unwrap();
        surface.render(&ctx).unwrap();
    }
    frame
}

#[test]
fn new_surface_is_idle_with_default_paint() {
    let surface = create_test_surface();
    assert_eq!(surface.state(), &GestureState::Idle);
    assert_eq!(surface.paint_mode(), PaintMode::draw(CYAN, 10.0));
    assert_eq!((surface.width(), surface.height()), (64, 48));
    assert_eq!(surface.display_size(), (64, 48));
    assert!(surface.raster().is_blank().unwrap());
    assert!(surface.needs_redraw());
}

#[test]
fn pointer_down_starts_stroke_at_point() {
    let mut surface = create_test_surface();
    surface.take_redraw_regions();

    surface.on_pointer_down(10.0, 12.0);
    match surface.state() {
        GestureState::Stroking { path, last } => {
            assert_eq!(*last, Point::new(10.0, 12.0));
            assert_eq!(
                path.segments(),
                &[PathSegment::MoveTo(Point::new(10.0, 12.0))]
            );
        }
        GestureState::Idle => panic!("expected a stroke in progress"),
    }
    assert!(surface.needs_redraw());
}

#[test]
fn moves_within_tolerance_are_dropped() {
    let mut surface = create_test_surface();
    surface.on_pointer_down(10.0, 10.0);

    for (x, y) in [(11.0, 11.0), (13.9, 6.1), (7.0, 13.5), (10.0, 10.0)] {
        surface.on_pointer_move(x, y);
    }

    let GestureState::Stroking { path, last } = surface.state() else {
        panic!("expected a stroke in progress");
    };
    assert_eq!(path.segment_count(), 0);
    assert_eq!(*last, Point::new(10.0, 10.0));
}

#[test]
fn move_at_tolerance_adds_midpoint_curve() {
    let mut surface = create_test_surface();
    surface.on_pointer_down(10.0, 10.0);
    surface.on_pointer_move(14.0, 10.0);

    let GestureState::Stroking { path, last } = surface.state() else {
        panic!("expected a stroke in progress");
    };
    assert_eq!(*last, Point::new(14.0, 10.0));
    assert_eq!(
        path.segments()[1],
        PathSegment::QuadTo {
            ctrl: Point::new(10.0, 10.0),
            end: Point::new(12.0, 10.0),
        }
    );
}

#[test]
fn gesture_scenario_commits_two_segments() {
    let mut surface = create_test_surface();
    surface.on_pointer_down(10.0, 10.0);
    surface.on_pointer_move(20.0, 10.0);
    surface.on_pointer_move(21.0, 11.0);

    if let GestureState::Stroking { last, path } = surface.state() {
        assert_eq!(*last, Point::new(20.0, 10.0));
        assert_eq!(path.segment_count(), 1);
    } else {
        panic!("expected a stroke in progress");
    }

    let committed = surface.on_pointer_up(30.0, 10.0).expect("stroke was in progress");
    assert_eq!(committed.segment_count(), 2);
    assert_eq!(
        committed.segments(),
        &[
            PathSegment::MoveTo(Point::new(10.0, 10.0)),
            PathSegment::QuadTo {
                ctrl: Point::new(10.0, 10.0),
                end: Point::new(15.0, 10.0),
            },
            PathSegment::LineTo(Point::new(30.0, 10.0)),
        ]
    );

    assert_eq!(surface.state(), &GestureState::Idle);
    assert!(surface.active_path().is_none());
    assert_eq!(surface.raster().pixel(20, 10), Some(0xFF00E1FF));
}

#[test]
fn tap_composites_a_dot() {
    let mut surface = create_test_surface();
    surface.on_pointer_down(10.0, 10.0);
    let committed = surface.on_pointer_up(10.0, 10.0).unwrap();

    assert_eq!(committed.segment_count(), 1);
    assert_eq!(surface.raster().pixel(10, 10), Some(0xFF00E1FF));
    assert_eq!(surface.raster().pixel(40, 40), Some(0));
    assert_eq!((surface.width(), surface.height()), (64, 48));
}

#[test]
fn paint_color_applies_to_next_stroke() {
    let mut surface = create_test_surface();
    surface.set_paint_color(RED);
    draw_line(&mut surface, (5.0, 10.0), (50.0, 10.0));
    surface.set_paint_color(BLUE);
    draw_line(&mut surface, (5.0, 30.0), (50.0, 30.0));

    assert_eq!(surface.raster().pixel(30, 10), Some(0xFFFF0000));
    assert_eq!(surface.raster().pixel(30, 30), Some(0xFF0000FF));
}

#[test]
fn eraser_clears_pixels_of_any_color() {
    let mut surface = create_test_surface();
    surface.set_paint_color(RED);
    draw_line(&mut surface, (5.0, 20.0), (50.0, 20.0));
    surface.set_paint_color(BLUE);
    draw_line(&mut surface, (30.0, 5.0), (30.0, 40.0));
    assert_eq!(surface.raster().pixel(15, 20), Some(0xFFFF0000));
    assert_eq!(surface.raster().pixel(30, 20), Some(0xFF0000FF));

    surface.set_eraser();
    assert!(surface.paint_mode().is_eraser());
    draw_line(&mut surface, (5.0, 20.0), (50.0, 20.0));

    assert_eq!(surface.raster().pixel(15, 20), Some(0));
    assert_eq!(surface.raster().pixel(30, 20), Some(0));
    assert_eq!(surface.raster().pixel(30, 35), Some(0xFF0000FF));
}

#[test]
fn paint_color_after_eraser_draws_again() {
    let mut surface = create_test_surface();
    surface.set_eraser();
    surface.set_paint_color(RED);
    assert_eq!(surface.paint_mode(), PaintMode::draw(RED, 10.0));

    draw_line(&mut surface, (5.0, 20.0), (50.0, 20.0));
    assert_eq!(surface.raster().pixel(20, 20), Some(0xFFFF0000));
}

#[test]
fn clear_discards_strokes_but_keeps_paint() {
    let mut surface = create_test_surface();
    surface.set_paint_color(RED);
    draw_line(&mut surface, (5.0, 20.0), (50.0, 20.0));
    assert!(!surface.raster().is_blank().unwrap());

    surface.clear().unwrap();
    let exported = surface.export_raster().unwrap();
    assert!(exported.is_blank().unwrap());
    assert_eq!((exported.width(), exported.height()), (64, 48));
    assert_eq!(surface.paint_mode(), PaintMode::draw(RED, 10.0));
}

#[test]
fn clear_reallocates_at_display_size() {
    let mut surface = create_test_surface();
    surface.set_display_size(80, 60);
    assert_eq!((surface.width(), surface.height()), (64, 48));

    surface.clear().unwrap();
    assert_eq!((surface.width(), surface.height()), (80, 60));
}

#[test]
fn initialize_resets_paint_and_gesture() {
    let mut surface = create_test_surface();
    surface.set_eraser();
    surface.on_pointer_down(3.0, 3.0);

    surface.initialize(32, 16).unwrap();
    assert_eq!(surface.paint_mode(), PaintMode::draw(CYAN, 10.0));
    assert_eq!(surface.state(), &GestureState::Idle);
    assert_eq!((surface.width(), surface.height()), (32, 16));
}

#[test]
fn export_is_a_snapshot() {
    let mut surface = create_test_surface();
    let before = surface.export_raster().unwrap();
    draw_line(&mut surface, (5.0, 20.0), (50.0, 20.0));

    assert!(before.is_blank().unwrap());
    assert!(!surface.export_raster().unwrap().is_blank().unwrap());
}

#[test]
fn exported_png_reopens_pixel_identical() {
    let mut surface = create_test_surface();
    surface.set_paint_color(RED);
    surface.on_pointer_down(4.0, 4.0);
    surface.on_pointer_move(20.0, 30.0);
    surface.on_pointer_move(40.0, 8.0);
    surface.on_pointer_up(60.0, 44.0);
    surface.set_eraser();
    draw_line(&mut surface, (0.0, 20.0), (64.0, 20.0));

    let exported = surface.export_raster().unwrap();
    let mut png = Vec::new();
    exported.write_png(&mut png).unwrap();

    let reopened = StrokeSurface::with_raster(
        RasterBuffer::read_png(&mut png.as_slice()).unwrap(),
        SurfaceSettings::default(),
    );
    assert_eq!((reopened.width(), reopened.height()), (64, 48));
    for y in 0..48 {
        for x in 0..64 {
            assert_eq!(
                reopened.raster().pixel(x, y),
                surface.raster().pixel(x, y),
                "pixel ({x}, {y})"
            );
        }
    }
}

#[test]
fn cancel_discards_without_compositing() {
    let mut surface = create_test_surface();
    surface.on_pointer_down(5.0, 20.0);
    surface.on_pointer_move(40.0, 20.0);

    assert!(surface.on_pointer_cancel());
    assert_eq!(surface.state(), &GestureState::Idle);
    assert!(surface.raster().is_blank().unwrap());
    assert!(!surface.on_pointer_cancel());
}

#[test]
fn events_without_gesture_are_ignored() {
    let mut surface = create_test_surface();
    surface.on_pointer_move(20.0, 20.0);
    assert_eq!(surface.state(), &GestureState::Idle);
    assert!(surface.on_pointer_up(20.0, 20.0).is_none());
    assert!(surface.raster().is_blank().unwrap());
}

#[test]
fn pointer_down_mid_stroke_restarts_gesture() {
    let mut surface = create_test_surface();
    surface.on_pointer_down(5.0, 5.0);
    surface.on_pointer_move(40.0, 5.0);
    surface.on_pointer_down(10.0, 40.0);

    let committed = surface.on_pointer_up(12.0, 40.0).unwrap();
    assert_eq!(committed.segments()[0], PathSegment::MoveTo(Point::new(10.0, 40.0)));
    assert_eq!(surface.raster().pixel(30, 5), Some(0));
}

#[test]
fn out_of_bounds_samples_are_accepted() {
    let mut surface = create_test_surface();
    surface.on_pointer_down(-20.0, 10.0);
    surface.on_pointer_move(200.0, 10.0);
    let committed = surface.on_pointer_up(300.0, 10.0).unwrap();

    assert_eq!(committed.segment_count(), 2);
    assert_eq!(surface.raster().pixel(30, 10), Some(0xFF00E1FF));
}

#[test]
fn far_off_surface_gesture_leaves_raster_untouched() {
    let mut surface = create_test_surface();
    surface.take_redraw_regions();

    surface.on_pointer_down(3e9, 3e9);
    surface.on_pointer_move(-3e9, 0.0);
    let committed = surface.on_pointer_up(-3e9, 0.0).unwrap();

    assert_eq!(committed.segment_count(), 2);
    assert_eq!(surface.state(), &GestureState::Idle);
    assert!(surface.raster().is_blank().unwrap());
    assert!(
        surface
            .take_redraw_regions()
            .iter()
            .all(|rect| rect.x >= 0 && rect.y >= 0 && rect.x + rect.width <= 64)
    );
    assert_eq!(frame_pixel(&render_to_image(&surface), 30, 10), 0xFFBBBBBB);
}

#[test]
fn stroke_spanning_far_beyond_both_edges_crosses_the_surface() {
    let mut surface = create_test_surface();
    surface.on_pointer_down(-1e10, 10.0);
    surface.on_pointer_move(1e10, 10.0);
    surface.on_pointer_up(1e10, 10.0);

    assert_eq!(surface.state(), &GestureState::Idle);
    assert_eq!(surface.raster().pixel(30, 10), Some(0xFF00E1FF));
    assert_eq!(surface.raster().pixel(30, 30), Some(0));
}

#[test]
fn eraser_preview_punches_through_the_frame() {
    let mut surface = create_test_surface();
    surface.set_paint_color(RED);
    draw_line(&mut surface, (5.0, 20.0), (50.0, 20.0));

    surface.set_eraser();
    surface.on_pointer_down(5.0, 20.0);
    surface.on_pointer_move(50.0, 20.0);

    let frame = render_to_image(&surface);
    assert_eq!(frame_pixel(&frame, 15, 20), 0);
    assert_eq!(frame_pixel(&frame, 45, 20), 0xFFFF0000);
    assert_eq!(frame_pixel(&frame, 15, 40), 0xFFBBBBBB);
    // Nothing is erased until the gesture ends.
    assert_eq!(surface.raster().pixel(15, 20), Some(0xFFFF0000));

    surface.on_pointer_up(50.0, 20.0);
    assert_eq!(surface.raster().pixel(15, 20), Some(0));
    assert_eq!(frame_pixel(&render_to_image(&surface), 15, 20), 0xFFBBBBBB);
}

#[test]
fn render_layers_background_raster_and_live_stroke() {
    let mut surface = create_test_surface();
    surface.set_paint_color(RED);
    draw_line(&mut surface, (5.0, 10.0), (50.0, 10.0));
    surface.set_paint_color(BLUE);
    surface.on_pointer_down(5.0, 35.0);
    surface.on_pointer_move(50.0, 35.0);

    let state_before = surface.state().clone();
    let first = render_to_image(&surface);
    let second = render_to_image(&surface);

    assert_eq!(frame_pixel(&first, 60, 45), 0xFFBBBBBB);
    assert_eq!(frame_pixel(&first, 30, 10), 0xFFFF0000);
    assert_eq!(frame_pixel(&first, 20, 35), 0xFF0000FF);
    assert_eq!(frame_pixel(&second, 20, 35), 0xFF0000FF);
    assert_eq!(surface.state(), &state_before);
    assert_eq!(surface.raster().pixel(20, 35), Some(0));
}

#[test]
fn redraw_regions_follow_pointer_activity() {
    let mut surface = create_test_surface();
    let initial = surface.take_redraw_regions();
    assert_eq!(initial.len(), 1);
    assert_eq!((initial[0].width, initial[0].height), (64, 48));
    assert!(!surface.needs_redraw());

    surface.on_pointer_down(10.0, 10.0);
    surface.on_pointer_move(30.0, 10.0);
    assert!(surface.needs_redraw());
    let regions = surface.take_redraw_regions();
    assert!(!regions.is_empty());
    assert!(regions.iter().all(|rect| rect.width < 64));

    surface.clear().unwrap();
    assert_eq!(surface.take_redraw_regions().len(), 1);
}

#[test]
fn drawing_surface_trait_dispatches_events() {
    fn drive(target: &mut dyn DrawingSurface) {
        target.handle_pointer(PointerEvent::Down { x: 5.0, y: 20.0 });
        target.handle_pointer(PointerEvent::Move { x: 30.0, y: 20.0 });
        target.handle_pointer(PointerEvent::Up { x: 50.0, y: 20.0 });
        target.handle_pointer(PointerEvent::Down { x: 5.0, y: 40.0 });
        target.handle_pointer(PointerEvent::Cancel);
    }

    let mut surface = create_test_surface();
    drive(&mut surface);

    assert_eq!(surface.state(), &GestureState::Idle);
    assert_eq!(surface.raster().pixel(25, 20), Some(0xFF00E1FF));
    assert_eq!(surface.raster().pixel(5, 40), Some(0));
}
