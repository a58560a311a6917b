//! End-to-end properties of the canvas and its primitives.

use pictor_core::{Canvas, CircleOutline, Color, PixelBuffer, Point, RasterError, Size};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_strict_bounds_invariant() {
    init_logging();
    let mut buf = PixelBuffer::new(Size::new(8, 6));
    let mut canvas = Canvas::new(&mut buf);
    for &(x, y) in &[(-1, 0), (0, -1), (8, 0), (0, 6), (8, 6), (i32::MIN, i32::MAX)] {
        let err = canvas.set_pixel(x, y, Color::RED).unwrap_err();
        assert_eq!(
            err,
            RasterError::OutOfBounds {
                x,
                y,
                size: Size::new(8, 6)
            }
        );
    }
    assert_eq!(buf.count(Color::TRANSPARENT), 48);
}

#[test]
fn test_permissive_bounds_invariant() {
    init_logging();
    let mut buf = PixelBuffer::new(Size::new(8, 6));
    let before = buf.clone();
    {
        let mut canvas = Canvas::new(&mut buf);
        canvas.set_allow_out_of_bounds(true);
        for &(x, y) in &[(-1, 0), (0, -1), (8, 0), (0, 6), (100, 100)] {
            canvas.set_pixel(x, y, Color::RED).unwrap();
        }
    }
    assert_eq!(buf, before);
}

#[test]
fn test_sub_view_writes_land_in_parent() {
    init_logging();
    let mut buf = PixelBuffer::new(Size::new(20, 20));
    let mut canvas = Canvas::new(&mut buf);
    {
        let mut outer = canvas.sub_view(5, 5, Size::new(10, 10), None);
        let mut inner = outer.sub_view(2, 3, Size::new(4, 4), None);
        inner.set_pixel(1, 1, Color::GREEN).unwrap();
        assert!(inner.set_pixel(4, 0, Color::GREEN).is_err());
    }
    assert_eq!(canvas.get_pixel(8, 9).unwrap(), Color::GREEN);
    assert_eq!(buf.get(8, 9), Some(Color::GREEN));
    assert_eq!(buf.count(Color::GREEN), 1);
}

#[test]
fn test_degenerate_line_matches_filled_circle() {
    init_logging();
    let mut line_buf = PixelBuffer::new(Size::new(30, 30));
    Canvas::new(&mut line_buf)
        .line(10, 10, 10, 10, Color::RED, 6)
        .unwrap();

    let mut circle_buf = PixelBuffer::new(Size::new(30, 30));
    Canvas::new(&mut circle_buf)
        .circle(10, 10, 6, Color::RED, true)
        .unwrap();

    assert_eq!(line_buf, circle_buf);
    assert!(line_buf.count(Color::RED) > 0);
}

#[test]
fn test_thick_line_clips_on_permissive_canvas() {
    init_logging();
    let mut buf = PixelBuffer::new(Size::new(100, 100));
    let mut canvas = Canvas::new(&mut buf);
    assert!(canvas.line(-10, 50, 50, 50, Color::BLUE, 2).is_err());

    canvas.set_allow_out_of_bounds(true);
    canvas.line(-10, 50, 50, 50, Color::BLUE, 2).unwrap();
    assert_eq!(buf.get(0, 50), Some(Color::BLUE));
    assert_eq!(buf.get(50, 50), Some(Color::BLUE));
    assert_eq!(buf.get(51, 50), Some(Color::TRANSPARENT));
}

#[test]
fn test_polygon_triangle_fill() {
    init_logging();
    let mut buf = PixelBuffer::new(Size::new(100, 100));
    let triangle = [Point::new(50, 10), Point::new(30, 50), Point::new(70, 50)];
    Canvas::new(&mut buf)
        .polygon(&triangle, Color::ORANGE, true)
        .unwrap();
    assert_eq!(buf.get(50, 30), Some(Color::ORANGE));
    assert_eq!(buf.get(50, 5), Some(Color::TRANSPARENT));
}

#[test]
fn test_outline_modes_share_axis_points() {
    init_logging();
    for outline in [CircleOutline::Fixed360, CircleOutline::PerimeterProportional] {
        let mut buf = PixelBuffer::new(Size::new(41, 41));
        let mut canvas = Canvas::new(&mut buf);
        canvas.set_circle_outline(outline);
        canvas.circle(20, 20, 10, Color::BLACK, false).unwrap();
        assert_eq!(buf.get(30, 20), Some(Color::BLACK), "{outline:?}");
        assert_eq!(buf.get(20, 30), Some(Color::BLACK), "{outline:?}");
        assert_eq!(buf.get(20, 20), Some(Color::TRANSPARENT), "{outline:?}");
    }
}
