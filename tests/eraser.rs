use eframe_sketch::Canvas;
use egui::{Pos2, pos2};

fn draw(canvas: &mut Canvas, points: &[Pos2]) {
    let (first, rest) = points.split_first().expect("stroke needs a point");
    canvas.begin_gesture(*first);
    for p in rest {
        canvas.extend_gesture(*p);
    }
    canvas.end_gesture();
}

#[test]
fn erase_removes_points_within_chebyshev_radius() {
    let mut canvas = Canvas::new();
    draw(&mut canvas, &[pos2(0.0, 0.0), pos2(5.0, 5.0), pos2(50.0, 50.0)]);

    canvas.erase_at(pos2(0.0, 0.0));

    // (0,0) and (5,5) are both within 10 of the erase point on both axes.
    assert_eq!(canvas.strokes()[0].points(), &[pos2(50.0, 50.0)]);
}

#[test]
fn survivors_keep_their_relative_order() {
    let mut canvas = Canvas::new();
    draw(
        &mut canvas,
        &[pos2(0.0, 0.0), pos2(30.0, 30.0), pos2(2.0, 2.0), pos2(60.0, 60.0)],
    );

    canvas.erase_at(pos2(1.0, 1.0));

    assert_eq!(
        canvas.strokes()[0].points(),
        &[pos2(30.0, 30.0), pos2(60.0, 60.0)]
    );
}

#[test]
fn erase_reaches_every_stroke() {
    let mut canvas = Canvas::new();
    draw(&mut canvas, &[pos2(0.0, 0.0), pos2(40.0, 0.0)]);
    draw(&mut canvas, &[pos2(3.0, 3.0), pos2(0.0, 40.0)]);

    canvas.erase_at(pos2(0.0, 0.0));

    assert_eq!(canvas.strokes()[0].points(), &[pos2(40.0, 0.0)]);
    assert_eq!(canvas.strokes()[1].points(), &[pos2(0.0, 40.0)]);
}

#[test]
fn stroke_count_is_constant_across_an_erase() {
    let mut canvas = Canvas::new();
    draw(&mut canvas, &[pos2(0.0, 0.0), pos2(5.0, 0.0)]);
    draw(&mut canvas, &[pos2(100.0, 100.0), pos2(110.0, 100.0)]);

    canvas.erase_at(pos2(2.0, 0.0));

    // The first stroke is now empty but still present.
    assert_eq!(canvas.strokes().len(), 2);
    assert!(canvas.strokes()[0].points().is_empty());
    assert_eq!(canvas.strokes()[1].points().len(), 2);
}

#[test]
fn eraser_gestures_erase_instead_of_drawing() {
    let mut canvas = Canvas::new();
    draw(&mut canvas, &[pos2(0.0, 0.0), pos2(20.0, 0.0), pos2(40.0, 0.0)]);

    canvas.set_eraser_mode(true);
    canvas.begin_gesture(pos2(20.0, 0.0));
    canvas.extend_gesture(pos2(40.0, 0.0));
    canvas.end_gesture();

    // No stroke was created and the swept points are gone.
    assert_eq!(canvas.strokes().len(), 1);
    assert_eq!(canvas.strokes()[0].points(), &[pos2(0.0, 0.0)]);
}

#[test]
fn erasing_through_a_line_leaves_one_stroke_with_a_gap() {
    let mut canvas = Canvas::new();
    draw(
        &mut canvas,
        &[pos2(0.0, 0.0), pos2(25.0, 0.0), pos2(50.0, 0.0)],
    );

    canvas.erase_at(pos2(25.0, 0.0));

    // Per-point filter, not a segment split: still a single stroke, whose
    // rendering now jumps straight from (0,0) to (50,0).
    assert_eq!(canvas.strokes().len(), 1);
    assert_eq!(
        canvas.strokes()[0].points(),
        &[pos2(0.0, 0.0), pos2(50.0, 0.0)]
    );
}
