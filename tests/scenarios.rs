// End-to-end drawing scenarios, driven headlessly through the session.

use doodle_pad::canvas::Canvas;
use doodle_pad::config::Config;
use doodle_pad::export::Exporter;
use doodle_pad::layout::PanelLayout;
use doodle_pad::session::{Button, InputEvent, Session};
use doodle_pad::stroke::interpolate;
use doodle_pad::types::{CanvasPoint, WindowPoint};

fn session_in(dir: &tempfile::TempDir) -> Session {
    let cfg = Config { output: dir.path().join("user_drawing.png"), ..Config::default() };
    Session::new(&cfg).expect("session")
}

#[test]
fn single_inked_cell_survives_export() {
    let dir = tempfile::tempdir().expect("temp dir");
    let exporter = Exporter::new(dir.path().join("user_drawing.png"));
    let mut canvas = Canvas::new(144, 192, 0, 255);
    canvas.set_ink(10, 20);
    exporter.export(&canvas).expect("export");

    let img = image::open(exporter.path()).expect("decode");
    assert_eq!(img.color().channel_count(), 3);
    let img = img.to_rgb8();
    assert_eq!(img.dimensions(), (144, 192));
    for (x, y, px) in img.enumerate_pixels() {
        let want = if (x, y) == (10, 20) { [255, 255, 255] } else { [0, 0, 0] };
        assert_eq!(px.0, want, "pixel ({x},{y})");
    }
}

#[test]
fn repeated_export_is_byte_identical() {
    let dir = tempfile::tempdir().expect("temp dir");
    let exporter = Exporter::new(dir.path().join("user_drawing.png"));
    let mut canvas = Canvas::new(144, 192, 0, 255);
    canvas.set_ink(3, 4);
    canvas.set_ink(100, 150);

    exporter.export(&canvas).expect("first");
    let first = std::fs::read(exporter.path()).expect("read first");
    exporter.export(&canvas).expect("second");
    let second = std::fs::read(exporter.path()).expect("read second");
    assert_eq!(first, second);
}

#[test]
fn fast_horizontal_sweep_leaves_no_gaps() {
    let layout = PanelLayout::from_config(&Config::default());
    let (p0, p1) = (WindowPoint::new(14.0, 14.0), WindowPoint::new(44.0, 14.0));

    let cells: Vec<CanvasPoint> = interpolate(p0, p1, 10)
        .map(|p| layout.map_to_canvas(p.truncated()).expect("in bounds"))
        .collect();
    assert_eq!(cells.len(), 10);
    assert!(cells.iter().all(|c| c.y == 1));
    let xs: Vec<usize> = cells.iter().map(|c| c.x).collect();
    assert_eq!(xs, (2..=11).rev().collect::<Vec<_>>());

    // Through the session the press point fills in x = 1 as well.
    let dir = tempfile::tempdir().expect("temp dir");
    let mut s = session_in(&dir);
    s.handle(InputEvent::Press(Button::Primary, p0));
    s.handle(InputEvent::Move(p1));
    let row: Vec<bool> = (0..144).map(|x| s.canvas().get(x, 1) == Some(255)).collect();
    let inked: Vec<usize> = row.iter().enumerate().filter(|(_, on)| **on).map(|(x, _)| x).collect();
    assert_eq!(inked, (1..=11).collect::<Vec<_>>());
    let total = s.canvas().cells().iter().filter(|&&v| v == 255).count();
    assert_eq!(total, 11);
}

#[test]
fn secondary_press_clears_and_flushes_once() {
    let dir = tempfile::tempdir().expect("temp dir");
    let cfg = Config {
        output: dir.path().join("user_drawing.png"),
        width: 12,
        height: 8,
        ..Config::default()
    };
    let mut s = Session::new(&cfg).expect("session");

    // Ink every cell by pressing on each one.
    for y in 0..8 {
        for x in 0..12 {
            let p = WindowPoint::new((10 + x * 3) as f32, (10 + y * 3) as f32);
            s.handle(InputEvent::Press(Button::Primary, p));
            s.handle(InputEvent::Release(Button::Primary, p));
        }
    }
    assert!(s.canvas().cells().iter().all(|&v| v == 255));
    assert!(s.end_frame().expect("flush inked"));

    s.handle(InputEvent::Press(Button::Secondary, WindowPoint::new(-40.0, 900.0)));
    assert!(s.canvas().cells().iter().all(|&v| v == 0));
    assert!(s.canvas().is_dirty());
    assert!(s.end_frame().expect("flush cleared"));
    assert!(!s.end_frame().expect("nothing left"));

    let img = image::open(dir.path().join("user_drawing.png")).expect("decode").to_rgb8();
    assert!(img.pixels().all(|p| p.0 == [0, 0, 0]));
}

#[test]
fn seeded_session_exports_seed_on_first_frame() {
    let dir = tempfile::tempdir().expect("temp dir");
    let seed = dir.path().join("seed.png");
    image::GrayImage::from_fn(144, 192, |x, _| image::Luma([if x < 72 { 255 } else { 0 }]))
        .save(&seed)
        .expect("write seed");

    let cfg = Config {
        output: dir.path().join("user_drawing.png"),
        seed: Some(seed),
        ..Config::default()
    };
    let mut s = Session::new(&cfg).expect("session");
    assert_eq!(s.canvas().get(0, 0), Some(255));
    assert_eq!(s.canvas().get(143, 0), Some(0));
    assert!(s.end_frame().expect("flush"));

    let img = image::open(dir.path().join("user_drawing.png")).expect("decode").to_rgb8();
    assert_eq!(img.get_pixel(10, 10).0, [255, 255, 255]);
}

#[test]
fn corrupt_seed_fails_before_the_loop() {
    let dir = tempfile::tempdir().expect("temp dir");
    let seed = dir.path().join("seed.png");
    std::fs::write(&seed, b"garbage").expect("write");
    let cfg = Config { output: dir.path().join("out.png"), seed: Some(seed), ..Config::default() };
    assert!(Session::new(&cfg).is_err());
}
