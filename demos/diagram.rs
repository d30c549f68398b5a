//! Draw a small diagram with a bottom-left origin and save it.
//!
//! Run with `RUST_LOG=svgdoc=debug cargo run --example diagram --features tracing [out.svg]`.

use svgdoc::{
    Circle, Dimensions, Document, Ellipse, Font, Layout, Line, NamedColor, Origin, Path, Point,
    Polygon, Rectangle, Stroke, Text, Unit,
};
use tracing_subscriber::EnvFilter;

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let out = std::env::args().nth(1).unwrap_or_else(|| "diagram.svg".to_string());
    let layout = Layout::with_dimensions(Dimensions::new(160.0, 120.0))
        .with_unit(Unit::Mm)
        .with_origin(Origin::BottomLeft)
        .with_scale(2.0);
    let outline = Stroke::new(0.5, NamedColor::Black);

    let mut triangle = Polygon::new().with_fill(NamedColor::Silver).with_stroke(outline);
    triangle
        .push(Point::new(5.0, 5.0))
        .push(Point::new(25.0, 5.0))
        .push(Point::new(15.0, 20.0));

    let mut frame = Path::new().with_fill(NamedColor::Aqua).with_stroke(outline);
    frame.extend([
        Point::new(40.0, 30.0),
        Point::new(70.0, 30.0),
        Point::new(70.0, 50.0),
        Point::new(40.0, 50.0),
    ]);
    frame.start_sub_path().extend([
        Point::new(45.0, 35.0),
        Point::new(65.0, 35.0),
        Point::new(65.0, 45.0),
        Point::new(45.0, 45.0),
    ]);

    let mut doc = Document::new(out, layout);
    doc.add(&Circle::new(Point::new(60.0, 15.0), 8.0, NamedColor::Red).with_stroke(outline))
        .add(&Ellipse::new(Point::new(20.0, 45.0), 20.0, 10.0).with_fill(NamedColor::Yellow))
        .add(&Rectangle::new(Point::new(5.0, 55.0), 30.0, 4.0).with_fill(NamedColor::Brown))
        .add(&Line::new(Point::new(0.0, 0.0), Point::new(80.0, 60.0)).with_stroke(outline.non_scaling()))
        .add(&triangle)
        .add(&frame)
        .add(
            &Text::new(Point::new(5.0, 25.0), "svgdoc")
                .with_font(Font::new(5.0, "Verdana"))
                .with_fill(NamedColor::Purple)
                .with_description("title"),
        );

    doc.save()?;
    println!("wrote {} shapes to {}", doc.len(), doc.path().display());
    Ok(())
}
