//! SVG serialization of poster scenes.
//!
//! Output is one element per line, `\n` line endings, a trailing newline,
//! and every computed coordinate printed with two decimals so the text is
//! compact and identical across runs.

use std::io;

use hashposter_core::geometry::{Circle, Element, Line, Rect};
use hashposter_core::{Rgb, Scene};

use crate::error::OutputError;

/// Namespace written on the root element.
pub const SVG_NAMESPACE: &str = "https://www.w3.org/TR/SVG2/";

/// Stroke opacity of every motif ray.
const RAY_OPACITY: &str = "0.8";

/// Fixed two-decimal number formatting.
pub fn fmt2(value: f64) -> String {
    format!("{:.2}", value)
}

// ── SVG Writer ───────────────────────────────────────────────────────

pub struct SvgWriter<W: io::Write> {
    writer: W,
}

impl<W: io::Write> SvgWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Write a complete SVG document for `scene`.
    pub fn write(&mut self, scene: &Scene) -> Result<(), OutputError> {
        self.write_line(&format!(
            r#"<svg xmlns="{}" width="{}" height="{}">"#,
            SVG_NAMESPACE, scene.size, scene.size
        ))?;

        for element in &scene.elements {
            match element {
                Element::Background(fill) => self.write_background(scene.size, fill)?,
                Element::Rect(rect) => self.write_rect(rect)?,
                Element::Circle(circle) => self.write_circle(circle)?,
                Element::Line(line) => self.write_line_element(line)?,
                Element::Anchor(anchor) => self.write_anchor(anchor)?,
            }
        }

        self.write_line("</svg>")?;
        self.writer.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_line(&mut self, text: &str) -> Result<(), OutputError> {
        self.writer.write_all(text.as_bytes())?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    fn write_background(&mut self, size: u32, fill: &Rgb) -> Result<(), OutputError> {
        self.write_line(&format!(
            r#"<rect width="{}" height="{}" fill="{}"/>"#,
            size, size, fill
        ))
    }

    fn write_rect(&mut self, rect: &Rect) -> Result<(), OutputError> {
        self.write_line(&format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}" fill-opacity="{}"/>"#,
            fmt2(rect.origin.x),
            fmt2(rect.origin.y),
            fmt2(rect.width),
            fmt2(rect.height),
            rect.fill,
            fmt2(rect.opacity)
        ))
    }

    fn write_circle(&mut self, circle: &Circle) -> Result<(), OutputError> {
        self.write_line(&format!(
            r#"<circle cx="{}" cy="{}" r="{}" fill="{}" fill-opacity="{}"/>"#,
            fmt2(circle.center.x),
            fmt2(circle.center.y),
            fmt2(circle.radius),
            circle.fill,
            fmt2(circle.opacity)
        ))
    }

    fn write_line_element(&mut self, line: &Line) -> Result<(), OutputError> {
        self.write_line(&format!(
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}" stroke-opacity="{}" stroke-linecap="round"/>"#,
            fmt2(line.start.x),
            fmt2(line.start.y),
            fmt2(line.end.x),
            fmt2(line.end.y),
            line.stroke,
            fmt2(line.stroke_width),
            RAY_OPACITY
        ))
    }

    fn write_anchor(&mut self, anchor: &Circle) -> Result<(), OutputError> {
        self.write_line(&format!(
            r#"<circle cx="{}" cy="{}" r="{}" fill="{}"/>"#,
            fmt2(anchor.center.x),
            fmt2(anchor.center.y),
            fmt2(anchor.radius),
            anchor.fill
        ))
    }
}

/// Render `scene` to an SVG string.
pub fn render_svg(scene: &Scene) -> Result<String, OutputError> {
    let mut writer = SvgWriter::new(Vec::new());
    writer.write(scene)?;
    Ok(String::from_utf8(writer.into_inner())?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hashposter_core::geometry::Point;

    #[test]
    fn test_fmt2() {
        assert_eq!(fmt2(0.0), "0.00");
        assert_eq!(fmt2(24.0), "24.00");
        assert_eq!(fmt2(3.14159), "3.14");
        assert_eq!(fmt2(0.899), "0.90");
        assert_eq!(fmt2(1234.5), "1234.50");
    }

    #[test]
    fn test_write_minimal_scene() {
        let mut scene = Scene::new(100);
        scene.push(Element::Background(Rgb::new(1, 2, 3)));
        scene.push(Element::Rect(Rect::centered(
            Point::new(50.0, 50.0),
            10.0,
            20.0,
            Rgb::new(200, 10, 10),
            0.5,
        )));
        scene.push(Element::Circle(Circle {
            center: Point::new(25.0, 75.126),
            radius: 4.0,
            fill: Rgb::new(9, 99, 199),
            opacity: 0.25,
        }));
        scene.push(Element::Line(Line {
            start: Point::new(1.0, 2.0),
            end: Point::new(3.0, 4.0),
            stroke: Rgb::new(255, 255, 255),
            stroke_width: 3.0,
        }));
        scene.push(Element::Anchor(Circle {
            center: Point::new(50.0, 50.0),
            radius: 3.0,
            fill: Rgb::new(70, 80, 90),
            opacity: 1.0,
        }));

        let svg = render_svg(&scene).unwrap();
        let expected = concat!(
            "<svg xmlns=\"https://www.w3.org/TR/SVG2/\" width=\"100\" height=\"100\">\n",
            "<rect width=\"100\" height=\"100\" fill=\"rgb(1, 2, 3)\"/>\n",
            "<rect x=\"45.00\" y=\"40.00\" width=\"10.00\" height=\"20.00\" fill=\"rgb(200, 10, 10)\" fill-opacity=\"0.50\"/>\n",
            "<circle cx=\"25.00\" cy=\"75.13\" r=\"4.00\" fill=\"rgb(9, 99, 199)\" fill-opacity=\"0.25\"/>\n",
            "<line x1=\"1.00\" y1=\"2.00\" x2=\"3.00\" y2=\"4.00\" stroke=\"rgb(255, 255, 255)\" stroke-width=\"3.00\" stroke-opacity=\"0.8\" stroke-linecap=\"round\"/>\n",
            "<circle cx=\"50.00\" cy=\"50.00\" r=\"3.00\" fill=\"rgb(70, 80, 90)\"/>\n",
            "</svg>\n",
        );
        assert_eq!(svg, expected);
    }

    struct FullDisk;

    impl io::Write for FullDisk {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::WriteZero, "disk full"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_error_propagates() {
        let scene = hashposter_core::compose(&hashposter_core::PosterParams::new("full", 64, 2)).unwrap();
        let mut writer = SvgWriter::new(FullDisk);
        let err = writer.write(&scene).unwrap_err();
        assert!(matches!(err, OutputError::Io(ref e) if e.kind() == io::ErrorKind::WriteZero));
    }

    #[test]
    fn test_no_carriage_returns() {
        let scene = hashposter_core::compose(&hashposter_core::PosterParams::with_seed("crlf")).unwrap();
        let svg = render_svg(&scene).unwrap();
        assert!(!svg.contains('\r'));
        assert!(svg.ends_with("</svg>\n"));
    }
}
