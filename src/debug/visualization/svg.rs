// src/debug/visualization/svg.rs
use crate::math::{
    alpha::Shape,
    error::AlphaResult,
    types::{Bounds2D, LineString, Point2D},
};
use std::path::Path as FsPath;
use svg::{
    Document, Node,
    node::element::{Circle, Group, Path, Rectangle, path::Data},
};
use tracing::info;

pub const DEFAULT_SVG_PIXEL_SIZE: u32 = 800;

// ===================================================================================
// HILFS-STRUCT für die SVG-Erstellung
// ===================================================================================
/// Sammelt die Elemente in einer Gruppe mit gespiegelter y-Achse, damit die
/// Geometrie nicht kopfüber erscheint.
struct SvgBuilder {
    bounds: Bounds2D,
    layer: Group,
    stroke_width: f32,
    point_radius: f32,
}

impl SvgBuilder {
    fn new(display_bounds: Bounds2D) -> Self {
        let extent = ((display_bounds.width() + display_bounds.height()) / 2.0) as f32;
        Self {
            bounds: display_bounds,
            layer: Group::new().set("transform", "scale(1,-1)"),
            stroke_width: extent * 0.004,
            point_radius: extent * 0.006,
        }
    }

    /// Zeichnet ein Polygon mit Löchern (even-odd).
    fn draw_polygon(&mut self, exterior: &LineString<f64>, holes: &[LineString<f64>]) {
        let mut data = Data::new();
        for ring in std::iter::once(exterior).chain(holes) {
            data = ring_data(data, ring);
        }
        let path = Path::new()
            .set("d", data)
            .set("fill", "#c896ff")
            .set("fill-opacity", "0.7")
            .set("fill-rule", "evenodd")
            .set("stroke", "#5500aa")
            .set("stroke-width", self.stroke_width);
        self.layer.append(path);
    }

    fn draw_point(&mut self, p: Point2D) {
        let circle = Circle::new()
            .set("cx", p.x as f32)
            .set("cy", p.y as f32)
            .set("r", self.point_radius)
            .set("fill", "#aaccff")
            .set("stroke", "#0000cc")
            .set("stroke-width", self.stroke_width * 0.5);
        self.layer.append(circle);
    }

    fn finish(self, svg_pixel_size: u32) -> Document {
        // viewBox liegt im gespiegelten Raum: y läuft von -max.y nach -min.y
        let (x, y) = (self.bounds.min.x as f32, -self.bounds.max.y as f32);
        let (w, h) = (self.bounds.width() as f32, self.bounds.height() as f32);
        let background = Rectangle::new()
            .set("x", x)
            .set("y", y)
            .set("width", w)
            .set("height", h)
            .set("fill", "#f0f0f0");

        Document::new()
            .set("width", svg_pixel_size)
            .set("height", svg_pixel_size)
            .set("viewBox", (x, y, w, h))
            .add(background)
            .add(self.layer)
    }
}

fn ring_data(data: Data, ring: &LineString<f64>) -> Data {
    let mut coords = ring.coords();
    let Some(first) = coords.next() else {
        return data;
    };
    let mut data = data.move_to((first.x as f32, first.y as f32));
    for c in coords {
        data = data.line_to((c.x as f32, c.y as f32));
    }
    data.close()
}

/// Bounding Box über Punkte und Shape-Außenringe, mit 5 % Rand.
fn display_bounds(points: &[Point2D], shape: &Shape) -> Bounds2D {
    let shape_coords = shape
        .polygons()
        .iter()
        .flat_map(|polygon| polygon.exterior().coords().copied());
    let bounds = Bounds2D::from_points_iter(points.iter().copied().chain(shape_coords))
        .unwrap_or(Bounds2D {
            min: Point2D { x: 0.0, y: 0.0 },
            max: Point2D { x: 1.0, y: 1.0 },
        });
    let margin = (bounds.width().max(bounds.height()) * 0.05).max(1e-9);
    bounds.expand(margin)
}

/// Baut ein SVG-Dokument mit dem Shape (Löcher ausgespart) und allen Punkten.
pub fn shape_svg_document(points: &[Point2D], shape: &Shape, svg_pixel_size: u32) -> Document {
    let mut svg = SvgBuilder::new(display_bounds(points, shape));
    for polygon in shape.polygons() {
        svg.draw_polygon(polygon.exterior(), polygon.interiors());
    }
    for &p in points {
        svg.draw_point(p);
    }
    svg.finish(svg_pixel_size)
}

/// Schreibt [`shape_svg_document`] nach `path`.
pub fn write_shape_svg(
    path: impl AsRef<FsPath>,
    points: &[Point2D],
    shape: &Shape,
) -> AlphaResult<()> {
    let document = shape_svg_document(points, shape, DEFAULT_SVG_PIXEL_SIZE);
    svg::save(path.as_ref(), &document)?;
    info!(
        "Debug SVG '{}' wurde erstellt ({} Teile, {} Punkte).",
        path.as_ref().display(),
        shape.num_parts(),
        points.len()
    );
    Ok(())
}
