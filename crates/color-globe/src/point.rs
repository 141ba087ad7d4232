use serde::{Deserialize, Serialize};

use crate::color::{parse_color, Hsl};
use crate::geo::{color_to_geo, geo_to_color, Geo};
use crate::Result;

/// A labelled color placed on the globe, ready to be drawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub group: String,
    pub name: String,
    pub hex: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hsl: Option<Hsl>,
    pub geo: Geo,
}

impl Point {
    /// Colors a fixed position on the globe.
    pub fn from_geo(geo: Geo, name: &str, group: &str) -> Self {
        let color = geo_to_color(geo);

        Point {
            group: group.to_string(),
            name: name.to_string(),
            hex: color.to_hex(),
            hsl: Some(color.to_okhsl()),
            geo,
        }
    }

    /// Places a color string on the globe.
    pub fn from_color(text: &str, name: &str, group: &str) -> Result<Self> {
        let color = parse_color(text)?;

        Ok(Point {
            group: group.to_string(),
            name: name.to_string(),
            hex: color.to_hex(),
            hsl: Some(color.to_okhsl()),
            geo: color_to_geo(&color),
        })
    }
}

/// Named places, as `(name, lat, lon)`.
static PLACES: [(&str, f64, f64); 13] = [
    ("Nuuk", 64.18, -51.72),
    ("Yakutsk", 62.033, 129.733),
    ("Anchorage", 61.2167, -149.8936),
    ("Novosibirsk", 55.05, 82.95),
    ("Jeddah", 21.4858, 39.1925),
    ("Honolulu", 21.3, -157.85),
    ("Medellín", 6.2442, -75.5812),
    ("Manaus", -3.1190, -60.0217),
    ("Surabaya", -7.2504, 112.7688),
    ("Goiânia", -16.6869, -49.2648),
    ("Brisbane", -27.4698, 153.0251),
    ("Perth", -31.5781, 115.5133),
    ("Adelaide", -34.9285, 138.6007),
];

pub fn axis_points() -> Vec<Point> {
    let group = "axis";

    vec![
        Point::from_geo(Geo::new(90.0, 0.0, 1.0), "North Pole", group),
        Point::from_geo(Geo::new(-90.0, 0.0, 1.0), "South Pole", group),
    ]
}

/// Surface points for the named places.
pub fn place_points() -> Vec<Point> {
    PLACES
        .iter()
        .map(|&(name, lat, lon)| Point::from_geo(Geo::new(lat, lon, 1.0), name, "places"))
        .collect()
}

pub fn points() -> Vec<Point> {
    let mut points = axis_points();
    points.extend(place_points());
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn poles_are_black_and_white() {
        let axis = axis_points();

        assert_eq!(axis.len(), 2);
        assert_eq!(axis[0].name, "North Pole");
        assert_eq!(axis[0].hex, "#FFFFFF");
        assert_eq!(axis[1].name, "South Pole");
        assert_eq!(axis[1].hex, "#000000");
    }

    #[test]
    fn places_are_on_the_surface() {
        let places = place_points();

        assert_eq!(places.len(), 13);
        assert!(places.iter().all(|p| p.group == "places" && p.geo.r == 1.0));

        let nuuk = &places[0];
        assert_eq!(nuuk.name, "Nuuk");
        let hsl = nuuk.hsl.unwrap();
        assert!((hsl.h - 308.28).abs() < 1e-9);
        assert!(hsl.l > 0.5);
    }

    #[test]
    fn places_follow_the_table_order() {
        let places = place_points();
        let adelaide = places.last().unwrap();

        assert_eq!(adelaide.name, "Adelaide");
        assert_eq!(adelaide.geo, Geo::new(-34.9285, 138.6007, 1.0));
        assert_eq!(places.len(), PLACES.len());
    }

    #[test]
    fn all_points_start_with_the_axis() {
        let all = points();

        assert_eq!(all.len(), 15);
        assert_eq!(all[0].group, "axis");
        assert_eq!(all[2].group, "places");
    }

    #[test]
    fn from_color_keeps_the_original_hex() {
        let point = Point::from_color("#ff0000", "red", "css").unwrap();

        assert_eq!(point.hex, "#FF0000");
        assert_eq!(point.group, "css");
        assert!((point.geo.lon - 29.234).abs() < 1e-2);
    }

    #[test]
    fn from_color_surfaces_parse_errors() {
        assert!(Point::from_color("oklch(1 2 3)", "bad", "css").is_err());
    }

    #[test]
    fn serializes_for_the_renderer() {
        let point = Point::from_geo(Geo::new(0.0, 0.0, 0.0), "center", "axis");
        let json = serde_json::to_value(&point).unwrap();

        assert_eq!(json["group"], "axis");
        assert_eq!(json["geo"]["r"], 0.0);
        assert!(json["hsl"].is_object());
    }
}
