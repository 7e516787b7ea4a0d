//! Property tests: area dispatch follows the shape tag.

use std::f64::consts::PI;

use drills_core::{calculate_shape_area, Area, Shape};
use proptest::prelude::*;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

proptest! {
    /// Circle area is pi times the radius squared.
    #[test]
    fn circle_area_formula(radius in -1.0e3f64..1.0e3) {
        let area = calculate_shape_area(&Shape::circle(radius)).value().unwrap();
        prop_assert!(approx_eq(area, PI * radius * radius));
        prop_assert!(area >= 0.0);
    }

    /// Rectangle area is width times height, sign included.
    #[test]
    fn rectangle_area_formula(width in -1.0e3f64..1.0e3, height in -1.0e3f64..1.0e3) {
        let area = calculate_shape_area(&Shape::rectangle(width, height));
        prop_assert_eq!(area, Area::Square(width * height));
    }

    /// Any tag other than circle or rectangle gives the unknown-shape result.
    #[test]
    fn unrecognised_tags_are_unknown(tag in "[a-z]{1,10}") {
        prop_assume!(tag != "circle" && tag != "rectangle");
        let json = format!(r#"{{"shape": "{}", "radius": 1, "width": 2, "height": 3}}"#, tag);
        let shape = Shape::from_json(&json).unwrap();
        prop_assert_eq!(shape, Shape::Unknown);
        prop_assert!(calculate_shape_area(&Shape::Unknown).is_unknown());
    }

    /// Parsing the tagged form and calling the constructors give the same area.
    #[test]
    fn json_and_constructor_agree(width in 0.0f64..1.0e3, height in 0.0f64..1.0e3) {
        let json = serde_json::json!({ "shape": "rectangle", "width": width, "height": height });
        let parsed = Shape::from_json(&json.to_string()).unwrap();
        let parsed_area = calculate_shape_area(&parsed).value().unwrap();
        prop_assert!(approx_eq(parsed_area, width * height));
    }
}
