//! Points-to-circle pipeline
//!
//! Callers hand over either one point's coordinates or a list of points.
//! The two shapes are told apart by the first element only: if it is itself
//! a sequence the input is a list, otherwise the whole input is one point.

use crate::circle::Circle;
use crate::core::errors::{CircleResult, InputError};
use crate::features::Feature;
use crate::geometry::Coords;
use crate::scene::SceneBackend;
use serde_json::Value;
use std::str::FromStr;
use tracing::debug;

/// Caller-supplied point coordinates
#[derive(Debug, Clone, PartialEq)]
pub enum PointsInput {
    /// A flat sequence describing one point
    Single(Vec<f64>),
    /// One coordinate sequence per point
    Many(Vec<Vec<f64>>),
}

impl PointsInput {
    /// Interpret a JSON value as point coordinates.
    ///
    /// `[1, 2, 3]` is a single point, `[[1, 2, 3], [4]]` is two points and
    /// `[]` is no points. Values that are not numbers are rejected.
    pub fn from_json(value: &Value) -> Result<Self, InputError> {
        let Value::Array(items) = value else {
            return Err(InputError::NotASequence(value.to_string()));
        };

        match items.first() {
            Some(first) if !first.is_array() => numbers(items, 0).map(PointsInput::Single),
            _ => items
                .iter()
                .enumerate()
                .map(|(index, item)| match item {
                    Value::Array(values) => numbers(values, index),
                    other => Err(InputError::MalformedCoordinates {
                        index,
                        reason: format!("expected a coordinate array, got {other}"),
                    }),
                })
                .collect::<Result<Vec<_>, _>>()
                .map(PointsInput::Many),
        }
    }

    /// Number of points; an empty flat sequence holds none
    pub fn len(&self) -> usize {
        match self {
            PointsInput::Single(values) if values.is_empty() => 0,
            PointsInput::Single(_) => 1,
            PointsInput::Many(points) => points.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Coordinates per point, missing trailing components set to zero
    pub fn to_coords(&self) -> Vec<Coords> {
        match self {
            PointsInput::Single(values) if values.is_empty() => Vec::new(),
            PointsInput::Single(values) => vec![Coords::from_slice(values)],
            PointsInput::Many(points) => points.iter().map(|p| Coords::from_slice(p)).collect(),
        }
    }

    /// One point feature per coordinate sequence
    pub fn into_features<N>(self) -> Vec<Feature<N>> {
        self.to_coords().into_iter().map(Feature::point).collect()
    }
}

fn numbers(values: &[Value], index: usize) -> Result<Vec<f64>, InputError> {
    values
        .iter()
        .map(|value| {
            value
                .as_f64()
                .ok_or_else(|| InputError::MalformedCoordinates {
                    index,
                    reason: format!("expected a number, got {value}"),
                })
        })
        .collect()
}

impl FromStr for PointsInput {
    type Err = InputError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let value: Value = serde_json::from_str(text)
            .map_err(|e| InputError::NotASequence(format!("invalid JSON ({e})")))?;
        Self::from_json(&value)
    }
}

impl From<Vec<f64>> for PointsInput {
    fn from(values: Vec<f64>) -> Self {
        if values.is_empty() {
            PointsInput::Many(Vec::new())
        } else {
            PointsInput::Single(values)
        }
    }
}

impl<const N: usize> From<[f64; N]> for PointsInput {
    fn from(values: [f64; N]) -> Self {
        PointsInput::from(values.to_vec())
    }
}

impl From<Vec<Vec<f64>>> for PointsInput {
    fn from(points: Vec<Vec<f64>>) -> Self {
        PointsInput::Many(points)
    }
}

impl<const N: usize> From<Vec<[f64; N]>> for PointsInput {
    fn from(points: Vec<[f64; N]>) -> Self {
        PointsInput::Many(points.into_iter().map(|p| p.to_vec()).collect())
    }
}

/// Build one point per coordinate sequence, put them in a circle of
/// `radius` and bind that circle to `container`.
///
/// Neither the radius, the container nor the coordinate ranges are checked
/// here; out-of-range points are culled by the circle.
pub fn render_points_to_circle<S>(
    points: impl Into<PointsInput>,
    radius: f64,
    scene: &mut S,
    container: S::Node,
) -> CircleResult<Circle<S::Node>>
where
    S: SceneBackend,
{
    let points = points.into();
    debug!("Rendering {} point(s) into a circle of radius {}", points.len(), radius);

    let mut circle = Circle::new(radius, points.into_features());
    circle.bind_to(scene, container)?;
    Ok(circle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn flat_sequence_is_one_point() {
        let input = PointsInput::from_json(&json!([1, 2, 3])).unwrap();
        assert_eq!(input, PointsInput::Single(vec![1.0, 2.0, 3.0]));
        assert_eq!(input.to_coords(), vec![Coords::new(1.0, 2.0, 3.0)]);
    }

    #[test]
    fn nested_sequence_is_a_list() {
        let input = PointsInput::from_json(&json!([[1, 2], [3.5], []])).unwrap();
        assert_eq!(
            input.to_coords(),
            vec![
                Coords::new(1.0, 2.0, 0.0),
                Coords::new(3.5, 0.0, 0.0),
                Coords::ORIGIN,
            ]
        );
    }

    #[test]
    fn empty_input_has_no_points() {
        let input = PointsInput::from_json(&json!([])).unwrap();
        assert!(input.is_empty());
        assert!(input.to_coords().is_empty());
    }

    #[test]
    fn empty_flat_sequence_has_no_points() {
        assert_eq!(PointsInput::from(Vec::<f64>::new()), PointsInput::Many(vec![]));
        assert_eq!(PointsInput::from([0.0f64; 0]), PointsInput::Many(vec![]));
        assert!(PointsInput::Single(vec![]).to_coords().is_empty());

        let inputs = [
            PointsInput::from(Vec::<f64>::new()),
            PointsInput::from([0.0f64; 0]),
            PointsInput::from_json(&json!([])).unwrap(),
            PointsInput::Single(vec![]),
        ];
        for input in inputs {
            assert_eq!(input.len(), 0);
            assert!(input.into_features::<u32>().is_empty());
        }
    }

    #[test]
    fn only_first_element_decides_the_shape() {
        // First element is a list, so the bare number is a malformed point
        let error = PointsInput::from_json(&json!([[1, 2], 3])).unwrap_err();
        assert!(matches!(error, InputError::MalformedCoordinates { index: 1, .. }));

        // First element is a number, so the nested list is a bad coordinate
        let error = PointsInput::from_json(&json!([1, [2, 3]])).unwrap_err();
        assert!(matches!(error, InputError::MalformedCoordinates { index: 0, .. }));
    }

    #[test]
    fn non_array_input_is_rejected() {
        assert!(matches!(
            PointsInput::from_json(&json!({"x": 1})),
            Err(InputError::NotASequence(_))
        ));
        assert!("not json".parse::<PointsInput>().is_err());
    }

    #[test]
    fn parses_from_command_line_text() {
        let input: PointsInput = "[[5, 5, 0], [15, 0, 0]]".parse().unwrap();
        assert_eq!(input.len(), 2);
    }
}
