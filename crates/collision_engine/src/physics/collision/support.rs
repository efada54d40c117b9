//! Support points along an axis
//!
//! The support value of a point is its signed scalar coordinate along the
//! axis, `dot(point, axis) / |axis|`. Results are owned copies plus the
//! index into the caller's slice, so nothing borrows the input.

use crate::foundation::math::{Point2, Vec2};

/// An extreme point of a point set along an axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Support {
    /// Index of the point in the input slice
    pub index: usize,
    /// The point itself
    pub point: Point2,
    /// Signed coordinate of the point along the axis
    pub value: f32,
}

/// The minimum and maximum support of a point set along an axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extremes {
    /// Point with the smallest support value
    pub min: Support,
    /// Point with the largest support value
    pub max: Support,
}

/// Normalize a candidate axis, rejecting zero-length and non-finite ones
pub fn unit_axis(axis: &Vec2) -> Option<Vec2> {
    let length = axis.norm();
    if length.is_finite() && length > 0.0 {
        Some(axis / length)
    } else {
        None
    }
}

/// Find the points with minimal and maximal support along `axis`
///
/// Ties keep the first point encountered. Returns `None` for an empty point
/// set or a zero-length (or non-finite) axis; callers skip such axes.
pub fn extremes(points: &[Point2], axis: &Vec2) -> Option<Extremes> {
    extremes_along_unit(points, &unit_axis(axis)?)
}

/// [`extremes`] for an axis the caller already normalized with [`unit_axis`]
pub fn extremes_along_unit(points: &[Point2], unit: &Vec2) -> Option<Extremes> {
    let mut iter = points.iter().enumerate();
    let (index, point) = iter.next()?;
    let first = Support {
        index,
        point: *point,
        value: point.coords.dot(unit),
    };

    let mut result = Extremes { min: first, max: first };
    for (index, point) in iter {
        let value = point.coords.dot(unit);
        if value < result.min.value {
            result.min = Support { index, point: *point, value };
        }
        if value > result.max.value {
            result.max = Support { index, point: *point, value };
        }
    }

    Some(result)
}
