pub mod tridiagonal;

use svg::node::element::path::Data;

use crate::error::{PlotError, PlotResult};
use crate::types::Point2D;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CurveSegment {
    pub s0: Point2D,
    pub d0: Point2D,
    pub d1: Point2D,
    pub s1: Point2D,
}

pub fn fit(points: &[Point2D]) -> PlotResult<Vec<CurveSegment>> {
    let n = points.len();
    if n < 2 {
        return Err(PlotError::InsufficientPoints { count: n });
    }

    let control = control_points(points)?;

    let segments = points
        .windows(2)
        .zip(control.windows(2))
        .map(|(s, b)| CurveSegment {
            s0: s[0],
            d0: b[0].lerp(b[1], 1.0 / 3.0),
            d1: b[0].lerp(b[1], 2.0 / 3.0),
            s1: s[1],
        })
        .collect();

    Ok(segments)
}

/// Off-curve B-spline points `B` for on-curve points `S`, endpoints included.
///
/// Solves `B[i-1] + 4*B[i] + B[i+1] = 6*S[i]` with `B[0] = S[0]` and
/// `B[n-1] = S[n-1]`, which makes the second derivative vanish at both ends.
fn control_points(s: &[Point2D]) -> PlotResult<Vec<Point2D>> {
    let n = s.len();
    let mut rhs: Vec<Point2D> = s[1..n - 1]
        .iter()
        .map(|p| Point2D::new(6.0 * p.x, 6.0 * p.y))
        .collect();

    if let Some(first) = rhs.first_mut() {
        first.x -= s[0].x;
        first.y -= s[0].y;
    }
    if let Some(last) = rhs.last_mut() {
        last.x -= s[n - 1].x;
        last.y -= s[n - 1].y;
    }

    let interior = tridiagonal::solve(1.0, 4.0, 1.0, &rhs)?;

    let mut control = Vec::with_capacity(n);
    control.push(s[0]);
    control.extend(interior);
    control.push(s[n - 1]);
    Ok(control)
}

pub fn to_path_data(segments: &[CurveSegment]) -> Data {
    let Some(first) = segments.first() else {
        return Data::new();
    };

    segments
        .iter()
        .fold(Data::new().move_to((first.s0.x, first.s0.y)), |data, seg| {
            data.cubic_curve_to((seg.d0.x, seg.d0.y, seg.d1.x, seg.d1.y, seg.s1.x, seg.s1.y))
        })
}
