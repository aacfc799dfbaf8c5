use crate::error::{PlotError, PlotResult};
use crate::types::Point2D;

const PIVOT_EPSILON: f64 = 1e-12;

/// Thomas algorithm for `sub * x[i-1] + diag * x[i] + sup * x[i+1] = rhs[i]`.
pub fn solve(sub: f64, diag: f64, sup: f64, rhs: &[Point2D]) -> PlotResult<Vec<Point2D>> {
    let m = rhs.len();
    if m == 0 {
        return Ok(Vec::new());
    }

    let mut c_prime = vec![0.0; m];
    let mut d_prime = vec![Point2D::default(); m];

    let mut pivot = diag;
    for row in 0..m {
        if row > 0 {
            pivot = diag - sub * c_prime[row - 1];
        }
        if !pivot.is_finite() || pivot.abs() < PIVOT_EPSILON {
            return Err(PlotError::SingularSystem { row });
        }
        c_prime[row] = sup / pivot;
        let carry = if row > 0 { d_prime[row - 1] } else { Point2D::default() };
        d_prime[row] = Point2D {
            x: (rhs[row].x - sub * carry.x) / pivot,
            y: (rhs[row].y - sub * carry.y) / pivot,
        };
    }

    let mut solution = d_prime;
    for row in (0..m - 1).rev() {
        let next = solution[row + 1];
        solution[row].x -= c_prime[row] * next.x;
        solution[row].y -= c_prime[row] * next.y;
    }

    if let Some(row) = solution.iter().position(|p| !p.is_finite()) {
        return Err(PlotError::SingularSystem { row });
    }

    Ok(solution)
}
