//! Curve drawing onto integer label masks.

use crate::{
    error::{RasterError, Result},
    spline::{parse_control_points, sample_spline, Point},
};
use ndarray::Array2;

/// The stroke width in pixels used for lane ground-truth masks.
pub const DEFAULT_THICKNESS: usize = 16;

/// Rasterize one annotation line onto `mask`, writing `lane_id` into
/// every covered pixel.
///
/// The mask shape and dtype are preserved. Pixels falling outside the
/// mask bounds are clipped. Repeated calls accumulate onto the same
/// mask, so later lines may overwrite earlier ones where they overlap.
/// A line with no control points leaves the mask unchanged.
pub fn mask_from_spline(
    mut mask: Array2<i64>,
    line: &str,
    lane_id: i64,
    thickness: usize,
) -> Result<Array2<i64>> {
    if lane_id <= 0 {
        return Err(RasterError::NonPositiveLaneId { id: lane_id });
    }

    let points = parse_control_points(line)?;
    let samples = sample_spline(&points);
    let radius = (thickness / 2) as i64;

    match samples.as_slice() {
        [] => {}
        [point] => {
            paint(
                &mut mask,
                point.x.round() as i64,
                point.y.round() as i64,
                lane_id,
                radius,
            );
        }
        _ => {
            for pair in samples.windows(2) {
                draw_segment(&mut mask, pair[0], pair[1], lane_id, radius);
            }
        }
    }

    Ok(mask)
}

/// Bresenham walk from `from` to `to`, stamping the brush at each step.
fn draw_segment(mask: &mut Array2<i64>, from: Point, to: Point, lane_id: i64, radius: i64) {
    let mut x0 = from.x.round() as i64;
    let mut y0 = from.y.round() as i64;
    let x1 = to.x.round() as i64;
    let y1 = to.y.round() as i64;

    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        paint(mask, x0, y0, lane_id, radius);
        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

/// Stamp a square brush centered at `(cx, cy)`, clipped to the mask.
fn paint(mask: &mut Array2<i64>, cx: i64, cy: i64, lane_id: i64, radius: i64) {
    let (rows, cols) = mask.dim();

    for y in (cy - radius)..=(cy + radius) {
        for x in (cx - radius)..=(cx + radius) {
            if x >= 0 && y >= 0 && (x as usize) < cols && (y as usize) < rows {
                mask[(y as usize, x as usize)] = lane_id;
            }
        }
    }
}
