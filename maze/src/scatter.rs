//! Rejection sampling of well separated points

use rand::{
    distributions::{Distribution, Uniform},
    Rng,
};
use serde::{Deserialize, Serialize};

use crate::{Error, Point, Result, ScatterConfig};

/// Maximum number of decimals points are rounded to
pub const MAX_PRECISION: u32 = 15;

/// A closed rectangle in world coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Bounds {
    pub minx: f64,
    pub maxx: f64,
    pub miny: f64,
    pub maxy: f64,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            minx: -2.,
            maxx: 2.,
            miny: -2.,
            maxy: 2.,
        }
    }
}

impl Bounds {
    /// Check if a point is inside the rectangle, borders included
    /// ```
    /// use maze::{Bounds, Point};
    ///
    /// let bounds = Bounds::default();
    /// assert!(bounds.contains(&Point::new(2., -2.)));
    /// assert!(!bounds.contains(&Point::new(2.01, 0.)));
    /// ```
    #[inline(always)]
    #[must_use]
    pub fn contains(&self, p: &Point) -> bool {
        self.minx <= p.x && p.x <= self.maxx && self.miny <= p.y && p.y <= self.maxy
    }

    /// Reject rectangles that are empty, flat or not finite
    ///
    /// The sides must be finite too, or uniform sampling cannot cover them.
    pub fn validate(&self) -> Result<()> {
        let Bounds {
            minx,
            maxx,
            miny,
            maxy,
        } = *self;
        let finite = [minx, maxx, miny, maxy, maxx - minx, maxy - miny]
            .iter()
            .all(|v| v.is_finite());
        if finite && minx < maxx && miny < maxy {
            Ok(())
        } else {
            Err(Error::DegenerateBounds {
                minx,
                maxx,
                miny,
                maxy,
            })
        }
    }
}

/// Place `config.count` points inside `config.bounds`, pairwise at least
/// `config.min_distance` apart
///
/// Candidates are drawn uniformly, `x` before `y`, rounded to
/// `config.precision` decimals, and kept only if far enough from every point
/// kept so far. Each candidate costs one attempt out of `config.max_attempts`.
pub fn scatter<R>(config: &ScatterConfig, rng: &mut R) -> Result<Vec<Point>>
where
    R: Rng + ?Sized,
{
    config.validate()?;
    let mut points = vec![];
    if config.count == 0 {
        return Ok(points);
    }

    let Bounds {
        minx,
        maxx,
        miny,
        maxy,
    } = config.bounds;
    let xs = Uniform::new_inclusive(minx, maxx);
    let ys = Uniform::new_inclusive(miny, maxy);
    let scale = 10f64.powi(config.precision as i32);
    // rounding may step just outside the rectangle
    let round = |v: f64, min: f64, max: f64| ((v * scale).round() / scale).clamp(min, max);

    let mut attempts = 0;
    while points.len() < config.count {
        if attempts == config.max_attempts {
            log::debug!(
                "Gave up after {attempts} attempts with {} points placed",
                points.len()
            );
            return Err(Error::PackingExhausted {
                placed: points.len(),
                requested: config.count,
                attempts,
            });
        }
        attempts += 1;
        let x = round(xs.sample(rng), minx, maxx);
        let y = round(ys.sample(rng), miny, maxy);
        let candidate = Point::new(x, y);
        if points
            .iter()
            .all(|p| p.distance(&candidate) >= config.min_distance)
        {
            log::trace!("Accepted {candidate:?} at attempt {attempts}");
            points.push(candidate);
        }
    }
    log::debug!("Placed {} points in {attempts} attempts", points.len());
    Ok(points)
}
