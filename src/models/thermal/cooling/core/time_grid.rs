use super::CoolingError;

/// Output times for a cooling solve, in minutes.
///
/// Always non-empty and strictly increasing.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeGrid {
    times: Vec<f64>,
}

impl TimeGrid {
    /// Number of points in the default grid.
    pub const DEFAULT_POINTS: usize = 150;

    /// End of the default grid, in minutes.
    pub const DEFAULT_END: f64 = 200.0;

    /// Creates `points` evenly spaced times over the closed interval `[start, end]`.
    ///
    /// The last time is exactly `end`. A single point yields `[start]`.
    ///
    /// # Errors
    ///
    /// Returns [`CoolingError::InvalidTimeGrid`] if `points` is zero, either
    /// bound is not finite, or `end <= start` with more than one point.
    pub fn linspace(start: f64, end: f64, points: usize) -> Result<Self, CoolingError> {
        let invalid = || CoolingError::InvalidTimeGrid { start, end, points };

        if points == 0 || !start.is_finite() || !end.is_finite() {
            return Err(invalid());
        }
        if points == 1 {
            return Ok(Self { times: vec![start] });
        }
        if end <= start {
            return Err(invalid());
        }

        Ok(Self {
            times: evenly_spaced(start, end, points),
        })
    }

    /// Returns the output times.
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Returns the number of output times.
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Returns `true` if there are no output times, which a constructed grid never has.
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }
}

impl Default for TimeGrid {
    /// 150 points over `[0, 200]` minutes.
    fn default() -> Self {
        Self {
            times: evenly_spaced(0.0, Self::DEFAULT_END, Self::DEFAULT_POINTS),
        }
    }
}

/// Requires `points >= 2` and `start < end`.
fn evenly_spaced(start: f64, end: f64, points: usize) -> Vec<f64> {
    let step = (end - start) / (points - 1) as f64;
    let mut times: Vec<f64> = (0..points).map(|i| start + step * i as f64).collect();
    times[points - 1] = end;
    times
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn default_grid() {
        let grid = TimeGrid::default();
        assert_eq!(grid.len(), 150);
        assert_eq!(grid.times()[0], 0.0);
        assert_eq!(grid.times()[149], 200.0);
        assert_relative_eq!(grid.times()[1], 200.0 / 149.0);
        assert_eq!(grid, TimeGrid::linspace(0.0, 200.0, 150).unwrap());
    }

    #[test]
    fn single_point() {
        let grid = TimeGrid::linspace(3.0, 3.0, 1).unwrap();
        assert_eq!(grid.times(), &[3.0]);
    }

    #[test]
    fn rejects_invalid_grids() {
        assert!(TimeGrid::linspace(0.0, 200.0, 0).is_err());
        assert!(TimeGrid::linspace(10.0, 0.0, 5).is_err());
        assert!(TimeGrid::linspace(0.0, f64::INFINITY, 5).is_err());
    }
}
