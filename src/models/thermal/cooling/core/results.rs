/// Temperature history of a cooling solve.
///
/// Both vectors have the length of the [`TimeGrid`](super::TimeGrid) used.
#[derive(Debug, Clone, PartialEq)]
pub struct Results {
    /// Output times, in minutes.
    pub time: Vec<f64>,

    /// Temperatures at each output time, in degrees Celsius.
    pub temperature: Vec<f64>,
}

impl Results {
    /// Returns the final temperature.
    pub fn last_temperature(&self) -> Option<f64> {
        self.temperature.last().copied()
    }
}
