//! Flow-rate sweep generation for the cost analysis.

use std::fmt;

/// Evenly spaced flow rates between two bounds, both included.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowSweep {
    pub start: f64,
    pub end: f64,
    pub num_points: usize,
}

impl FlowSweep {
    pub fn linear(start: f64, end: f64, num_points: usize) -> Self {
        Self {
            start,
            end,
            num_points,
        }
    }

    /// Generate all points in the sweep.
    pub fn generate_points(&self) -> Vec<f64> {
        if self.num_points <= 1 {
            return vec![self.start];
        }

        let delta = (self.end - self.start) / (self.num_points - 1) as f64;
        let mut points: Vec<f64> = (0..self.num_points)
            .map(|i| self.start + i as f64 * delta)
            .collect();

        // Ensure exact endpoint
        points[self.num_points - 1] = self.end;
        points
    }
}

impl fmt::Display for FlowSweep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Sweep from {} to {} ({} points)",
            self.start, self.end, self.num_points
        )
    }
}
