//! Trajectory recording and export for offline analysis.

use std::collections::HashMap;

use pendra_dynamics::JointPositions;
use pendra_model::Ensemble;

/// Records per-step angle, velocity, and tip-position histories.
pub struct TrajectoryRecorder {
    /// Angles at each step, `[theta1_0, theta2_0, theta1_1, ...]`.
    pub theta_history: Vec<Vec<f64>>,
    /// Angular velocities at each step, interleaved the same way.
    pub omega_history: Vec<Vec<f64>>,
    /// Tip coordinates at each step, `[x2_0, y2_0, x2_1, ...]`.
    pub tip_history: Vec<Vec<f64>>,
    /// Simulation time of each step, in units of `speed`-scaled steps.
    pub time_history: Vec<f64>,
}

impl TrajectoryRecorder {
    /// Create a new empty trajectory recorder.
    pub fn new() -> Self {
        Self {
            theta_history: Vec::new(),
            omega_history: Vec::new(),
            tip_history: Vec::new(),
            time_history: Vec::new(),
        }
    }

    /// Record the ensemble's current angles and velocities.
    pub fn record(&mut self, ensemble: &Ensemble) {
        let mut thetas = Vec::with_capacity(ensemble.len() * 2);
        let mut omegas = Vec::with_capacity(ensemble.len() * 2);
        for s in &ensemble.states {
            thetas.push(s.theta1);
            thetas.push(s.theta2);
            omegas.push(s.omega1);
            omegas.push(s.omega2);
        }
        self.theta_history.push(thetas);
        self.omega_history.push(omegas);
        self.time_history
            .push(self.time_history.len() as f64 * ensemble.world.speed);
    }

    /// Record the ensemble plus the endpoints returned by the step.
    ///
    /// Panics if `positions` does not hold one endpoint set per pendulum;
    /// a partial slice would silently skew `tip_history` against the other
    /// series.
    pub fn record_with_positions(&mut self, ensemble: &Ensemble, positions: &[JointPositions]) {
        assert!(
            positions.len() == ensemble.len(),
            "{} endpoint sets recorded for an ensemble of {}",
            positions.len(),
            ensemble.len(),
        );
        self.record(ensemble);
        let mut tips = Vec::with_capacity(positions.len() * 2);
        for p in positions {
            tips.push(p.x2);
            tips.push(p.y2);
        }
        self.tip_history.push(tips);
    }

    /// Number of steps recorded.
    pub fn len(&self) -> usize {
        self.time_history.len()
    }

    /// Check if the recorder is empty.
    pub fn is_empty(&self) -> bool {
        self.time_history.is_empty()
    }

    /// Clear all recorded data.
    pub fn clear(&mut self) {
        self.theta_history.clear();
        self.omega_history.clear();
        self.tip_history.clear();
        self.time_history.clear();
    }

    /// Export to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        let mut data = HashMap::new();
        data.insert("theta", &self.theta_history);
        data.insert("omega", &self.omega_history);
        data.insert("tip", &self.tip_history);

        // Nest the time history so every value has the same shape.
        let time_nested: Vec<Vec<f64>> = self.time_history.iter().map(|&t| vec![t]).collect();
        data.insert("time", &time_nested);

        serde_json::to_string_pretty(&data)
    }

    /// Export to a JSON file.
    pub fn to_json_file(&self, path: &str) -> Result<(), Box<dyn std::error::Error>> {
        let json = self.to_json()?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

impl Default for TrajectoryRecorder {
    fn default() -> Self {
        Self::new()
    }
}
