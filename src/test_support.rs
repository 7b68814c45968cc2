use crate::domain::historical_pool::HistoricalPool;
use crate::services::config::{SimulationConfig, SimulationOverrides, SimulationSettings, resolve_settings};
use crate::services::sampler::ThroughputSampler;

// A sampler that replays pool positions from a script, wrapping around at the end.
pub struct ScriptedSampler {
    positions: Vec<usize>,
    draws: usize,
}

impl ScriptedSampler {
    pub fn new(positions: Vec<usize>) -> Self {
        assert!(!positions.is_empty(), "script needs at least one position");
        Self { positions, draws: 0 }
    }

    pub fn draws(&self) -> usize {
        self.draws
    }
}

impl ThroughputSampler for ScriptedSampler {
    fn draw(&mut self, pool: &HistoricalPool) -> u32 {
        let position = self.positions[self.draws % self.positions.len()];
        self.draws += 1;
        pool.values()[position]
    }
}

pub fn settings_for(history_path: &str) -> SimulationSettings {
    let overrides = SimulationOverrides {
        history: Some(history_path.to_string()),
        ..Default::default()
    };
    resolve_settings(overrides, SimulationConfig::default()).unwrap()
}
