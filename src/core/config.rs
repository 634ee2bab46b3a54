use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::{PaintError, Result};

/// Tuning knobs for the compressor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CompressorConfig {
    /// `(height + width) / worthy_divisor`, rounded, is the smallest
    /// half-extent a square must reach to be emitted.
    pub worthy_divisor: usize,
    /// Run the square pass at all. When false every cell goes to lines.
    pub squares: bool,
}

impl Default for CompressorConfig {
    fn default() -> Self {
        Self { worthy_divisor: 80, squares: true }
    }
}

impl CompressorConfig {
    pub fn from_json(text: &str) -> anyhow::Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn validate(&self) -> Result<()> {
        if self.worthy_divisor == 0 {
            return Err(PaintError::BadConfig("worthy_divisor must be positive".into()));
        }
        Ok(())
    }

    /// Minimum accepted half-extent for a `height x width` grid.
    /// Halves round to even, so 40/80 gives 0 and 120/80 gives 2.
    pub fn min_worthy_size(&self, height: usize, width: usize) -> usize {
        let d = self.worthy_divisor.max(1);
        let sum = height + width;
        let (q, r) = (sum / d, sum % d);
        match (2 * r).cmp(&d) {
            std::cmp::Ordering::Less => q,
            std::cmp::Ordering::Greater => q + 1,
            std::cmp::Ordering::Equal => q + (q & 1),
        }
    }
}
