//! Ten-year windows for the year picker

use serde::Serialize;

pub const DECADE_LEN: usize = 10;

/// Ten consecutive years starting on a multiple of ten
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DecadeWindow {
    years: [i32; DECADE_LEN],
}

impl DecadeWindow {
    /// Window containing `base_year`
    pub fn build(base_year: i32) -> Self {
        let first = base_year - base_year.rem_euclid(10);
        Self {
            years: std::array::from_fn(|i| first + i as i32),
        }
    }

    pub fn years(&self) -> &[i32; DECADE_LEN] {
        &self.years
    }

    pub fn first(&self) -> i32 {
        self.years[0]
    }

    pub fn last(&self) -> i32 {
        self.years[DECADE_LEN - 1]
    }

    pub fn contains(&self, year: i32) -> bool {
        (self.first()..=self.last()).contains(&year)
    }
}
