//! Trading volume peak

use serde::Serialize;

use crate::charts::TimePoint;
use crate::error::{AnalyzerError, AnalyzerResult};

/// Point of highest trading volume
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VolumeResult {
    pub timestamp: i64,
    pub value: f64,
}

/// Highest volume in the series; the earliest point wins ties.
pub fn peak_volume(volumes: &[TimePoint]) -> AnalyzerResult<VolumeResult> {
    let (first, rest) = volumes
        .split_first()
        .ok_or_else(|| AnalyzerError::empty_series("No volume data in the selected time range"))?;

    let peak = rest
        .iter()
        .fold(first, |best, point| if point.value > best.value { point } else { best });

    Ok(VolumeResult {
        timestamp: peak.timestamp,
        value: peak.value,
    })
}
