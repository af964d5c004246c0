//! Simplified, uncorrected Robertson chart
//!
//! The thresholds are regional practice values and are reproduced as-is.
//! All comparisons are strict: a value equal to a threshold falls into the
//! band below it.

use crate::app::models::SoilZone;

/// Zone id for a valid (qc > 0, rf >= 0) pair
pub fn zone_id(qc: f64, rf: f64) -> u8 {
    if qc > 25.0 {
        if rf < 1.0 { 7 } else { 8 }
    } else if qc > 10.0 {
        if rf < 0.5 {
            7
        } else if rf < 1.5 {
            6
        } else if rf < 3.0 {
            5
        } else {
            8
        }
    } else if qc > 5.0 {
        if rf < 1.0 {
            6
        } else if rf < 2.0 {
            5
        } else if rf < 4.0 {
            4
        } else if rf < 6.0 {
            3
        } else {
            9
        }
    } else if qc > 2.0 {
        if rf < 1.0 {
            5
        } else if rf < 2.5 {
            4
        } else if rf < 5.0 {
            3
        } else if rf < 8.0 {
            2
        } else {
            1
        }
    } else if qc > 0.5 {
        if rf < 1.5 {
            4
        } else if rf < 4.0 {
            3
        } else if rf < 8.0 {
            2
        } else {
            1
        }
    } else if rf < 5.0 {
        3
    } else if rf < 10.0 {
        2
    } else {
        1
    }
}

/// Classify a sample; `None` for missing values, `qc <= 0` or `rf < 0`
pub fn classify(qc: Option<f64>, rf: Option<f64>) -> Option<SoilZone> {
    let (qc, rf) = (qc?, rf?);
    if !qc.is_finite() || !rf.is_finite() || qc <= 0.0 || rf < 0.0 {
        return None;
    }
    SoilZone::from_id(zone_id(qc, rf))
}
