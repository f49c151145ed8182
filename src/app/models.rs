//! Data models for run availability checking
//!
//! This module defines the core data structures used throughout the
//! application: runs and their cycles, availability records, per-run reports
//! and per-candidate scan outcomes.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

use crate::constants::vocab;
use crate::errors::{ListingError, ValidationError};

/// One of the eight daily initialization cycles of ICON-D2-EPS
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cycle {
    H00,
    H03,
    H06,
    H09,
    H12,
    H15,
    H18,
    H21,
}

impl Cycle {
    /// All cycles, in chronological order
    pub const ALL: [Cycle; 8] = [
        Cycle::H00,
        Cycle::H03,
        Cycle::H06,
        Cycle::H09,
        Cycle::H12,
        Cycle::H15,
        Cycle::H18,
        Cycle::H21,
    ];

    /// Zero-padded hour string as used in URLs and run identifiers
    pub fn as_str(&self) -> &'static str {
        match self {
            Cycle::H00 => "00",
            Cycle::H03 => "03",
            Cycle::H06 => "06",
            Cycle::H09 => "09",
            Cycle::H12 => "12",
            Cycle::H15 => "15",
            Cycle::H18 => "18",
            Cycle::H21 => "21",
        }
    }
}

impl fmt::Display for Cycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Cycle {
    type Err = ValidationError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "00" => Ok(Cycle::H00),
            "03" => Ok(Cycle::H03),
            "06" => Ok(Cycle::H06),
            "09" => Ok(Cycle::H09),
            "12" => Ok(Cycle::H12),
            "15" => Ok(Cycle::H15),
            "18" => Ok(Cycle::H18),
            "21" => Ok(Cycle::H21),
            _ => Err(ValidationError::UnknownCycle {
                name: s.to_string(),
            }),
        }
    }
}

/// One model initialization, identified by calendar date and cycle hour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    /// Initialization date
    pub date: NaiveDate,
    /// Initialization cycle hour
    pub cycle: Cycle,
}

impl Run {
    /// Create a new run
    pub fn new(date: NaiveDate, cycle: Cycle) -> Self {
        Self { date, cycle }
    }

    /// Date portion of the run identifier, e.g. "20240601"
    pub fn date_string(&self) -> String {
        self.date.format("%Y%m%d").to_string()
    }

    /// Full run identifier, e.g. "2024060100".
    ///
    /// Both components are zero-padded, so the lexicographic maximum over
    /// identifiers is the chronological maximum.
    pub fn id(&self) -> String {
        format!("{}{}", self.date_string(), self.cycle)
    }
}

impl fmt::Display for Run {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// Whether a variable is a single-level (2d) or pressure-level (3d) field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarKind {
    /// Surface/single-level field
    Surface,
    /// Field published per pressure level
    PressureLevel,
}

impl VarKind {
    /// The accepted variable vocabulary for this dimension
    pub fn vocabulary(&self) -> &'static [&'static str] {
        match self {
            VarKind::Surface => vocab::VAR_2D,
            VarKind::PressureLevel => vocab::VAR_3D,
        }
    }
}

impl fmt::Display for VarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VarKind::Surface => write!(f, "2d"),
            VarKind::PressureLevel => write!(f, "3d"),
        }
    }
}

/// Availability of one variable's expected file set within a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvailabilityStatus {
    /// Every expected file appears in the server listing
    Complete,
    /// At least one expected file is missing
    Incomplete,
}

impl AvailabilityStatus {
    /// True when every expected file is published
    pub fn is_complete(&self) -> bool {
        matches!(self, AvailabilityStatus::Complete)
    }
}

impl fmt::Display for AvailabilityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AvailabilityStatus::Complete => write!(f, "all files available"),
            AvailabilityStatus::Incomplete => write!(f, "incomplete"),
        }
    }
}

/// One row of a run's availability report: the status of a single variable
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailabilityRecord {
    /// Run identifier, e.g. "2024060100"
    pub run_id: String,
    /// Variable name as requested
    pub variable: String,
    /// Complete or incomplete
    pub status: AvailabilityStatus,
    /// Number of expected files found in the listing
    pub avail_count: usize,
    /// Number of missing lead times (see resolver for the exact formula)
    pub missing_count: usize,
}

/// Availability records for every requested variable within one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// The run this report describes
    pub run: Run,
    /// One record per requested variable, 2d variables first
    pub records: Vec<AvailabilityRecord>,
}

impl RunReport {
    /// A run qualifies when every requested variable is fully published
    pub fn is_qualifying(&self) -> bool {
        self.records.iter().all(|r| r.status.is_complete())
    }
}

/// Per-candidate outcome of a scan
///
/// A candidate either contributes a full report or is skipped whole; no
/// partial record ever escapes a failed resolution. The skip reason is kept
/// so diagnostics can inspect it even though selection ignores it.
#[derive(Debug)]
pub enum RunOutcome {
    /// The run was resolved and produced a report
    Resolved(RunReport),
    /// The run could not be evaluated and contributes nothing
    Skipped { run: Run, reason: ListingError },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_cycle_round_trip() {
        for cycle in Cycle::ALL {
            assert_eq!(cycle.as_str().parse::<Cycle>().unwrap(), cycle);
        }
    }

    #[test]
    fn test_cycle_rejects_unknown_hour() {
        let error = "07".parse::<Cycle>().unwrap_err();
        assert!(matches!(error, ValidationError::UnknownCycle { .. }));
        assert!(error.to_string().contains("00, 03, 06, 09, 12, 15, 18, 21"));
    }

    #[test]
    fn test_run_id_format() {
        let run = Run::new(date(2024, 6, 1), Cycle::H03);
        assert_eq!(run.date_string(), "20240601");
        assert_eq!(run.id(), "2024060103");
        assert_eq!(run.to_string(), "2024060103");
    }

    #[test]
    fn test_run_id_lexicographic_order_is_chronological() {
        let older = Run::new(date(2024, 5, 31), Cycle::H21);
        let newer = Run::new(date(2024, 6, 1), Cycle::H00);
        assert!(newer.id() > older.id());

        let morning = Run::new(date(2024, 6, 1), Cycle::H03);
        let evening = Run::new(date(2024, 6, 1), Cycle::H18);
        assert!(evening.id() > morning.id());
    }

    #[test]
    fn test_status_display_matches_report_wording() {
        assert_eq!(
            AvailabilityStatus::Complete.to_string(),
            "all files available"
        );
        assert_eq!(AvailabilityStatus::Incomplete.to_string(), "incomplete");
    }

    #[test]
    fn test_report_qualifies_only_when_all_records_complete() {
        let run = Run::new(date(2024, 6, 1), Cycle::H00);
        let complete = AvailabilityRecord {
            run_id: run.id(),
            variable: "t_2m".to_string(),
            status: AvailabilityStatus::Complete,
            avail_count: 49,
            missing_count: 0,
        };
        let incomplete = AvailabilityRecord {
            status: AvailabilityStatus::Incomplete,
            avail_count: 47,
            missing_count: 2,
            ..complete.clone()
        };

        let report = RunReport {
            run,
            records: vec![complete.clone()],
        };
        assert!(report.is_qualifying());

        let report = RunReport {
            run,
            records: vec![complete, incomplete],
        };
        assert!(!report.is_qualifying());
    }
}
