//! Run availability resolution
//!
//! Builds the expected file-name universe for a run and variable selection,
//! compares it against the server's published listings, and scans a bounded
//! window of candidate runs for the most recent one whose every requested
//! variable is fully available.

use std::collections::HashSet;

use chrono::{Days, NaiveDate};
use tracing::{debug, info, warn};

use crate::constants::{dwd, lead_times, naming};
use crate::errors::{ResolveError, ResolveResult, ValidationError};

use super::listing::ListingSource;
use super::models::{
    AvailabilityRecord, AvailabilityStatus, Cycle, Run, RunOutcome, RunReport, VarKind,
};

/// The variables and pressure levels whose availability is being checked
#[derive(Debug, Clone, Default)]
pub struct VariableSelection {
    /// Single-level variables, checked first
    pub vars_2d: Vec<String>,
    /// Pressure-level variables, checked after the 2d set
    pub vars_3d: Vec<String>,
    /// Pressure levels applied to every 3d variable, in hPa
    pub levels_3d: Vec<String>,
}

impl VariableSelection {
    /// Build a selection, rejecting it before any network traffic happens
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` when the selection is empty, when 3d
    /// variables come without levels, or when a name falls outside its
    /// fixed vocabulary.
    pub fn new(
        vars_2d: Vec<String>,
        vars_3d: Vec<String>,
        levels_3d: Vec<String>,
    ) -> std::result::Result<Self, ValidationError> {
        let selection = Self {
            vars_2d,
            vars_3d,
            levels_3d,
        };
        selection.validate()?;
        Ok(selection)
    }

    /// Check the selection against the fixed vocabularies
    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        if self.vars_2d.is_empty() && self.vars_3d.is_empty() {
            return Err(ValidationError::NoVariablesSpecified);
        }
        if !self.vars_3d.is_empty() && self.levels_3d.is_empty() {
            return Err(ValidationError::MissingLevels);
        }
        for var in &self.vars_2d {
            validate_variable(var, VarKind::Surface)?;
        }
        for var in &self.vars_3d {
            validate_variable(var, VarKind::PressureLevel)?;
        }
        Ok(())
    }
}

fn validate_variable(name: &str, kind: VarKind) -> std::result::Result<(), ValidationError> {
    if kind.vocabulary().contains(&name) {
        Ok(())
    } else {
        Err(ValidationError::UnknownVariable {
            kind,
            name: name.to_string(),
            accepted: kind.vocabulary(),
        })
    }
}

/// Directory holding every file for one (run, variable) pair.
///
/// Keeps the trailing slash so that published entries, built as
/// directory + href, compare equal to the expected names.
fn variable_directory(run: &Run, var: &str) -> String {
    format!(
        "{}/{}/{}/{}/",
        dwd::BASE_URL,
        dwd::MODEL_PATH,
        run.cycle,
        var
    )
}

/// Expected file names for a 2d variable: one per lead time
fn expected_surface_files(run: &Run, var: &str) -> Vec<String> {
    let dir = variable_directory(run, var);
    lead_times::HOURS
        .map(|lead| {
            format!(
                "{}{}_{}{}_{:03}_2d_{}{}",
                dir,
                naming::SINGLE_LEVEL_TOKEN,
                run.date_string(),
                run.cycle,
                lead,
                var,
                naming::FILE_SUFFIX
            )
        })
        .collect()
}

/// Expected file names for a 3d variable: one per (level, lead time) pair,
/// levels outer, lead times inner
fn expected_pressure_files(run: &Run, var: &str, levels: &[String]) -> Vec<String> {
    let dir = variable_directory(run, var);
    let mut names = Vec::with_capacity(levels.len() * lead_times::COUNT);
    for level in levels {
        for lead in lead_times::HOURS {
            names.push(format!(
                "{}{}_{}{}_{:03}_{}_{}{}",
                dir,
                naming::PRESSURE_LEVEL_TOKEN,
                run.date_string(),
                run.cycle,
                lead,
                level,
                var,
                naming::FILE_SUFFIX
            ));
        }
    }
    names
}

/// Compare one variable's expected set against the published set.
///
/// The incomplete missing count subtracts the intersection size from the
/// lead-time count alone, for 3d variables as well as 2d. Downstream
/// consumers rely on that number, so the level factor is deliberately left
/// out of the subtrahend (saturating so the count stays non-negative).
fn availability_record(
    run: &Run,
    variable: &str,
    expected: &[String],
    published: &HashSet<String>,
) -> AvailabilityRecord {
    let matched = expected
        .iter()
        .filter(|name| published.contains(name.as_str()))
        .count();

    if matched == expected.len() {
        AvailabilityRecord {
            run_id: run.id(),
            variable: variable.to_string(),
            status: AvailabilityStatus::Complete,
            avail_count: expected.len(),
            missing_count: 0,
        }
    } else {
        AvailabilityRecord {
            run_id: run.id(),
            variable: variable.to_string(),
            status: AvailabilityStatus::Incomplete,
            avail_count: matched,
            missing_count: lead_times::COUNT.saturating_sub(matched),
        }
    }
}

/// Resolve the availability of one run for every variable in the selection
///
/// Fetches each variable's directory listing sequentially and appends one
/// record per variable, in supply order, 2d variables first. Any listing
/// failure aborts the run: a run either contributes a full report or none.
///
/// # Errors
///
/// Returns `ResolveError::Validation` for a bad selection and
/// `ResolveError::Listing` when a directory cannot be listed. Listing
/// errors propagate so the scan can skip the run whole.
pub async fn resolve_run<S: ListingSource + ?Sized>(
    source: &S,
    run: &Run,
    selection: &VariableSelection,
) -> ResolveResult<RunReport> {
    selection.validate()?;

    let mut records = Vec::with_capacity(selection.vars_2d.len() + selection.vars_3d.len());

    for var in &selection.vars_2d {
        let expected = expected_surface_files(run, var);
        let published = source
            .list_published_files(
                &variable_directory(run, var),
                naming::EXTENSION_FILTER,
                naming::SINGLE_LEVEL_TOKEN,
            )
            .await?;
        records.push(availability_record(run, var, &expected, &published));
    }

    for var in &selection.vars_3d {
        let expected = expected_pressure_files(run, var, &selection.levels_3d);
        let published = source
            .list_published_files(
                &variable_directory(run, var),
                naming::EXTENSION_FILTER,
                naming::PRESSURE_LEVEL_TOKEN,
            )
            .await?;
        records.push(availability_record(run, var, &expected, &published));
    }

    Ok(RunReport { run: *run, records })
}

/// Outcome of a scan across the candidate window
#[derive(Debug)]
pub struct ScanResult {
    /// Per-candidate outcomes, in candidate order (dates outer, cycles inner)
    pub outcomes: Vec<RunOutcome>,
    /// Identifier of the most recent fully-available run, if any qualified
    pub selected_run: Option<String>,
}

impl ScanResult {
    /// All reports that resolved, in candidate order
    pub fn reports(&self) -> impl Iterator<Item = &RunReport> {
        self.outcomes.iter().filter_map(|outcome| match outcome {
            RunOutcome::Resolved(report) => Some(report),
            RunOutcome::Skipped { .. } => None,
        })
    }

    /// Number of candidates that could not be evaluated
    pub fn skipped_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| matches!(outcome, RunOutcome::Skipped { .. }))
            .count()
    }
}

/// Candidate runs for a scan anchored at `today`: yesterday and today
/// crossed with the requested cycles
fn candidate_runs(today: NaiveDate, cycle_filter: Option<Cycle>) -> Vec<Run> {
    let cycles: Vec<Cycle> = match cycle_filter {
        Some(cycle) => vec![cycle],
        None => Cycle::ALL.to_vec(),
    };

    let yesterday = today - Days::new(1);
    let mut runs = Vec::with_capacity(cycles.len() * 2);
    for date in [yesterday, today] {
        for &cycle in &cycles {
            runs.push(Run::new(date, cycle));
        }
    }
    runs
}

/// Scan the candidate window and pick the most recent qualifying run
///
/// Each candidate is resolved best-effort: one that fails to resolve is
/// recorded as `RunOutcome::Skipped` with its reason and never surfaces an
/// error. A window with no qualifying run yields `selected_run = None`,
/// which is not an error either. Only a bad selection aborts the scan,
/// since it would fail identically for every candidate.
pub async fn scan_for_latest<S: ListingSource + ?Sized>(
    source: &S,
    cycle_filter: Option<Cycle>,
    selection: &VariableSelection,
    today: NaiveDate,
) -> std::result::Result<ScanResult, ValidationError> {
    selection.validate()?;

    let candidates = candidate_runs(today, cycle_filter);
    info!("scanning {} candidate runs", candidates.len());

    let mut outcomes = Vec::with_capacity(candidates.len());
    for run in candidates {
        match resolve_run(source, &run, selection).await {
            Ok(report) => {
                debug!(
                    "run {} resolved, qualifying: {}",
                    run,
                    report.is_qualifying()
                );
                outcomes.push(RunOutcome::Resolved(report));
            }
            Err(ResolveError::Listing(reason)) => {
                warn!("run {} skipped: {}", run, reason);
                outcomes.push(RunOutcome::Skipped { run, reason });
            }
            Err(ResolveError::Validation(error)) => return Err(error),
        }
    }

    // Zero-padded ids make the lexicographic max the chronological max
    let selected_run = outcomes
        .iter()
        .filter_map(|outcome| match outcome {
            RunOutcome::Resolved(report) if report.is_qualifying() => Some(report.run.id()),
            _ => None,
        })
        .max();

    Ok(ScanResult {
        outcomes,
        selected_run,
    })
}

/// Scan anchored at the local calendar date at call time
pub async fn find_most_recent_qualifying_run<S: ListingSource + ?Sized>(
    source: &S,
    cycle_filter: Option<Cycle>,
    selection: &VariableSelection,
) -> std::result::Result<ScanResult, ValidationError> {
    scan_for_latest(
        source,
        cycle_filter,
        selection,
        chrono::Local::now().date_naive(),
    )
    .await
}
