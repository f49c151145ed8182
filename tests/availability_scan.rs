//! End-to-end availability scan scenarios against an in-memory server
//!
//! Exercises the public API the way the CLI drives it: a variable selection,
//! a candidate window, and a listing source standing in for the DWD
//! directory index pages.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use chrono::NaiveDate;

use icon_run_finder::app::{
    resolve_run, scan_for_latest, AvailabilityStatus, Cycle, ListingSource, Run, RunOutcome,
    VariableSelection,
};
use icon_run_finder::errors::ListingError;

/// In-memory stand-in for the DWD open-data server.
///
/// Directories are keyed by URL and hold bare file names, exactly as the
/// index pages link them. A directory that was never published answers 404.
#[derive(Default)]
struct FakeServer {
    directories: HashMap<String, Vec<String>>,
}

impl FakeServer {
    fn publish(&mut self, run: &Run, var: &str, names: Vec<String>) {
        let dir = format!(
            "https://opendata.dwd.de/weather/nwp/icon-d2-eps/grib/{}/{}/",
            run.cycle, var
        );
        self.directories.insert(dir, names);
    }
}

#[async_trait]
impl ListingSource for FakeServer {
    async fn list_published_files(
        &self,
        directory_url: &str,
        extension: &str,
        prefix: &str,
    ) -> Result<HashSet<String>, ListingError> {
        let names = self
            .directories
            .get(directory_url)
            .ok_or_else(|| ListingError::Status {
                status: 404,
                url: directory_url.to_string(),
            })?;

        Ok(names
            .iter()
            .filter(|name| name.ends_with(extension) && name.starts_with(prefix))
            .map(|name| format!("{}{}", directory_url, name))
            .collect())
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// File names for a 2d variable over the given lead times
fn surface_names(run: &Run, var: &str, leads: impl Iterator<Item = u32>) -> Vec<String> {
    leads
        .map(|lead| {
            format!(
                "icon-d2-eps_germany_icosahedral_single-level_{}{}_{:03}_2d_{}.grib2.bz2",
                run.date_string(),
                run.cycle,
                lead,
                var
            )
        })
        .collect()
}

fn t_2m_selection() -> VariableSelection {
    VariableSelection::new(vec!["t_2m".to_string()], vec![], vec![]).unwrap()
}

#[tokio::test]
async fn fully_published_run_reports_all_files_available() {
    let run = Run::new(date(2024, 6, 1), Cycle::H00);
    let mut server = FakeServer::default();
    server.publish(&run, "t_2m", surface_names(&run, "t_2m", 0..=48));

    let report = resolve_run(&server, &run, &t_2m_selection()).await.unwrap();

    assert_eq!(report.records.len(), 1);
    let record = &report.records[0];
    assert_eq!(record.status, AvailabilityStatus::Complete);
    assert_eq!(record.avail_count, 49);
    assert_eq!(record.missing_count, 0);
}

#[tokio::test]
async fn partially_published_run_reports_incomplete() {
    let run = Run::new(date(2024, 6, 1), Cycle::H00);
    let mut server = FakeServer::default();
    // 47 of the 49 expected lead times uploaded so far
    server.publish(&run, "t_2m", surface_names(&run, "t_2m", 0..=46));

    let report = resolve_run(&server, &run, &t_2m_selection()).await.unwrap();

    let record = &report.records[0];
    assert_eq!(record.status, AvailabilityStatus::Incomplete);
    assert_eq!(record.avail_count, 47);
    assert_eq!(record.missing_count, 2);
}

#[tokio::test]
async fn scan_picks_latest_complete_run_and_skips_failures() {
    let today = date(2024, 6, 2);
    let incomplete = Run::new(date(2024, 6, 1), Cycle::H00);
    let complete = Run::new(date(2024, 6, 1), Cycle::H03);
    // The 06 run (and every other candidate) has no directory yet, so its
    // listing fails and the run is skipped without surfacing an error.
    let mut server = FakeServer::default();
    server.publish(
        &incomplete,
        "t_2m",
        surface_names(&incomplete, "t_2m", 0..=45),
    );
    server.publish(&complete, "t_2m", surface_names(&complete, "t_2m", 0..=48));

    let scan = scan_for_latest(&server, None, &t_2m_selection(), today)
        .await
        .unwrap();

    // The 00 and 03 cycle directories exist, so today's runs for those
    // cycles also resolve (finding none of their files); the remaining
    // twelve candidates are skipped whole.
    let reports: Vec<_> = scan.reports().collect();
    assert_eq!(reports.len(), 4);
    assert_eq!(reports[0].run, incomplete);
    assert!(!reports[0].is_qualifying());
    assert_eq!(reports[1].run, complete);
    assert!(reports[1].is_qualifying());
    assert!(!reports[2].is_qualifying());
    assert!(!reports[3].is_qualifying());
    assert_eq!(scan.outcomes.len(), 16);
    assert_eq!(scan.selected_run.as_deref(), Some("2024060103"));
}

#[tokio::test]
async fn scan_without_qualifying_run_yields_no_selection() {
    let today = date(2024, 6, 2);
    let run = Run::new(date(2024, 6, 1), Cycle::H12);
    let mut server = FakeServer::default();
    server.publish(&run, "t_2m", surface_names(&run, "t_2m", 0..=10));

    let scan = scan_for_latest(&server, None, &t_2m_selection(), today)
        .await
        .unwrap();

    assert!(scan.selected_run.is_none());
    // Both dates share the 12 cycle directory, so both resolve incomplete
    assert_eq!(scan.reports().count(), 2);
}

#[tokio::test]
async fn scan_with_cycle_filter_checks_two_candidates() {
    let today = date(2024, 6, 2);
    let yesterday_run = Run::new(date(2024, 6, 1), Cycle::H12);
    let today_run = Run::new(today, Cycle::H12);
    let mut server = FakeServer::default();
    // Both dates share the cycle directory; publishing both runs' files in
    // it mirrors how the server keeps one directory per cycle and variable.
    let mut names = surface_names(&yesterday_run, "t_2m", 0..=48);
    names.extend(surface_names(&today_run, "t_2m", 0..=48));
    server.publish(&yesterday_run, "t_2m", names);

    let scan = scan_for_latest(&server, Some(Cycle::H12), &t_2m_selection(), today)
        .await
        .unwrap();

    assert_eq!(scan.outcomes.len(), 2);
    assert!(scan
        .outcomes
        .iter()
        .all(|o| matches!(o, RunOutcome::Resolved(_))));
    // Today's run is the lexicographic (and chronological) maximum
    assert_eq!(scan.selected_run.as_deref(), Some("2024060212"));
}

#[tokio::test]
async fn mixed_selection_requires_every_variable_to_be_complete() {
    let run = Run::new(date(2024, 6, 1), Cycle::H00);
    let mut server = FakeServer::default();
    server.publish(&run, "t_2m", surface_names(&run, "t_2m", 0..=48));
    // The 3d temperature directory is still being filled
    let pressure_names: Vec<String> = (0..=30)
        .map(|lead| {
            format!(
                "icon-d2-eps_germany_icosahedral_pressure-level_{}{}_{:03}_850_t.grib2.bz2",
                run.date_string(),
                run.cycle,
                lead
            )
        })
        .collect();
    server.publish(&run, "t", pressure_names);

    let selection = VariableSelection::new(
        vec!["t_2m".to_string()],
        vec!["t".to_string()],
        vec!["850".to_string()],
    )
    .unwrap();

    let report = resolve_run(&server, &run, &selection).await.unwrap();

    assert_eq!(report.records.len(), 2);
    assert_eq!(report.records[0].variable, "t_2m");
    assert_eq!(report.records[0].status, AvailabilityStatus::Complete);
    assert_eq!(report.records[1].variable, "t");
    assert_eq!(report.records[1].status, AvailabilityStatus::Incomplete);
    assert_eq!(report.records[1].avail_count, 31);
    assert_eq!(report.records[1].missing_count, 18);
    assert!(!report.is_qualifying());
}
