//! Application constants for the ICON run finder
//!
//! This module centralizes all constants used throughout the application,
//! organized by functional domain for maintainability and clarity.

use std::time::Duration;

/// DWD open-data service URLs
pub mod dwd {
    /// DWD open-data NWP archive base URL
    pub const BASE_URL: &str = "https://opendata.dwd.de/weather/nwp";

    /// Path segment for the ICON-D2-EPS gridded output
    pub const MODEL_PATH: &str = "icon-d2-eps/grib";
}

/// File-naming tokens for published GRIB output
pub mod naming {
    /// Product-kind token prefixing every single-level (2d) file name
    pub const SINGLE_LEVEL_TOKEN: &str = "icon-d2-eps_germany_icosahedral_single-level";

    /// Product-kind token prefixing every pressure-level (3d) file name
    pub const PRESSURE_LEVEL_TOKEN: &str = "icon-d2-eps_germany_icosahedral_pressure-level";

    /// Suffix of every published data file
    pub const FILE_SUFFIX: &str = ".grib2.bz2";

    /// Extension filter passed to the directory listing. No leading dot,
    /// matching the href values the server emits.
    pub const EXTENSION_FILTER: &str = "grib2.bz2";
}

/// Forecast lead times
pub mod lead_times {
    use std::ops::RangeInclusive;

    /// Forecast hours published for every ICON-D2-EPS run
    pub const HOURS: RangeInclusive<u32> = 0..=48;

    /// Number of lead times in `HOURS`
    pub const COUNT: usize = 49;
}

/// Variable vocabularies accepted by the checker
pub mod vocab {
    /// Single-level (2d) variables published for ICON-D2-EPS.
    ///
    /// Removed because they are missing at the source: cape_con, dbz_ctmax,
    /// fr_ice, hbas_con, htop_con, lpi_con_max, qv_2m, sdi2, sobs_rad,
    /// tcond10_max, thbs_rad, t_s, uh_max_low, uh_max_med
    pub const VAR_2D: &[&str] = &[
        "alb_rad",
        "alhfl_s",
        "apab_s",
        "ashfl_s",
        "asob_s",
        "asob_t",
        "aswdifd_s",
        "aswdifu_s",
        "aswdir_s",
        "athb_s",
        "athb_t",
        "aumfl_s",
        "avmfl_s",
        "cape_ml",
        "ceiling",
        "cin_ml",
        "clch",
        "clcl",
        "clcm",
        "clct",
        "clct_mod",
        "cldepth",
        "dbz_850",
        "dbz_cmax",
        "freshsnw",
        "grau_gsp",
        "hbas_sc",
        "h_ice",
        "h_snow",
        "htop_dc",
        "htop_sc",
        "hzerocl",
        "lpi",
        "lpi_max",
        "pmsl",
        "prg_gsp",
        "prr_gsp",
        "prs_gsp",
        "ps",
        "qv_s",
        "rain_con",
        "rain_gsp",
        "relhum_2m",
        "rho_snow",
        "runoff_g",
        "runoff_s",
        "snowc",
        "snow_con",
        "snow_gsp",
        "snowlmt",
        "synmsg_bt_cl_ir10.8",
        "synmsg_bt_cl_wv6.2",
        "t_2m",
        "tch",
        "tcm",
        "tcond_max",
        "td_2m",
        "t_g",
        "t_ice",
        "tmax_2m",
        "tmin_2m",
        "tot_prec",
        "tqc",
        "tqc_dia",
        "tqg",
        "tqi",
        "tqi_dia",
        "tqr",
        "tqs",
        "tqv",
        "tqv_dia",
        "twater",
        "t_snow",
        "u_10m",
        "uh_max",
        "v_10m",
        "vmax_10m",
        "vorw_ctmax",
        "w_ctmax",
        "w_i",
        "w_snow",
        "ww",
        "z0",
    ];

    /// Pressure-level (3d) variables published for ICON-D2-EPS.
    ///
    /// Removed because they are missing at the source: clc
    pub const VAR_3D: &[&str] = &["fi", "omega", "relhum", "t", "u", "v"];
}

/// HTTP client configuration constants
pub mod http {
    use super::Duration;

    /// Default user agent for all HTTP requests
    pub const USER_AGENT: &str = "ICON-Run-Finder/0.1.0 (Weather Data Tool)";

    /// Default HTTP request timeout
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

    /// Connection establishment timeout
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);
}

/// CSS selectors for directory index pages
pub mod selectors {
    /// CSS selector for index page hyperlinks
    pub const ANCHOR_SELECTOR: &str = "a";
}
