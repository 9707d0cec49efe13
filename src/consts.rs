pub mod cli_consts {
    //! Dashboard Configuration Constants
    //!
    //! This module contains the configuration constants for the dashboard,
    //! organized by functional area for clarity.

    // =============================================================================
    // QUEUE CONFIGURATION
    // =============================================================================

    /// The maximum number of events to keep in the activity logs.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// Buffer size of the channel carrying loader results and events to the UI.
    pub const EVENT_QUEUE_SIZE: usize = 100;

    // =============================================================================
    // FILTER DEFAULTS
    // =============================================================================

    /// Sentinel category meaning "no category filter".
    pub const ALL_CATEGORIES: &str = "All";

    /// Default start of the price date range.
    pub const DEFAULT_START_DATE: &str = "2014-01-01";

    /// Default end of the price date range.
    pub const DEFAULT_END_DATE: &str = "2022-12-31";

    /// Placeholder for absent values in the header and the event table.
    pub const PLACEHOLDER: &str = "—";

    // =============================================================================
    // NETWORK CONFIGURATION
    // =============================================================================

    /// API endpoint configuration
    pub mod api {
        use std::time::Duration;

        /// Base URL of the local data server.
        pub const LOCAL_API_URL: &str = "http://127.0.0.1:5000";

        pub const PRICES_ENDPOINT: &str = "api/prices";
        pub const EVENTS_ENDPOINT: &str = "api/events";
        pub const CHANGE_POINT_ENDPOINT: &str = "api/change-point";

        /// Connection timeout (seconds)
        pub const CONNECT_TIMEOUT_SECS: u64 = 10;

        /// Whole-request timeout (seconds). The prices payload is large.
        pub const REQUEST_TIMEOUT_SECS: u64 = 30;

        pub const fn connect_timeout() -> Duration {
            Duration::from_secs(CONNECT_TIMEOUT_SECS)
        }

        pub const fn request_timeout() -> Duration {
            Duration::from_secs(REQUEST_TIMEOUT_SECS)
        }
    }

    // =============================================================================
    // UI CONFIGURATION
    // =============================================================================

    /// UI timing configuration
    pub mod ui {
        use std::time::Duration;

        /// How long the splash screen is shown before the dashboard (milliseconds)
        pub const SPLASH_DURATION_MS: u64 = 1500;

        /// Key polling interval of the UI loop (milliseconds)
        pub const POLL_INTERVAL_MS: u64 = 100;

        /// Rows moved by PageUp / PageDown in the event table
        pub const PAGE_SCROLL_ROWS: usize = 10;

        pub const fn splash_duration() -> Duration {
            Duration::from_millis(SPLASH_DURATION_MS)
        }

        pub const fn poll_interval() -> Duration {
            Duration::from_millis(POLL_INTERVAL_MS)
        }
    }
}
