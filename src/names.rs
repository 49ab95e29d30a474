pub const VIEWER_URL: &str = "/";
pub const FILTER_URL: &str = "/filter";

/// Route pattern for the single-question permalink.
pub const QUESTION_URL: &str = "/question/{id}";

pub fn question_url(id: &str) -> String {
    QUESTION_URL.replace("{id}", id)
}

/// Sentinel label for the catch-all category and the "no sampling" count.
pub const ALL_LABEL: &str = "All";

/// Fixed choices offered by the sample-count selector. "All" disables
/// sampling entirely.
pub const SAMPLE_COUNT_OPTIONS: &[&str] = &["All", "5", "10", "20", "50", "100"];

pub const CATEGORY_SELECT_ID: &str = "category-select";
pub const COUNT_SELECT_ID: &str = "count-select";
pub const RESULTS_ID: &str = "results";
pub const OPTIONS_PANEL_ID: &str = "options-panel";
