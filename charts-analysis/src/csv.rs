//! Column counting for `csv` block rows.

use once_cell::sync::Lazy;
use regex::Regex;

// A quoted run is one column regardless of the commas inside it.
static CSV_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"'[^']+'|"[^"]+"|[-()\w.]+"#).expect("csv token pattern"));

/// Number of columns in one csv row.
pub fn count_columns(row: &str) -> usize {
    CSV_TOKEN.find_iter(row).count()
}
