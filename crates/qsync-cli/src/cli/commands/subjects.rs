//! `qsync subjects` – list filter options.

use qsync_core::config::QsyncConfig;

/// Option the filter input offers for "every subject".
pub const ALL_OPTION: &str = "all";

/// Options as offered by the filter input: "all" first, then configured subjects.
pub fn subject_options(cfg: &QsyncConfig) -> Vec<&str> {
    std::iter::once(ALL_OPTION)
        .chain(cfg.filter.subjects.iter().map(String::as_str))
        .collect()
}

pub fn run_subjects(cfg: &QsyncConfig) {
    for option in subject_options(cfg) {
        println!("{option}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_comes_first() {
        let cfg = QsyncConfig::default();
        let options = subject_options(&cfg);
        assert_eq!(options[0], "all");
        assert_eq!(options.len(), cfg.filter.subjects.len() + 1);
    }
}
