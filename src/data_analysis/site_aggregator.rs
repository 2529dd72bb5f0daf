// src/data_analysis/site_aggregator.rs

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{AnalysisConfig, ErrorKind, SiteSpec};
use crate::data_analysis::error_metric::{compute_error_metric, ErrorMetric};
use crate::data_input::block_locator::TransformLocator;
use crate::error::AnalysisError;

/// Per-file errors collected for one site, in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SiteResults {
    pub name: String,
    pub prefix: String,
    pub files: Vec<PathBuf>,
    pub rotation_errors: Vec<f64>,
    pub translation_errors: Vec<f64>,
}

impl SiteResults {
    fn new(site: &SiteSpec) -> Self {
        Self {
            name: site.name.clone(),
            prefix: site.prefix.clone(),
            ..Default::default()
        }
    }

    fn push(&mut self, path: PathBuf, metric: ErrorMetric) {
        self.files.push(path);
        self.rotation_errors.push(metric.rotation_error);
        self.translation_errors.push(metric.translation_error);
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn errors(&self, kind: ErrorKind) -> &[f64] {
        match kind {
            ErrorKind::Translation => &self.translation_errors,
            ErrorKind::Rotation => &self.rotation_errors,
        }
    }
}

/// One entry per configured site, in configuration order.
/// Sites without matching logs are present with empty sequences.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SiteResultSet {
    pub sites: Vec<SiteResults>,
}

impl SiteResultSet {
    pub fn get(&self, name: &str) -> Option<&SiteResults> {
        self.sites.iter().find(|site| site.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SiteResults> {
        self.sites.iter()
    }

    pub fn total_files(&self) -> usize {
        self.sites.iter().map(SiteResults::len).sum()
    }

    /// True when no site matched any file.
    pub fn is_empty(&self) -> bool {
        self.total_files() == 0
    }

    /// `(site name, errors)` pairs in site order, as consumed by the renderer.
    pub fn series(&self, kind: ErrorKind) -> Vec<(&str, &[f64])> {
        self.sites
            .iter()
            .map(|site| (site.name.as_str(), site.errors(kind)))
            .collect()
    }
}

/// A log that could not be turned into an error metric.
#[derive(Debug)]
pub struct FileFailure {
    pub site: String,
    pub error: AnalysisError,
}

/// Collects registration errors per site, stopping at the first bad file.
///
/// Entries are visited in file-name order so repeated runs give the same
/// sequences; entries matching no site prefix are never opened.
pub fn aggregate<L: TransformLocator + ?Sized>(
    directory: &Path,
    config: &AnalysisConfig,
    locator: &L,
) -> Result<SiteResultSet, AnalysisError> {
    let entries = list_log_entries(directory)?;
    let mut results = SiteResultSet::default();

    for site in &config.sites {
        let mut site_results = SiteResults::new(site);
        for (file_name, path) in &entries {
            if !site.matches(file_name) {
                continue;
            }
            let metric = process_log_file(path, locator)?;
            site_results.push(path.clone(), metric);
        }
        report_site(&site_results);
        results.sites.push(site_results);
    }

    Ok(results)
}

/// Like [`aggregate`], but skips bad files and returns them alongside the results.
///
/// Only a directory that cannot be listed is fatal.
pub fn aggregate_collecting<L: TransformLocator + ?Sized>(
    directory: &Path,
    config: &AnalysisConfig,
    locator: &L,
) -> Result<(SiteResultSet, Vec<FileFailure>), AnalysisError> {
    let entries = list_log_entries(directory)?;
    let mut results = SiteResultSet::default();
    let mut failures = Vec::new();

    for site in &config.sites {
        let mut site_results = SiteResults::new(site);
        for (file_name, path) in &entries {
            if !site.matches(file_name) {
                continue;
            }
            match process_log_file(path, locator) {
                Ok(metric) => site_results.push(path.clone(), metric),
                Err(error) => {
                    log::warn!("Skipping {}: {}", path.display(), error);
                    failures.push(FileFailure {
                        site: site.name.clone(),
                        error,
                    });
                }
            }
        }
        report_site(&site_results);
        results.sites.push(site_results);
    }

    Ok((results, failures))
}

/// Reads one log fully and reduces it to its error metric.
pub fn process_log_file<L: TransformLocator + ?Sized>(
    path: &Path,
    locator: &L,
) -> Result<ErrorMetric, AnalysisError> {
    log::info!("Processing {}", path.display());
    let text = fs::read_to_string(path).map_err(|source| AnalysisError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let block = locator
        .locate(&text)
        .map_err(|source| AnalysisError::MalformedBlock {
            path: path.to_path_buf(),
            source,
        })?;
    let metric = compute_error_metric(&block);
    log::debug!(
        "  rotation error {:.6}, translation error {:.6}",
        metric.rotation_error,
        metric.translation_error
    );
    Ok(metric)
}

/// Directory entries as `(file name, path)`, sorted by file name.
fn list_log_entries(directory: &Path) -> Result<Vec<(String, PathBuf)>, AnalysisError> {
    let read_dir_error = |source| AnalysisError::ReadDir {
        path: directory.to_path_buf(),
        source,
    };

    let mut entries = Vec::new();
    for entry in fs::read_dir(directory).map_err(read_dir_error)? {
        let entry = entry.map_err(read_dir_error)?;
        let file_name = entry.file_name().to_string_lossy().into_owned();
        entries.push((file_name, entry.path()));
    }
    entries.sort_by(|a, b| a.0.cmp(&b.0));
    log::debug!("{} entries in {}", entries.len(), directory.display());
    Ok(entries)
}

fn report_site(site: &SiteResults) {
    if site.is_empty() {
        log::warn!(
            "No log files matching prefix '{}' for site '{}'",
            site.prefix,
            site.name
        );
    } else {
        log::info!("Site '{}': {} log file(s)", site.name, site.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_input::transform_block::TransformBlock;
    use crate::error::BlockError;

    /// Ignores the text and hands back a fixed block.
    struct ConstantLocator(TransformBlock);

    impl TransformLocator for ConstantLocator {
        fn locate(&self, _text: &str) -> Result<TransformBlock, BlockError> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn test_series_follow_site_order() {
        let results = SiteResultSet {
            sites: vec![
                SiteResults {
                    name: "B".into(),
                    translation_errors: vec![1.0],
                    rotation_errors: vec![2.0],
                    files: vec![PathBuf::from("b1")],
                    ..Default::default()
                },
                SiteResults {
                    name: "A".into(),
                    ..Default::default()
                },
            ],
        };
        let series = results.series(ErrorKind::Rotation);
        assert_eq!(series[0], ("B", &[2.0][..]));
        assert_eq!(series[1].0, "A");
        assert!(series[1].1.is_empty());
        assert_eq!(results.total_files(), 1);
        assert!(!results.is_empty());
    }

    #[test]
    fn test_missing_directory_is_read_dir_error() {
        let config = AnalysisConfig::default();
        let locator = ConstantLocator(TransformBlock::identity());
        let err = aggregate(Path::new("/nonexistent/registration/logs"), &config, &locator)
            .unwrap_err();
        assert!(matches!(err, AnalysisError::ReadDir { .. }));
    }

    #[test]
    fn test_locator_is_pluggable() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("siteA_1.txt"), "anything").unwrap();

        let block = TransformBlock::from_rows([
            [2.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 5.0],
        ]);
        let config = AnalysisConfig::new(vec![SiteSpec::new("A", "siteA")]);
        let results = aggregate(dir.path(), &config, &ConstantLocator(block)).unwrap();

        let site = results.get("A").unwrap();
        assert_eq!(site.translation_errors, vec![5.0]);
        assert!((site.rotation_errors[0] - 2.0).abs() < 1e-9);
    }
}

// src/data_analysis/site_aggregator.rs
