// src/data_output/csv_export.rs

use std::path::Path;

use csv::Writer;

use crate::config::ErrorKind;
use crate::data_analysis::box_stats::BoxStats;
use crate::data_analysis::site_aggregator::SiteResultSet;
use crate::error::AnalysisError;

/// Writes one row per processed log: `site,file,rotation_error,translation_error`.
pub fn write_results_csv(path: &Path, results: &SiteResultSet) -> Result<(), AnalysisError> {
    let export_error = |source| AnalysisError::Export {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = Writer::from_path(path).map_err(export_error)?;
    writer
        .write_record(["site", "file", "rotation_error", "translation_error"])
        .map_err(export_error)?;

    for site in results.iter() {
        for ((file, rotation), translation) in site
            .files
            .iter()
            .zip(&site.rotation_errors)
            .zip(&site.translation_errors)
        {
            writer
                .write_record([
                    site.name.clone(),
                    file.display().to_string(),
                    rotation.to_string(),
                    translation.to_string(),
                ])
                .map_err(export_error)?;
        }
    }

    writer
        .flush()
        .map_err(|source| export_error(csv::Error::from(source)))?;
    Ok(())
}

/// Writes per-site box statistics for one error kind.
/// Sites without samples keep their row with empty statistic fields.
pub fn write_summary_csv(
    path: &Path,
    results: &SiteResultSet,
    kind: ErrorKind,
) -> Result<(), AnalysisError> {
    let export_error = |source| AnalysisError::Export {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = Writer::from_path(path).map_err(export_error)?;
    writer
        .write_record([
            "site", "count", "median", "mean", "q1", "q3", "min", "max",
        ])
        .map_err(export_error)?;

    for (name, errors) in results.series(kind) {
        let record = match BoxStats::from_samples(errors) {
            Some(stats) => vec![
                name.to_string(),
                stats.count.to_string(),
                stats.median.to_string(),
                stats.mean.to_string(),
                stats.q1.to_string(),
                stats.q3.to_string(),
                stats.min.to_string(),
                stats.max.to_string(),
            ],
            None => {
                let mut record = vec![name.to_string(), "0".to_string()];
                record.resize(8, String::new());
                record
            }
        };
        writer.write_record(&record).map_err(export_error)?;
    }

    writer
        .flush()
        .map_err(|source| export_error(csv::Error::from(source)))?;
    Ok(())
}

// src/data_output/csv_export.rs
