// src/plot_functions/plot_error_boxplot.rs

use std::error::Error;
use std::path::{Path, PathBuf};

use crate::config::{ErrorKind, RenderConfig};
use crate::data_analysis::box_stats::BoxStats;
use crate::data_analysis::site_aggregator::SiteResultSet;
use crate::plot_framework::{draw_box_plot, BoxPlotConfig, BoxPlotEntry};

/// Builds the per-site box layout for one error kind, in site order.
pub fn build_box_plot_config(
    results: &SiteResultSet,
    kind: ErrorKind,
    render_config: &RenderConfig,
) -> BoxPlotConfig {
    let entries = results
        .series(kind)
        .into_iter()
        .enumerate()
        .map(|(index, (name, errors))| BoxPlotEntry {
            label: name.to_string(),
            stats: BoxStats::from_samples(errors),
            fill: render_config.box_color(index),
        })
        .collect();

    BoxPlotConfig {
        title: render_config.title.clone(),
        x_label: render_config.x_label.clone(),
        y_label: render_config.y_label.clone(),
        entries,
        width: render_config.width,
        height: render_config.height,
    }
}

/// Output path of the figure for `kind`.
pub fn boxplot_output_path(output_dir: &Path, root_name: &str, kind: ErrorKind) -> PathBuf {
    output_dir.join(format!("{}_{}_error_boxplot.png", root_name, kind.tag()))
}

/// Generates the per-site error box plot and returns the written file.
pub fn plot_error_boxplot(
    results: &SiteResultSet,
    kind: ErrorKind,
    render_config: &RenderConfig,
    output_dir: &Path,
    root_name: &str,
) -> Result<PathBuf, Box<dyn Error>> {
    let output_path = boxplot_output_path(output_dir, root_name, kind);
    let output_file = output_path.to_string_lossy().into_owned();
    let plot_config = build_box_plot_config(results, kind, render_config);

    for (index, entry) in plot_config.entries.iter().enumerate() {
        match &entry.stats {
            Some(stats) => println!(
                "  {:<14} n={:<4} median={:.4} mean={:.4}",
                entry.label, stats.count, stats.median, stats.mean
            ),
            None => println!("  {:<14} n=0    (no samples)", entry.label),
        }
        log::debug!("  box {} annotated '{}'", index + 1, plot_config.median_label(index));
    }

    draw_box_plot(&output_file, &plot_config)?;
    Ok(output_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_analysis::site_aggregator::SiteResults;

    fn results() -> SiteResultSet {
        SiteResultSet {
            sites: vec![
                SiteResults {
                    name: "Sequoia".into(),
                    translation_errors: vec![0.5, 1.5],
                    rotation_errors: vec![1.0, 1.0],
                    ..Default::default()
                },
                SiteResults {
                    name: "Savanne".into(),
                    ..Default::default()
                },
            ],
        }
    }

    #[test]
    fn test_entries_follow_sites_and_alternate_fill() {
        let render_config = RenderConfig::for_kind(ErrorKind::Translation);
        let config = build_box_plot_config(&results(), ErrorKind::Translation, &render_config);

        assert_eq!(config.entries.len(), 2);
        assert_eq!(config.entries[0].label, "Sequoia");
        assert_eq!(config.entries[0].fill, render_config.box_colors[0]);
        assert_eq!(config.entries[1].fill, render_config.box_colors[1]);
        assert_eq!(config.entries[0].stats.as_ref().map(|s| s.median), Some(1.0));
        assert!(config.entries[1].stats.is_none());
    }

    #[test]
    fn test_empty_site_does_not_break_layout() {
        let render_config = RenderConfig::default();
        let config = build_box_plot_config(&results(), ErrorKind::Translation, &render_config);
        assert!(config.y_range().is_some());
        assert_eq!(config.median_label(1), "n/a");
    }

    #[test]
    fn test_output_path_names_kind() {
        let path = boxplot_output_path(Path::new("out"), "logs", ErrorKind::Rotation);
        assert_eq!(path, Path::new("out/logs_rotation_error_boxplot.png"));
    }
}

// src/plot_functions/plot_error_boxplot.rs
