// tests/boxplot_render_test.rs

use std::path::PathBuf;

use regerror_boxplot::plot_functions::plot_error_boxplot::plot_error_boxplot;
use regerror_boxplot::{ErrorKind, RenderConfig, SiteResultSet, SiteResults};

fn site(name: &str, prefix: &str, translation_errors: Vec<f64>) -> SiteResults {
    SiteResults {
        name: name.into(),
        prefix: prefix.into(),
        files: (0..translation_errors.len())
            .map(|i| PathBuf::from(format!("{prefix}_{i}.log")))
            .collect(),
        rotation_errors: vec![1.0; translation_errors.len()],
        translation_errors,
    }
}

#[test]
fn test_renders_with_one_empty_site() {
    let dir = tempfile::tempdir().unwrap();
    let results = SiteResultSet {
        sites: vec![
            site("Sequoia", "resultSequoia", vec![0.12, 0.4, 0.35, 2.9]),
            site("Savanne", "resultSavanne", Vec::new()),
            site("Valcartier 1", "result1", vec![0.8]),
        ],
    };

    let path = plot_error_boxplot(
        &results,
        ErrorKind::Translation,
        &RenderConfig::for_kind(ErrorKind::Translation),
        dir.path(),
        "partial",
    )
    .unwrap();

    assert!(path.exists());
    assert!(path.ends_with("partial_translation_error_boxplot.png"));
    assert!(std::fs::metadata(&path).unwrap().len() > 0);
}

#[test]
fn test_renders_placeholder_when_every_site_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let results = SiteResultSet {
        sites: vec![
            site("Sequoia", "resultSequoia", Vec::new()),
            site("Savanne", "resultSavanne", Vec::new()),
        ],
    };

    let path = plot_error_boxplot(
        &results,
        ErrorKind::Rotation,
        &RenderConfig::for_kind(ErrorKind::Rotation),
        dir.path(),
        "empty",
    )
    .unwrap();

    assert!(path.exists());
    assert!(std::fs::metadata(&path).unwrap().len() > 0);
}

// tests/boxplot_render_test.rs
