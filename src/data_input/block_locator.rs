// src/data_input/block_locator.rs

use crate::constants::{
    TRANSFORM_BLOCK_FIRST_LINE, TRANSFORM_BLOCK_ROWS, TRANSFORM_BLOCK_TOKENS_PER_ROW,
};
use crate::data_input::transform_block::TransformBlock;
use crate::error::BlockError;

/// Finds and decodes the transform block inside raw log text.
///
/// The aggregator only depends on this trait, so log producers with a
/// different layout can plug in their own locator.
pub trait TransformLocator {
    fn locate(&self, text: &str) -> Result<TransformBlock, BlockError>;
}

/// Reads the block from three consecutive lines at a fixed offset.
///
/// Each row looks like `[ r0 r1 r2 t ]`; every other line is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedOffsetLocator {
    pub first_line: usize,
}

impl FixedOffsetLocator {
    pub fn new(first_line: usize) -> Self {
        Self { first_line }
    }
}

impl Default for FixedOffsetLocator {
    fn default() -> Self {
        Self::new(TRANSFORM_BLOCK_FIRST_LINE)
    }
}

impl TransformLocator for FixedOffsetLocator {
    fn locate(&self, text: &str) -> Result<TransformBlock, BlockError> {
        let mut block = TransformBlock::identity();
        let mut rows_found = 0;

        let window = self.first_line..self.first_line + TRANSFORM_BLOCK_ROWS;
        for (line_index, line) in text.lines().enumerate().skip(self.first_line) {
            if !window.contains(&line_index) {
                break;
            }
            let values = parse_row(line, line_index)?;
            block.set_row(line_index - self.first_line, &values);
            rows_found += 1;
        }

        if rows_found < TRANSFORM_BLOCK_ROWS {
            return Err(BlockError::MissingLine {
                line: self.first_line + rows_found,
            });
        }
        Ok(block)
    }
}

/// Parses the transform block at the default line offset.
pub fn parse_transform_block(text: &str) -> Result<TransformBlock, BlockError> {
    FixedOffsetLocator::default().locate(text)
}

/// Splits one printed row into its four numbers.
///
/// Brackets are dropped, the line is split on single spaces and empty tokens
/// are discarded, so runs of spaces used for column alignment are harmless.
fn parse_row(line: &str, line_index: usize) -> Result<[f64; 4], BlockError> {
    let stripped = line.replace(['[', ']'], "");
    let tokens: Vec<&str> = stripped
        .split(' ')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .collect();

    if tokens.len() != TRANSFORM_BLOCK_TOKENS_PER_ROW {
        return Err(BlockError::TokenCount {
            line: line_index,
            found: tokens.len(),
        });
    }

    let mut values = [0.0; 4];
    for (value, token) in values.iter_mut().zip(&tokens) {
        *value = token.parse::<f64>().map_err(|_| BlockError::InvalidNumber {
            line: line_index,
            token: token.to_string(),
        })?;
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Eleven lines of registration chatter followed by the given rows.
    fn log_with_rows(rows: &[&str]) -> String {
        let mut text = String::new();
        text.push_str("Number of unmatched stems: 3\n");
        text.push_str("Number of stems in source: 42\n");
        text.push_str("Number of stems in target: 40\n");
        text.push_str("Generating triplets... \n");
        text.push_str("Generating pairs of triplets... \n");
        text.push_str("11480 transforms to compute. \n");
        text.push_str("Computing transformations... \n");
        text.push_str("Sorting results...\n");
        text.push_str("====== Best transform ======\n");
        text.push_str("MSE : 0.0213\n");
        text.push_str("Number of used stems : 12\n");
        for row in rows {
            text.push_str(row);
            text.push('\n');
        }
        text.push_str("------ 3 first stems used for registration -----\n");
        text
    }

    #[test]
    fn test_parses_bracketed_rows() {
        let text = log_with_rows(&[
            "[0.9998 -0.0175 0.0012 1.25]",
            "[0.0175 0.9998 -0.0031 -0.75]",
            "[-0.0011 0.0031 1.0000 0.05]",
        ]);
        let block = parse_transform_block(&text).unwrap();
        assert_eq!(block.rotation[[0, 0]], 0.9998);
        assert_eq!(block.rotation[[1, 2]], -0.0031);
        assert_eq!(block.rotation[[2, 2]], 1.0);
        assert_eq!(block.translation.to_vec(), vec![1.25, -0.75, 0.05]);
    }

    #[test]
    fn test_repeated_spaces_and_loose_brackets() {
        let text = log_with_rows(&[
            "[   1.0    0.0   0.0   3.5 ]",
            "  [ 0.0  1.0  0.0  -2 ] ",
            "[0.0 0.0 1.0 1e-3]\r",
        ]);
        let block = parse_transform_block(&text).unwrap();
        assert_eq!(block.translation.to_vec(), vec![3.5, -2.0, 0.001]);
        assert_eq!(block.rotation, ndarray::Array2::<f64>::eye(3));
    }

    #[test]
    fn test_lines_outside_window_are_ignored() {
        let mut text = log_with_rows(&["[1 0 0 0]", "[0 1 0 0]", "[0 0 1 0]"]);
        text.push_str("[not a number row]\n");
        assert!(parse_transform_block(&text).is_ok());
    }

    #[test]
    fn test_short_log_reports_missing_line() {
        let text: String = log_with_rows(&["[1 0 0 0]", "[0 1 0 0]"])
            .lines()
            .take(13)
            .map(|line| format!("{line}\n"))
            .collect();
        assert_eq!(
            parse_transform_block(&text),
            Err(BlockError::MissingLine { line: 13 })
        );
        assert_eq!(
            parse_transform_block(""),
            Err(BlockError::MissingLine { line: 11 })
        );
    }

    #[test]
    fn test_wrong_token_count() {
        let text = log_with_rows(&["[1 0 0 0]", "[0 1 0]", "[0 0 1 0]"]);
        assert_eq!(
            parse_transform_block(&text),
            Err(BlockError::TokenCount { line: 12, found: 3 })
        );

        let text = log_with_rows(&["[1 0 0 0 9]", "[0 1 0 0]", "[0 0 1 0]"]);
        assert_eq!(
            parse_transform_block(&text),
            Err(BlockError::TokenCount { line: 11, found: 5 })
        );
    }

    #[test]
    fn test_non_numeric_token() {
        let text = log_with_rows(&["[1 0 0 0]", "[0 1 0 0]", "[0 0 one 0]"]);
        assert_eq!(
            parse_transform_block(&text),
            Err(BlockError::InvalidNumber {
                line: 13,
                token: "one".to_string()
            })
        );
    }

    #[test]
    fn test_custom_offset() {
        let text = "header\n[2 0 0 1]\n[0 2 0 1]\n[0 0 2 1]\n";
        let block = FixedOffsetLocator::new(1).locate(text).unwrap();
        assert_eq!(block.rotation[[1, 1]], 2.0);
        assert_eq!(block.translation.to_vec(), vec![1.0, 1.0, 1.0]);
    }
}

// src/data_input/block_locator.rs
