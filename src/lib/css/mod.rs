use std::{fs, path::Path};

use color_eyre::{Section, eyre::eyre};
use lightningcss::{
    printer::PrinterOptions,
    stylesheet::{MinifyOptions, ParserOptions, StyleSheet},
};

/// Parse, minify and print a stylesheet. `filename` only feeds diagnostics.
pub fn minify_css(raw: &str, filename: &str) -> color_eyre::Result<String> {
    let mut stylesheet = StyleSheet::parse(
        raw,
        ParserOptions {
            filename: filename.to_string(),
            ..Default::default()
        },
    )
    .map_err(|e| eyre!(e.to_string()))?;

    stylesheet
        .minify(MinifyOptions::default())
        .map_err(|e| eyre!(e.to_string()))?;

    let printed = stylesheet
        .to_css(PrinterOptions {
            minify: true,
            ..Default::default()
        })
        .map_err(|e| eyre!(e.to_string()))?;

    Ok(printed.code)
}

pub fn build_css(css_path: &Path) -> color_eyre::Result<String> {
    let raw = fs::read_to_string(css_path)
        .with_note(|| format!("While reading {}", css_path.display()))?;
    minify_css(&raw, &css_path.to_string_lossy())
}
