//! Progress reporting for batch conversion

use indicatif::{ProgressBar, ProgressStyle};

const BATCH_TEMPLATE: &str = "{spinner:.green} {pos}/{len} {bar:30.cyan/blue} {wide_msg}";

/// Bar counting converted images. The message shows the image in progress.
pub fn batch_progress(images: usize) -> ProgressBar {
    let style = ProgressStyle::with_template(BATCH_TEMPLATE)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("=> ");
    ProgressBar::new(images as u64).with_style(style)
}
