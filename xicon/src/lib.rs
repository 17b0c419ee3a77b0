use anyhow::Result;
use std::path::Path;
use xcommon::Scaler;

pub mod iconset;
mod layout;
mod report;

pub use crate::iconset::{select_source, IconSpec, APP_ICONS, SOURCE_SIZES};
pub use crate::layout::Layout;
pub use crate::report::{Report, Summary};

/// Renders `source` as a `size`x`size` PNG at `output`.
///
/// Nothing is written when loading, scaling or encoding fails.
pub fn generate_icon(source: &Path, output: &Path, size: u32) -> Result<()> {
    Scaler::open(source)?.save(output, size)
}

/// Generates every icon of [`APP_ICONS`].
///
/// Fails without writing anything when either directory of `layout` is
/// missing. A failed icon is reported and counted, the remaining icons are
/// still generated.
pub fn run(layout: &Layout) -> Result<Summary> {
    layout.verify()?;
    let mut report = Report::start(layout.logo_dir(), layout.output_dir(), APP_ICONS.len());
    for icon in &APP_ICONS {
        let source = select_source(layout.logo_dir(), icon.size);
        let output = layout.output_dir().join(icon.file_name);
        log::debug!(
            "{} <- {} ({}px)",
            icon.file_name,
            source.display(),
            icon.size
        );
        match generate_icon(&source, &output, icon.size) {
            Ok(()) => report.generated(icon),
            Err(err) => report.failed(icon, &err),
        }
    }
    Ok(report.finish())
}
