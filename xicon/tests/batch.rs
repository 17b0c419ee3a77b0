use anyhow::Result;
use image::{GenericImageView, Rgba, RgbaImage};
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use xicon::{iconset::source_path, Layout, APP_ICONS};

struct Workspace {
    _root: TempDir,
    script_dir: PathBuf,
}

impl Workspace {
    fn new() -> Result<Self> {
        let root = tempfile::tempdir()?;
        let script_dir = root.path().join("app").join("ios").join("scripts");
        std::fs::create_dir_all(&script_dir)?;
        Ok(Self {
            _root: root,
            script_dir,
        })
    }

    fn layout(&self) -> Result<Layout> {
        Layout::from_script_dir(&self.script_dir)
    }

    fn create_dirs(&self) -> Result<Layout> {
        let layout = self.layout()?;
        std::fs::create_dir_all(layout.logo_dir())?;
        std::fs::create_dir_all(layout.output_dir())?;
        Ok(layout)
    }
}

fn write_logos(logo_dir: &Path, sizes: &[u32]) -> Result<()> {
    for size in sizes {
        RgbaImage::from_pixel(*size, *size, Rgba([240, 90, 40, 255]))
            .save(source_path(logo_dir, *size))?;
    }
    Ok(())
}

fn written(output_dir: &Path) -> Result<usize> {
    Ok(std::fs::read_dir(output_dir)?.count())
}

#[test]
fn missing_logo_dir_aborts() -> Result<()> {
    let ws = Workspace::new()?;
    let layout = ws.layout()?;
    std::fs::create_dir_all(layout.output_dir())?;
    let err = xicon::run(&layout).unwrap_err();
    assert!(err.to_string().contains("Logo directory not found"));
    assert_eq!(written(layout.output_dir())?, 0);
    Ok(())
}

#[test]
fn missing_output_dir_aborts() -> Result<()> {
    let ws = Workspace::new()?;
    let layout = ws.layout()?;
    std::fs::create_dir_all(layout.logo_dir())?;
    write_logos(layout.logo_dir(), &[64])?;
    let err = xicon::run(&layout).unwrap_err();
    assert!(err.to_string().contains("Output directory not found"));
    assert!(!layout.output_dir().exists());
    Ok(())
}

#[test]
fn generates_complete_icon_set() -> Result<()> {
    let ws = Workspace::new()?;
    let layout = ws.create_dirs()?;
    write_logos(layout.logo_dir(), &[64, 128, 192, 1024])?;

    let summary = xicon::run(&layout)?;
    assert_eq!(summary.succeeded, APP_ICONS.len());
    assert_eq!(summary.total, APP_ICONS.len());
    assert_eq!(summary.exit_code(), 0);

    for icon in APP_ICONS {
        let img = image::open(layout.output_dir().join(icon.file_name))?;
        assert_eq!(img.dimensions(), (icon.size, icon.size), "{}", icon.file_name);
    }
    assert_eq!(written(layout.output_dir())?, APP_ICONS.len());
    Ok(())
}

#[test]
fn partial_failure_attempts_every_icon() -> Result<()> {
    let ws = Workspace::new()?;
    let layout = ws.create_dirs()?;
    // Without the 1024 px logo everything above 128 px fails.
    write_logos(layout.logo_dir(), &[64, 128])?;

    let summary = xicon::run(&layout)?;
    let expected = APP_ICONS.iter().filter(|icon| icon.size <= 128).count();
    assert_eq!(expected, 11);
    assert_eq!(summary.succeeded, expected);
    assert_eq!(summary.total - summary.succeeded, 4);
    assert_eq!(summary.exit_code(), 1);

    for icon in APP_ICONS {
        let path = layout.output_dir().join(icon.file_name);
        assert_eq!(path.exists(), icon.size <= 128, "{}", icon.file_name);
    }
    Ok(())
}
