use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};

/// Where logos are read from and where the icon set is written to.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Layout {
    logo_dir: PathBuf,
    output_dir: PathBuf,
}

impl Layout {
    pub fn new(logo_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            logo_dir: logo_dir.into(),
            output_dir: output_dir.into(),
        }
    }

    /// Resolves the layout of a flutter project nested in a workspace:
    ///
    /// ```text
    /// <workspace>/Logo/logo/
    /// <workspace>/<project>/ios/Runner/Assets.xcassets/AppIcon.appiconset/
    /// <workspace>/<project>/ios/scripts/   <- script_dir
    /// ```
    pub fn from_script_dir(script_dir: &Path) -> Result<Self> {
        let ios_dir = script_dir
            .parent()
            .with_context(|| format!("`{}` has no parent directory", script_dir.display()))?;
        let workspace_root = ios_dir
            .parent()
            .and_then(Path::parent)
            .with_context(|| {
                format!(
                    "`{}` is not nested inside a workspace",
                    script_dir.display()
                )
            })?;
        Ok(Self {
            logo_dir: workspace_root.join("Logo").join("logo"),
            output_dir: ios_dir
                .join("Runner")
                .join("Assets.xcassets")
                .join("AppIcon.appiconset"),
        })
    }

    /// Resolves the layout from the command line overrides.
    ///
    /// `script_dir` defaults to the directory of the running executable and
    /// is made absolute before its ancestors are walked. `logo_dir` and
    /// `output_dir` replace only their own part of the resolved layout.
    pub fn resolve(
        script_dir: Option<&Path>,
        logo_dir: Option<PathBuf>,
        output_dir: Option<PathBuf>,
    ) -> Result<Self> {
        let script_dir = match script_dir {
            Some(dir) => dunce::canonicalize(dir)
                .with_context(|| format!("failed to resolve `{}`", dir.display()))?,
            None => executable_dir()?,
        };
        let mut layout = Self::from_script_dir(&script_dir)?;
        if let Some(dir) = logo_dir {
            layout.logo_dir = dir;
        }
        if let Some(dir) = output_dir {
            layout.output_dir = dir;
        }
        Ok(layout)
    }

    pub fn logo_dir(&self) -> &Path {
        &self.logo_dir
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn verify(&self) -> Result<()> {
        if !self.logo_dir.is_dir() {
            bail!("Logo directory not found: {}", self.logo_dir.display());
        }
        if !self.output_dir.is_dir() {
            bail!("Output directory not found: {}", self.output_dir.display());
        }
        Ok(())
    }
}

fn executable_dir() -> Result<PathBuf> {
    let exe = dunce::canonicalize(std::env::current_exe()?)?;
    Ok(exe
        .parent()
        .with_context(|| format!("`{}` has no parent", exe.display()))?
        .to_path_buf())
}
