//! Artifact persistence and viewer launch
//!
//! All pipeline outputs land under one working directory at fixed relative
//! names; reruns overwrite in place. Saving is explicit here so the
//! compositing code in [`crate::card`] stays free of filesystem effects.

use crate::config::{OutputOptions, RenderConfig};
use crate::error::Result;
use crate::theme::Theme;
use image::RgbImage;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Fixed artifact locations under the configured working directory
#[derive(Debug, Clone)]
pub struct Artifacts {
    dir: PathBuf,
    format: String,
}

impl Artifacts {
    /// Bind an artifact set to the configured directory and image format.
    pub fn new(options: &OutputOptions, render: &RenderConfig) -> Self {
        Self {
            dir: options.dir.clone(),
            format: render.format.clone(),
        }
    }

    /// Create the working directory if it does not exist yet.
    pub fn create_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        Ok(())
    }

    /// Path of the serialized vCard record.
    pub fn vcard_path(&self) -> PathBuf {
        self.dir.join("v-card.vcf")
    }

    /// Path of the standalone QR code image.
    pub fn qr_path(&self) -> PathBuf {
        self.dir.join(format!("v-card.{}", self.format))
    }

    /// Path of the blank canvas intermediate.
    pub fn blank_path(&self) -> PathBuf {
        self.dir.join(format!("blank.{}", self.format))
    }

    /// Path of the front face image.
    pub fn front_path(&self) -> PathBuf {
        self.dir.join(format!("front.{}", self.format))
    }

    /// Path of the back face image.
    pub fn back_path(&self) -> PathBuf {
        self.dir.join(format!("back.{}", self.format))
    }

    /// Write the vCard record, returning the path it landed at.
    pub fn save_vcard(&self, record: &str) -> Result<PathBuf> {
        let path = self.vcard_path();
        fs::write(&path, record)?;
        tracing::debug!(path = %path.display(), bytes = record.len(), "Wrote vCard record");
        Ok(path)
    }

    /// Encode and write an image; the encoding follows the path extension.
    pub fn save_image(&self, image: &RgbImage, path: &Path) -> Result<()> {
        image.save(path)?;
        tracing::debug!(path = %path.display(), "Wrote image artifact");
        Ok(())
    }

    /// Launch the viewer command on the two finished faces, best effort.
    ///
    /// Waits for the viewer to exit; its output and exit status are captured
    /// and discarded. Failure to launch is logged, never fatal.
    pub fn open_viewer(&self, viewer: &str) {
        match Command::new(viewer)
            .arg(self.front_path())
            .arg(self.back_path())
            .output()
        {
            Ok(output) => {
                tracing::debug!(status = ?output.status, "Viewer exited");
            }
            Err(err) => {
                tracing::warn!("Failed to launch viewer '{viewer}': {err}");
            }
        }
    }
}

/// Machine-readable summary of one generation run
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    /// Theme the card was rendered with
    pub theme: Theme,
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// Output image format
    pub format: String,
    /// Paths of every artifact written, in pipeline order
    pub artifacts: SummaryPaths,
}

/// Artifact paths grouped for the run summary
#[derive(Debug, Clone, Serialize)]
pub struct SummaryPaths {
    /// vCard record text file
    pub vcard: PathBuf,
    /// Standalone QR code image
    pub qr: PathBuf,
    /// Blank canvas intermediate
    pub blank: PathBuf,
    /// Front face image
    pub front: PathBuf,
    /// Back face image
    pub back: PathBuf,
}

impl RunSummary {
    /// Collect the summary for a finished run.
    pub fn new(render: &RenderConfig, artifacts: &Artifacts) -> Self {
        Self {
            theme: render.theme,
            width: render.width,
            height: render.height,
            format: render.format.clone(),
            artifacts: SummaryPaths {
                vcard: artifacts.vcard_path(),
                qr: artifacts.qr_path(),
                blank: artifacts.blank_path(),
                front: artifacts.front_path(),
                back: artifacts.back_path(),
            },
        }
    }

    /// Human-readable lines for terminal presentation.
    pub fn human(&self) -> Vec<String> {
        vec![
            format!(
                "Business card rendered ({} theme, {}x{} {})",
                self.theme, self.width, self.height, self.format
            ),
            format!("  vCard: {}", self.artifacts.vcard.display()),
            format!("  QR:    {}", self.artifacts.qr.display()),
            format!("  Front: {}", self.artifacts.front.display()),
            format!("  Back:  {}", self.artifacts.back.display()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RenderOptions;

    fn artifacts(dir: &Path, format: Option<&str>) -> Artifacts {
        let options = OutputOptions {
            dir: dir.to_path_buf(),
            ..Default::default()
        };
        let render = RenderOptions {
            format: format.map(str::to_string),
            ..Default::default()
        }
        .resolve()
        .unwrap();
        Artifacts::new(&options, &render)
    }

    #[test]
    fn paths_follow_the_configured_format() {
        let a = artifacts(Path::new("data"), Some("JPEG"));
        assert_eq!(a.vcard_path(), Path::new("data/v-card.vcf"));
        assert_eq!(a.qr_path(), Path::new("data/v-card.jpeg"));
        assert_eq!(a.blank_path(), Path::new("data/blank.jpeg"));
        assert_eq!(a.front_path(), Path::new("data/front.jpeg"));
        assert_eq!(a.back_path(), Path::new("data/back.jpeg"));
    }

    #[test]
    fn save_vcard_round_trips_the_record() {
        let tmp = tempfile::tempdir().unwrap();
        let a = artifacts(tmp.path(), None);
        a.create_dir().unwrap();
        let path = a.save_vcard("BEGIN:VCARD\nEND:VCARD").unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "BEGIN:VCARD\nEND:VCARD");
    }
}
