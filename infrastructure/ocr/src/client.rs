use std::ffi::OsString;
use std::path::{Path, PathBuf};

use tokio::process::Command;

/// Tesseract page segmentation mode 6: assume a single uniform block of text.
const SINGLE_BLOCK_PSM: &str = "6";

/// Keeps runs of spaces between words, which separate item names from prices.
const PRESERVE_INTERWORD_SPACES: &str = "preserve_interword_spaces=1";

/// Shared Tesseract command-line configuration.
#[derive(Debug, Clone)]
pub struct TesseractClient {
    pub binary: PathBuf,
    pub language: String,
    pub tessdata_dir: Option<PathBuf>,
}

impl TesseractClient {
    pub fn new(binary: impl Into<PathBuf>, language: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
            language: language.into(),
            tessdata_dir: None,
        }
    }

    pub fn with_tessdata_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.tessdata_dir = Some(dir.into());
        self
    }

    /// Arguments recognizing `image` to stdout in single-block mode, with
    /// column spacing preserved.
    pub fn recognize_args(&self, image: &Path) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec![
            image.as_os_str().to_owned(),
            "stdout".into(),
            "--psm".into(),
            SINGLE_BLOCK_PSM.into(),
            "-l".into(),
            self.language.clone().into(),
            "-c".into(),
            PRESERVE_INTERWORD_SPACES.into(),
        ];
        if let Some(dir) = &self.tessdata_dir {
            args.push("--tessdata-dir".into());
            args.push(dir.as_os_str().to_owned());
        }
        args
    }

    /// Builds the recognition command. The child is killed if the returned
    /// command's output future is dropped before it exits.
    pub fn recognize_command(&self, image: &Path) -> Command {
        let mut command = Command::new(&self.binary);
        command
            .args(self.recognize_args(image))
            .stdin(std::process::Stdio::null())
            .kill_on_drop(true);
        command
    }
}
