// src/infrastructure/renderer.rs
use crate::constants::{BROWSER_LAUNCH_DELAY_MS, PAGE_FILE_NAME};
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Duration;
use tempfile::{Builder, TempDir};
use tracing::{debug, instrument};

/// Writes rendered pages to a temporary directory and opens them in the
/// default browser.
#[derive(Debug, Default)]
pub struct PageRenderer {
    // Dropping the TempDir deletes the page
    temp_dir: Option<TempDir>,
}

impl PageRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write_page(&mut self, html: &str) -> Result<PathBuf> {
        let temp_dir = Builder::new()
            .prefix("cardbox-")
            .rand_bytes(5)
            .tempdir()
            .context("Failed to create temporary directory")?;

        let file_path = temp_dir.path().join(PAGE_FILE_NAME);
        fs::write(&file_path, html)
            .with_context(|| format!("Failed to write page to {}", file_path.display()))?;
        debug!(path = %file_path.display(), bytes = html.len(), "Wrote page");

        self.temp_dir = Some(temp_dir);
        Ok(file_path)
    }

    #[instrument(level = "debug", skip(self))]
    pub fn open_in_browser(&self, path: &Path) -> Result<()> {
        let (program, args) = browser_command(path)?;
        Command::new(program)
            .args(&args)
            .spawn()
            .with_context(|| format!("Failed to launch {program}"))?;

        // Give the browser time to read the file before the temp dir goes away
        std::thread::sleep(Duration::from_millis(BROWSER_LAUNCH_DELAY_MS));

        Ok(())
    }
}

/// Platform command that opens `path` with the default handler
pub fn browser_command(path: &Path) -> Result<(&'static str, Vec<String>)> {
    let path_str = path
        .to_str()
        .context("Failed to convert path to string")?
        .to_string();

    if cfg!(target_os = "macos") {
        Ok(("open", vec![path_str]))
    } else if cfg!(target_os = "windows") {
        Ok(("cmd", vec!["/C".to_string(), "start".to_string(), path_str]))
    } else {
        Ok(("xdg-open", vec![path_str]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_html_when_writing_page_then_file_contains_html() {
        let mut renderer = PageRenderer::new();

        let path = renderer.write_page("<p>cards</p>").unwrap();

        assert!(path.ends_with(PAGE_FILE_NAME));
        assert_eq!(fs::read_to_string(&path).unwrap(), "<p>cards</p>");
    }

    #[test]
    fn given_second_page_when_writing_then_first_temp_dir_is_removed() {
        let mut renderer = PageRenderer::new();
        let first = renderer.write_page("one").unwrap();

        let second = renderer.write_page("two").unwrap();

        assert!(!first.exists());
        assert!(second.exists());
    }

    #[test]
    fn given_path_when_building_browser_command_then_path_is_last_arg() {
        let path = Path::new("/tmp/cardbox-x/cards.html");

        let (program, args) = browser_command(path).unwrap();

        assert!(!program.is_empty());
        assert_eq!(args.last().map(String::as_str), Some("/tmp/cardbox-x/cards.html"));
    }
}
