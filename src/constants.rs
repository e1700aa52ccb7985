// src/constants.rs
//
// Application-wide constants.

/// Base URL of the cards API when neither `--base-url` nor the config file sets one.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Path segments of the collection endpoint; single cards live one segment below.
pub const CARDS_PATH: [&str; 2] = ["api", "cards"];

/// Directory under the platform config dir holding `CONFIG_FILE_NAME`.
pub const CONFIG_DIR_NAME: &str = "cardbox";

pub const CONFIG_FILE_NAME: &str = "config.toml";

/// File name of the rendered card page inside its temp directory.
///
/// Used in: `infrastructure/renderer.rs`
pub const PAGE_FILE_NAME: &str = "cards.html";

/// Delay in milliseconds after launching the browser before returning.
///
/// The page lives in a temp dir that is removed when cardbox exits; the
/// browser needs a moment to load it first.
///
/// Used in: `infrastructure/renderer.rs`
pub const BROWSER_LAUNCH_DELAY_MS: u64 = 500;

/// Shown when the (filtered) card list is empty.
pub const EMPTY_LIST_TEXT: &str = "No cards uploaded yet.";
