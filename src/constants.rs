//! Constants used throughout the application
//!
//! This module centralizes UI text, discovery defaults, and other constant
//! values to improve maintainability and consistency.

// Discovery defaults
/// Ports probed for a local development server, in display order
pub const DEFAULT_PORTS: [u16; 8] = [8081, 8082, 19000, 19001, 19002, 19003, 19004, 19005];
pub const DEFAULT_STATUS_PATH: &str = "status";
pub const DEFAULT_PROBE_TIMEOUT_MS: u64 = 1000;
pub const DEFAULT_POLL_AMOUNT: u32 = 5;
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 1000;
pub const MAX_POLL_AMOUNT: u32 = 100;
pub const MAX_TIMING_MS: u64 = 60_000;

// Home screen text
pub const HEADER_DEVELOPMENT_SERVERS: &str = "Development servers";
pub const TEXT_START_SERVER: &str = "Start a local development server with:";
pub const TEXT_START_COMMAND: &str = "expo start";
pub const TEXT_SELECT_SERVER: &str = "Then, select the local server when it appears here.";
pub const TEXT_SEARCHING: &str = "Searching for local servers...";
pub const TEXT_REFETCH: &str = "Refetch local servers";
pub const TEXT_NOT_FOUND: &str = "Unable to find local servers";
pub const TEXT_ENTER_URL: &str = "Enter URL manually";
pub const TEXT_URL_PLACEHOLDER: &str = "exp://192...";
pub const TEXT_CONNECT: &str = "Connect";

// Status bar
pub const STATUS_HINTS: &str = "↑/↓: select • Enter: open • r: refetch • u: enter URL • G: logs • q: quit";
pub const STATUS_URL_HINTS: &str = "Type a URL • Enter: connect • Esc: close";

// Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const INFO_OPENING: &str = "Opening";
pub const ERROR_EMPTY_URL: &str = "❌ Enter a URL before connecting";
pub const DIALOG_TITLE_DEBUG_LOGS: &str = "🔍 Debug Logs - Press 'Esc', 'G' or 'q' to close";

// Glyphs
pub const GLYPH_STATUS_DOT: &str = "●";
pub const GLYPH_CHEVRON_RIGHT: &str = "›";
pub const GLYPH_CHEVRON_DOWN: &str = "⌄";
pub const GLYPH_REFRESH: &str = "↻";
