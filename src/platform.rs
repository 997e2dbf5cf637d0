//! Platform-specific key hints
//!
//! Terminals on macOS rarely forward the Cmd key, so form shortcuts use
//! Ctrl on every platform.

/// Submit shortcut display for form help text
pub const SUBMIT_SHORTCUT: &str = "^S";

/// Next step shortcut display
pub const NEXT_SHORTCUT: &str = "^N";

/// Previous step shortcut display
pub const PREVIOUS_SHORTCUT: &str = "^P";

/// Quit hint shown on the right of the status bar
pub const QUIT_HINT: &str = " ^C:quit ";
