//! Fullscreen toggle state machine.
//!
//! Two states, Normal and Fullscreen. Entering is asynchronous: the browser
//! may reject the request, so the machine only advances to Fullscreen once
//! the request resolves. While an entry is pending, further entry requests
//! are ignored.

/// Presentation mode of a viewer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FullscreenMode {
    #[default]
    Normal,
    Fullscreen,
}

/// Side effect the caller must perform after a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FullscreenCommand {
    /// Ask the browser to present the viewer fullscreen.
    Enter,
    /// Ask the browser to leave fullscreen.
    Exit,
    /// Nothing to do.
    None,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FullscreenToggle {
    mode: FullscreenMode,
    entering: bool,
}

impl FullscreenToggle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> FullscreenMode {
        self.mode
    }

    pub fn is_fullscreen(&self) -> bool {
        self.mode() == FullscreenMode::Fullscreen
    }

    /// Whether an entry request is in flight.
    pub fn is_entering(&self) -> bool {
        self.entering
    }

    /// Request entry. No-op while already fullscreen or entering.
    pub fn request_enter(&mut self) -> FullscreenCommand {
        if self.mode == FullscreenMode::Fullscreen || self.entering {
            return FullscreenCommand::None;
        }
        self.entering = true;
        FullscreenCommand::Enter
    }

    /// Request exit. Only leaves Fullscreen when the browser can exit.
    pub fn request_exit(&mut self, exit_supported: bool) -> FullscreenCommand {
        if self.mode != FullscreenMode::Fullscreen || !exit_supported {
            return FullscreenCommand::None;
        }
        self.mode = FullscreenMode::Normal;
        FullscreenCommand::Exit
    }

    /// Button/keyboard toggle.
    pub fn toggle(&mut self, exit_supported: bool) -> FullscreenCommand {
        match self.mode {
            FullscreenMode::Normal => self.request_enter(),
            FullscreenMode::Fullscreen => self.request_exit(exit_supported),
        }
    }

    /// The entry request resolved.
    pub fn entered(&mut self) {
        if self.entering {
            self.entering = false;
            self.mode = FullscreenMode::Fullscreen;
        }
    }

    /// The entry request was rejected. State stays Normal.
    pub fn rejected(&mut self) {
        self.entering = false;
        self.mode = FullscreenMode::Normal;
    }

    /// The browser left fullscreen on its own (Esc, navigation).
    pub fn exited_externally(&mut self) {
        if !self.entering {
            self.mode = FullscreenMode::Normal;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enter_then_resolve() {
        let mut fs = FullscreenToggle::new();
        assert_eq!(fs.toggle(true), FullscreenCommand::Enter);
        assert_eq!(fs.mode(), FullscreenMode::Normal);
        assert!(fs.is_entering());

        fs.entered();
        assert!(fs.is_fullscreen());
        assert!(!fs.is_entering());
    }

    #[test]
    fn test_rejected_entry_stays_normal() {
        let mut fs = FullscreenToggle::new();
        assert_eq!(fs.request_enter(), FullscreenCommand::Enter);
        fs.rejected();
        assert_eq!(fs.mode(), FullscreenMode::Normal);
        // a fresh attempt is allowed afterwards
        assert_eq!(fs.request_enter(), FullscreenCommand::Enter);
    }

    #[test]
    fn test_repeated_enter_is_idempotent() {
        let mut fs = FullscreenToggle::new();
        assert_eq!(fs.request_enter(), FullscreenCommand::Enter);
        assert_eq!(fs.request_enter(), FullscreenCommand::None);

        fs.entered();
        assert_eq!(fs.request_enter(), FullscreenCommand::None);
        assert_eq!(fs.request_enter(), FullscreenCommand::None);
        assert!(fs.is_fullscreen());
    }

    #[test]
    fn test_exit() {
        let mut fs = FullscreenToggle::new();
        fs.request_enter();
        fs.entered();

        assert_eq!(fs.toggle(true), FullscreenCommand::Exit);
        assert_eq!(fs.mode(), FullscreenMode::Normal);
    }

    #[test]
    fn test_exit_requires_capability() {
        let mut fs = FullscreenToggle::new();
        fs.request_enter();
        fs.entered();

        assert_eq!(fs.toggle(false), FullscreenCommand::None);
        assert!(fs.is_fullscreen());
    }

    #[test]
    fn test_exit_when_normal_is_noop() {
        let mut fs = FullscreenToggle::new();
        assert_eq!(fs.request_exit(true), FullscreenCommand::None);
    }

    #[test]
    fn test_external_exit() {
        let mut fs = FullscreenToggle::new();
        fs.request_enter();
        fs.entered();
        fs.exited_externally();
        assert_eq!(fs.mode(), FullscreenMode::Normal);
    }

    #[test]
    fn test_external_exit_ignored_while_entering() {
        let mut fs = FullscreenToggle::new();
        fs.request_enter();
        fs.exited_externally();
        assert!(fs.is_entering());
        fs.entered();
        assert!(fs.is_fullscreen());
    }

    #[test]
    fn test_stray_resolution_ignored() {
        let mut fs = FullscreenToggle::new();
        fs.entered();
        assert_eq!(fs.mode(), FullscreenMode::Normal);
    }
}
