//! Validation mode

/// Whether configuration rules are enforced.
///
/// `Bootstrapping` is used while scaffolding a brand-new project, before any
/// app has been installed: the document is incomplete on purpose, so every
/// validation rule is skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Normal,
    Bootstrapping,
}

impl Mode {
    pub fn enforces_rules(&self) -> bool {
        matches!(self, Mode::Normal)
    }
}
