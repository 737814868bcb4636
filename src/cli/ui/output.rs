use console::style;

/// Status messages for the terminal.
///
/// Everything goes to stderr; stdout is reserved for the rendered document so
/// the CLI stays pipeable.
pub struct Output {
    quiet: bool,
}

impl Output {
    pub fn new() -> Self {
        Self { quiet: false }
    }

    pub fn quiet(quiet: bool) -> Self {
        Self { quiet }
    }

    pub fn success(&self, message: &str) {
        if !self.quiet {
            eprintln!("{} {}", style("✓").green(), message);
        }
    }

    pub fn error(&self, message: &str) {
        eprintln!("{} {}", style("✗").red(), message);
    }

    pub fn warning(&self, message: &str) {
        if !self.quiet {
            eprintln!("{} {}", style("⚠").yellow(), message);
        }
    }

    pub fn info(&self, message: &str) {
        if !self.quiet {
            eprintln!("{} {}", style("ℹ").blue(), message);
        }
    }

    /// Report ingestion warnings carried by a structure
    pub fn warnings<'a>(&self, warnings: impl IntoIterator<Item = &'a str>) {
        for warning in warnings {
            self.warning(warning);
        }
    }
}

impl Default for Output {
    fn default() -> Self {
        Self::new()
    }
}
