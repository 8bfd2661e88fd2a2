/// How strongly a console line should be rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    Normal,
    Warning,
    Danger,
}

/// Operator-facing console, abstracted away from any particular terminal.
///
/// The engine only ever asks for a labeled line with an emphasis class and
/// for one line of input; the actual styling and stdio live with the caller.
pub trait Console {
    /// Render one line with the given emphasis
    fn line(&mut self, emphasis: Emphasis, text: &str);

    /// Print `text` without a trailing newline and read one line of input.
    /// `None` means end-of-input.
    fn prompt(&mut self, text: &str) -> Option<String>;

    /// Blank separator line
    fn blank(&mut self) {
        self.line(Emphasis::Normal, "");
    }
}
