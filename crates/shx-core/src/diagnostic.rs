pub const W_UNKNOWN_COMMAND: &str = "W_UNKNOWN_COMMAND";
pub const W_PAGE_NO_TITLE: &str = "W_PAGE_NO_TITLE";
pub const W_BG_NO_COLOR: &str = "W_BG_NO_COLOR";

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Diagnostic {
    // 1-based source line.
    pub line: usize,
    pub severity: DiagnosticSeverity,
    pub code: &'static str,
    pub message: String,
}

impl Diagnostic {
    pub fn new(
        line: usize,
        severity: DiagnosticSeverity,
        code: &'static str,
        message: impl Into<String>,
    ) -> Self {
        Self {
            line,
            severity,
            code,
            message: message.into(),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DiagnosticSeverity {
    Warning,
}

impl DiagnosticSeverity {
    pub fn label(self) -> &'static str {
        match self {
            DiagnosticSeverity::Warning => "warning",
        }
    }
}
