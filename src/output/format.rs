/// How command results are rendered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputMode {
    /// Colored, human-readable lines.
    Tty,
    /// Pretty-printed JSON on stdout, wire-shaped where a record is printed.
    Json,
}

impl OutputMode {
    pub fn from_flag(json_flag: bool) -> Self {
        if json_flag { OutputMode::Json } else { OutputMode::Tty }
    }

    pub fn is_json(&self) -> bool {
        matches!(self, OutputMode::Json)
    }
}
