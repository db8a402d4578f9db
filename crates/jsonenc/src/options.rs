/// Layout of rendered JSON text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// No insignificant whitespace
    #[default]
    Compact,
    /// serde_json's pretty printer (two-space indent)
    Pretty,
}

#[derive(Debug, Clone)]
pub struct Options {
    pub format: Format,
    /// Append `\n` after the rendered document
    pub trailing_newline: bool,
}

impl Options {
    pub fn pretty() -> Self {
        Self {
            format: Format::Pretty,
            ..Self::default()
        }
    }

    pub(crate) fn is_pretty(&self) -> bool {
        matches!(self.format, Format::Pretty)
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            format: Format::default(),
            trailing_newline: false,
        }
    }
}
