use std::fmt;

/// Error-correction level handed to the encoder. Higher levels survive more damage
/// at the cost of a larger symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ErrorCorrectionLevel {
    L,
    #[default]
    M,
    Q,
    H,
}

impl ErrorCorrectionLevel {
    pub const ALL: &'static [Self] = &[Self::L, Self::M, Self::Q, Self::H];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::L => "L",
            Self::M => "M",
            Self::Q => "Q",
            Self::H => "H",
        }
    }
}

impl fmt::Display for ErrorCorrectionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
