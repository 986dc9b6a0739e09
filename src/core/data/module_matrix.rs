use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModuleMatrixError {
    #[error("module matrix must have a non-zero width")]
    ZeroWidth,
    #[error("module matrix of width {width} needs {expected} modules, got {actual}")]
    SizeMismatch {
        width: usize,
        expected: usize,
        actual: usize,
    },
}

/// Square grid of dark/light modules, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleMatrix {
    width: usize,
    dark: Vec<bool>,
}

impl ModuleMatrix {
    pub fn new(width: usize, dark: Vec<bool>) -> Result<Self, ModuleMatrixError> {
        if width == 0 {
            return Err(ModuleMatrixError::ZeroWidth);
        }

        let expected = width * width;

        if dark.len() != expected {
            return Err(ModuleMatrixError::SizeMismatch {
                width,
                expected,
                actual: dark.len(),
            });
        }

        Ok(Self { width, dark })
    }

    /// Number of modules along one side.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Out-of-range coordinates are treated as light (quiet zone).
    #[must_use]
    pub fn is_dark(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.width && self.dark[y * self.width + x]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_zero_width() {
        assert_eq!(ModuleMatrix::new(0, vec![]), Err(ModuleMatrixError::ZeroWidth));
    }

    #[test]
    fn test_rejects_mismatched_module_count() {
        assert_eq!(
            ModuleMatrix::new(2, vec![true; 3]),
            Err(ModuleMatrixError::SizeMismatch {
                width: 2,
                expected: 4,
                actual: 3
            })
        );
    }

    #[test]
    fn test_is_dark_reads_row_major() {
        let matrix = ModuleMatrix::new(2, vec![true, false, false, true]).unwrap();

        assert!(matrix.is_dark(0, 0));
        assert!(!matrix.is_dark(1, 0));
        assert!(!matrix.is_dark(0, 1));
        assert!(matrix.is_dark(1, 1));
        assert!(!matrix.is_dark(2, 1));
    }
}
