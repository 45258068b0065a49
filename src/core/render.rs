#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{CellnetError, Result};
use crate::layer::CellValue;

/// Two-glyph text rendering of a generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Glyphs {
    /// Drawn for 0.0.
    pub background: char,
    /// Drawn for 1.0.
    pub foreground: char,
}

impl Default for Glyphs {
    fn default() -> Self {
        Self {
            background: '.',
            foreground: '█',
        }
    }
}

impl Glyphs {
    pub fn new(background: char, foreground: char) -> Self {
        Self {
            background,
            foreground,
        }
    }

    /// Glyph for one cell. Anything but 0.0 or 1.0 is an upstream bug and is
    /// reported, never mapped to a fallback glyph.
    pub fn glyph(&self, index: usize, value: CellValue) -> Result<char> {
        if value == 0.0 {
            Ok(self.background)
        } else if value == 1.0 {
            Ok(self.foreground)
        } else {
            Err(CellnetError::UnrenderableCell { index, value })
        }
    }

    /// One line, one glyph per cell, left to right.
    pub fn render(&self, cells: &[CellValue]) -> Result<String> {
        cells
            .iter()
            .enumerate()
            .map(|(i, &v)| self.glyph(i, v))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_binary_row() {
        let line = Glyphs::default().render(&[0.0, 1.0, 1.0, 0.0]).unwrap();
        assert_eq!(line, ".██.");
        assert_eq!(line.chars().count(), 4);
    }

    #[test]
    fn custom_glyphs() {
        let line = Glyphs::new(' ', '#').render(&[1.0, 0.0]).unwrap();
        assert_eq!(line, "# ");
    }

    #[test]
    fn layer_values_do_not_render() {
        let err = Glyphs::default().render(&[0.0, 2.0, 1.0]).unwrap_err();
        match err {
            CellnetError::UnrenderableCell { index, value } => {
                assert_eq!(index, 1);
                assert_eq!(value, 2.0);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(Glyphs::default().render(&[0.5]).is_err());
    }

    #[test]
    fn negative_zero_is_background() {
        assert_eq!(Glyphs::default().render(&[-0.0]).unwrap(), ".");
    }
}
