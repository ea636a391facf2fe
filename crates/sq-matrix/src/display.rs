// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Boxed-grid rendering of a matrix.
//!
//! ```text
//! SqMatrix of size 2x2:
//! +-----+-----+
//! |   1 | 0.5 |
//! +-----+-----+
//! |  -2 |   3 |
//! +-----+-----+
//! ```
//!
//! Elements use their `Display` form, so floats print without trailing zeros
//! (`1` rather than `1.0`) and each cell is right-aligned to the widest element.

use crate::matrix::SqMatrix;
use num_traits::Num;
use std::fmt;

impl<T: Num + Copy + fmt::Display> fmt::Display for SqMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.dim();
        writeln!(f, "SqMatrix of size {n}x{n}:")?;
        if n == 0 {
            return Ok(());
        }

        let cells: Vec<String> = self.as_slice().iter().map(|x| x.to_string()).collect();
        let width = cells.iter().map(|s| s.chars().count()).max().unwrap_or(1);
        let horiz_line = format!("+{}\n", format!("{}+", "-".repeat(width + 2)).repeat(n));

        f.write_str(&horiz_line)?;
        for row in cells.chunks(n) {
            write!(f, "|")?;
            for cell in row {
                write!(f, " {cell:>width$} |")?;
            }
            writeln!(f)?;
            f.write_str(&horiz_line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::SqMatrix;

    #[test]
    fn test_render_grid() {
        let m = SqMatrix::from_rows(vec![vec![1.0, 0.5], vec![-2.0, 3.0]]).unwrap();
        let expected = "\
SqMatrix of size 2x2:
+-----+-----+
|   1 | 0.5 |
+-----+-----+
|  -2 |   3 |
+-----+-----+
";
        assert_eq!(m.to_string(), expected);
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(SqMatrix::<f64>::new(0).to_string(), "SqMatrix of size 0x0:\n");
    }

    #[test]
    fn test_render_integers() {
        let m = SqMatrix::<u8>::identity(2);
        assert_eq!(
            m.to_string(),
            "SqMatrix of size 2x2:\n+---+---+\n| 1 | 0 |\n+---+---+\n| 0 | 1 |\n+---+---+\n"
        );
    }
}
