use crate::matrix::matrix::Matrix;
use std::fmt;
use std::fmt::Display;
use std::io;

/// Cell layout used when turning a matrix into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    pub width: usize,
    pub precision: usize,
}

impl Default for RenderConfig {
    // Same layout as printf's "%8.3f".
    fn default() -> Self {
        RenderConfig {
            width: 8,
            precision: 3,
        }
    }
}

impl Matrix {
    /// Writes the `"<rows> rows, <cols> columns:"` header followed by one line per row.
    pub fn write_with(&self, f: &mut impl fmt::Write, config: &RenderConfig) -> fmt::Result {
        writeln!(f, "{} rows, {} columns:", self.rows(), self.cols())?;
        for line in self.as_slice().chunks(self.cols()) {
            for value in line {
                write!(
                    f,
                    "{:>width$.precision$}",
                    value,
                    width = config.width,
                    precision = config.precision
                )?;
            }
            writeln!(f)?;
        }
        Ok(())
    }

    pub fn render_with(&self, config: &RenderConfig) -> String {
        let mut out = String::new();
        // writing into a String cannot fail
        let _ = self.write_with(&mut out, config);
        out
    }

    pub fn print(&self, stream: &mut impl io::Write) -> io::Result<()> {
        stream.write_all(self.to_string().as_bytes())
    }
}

impl Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.write_with(f, &RenderConfig::default())
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_identity() {
        let m = Matrix::create(2, 2).unwrap();
        assert_eq!(
            m.to_string(),
            "2 rows, 2 columns:\n   1.000   0.000\n   0.000   1.000\n"
        );
    }

    #[test]
    fn test_display_rectangular() {
        let m = Matrix::from_rows(vec![vec![-1.5, 22.25, 1234.5678]]).unwrap();
        assert_eq!(
            m.to_string(),
            "1 rows, 3 columns:\n  -1.500  22.2501234.568\n"
        );
    }

    #[test]
    fn test_print() {
        let m = Matrix::create(1, 2).unwrap();
        let mut out = Vec::new();
        m.print(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "1 rows, 2 columns:\n   0.000   0.000\n"
        );
    }

    #[test]
    fn test_render_with_config() {
        let m = Matrix::from_rows(vec![vec![1.0, 2.5], vec![-3.0, 4.0]]).unwrap();
        let config = RenderConfig {
            width: 6,
            precision: 1,
        };
        assert_eq!(
            m.render_with(&config),
            "2 rows, 2 columns:\n   1.0   2.5\n  -3.0   4.0\n"
        );
        assert_eq!(m.render_with(&RenderConfig::default()), m.to_string());
    }
}
