use crate::grid::Grid;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

const SIGNIFICANT_DIGITS: usize = 6;

/// Writes `grid` as `<column> <row> <value>` lines in row-major order, with a
/// blank line after each row (gnuplot `splot` layout).
pub fn write_dat<W: Write>(w: &mut W, grid: &Grid) -> io::Result<()> {
    for i in 0..grid.nx() {
        for (j, &value) in grid.row(i).iter().enumerate() {
            writeln!(w, "{j} {i} {}", format_general(value))?;
        }
        writeln!(w)?;
    }
    Ok(())
}

/// `%g` style: 6 significant digits, trailing zeros dropped, exponent form
/// below 1e-4 or from 1e6 up.
pub fn format_general(value: f64) -> String {
    if !value.is_finite() {
        return if value.is_nan() {
            "nan".to_string()
        } else if value > 0.0 {
            "inf".to_string()
        } else {
            "-inf".to_string()
        };
    }

    let sci = format!("{:.*e}", SIGNIFICANT_DIGITS - 1, value);
    let (mantissa, exp) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };

    if exp < -4 || exp >= SIGNIFICANT_DIGITS as i32 {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{sign}{:02}", trim_zeros(mantissa), exp.abs())
    } else {
        let decimals = (SIGNIFICANT_DIGITS as i32 - 1 - exp) as usize;
        trim_zeros(&format!("{value:.decimals$}")).to_string()
    }
}

fn trim_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

pub fn save_dat(path: &Path, grid: &Grid) -> io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    write_dat(&mut w, grid)?;
    w.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dat_layout_is_column_row_value() {
        let grid = Grid::from_vec(2, 3, vec![0.0, 1.5, 2.0, 3.0, 4.0 / 3.0, 100.0]).unwrap();
        let mut out = Vec::new();
        write_dat(&mut out, &grid).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "0 0 0\n1 0 1.5\n2 0 2\n\n0 1 3\n1 1 1.33333\n2 1 100\n\n");
    }

    #[test]
    fn values_keep_six_significant_digits() {
        assert_eq!(format_general(0.0), "0");
        assert_eq!(format_general(100.0), "100");
        assert_eq!(format_general(33.333333333), "33.3333");
        assert_eq!(format_general(0.1 + 0.2), "0.3");
        assert_eq!(format_general(-2.5), "-2.5");
        assert_eq!(format_general(0.000123456789), "0.000123457");
        assert_eq!(format_general(0.0000123), "1.23e-05");
        assert_eq!(format_general(1234567.0), "1.23457e+06");
        assert_eq!(format_general(999999.7), "1e+06");
        assert_eq!(format_general(123456.4), "123456");
        assert_eq!(format_general(f64::NAN), "nan");
    }

    #[test]
    fn save_reports_unwritable_path() {
        let grid = Grid::zeros(3, 3);
        let path = std::env::temp_dir()
            .join("heat-core-missing-dir")
            .join("nested")
            .join("data.dat");
        assert!(save_dat(&path, &grid).is_err());
    }
}
