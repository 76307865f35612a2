use crate::error::Error;
use crate::numeric::{Double3, dot, magnitude, subtract};

use std::io::Write;

pub const DEFAULT_A: &str = "0 1 2";
pub const DEFAULT_B: &str = "0 0 1";

/// Write `a - b` and `a . b` to `out`, one per line, optionally followed
/// by the magnitudes of `a` and `b`.
pub fn demonstrate<W: Write>(out: &mut W, a: Double3, b: Double3, show_magnitude: bool) -> Result<(), Error> {
    writeln!(out, "{}", subtract(a, b))?;
    writeln!(out, "{}", dot(a, b))?;
    if show_magnitude {
        writeln!(out, "{}", magnitude(a))?;
        writeln!(out, "{}", magnitude(b))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::Vec3;

    fn run(a: Double3, b: Double3, show_magnitude: bool) -> String {
        let mut buf: Vec<u8> = Vec::new();
        demonstrate(&mut buf, a, b, show_magnitude).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_default_output() {
        let a: Double3 = DEFAULT_A.parse().unwrap();
        let b: Double3 = DEFAULT_B.parse().unwrap();
        assert_eq!(run(a, b, false), "0 1 1\n2\n");
    }

    #[test]
    fn test_magnitude_output() {
        let out = run(Vec3::new(3., 4., 0.), Vec3::new(0., 0., 2.), true);
        assert_eq!(out, "3 4 -2\n0\n5\n2\n");
    }

    struct Closed;

    impl Write for Closed {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }
        fn flush(&mut self) -> std::io::Result<()> { Ok(()) }
    }

    #[test]
    fn test_write_failure() {
        let r = demonstrate(&mut Closed, Double3::default(), Double3::default(), false);
        assert!(matches!(r, Err(Error::IO(_))));
    }
}
