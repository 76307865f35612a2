use crate::error::Error;
use crate::numeric::Double3;
use crate::demo::{DEFAULT_A, DEFAULT_B};

use clap::{Arg, App, ArgMatches};

/// Settings of one run of the `vec3` binary.
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    pub a: Double3,
    pub b: Double3,
    pub show_magnitude: bool
}

pub fn app<'a, 'b>() -> App<'a, 'b> {
    App::new("vec3")
        .version("0.1.0")
        .about("Subtract two 3-vectors and take their dot product.")
        .arg(Arg::with_name("a")
             .short("a")
             .takes_value(true)
             .allow_hyphen_values(true)
             .default_value(DEFAULT_A)
             .help("First vector, as \"x y z\"."))
        .arg(Arg::with_name("b")
             .short("b")
             .takes_value(true)
             .allow_hyphen_values(true)
             .default_value(DEFAULT_B)
             .help("Second vector, as \"x y z\"."))
        .arg(Arg::with_name("magnitude")
             .short("m")
             .long("magnitude")
             .help("Also print the magnitude of both vectors."))
}

fn vector_arg(matches: &ArgMatches, name: &str) -> Result<Double3, Error> {
    let value = matches.value_of(name)
        .ok_or_else(|| Error::ArgumentError(format!("missing vector -{}", name)))?;
    value.parse().map_err(|e| Error::ArgumentError(format!("-{} {:?}: {}", name, value, e)))
}

impl Options {
    pub fn from_matches(matches: &ArgMatches) -> Result<Self, Error> {
        Ok(Options {
            a: vector_arg(matches, "a")?,
            b: vector_arg(matches, "b")?,
            show_magnitude: matches.is_present("magnitude")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::Vec3;

    fn options(args: &[&str]) -> Result<Options, Error> {
        let mut argv = vec!["vec3"];
        argv.extend_from_slice(args);
        Options::from_matches(&app().get_matches_from(argv))
    }

    #[test]
    fn test_defaults() {
        let o = options(&[]).unwrap();
        assert_eq!(o.a, Vec3::new(0., 1., 2.));
        assert_eq!(o.b, Vec3::new(0., 0., 1.));
        assert!(!o.show_magnitude);
    }

    #[test]
    fn test_negative_components() {
        let o = options(&["-a", "-1 2 3", "-b", "-0.5 -1 1e1", "--magnitude"]).unwrap();
        assert_eq!(o.a, Vec3::new(-1., 2., 3.));
        assert_eq!(o.b, Vec3::new(-0.5, -1., 10.));
        assert!(o.show_magnitude);
    }

    #[test]
    fn test_invalid_vector() {
        assert!(matches!(options(&["-a", "1 2"]), Err(Error::ArgumentError(_))));
        assert!(matches!(options(&["-b", "1 two 3"]), Err(Error::ArgumentError(_))));
    }

    #[test]
    fn test_missing_vector() {
        let matches = App::new("bare").get_matches_from(vec!["bare"]);
        assert_eq!(vector_arg(&matches, "a"),
                   Err(Error::ArgumentError("missing vector -a".into())));
    }

    #[test]
    fn test_app_rejects_unknown_flag() {
        assert!(app().get_matches_from_safe(vec!["vec3", "--bogus"]).is_err());
    }
}
