use vec3::Error;
use vec3::cli::{app, Options};
use vec3::demo::demonstrate;

fn run(options: Options) -> Result<(), Error> {
    let stdout = std::io::stdout();
    demonstrate(&mut stdout.lock(), options.a, options.b, options.show_magnitude)
}

fn main() {
    let matches = app().get_matches();

    if let Err(e) = Options::from_matches(&matches).and_then(run) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
