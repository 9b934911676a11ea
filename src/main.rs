use std::env;
use std::path::Path;
use std::process;

use log::info;

use sigview::buffers::SampleRate;
use sigview::fileio::load_samples;
use sigview::plot::{render_analysis, ColorTheme};
use sigview::split_and_analyze;
use sigview::utils::{peak_bin, rms, Float};

const HELP: &str =
    "usage: sigview [input .dat/.txt] [output image] [components=3] [rate hz=1000] [theme=default]";

fn main() {
    env_logger::init();

    // handle input args
    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        eprintln!("{}", HELP);
        return;
    }
    let input = Path::new(&args[1]);
    let output = Path::new(&args[2]);
    let components: usize = args
        .get(3)
        .map(|s| s.parse().expect("components must be an integer"))
        .unwrap_or(3);
    let rate: SampleRate = args
        .get(4)
        .map(|s| s.parse().expect("rate must be a number"))
        .unwrap_or(1000.0);
    let theme: ColorTheme = args
        .get(5)
        .map(|s| s.parse().expect("unknown color theme"))
        .unwrap_or(ColorTheme::Default);

    let buffer = match load_samples(input) {
        Ok(buffer) => buffer,
        Err(e) => fail("load", &e.to_string()),
    };
    let results = match split_and_analyze(&buffer, components, rate) {
        Ok(results) => results,
        Err(e) => fail("analyze", &e.to_string()),
    };

    for (series, spectrum) in &results {
        let peak_hz = peak_bin(&spectrum.mags)
            .map(|k| spectrum.fvals[k])
            .unwrap_or(0.0);
        info!(
            "component {}: {} samples, rms {:.1}, peak at {:.1} hz",
            series.index() + 1,
            series.len(),
            rms::<_, Float>(series.data()),
            peak_hz
        );
    }

    if let Err(e) = render_analysis(output, &results, theme) {
        fail("render", &e.to_string());
    }
    eprintln!("Wrote analysis to {} ...", output.display());
}

// report the failing stage and reason, then stop without a panic trace
fn fail(stage: &str, reason: &str) -> ! {
    eprintln!("{} failed: {}", stage, reason);
    process::exit(1);
}
