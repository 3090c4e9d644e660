mod adapter;

use std::fs::File;
use std::path::PathBuf;

use chordstep_core::config::{parse_format, Config, OutputFormat};
use chordstep_core::presets::Preset;
use chordstep_types::OutletIndex;

fn init_logging(verbose: bool) {
    use simplelog::{LevelFilter, WriteLogger};

    let log_level = if verbose { LevelFilter::Debug } else { LevelFilter::Warn };

    let log_path = dirs::config_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join("chordstep")
        .join("chordstep.log");

    if let Some(parent) = log_path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    let log_file = match File::create(&log_path).or_else(|_| File::create("/tmp/chordstep.log")) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("logging disabled: {}", e);
            return;
        }
    };

    if WriteLogger::init(log_level, simplelog::Config::default(), log_file).is_err() {
        eprintln!("logging disabled: logger already set");
        return;
    }

    log::info!("chordstep starting (log level: {:?})", log_level);
}

/// Value following the first of `names` on the command line. A flag given
/// without a value is an error.
fn flag_value<'a>(args: &'a [String], names: &[&str]) -> Result<Option<&'a str>, String> {
    let Some(i) = args.iter().position(|a| names.contains(&a.as_str())) else {
        return Ok(None);
    };
    match args.get(i + 1) {
        Some(value) if !value.starts_with('-') => Ok(Some(value.as_str())),
        _ => Err(format!("{} expects a value", args[i])),
    }
}

/// Output format requested on the command line, if any.
fn format_flag(args: &[String]) -> Result<Option<OutputFormat>, String> {
    if args.iter().any(|a| a == "--json") {
        return Ok(Some(OutputFormat::Json));
    }
    match flag_value(args, &["--format"])? {
        Some(name) => parse_format(name)
            .map(Some)
            .ok_or_else(|| format!("unknown format '{}' (expected max or json)", name)),
        None => Ok(None),
    }
}

fn usage_error(msg: &str) -> ! {
    eprintln!("chordstep: {}", msg);
    std::process::exit(2);
}

fn flag_or_exit<'a>(args: &'a [String], names: &[&str]) -> Option<&'a str> {
    flag_value(args, names).unwrap_or_else(|e| usage_error(&e))
}

fn print_usage() {
    println!("usage: chordstep [options]");
    println!();
    println!("Reads bang / init / reset messages from stdin, one per line,");
    println!("and writes outlet messages to stdout.");
    println!();
    println!("  --preset <name>        ice, ice-counted, resonators, crack");
    println!("  --table <path>         chord table file (.toml or .json)");
    println!("  --replay-offset <n>    position to wrap back to");
    println!("  --format <max|json>    output format");
    println!("  --json                 same as --format json");
    println!("  --echo                 echo received messages");
    println!("  --list                 list presets");
    println!("  --assist               describe inlets and outlets");
    println!("  -v, --verbose          debug logging");
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_usage();
        return;
    }
    let verbose = args.iter().any(|a| a == "--verbose" || a == "-v");
    init_logging(verbose);

    if args.iter().any(|a| a == "--list") {
        for preset in Preset::ALL {
            println!("{:<12} {}", preset.name(), preset.description());
        }
        return;
    }

    let config = Config::load();
    let mut source = config.stepper_source();

    if let Some(name) = flag_or_exit(&args, &["--preset", "-p"]) {
        match Preset::from_name(name) {
            Some(preset) => source.preset = preset,
            None => usage_error(&format!("unknown preset '{}' (try --list)", name)),
        }
    }
    if let Some(path) = flag_or_exit(&args, &["--table", "-t"]) {
        source.table = Some(PathBuf::from(path));
    }
    if let Some(offset) = flag_or_exit(&args, &["--replay-offset"]) {
        match offset.parse() {
            Ok(n) => source.replay_offset = Some(n),
            Err(_) => usage_error(&format!(
                "--replay-offset expects a non-negative integer, got '{}'",
                offset
            )),
        }
    }

    let format = format_flag(&args)
        .unwrap_or_else(|e| usage_error(&e))
        .unwrap_or_else(|| config.output_format());
    let echo = config.echo() || args.iter().any(|a| a == "--echo");

    let mut stepper = match source.build() {
        Ok(stepper) => stepper,
        Err(e) => {
            log::error!("could not build stepper: {}", e);
            eprintln!("chordstep: {}", e);
            std::process::exit(1);
        }
    };

    if args.iter().any(|a| a == "--assist") {
        println!("in0 bang, init, reset");
        let layout = stepper.layout();
        for idx in 0..layout.outlet_count() {
            let outlet = OutletIndex::new(idx);
            if let Some(text) = layout.assist(outlet) {
                println!("out{} {}", outlet, text);
            }
        }
        return;
    }

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout().lock();
    match adapter::run_session(&mut stepper, stdin.lock(), &mut stdout, format, echo) {
        Ok(n) => log::info!("session ended after {} events at position {}", n, stepper.position()),
        Err(e) => {
            log::error!("session failed: {}", e);
            eprintln!("chordstep: {}", e);
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(line: &str) -> Vec<String> {
        line.split_whitespace().map(String::from).collect()
    }

    #[test]
    fn flag_value_present() {
        let a = args("chordstep --preset ice --echo");
        assert_eq!(flag_value(&a, &["--preset", "-p"]), Ok(Some("ice")));
        assert_eq!(flag_value(&a, &["--table"]), Ok(None));
    }

    #[test]
    fn flag_without_value_is_an_error() {
        let a = args("chordstep --table");
        assert_eq!(
            flag_value(&a, &["--table", "-t"]),
            Err("--table expects a value".to_string())
        );
        let a = args("chordstep --preset --echo");
        assert!(flag_value(&a, &["--preset", "-p"]).is_err());
    }

    #[test]
    fn format_flag_choices() {
        assert_eq!(format_flag(&args("chordstep")), Ok(None));
        assert_eq!(format_flag(&args("chordstep --json")), Ok(Some(OutputFormat::Json)));
        assert_eq!(
            format_flag(&args("chordstep --format max")),
            Ok(Some(OutputFormat::Max))
        );
    }

    #[test]
    fn unknown_format_is_an_error() {
        let err = format_flag(&args("chordstep --format xml")).unwrap_err();
        assert!(err.contains("xml"), "{}", err);
        assert!(format_flag(&args("chordstep --format")).is_err());
    }
}
