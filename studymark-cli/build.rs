use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the transforms from src/transforms.rs
// We need to duplicate this here since build scripts can't access src/ modules
const AVAILABLE_TRANSFORMS: &[&str] = &[
    "blocks-json",
    "blocks-simple",
    "ir-json",
    "events-simple",
    "events-pprint",
    "html",
];

const MODES: &[&str] = &["auto", "paragraph", "line"];

fn input_arg() -> Arg {
    Arg::new("input")
        .help("Input file path, or '-' for stdin")
        .required(true)
        .index(1)
        .value_hint(ValueHint::FilePath)
}

fn mode_arg() -> Arg {
    Arg::new("mode")
        .long("mode")
        .value_parser(clap::builder::PossibleValuesParser::new(MODES))
}

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("studymark")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Formats course study notes into HTML fragments")
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .subcommand(
            Command::new("format")
                .arg(input_arg())
                .arg(mode_arg())
                .arg(Arg::new("trust").long("trust").action(ArgAction::SetTrue)),
        )
        .subcommand(
            Command::new("convert")
                .arg(input_arg())
                .arg(Arg::new("from").long("from").value_parser(["notes"]))
                .arg(Arg::new("to").long("to").value_parser(["notes", "html"]))
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .value_hint(ValueHint::FilePath),
                )
                .arg(mode_arg()),
        )
        .subcommand(
            Command::new("course")
                .arg(input_arg())
                .arg(Arg::new("chapter").long("chapter"))
                .arg(Arg::new("summary").long("summary").action(ArgAction::SetTrue))
                .arg(mode_arg()),
        )
        .subcommand(
            Command::new("inspect")
                .arg(input_arg())
                .arg(
                    Arg::new("transform")
                        .value_parser(clap::builder::PossibleValuesParser::new(
                            AVAILABLE_TRANSFORMS,
                        ))
                        .index(2),
                ),
        );

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "studymark", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "studymark", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "studymark", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
