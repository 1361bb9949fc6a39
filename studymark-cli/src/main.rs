// Command-line interface for studymark
//
// This binary formats course study notes into HTML fragments, converts between
// the registered formats and walks whole course records.
//
// The inspect command is a development aid: it prints the intermediate stages
// of the pipeline (block lines, IR, events) for a notes file.
//
// Usage:
//  studymark <input|->                         - Format notes to HTML (default)
//  studymark format <input|-> [--mode <mode>] [--trust]
//  studymark convert <input> --to <format> [--from <format>] [--output <file>]
//  studymark <input> --to <format>             - Same as convert ('convert' is optional)
//  studymark course <course.json> [--chapter <n>] [--summary]
//  studymark inspect <path> [<transform>]      - Execute a transform (defaults to "events-pprint")
//  studymark --list-formats                    - List formats and transforms
//
// Extra Parameters:
//
// Format-specific parameters can be passed using --extra-<parameter-name> <value>.
// The CLI layer strips the "extra-" prefix; `mode` and `escape` update the loaded
// configuration, anything else is handed to the target format.
// Example:
//  studymark convert notes.txt --to html --extra-escape false

use studymark_cli::transforms;

use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use std::collections::HashMap;
use std::fs;
use std::io::{self, Read};
use studymark::course::Course;
use studymark::formats::{HtmlFormat, HtmlOptions, NotesFormat};
use studymark::{FormatRegistry, Formatter, Mode};
use studymark_config::{Loader, ModeSetting, StudymarkConfig, LOCAL_CONFIG_FILE};
use tracing::debug;
use tracing_subscriber::EnvFilter;

const SUBCOMMANDS: &[&str] = &["format", "convert", "course", "inspect", "help"];

/// Parse extra-* arguments from command line args
/// Returns (cleaned_args_without_extras, extra_params_map)
///
/// Supports both:
/// - `--extra-<key> <value>` (explicit value)
/// - `--extra-<key>` (boolean flag, defaults to "true")
/// - `--extras-<key>` (alias for `--extra-<key>`)
fn parse_extra_args(args: &[String]) -> (Vec<String>, HashMap<String, String>) {
    let mut cleaned_args = Vec::new();
    let mut extra_params = HashMap::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        let key_opt = if let Some(key) = arg.strip_prefix("--extra-") {
            Some(key)
        } else {
            arg.strip_prefix("--extras-")
        };

        if let Some(key) = key_opt {
            let has_value = i + 1 < args.len() && !args[i + 1].starts_with('-');

            if has_value {
                extra_params.insert(key.to_string(), args[i + 1].clone());
                i += 2;
            } else {
                extra_params.insert(key.to_string(), "true".to_string());
                i += 1;
            }
            continue;
        }

        cleaned_args.push(arg.clone());
        i += 1;
    }

    (cleaned_args, extra_params)
}

/// Picks the subcommand to inject when the first argument is an input path.
fn default_subcommand(args: &[String]) -> &'static str {
    if args.iter().any(|arg| arg == "--to" || arg.starts_with("--to=")) {
        "convert"
    } else {
        "format"
    }
}

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
        .help("Block mode: auto, paragraph or line (defaults to the configured mode)")
        .value_parser(["auto", "paragraph", "line"])
        .value_hint(ValueHint::Other)
}

fn build_cli() -> Command {
    Command::new("studymark")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Formats course study notes into HTML fragments")
        .long_about(
            "studymark turns the loose markup of generated study notes and course\n\
            summaries (paragraphs, - and 1. lists, **bold**, `code`) into HTML.\n\n\
            Commands:\n  \
            - format:  Notes to an HTML fragment (default command)\n  \
            - convert: Transform between registered formats\n  \
            - course:  Render every chapter of a course record\n  \
            - inspect: View intermediate representations\n\n\
            Extra Parameters:\n  \
            Use --extra-<name> [value] to pass format-specific options.\n  \
            Boolean flags can omit the value (defaults to 'true').\n\n\
            Logging:\n  \
            Set RUST_LOG (e.g. RUST_LOG=studymark=debug) to trace decisions on stderr.\n\n\
            Examples:\n  \
            studymark notes.txt                         # HTML fragment on stdout\n  \
            cat notes.txt | studymark format -         # Read from stdin\n  \
            studymark notes.txt --mode line             # Force line-oriented mode\n  \
            studymark notes.txt --to notes              # Normalize notes markup\n  \
            studymark course course.json --chapter 1    # One chapter in reading order",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available formats and inspect transforms")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a studymark.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .subcommand(
            Command::new("format")
                .about("Format notes into an HTML fragment (default command)")
                .long_about(
                    "Format study notes into an HTML fragment.\n\n\
                    In auto mode, text holding a blank line is read as paragraphs;\n\
                    otherwise every line stands alone and lines are joined by <br/>.\n\n\
                    Text is HTML-escaped unless --trust is given.\n\
                    Output is always written to stdout.\n\n\
                    Examples:\n  \
                    studymark format notes.txt\n  \
                    studymark format - < notes.txt\n  \
                    studymark format notes.txt --mode paragraph --trust",
                )
                .arg(input_arg())
                .arg(mode_arg())
                .arg(
                    Arg::new("trust")
                        .long("trust")
                        .help("Do not escape HTML in the source text")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert between document formats")
                .long_about(
                    "Convert documents between the registered formats.\n\n\
                    Supported formats:\n  \
                    - notes: study notes markup (.notes, .txt)\n  \
                    - html:  HTML fragment (.html), export only\n\n\
                    The source format is auto-detected from the file extension.\n\
                    Output goes to stdout by default, or use -o to specify a file.\n\n\
                    Examples:\n  \
                    studymark convert notes.txt --to html -o notes.html\n  \
                    studymark notes.txt --to notes              # 'convert' is optional",
                )
                .arg(input_arg())
                .arg(
                    Arg::new("from")
                        .long("from")
                        .help("Source format (auto-detected from file extension if not specified)")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Target format (required)")
                        .required(true)
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                )
                .arg(mode_arg()),
        )
        .subcommand(
            Command::new("course")
                .about("Render the chapters of a course record")
                .long_about(
                    "Read a course JSON record and print each chapter in reading order:\n\
                    its numbered title, then its study notes as HTML.\n\n\
                    The reading order starts with a synthesized \"Course Overview\"\n\
                    chapter and ends with a \"Course Summary\" chapter; both can be\n\
                    turned off in the [course] configuration section.",
                )
                .arg(
                    Arg::new("input")
                        .help("Path to the course JSON file")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("chapter")
                        .long("chapter")
                        .help("Only print the chapter at this reading-order index")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    Arg::new("summary")
                        .long("summary")
                        .help("Print the course summary instead of the chapters")
                        .action(ArgAction::SetTrue)
                        .conflicts_with("chapter"),
                )
                .arg(mode_arg()),
        )
        .subcommand(
            Command::new("inspect")
                .about("Inspect intermediate representations of notes")
                .arg(
                    Arg::new("path")
                        .help("Path to the notes file")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("transform")
                        .help("Transform to apply (stage-format). Defaults to 'events-pprint'")
                        .required(false)
                        .value_parser(clap::builder::PossibleValuesParser::new(
                            transforms::AVAILABLE_TRANSFORMS,
                        ))
                        .index(2)
                        .value_hint(ValueHint::Other),
                ),
        )
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("warn"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn main() {
    init_logging();

    let args: Vec<String> = std::env::args().collect();
    let (cleaned_args, mut extra_params) = parse_extra_args(&args);

    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&cleaned_args) {
        Ok(m) => m,
        Err(e) => {
            // A leading path means the subcommand was left out
            if cleaned_args.len() > 1
                && (!cleaned_args[1].starts_with('-') || cleaned_args[1] == "-")
                && !SUBCOMMANDS.contains(&cleaned_args[1].as_str())
            {
                let mut new_args = vec![
                    cleaned_args[0].clone(),
                    default_subcommand(&cleaned_args).to_string(),
                ];
                new_args.extend_from_slice(&cleaned_args[1..]);

                match cli.try_get_matches_from(&new_args) {
                    Ok(m) => m,
                    Err(e2) => e2.exit(),
                }
            } else {
                e.exit();
            }
        }
    };

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    let mut config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));
    apply_config_overrides(&mut config, &mut extra_params);

    match matches.subcommand() {
        Some(("format", sub_matches)) => {
            apply_flag_overrides(&mut config, sub_matches);
            let input = required(sub_matches, "input");
            handle_format_command(input, &config);
        }
        Some(("convert", sub_matches)) => {
            apply_flag_overrides(&mut config, sub_matches);
            let input = required(sub_matches, "input");
            let to = required(sub_matches, "to");

            let from = match sub_matches.get_one::<String>("from") {
                Some(f) => f.to_string(),
                None => match FormatRegistry::default().detect_format_from_filename(input) {
                    Some(detected) => detected,
                    None => {
                        eprintln!("Error: Could not detect format from filename '{input}'");
                        eprintln!("Please specify --from explicitly");
                        std::process::exit(1);
                    }
                },
            };

            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_convert_command(input, &from, to, output, &extra_params, &config);
        }
        Some(("course", sub_matches)) => {
            apply_flag_overrides(&mut config, sub_matches);
            let input = required(sub_matches, "input");
            let chapter = sub_matches.get_one::<usize>("chapter").copied();
            let summary = sub_matches.get_flag("summary");
            handle_course_command(input, chapter, summary, &config);
        }
        Some(("inspect", sub_matches)) => {
            let path = required(sub_matches, "path");
            let transform = sub_matches
                .get_one::<String>("transform")
                .map(|s| s.as_str())
                .unwrap_or(transforms::DEFAULT_TRANSFORM);
            handle_inspect_command(path, transform, &extra_params, &config);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

/// clap enforces required args before we get here.
fn required<'a>(matches: &'a ArgMatches, id: &str) -> &'a str {
    matches
        .get_one::<String>(id)
        .map(|s| s.as_str())
        .unwrap_or_default()
}

fn read_input(input: &str) -> String {
    if input == "-" {
        let mut source = String::new();
        io::stdin().read_to_string(&mut source).unwrap_or_else(|e| {
            eprintln!("Error reading stdin: {e}");
            std::process::exit(1);
        });
        return source;
    }

    fs::read_to_string(input).unwrap_or_else(|e| {
        eprintln!("Error reading file '{input}': {e}");
        std::process::exit(1);
    })
}

/// Handle the format command
fn handle_format_command(input: &str, config: &StudymarkConfig) {
    let source = read_input(input);
    let formatter = Formatter::from(&config.formatting);
    debug!(input, mode = %formatter.mode, escape = formatter.escape, "formatting");

    print!("{}", formatter.format(&source));
}

/// Handle the convert command
fn handle_convert_command(
    input: &str,
    from: &str,
    to: &str,
    output: Option<&str>,
    extra_params: &HashMap<String, String>,
    config: &StudymarkConfig,
) {
    let registry = configured_registry(config);

    if let Err(e) = registry.get(from) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
    if let Err(e) = registry.get(to) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    let source = read_input(input);

    let doc = registry.parse(&source, from).unwrap_or_else(|e| {
        eprintln!("Parse error: {e}");
        std::process::exit(1);
    });

    let result = registry
        .serialize_with_options(&doc, to, extra_params)
        .unwrap_or_else(|e| {
            eprintln!("Serialization error: {e}");
            std::process::exit(1);
        });

    match output {
        Some(path) => {
            fs::write(path, result).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
        }
        None => print!("{result}"),
    }
}

/// Handle the course command
fn handle_course_command(
    input: &str,
    chapter: Option<usize>,
    summary: bool,
    config: &StudymarkConfig,
) {
    let source = read_input(input);
    let course = Course::from_json(&source).unwrap_or_else(|e| {
        eprintln!("Error reading course '{input}': {e}");
        std::process::exit(1);
    });
    let formatter = Formatter::from(&config.formatting);

    if summary {
        println!("{}", course.course_title);
        println!("{}", course.summary_html(&formatter));
        return;
    }

    let chapters = course.reading_order_with((&config.course).into());
    let selected: Vec<_> = match chapter {
        Some(index) => match chapters.get(index) {
            Some(chapter) => vec![chapter],
            None => {
                eprintln!(
                    "Error: chapter {index} is out of range (course has {} chapters in reading order)",
                    chapters.len()
                );
                std::process::exit(1);
            }
        },
        None => chapters.iter().collect(),
    };

    for (i, chapter) in selected.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{}", chapter.display_title());
        println!("{}", chapter.notes_html(&formatter));
    }
}

/// Handle the inspect command
fn handle_inspect_command(
    path: &str,
    transform: &str,
    extra_params: &HashMap<String, String>,
    config: &StudymarkConfig,
) {
    let source = read_input(path);
    let params = build_inspect_params(config, extra_params);

    let output = transforms::execute_transform(&source, transform, &params).unwrap_or_else(|e| {
        eprintln!("Execution error: {e}");
        std::process::exit(1);
    });

    print!("{output}");
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    let registry = FormatRegistry::default();

    println!("Conversion formats:");
    for format_name in registry.list_formats() {
        if let Ok(format) = registry.get(&format_name) {
            println!("  {format_name:<8} {}", format.description());
        }
    }

    println!("\nInspect transforms:");
    for transform_name in transforms::AVAILABLE_TRANSFORMS {
        println!("  {transform_name}");
    }
}

/// The default registry with notes and HTML set up from the configuration.
fn configured_registry(config: &StudymarkConfig) -> FormatRegistry {
    let mut registry = FormatRegistry::default();
    registry.register(NotesFormat::new(config.formatting.mode.into()));
    registry.register(HtmlFormat::new(HtmlOptions::new(
        config.formatting.escape_text,
    )));
    registry
}

fn load_cli_config(explicit_path: Option<&str>) -> StudymarkConfig {
    let loader = Loader::new().with_optional_file(LOCAL_CONFIG_FILE);
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

fn apply_config_overrides(
    config: &mut StudymarkConfig,
    extra_params: &mut HashMap<String, String>,
) {
    if let Some(raw) = take_override(extra_params, &["mode"]) {
        config.formatting.mode = parse_mode_arg(&raw);
    }
    if let Some(raw) = take_override(extra_params, &["escape", "escape-text"]) {
        config.formatting.escape_text = parse_bool_arg("escape", &raw);
    }
    if let Some(raw) = take_override(extra_params, &["trust", "trusted"]) {
        config.formatting.escape_text = !parse_bool_arg("trust", &raw);
    }
    if let Some(raw) = take_override(extra_params, &["overview", "include-overview"]) {
        config.course.include_overview = parse_bool_arg("overview", &raw);
    }
    if let Some(raw) = take_override(extra_params, &["summary", "include-summary"]) {
        config.course.include_summary = parse_bool_arg("summary", &raw);
    }
}

/// Subcommand flags win over configuration and extras.
fn apply_flag_overrides(config: &mut StudymarkConfig, matches: &ArgMatches) {
    if let Some(raw) = matches.get_one::<String>("mode") {
        config.formatting.mode = parse_mode_arg(raw);
    }
    if matches.try_get_one::<bool>("trust").ok().flatten() == Some(&true) {
        config.formatting.escape_text = false;
    }
}

fn build_inspect_params(
    config: &StudymarkConfig,
    overrides: &HashMap<String, String>,
) -> HashMap<String, String> {
    let mut params = HashMap::new();
    params.insert(
        "mode".to_string(),
        Mode::from(config.formatting.mode).as_str().to_string(),
    );
    params.insert(
        "escape".to_string(),
        config.formatting.escape_text.to_string(),
    );

    for (key, value) in overrides {
        params.insert(key.clone(), value.clone());
    }

    params
}

fn take_override(map: &mut HashMap<String, String>, keys: &[&str]) -> Option<String> {
    for key in keys {
        if let Some(value) = map.remove(*key) {
            return Some(value);
        }
    }
    None
}

fn parse_mode_arg(raw: &str) -> ModeSetting {
    match raw.parse::<Mode>() {
        Ok(mode) => mode.into(),
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}

fn parse_bool_arg(flag: &str, raw: &str) -> bool {
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => true,
        "false" | "0" | "no" | "n" => false,
        other => {
            eprintln!("Invalid boolean value '{other}' for --extra-{flag}");
            std::process::exit(1);
        }
    }
}
