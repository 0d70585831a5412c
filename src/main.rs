use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use rayon::prelude::*;

use style_guard::analyzer::Analyzer;
use style_guard::cli::{CheckArgs, Cli, ColorChoice, Commands, InitArgs};
use style_guard::config::{Config, ConfigLoader, FileConfigLoader};
use style_guard::output::{
    ColorMode, FileReport, JsonFormatter, OutputFormat, OutputFormatter, TextFormatter,
};
use style_guard::scanner::{SourceFilter, collect_source_files};
use style_guard::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, EXIT_VIOLATIONS_FOUND};

const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

fn main() {
    let cli = Cli::parse();

    let exit_code = match &cli.command {
        Commands::Check(args) => run_check(args, &cli),
        Commands::Init(args) => run_init(args),
    };

    std::process::exit(exit_code);
}

fn run_check(args: &CheckArgs, cli: &Cli) -> i32 {
    match run_check_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_check_impl(args: &CheckArgs, cli: &Cli) -> style_guard::Result<i32> {
    // 1. Load configuration
    let mut config = load_config(args.config.as_deref(), cli.no_config)?;

    // 2. Apply CLI argument overrides
    apply_cli_overrides(&mut config, args);

    // 3. Create the source filter
    let mut exclude_patterns = config.exclude.patterns.clone();
    exclude_patterns.extend(args.exclude.clone());
    let filter = SourceFilter::new(config.default.extensions.clone(), &exclude_patterns)?;

    // 4. Collect files to analyze
    let paths_to_scan = get_scan_paths(args, &config);
    let files = collect_source_files(&paths_to_scan, &filter);

    // 5. Analyze each file (parallel with rayon); the first error aborts
    let analyzer = Analyzer::with_settings(config.rule_settings());
    let reports = files
        .par_iter()
        .map(|path| {
            let result = analyzer.analyze_path(path)?;
            Ok(FileReport {
                path: path.clone(),
                result,
            })
        })
        .collect::<style_guard::Result<Vec<_>>>()?;

    // 6. Format output
    let color_mode = color_choice_to_mode(cli.color);
    let output = format_output(args.format, &reports, color_mode, cli.verbose)?;

    // 7. Write output
    write_output(args.output.as_deref(), &output, cli.quiet)?;

    // 8. Determine exit code
    let has_violations = reports.iter().any(|report| !report.result.is_clean());
    if has_violations && !args.warn_only {
        Ok(EXIT_VIOLATIONS_FOUND)
    } else {
        Ok(EXIT_SUCCESS)
    }
}

fn load_config(config_path: Option<&Path>, no_config: bool) -> style_guard::Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

fn apply_cli_overrides(config: &mut Config, args: &CheckArgs) {
    if let Some(max_line_length) = args.max_line_length {
        config.default.max_line_length = max_line_length;
    }

    if let Some(ext) = &args.ext {
        config.default.extensions = ext.clone();
    }
}

fn get_scan_paths(args: &CheckArgs, config: &Config) -> Vec<PathBuf> {
    // If CLI paths provided (other than default "."), use them
    let default_path = PathBuf::from(".");
    if args.paths.len() != 1 || args.paths[0] != default_path {
        return args.paths.clone();
    }

    // Use config include_paths if available
    if !config.default.include_paths.is_empty() {
        return config
            .default
            .include_paths
            .iter()
            .map(PathBuf::from)
            .collect();
    }

    // Default to current directory
    args.paths.clone()
}

fn format_output(
    format: OutputFormat,
    reports: &[FileReport],
    color_mode: ColorMode,
    verbose: u8,
) -> style_guard::Result<String> {
    match format {
        OutputFormat::Text => TextFormatter::with_verbose(color_mode, verbose).format(reports),
        OutputFormat::Json => JsonFormatter.format(reports),
    }
}

fn write_output(output_path: Option<&Path>, content: &str, quiet: bool) -> style_guard::Result<()> {
    if let Some(path) = output_path {
        fs::write(path, content)?;
    } else if !quiet {
        print!("{content}");
    }
    Ok(())
}

fn run_init(args: &InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_init_impl(args: &InitArgs) -> style_guard::Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(style_guard::StyleGuardError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, config_template())?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

fn config_template() -> String {
    r#"# style-guard configuration file

[default]
# Maximum characters per line (default: 120)
max_line_length = 120

# Largest allowed indentation deepening between consecutive lines (default: 2)
max_indent_jump = 2

# Literal bodies at or below this length are never counted as repeated (default: 2)
min_literal_length = 2

# File extensions to accept
extensions = ["java"]

# Directories to scan when no explicit paths are given
# include_paths = ["src/main/java"]

# Exclude patterns (glob syntax)
[exclude]
patterns = [
    "**/target/**",
    "**/build/**",
    "**/.git/**",
]
"#
    .to_string()
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
