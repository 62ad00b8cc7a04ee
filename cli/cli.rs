mod cli_args;
mod output;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use colored::*;
use std::io;
use std::process;

use cli_args::Cli;
use promcat_core::{
    AppError, Config, RenderOptions, build_path_specification, collect_files, render_collection,
};

fn main() {
    let cli_args = Cli::parse();

    setup_logging(cli_args.quiet, cli_args.verbose);

    let quiet = cli_args.quiet;
    log::debug!("CLI args parsed: {:?}", cli_args);

    let exit_code = match run_app(&cli_args, quiet) {
        Ok(_) => {
            log::info!("Application finished successfully.");
            0
        }
        Err(e) => {
            let core_err = e.downcast_ref::<AppError>();
            let exit_code = match core_err {
                Some(AppError::Config(_)) => 1,
                Some(AppError::TomlParse(_)) => 1,
                Some(AppError::Io(_)) => 2,
                Some(AppError::FileRead { .. }) => 2,
                Some(AppError::FileWrite { .. }) => 2,
                Some(AppError::DirCreation { .. }) => 2,
                Some(AppError::WalkDir(_)) => 2,
                Some(AppError::PatternSyntax(_)) => 3,
                Some(AppError::InvalidArgument(_)) => 5,
                Some(_) => 1,
                None => 1,
            };

            if !quiet || exit_code == 1 || exit_code == 5 {
                eprintln!("{} {:#}", "Error:".red().bold(), e);
            } else {
                log::error!("Application failed: {:#}", e);
            }

            exit_code
        }
    };
    log::debug!("Exiting with code {}", exit_code);
    process::exit(exit_code);
}

fn setup_logging(quiet: bool, verbose: u8) {
    let log_level = if quiet {
        log::LevelFilter::Off
    } else {
        match verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    };
    env_logger::Builder::new()
        .filter_level(log_level)
        .format_timestamp(None)
        .init();
    log::trace!("Logger initialized with level: {:?}", log_level);
}

fn run_app(cli: &Cli, quiet: bool) -> Result<()> {
    if let Some(shell) = cli.completions {
        log::debug!("Generating {} completions...", shell);
        let mut command = Cli::command();
        let bin_name = command.get_name().to_string();
        generate(shell, &mut command, bin_name, &mut io::stdout());
        return Ok(());
    }

    let root = cli.directory.as_path();
    if !root.is_dir() {
        anyhow::bail!(AppError::InvalidArgument(format!(
            "Not a directory: {}",
            root.display()
        )));
    }

    let config_path =
        Config::resolve_config_path(root, cli.config_file.as_ref(), cli.disable_config_file)
            .context("Failed to resolve configuration path")?;
    let config = match &config_path {
        Some(path) => Config::load_from_path(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::default(),
    };
    let config = merge_config_with_cli_overrides(config, cli);

    let style = config.header_style()?;

    let path_specification = build_path_specification(
        root,
        &config.ignore_file_names(),
        &config.ignore.default_ignores,
        config.ignore.use_default_ignores,
    )
    .context("Failed to build path specification")?;

    let collection = collect_files(root, &path_specification)
        .with_context(|| format!("Failed to walk {}", root.display()))?;

    let options = RenderOptions {
        style,
        footer: config.output.footer,
        line_numbers: config.output.line_numbers,
        number_separator: config.output.number_separator.clone(),
        relative_paths: config.output.relative_paths,
        tree: config.output.tree,
    };
    let result = render_collection(&collection, &options, quiet);

    output::print_or_save(&result, cli.output.as_deref(), quiet)
}

fn merge_config_with_cli_overrides(mut config: Config, args: &Cli) -> Config {
    log::trace!("Applying CLI overrides to config...");

    if let Some(style) = &args.style {
        config.output.style = style.clone();
    }
    if args.disable_footer {
        config.output.footer = false;
    }
    if args.enable_footer {
        config.output.footer = true;
    }
    if args.disable_line_numbers {
        config.output.line_numbers = false;
    }
    if args.enable_line_numbers {
        config.output.line_numbers = true;
    }
    if let Some(separator) = &args.number_separator {
        config.output.number_separator = separator.clone();
    }
    if args.absolute_paths {
        config.output.relative_paths = false;
    }
    if args.relative_paths {
        config.output.relative_paths = true;
    }
    if args.disable_tree {
        config.output.tree = false;
    }
    if args.enable_tree {
        config.output.tree = true;
    }

    if args.disable_gitignore {
        config.ignore.use_gitignore = false;
    }
    if args.enable_gitignore {
        config.ignore.use_gitignore = true;
    }
    if args.disable_promcatignore {
        config.ignore.use_promcatignore = false;
    }
    if args.enable_promcatignore {
        config.ignore.use_promcatignore = true;
    }
    if args.disable_default_ignores {
        config.ignore.use_default_ignores = false;
    }
    if args.enable_default_ignores {
        config.ignore.use_default_ignores = true;
    }

    log::trace!("Config after CLI overrides: {:?}", config);
    config
}
