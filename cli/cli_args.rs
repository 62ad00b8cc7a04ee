use clap::Parser;
use clap_complete::Shell;
use promcat_core::HeaderStyle;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "promcat",
    author,
    version,
    about = "Concatenate a directory's text files into one prompt-ready stream.",
    long_about = "promcat walks a directory, selects text files according to gitignore-style \npatterns (.gitignore and .promcatignore), and concatenates their contents with \nconfigurable section headers, line numbers, and an optional directory tree.",
    after_help = "EXAMPLES:\n  promcat\n  promcat src --style markdown -o context.md\n  promcat --disable-tree --disable-line-numbers --style separator"
)]
pub struct Cli {
    #[arg(
        value_name = "DIRECTORY",
        default_value = ".",
        help = "Directory to scan."
    )]
    pub directory: PathBuf,

    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Write output to FILE instead of stdout.",
        help_heading = "Output Control"
    )]
    pub output: Option<PathBuf>,

    #[arg(
        long,
        value_name = "CONFIG_FILE",
        conflicts_with = "disable_config_file",
        help = "Path of the TOML config file (default: .promcat.toml in DIRECTORY).",
        help_heading = "Project Setup"
    )]
    pub config_file: Option<String>,

    #[arg(
        long,
        conflicts_with = "config_file",
        help = "Disable loading any TOML config file.",
        help_heading = "Project Setup"
    )]
    pub disable_config_file: bool,

    #[arg(
        short = 's',
        long,
        value_name = "STYLE",
        value_parser = HeaderStyle::VARIANTS,
        help = "Header style wrapped around each section.",
        help_heading = "Output Formatting"
    )]
    pub style: Option<String>,

    #[arg(
        long,
        conflicts_with = "disable_footer",
        help = "Include footers for file sections [default].",
        help_heading = "Output Formatting"
    )]
    pub enable_footer: bool,

    #[arg(
        long,
        conflicts_with = "enable_footer",
        help = "Omit footers for file sections.",
        help_heading = "Output Formatting"
    )]
    pub disable_footer: bool,

    #[arg(
        long,
        conflicts_with = "disable_line_numbers",
        help = "Prefix each content line with its number [default].",
        help_heading = "Output Formatting"
    )]
    pub enable_line_numbers: bool,

    #[arg(
        long,
        conflicts_with = "enable_line_numbers",
        help = "Emit file content without line numbers.",
        help_heading = "Output Formatting"
    )]
    pub disable_line_numbers: bool,

    #[arg(
        long,
        value_name = "STRING",
        help = "Separator between line number and content (default: |).",
        help_heading = "Output Formatting"
    )]
    pub number_separator: Option<String>,

    #[arg(
        long,
        conflicts_with = "absolute_paths",
        help = "Render paths relative to DIRECTORY [default].",
        help_heading = "Output Formatting"
    )]
    pub relative_paths: bool,

    #[arg(
        long,
        conflicts_with = "relative_paths",
        help = "Render absolute paths in section headers.",
        help_heading = "Output Formatting"
    )]
    pub absolute_paths: bool,

    #[arg(
        long,
        conflicts_with = "disable_tree",
        help = "Append the directory tree section [default].",
        help_heading = "Output Formatting"
    )]
    pub enable_tree: bool,

    #[arg(
        long,
        conflicts_with = "enable_tree",
        help = "Omit the directory tree section.",
        help_heading = "Output Formatting"
    )]
    pub disable_tree: bool,

    #[arg(
        long,
        conflicts_with = "disable_gitignore",
        help = "Respect .gitignore patterns [default].",
        help_heading = "Ignore Handling"
    )]
    pub enable_gitignore: bool,

    #[arg(
        long,
        conflicts_with = "enable_gitignore",
        help = "Ignore .gitignore patterns.",
        help_heading = "Ignore Handling"
    )]
    pub disable_gitignore: bool,

    #[arg(
        long,
        conflicts_with = "disable_promcatignore",
        help = "Respect .promcatignore patterns [default].",
        help_heading = "Ignore Handling"
    )]
    pub enable_promcatignore: bool,

    #[arg(
        long,
        conflicts_with = "enable_promcatignore",
        help = "Ignore .promcatignore patterns.",
        help_heading = "Ignore Handling"
    )]
    pub disable_promcatignore: bool,

    #[arg(
        long,
        conflicts_with = "disable_default_ignores",
        help = "Apply the built-in default ignores (.git, lockfiles) [default].",
        help_heading = "Ignore Handling"
    )]
    pub enable_default_ignores: bool,

    #[arg(
        long,
        conflicts_with = "enable_default_ignores",
        help = "Skip the built-in default ignores.",
        help_heading = "Ignore Handling"
    )]
    pub disable_default_ignores: bool,

    #[arg(
        long,
        value_name = "SHELL",
        value_enum,
        help = "Generate shell completions to stdout and exit."
    )]
    pub completions: Option<Shell>,

    #[arg(short, long, action = clap::ArgAction::Count, help = "Increase message verbosity (-v, -vv).")]
    pub verbose: u8,

    #[arg(
        short,
        long,
        help = "Silence informational messages and warnings."
    )]
    pub quiet: bool,
}
