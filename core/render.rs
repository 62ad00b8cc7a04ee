use crate::error::AppError;
use crate::format::{HeaderStyle, format_file_section, format_tree_section};
use crate::gather::FileCollection;
use crate::tree::generate_tree;
use rayon::prelude::*;
use std::fs;

/// Formatting options for one render pass, resolved from config and CLI.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub style: HeaderStyle,
    pub footer: bool,
    pub line_numbers: bool,
    pub number_separator: String,
    pub relative_paths: bool,
    pub tree: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            style: HeaderStyle::default(),
            footer: true,
            line_numbers: true,
            number_separator: "|".to_string(),
            relative_paths: true,
            tree: true,
        }
    }
}

/// Concatenates every text file in the collection into one output string,
/// appending the directory tree section when enabled.
///
/// Files are read and formatted in parallel but assembled in the collection's
/// sorted order; the ordering is part of the output contract. A file that
/// fails to read (or is not valid UTF-8) is reported on stderr and skipped —
/// it still appears in the tree, which lists `all_files`.
pub fn render_collection(collection: &FileCollection, options: &RenderOptions, quiet: bool) -> String {
    log::info!(
        "Rendering {} text files ({} style)",
        collection.text_files().len(),
        options.style
    );

    let sections: Vec<Result<String, AppError>> = collection
        .text_files()
        .par_iter()
        .map(|relative| {
            let absolute = collection.absolute(relative);
            let path_str = if options.relative_paths {
                relative.display().to_string()
            } else {
                absolute.display().to_string()
            };

            let content = fs::read_to_string(&absolute).map_err(|source| AppError::FileRead {
                path: absolute.clone(),
                source,
            })?;

            Ok(format_file_section(
                &path_str,
                &content,
                options.style,
                options.footer,
                options.line_numbers,
                &options.number_separator,
            ))
        })
        .collect();

    let mut result = String::new();
    let mut read_errors: Vec<AppError> = Vec::new();
    for section in sections {
        match section {
            Ok(section) => result.push_str(&section),
            Err(e) => read_errors.push(e),
        }
    }

    if options.tree {
        let tree = generate_tree(collection.all_files());
        result.push_str(&format_tree_section(&tree, options.style));
    }

    if !read_errors.is_empty() && !quiet {
        use colored::Colorize;
        eprintln!(
            "\n{}",
            "Warning: Errors encountered during file reading:".yellow()
        );
        for err in &read_errors {
            eprintln!(" - {}", err);
        }
        eprintln!("---");
    }

    result
}
