use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context as _, Result, anyhow};
use colored::Colorize;
use rayon::prelude::*;

use crate::{
    cli::args::CheckArgs,
    config::{Config, load_config},
    core::{
        SourceContext,
        dispatch::run_rule,
        file_scanner::scan_files,
        parsers::jsx::{ParsedSource, parse_source},
    },
    issues::{Issue, ParseErrorIssue, SpacedCommentIssue},
    rules::spaced_comment::SpacedComment,
};

/// Analysis context for one `check` run.
///
/// Construction does all the fallible setup up front: config loading, CLI
/// overrides, rule compilation and file scanning. A context that exists is
/// ready to check files.
///
/// # Configuration Priority
///
/// 1. CLI arguments (`--mode`, `--exception`, positional paths)
/// 2. `.spacedcommentrc.json` config file
/// 3. Built-in defaults
pub struct CheckContext {
    /// Merged configuration (CLI args > config file > defaults).
    pub config: Config,

    /// Project root directory (where the config search started).
    pub root_dir: PathBuf,

    /// All source files to analyze.
    pub files: Vec<String>,

    /// Compiled rule, shared read-only by all worker threads.
    pub rule: SpacedComment,
}

impl CheckContext {
    /// Create a new `CheckContext` from command line arguments.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Config file cannot be read or is invalid
    /// - Rule options are invalid
    pub fn new(args: &CheckArgs) -> Result<Self> {
        let root_dir = args
            .source_root
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));

        let path = root_dir
            .to_str()
            .with_context(|| anyhow!("Invalid path: {:?}", root_dir))?;

        let config_result = load_config(Path::new(path))?;
        match &config_result.path {
            Some(config_path) => log::debug!("Using config file {}", config_path.display()),
            None => log::info!("No config file found, using default configuration"),
        }

        let mut config = config_result.config;

        if let Some(mode) = args.mode {
            config.spaced_comment.mode = mode;
        }
        if !args.exceptions.is_empty() {
            config.spaced_comment.exceptions = Some(args.exceptions.clone());
        }
        if !args.paths.is_empty() {
            config.includes = args
                .paths
                .iter()
                .map(|p| p.to_string_lossy().to_string())
                .collect();
        }

        let rule = SpacedComment::new(&config.spaced_comment)
            .context("Invalid options for rule 'spaced-comment'")?;
        log::debug!(
            "spaced-comment options: {}",
            config.spaced_comment.to_value()
        );

        let scan_result = scan_files(path, &config.includes, &config.ignores);

        if scan_result.skipped_count > 0 {
            eprintln!(
                "{} {} path(s) skipped due to access errors{}",
                "warning:".bold().yellow(),
                scan_result.skipped_count,
                if args.common.verbose {
                    ""
                } else {
                    " (use -v for details)"
                }
            );
        }

        Ok(Self {
            config,
            root_dir,
            files: scan_result.files,
            rule,
        })
    }

    /// Parse every file and run the rule over its comments.
    ///
    /// Files are read and parsed in parallel; each gets its own SourceMap.
    /// Files that cannot be read or parsed become parse-error issues and do
    /// not stop the run.
    pub fn check_files(&self) -> Vec<Issue> {
        self.files
            .par_iter()
            .flat_map_iter(|file_path| match self.check_file(file_path) {
                Ok(issues) => issues,
                Err(e) => {
                    log::info!("Skipping {}: {:#}", file_path, e);
                    vec![Issue::ParseError(ParseErrorIssue {
                        file_path: file_path.clone(),
                        error: format!("{:#}", e),
                    })]
                }
            })
            .collect()
    }

    fn check_file(&self, file_path: &str) -> Result<Vec<Issue>> {
        let code = std::fs::read_to_string(file_path)
            .with_context(|| format!("Failed to read file: {}", file_path))?;
        let source_map = Arc::new(swc_common::SourceMap::default());
        let parsed = parse_source(&code, file_path, source_map)?;
        Ok(check_parsed(&self.rule, &parsed))
    }
}

/// Run the rule over an already parsed file and convert diagnostics to issues.
pub fn check_parsed(rule: &SpacedComment, parsed: &ParsedSource) -> Vec<Issue> {
    run_rule(rule, &parsed.comments)
        .into_iter()
        .map(|diagnostic| {
            let location = diagnostic.node.location.clone();
            let source_line = parsed.source_line(location.line).to_string();
            Issue::SpacedComment(SpacedCommentIssue {
                context: SourceContext::new(location, source_line),
                message: diagnostic.message,
            })
        })
        .collect()
}
