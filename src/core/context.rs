use std::{
    cell::OnceCell,
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::{Context as _, Result};
use colored::Colorize;
use rayon::prelude::*;
use swc_common::SourceMap;
use tracing::debug;

use super::{SyntaxTree, file_scanner::scan_files, lower_module, parse_source};
use crate::{
    cli::args::CommonArgs,
    config::{CONFIG_FILE_NAME, Config, load_config},
    issues::ParseErrorIssue,
};

/// A source file lowered into the arena tree, with the source map needed to
/// turn spans back into lines and columns.
pub struct LoweredFile {
    pub tree: SyntaxTree,
    pub source_map: Arc<SourceMap>,
}

/// Per-run state: configuration, discovered files, and lazily parsed trees.
///
/// Scanning happens on first access to [`files`](Self::files) and parsing on
/// first access to [`lowered_files`](Self::lowered_files), so commands that
/// only need the config never touch the sources.
pub struct CheckContext {
    pub config: Config,
    pub root_dir: PathBuf,
    /// Config file in effect; `None` when running on defaults.
    pub config_path: Option<PathBuf>,
    pub verbose: bool,

    files: OnceCell<BTreeSet<String>>,
    lowered_files: OnceCell<BTreeMap<String, LoweredFile>>,
    parse_errors: OnceCell<Vec<ParseErrorIssue>>,
}

impl CheckContext {
    /// Load the config found from the source root and scan for source files.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be read, is not valid
    /// JSON, or holds an invalid glob pattern.
    pub fn new(common_args: &CommonArgs) -> Result<Self> {
        let root_dir = common_args
            .source_root
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));

        if !root_dir.is_dir() {
            anyhow::bail!("Source root is not a directory: {}", root_dir.display());
        }

        let loaded = load_config(&root_dir)
            .with_context(|| format!("Failed to load {}", CONFIG_FILE_NAME))?;
        match &loaded.path {
            Some(path) => debug!(path = %path.display(), "loaded config"),
            None => debug!("no {} found, using default configuration", CONFIG_FILE_NAME),
        }

        Ok(Self::with_config(
            loaded.config,
            loaded.path,
            root_dir,
            common_args.verbose,
        ))
    }

    /// Build a context from an already loaded config.
    pub fn with_config(
        config: Config,
        config_path: Option<PathBuf>,
        root_dir: PathBuf,
        verbose: bool,
    ) -> Self {
        Self {
            config,
            root_dir,
            config_path,
            verbose,
            files: OnceCell::new(),
            lowered_files: OnceCell::new(),
            parse_errors: OnceCell::new(),
        }
    }

    /// All source files to analyze, in path order.
    pub fn files(&self) -> &BTreeSet<String> {
        self.files.get_or_init(|| {
            let scan_result = scan_files(
                &self.root_dir,
                &self.config.includes,
                &self.config.ignores,
                self.config.ignore_test_files,
            );

            if scan_result.skipped_count > 0 {
                eprintln!(
                    "{} {} path(s) skipped due to access errors{}",
                    "warning:".bold().yellow(),
                    scan_result.skipped_count,
                    if self.verbose { "" } else { " (use -v for details)" }
                );
            }
            debug!(count = scan_result.files.len(), "source files found");
            scan_result.files
        })
    }

    /// Parsed and lowered tree for every source file that could be read and
    /// parsed.
    ///
    /// Files are read, parsed and lowered in parallel, each with its own
    /// `SourceMap`. Failures are collected into [`parse_errors`](Self::parse_errors).
    pub fn lowered_files(&self) -> &BTreeMap<String, LoweredFile> {
        self.lowered_files.get_or_init(|| {
            let results: Vec<_> = self
                .files()
                .par_iter()
                .map(|file_path| (file_path.clone(), lower_file(file_path)))
                .collect();

            let mut lowered = BTreeMap::new();
            let mut errors = Vec::new();
            for (file_path, result) in results {
                match result {
                    Ok(file) => {
                        lowered.insert(file_path, file);
                    }
                    Err(e) => {
                        debug!(file = %file_path, error = %e, "failed to parse");
                        errors.push(ParseErrorIssue {
                            file_path,
                            error: e.to_string(),
                        });
                    }
                }
            }

            let _ = self.parse_errors.set(errors);
            lowered
        })
    }

    /// Files that could not be read or parsed. Populated by
    /// [`lowered_files`](Self::lowered_files).
    pub fn parse_errors(&self) -> &[ParseErrorIssue] {
        self.lowered_files();
        self.parse_errors.get_or_init(Vec::new)
    }
}

fn lower_file(file_path: &str) -> Result<LoweredFile> {
    let code = std::fs::read_to_string(Path::new(file_path))
        .with_context(|| format!("Failed to read file: {}", file_path))?;
    let parsed = parse_source(code, file_path, Arc::new(SourceMap::default()))?;
    Ok(LoweredFile {
        tree: lower_module(&parsed.module),
        source_map: parsed.source_map,
    })
}
