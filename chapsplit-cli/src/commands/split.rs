//! Split command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::FileReader;
use crate::output::{JsonFormatter, OutputFormat, OutputFormatter, TextFormatter};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use chapsplit_core::{SplitConfig, Splitter};
use clap::Parser;
use std::path::PathBuf;

/// Split a translated document into chapter files at `〇` markers
#[derive(Debug, Parser)]
#[command(name = "chapsplit", version, about, long_about = None)]
pub struct SplitArgs {
    /// Preprocessed (untranslated) text with the table of contents, or `-` for stdin
    #[arg(value_name = "PREPROCESSED")]
    pub preprocessed: PathBuf,

    /// Translated text with chapter markers preserved, or `-` for stdin
    #[arg(value_name = "TRANSLATED")]
    pub translated: PathBuf,

    /// Directory for chapter files and the manifest [default: chapters]
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Maximum length of the title part of chapter file names [default: 50]
    #[arg(long, value_name = "N")]
    pub max_title_len: Option<usize>,

    /// Configuration file (TOML)
    #[arg(short, long, value_name = "FILE", env = "CHAPSPLIT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Report format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Show the chapter files that would be written without writing them
    #[arg(long)]
    pub dry_run: bool,

    /// Suppress progress and log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl SplitArgs {
    /// Execute the split command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::info!("Starting chapter split");
        log::debug!("Arguments: {:?}", self);

        let file_config = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };
        let split_config = self.split_config(&file_config)?;
        let format = self
            .format
            .or(file_config.output.format)
            .unwrap_or_default();

        if FileReader::is_stdin(&self.preprocessed) && FileReader::is_stdin(&self.translated) {
            return Err(CliError::ConfigError(
                "only one input can be read from standard input".to_string(),
            )
            .into());
        }
        let preprocessed = FileReader::open(&self.preprocessed)?;
        let translated = FileReader::open(&self.translated)?;

        let splitter = Splitter::new(split_config);
        let prepared = splitter
            .prepare(preprocessed, translated)
            .context("Failed to read inputs")?;
        let report = prepared.report();

        let mut formatter: Box<dyn OutputFormatter> = match format {
            OutputFormat::Text => Box::new(TextFormatter::stdout()),
            OutputFormat::Json => Box::new(JsonFormatter::new(std::io::stdout())),
        };

        if self.dry_run {
            for path in splitter.plan(&prepared) {
                formatter.format_chapter(&path)?;
            }
            formatter.finish(&report, None)?;
            return Ok(());
        }

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_chapters(prepared.segmentation.chapters.len() as u64);

        let written = match splitter.write(&prepared, |path| progress.chapter_written(path)) {
            Ok(written) => written,
            Err(err) => {
                progress.abandon();
                if err.is_partial() {
                    log::error!(
                        "partial split: files already written were left in {}",
                        splitter.config().output_dir().display()
                    );
                }
                return Err(err).context("Failed to write chapters");
            }
        };
        progress.finish();

        for path in &written.chapter_files {
            formatter.format_chapter(path)?;
        }
        formatter.finish(&report, Some(written.manifest.as_path()))?;

        Ok(())
    }

    /// Merge flags over the configuration file over library defaults
    pub fn split_config(&self, file_config: &CliConfig) -> Result<SplitConfig> {
        let section = &file_config.split;
        let mut builder = SplitConfig::builder();

        if let Some(dir) = self.output_dir.as_ref().or(section.output_dir.as_ref()) {
            builder = builder.output_dir(dir);
        }
        if let Some(len) = self.max_title_len.or(section.max_title_len) {
            builder = builder.max_title_len(len);
        }
        if let Some(name) = &section.manifest_name {
            builder = builder.manifest_name(name);
        }
        if let Some(placeholder) = &section.placeholder {
            builder = builder.placeholder(placeholder);
        }

        builder.build().context("Invalid split configuration")
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // A logger may already be installed when run in-process
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }
}
