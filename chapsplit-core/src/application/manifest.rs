//! Chapter file and manifest persistence

use crate::config::SplitConfig;
use crate::domain::{sanitize, ChapterUnit};
use crate::error::{Result, SplitError};
use log::{info, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// First line of every manifest
pub const DISCLAIMER: &str =
    "EXPERIMENTAL CHAPTER SPLIT - Please report any perceived issues to your translation head";

const RAW_HEADING: &str = "Raw chapters detected from preprocessed text:";
const SPLIT_HEADING: &str = "Chapters split from translated text:";

/// Summary listing raw titles next to the chapters actually split out
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    /// Titles harvested from the preprocessed table of contents
    pub raw_titles: Vec<String>,
    /// `NN. title` for every chapter, in order
    pub entries: Vec<String>,
}

impl Manifest {
    /// Build a manifest from raw titles and chapters
    pub fn new(raw_titles: &[String], chapters: &[ChapterUnit]) -> Self {
        Self {
            raw_titles: raw_titles.to_vec(),
            entries: chapters.iter().map(ChapterUnit::listing_entry).collect(),
        }
    }

    /// Manifest file contents
    pub fn render(&self) -> String {
        format!(
            "{DISCLAIMER}\n\n{RAW_HEADING}\n{}\n\n{SPLIT_HEADING}\n{}",
            self.raw_titles.join("\n"),
            self.entries.join("\n")
        )
    }
}

/// File name for a chapter: `NN_<sanitized title>.txt`.
///
/// Titles that sanitize to nothing use `placeholder` instead.
pub fn chapter_file_name(chapter: &ChapterUnit, max_title_len: usize, placeholder: &str) -> String {
    let mut name = sanitize(&chapter.title, max_title_len);
    if name.is_empty() {
        warn!(
            "chapter {:02} title {:?} has no usable characters, using '{}'",
            chapter.sequence, chapter.title, placeholder
        );
        name = placeholder.to_string();
    }
    format!("{:02}_{}.txt", chapter.sequence, name)
}

/// Paths produced by a successful write
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenSplit {
    /// One file per chapter, in chapter order
    pub chapter_files: Vec<PathBuf>,
    /// The manifest file
    pub manifest: PathBuf,
}

/// Writes chapter files and the manifest into the configured directory
#[derive(Debug, Clone)]
pub struct ManifestWriter<'a> {
    config: &'a SplitConfig,
}

impl<'a> ManifestWriter<'a> {
    /// Create a writer for `config`
    pub fn new(config: &'a SplitConfig) -> Self {
        Self { config }
    }

    /// Where each chapter would be written, without touching the disk
    pub fn plan(&self, chapters: &[ChapterUnit]) -> Vec<PathBuf> {
        chapters
            .iter()
            .map(|chapter| self.chapter_path(chapter))
            .collect()
    }

    fn chapter_path(&self, chapter: &ChapterUnit) -> PathBuf {
        self.config.output_dir().join(chapter_file_name(
            chapter,
            self.config.max_title_len(),
            self.config.placeholder(),
        ))
    }

    /// Write every chapter, then the manifest
    pub fn write(&self, raw_titles: &[String], chapters: &[ChapterUnit]) -> Result<WrittenSplit> {
        self.write_with_progress(raw_titles, chapters, |_| {})
    }

    /// Like [`ManifestWriter::write`], calling `on_chapter` after each chapter file.
    ///
    /// The manifest is written only once all chapter files are on disk. A
    /// failure part way leaves earlier files in place. A manifest name that
    /// collides with a chapter file is rejected before anything is written.
    pub fn write_with_progress<F>(
        &self,
        raw_titles: &[String],
        chapters: &[ChapterUnit],
        mut on_chapter: F,
    ) -> Result<WrittenSplit>
    where
        F: FnMut(&Path),
    {
        let planned = self.plan(chapters);
        let manifest = self.config.manifest_path();
        if let Some(clash) = planned.iter().find(|path| **path == manifest) {
            return Err(SplitError::Configuration(format!(
                "manifest name '{}' collides with chapter file {}",
                self.config.manifest_name(),
                clash.display()
            )));
        }

        let output_dir = self.config.output_dir();
        fs::create_dir_all(output_dir).map_err(|e| SplitError::io(output_dir, e))?;

        let total = chapters.len();
        let mut chapter_files = Vec::with_capacity(total);
        for (chapter, path) in chapters.iter().zip(planned) {
            if let Err(source) = fs::write(&path, chapter.content()) {
                return Err(partial_split(chapter_files.len(), total, path, source));
            }
            on_chapter(&path);
            chapter_files.push(path);
        }

        let contents = Manifest::new(raw_titles, chapters).render();
        if let Err(source) = fs::write(&manifest, contents) {
            return Err(partial_split(total, total, manifest, source));
        }

        info!(
            "wrote {} chapter files and {} to {}",
            total,
            self.config.manifest_name(),
            output_dir.display()
        );

        Ok(WrittenSplit {
            chapter_files,
            manifest,
        })
    }
}

fn partial_split(
    written: usize,
    total: usize,
    path: PathBuf,
    source: std::io::Error,
) -> SplitError {
    warn!(
        "partial split: {} of {} chapter files written before {} failed",
        written,
        total,
        path.display()
    );
    SplitError::PartialSplit {
        written,
        total,
        path,
        source,
    }
}

/// Write chapters and manifest into `output_dir` with default settings
pub fn write_split(
    output_dir: impl Into<PathBuf>,
    raw_titles: &[String],
    chapters: &[ChapterUnit],
) -> Result<WrittenSplit> {
    let config = SplitConfig::builder().output_dir(output_dir).build()?;
    ManifestWriter::new(&config).write(raw_titles, chapters)
}
