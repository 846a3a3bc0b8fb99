//! Generator module - pre-renders every section into a static site

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::loader::{ContentLoader, FsFetcher};
use crate::render::fragments::ERROR;
use crate::section::Section;
use crate::templates::{ShellData, TemplateRenderer};
use crate::CourseSite;

/// Directory under the public dir holding one fragment per section
pub const SECTIONS_DIR: &str = "sections";

/// What a generation pass produced
#[derive(Debug, Default)]
pub struct GenerateReport {
    pub rendered: Vec<Section>,
    /// Sections written as the error fragment, with the reason
    pub failed: Vec<(Section, String)>,
    pub copied_files: usize,
}

/// Static site generator
pub struct Generator {
    site: CourseSite,
    loader: ContentLoader<FsFetcher>,
    renderer: TemplateRenderer,
}

impl Generator {
    /// Create a new generator
    pub fn new(site: &CourseSite) -> Result<Self> {
        Ok(Self {
            site: site.clone(),
            loader: site.loader(),
            renderer: TemplateRenderer::new()?,
        })
    }

    /// Generate the entire site
    pub async fn generate(&self) -> Result<GenerateReport> {
        let public_dir = &self.site.public_dir;
        fs::create_dir_all(public_dir.join(SECTIONS_DIR))?;

        let mut report = GenerateReport::default();

        // Section fragments
        for section in Section::ALL {
            let html = match self.loader.load(section).await {
                Ok(html) => {
                    report.rendered.push(section);
                    html
                }
                Err(e) => {
                    tracing::error!("Error loading section {}: {}", section, e);
                    report.failed.push((section, e.to_string()));
                    ERROR.to_string()
                }
            };

            let output_path = public_dir
                .join(SECTIONS_DIR)
                .join(format!("{}.html", section.id()));
            fs::write(&output_path, html)?;
            tracing::debug!("Generated {:?}", output_path);
        }

        // Page shell
        self.generate_shell()?;

        // Data files and assets, so downloads and photos resolve. Either may
        // be the site root, which holds the output and the config.
        let skip = [
            public_dir.clone(),
            self.site.base_dir.join(crate::CONFIG_FILE),
        ];
        report.copied_files += copy_dir(
            &self.site.data_dir,
            &public_dir.join(&self.site.config.data_dir),
            &skip,
        )?;
        report.copied_files += copy_dir(
            &self.site.assets_dir,
            &public_dir.join(&self.site.config.assets_dir),
            &skip,
        )?;

        Ok(report)
    }

    /// Generate index.html
    fn generate_shell(&self) -> Result<()> {
        let generated_at = chrono::Local::now().format("%Y-%m-%d %H:%M").to_string();
        let data = ShellData::new(&self.site.config, generated_at)?;
        let html = self.renderer.render_shell(&data)?;

        let output_path = self.site.public_dir.join("index.html");
        fs::write(&output_path, html)?;
        tracing::info!("Generated index.html");

        Ok(())
    }
}

/// Copy every file under `from` into `to`, returning the number of files
///
/// Hidden entries and anything in `skip` are left out, along with their
/// contents.
fn copy_dir(from: &Path, to: &Path, skip: &[PathBuf]) -> Result<usize> {
    if !from.exists() {
        tracing::debug!("Skipping missing directory {:?}", from);
        return Ok(0);
    }

    let mut copied = 0;
    for entry in WalkDir::new(from)
        .follow_links(true)
        .into_iter()
        .filter_entry(|e| {
            e.depth() == 0 || !(is_hidden(e) || skip.iter().any(|p| e.path() == p))
        })
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let relative = path.strip_prefix(from)?;
        let dest = to.join(relative);
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(path, &dest)?;
        copied += 1;
    }

    Ok(copied)
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}
