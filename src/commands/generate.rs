//! Generate static files

use anyhow::Result;
use notify::{RecursiveMode, Watcher};
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

use crate::generator::{GenerateReport, Generator};
use crate::CourseSite;

/// Generate the static site
pub async fn run(site: &CourseSite) -> Result<()> {
    let start = Instant::now();

    let report = generate(site).await?;

    for (section, reason) in &report.failed {
        tracing::warn!("Section {} rendered as error: {}", section, reason);
    }
    tracing::info!(
        "Rendered {} sections ({} failed), copied {} files",
        report.rendered.len(),
        report.failed.len(),
        report.copied_files
    );

    let duration = start.elapsed();
    tracing::info!("Generated in {:.2}s", duration.as_secs_f64());

    Ok(())
}

/// Generate and return the report
pub async fn generate(site: &CourseSite) -> Result<GenerateReport> {
    Generator::new(site)?.generate().await
}

/// Watch the site sources and regenerate on change
pub async fn watch(site: &CourseSite) -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel();

    let mut watcher = notify::recommended_watcher(move |res| {
        if let Ok(event) = res {
            let _ = tx.send(event);
        }
    })?;

    for dir in [&site.data_dir, &site.assets_dir] {
        if dir.exists() {
            watcher.watch(dir, RecursiveMode::Recursive)?;
        }
    }

    let config_path = site.base_dir.join(crate::CONFIG_FILE);
    if config_path.exists() {
        watcher.watch(&config_path, RecursiveMode::NonRecursive)?;
    }

    tracing::info!("Watching for changes. Press Ctrl+C to stop.");

    // Debounce events
    let mut last_rebuild = Instant::now();

    while let Some(event) = rx.recv().await {
        if !is_source_change(site, &event) {
            continue;
        }
        if last_rebuild.elapsed() <= Duration::from_millis(500) {
            continue;
        }

        tracing::info!("File changed, regenerating...");
        // configuration edits may move directories
        match CourseSite::new(&site.base_dir) {
            Ok(site) => {
                if let Err(e) = run(&site).await {
                    tracing::error!("Generation failed: {}", e);
                }
            }
            Err(e) => tracing::error!("Failed to reload configuration: {}", e),
        }
        last_rebuild = Instant::now();
    }

    Ok(())
}

/// Whether a watcher event touches anything the site is built from
fn is_source_change(site: &CourseSite, event: &notify::Event) -> bool {
    let canonical_base = site.base_dir.canonicalize().ok();
    event.paths.iter().any(|path| {
        let relative = path
            .strip_prefix(&site.base_dir)
            .ok()
            .or_else(|| canonical_base.as_deref().and_then(|b| path.strip_prefix(b).ok()))
            .unwrap_or(path);
        let hidden = relative
            .components()
            .any(|c| c.as_os_str().to_string_lossy().starts_with('.'));

        !site.is_output(path) && !hidden
    })
}
