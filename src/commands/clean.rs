//! Clean the public directory

use anyhow::Result;
use std::fs;

use crate::CourseSite;

/// Remove the generated site
pub fn run(site: &CourseSite) -> Result<()> {
    if site.public_dir.exists() {
        fs::remove_dir_all(&site.public_dir)?;
        tracing::info!("Deleted: {:?}", site.public_dir);
    } else {
        tracing::debug!("Nothing to clean at {:?}", site.public_dir);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_clean_removes_public() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("public/sections")).unwrap();
        fs::write(dir.path().join("public/index.html"), "").unwrap();

        let site = CourseSite::new(dir.path()).unwrap();
        run(&site).unwrap();
        assert!(!dir.path().join("public").exists());

        // cleaning twice is fine
        run(&site).unwrap();
    }
}
