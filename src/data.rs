use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};
use rand::RngCore;

use crate::config::BenchConfig;
use crate::Result;

/// One benchmark input, read fully into memory once and shared read-only by
/// every sample taken against it.
#[derive(Debug, Clone)]
pub struct TestFile {
    pub label: String,
    pub size_bytes: usize,
    pub content: Vec<u8>,
}

/// Creates the data directory and one `<label>.bin` file of random bytes per
/// configured size. Existing files are left untouched.
pub fn ensure_data_files(config: &BenchConfig) -> Result<()> {
    fs::create_dir_all(&config.data_dir)?;
    for size in &config.sizes {
        let path = data_path(&config.data_dir, &size.label);
        if path.exists() {
            continue;
        }
        info!(
            "Generating {} ({} bytes) at {}",
            size.label,
            size.bytes,
            path.display()
        );
        let mut content = vec![0u8; size.bytes];
        rand::thread_rng().fill_bytes(&mut content);
        fs::write(&path, &content)?;
    }
    Ok(())
}

pub fn load_test_files(config: &BenchConfig) -> Result<Vec<TestFile>> {
    let mut files = Vec::with_capacity(config.sizes.len());
    for size in &config.sizes {
        let path = data_path(&config.data_dir, &size.label);
        let content = fs::read(&path)?;
        debug!("Loaded {} ({} bytes)", path.display(), content.len());
        files.push(TestFile {
            label: size.label.clone(),
            size_bytes: content.len(),
            content,
        });
    }
    Ok(files)
}

fn data_path(dir: &Path, label: &str) -> PathBuf {
    dir.join(format!("{}.bin", label))
}
