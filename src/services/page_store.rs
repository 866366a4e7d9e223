use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, error, info, warn};

use crate::errors::WikiError;
use crate::types::Page;
use crate::utils::is_valid_title;

/// Service for loading and saving pages as flat files.
///
/// Each page is one `<title>.txt` file under the data directory. Saves
/// overwrite the whole file; there is no locking, so concurrent saves to the
/// same title race at the filesystem level and the last writer wins.
#[derive(Clone)]
pub struct PageStore {
    data_dir: PathBuf,
}

impl PageStore {
    /// Create a new page store rooted at the given directory
    pub fn new(data_dir: PathBuf) -> Self {
        debug!("Creating PageStore with data directory: {:?}", data_dir);
        Self { data_dir }
    }

    /// Load a page from `<title>.txt`
    pub fn load(&self, title: &str) -> Result<Page, WikiError> {
        let path = self.page_path(title)?;
        debug!("Loading page '{}' from {:?}", title, path);

        match fs::read_to_string(&path) {
            Ok(body) => {
                info!("Loaded page '{}', {} bytes", title, body.len());
                Ok(Page::new(title, body))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                warn!("Page '{}' does not exist", title);
                Err(WikiError::PageNotFound)
            }
            Err(e) => {
                error!("Failed to read page '{}' from {:?}: {}", title, path, e);
                Err(WikiError::Io(e))
            }
        }
    }

    /// Save a page, overwriting any prior content
    pub fn save(&self, page: &Page) -> Result<(), WikiError> {
        let path = self.page_path(&page.title)?;
        debug!("Saving page '{}' to {:?}", page.title, path);

        fs::write(&path, &page.body).map_err(|e| {
            error!("Failed to write page '{}' to {:?}: {}", page.title, path, e);
            WikiError::Io(e)
        })?;

        info!("Saved page '{}', {} bytes", page.title, page.body.len());
        Ok(())
    }

    /// Check if a page exists
    pub fn exists(&self, title: &str) -> bool {
        self.page_path(title).map_or(false, |p| p.is_file())
    }

    /// Resolve the file backing a title, validating the title first.
    ///
    /// The title check runs before any path is built, so a hostile segment
    /// never reaches the filesystem.
    pub fn page_path(&self, title: &str) -> Result<PathBuf, WikiError> {
        if !is_valid_title(title) {
            warn!("Rejected invalid page title: {:?}", title);
            return Err(WikiError::InvalidTitle);
        }
        Ok(self.data_dir.join(format!("{}.txt", title)))
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
