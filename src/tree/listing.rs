use std::io;
use std::path::Path;
use walkdir::WalkDir;

use crate::error::{Result, StructureError};

/// Immediate children of one directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Listing {
    /// Subdirectory names
    pub dirs: Vec<String>,
    /// Everything else: regular files, symlinks, special files
    pub files: Vec<String>,
}

/// Filesystem enumeration used by the renderer.
pub trait DirLister {
    /// List the immediate children of `dir`, in no particular order.
    fn list(&self, dir: &Path) -> Result<Listing>;
}

/// Lists directories from the real filesystem. Links are never followed.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsLister;

impl DirLister for FsLister {
    fn list(&self, dir: &Path) -> Result<Listing> {
        let mut listing = Listing::default();

        let walker = WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(false);

        for result in walker {
            let entry = result.map_err(|err| walk_error(dir, err))?;
            let name = entry.file_name().to_string_lossy().into_owned();

            if entry.file_type().is_dir() {
                listing.dirs.push(name);
            } else {
                listing.files.push(name);
            }
        }

        Ok(listing)
    }
}

fn walk_error(dir: &Path, err: walkdir::Error) -> StructureError {
    let path = err
        .path()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| dir.to_path_buf());
    let source = err
        .into_io_error()
        .unwrap_or_else(|| io::Error::other("filesystem loop detected"));

    StructureError::Io { path, source }
}
