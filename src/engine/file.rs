//! Keyed-object persistence container.
//!
//! A container maps string keys to serialized engine objects. `Recreate`
//! truncates at open and flushes on close; `Read` loads the whole map at
//! open. A container whose payload cannot be decoded opens as a zombie
//! handle rather than failing outright, so callers can distinguish a
//! missing file from an unusable one.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{HistPrimitive, PlotPrimitive};
use crate::error::{LarmorError, Result};

/// Open mode for a keyed-object container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileMode {
    /// Open an existing container for retrieval only.
    Read,
    /// Create or truncate the container for writing.
    Recreate,
}

/// An object stored in a container.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum EngineObject {
    /// A plot primitive.
    Plot(PlotPrimitive),
    /// A histogram primitive.
    Hist(HistPrimitive),
}

impl EngineObject {
    /// View as a plot primitive, if it is one.
    pub fn as_plot(&self) -> Option<&PlotPrimitive> {
        match self {
            Self::Plot(plot) => Some(plot),
            Self::Hist(_) => None,
        }
    }

    /// View as a histogram primitive, if it is one.
    pub fn as_hist(&self) -> Option<&HistPrimitive> {
        match self {
            Self::Hist(hist) => Some(hist),
            Self::Plot(_) => None,
        }
    }
}

/// A keyed-object container handle.
#[derive(Debug)]
pub struct KeyedFile {
    path: PathBuf,
    mode: FileMode,
    objects: BTreeMap<String, EngineObject>,
    zombie: bool,
    open: bool,
}

impl KeyedFile {
    /// Open a container at `path` in the given mode.
    pub fn open(path: impl AsRef<Path>, mode: FileMode) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        match mode {
            FileMode::Read => {
                let payload = fs::read_to_string(&path)
                    .map_err(|err| LarmorError::file_open(path.clone(), err))?;
                match serde_json::from_str(&payload) {
                    Ok(objects) => {
                        debug!("opened container {} for reading", path.display());
                        Ok(Self {
                            path,
                            mode,
                            objects,
                            zombie: false,
                            open: true,
                        })
                    }
                    Err(err) => {
                        warn!("container {} is unreadable: {err}", path.display());
                        Ok(Self {
                            path,
                            mode,
                            objects: BTreeMap::new(),
                            zombie: true,
                            open: true,
                        })
                    }
                }
            }
            FileMode::Recreate => {
                fs::File::create(&path).map_err(|err| LarmorError::file_open(path.clone(), err))?;
                debug!("recreated container {}", path.display());
                Ok(Self {
                    path,
                    mode,
                    objects: BTreeMap::new(),
                    zombie: false,
                    open: true,
                })
            }
        }
    }

    /// Path this container was opened at.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the container opened into an unusable state.
    pub fn is_zombie(&self) -> bool {
        self.zombie
    }

    /// Retrieve an object by key.
    pub fn get(&self, name: &str) -> Option<&EngineObject> {
        self.objects.get(name)
    }

    /// Keys currently present in the container.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.objects.keys().map(String::as_str)
    }

    /// Store an object under a key, replacing any previous entry.
    pub fn put(&mut self, name: &str, object: EngineObject) -> Result<()> {
        if self.mode != FileMode::Recreate {
            return Err(LarmorError::invalid_config(format!(
                "container {} is read-only",
                self.path.display()
            )));
        }
        if self.zombie {
            return Err(LarmorError::InvalidFile {
                path: self.path.clone(),
            });
        }
        debug!("writing '{}' to {}", name, self.path.display());
        self.objects.insert(name.to_string(), object);
        Ok(())
    }

    /// Flush (in `Recreate` mode) and release the container.
    pub fn close(&mut self) -> Result<()> {
        if !self.open {
            return Ok(());
        }
        self.open = false;
        if self.mode == FileMode::Recreate && !self.zombie {
            let payload = serde_json::to_string_pretty(&self.objects)?;
            fs::write(&self.path, payload)?;
        }
        Ok(())
    }
}

impl Drop for KeyedFile {
    fn drop(&mut self) {
        if self.open {
            if let Err(err) = self.close() {
                warn!("failed to close container {}: {err}", self.path.display());
            }
        }
    }
}
