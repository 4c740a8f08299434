//! Folder/tree data file.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::BaryReportError;
use crate::table::{ColumnData, Table};
use crate::Result;

type RawFile = BTreeMap<String, BTreeMap<String, BTreeMap<String, ColumnData>>>;

/// A data file loaded in memory.
#[derive(Debug, Clone)]
pub struct DataFile {
    path: PathBuf,
    folders: BTreeMap<String, Folder>,
}

/// A named folder holding trees.
#[derive(Debug, Clone)]
pub struct Folder {
    name: String,
    trees: BTreeMap<String, Tree>,
}

/// A named tree: equal-length branches of values.
#[derive(Debug, Clone)]
pub struct Tree {
    name: String,
    branches: BTreeMap<String, ColumnData>,
}

impl DataFile {
    /// Read and parse a data file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| BaryReportError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_json(&content, path)
    }

    /// Parse a data file from its JSON text. `path` is only used in messages.
    pub fn from_json(content: &str, path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let raw: RawFile =
            serde_json::from_str(content).map_err(|e| BaryReportError::InvalidData {
                path: path.clone(),
                message: e.to_string(),
            })?;

        let folders = raw
            .into_iter()
            .map(|(folder_name, trees)| {
                let trees = trees
                    .into_iter()
                    .map(|(tree_name, branches)| {
                        let tree = Tree {
                            name: tree_name.clone(),
                            branches,
                        };
                        (tree_name, tree)
                    })
                    .collect();
                let folder = Folder {
                    name: folder_name.clone(),
                    trees,
                };
                (folder_name, folder)
            })
            .collect();

        Ok(Self { path, folders })
    }

    /// Path the file was read from
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Look up a folder by name.
    pub fn folder(&self, name: &str) -> Result<&Folder> {
        self.folders
            .get(name)
            .ok_or_else(|| BaryReportError::FolderNotFound {
                folder: name.to_string(),
                file: self.path.clone(),
            })
    }

    /// All folders, sorted by name
    pub fn folders(&self) -> impl Iterator<Item = &Folder> {
        self.folders.values()
    }
}

impl Folder {
    /// Folder name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Look up a tree by name.
    pub fn tree(&self, name: &str) -> Result<&Tree> {
        self.trees
            .get(name)
            .ok_or_else(|| BaryReportError::TreeNotFound {
                tree: name.to_string(),
                folder: self.name.clone(),
            })
    }

    /// All trees, sorted by name
    pub fn trees(&self) -> impl Iterator<Item = &Tree> {
        self.trees.values()
    }
}

impl Tree {
    /// Tree name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Branch names, sorted
    pub fn branch_names(&self) -> Vec<&str> {
        self.branches.keys().map(String::as_str).collect()
    }

    /// Number of branches
    pub fn branch_count(&self) -> usize {
        self.branches.len()
    }

    /// Number of entries (longest branch; 0 for a tree without branches)
    pub fn entries(&self) -> usize {
        self.branches.values().map(ColumnData::len).max().unwrap_or(0)
    }

    /// Extract the named branches into a [`Table`].
    ///
    /// `columns` must include `run`; every branch must have one value per run.
    pub fn to_table<S: AsRef<str>>(&self, columns: &[S]) -> Result<Table> {
        let selected = columns
            .iter()
            .map(|column| {
                let column = column.as_ref();
                self.branches
                    .get(column)
                    .map(|data| (column.to_string(), data.clone()))
                    .ok_or_else(|| BaryReportError::BranchNotFound {
                        branch: column.to_string(),
                        tree: self.name.clone(),
                    })
            })
            .collect::<Result<Vec<_>>>()?;
        Table::from_columns(selected)
    }
}
