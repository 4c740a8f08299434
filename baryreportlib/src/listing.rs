//! Listings of data file content.

use serde::Serialize;
use std::fmt;

use crate::source::{DataFile, Tree};

/// Class name reported for every tree
pub const TREE_CLASS: &str = "TTree";

/// One line of a content listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeSummary {
    /// Object class
    pub class_name: &'static str,
    /// Folder holding the tree
    pub folder: String,
    /// Tree name
    pub tree: String,
    /// Number of branches
    pub branches: usize,
    /// Number of entries
    pub entries: usize,
}

impl fmt::Display for TreeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}/{}\t{} branches, {} entries",
            self.class_name, self.folder, self.tree, self.branches, self.entries
        )
    }
}

/// Summarise every tree in every folder.
pub fn list_content(file: &DataFile) -> Vec<TreeSummary> {
    file.folders()
        .flat_map(|folder| {
            folder.trees().map(move |tree| TreeSummary {
                class_name: TREE_CLASS,
                folder: folder.name().to_string(),
                tree: tree.name().to_string(),
                branches: tree.branch_count(),
                entries: tree.entries(),
            })
        })
        .collect()
}

/// Branch names of a tree.
pub fn list_branches(tree: &Tree) -> Vec<&str> {
    tree.branch_names()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_file() -> DataFile {
        DataFile::from_json(
            r#"{
                "PixelBaryCentreAnalyzer": {
                    "BeamSpot": {"run": [1, 2, 3], "BS.x": [0.1, 0.2, 0.3]},
                    "PixelBarycentre": {"run": [1], "BPIX.x": [0.1], "FPIX.x": [0.2]}
                },
                "PixelBaryCentreAnalyzerWithPixelQuality": {
                    "BeamSpot": {"run": [1], "BS.x": [0.1]}
                }
            }"#,
            "sample.json",
        )
        .unwrap()
    }

    #[test]
    fn test_list_content_covers_all_folders() {
        let content = list_content(&sample_file());
        assert_eq!(content.len(), 3);
        assert_eq!(
            content[0].to_string(),
            "TTree\tPixelBaryCentreAnalyzer/BeamSpot\t2 branches, 3 entries"
        );
        assert_eq!(content[1].tree, "PixelBarycentre");
        assert_eq!(content[1].branches, 3);
        assert_eq!(content[2].folder, "PixelBaryCentreAnalyzerWithPixelQuality");
    }

    #[test]
    fn test_list_branches() {
        let file = sample_file();
        let tree = file
            .folder("PixelBaryCentreAnalyzer")
            .unwrap()
            .tree("PixelBarycentre")
            .unwrap();
        assert_eq!(list_branches(tree), vec!["BPIX.x", "FPIX.x", "run"]);
    }
}
