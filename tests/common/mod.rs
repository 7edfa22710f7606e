#![allow(dead_code)]

use anyhow::Result;
use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Header of a tab-separated taxonomy export
pub const RAW_HEADER: &str = concat!(
    "taxonID\tidentifier\tdatasetID\tdatasetName\tacceptedNameUsageID\t",
    "parentNameUsageID\ttaxonomicStatus\ttaxonRank\tverbatimTaxonRank\t",
    "scientificName\tkingdom\tphylum\n",
);

/// One data line of a tab-separated export, with filler in the unused columns
pub fn raw_line(id: i64, parent: i64, name: &str) -> String {
    format!(
        "{id}\t{id}\t1000\tCoL\t\t{parent}\taccepted name\tspecies\t\t{name}\tAnimalia\tChordata\n"
    )
}

/// Tab-separated export with header for the given `(id, parent, name)` rows
pub fn create_raw_dump(rows: &[(i64, i64, &str)]) -> String {
    let mut content = String::from(RAW_HEADER);
    for &(id, parent, name) in rows {
        content.push_str(&raw_line(id, parent, name));
    }
    content
}

/// Triples dump for the given `(id, parent, name)` rows
pub fn create_triples_dump(rows: &[(i64, i64, &str)]) -> String {
    rows.iter()
        .map(|(id, parent, name)| format!("{},{},{}\n", id, parent, name))
        .collect()
}

/// A small carnivoran taxonomy
pub fn carnivora_rows() -> Vec<(i64, i64, &'static str)> {
    vec![
        (10, 0, "Biota"),
        (20, 10, "Animalia"),
        (30, 20, "Carnivora"),
        (40, 30, "Canidae"),
        (41, 40, "Canis"),
        (42, 41, "Canis lupus"),
        (43, 41, "Canis latrans"),
        (44, 40, "Vulpes"),
        (45, 44, "Vulpes vulpes"),
        (50, 30, "Felidae"),
        (51, 50, "Felis"),
        (52, 51, "Felis catus"),
    ]
}

pub fn taxoprune_cmd() -> Command {
    Command::cargo_bin("taxoprune").unwrap()
}

/// Setup test environment with temporary directory
pub struct TestEnvironment {
    pub temp_dir: TempDir,
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
}

impl TestEnvironment {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let input_dir = temp_dir.path().join("input");
        let output_dir = temp_dir.path().join("output");

        fs::create_dir_all(&input_dir)?;
        fs::create_dir_all(&output_dir)?;

        Ok(Self {
            temp_dir,
            input_dir,
            output_dir,
        })
    }

    pub fn create_input_file(&self, name: &str, content: &str) -> Result<PathBuf> {
        let path = self.input_dir.join(name);
        fs::write(&path, content)?;
        Ok(path)
    }

    pub fn output_path(&self, name: &str) -> PathBuf {
        self.output_dir.join(name)
    }
}

/// Parse written `id,parent_id,name` lines
pub fn read_records(path: &Path) -> Result<Vec<(i64, i64, String)>> {
    let content = fs::read_to_string(path)?;
    Ok(content
        .lines()
        .map(|line| {
            let mut parts = line.splitn(3, ',');
            let id = parts.next().unwrap().parse().unwrap();
            let parent = parts.next().unwrap().parse().unwrap();
            (id, parent, parts.next().unwrap().to_string())
        })
        .collect())
}
