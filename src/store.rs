//! Saved palette library
//!
//! The engine never touches storage; callers inject a [`PaletteRepository`].
//! [`JsonFileStore`] keeps the whole library in one JSON file, rewritten on
//! every change. [`MemoryStore`] backs tests and throwaway sessions.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::engine::{ColorSpacePoint, Palette};
use crate::error::{LuxError, Result};

/// A palette stored under a user-chosen name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedPalette {
    pub id: String,
    pub name: String,
    pub colors: Vec<ColorSpacePoint>,
}

impl SavedPalette {
    pub fn palette(&self) -> Palette {
        Palette::new(self.colors.clone())
    }
}

/// Direction for [`PaletteRepository::move_palette`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Direction {
    Up,
    Down,
}

/// Storage for saved palettes, in display order
pub trait PaletteRepository {
    /// All saved palettes
    fn load(&self) -> Result<Vec<SavedPalette>>;

    /// Replace the whole library
    fn store(&mut self, palettes: &[SavedPalette]) -> Result<()>;

    /// Append `palette` under `name` and return the stored entry
    fn save(&mut self, name: &str, palette: &Palette) -> Result<SavedPalette> {
        let mut palettes = self.load()?;
        let saved = SavedPalette {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            colors: palette.colors().to_vec(),
        };
        palettes.push(saved.clone());
        self.store(&palettes)?;
        Ok(saved)
    }

    fn delete(&mut self, id: &str) -> Result<()> {
        let mut palettes = self.load()?;
        let index = find_index(&palettes, id)?;
        palettes.remove(index);
        self.store(&palettes)
    }

    fn rename(&mut self, id: &str, name: &str) -> Result<()> {
        let mut palettes = self.load()?;
        let index = find_index(&palettes, id)?;
        palettes[index].name = name.to_string();
        self.store(&palettes)
    }

    /// Swap with the neighbour in `direction`. Moving past either end does nothing.
    fn move_palette(&mut self, id: &str, direction: Direction) -> Result<()> {
        let mut palettes = self.load()?;
        let index = find_index(&palettes, id)?;
        let target = match direction {
            Direction::Up if index > 0 => index - 1,
            Direction::Down if index + 1 < palettes.len() => index + 1,
            _ => return Ok(()),
        };
        palettes.swap(index, target);
        self.store(&palettes)
    }
}

fn find_index(palettes: &[SavedPalette], id: &str) -> Result<usize> {
    palettes
        .iter()
        .position(|p| p.id == id)
        .ok_or_else(|| LuxError::NotFound(format!("no saved palette with id {}", id)))
}

/// Library persisted as a JSON array in a single file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PaletteRepository for JsonFileStore {
    fn load(&self) -> Result<Vec<SavedPalette>> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => {
                let palettes: Vec<SavedPalette> = serde_json::from_str(&contents)?;
                debug!(path = %self.path.display(), count = palettes.len(), "loaded palette library");
                Ok(palettes)
            }
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(path = %self.path.display(), "palette library not found; starting empty");
                Ok(Vec::new())
            }
            Err(err) => Err(err.into()),
        }
    }

    fn store(&mut self, palettes: &[SavedPalette]) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(palettes)?;
        fs::write(&self.path, json)?;
        debug!(path = %self.path.display(), count = palettes.len(), "wrote palette library");
        Ok(())
    }
}

/// In-process library
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    palettes: Vec<SavedPalette>,
}

impl PaletteRepository for MemoryStore {
    fn load(&self) -> Result<Vec<SavedPalette>> {
        Ok(self.palettes.clone())
    }

    fn store(&mut self, palettes: &[SavedPalette]) -> Result<()> {
        self.palettes = palettes.to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{AnchorPath, PositionFunctions, generate};
    use tempfile::TempDir;

    fn sample_palette(seed: u64) -> Palette {
        generate(&AnchorPath::random_seeded(seed), 4, PositionFunctions::default()).unwrap()
    }

    fn names(repo: &impl PaletteRepository) -> Vec<String> {
        repo.load().unwrap().into_iter().map(|p| p.name).collect()
    }

    #[test]
    fn test_save_and_load() {
        let mut repo = MemoryStore::default();
        let palette = sample_palette(1);
        let saved = repo.save("Dusk", &palette).unwrap();

        let loaded = repo.load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0], saved);
        assert_eq!(loaded[0].palette(), palette);
    }

    #[test]
    fn test_ids_are_unique() {
        let mut repo = MemoryStore::default();
        let a = repo.save("a", &sample_palette(1)).unwrap();
        let b = repo.save("b", &sample_palette(2)).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_delete_and_rename() {
        let mut repo = MemoryStore::default();
        let a = repo.save("a", &sample_palette(1)).unwrap();
        let b = repo.save("b", &sample_palette(2)).unwrap();

        repo.rename(&b.id, "renamed").unwrap();
        repo.delete(&a.id).unwrap();
        assert_eq!(names(&repo), vec!["renamed"]);

        assert!(matches!(repo.delete(&a.id), Err(LuxError::NotFound(_))));
        assert!(matches!(repo.rename("missing", "x"), Err(LuxError::NotFound(_))));
    }

    #[test]
    fn test_move_palette() {
        let mut repo = MemoryStore::default();
        let a = repo.save("a", &sample_palette(1)).unwrap();
        repo.save("b", &sample_palette(2)).unwrap();
        let c = repo.save("c", &sample_palette(3)).unwrap();

        repo.move_palette(&c.id, Direction::Up).unwrap();
        assert_eq!(names(&repo), vec!["a", "c", "b"]);

        repo.move_palette(&a.id, Direction::Down).unwrap();
        assert_eq!(names(&repo), vec!["c", "a", "b"]);

        // Already at the edges
        repo.move_palette(&c.id, Direction::Up).unwrap();
        assert_eq!(names(&repo), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_json_store_missing_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let repo = JsonFileStore::new(temp_dir.path().join("nope.json"));
        assert!(repo.load().unwrap().is_empty());
    }

    #[test]
    fn test_json_store_persists_across_instances() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("library").join("palettes.json");

        let mut repo = JsonFileStore::new(&path);
        let saved = repo.save("Linen", &sample_palette(5)).unwrap();

        let reopened = JsonFileStore::new(&path);
        let loaded = reopened.load().unwrap();
        assert_eq!(loaded, vec![saved]);

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"Linen\""));
    }

    #[test]
    fn test_json_store_rejects_corrupt_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("palettes.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(matches!(JsonFileStore::new(&path).load(), Err(LuxError::Json(_))));
    }
}
