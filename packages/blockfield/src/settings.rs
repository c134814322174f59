
use std::{
    path::Path,
    fs::File,
    io::{
        BufReader,
        BufWriter,
    },
};
use serde::{Serialize, Deserialize};
use anyhow::*;


pub const SETTINGS_FILE_NAME: &'static str = "settings.json";


/// User-tunable game settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Multiplier on look-stick sensitivity.
    pub look_sensitivity: f32,
    pub invert_look_y: bool,
    /// Whether the field starts with the debug overlay shown.
    pub show_debug: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            look_sensitivity: 1.0,
            invert_look_y: false,
            show_debug: false,
        }
    }
}

impl Settings {
    pub fn read(path: impl AsRef<Path>) -> Self {
        Self::try_read(path).unwrap_or_default()
    }

    pub fn try_read(path: impl AsRef<Path>) -> Result<Self> {
        Ok(serde_json::from_reader(BufReader::new(File::open(path)?))?)
    }

    pub fn write(&self, path: impl AsRef<Path>) -> Result<()> {
        serde_json::to_writer_pretty(BufWriter::new(File::create(path)?), self)?;
        Ok(())
    }
}


#[test]
fn test_settings_round_trip() {
    let dir = std::env::temp_dir().join("blockfield_settings_test");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join(SETTINGS_FILE_NAME);

    let settings = Settings {
        look_sensitivity: 2.5,
        invert_look_y: true,
        show_debug: true,
    };
    settings.write(&path).unwrap();
    let read = Settings::try_read(&path).unwrap();
    assert_eq!(read.look_sensitivity, 2.5);
    assert!(read.invert_look_y);
    assert!(read.show_debug);
}

#[test]
fn test_missing_file_falls_back_to_default() {
    let settings = Settings::read("/nonexistent/blockfield/settings.json");
    assert_eq!(settings.look_sensitivity, 1.0);
    assert!(!settings.invert_look_y);
}
