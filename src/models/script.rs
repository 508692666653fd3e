// src/models/script.rs
// the JSON-based turtle script library

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use std::fs;
use std::path::Path;

use std::error::Error;

#[derive(Debug, Serialize, Deserialize)]
pub struct ScriptLibrary {
    pub scripts: HashMap<String, TurtleScript>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TurtleScript {
    pub name: String,
    pub commands: Vec<String>,
}

impl ScriptLibrary {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let content = fs::read_to_string(path)?;
        let library: ScriptLibrary = serde_json::from_str(&content)?;
        Ok(library)
    }

    pub fn get_script(&self, name: &str) -> Option<&TurtleScript> {
        self.scripts.get(name)
    }

    pub fn script_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.scripts.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }
}
