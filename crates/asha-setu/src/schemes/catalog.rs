use std::collections::HashSet;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use tracing::info;

use super::domain::Program;

const BUNDLED_CATALOG: &str = include_str!("../../data/schemes.json");

/// Errors raised while loading the scheme catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read scheme catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid scheme catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("scheme catalog lists '{0}' more than once")]
    DuplicateProgram(String),
}

/// Immutable, cheaply cloneable handle to the loaded programs.
#[derive(Debug, Clone)]
pub struct Catalog {
    programs: Arc<[Program]>,
}

impl Catalog {
    pub fn from_programs(programs: Vec<Program>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(programs.len());
        for program in &programs {
            if !seen.insert(program.name.as_str()) {
                return Err(CatalogError::DuplicateProgram(program.name.clone()));
            }
        }

        Ok(Self {
            programs: programs.into(),
        })
    }

    /// Catalog compiled into the library.
    pub fn bundled() -> Result<Self, CatalogError> {
        CatalogLoader::from_reader(BUNDLED_CATALOG.as_bytes())
    }

    pub fn programs(&self) -> &[Program] {
        &self.programs
    }

    pub fn get(&self, name: &str) -> Option<&Program> {
        self.programs.iter().find(|program| program.name == name)
    }

    pub fn len(&self) -> usize {
        self.programs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.programs.is_empty()
    }
}

pub struct CatalogLoader;

impl CatalogLoader {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Catalog, CatalogError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let catalog = Self::from_reader(std::io::BufReader::new(file))?;
        info!(path = %path.display(), programs = catalog.len(), "loaded scheme catalog");
        Ok(catalog)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Catalog, CatalogError> {
        let programs: Vec<Program> = serde_json::from_reader(reader)?;
        Catalog::from_programs(programs)
    }
}
