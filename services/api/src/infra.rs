use asha_setu::error::AppError;
use asha_setu::schemes::{Catalog, CatalogLoader};
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Load the catalog from `path`, falling back to the bundled programs.
pub(crate) fn load_catalog(path: Option<&Path>) -> Result<Catalog, AppError> {
    let catalog = match path {
        Some(path) => CatalogLoader::from_path(path)?,
        None => {
            let catalog = Catalog::bundled()?;
            info!(programs = catalog.len(), "using bundled scheme catalog");
            catalog
        }
    };

    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_catalog_defaults_to_bundled() {
        let catalog = load_catalog(None).expect("bundled catalog loads");
        assert!(!catalog.is_empty());
    }

    #[test]
    fn load_catalog_surfaces_missing_files() {
        let error = load_catalog(Some(Path::new("./missing-schemes.json")))
            .expect_err("missing file rejected");
        assert!(matches!(error, AppError::Catalog(_)));
    }
}
