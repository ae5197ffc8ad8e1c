use std::path::PathBuf;
use std::sync::{Arc, OnceLock};

use usvg::fontdb;

use crate::domain::ports::FontProvider;
use crate::utils::error::MatrixError;

#[derive(Clone)]
struct LoadedFonts {
    db: Arc<fontdb::Database>,
    family: String,
}

/// Probes a fixed path list for a usable typeface; the first hit wins. A
/// total miss degrades to system fonts instead of failing the render. The
/// probe runs once per provider and the result is cached for the process
/// lifetime — the font set is immutable, so unsynchronized concurrent reads
/// of the cached database are safe.
pub struct DiskFontProvider {
    search_paths: Vec<PathBuf>,
    cache: OnceLock<LoadedFonts>,
}

impl DiskFontProvider {
    pub fn new<I, P>(search_paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            search_paths: search_paths.into_iter().map(Into::into).collect(),
            cache: OnceLock::new(),
        }
    }

    fn loaded(&self) -> &LoadedFonts {
        self.cache.get_or_init(|| {
            let mut db = fontdb::Database::new();

            for path in &self.search_paths {
                if !path.exists() {
                    continue;
                }
                match db.load_font_file(path) {
                    Ok(()) => {
                        let family = db
                            .faces()
                            .next()
                            .and_then(|face| face.families.first())
                            .map(|(name, _)| name.clone())
                            .unwrap_or_else(|| "sans-serif".to_string());
                        tracing::debug!(path = %path.display(), family, "loaded typeface");
                        return LoadedFonts {
                            db: Arc::new(db),
                            family,
                        };
                    }
                    Err(e) => {
                        tracing::warn!(path = %path.display(), "failed to load font: {}", e);
                    }
                }
            }

            tracing::warn!("{}; falling back to system fonts", MatrixError::FontUnavailable);
            db.load_system_fonts();
            LoadedFonts {
                db: Arc::new(db),
                family: "sans-serif".to_string(),
            }
        })
    }
}

impl FontProvider for DiskFontProvider {
    fn database(&self) -> Arc<fontdb::Database> {
        self.loaded().db.clone()
    }

    fn primary_family(&self) -> String {
        self.loaded().family.clone()
    }
}
