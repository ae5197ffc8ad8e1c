use resvg::tiny_skia::{Pixmap, Transform};

use crate::config::MatrixConfig;
use crate::domain::model::{MatrixProfile, RenderedImage};
use crate::domain::ports::FontProvider;
use crate::render::layout::LayoutModel;
use crate::render::svg;
use crate::utils::error::{MatrixError, Result};

/// Rasterizes one profile into the card image. Stateless across calls: the
/// only shared pieces are the immutable layout template and the provider's
/// cached font database, so concurrent renders do not interfere.
pub struct MatrixRenderer<F: FontProvider> {
    layout: LayoutModel,
    fonts: F,
}

impl<F: FontProvider> MatrixRenderer<F> {
    pub fn new(config: &MatrixConfig, fonts: F) -> Self {
        Self {
            layout: LayoutModel::build(config),
            fonts,
        }
    }

    pub fn layout(&self) -> &LayoutModel {
        &self.layout
    }

    /// Deterministic given the same inputs and font set: repeated calls
    /// produce byte-identical PNG data.
    pub fn render(&self, name: &str, profile: &MatrixProfile) -> Result<RenderedImage> {
        let family = self.fonts.primary_family();
        let document = svg::document(&self.layout, name, profile, &family);

        let mut options = usvg::Options::default();
        options.font_family = family;
        options.fontdb = self.fonts.database();

        let tree = usvg::Tree::from_str(&document, &options)?;

        let width = self.layout.width;
        let height = self.layout.height;
        let mut pixmap =
            Pixmap::new(width, height).ok_or_else(|| MatrixError::RenderFailure {
                message: format!("failed to allocate a {}x{} pixmap", width, height),
            })?;

        resvg::render(&tree, Transform::identity(), &mut pixmap.as_mut());

        let bytes = pixmap.encode_png().map_err(|e| MatrixError::RenderFailure {
            message: format!("PNG encoding failed: {}", e),
        })?;

        tracing::debug!(width, height, bytes = bytes.len(), "rendered matrix card");
        Ok(RenderedImage::new(bytes, width, height))
    }
}
