use std::sync::Arc;

use usvg::fontdb;

/// Capability supplying the typefaces a render uses. Implementations are
/// best-effort: they must always hand back a database, degrading to whatever
/// fallback they have rather than failing the render. Shared concurrent reads
/// must be safe, which an immutable cached database satisfies.
pub trait FontProvider: Send + Sync {
    /// The font database to rasterize with. May be cached process-wide since
    /// the font set is immutable for the process lifetime.
    fn database(&self) -> Arc<fontdb::Database>;

    /// Family name text elements should request.
    fn primary_family(&self) -> String;
}
