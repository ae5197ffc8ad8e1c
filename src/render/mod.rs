pub mod layout;
pub mod renderer;
pub mod svg;

pub use layout::LayoutModel;
pub use renderer::MatrixRenderer;
