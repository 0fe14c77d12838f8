pub mod r#trait;
pub use r#trait::RenderSurface;

pub mod terminal;
pub use terminal::TerminalSurface;
