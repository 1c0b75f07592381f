mod renderer;
mod theme;

pub use renderer::{RenderOptions, Renderer};
