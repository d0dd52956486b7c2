//! Social media cards: an HTML template filled from a [`CardSpec`] and
//! captured as PNG by a [`RenderEngine`].

#[cfg(feature = "chromium")]
pub mod chromium;
pub mod engine;
pub mod params;
pub mod png;
pub mod renderer;
pub mod spec;
pub mod templates;

#[cfg(feature = "chromium")]
pub use chromium::ChromiumEngine;
pub use engine::RenderEngine;
pub use params::CardType;
pub use png::png_dimensions;
pub use renderer::{CardRenderer, HtmlCardRenderer};
pub use spec::CardSpec;
pub use templates::TemplateRegistry;
