//! resmap-scene
//!
//! Rendering side of the pipeline: deterministic topic-to-color assignment
//! (`color`), two-layer scene composition (`build`), and the click-payload
//! formatter (`inspect`).

pub mod build;
pub mod color;
pub mod inspect;

pub use build::{build, SceneDescriptor};
pub use color::{colors_for, Color, ColorMap};
pub use inspect::{describe, SelectionReadout};
