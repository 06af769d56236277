//! Presentation over a parsed tree: fiber pointers, traversal order,
//! step playback and the editable visualizer state.

mod playback;
mod presets;
mod render;
mod traversal;
mod visualizer;

pub use fiberviz_parse::Node;
pub use playback::Playback;
pub use presets::{PRESETS, Preset, preset};
pub use render::{FiberEntry, FiberLinks, fiber_links, render_tree};
pub use traversal::{Mode, Walk, collect, traversal};
pub use visualizer::{Visualizer, VisualizerError};
