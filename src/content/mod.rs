//! Portfolio content: descriptors, profile loading and rendering
//!
//! - [`model`] - content blocks and their sections
//! - [`profile`] - the owner plus one block per content command
//! - [`render`] - pure projection from transcript data to styled lines

mod error;
pub mod model;
pub mod profile;
pub mod render;

pub use error::ProfileError;
pub use model::{Card, ContentBlock, Fact, Image, Link, Section};
pub use profile::{Owner, Profile};
pub use render::{
    line_to_ansi, line_to_plain, render_entry, render_response, render_transcript, RenderContext,
};
