//! Presentation core
//!
//! A pure mapping from engine state to a render-instruction value. The TUI
//! and the plain CLI both consume [`RenderInstruction`]; neither contains
//! game logic of its own.

mod render;

pub use render::{
    GALLOWS_STAGES, Message, MessageKind, RenderInstruction, SoundCue, gallows, mask_display,
    render, sound_label,
};
