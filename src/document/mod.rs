mod canvas;
mod layout;

pub use canvas::{Canvas, CanvasError, Color, Instruction, InstructionCanvas};
pub use layout::DocumentLayout;
