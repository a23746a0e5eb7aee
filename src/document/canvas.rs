use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CanvasError {
    #[error("Canvas error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Canvas error: {0}")]
    Serialization(#[from] serde_json::Error)
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// One absolute-positioned drawing instruction on the current page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Instruction {
    SetFill { color: Color },
    Rect { x: f32, y: f32, width: f32, height: f32 },
    FilledRect { x: f32, y: f32, width: f32, height: f32 },
    Text { x: f32, y: f32, size: f32, content: String },
    NewPage
}

/// A page surface accepting absolute-positioned drawing instructions.
///
/// Errors from a canvas implementation are treated as fatal for the whole
/// document operation; the layout renderer does not catch them.
pub trait Canvas {
    fn set_fill(&mut self, color: Color);
    fn rect(&mut self, x: f32, y: f32, width: f32, height: f32);
    fn filled_rect(&mut self, x: f32, y: f32, width: f32, height: f32);
    fn text(&mut self, x: f32, y: f32, size: f32, content: &str);
    fn new_page(&mut self);
    /// Writes the finished document to disk.
    fn save(&self, path: &Path) -> Result<(), CanvasError>;
}

/// Canvas that records the instruction stream and saves it as JSON.
///
/// The recorded stream is the document artifact: deterministic, diffable
/// and directly assertable in tests.
#[derive(Debug)]
pub struct InstructionCanvas {
    instructions: Vec<Instruction>,
    pages: usize
}

impl InstructionCanvas {
    pub fn new() -> Self {
        Self {
            instructions: Vec::new(),
            pages: 1
        }
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    pub fn pages(&self) -> usize {
        self.pages
    }
}

impl Canvas for InstructionCanvas {
    fn set_fill(&mut self, color: Color) {
        self.instructions.push(Instruction::SetFill { color });
    }

    fn rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.instructions.push(Instruction::Rect { x, y, width, height });
    }

    fn filled_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.instructions.push(Instruction::FilledRect { x, y, width, height });
    }

    fn text(&mut self, x: f32, y: f32, size: f32, content: &str) {
        self.instructions.push(Instruction::Text {
            x,
            y,
            size,
            content: content.to_string()
        });
    }

    fn new_page(&mut self) {
        self.pages += 1;
        self.instructions.push(Instruction::NewPage);
    }

    fn save(&self, path: &Path) -> Result<(), CanvasError> {
        let file = File::create(path)?;
        serde_json::to_writer_pretty(BufWriter::new(file), &self.instructions)?;

        Ok(())
    }
}
