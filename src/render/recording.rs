use crate::chart::label::Label;
use crate::errors::ChartError;
use crate::math::{Point, Scalar};

use super::DrawingSink;

/// One call made against a [`RecordingSink`].
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// `move_to`.
    MoveTo(Point),
    /// `line_to`.
    LineTo(Point),
    /// `set_stroke_width`.
    StrokeWidth(Scalar),
    /// `stroke`.
    Stroke,
    /// `draw_label`.
    Label(Label),
}

/// A stroked path reassembled from recorded commands.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokedPath {
    /// Width in effect at the `stroke` call.
    pub width: Scalar,
    /// Vertices in drawing order.
    pub points: Vec<Point>,
}

/// Sink that records every command in memory.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    commands: Vec<DrawCommand>,
}

impl RecordingSink {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands recorded so far.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Groups the recorded commands into stroked paths.
    #[must_use]
    pub fn stroked_paths(&self) -> Vec<StrokedPath> {
        stroked_paths(&self.commands)
    }

    /// Labels in the order they were drawn.
    #[must_use]
    pub fn labels(&self) -> Vec<&Label> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Label(label) => Some(label),
                _ => None,
            })
            .collect()
    }
}

fn stroked_paths(commands: &[DrawCommand]) -> Vec<StrokedPath> {
    let mut paths = Vec::new();
    let mut width = 0.0;
    let mut points = Vec::new();
    for command in commands {
        match command {
            DrawCommand::MoveTo(p) | DrawCommand::LineTo(p) => points.push(*p),
            DrawCommand::StrokeWidth(w) => width = *w,
            DrawCommand::Stroke => paths.push(StrokedPath {
                width,
                points: std::mem::take(&mut points),
            }),
            DrawCommand::Label(_) => {}
        }
    }
    paths
}

impl DrawingSink for RecordingSink {
    type Output = Vec<DrawCommand>;

    fn move_to(&mut self, p: Point) {
        self.commands.push(DrawCommand::MoveTo(p));
    }

    fn line_to(&mut self, p: Point) {
        self.commands.push(DrawCommand::LineTo(p));
    }

    fn set_stroke_width(&mut self, width: Scalar) {
        self.commands.push(DrawCommand::StrokeWidth(width));
    }

    fn stroke(&mut self) -> Result<(), ChartError> {
        self.commands.push(DrawCommand::Stroke);
        Ok(())
    }

    fn draw_label(&mut self, label: &Label) -> Result<(), ChartError> {
        self.commands.push(DrawCommand::Label(label.clone()));
        Ok(())
    }

    fn finish(self) -> Result<Self::Output, ChartError> {
        Ok(self.commands)
    }
}
