//! Terminal scan-out: shows the selected buffer on the terminal.

use anyhow::Context;
use crossterm::terminal;

use crate::core::{Canvas, ScanOut, ScanOutError};
use crate::fb::FrameBuffer;
use crate::renderer::TerminalRenderer;
use crate::types::BufferId;
use crate::view::{CanvasView, Viewport};

pub struct TerminalScanOut {
    renderer: TerminalRenderer,
    view: CanvasView,
    fb: FrameBuffer,
    scale: u32,
    front: Option<BufferId>,
    status: String,
}

impl Default for TerminalScanOut {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalScanOut {
    pub fn new() -> Self {
        Self {
            renderer: TerminalRenderer::new(),
            view: CanvasView::new(),
            fb: FrameBuffer::new(0, 0),
            scale: 1,
            front: None,
            status: String::new(),
        }
    }

    pub fn renderer_mut(&mut self) -> &mut TerminalRenderer {
        &mut self.renderer
    }

    pub fn scale(&self) -> u32 {
        self.scale
    }

    pub fn front(&self) -> Option<BufferId> {
        self.front
    }

    /// Text shown under the image from the next frame on.
    pub fn set_status(&mut self, status: &str) {
        if self.status != status {
            self.status.clear();
            self.status.push_str(status);
        }
    }

    /// Render `frame` and flush it.
    pub fn show(&mut self, frame: &Canvas) -> anyhow::Result<()> {
        let (w, h) = terminal::size().context("failed to query terminal size")?;
        let status = (!self.status.is_empty()).then_some(self.status.as_str());
        self.view
            .render_into(frame, self.scale, status, Viewport::new(w, h), &mut self.fb);
        self.renderer.draw_swap(&mut self.fb)
    }
}

impl ScanOut for TerminalScanOut {
    fn set_scale(&mut self, scale: u32) -> Result<(), ScanOutError> {
        tracing::debug!(scale, "resolution scale");
        self.scale = scale;
        self.renderer.invalidate();
        Ok(())
    }

    fn select(&mut self, front: BufferId, frame: &Canvas) -> Result<(), ScanOutError> {
        self.front = Some(front);
        self.show(frame).map_err(ScanOutError::from)
    }
}
