//! Double-buffer presenter.
//!
//! Two equally sized canvases: the front one is being scanned out, the back one
//! is being drawn. Only the back buffer is ever handed out mutably, so the
//! component can never write what the scan-out is reading.

use crate::canvas::Canvas;
use crate::error::{CoreError, ScanOutError};
use crate::types::{BufferId, BACKGROUND, RESOLUTION_SCALE};

/// Display hardware seam: the buffer-select and resolution-scale registers.
///
/// Implementations are write-only from the core's point of view. `select`
/// receives the newly published front buffer so software scan-outs can read it.
pub trait ScanOut {
    fn set_scale(&mut self, scale: u32) -> Result<(), ScanOutError>;
    fn select(&mut self, front: BufferId, frame: &Canvas) -> Result<(), ScanOutError>;
}

/// Scan-out that only counts register writes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NullScanOut {
    pub scale: Option<u32>,
    pub last_select: Option<BufferId>,
    /// Last value written to the buffer-select register.
    pub register: Option<u32>,
    pub selects: u64,
}

impl ScanOut for NullScanOut {
    fn set_scale(&mut self, scale: u32) -> Result<(), ScanOutError> {
        self.scale = Some(scale);
        Ok(())
    }

    fn select(&mut self, front: BufferId, _frame: &Canvas) -> Result<(), ScanOutError> {
        self.last_select = Some(front);
        self.register = Some(front.register_value());
        self.selects += 1;
        Ok(())
    }
}

#[derive(Debug)]
pub struct Presenter<S> {
    buffers: [Canvas; 2],
    front: BufferId,
    scan_out: S,
    published: u64,
}

impl<S: ScanOut> Presenter<S> {
    /// Both buffers start as plain background; buffer one is the front.
    pub fn new(scan_out: S) -> Self {
        Self {
            buffers: [Canvas::new(BACKGROUND), Canvas::new(BACKGROUND)],
            front: BufferId::One,
            scan_out,
            published: 0,
        }
    }

    /// Program the resolution scale and show the initial front buffer.
    pub fn power_on(&mut self) -> Result<(), CoreError> {
        self.scan_out
            .set_scale(RESOLUTION_SCALE)
            .map_err(CoreError::ScanOut)?;
        self.scan_out
            .select(self.front, &self.buffers[self.front.index()])
            .map_err(CoreError::ScanOut)
    }

    pub fn current_front(&self) -> BufferId {
        self.front
    }

    /// The buffer that is safe to write.
    pub fn current_back(&self) -> BufferId {
        self.front.other()
    }

    pub fn front(&self) -> &Canvas {
        &self.buffers[self.front.index()]
    }

    pub fn back_mut(&mut self) -> &mut Canvas {
        &mut self.buffers[self.current_back().index()]
    }

    pub fn buffer(&self, id: BufferId) -> &Canvas {
        &self.buffers[id.index()]
    }

    /// Flip front and back, then tell the scan-out which buffer to show.
    pub fn publish(&mut self) -> Result<BufferId, CoreError> {
        self.front = self.front.other();
        self.published = self.published.wrapping_add(1);
        tracing::trace!(front = self.front.index(), published = self.published, "publish");
        self.scan_out
            .select(self.front, &self.buffers[self.front.index()])
            .map_err(CoreError::ScanOut)?;
        Ok(self.front)
    }

    /// Show the current front again without flipping (e.g. after the
    /// scan-out lost its picture).
    pub fn refresh(&mut self) -> Result<(), CoreError> {
        self.scan_out
            .select(self.front, &self.buffers[self.front.index()])
            .map_err(CoreError::ScanOut)
    }

    pub fn published(&self) -> u64 {
        self.published
    }

    pub fn scan_out(&self) -> &S {
        &self.scan_out
    }

    pub fn scan_out_mut(&mut self) -> &mut S {
        &mut self.scan_out
    }
}
