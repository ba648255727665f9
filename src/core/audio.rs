/// Stereo samples per buffer
pub const SAMPLES_PER_BUFFER: usize = 0x200;
/// Buffers in the ring
pub const BUFFER_COUNT: usize = 4;

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StereoSample {
    pub left: i16,
    pub right: i16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioPost {
    Queued,
    /// Ring full, samples discarded
    Dropped,
}

/// Fixed ring of output buffers filled by the core and drained by the voice
pub struct AudioRing {
    buffers: Box<[[StereoSample; SAMPLES_PER_BUFFER]; BUFFER_COUNT]>,
    active: usize,
    enqueued: usize,
}

impl Default for AudioRing {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioRing {
    pub fn new() -> Self {
        Self {
            buffers: Box::new([[StereoSample::default(); SAMPLES_PER_BUFFER]; BUFFER_COUNT]),
            active: 0,
            enqueued: 0,
        }
    }

    /// Copy one buffer's worth of samples into the active slot.
    ///
    /// Missing samples are zero-filled, extras are ignored.
    pub fn post(&mut self, left: &[i16], right: &[i16]) -> AudioPost {
        if self.enqueued >= BUFFER_COUNT {
            log::trace!("audio ring full, dropping buffer");
            return AudioPost::Dropped;
        }

        let buffer = &mut self.buffers[self.active];
        for (i, sample) in buffer.iter_mut().enumerate() {
            *sample = StereoSample {
                left: left.get(i).copied().unwrap_or(0),
                right: right.get(i).copied().unwrap_or(0),
            };
        }

        self.active = (self.active + 1) % BUFFER_COUNT;
        self.enqueued += 1;
        AudioPost::Queued
    }

    /// Hand back the oldest enqueued buffer, freeing its slot
    pub fn release(&mut self) -> Option<&[StereoSample]> {
        if self.enqueued == 0 {
            return None;
        }
        let oldest = (self.active + BUFFER_COUNT - self.enqueued) % BUFFER_COUNT;
        self.enqueued -= 1;
        Some(&self.buffers[oldest])
    }

    pub fn enqueued(&self) -> usize {
        self.enqueued
    }

    /// Discard everything queued
    pub fn clear(&mut self) {
        self.enqueued = 0;
    }
}
