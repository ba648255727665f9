/// Frame counter - fires every N ticks
#[derive(Debug, Clone, Copy)]
pub struct EveryNTicks {
    interval: u64,
    count: u64,
}

impl EveryNTicks {
    /// Create timer that fires every N ticks; an interval of 0 behaves as 1
    pub fn new(interval: u64) -> Self {
        Self {
            interval: interval.max(1),
            count: 0,
        }
    }

    /// Tick once, returns true if should fire
    pub fn tick(&mut self) -> bool {
        self.count += 1;
        if self.count >= self.interval {
            self.count = 0;
            true
        } else {
            false
        }
    }

    /// Reset counter
    pub fn reset(&mut self) {
        self.count = 0;
    }

    pub fn interval(&self) -> u64 {
        self.interval
    }
}

/// Decides which emulated frames reach the displays.
///
/// With the frame limiter on every frame is drawn. While fast forwarding only
/// every `cap`-th frame is.
#[derive(Debug, Clone, Copy)]
pub struct FrameSkipper {
    counter: EveryNTicks,
    frames_seen: u64,
}

impl FrameSkipper {
    pub fn new(cap: u32) -> Self {
        Self {
            counter: EveryNTicks::new(u64::from(cap)),
            frames_seen: 0,
        }
    }

    /// Change the cap, restarting the count
    pub fn set_cap(&mut self, cap: u32) {
        if u64::from(cap.max(1)) != self.counter.interval() {
            self.counter = EveryNTicks::new(u64::from(cap));
        }
    }

    /// Count one frame and report whether it should be drawn
    pub fn tick(&mut self, frame_limiter: bool) -> bool {
        self.frames_seen += 1;
        if frame_limiter {
            self.counter.reset();
            return true;
        }
        self.counter.tick()
    }

    /// Frames counted since creation
    pub fn frames_seen(&self) -> u64 {
        self.frames_seen
    }
}
