/// Process state reported by the system message loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemStatus {
    InForeground,
    InBackground,
    /// The system wants the foreground back; acknowledge and keep going
    ReleaseForeground,
    Exiting,
}

/// System message source
pub trait SystemEvents {
    /// Pump pending messages and report the resulting status
    fn process_messages(&mut self) -> SystemStatus;

    /// Acknowledge a foreground release request
    fn release_foreground(&mut self);
}

/// Tracks whether the front-end should keep running
#[derive(Debug, Clone, Copy)]
pub struct Lifecycle {
    running: bool,
}

impl Default for Lifecycle {
    fn default() -> Self {
        Self::new()
    }
}

impl Lifecycle {
    pub fn new() -> Self {
        Self { running: true }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Process one round of system messages; false once the process is exiting
    pub fn poll(&mut self, events: &mut dyn SystemEvents) -> bool {
        if !self.running {
            return false;
        }
        match events.process_messages() {
            SystemStatus::ReleaseForeground => {
                log::debug!("releasing foreground");
                events.release_foreground();
            }
            SystemStatus::Exiting => {
                log::info!("system requested exit");
                self.running = false;
            }
            SystemStatus::InForeground | SystemStatus::InBackground => {}
        }
        self.running
    }
}
