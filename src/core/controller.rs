/// Gamepad button, valued by its bit in the pad's hold mask
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum PadButton {
    Sync = 0x0000_0001,
    Home = 0x0000_0002,
    Minus = 0x0000_0004,
    Plus = 0x0000_0008,
    R = 0x0000_0010,
    L = 0x0000_0020,
    ZR = 0x0000_0040,
    ZL = 0x0000_0080,
    Down = 0x0000_0100,
    Up = 0x0000_0200,
    Right = 0x0000_0400,
    Left = 0x0000_0800,
    Y = 0x0000_1000,
    X = 0x0000_2000,
    B = 0x0000_4000,
    A = 0x0000_8000,
    Tv = 0x0001_0000,
    StickR = 0x0002_0000,
    StickL = 0x0004_0000,
    StickRDown = 0x0008_0000,
    StickRUp = 0x0010_0000,
    StickRRight = 0x0020_0000,
    StickRLeft = 0x0040_0000,
    StickLDown = 0x0080_0000,
    StickLUp = 0x0100_0000,
    StickLRight = 0x0200_0000,
    StickLLeft = 0x0400_0000,
}

/// Bits of the hold mask that carry pad input; the rest are ignored
pub const PAD_INPUT_MASK: u32 = 0x7f87_ffff;

impl PadButton {
    pub fn mask(self) -> u32 {
        self as u32
    }

    /// Bit index within the hold mask
    pub fn bit(self) -> u8 {
        self.mask().trailing_zeros() as u8
    }

    /// Name shown in the key binding menu
    pub fn name(self) -> &'static str {
        match self {
            PadButton::Sync => "Sync",
            PadButton::Home => "Home",
            PadButton::Minus => "-",
            PadButton::Plus => "+",
            PadButton::R => "R",
            PadButton::L => "L",
            PadButton::ZR => "ZR",
            PadButton::ZL => "ZL",
            PadButton::Down => "Down",
            PadButton::Up => "Up",
            PadButton::Right => "Right",
            PadButton::Left => "Left",
            PadButton::Y => "Y",
            PadButton::X => "X",
            PadButton::B => "B",
            PadButton::A => "A",
            PadButton::Tv => "TV",
            PadButton::StickR => "R Stick",
            PadButton::StickL => "L Stick",
            PadButton::StickRDown => "R Down",
            PadButton::StickRUp => "R Up",
            PadButton::StickRRight => "R Right",
            PadButton::StickRLeft => "R Left",
            PadButton::StickLDown => "L Down",
            PadButton::StickLUp => "L Up",
            PadButton::StickLRight => "L Right",
            PadButton::StickLLeft => "L Left",
        }
    }
}

/// Source of gamepad samples
pub trait PadSource {
    /// Read the current hold mask; `None` when no sample is available
    fn read_hold(&mut self) -> Option<u32>;
}

/// Controller - handles button input states
pub trait Controller {
    /// Check if button is currently down
    fn is_down(&self, button: PadButton) -> bool;

    /// Raw hold mask of the last sample
    fn hold(&self) -> u32;
}

/// Last sample read from a pad
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PadState {
    hold: u32,
}

impl PadState {
    pub fn new(hold: u32) -> Self {
        Self {
            hold: hold & PAD_INPUT_MASK,
        }
    }

    /// Sample `source`, treating a failed read as nothing held
    pub fn read(source: &mut dyn PadSource) -> Self {
        Self::new(source.read_hold().unwrap_or(0))
    }
}

impl Controller for PadState {
    fn is_down(&self, button: PadButton) -> bool {
        self.hold & button.mask() != 0
    }

    fn hold(&self) -> u32 {
        self.hold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ScriptedPad(Vec<Option<u32>>);

    impl PadSource for ScriptedPad {
        fn read_hold(&mut self) -> Option<u32> {
            if self.0.is_empty() {
                None
            } else {
                self.0.remove(0)
            }
        }
    }

    #[test]
    fn test_button_bits() {
        assert_eq!(PadButton::A.bit(), 15);
        assert_eq!(PadButton::Sync.bit(), 0);
        assert_eq!(PadButton::StickLLeft.bit(), 26);
    }

    #[test]
    fn test_masked_bits_dropped() {
        // bits 19-22 (right stick emulation) are outside the input mask
        let state = PadState::new(PadButton::StickRUp.mask() | PadButton::A.mask());
        assert!(state.is_down(PadButton::A));
        assert!(!state.is_down(PadButton::StickRUp));
        assert_eq!(state.hold(), PadButton::A.mask());
    }

    #[test]
    fn test_failed_read_is_empty() {
        let mut pad = ScriptedPad(vec![Some(PadButton::B.mask()), None]);
        assert!(PadState::read(&mut pad).is_down(PadButton::B));
        assert_eq!(PadState::read(&mut pad), PadState::default());
    }

    #[test]
    fn test_names() {
        assert_eq!(PadButton::Plus.name(), "+");
        assert_eq!(PadButton::StickL.name(), "L Stick");
    }
}
