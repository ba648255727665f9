use super::controller::{Controller, PadButton, PadState};

/// Key that a native button can be bound to
pub trait MappedKey: Copy + PartialEq {
    /// Bit position of this key in the mapped key mask
    fn index(self) -> u8;
}

/// Emulated handheld keys, indexed as the core expects them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GbaKey {
    A = 0,
    B = 1,
    Select = 2,
    Start = 3,
    Right = 4,
    Left = 5,
    Up = 6,
    Down = 7,
    R = 8,
    L = 9,
}

impl MappedKey for GbaKey {
    fn index(self) -> u8 {
        self as u8
    }
}

/// Menu navigation inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GuiInput {
    Select = 0,
    Back = 1,
    Cancel = 2,
    Up = 3,
    Down = 4,
    Left = 5,
    Right = 6,
}

impl MappedKey for GuiInput {
    fn index(self) -> u8 {
        self as u8
    }
}

/// Bindings from native pad bits to keys of type `K`
#[derive(Debug, Clone)]
pub struct InputMap<K: MappedKey> {
    bindings: Vec<(u8, K)>,
}

impl<K: MappedKey> Default for InputMap<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: MappedKey> InputMap<K> {
    pub fn new() -> Self {
        Self { bindings: Vec::new() }
    }

    /// Bind `button` to `key`, replacing any earlier binding of that key
    pub fn bind(&mut self, button: PadButton, key: K) {
        self.bindings.retain(|(_, bound)| *bound != key);
        self.bindings.push((button.bit(), key));
    }

    pub fn unbind(&mut self, key: K) {
        self.bindings.retain(|(_, bound)| *bound != key);
    }

    /// Native bit bound to `key`
    pub fn binding(&self, key: K) -> Option<u8> {
        self.bindings
            .iter()
            .find(|(_, bound)| *bound == key)
            .map(|(bit, _)| *bit)
    }

    /// Keys whose bound native button is held
    pub fn active_keys<'a>(&'a self, state: &'a PadState) -> impl Iterator<Item = K> + 'a {
        self.bindings
            .iter()
            .filter(move |(bit, _)| state.hold() & (1 << bit) != 0)
            .map(|(_, key)| *key)
    }

    /// Mask of held keys, one bit per key index
    pub fn key_bits(&self, state: &PadState) -> u32 {
        self.active_keys(state)
            .fold(0, |bits, key| bits | (1 << key.index()))
    }
}

/// Default game bindings for the gamepad
pub fn default_game_map() -> InputMap<GbaKey> {
    let mut map = InputMap::new();
    map.bind(PadButton::A, GbaKey::A);
    map.bind(PadButton::B, GbaKey::B);
    map.bind(PadButton::Plus, GbaKey::Start);
    map.bind(PadButton::Minus, GbaKey::Select);
    map.bind(PadButton::Up, GbaKey::Up);
    map.bind(PadButton::Down, GbaKey::Down);
    map.bind(PadButton::Left, GbaKey::Left);
    map.bind(PadButton::Right, GbaKey::Right);
    map.bind(PadButton::L, GbaKey::L);
    map.bind(PadButton::R, GbaKey::R);
    map
}

/// Default menu bindings for the gamepad
pub fn default_gui_map() -> InputMap<GuiInput> {
    let mut map = InputMap::new();
    map.bind(PadButton::A, GuiInput::Select);
    map.bind(PadButton::B, GuiInput::Back);
    map.bind(PadButton::X, GuiInput::Cancel);
    map.bind(PadButton::Up, GuiInput::Up);
    map.bind(PadButton::Down, GuiInput::Down);
    map.bind(PadButton::Left, GuiInput::Left);
    map.bind(PadButton::Right, GuiInput::Right);
    map
}
