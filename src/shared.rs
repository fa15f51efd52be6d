// Types shared between the input, playback, and rendering layers.
//
// The flow each frame:
//   - tui polls the terminal and turns raw crossterm events into InputEvents
//   - the router resolves a KeyDown or Click to a (pad, clip) pair, or to
//     nothing (unbound keys and stray clicks are ordinary input, not errors)
//   - the playback controller marks the pad active and emits the trigger
//     command for the audio thread
//   - the view just renders whatever DisplayState says, every frame

pub const NUM_PADS: usize = 9;

/// Identifier shared by a pad and its clip: the ASCII uppercase code of the
/// bound key (65 = 'A'). u16 so codes outside the byte range are still
/// representable inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct KeyId(pub u16);

impl KeyId {
    pub fn from_char(c: char) -> Self {
        KeyId(c.to_ascii_uppercase() as u16)
    }
}

/// Index of a pad slot in the kit, 0..NUM_PADS.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PadId(pub u8);

impl PadId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    KeyDown(KeyId),
    Click { x: u16, y: u16 },
    Quit,
}

/// Per-pad render data. The view draws this and nothing else.
#[derive(Clone, Debug)]
pub struct PadVisual {
    pub cap: char,    // key cap shown on the pad
    pub name: String, // clip name shown under the cap
    pub loaded: bool, // false when the sample failed to load
    pub glow: bool,   // pad is active
    pub accent: bool, // accent transition still running
}

#[derive(Clone, Debug)]
pub struct DisplayState {
    pub pads: Vec<PadVisual>,
}
