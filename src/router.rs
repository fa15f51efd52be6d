// Input router: turns raw key and click input into a resolved (pad, clip)
// pair, or decides there isn't one. Most keys aren't bound to a pad and most
// clicks land between pads; both resolve to None and nothing happens.

use crate::kit::{Clip, PadLookup};
use crate::shared::{KeyId, PadId};
use crate::tui::grid::PadRegions;

// Stateless; built once at startup and handed the lookup explicitly per call.
pub struct InputRouter;

impl InputRouter {
    pub fn new() -> Self {
        Self
    }

    /// A key press carrying an identifier. None for unbound identifiers and
    /// for pads whose clip never loaded.
    pub fn handle_key_down(
        &self,
        pads: &impl PadLookup,
        key: KeyId,
    ) -> Option<(PadId, Clip)> {
        pads.find_by_identifier(key)
    }

    /// A click somewhere on screen. Hit-test the click against the rendered
    /// pad regions to recover the pad's identifier, then resolve exactly as a
    /// key press would.
    pub fn handle_click(
        &self,
        regions: &PadRegions,
        pads: &(impl PadLookup + PadKeys),
        x: u16,
        y: u16,
    ) -> Option<(PadId, Clip)> {
        let pad = regions.pad_at(x, y)?;
        pads.find_by_identifier(pads.identifier_of(pad))
    }
}

/// Read a pad's identifier back out, the reverse direction of PadLookup.
/// Split from PadLookup so the lookup trait keeps its single operation.
pub trait PadKeys {
    fn identifier_of(&self, pad: PadId) -> KeyId;
}

impl PadKeys for crate::kit::Kit {
    fn identifier_of(&self, pad: PadId) -> KeyId {
        crate::kit::Kit::identifier_of(self, pad)
    }
}
