pub use crate::audio::{SampleBuffer, SampleId};
use crate::shared::PadId;

#[derive(Clone, Debug)]
pub struct TriggerParams {
    pub pad: PadId,
    pub sample: SampleId,
    pub gain: f32,
}

#[derive(Clone, Debug)]
pub enum AudioCommand {
    // The engine can't load files (interrupts thread), so a buffer is loaded
    // up front (see sample_loader.rs) and registered here before any
    // Trigger referencing its id.
    RegisterSample { id: SampleId, buffer: SampleBuffer },

    // Restart the pad's clip from frame zero and play it. One voice per pad:
    // triggering an already-sounding pad cuts it and starts over.
    Trigger(TriggerParams),
}
