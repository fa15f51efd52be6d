use std::collections::HashMap;

use crate::audio_api::{AudioCommand, TriggerParams};
use crate::shared::NUM_PADS;

use super::frame::StereoFrame;
use super::sample_buffer::SampleBuffer;
use super::sample_id::SampleId;
use super::voice::Voice;

// Runs inside the cpal output callback. One voice slot per pad: a Trigger
// overwrites whatever that pad was playing, so the clip restarts from frame
// zero instead of layering (last writer wins).
pub struct Engine {
    samples: HashMap<SampleId, SampleBuffer>,
    voices: [Option<(SampleId, Voice)>; NUM_PADS],
}

impl Engine {
    pub fn new() -> Self {
        Self {
            samples: HashMap::new(),
            voices: [const { None }; NUM_PADS],
        }
    }

    pub fn handle_cmd(&mut self, cmd: AudioCommand) {
        match cmd {
            AudioCommand::RegisterSample { id, buffer } => {
                self.samples.insert(id, buffer);
            }
            AudioCommand::Trigger(t) => self.trigger(t),
        }
    }

    fn trigger(&mut self, t: TriggerParams) {
        // unknown sample ids and out-of-range pads are dropped silently; the
        // pad just plays nothing
        if t.pad.index() >= NUM_PADS || !self.samples.contains_key(&t.sample) {
            return;
        }
        self.voices[t.pad.index()] = Some((t.sample, Voice::new(t.gain)));
    }

    pub fn render_block(&mut self, out: &mut [StereoFrame]) {
        for frame in out.iter_mut() {
            *frame = StereoFrame::zero();
        }
        for slot in self.voices.iter_mut() {
            if let Some((sample, voice)) = slot {
                if let Some(buffer) = self.samples.get(sample) {
                    voice.render_into(buffer, out);
                }
                if !voice.active {
                    *slot = None;
                }
            }
        }
    }

    #[cfg(test)]
    fn voice_pos(&self, pad: crate::shared::PadId) -> Option<usize> {
        self.voices[pad.index()].map(|(_, v)| v.pos)
    }
}
