// The kit is the page the drum machine plays: nine pads, each bound to a key
// identifier and paired 1:1 with a clip. Definitions come from
// <kit_dir>/kit.json when present, otherwise the built-in default kit.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::audio::SampleId;
use crate::shared::{KeyId, NUM_PADS, PadId};

const KIT_FILE: &str = "kit.json";

fn default_gain() -> f32 {
    1.0
}

#[derive(Clone, Debug, Deserialize)]
pub struct PadEntry {
    pub key: char,
    pub name: String,
    pub sample: String,
    #[serde(default = "default_gain")]
    pub gain: f32,
}

#[derive(Clone, Debug, Deserialize)]
pub struct KitManifest {
    pub pads: Vec<PadEntry>,
}

impl KitManifest {
    // <kit_dir>/kit.json, or the default nine-pad kit when there isn't one
    pub fn load(kit_dir: &Path) -> anyhow::Result<Self> {
        let path = kit_dir.join(KIT_FILE);
        let manifest = if path.exists() {
            let data = std::fs::read_to_string(&path)?;
            serde_json::from_str(&data)?
        } else {
            Self::default_kit()
        };
        if manifest.pads.len() != NUM_PADS {
            anyhow::bail!(
                "kit must define exactly {NUM_PADS} pads, found {}",
                manifest.pads.len()
            );
        }
        Ok(manifest)
    }

    pub fn default_kit() -> Self {
        let defaults = [
            ('A', "clap"),
            ('S', "hihat"),
            ('D', "kick"),
            ('F', "openhat"),
            ('G', "boom"),
            ('H', "ride"),
            ('J', "snare"),
            ('K', "tom"),
            ('L', "tink"),
        ];
        Self {
            pads: defaults
                .into_iter()
                .map(|(key, name)| PadEntry {
                    key,
                    name: name.to_string(),
                    sample: format!("{name}.wav"),
                    gain: 1.0,
                })
                .collect(),
        }
    }
}

/// The clip paired with a pad, present once its sample is registered with the
/// audio engine.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Clip {
    pub sample: SampleId,
    pub gain: f32,
}

#[derive(Clone, Debug)]
pub struct PadSlot {
    pub key: KeyId,
    pub cap: char,
    pub name: String,
    pub sample_path: PathBuf,
    pub gain: f32,
    pub clip: Option<Clip>,
}

/// Lookup-by-identifier, the one capability the input router needs. Returns
/// the resolved (pad, clip) pair, or None when the identifier is unbound or
/// the pad has no loaded clip — both expected, ordinary outcomes.
pub trait PadLookup {
    fn find_by_identifier(&self, key: KeyId) -> Option<(PadId, Clip)>;
}

pub struct Kit {
    pads: Vec<PadSlot>,
}

impl Kit {
    pub fn new(kit_dir: &Path, manifest: KitManifest) -> Self {
        let pads = manifest
            .pads
            .into_iter()
            .map(|entry| PadSlot {
                key: KeyId::from_char(entry.key),
                cap: entry.key.to_ascii_uppercase(),
                name: entry.name,
                sample_path: kit_dir.join(&entry.sample),
                gain: entry.gain,
                clip: None,
            })
            .collect();
        Self { pads }
    }

    pub fn pads(&self) -> &[PadSlot] {
        &self.pads
    }

    pub fn pad(&self, pad: PadId) -> &PadSlot {
        &self.pads[pad.index()]
    }

    pub fn identifier_of(&self, pad: PadId) -> KeyId {
        self.pads[pad.index()].key
    }

    // called at startup once the pad's sample is registered with the engine
    pub fn attach_clip(&mut self, pad: PadId, sample: SampleId) {
        let slot = &mut self.pads[pad.index()];
        slot.clip = Some(Clip {
            sample,
            gain: slot.gain,
        });
    }
}

impl PadLookup for Kit {
    fn find_by_identifier(&self, key: KeyId) -> Option<(PadId, Clip)> {
        // direct scan; nine slots at human input rate, no index needed
        self.pads
            .iter()
            .position(|slot| slot.key == key)
            .and_then(|i| self.pads[i].clip.map(|clip| (PadId(i as u8), clip)))
    }
}
