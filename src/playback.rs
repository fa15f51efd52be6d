// Playback controller: the audible and visual side effect for a resolved
// (pad, clip) pair. Triggering marks the pad active and emits the audio
// command that restarts the clip from zero. The active mark is cleared later
// by a settle event from the flash animation, filtered to the one designated
// style property, the same way unrelated transitions on a pad must not clear
// it early.

use crate::audio_api::{AudioCommand, TriggerParams};
use crate::kit::{Clip, Kit};
use crate::shared::{DisplayState, NUM_PADS, PadId, PadVisual};

// Style properties the pad flash animates, each with its own duration. Only
// a Glow settle clears the active flag; if the glow transition were ever
// removed from the flash, active pads would stay lit forever.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    Glow,
    Accent,
}

pub const ACTIVE_TRANSITION: Transition = Transition::Glow;

const GLOW_SECS: f32 = 0.18;
const ACCENT_SECS: f32 = 0.10;

/// Emitted when one of a pad's flash transitions finishes, one event per
/// animated property (the terminal's `transitionend`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SettleEvent {
    pub pad: PadId,
    pub property: Transition,
}

#[derive(Clone, Copy, Debug, Default)]
struct PadFlash {
    active: bool,
    glow_left: Option<f32>,
    accent_left: Option<f32>,
}

pub struct PlaybackController {
    pads: [PadFlash; NUM_PADS],
}

impl PlaybackController {
    pub fn new() -> Self {
        Self {
            pads: [PadFlash::default(); NUM_PADS],
        }
    }

    /// Mark the pad active, restart its flash, and return the command that
    /// resets the clip to frame zero and plays it. Retriggering an active pad
    /// leaves it active and restarts both the clip and the animation.
    pub fn trigger(&mut self, pad: PadId, clip: &Clip) -> AudioCommand {
        let flash = &mut self.pads[pad.index()];
        flash.active = true;
        flash.glow_left = Some(GLOW_SECS);
        flash.accent_left = Some(ACCENT_SECS);

        AudioCommand::Trigger(TriggerParams {
            pad,
            sample: clip.sample,
            gain: clip.gain,
        })
    }

    /// Advance the flash timers by the elapsed frame time and emit a settle
    /// event for every transition that completed this tick.
    pub fn tick(&mut self, dt: f32) -> Vec<SettleEvent> {
        let mut settled = Vec::new();
        for (i, flash) in self.pads.iter_mut().enumerate() {
            let pad = PadId(i as u8);
            if expire(&mut flash.glow_left, dt) {
                settled.push(SettleEvent {
                    pad,
                    property: Transition::Glow,
                });
            }
            if expire(&mut flash.accent_left, dt) {
                settled.push(SettleEvent {
                    pad,
                    property: Transition::Accent,
                });
            }
        }
        settled
    }

    /// Clear the pad's active mark, but only for the designated property;
    /// settles of other transitions on the same pad are ignored.
    pub fn on_animation_settled(&mut self, event: SettleEvent) {
        if event.property != ACTIVE_TRANSITION {
            return;
        }
        self.pads[event.pad.index()].active = false;
    }

    pub fn is_active(&self, pad: PadId) -> bool {
        self.pads[pad.index()].active
    }

    pub fn display_state(&self, kit: &Kit) -> DisplayState {
        let pads = kit
            .pads()
            .iter()
            .enumerate()
            .map(|(i, slot)| {
                let pad = PadId(i as u8);
                PadVisual {
                    cap: slot.cap,
                    name: slot.name.clone(),
                    loaded: slot.clip.is_some(),
                    glow: self.is_active(pad),
                    accent: self.pads[pad.index()].accent_left.is_some(),
                }
            })
            .collect();
        DisplayState { pads }
    }
}

// tick one timer down; true exactly on the tick it runs out
fn expire(timer: &mut Option<f32>, dt: f32) -> bool {
    match timer {
        Some(left) => {
            *left -= dt;
            if *left <= 0.0 {
                *timer = None;
                true
            } else {
                false
            }
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::next_sample_id;

    fn clip() -> Clip {
        Clip {
            sample: next_sample_id(),
            gain: 1.0,
        }
    }

    fn trigger_cmd_matches(cmd: &AudioCommand, pad: PadId, clip: &Clip) -> bool {
        matches!(cmd, AudioCommand::Trigger(t)
            if t.pad == pad && t.sample == clip.sample && t.gain == clip.gain)
    }

    #[test]
    fn trigger_activates_pad_and_emits_restart_command() {
        let mut ctl = PlaybackController::new();
        let clip = clip();
        let pad = PadId(0);

        let cmd = ctl.trigger(pad, &clip);
        assert!(ctl.is_active(pad));
        assert!(trigger_cmd_matches(&cmd, pad, &clip));
    }

    #[test]
    fn double_trigger_stays_active_and_restarts_both_times() {
        let mut ctl = PlaybackController::new();
        let clip = clip();
        let pad = PadId(3);

        let first = ctl.trigger(pad, &clip);
        let second = ctl.trigger(pad, &clip);
        assert!(ctl.is_active(pad));
        // each trigger emits a fresh restart-from-zero command
        assert!(trigger_cmd_matches(&first, pad, &clip));
        assert!(trigger_cmd_matches(&second, pad, &clip));
    }

    #[test]
    fn glow_settle_clears_active_state() {
        let mut ctl = PlaybackController::new();
        let pad = PadId(1);
        ctl.trigger(pad, &clip());

        ctl.on_animation_settled(SettleEvent {
            pad,
            property: Transition::Glow,
        });
        assert!(!ctl.is_active(pad));
    }

    #[test]
    fn settle_of_other_property_leaves_pad_active() {
        let mut ctl = PlaybackController::new();
        let pad = PadId(1);
        ctl.trigger(pad, &clip());

        ctl.on_animation_settled(SettleEvent {
            pad,
            property: Transition::Accent,
        });
        assert!(ctl.is_active(pad));
    }

    #[test]
    fn tick_emits_one_settle_per_finished_transition() {
        let mut ctl = PlaybackController::new();
        let pad = PadId(2);
        ctl.trigger(pad, &clip());

        // accent (0.10s) finishes first, glow (0.18s) later
        let settled = ctl.tick(0.12);
        assert_eq!(
            settled,
            vec![SettleEvent {
                pad,
                property: Transition::Accent
            }]
        );

        let settled = ctl.tick(0.12);
        assert_eq!(
            settled,
            vec![SettleEvent {
                pad,
                property: Transition::Glow
            }]
        );

        // nothing left to settle
        assert!(ctl.tick(1.0).is_empty());
    }

    #[test]
    fn retrigger_restarts_the_flash_timers() {
        let mut ctl = PlaybackController::new();
        let pad = PadId(5);
        let clip = clip();

        ctl.trigger(pad, &clip);
        ctl.tick(0.15); // accent settled, glow nearly done
        ctl.trigger(pad, &clip);

        // glow restarted; another 0.15 must not settle it yet
        assert!(ctl.tick(0.15).iter().all(|s| s.property != Transition::Glow));
        assert!(ctl.is_active(pad));
    }

    // identifier 65 ('A') end to end through the controller: trigger, a
    // matching settle clears, a non-matching settle after a re-trigger
    // does not
    #[test]
    fn full_settle_scenario_for_one_pad() {
        let mut ctl = PlaybackController::new();
        let pad = PadId(0); // bound to identifier 65 in the default kit
        let clip = clip();

        ctl.trigger(pad, &clip);
        assert!(ctl.is_active(pad));

        ctl.on_animation_settled(SettleEvent {
            pad,
            property: Transition::Glow,
        });
        assert!(!ctl.is_active(pad));

        ctl.trigger(pad, &clip);
        ctl.on_animation_settled(SettleEvent {
            pad,
            property: Transition::Accent,
        });
        assert!(ctl.is_active(pad), "unrelated settle must not clear");
    }
}
