use super::frame::StereoFrame;
use super::sample_buffer::SampleBuffer;

// One sounding clip. A voice always starts at frame zero and runs to the end
// of its buffer unless the pad is retriggered first, which replaces it.
#[derive(Clone, Copy, Debug)]
pub struct Voice {
    pub pos: usize,
    pub gain: f32,
    pub active: bool,
}

impl Voice {
    pub fn new(gain: f32) -> Self {
        Self {
            pos: 0,
            gain,
            active: true,
        }
    }

    pub fn render_into(&mut self, buffer: &SampleBuffer, out: &mut [StereoFrame]) {
        if !self.active {
            return;
        }
        let data = &buffer.data;

        for frame in out.iter_mut() {
            if self.pos >= data.len() {
                self.active = false;
                break;
            }
            let s = data[self.pos];
            frame.left += s.left * self.gain;
            frame.right += s.right * self.gain;
            self.pos += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer(n: usize) -> SampleBuffer {
        SampleBuffer {
            data: (0..n)
                .map(|i| StereoFrame {
                    left: (i + 1) as f32,
                    right: (i + 1) as f32,
                })
                .collect(),
        }
    }

    #[test]
    fn renders_from_the_start_with_gain() {
        let buf = buffer(4);
        let mut voice = Voice::new(0.5);
        let mut out = [StereoFrame::zero(); 2];
        voice.render_into(&buf, &mut out);
        assert_eq!(out[0].left, 0.5);
        assert_eq!(out[1].left, 1.0);
        assert_eq!(voice.pos, 2);
        assert!(voice.active);
    }

    #[test]
    fn deactivates_past_end_of_buffer() {
        let buf = buffer(3);
        let mut voice = Voice::new(1.0);
        let mut out = [StereoFrame::zero(); 8];
        voice.render_into(&buf, &mut out);
        assert!(!voice.active);
        assert_eq!(out[2].left, 3.0);
        assert_eq!(out[3].left, 0.0); // silence after the clip ends
    }

    #[test]
    fn render_sums_into_existing_output() {
        let buf = buffer(2);
        let mut voice = Voice::new(1.0);
        let mut out = [StereoFrame { left: 1.0, right: 1.0 }; 2];
        voice.render_into(&buf, &mut out);
        assert_eq!(out[0].left, 2.0);
        assert_eq!(out[1].left, 3.0);
    }
}
