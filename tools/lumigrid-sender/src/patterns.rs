//! Test patterns
//!
//! Every pattern is a function of grid position and a frame counter `t`.
//! `ramp` is the exception: it is defined on wire bytes, not pixels, so it
//! ignores channel order and topology and shows exactly where each byte
//! lands on the grid.

use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, bail, Context, Result};
use lumigrid_protocol::FrameEncoder;

/// Pattern names accepted on the command line
pub const PATTERN_NAMES: &[&str] = &["rainbow", "two-axis", "ramp", "solid", "blank"];

/// What to render each frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// Three phase-shifted sines over x, y and x + y
    Rainbow,
    /// Red follows x, green follows y, blue cycles with time
    TwoAxis,
    /// Wire byte `i` carries `i mod 256`
    Ramp,
    /// One colour everywhere
    Solid([u8; 3]),
    /// All channels zero
    Blank,
}

impl Pattern {
    /// Resolve a pattern name; `color` is only used by `solid`
    pub fn from_name(name: &str, color: [u8; 3]) -> Result<Self> {
        match name.to_ascii_lowercase().as_str() {
            "rainbow" => Ok(Pattern::Rainbow),
            "two-axis" | "twoaxis" => Ok(Pattern::TwoAxis),
            "ramp" => Ok(Pattern::Ramp),
            "solid" => Ok(Pattern::Solid(color)),
            "blank" => Ok(Pattern::Blank),
            _ => bail!(
                "Unknown pattern: {}. Expected one of: {}",
                name,
                PATTERN_NAMES.join(", ")
            ),
        }
    }

    /// Colour of grid coordinate (x, y) at frame `t`
    pub fn color(&self, x: u16, y: u16, t: u64, width: u16, height: u16) -> [u8; 3] {
        match *self {
            Pattern::Rainbow => {
                let t = t as f64 / 10.0;
                let x = f64::from(x) / 2.0;
                let y = f64::from(y) / 2.0;
                [wave(t + x), wave(t + y), wave(t + x + y)]
            }
            Pattern::TwoAxis => [
                (255 * u32::from(x) / u32::from(width.max(1))) as u8,
                (255 * u32::from(y) / u32::from(height.max(1))) as u8,
                (t.wrapping_mul(5) % 255) as u8,
            ],
            Pattern::Solid(color) => color,
            // Ramp is rendered on bytes; as a colour it has no meaning
            Pattern::Ramp | Pattern::Blank => [0, 0, 0],
        }
    }

    /// Render frame `t` into wire bytes
    pub fn render(&self, encoder: &FrameEncoder, t: u64) -> Vec<u8> {
        let geometry = encoder.geometry();
        match self {
            Pattern::Ramp => (0..geometry.frame_byte_count())
                .map(|i| (i % 256) as u8)
                .collect(),
            _ => encoder.encode_to_vec(|x, y| {
                self.color(x, y, t, geometry.width, geometry.height)
            }),
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pattern::Rainbow => write!(f, "rainbow"),
            Pattern::TwoAxis => write!(f, "two-axis"),
            Pattern::Ramp => write!(f, "ramp"),
            Pattern::Solid([r, g, b]) => write!(f, "solid({},{},{})", r, g, b),
            Pattern::Blank => write!(f, "blank"),
        }
    }
}

/// Map a sine to a full-scale channel value
fn wave(phase: f64) -> u8 {
    (255.0 * (phase.sin() + 1.0) / 2.0) as u8
}

/// An `r,g,b` triple from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub [u8; 3]);

impl FromStr for Rgb {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        if parts.len() != 3 {
            return Err(anyhow!("Expected r,g,b but got '{}'", s));
        }

        let mut rgb = [0u8; 3];
        for (dst, part) in rgb.iter_mut().zip(&parts) {
            *dst = part
                .parse()
                .with_context(|| format!("Invalid channel value '{}' (0-255)", part))?;
        }
        Ok(Rgb(rgb))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumigrid_protocol::{ChannelOrder, GridGeometry, Topology};

    fn encoder(width: u16, height: u16) -> FrameEncoder {
        FrameEncoder::new(GridGeometry::new(width, height))
    }

    #[test]
    fn test_ramp_ignores_order_and_topology() {
        let plain = Pattern::Ramp.render(&encoder(20, 10), 3);
        let shuffled = Pattern::Ramp.render(
            &encoder(20, 10)
                .with_order(ChannelOrder::Gbr)
                .with_topology(Topology::ColumnSerpentine),
            3,
        );

        assert_eq!(plain.len(), 600);
        assert_eq!(plain, shuffled);
        assert_eq!(plain[0], 0);
        assert_eq!(plain[255], 255);
        assert_eq!(plain[256], 0);
        assert_eq!(plain[599], (599 % 256) as u8);
    }

    #[test]
    fn test_blank_is_all_zero() {
        let frame = Pattern::Blank.render(&encoder(4, 3), 10);
        assert_eq!(frame, vec![0u8; 36]);
    }

    #[test]
    fn test_solid_respects_channel_order() {
        let frame = Pattern::Solid([10, 20, 30])
            .render(&encoder(2, 1).with_order(ChannelOrder::Gbr), 0);
        assert_eq!(frame, vec![20, 30, 10, 20, 30, 10]);
    }

    #[test]
    fn test_two_axis_values() {
        let pattern = Pattern::TwoAxis;
        assert_eq!(pattern.color(0, 0, 0, 20, 10), [0, 0, 0]);
        assert_eq!(pattern.color(10, 5, 1, 20, 10), [127, 127, 5]);
        assert_eq!(pattern.color(19, 9, 51, 20, 10), [242, 229, 0]);
    }

    #[test]
    fn test_rainbow_stays_in_range_and_moves() {
        let pattern = Pattern::Rainbow;
        // sin(0) = 0 maps to the midpoint
        assert_eq!(pattern.color(0, 0, 0, 20, 10), [127, 127, 127]);

        let a = pattern.render(&encoder(20, 10), 0);
        let b = pattern.render(&encoder(20, 10), 5);
        assert_eq!(a.len(), b.len());
        assert_ne!(a, b);
    }

    #[test]
    fn test_pattern_names() {
        assert_eq!(Pattern::from_name("rainbow", [0; 3]).unwrap(), Pattern::Rainbow);
        assert_eq!(Pattern::from_name("Two-Axis", [0; 3]).unwrap(), Pattern::TwoAxis);
        assert_eq!(
            Pattern::from_name("solid", [1, 2, 3]).unwrap(),
            Pattern::Solid([1, 2, 3])
        );
        assert!(Pattern::from_name("plasma", [0; 3]).is_err());

        for name in PATTERN_NAMES {
            let pattern = Pattern::from_name(name, [0; 3]).unwrap();
            assert!(pattern.to_string().starts_with(name));
        }
    }

    #[test]
    fn test_parse_rgb() {
        assert_eq!("255, 0,12".parse::<Rgb>().unwrap(), Rgb([255, 0, 12]));
        assert!("1,2".parse::<Rgb>().is_err());
        assert!("1,2,256".parse::<Rgb>().is_err());
        assert!("a,b,c".parse::<Rgb>().is_err());
    }
}
