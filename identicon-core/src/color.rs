//! Color Stage

use serde::{Deserialize, Serialize};

use crate::digest::Digest;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb { r: 255, g: 255, b: 255 };

    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self { r, g, b }
    }
}

/// First three digest bytes, in order, as (R, G, B).
impl From<&Digest> for Rgb {
    fn from(digest: &Digest) -> Self {
        let [r, g, b, ..] = *digest.as_bytes();
        Self { r, g, b }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::PipelineError;

    #[test]
    fn test_color_uses_leading_bytes() {
        let mut bytes = [0u8; 15];
        bytes[..5].copy_from_slice(&[9, 143, 107, 205, 70]);
        let digest = Digest::from_slice(&bytes).unwrap();
        assert_eq!(Rgb::from(&digest), Rgb::from((9, 143, 107)));
    }

    #[test]
    fn test_short_bytes_never_reach_color_stage() {
        let err = Digest::from_slice(&[1, 2]).unwrap_err();
        assert!(matches!(
            err,
            PipelineError::MalformedDigest { expected: 15, actual: 2 }
        ));
    }
}
