//! Colorspace tags and the per-channel roles they imply.

/// Colorspace of an image plane.
///
/// Each variant fixes the channel count and which channels, if any, carry
/// sRGB-encoded data, alpha, or an ignored pad byte. `Colorspace` carries no
/// data of its own; it is a closed tag consulted by the horizontal scaler and
/// the vertical reducer to decide how to decode, premultiply, and recompose
/// each channel.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Colorspace {
    /// Grayscale, one channel, no gamma, no alpha.
    G,
    /// Grayscale with alpha. Channel 0 is premultiplied gray, channel 1 alpha.
    Ga,
    /// sRGB, three channels, all gamma-encoded.
    Rgb,
    /// sRGB padded with an ignored fourth byte.
    Rgbx,
    /// sRGB with premultiplied alpha; channel 3 is alpha.
    Rgba,
    /// Four-channel CMYK. No gamma, no alpha.
    Cmyk,
}

impl Colorspace {
    /// Number of channels per pixel.
    pub const fn channels(self) -> usize {
        match self {
            Colorspace::G => 1,
            Colorspace::Ga => 2,
            Colorspace::Rgb => 3,
            Colorspace::Rgbx | Colorspace::Rgba | Colorspace::Cmyk => 4,
        }
    }

    /// Whether `channel` carries sRGB-encoded data that must be linearized
    /// before filtering.
    pub(crate) const fn is_gamma(self, channel: usize) -> bool {
        channel < 3 && matches!(self, Colorspace::Rgb | Colorspace::Rgbx | Colorspace::Rgba)
    }

    /// The alpha channel index, if this colorspace carries one.
    pub(crate) const fn alpha_channel(self) -> Option<usize> {
        match self {
            Colorspace::Ga => Some(1),
            Colorspace::Rgba => Some(3),
            _ => None,
        }
    }

    /// The ignored pad-byte channel index, if this colorspace carries one.
    pub(crate) const fn filler_channel(self) -> Option<usize> {
        match self {
            Colorspace::Rgbx => Some(3),
            _ => None,
        }
    }

    pub(crate) fn is_filler(self, channel: usize) -> bool {
        self.filler_channel() == Some(channel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_counts_match_spec() {
        assert_eq!(Colorspace::G.channels(), 1);
        assert_eq!(Colorspace::Ga.channels(), 2);
        assert_eq!(Colorspace::Rgb.channels(), 3);
        assert_eq!(Colorspace::Rgbx.channels(), 4);
        assert_eq!(Colorspace::Rgba.channels(), 4);
        assert_eq!(Colorspace::Cmyk.channels(), 4);
    }

    #[test]
    fn alpha_and_filler_channels() {
        assert_eq!(Colorspace::Ga.alpha_channel(), Some(1));
        assert_eq!(Colorspace::Rgba.alpha_channel(), Some(3));
        assert_eq!(Colorspace::Rgb.alpha_channel(), None);
        assert_eq!(Colorspace::Rgbx.filler_channel(), Some(3));
        assert_eq!(Colorspace::Rgb.filler_channel(), None);
    }

    #[test]
    fn gamma_channels_are_first_three_of_rgb_family() {
        for cs in [Colorspace::Rgb, Colorspace::Rgbx, Colorspace::Rgba] {
            assert!(cs.is_gamma(0));
            assert!(cs.is_gamma(1));
            assert!(cs.is_gamma(2));
        }
        assert!(!Colorspace::Rgba.is_gamma(3));
        assert!(!Colorspace::G.is_gamma(0));
        assert!(!Colorspace::Cmyk.is_gamma(0));
    }
}
