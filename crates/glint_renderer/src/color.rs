//! Packed 32-bit RGBA pixel conversion.

use glam::Vec4;

/// Pack a clamped linear color into one 32-bit pixel, byte order R,G,B,A
/// from the least significant byte.
///
/// Channels are truncated toward zero, not rounded: `0.999` packs as `254`.
/// Input must already be clamped to [0, 1] — values outside that range would
/// corrupt the 8-bit channels.
#[inline]
pub fn pack_rgba(color: Vec4) -> u32 {
    let r = (color.x * 255.0) as u32;
    let g = (color.y * 255.0) as u32;
    let b = (color.z * 255.0) as u32;
    let a = (color.w * 255.0) as u32;

    (a << 24) | (b << 16) | (g << 8) | r
}

/// Recover a linear color from a packed pixel.
///
/// Each channel comes back within 1/255 of the clamped value it was packed
/// from.
#[inline]
pub fn unpack_rgba(pixel: u32) -> Vec4 {
    Vec4::new(
        (pixel & 0xff) as f32 / 255.0,
        ((pixel >> 8) & 0xff) as f32 / 255.0,
        ((pixel >> 16) & 0xff) as f32 / 255.0,
        ((pixel >> 24) & 0xff) as f32 / 255.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_layout() {
        assert_eq!(pack_rgba(Vec4::new(1.0, 0.0, 0.0, 1.0)), 0xff0000ff);
        assert_eq!(pack_rgba(Vec4::new(0.0, 1.0, 0.0, 1.0)), 0xff00ff00);
        assert_eq!(pack_rgba(Vec4::new(0.0, 0.0, 1.0, 1.0)), 0xffff0000);
        assert_eq!(pack_rgba(Vec4::new(1.0, 0.0, 1.0, 1.0)), 0xffff00ff);
        assert_eq!(pack_rgba(Vec4::new(0.0, 0.0, 0.0, 1.0)), 0xff000000);
    }

    #[test]
    fn test_truncation_not_rounding() {
        // 0.999 * 255 = 254.745, which truncates to 254
        let pixel = pack_rgba(Vec4::new(0.999, 0.5, 0.0, 1.0));
        assert_eq!(pixel & 0xff, 254);
        // 0.5 * 255 = 127.5 truncates to 127
        assert_eq!((pixel >> 8) & 0xff, 127);
    }

    #[test]
    fn test_round_trip_within_one_step() {
        let colors = [
            Vec4::new(0.0, 0.0, 0.0, 1.0),
            Vec4::new(1.0, 1.0, 1.0, 1.0),
            Vec4::new(0.25, 0.5, 0.75, 1.0),
            Vec4::new(0.1, 0.999, 0.333, 0.5),
        ];
        for color in colors {
            let back = unpack_rgba(pack_rgba(color));
            for i in 0..4 {
                assert!(
                    (back[i] - color[i]).abs() <= 1.0 / 255.0,
                    "channel {i} of {color:?} came back as {back:?}"
                );
            }
        }
    }
}
