/// Copies RGB pixels into an RGBA frame, setting alpha to opaque. Copies
/// as many whole pixels as both sides hold.
pub fn copy_rgb_to_rgba(src: &[u8], dst: &mut [u8]) {
    for (src_pixel, dst_pixel) in src.chunks_exact(3).zip(dst.chunks_exact_mut(4)) {
        dst_pixel[..3].copy_from_slice(src_pixel);
        dst_pixel[3] = 255;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copies_channels_and_sets_alpha() {
        let src = [85, 85, 255, 255, 255, 255];
        let mut dst = [0; 8];

        copy_rgb_to_rgba(&src, &mut dst);

        assert_eq!(dst, [85, 85, 255, 255, 255, 255, 255, 255]);
    }

    #[test]
    fn test_stops_at_shorter_side() {
        let src = [1, 2, 3, 4, 5, 6];
        let mut dst = [9; 4];

        copy_rgb_to_rgba(&src, &mut dst);

        assert_eq!(dst, [1, 2, 3, 255]);
    }
}
