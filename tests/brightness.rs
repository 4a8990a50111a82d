mod tests {
    use myrtio_apa102_light::brightness::{MARKER, MAX_LEVEL, decode, encode};

    #[test]
    fn test_round_trip() {
        for level in 0..=MAX_LEVEL {
            assert_eq!(decode(encode(level)), level);
        }
    }

    #[test]
    fn test_encode_sets_marker() {
        assert_eq!(encode(0), 0xE0);
        assert_eq!(encode(10), 0xEA);
        assert_eq!(encode(31), 0xFF);
        for level in 0..=MAX_LEVEL {
            assert_eq!(encode(level) & MARKER, MARKER);
        }
    }

    #[test]
    fn test_encode_clamps() {
        assert_eq!(encode(32), encode(31));
        assert_eq!(encode(200), encode(31));
        assert_eq!(encode(u8::MAX), encode(31));
    }

    #[test]
    fn test_decode_ignores_marker() {
        assert_eq!(decode(0x05), 5);
        assert_eq!(decode(0xE5), 5);
        assert_eq!(decode(0xFF), 31);
    }
}
