use super::Argb;

pub fn compose(array: [u8; 4]) -> Argb {
    Argb::from_be_bytes(array)
}

pub fn decompose(c: Argb) -> [u8; 4] {
    c.to_be_bytes()
}

pub fn rgb(r: u8, g: u8, b: u8) -> Argb {
    compose([0xFF, r, g, b])
}

pub fn gray(level: u8) -> Argb {
    rgb(level, level, level)
}

pub const WHITE: Argb = 0xFF_FF_FF_FF;
pub const BLACK: Argb = 0xFF_00_00_00;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compose_decompose() {
        let c = rgb(0x12, 0x34, 0x56);
        assert_eq!(c, 0xFF_12_34_56);
        assert_eq!(decompose(c), [0xFF, 0x12, 0x34, 0x56]);
    }

    #[test]
    fn gray_has_equal_channels() {
        let [a, r, g, b] = decompose(gray(77));
        assert_eq!(a, 0xFF);
        assert_eq!(r, 77);
        assert_eq!(g, 77);
        assert_eq!(b, 77);
    }
}
