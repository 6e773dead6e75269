/// A single decoded RGBA sample with 8 bits per channel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RGBAColorFormat {
    red: u8,
    green: u8,
    blue: u8,
    alpha: u8,
}

impl RGBAColorFormat {
    pub const fn new(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        RGBAColorFormat {
            red,
            green,
            blue,
            alpha,
        }
    }

    pub const fn opaque(red: u8, green: u8, blue: u8) -> Self {
        Self::new(red, green, blue, u8::MAX)
    }

    pub fn red(&self) -> u8 {
        self.red
    }

    pub fn green(&self) -> u8 {
        self.green
    }

    pub fn blue(&self) -> u8 {
        self.blue
    }

    pub fn alpha(&self) -> u8 {
        self.alpha
    }

    pub fn rgb(&self) -> (u8, u8, u8) {
        (self.red, self.green, self.blue)
    }
}

impl From<[u8; 4]> for RGBAColorFormat {
    fn from(value: [u8; 4]) -> Self {
        let [red, green, blue, alpha] = value;
        RGBAColorFormat::new(red, green, blue, alpha)
    }
}

impl From<(u8, u8, u8)> for RGBAColorFormat {
    fn from(value: (u8, u8, u8)) -> Self {
        let (red, green, blue) = value;
        RGBAColorFormat::opaque(red, green, blue)
    }
}

impl From<&::image::Rgba<u8>> for RGBAColorFormat {
    fn from(value: &::image::Rgba<u8>) -> Self {
        RGBAColorFormat::from(value.0)
    }
}

impl From<::image::Rgba<u8>> for RGBAColorFormat {
    fn from(value: ::image::Rgba<u8>) -> Self {
        RGBAColorFormat::from(&value)
    }
}

#[cfg(test)]
mod test {
    use super::RGBAColorFormat;

    #[test]
    fn convert_channel_array_keeps_order() {
        let color = RGBAColorFormat::from([1_u8, 2, 3, 4]);
        assert_eq!(color.red(), 1, "red is wrong");
        assert_eq!(color.green(), 2, "green is wrong");
        assert_eq!(color.blue(), 3, "blue is wrong");
        assert_eq!(color.alpha(), 4, "alpha is wrong");
    }

    #[test]
    fn convert_rgb_tuple_is_opaque() {
        let color = RGBAColorFormat::from((255_u8, 0, 0));
        assert_eq!(color.alpha(), 255);
        assert_eq!(color.rgb(), (255, 0, 0));
    }

    #[test]
    fn convert_image_crate_pixel() {
        let pixel = ::image::Rgba([10_u8, 20, 30, 0]);
        let color = RGBAColorFormat::from(&pixel);
        assert_eq!(color, RGBAColorFormat::new(10, 20, 30, 0));
    }
}
