use crate::bmp280::registers::DATA_BLOCK_LEN;

/// Assembles a 20-bit ADC word from its msb, lsb and xlsb registers.
///
/// Only the upper nibble of xlsb carries data.
pub const fn decode_raw20(msb: u8, lsb: u8, xlsb: u8) -> u32 {
    ((msb as u32) << 12) | ((lsb as u32) << 4) | ((xlsb as u32) >> 4)
}

/// Uncompensated ADC counts from one burst read of 0xF7–0xFC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawMeasurement {
    pub adc_p: u32,
    pub adc_t: u32,
}

impl RawMeasurement {
    pub fn from_block(raw: &[u8; DATA_BLOCK_LEN]) -> Self {
        Self {
            adc_p: decode_raw20(raw[0], raw[1], raw[2]),
            adc_t: decode_raw20(raw[3], raw[4], raw[5]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw20_bit_positions() {
        assert_eq!(decode_raw20(0x80, 0x00, 0x00), 0x80000);
        assert_eq!(decode_raw20(0x00, 0x00, 0x00), 0);
        assert_eq!(decode_raw20(0xFF, 0xFF, 0xF0), 0xFFFFF);
        assert_eq!(decode_raw20(0x00, 0x01, 0x00), 0x10);
        assert_eq!(decode_raw20(0x00, 0x00, 0x10), 0x1);
    }

    #[test]
    fn xlsb_low_nibble_is_ignored() {
        assert_eq!(decode_raw20(0x12, 0x34, 0x5F), decode_raw20(0x12, 0x34, 0x50));
        assert_eq!(decode_raw20(0xFF, 0xFF, 0xFF), 0xFFFFF);
    }

    #[test]
    fn block_splits_pressure_then_temperature() {
        // adc_T = 519888 = 0x7EED0 from the datasheet example.
        let raw = RawMeasurement::from_block(&[0x65, 0x5A, 0xC0, 0x7E, 0xED, 0x00]);
        assert_eq!(raw.adc_p, 0x655AC);
        assert_eq!(raw.adc_t, 519888);
    }
}
