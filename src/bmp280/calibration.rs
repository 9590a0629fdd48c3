//! BMP280 calibration coefficients and temperature compensation.
//!
//! The factory-trimmed coefficients live in registers 0x88–0x9F as twelve little-endian
//! 16-bit words (BST-BMP280-DS001 rev 1.26, table 17). The compensation routine is the
//! fixed-point formula from section 3.11.3 of the same datasheet.

use crate::bmp280::registers::CALIB_BLOCK_LEN;

/// Factory-trimmed calibration coefficients (dig_T* and dig_P*), in register order.
///
/// dig_T1 and dig_P1 are unsigned; every other word is two's-complement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Bmp280Calib {
    /// Temperature coefficient 1 (unsigned, typical ~27000–28000)
    pub dig_t1: u16,
    pub dig_t2: i16,
    pub dig_t3: i16,
    /// Pressure coefficient 1 (unsigned)
    pub dig_p1: u16,
    pub dig_p2: i16,
    pub dig_p3: i16,
    pub dig_p4: i16,
    pub dig_p5: i16,
    pub dig_p6: i16,
    pub dig_p7: i16,
    pub dig_p8: i16,
    pub dig_p9: i16,
}

/// Result of the temperature compensation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TemperatureCompensation {
    /// Fine temperature carried into pressure compensation.
    pub t_fine: i32,
    /// Temperature in hundredths of a degree (2508 = 25.08 °C).
    pub centi_celsius: i32,
}

impl TemperatureCompensation {
    pub fn celsius(&self) -> f64 {
        f64::from(self.centi_celsius) / 100.0
    }
}

impl Bmp280Calib {
    /// Decodes the 24-byte block read from 0x88.
    pub fn from_bytes(buffer: &[u8; CALIB_BLOCK_LEN]) -> Self {
        let word = |i: usize| [buffer[i], buffer[i + 1]];
        Self {
            dig_t1: u16::from_le_bytes(word(0)),
            dig_t2: i16::from_le_bytes(word(2)),
            dig_t3: i16::from_le_bytes(word(4)),
            dig_p1: u16::from_le_bytes(word(6)),
            dig_p2: i16::from_le_bytes(word(8)),
            dig_p3: i16::from_le_bytes(word(10)),
            dig_p4: i16::from_le_bytes(word(12)),
            dig_p5: i16::from_le_bytes(word(14)),
            dig_p6: i16::from_le_bytes(word(16)),
            dig_p7: i16::from_le_bytes(word(18)),
            dig_p8: i16::from_le_bytes(word(20)),
            dig_p9: i16::from_le_bytes(word(22)),
        }
    }

    /// All twelve words in register order, widened so signed and unsigned fit together.
    pub fn words(&self) -> [i32; 12] {
        [
            i32::from(self.dig_t1),
            i32::from(self.dig_t2),
            i32::from(self.dig_t3),
            i32::from(self.dig_p1),
            i32::from(self.dig_p2),
            i32::from(self.dig_p3),
            i32::from(self.dig_p4),
            i32::from(self.dig_p5),
            i32::from(self.dig_p6),
            i32::from(self.dig_p7),
            i32::from(self.dig_p8),
            i32::from(self.dig_p9),
        ]
    }

    /// Compensates a raw 20-bit temperature ADC value (adc_T).
    ///
    /// Integer-only up to the final scaling. Intermediates are 64-bit and `>>` on them
    /// is an arithmetic shift, so negative terms round toward minus infinity.
    pub fn compensate_temperature(&self, adc_t: u32) -> TemperatureCompensation {
        let adc_t = i64::from(adc_t);
        let t1 = i64::from(self.dig_t1);
        let t2 = i64::from(self.dig_t2);
        let t3 = i64::from(self.dig_t3);

        let var1 = (((adc_t >> 3) - (t1 << 1)) * t2) >> 11;
        let var2 = (((((adc_t >> 4) - t1) * ((adc_t >> 4) - t1)) >> 12) * t3) >> 14;

        let t_fine = var1 + var2;
        let centi = (t_fine * 5 + 128) >> 8;

        // 20-bit ADC word, 16-bit coefficients: both fit in i32.
        TemperatureCompensation {
            t_fine: t_fine as i32,
            centi_celsius: centi as i32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Worked example from the datasheet, section 8.1.
    const DATASHEET_CALIB: Bmp280Calib = Bmp280Calib {
        dig_t1: 27504,
        dig_t2: 26435,
        dig_t3: -1000,
        dig_p1: 36477,
        dig_p2: -10685,
        dig_p3: 3024,
        dig_p4: 2855,
        dig_p5: 140,
        dig_p6: -7,
        dig_p7: 15500,
        dig_p8: -14600,
        dig_p9: 6000,
    };

    fn datasheet_bytes() -> [u8; CALIB_BLOCK_LEN] {
        let mut bytes = [0u8; CALIB_BLOCK_LEN];
        for (i, w) in DATASHEET_CALIB.words().iter().enumerate() {
            let le = (*w as u16).to_le_bytes();
            bytes[2 * i] = le[0];
            bytes[2 * i + 1] = le[1];
        }
        bytes
    }

    #[test]
    fn decodes_datasheet_block() {
        let bytes = datasheet_bytes();
        assert_eq!(&bytes[0..6], &[0x70, 0x6B, 0x43, 0x67, 0x18, 0xFC]);
        assert_eq!(Bmp280Calib::from_bytes(&bytes), DATASHEET_CALIB);
    }

    #[test]
    fn decode_is_deterministic() {
        let bytes = datasheet_bytes();
        assert_eq!(Bmp280Calib::from_bytes(&bytes), Bmp280Calib::from_bytes(&bytes));
    }

    #[test]
    fn only_t1_and_p1_are_unsigned() {
        let words = Bmp280Calib::from_bytes(&[0xFF; CALIB_BLOCK_LEN]).words();
        for (i, w) in words.iter().enumerate() {
            if i == 0 || i == 3 {
                assert_eq!(*w, 65535, "word {i}");
            } else {
                assert_eq!(*w, -1, "word {i}");
            }
        }
    }

    #[test]
    fn sign_boundary() {
        let mut bytes = [0u8; CALIB_BLOCK_LEN];
        // dig_t2 = 0x7FFF, dig_t3 = 0x8000
        bytes[2..6].copy_from_slice(&[0xFF, 0x7F, 0x00, 0x80]);
        // dig_p1 = 0x8000 stays unsigned
        bytes[6..8].copy_from_slice(&[0x00, 0x80]);
        let calib = Bmp280Calib::from_bytes(&bytes);
        assert_eq!(calib.dig_t2, 32767);
        assert_eq!(calib.dig_t3, -32768);
        assert_eq!(calib.dig_p1, 32768);
    }

    #[test]
    fn compensates_datasheet_example() {
        let t = DATASHEET_CALIB.compensate_temperature(519888);
        assert_eq!(t.t_fine, 128422);
        assert_eq!(t.centi_celsius, 2508);
        assert!((t.celsius() - 25.08).abs() < 1e-9);
    }

    #[test]
    fn negative_fine_temperature_rounds_toward_minus_infinity() {
        // adc_T well below dig_T1 << 3 drives var1 negative; the shifts must floor.
        let t = DATASHEET_CALIB.compensate_temperature(400_000);
        let adc = 400_000i64;
        let var1 = (((adc >> 3) - (27504 << 1)) * 26435) >> 11;
        let var2 = (((((adc >> 4) - 27504) * ((adc >> 4) - 27504)) >> 12) * -1000) >> 14;
        assert!(var1 < 0);
        assert_eq!(i64::from(t.t_fine), var1 + var2);
        assert_eq!(i64::from(t.centi_celsius), ((var1 + var2) * 5 + 128) >> 8);
        assert!(t.celsius() < 0.0);
    }
}
