/// BMP280 register map (Bosch Sensortec BMP280 datasheet, revision 1.26).
///
/// Only the registers the driver touches are listed. Every entry knows its own
/// address and how many bytes a block access starting there transfers, so callers
/// never pair an address with the wrong length.
///
/// Key groups:
/// - **Measurement results** - 0xF7–0xFC (6 bytes): pressure (20-bit) + temperature (20-bit)
/// - **Control registers** - 0xF4 (measurement config), 0xF5 (IIR + standby)
/// - **Status** - 0xF3 (measuring / updating bits)
/// - **Reset & ID** - 0xE0 (soft reset), 0xD0 (chip ID)
/// - **Calibration** - 0x88–0x9F (24 bytes, read-only, factory trimmed)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Bmp280Register {
    // Start of the burst-read block: press_msb..temp_xlsb
    PressMsb = 0xF7,
    Config = 0xF5,
    CtrlMeas = 0xF4,
    // bit 3 - conversion running, bit 0 - NVM data being copied
    Status = 0xF3,
    // Writing 0xB6 runs the complete power-on-reset procedure
    Reset = 0xE0,
    // Must read 0x58 after start up
    Id = 0xD0,
    CalibStart = 0x88,
}

impl Bmp280Register {
    /// Register address on the bus.
    pub const fn addr(self) -> u8 {
        self as u8
    }

    /// Number of bytes transferred by a block access at this register.
    pub const fn block_len(self) -> usize {
        match self {
            Bmp280Register::PressMsb => DATA_BLOCK_LEN,
            Bmp280Register::CalibStart => CALIB_BLOCK_LEN,
            Bmp280Register::Config
            | Bmp280Register::CtrlMeas
            | Bmp280Register::Status
            | Bmp280Register::Reset
            | Bmp280Register::Id => 1,
        }
    }
}

pub const DATA_BLOCK_LEN: usize = 6;
pub const CALIB_BLOCK_LEN: usize = 24;

pub const BMP280_RESET_REG_VALUE: u8 = 0xB6;
pub const BMP280_CHIP_ID: u8 = 0x58;

/// Address with SDO pulled to VDDIO.
pub const DEFAULT_ADDRESS: u8 = 0x77;
/// Address with SDO tied to GND.
pub const SECONDARY_ADDRESS: u8 = 0x76;

/// Picks the I²C address from how the SDO pin is wired.
pub const fn address_from_sdo_gnd(sdo_gnd: bool) -> u8 {
    if sdo_gnd {
        SECONDARY_ADDRESS
    } else {
        DEFAULT_ADDRESS
    }
}
