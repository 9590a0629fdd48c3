use crate::bmp280::registers::Bmp280Register;

/// Oversampling setting, shared by the temperature (osrs_t, ctrl_meas bits 7:5) and
/// pressure (osrs_p, ctrl_meas bits 4:2) channels.
///
/// The discriminant is the raw 3-bit field; the position is applied when the
/// ctrl_meas byte is built.
///
/// | Variant | Field | Temperature resolution | Pressure resolution |
/// |---------|-------|------------------------|---------------------|
/// | Skipped | 000   | channel disabled       | channel disabled    |
/// | X1      | 001   | 16 bit / 0.0050 °C     | 16 bit / 2.62 Pa    |
/// | X2      | 010   | 17 bit / 0.0025 °C     | 17 bit / 1.31 Pa    |
/// | X4      | 011   | 18 bit / 0.0012 °C     | 18 bit / 0.66 Pa    |
/// | X8      | 100   | 19 bit / 0.0006 °C     | 19 bit / 0.33 Pa    |
/// | X16     | 101   | 20 bit / 0.0003 °C     | 20 bit / 0.16 Pa    |
///
/// Note: 110 and 111 also mean ×16 on the device and are never written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Oversampling {
    Skipped = 0b000,
    X1 = 0b001,
    X2 = 0b010,
    X4 = 0b011,
    X8 = 0b100,
    #[default]
    X16 = 0b101,
}

/// Power mode (mode[1:0] in ctrl_meas 0xF4, bits 1:0).
///
/// | Variant | Value | Behavior                                                        |
/// |---------|-------|-----------------------------------------------------------------|
/// | Sleep   | 00    | No measurements; registers stay readable                        |
/// | Forced  | 01    | One measurement cycle, then back to sleep; host must re-trigger |
/// | Normal  | 11    | Continuous: measure → standby (t_sb) → measure                  |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum PowerMode {
    Sleep = 0b00,
    Forced = 0b01,
    #[default]
    Normal = 0b11,
}

/// IIR filter coefficient (filter[2:0] in config 0xF5, bits 4:2).
///
/// Higher coefficient → stronger smoothing, slower response to real changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum IirFilter {
    #[default]
    Off = 0b000,
    X2 = 0b001,
    X4 = 0b010,
    X8 = 0b011,
    X16 = 0b100,
}

/// Standby duration between cycles in Normal mode (t_sb[2:0] in config 0xF5, bits 7:5).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum StandbyTime {
    #[default]
    Ms0_5 = 0b000,
    Ms62_5 = 0b001,
    Ms125 = 0b010,
    Ms250 = 0b011,
    Ms500 = 0b100,
    Ms1000 = 0b101,
    Ms2000 = 0b110,
    Ms4000 = 0b111,
}

/// Builds the ctrl_meas byte: `osrs_t[7:5] | osrs_p[4:2] | mode[1:0]`.
pub const fn ctrl_meas_value(
    osrs_t: Oversampling,
    osrs_p: Oversampling,
    mode: PowerMode,
) -> u8 {
    ((osrs_t as u8) << 5) | ((osrs_p as u8) << 2) | mode as u8
}

/// Builds the config byte: `t_sb[7:5] | filter[4:2]`. Bit 0 (3-wire SPI) stays clear.
pub const fn config_value(stdby: StandbyTime, iir: IirFilter) -> u8 {
    ((stdby as u8) << 5) | ((iir as u8) << 2)
}

/// Complete sensor configuration: both control registers in one value.
///
/// The default is what the driver writes at construction: ×16 oversampling on both
/// channels in Normal mode, with the filter and standby left at their power-on values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Bmp280Config {
    pub osrs_t: Oversampling,
    pub osrs_p: Oversampling,
    pub mode: PowerMode,
    pub iir: IirFilter,
    pub stdby: StandbyTime,
}

impl Bmp280Config {
    pub fn new(
        osrs_t: Oversampling,
        osrs_p: Oversampling,
        mode: PowerMode,
        iir: IirFilter,
        stdby: StandbyTime,
    ) -> Self {
        Self {
            osrs_t,
            osrs_p,
            mode,
            iir,
            stdby,
        }
    }

    pub fn with_osrs_t(mut self, osrs_t: Oversampling) -> Self {
        self.osrs_t = osrs_t;
        self
    }

    pub fn with_osrs_p(mut self, osrs_p: Oversampling) -> Self {
        self.osrs_p = osrs_p;
        self
    }

    pub fn with_mode(mut self, mode: PowerMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_filter(mut self, iir: IirFilter) -> Self {
        self.iir = iir;
        self
    }

    pub fn with_standby(mut self, stdby: StandbyTime) -> Self {
        self.stdby = stdby;
        self
    }

    /// `[register, value]` pair for ctrl_meas (0xF4), ready for an I²C write.
    pub fn ctrl_meas_reg(&self) -> [u8; 2] {
        [
            Bmp280Register::CtrlMeas.addr(),
            ctrl_meas_value(self.osrs_t, self.osrs_p, self.mode),
        ]
    }

    /// `[register, value]` pair for config (0xF5), ready for an I²C write.
    pub fn config_reg(&self) -> [u8; 2] {
        [
            Bmp280Register::Config.addr(),
            config_value(self.stdby, self.iir),
        ]
    }
}
