pub mod calibration;
pub mod config;
pub mod measurement;
pub mod registers;

use core::fmt;
use std::time::{Duration, Instant};

use chrono::Utc;
use embedded_hal::{delay::DelayNs, i2c::I2c};
use log::{debug, trace};

use crate::bmp280::{
    calibration::Bmp280Calib,
    config::{Bmp280Config, Oversampling, PowerMode, ctrl_meas_value},
    measurement::RawMeasurement,
    registers::{BMP280_RESET_REG_VALUE, Bmp280Register},
};
use crate::reading::{Measurement, SensorInfo, SensorReading};

/// Minimum spacing between two samples.
pub const SAMPLE_INTERVAL: Duration = Duration::from_secs(1);

/// Time the device needs after a soft reset before it answers again.
const RESET_SETTLE_MS: u32 = 10;

/// Bus failures, tagged with the operation that hit them.
///
/// Every variant carries the transport's own error; nothing is retried.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Bmp280Error<E> {
    /// Soft reset command failed
    Reset(E),
    /// Failed to read chip ID register
    ReadChipId(E),
    /// Failed to read status register (0xF3)
    ReadStatus(E),
    /// Failed to read calibration coefficients
    ReadCalibration(E),
    /// Failed to write configuration register (0xF5)
    SetConfig(E),
    /// Failed to write measurement control register (0xF4)
    SetCtrlMeas(E),
    /// Failed to bulk read starting from register (0xF7)
    ReadData(E),
}

impl<E> Bmp280Error<E> {
    /// The underlying transport error.
    pub fn bus_error(&self) -> &E {
        match self {
            Bmp280Error::Reset(e)
            | Bmp280Error::ReadChipId(e)
            | Bmp280Error::ReadStatus(e)
            | Bmp280Error::ReadCalibration(e)
            | Bmp280Error::SetConfig(e)
            | Bmp280Error::SetCtrlMeas(e)
            | Bmp280Error::ReadData(e) => e,
        }
    }
}

impl<E: fmt::Debug> fmt::Display for Bmp280Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op = match self {
            Bmp280Error::Reset(_) => "soft reset",
            Bmp280Error::ReadChipId(_) => "chip id read",
            Bmp280Error::ReadStatus(_) => "status read",
            Bmp280Error::ReadCalibration(_) => "calibration read",
            Bmp280Error::SetConfig(_) => "config write",
            Bmp280Error::SetCtrlMeas(_) => "ctrl_meas write",
            Bmp280Error::ReadData(_) => "data read",
        };
        write!(f, "BMP280 {op} failed: {:?}", self.bus_error())
    }
}

impl<E: fmt::Debug> std::error::Error for Bmp280Error<E> {}

/// Contents of the status register (0xF3).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Status {
    /// A conversion is running.
    pub measuring: bool,
    /// NVM calibration data is being copied to image registers.
    pub im_update: bool,
}

impl From<u8> for Status {
    fn from(value: u8) -> Self {
        Self {
            measuring: value & 0b1000 != 0,
            im_update: value & 0b0001 != 0,
        }
    }
}

/// BMP280 driver instance (blocking I²C mode).
///
/// Owns the bus, the device address, a delay provider and the time of the last
/// completed sample. Share a physical bus through a bus-sharing wrapper; the driver
/// assumes nobody else talks to the device between its transactions.
pub struct Bmp280<I2C, D> {
    i2c: I2C,
    haddr: u8,
    delay: D,
    last_sample: Option<Instant>,
}

impl<I2C, D> Bmp280<I2C, D>
where
    I2C: I2c,
    D: DelayNs,
{
    /// Creates the driver and writes the default measurement setup
    /// (×16 temperature, ×16 pressure, Normal mode).
    ///
    /// # Arguments
    /// * `i2c` - blocking I²C bus
    /// * `delay` - delay provider used for throttling and reset timing
    /// * `haddr` - 0x77 or 0x76, see [`registers::address_from_sdo_gnd`]
    ///
    /// # Errors
    /// `SetCtrlMeas` if the configuration write fails.
    pub fn new(i2c: I2C, delay: D, haddr: u8) -> Result<Self, Bmp280Error<I2C::Error>> {
        let mut device = Self::new_unconfigured(i2c, delay, haddr);
        device.configure(Oversampling::X16, Oversampling::X16, PowerMode::Normal)?;
        Ok(device)
    }

    /// Creates the driver and applies a full configuration (both control registers).
    pub fn with_config(
        i2c: I2C,
        delay: D,
        haddr: u8,
        config: &Bmp280Config,
    ) -> Result<Self, Bmp280Error<I2C::Error>> {
        let mut device = Self::new_unconfigured(i2c, delay, haddr);
        device.apply_config(config)?;
        Ok(device)
    }

    fn new_unconfigured(i2c: I2C, delay: D, haddr: u8) -> Self {
        Self {
            i2c,
            haddr,
            delay,
            last_sample: None,
        }
    }

    /// Gives the bus and delay back.
    pub fn release(self) -> (I2C, D) {
        (self.i2c, self.delay)
    }

    pub fn address(&self) -> u8 {
        self.haddr
    }

    /// Writes ctrl_meas (0xF4): `(osrs_t << 5) | (osrs_p << 2) | mode`.
    pub fn configure(
        &mut self,
        osrs_t: Oversampling,
        osrs_p: Oversampling,
        mode: PowerMode,
    ) -> Result<(), Bmp280Error<I2C::Error>> {
        let value = ctrl_meas_value(osrs_t, osrs_p, mode);
        debug!("bmp280@{:#04x}: ctrl_meas <- {:#010b}", self.haddr, value);
        self.i2c
            .write(self.haddr, &[Bmp280Register::CtrlMeas.addr(), value])
            .map_err(Bmp280Error::SetCtrlMeas)
    }

    /// Writes config (0xF5) and then ctrl_meas (0xF4).
    ///
    /// Config goes first: in Normal mode writes to 0xF5 may be ignored.
    pub fn apply_config(&mut self, config: &Bmp280Config) -> Result<(), Bmp280Error<I2C::Error>> {
        debug!("bmp280@{:#04x}: applying {:?}", self.haddr, config);
        self.i2c
            .write(self.haddr, &config.config_reg())
            .map_err(Bmp280Error::SetConfig)?;
        self.i2c
            .write(self.haddr, &config.ctrl_meas_reg())
            .map_err(Bmp280Error::SetCtrlMeas)
    }

    /// Soft reset (0xE0 ← 0xB6), then waits for the device to come back.
    ///
    /// The device returns to Sleep mode; call [`Self::configure`] again afterwards.
    pub fn soft_reset(&mut self) -> Result<(), Bmp280Error<I2C::Error>> {
        self.i2c
            .write(
                self.haddr,
                &[Bmp280Register::Reset.addr(), BMP280_RESET_REG_VALUE],
            )
            .map_err(Bmp280Error::Reset)?;
        self.delay.delay_ms(RESET_SETTLE_MS);
        Ok(())
    }

    /// Reads the chip identification register (0x58 for a BMP280).
    pub fn chip_id(&mut self) -> Result<u8, Bmp280Error<I2C::Error>> {
        let mut chip_id = [0u8; 1];
        self.i2c
            .write_read(self.haddr, &[Bmp280Register::Id.addr()], &mut chip_id)
            .map_err(Bmp280Error::ReadChipId)?;
        Ok(chip_id[0])
    }

    pub fn status(&mut self) -> Result<Status, Bmp280Error<I2C::Error>> {
        let mut status = [0u8; 1];
        self.i2c
            .write_read(self.haddr, &[Bmp280Register::Status.addr()], &mut status)
            .map_err(Bmp280Error::ReadStatus)?;
        Ok(Status::from(status[0]))
    }

    /// Reads and decodes the 24-byte calibration block at 0x88.
    pub fn read_calibration(&mut self) -> Result<Bmp280Calib, Bmp280Error<I2C::Error>> {
        let mut buffer = [0u8; Bmp280Register::CalibStart.block_len()];
        self.i2c
            .write_read(self.haddr, &[Bmp280Register::CalibStart.addr()], &mut buffer)
            .map_err(Bmp280Error::ReadCalibration)?;
        let calib = Bmp280Calib::from_bytes(&buffer);
        trace!("bmp280@{:#04x}: calibration {:?}", self.haddr, calib.words());
        Ok(calib)
    }

    /// Burst-reads 0xF7–0xFC and splits out both ADC words.
    pub fn read_raw(&mut self) -> Result<RawMeasurement, Bmp280Error<I2C::Error>> {
        let mut raw_data = [0u8; Bmp280Register::PressMsb.block_len()];
        self.i2c
            .write_read(self.haddr, &[Bmp280Register::PressMsb.addr()], &mut raw_data)
            .map_err(Bmp280Error::ReadData)?;
        let raw = RawMeasurement::from_block(&raw_data);
        trace!("bmp280@{:#04x}: {:?}", self.haddr, raw);
        Ok(raw)
    }

    /// Produces one calibrated temperature reading.
    ///
    /// If the previous sample finished less than [`SAMPLE_INTERVAL`] ago, blocks for a
    /// full interval first. Calibration is read again on every call, right before the
    /// data block it compensates.
    pub fn sample(&mut self) -> Result<SensorReading, Bmp280Error<I2C::Error>> {
        if self
            .last_sample
            .is_some_and(|last| last.elapsed() < SAMPLE_INTERVAL)
        {
            debug!("bmp280@{:#04x}: throttled", self.haddr);
            self.delay.delay_ms(SAMPLE_INTERVAL.as_millis() as u32);
        }

        let calib = self.read_calibration()?;
        let raw = self.read_raw()?;
        let temperature = calib.compensate_temperature(raw.adc_t);

        let reading = SensorReading {
            sensor: SensorInfo::bmp280(),
            measurements: vec![Measurement::temperature(
                temperature.celsius(),
                Utc::now(),
            )],
        };
        self.last_sample = Some(Instant::now());
        Ok(reading)
    }
}
