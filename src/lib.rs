//! Blocking BMP280 driver that turns raw ADC words into calibrated temperature readings.
//!
//! The bus is any [`embedded_hal::i2c::I2c`]; the driver never retries and hands every
//! transport error back to the caller.
//!
//! ```no_run
//! # use embedded_hal_mock::eh1::{delay::StdSleep, i2c::Mock};
//! # let i2c = Mock::new(&[]);
//! use bmp280_temp::bmp280::{Bmp280, registers::DEFAULT_ADDRESS};
//!
//! let mut sensor = Bmp280::new(i2c, StdSleep::new(), DEFAULT_ADDRESS)?;
//! let reading = sensor.sample()?;
//! println!("{:?}", reading.measurement("temperature"));
//! # Ok::<(), bmp280_temp::bmp280::Bmp280Error<embedded_hal::i2c::ErrorKind>>(())
//! ```

pub mod bmp280;
pub mod reading;

pub use bmp280::{Bmp280, Bmp280Error};
pub use reading::{Measurement, SensorInfo, SensorReading};
