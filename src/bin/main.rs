//! Prints one JSON reading per second from a BMP280 on a Linux I²C bus.
//!
//! Usage: `bmp280-json [BUS] [ADDRESS]`, defaults `/dev/i2c-1` and `0x77`.

use anyhow::Context;
use bmp280_temp::bmp280::{Bmp280, registers::DEFAULT_ADDRESS};
use linux_embedded_hal::{Delay, I2cdev};
use log::info;

const DEFAULT_BUS: &str = "/dev/i2c-1";

fn parse_address(arg: &str) -> anyhow::Result<u8> {
    let parsed = match arg.strip_prefix("0x").or_else(|| arg.strip_prefix("0X")) {
        Some(hex) => u8::from_str_radix(hex, 16),
        None => arg.parse(),
    };
    parsed.with_context(|| format!("invalid I2C address {arg:?}"))
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let bus = args.next().unwrap_or_else(|| DEFAULT_BUS.to_string());
    let haddr = match args.next() {
        Some(arg) => parse_address(&arg)?,
        None => DEFAULT_ADDRESS,
    };

    let i2c = I2cdev::new(&bus).with_context(|| format!("opening {bus}"))?;
    let mut sensor = Bmp280::new(i2c, Delay, haddr)?;
    info!("BMP280 at {haddr:#04x} on {bus}, chip id {:#04x}", sensor.chip_id()?);

    loop {
        let reading = sensor.sample()?;
        println!("{}", serde_json::to_string_pretty(&reading)?);
    }
}
