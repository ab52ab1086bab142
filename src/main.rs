mod config;

use anyhow::{anyhow, bail, Context};
use chrono::Utc;
use clock::Clock;
use config::{Action, Config, Variant};
use linux_embedded_hal::I2cdev;
use log::*;
use mcp7940::{ic, DateTime, Mcp7940};

fn main() -> anyhow::Result<()> {
    // Initialize logger, the configured level is applied once loaded
    setup_logger()?;
    let config = Config::load()?;
    log::set_max_level(config.get_log_level()?);

    let i2c = I2cdev::new(&config.device.bus)
        .with_context(|| format!("Failed to open {}", config.device.bus))?;
    info!("Opened {} for {:?}", config.device.bus, config.device.variant);

    match config.device.variant {
        Variant::Mcp7940m => {
            if config.clock.battery_backup {
                warn!("Battery backup is only available on the MCP7940N, ignoring");
            }
            let mut clock = new_clock(Mcp7940::new_mcp7940m(i2c), &config)?;
            run(&mut clock, &config)
        }
        Variant::Mcp7940n => {
            let mut rtc = Mcp7940::new_mcp7940n(i2c);
            report_power_failure(&mut rtc)?;
            if config.clock.battery_backup {
                check(rtc.enable_battery_backup(), "Enabling battery backup")?;
            } else {
                check(rtc.disable_battery_backup(), "Disabling battery backup")?;
            }
            let mut clock = new_clock(rtc, &config)?;
            run(&mut clock, &config)?;
            let backup = check(clock.rtc().is_battery_backup_enabled(), "Reading VBATEN")?;
            info!("Battery backup {}", if backup { "enabled" } else { "disabled" });
            Ok(())
        }
    }
}

fn setup_logger() -> anyhow::Result<()> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                Utc::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(LevelFilter::Trace)
        .chain(std::io::stdout())
        .apply()
        .context("Failed to set up logger")?;
    log::set_max_level(LevelFilter::Info);
    Ok(())
}

/// Driver errors carry no source, turn them into messages.
fn check<T>(result: Result<T, mcp7940::Error>, what: &str) -> anyhow::Result<T> {
    result.map_err(|err| anyhow!("{} failed: {:?}", what, err))
}

fn host_time() -> anyhow::Result<DateTime> {
    let seconds = u32::try_from(Utc::now().timestamp()).context("Host time out of range")?;
    Ok(DateTime::from_unix_time(seconds))
}

fn new_clock<IC: ic::Variant>(
    mut rtc: Mcp7940<I2cdev, IC>,
    config: &Config,
) -> anyhow::Result<Clock<I2cdev, IC>> {
    check(rtc.init(), "Initialization")?;

    match config.get_square_wave()? {
        Some(freq) => {
            check(rtc.set_square_wave_frequency(freq), "Selecting square wave")?;
            check(rtc.enable_square_wave(), "Enabling square wave")?;
            info!("Square wave at {} Hz", freq.hertz());
        }
        None => check(rtc.disable_square_wave(), "Disabling square wave")?,
    }

    Ok(match config.get_last_set() {
        Some(last_set) => Clock::with_last_set(rtc, last_set),
        None => Clock::new(rtc),
    })
}

fn run<IC: ic::Variant>(clock: &mut Clock<I2cdev, IC>, config: &Config) -> anyhow::Result<()> {
    match config.clock.action {
        Action::Show => {}
        Action::AdjustHost => {
            let now = host_time()?;
            check(clock.adjust(&now), "Adjusting")?;
        }
        Action::AdjustBuild => {
            let date = env!("RTCSYNC_BUILD_DATE");
            let time = env!("RTCSYNC_BUILD_TIME");
            check(clock.adjust_to_build_time(date, time), "Adjusting")?;
        }
        Action::Calibrate => {
            if clock.last_set().is_none() {
                bail!("Calibration needs clock.last_set_unix");
            }
            let now = host_time()?;
            let (ppm, trim) = check(clock.calibrate_or_adjust(&now), "Calibration")?;
            info!("Clock deviated {} ppm, oscillator trim is now {}", ppm, trim);
        }
    }

    if let Some(last_set) = clock.last_set() {
        info!("Last set {} (last_set_unix = {})", last_set, last_set.unix_time());
    }
    show(clock.rtc())
}

fn show<IC: ic::Variant>(rtc: &mut Mcp7940<I2cdev, IC>) -> anyhow::Result<()> {
    let now = check(rtc.now(), "Reading the time")?;
    let running = check(rtc.is_oscillator_running(), "Reading OSCRUN")?;
    let trim = check(rtc.calibration_trim(), "Reading the trim")?;
    let mfp = check(rtc.mfp_mode(), "Reading CONTROL")?;
    info!(
        "RTC time {} (weekday {}), oscillator {}",
        now,
        now.day_of_the_week(),
        if running { "running" } else { "stopped" }
    );
    info!("Trim {}, MFP {:?}", trim, mfp);
    Ok(())
}

fn report_power_failure(rtc: &mut Mcp7940<I2cdev, ic::MCP7940N>) -> anyhow::Result<()> {
    if !check(rtc.has_power_failed(), "Reading PWRFAIL")? {
        return Ok(());
    }
    let down = check(rtc.power_down_timestamp(), "Reading power-down time")?;
    let up = check(rtc.power_up_timestamp(), "Reading power-up time")?;
    warn!(
        "Main power was lost from {:02}-{:02} {:02}:{:02} to {:02}-{:02} {:02}:{:02}",
        down.month(),
        down.day(),
        down.hour(),
        down.minute(),
        up.month(),
        up.day(),
        up.hour(),
        up.minute()
    );
    check(rtc.clear_power_failed(), "Clearing PWRFAIL")
}
