use anyhow::{Context, Result};
use sm83boy::{run_headless, DEFAULT_STEPS};

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let Some(rom_path) = args.next() else {
        eprintln!(
            "No ROM path provided.\n\
             Usage: sm83boy <rom.gb> [steps]"
        );
        std::process::exit(1);
    };
    let max_steps = match args.next() {
        Some(steps) => steps
            .parse::<u64>()
            .with_context(|| format!("invalid step count '{steps}'"))?,
        None => DEFAULT_STEPS,
    };

    log::info!("Running ROM path: '{}' for up to {} steps", rom_path, max_steps);
    let rom = std::fs::read(&rom_path).with_context(|| format!("failed to read ROM file '{rom_path}'"))?;

    let summary = run_headless(rom, max_steps)?;

    if let Some(header) = &summary.header {
        println!(
            "title: {:?}  type: 0x{:02X} ({:?})  ROM: {} KiB  RAM: {} bytes  checksum: {}",
            header.title,
            header.cartridge_type,
            header.mbc,
            header.rom_size / 1024,
            header.ram_size,
            if header.header_checksum_valid() { "ok" } else { "BAD" },
        );
    }

    let r = &summary.registers;
    println!(
        "{} steps, {} cycles, state {:?}",
        summary.steps, summary.cycles, summary.state
    );
    println!(
        "AF={:04X} BC={:04X} DE={:04X} HL={:04X} SP={:04X} PC={:04X}",
        r.af(),
        r.bc(),
        r.de(),
        r.hl(),
        r.sp,
        r.pc
    );

    if !summary.serial.is_empty() {
        println!("serial:\n{}", String::from_utf8_lossy(&summary.serial));
    }

    Ok(())
}
