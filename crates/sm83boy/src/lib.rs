use anyhow::{Context, Result};
use sm83boy_core::cpu::Registers;
use sm83boy_core::{CartridgeHeader, Machine, RunState};

/// Default number of instructions to execute when none is given.
pub const DEFAULT_STEPS: u64 = 10_000_000;

/// What a headless run leaves behind.
pub struct RunSummary {
    pub header: Option<CartridgeHeader>,
    pub steps: u64,
    pub cycles: u64,
    pub registers: Registers,
    pub state: RunState,
    pub serial: Vec<u8>,
}

/// Execute up to `max_steps` instructions of `rom_data`.
///
/// The run ends early if the CPU parks itself in STOP, since nothing inside
/// the core can wake it again.
pub fn run_headless(rom_data: Vec<u8>, max_steps: u64) -> Result<RunSummary> {
    let mut gb = Machine::new(rom_data);
    let mut cycles = 0u64;
    let mut steps = 0u64;

    while steps < max_steps {
        if gb.cpu().state() == RunState::Stopped {
            log::info!("CPU stopped after {steps} steps");
            break;
        }
        let taken = gb
            .step()
            .with_context(|| format!("step {steps} failed after {cycles} cycles"))?;
        cycles += taken as u64;
        steps += 1;
    }

    Ok(RunSummary {
        header: gb.header().cloned(),
        steps,
        cycles,
        registers: gb.cpu().regs,
        state: gb.cpu().state(),
        serial: gb.take_serial_output(),
    })
}
