use crate::config::MachineConfig;
use crate::cpu::Cpu;
use crate::error::Result;

use super::{Cartridge, CartridgeHeader, MemoryBus};

/// A DMG: CPU, bus and cartridge.
///
/// The host drives it one instruction at a time with [`Machine::step`], or in
/// bulk with [`Machine::run_cycles`].
pub struct Machine {
    cpu: Cpu,
    bus: MemoryBus,
    config: MachineConfig,
}

impl Machine {
    /// Build a machine around `rom` with the default configuration, ready to
    /// run from $0100.
    pub fn new(rom: Vec<u8>) -> Self {
        Self::with_config(rom, MachineConfig::default())
    }

    pub fn with_config(rom: Vec<u8>, config: MachineConfig) -> Self {
        let (cpu, mut bus) = Self::power_on(&config);
        bus.load_cartridge(Cartridge::with_ram_size(rom, config.ram_size_override));
        Self { cpu, bus, config }
    }

    fn power_on(config: &MachineConfig) -> (Cpu, MemoryBus) {
        match &config.boot_rom {
            Some(boot_rom) if config.runs_boot_rom() => {
                log::info!("starting from a {}-byte boot ROM", boot_rom.len());
                (Cpu::power_on(), MemoryBus::with_boot_rom(boot_rom.clone()))
            }
            _ => (Cpu::new(), MemoryBus::new()),
        }
    }

    /// Execute one instruction, plus any interrupt dispatch it leads to.
    /// Returns the T-cycles consumed.
    pub fn step(&mut self) -> Result<u32> {
        self.cpu.step(&mut self.bus)
    }

    /// Step until at least `budget` T-cycles have elapsed. Returns the number
    /// actually run, which may overshoot by the last instruction.
    pub fn run_cycles(&mut self, budget: u64) -> Result<u64> {
        let mut elapsed = 0u64;
        while elapsed < budget {
            elapsed += self.step()? as u64;
        }
        Ok(elapsed)
    }

    /// Return to the configured start state. The cartridge stays inserted
    /// with its banking reset; external RAM is kept.
    pub fn reset(&mut self) {
        self.bus.reset();
        if self.config.runs_boot_rom() {
            self.cpu = Cpu::power_on();
        } else {
            self.cpu.reset();
            self.bus.set_post_boot_state();
        }
    }

    /// Swap in a different cartridge. CPU and bus state are left alone.
    pub fn load_cartridge(&mut self, cartridge: Cartridge) {
        self.bus.load_cartridge(cartridge);
    }

    /// Raise the interrupt whose handler is at `vector` ($40, $48, $50, $58
    /// or $60).
    pub fn trigger_interrupt(&mut self, vector: u16) -> Result<()> {
        self.cpu.trigger_interrupt(&mut self.bus, vector)
    }

    pub fn cpu(&self) -> &Cpu {
        &self.cpu
    }

    pub fn cpu_mut(&mut self) -> &mut Cpu {
        &mut self.cpu
    }

    pub fn bus(&self) -> &MemoryBus {
        &self.bus
    }

    pub fn bus_mut(&mut self) -> &mut MemoryBus {
        &mut self.bus
    }

    pub fn header(&self) -> Option<&CartridgeHeader> {
        self.bus.header()
    }

    pub fn serial_output(&self) -> &[u8] {
        self.bus.serial_output()
    }

    pub fn take_serial_output(&mut self) -> Vec<u8> {
        self.bus.take_serial_output()
    }
}
