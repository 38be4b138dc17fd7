use typed_builder::TypedBuilder;

/// Options for constructing a [`Machine`](crate::Machine).
///
/// ```
/// use sm83boy_core::MachineConfig;
///
/// let config = MachineConfig::builder().ram_size_override(Some(0x2000)).build();
/// assert!(config.skip_boot);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, TypedBuilder)]
pub struct MachineConfig {
    /// Use this external RAM size instead of the one in the ROM header.
    #[builder(default)]
    pub ram_size_override: Option<usize>,
    /// Boot ROM mapped over $0000 until the guest writes to $FF50.
    #[builder(default)]
    pub boot_rom: Option<Vec<u8>>,
    /// Start in the DMG post-boot state at PC=$0100 instead of running the
    /// boot ROM. Ignored (treated as true) when no boot ROM is supplied.
    #[builder(default = true)]
    pub skip_boot: bool,
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl MachineConfig {
    /// Whether the machine should start by executing the boot ROM.
    pub(crate) fn runs_boot_rom(&self) -> bool {
        !self.skip_boot && self.boot_rom.is_some()
    }
}
