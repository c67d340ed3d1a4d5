// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Closed enumerations decoded from wire tokens.
//!
//! Every converter is total: tokens it does not recognize map to `Unknown`.
//! Matching is case-sensitive, as FAHClient emits fixed spellings.

use serde::Serialize;

/// Total conversion from a raw wire token.
pub trait FromToken: Sized {
    fn from_token(token: &str) -> Self;
}

crate::wire_enum! {
    /// Work assignment class requested by a client or slot.
    pub enum ClientType {
        Normal => "normal",
        Advanced => "advanced",
        Beta => "beta",
        Internal => "internal",
        BigAdv => "bigadv",
    }
}

crate::wire_enum! {
    /// Core family requested by a client or slot.
    pub enum ClientSubType {
        Normal => "NORMAL",
        StdCli => "STDCLI",
        Linux => "LINUX",
        Smp => "SMP",
        Gpu => "GPU",
    }
}

crate::wire_enum! {
    /// OS scheduling priority of the folding core.
    pub enum CorePriority {
        Idle => "idle",
        Low => "low",
    }
}

crate::wire_enum! {
    pub enum MaxPacketSize {
        Small => "small",
        Normal => "normal",
        Big => "big",
    }
}

crate::wire_enum! {
    pub enum SlotStatus {
        Running => "RUNNING",
        Ready => "READY",
        Paused => "PAUSED",
        Finishing => "FINISHING",
        Stopping => "STOPPING",
        Failed => "FAILED",
        Offline => "OFFLINE",
        Disabled => "DISABLED",
        Updating => "UPDATING",
    }
}

crate::wire_enum! {
    /// Slot kind, from the leading word of its description (`smp:4`, `gpu:0:...`).
    pub enum SlotType {
        Cpu => "cpu",
        Smp => "smp",
        Gpu => "gpu",
        Uniprocessor => "uniprocessor",
    }
}

impl SlotType {
    pub fn from_description(description: &str) -> Self {
        Self::from_token(description.split(':').next().unwrap_or(""))
    }
}

crate::wire_enum! {
    /// Work unit queue state.
    pub enum UnitState {
        Running => "RUNNING",
        Ready => "READY",
        Download => "DOWNLOAD",
        Send => "SEND",
        Paused => "PAUSED",
        Finishing => "FINISHING",
        Stopping => "STOPPING",
        Done => "DONE",
        Failed => "FAILED",
        Dumped => "DUMPED",
    }
}

crate::wire_enum! {
    /// GPU vendor, from the prefix of a `GPU n` description (`NVIDIA:1 ...`).
    pub enum GpuManufacturer {
        Ati => "ATI",
        Amd => "AMD",
        Nvidia => "NVIDIA",
        Intel => "INTEL",
    }
}

impl GpuManufacturer {
    pub fn from_description(description: &str) -> Self {
        match description.split_once(':') {
            Some((vendor, _)) => Self::from_token(vendor.trim()),
            None => Self::Unknown,
        }
    }
}

crate::wire_enum! {
    pub enum OperatingSystemArchitecture {
        X86 => "X86",
        X64 => "AMD64",
        Arm64 => "ARM64",
    }
}

/// CPU vendor, from the leading vendor string of `CPU ID`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum CpuManufacturer {
    #[default]
    Unknown,
    Intel,
    Amd,
}

impl CpuManufacturer {
    pub const KNOWN: &'static [CpuManufacturer] = &[Self::Intel, Self::Amd];
}

impl FromToken for CpuManufacturer {
    fn from_token(token: &str) -> Self {
        match token.split_whitespace().next().unwrap_or("") {
            "GenuineIntel" | "Intel" => Self::Intel,
            "AuthenticAMD" | "AMD" => Self::Amd,
            _ => Self::Unknown,
        }
    }
}

crate::simple_display! {
    CpuManufacturer {
        Unknown => "Unknown",
        Intel => "Intel",
        Amd => "AMD",
    }
}

/// CPU product family, from the `CPU` brand string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum CpuType {
    #[default]
    Unknown,
    Core2,
    CoreI3,
    CoreI5,
    CoreI7,
    CoreI9,
    Xeon,
    Pentium,
    Celeron,
    Atom,
    Athlon,
    Phenom,
    Opteron,
    Fx,
    Ryzen,
    Threadripper,
    Epyc,
}

/// Brand-string fragments checked in order; more specific names come first.
const CPU_TYPE_MARKERS: &[(&str, CpuType)] = &[
    ("Core(TM)2", CpuType::Core2),
    ("Core(TM) i3", CpuType::CoreI3),
    ("Core(TM) i5", CpuType::CoreI5),
    ("Core(TM) i7", CpuType::CoreI7),
    ("Core(TM) i9", CpuType::CoreI9),
    ("Xeon", CpuType::Xeon),
    ("Pentium", CpuType::Pentium),
    ("Celeron", CpuType::Celeron),
    ("Atom", CpuType::Atom),
    ("Athlon", CpuType::Athlon),
    ("Phenom", CpuType::Phenom),
    ("Opteron", CpuType::Opteron),
    ("FX(tm)", CpuType::Fx),
    ("Threadripper", CpuType::Threadripper),
    ("Ryzen", CpuType::Ryzen),
    ("EPYC", CpuType::Epyc),
];

impl CpuType {
    pub fn known() -> impl Iterator<Item = CpuType> {
        CPU_TYPE_MARKERS.iter().map(|(_, t)| *t)
    }
}

impl FromToken for CpuType {
    fn from_token(token: &str) -> Self {
        CPU_TYPE_MARKERS
            .iter()
            .find(|(marker, _)| token.contains(marker))
            .map(|(_, t)| *t)
            .unwrap_or_default()
    }
}

crate::simple_display! {
    CpuType {
        Unknown => "Unknown",
        Core2 => "Core 2",
        CoreI3 => "Core i3",
        CoreI5 => "Core i5",
        CoreI7 => "Core i7",
        CoreI9 => "Core i9",
        Xeon => "Xeon",
        Pentium => "Pentium",
        Celeron => "Celeron",
        Atom => "Atom",
        Athlon => "Athlon",
        Phenom => "Phenom",
        Opteron => "Opteron",
        Fx => "FX",
        Ryzen => "Ryzen",
        Threadripper => "Threadripper",
        Epyc => "EPYC",
    }
}

/// Operating system family, from the `OS` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum OperatingSystemType {
    #[default]
    Unknown,
    Windows,
    WindowsXp,
    WindowsVista,
    Windows7,
    Windows8,
    Windows10,
    Windows11,
    WindowsServer,
    Linux,
    MacOs,
}

const WINDOWS_EDITIONS: &[(&str, OperatingSystemType)] = &[
    ("XP", OperatingSystemType::WindowsXp),
    ("Vista", OperatingSystemType::WindowsVista),
    ("7", OperatingSystemType::Windows7),
    ("8", OperatingSystemType::Windows8),
    ("10", OperatingSystemType::Windows10),
    ("11", OperatingSystemType::Windows11),
    ("Server", OperatingSystemType::WindowsServer),
];

impl FromToken for OperatingSystemType {
    fn from_token(token: &str) -> Self {
        if let Some(at) = token.find("Windows") {
            let rest = &token[at + "Windows".len()..];
            let edition = rest.split_whitespace().next().unwrap_or("");
            return WINDOWS_EDITIONS
                .iter()
                .find(|(name, _)| *name == edition)
                .map(|(_, t)| *t)
                .unwrap_or(Self::Windows);
        }
        if token.contains("Linux") {
            return Self::Linux;
        }
        if token.starts_with("OS X")
            || token.starts_with("Mac OS X")
            || token.starts_with("macOS")
            || token.starts_with("Darwin")
        {
            return Self::MacOs;
        }
        Self::Unknown
    }
}

crate::simple_display! {
    OperatingSystemType {
        Unknown => "Unknown",
        Windows => "Windows",
        WindowsXp => "Windows XP",
        WindowsVista => "Windows Vista",
        Windows7 => "Windows 7",
        Windows8 => "Windows 8",
        Windows10 => "Windows 10",
        Windows11 => "Windows 11",
        WindowsServer => "Windows Server",
        Linux => "Linux",
        MacOs => "macOS",
    }
}

#[cfg(test)]
#[path = "enums_tests.rs"]
mod tests;
