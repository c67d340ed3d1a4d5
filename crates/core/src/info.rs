// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `info` message: client, build and host system details.
//!
//! On the wire the body is a list of sections, each a list whose first
//! element is the section title followed by `[key, value]` pairs:
//!
//! ```text
//! [["Build", ["Version", "7.1.43"], ["SVN Rev", "2908"]], ["System", ...]]
//! ```

use std::borrow::Cow;
use std::sync::LazyLock;

use fah_pyon::{Value, ValueMap};
use serde::Serialize;

use crate::mapping::convert;
use crate::{
    ConversionError, CpuManufacturer, CpuType, GpuManufacturer, Mapped, OperatingSystemArchitecture,
    OperatingSystemType, PropertyTable,
};

/// Number of `GPU n` entries FAHClient reports at most.
pub const MAX_GPUS: usize = 8;

#[derive(Debug, Clone, Default, Serialize)]
pub struct Info {
    pub client: ClientInfo,
    pub build: BuildInfo,
    pub system: SystemInfo,
    pub errors: Vec<ConversionError>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ClientInfo {
    pub website: Option<String>,
    pub copyright: Option<String>,
    pub author: Option<String>,
    pub args: Option<String>,
    pub config: Option<String>,
    pub errors: Vec<ConversionError>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct BuildInfo {
    pub version: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub svn_rev: Option<i32>,
    pub branch: Option<String>,
    pub compiler: Option<String>,
    pub options: Option<String>,
    pub platform: Option<String>,
    pub bits: Option<i32>,
    pub mode: Option<String>,
    pub errors: Vec<ConversionError>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SystemInfo {
    pub cpu: Option<String>,
    pub cpu_type: CpuType,
    pub cpu_id: Option<String>,
    pub cpu_manufacturer: CpuManufacturer,
    pub cpu_count: Option<i32>,
    /// Raw memory text, e.g. `4.00GiB`.
    pub memory: Option<String>,
    /// Memory in GiB.
    pub memory_value: Option<f64>,
    pub free_memory: Option<String>,
    pub free_memory_value: Option<f64>,
    pub threads: Option<String>,
    pub operating_system: Option<String>,
    pub operating_system_type: OperatingSystemType,
    pub operating_system_architecture: OperatingSystemArchitecture,
    pub operating_system_version: Option<String>,
    pub gpu_count: Option<i32>,
    pub gpu_ids: [Option<String>; MAX_GPUS],
    pub gpu_manufacturers: [GpuManufacturer; MAX_GPUS],
    pub cuda: Option<String>,
    pub cuda_driver: Option<String>,
    pub has_battery: Option<bool>,
    pub on_battery: Option<bool>,
    pub utc_offset: Option<i32>,
    pub process_id: Option<i64>,
    pub working_directory: Option<String>,
    pub win32_service: Option<bool>,
    pub errors: Vec<ConversionError>,
}

impl SystemInfo {
    /// Description of GPU `index`, if reported.
    pub fn gpu_id(&self, index: usize) -> Option<&str> {
        self.gpu_ids.get(index).and_then(|g| g.as_deref())
    }

    pub fn gpu_manufacturer(&self, index: usize) -> GpuManufacturer {
        self.gpu_manufacturers.get(index).copied().unwrap_or_default()
    }
}

crate::message_object!(Info, ClientInfo, BuildInfo, SystemInfo);

fn gpu_manufacturer(value: &Value) -> Result<GpuManufacturer, String> {
    convert::text(value).map(|s| GpuManufacturer::from_description(&s))
}

static INFO_TABLE: LazyLock<PropertyTable<Info>> = LazyLock::new(|| {
    PropertyTable::<Info>::builder()
        .nested::<ClientInfo>("Client", "Folding@home Client", |i, c| i.client = c)
        .nested::<ClientInfo>("Client", "FAHClient", |i, c| i.client = c)
        .nested::<BuildInfo>("Build", "Build", |i, b| i.build = b)
        .nested::<SystemInfo>("System", "System", |i, s| i.system = s)
        .build()
});

static CLIENT_TABLE: LazyLock<PropertyTable<ClientInfo>> = LazyLock::new(|| {
    PropertyTable::<ClientInfo>::builder()
        .field("Website", "Website", convert::text, |c, v| c.website = Some(v))
        .field("Copyright", "Copyright", convert::text, |c, v| c.copyright = Some(v))
        .field("Author", "Author", convert::text, |c, v| c.author = Some(v))
        .field("Args", "Args", convert::text, |c, v| c.args = Some(v))
        .field("Config", "Config", convert::text, |c, v| c.config = Some(v))
        .build()
});

static BUILD_TABLE: LazyLock<PropertyTable<BuildInfo>> = LazyLock::new(|| {
    PropertyTable::<BuildInfo>::builder()
        .field("Version", "Version", convert::text, |b, v| b.version = Some(v))
        .field("Date", "Date", convert::text, |b, v| b.date = Some(v))
        .field("Time", "Time", convert::text, |b, v| b.time = Some(v))
        .field("SvnRev", "SVN Rev", convert::int32, |b, v| b.svn_rev = Some(v))
        .field("Branch", "Branch", convert::text, |b, v| b.branch = Some(v))
        .field("Compiler", "Compiler", convert::text, |b, v| b.compiler = Some(v))
        .field("Options", "Options", convert::text, |b, v| b.options = Some(v))
        .field("Platform", "Platform", convert::text, |b, v| b.platform = Some(v))
        .field("Bits", "Bits", convert::int32, |b, v| b.bits = Some(v))
        .field("Mode", "Mode", convert::text, |b, v| b.mode = Some(v))
        .build()
});

/// Registers `GpuIdN` and `GpuIdNManufacturer` for each listed index.
macro_rules! gpu_fields {
    ($builder:expr, $($n:literal),+) => {
        $builder
        $(
            .field(
                concat!("GpuId", $n),
                concat!("GPU ", $n),
                convert::text,
                |s: &mut SystemInfo, v| s.gpu_ids[$n] = Some(v),
            )
            .field(
                concat!("GpuId", $n, "Manufacturer"),
                concat!("GPU ", $n),
                gpu_manufacturer,
                |s: &mut SystemInfo, v| s.gpu_manufacturers[$n] = v,
            )
        )+
    };
}

static SYSTEM_TABLE: LazyLock<PropertyTable<SystemInfo>> = LazyLock::new(|| {
    let builder = PropertyTable::<SystemInfo>::builder()
        .field("Cpu", "CPU", convert::text, |s, v| s.cpu = Some(v))
        .field("CpuType", "CPU", convert::token::<CpuType>, |s, v| s.cpu_type = v)
        .field("CpuId", "CPU ID", convert::text, |s, v| s.cpu_id = Some(v))
        .field("CpuManufacturer", "CPU ID", convert::token::<CpuManufacturer>, |s, v| {
            s.cpu_manufacturer = v
        })
        .field("CpuCount", "CPUs", convert::int32, |s, v| s.cpu_count = Some(v))
        .field("Memory", "Memory", convert::text, |s, v| s.memory = Some(v))
        .field("MemoryValue", "Memory", convert::memory_gib, |s, v| s.memory_value = Some(v))
        .field("FreeMemory", "Free Memory", convert::text, |s, v| s.free_memory = Some(v))
        .field("FreeMemoryValue", "Free Memory", convert::memory_gib, |s, v| {
            s.free_memory_value = Some(v)
        })
        .field("Threads", "Threads", convert::text, |s, v| s.threads = Some(v))
        .field("OperatingSystem", "OS", convert::text, |s, v| s.operating_system = Some(v))
        .field("OperatingSystemType", "OS", convert::token::<OperatingSystemType>, |s, v| {
            s.operating_system_type = v
        })
        .field(
            "OperatingSystemArchitecture",
            "OS Arch",
            convert::token::<OperatingSystemArchitecture>,
            |s, v| s.operating_system_architecture = v,
        )
        .field("OperatingSystemVersion", "OS Version", convert::text, |s, v| {
            s.operating_system_version = Some(v)
        })
        .field("GpuCount", "GPUs", convert::int32, |s, v| s.gpu_count = Some(v));
    gpu_fields!(builder, 0, 1, 2, 3, 4, 5, 6, 7)
        .field("Cuda", "CUDA", convert::text, |s, v| s.cuda = Some(v))
        .field("CudaDriver", "CUDA Driver", convert::text, |s, v| s.cuda_driver = Some(v))
        .field("HasBattery", "Has Battery", convert::boolean, |s, v| s.has_battery = Some(v))
        .field("OnBattery", "On Battery", convert::boolean, |s, v| s.on_battery = Some(v))
        .field("UtcOffset", "UTC offset", convert::int32, |s, v| s.utc_offset = Some(v))
        .field("ProcessId", "PID", convert::int64, |s, v| s.process_id = Some(v))
        .field("WorkingDirectory", "CWD", convert::text, |s, v| s.working_directory = Some(v))
        .field("Win32Service", "Win32 Service", convert::boolean, |s, v| {
            s.win32_service = Some(v)
        })
        .build()
});

impl Mapped for Info {
    fn property_table() -> &'static PropertyTable<Self> {
        &INFO_TABLE
    }

    fn prepare(tree: &Value) -> Cow<'_, Value> {
        match tree.as_list() {
            Some(sections) => Cow::Owned(Value::Map(sections_to_map(sections))),
            None => Cow::Borrowed(tree),
        }
    }
}

impl Mapped for ClientInfo {
    fn property_table() -> &'static PropertyTable<Self> {
        &CLIENT_TABLE
    }
}

impl Mapped for BuildInfo {
    fn property_table() -> &'static PropertyTable<Self> {
        &BUILD_TABLE
    }
}

impl Mapped for SystemInfo {
    fn property_table() -> &'static PropertyTable<Self> {
        &SYSTEM_TABLE
    }
}

/// Fold `[title, [key, value], ...]` sections into `{title: {key: value}}`.
///
/// Entries that do not have the section shape are skipped.
fn sections_to_map(sections: &[Value]) -> ValueMap {
    let mut out = ValueMap::new();
    for section in sections {
        let Some((title, pairs)) = section.as_list().and_then(|items| items.split_first()) else {
            tracing::debug!(found = section.kind(), "skipping info entry that is not a section");
            continue;
        };
        let Some(title) = title.as_str() else {
            continue;
        };
        let entries: ValueMap = pairs
            .iter()
            .filter_map(|pair| match pair.as_list() {
                Some([Value::Text(key), value]) => Some((key.clone(), value.clone())),
                _ => None,
            })
            .collect();
        out.insert(title.to_string(), Value::Map(entries));
    }
    out
}

#[cfg(test)]
#[path = "info_tests.rs"]
mod tests;
