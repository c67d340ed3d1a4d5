// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use fah_core::{
    CpuManufacturer, CpuType, GpuManufacturer, Info, OperatingSystemArchitecture,
    OperatingSystemType,
};

use crate::prelude::*;

#[test]
fn client_7_1_info_maps_every_section() {
    let info: Info = mapped("client-v7.1.43/info.txt");
    assert!(info.errors.is_empty(), "{:?}", info.errors);

    assert_eq!(info.client.website.as_deref(), Some("http://folding.stanford.edu/"));
    assert_eq!(info.build.svn_rev, Some(2908));
    assert_eq!(info.build.version.as_deref(), Some("7.1.43"));
    assert_eq!(info.build.bits, Some(32));
    assert_eq!(info.system.cpu_count, Some(4));
}

#[test]
fn client_7_1_info_reports_one_gpu() {
    let system = mapped::<Info>("client-v7.1.43/info.txt").system;
    assert_eq!(system.gpu_count, Some(1));
    assert_eq!(system.gpu_id(0), Some("NVIDIA:1 GT200 [GeForce GTX 260]"));
    assert_eq!(system.gpu_manufacturer(0), GpuManufacturer::Nvidia);
    assert_eq!(system.gpu_id(1), None);
    assert_eq!(system.gpu_manufacturer(1), GpuManufacturer::Unknown);
}

#[test]
fn client_7_1_info_derives_host_enums() {
    let system = mapped::<Info>("client-v7.1.43/info.txt").system;
    assert_eq!(system.cpu_type, CpuType::Core2);
    assert_eq!(system.cpu_manufacturer, CpuManufacturer::Intel);
    assert_eq!(system.operating_system_type, OperatingSystemType::WindowsXp);
    assert_eq!(system.operating_system_architecture, OperatingSystemArchitecture::X86);
    assert_eq!(system.memory_value, Some(4.0));
    assert_eq!(system.free_memory_value, Some(3.1));
    assert_eq!(system.has_battery, Some(false));
    assert_eq!(system.win32_service, Some(false));
}
