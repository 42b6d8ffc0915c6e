//! Option lists offered by the server form's select fields.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use crate::record::ServerField;

pub const OPERATING_SYSTEMS: &[&str] = &[
    "Windows Server 2019",
    "Windows Server 2022",
    "Ubuntu 20.04 LTS",
    "Ubuntu 22.04 LTS",
    "CentOS 7",
    "CentOS 8",
    "Red Hat Enterprise Linux 8",
    "Red Hat Enterprise Linux 9",
    "SUSE Linux Enterprise Server",
    "Debian 11",
    "VMware ESXi 7.0",
];

pub const SERVER_ROLES: &[&str] = &[
    "Web Server",
    "Database Server",
    "Application Server",
    "File Server",
    "Domain Controller",
    "Mail Server",
    "DNS Server",
    "DHCP Server",
    "Backup Server",
    "Monitoring Server",
    "Load Balancer",
    "Firewall",
];

pub const SERVER_TYPES: &[&str] = &["Physical", "Virtual Machine", "Container", "Cloud Instance"];

pub const PLATFORMS: &[&str] = &[
    "On-Premises",
    "AWS",
    "Microsoft Azure",
    "Google Cloud Platform",
    "VMware vSphere",
    "Hyper-V",
    "Docker",
    "Kubernetes",
];

pub const LOCATIONS: &[&str] = &[
    "Data Center - Primary",
    "Data Center - Secondary",
    "AWS US-East-1",
    "AWS US-West-2",
    "Azure East US",
    "Azure West Europe",
    "GCP US-Central1",
    "Office - New York",
    "Office - London",
    "Office - Singapore",
];

pub const MANUFACTURERS: &[&str] = &[
    "Dell Technologies",
    "HPE (Hewlett Packard Enterprise)",
    "Lenovo",
    "Cisco",
    "IBM",
    "Supermicro",
    "Fujitsu",
    "Oracle",
    "VMware",
    "Microsoft",
];

/// Select options for `field`, or `None` when the field is free text.
#[must_use]
pub fn options_for(field: ServerField) -> Option<&'static [&'static str]> {
    match field {
        ServerField::OperatingSystem => Some(OPERATING_SYSTEMS),
        ServerField::ServerRole => Some(SERVER_ROLES),
        ServerField::ServerType => Some(SERVER_TYPES),
        ServerField::Platform => Some(PLATFORMS),
        ServerField::Location => Some(LOCATIONS),
        ServerField::Manufacturer => Some(MANUFACTURERS),
        _ => None,
    }
}
