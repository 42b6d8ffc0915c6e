//! Built-in sample inventory and user directory.
//!
//! The console has no backing store; these rows are what every session starts
//! from.

use time::macros::datetime;

use crate::record::{ServerDraft, ServerId, ServerRecord, ServerStatus};
use crate::transfer::ImportRow;
use crate::users::{UserAccount, UserId, UserRole, UserStatus};

/// The five sample servers, in their canonical order (ids 1..=5).
#[must_use]
pub fn servers() -> Vec<ServerRecord> {
    vec![
        ServerRecord {
            id: ServerId(1),
            server_ip: "192.168.1.10".to_owned(),
            hostname: "web-server-01".to_owned(),
            operating_system: "Ubuntu 20.04 LTS".to_owned(),
            server_role: "Web Server".to_owned(),
            server_type: "Virtual".to_owned(),
            application_name: "E-Commerce Platform".to_owned(),
            application_spoc: Some("john.doe@company.com".to_owned()),
            application_owner: "Marketing Team".to_owned(),
            platform: "Linux".to_owned(),
            location: "Data Center A".to_owned(),
            manufacturer: Some("VMware".to_owned()),
            ram: Some("16 GB".to_owned()),
            cpu: Some("4 vCPU".to_owned()),
            status: ServerStatus::Live,
            last_updated: datetime!(2024-01-15 10:30:00 UTC),
        },
        ServerRecord {
            id: ServerId(2),
            server_ip: "192.168.1.11".to_owned(),
            hostname: "db-server-01".to_owned(),
            operating_system: "Windows Server 2019".to_owned(),
            server_role: "Database Server".to_owned(),
            server_type: "Physical".to_owned(),
            application_name: "Customer Management System".to_owned(),
            application_spoc: Some("jane.smith@company.com".to_owned()),
            application_owner: "IT Department".to_owned(),
            platform: "Windows".to_owned(),
            location: "Data Center B".to_owned(),
            manufacturer: Some("Dell".to_owned()),
            ram: Some("32 GB".to_owned()),
            cpu: Some("8 Core Intel Xeon".to_owned()),
            status: ServerStatus::Live,
            last_updated: datetime!(2024-01-14 15:45:00 UTC),
        },
        ServerRecord {
            id: ServerId(3),
            server_ip: "192.168.1.12".to_owned(),
            hostname: "app-server-01".to_owned(),
            operating_system: "CentOS 8".to_owned(),
            server_role: "Application Server".to_owned(),
            server_type: "Virtual".to_owned(),
            application_name: "HR Management Portal".to_owned(),
            application_spoc: Some("mike.johnson@company.com".to_owned()),
            application_owner: "Human Resources".to_owned(),
            platform: "Linux".to_owned(),
            location: "Data Center A".to_owned(),
            manufacturer: Some("VMware".to_owned()),
            ram: Some("24 GB".to_owned()),
            cpu: Some("6 vCPU".to_owned()),
            status: ServerStatus::Shutdown,
            last_updated: datetime!(2024-01-13 09:20:00 UTC),
        },
        ServerRecord {
            id: ServerId(4),
            server_ip: "192.168.1.13".to_owned(),
            hostname: "backup-server-01".to_owned(),
            operating_system: "Ubuntu 22.04 LTS".to_owned(),
            server_role: "Backup Server".to_owned(),
            server_type: "Physical".to_owned(),
            application_name: "Backup & Recovery System".to_owned(),
            application_spoc: Some("sarah.wilson@company.com".to_owned()),
            application_owner: "IT Operations".to_owned(),
            platform: "Linux".to_owned(),
            location: "Data Center C".to_owned(),
            manufacturer: Some("HP".to_owned()),
            ram: Some("64 GB".to_owned()),
            cpu: Some("12 Core AMD EPYC".to_owned()),
            status: ServerStatus::Live,
            last_updated: datetime!(2024-01-16 11:15:00 UTC),
        },
        ServerRecord {
            id: ServerId(5),
            server_ip: "192.168.1.14".to_owned(),
            hostname: "test-server-01".to_owned(),
            operating_system: "Windows Server 2022".to_owned(),
            server_role: "Test Server".to_owned(),
            server_type: "Virtual".to_owned(),
            application_name: "Development Environment".to_owned(),
            application_spoc: Some("alex.brown@company.com".to_owned()),
            application_owner: "Development Team".to_owned(),
            platform: "Windows".to_owned(),
            location: "Data Center A".to_owned(),
            manufacturer: Some("VMware".to_owned()),
            ram: Some("8 GB".to_owned()),
            cpu: Some("2 vCPU".to_owned()),
            status: ServerStatus::New,
            last_updated: datetime!(2024-01-16 14:30:00 UTC),
        },
    ]
}

/// The five sample console users.
#[must_use]
pub fn users() -> Vec<UserAccount> {
    vec![
        UserAccount {
            id: UserId(1),
            username: "admin_john".to_owned(),
            email: "john.doe@infosec.com".to_owned(),
            role: UserRole::Admin,
            status: UserStatus::Active,
            last_login: Some(datetime!(2024-01-15 10:30:00 UTC)),
            created_at: datetime!(2023-06-15 09:00:00 UTC),
            created_by: "System Admin".to_owned(),
        },
        UserAccount {
            id: UserId(2),
            username: "sarah_analyst".to_owned(),
            email: "sarah.wilson@infosec.com".to_owned(),
            role: UserRole::User,
            status: UserStatus::Active,
            last_login: Some(datetime!(2024-01-14 16:45:00 UTC)),
            created_at: datetime!(2023-08-22 11:30:00 UTC),
            created_by: "John Doe".to_owned(),
        },
        UserAccount {
            id: UserId(3),
            username: "mike_security".to_owned(),
            email: "mike.johnson@infosec.com".to_owned(),
            role: UserRole::Admin,
            status: UserStatus::Inactive,
            last_login: Some(datetime!(2024-01-10 14:20:00 UTC)),
            created_at: datetime!(2023-09-05 08:15:00 UTC),
            created_by: "John Doe".to_owned(),
        },
        UserAccount {
            id: UserId(4),
            username: "lisa_readonly".to_owned(),
            email: "lisa.brown@infosec.com".to_owned(),
            role: UserRole::User,
            status: UserStatus::Active,
            last_login: Some(datetime!(2024-01-15 09:15:00 UTC)),
            created_at: datetime!(2023-10-12 13:45:00 UTC),
            created_by: "John Doe".to_owned(),
        },
        UserAccount {
            id: UserId(5),
            username: "david_ops".to_owned(),
            email: "david.clark@infosec.com".to_owned(),
            role: UserRole::User,
            status: UserStatus::Active,
            last_login: Some(datetime!(2024-01-13 12:30:00 UTC)),
            created_at: datetime!(2023-11-08 10:20:00 UTC),
            created_by: "Sarah Wilson".to_owned(),
        },
    ]
}

/// Rows the mock upload "parses" out of any accepted spreadsheet.
///
/// Rows 3 and 4 are deliberately broken (bad IP, blank hostname) so the
/// preview has something to report.
#[must_use]
pub fn import_rows() -> Vec<ImportRow> {
    let row = |row: usize, server_ip: &str, hostname: &str, os: &str, role: &str| ImportRow {
        row,
        draft: ServerDraft {
            server_ip: server_ip.to_owned(),
            hostname: hostname.to_owned(),
            operating_system: os.to_owned(),
            server_role: role.to_owned(),
            server_type: "Virtual".to_owned(),
            application_name: "Imported Application".to_owned(),
            application_owner: "IT Operations".to_owned(),
            platform: "Linux".to_owned(),
            location: "Data Center A".to_owned(),
            ..ServerDraft::default()
        },
    };
    vec![
        row(1, "192.168.1.100", "web-server-01", "Ubuntu 20.04 LTS", "Web Server"),
        row(2, "192.168.1.101", "db-server-01", "Windows Server 2019", "Database Server"),
        row(3, "invalid-ip", "app-server-01", "CentOS 8", "Application Server"),
        row(4, "192.168.1.103", "", "Ubuntu 22.04 LTS", "File Server"),
    ]
}
