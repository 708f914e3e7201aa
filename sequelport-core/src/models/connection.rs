//! TablePlus connection model, one entry of `Connections.plist`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Driver name written for every migrated connection
pub const DEFAULT_DRIVER: &str = "MySQL";
/// Database port used when the favorite has none
pub const DEFAULT_DATABASE_PORT: &str = "3306";
/// SSH port used when the favorite has none
pub const DEFAULT_SSH_PORT: &str = "22";
/// Placeholder shown by TablePlus' private key picker
pub const PRIVATE_KEY_PLACEHOLDER: &str = "Import a private key...";
/// Placeholder shown by TablePlus' TLS key pickers
pub const TLS_KEY_PLACEHOLDER: &str = "Key...,Cert...,CA Cert...";

/// A saved connection in TablePlus' schema.
///
/// Key names (including TablePlus' own `Enviroment` spelling and mixed
/// casing) must match byte for byte or TablePlus ignores the field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TablePlusConnection {
    #[serde(rename = "ConnectionName")]
    pub connection_name: String,
    #[serde(rename = "DatabaseHost")]
    pub database_host: String,
    #[serde(rename = "DatabaseName")]
    pub database_name: String,
    #[serde(rename = "DatabasePasswordMode")]
    pub database_password_mode: i64,
    #[serde(rename = "DatabasePath")]
    pub database_path: String,
    #[serde(rename = "DatabasePort")]
    pub database_port: String,
    #[serde(rename = "DatabaseSocket")]
    pub database_socket: String,
    #[serde(rename = "DatabaseType")]
    pub database_type: String,
    #[serde(rename = "DatabaseUser")]
    pub database_user: String,
    #[serde(rename = "DatabaseUserRole")]
    pub database_user_role: String,
    #[serde(rename = "Driver")]
    pub driver: String,
    #[serde(rename = "DriverVersion")]
    pub driver_version: i64,
    #[serde(rename = "Enviroment")]
    pub environment: String,
    #[serde(rename = "Favorites")]
    pub favorites: BTreeMap<String, String>,
    /// ID of the owning group, empty when ungrouped
    #[serde(rename = "GroupID")]
    pub group_id: String,
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "LimitRowsReturned")]
    pub limit_rows_returned: i64,
    #[serde(rename = "RecentlyOpened")]
    pub recently_opened: Vec<String>,
    #[serde(rename = "RecentlySchema")]
    pub recently_schema: Vec<String>,
    #[serde(rename = "ResourceFilePath")]
    pub resource_file_path: String,
    #[serde(rename = "SectionStates")]
    pub section_states: BTreeMap<String, String>,
    /// SSH tunnel host
    #[serde(rename = "ServerAddress")]
    pub server_address: String,
    #[serde(rename = "ServerPasswordMode")]
    pub server_password_mode: i64,
    /// SSH tunnel port
    #[serde(rename = "ServerPort")]
    pub server_port: String,
    #[serde(rename = "ServerPrivateKeyName")]
    pub server_private_key_name: String,
    /// SSH tunnel user
    #[serde(rename = "ServerUser")]
    pub server_user: String,
    #[serde(rename = "TlsKeyName")]
    pub tls_key_name: String,
    #[serde(rename = "TlsKeyPaths")]
    pub tls_key_paths: Vec<String>,
    /// 1 when the connection goes through an SSH tunnel
    #[serde(rename = "isOverSSH")]
    pub is_over_ssh: i64,
    #[serde(rename = "isUsePrivateKey")]
    pub is_use_private_key: i64,
    #[serde(rename = "isUseResourceFile")]
    pub is_use_resource_file: i64,
    #[serde(rename = "isUseSocket")]
    pub is_use_socket: i64,
    /// Sidebar color as `#RRGGBB`, empty for none
    #[serde(rename = "statusColor")]
    pub status_color: String,
    #[serde(rename = "tLSMode")]
    pub tls_mode: i64,
}

impl TablePlusConnection {
    /// Creates a connection with the given ID and every other field at the
    /// value TablePlus expects for a fresh MySQL entry
    #[must_use]
    pub fn new(id: Uuid) -> Self {
        Self {
            connection_name: String::new(),
            database_host: String::new(),
            database_name: String::new(),
            database_password_mode: 0,
            database_path: String::new(),
            database_port: DEFAULT_DATABASE_PORT.to_string(),
            database_socket: String::new(),
            database_type: String::new(),
            database_user: String::new(),
            database_user_role: String::new(),
            driver: DEFAULT_DRIVER.to_string(),
            driver_version: 0,
            environment: String::new(),
            favorites: BTreeMap::new(),
            group_id: String::new(),
            id: id.to_string(),
            limit_rows_returned: 0,
            recently_opened: Vec::new(),
            recently_schema: Vec::new(),
            resource_file_path: String::new(),
            section_states: BTreeMap::new(),
            server_address: String::new(),
            server_password_mode: 0,
            server_port: DEFAULT_SSH_PORT.to_string(),
            server_private_key_name: PRIVATE_KEY_PLACEHOLDER.to_string(),
            server_user: String::new(),
            tls_key_name: TLS_KEY_PLACEHOLDER.to_string(),
            tls_key_paths: vec![String::new(); 3],
            is_over_ssh: 0,
            is_use_private_key: 1,
            is_use_resource_file: 0,
            is_use_socket: 0,
            status_color: String::new(),
            tls_mode: 0,
        }
    }
}
