/// Endpoint paths on the admin REST API
pub const PLAYERS_PATH: &str = "/api/players";
pub const INSTITUTIONS_PATH: &str = "/api/institutions";
pub const OFFICIALS_PATH: &str = "/api/technical-officials";
pub const ADMIN_ME_PATH: &str = "/api/admin/me";

// Admin detail routes, `{id}` is substituted per record
pub const PLAYER_DETAIL_ROUTE: &str = "/admin/players/{id}";
pub const INSTITUTION_DETAIL_ROUTE: &str = "/admin/institutions/{id}";
pub const OFFICIAL_DETAIL_ROUTE: &str = "/admin/technical-officials/{id}";

// idLabel prefixes
pub const PLAYER_ID_PREFIX: &str = "DDKA-";
pub const INSTITUTION_ID_PREFIX: &str = "INST-";
pub const OFFICIAL_ID_PREFIX: &str = "DDKA-2026-";

pub const PLAYER_TXN_SUFFIX_LEN: usize = 6;
pub const INSTITUTION_ID_SUFFIX_LEN: usize = 4;
pub const OFFICIAL_ID_SUFFIX_LEN: usize = 4;

/// Role that always bypasses capability gates
pub const SUPERADMIN_ROLE: &str = "superadmin";

// CSV export
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";
pub const CSV_MIME_TYPE: &str = "text/csv;charset=utf-8;";
pub const DEFAULT_EXPORT_PREFIX: &str = "export";

// Configuration
pub const CONFIG_PATH: &str = "config.toml";
pub const API_BASE_URL_ENV: &str = "DDKA_API_BASE_URL";
pub const API_TOKEN_ENV: &str = "DDKA_API_TOKEN";
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
pub const DEFAULT_OUTPUT_DIR: &str = "exports";
