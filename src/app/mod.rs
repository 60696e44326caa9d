pub mod access;
pub mod export_use_case;
pub mod ports;
pub mod search_use_case;

pub use export_use_case::{to_export_values, ExportReceipt, ExportUseCase};
pub use search_use_case::{SearchLoad, SearchView, UnifiedSearch};
