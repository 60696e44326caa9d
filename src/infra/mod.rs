pub mod file_download;
pub mod http_client;

pub use file_download::FileDownload;
pub use http_client::ReqwestHttp;
