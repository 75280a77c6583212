// Adapters layer: 檔案系統等外部資源的實作

pub mod storage;

pub use storage::ProjectStorage;
