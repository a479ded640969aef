pub mod debounce;
pub mod filters;
pub mod format;
pub mod markdown;
pub mod navigation;
pub mod storage;
