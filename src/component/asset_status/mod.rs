mod main;

pub use main::AssetStatusChecker;
