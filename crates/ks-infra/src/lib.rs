pub mod navigation;
pub mod storage;

pub use navigation::StackNavigator;
pub use storage::{app_data_dir, FileKeyValueStore, InMemoryKeyValueStore};
