mod loader;
mod model;
mod validation;

pub use loader::{
    ConfigLoader, FileConfigLoader, FileSystem, LOCAL_CONFIG_NAME, RealFileSystem, parse_config,
};
pub use model::{
    Config, DEFAULT_MAX_ITEMS_PER_PARENT, DEFAULT_MULTI_CODE_LIMIT, DEFAULT_PAGE_SIZE,
    DEFAULT_PARENT_ORDER, MAX_PAGE_SIZE, ReportConfig, SearchConfig,
};
pub use validation::validate_config;
