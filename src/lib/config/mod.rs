pub const OUTPUT_DIR: &str = "public";

// Asset directories copied verbatim from the site root into the output.
pub const STYLES_DIR: &str = "styles";
pub const IMAGES_DIR: &str = "images";
pub const ASSET_DIRS: [&str; 2] = [STYLES_DIR, IMAGES_DIR];

pub const SITE_NAME: &str = "EpiBook";
pub const NORMALIZE_CSS: &str = "styles/normalize.css";

pub const DEFAULT_ADDR: &str = "127.0.0.1:3000";

// Environment overrides read by the CLI.
pub const ENV_ROOT: &str = "EPIBOOK_ROOT";
pub const ENV_OUT: &str = "EPIBOOK_OUT";
pub const ENV_ADDR: &str = "EPIBOOK_ADDR";

/// Log filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info";
