pub const ENV_FILE: &str = ".env";
pub const TOKEN_KEY: &str = "ACCESS_TOKEN";
pub const LOG_FILTER: &str = "warn";
