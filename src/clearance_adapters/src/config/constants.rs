pub mod env {
    pub const ENV_PREFIX: &str = "CLEARANCE";
    pub const ENV_SEPARATOR: &str = "__";
}

/// Optional configuration file, looked up relative to the working directory.
pub const CONFIG_FILE: &str = "config/base";

pub mod prod {
    pub const APP_ADDRESS: &str = "127.0.0.1:3000";
    pub const LOG_LEVEL: &str = "info";
}

pub mod test {
    pub const APP_ADDRESS: &str = "127.0.0.1:0";
}
