/// `workerkit.toml`, relative to the project root.
pub const CONFIG_FILE: &str = "workerkit.toml";
