use crate::backend::BackendKind;

pub const SERIAL_PORT_ENV: &str = "LDS_SERIAL_PORT";
pub const DISPLAY_BACKEND_ENV: &str = "LDS_DISPLAY_BACKEND";
pub const WINDOW_WIDTH_ENV: &str = "LDS_WINDOW_WIDTH";
pub const WINDOW_HEIGHT_ENV: &str = "LDS_WINDOW_HEIGHT";

pub const DEFAULT_WINDOW_WIDTH: u32 = 800;
pub const DEFAULT_WINDOW_HEIGHT: u32 = 480;

pub fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

/// Window size from the environment, falling back to 800x480.
pub fn window_size_from_env() -> (u32, u32) {
    let width = env_or(WINDOW_WIDTH_ENV, "")
        .parse()
        .unwrap_or(DEFAULT_WINDOW_WIDTH);
    let height = env_or(WINDOW_HEIGHT_ENV, "")
        .parse()
        .unwrap_or(DEFAULT_WINDOW_HEIGHT);
    (width, height)
}

/// Display backend from the environment; None for an unknown name.
pub fn backend_from_env() -> Option<BackendKind> {
    BackendKind::from_name(&env_or(DISPLAY_BACKEND_ENV, "window"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_or_default() {
        assert_eq!(env_or("LDS_TEST_UNSET_VARIABLE", "fallback"), "fallback");
        std::env::set_var("LDS_TEST_SET_VARIABLE", "value");
        assert_eq!(env_or("LDS_TEST_SET_VARIABLE", "fallback"), "value");
    }
}
