use std::env;
use std::fs;
use std::path::PathBuf;

/// Get the directory for log files
///
/// Resolution order:
/// 1. Custom directory from parameter (if provided)
/// 2. SPOKEN_MATH_LOG_DIR environment variable
/// 3. User data directory (`<data_local_dir>/spoken_math/logs`)
/// 4. Home directory fallback
/// 5. Temp directory as last resort
pub fn get_log_directory(custom_dir: Option<&str>) -> Result<PathBuf, std::io::Error> {
    if let Some(dir) = custom_dir {
        return ensure_directory_exists(PathBuf::from(dir));
    }

    if let Ok(custom_dir) = env::var("SPOKEN_MATH_LOG_DIR") {
        return ensure_directory_exists(PathBuf::from(custom_dir));
    }

    ensure_directory_exists(default_log_dir())
}

fn default_log_dir() -> PathBuf {
    if let Some(data_dir) = dirs::data_local_dir() {
        let path = data_dir.join("spoken_math").join("logs");
        if can_create(&path) {
            return path;
        }
    }

    if let Some(home_dir) = dirs::home_dir() {
        let path = home_dir.join(".spoken_math").join("logs");
        if can_create(&path) {
            return path;
        }
    }

    env::temp_dir().join("spoken_math_logs")
}

/// Check if a directory is writable
fn is_writable(path: &PathBuf) -> bool {
    if !path.exists() {
        return false;
    }
    // Try creating a temp file to check write permissions
    let test_file = path.join(".write_test");
    fs::write(&test_file, "test").is_ok() && {
        let _ = fs::remove_file(&test_file);
        true
    }
}

/// Check if the directory exists and is writable, or its nearest existing
/// ancestor is
fn can_create(path: &PathBuf) -> bool {
    let mut candidate = Some(path.as_path());
    while let Some(dir) = candidate {
        if dir.exists() {
            return is_writable(&dir.to_path_buf());
        }
        candidate = dir.parent();
    }
    false
}

fn ensure_directory_exists(path: PathBuf) -> Result<PathBuf, std::io::Error> {
    if !path.exists() {
        fs::create_dir_all(&path)?;
    }
    Ok(path)
}
