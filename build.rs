use std::env;
use std::fs;

// Variables que `src/config.rs` lee con option_env!
const CONFIG_KEYS: [&str; 4] = ["API_URL", "ENVIRONMENT", "ENABLE_LOGGING", "LOG_LEVEL"];

/// `KEY=VALUE` de una línea de `.env`; comentarios y claves ajenas se ignoran
fn parse_env_line(line: &str) -> Option<(&str, &str)> {
    let line = line.trim();
    if line.starts_with('#') {
        return None;
    }
    let (key, value) = line.split_once('=')?;
    let key = key.trim().trim_start_matches("export ").trim();
    if !CONFIG_KEYS.contains(&key) {
        return None;
    }
    let value = value.trim();
    let value = value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value);
    Some((key, value))
}

fn main() {
    // Se emite siempre: crear `.env` más tarde también debe recompilar
    println!("cargo:rerun-if-changed=.env");
    println!("cargo:rerun-if-changed=build.rs");
    for key in CONFIG_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }

    let Ok(contents) = fs::read_to_string(".env") else {
        println!("cargo:warning=Sin .env: API_URL por defecto (http://localhost:8000). Ver .env.example");
        return;
    };

    for (key, value) in contents.lines().filter_map(parse_env_line) {
        // El entorno del proceso manda sobre `.env`
        if env::var_os(key).is_none() {
            println!("cargo:rustc-env={}={}", key, value);
        }
    }
}
