// src/config/file.rs
//
// `key=value` settings file. Blank lines and `#` comments are ignored, as are
// unknown keys. A bad value is logged and the previous value stays.
//
//   source=http://example.org/Tribute.csv
//   key_column=honoree
//   locale=en
//   out_path=out/tribute.html
//   title=Tribute Wall
//   fragment=0

use std::{error::Error, fs, path::Path};

use super::options::AppOptions;

/// Load settings over the defaults. A missing file gives the defaults.
pub fn load(path: &Path) -> Result<AppOptions, Box<dyn Error + Send + Sync>> {
    let mut opts = AppOptions::default();
    if !path.exists() {
        logd!("Config: {} not found, using defaults", path.display());
        return Ok(opts);
    }
    let text = fs::read_to_string(path)
        .map_err(|e| format!("Cannot read config {}: {}", path.display(), e))?;
    apply(&mut opts, &text);
    logf!("Config: loaded {}", path.display());
    Ok(opts)
}

fn parse_bool(val: &str) -> Option<bool> {
    match val.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Apply settings text onto existing options.
pub fn apply(opts: &mut AppOptions, text: &str) {
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') { continue; }
        let Some((key, val)) = line.split_once('=') else {
            logd!("Config: skipping line without '=': {}", line);
            continue;
        };
        let (key, val) = (key.trim(), val.trim());
        match key {
            "source" => opts.source = s!(val),
            "key_column" => match val.parse() {
                Ok(col) => opts.key_column = col,
                Err(e) => loge!("Config: {}", e),
            },
            "locale" => opts.locale = s!(val),
            "out_path" => opts.output.set_path(val),
            "title" => opts.output.title = s!(val),
            "fragment" => match parse_bool(val) {
                Some(b) => opts.output.fragment_only = b,
                None => loge!("Config: bad boolean for fragment: {}", val),
            },
            other => logd!("Config: unknown key {}", other),
        }
    }
}

/// Write the options back in the same format.
pub fn save(path: &Path, opts: &AppOptions) -> Result<(), Box<dyn Error + Send + Sync>> {
    fs::write(path, to_string(opts))?;
    Ok(())
}

pub fn to_string(opts: &AppOptions) -> String {
    let mut s = s!();
    s.push_str(&format!("source={}\n", opts.source));
    s.push_str(&format!("key_column={}\n", opts.key_column));
    s.push_str(&format!("locale={}\n", opts.locale));
    s.push_str(&format!("out_path={}\n", opts.output.out_path().display()));
    s.push_str(&format!("title={}\n", opts.output.title));
    s.push_str(&format!("fragment={}\n", if opts.output.fragment_only { 1 } else { 0 }));
    s
}
