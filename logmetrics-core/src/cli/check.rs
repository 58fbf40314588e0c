use crate::conf::load_parser_config;
use crate::parser::{NGINX_PATTERN, NginxParser};
use std::path::Path;

pub fn check(path: &Path) -> anyhow::Result<()> {
    let cfg = load_parser_config(path)?;
    let parser = NginxParser::new(&cfg)?;

    println!("✔ Config loaded successfully");
    if parser.pattern().as_str() == NGINX_PATTERN {
        println!("✔ built-in nginx pattern");
    } else {
        println!("✔ custom pattern compiles: {}", parser.pattern().as_str());
    }
    println!("✔ slow request threshold {}ms", cfg.slow_threshold_ms);
    println!(
        "✔ duration source: {}",
        if cfg.use_logfile_time {
            "log timestamps"
        } else {
            "wall clock"
        }
    );
    println!(
        "✔ per bucket rates {}",
        if cfg.include_per_bucket_rates {
            "enabled"
        } else {
            "disabled"
        }
    );

    Ok(())
}
