use console::style;
use postcraft::Config;
use std::path::Path;

pub fn print_step(current: usize, total: usize, title: &str) {
    println!();
    println!(
        "  {} {}",
        style(format!("[{current}/{total}]")).cyan().bold(),
        style(title).white().bold()
    );
}

pub fn print_bullet(text: &str) {
    println!("  {} {}", style("›").cyan(), text);
}

pub fn print_post(text: &str) {
    println!();
    println!("  {}", style("─".repeat(50)).dim());
    println!("{text}");
    println!("  {}", style("─".repeat(50)).dim());
}

pub fn print_card_saved(path: &Path, bytes: usize) {
    println!(
        "  {} card saved to {} ({bytes} bytes)",
        style("✓").green().bold(),
        style(path.display()).green()
    );
}

pub fn print_config(config: &Config) {
    let backend = &config.backend;
    let render = &config.render;

    println!("  {}", style("Configuration").white().bold());
    println!("    file:         {}", style(config.config_path.display()).green());
    println!();
    println!("  {}", style("[backend]").cyan());
    println!("    api_url:      {}", backend.api_url);
    println!("    api_key:      {}", backend.masked_api_key());
    println!("    folder_id:    {}", or_unset(&backend.folder_id));
    println!("    model_uri:    {}", backend.model_uri());
    println!("    temperature:  {}", backend.temperature);
    println!("    max_tokens:   {}", backend.max_tokens);
    println!("    timeout_secs: {}", backend.timeout_secs);
    println!(
        "    system_prompt: {} chars",
        backend.system_prompt.chars().count()
    );
    println!();
    println!("  {}", style("[render]").cyan());
    println!("    timeout_secs: {}", render.timeout_secs);
    println!(
        "    chrome:       {}",
        render
            .chrome_executable
            .as_deref()
            .map_or_else(|| "(autodetect)".to_string(), |p| p.display().to_string())
    );
    println!("    no_sandbox:   {}", render.no_sandbox);
    println!(
        "    templates:    {}",
        render
            .resolved_templates_dir()
            .map_or_else(|| "(built-in only)".to_string(), |p| p.display().to_string())
    );
}

fn or_unset(value: &str) -> &str {
    if value.is_empty() { "(not set)" } else { value }
}
