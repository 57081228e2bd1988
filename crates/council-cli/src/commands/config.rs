use anyhow::Result;
use console::style;
use council::Settings;

pub fn execute(settings: &Settings) -> Result<()> {
    let rows = [
        ("api url", settings.api_url.clone()),
        ("models", settings.council_models().join(", ")),
        ("chairman", settings.chairman_model.clone()),
        ("data dir", settings.data_dir.display().to_string()),
        ("timeout", format!("{}s", settings.timeout_secs)),
    ];

    for (name, value) in rows {
        println!("{:>10}  {}", style(name).bold(), value);
    }
    Ok(())
}
