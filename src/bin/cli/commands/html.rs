use anyhow::Result;
use serde_json::Value;

use crate::app::App;
use crate::OutputFormat;

pub fn run(app: &App, content: &str, format: &OutputFormat) -> Result<()> {
    let content = Value::String(content.to_string());
    let html = app.converter.convert_to_html(&content);

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "contentType": app.converter.detect(&content),
                "html": html,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => println!("{}", html),
    }

    Ok(())
}
