use anyhow::Result;
use serde_json::Value;

use crate::app::App;
use crate::OutputFormat;

pub fn run(app: &App, content: &str, format: &OutputFormat) -> Result<()> {
    let content_type = app.converter.detect(&Value::String(content.to_string()));

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({ "contentType": content_type });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => println!("{}", content_type),
    }

    Ok(())
}
