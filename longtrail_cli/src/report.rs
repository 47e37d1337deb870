use clap::ValueEnum;
use comfy_table::{Cell, Table};
use longtrail::LongestPaths;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Table,
    Json,
}

pub fn print(paths: &LongestPaths, format: OutputFormat) -> Result<(), anyhow::Error> {
    match format {
        OutputFormat::Text => println!("longest path length: {}", paths.longest_weight()),
        OutputFormat::Table => println!("{}", table(paths)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(paths)?),
    }

    Ok(())
}

fn table(paths: &LongestPaths) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["target", "longest trail"]);

    for (target, weight) in paths.iter() {
        let weight = weight.map_or_else(|| "-".to_string(), |weight| weight.to_string());
        table.add_row(vec![Cell::new(target), Cell::new(weight)]);
    }

    table
}
