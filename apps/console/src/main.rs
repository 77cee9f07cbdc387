use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

mod config;

use anyhow::Result;
use clap::Parser;
use client_core::{ProductClient, ProductController, ViewModel};
use shared::domain::Product;
use tracing::warn;

use config::load_settings;

#[derive(Parser, Debug)]
#[command(
    name = "product-console",
    about = "Interactive console for a remote product catalog"
)]
struct Args {
    /// Base URL of the product service; overrides the settings file and
    /// environment.
    #[arg(long)]
    server_url: Option<String>,
    /// Path to the settings file.
    #[arg(long, default_value = "console.toml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().init();
    let args = Args::parse();

    let mut settings = load_settings(&args.config);
    if let Some(server_url) = args.server_url {
        settings.server_url = server_url;
    }

    let client = ProductClient::new(settings.server_url.clone());
    if let Err(err) = client.health().await {
        warn!(%err, server_url = %settings.server_url, "product service health probe failed");
    }
    let controller = ProductController::new(client);

    println!("Product console - {}", settings.server_url);
    print_help();

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        io::stdout().flush()?;
        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        let (command, rest) = match input.split_once(' ') {
            Some((command, rest)) => (command, rest.trim()),
            None => (input, ""),
        };

        match command {
            "set" => {
                let Some((field, value)) = rest.split_once(' ') else {
                    println!("usage: set <field> <value>");
                    continue;
                };
                if !controller.edit_field(field, value.trim()).await {
                    println!(
                        "unknown field '{field}' (expected one of: {})",
                        Product::FIELDS.join(", ")
                    );
                }
            }
            "unset" => {
                if rest.is_empty() || !controller.edit_field(rest, "").await {
                    println!("usage: unset <field>");
                }
            }
            "show" => render(&controller.view().await),
            "create" => {
                controller.create().await;
                render(&controller.view().await);
            }
            "update" => {
                controller.update().await;
                render(&controller.view().await);
            }
            "retrieve" => {
                controller.retrieve().await;
                render(&controller.view().await);
            }
            "delete" => {
                controller.remove().await;
                render(&controller.view().await);
            }
            "search" => {
                controller.search().await;
                render(&controller.view().await);
            }
            "like" => {
                controller.like().await;
                render(&controller.view().await);
            }
            "clear" => {
                controller.clear_form().await;
                render(&controller.view().await);
            }
            "help" => print_help(),
            "quit" | "exit" => break,
            other => println!("unknown command '{other}' (try 'help')"),
        }
    }

    Ok(())
}

fn print_help() {
    println!("commands:");
    println!("  set <field> <value>   edit one form field");
    println!("  unset <field>         blank one form field");
    println!("  show                  print the form and the last results");
    println!("  create | update | retrieve | delete | like");
    println!("                        run the operation with the current form");
    println!("  search                list products by name/category/price");
    println!("  clear                 reset the form");
    println!("  quit                  leave");
}

fn render(view: &ViewModel) {
    if let Some(message) = view.flash.message() {
        println!("* {message}");
    }
    for name in Product::FIELDS {
        let value = view.form.get(name).unwrap_or_default();
        if !value.is_empty() {
            println!("  {name:<14} {value}");
        }
    }
    if !view.results.rows().is_empty() {
        print_table(view.results.rows());
    }
}

/// Aligned text table, one row per product, columns in wire order.
fn print_table(rows: &[Product]) {
    let mut widths: Vec<usize> = Product::FIELDS.iter().map(|name| name.len()).collect();
    for row in rows {
        for (index, name) in Product::FIELDS.iter().enumerate() {
            let len = row.field(name).unwrap_or_default().len();
            widths[index] = widths[index].max(len);
        }
    }

    let header: Vec<String> = Product::FIELDS
        .iter()
        .enumerate()
        .map(|(index, name)| format!("{name:<width$}", width = widths[index]))
        .collect();
    println!("  {}", header.join("  "));

    for row in rows {
        let cells: Vec<String> = Product::FIELDS
            .iter()
            .enumerate()
            .map(|(index, name)| {
                let value = row.field(name).unwrap_or_default();
                format!("{value:<width$}", width = widths[index])
            })
            .collect();
        println!("  {}", cells.join("  "));
    }
}
