use clap::{Parser, Subcommand};
use og_cards::generate::DEFAULT_OUTPUT_DIR;
use og_cards::{check, config, generate, output, pages};
use std::path::PathBuf;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "og-cards")]
#[command(about = "Generate the site's Open Graph preview images")]
#[command(long_about = "\
Generate the site's Open Graph preview images

Renders one 1200x630 PNG per page and language from the built-in page table:

  src/assets/images/og/
  ├── og-home-en.png
  ├── og-about-en.png
  ├── ...
  └── og-terms-nl.png

Running without a command generates every image. Page text is part of the
program; og.toml (optional) only restyles the cards.

Run 'og-cards gen-config' to print a documented og.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Output directory for generated images
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR, global = true)]
    output: PathBuf,

    /// Render config file (missing file = stock defaults)
    #[arg(long, default_value = "og.toml", global = true)]
    config: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Render every page/language image (the default)
    Generate,
    /// Verify the output directory: every image present and 1200x630, no strays
    Check,
    /// Show the page table and the file each entry produces
    List,
    /// Print a stock og.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Generate) {
        Command::Generate => {
            let render_config = config::load_config(&cli.config)?;
            let (tx, rx) = std::sync::mpsc::channel();
            let printer = std::thread::spawn(move || {
                for event in rx {
                    output::print_generate_event(&event);
                }
            });
            let result = generate::generate(&cli.output, &render_config, Some(tx));
            printer.join().ok();
            result?;
        }
        Command::Check => {
            let report = check::check(&cli.output)?;
            output::print_check_output(&report, &cli.output);
            if !report.is_ok() {
                return Err(format!("{} failed verification", cli.output.display()).into());
            }
        }
        Command::List => {
            output::print_list_output(&pages::entries());
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
