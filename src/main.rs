use anyhow::Context;
use authpatch::InjectorBuilder;
use clap::Parser;

#[derive(Parser)]
#[command(name = "authpatch")]
#[command(about = "Inject auth UI markup and script tags into static HTML pages")]
struct Cli {
    /// Directory to scan for HTML files
    #[arg(default_value = ".")]
    directory: String,

    /// Report what would change without writing anything
    #[arg(long)]
    dry_run: bool,

    /// Emit the run summary as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let injector = InjectorBuilder::new(&cli.directory)
        .dry_run(cli.dry_run)
        .build()
        .context("Failed to configure injector")?;

    let summary = injector
        .run()
        .with_context(|| format!("Injection run failed in {}", cli.directory))?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        for report in &summary.reports {
            for line in report.lines() {
                println!("{}", line);
            }
        }
        println!();
        for line in summary.summary_lines() {
            println!("{}", line);
        }
    }

    if summary.failed > 0 {
        std::process::exit(1);
    }

    Ok(())
}
