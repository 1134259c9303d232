use anyhow::Context;
use blackboard::config::Config;
use blackboard::shell::{MenuAction, MenuOutcome, Script, Shell};
use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "blackboard")]
#[command(version, about = "Freehand blackboard drawing surface with PNG export")]
struct Cli {
    /// Session script to replay (TOML list of [[steps]])
    #[arg(long, short = 's', value_name = "FILE")]
    script: Option<PathBuf>,

    /// Config file (defaults to ~/.config/blackboard/config.toml)
    #[arg(long, short = 'c', value_name = "FILE")]
    config: Option<PathBuf>,

    /// Board width in pixels (overrides the config file)
    #[arg(long, value_name = "PIXELS")]
    width: Option<u32>,

    /// Board height in pixels (overrides the config file)
    #[arg(long, value_name = "PIXELS")]
    height: Option<u32>,

    /// Directory draw.png is written to (overrides the config file)
    #[arg(long, short = 'o', value_name = "DIR")]
    output: Option<PathBuf>,

    /// Save draw.png after the script finishes
    #[arg(long, action = ArgAction::SetTrue)]
    save: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let Some(script_path) = cli.script else {
        println!("blackboard: Freehand blackboard drawing surface with PNG export");
        println!();
        println!("Usage:");
        println!("  blackboard --script session.toml           Replay a drawing session");
        println!("  blackboard --script session.toml --save    Replay and write draw.png");
        println!("  blackboard --help                          Show help");
        println!();
        println!("Script steps:");
        println!("  down/move/up (x, y), cancel     Pointer gesture");
        println!("  select (index)                  Drawer slot, 0 = eraser");
        println!("  resize (width, height)          New display size");
        println!("  save, clean                     Menu actions");
        return Ok(());
    };

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(width) = cli.width {
        config.surface.width = width;
    }
    if let Some(height) = cli.height {
        config.surface.height = height;
    }
    if let Some(output) = &cli.output {
        config.export.directory = Some(output.to_string_lossy().into_owned());
    }

    let script = Script::load(&script_path)?;

    let mut shell = Shell::from_config(&config).context("Failed to create drawing surface")?;

    log::info!(
        "Replaying {} step(s) from {}",
        script.steps.len(),
        script_path.display()
    );
    let mut report = shell.run_script(&script);

    if cli.save {
        match shell.on_menu_item(MenuAction::Save) {
            MenuOutcome::Saved(path) => report.saved.push(path),
            MenuOutcome::Failed(message) => report.failures.push(message),
            MenuOutcome::Cleared => {}
        }
    }

    println!(
        "Replayed {} step(s), {} stroke(s)",
        report.steps, report.strokes
    );
    for path in &report.saved {
        println!("Saved {}", path.display());
    }

    if !report.failures.is_empty() {
        for failure in &report.failures {
            log::error!("{failure}");
        }
        anyhow::bail!(
            "{} action(s) failed: {}",
            report.failures.len(),
            report.failures.join("; ")
        );
    }

    Ok(())
}
