use clap::{Parser, ValueEnum};
use kyto::prelude::*;
use std::fs;
use std::path::PathBuf;
use std::time::Instant;

/// Define CLI-specific enums for clap to parse.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum LanguageCli {
    /// Generate a discord.js (Node) project
    DiscordJs,
    /// Generate a discord.py (Python) project
    DiscordPy,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeCli {
    /// Print the file listing with sizes and validator diagnostics
    Preview,
    /// Write the full file tree under the output directory
    Files,
    /// Write a single compressed archive
    Zip,
}

/// Compile a Kyto canvas JSON file into a runnable Discord bot project
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the canvas JSON file (blocks and connections)
    canvas_path: String,
    /// Path to the project settings JSON file (token, client id, prefix)
    settings_path: String,

    /// The target language ecosystem
    #[arg(short, long, value_enum, default_value_t = LanguageCli::DiscordJs)]
    language: LanguageCli,

    /// The delivery mode
    #[arg(short, long, value_enum, default_value_t = ModeCli::Files)]
    mode: ModeCli,

    /// Output directory (files mode) or archive path (zip mode)
    #[arg(short, long, default_value = "bot-out")]
    out: PathBuf,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let total_start = Instant::now();

    let canvas_json = fs::read_to_string(&cli.canvas_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read canvas file '{}': {}",
            &cli.canvas_path, e
        ))
    });
    let settings_json = fs::read_to_string(&cli.settings_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read settings file '{}': {}",
            &cli.settings_path, e
        ))
    });

    let state: CanvasState = serde_json::from_str(&canvas_json)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse canvas JSON: {}", e)));
    let settings: ExportSettings = serde_json::from_str(&settings_json)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse settings JSON: {}", e)));

    let canvas = state
        .into_canvas()
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to convert canvas: {}", e)));

    let language = match cli.language {
        LanguageCli::DiscordJs => TargetLanguage::DiscordJs,
        LanguageCli::DiscordPy => TargetLanguage::DiscordPy,
    };
    let compiler = Compiler::builder(canvas, language, settings).build();

    match cli.mode {
        ModeCli::Preview => run_preview(&compiler),
        ModeCli::Files => run_files(&compiler, &cli.out),
        ModeCli::Zip => run_zip(&compiler, &cli.out),
    }

    println!("\nDone in {:?}", total_start.elapsed());
}

fn run_preview(compiler: &Compiler) {
    for preview in compiler.preview() {
        println!("{} ({} bytes)", preview.path, preview.size);
        for issue in &preview.issues {
            println!("  ! {}", issue);
        }
    }
}

fn run_files(compiler: &Compiler, out: &PathBuf) {
    let bundle = compiler.bundle();
    for file in &bundle.files {
        let path = out.join(&file.path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap_or_else(|e| {
                exit_with_error(&format!(
                    "Failed to create directory '{}': {}",
                    parent.display(),
                    e
                ))
            });
        }
        fs::write(&path, &file.content).unwrap_or_else(|e| {
            exit_with_error(&format!("Failed to write '{}': {}", path.display(), e))
        });
        println!("Wrote {}", path.display());
    }

    println!("\n{}", bundle.instructions);
}

fn run_zip(compiler: &Compiler, out: &PathBuf) {
    let archive = compiler
        .archive()
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to build archive: {}", e)));

    let path = if out.extension().is_some() {
        out.clone()
    } else {
        out.join(archive.file_name)
    };
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).unwrap_or_else(|e| {
            exit_with_error(&format!(
                "Failed to create directory '{}': {}",
                parent.display(),
                e
            ))
        });
    }
    fs::write(&path, &archive.bytes)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to write '{}': {}", path.display(), e)));

    println!("Wrote {} ({} bytes)", path.display(), archive.bytes.len());
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
