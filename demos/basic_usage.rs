// Basic usage example for pathfield
//
// Run with: cargo run --example basic_usage

use pathfield::{
    AutocompleteProps, MemoryProvider, PathField, PathFieldConfig, Suggestions, SymlinkMode,
};
use std::sync::Arc;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Stand-in for the backend listing API
    let provider = Arc::new(
        MemoryProvider::new()
            .with_dir("/", ["etc", "home", "srv", "var"])
            .with_dir("/srv", ["backups", "git", "www"])
            .with_dir("/srv/backups", ["daily", "weekly", "monthly"])
            .with_failure("/var", "permission denied"),
    );

    let config = PathFieldConfig::builder()
        .props(
            AutocompleteProps::new()
                .label("Backup destination")
                .placeholder("/srv/backups")
                .required(true)
                .meta_str("helper_text", "Directory on the server"),
        )
        .symlink(SymlinkMode::Resolve)
        .lru_cache(32)
        .build()?;

    let field = PathField::new(provider.clone(), config);
    let widget = field.render();

    println!(
        "Rendering field: {}",
        serde_json::to_string_pretty(widget.props())?
    );

    // Simulate the user typing one character at a time
    let typed = "/srv/backups/w";
    for end in 1..=typed.len() {
        let input = &typed[..end];
        match widget.suggest(input).await {
            Suggestions::Ready(options) => {
                let values: Vec<&str> = options.iter().map(|o| o.value()).collect();
                println!("{input:<16} -> {values:?}");
            }
            Suggestions::Failed(message) => println!("{input:<16} -> error: {message}"),
        }
    }

    println!(
        "\n{} keystrokes, {} listing requests",
        typed.len(),
        provider.fetch_count()
    );

    // Failures are shown inline, not cached
    if let Suggestions::Failed(message) = widget.suggest("/var/lo").await {
        println!("/var/lo          -> error: {message}");
    }

    Ok(())
}
