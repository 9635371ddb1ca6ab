//! Tests for file assembly: layouts, manifests, environment file, readme.
mod common;
use common::*;
use kyto::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn test_js_file_layout() {
    let bundle = compile(ping_pong_canvas(), TargetLanguage::DiscordJs).bundle();
    let paths: Vec<&str> = bundle.files.iter().map(|f| f.path.as_str()).collect();
    assert_eq!(
        paths,
        vec![
            "index.js",
            "commands/ping.js",
            ".env",
            "package.json",
            "README.md",
        ]
    );
}

#[test]
fn test_py_file_layout() {
    let bundle = compile(ping_pong_canvas(), TargetLanguage::DiscordPy).bundle();
    let paths: Vec<&str> = bundle.files.iter().map(|f| f.path.as_str()).collect();
    assert_eq!(
        paths,
        vec![
            "main.py",
            "commands/ping.py",
            ".env",
            "requirements.txt",
            "README.md",
        ]
    );
}

#[test]
fn test_js_entry_loader_requires_commands() {
    let with_commands = compile(ping_pong_canvas(), TargetLanguage::DiscordJs).bundle();
    let entry = find_file(&with_commands.files, "index.js");
    assert!(entry.content.contains("// Load commands"));
    assert!(entry.content.contains("// Handle slash commands"));
    assert!(!entry.content.contains("// Load events"));

    let empty = compile(CanvasDefinition::default(), TargetLanguage::DiscordJs).bundle();
    let entry = find_file(&empty.files, "index.js");
    assert!(!entry.content.contains("// Load commands"));
    assert!(!entry.content.contains("// Handle slash commands"));
}

#[test]
fn test_py_entry_setup_hook_requires_commands() {
    let with_commands = compile(ping_pong_canvas(), TargetLanguage::DiscordPy).bundle();
    let entry = find_file(&with_commands.files, "main.py");
    assert!(entry.content.contains("# Load command cogs"));
    assert!(entry.content.contains("await self.tree.sync()"));

    let empty = compile(CanvasDefinition::default(), TargetLanguage::DiscordPy).bundle();
    let entry = find_file(&empty.files, "main.py");
    assert!(entry.content.contains("# No commands to load"));
    assert!(!entry.content.contains("# Load command cogs"));
}

#[test]
fn test_env_file_holds_settings_verbatim() {
    let bundle = compile(ping_pong_canvas(), TargetLanguage::DiscordJs).bundle();
    let env = find_file(&bundle.files, ".env");
    assert_eq!(
        env.content,
        "# Discord Bot Configuration\n\
         BOT_TOKEN=token-123\n\
         CLIENT_ID=client-456\n\
         PREFIX=!\n\
         \n\
         # Generated by Kyto\n\
         # DO NOT COMMIT THIS FILE TO VERSION CONTROL\n"
    );
}

#[test]
fn test_env_file_omits_empty_prefix() {
    let settings = ExportSettings {
        prefix: String::new(),
        bot_token: "tok".to_string(),
        client_id: "cid".to_string(),
        intents: vec![],
    };
    let bundle = Compiler::builder(ping_pong_canvas(), TargetLanguage::DiscordJs, settings)
        .build()
        .bundle();
    let env = find_file(&bundle.files, ".env");
    assert!(env.content.contains("CLIENT_ID=cid\n\n\n# Generated by Kyto"));
    assert!(!env.content.contains("PREFIX="));
}

#[test]
fn test_package_json_manifest() {
    let bundle = compile(ping_pong_canvas(), TargetLanguage::DiscordJs).bundle();
    let manifest = find_file(&bundle.files, "package.json");

    let parsed: serde_json::Value = serde_json::from_str(&manifest.content).unwrap();
    assert_eq!(parsed["name"], "discord-bot");
    assert_eq!(parsed["version"], "1.0.0");
    assert_eq!(parsed["main"], "index.js");
    assert_eq!(parsed["type"], "commonjs");
    assert_eq!(parsed["dependencies"]["discord.js"], "^14.14.1");
    assert_eq!(parsed["dependencies"]["dotenv"], "^16.4.5");
    assert_eq!(parsed["scripts"]["start"], "node index.js");

    // The structured dependency map mirrors the manifest.
    assert_eq!(bundle.dependencies["discord.js"], "^14.14.1");
    assert_eq!(bundle.dependencies["dotenv"], "^16.4.5");
}

#[test]
fn test_requirements_txt_manifest() {
    let bundle = compile(ping_pong_canvas(), TargetLanguage::DiscordPy).bundle();
    let manifest = find_file(&bundle.files, "requirements.txt");
    assert_eq!(manifest.content, "discord.py==2.3.2\npython-dotenv==1.0.0");

    // Python's structured map stays empty; the flat file is the manifest.
    assert!(bundle.dependencies.is_empty());
}

fn member_join_canvas() -> CanvasDefinition {
    CanvasDefinition {
        blocks: vec![
            block("e", "event_member_join", "trigger", json!({})),
            block(
                "w",
                "send_message",
                "actions",
                json!({ "message": "welcome", "channel_id": "42" }),
            ),
        ],
        connections: vec![connection("c", "e", "w", None)],
    }
}

#[test]
fn test_js_event_file_uses_mapped_name_and_slug() {
    let bundle = compile(member_join_canvas(), TargetLanguage::DiscordJs).bundle();
    let event = find_file(&bundle.files, "events/guildmemberadd.js");
    assert!(event.content.contains("name: 'guildMemberAdd',"));
    assert!(event.content.contains("await channel.send('welcome');"));
}

#[test]
fn test_py_events_are_inline_with_canonical_names() {
    let bundle = compile(member_join_canvas(), TargetLanguage::DiscordPy).bundle();

    // No event files for this target.
    assert!(!bundle.files.iter().any(|f| f.path.starts_with("events/")));

    let entry = find_file(&bundle.files, "main.py");
    assert!(entry.content.contains("@bot.event"));
    assert!(entry.content.contains("async def on_member_join(*args):"));
}

#[test]
fn test_unmapped_event_tag_passes_through() {
    let canvas = CanvasDefinition {
        blocks: vec![block("e", "event_typing_start", "trigger", json!({}))],
        connections: vec![],
    };
    let bundle = compile(canvas, TargetLanguage::DiscordJs).bundle();
    let event = find_file(&bundle.files, "events/typing_start.js");
    assert!(event.content.contains("name: 'typing_start',"));
}

#[test]
fn test_custom_event_mapping_extends_table() {
    let compiler = Compiler::builder(
        CanvasDefinition {
            blocks: vec![block("e", "event_boost", "trigger", json!({}))],
            connections: vec![],
        },
        TargetLanguage::DiscordJs,
        test_settings(),
    )
    .with_event_mapping("boost", "guildBoostCreate", "on_guild_boost")
    .build();

    let bundle = compiler.bundle();
    let event = find_file(&bundle.files, "events/guildboostcreate.js");
    assert!(event.content.contains("name: 'guildBoostCreate',"));
}

#[test]
fn test_readme_reports_counts() {
    let bundle = compile(ping_pong_canvas(), TargetLanguage::DiscordJs).bundle();
    let readme = find_file(&bundle.files, "README.md");
    assert!(readme.content.contains("- ✅ Slash Commands (1)"));
    assert!(!readme.content.contains("Event Listeners"));
    assert!(readme.content.contains("npm install"));

    let bundle = compile(member_join_canvas(), TargetLanguage::DiscordPy).bundle();
    let readme = find_file(&bundle.files, "README.md");
    assert!(readme.content.contains("- ✅ Event Listeners (1)"));
    assert!(readme.content.contains("pip install -r requirements.txt"));
}

#[test]
fn test_instructions_summarize_components() {
    let bundle = compile(ping_pong_canvas(), TargetLanguage::DiscordJs).bundle();
    assert!(bundle.instructions.contains("- 1 Slash Commands"));
    assert!(bundle.instructions.contains("- 0 Event Handlers"));
    assert!(bundle.instructions.contains("Run: npm install"));

    let bundle = compile(ping_pong_canvas(), TargetLanguage::DiscordPy).bundle();
    assert!(
        bundle
            .instructions
            .contains("Run: pip install -r requirements.txt")
    );
}

#[test]
fn test_py_command_with_wait_imports_asyncio() {
    let canvas = CanvasDefinition {
        blocks: vec![
            block("t", "command_slash", "trigger", json!({ "name": "slow" })),
            block("w", "wait", "actions", json!({ "duration": 2 })),
        ],
        connections: vec![connection("c", "t", "w", None)],
    };
    let bundle = compile(canvas, TargetLanguage::DiscordPy).bundle();
    let cmd = find_file(&bundle.files, "commands/slow.py");
    assert!(cmd.content.contains("import asyncio\n"));
    assert!(cmd.content.contains("await asyncio.sleep(2)"));

    // Commands without a wait never pull the import in.
    let bundle = compile(ping_pong_canvas(), TargetLanguage::DiscordPy).bundle();
    let cmd = find_file(&bundle.files, "commands/ping.py");
    assert!(!cmd.content.contains("import asyncio"));
}

#[test]
fn test_hyphenated_command_keeps_slug_but_gets_safe_identifier() {
    let canvas = CanvasDefinition {
        blocks: vec![block(
            "t",
            "command_slash",
            "trigger",
            json!({ "name": "my cmd" }),
        )],
        connections: vec![],
    };
    let bundle = compile(canvas, TargetLanguage::DiscordPy).bundle();
    let cmd = find_file(&bundle.files, "commands/my-cmd.py");
    assert!(cmd.content.contains("name=\"my-cmd\""));
    assert!(cmd.content.contains("async def my_cmd_command(self,"));
    assert!(cmd.content.contains("class MyCmd(commands.Cog):"));
}
