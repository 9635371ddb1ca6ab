//! Composes the full output file set for a compiled plan.
//!
//! Assembly order is fixed: entry file, command files, event files (only
//! where the target keeps events in files), environment file, dependency
//! manifest, readme. Output is a pure function of its inputs.

use crate::export::{ExportSettings, GeneratedFile, TargetLanguage};
use crate::plan::{BotPlan, slugify_name};
use crate::render::{js, py};
use ahash::AHashMap;
use std::collections::BTreeMap;

/// Fixed mapping from internal event tags to each runtime's canonical
/// gateway event name. Tags without an entry pass through unchanged.
#[derive(Debug, Clone, Default)]
pub(crate) struct EventNameTable {
    overrides: AHashMap<String, (String, String)>,
}

impl EventNameTable {
    /// Adds or replaces the `(js, py)` mapping for one tag.
    pub(crate) fn insert(
        &mut self,
        tag: impl Into<String>,
        js_name: impl Into<String>,
        py_name: impl Into<String>,
    ) {
        self.overrides
            .insert(tag.into(), (js_name.into(), py_name.into()));
    }

    /// Resolves a tag to the runtime event name for `language`.
    pub(crate) fn resolve(&self, tag: &str, language: TargetLanguage) -> String {
        if let Some((js_name, py_name)) = self.overrides.get(tag) {
            return match language {
                TargetLanguage::DiscordJs => js_name.clone(),
                TargetLanguage::DiscordPy => py_name.clone(),
            };
        }
        match (tag, language) {
            ("member_join", TargetLanguage::DiscordJs) => "guildMemberAdd",
            ("member_leave", TargetLanguage::DiscordJs) => "guildMemberRemove",
            ("message", TargetLanguage::DiscordJs) => "messageCreate",
            ("member_join", TargetLanguage::DiscordPy) => "on_member_join",
            ("member_leave", TargetLanguage::DiscordPy) => "on_member_remove",
            ("message", TargetLanguage::DiscordPy) => "on_message",
            ("ready", TargetLanguage::DiscordPy) => "on_ready",
            _ => tag,
        }
        .to_string()
    }
}

/// Builds the complete file set for one plan under one target.
pub(crate) fn assemble(
    plan: &BotPlan,
    language: TargetLanguage,
    settings: &ExportSettings,
    events: &EventNameTable,
) -> Vec<GeneratedFile> {
    let mut files = Vec::new();

    match language {
        TargetLanguage::DiscordJs => {
            files.push(GeneratedFile {
                path: "index.js".to_string(),
                content: js::entry_file(plan),
            });
            for cmd in &plan.commands {
                files.push(GeneratedFile {
                    path: format!("commands/{}.js", cmd.name),
                    content: js::command_file(cmd),
                });
            }
            for event in &plan.events {
                let name = events.resolve(&event.tag, language);
                files.push(GeneratedFile {
                    path: format!("events/{}.js", file_slug(&name)),
                    content: js::event_file(&name, &event.body),
                });
            }
        }
        TargetLanguage::DiscordPy => {
            let event_names: Vec<String> = plan
                .events
                .iter()
                .map(|event| events.resolve(&event.tag, language))
                .collect();
            files.push(GeneratedFile {
                path: "main.py".to_string(),
                content: py::entry_file(plan, &event_names),
            });
            for cmd in &plan.commands {
                files.push(GeneratedFile {
                    path: format!("commands/{}.py", cmd.name),
                    content: py::command_file(cmd),
                });
            }
            // Event handlers live inline in main.py for this target.
        }
    }

    files.push(GeneratedFile {
        path: ".env".to_string(),
        content: env_file(settings),
    });
    files.push(manifest_file(language));
    files.push(GeneratedFile {
        path: "README.md".to_string(),
        content: readme(language, plan),
    });

    files
}

/// Name→version pairs surfaced in the full response shape. Only the
/// JavaScript target carries a structured map; Python's manifest is the
/// flat requirements.txt.
pub(crate) fn dependencies(language: TargetLanguage) -> BTreeMap<String, String> {
    match language {
        TargetLanguage::DiscordJs => BTreeMap::from([
            ("discord.js".to_string(), "^14.14.1".to_string()),
            ("dotenv".to_string(), "^16.4.5".to_string()),
        ]),
        TargetLanguage::DiscordPy => BTreeMap::new(),
    }
}

/// A runtime event name reduced to a safe file name.
fn file_slug(name: &str) -> String {
    slugify_name(name)
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
        .collect()
}

fn env_file(settings: &ExportSettings) -> String {
    let prefix_line = if settings.prefix.is_empty() {
        String::new()
    } else {
        format!("PREFIX={}", settings.prefix)
    };
    format!(
        "# Discord Bot Configuration\n\
         BOT_TOKEN={}\n\
         CLIENT_ID={}\n\
         {prefix_line}\n\
         \n\
         # Generated by Kyto\n\
         # DO NOT COMMIT THIS FILE TO VERSION CONTROL\n",
        settings.bot_token, settings.client_id,
    )
}

fn manifest_file(language: TargetLanguage) -> GeneratedFile {
    match language {
        TargetLanguage::DiscordJs => {
            let manifest = serde_json::json!({
                "name": "discord-bot",
                "version": "1.0.0",
                "main": "index.js",
                "type": "commonjs",
                "dependencies": dependencies(language),
                "scripts": {
                    "start": "node index.js",
                    "dev": "node index.js",
                },
            });
            GeneratedFile {
                path: "package.json".to_string(),
                content: serde_json::to_string_pretty(&manifest)
                    .expect("package manifest is plain JSON"),
            }
        }
        TargetLanguage::DiscordPy => GeneratedFile {
            path: "requirements.txt".to_string(),
            content: "discord.py==2.3.2\npython-dotenv==1.0.0".to_string(),
        },
    }
}

fn readme(language: TargetLanguage, plan: &BotPlan) -> String {
    let command_line = if plan.has_commands() {
        format!("- ✅ Slash Commands ({})", plan.commands.len())
    } else {
        String::new()
    };
    let event_line = if plan.has_events() {
        format!("- ✅ Event Listeners ({})", plan.events.len())
    } else {
        String::new()
    };

    let (install, run, structure, docs) = match language {
        TargetLanguage::DiscordJs => (
            "```bash\nnpm install\n```",
            "```bash\nnpm start\n```",
            "├── index.js           # Main bot file\n\
             ├── commands/          # Slash command handlers\n\
             ├── events/            # Event listeners\n\
             ├── package.json       # Dependencies\n\
             └── .env              # Configuration",
            "[Discord.js Documentation](https://discord.js.org)",
        ),
        TargetLanguage::DiscordPy => (
            "```bash\npip install -r requirements.txt\n```",
            "```bash\npython main.py\n```",
            "├── main.py            # Main bot file\n\
             ├── commands/          # Command cogs\n\
             ├── requirements.txt   # Dependencies\n\
             └── .env              # Configuration",
            "[Discord.py Documentation](https://discordpy.readthedocs.io)",
        ),
    };

    format!(
        "# Discord Bot - Generated by Kyto\n\
         \n\
         This bot was automatically generated from a visual canvas using [Kyto](https://kyto.app).\n\
         \n\
         ## Features\n\
         \n\
         {command_line}\n\
         {event_line}\n\
         - ✅ Error Handling\n\
         - ✅ Environment Configuration\n\
         \n\
         ## Setup\n\
         \n\
         ### 1. Install Dependencies\n\
         \n\
         {install}\n\
         \n\
         ### 2. Configure Environment\n\
         \n\
         Create a `.env` file with your bot credentials (already generated):\n\
         \n\
         ```env\n\
         BOT_TOKEN=your_bot_token_here\n\
         CLIENT_ID=your_client_id_here\n\
         ```\n\
         \n\
         ### 3. Run the Bot\n\
         \n\
         {run}\n\
         \n\
         ## Project Structure\n\
         \n\
         ```\n\
         {structure}\n\
         ```\n\
         \n\
         ## Deployment\n\
         \n\
         Deploy to your favorite platform:\n\
         - **Heroku**: Use the Heroku CLI\n\
         - **Railway**: Connect your GitHub repo\n\
         - **Cloudflare Workers**: Use Wrangler CLI\n\
         - **VPS**: Use PM2 or systemd\n\
         \n\
         ## Need Help?\n\
         \n\
         - {docs}\n\
         - [Kyto Documentation](https://docs.kyto.app)\n\
         \n\
         ---\n\
         \n\
         **Made with ❤️ using Kyto**\n"
    )
}

/// The quick-start text carried alongside the full response shape.
pub(crate) fn instructions(language: TargetLanguage, plan: &BotPlan) -> String {
    let (install, register, start) = match language {
        TargetLanguage::DiscordJs => (
            "Run: npm install",
            "Run: node deploy-commands.js (if provided)",
            "Run: npm start",
        ),
        TargetLanguage::DiscordPy => (
            "Run: pip install -r requirements.txt",
            "Commands auto-sync on startup",
            "Run: python main.py",
        ),
    };

    format!(
        "## Quick Start Guide\n\
         \n\
         1. **Install Dependencies**\n\
         \x20  {install}\n\
         \n\
         2. **Configure Bot Token**\n\
         \x20  Add your bot token to the .env file\n\
         \n\
         3. **Register Slash Commands** (Discord.js only)\n\
         \x20  {register}\n\
         \n\
         4. **Start the Bot**\n\
         \x20  {start}\n\
         \n\
         5. **Test in Discord**\n\
         \x20  Invite your bot and test the commands!\n\
         \n\
         ## Generated Components\n\
         - {} Slash Commands\n\
         - {} Event Handlers\n\
         - Full error handling included\n\
         \n\
         Generated by Kyto - Visual Automation Studio\n",
        plan.commands.len(),
        plan.events.len(),
    )
}
