//! The discord.py printer.

use super::{ChainRenderer, escape_quotes, format_number};
use crate::plan::{BotPlan, CommandSpec, Statement, chain_contains};
use itertools::Itertools;

pub(crate) struct PyRenderer;

impl ChainRenderer for PyRenderer {
    fn indent_unit(&self) -> usize {
        4
    }

    fn no_actions_comment(&self) -> &'static str {
        "# No actions defined"
    }

    fn statement(&self, stmt: &Statement, level: usize) -> String {
        let pad = self.pad(level);
        let deeper = self.pad(level + 1);
        match stmt {
            Statement::Reply { message, ephemeral } => format!(
                "{pad}await interaction.response.send_message('{}', ephemeral={})\n",
                escape_quotes(message),
                py_bool(*ephemeral)
            ),
            Statement::SendMessage {
                message,
                channel_id,
            } => format!(
                "{pad}channel = bot.get_channel({channel_id})\n\
                 {pad}if channel:\n\
                 {deeper}await channel.send('{}')\n",
                escape_quotes(message)
            ),
            Statement::DeferReply { ephemeral } => format!(
                "{pad}await interaction.response.defer(ephemeral={})\n",
                py_bool(*ephemeral)
            ),
            Statement::FollowUp { message, ephemeral } => format!(
                "{pad}await interaction.followup.send('{}', ephemeral={})\n",
                escape_quotes(message),
                py_bool(*ephemeral)
            ),
            Statement::Wait { seconds } => {
                format!("{pad}await asyncio.sleep({})\n", format_number(*seconds))
            }
            Statement::Log { message } => {
                format!("{pad}print(f\"{}\")\n", escape_quotes(message))
            }
            Statement::Kick { reason } => format!(
                "{pad}member = interaction.namespace.user\n\
                 {pad}if member:\n\
                 {deeper}await member.kick(reason='{}')\n",
                escape_quotes(reason)
            ),
            Statement::Ban { reason } => format!(
                "{pad}member = interaction.namespace.user\n\
                 {pad}if member:\n\
                 {deeper}await member.ban(reason='{}')\n",
                escape_quotes(reason)
            ),
            Statement::Timeout { minutes, reason } => format!(
                "{pad}member = interaction.namespace.user\n\
                 {pad}if member:\n\
                 {deeper}await member.timeout(datetime.timedelta(minutes={}), reason='{}')\n",
                format_number(*minutes),
                escape_quotes(reason)
            ),
            Statement::Branch {
                condition,
                then_chain,
                else_chain,
            } => format!(
                "{pad}if {condition}:\n{}{pad}else:\n{}\n",
                self.chain(then_chain, level + 1),
                self.chain(else_chain, level + 1)
            ),
            Statement::Placeholder => {
                format!("{pad}await interaction.response.send_message('Hello!')\n")
            }
        }
    }
}

fn py_bool(value: bool) -> &'static str {
    if value { "True" } else { "False" }
}

/// Import lines a chain needs beyond the fixed template imports.
fn extra_imports(chains: Vec<&[Statement]>) -> String {
    let needs_asyncio = chains
        .iter()
        .any(|chain| chain_contains(chain, |s| matches!(s, Statement::Wait { .. })));
    let needs_datetime = chains
        .iter()
        .any(|chain| chain_contains(chain, |s| matches!(s, Statement::Timeout { .. })));

    let mut imports = String::new();
    if needs_asyncio {
        imports.push_str("import asyncio\n");
    }
    if needs_datetime {
        imports.push_str("import datetime\n");
    }
    imports
}

/// The `main.py` entry point. Command cogs load in `setup_hook` only when
/// commands exist; event handlers are emitted inline rather than as files.
/// `event_names` are the per-event runtime names, parallel to `plan.events`.
pub(crate) fn entry_file(plan: &BotPlan, event_names: &[String]) -> String {
    let setup_block = if plan.has_commands() {
        "# Load command cogs\n\
         \x20       for filename in os.listdir('./commands'):\n\
         \x20           if filename.endswith('.py'):\n\
         \x20               await self.load_extension(f'commands.{filename[:-3]}')\n\
         \x20               print(f'[Commands] Loaded {filename}')\n\
         \x20       \n\
         \x20       # Sync slash commands\n\
         \x20       await self.tree.sync()\n\
         \x20       print('[Commands] Synced slash commands')"
    } else {
        "# No commands to load"
    };

    let events_section = if plan.has_events() {
        plan.events
            .iter()
            .zip_eq(event_names)
            .map(|(event, name)| {
                format!(
                    "\n\
                     @bot.event\n\
                     async def {name}(*args):\n\
                     \x20   try:\n\
                     {}\n\
                     \x20   except Exception as error:\n\
                     \x20       print(f'[{name}] Error: {{error}}')\n",
                    PyRenderer.chain(&event.body, 2)
                )
            })
            .collect()
    } else if plan.is_empty() {
        // Keeps the entry file behaviorally complete for an empty canvas.
        "\n\
         @bot.event\n\
         async def on_interaction(interaction):\n\
         \x20   await interaction.response.send_message('Hello!')\n"
            .to_string()
    } else {
        String::new()
    };

    let imports = extra_imports(plan.events.iter().map(|e| e.body.as_slice()).collect());

    format!(
        "import discord\n\
         from discord.ext import commands\n\
         from discord import app_commands\n\
         import os\n\
         from dotenv import load_dotenv\n\
         {imports}\
         \n\
         load_dotenv()\n\
         \n\
         class Bot(commands.Bot):\n\
         \x20   def __init__(self):\n\
         \x20       intents = discord.Intents.default()\n\
         \x20       intents.message_content = True\n\
         \x20       intents.members = True\n\
         \x20       \n\
         \x20       super().__init__(\n\
         \x20           command_prefix='!',\n\
         \x20           intents=intents,\n\
         \x20           help_command=None\n\
         \x20       )\n\
         \x20   \n\
         \x20   async def setup_hook(self):\n\
         \x20       \"\"\"Load commands and sync slash commands\"\"\"\n\
         \x20       {setup_block}\n\
         \x20   \n\
         \x20   async def on_ready(self):\n\
         \x20       print(f'✅ Logged in as {{self.user}}')\n\
         \x20       print(f'📊 Serving {{len(self.guilds)}} servers')\n\
         \n\
         bot = Bot()\n\
         \n\
         {events_section}\n\
         \n\
         # Run bot\n\
         bot.run(os.getenv('BOT_TOKEN'))\n"
    )
}

/// One `commands/<slug>.py` cog per slash command.
pub(crate) fn command_file(cmd: &CommandSpec) -> String {
    let class_name = pascal_case(&cmd.name);
    let method_name = identifier_safe(&cmd.name);
    let body = PyRenderer.chain(&cmd.body, 3);
    let imports = extra_imports(vec![cmd.body.as_slice()]);

    format!(
        "import discord\n\
         from discord.ext import commands\n\
         from discord import app_commands\n\
         {imports}\
         \n\
         class {class_name}(commands.Cog):\n\
         \x20   def __init__(self, bot):\n\
         \x20       self.bot = bot\n\
         \x20   \n\
         \x20   @app_commands.command(name=\"{name}\", description=\"{description}\")\n\
         \x20   async def {method_name}_command(self, interaction: discord.Interaction):\n\
         \x20       try:\n\
         {body}\n\
         \x20       except Exception as error:\n\
         \x20           print(f'[{name}] Error: {{error}}')\n\
         \x20           await interaction.response.send_message('An error occurred!', ephemeral=True)\n\
         \n\
         async def setup(bot):\n\
         \x20   await bot.add_cog({class_name}(bot))\n",
        name = escape_quotes(&cmd.name),
        description = escape_quotes(&cmd.description),
    )
}

/// `my-cmd` registers under its slug but needs `my_cmd` as an identifier.
fn identifier_safe(slug: &str) -> String {
    slug.replace('-', "_")
}

fn pascal_case(slug: &str) -> String {
    slug.split('-')
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}
