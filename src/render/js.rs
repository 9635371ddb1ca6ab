//! The discord.js printer.

use super::{ChainRenderer, escape_quotes, format_number};
use crate::plan::{BotPlan, CommandSpec, Statement};

pub(crate) struct JsRenderer;

impl ChainRenderer for JsRenderer {
    fn indent_unit(&self) -> usize {
        2
    }

    fn no_actions_comment(&self) -> &'static str {
        "// No actions defined"
    }

    fn statement(&self, stmt: &Statement, level: usize) -> String {
        let pad = self.pad(level);
        match stmt {
            Statement::Reply { message, ephemeral } => format!(
                "{pad}await interaction.reply({{ content: '{}', ephemeral: {} }});\n",
                escape_quotes(message),
                ephemeral
            ),
            Statement::SendMessage {
                message,
                channel_id,
            } => format!(
                "{pad}const channel = client.channels.cache.get('{channel_id}');\n\
                 {pad}if (channel) await channel.send('{}');\n",
                escape_quotes(message)
            ),
            Statement::DeferReply { ephemeral } => {
                format!("{pad}await interaction.deferReply({{ ephemeral: {ephemeral} }});\n")
            }
            Statement::FollowUp { message, ephemeral } => format!(
                "{pad}await interaction.followUp({{ content: '{}', ephemeral: {} }});\n",
                escape_quotes(message),
                ephemeral
            ),
            Statement::Wait { seconds } => format!(
                "{pad}await new Promise(r => setTimeout(r, {}));\n",
                format_number(seconds * 1000.0)
            ),
            Statement::Log { message } => format!("{pad}console.log(`{message}`);\n"),
            Statement::Kick { reason } => format!(
                "{pad}const member = interaction.options.getMember('user');\n\
                 {pad}if (member) await member.kick('{}');\n",
                escape_quotes(reason)
            ),
            Statement::Ban { reason } => format!(
                "{pad}const member = interaction.options.getMember('user');\n\
                 {pad}if (member) await member.ban({{ reason: '{}' }});\n",
                escape_quotes(reason)
            ),
            Statement::Timeout { minutes, reason } => format!(
                "{pad}const member = interaction.options.getMember('user');\n\
                 {pad}if (member) await member.timeout({}, '{}');\n",
                format_number(minutes * 60000.0),
                escape_quotes(reason)
            ),
            Statement::Branch {
                condition,
                then_chain,
                else_chain,
            } => format!(
                "{pad}if ({condition}) {{\n{}{pad}}} else {{\n{}{pad}}}\n",
                self.chain(then_chain, level + 1),
                self.chain(else_chain, level + 1)
            ),
            Statement::Placeholder => format!("{pad}await interaction.reply('Hello!');\n"),
        }
    }
}

/// The `index.js` entry point. Loader boilerplate for commands and events is
/// included only when the matching trigger kind exists on the canvas.
pub(crate) fn entry_file(plan: &BotPlan) -> String {
    let commands_loader = if plan.has_commands() {
        "// Load commands\n\
         client.commands = new Collection();\n\
         const commandFiles = fs.readdirSync(path.join(__dirname, 'commands')).filter(f => f.endsWith('.js'));\n\
         \n\
         for (const file of commandFiles) {\n\
         \x20 const command = require(`./commands/${file}`);\n\
         \x20 client.commands.set(command.data.name, command);\n\
         \x20 console.log(`[Commands] Loaded ${command.data.name}`);\n\
         }"
    } else {
        ""
    };

    let events_loader = if plan.has_events() {
        "// Load events\n\
         const eventFiles = fs.readdirSync(path.join(__dirname, 'events')).filter(f => f.endsWith('.js'));\n\
         \n\
         for (const file of eventFiles) {\n\
         \x20 const event = require(`./events/${file}`);\n\
         \x20 if (event.once) {\n\
         \x20   client.once(event.name, (...args) => event.execute(...args, client));\n\
         \x20 } else {\n\
         \x20   client.on(event.name, (...args) => event.execute(...args, client));\n\
         \x20 }\n\
         \x20 console.log(`[Events] Loaded ${event.name}`);\n\
         }"
    } else {
        ""
    };

    let handler = if plan.has_commands() {
        "// Handle slash commands\n\
         client.on('interactionCreate', async (interaction) => {\n\
         \x20 if (!interaction.isChatInputCommand()) return;\n\
         \n\
         \x20 const command = client.commands.get(interaction.commandName);\n\
         \x20 if (!command) return;\n\
         \n\
         \x20 try {\n\
         \x20   await command.execute(interaction, client);\n\
         \x20 } catch (error) {\n\
         \x20   console.error('[Error]', error);\n\
         \x20   const reply = { content: 'There was an error executing this command!', ephemeral: true };\n\
         \x20   if (interaction.replied || interaction.deferred) {\n\
         \x20     await interaction.followUp(reply);\n\
         \x20   } else {\n\
         \x20     await interaction.reply(reply);\n\
         \x20   }\n\
         \x20 }\n\
         });"
    } else if plan.is_empty() {
        // Keeps the entry file behaviorally complete for an empty canvas.
        "// Default placeholder action\n\
         client.on('interactionCreate', async (interaction) => {\n\
         \x20 await interaction.reply('Hello!');\n\
         });"
    } else {
        ""
    };

    format!(
        "const {{ Client, GatewayIntentBits, Collection }} = require('discord.js');\n\
         const fs = require('fs');\n\
         const path = require('path');\n\
         require('dotenv').config();\n\
         \n\
         const client = new Client({{\n\
         \x20 intents: [\n\
         \x20   GatewayIntentBits.Guilds,\n\
         \x20   GatewayIntentBits.GuildMessages,\n\
         \x20   GatewayIntentBits.MessageContent,\n\
         \x20   GatewayIntentBits.GuildMembers,\n\
         \x20 ]\n\
         }});\n\
         \n\
         {commands_loader}\n\
         \n\
         {events_loader}\n\
         \n\
         // Ready event\n\
         client.once('ready', () => {{\n\
         \x20 console.log(`✅ Logged in as ${{client.user.tag}}`);\n\
         \x20 console.log(`📊 Serving ${{client.guilds.cache.size}} servers`);\n\
         }});\n\
         \n\
         {handler}\n\
         \n\
         // Login\n\
         client.login(process.env.BOT_TOKEN);\n"
    )
}

/// One `commands/<slug>.js` module per slash command.
pub(crate) fn command_file(cmd: &CommandSpec) -> String {
    let body = JsRenderer.chain(&cmd.body, 3);
    format!(
        "const {{ SlashCommandBuilder }} = require('discord.js');\n\
         \n\
         module.exports = {{\n\
         \x20 data: new SlashCommandBuilder()\n\
         \x20   .setName('{name}')\n\
         \x20   .setDescription('{description}'),\n\
         \x20 \n\
         \x20 async execute(interaction, client) {{\n\
         \x20   try {{\n\
         {body}\n\
         \x20   }} catch (error) {{\n\
         \x20     console.error('[{name}] Error:', error);\n\
         \x20     await interaction.reply({{ content: 'An error occurred!', ephemeral: true }});\n\
         \x20   }}\n\
         \x20 }}\n\
         }};\n",
        name = escape_quotes(&cmd.name),
        description = escape_quotes(&cmd.description),
    )
}

/// One `events/<slug>.js` module per event listener.
pub(crate) fn event_file(event_name: &str, body: &[Statement]) -> String {
    let chain = JsRenderer.chain(body, 3);
    format!(
        "module.exports = {{\n\
         \x20 name: '{event_name}',\n\
         \x20 once: false,\n\
         \x20 \n\
         \x20 async execute(...args) {{\n\
         \x20   const client = args[args.length - 1];\n\
         \x20   \n\
         \x20   try {{\n\
         {chain}\n\
         \x20   }} catch (error) {{\n\
         \x20     console.error('[{event_name}] Error:', error);\n\
         \x20   }}\n\
         \x20 }}\n\
         }};\n"
    )
}
