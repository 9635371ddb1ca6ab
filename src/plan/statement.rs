/// One step of generated bot behavior, independent of the target language.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// Reply to the invoking interaction.
    Reply { message: String, ephemeral: bool },
    /// Send a message to an explicit channel.
    SendMessage {
        message: String,
        channel_id: String,
    },
    /// Acknowledge the interaction now, answer later.
    DeferReply { ephemeral: bool },
    /// Follow-up message after a reply or deferral.
    FollowUp { message: String, ephemeral: bool },
    /// Pause the chain for a number of seconds.
    Wait { seconds: f64 },
    /// Write a line to the bot's console.
    Log { message: String },
    /// Kick the targeted member.
    Kick { reason: String },
    /// Ban the targeted member.
    Ban { reason: String },
    /// Time the targeted member out for a number of minutes.
    Timeout { minutes: f64, reason: String },
    /// Two-way branch on a verbatim, author-supplied condition expression.
    Branch {
        condition: String,
        then_chain: Vec<Statement>,
        else_chain: Vec<Statement>,
    },
    /// The canonical placeholder emitted for a trigger with no downstream
    /// blocks, so every generated unit of code stays behaviorally complete.
    Placeholder,
}

impl Statement {
    /// Visits this statement and everything nested under branches.
    pub fn walk(&self, visit: &mut impl FnMut(&Statement)) {
        visit(self);
        if let Statement::Branch {
            then_chain,
            else_chain,
            ..
        } = self
        {
            for stmt in then_chain {
                stmt.walk(visit);
            }
            for stmt in else_chain {
                stmt.walk(visit);
            }
        }
    }
}

/// True if any statement in `chain` (branches included) matches `pred`.
pub(crate) fn chain_contains(chain: &[Statement], pred: impl Fn(&Statement) -> bool) -> bool {
    let mut found = false;
    for stmt in chain {
        stmt.walk(&mut |s| {
            if pred(s) {
                found = true;
            }
        });
    }
    found
}
