//! Static reply texts.

pub const START_REPLY: &str = "\
Welcome to the slotwatch appointment notification bot!

This bot lets you know when new appointment slots become available, straight in Telegram.

Send /register to start receiving notifications about new slots. Send /unregister at any time to stop them.

Type /help to see every command.";

pub const HELP_REPLY: &str = "\
slotwatch commands

/start - Show the welcome message again.
/register - Receive notifications about new appointment slots.
/unregister - Stop receiving notifications about new appointment slots.
/help - Show this list.";
