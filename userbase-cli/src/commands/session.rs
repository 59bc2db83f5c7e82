//! Session command - interactive, line-oriented user management
//!
//! One repository lives for the whole session. Commands are read from
//! stdin, one per line:
//!
//! ```text
//! save <login> <password>
//! find <id>
//! list
//! count
//! help
//! quit
//! ```

use std::io::{self, BufRead, Write};

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use userbase_core::{OperationResult, User, UserbaseContext};
use uuid::Uuid;

use super::{get_context, log_command, log_event};
use crate::output;

#[derive(Debug, PartialEq, Eq)]
enum SessionCommand {
    Save { login: String, password: String },
    Find(Uuid),
    List,
    Count,
    Help,
    Quit,
}

const HELP: &str = "Commands: save <login> <password> | find <id> | list | count | help | quit";

/// Decode one raw input line; invalid UTF-8 is reported, not fatal
fn decode_line(bytes: &[u8]) -> std::result::Result<&str, String> {
    std::str::from_utf8(bytes).map_err(|e| format!("input is not valid UTF-8: {}", e))
}

/// Parse one input line. Blank lines yield `Ok(None)`.
fn parse_line(line: &str) -> std::result::Result<Option<SessionCommand>, String> {
    let mut parts = line.split_whitespace();
    let Some(command) = parts.next() else {
        return Ok(None);
    };
    let args: Vec<&str> = parts.collect();

    let parsed = match (command, args.as_slice()) {
        ("save", [login, password]) => SessionCommand::Save {
            login: login.to_string(),
            password: password.to_string(),
        },
        ("save", _) => return Err("usage: save <login> <password>".to_string()),
        ("find", [id]) => {
            let id = Uuid::parse_str(id).map_err(|e| format!("invalid id '{}': {}", id, e))?;
            SessionCommand::Find(id)
        }
        ("find", _) => return Err("usage: find <id>".to_string()),
        ("list", []) => SessionCommand::List,
        ("list", _) => return Err("usage: list".to_string()),
        ("count", []) => SessionCommand::Count,
        ("count", _) => return Err("usage: count".to_string()),
        ("help", _) => SessionCommand::Help,
        ("quit" | "exit", _) => SessionCommand::Quit,
        (other, _) => return Err(format!("unknown command '{}'. {}", other, HELP)),
    };

    Ok(Some(parsed))
}

pub fn run(json: bool) -> Result<()> {
    let ctx = get_context()?;
    log_command(&ctx, "session");

    let interactive = atty::is(atty::Stream::Stdin);
    if interactive && !json {
        output::info("Userbase session. Users are kept in memory until you quit.");
        println!("{}", HELP.dimmed());
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut buf = Vec::new();

    loop {
        if interactive && !json {
            print!("{} ", "ub>".bold());
            io::stdout().flush()?;
        }

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }

        match decode_line(&buf).and_then(parse_line) {
            Ok(None) => continue,
            Ok(Some(SessionCommand::Quit)) => break,
            Ok(Some(command)) => execute(&ctx, command, json)?,
            Err(message) => {
                if json {
                    emit_json(OperationResult::<()>::fail(message))?;
                } else {
                    output::error(&message);
                }
            }
        }
    }

    log_event(&ctx, "session_ended");
    Ok(())
}

fn execute(ctx: &UserbaseContext, command: SessionCommand, json: bool) -> Result<()> {
    let service = &ctx.user_service;

    match command {
        SessionCommand::Save { login, password } => {
            let result = service.register(login, password);
            if json {
                return emit_json(OperationResult::from(result));
            }
            match result {
                Ok(user) => {
                    let id = output::format_id(&user);
                    output::success(&format!("Saved {} ({})", user.login(), id));
                }
                Err(e) => output::error(&e.to_string()),
            }
        }
        SessionCommand::Find(id) => {
            let result = service.find_by_id(id);
            if json {
                return emit_json(OperationResult::from(result));
            }
            match result {
                Ok(user) => print_users(&[user]),
                Err(e) => output::error(&e.to_string()),
            }
        }
        SessionCommand::List => {
            let result = service.find_all();
            if json {
                return emit_json(OperationResult::from(result));
            }
            match result {
                Ok(users) if users.is_empty() => println!("No users saved."),
                Ok(users) => print_users(&users),
                Err(e) => output::error(&e.to_string()),
            }
        }
        SessionCommand::Count => {
            let result = service.count();
            if json {
                return emit_json(OperationResult::from(result));
            }
            match result {
                Ok(count) => println!("{} user(s)", count),
                Err(e) => output::error(&e.to_string()),
            }
        }
        SessionCommand::Help => {
            if !json {
                println!("{}", HELP);
            }
        }
        SessionCommand::Quit => {}
    }

    Ok(())
}

fn print_users(users: &[User]) {
    println!("{}", output::users_table(users));
}

fn emit_json<T: Serialize>(result: OperationResult<T>) -> Result<()> {
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_save() {
        assert_eq!(
            parse_line("save Gabriel secret").unwrap(),
            Some(SessionCommand::Save {
                login: "Gabriel".to_string(),
                password: "secret".to_string(),
            })
        );
    }

    #[test]
    fn test_parse_save_requires_login_and_password() {
        assert_eq!(parse_line("save Gabriel").unwrap_err(), "usage: save <login> <password>");
        assert!(parse_line("save").is_err());
        assert!(parse_line("save a b c").is_err());
    }

    #[test]
    fn test_parse_find() {
        let id = Uuid::new_v4();
        assert_eq!(
            parse_line(&format!("find {}", id)).unwrap(),
            Some(SessionCommand::Find(id))
        );
        assert!(parse_line("find not-a-uuid").is_err());
    }

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(parse_line("  list ").unwrap(), Some(SessionCommand::List));
        assert_eq!(parse_line("count").unwrap(), Some(SessionCommand::Count));
        assert_eq!(parse_line("exit").unwrap(), Some(SessionCommand::Quit));
        assert_eq!(parse_line("").unwrap(), None);
    }

    #[test]
    fn test_parse_extra_arguments_show_usage() {
        assert_eq!(parse_line("list foo").unwrap_err(), "usage: list");
        assert_eq!(parse_line("count foo").unwrap_err(), "usage: count");
    }

    #[test]
    fn test_invalid_utf8_line_is_reported() {
        let err = decode_line(b"save \xff\xfe secret\n").unwrap_err();
        assert!(err.contains("not valid UTF-8"));

        let parsed = decode_line(b"save Gabriel secret\n").and_then(parse_line);
        assert_eq!(
            parsed.unwrap(),
            Some(SessionCommand::Save {
                login: "Gabriel".to_string(),
                password: "secret".to_string(),
            })
        );
    }

    #[test]
    fn test_parse_unknown_command() {
        let err = parse_line("delete x").unwrap_err();
        assert!(err.contains("unknown command 'delete'"));
    }
}
