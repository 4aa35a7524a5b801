//! Line-oriented front end for the roster form.
//!
//! Each input line is one user action. `set` lines play the role of typing
//! into a form field; the other commands mirror the form's buttons.

use std::str::FromStr;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info, instrument};

use crate::clients::RosterClient;
use crate::controller::{FormView, Mode, SubmitOutcome};
use crate::domain::{DraftEdit, Employee, Field, Gender};
use crate::error::{ConsoleError, RosterError};

pub const HELP: &str = "\
Commands:
  set <field> [value]   fill a form field (name, email, phone, gender, position, id, image)
  submit                add the draft, or save it when editing
  edit <id>             load an employee into the form
  delete <id>           remove an employee
  cancel                clear the form
  search [query]        list employees whose name or ID contains the query
  list                  list all employees
  show                  show the form
  json                  print all employees as JSON
  help                  show this help
  quit                  leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Set(DraftEdit),
    Submit,
    Edit(String),
    Delete(String),
    Cancel,
    Search(String),
    List,
    Show,
    Json,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = ConsoleError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim_start();
        let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let args = rest.trim();

        match word.to_ascii_lowercase().as_str() {
            "set" => parse_set(rest.trim_start()).map(Command::Set),
            "submit" => Ok(Command::Submit),
            "edit" => required(args, "edit", "an employee ID").map(Command::Edit),
            "delete" => required(args, "delete", "an employee ID").map(Command::Delete),
            "cancel" => Ok(Command::Cancel),
            "search" => Ok(Command::Search(args.to_string())),
            "list" => Ok(Command::List),
            "show" => Ok(Command::Show),
            "json" => Ok(Command::Json),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            _ => Err(ConsoleError::UnknownCommand(word.to_string())),
        }
    }
}

fn required(rest: &str, command: &'static str, argument: &'static str) -> Result<String, ConsoleError> {
    if rest.is_empty() {
        return Err(ConsoleError::MissingArgument { command, argument });
    }
    Ok(rest.to_string())
}

/// Text fields take everything after the single separator verbatim, so
/// surrounding spaces reach the draft as typed. Gender is trimmed.
fn parse_set(rest: &str) -> Result<DraftEdit, ConsoleError> {
    let (field, value) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
    if field.is_empty() {
        return Err(ConsoleError::MissingArgument {
            command: "set",
            argument: "a field name",
        });
    }

    let field: Field = field.parse().map_err(ConsoleError::UnknownField)?;
    let value = value.to_string();
    let edit = match field {
        Field::Name => DraftEdit::Name(value),
        Field::Email => DraftEdit::Email(value),
        Field::Phone => DraftEdit::Phone(value),
        Field::Gender if value.trim().is_empty() => DraftEdit::Gender(None),
        Field::Gender => {
            let gender: Gender = value.trim().parse().map_err(ConsoleError::UnknownGender)?;
            DraftEdit::Gender(Some(gender))
        }
        Field::Position => DraftEdit::Position(value),
        Field::Id => DraftEdit::Id(value),
        Field::Image => {
            let image = value.trim();
            DraftEdit::Image((!image.is_empty()).then(|| image.to_string()))
        }
    };
    Ok(edit)
}

/// Reads commands from `input` until it ends or `quit` is entered.
///
/// Validation and duplicate rejections are printed and the session goes on;
/// losing the roster actor or the output ends it with an error.
pub async fn run_console<R, W>(client: &RosterClient, input: R, output: &mut W) -> Result<(), ConsoleError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    write_line(output, "Employee Registration Form (type `help` for commands)").await?;

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) if e.is_recoverable() => {
                debug!(error = %e, "Rejected console input");
                write_line(output, &format!("Error: {e}")).await?;
                continue;
            }
            Err(e) => return Err(e),
        };

        if command == Command::Quit {
            break;
        }
        execute(client, command, output).await?;
    }

    info!("Console session ended");
    Ok(())
}

#[instrument(skip(client, output))]
async fn execute<W>(client: &RosterClient, command: Command, output: &mut W) -> Result<(), ConsoleError>
where
    W: AsyncWrite + Unpin,
{
    match command {
        Command::Set(edit) => client.edit_draft(edit).await?,
        Command::Submit => {
            let message = match client.submit().await {
                Ok(SubmitOutcome::Added { id }) => format!("Employee {id} added."),
                Ok(SubmitOutcome::Updated { id, .. }) => format!("Employee {id} updated."),
                Err(RosterError::Validation(e)) => format!("Error: {e}"),
                Err(RosterError::DuplicateId(_)) => "Duplicate detected.".to_string(),
                Err(e) => return Err(e.into()),
            };
            write_line(output, &message).await?;
        }
        Command::Edit(id) => match client.get(id.clone()).await? {
            Some(record) => {
                client.edit(record).await?;
                let view = client.view().await?;
                write_line(output, &render_form(&view)).await?;
            }
            None => write_line(output, &format!("No employee with ID {id}.")).await?,
        },
        Command::Delete(id) => {
            let message = match client.delete(id.clone()).await? {
                Some(_) => format!("Employee {id} deleted."),
                None => format!("No employee with ID {id}."),
            };
            write_line(output, &message).await?;
        }
        Command::Cancel => {
            client.cancel().await?;
            write_line(output, "Form cleared.").await?;
        }
        Command::Search(query) => {
            let employees = client.search(query).await?;
            write_line(output, &render_list(&employees, "No matching employees.")).await?;
        }
        Command::List => {
            let employees = client.list().await?;
            write_line(output, &render_list(&employees, "No employees yet.")).await?;
        }
        Command::Show => {
            let view = client.view().await?;
            write_line(output, &render_form(&view)).await?;
        }
        Command::Json => {
            let employees = client.list().await?;
            write_line(output, &serde_json::to_string_pretty(&employees)?).await?;
        }
        Command::Help => write_line(output, HELP).await?,
        Command::Quit => {}
    }
    Ok(())
}

async fn write_line<W>(output: &mut W, text: &str) -> Result<(), ConsoleError>
where
    W: AsyncWrite + Unpin,
{
    output.write_all(text.as_bytes()).await?;
    output.write_all(b"\n").await?;
    output.flush().await?;
    Ok(())
}

pub fn render_employee(employee: &Employee) -> String {
    let gender = employee.gender.map(|g| g.to_string()).unwrap_or_default();
    let mut text = format!(
        "Name: {}\nEmail: {}\nGender: {}\nPhone: {}\nPosition: {}\nID: {}",
        employee.name, employee.email, gender, employee.phone, employee.position, employee.id
    );
    if let Some(image) = &employee.image {
        text.push_str(&format!("\nImage: {image}"));
    }
    text
}

pub fn render_list(employees: &[Employee], empty: &str) -> String {
    if employees.is_empty() {
        return empty.to_string();
    }
    employees
        .iter()
        .map(render_employee)
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub fn render_form(view: &FormView) -> String {
    let mut text = format!("== {} ==\n{}", view.mode.heading(), render_employee(&view.draft));
    if let Some(error) = &view.error {
        text.push_str(&format!("\nError: {error}"));
    }
    text.push_str(&format!("\n[{}]", view.mode.submit_label()));
    if matches!(view.mode, Mode::Editing { .. }) {
        text.push_str(" [Cancel]");
    }
    text.push_str(&format!("\nEmployees on roster: {}", view.record_count));
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use crate::mock_framework::{create_mock_client, expect_edit, expect_get, expect_search, expect_view};

    fn amy() -> Employee {
        Employee::new("1234567890123", "Amy", "a@b.co", "12345", Gender::Female, "eng")
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!("submit".parse::<Command>().unwrap(), Command::Submit);
        assert_eq!("  LIST ".parse::<Command>().unwrap(), Command::List);
        assert_eq!("exit".parse::<Command>().unwrap(), Command::Quit);
        assert_eq!("search".parse::<Command>().unwrap(), Command::Search(String::new()));
        assert_eq!("search 123".parse::<Command>().unwrap(), Command::Search("123".into()));
        assert_eq!(
            "delete 1234567890123".parse::<Command>().unwrap(),
            Command::Delete("1234567890123".into())
        );
    }

    #[test]
    fn test_parse_set() {
        assert_eq!(
            "set name Amy Lee".parse::<Command>().unwrap(),
            Command::Set(DraftEdit::Name("Amy Lee".into()))
        );
        assert_eq!(
            "set gender Female".parse::<Command>().unwrap(),
            Command::Set(DraftEdit::Gender(Some(Gender::Female)))
        );
        assert_eq!(
            "set gender".parse::<Command>().unwrap(),
            Command::Set(DraftEdit::Gender(None))
        );
        assert_eq!(
            "set image".parse::<Command>().unwrap(),
            Command::Set(DraftEdit::Image(None))
        );
        assert_eq!(
            "set email".parse::<Command>().unwrap(),
            Command::Set(DraftEdit::Email(String::new()))
        );
    }

    #[test]
    fn test_set_keeps_text_verbatim() {
        assert_eq!(
            "set name   ".parse::<Command>().unwrap(),
            Command::Set(DraftEdit::Name("  ".into()))
        );
        assert_eq!(
            "set position  lead ".parse::<Command>().unwrap(),
            Command::Set(DraftEdit::Position(" lead ".into()))
        );
        assert_eq!(
            "  set gender  male ".parse::<Command>().unwrap(),
            Command::Set(DraftEdit::Gender(Some(Gender::Male)))
        );
        assert_eq!(
            "set image   ".parse::<Command>().unwrap(),
            Command::Set(DraftEdit::Image(None))
        );
        assert_eq!(
            "edit  1234567890123 ".parse::<Command>().unwrap(),
            Command::Edit("1234567890123".into())
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!("fire".parse::<Command>(), Err(ConsoleError::UnknownCommand(c)) if c == "fire"));
        assert!(matches!("edit".parse::<Command>(), Err(ConsoleError::MissingArgument { command: "edit", .. })));
        assert!(matches!("set".parse::<Command>(), Err(ConsoleError::MissingArgument { command: "set", .. })));
        assert!(matches!("set salary 10".parse::<Command>(), Err(ConsoleError::UnknownField(f)) if f == "salary"));
        assert!(matches!("set gender other".parse::<Command>(), Err(ConsoleError::UnknownGender(g)) if g == "other"));
        assert!("set gender other".parse::<Command>().unwrap_err().is_recoverable());
    }

    #[test]
    fn test_render_form() {
        let view = FormView {
            mode: Mode::Editing { active_id: amy().id },
            draft: amy(),
            error: Some(ValidationError::MissingPosition),
            record_count: 1,
        };
        let text = render_form(&view);
        assert!(text.starts_with("== Edit Employee =="));
        assert!(text.contains("Gender: female"));
        assert!(text.contains("Error: Position is required."));
        assert!(text.contains("[Update Employee] [Cancel]"));
        assert!(text.ends_with("Employees on roster: 1"));

        let blank = FormView {
            mode: Mode::Adding,
            draft: Employee::default(),
            error: None,
            record_count: 0,
        };
        let text = render_form(&blank);
        assert!(text.contains("[Add Employee]\nEmployees on roster: 0"));
        assert!(!text.contains("[Cancel]"));
    }

    #[tokio::test]
    async fn test_edit_loads_record_then_shows_form() {
        let (client, mut receiver) = create_mock_client(10);
        let mut output = Vec::new();

        let script = async {
            let (id, responder) = expect_get(&mut receiver).await.expect("Expected Get request");
            assert_eq!(id, "1234567890123");
            responder.send(Ok(Some(amy()))).unwrap();

            let (record, responder) = expect_edit(&mut receiver).await.expect("Expected Edit request");
            assert_eq!(record, amy());
            responder.send(Ok(())).unwrap();

            let responder = expect_view(&mut receiver).await.expect("Expected View request");
            responder
                .send(Ok(FormView {
                    mode: Mode::Editing { active_id: amy().id },
                    draft: amy(),
                    error: None,
                    record_count: 1,
                }))
                .unwrap();
        };

        let input: &[u8] = b"edit 1234567890123\nquit\n";
        let (result, ()) = tokio::join!(run_console(&client, input, &mut output), script);
        result.unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("== Edit Employee =="));
        assert!(text.contains("Name: Amy"));
    }

    #[tokio::test]
    async fn test_search_prints_results_and_bad_lines_do_not_stop() {
        let (client, mut receiver) = create_mock_client(10);
        let mut output = Vec::new();

        let script = async {
            let (query, responder) = expect_search(&mut receiver).await.expect("Expected Search request");
            assert_eq!(query, "123");
            responder.send(Ok(vec![amy()])).unwrap();
        };

        let input: &[u8] = b"bogus\n\nsearch 123\n";
        let (result, ()) = tokio::join!(run_console(&client, input, &mut output), script);
        result.unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Error: Unknown command: bogus"));
        assert!(text.contains("ID: 1234567890123"));
    }

    #[tokio::test]
    async fn test_lost_actor_ends_session() {
        let (client, receiver) = create_mock_client(1);
        drop(receiver);
        let mut output = Vec::new();

        let input: &[u8] = b"list\n";
        let err = run_console(&client, input, &mut output).await.unwrap_err();
        assert!(matches!(err, ConsoleError::Roster(RosterError::ActorCommunication(_))));
        assert!(!err.is_recoverable());
    }
}
