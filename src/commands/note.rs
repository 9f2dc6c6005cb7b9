use super::{confirm, App};
use crate::libs::messages::Message;
use crate::libs::notes::{Note, NotePatch, Notes};
use crate::libs::view::View;
use crate::{msg_error, msg_info, msg_success, msg_warning};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct NoteArgs {
    #[command(subcommand)]
    command: Option<NoteCommand>,
}

#[derive(Debug, Subcommand)]
enum NoteCommand {
    /// Write a new note
    Add {
        title: String,
        content: String,
        /// Attach the note to a verse: BOOK CHAPTER VERSE
        #[arg(long, num_args = 3, value_names = ["BOOK", "CHAPTER", "VERSE"])]
        verse: Option<Vec<String>>,
    },
    /// List notes
    List,
    /// Change the title or content of a note
    Edit {
        id: String,
        #[arg(short, long)]
        title: Option<String>,
        #[arg(short, long)]
        content: Option<String>,
    },
    /// Delete a note by id
    Remove { id: String },
    /// Delete every note
    Clear {
        #[arg(short, long)]
        yes: bool,
    },
}

pub fn cmd(app: &App, args: NoteArgs) -> Result<()> {
    let mut notes = Notes::new(app.kv.clone())?;

    match args.command {
        Some(NoteCommand::Add { title, content, verse }) => {
            let mut note = Note::new(&title, &content);
            if let Some(verse) = verse {
                note = attach(note, &verse)?;
            }
            match notes.add(note) {
                Ok(()) => msg_success!(Message::NoteAdded(title)),
                Err(e) => msg_error!(Message::NoteSaveFailed(e.to_string())),
            }
        }
        Some(NoteCommand::List) | None => {
            if notes.all().is_empty() {
                msg_info!(Message::NoNotes);
            } else {
                View::notes(notes.all());
            }
        }
        Some(NoteCommand::Edit { id, title, content }) => {
            let patch = NotePatch {
                title,
                content,
                ..Default::default()
            };
            match notes.update(&id, patch) {
                Ok(true) => msg_success!(Message::NoteUpdated),
                Ok(false) => msg_warning!(Message::NoteNotFound(id)),
                Err(e) => msg_error!(Message::NoteSaveFailed(e.to_string())),
            }
        }
        Some(NoteCommand::Remove { id }) => match notes.remove(&id) {
            Ok(true) => msg_success!(Message::NoteRemoved),
            Ok(false) => msg_warning!(Message::NoteNotFound(id)),
            Err(e) => msg_error!(Message::NoteSaveFailed(e.to_string())),
        },
        Some(NoteCommand::Clear { yes }) => {
            if !confirm(Message::ConfirmClearNotes, yes)? {
                msg_info!(Message::OperationCancelled);
                return Ok(());
            }
            match notes.clear() {
                Ok(()) => msg_success!(Message::NotesCleared),
                Err(e) => msg_error!(Message::NoteSaveFailed(e.to_string())),
            }
        }
    }
    Ok(())
}

fn attach(note: Note, verse: &[String]) -> Result<Note> {
    let [book, chapter, number] = verse else {
        anyhow::bail!("expected BOOK CHAPTER VERSE");
    };
    Ok(note.at_verse(book, chapter.parse()?, number.parse()?))
}
