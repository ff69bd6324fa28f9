//! The interactive menu loop.
//!
//! A [`Session`] owns a prompter and a renderer and borrows the API for its
//! lifetime. Each menu action collects its input through the prompter, calls
//! exactly one API method and renders the returned `CmdResult`. Operation
//! errors (unknown ID, failed save) are printed and the loop carries on; only
//! I/O on the terminal itself or end of input stops it.

use super::menu::MenuAction;
use super::prompt::{title_case, Prompter};
use super::render::Renderer;
use shelfapp::api::{CmdMessage, CmdResult, ShelfApi};
use shelfapp::error::{Result, ShelfError};
use shelfapp::model::{BookField, BookStatus};
use shelfapp::store::backend::StorageBackend;
use shelfapp::store::LoadReport;
use std::io::{BufRead, Write};
use tracing::debug;

const ID_ERROR: &str = "Enter a book ID (a whole number)";
const NAME_ERROR: &str = "The value must not be empty";

pub struct Session<'a, B: StorageBackend, R, W> {
    api: &'a mut ShelfApi<B>,
    prompter: Prompter<R, W>,
    renderer: Renderer,
    current_year: i32,
    title_case: bool,
}

impl<'a, B, R, W> Session<'a, B, R, W>
where
    B: StorageBackend,
    R: BufRead,
    W: Write,
{
    pub fn new(
        api: &'a mut ShelfApi<B>,
        prompter: Prompter<R, W>,
        renderer: Renderer,
        current_year: i32,
        title_case: bool,
    ) -> Self {
        Self {
            api,
            prompter,
            renderer,
            current_year,
            title_case,
        }
    }

    /// Run until the user exits or input ends.
    pub fn run(&mut self) -> Result<()> {
        self.show_load_report()?;
        match self.menu_loop() {
            Err(ShelfError::InputClosed) => {
                debug!("input closed, ending session");
                Ok(())
            }
            other => other,
        }
    }

    fn menu_loop(&mut self) -> Result<()> {
        loop {
            let labels: Vec<&str> = MenuAction::ALL.iter().map(|a| a.label()).collect();
            let menu = self.renderer.options("Menu:", &labels);
            let choice = self.prompter.choose(&menu, MenuAction::ALL.len())?;
            let Some(action) = MenuAction::from_choice(choice) else {
                continue;
            };
            if action == MenuAction::Exit {
                return Ok(());
            }

            self.dispatch(action)?;

            let again = self
                .prompter
                .choose("Continue?\n1. Yes\n2. No", 2)?;
            if again == 2 {
                return Ok(());
            }
        }
    }

    fn dispatch(&mut self, action: MenuAction) -> Result<()> {
        debug!(?action, "menu action");
        let outcome = match action {
            MenuAction::Add => self.handle_add(),
            MenuAction::Remove => self.handle_remove(),
            MenuAction::Search => self.handle_search(),
            MenuAction::List => self.handle_list(),
            MenuAction::UpdateStatus => self.handle_update_status(),
            MenuAction::Exit => Ok(()),
        };
        match outcome {
            Err(ShelfError::InputClosed) => Err(ShelfError::InputClosed),
            Err(e) => {
                let line = self.renderer.message(&CmdMessage::error(e.to_string()));
                self.prompter.say(&line)
            }
            Ok(()) => Ok(()),
        }
    }

    fn handle_add(&mut self) -> Result<()> {
        let title = self.ask_name("Enter the book title:")?;
        let author = self.ask_name("Enter the book author:")?;
        let max_year = self.current_year;
        let year = self.prompter.ask(
            "Enter the publication year:",
            |y: &i32| (1..=max_year).contains(y),
            &format!("Enter a year from 1 to {}", max_year),
        )?;

        let result = self.api.add_book(title, author, year)?;
        self.show_messages(&result)
    }

    fn handle_remove(&mut self) -> Result<()> {
        let id = self.ask_id("Enter the ID of the book to remove:")?;
        let result = self.api.remove_book(id)?;
        self.show_messages(&result)
    }

    fn handle_search(&mut self) -> Result<()> {
        let labels: Vec<&str> = BookField::ALL.iter().map(|f| f.label()).collect();
        let prompt = self.renderer.options("Search by:", &labels);
        let choice = self.prompter.choose(&prompt, BookField::ALL.len())?;
        let field = BookField::ALL[choice - 1];
        let query = self.prompter.ask_text("Enter a search query:")?;

        let result = self.api.search_books(field, &query)?;
        self.show_messages(&result)?;
        for book in &result.listed_books {
            let line = self.renderer.book_line(book);
            self.prompter.say(&line)?;
        }
        Ok(())
    }

    fn handle_list(&mut self) -> Result<()> {
        let result = self.api.list_books()?;
        if result.listed_books.is_empty() {
            return self.show_messages(&result);
        }
        for line in self.renderer.book_table(&result.listed_books) {
            self.prompter.say(&line)?;
        }
        Ok(())
    }

    fn handle_update_status(&mut self) -> Result<()> {
        let id = self.ask_id("Enter the book ID:")?;
        let labels: Vec<&str> = BookStatus::ALL.iter().map(|s| s.label()).collect();
        let prompt = self.renderer.options("New status:", &labels);
        let choice = self.prompter.choose(&prompt, BookStatus::ALL.len())?;
        let status = BookStatus::ALL[choice - 1];

        let result = self.api.update_status(id, status)?;
        self.show_messages(&result)
    }

    fn ask_name(&mut self, prompt: &str) -> Result<String> {
        let value: String = self
            .prompter
            .ask(prompt, |s: &String| !s.is_empty(), NAME_ERROR)?;
        Ok(if self.title_case {
            title_case(&value)
        } else {
            value
        })
    }

    fn ask_id(&mut self, prompt: &str) -> Result<u64> {
        self.prompter.ask(prompt, |_: &u64| true, ID_ERROR)
    }

    fn show_messages(&mut self, result: &CmdResult) -> Result<()> {
        for message in &result.messages {
            let line = self.renderer.message(message);
            self.prompter.say(&line)?;
        }
        Ok(())
    }

    fn show_load_report(&mut self) -> Result<()> {
        if let LoadReport::Recovered { reason } = self.api.load_report() {
            let warning = CmdMessage::warning(format!(
                "Warning: could not read {} ({}). Starting with an empty catalog; \
                 the file will be overwritten on the next change.",
                self.api.store().location().display(),
                reason
            ));
            let line = self.renderer.message(&warning);
            self.prompter.say(&line)?;
        }
        Ok(())
    }
}
