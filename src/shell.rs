//! Interactive menu shell
//!
//! The interaction boundary: core errors are caught here, reported to the
//! user, and the menu loop continues. Only store I/O at startup or
//! shutdown is fatal to the process.

use std::io::{BufRead, Write};

use crate::{
    error::{AppError, AppResult},
    models::{Book, Loan},
    services::Services,
};

const MENU: &str = "\
1. Add Book
2. Remove Book
3. List Books
4. Search Books
5. Lend Book
6. Return Book
7. List Loans
8. Search Loans
9. Exit";

const SEPARATOR: &str = "------------------------";

/// Menu-driven shell over arbitrary input/output handles.
///
/// Generic over [`BufRead`]/[`Write`] so tests can drive it with scripted
/// input and capture the output.
pub struct Shell<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Run the menu loop until the user exits.
    ///
    /// Any unrecognized choice exits, as does end of input. Errors raised
    /// by the services are printed and the loop keeps going.
    pub fn run(&mut self, services: &mut Services) -> AppResult<()> {
        loop {
            writeln!(self.output, "{}", MENU)?;
            let Some(choice) = self.read_token("Enter your choice: ")? else {
                break;
            };

            let outcome = match choice.as_str() {
                "1" => self.add_book(services),
                "2" => self.remove_book(services),
                "3" => self.list_books(services),
                "4" => self.search_books(services),
                "5" => self.lend_book(services),
                "6" => self.return_book(services),
                "7" => self.list_loans(services),
                "8" => self.search_loans(services),
                _ => break,
            };

            if let Err(error) = outcome {
                tracing::warn!("{}", error);
                writeln!(self.output, "Error: {}", error)?;
            }
        }
        Ok(())
    }

    fn add_book(&mut self, services: &mut Services) -> AppResult<()> {
        let Some(title) = self.read_token("Enter title: ")? else {
            return Ok(());
        };
        let Some(author) = self.read_token("Enter author: ")? else {
            return Ok(());
        };
        let Some(isbn) = self.read_token("Enter ISBN: ")? else {
            return Ok(());
        };

        services.catalog.add(Book {
            title,
            author,
            isbn,
        })?;
        writeln!(self.output, "Book added successfully.")?;
        Ok(())
    }

    fn remove_book(&mut self, services: &mut Services) -> AppResult<()> {
        let Some(isbn) = self.read_token("Enter ISBN of the book to remove: ")? else {
            return Ok(());
        };
        services.catalog.remove(&isbn)?;
        writeln!(self.output, "Book removed successfully.")?;
        Ok(())
    }

    fn list_books(&mut self, services: &mut Services) -> AppResult<()> {
        if services.catalog.is_empty() {
            writeln!(self.output, "The library is empty.")?;
            return Ok(());
        }
        writeln!(self.output, "Books in the library:")?;
        for book in services.catalog.list() {
            self.print_book(book)?;
        }
        Ok(())
    }

    fn search_books(&mut self, services: &mut Services) -> AppResult<()> {
        let Some(query) = self.read_line("Enter search query (title or author): ")? else {
            return Ok(());
        };
        let results = services.catalog.search(&query);
        if results.is_empty() {
            writeln!(self.output, "No matching books found.")?;
            return Ok(());
        }
        writeln!(self.output, "Matching Books:")?;
        for book in results {
            self.print_book(book)?;
        }
        Ok(())
    }

    fn lend_book(&mut self, services: &mut Services) -> AppResult<()> {
        let Some(customer_name) = self.read_line("Enter customer name: ")? else {
            return Ok(());
        };
        let Some(isbn) = self.read_token("Enter ISBN of the book to lend: ")? else {
            return Ok(());
        };
        let Some(days_to_due) = self.read_number("Enter days to due: ")? else {
            return Ok(());
        };

        services.loans.lend(customer_name, isbn, days_to_due);
        writeln!(self.output, "Book lent successfully.")?;
        Ok(())
    }

    fn return_book(&mut self, services: &mut Services) -> AppResult<()> {
        let Some(customer_name) = self.read_line("Enter customer name: ")? else {
            return Ok(());
        };
        let Some(isbn) = self.read_token("Enter ISBN of the book to return: ")? else {
            return Ok(());
        };
        services.loans.return_loan(&customer_name, &isbn)?;
        writeln!(self.output, "Book returned successfully.")?;
        Ok(())
    }

    fn list_loans(&mut self, services: &mut Services) -> AppResult<()> {
        if services.loans.is_empty() {
            writeln!(self.output, "No books are currently on loan.")?;
            return Ok(());
        }
        writeln!(self.output, "Books on loan:")?;
        for loan in services.loans.list() {
            self.print_loan(loan)?;
        }
        Ok(())
    }

    fn search_loans(&mut self, services: &mut Services) -> AppResult<()> {
        let Some(customer_name) = self.read_line("Enter customer name for loan search: ")? else {
            return Ok(());
        };
        let results = services.loans.search_by_customer(&customer_name);
        if results.is_empty() {
            writeln!(self.output, "No loans found for the customer.")?;
            return Ok(());
        }
        writeln!(self.output, "Loans for {}:", customer_name)?;
        for loan in results {
            self.print_loan(loan)?;
        }
        Ok(())
    }

    fn print_book(&mut self, book: &Book) -> AppResult<()> {
        writeln!(self.output, "Title: {}", book.title)?;
        writeln!(self.output, "Author: {}", book.author)?;
        writeln!(self.output, "ISBN: {}", book.isbn)?;
        writeln!(self.output, "{}", SEPARATOR)?;
        Ok(())
    }

    fn print_loan(&mut self, loan: &Loan) -> AppResult<()> {
        writeln!(self.output, "Customer Name: {}", loan.customer_name)?;
        writeln!(self.output, "ISBN: {}", loan.isbn)?;
        writeln!(self.output, "Due Date: {}", loan.due_date.format("%c"))?;
        writeln!(self.output, "{}", SEPARATOR)?;
        Ok(())
    }

    /// Prompt and read one full line, trimmed. `None` at end of input.
    fn read_line(&mut self, prompt: &str) -> AppResult<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Prompt until a line with a first whitespace-delimited token arrives
    /// and return that token. `None` at end of input.
    fn read_token(&mut self, prompt: &str) -> AppResult<Option<String>> {
        loop {
            let Some(line) = self.read_line(prompt)? else {
                return Ok(None);
            };
            if let Some(token) = line.split_whitespace().next() {
                return Ok(Some(token.to_string()));
            }
        }
    }

    /// Read a single token and parse it as a signed day count.
    fn read_number(&mut self, prompt: &str) -> AppResult<Option<i64>> {
        let Some(token) = self.read_token(prompt)? else {
            return Ok(None);
        };
        let number = token
            .parse()
            .map_err(|_| AppError::BadValue(format!("{} is not a number", token)))?;
        Ok(Some(number))
    }
}
