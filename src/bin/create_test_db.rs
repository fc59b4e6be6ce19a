use std::error::Error;
use std::path::Path;
use std::process::exit;

use clap::Parser;
use rusqlite::Connection;
use time::macros::date;

use outlay_rs::{
    Category, Transaction, TransactionType, count_transactions, create_transaction, initialize_db,
};

/// A utility for creating a test database for the outlay_rs web server.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,
}

/// Create and populate a database for manual testing.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    match output_path.extension() {
        None => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        Some(extension) if extension.is_empty() => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        _ => {}
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    println!("Creating database at {output_path:#?}");
    let conn = Connection::open(output_path)?;

    initialize_db(&conn)?;

    println!("Creating sample transactions...");

    let samples = [
        Transaction::build(
            50.0,
            TransactionType::Expense,
            Category::Food,
            date!(2024 - 01 - 01),
        )
        .description("lunch"),
        Transaction::build(
            15.5,
            TransactionType::Expense,
            Category::Transportation,
            date!(2024 - 01 - 02),
        )
        .description("bus fare"),
        Transaction::build(
            200.0,
            TransactionType::Income,
            Category::Food,
            date!(2024 - 01 - 02),
        ),
        Transaction::build(
            120.0,
            TransactionType::Expense,
            Category::Utilities,
            date!(2024 - 01 - 05),
        )
        .description("power bill"),
        Transaction::build(
            35.0,
            TransactionType::Expense,
            Category::Entertainment,
            date!(2024 - 01 - 06),
        )
        .description("movie night"),
    ];

    for sample in samples {
        create_transaction(sample, &conn)?;
    }

    let count = count_transactions(&conn)?;
    println!("Success! Created {count} transactions.");

    Ok(())
}
